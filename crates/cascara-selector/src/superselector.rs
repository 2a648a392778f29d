//! The superselector relation.
//!
//! Selector A is a superselector of B when every element B matches, A also
//! matches. `@extend` uses the relation to decide which rules a selector
//! reaches, and the output stage uses it to drop selectors made redundant
//! by broader ones. A wrong answer silently changes the generated CSS, so
//! the relation errs towards `false` whenever containment can't be proven.

use std::collections::HashMap;
use std::slice;

use crate::combinator::Combinator;
use crate::complex::{ComplexSelector, ComplexSelectorComponent};
use crate::compound::CompoundSelector;
use crate::list::SelectorList;
use crate::pseudo::PseudoSelector;
use crate::simple::{QualifiedName, SimpleSelector};

/// Pseudo-classes that match only when (at least) one of their arguments
/// matches, so any argument is a subselector of the pseudo.
const SUBSELECTOR_PSEUDOS: [&str; 6] = ["is", "matches", "where", "any", "nth-child", "nth-last-child"];

/// Whether every list member of `list2` has a superselector in `list1`.
#[must_use]
pub fn list_is_superselector(list1: &[ComplexSelector], list2: &[ComplexSelector]) -> bool {
    list2
        .iter()
        .all(|complex2| list1.iter().any(|complex1| complex1.is_superselector(complex2)))
}

/// Whether the component sequence `complex1` matches every element
/// `complex2` matches.
///
/// Identical sequences are always superselectors of each other. Otherwise
/// sequences with trailing or repeated combinators are never compared.
///
/// Each component of `complex1` is aligned with a component of `complex2`
/// at or after the previous alignment. Descendant and `~` relations may skip
/// components of `complex2`; `>` and `+` may not. A component can often be
/// aligned at more than one place (`.a > .b .c` against `.a .a > .b .c`),
/// so every candidate is tried before giving up. Both sides of every
/// recursive step are suffixes of the inputs, so results are memoized by
/// suffix length and the search stays polynomial.
#[must_use]
pub fn complex_is_superselector(
    complex1: &[ComplexSelectorComponent],
    complex2: &[ComplexSelectorComponent],
) -> bool {
    if !complex1.is_empty() && complex1 == complex2 {
        return true;
    }

    let (Some(last1), Some(last2)) = (complex1.last(), complex2.last()) else {
        return false;
    };
    if !last1.combinators().is_empty() || !last2.combinators().is_empty() {
        return false;
    }
    if has_multiple_combinators(complex1) || has_multiple_combinators(complex2) {
        return false;
    }

    align(complex1, complex2, None, &mut HashMap::new())
}

/// Alignment results keyed by the lengths of the two remaining suffixes
/// and the combinator preceding them.
type AlignMemo = HashMap<(usize, usize, Option<Combinator>), bool>;

/// Whether some alignment of `complex1` onto `complex2` exists, given that
/// the component before `complex1[0]` was followed by `previous`.
fn align(
    complex1: &[ComplexSelectorComponent],
    complex2: &[ComplexSelectorComponent],
    previous: Option<Combinator>,
    memo: &mut AlignMemo,
) -> bool {
    let key = (complex1.len(), complex2.len(), previous);
    if let Some(&result) = memo.get(&key) {
        return result;
    }
    let result = align_uncached(complex1, complex2, previous, memo);
    let _ = memo.insert(key, result);
    result
}

fn align_uncached(
    complex1: &[ComplexSelectorComponent],
    complex2: &[ComplexSelectorComponent],
    previous: Option<Combinator>,
    memo: &mut AlignMemo,
) -> bool {
    // More complex selectors are never superselectors of less complex ones.
    if complex1.is_empty() || complex1.len() > complex2.len() {
        return false;
    }

    let component1 = &complex1[0];
    if complex1.len() == 1 {
        let Some((last2, parents)) = complex2.split_last() else {
            return false;
        };
        return compound_is_superselector(
            component1.selector().simples(),
            last2.selector().simples(),
            parents,
        );
    }

    let combinator1 = component1.combinators().first().copied();
    let rest1 = &complex1[1..];

    // The last component of `complex2` is left for the rest of `complex1`.
    for end in 0..complex2.len() - 1 {
        let component2 = &complex2[end];
        let skipped = &complex2[..end];

        if !compatible_with_previous_combinator(previous, skipped)
            || !Combinator::is_supercombinator(combinator1, component2.combinators().first().copied())
            || !compound_is_superselector(
                component1.selector().simples(),
                component2.selector().simples(),
                skipped,
            )
        {
            continue;
        }

        let rest2 = &complex2[end + 1..];
        if rest1.len() == 1 && !final_combinator_allows(combinator1, rest2) {
            continue;
        }

        if align(rest1, rest2, combinator1, memo) {
            return true;
        }
    }

    false
}

/// Whether components of `complex2` skipped between two aligned positions
/// are allowed by the combinator joining those positions in `complex1`.
fn compatible_with_previous_combinator(
    previous: Option<Combinator>,
    skipped: &[ComplexSelectorComponent],
) -> bool {
    if skipped.is_empty() {
        return true;
    }
    match previous {
        None => true,
        // The child and next-sibling combinators require the *immediate*
        // next component to be the superselector.
        Some(Combinator::Child | Combinator::NextSibling) => false,
        // The following-sibling combinator allows intermediate components,
        // but only if they are all siblings.
        Some(Combinator::FollowingSibling) => skipped.iter().all(|component| {
            Combinator::is_supercombinator(previous, component.combinators().first().copied())
        }),
    }
}

/// Checks the components between the second-to-last alignment and the end
/// of `complex2` against the combinator that precedes the last component of
/// `complex1`.
fn final_combinator_allows(combinator1: Option<Combinator>, rest2: &[ComplexSelectorComponent]) -> bool {
    let between = &rest2[..rest2.len().saturating_sub(1)];
    match combinator1 {
        None => true,
        // `.foo ~ .bar` is only a superselector of selectors that
        // exclusively contain sibling combinators from there on.
        Some(Combinator::FollowingSibling) => between.iter().all(|component| {
            Combinator::is_supercombinator(combinator1, component.combinators().first().copied())
        }),
        // `.foo > .bar` and `.foo + .bar` allow nothing in between.
        Some(Combinator::Child | Combinator::NextSibling) => between.is_empty(),
    }
}

fn has_multiple_combinators(complex: &[ComplexSelectorComponent]) -> bool {
    complex
        .iter()
        .any(|component| component.combinators().len() > 1)
}

/// Whether the compound `compound1` matches every element `compound2`
/// matches.
///
/// `parents` are components that precede `compound2` in its complex
/// selector without being aligned with anything. Only selector
/// pseudo-classes like `:is(.a .b)` look at them.
#[must_use]
pub fn compound_is_superselector(
    compound1: &[SimpleSelector],
    compound2: &[SimpleSelector],
    parents: &[ComplexSelectorComponent],
) -> bool {
    // A compound that matches nothing is contained in everything.
    if is_unsatisfiable(compound2) {
        return true;
    }

    // Pseudo-elements change the target of a compound selector rather than
    // narrowing it, so both sides must have the same one, and the selectors
    // before and after it are compared separately.
    match (find_pseudo_element(compound1), find_pseudo_element(compound2)) {
        (Some((index1, element1)), Some((index2, element2))) => {
            element1.is_superselector(element2)
                && components_are_superselector(&compound1[..index1], &compound2[..index2], parents)
                && components_are_superselector(
                    &compound1[index1 + 1..],
                    &compound2[index2 + 1..],
                    parents,
                )
        }
        (Some(_), None) | (None, Some(_)) => false,
        (None, None) => components_are_superselector(compound1, compound2, parents),
    }
}

/// Every simple selector of `compound1` must be a superselector of some
/// simple selector of `compound2`.
fn components_are_superselector(
    compound1: &[SimpleSelector],
    compound2: &[SimpleSelector],
    parents: &[ComplexSelectorComponent],
) -> bool {
    if compound1.is_empty() {
        return true;
    }

    let any_element = [SimpleSelector::Universal {
        namespace: Some("*".to_owned()),
    }];
    let compound2 = if compound2.is_empty() {
        &any_element[..]
    } else {
        compound2
    };

    compound1.iter().all(|simple1| match simple1 {
        SimpleSelector::Pseudo(pseudo1) if pseudo1.is_class() && pseudo1.selector().is_some() => {
            selector_pseudo_is_superselector(pseudo1, compound2, parents)
        }
        _ => compound2.iter().any(|simple2| simple1.is_superselector(simple2)),
    })
}

/// Whether no element can match `compound`: it names two different
/// element types in the same namespace, or two different ids.
fn is_unsatisfiable(compound: &[SimpleSelector]) -> bool {
    let mut element_type: Option<&QualifiedName> = None;
    let mut id: Option<&str> = None;

    for simple in compound {
        match simple {
            SimpleSelector::Type(name) => match element_type {
                Some(seen) if seen.namespace == name.namespace && seen.name != name.name => {
                    return true;
                }
                Some(_) => {}
                None => element_type = Some(name),
            },
            SimpleSelector::Id(name) => match id {
                Some(seen) if seen != name => return true,
                Some(_) => {}
                None => id = Some(name),
            },
            _ => {}
        }
    }

    false
}

fn find_pseudo_element(compound: &[SimpleSelector]) -> Option<(usize, &SimpleSelector)> {
    compound.iter().enumerate().find(|(_, simple)| {
        simple
            .as_pseudo()
            .is_some_and(PseudoSelector::is_element)
    })
}

/// The base rule shared by every simple selector kind: equal selectors
/// contain each other, and a selector contains `:is(...)`, `:where(...)`
/// and friends when it contains the subject of each of their arguments.
pub(crate) fn simple_is_superselector(this: &SimpleSelector, other: &SimpleSelector) -> bool {
    if this == other {
        return true;
    }

    let SimpleSelector::Pseudo(pseudo) = other else {
        return false;
    };
    let Some(list) = pseudo.selector() else {
        return false;
    };
    if !pseudo.is_class() || !SUBSELECTOR_PSEUDOS.contains(&pseudo.normalized_name()) {
        return false;
    }

    list.components().iter().all(|complex| {
        complex.components().last().is_some_and(|last| {
            last.selector()
                .simples()
                .iter()
                .any(|simple| this.is_superselector(simple))
        })
    })
}

/// The rule for pseudo selectors: `this` is `SimpleSelector::Pseudo(pseudo)`.
pub(crate) fn pseudo_is_superselector(
    this: &SimpleSelector,
    pseudo: &PseudoSelector,
    other: &SimpleSelector,
) -> bool {
    if simple_is_superselector(this, other) {
        return true;
    }
    let Some(selector) = pseudo.selector() else {
        return false;
    };

    if pseudo.is_element() {
        // `::slotted()` is the only pseudo-element that takes a selector.
        return match other {
            SimpleSelector::Pseudo(other_pseudo)
                if other_pseudo.is_element()
                    && pseudo.normalized_name() == "slotted"
                    && other_pseudo.name() == pseudo.name() =>
            {
                other_pseudo
                    .selector()
                    .is_some_and(|other_selector| selector.is_superselector(other_selector))
            }
            _ => false,
        };
    }

    compound_is_superselector(slice::from_ref(this), slice::from_ref(other), &[])
}

/// Whether the selector pseudo-class `pseudo1` matches every element
/// `compound2` matches.
fn selector_pseudo_is_superselector(
    pseudo1: &PseudoSelector,
    compound2: &[SimpleSelector],
    parents: &[ComplexSelectorComponent],
) -> bool {
    let Some(selector1) = pseudo1.selector() else {
        return false;
    };

    match pseudo1.normalized_name() {
        "is" | "matches" | "any" | "where" => {
            selector_pseudo_args(compound2, pseudo1.name(), true)
                .any(|selector2| selector1.is_superselector(selector2))
                || selector1.components().iter().any(|complex1| {
                    complex1.leading_combinators().is_empty()
                        && complex_is_superselector(
                            complex1.components(),
                            &with_subject(parents, compound2),
                        )
                })
        }

        "has" | "host" | "host-context" => selector_pseudo_args(compound2, pseudo1.name(), true)
            .any(|selector2| selector1.is_superselector(selector2)),

        "slotted" => selector_pseudo_args(compound2, pseudo1.name(), false)
            .any(|selector2| selector1.is_superselector(selector2)),

        // `:not(X)` contains a compound that excludes X by construction: a
        // different element type, a different id, or `:not(Y)` where Y
        // contains X.
        "not" => selector1.components().iter().all(|complex| {
            if complex.is_bogus() {
                return false;
            }
            let Some(last) = complex.components().last() else {
                return false;
            };
            compound2.iter().any(|simple2| match simple2 {
                SimpleSelector::Type(_) => last
                    .selector()
                    .simples()
                    .iter()
                    .any(|simple1| matches!(simple1, SimpleSelector::Type(_)) && simple1 != simple2),
                SimpleSelector::Id(_) => last
                    .selector()
                    .simples()
                    .iter()
                    .any(|simple1| matches!(simple1, SimpleSelector::Id(_)) && simple1 != simple2),
                SimpleSelector::Pseudo(pseudo2) if pseudo2.name() == pseudo1.name() => {
                    pseudo2.selector().is_some_and(|selector2| {
                        list_is_superselector(selector2.components(), slice::from_ref(complex))
                    })
                }
                _ => false,
            })
        }),

        "current" => selector_pseudo_args(compound2, pseudo1.name(), true)
            .any(|selector2| selector1 == selector2),

        "nth-child" | "nth-last-child" => compound2.iter().any(|simple2| {
            simple2.as_pseudo().is_some_and(|pseudo2| {
                pseudo2.name() == pseudo1.name()
                    && pseudo2.argument() == pseudo1.argument()
                    && pseudo2
                        .selector()
                        .is_some_and(|selector2| selector1.is_superselector(selector2))
            })
        }),

        _ => false,
    }
}

/// The selector arguments of every pseudo named `name` in `compound`.
fn selector_pseudo_args<'a>(
    compound: &'a [SimpleSelector],
    name: &'a str,
    is_class: bool,
) -> impl Iterator<Item = &'a SelectorList> {
    compound.iter().filter_map(move |simple| match simple {
        SimpleSelector::Pseudo(pseudo) if pseudo.is_class() == is_class && pseudo.name() == name => {
            pseudo.selector()
        }
        _ => None,
    })
}

/// `parents` followed by a component made of `compound`.
fn with_subject(
    parents: &[ComplexSelectorComponent],
    compound: &[SimpleSelector],
) -> Vec<ComplexSelectorComponent> {
    let mut components = parents.to_vec();
    components.push(CompoundSelector::new(compound.to_vec()).into());
    components
}
