//! [§ 4.1 Selector lists](https://www.w3.org/TR/selectors-4/#grouping)
//!
//! "A list of simple/compound/complex selectors is a comma-separated list
//! of simple, compound, or complex selectors."
//!
//! Besides the list itself this module resolves nesting: replacing `&`
//! with the enclosing rule's selectors.

use std::collections::VecDeque;

use cascara_common::Logger;
use serde::Serialize;

use crate::combinator::Combinator;
use crate::complex::{ComplexSelector, ComplexSelectorComponent};
use crate::compound::CompoundSelector;
use crate::error::SelectorError;
use crate::parser::SelectorParser;
use crate::pseudo::PseudoSelector;
use crate::simple::SimpleSelector;
use crate::specificity::Specificity;
use crate::superselector;
use crate::visitor::ParentSelectorFinder;

/// A comma-separated list of complex selectors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SelectorList {
    components: Vec<ComplexSelector>,
}

impl SelectorList {
    /// Wrap `components`, which must not be empty.
    #[must_use]
    pub fn new(components: Vec<ComplexSelector>) -> Self {
        debug_assert!(!components.is_empty(), "selector lists may not be empty");
        Self { components }
    }

    /// Parse a selector list.
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError::Syntax`] if `text` is not a selector list,
    /// or uses `&` or `%placeholder` where they are not allowed.
    pub fn parse(
        text: &str,
        logger: Option<&dyn Logger>,
        url: Option<&str>,
        allow_parent: bool,
        allow_placeholder: bool,
    ) -> Result<Self, SelectorError> {
        SelectorParser::new(text)
            .logger(logger)
            .url(url)
            .allow_parent(allow_parent)
            .allow_placeholder(allow_placeholder)
            .parse_selector_list()
    }

    /// The members of the list.
    #[must_use]
    pub fn components(&self) -> &[ComplexSelector] {
        &self.components
    }

    /// The widest range of specificities any member can have.
    #[must_use]
    pub fn specificity(&self) -> Specificity {
        let min = self
            .components
            .iter()
            .map(ComplexSelector::min_specificity)
            .min()
            .unwrap_or_default();
        let max = self
            .components
            .iter()
            .map(ComplexSelector::max_specificity)
            .max()
            .unwrap_or_default();
        Specificity::new(min, max)
    }

    /// The lowest specificity any member can have.
    #[must_use]
    pub fn min_specificity(&self) -> u32 {
        self.specificity().min
    }

    /// The highest specificity any member can have.
    #[must_use]
    pub fn max_specificity(&self) -> u32 {
        self.specificity().max
    }

    /// Whether every member of `other` is matched by some member of this
    /// list.
    #[must_use]
    pub fn is_superselector(&self, other: &Self) -> bool {
        superselector::list_is_superselector(&self.components, &other.components)
    }

    /// Whether `&` appears anywhere, including inside selector
    /// pseudo-classes.
    #[must_use]
    pub fn contains_parent_selector(&self) -> bool {
        self.accept(&mut ParentSelectorFinder)
    }

    /// A copy with `combinators` added to the end of every member.
    #[must_use]
    pub fn with_additional_combinators(&self, combinators: &[Combinator]) -> Self {
        if combinators.is_empty() {
            return self.clone();
        }
        Self::new(
            self.components
                .iter()
                .map(|complex| complex.with_additional_combinators(combinators, false))
                .collect(),
        )
    }

    /// Resolve this list as the selector of a rule nested inside a rule
    /// whose selector is `parent`.
    ///
    /// Explicit `&`s are replaced with `parent`. Members without `&` are
    /// prefixed with `parent` when `implicit_parent` is set. With
    /// `preserve_parent_selectors`, `&`s are left alone and only the
    /// implicit prefixing happens.
    ///
    /// # Errors
    ///
    /// - [`SelectorError::TopLevelParent`] if there is no `parent` and this
    ///   list uses `&`.
    /// - [`SelectorError::InvalidParent`] if `&` has a suffix or is
    ///   followed by more selectors and a parent member ends with a
    ///   combinator.
    /// - [`SelectorError::InvalidSuffix`] if a suffix cannot be appended to
    ///   the parent's last simple selector.
    pub fn nest_within(
        &self,
        parent: Option<&Self>,
        implicit_parent: bool,
        preserve_parent_selectors: bool,
    ) -> Result<Self, SelectorError> {
        let Some(parent) = parent else {
            if !preserve_parent_selectors && self.contains_parent_selector() {
                return Err(SelectorError::TopLevelParent { span: None });
            }
            return Ok(self.clone());
        };

        let mut nested = Vec::with_capacity(self.components.len());
        for complex in &self.components {
            if preserve_parent_selectors || !complex.accept(&mut ParentSelectorFinder) {
                if implicit_parent {
                    nested.push(
                        parent
                            .components
                            .iter()
                            .map(|prefix| prefix.concatenate(complex, false))
                            .collect(),
                    );
                } else {
                    nested.push(vec![complex.clone()]);
                }
                continue;
            }

            let mut resolved: Vec<ComplexSelector> = Vec::new();
            for component in complex.components() {
                match nest_within_compound(component, parent)? {
                    None if resolved.is_empty() => resolved.push(ComplexSelector::from_parts(
                        complex.leading_combinators().to_vec(),
                        vec![component.clone()],
                        false,
                    )),
                    None => {
                        for selector in &mut resolved {
                            *selector = selector.with_additional_component(component.clone(), false);
                        }
                    }
                    Some(expansions) if resolved.is_empty() => {
                        resolved = if complex.leading_combinators().is_empty() {
                            expansions
                        } else {
                            expansions
                                .iter()
                                .map(|expansion| {
                                    ComplexSelector::from_parts(
                                        [complex.leading_combinators(), expansion.leading_combinators()]
                                            .concat(),
                                        expansion.components().to_vec(),
                                        expansion.line_break(),
                                    )
                                })
                                .collect()
                        };
                    }
                    Some(expansions) => {
                        resolved = resolved
                            .iter()
                            .flat_map(|prefix| {
                                expansions
                                    .iter()
                                    .map(move |expansion| prefix.concatenate(expansion, false))
                            })
                            .collect();
                    }
                }
            }
            nested.push(resolved);
        }

        Ok(Self::new(flatten_vertically(nested)))
    }
}

/// Resolve `&` in a single component.
///
/// Returns `None` when the component has no `&` to resolve.
fn nest_within_compound(
    component: &ComplexSelectorComponent,
    parent: &SelectorList,
) -> Result<Option<Vec<ComplexSelector>>, SelectorError> {
    let simples = component.selector().simples();
    let has_nested_parent = simples.iter().any(|simple| {
        simple
            .as_pseudo()
            .and_then(PseudoSelector::selector)
            .is_some_and(SelectorList::contains_parent_selector)
    });
    if !has_nested_parent && !component.selector().starts_with_parent() {
        return Ok(None);
    }

    let resolved_simples: Vec<SimpleSelector> = if has_nested_parent {
        simples
            .iter()
            .map(|simple| match simple {
                SimpleSelector::Pseudo(pseudo) => match pseudo.selector() {
                    Some(selector) if selector.contains_parent_selector() => Ok(SimpleSelector::Pseudo(
                        pseudo.with_selector(selector.nest_within(Some(parent), false, false)?),
                    )),
                    _ => Ok(simple.clone()),
                },
                _ => Ok(simple.clone()),
            })
            .collect::<Result<_, SelectorError>>()?
    } else {
        simples.to_vec()
    };

    let Some((SimpleSelector::Parent { suffix }, rest)) = simples.split_first() else {
        return Ok(Some(vec![ComplexSelector::from_parts(
            Vec::new(),
            vec![ComplexSelectorComponent::new(
                CompoundSelector::new(resolved_simples),
                component.combinators().to_vec(),
            )],
            false,
        )]));
    };

    if rest.is_empty() && suffix.is_none() {
        return Ok(Some(
            parent
                .with_additional_combinators(component.combinators())
                .components,
        ));
    }

    parent
        .components
        .iter()
        .map(|complex| {
            let invalid = || SelectorError::InvalidParent {
                parent: complex.to_string(),
            };
            let (last, init) = complex.components().split_last().ok_or_else(invalid)?;
            if !last.combinators().is_empty() {
                return Err(invalid());
            }

            let mut merged = last.selector().simples().to_vec();
            if let Some(suffix) = suffix {
                let tail = merged.pop().ok_or_else(invalid)?;
                merged.push(tail.add_suffix(suffix)?);
            }
            merged.extend_from_slice(&resolved_simples[1..]);

            let mut components = init.to_vec();
            components.push(ComplexSelectorComponent::new(
                CompoundSelector::new(merged),
                component.combinators().to_vec(),
            ));
            Ok(ComplexSelector::from_parts(
                complex.leading_combinators().to_vec(),
                components,
                complex.line_break(),
            ))
        })
        .collect::<Result<Vec<_>, _>>()
        .map(Some)
}

/// Interleave `lists`: every first element, then every second element, and
/// so on.
fn flatten_vertically<T>(lists: Vec<Vec<T>>) -> Vec<T> {
    let mut queues: Vec<VecDeque<T>> = lists.into_iter().map(VecDeque::from).collect();
    let mut result = Vec::new();
    while !queues.is_empty() {
        queues.retain_mut(|queue| {
            if let Some(item) = queue.pop_front() {
                result.push(item);
            }
            !queue.is_empty()
        });
    }
    result
}

impl From<ComplexSelector> for SelectorList {
    fn from(complex: ComplexSelector) -> Self {
        Self::new(vec![complex])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flatten_vertically() {
        assert_eq!(
            flatten_vertically(vec![vec![1, 2, 3], vec![4], vec![5, 6]]),
            vec![1, 4, 5, 2, 6, 3]
        );
        assert_eq!(flatten_vertically(vec![vec![1, 2]]), vec![1, 2]);
        assert!(flatten_vertically::<u8>(Vec::new()).is_empty());
    }

    #[test]
    fn test_specificity_spans_members() {
        let list = SelectorList::new(vec![
            CompoundSelector::from(SimpleSelector::class("a")).into(),
            CompoundSelector::from(SimpleSelector::id("b")).into(),
        ]);
        assert_eq!(list.specificity(), Specificity::new(10, 100));
    }
}
