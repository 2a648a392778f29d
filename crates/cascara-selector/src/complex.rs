//! [§ 4.3 Complex selectors](https://www.w3.org/TR/selectors-4/#complex)
//!
//! "A complex selector is a chain of one or more compound selectors
//! separated by combinators."
//!
//! The chain is stored left to right, each compound paired with the
//! combinators that follow it:
//!
//! ```text
//! div.container > ul.nav li
//!
//! [div.container, [>]] [ul.nav, []] [li, []]
//! ```
//!
//! For compatibility with stylesheets that relied on old CSS hacks, a
//! component may carry several combinators (`a > + b`) and a selector may
//! start with combinators that have no compound before them (`> a`, which
//! is also how nested rules attach to their parent). Both are preserved
//! as written.

use std::hash::{Hash, Hasher};
use std::sync::OnceLock;

use cascara_common::Logger;
use serde::Serialize;

use crate::combinator::Combinator;
use crate::compound::CompoundSelector;
use crate::error::SelectorError;
use crate::parser::SelectorParser;
use crate::specificity::Specificity;
use crate::superselector;

/// A compound selector and the combinators written after it.
///
/// An empty combinator list means the next component is related to this
/// one by the implicit descendant combinator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ComplexSelectorComponent {
    selector: CompoundSelector,
    combinators: Vec<Combinator>,
}

impl ComplexSelectorComponent {
    /// Pair `selector` with the combinators following it.
    #[must_use]
    pub const fn new(selector: CompoundSelector, combinators: Vec<Combinator>) -> Self {
        Self {
            selector,
            combinators,
        }
    }

    /// The compound selector.
    #[must_use]
    pub const fn selector(&self) -> &CompoundSelector {
        &self.selector
    }

    /// The combinators following the compound selector.
    #[must_use]
    pub fn combinators(&self) -> &[Combinator] {
        &self.combinators
    }

    /// A copy whose combinators are this component's followed by `extra`.
    #[must_use]
    pub fn with_additional_combinators(&self, extra: &[Combinator]) -> Self {
        let mut combinators = self.combinators.clone();
        combinators.extend_from_slice(extra);
        Self::new(self.selector.clone(), combinators)
    }
}

impl From<CompoundSelector> for ComplexSelectorComponent {
    fn from(selector: CompoundSelector) -> Self {
        Self::new(selector, Vec::new())
    }
}

#[cfg(test)]
thread_local! {
    /// How many times this thread computed a complex selector's specificity.
    static SPECIFICITY_COMPUTATIONS: std::cell::Cell<usize> = const { std::cell::Cell::new(0) };
}

/// A complex selector.
///
/// Immutable: every transformation returns a new selector. That is what
/// makes the memoized specificity sound and lets selectors be shared between
/// rules, the extension graph and nested bodies.
///
/// Equality and hashing compare leading combinators and components only. The
/// line-break hint and the specificity cache are ignored.
#[derive(Debug, Clone, Serialize)]
pub struct ComplexSelector {
    leading_combinators: Vec<Combinator>,
    components: Vec<ComplexSelectorComponent>,
    /// Whether a line break should be emitted before this selector.
    line_break: bool,
    #[serde(skip)]
    specificity: OnceLock<Specificity>,
}

impl ComplexSelector {
    /// Create a complex selector.
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError::InvalidConstruction`] if both
    /// `leading_combinators` and `components` are empty.
    pub fn new(
        leading_combinators: Vec<Combinator>,
        components: Vec<ComplexSelectorComponent>,
        line_break: bool,
    ) -> Result<Self, SelectorError> {
        if leading_combinators.is_empty() && components.is_empty() {
            return Err(SelectorError::InvalidConstruction);
        }
        Ok(Self::from_parts(leading_combinators, components, line_break))
    }

    /// Construction for callers that already guarantee the selector is not
    /// empty.
    pub(crate) fn from_parts(
        leading_combinators: Vec<Combinator>,
        components: Vec<ComplexSelectorComponent>,
        line_break: bool,
    ) -> Self {
        debug_assert!(
            !(leading_combinators.is_empty() && components.is_empty()),
            "complex selectors may not be empty"
        );
        Self {
            leading_combinators,
            components,
            line_break,
            specificity: OnceLock::new(),
        }
    }

    /// Parse a single complex selector.
    ///
    /// `allow_parent` controls whether `&` is legal, which it is not at the
    /// top level of a stylesheet.
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError::Syntax`] if `text` is not exactly one
    /// complex selector.
    pub fn parse(
        text: &str,
        logger: Option<&dyn Logger>,
        url: Option<&str>,
        allow_parent: bool,
    ) -> Result<Self, SelectorError> {
        SelectorParser::new(text)
            .logger(logger)
            .url(url)
            .allow_parent(allow_parent)
            .parse_complex_selector()
    }

    /// Combinators that precede the first component.
    #[must_use]
    pub fn leading_combinators(&self) -> &[Combinator] {
        &self.leading_combinators
    }

    /// The components, left to right.
    #[must_use]
    pub fn components(&self) -> &[ComplexSelectorComponent] {
        &self.components
    }

    /// Whether a line break should be emitted before this selector.
    #[must_use]
    pub const fn line_break(&self) -> bool {
        self.line_break
    }

    /// The only compound selector, if this selector is nothing more than
    /// one compound: no leading combinators, one component, no trailing
    /// combinators.
    #[must_use]
    pub fn single_compound(&self) -> Option<&CompoundSelector> {
        match self.components.as_slice() {
            [component] if self.leading_combinators.is_empty() && component.combinators.is_empty() => {
                Some(&component.selector)
            }
            _ => None,
        }
    }

    /// The last component.
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError::OutOfRange`] if this selector consists only
    /// of leading combinators.
    pub fn last_component(&self) -> Result<&ComplexSelectorComponent, SelectorError> {
        self.components
            .last()
            .ok_or_else(|| SelectorError::OutOfRange {
                selector: self.to_string(),
            })
    }

    /// [§ 17](https://www.w3.org/TR/selectors-4/#specificity-rules)
    ///
    /// The sum of every component's compound specificity. Computed on first
    /// use and cached; concurrent first calls block on a single computation.
    #[must_use]
    pub fn specificity(&self) -> Specificity {
        *self.specificity.get_or_init(|| self.compute_specificity())
    }

    /// The lowest specificity this selector can have.
    #[must_use]
    pub fn min_specificity(&self) -> u32 {
        self.specificity().min
    }

    /// The highest specificity this selector can have.
    #[must_use]
    pub fn max_specificity(&self) -> u32 {
        self.specificity().max
    }

    fn compute_specificity(&self) -> Specificity {
        #[cfg(test)]
        SPECIFICITY_COMPUTATIONS.with(|count| count.set(count.get() + 1));

        self.components
            .iter()
            .map(|component| component.selector.specificity())
            .sum()
    }

    /// Whether this selector matches every element `other` matches.
    ///
    /// Selectors with leading combinators only make sense relative to a
    /// parent, so they are never compared.
    #[must_use]
    pub fn is_superselector(&self, other: &Self) -> bool {
        self.leading_combinators.is_empty()
            && other.leading_combinators.is_empty()
            && superselector::complex_is_superselector(&self.components, &other.components)
    }

    /// A selector with `combinators` added at the end.
    ///
    /// The combinators go to the last component, or to the leading
    /// combinators if there are no components. An empty `combinators`
    /// returns a copy of `self`, memoized specificity included.
    #[must_use]
    pub fn with_additional_combinators(&self, combinators: &[Combinator], force_line_break: bool) -> Self {
        if combinators.is_empty() {
            return self.clone();
        }

        let line_break = self.line_break || force_line_break;
        match self.components.split_last() {
            Some((last, init)) => {
                let mut components = init.to_vec();
                components.push(last.with_additional_combinators(combinators));
                Self::from_parts(self.leading_combinators.clone(), components, line_break)
            }
            None => Self::from_parts(
                [self.leading_combinators.as_slice(), combinators].concat(),
                Vec::new(),
                line_break,
            ),
        }
    }

    /// A selector with `component` added at the end.
    #[must_use]
    pub fn with_additional_component(
        &self,
        component: ComplexSelectorComponent,
        force_line_break: bool,
    ) -> Self {
        let mut components = self.components.clone();
        components.push(component);
        Self::from_parts(
            self.leading_combinators.clone(),
            components,
            self.line_break || force_line_break,
        )
    }

    /// `self` followed by `child`, as when `child` is nested inside `self`.
    ///
    /// - `child` without leading combinators: the component lists are
    ///   joined.
    /// - `self` without components: the leading combinators are joined and
    ///   `child`'s components are used.
    /// - otherwise `child`'s leading combinators attach to `self`'s last
    ///   component.
    #[must_use]
    pub fn concatenate(&self, child: &Self, force_line_break: bool) -> Self {
        let line_break = self.line_break || child.line_break || force_line_break;

        if child.leading_combinators.is_empty() {
            return Self::from_parts(
                self.leading_combinators.clone(),
                [self.components.as_slice(), child.components.as_slice()].concat(),
                line_break,
            );
        }

        match self.components.split_last() {
            None => Self::from_parts(
                [
                    self.leading_combinators.as_slice(),
                    child.leading_combinators.as_slice(),
                ]
                .concat(),
                child.components.clone(),
                line_break,
            ),
            Some((last, init)) => {
                let mut components = Vec::with_capacity(self.components.len() + child.components.len());
                components.extend_from_slice(init);
                components.push(last.with_additional_combinators(&child.leading_combinators));
                components.extend_from_slice(&child.components);
                Self::from_parts(self.leading_combinators.clone(), components, line_break)
            }
        }
    }

    /// Whether any position holds more than one combinator.
    #[must_use]
    pub fn has_multiple_combinators(&self) -> bool {
        self.leading_combinators.len() > 1
            || self
                .components
                .iter()
                .any(|component| component.combinators.len() > 1)
    }

    /// Whether this selector is not valid plain CSS: it has leading or
    /// trailing combinators, or repeated combinators.
    #[must_use]
    pub fn is_bogus(&self) -> bool {
        !self.leading_combinators.is_empty()
            || self
                .components
                .last()
                .is_none_or(|last| !last.combinators.is_empty())
            || self.has_multiple_combinators()
    }
}

impl PartialEq for ComplexSelector {
    fn eq(&self, other: &Self) -> bool {
        self.leading_combinators == other.leading_combinators && self.components == other.components
    }
}

impl Eq for ComplexSelector {}

impl Hash for ComplexSelector {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.leading_combinators.hash(state);
        self.components.hash(state);
    }
}

impl From<CompoundSelector> for ComplexSelector {
    fn from(compound: CompoundSelector) -> Self {
        Self::from_parts(Vec::new(), vec![compound.into()], false)
    }
}
