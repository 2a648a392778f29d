//! [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
//!
//! "A compound selector is a sequence of simple selectors that are not
//! separated by a combinator, and represents a set of simultaneous
//! conditions on a single element."

use serde::Serialize;

use crate::simple::SimpleSelector;
use crate::specificity::Specificity;
use crate::superselector;

/// A non-empty sequence of simple selectors that must all match the same
/// element.
///
/// Order matters for equality and serialization, not for matching.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct CompoundSelector {
    simples: Vec<SimpleSelector>,
}

impl CompoundSelector {
    /// Create a compound selector. `simples` must not be empty.
    #[must_use]
    pub fn new(simples: Vec<SimpleSelector>) -> Self {
        debug_assert!(!simples.is_empty(), "compound selectors may not be empty");
        Self { simples }
    }

    /// The simple selectors, in source order.
    #[must_use]
    pub fn simples(&self) -> &[SimpleSelector] {
        &self.simples
    }

    /// [§ 17](https://www.w3.org/TR/selectors-4/#specificity-rules)
    /// The sum of the members' specificities.
    #[must_use]
    pub fn specificity(&self) -> Specificity {
        self.simples.iter().map(SimpleSelector::specificity).sum()
    }

    /// The lowest specificity this compound can have.
    #[must_use]
    pub fn min_specificity(&self) -> u32 {
        self.specificity().min
    }

    /// The highest specificity this compound can have.
    #[must_use]
    pub fn max_specificity(&self) -> u32 {
        self.specificity().max
    }

    /// Whether this compound matches every element `other` matches.
    #[must_use]
    pub fn is_superselector(&self, other: &Self) -> bool {
        superselector::compound_is_superselector(&self.simples, &other.simples, &[])
    }

    /// Whether this compound starts with the parent selector `&`.
    #[must_use]
    pub fn starts_with_parent(&self) -> bool {
        matches!(self.simples.first(), Some(SimpleSelector::Parent { .. }))
    }

    /// A copy with `simple` appended.
    #[must_use]
    pub fn with_simple(&self, simple: SimpleSelector) -> Self {
        let mut simples = self.simples.clone();
        simples.push(simple);
        Self { simples }
    }
}

impl From<SimpleSelector> for CompoundSelector {
    fn from(simple: SimpleSelector) -> Self {
        Self {
            simples: vec![simple],
        }
    }
}
