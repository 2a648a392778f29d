//! [§ 17 Calculating Specificity](https://www.w3.org/TR/selectors-4/#specificity-rules)
//!
//! "A selector's specificity is calculated for a given element as follows:
//!  - count the number of ID selectors in the selector (= A)
//!  - count the number of class selectors, attributes selectors, and
//!    pseudo-classes in the selector (= B)
//!  - count the number of type selectors and pseudo-elements in the
//!    selector (= C)"
//!
//! The compiler folds the three counts into one weighted integer
//! (`A * 100 + B * 10 + C`), which is what diagnostics report and what the
//! output ordering compares. Selector pseudo-classes such as `:is()` take
//! the specificity of whichever argument matched, which the compiler cannot
//! know, so every node reports a `[min, max]` range instead of one number.

use std::iter::Sum;
use std::ops::{Add, AddAssign};

use serde::Serialize;

/// A `[min, max]` specificity range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Specificity {
    /// The lowest specificity the selector can have.
    pub min: u32,
    /// The highest specificity the selector can have.
    pub max: u32,
}

impl Specificity {
    /// Weight of a type selector or pseudo-element (C).
    pub const TYPE: u32 = 1;
    /// Weight of a class, attribute, placeholder or pseudo-class (B).
    pub const CLASS: u32 = 10;
    /// Weight of an id selector (A).
    pub const ID: u32 = 100;

    /// The specificity of the universal selector.
    pub const ZERO: Self = Self::exact(0);

    /// Create a range.
    #[must_use]
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// A range holding exactly one value.
    #[must_use]
    pub const fn exact(value: u32) -> Self {
        Self::new(value, value)
    }

    /// Whether the range holds exactly one value.
    #[must_use]
    pub const fn is_exact(self) -> bool {
        self.min == self.max
    }
}

impl Add for Specificity {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.min + rhs.min, self.max + rhs.max)
    }
}

impl AddAssign for Specificity {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sum for Specificity {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}
