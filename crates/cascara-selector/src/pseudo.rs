//! [§ 3.5 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
//! and [§ 3.6 Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-elements)
//!
//! Pseudo selectors come in three shapes: bare (`:hover`), with an opaque
//! argument (`:nth-child(2n)`, `:lang(en)`), and with a nested selector list
//! (`:not(.a, .b)`, `:is(h1, h2)`, `:nth-child(2n of .item)`). The nested
//! list is what makes specificity a range and what the superselector
//! algebra has to look inside.

use serde::Serialize;

use crate::complex::ComplexSelector;
use crate::list::SelectorList;
use crate::specificity::Specificity;

/// Pseudo-elements that CSS 2 allowed with a single colon.
const LEGACY_PSEUDO_ELEMENTS: [&str; 4] = ["after", "before", "first-line", "first-letter"];

/// Pseudo-classes whose argument is a selector list.
pub(crate) const SELECTOR_PSEUDO_CLASSES: [&str; 11] = [
    "not",
    "is",
    "matches",
    "where",
    "current",
    "any",
    "has",
    "host",
    "host-context",
    "nth-child",
    "nth-last-child",
];

/// Pseudo-elements whose argument is a selector list.
pub(crate) const SELECTOR_PSEUDO_ELEMENTS: [&str; 1] = ["slotted"];

/// A pseudo-class or pseudo-element.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct PseudoSelector {
    /// The name as written, without colons.
    name: String,
    /// Lower-cased, with any vendor prefix removed.
    normalized_name: String,
    /// Whether this is a pseudo-class (as opposed to a pseudo-element).
    is_class: bool,
    /// Whether it was written with a single colon.
    is_syntactic_class: bool,
    /// The non-selector argument, e.g. `2n+1` in `:nth-child(2n+1 of .a)`.
    argument: Option<String>,
    /// The selector argument, e.g. `.a` in `:not(.a)`.
    selector: Option<SelectorList>,
}

impl PseudoSelector {
    /// Create a pseudo selector. `element` is true for the `::name` syntax.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        element: bool,
        argument: Option<String>,
        selector: Option<SelectorList>,
    ) -> Self {
        let name = name.into();
        let normalized_name = unvendor(&name).to_ascii_lowercase();
        let is_class = !element && !LEGACY_PSEUDO_ELEMENTS.contains(&normalized_name.as_str());
        Self {
            name,
            normalized_name,
            is_class,
            is_syntactic_class: !element,
            argument,
            selector,
        }
    }

    /// A pseudo-class without arguments, e.g. `:hover`.
    #[must_use]
    pub fn class(name: impl Into<String>) -> Self {
        Self::new(name, false, None, None)
    }

    /// A pseudo-class with a selector argument, e.g. `:not(.a)`.
    #[must_use]
    pub fn class_with_selector(name: impl Into<String>, selector: SelectorList) -> Self {
        Self::new(name, false, None, Some(selector))
    }

    /// A pseudo-element without arguments, e.g. `::before`.
    #[must_use]
    pub fn element(name: impl Into<String>) -> Self {
        Self::new(name, true, None, None)
    }

    /// The name as written.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The lower-cased name without vendor prefix.
    #[must_use]
    pub fn normalized_name(&self) -> &str {
        &self.normalized_name
    }

    /// Whether this is a pseudo-class.
    #[must_use]
    pub const fn is_class(&self) -> bool {
        self.is_class
    }

    /// Whether this is a pseudo-element.
    #[must_use]
    pub const fn is_element(&self) -> bool {
        !self.is_class
    }

    /// Whether this was written with a single colon. Differs from
    /// [`Self::is_class`] for legacy pseudo-elements such as `:before`.
    #[must_use]
    pub const fn is_syntactic_class(&self) -> bool {
        self.is_syntactic_class
    }

    /// The non-selector argument.
    #[must_use]
    pub fn argument(&self) -> Option<&str> {
        self.argument.as_deref()
    }

    /// The selector argument.
    #[must_use]
    pub const fn selector(&self) -> Option<&SelectorList> {
        self.selector.as_ref()
    }

    /// A copy with a different name and the same shape.
    #[must_use]
    pub fn with_name(&self, name: String) -> Self {
        Self::new(name, !self.is_syntactic_class, self.argument.clone(), self.selector.clone())
    }

    /// A copy with a different selector argument.
    #[must_use]
    pub fn with_selector(&self, selector: SelectorList) -> Self {
        Self {
            selector: Some(selector),
            ..self.clone()
        }
    }

    /// [§ 17 Calculating Specificity](https://www.w3.org/TR/selectors-4/#specificity-rules)
    ///
    /// - pseudo-elements count as type selectors
    /// - "The specificity of an :is(), :not(), or :has() pseudo-class is
    ///   replaced by the specificity of the most specific complex selector in
    ///   its selector list argument." Which argument matched is unknown at
    ///   compile time, so `:is()` and friends span the whole range of their
    ///   arguments. `:not()` matches only when no argument does, so it is
    ///   always the most specific one.
    /// - "The specificity of a :where() pseudo-class is replaced by zero."
    /// - "The specificity of an :nth-child() or :nth-last-child() selector is
    ///   the specificity of the pseudo class itself (counting as one
    ///   pseudo-class selector) plus the specificity of the most specific
    ///   complex selector in its selector list argument (if any)."
    #[must_use]
    pub fn specificity(&self) -> Specificity {
        if self.is_element() {
            return Specificity::exact(Specificity::TYPE);
        }
        let Some(selector) = &self.selector else {
            return Specificity::exact(Specificity::CLASS);
        };

        let ranges: Vec<Specificity> = selector
            .components()
            .iter()
            .map(ComplexSelector::specificity)
            .collect();
        match self.normalized_name.as_str() {
            "not" => ranges.iter().fold(Specificity::ZERO, |acc, range| {
                Specificity::new(acc.min.max(range.min), acc.max.max(range.max))
            }),
            "where" => Specificity::ZERO,
            "nth-child" | "nth-last-child" => {
                Specificity::exact(Specificity::CLASS) + spanned_range(&ranges)
            }
            _ => spanned_range(&ranges),
        }
    }
}

/// The smallest range covering every range in `ranges`.
fn spanned_range(ranges: &[Specificity]) -> Specificity {
    let min = ranges.iter().map(|range| range.min).min().unwrap_or_default();
    let max = ranges.iter().map(|range| range.max).max().unwrap_or_default();
    Specificity::new(min, max)
}

/// Strip a vendor prefix: `-webkit-any` becomes `any`. Custom names
/// starting with `--` are left alone.
#[must_use]
pub fn unvendor(name: &str) -> &str {
    if !name.starts_with('-') || name.starts_with("--") {
        return name;
    }
    match name[1..].find('-') {
        Some(i) => &name[i + 2..],
        None => name,
    }
}

/// Whether the pseudo with this normalized name takes a selector argument.
#[must_use]
pub fn takes_selector(normalized_name: &str, element: bool) -> bool {
    if element {
        SELECTOR_PSEUDO_ELEMENTS.contains(&normalized_name)
    } else {
        SELECTOR_PSEUDO_CLASSES.contains(&normalized_name)
    }
}
