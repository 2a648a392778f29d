//! [§ 5 Elemental selectors](https://www.w3.org/TR/selectors-4/#elemental-selectors)
//! [§ 6 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
//!
//! A simple selector is a single condition on an element. Besides the CSS
//! kinds, the stylesheet language adds placeholders (`%name`, selectors that
//! only exist to be extended) and the parent selector (`&`, replaced by the
//! enclosing rule's selector during nesting).

use serde::Serialize;
use strum_macros::{Display, EnumString};

use crate::error::SelectorError;
use crate::pseudo::PseudoSelector;
use crate::specificity::Specificity;
use crate::superselector;

/// [§ 6.1 Namespaces](https://www.w3.org/TR/selectors-4/#type-nmsp)
///
/// A name with an optional namespace: `name`, `ns|name`, `|name` (explicitly
/// no namespace, stored as `Some("")`), or `*|name` (any namespace).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct QualifiedName {
    /// The local name.
    pub name: String,
    /// The namespace prefix, if one was written.
    pub namespace: Option<String>,
}

impl QualifiedName {
    /// A name without a namespace prefix.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: None,
        }
    }

    /// A name with a namespace prefix.
    #[must_use]
    pub fn with_namespace(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: Some(namespace.into()),
        }
    }
}

/// [§ 6.2 Attribute presence and value selectors](https://www.w3.org/TR/selectors-4/#attribute-representation)
/// [§ 6.3 Substring matching attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-substrings)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize)]
pub enum AttributeOperator {
    /// `[attr=value]` - "whose value is exactly 'val'"
    #[strum(serialize = "=")]
    Equal,
    /// `[attr~=value]` - "a whitespace-separated list of words, one of which
    /// is exactly 'val'"
    #[strum(serialize = "~=")]
    Include,
    /// `[attr|=value]` - "either being exactly 'val' or beginning with 'val'
    /// immediately followed by '-'"
    #[strum(serialize = "|=")]
    Dash,
    /// `[attr^=value]` - "begins with the prefix 'val'"
    #[strum(serialize = "^=")]
    Prefix,
    /// `[attr$=value]` - "ends with the suffix 'val'"
    #[strum(serialize = "$=")]
    Suffix,
    /// `[attr*=value]` - "contains at least one instance of the substring
    /// 'val'"
    #[strum(serialize = "*=")]
    Substring,
}

/// [§ 6.4 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
///
/// Examples: `[href]`, `[type=text]`, `[lang|="en"]`, `[data-x="y" i]`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct AttributeSelector {
    /// The attribute name.
    pub name: QualifiedName,
    /// The operator, or `None` for a presence test (`[attr]`).
    pub op: Option<AttributeOperator>,
    /// The unquoted value; present exactly when `op` is.
    pub value: Option<String>,
    /// [§ 6.3 Case-sensitivity](https://www.w3.org/TR/selectors-4/#attribute-case)
    /// The `i` or `s` flag, if written.
    pub modifier: Option<char>,
}

impl AttributeSelector {
    /// `[name]`
    #[must_use]
    pub const fn exists(name: QualifiedName) -> Self {
        Self {
            name,
            op: None,
            value: None,
            modifier: None,
        }
    }

    /// `[name op value]`
    #[must_use]
    pub fn with_value(name: QualifiedName, op: AttributeOperator, value: impl Into<String>) -> Self {
        Self {
            name,
            op: Some(op),
            value: Some(value.into()),
            modifier: None,
        }
    }
}

/// A simple selector.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum SimpleSelector {
    /// [§ 5.2 Universal selector](https://www.w3.org/TR/selectors-4/#universal-selector)
    /// "The universal selector is a single asterisk (*) and represents the
    /// qualified name of any element type."
    ///
    /// Examples: `*`, `ns|*`, `*|*`, `|*`
    Universal {
        /// The namespace prefix, if one was written.
        namespace: Option<String>,
    },

    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    ///
    /// Examples: `div`, `svg|rect`
    Type(QualifiedName),

    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
    ///
    /// Example: `.highlight`
    Class(String),

    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
    ///
    /// Example: `#main`
    Id(String),

    /// [§ 6.4 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
    Attribute(AttributeSelector),

    /// A placeholder: a class-like selector that is never emitted, only
    /// extended.
    ///
    /// Example: `%button-base`
    Placeholder(String),

    /// The parent selector, optionally followed by a suffix that is glued
    /// onto the parent's last simple selector.
    ///
    /// Examples: `&`, `&-title`
    Parent {
        /// Text appended to the parent, e.g. `-title` in `&-title`.
        suffix: Option<String>,
    },

    /// [§ 3.5 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
    /// and pseudo-elements.
    Pseudo(PseudoSelector),
}

impl SimpleSelector {
    /// A type selector without namespace.
    #[must_use]
    pub fn type_selector(name: impl Into<String>) -> Self {
        Self::Type(QualifiedName::new(name))
    }

    /// A class selector.
    #[must_use]
    pub fn class(name: impl Into<String>) -> Self {
        Self::Class(name.into())
    }

    /// An id selector.
    #[must_use]
    pub fn id(name: impl Into<String>) -> Self {
        Self::Id(name.into())
    }

    /// The universal selector without namespace.
    #[must_use]
    pub const fn universal() -> Self {
        Self::Universal { namespace: None }
    }

    /// A placeholder selector.
    #[must_use]
    pub fn placeholder(name: impl Into<String>) -> Self {
        Self::Placeholder(name.into())
    }

    /// The parent selector.
    #[must_use]
    pub const fn parent(suffix: Option<String>) -> Self {
        Self::Parent { suffix }
    }

    /// This selector's contribution to the specificity of its compound.
    ///
    /// The parent selector contributes nothing: it is replaced before
    /// specificity is meaningful.
    #[must_use]
    pub fn specificity(&self) -> Specificity {
        match self {
            // "ignore the universal selector"
            Self::Universal { .. } | Self::Parent { .. } => Specificity::ZERO,

            // "count the number of type selectors and pseudo-elements (= C)"
            Self::Type(_) => Specificity::exact(Specificity::TYPE),

            // "count the number of class selectors, attributes selectors, and
            // pseudo-classes (= B)"
            Self::Class(_) | Self::Attribute(_) | Self::Placeholder(_) => {
                Specificity::exact(Specificity::CLASS)
            }

            // "count the number of ID selectors (= A)"
            Self::Id(_) => Specificity::exact(Specificity::ID),

            Self::Pseudo(pseudo) => pseudo.specificity(),
        }
    }

    /// Whether this selector matches every element `other` matches.
    #[must_use]
    pub fn is_superselector(&self, other: &Self) -> bool {
        match self {
            Self::Universal { namespace } => match namespace.as_deref() {
                Some("*") => true,
                _ => match other {
                    Self::Type(name) => *namespace == name.namespace,
                    Self::Universal {
                        namespace: other_namespace,
                    } => namespace == other_namespace,
                    _ => namespace.is_none() || superselector::simple_is_superselector(self, other),
                },
            },
            Self::Type(name) => {
                superselector::simple_is_superselector(self, other)
                    || matches!(
                        other,
                        Self::Type(other_name)
                            if name.name == other_name.name
                                && name.namespace.as_deref() == Some("*")
                    )
            }
            Self::Pseudo(pseudo) => superselector::pseudo_is_superselector(self, pseudo, other),
            Self::Class(_)
            | Self::Id(_)
            | Self::Attribute(_)
            | Self::Placeholder(_)
            | Self::Parent { .. } => superselector::simple_is_superselector(self, other),
        }
    }

    /// Glue `suffix` onto this selector's name, as `&-suffix` requires.
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError::InvalidSuffix`] for selectors without a
    /// trailing name: universal, attribute, parent and pseudo selectors with
    /// an argument.
    pub fn add_suffix(&self, suffix: &str) -> Result<Self, SelectorError> {
        let suffixed = match self {
            Self::Type(name) => Self::Type(QualifiedName {
                name: format!("{}{suffix}", name.name),
                namespace: name.namespace.clone(),
            }),
            Self::Class(name) => Self::Class(format!("{name}{suffix}")),
            Self::Id(name) => Self::Id(format!("{name}{suffix}")),
            Self::Placeholder(name) => Self::Placeholder(format!("{name}{suffix}")),
            Self::Pseudo(pseudo) if pseudo.argument().is_none() && pseudo.selector().is_none() => {
                Self::Pseudo(pseudo.with_name(format!("{}{suffix}", pseudo.name())))
            }
            Self::Universal { .. } | Self::Attribute(_) | Self::Parent { .. } | Self::Pseudo(_) => {
                return Err(SelectorError::InvalidSuffix {
                    selector: self.to_string(),
                    suffix: suffix.to_owned(),
                });
            }
        };
        Ok(suffixed)
    }

    /// The pseudo selector inside this simple selector, if it is one.
    #[must_use]
    pub const fn as_pseudo(&self) -> Option<&PseudoSelector> {
        match self {
            Self::Pseudo(pseudo) => Some(pseudo),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_specificity_weights() {
        assert_eq!(SimpleSelector::universal().specificity(), Specificity::ZERO);
        assert_eq!(SimpleSelector::type_selector("a").specificity(), Specificity::exact(1));
        assert_eq!(SimpleSelector::class("a").specificity(), Specificity::exact(10));
        assert_eq!(SimpleSelector::placeholder("a").specificity(), Specificity::exact(10));
        assert_eq!(SimpleSelector::id("a").specificity(), Specificity::exact(100));
    }

    #[test]
    fn test_universal_is_superselector_of_type() {
        let universal = SimpleSelector::universal();
        assert!(universal.is_superselector(&SimpleSelector::type_selector("div")));
        assert!(universal.is_superselector(&SimpleSelector::class("x")));
        assert!(!SimpleSelector::type_selector("div").is_superselector(&universal));
    }

    #[test]
    fn test_namespaced_universal() {
        let svg_any = SimpleSelector::Universal {
            namespace: Some("svg".to_string()),
        };
        let svg_rect = SimpleSelector::Type(QualifiedName::with_namespace("rect", "svg"));
        let rect = SimpleSelector::type_selector("rect");
        assert!(svg_any.is_superselector(&svg_rect));
        assert!(!svg_any.is_superselector(&rect));

        let any_any = SimpleSelector::Universal {
            namespace: Some("*".to_string()),
        };
        assert!(any_any.is_superselector(&svg_rect));
        assert!(any_any.is_superselector(&rect));
    }

    #[test]
    fn test_any_namespace_type() {
        let any_rect = SimpleSelector::Type(QualifiedName::with_namespace("rect", "*"));
        let svg_rect = SimpleSelector::Type(QualifiedName::with_namespace("rect", "svg"));
        assert!(any_rect.is_superselector(&svg_rect));
        assert!(!svg_rect.is_superselector(&any_rect));
    }

    #[test]
    fn test_add_suffix() {
        assert_eq!(
            SimpleSelector::class("btn").add_suffix("-primary"),
            Ok(SimpleSelector::class("btn-primary"))
        );
        assert_eq!(
            SimpleSelector::type_selector("h").add_suffix("1"),
            Ok(SimpleSelector::type_selector("h1"))
        );
        assert!(matches!(
            SimpleSelector::universal().add_suffix("-x"),
            Err(SelectorError::InvalidSuffix { .. })
        ));
    }
}
