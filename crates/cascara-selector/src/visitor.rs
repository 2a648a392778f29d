//! Double dispatch over selector nodes.
//!
//! Traversals that need to look at every kind of node (serialization,
//! searching for `&`) implement [`SelectorVisitor`] instead of matching on
//! the node types themselves, so the node definitions stay free of
//! traversal logic.

use crate::complex::ComplexSelector;
use crate::compound::CompoundSelector;
use crate::list::SelectorList;
use crate::pseudo::PseudoSelector;
use crate::simple::{AttributeSelector, QualifiedName, SimpleSelector};

/// A traversal over selector nodes.
pub trait SelectorVisitor {
    /// What each visit produces.
    type Output;

    /// Visit a comma-separated list.
    fn visit_selector_list(&mut self, list: &SelectorList) -> Self::Output;
    /// Visit a complex selector.
    fn visit_complex_selector(&mut self, complex: &ComplexSelector) -> Self::Output;
    /// Visit a compound selector.
    fn visit_compound_selector(&mut self, compound: &CompoundSelector) -> Self::Output;
    /// Visit `*`, `ns|*`, `*|*` or `|*`.
    fn visit_universal_selector(&mut self, namespace: Option<&str>) -> Self::Output;
    /// Visit a type selector.
    fn visit_type_selector(&mut self, name: &QualifiedName) -> Self::Output;
    /// Visit a class selector.
    fn visit_class_selector(&mut self, name: &str) -> Self::Output;
    /// Visit an id selector.
    fn visit_id_selector(&mut self, name: &str) -> Self::Output;
    /// Visit an attribute selector.
    fn visit_attribute_selector(&mut self, attribute: &AttributeSelector) -> Self::Output;
    /// Visit a placeholder selector.
    fn visit_placeholder_selector(&mut self, name: &str) -> Self::Output;
    /// Visit a parent selector.
    fn visit_parent_selector(&mut self, suffix: Option<&str>) -> Self::Output;
    /// Visit a pseudo-class or pseudo-element.
    fn visit_pseudo_selector(&mut self, pseudo: &PseudoSelector) -> Self::Output;
}

impl SelectorList {
    /// Dispatch to `visitor`.
    pub fn accept<V: SelectorVisitor>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_selector_list(self)
    }
}

impl ComplexSelector {
    /// Dispatch to `visitor`.
    pub fn accept<V: SelectorVisitor>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_complex_selector(self)
    }
}

impl CompoundSelector {
    /// Dispatch to `visitor`.
    pub fn accept<V: SelectorVisitor>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_compound_selector(self)
    }
}

impl SimpleSelector {
    /// Dispatch to the `visitor` method for this selector's kind.
    pub fn accept<V: SelectorVisitor>(&self, visitor: &mut V) -> V::Output {
        match self {
            Self::Universal { namespace } => visitor.visit_universal_selector(namespace.as_deref()),
            Self::Type(name) => visitor.visit_type_selector(name),
            Self::Class(name) => visitor.visit_class_selector(name),
            Self::Id(name) => visitor.visit_id_selector(name),
            Self::Attribute(attribute) => visitor.visit_attribute_selector(attribute),
            Self::Placeholder(name) => visitor.visit_placeholder_selector(name),
            Self::Parent { suffix } => visitor.visit_parent_selector(suffix.as_deref()),
            Self::Pseudo(pseudo) => visitor.visit_pseudo_selector(pseudo),
        }
    }
}

/// Finds a parent selector anywhere in a tree, including inside selector
/// pseudo-classes such as `:not(&)`.
#[derive(Debug, Default)]
pub struct ParentSelectorFinder;

impl SelectorVisitor for ParentSelectorFinder {
    type Output = bool;

    fn visit_selector_list(&mut self, list: &SelectorList) -> bool {
        list.components().iter().any(|complex| complex.accept(self))
    }

    fn visit_complex_selector(&mut self, complex: &ComplexSelector) -> bool {
        complex
            .components()
            .iter()
            .any(|component| component.selector().accept(self))
    }

    fn visit_compound_selector(&mut self, compound: &CompoundSelector) -> bool {
        compound.simples().iter().any(|simple| simple.accept(self))
    }

    fn visit_universal_selector(&mut self, _namespace: Option<&str>) -> bool {
        false
    }

    fn visit_type_selector(&mut self, _name: &QualifiedName) -> bool {
        false
    }

    fn visit_class_selector(&mut self, _name: &str) -> bool {
        false
    }

    fn visit_id_selector(&mut self, _name: &str) -> bool {
        false
    }

    fn visit_attribute_selector(&mut self, _attribute: &AttributeSelector) -> bool {
        false
    }

    fn visit_placeholder_selector(&mut self, _name: &str) -> bool {
        false
    }

    fn visit_parent_selector(&mut self, _suffix: Option<&str>) -> bool {
        true
    }

    fn visit_pseudo_selector(&mut self, pseudo: &PseudoSelector) -> bool {
        pseudo.selector().is_some_and(|selector| selector.accept(self))
    }
}
