//! Canonical selector text.
//!
//! Every node implements [`fmt::Display`] through [`SelectorWriter`]. The
//! output is the form used in error messages and by the command-line tool:
//! single spaces around combinators, `", "` between list members (`",\n"`
//! when the member carries a line break), and attribute values quoted only
//! when they are not identifiers. Output styles belong to the printer, not
//! to this module.

use std::fmt::{self, Write};

use crate::complex::{ComplexSelector, ComplexSelectorComponent};
use crate::compound::CompoundSelector;
use crate::list::SelectorList;
use crate::pseudo::PseudoSelector;
use crate::simple::{AttributeSelector, QualifiedName, SimpleSelector};
use crate::visitor::SelectorVisitor;

/// Writes selector text to any [`fmt::Write`].
pub struct SelectorWriter<'a, W: Write> {
    out: &'a mut W,
}

impl<'a, W: Write> SelectorWriter<'a, W> {
    /// Write to `out`.
    pub const fn new(out: &'a mut W) -> Self {
        Self { out }
    }

    fn write_namespace(&mut self, namespace: Option<&str>) -> fmt::Result {
        match namespace {
            Some(namespace) => write!(self.out, "{namespace}|"),
            None => Ok(()),
        }
    }
}

impl<W: Write> SelectorVisitor for SelectorWriter<'_, W> {
    type Output = fmt::Result;

    fn visit_selector_list(&mut self, list: &SelectorList) -> fmt::Result {
        for (i, complex) in list.components().iter().enumerate() {
            if i > 0 {
                self.out
                    .write_str(if complex.line_break() { ",\n" } else { ", " })?;
            }
            complex.accept(self)?;
        }
        Ok(())
    }

    fn visit_complex_selector(&mut self, complex: &ComplexSelector) -> fmt::Result {
        for (i, combinator) in complex.leading_combinators().iter().enumerate() {
            if i > 0 {
                self.out.write_char(' ')?;
            }
            write!(self.out, "{combinator}")?;
        }
        if !complex.leading_combinators().is_empty() && !complex.components().is_empty() {
            self.out.write_char(' ')?;
        }

        let count = complex.components().len();
        for (i, component) in complex.components().iter().enumerate() {
            component.selector().accept(self)?;
            for combinator in component.combinators() {
                write!(self.out, " {combinator}")?;
            }
            if i + 1 < count {
                self.out.write_char(' ')?;
            }
        }
        Ok(())
    }

    fn visit_compound_selector(&mut self, compound: &CompoundSelector) -> fmt::Result {
        compound
            .simples()
            .iter()
            .try_for_each(|simple| simple.accept(self))
    }

    fn visit_universal_selector(&mut self, namespace: Option<&str>) -> fmt::Result {
        self.write_namespace(namespace)?;
        self.out.write_char('*')
    }

    fn visit_type_selector(&mut self, name: &QualifiedName) -> fmt::Result {
        self.write_namespace(name.namespace.as_deref())?;
        self.out.write_str(&name.name)
    }

    fn visit_class_selector(&mut self, name: &str) -> fmt::Result {
        write!(self.out, ".{name}")
    }

    fn visit_id_selector(&mut self, name: &str) -> fmt::Result {
        write!(self.out, "#{name}")
    }

    fn visit_attribute_selector(&mut self, attribute: &AttributeSelector) -> fmt::Result {
        self.out.write_char('[')?;
        self.write_namespace(attribute.name.namespace.as_deref())?;
        self.out.write_str(&attribute.name.name)?;
        if let (Some(op), Some(value)) = (attribute.op, &attribute.value) {
            write!(self.out, "{op}")?;
            if is_plain_identifier(value) {
                self.out.write_str(value)?;
            } else {
                write_quoted(self.out, value)?;
            }
            if let Some(modifier) = attribute.modifier {
                write!(self.out, " {modifier}")?;
            }
        }
        self.out.write_char(']')
    }

    fn visit_placeholder_selector(&mut self, name: &str) -> fmt::Result {
        write!(self.out, "%{name}")
    }

    fn visit_parent_selector(&mut self, suffix: Option<&str>) -> fmt::Result {
        write!(self.out, "&{}", suffix.unwrap_or_default())
    }

    fn visit_pseudo_selector(&mut self, pseudo: &PseudoSelector) -> fmt::Result {
        self.out
            .write_str(if pseudo.is_syntactic_class() { ":" } else { "::" })?;
        self.out.write_str(pseudo.name())?;
        if pseudo.argument().is_none() && pseudo.selector().is_none() {
            return Ok(());
        }

        self.out.write_char('(')?;
        if let Some(argument) = pseudo.argument() {
            self.out.write_str(argument)?;
            if pseudo.selector().is_some() {
                self.out.write_str(" of ")?;
            }
        }
        if let Some(selector) = pseudo.selector() {
            selector.accept(self)?;
        }
        self.out.write_char(')')
    }
}

/// Whether `value` can be written without quotes: an identifier that does
/// not start with a digit or `--`.
fn is_plain_identifier(value: &str) -> bool {
    let rest = value.strip_prefix('-').unwrap_or(value);
    let mut chars = rest.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    !value.starts_with("--")
        && (first.is_ascii_alphabetic() || first == '_' || !first.is_ascii())
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || !c.is_ascii())
}

fn write_quoted<W: Write>(out: &mut W, value: &str) -> fmt::Result {
    out.write_char('"')?;
    for c in value.chars() {
        match c {
            '"' | '\\' => write!(out, "\\{c}")?,
            '\n' => out.write_str("\\a ")?,
            _ => out.write_char(c)?,
        }
    }
    out.write_char('"')
}

impl fmt::Display for SelectorList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.accept(&mut SelectorWriter::new(f))
    }
}

impl fmt::Display for ComplexSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.accept(&mut SelectorWriter::new(f))
    }
}

impl fmt::Display for ComplexSelectorComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.selector().accept(&mut SelectorWriter::new(f))?;
        for combinator in self.combinators() {
            write!(f, " {combinator}")?;
        }
        Ok(())
    }
}

impl fmt::Display for CompoundSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.accept(&mut SelectorWriter::new(f))
    }
}

impl fmt::Display for SimpleSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.accept(&mut SelectorWriter::new(f))
    }
}

impl fmt::Display for PseudoSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        SelectorWriter::new(f).visit_pseudo_selector(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_identifiers() {
        assert!(is_plain_identifier("http"));
        assert!(is_plain_identifier("-moz-thing"));
        assert!(is_plain_identifier("a_b-c9"));
        assert!(!is_plain_identifier(""));
        assert!(!is_plain_identifier("9lives"));
        assert!(!is_plain_identifier("--custom"));
        assert!(!is_plain_identifier("a b"));
        assert!(!is_plain_identifier(".png"));
    }

    #[test]
    fn test_quoting_escapes() {
        let mut out = String::new();
        write_quoted(&mut out, r#"say "hi"\"#).unwrap();
        assert_eq!(out, r#""say \"hi\"\\""#);
    }
}
