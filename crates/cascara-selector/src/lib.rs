//! Selector representation and selector algebra for the cascara stylesheet
//! compiler.
//!
//! # Scope
//!
//! This crate implements:
//! - **Selector AST** ([Selectors Level 4](https://www.w3.org/TR/selectors-4/))
//!   - Simple selectors: type, universal, class, id, attribute, pseudo,
//!     placeholder (`%name`) and parent (`&`)
//!   - Compound selectors, complex selectors with (possibly repeated and
//!     leading) combinators, selector lists
//!   - Structural equality and hashing on every node
//!
//! - **Specificity** ([§ 17](https://www.w3.org/TR/selectors-4/#specificity-rules))
//!   - Bounded as a `[min, max]` range, since selector pseudo-classes such as
//!     `:is()` admit more than one weight
//!   - Memoized per complex selector
//!
//! - **Selector algebra**
//!   - Superselector relation on simple, compound, complex and list
//!     selectors
//!   - Combinator concatenation used by nesting and `@extend`
//!   - Parent-selector (`&`) resolution
//!
//! - **Parsing and serialization**
//!   - A parser for selector text with located syntax errors
//!   - Canonical text output through a visitor
//!
//! # Not Implemented
//!
//! - `@extend` resolution policy (callers drive the algebra)
//! - Interpolation (`#{...}`) inside selector text
//! - Output styles (compact, expanded, compressed)

/// Combinators between compound selectors.
pub mod combinator;
/// Complex selectors and their components.
pub mod complex;
/// Compound selectors.
pub mod compound;
/// Errors raised by construction, access, parsing and nesting.
pub mod error;
/// Selector lists and parent-selector resolution.
pub mod list;
/// Parser for selector text.
pub mod parser;
/// Pseudo-class and pseudo-element selectors.
pub mod pseudo;
/// Canonical text output.
pub mod serialize;
/// Simple selectors.
pub mod simple;
/// Specificity ranges.
pub mod specificity;
/// Superselector algebra.
pub mod superselector;
/// Double dispatch over selector nodes.
pub mod visitor;

// Re-exports for convenience
pub use combinator::Combinator;
pub use complex::{ComplexSelector, ComplexSelectorComponent};
pub use compound::CompoundSelector;
pub use error::SelectorError;
pub use list::SelectorList;
pub use parser::SelectorParser;
pub use pseudo::PseudoSelector;
pub use simple::{AttributeOperator, AttributeSelector, QualifiedName, SimpleSelector};
pub use specificity::Specificity;
pub use visitor::SelectorVisitor;
