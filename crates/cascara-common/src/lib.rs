//! Common utilities for cascara.
//!
//! This crate provides shared infrastructure used by the selector layer and
//! the command-line front end:
//! - **Logger** - the diagnostics sink threaded through parsing, with
//!   coloured, deduplicated terminal output
//! - **Spans** - source locations attached to syntax errors and warnings

pub mod logger;
pub mod span;

pub use logger::{CollectingLogger, Logger, SilentLogger, StderrLogger, Warning};
pub use span::{SourceLocation, SourceSpan};
