//! Diagnostics sinks.
//!
//! The selector parser never prints directly. It reports through a
//! [`Logger`] handed to it by the caller, so a compiler can route warnings to
//! the terminal, swallow them, or collect them for later display.
//!
//! [`StderrLogger`] prints each distinct message once, so a selector that is
//! parsed many times (e.g. inside a mixin) does not flood the terminal.

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

use owo_colors::OwoColorize;

use crate::span::SourceSpan;

/// A sink for warnings and debug messages produced while compiling.
pub trait Logger: Send + Sync {
    /// Report a warning. `deprecation` marks syntax that still works but
    /// will stop working in a future version.
    fn warn(&self, message: &str, span: Option<&SourceSpan>, deprecation: bool);

    /// Report a debug message. Ignored unless the logger overrides it.
    fn debug(&self, message: &str, span: Option<&SourceSpan>) {
        let _ = (message, span);
    }
}

/// A warning captured by [`CollectingLogger`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    /// The warning text.
    pub message: String,
    /// Where the warning points, if anywhere.
    pub span: Option<SourceSpan>,
    /// Whether this is a deprecation warning.
    pub deprecation: bool,
}

/// Prints warnings to stderr, once per unique message.
#[derive(Debug, Default)]
pub struct StderrLogger {
    /// Whether to emit ANSI colours.
    color: bool,
    /// Warnings already printed by this logger.
    seen: Mutex<HashSet<String>>,
}

impl StderrLogger {
    /// Create a logger. `color` enables ANSI colour output.
    #[must_use]
    pub fn new(color: bool) -> Self {
        Self {
            color,
            seen: Mutex::new(HashSet::new()),
        }
    }

    /// Forget every warning printed so far (call when starting a new
    /// compilation with a long-lived logger).
    pub fn clear(&self) {
        self.seen
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    /// Record `key` and return whether it had not been seen before.
    fn first_time(&self, key: String) -> bool {
        self.seen
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key)
    }
}

impl Logger for StderrLogger {
    fn warn(&self, message: &str, span: Option<&SourceSpan>, deprecation: bool) {
        let location = span.map(ToString::to_string);
        let key = format!("{message}@{}", location.as_deref().unwrap_or(""));
        if !self.first_time(key) {
            return;
        }

        let label = if deprecation {
            "Deprecation Warning"
        } else {
            "Warning"
        };
        if self.color {
            eprintln!("{}: {message}", label.yellow().bold());
        } else {
            eprintln!("{label}: {message}");
        }
        if let Some(location) = location {
            if self.color {
                eprintln!("    {}", location.dimmed());
            } else {
                eprintln!("    {location}");
            }
        }
    }

    fn debug(&self, message: &str, span: Option<&SourceSpan>) {
        match span {
            Some(span) => eprintln!("{span} DEBUG: {message}"),
            None => eprintln!("DEBUG: {message}"),
        }
    }
}

/// Discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentLogger;

impl Logger for SilentLogger {
    fn warn(&self, _message: &str, _span: Option<&SourceSpan>, _deprecation: bool) {}
}

/// Keeps warnings in memory.
#[derive(Debug, Default)]
pub struct CollectingLogger {
    warnings: Mutex<Vec<Warning>>,
}

impl CollectingLogger {
    /// Create an empty collector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A snapshot of the warnings recorded so far, oldest first.
    #[must_use]
    pub fn warnings(&self) -> Vec<Warning> {
        self.warnings
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Logger for CollectingLogger {
    fn warn(&self, message: &str, span: Option<&SourceSpan>, deprecation: bool) {
        self.warnings
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Warning {
                message: message.to_owned(),
                span: span.cloned(),
                deprecation,
            });
    }
}
