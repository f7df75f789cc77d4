//! Diagnostic module - Error and warning reporting infrastructure.
//!
//! This module provides types for creating, formatting, and collecting
//! diagnostics. Reporting never fails and never stops the phase that reports:
//! a [`Handler`] only records what it is given.
//!
//! # Examples
//!
//! ## The plain reporting call
//!
//! ```
//! use chaic_util::diagnostic::Handler;
//!
//! let handler = Handler::new();
//! handler.report("demo.chai", 2, "stray '?' found in program");
//!
//! if handler.has_errors() {
//!     for diag in handler.diagnostics() {
//!         eprintln!("{}", diag);
//!     }
//! }
//! ```
//!
//! ## Using the fluent builder API
//!
//! ```
//! use chaic_util::diagnostic::{DiagnosticBuilder, DiagnosticCode};
//!
//! let diag = DiagnosticBuilder::error("multiple '.' found in number literal")
//!     .code(DiagnosticCode::E_LEXER_MALFORMED_NUMBER)
//!     .location("demo.chai", 9)
//!     .build();
//! assert_eq!(diag.to_string(), "demo.chai:9: multiple '.' found in number literal");
//! ```

mod builder;
mod codes;
mod level;

pub use builder::DiagnosticBuilder;
pub use codes::DiagnosticCode;
pub use level::Level;

use std::cell::RefCell;
use std::fmt;

/// A diagnostic message with severity and location
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Diagnostic severity level
    pub level: Level,
    /// Main diagnostic message
    pub message: String,
    /// Name of the source the message refers to (usually a file path)
    pub source_name: String,
    /// 1-based line number
    pub line: u32,
    /// Optional diagnostic code
    pub code: Option<DiagnosticCode>,
    /// Additional notes for context
    pub notes: Vec<String>,
}

impl Diagnostic {
    /// Create a new diagnostic
    pub fn new(
        level: Level,
        message: impl Into<String>,
        source_name: impl Into<String>,
        line: u32,
    ) -> Self {
        Self {
            level,
            message: message.into(),
            source_name: source_name.into(),
            line,
            code: None,
            notes: Vec::new(),
        }
    }

    /// Create an error diagnostic
    pub fn error(message: impl Into<String>, source_name: impl Into<String>, line: u32) -> Self {
        Self::new(Level::Error, message, source_name, line)
    }

    /// Create a warning diagnostic
    pub fn warning(message: impl Into<String>, source_name: impl Into<String>, line: u32) -> Self {
        Self::new(Level::Warning, message, source_name, line)
    }

    /// Set the diagnostic code
    pub fn with_code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Add a note to the diagnostic
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }
}

/// Renders as `source:line: message`.
impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}: {}", self.source_name, self.line, self.message)
    }
}

/// Handler for collecting and reporting diagnostics
///
/// Diagnostics are stored behind a `RefCell`, so a lexer can hold a shared
/// `&Handler` for its whole lifetime while the caller still reads the
/// collected diagnostics through the same reference.
///
/// # Examples
///
/// ```
/// use chaic_util::diagnostic::Handler;
///
/// let handler = Handler::new();
/// handler.report("a.chai", 1, "stray '\\t' in program");
///
/// assert!(handler.has_errors());
/// assert_eq!(handler.error_count(), 1);
/// ```
#[derive(Debug, Default)]
pub struct Handler {
    /// Collected diagnostics
    diagnostics: RefCell<Vec<Diagnostic>>,
    /// Whether to panic on errors (for testing)
    panic_on_error: bool,
}

impl Handler {
    /// Create a new handler
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a handler that panics on errors (for testing)
    pub fn new_panicking() -> Self {
        Self {
            diagnostics: RefCell::new(Vec::new()),
            panic_on_error: true,
        }
    }

    /// Report an error at `source_name:line`
    pub fn report(&self, source_name: &str, line: u32, message: impl Into<String>) {
        self.emit(Diagnostic::error(message, source_name, line));
    }

    fn emit(&self, diagnostic: Diagnostic) {
        if self.panic_on_error && diagnostic.level == Level::Error {
            panic!("Diagnostic error: {}", diagnostic);
        }
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Emit a pre-built diagnostic
    pub fn emit_diagnostic(&self, diagnostic: Diagnostic) {
        self.emit(diagnostic);
    }

    /// Check if any errors have been reported
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .borrow()
            .iter()
            .any(|d| d.level == Level::Error)
    }

    /// Get the number of errors
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level == Level::Error)
            .count()
    }

    /// Get the number of warnings
    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level == Level::Warning)
            .count()
    }

    /// Get all diagnostics in emission order
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    /// Get the messages of all diagnostics in emission order
    pub fn messages(&self) -> Vec<String> {
        self.diagnostics
            .borrow()
            .iter()
            .map(|d| d.message.clone())
            .collect()
    }

    /// Clear all diagnostics
    pub fn clear(&self) {
        self.diagnostics.borrow_mut().clear();
    }
}
