//! Diagnostic builder for fluent diagnostic construction.

use super::{Diagnostic, DiagnosticCode, Handler, Level};

/// Builder for constructing diagnostics with a fluent API
///
/// # Examples
///
/// ```
/// use chaic_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Handler};
///
/// let handler = Handler::new();
/// DiagnosticBuilder::error("indentation of more than one level encountered")
///     .code(DiagnosticCode::E_LEXER_OVER_INDENT)
///     .location("main.chai", 12)
///     .note("each nested block must be indented by exactly one unit")
///     .emit(&handler);
///
/// let diag = &handler.diagnostics()[0];
/// assert_eq!(diag.line, 12);
/// assert_eq!(diag.notes.len(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct DiagnosticBuilder {
    level: Level,
    message: String,
    source_name: String,
    line: u32,
    code: Option<DiagnosticCode>,
    notes: Vec<String>,
}

impl DiagnosticBuilder {
    /// Create a new diagnostic builder with the given level and message
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            source_name: String::new(),
            line: 0,
            code: None,
            notes: Vec::new(),
        }
    }

    /// Create an error diagnostic builder
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Level::Error, message)
    }

    /// Create a warning diagnostic builder
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Level::Warning, message)
    }

    /// Set the diagnostic code
    pub fn code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Set the source name and 1-based line the diagnostic points at
    pub fn location(mut self, source_name: impl Into<String>, line: u32) -> Self {
        self.source_name = source_name.into();
        self.line = line;
        self
    }

    /// Add a note to the diagnostic
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Build the diagnostic
    pub fn build(self) -> Diagnostic {
        Diagnostic {
            level: self.level,
            message: self.message,
            source_name: self.source_name,
            line: self.line,
            code: self.code,
            notes: self.notes,
        }
    }

    /// Build and emit the diagnostic to a handler
    pub fn emit(self, handler: &Handler) {
        handler.emit_diagnostic(self.build());
    }
}
