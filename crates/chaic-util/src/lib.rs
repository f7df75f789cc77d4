//! chaic-util - Core Utilities and Foundation Types
//!
//! ============================================================================
//! MODULE OVERVIEW
//! ============================================================================
//!
//! Shared infrastructure for the chaic front end. Today this is the
//! diagnostic layer: every phase reports problems through a [`Handler`] and
//! keeps going, and the caller decides how and where to surface them.
//!
//! DIAGNOSTIC MODEL:
//! -----------------
//! A [`Diagnostic`] is a message with a severity [`Level`], an optional
//! [`DiagnosticCode`], and a location made of the source name and a 1-based
//! line number. Its `Display` form is the classic `file:line: message`:
//!
//! ```text
//! demo.chai:3: stray '!' in program
//! ```
//!
//! # Example
//!
//! ```
//! use chaic_util::{DiagnosticBuilder, DiagnosticCode, Handler};
//!
//! let handler = Handler::new();
//! handler.report("demo.chai", 3, "stray '!' in program");
//!
//! DiagnosticBuilder::error("string literal too long")
//!     .code(DiagnosticCode::E_LEXER_LITERAL_TOO_LONG)
//!     .location("demo.chai", 7)
//!     .emit(&handler);
//!
//! assert_eq!(handler.error_count(), 2);
//! assert_eq!(handler.diagnostics()[0].to_string(), "demo.chai:3: stray '!' in program");
//! ```

#![warn(missing_docs)]

pub mod diagnostic;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level};
