//! Lexer module.
//!
//! This module organizes the lexer implementation into smaller, focused components:
//! - `core` - Main Lexer struct, the step loop and character dispatch
//! - `indent` - Indentation tracking and INDENT/DEDENT synthesis
//! - `identifier` - Identifier and keyword lexing
//! - `number` - Decimal, float and prefixed integer literals
//! - `string` - String literals and escapes
//! - `operator` - Operators and punctuation
//! - `comment` - Comments and line continuations
//! - `literal` - Length-limited literal buffer

mod comment;
mod core;
mod identifier;
mod indent;
mod literal;
mod number;
mod operator;
mod string;

pub use self::core::Lexer;

use crate::error::LexError;
use crate::token::Token;

/// Outcome of one pass through the dispatch loop.
#[derive(Debug)]
pub(crate) enum Step {
    /// A token is ready for the caller.
    Emit(Token),
    /// Input was consumed without producing a token.
    Skip,
    /// Input was malformed; report and keep going.
    Error(LexError),
}
