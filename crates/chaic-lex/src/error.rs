//! Lexical errors.
//!
//! None of these stop a scan. The lexer turns each one into a diagnostic
//! and keeps producing tokens.

use std::fmt;

use chaic_util::DiagnosticCode;
use thiserror::Error;

/// Base of a prefixed integer literal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Radix {
    /// `0b` / `0B`
    Binary,
    /// `0o` / `0O`
    Octal,
    /// `0x` / `0X`
    Hexadecimal,
}

impl Radix {
    /// Maps the character after a leading `0` to a radix.
    pub fn from_prefix(c: char) -> Option<Self> {
        match c {
            'b' | 'B' => Some(Radix::Binary),
            'o' | 'O' => Some(Radix::Octal),
            'x' | 'X' => Some(Radix::Hexadecimal),
            _ => None,
        }
    }

    /// Returns true if `c` is a digit in this base.
    pub fn is_digit(self, c: char) -> bool {
        match self {
            Radix::Binary => matches!(c, '0' | '1'),
            Radix::Octal => matches!(c, '0'..='7'),
            Radix::Hexadecimal => c.is_ascii_hexdigit(),
        }
    }

    /// Returns true if `c` cannot continue a literal of this base and must
    /// be reported rather than treated as a delimiter.
    pub fn is_illegal(self, c: char) -> bool {
        match self {
            Radix::Hexadecimal => c.is_ascii_alphabetic(),
            Radix::Binary | Radix::Octal => c.is_ascii_alphanumeric(),
        }
    }

    /// Human-readable name used in messages.
    pub const fn name(self) -> &'static str {
        match self {
            Radix::Binary => "binary",
            Radix::Octal => "octal",
            Radix::Hexadecimal => "hexadecimal",
        }
    }
}

impl fmt::Display for Radix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The class of literal that overflowed the length limit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LiteralKind {
    /// String literal
    String,
    /// Identifier or type name
    Identifier,
    /// Decimal or float literal
    Numeric,
    /// Prefixed integer literal
    Radix(Radix),
}

impl fmt::Display for LiteralKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiteralKind::String => f.write_str("string literal"),
            LiteralKind::Identifier => f.write_str("identifier name"),
            LiteralKind::Numeric => f.write_str("numeric literal"),
            LiteralKind::Radix(radix) => write!(f, "{} literal", radix),
        }
    }
}

/// A malformed construct found while scanning.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LexError {
    /// `\` followed by anything but `"`, `\`, `n` or `t` inside a string
    #[error("invalid escape sequence in string literal: {}", escape_spelling(.0))]
    InvalidEscape(char),

    /// End of input reached before the closing quote
    #[error("unterminated string literal")]
    UnterminatedString,

    /// A literal grew past the configured limit
    #[error("{0} too long")]
    LiteralTooLong(LiteralKind),

    /// A letter or digit outside the literal's base
    #[error("illegal '{digit}' found in {radix} literal")]
    IllegalDigit {
        /// Offending character
        digit: char,
        /// Base of the literal being scanned
        radix: Radix,
    },

    /// A second `.` in a decimal literal
    #[error("multiple '.' found in number literal")]
    MultipleDots,

    /// A second exponent marker in a decimal literal
    #[error("multiple 'E' found in number literal")]
    MultipleExponents,

    /// A letter where a digit was expected
    #[error("'{0}' found in number literal")]
    UnexpectedInNumber(char),

    /// A radix prefix with nothing after it
    #[error("no digits after {0} prefix")]
    MissingDigits(Radix),

    /// Indentation width not a multiple of the established unit
    #[error("indentation of {spaces} spaces not consistent with previous indent width of {unit}")]
    InconsistentIndent {
        /// Leading spaces on the offending line
        spaces: usize,
        /// Established spaces per level
        unit: usize,
    },

    /// Indentation more than one level deeper than the current block
    #[error("indentation of more than one level encountered")]
    OverIndent,

    /// A character that cannot start any token
    #[error("stray '{}' in program", .0.escape_debug())]
    StrayChar(char),

    /// A backslash not immediately followed by a line feed
    #[error("unexpected character after line break")]
    BadContinuation,
}

/// Spells `\` followed by `c`, naming a line feed instead of printing `\n`.
fn escape_spelling(c: &char) -> String {
    match *c {
        '\n' => "\\<newline>".to_string(),
        c => format!("\\{}", c.escape_debug()),
    }
}

impl LexError {
    /// Diagnostic code reported alongside the message.
    pub fn code(&self) -> DiagnosticCode {
        match self {
            LexError::InvalidEscape(_) => DiagnosticCode::E_LEXER_INVALID_ESCAPE,
            LexError::UnterminatedString => DiagnosticCode::E_LEXER_UNTERMINATED_STRING,
            LexError::LiteralTooLong(_) => DiagnosticCode::E_LEXER_LITERAL_TOO_LONG,
            LexError::IllegalDigit { .. } => DiagnosticCode::E_LEXER_ILLEGAL_DIGIT,
            LexError::MultipleDots
            | LexError::MultipleExponents
            | LexError::UnexpectedInNumber(_) => DiagnosticCode::E_LEXER_MALFORMED_NUMBER,
            LexError::MissingDigits(_) => DiagnosticCode::E_LEXER_MISSING_DIGITS,
            LexError::InconsistentIndent { .. } => DiagnosticCode::E_LEXER_INCONSISTENT_INDENT,
            LexError::OverIndent => DiagnosticCode::E_LEXER_OVER_INDENT,
            LexError::StrayChar(_) => DiagnosticCode::E_LEXER_STRAY_CHAR,
            LexError::BadContinuation => DiagnosticCode::E_LEXER_BAD_CONTINUATION,
        }
    }
}
