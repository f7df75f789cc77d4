//! Diagnostic codes for categorizing lexical errors.
//!
//! # Examples
//!
//! ```
//! use chaic_util::diagnostic::DiagnosticCode;
//!
//! let code = DiagnosticCode::E_LEXER_STRAY_CHAR;
//! assert_eq!(code.prefix(), "E");
//! assert_eq!(code.number(), 1009);
//! assert_eq!(code.as_str(), "E1009");
//! ```

use std::fmt;

/// A unique code identifying a diagnostic message
///
/// Codes follow the format `{prefix}{number}` with the number padded to
/// four digits. Lexer codes live in the `E1xxx` range.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    /// The prefix (e.g., "E" for error, "W" for warning)
    pub prefix: &'static str,
    /// The numeric identifier
    pub number: u32,
}

impl DiagnosticCode {
    /// Create a new diagnostic code
    ///
    /// # Examples
    ///
    /// ```
    /// use chaic_util::diagnostic::DiagnosticCode;
    ///
    /// let code = DiagnosticCode::new("W", 7);
    /// assert_eq!(code.as_str(), "W0007");
    /// ```
    #[inline]
    pub const fn new(prefix: &'static str, number: u32) -> Self {
        Self { prefix, number }
    }

    /// Get the prefix (e.g., "E" for error, "W" for warning)
    #[inline]
    pub const fn prefix(&self) -> &'static str {
        self.prefix
    }

    /// Get the numeric identifier
    #[inline]
    pub const fn number(&self) -> u32 {
        self.number
    }

    /// Get the string representation of the code
    pub fn as_str(&self) -> String {
        format!("{}{:04}", self.prefix, self.number)
    }

    // Lexer errors (E1xxx)

    /// Unrecognized escape sequence in a string literal
    pub const E_LEXER_INVALID_ESCAPE: Self = Self::new("E", 1001);
    /// String literal still open at end of input
    pub const E_LEXER_UNTERMINATED_STRING: Self = Self::new("E", 1002);
    /// Literal longer than the configured limit
    pub const E_LEXER_LITERAL_TOO_LONG: Self = Self::new("E", 1003);
    /// Digit outside the literal's declared base
    pub const E_LEXER_ILLEGAL_DIGIT: Self = Self::new("E", 1004);
    /// Malformed decimal or float literal
    pub const E_LEXER_MALFORMED_NUMBER: Self = Self::new("E", 1005);
    /// Radix prefix with no digits after it
    pub const E_LEXER_MISSING_DIGITS: Self = Self::new("E", 1006);
    /// Indentation width not a multiple of the established unit
    pub const E_LEXER_INCONSISTENT_INDENT: Self = Self::new("E", 1007);
    /// Indentation deeper than one level past the current one
    pub const E_LEXER_OVER_INDENT: Self = Self::new("E", 1008);
    /// Character that cannot start any token
    pub const E_LEXER_STRAY_CHAR: Self = Self::new("E", 1009);
    /// Backslash not followed by a line feed
    pub const E_LEXER_BAD_CONTINUATION: Self = Self::new("E", 1010);
}

impl fmt::Debug for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DiagnosticCode({})", self.as_str())
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:04}", self.prefix, self.number)
    }
}
