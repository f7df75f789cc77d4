//! Lexer configuration.

/// Default upper bound on the length of a single literal, in characters.
pub const DEFAULT_MAX_LITERAL_LEN: usize = 1024;

/// Smallest literal limit the lexer honours. Lower values are raised to it.
pub const MIN_MAX_LITERAL_LEN: usize = 1;

/// Tunables for a [`Lexer`](crate::Lexer).
///
/// The literal limit is soft: a literal that grows past it is reported once,
/// the rest of its characters are consumed, and the lexeme is truncated to
/// the limit. A limit below [`MIN_MAX_LITERAL_LEN`] is raised to it.
///
/// # Example
///
/// ```
/// use chaic_lex::LexerConfig;
///
/// let config = LexerConfig::default().with_max_literal_len(64);
/// assert_eq!(config.max_literal_len, 64);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct LexerConfig {
    /// Maximum number of characters kept in a string, number or identifier
    pub max_literal_len: usize,
}

impl LexerConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the literal length limit.
    pub fn with_max_literal_len(mut self, max_literal_len: usize) -> Self {
        self.max_literal_len = max_literal_len.max(MIN_MAX_LITERAL_LEN);
        self
    }

    /// The limit actually applied, for values set directly on the field.
    pub fn effective_literal_len(&self) -> usize {
        self.max_literal_len.max(MIN_MAX_LITERAL_LEN)
    }
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            max_literal_len: DEFAULT_MAX_LITERAL_LEN,
        }
    }
}
