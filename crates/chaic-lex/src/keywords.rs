//! Reserved word table.
//!
//! Maps the spelling of every reserved word and built-in type name to its
//! [`TokenKind`]. The table is built once per process through [`KeywordTable::global`]
//! and shared read-only by every lexer.

use std::sync::LazyLock;

use rustc_hash::FxHashMap;

use crate::token::TokenKind;

/// All reserved spellings, in the order they are inserted.
const RESERVED: &[(&str, TokenKind)] = &[
    ("and", TokenKind::And),
    ("assert", TokenKind::Assert),
    ("break", TokenKind::Break),
    ("case", TokenKind::Case),
    ("class", TokenKind::Class),
    ("continue", TokenKind::Continue),
    ("def", TokenKind::Def),
    ("elif", TokenKind::Elif),
    ("else", TokenKind::Else),
    ("for", TokenKind::For),
    ("if", TokenKind::If),
    ("in", TokenKind::In),
    ("lambda", TokenKind::Lambda),
    ("let", TokenKind::Let),
    ("match", TokenKind::Match),
    ("not", TokenKind::Not),
    ("of", TokenKind::Of),
    ("or", TokenKind::Or),
    ("pass", TokenKind::Pass),
    ("return", TokenKind::Return),
    ("type", TokenKind::Type),
    ("var", TokenKind::Var),
    ("while", TokenKind::While),
    ("Int", TokenKind::Int),
    ("Float", TokenKind::Float),
    ("String", TokenKind::String),
    ("Bool", TokenKind::Bool),
    ("Void", TokenKind::Void),
    ("True", TokenKind::True),
    ("False", TokenKind::False),
];

/// Process-wide keyword table, initialized on first use.
static GLOBAL: LazyLock<KeywordTable> = LazyLock::new(KeywordTable::new);

/// Exact-match lookup from reserved spelling to token kind.
///
/// # Example
///
/// ```
/// use chaic_lex::{KeywordTable, TokenKind};
///
/// let table = KeywordTable::global();
/// assert_eq!(table.lookup("while"), Some(TokenKind::While));
/// assert_eq!(table.lookup("Void"), Some(TokenKind::Void));
/// assert_eq!(table.lookup("While"), None);
/// ```
#[derive(Clone, Debug)]
pub struct KeywordTable {
    map: FxHashMap<&'static str, TokenKind>,
}

impl KeywordTable {
    /// Builds a fresh table holding every reserved word.
    pub fn new() -> Self {
        let mut map = FxHashMap::default();
        map.reserve(RESERVED.len());
        for &(spelling, kind) in RESERVED {
            map.insert(spelling, kind);
        }
        Self { map }
    }

    /// Returns the shared table.
    pub fn global() -> &'static KeywordTable {
        &GLOBAL
    }

    /// Looks up `word`, returning its kind if it is reserved.
    #[inline]
    pub fn lookup(&self, word: &str) -> Option<TokenKind> {
        self.map.get(word).copied()
    }

    /// Number of reserved spellings.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns true if the table holds no entries.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Iterates over `(spelling, kind)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, TokenKind)> + '_ {
        self.map.iter().map(|(&spelling, &kind)| (spelling, kind))
    }
}

impl Default for KeywordTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_reserved_word_is_found() {
        let table = KeywordTable::new();
        assert_eq!(table.len(), RESERVED.len());
        for &(spelling, kind) in RESERVED {
            assert_eq!(table.lookup(spelling), Some(kind), "{}", spelling);
        }
    }

    #[test]
    fn test_spelling_matches_kind() {
        for (spelling, kind) in KeywordTable::global().iter() {
            assert!(kind.is_keyword());
            assert_eq!(kind.spelling(), Some(spelling));
        }
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let table = KeywordTable::global();
        assert_eq!(table.lookup("If"), None);
        assert_eq!(table.lookup("int"), None);
        assert_eq!(table.lookup("true"), None);
    }

    #[test]
    fn test_non_keywords() {
        let table = KeywordTable::global();
        assert_eq!(table.lookup(""), None);
        assert_eq!(table.lookup("iff"), None);
        assert_eq!(table.lookup("lets"), None);
        assert!(!table.is_empty());
    }

    #[test]
    fn test_global_is_shared() {
        assert!(std::ptr::eq(KeywordTable::global(), KeywordTable::global()));
    }
}
