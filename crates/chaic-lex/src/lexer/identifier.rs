//! Identifier and keyword lexing.

use crate::error::LiteralKind;
use crate::token::{Token, TokenKind};
use crate::Lexer;

/// Returns true for characters that may continue a word.
#[inline]
pub(crate) fn is_word_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

impl<I: Iterator<Item = char>> Lexer<'_, I> {
    /// Lexes a word whose first letter has already been read.
    ///
    /// Reserved words become their keyword kind. Other words are type names
    /// when they start with an uppercase letter and identifiers otherwise.
    pub(crate) fn lex_word(&mut self, first: char) -> Token {
        let line = self.line;
        let mut buf = self.literal_buffer();

        if self.accept(&mut buf, first, LiteralKind::Identifier, is_word_continue) {
            while let Some(c) = self.cursor.peek() {
                if !is_word_continue(c) {
                    break;
                }
                self.cursor.read();
                if !self.accept(&mut buf, c, LiteralKind::Identifier, is_word_continue) {
                    break;
                }
            }
        }

        if let Some(kind) = self.keywords.lookup(buf.as_str()) {
            return Token::new(kind, line);
        }

        let kind = if first.is_ascii_uppercase() {
            TokenKind::TypeName
        } else {
            TokenKind::IdName
        };
        Token::with_lexeme(kind, buf.into_string(), line)
    }
}
