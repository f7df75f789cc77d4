//! String literal lexing.

use crate::error::{LexError, LiteralKind};
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<I: Iterator<Item = char>> Lexer<'_, I> {
    /// Lexes a string literal; the opening quote has already been read.
    ///
    /// Recognized escapes are `\"`, `\\`, `\n` and `\t`. An unknown escape is
    /// reported and dropped. Line feeds inside the literal are kept. Past the
    /// length limit the scan continues to the closing quote but nothing more
    /// is kept.
    ///
    /// # Returns
    ///
    /// A `STRINGVAL` token holding the decoded text, on the line where the
    /// literal opened.
    pub(crate) fn lex_string(&mut self) -> Token {
        let line = self.line;
        let mut buf = self.literal_buffer();
        let mut overflowed = false;

        loop {
            let Some(c) = self.cursor.read() else {
                self.report(LexError::UnterminatedString);
                break;
            };

            let decoded = match c {
                '"' => break,
                '\\' => match self.cursor.read() {
                    Some('"') => '"',
                    Some('\\') => '\\',
                    Some('n') => '\n',
                    Some('t') => '\t',
                    Some(other) => {
                        self.report(LexError::InvalidEscape(other));
                        if other == '\n' {
                            self.line += 1;
                        }
                        continue;
                    },
                    None => {
                        self.report(LexError::UnterminatedString);
                        break;
                    },
                },
                '\n' => {
                    self.line += 1;
                    '\n'
                },
                c => c,
            };

            if !buf.push(decoded) && !overflowed {
                overflowed = true;
                self.report(LexError::LiteralTooLong(LiteralKind::String));
            }
        }

        Token::with_lexeme(TokenKind::StringVal, buf.into_string(), line)
    }
}
