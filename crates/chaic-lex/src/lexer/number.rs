//! Number literal lexing.
//!
//! This module handles decimal integers, floats and prefixed integers.
//! Lexemes keep the exact spelling from the source; no value is computed.
//!
//! # Number Formats
//!
//! - Decimal: `42`, `0`
//! - Float: `3.14`, `.5`, `1e10`, `3.14e-2`
//! - Hexadecimal: `0x1A`, `0XFF`
//! - Binary: `0b1010`
//! - Octal: `0o777`

use super::literal::LiteralBuffer;
use crate::error::{LexError, LiteralKind, Radix};
use crate::token::{Token, TokenKind};
use crate::Lexer;

fn is_decimal_run(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}

impl<I: Iterator<Item = char>> Lexer<'_, I> {
    /// Lexes a number whose first character (a digit or `.`) has been read.
    pub(crate) fn lex_number(&mut self, first: char) -> Token {
        let line = self.line;

        if first == '0' {
            let prefixed = self
                .cursor
                .peek()
                .and_then(|marker| Radix::from_prefix(marker).map(|radix| (marker, radix)));
            if let Some((marker, radix)) = prefixed {
                self.cursor.read();
                return self.lex_radix(radix, marker, line);
            }
        }

        self.lex_decimal(first, line)
    }

    /// Lexes the digits after a `0x`, `0b` or `0o` prefix.
    fn lex_radix(&mut self, radix: Radix, marker: char, line: u32) -> Token {
        let mut buf = LiteralBuffer::with_prefix(
            self.config.effective_literal_len(),
            &format!("0{}", marker),
        );

        let kind = LiteralKind::Radix(radix);
        let mut digits = 0usize;
        let mut illegal = false;

        while let Some(c) = self.cursor.peek() {
            if radix.is_digit(c) {
                self.cursor.read();
                digits += 1;
                if !self.accept(&mut buf, c, kind, |c| radix.is_digit(c)) {
                    break;
                }
            } else {
                if radix.is_illegal(c) {
                    self.report(LexError::IllegalDigit { digit: c, radix });
                    illegal = true;
                }
                break;
            }
        }

        if digits == 0 && !illegal {
            self.report(LexError::MissingDigits(radix));
        }

        Token::with_lexeme(TokenKind::IntVal, buf.into_string(), line)
    }

    /// Lexes a decimal integer or float.
    fn lex_decimal(&mut self, first: char, line: u32) -> Token {
        let mut buf = self.literal_buffer();
        let mut seen_dot = first == '.';
        let mut seen_exp = false;

        if self.accept(&mut buf, first, LiteralKind::Numeric, is_decimal_run) {
            while let Some(c) = self.cursor.peek() {
                match c {
                    '.' if seen_dot => {
                        self.report(LexError::MultipleDots);
                        break;
                    },
                    '.' => seen_dot = true,
                    'e' | 'E' if seen_exp => {
                        self.report(LexError::MultipleExponents);
                        break;
                    },
                    'e' | 'E' => {
                        seen_exp = true;
                        self.cursor.read();
                        if !self.accept(&mut buf, c, LiteralKind::Numeric, is_decimal_run) {
                            break;
                        }
                        if self.cursor.match_char('-')
                            && !self.accept(&mut buf, '-', LiteralKind::Numeric, is_decimal_run)
                        {
                            break;
                        }
                        continue;
                    },
                    c if c.is_ascii_digit() => {},
                    c if c.is_ascii_alphabetic() => {
                        self.report(LexError::UnexpectedInNumber(c));
                        break;
                    },
                    _ => break,
                }

                self.cursor.read();
                if !self.accept(&mut buf, c, LiteralKind::Numeric, is_decimal_run) {
                    break;
                }
            }
        }

        let kind = if seen_dot || seen_exp {
            TokenKind::FloatVal
        } else {
            TokenKind::IntVal
        };
        Token::with_lexeme(kind, buf.into_string(), line)
    }
}
