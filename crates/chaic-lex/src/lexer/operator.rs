//! Operator and punctuation lexing.
//!
//! Every operator is recognized with at most two characters of lookahead,
//! taken one at a time through [`Cursor::match_char`](crate::Cursor::match_char).

use super::Step;
use crate::error::LexError;
use crate::token::TokenKind;
use crate::Lexer;

impl<I: Iterator<Item = char>> Lexer<'_, I> {
    /// Lexes `op` or `op=`.
    pub(crate) fn lex_with_assign(&mut self, plain: TokenKind, assign: TokenKind) -> Step {
        let kind = if self.cursor.match_char('=') { assign } else { plain };
        self.emit(kind)
    }

    /// Lexes `=` or `==`.
    pub(crate) fn lex_equals(&mut self) -> Step {
        let kind = if self.cursor.match_char('=') {
            TokenKind::Equals
        } else {
            TokenKind::Assign
        };
        self.emit(kind)
    }

    /// Lexes `:` or `::`.
    pub(crate) fn lex_colon(&mut self) -> Step {
        let kind = if self.cursor.match_char(':') {
            TokenKind::Cons
        } else {
            TokenKind::Colon
        };
        self.emit(kind)
    }

    /// Lexes `!=`. A bare `!` is an error.
    pub(crate) fn lex_bang(&mut self) -> Step {
        if self.cursor.match_char('=') {
            self.emit(TokenKind::NotEquals)
        } else {
            Step::Error(LexError::StrayChar('!'))
        }
    }

    /// Lexes `..` or a number starting with `.`. A lone `.` is an error.
    pub(crate) fn lex_dot(&mut self) -> Step {
        if self.cursor.match_char('.') {
            return self.emit(TokenKind::Elipsis);
        }
        match self.cursor.peek() {
            Some(c) if c.is_ascii_digit() => Step::Emit(self.lex_number('.')),
            _ => Step::Error(LexError::StrayChar('.')),
        }
    }

    /// Lexes `-`, `-=` or `->`.
    pub(crate) fn lex_minus(&mut self) -> Step {
        let kind = if self.cursor.match_char('=') {
            TokenKind::MinusAssign
        } else if self.cursor.match_char('>') {
            TokenKind::Arrow
        } else {
            TokenKind::Minus
        };
        self.emit(kind)
    }

    /// Lexes `*`, `*=`, `**` or `**=`.
    pub(crate) fn lex_star(&mut self) -> Step {
        let kind = if self.cursor.match_char('=') {
            TokenKind::TimesAssign
        } else if self.cursor.match_char('*') {
            self.doubled(TokenKind::Power, TokenKind::PowerAssign)
        } else {
            TokenKind::Times
        };
        self.emit(kind)
    }

    /// Lexes `/`, `/=`, `//` or `//=`.
    pub(crate) fn lex_slash(&mut self) -> Step {
        let kind = if self.cursor.match_char('=') {
            TokenKind::DivAssign
        } else if self.cursor.match_char('/') {
            self.doubled(TokenKind::IntDiv, TokenKind::IntDivAssign)
        } else {
            TokenKind::Divide
        };
        self.emit(kind)
    }

    /// Lexes `<`, `<=`, `<<` or `<<=`.
    pub(crate) fn lex_less(&mut self) -> Step {
        let kind = if self.cursor.match_char('=') {
            TokenKind::LessEq
        } else if self.cursor.match_char('<') {
            self.doubled(TokenKind::LShift, TokenKind::LShiftAssign)
        } else {
            TokenKind::Less
        };
        self.emit(kind)
    }

    /// Lexes `>`, `>=`, `>>` or `>>=`.
    pub(crate) fn lex_greater(&mut self) -> Step {
        let kind = if self.cursor.match_char('=') {
            TokenKind::GreaterEq
        } else if self.cursor.match_char('>') {
            self.doubled(TokenKind::RShift, TokenKind::RShiftAssign)
        } else {
            TokenKind::Greater
        };
        self.emit(kind)
    }

    /// Lexes `|` or `|=`.
    ///
    /// A `|` that ends a line swallows the line feed: the line counter moves
    /// on but the next line is not checked for indentation.
    pub(crate) fn lex_pipe(&mut self) -> Step {
        if self.cursor.match_char('=') {
            return self.emit(TokenKind::BitOrAssign);
        }
        let bar = self.emit(TokenKind::Bar);
        if self.cursor.match_char('\n') {
            self.line += 1;
        }
        bar
    }

    fn doubled(&mut self, plain: TokenKind, assign: TokenKind) -> TokenKind {
        if self.cursor.match_char('=') {
            assign
        } else {
            plain
        }
    }
}
