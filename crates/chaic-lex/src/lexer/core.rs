//! Core lexer implementation.
//!
//! This module contains the Lexer struct, the step loop behind
//! [`Lexer::next_token`] and the single-character dispatch.

use std::iter::FusedIterator;
use std::str::Chars;

use chaic_util::{DiagnosticBuilder, Handler};

use super::indent::IndentTracker;
use super::literal::LiteralBuffer;
use super::Step;
use crate::config::LexerConfig;
use crate::cursor::Cursor;
use crate::error::{LexError, LiteralKind};
use crate::keywords::KeywordTable;
use crate::token::{Token, TokenKind};

/// Source name used when none is given.
const DEFAULT_SOURCE_NAME: &str = "<input>";

/// Lexer for the Chai programming language.
///
/// The lexer turns a stream of characters into tokens, synthesizing
/// `INDENT`, `DEDENT` and `NEWLINE` from the layout of the source. Malformed
/// input is reported to the [`Handler`] and skipped; scanning always runs to
/// the terminal `END` token.
///
/// # Example
///
/// ```
/// use chaic_lex::{Lexer, TokenKind};
/// use chaic_util::Handler;
///
/// let handler = Handler::new();
/// let mut lexer = Lexer::new("if x:\n    pass\n", &handler);
/// let kinds: Vec<TokenKind> = lexer.tokenize().iter().map(|t| t.kind()).collect();
///
/// assert_eq!(
///     kinds,
///     [
///         TokenKind::If,
///         TokenKind::IdName,
///         TokenKind::Colon,
///         TokenKind::Newline,
///         TokenKind::Indent,
///         TokenKind::Pass,
///         TokenKind::Newline,
///         TokenKind::Dedent,
///         TokenKind::End,
///     ]
/// );
/// assert!(!handler.has_errors());
/// ```
pub struct Lexer<'a, I = Chars<'a>>
where
    I: Iterator<Item = char>,
{
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<I>,

    /// Error handler for reporting lexical errors.
    pub(crate) handler: &'a Handler,

    /// Name used in diagnostics.
    pub(crate) source_name: String,

    /// Reserved word lookup.
    pub(crate) keywords: &'a KeywordTable,

    pub(crate) config: LexerConfig,

    /// Current line number (1-based).
    pub(crate) line: u32,

    pub(crate) indent: IndentTracker,
}

impl<'a> Lexer<'a, Chars<'a>> {
    /// Creates a new lexer over an in-memory source.
    pub fn new(source: &'a str, handler: &'a Handler) -> Self {
        Self::from_chars(source.chars(), DEFAULT_SOURCE_NAME, handler)
    }
}

impl<'a, I: Iterator<Item = char>> Lexer<'a, I> {
    /// Creates a lexer over any character iterator.
    pub fn from_chars(chars: I, source_name: impl Into<String>, handler: &'a Handler) -> Self {
        Self {
            cursor: Cursor::new(chars),
            handler,
            source_name: source_name.into(),
            keywords: KeywordTable::global(),
            config: LexerConfig::default(),
            line: 1,
            indent: IndentTracker::new(),
        }
    }

    /// Sets the name diagnostics refer to.
    pub fn with_source_name(mut self, source_name: impl Into<String>) -> Self {
        self.source_name = source_name.into();
        self
    }

    /// Replaces the configuration.
    pub fn with_config(mut self, config: LexerConfig) -> Self {
        self.config = config;
        self
    }

    /// Uses `keywords` instead of the shared table.
    pub fn with_keywords(mut self, keywords: &'a KeywordTable) -> Self {
        self.keywords = keywords;
        self
    }

    /// Returns the next token from the source.
    ///
    /// Whitespace, comments, line continuations and malformed input are
    /// consumed internally. Once the end of input has been reached and every
    /// owed `DEDENT` has been produced, every further call returns `END`.
    pub fn next_token(&mut self) -> Token {
        loop {
            match self.step() {
                Step::Emit(token) => return token,
                Step::Skip => {},
                Step::Error(error) => self.report(error),
            }
        }
    }

    /// Scans every remaining token, up to and including `END`.
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let done = token.is_end();
            tokens.push(token);
            if done {
                return tokens;
            }
        }
    }

    /// Reports a lexical error at the current line.
    pub(crate) fn report(&self, error: LexError) {
        DiagnosticBuilder::error(error.to_string())
            .code(error.code())
            .location(self.source_name.as_str(), self.line)
            .emit(self.handler);
    }

    /// Builds a payload-free token on the current line.
    pub(crate) fn emit(&self, kind: TokenKind) -> Step {
        Step::Emit(Token::new(kind, self.line))
    }

    pub(crate) fn literal_buffer(&self) -> LiteralBuffer {
        LiteralBuffer::new(self.config.effective_literal_len())
    }

    /// Appends `c` to `buf`. On overflow the error is reported, the rest of
    /// the run matching `class` is consumed and `false` is returned.
    pub(crate) fn accept(
        &mut self,
        buf: &mut LiteralBuffer,
        c: char,
        kind: LiteralKind,
        class: impl FnMut(char) -> bool,
    ) -> bool {
        if buf.push(c) {
            return true;
        }
        self.report(LexError::LiteralTooLong(kind));
        self.cursor.skip_while(class);
        false
    }

    /// One pass of the state machine.
    fn step(&mut self) -> Step {
        if self.indent.take_dedent() {
            return self.emit(TokenKind::Dedent);
        }

        let current = self.cursor.read();

        // An unindented line closes every open block before anything on it.
        if self.indent.at_line_start() && !matches!(current, Some(' ' | '\n')) {
            if let Some(c) = current {
                self.cursor.pushback(c);
            }
            self.indent.leave_line_start();
            self.indent.flush_all();
            return Step::Skip;
        }

        let Some(c) = current else {
            return self.end_of_input();
        };

        match c {
            '~' => self.emit(TokenKind::Complement),
            ',' => self.emit(TokenKind::Comma),
            '(' => self.emit(TokenKind::LParen),
            ')' => self.emit(TokenKind::RParen),
            '[' => self.emit(TokenKind::LBrack),
            ']' => self.emit(TokenKind::RBrack),
            '{' => self.emit(TokenKind::LBrace),
            '}' => self.emit(TokenKind::RBrace),
            '_' => self.emit(TokenKind::Uscore),
            '+' => self.lex_with_assign(TokenKind::Plus, TokenKind::PlusAssign),
            '%' => self.lex_with_assign(TokenKind::Modulus, TokenKind::ModAssign),
            '&' => self.lex_with_assign(TokenKind::BitAnd, TokenKind::BitAndAssign),
            '^' => self.lex_with_assign(TokenKind::BitXor, TokenKind::BitXorAssign),
            '=' => self.lex_equals(),
            ':' => self.lex_colon(),
            '!' => self.lex_bang(),
            '.' => self.lex_dot(),
            '-' => self.lex_minus(),
            '*' => self.lex_star(),
            '/' => self.lex_slash(),
            '<' => self.lex_less(),
            '>' => self.lex_greater(),
            '|' => self.lex_pipe(),
            '#' => self.skip_comment(),
            '\\' => self.lex_continuation(),
            '"' => Step::Emit(self.lex_string()),
            ' ' if self.indent.at_line_start() => self.lex_indentation(),
            ' ' => Step::Skip,
            '\n' => {
                let token = Token::new(TokenKind::Newline, self.line);
                self.line += 1;
                self.indent.begin_line();
                Step::Emit(token)
            },
            c if c.is_ascii_alphabetic() => Step::Emit(self.lex_word(c)),
            c if c.is_ascii_digit() => Step::Emit(self.lex_number(c)),
            c => Step::Error(LexError::StrayChar(c)),
        }
    }

    fn end_of_input(&mut self) -> Step {
        if self.indent.level() > 0 {
            self.indent.flush_all();
            Step::Skip
        } else {
            self.emit(TokenKind::End)
        }
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the current indentation depth.
    pub fn indent_level(&self) -> usize {
        self.indent.level()
    }

    /// Returns the established spaces per indentation level, or 0 before
    /// the first indented line.
    pub fn indent_unit(&self) -> usize {
        self.indent.unit()
    }

    /// Returns the name diagnostics refer to.
    pub fn source_name(&self) -> &str {
        &self.source_name
    }
}

/// Yields every token before `END`.
impl<I: Iterator<Item = char>> Iterator for Lexer<'_, I> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        if token.is_end() {
            None
        } else {
            Some(token)
        }
    }
}

impl<I: Iterator<Item = char>> FusedIterator for Lexer<'_, I> {}
