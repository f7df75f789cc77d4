//! Indentation tracking.
//!
//! Leading spaces are measured at the start of each line and compared with
//! the current depth. The width of the first indented line becomes the
//! indentation unit for the rest of the source. Dedents are never emitted in
//! bulk: they are owed, then handed out one per call to `next_token`.

use tracing::trace;

use super::Step;
use crate::error::LexError;
use crate::token::TokenKind;
use crate::Lexer;

/// Result of measuring a line's indentation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum IndentChange {
    /// One level deeper
    Indent,
    /// Same depth as before
    Unchanged,
    /// Shallower; the difference is now owed as dedents
    Dedent,
}

#[derive(Clone, Debug)]
pub(crate) struct IndentTracker {
    start_of_line: bool,
    spaces_per_indent: usize,
    level: usize,
    dedents_remaining: usize,
}

impl IndentTracker {
    pub(crate) fn new() -> Self {
        Self {
            start_of_line: true,
            spaces_per_indent: 0,
            level: 0,
            dedents_remaining: 0,
        }
    }

    pub(crate) fn at_line_start(&self) -> bool {
        self.start_of_line
    }

    pub(crate) fn begin_line(&mut self) {
        self.start_of_line = true;
    }

    pub(crate) fn leave_line_start(&mut self) {
        self.start_of_line = false;
    }

    pub(crate) fn level(&self) -> usize {
        self.level
    }

    pub(crate) fn unit(&self) -> usize {
        self.spaces_per_indent
    }

    /// Hands out one owed dedent, if any.
    pub(crate) fn take_dedent(&mut self) -> bool {
        if self.dedents_remaining == 0 {
            return false;
        }
        self.dedents_remaining -= 1;
        self.level -= 1;
        true
    }

    /// Owes a dedent for every open level.
    pub(crate) fn flush_all(&mut self) {
        if self.level > 0 {
            self.schedule(self.level);
        }
    }

    fn schedule(&mut self, count: usize) {
        debug_assert!(count <= self.level);
        self.dedents_remaining = count;
        trace!(count, level = self.level, "dedents scheduled");
    }

    /// Applies a line that starts with `spaces` spaces followed by content.
    pub(crate) fn resolve(&mut self, spaces: usize) -> Result<IndentChange, LexError> {
        if self.spaces_per_indent == 0 {
            self.spaces_per_indent = spaces;
            trace!(unit = spaces, "indentation unit established");
        }

        let unit = self.spaces_per_indent;
        if spaces % unit != 0 {
            return Err(LexError::InconsistentIndent { spaces, unit });
        }

        let level = spaces / unit;
        if level == self.level + 1 {
            self.level += 1;
            Ok(IndentChange::Indent)
        } else if level > self.level {
            Err(LexError::OverIndent)
        } else if level < self.level {
            self.schedule(self.level - level);
            Ok(IndentChange::Dedent)
        } else {
            Ok(IndentChange::Unchanged)
        }
    }
}

impl<I: Iterator<Item = char>> Lexer<'_, I> {
    /// Measures leading spaces; the first one has already been read.
    ///
    /// Lines holding nothing but spaces, or spaces and a comment, leave the
    /// depth alone.
    pub(crate) fn lex_indentation(&mut self) -> Step {
        self.indent.leave_line_start();
        let spaces = 1 + self.cursor.skip_while(|c| c == ' ');

        if matches!(self.cursor.peek(), None | Some('\n' | '#')) {
            return Step::Skip;
        }

        match self.indent.resolve(spaces) {
            Ok(IndentChange::Indent) => self.emit(TokenKind::Indent),
            Ok(IndentChange::Unchanged | IndentChange::Dedent) => Step::Skip,
            Err(error) => Step::Error(error),
        }
    }
}
