//! Character cursor with a single character of pushback.
//!
//! The cursor wraps any `char` iterator, so the lexer can scan an in-memory
//! string, a decoded file or anything else that yields characters. End of
//! input is `None`, and the cursor is fused: once the underlying iterator is
//! exhausted it is never polled again.

/// Sequential reader over a character source.
///
/// At most one character can be pushed back between reads. [`Cursor::peek`]
/// uses the same slot, so a peeked character must be read before another
/// one is pushed back.
///
/// # Example
///
/// ```
/// use chaic_lex::Cursor;
///
/// let mut cursor = Cursor::new("ab".chars());
/// assert_eq!(cursor.read(), Some('a'));
/// cursor.pushback('a');
/// assert_eq!(cursor.read(), Some('a'));
/// assert!(cursor.match_char('b'));
/// assert_eq!(cursor.read(), None);
/// assert_eq!(cursor.read(), None);
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<I> {
    chars: I,
    pushed: Option<char>,
    exhausted: bool,
    chars_read: usize,
}

impl<I: Iterator<Item = char>> Cursor<I> {
    /// Creates a cursor positioned before the first character of `chars`.
    pub fn new(chars: I) -> Self {
        Self {
            chars,
            pushed: None,
            exhausted: false,
            chars_read: 0,
        }
    }

    /// Consumes and returns the next character, or `None` at end of input.
    pub fn read(&mut self) -> Option<char> {
        let c = match self.pushed.take() {
            Some(c) => Some(c),
            None => self.pull(),
        };
        if c.is_some() {
            self.chars_read += 1;
        }
        c
    }

    /// Makes the next [`read`](Self::read) return `c` again.
    ///
    /// Only one character may be pending at a time.
    pub fn pushback(&mut self, c: char) {
        debug_assert!(
            self.pushed.is_none(),
            "cursor already holds a pushed-back character"
        );
        self.pushed = Some(c);
        self.chars_read = self.chars_read.saturating_sub(1);
    }

    /// Returns the next character without consuming it.
    pub fn peek(&mut self) -> Option<char> {
        if self.pushed.is_none() {
            self.pushed = self.pull();
        }
        self.pushed
    }

    /// Consumes the next character if it equals `expected`.
    pub fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.read();
            true
        } else {
            false
        }
    }

    /// Consumes characters while `pred` holds and returns how many were consumed.
    pub fn skip_while(&mut self, mut pred: impl FnMut(char) -> bool) -> usize {
        let mut count = 0;
        while let Some(c) = self.peek() {
            if !pred(c) {
                break;
            }
            self.read();
            count += 1;
        }
        count
    }

    /// Consumes characters up to, but not including, the next `stop`.
    pub fn skip_until(&mut self, stop: char) -> usize {
        self.skip_while(|c| c != stop)
    }

    /// Number of characters consumed so far, net of pushbacks.
    pub fn chars_read(&self) -> usize {
        self.chars_read
    }

    fn pull(&mut self) -> Option<char> {
        if self.exhausted {
            return None;
        }
        let next = self.chars.next();
        if next.is_none() {
            self.exhausted = true;
        }
        next
    }
}
