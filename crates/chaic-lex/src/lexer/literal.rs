//! Length-limited buffer shared by the literal scanners.

/// Owned text of a literal being scanned, capped at a character limit.
#[derive(Debug)]
pub(crate) struct LiteralBuffer {
    text: String,
    len: usize,
    limit: usize,
}

impl LiteralBuffer {
    pub(crate) fn new(limit: usize) -> Self {
        Self {
            text: String::new(),
            len: 0,
            limit,
        }
    }

    /// Starts a buffer holding `prefix`, which is kept even when it is
    /// longer than `limit`.
    pub(crate) fn with_prefix(limit: usize, prefix: &str) -> Self {
        let len = prefix.chars().count();
        Self {
            text: prefix.to_string(),
            len,
            limit: limit.max(len),
        }
    }

    /// Appends `c` unless the limit has been reached. Returns whether it was kept.
    pub(crate) fn push(&mut self, c: char) -> bool {
        if self.len >= self.limit {
            return false;
        }
        self.text.push(c);
        self.len += 1;
        true
    }

    pub(crate) fn as_str(&self) -> &str {
        &self.text
    }

    pub(crate) fn into_string(self) -> String {
        self.text
    }
}
