/// A byte cursor over a single line of inline text.
///
/// All delimiters the inline grammar looks for are ASCII, so every index the
/// cursor stops on is a valid `str` boundary.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The text being scanned.
    pub s: &'a str,
    /// Current byte index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Peeks at the current byte without advancing.
    pub fn peek(&self) -> Option<u8> {
        self.s.as_bytes().get(self.i).copied()
    }

    /// Advances by one byte, returning the consumed byte.
    pub fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.i += 1;
        Some(b)
    }

    /// Consumes `b` if it is the current byte.
    pub fn eat(&mut self, b: u8) -> bool {
        if self.peek() == Some(b) {
            self.i += 1;
            true
        } else {
            false
        }
    }

    /// Advances to the next occurrence of `b` (left in place) and returns the
    /// text skipped over. Returns `None` without moving when `b` never occurs.
    pub fn take_until(&mut self, b: u8) -> Option<&'a str> {
        let start = self.i;
        let offset = self.s.as_bytes()[start.min(self.s.len())..]
            .iter()
            .position(|&c| c == b)?;
        self.i = start + offset;
        Some(&self.s[start..self.i])
    }

    /// Text between two byte indices.
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        &self.s[start..end]
    }
}
