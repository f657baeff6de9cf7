/// A position in a borrowed text buffer
///
/// The cursor is a view of the input that has not been consumed yet. It is
/// `Copy`, so saving a position is a plain copy and backtracking is an
/// assignment:
///
/// ```
/// use parsilite::Cursor;
///
/// let mut cursor = Cursor::new("abc");
/// let saved = cursor;
/// cursor.advance(2);
/// assert_eq!(cursor.remaining(), "c");
///
/// cursor = saved;
/// assert_eq!(cursor.remaining(), "abc");
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Cursor<'code> {
    source: &'code str,
    /// Byte offset into `source`, always on a char boundary
    position: usize,
}

impl<'code> Cursor<'code> {
    pub fn new(source: &'code str) -> Self {
        Cursor {
            source,
            position: 0,
        }
    }

    /// The input that has not been consumed yet
    pub fn remaining(&self) -> &'code str {
        &self.source[self.position..]
    }

    /// Byte offset of the cursor in its source
    pub fn position(&self) -> usize {
        self.position
    }

    /// The whole input the cursor was created over
    pub fn source(&self) -> &'code str {
        self.source
    }

    pub fn is_empty(&self) -> bool {
        self.position >= self.source.len()
    }

    /// The next character, without consuming it
    pub fn peek(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    /// Consume `len` bytes of the remaining input
    ///
    /// Clamped to the end of input. A length ending inside a multi-byte
    /// character moves on to the end of that character.
    pub fn advance(&mut self, len: usize) {
        let mut position = self.position.saturating_add(len).min(self.source.len());
        while !self.source.is_char_boundary(position) {
            position += 1;
        }
        self.position = position;
    }
}

impl<'code> From<&'code str> for Cursor<'code> {
    fn from(source: &'code str) -> Self {
        Cursor::new(source)
    }
}
