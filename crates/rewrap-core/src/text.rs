//! Line bookkeeping over an immutable text snapshot.

use std::sync::Arc;

use text_size::{TextRange, TextSize};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct LineCol {
    pub line: u32,
    /// Byte offset within the line.
    pub col: u32,
}

/// Pre-computed line start offsets for a particular text snapshot.
///
/// Lines are split on `\n`; a `\r\n` terminator therefore leaves the `\r` as
/// the last byte of its line, which is all the "which line is this offset on"
/// queries below need.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LineIndex {
    line_starts: Vec<TextSize>,
    text_len: TextSize,
}

impl LineIndex {
    pub fn new(text: &str) -> Self {
        let mut line_starts = Vec::with_capacity(128);
        line_starts.push(TextSize::from(0));
        for (i, byte) in text.bytes().enumerate() {
            if byte == b'\n' {
                line_starts.push(TextSize::from(i as u32 + 1));
            }
        }
        Self {
            line_starts,
            text_len: TextSize::of(text),
        }
    }

    #[inline]
    pub fn text_len(&self) -> TextSize {
        self.text_len
    }

    #[inline]
    pub fn line_count(&self) -> u32 {
        self.line_starts.len() as u32
    }

    #[inline]
    pub fn line_start(&self, line: u32) -> Option<TextSize> {
        self.line_starts.get(line as usize).copied()
    }

    /// Line containing `offset`.
    ///
    /// Offsets past the end are clamped; callers may pass `text_len` when
    /// referring to EOF.
    pub fn line_of(&self, offset: TextSize) -> u32 {
        let offset = offset.min(self.text_len);
        match self.line_starts.binary_search(&offset) {
            Ok(line) => line as u32,
            Err(insert) => (insert - 1) as u32,
        }
    }

    /// Convert a byte offset to a line/column pair.
    pub fn line_col(&self, offset: TextSize) -> LineCol {
        let offset = offset.min(self.text_len);
        let line = self.line_of(offset);
        let col = offset - self.line_starts[line as usize];
        LineCol {
            line,
            col: col.into(),
        }
    }
}

/// An immutable text snapshot plus its line index.
///
/// Snapshots are cheap to clone and safe for unsynchronized concurrent reads;
/// the line index is computed once at construction.
#[derive(Clone, Debug)]
pub struct SourceText {
    text: Arc<str>,
    lines: Arc<LineIndex>,
}

impl SourceText {
    pub fn new(text: impl Into<Arc<str>>) -> Self {
        let text = text.into();
        let lines = Arc::new(LineIndex::new(&text));
        Self { text, lines }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn len(&self) -> TextSize {
        self.lines.text_len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    #[inline]
    pub fn line_index(&self) -> &LineIndex {
        &self.lines
    }

    /// Whether two offsets fall on the same physical line.
    #[inline]
    pub fn are_on_same_line(&self, a: TextSize, b: TextSize) -> bool {
        self.lines.line_of(a) == self.lines.line_of(b)
    }

    /// Whether `range` starts and ends on one physical line.
    #[inline]
    pub fn range_on_single_line(&self, range: TextRange) -> bool {
        self.are_on_same_line(range.start(), range.end())
    }
}

impl From<&str> for SourceText {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for SourceText {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}
