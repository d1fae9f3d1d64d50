use serde::{Deserialize, Serialize};

/// A point in the source buffer.
///
/// `row` and `column` are zero-based; `offset` is the absolute byte offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    pub row: u32,
    pub column: u32,
    pub offset: u32,
}

impl Position {
    pub fn new(row: u32, column: u32, offset: u32) -> Self {
        Self {
            row,
            column,
            offset,
        }
    }

    /// Compute the position of `offset` inside `source`.
    ///
    /// Offsets past the end clamp to the end of the buffer. Columns count
    /// bytes, matching tree-sitter points.
    pub fn at_offset(source: impl AsRef<[u8]>, offset: usize) -> Self {
        let source = source.as_ref();
        let offset = offset.min(source.len());
        let prefix = &source[..offset];
        let row = prefix.iter().filter(|b| **b == b'\n').count();
        let line_start = prefix
            .iter()
            .rposition(|b| *b == b'\n')
            .map(|idx| idx + 1)
            .unwrap_or(0);

        Self {
            row: row as u32,
            column: (offset - line_start) as u32,
            offset: offset as u32,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

impl Range {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Build a range for a byte span of `source`.
    pub fn from_span(source: impl AsRef<[u8]>, start: usize, end: usize) -> Self {
        let source = source.as_ref();
        Self {
            start: Position::at_offset(source, start),
            end: Position::at_offset(source, end),
        }
    }

    pub fn byte_range(&self) -> std::ops::Range<usize> {
        self.start.offset as usize..self.end.offset as usize
    }

    pub fn len(&self) -> usize {
        self.end.offset.saturating_sub(self.start.offset) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True when `other` lies entirely inside this range.
    pub fn contains_range(&self, other: &Range) -> bool {
        self.start.offset <= other.start.offset && other.end.offset <= self.end.offset
    }

    pub fn contains_offset(&self, offset: u32) -> bool {
        self.start.offset <= offset && offset < self.end.offset
    }
}
