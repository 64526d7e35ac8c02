//! Source positions.
//!
//! Rows and columns are zero-based; columns count UTF-8 bytes within the row.
//! Display output is one-based, matching what editors show.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A row/column pair in source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TextPosition {
    pub row: u32,
    pub column: u32,
}

impl TextPosition {
    pub const INVALID: Self = Self {
        row: u32::MAX,
        column: u32::MAX,
    };

    pub const fn new(row: u32, column: u32) -> Self {
        Self { row, column }
    }

    pub fn is_valid(self) -> bool {
        self.row != u32::MAX && self.column != u32::MAX
    }

    /// Byte offset of this position in `source`, if the row exists.
    ///
    /// Columns past the end of the row are clamped to the row's end.
    pub fn byte_offset(self, source: &str) -> Option<usize> {
        if !self.is_valid() {
            return None;
        }
        let mut line_start = 0;
        for _ in 0..self.row {
            let newline = source[line_start..].find('\n')?;
            line_start += newline + 1;
        }
        let line_end = source[line_start..]
            .find('\n')
            .map_or(source.len(), |n| line_start + n);
        Some((line_start + self.column as usize).min(line_end))
    }
}

impl Default for TextPosition {
    fn default() -> Self {
        Self::INVALID
    }
}

impl fmt::Display for TextPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "{},{}", self.row + 1, self.column + 1)
        } else {
            write!(f, "0,0")
        }
    }
}

/// Begin/end pair of positions. Synthetic nodes carry [`TextRange::INVALID`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TextRange {
    pub begin: TextPosition,
    pub end: TextPosition,
}

impl TextRange {
    pub const INVALID: Self = Self {
        begin: TextPosition::INVALID,
        end: TextPosition::INVALID,
    };

    pub const fn new(begin: TextPosition, end: TextPosition) -> Self {
        Self { begin, end }
    }

    /// Shorthand for `TextRange::new(TextPosition::new(..), TextPosition::new(..))`.
    pub const fn from_coords(begin_row: u32, begin_column: u32, end_row: u32, end_column: u32) -> Self {
        Self::new(
            TextPosition::new(begin_row, begin_column),
            TextPosition::new(end_row, end_column),
        )
    }

    pub fn is_valid(self) -> bool {
        self.begin.is_valid() && self.end.is_valid() && self.begin <= self.end
    }

    pub fn is_empty(self) -> bool {
        self.begin == self.end
    }

    /// Inclusive on both ends so a cursor sitting right after a token still hits it.
    pub fn contains(self, position: TextPosition) -> bool {
        self.is_valid() && self.begin <= position && position <= self.end
    }

    /// Whether `other` lies completely inside this range.
    pub fn encloses(self, other: TextRange) -> bool {
        self.is_valid() && other.is_valid() && self.begin <= other.begin && other.end <= self.end
    }

    /// Signed byte distance from `position` to this range.
    ///
    /// - `0` when the position sits exactly on either end.
    /// - `i32::MAX` when the range covers no text.
    /// - Inside the range: distance to the nearer end, positive when the
    ///   beginning is nearer, negative when the end is nearer.
    /// - Past the end: positive distance from the end.
    /// - Before the beginning: negative distance to the beginning.
    ///
    /// Returns `None` when either the range or the position cannot be resolved in `source`.
    pub fn signed_distance(self, position: TextPosition, source: &str) -> Option<i32> {
        let begin = self.begin.byte_offset(source)?;
        let end = self.end.byte_offset(source)?;
        let at = position.byte_offset(source)?;

        if at == begin || at == end {
            return Some(0);
        }
        if begin == end {
            return Some(i32::MAX);
        }

        let distance = if begin < at && at < end {
            let from_begin = at - begin;
            let to_end = end - at;
            if from_begin < to_end {
                from_begin as i64
            } else {
                -(to_end as i64)
            }
        } else if at > end {
            (at - end) as i64
        } else {
            -((begin - at) as i64)
        };
        Some(distance.clamp(i32::MIN as i64 + 1, i32::MAX as i64 - 1) as i32)
    }
}

impl fmt::Display for TextRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.begin, self.end)
    }
}
