//! Viewport mapping between buffer coordinates and the screen.
//!
//! The viewport is a pair of scroll offsets denoting the top-left
//! buffer coordinate currently visible. `scroll_to_cursor` nudges the
//! offsets the minimum amount needed to bring the cursor back inside
//! the visible window: just past the far edge when the cursor ran off
//! the bottom/right, just enough when it ran off the top/left.
//!
//! After a recompute, the cursor's screen position is guaranteed to lie
//! within `[0, rows) x [0, cols)` for any non-degenerate extent.

use std::ops::Range;

use ledit_buffer::Position;

/// Visible terminal size in character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extent {
    pub rows: usize,
    pub cols: usize,
}

impl Extent {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }
}

/// Scroll state: the buffer coordinate shown at the screen's top-left.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Viewport {
    row_offset: usize,
    col_offset: usize,
}

impl Viewport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn row_offset(&self) -> usize {
        self.row_offset
    }

    pub fn col_offset(&self) -> usize {
        self.col_offset
    }

    /// Adjusts the offsets so `cursor` is visible within `extent`.
    ///
    /// Returns `true` if either offset changed — the caller uses this as
    /// the scroll contribution to its redraw decision.
    ///
    /// A degenerate extent (zero rows or columns) leaves the offsets
    /// alone; there is nothing to make visible.
    pub fn scroll_to_cursor(&mut self, cursor: Position, extent: Extent) -> bool {
        let mut moved = false;

        if extent.rows > 0 {
            if cursor.row >= self.row_offset + extent.rows {
                // Cursor ran off the bottom: scroll just past it.
                self.row_offset = cursor.row - extent.rows + 1;
                moved = true;
            } else if cursor.row < self.row_offset {
                // Cursor ran off the top: scroll just enough.
                self.row_offset = cursor.row;
                moved = true;
            }
        }

        if extent.cols > 0 {
            if cursor.col >= self.col_offset + extent.cols {
                self.col_offset = cursor.col - extent.cols + 1;
                moved = true;
            } else if cursor.col < self.col_offset {
                self.col_offset = cursor.col;
                moved = true;
            }
        }

        moved
    }

    /// Maps a buffer position to its screen position.
    ///
    /// Only meaningful after `scroll_to_cursor`; positions outside the
    /// window saturate to the origin rather than underflowing.
    pub fn screen_position(&self, cursor: Position) -> Position {
        Position::new(
            cursor.row.saturating_sub(self.row_offset),
            cursor.col.saturating_sub(self.col_offset),
        )
    }

    /// Returns the range of buffer rows visible within `extent`.
    pub fn visible_rows(&self, line_count: usize, extent: Extent) -> Range<usize> {
        let start = self.row_offset.min(line_count);
        let end = (self.row_offset + extent.rows).min(line_count);
        start..end
    }

    /// Returns the horizontal window of `line` that is on screen.
    ///
    /// The slice starts at the column offset and spans at most `cols`
    /// bytes, with both ends snapped down to `char` boundaries so the
    /// result is always valid UTF-8. A line that ends left of the window
    /// yields an empty slice.
    pub fn visible_slice<'a>(&self, line: &'a str, cols: usize) -> &'a str {
        let start = floor_char_boundary(line, self.col_offset);
        let end = floor_char_boundary(line, self.col_offset.saturating_add(cols));
        &line[start..end]
    }
}

/// Largest char boundary at or below `at`, clamped to the string length.
fn floor_char_boundary(s: &str, at: usize) -> usize {
    let mut at = at.min(s.len());
    while !s.is_char_boundary(at) {
        at -= 1;
    }
    at
}
