/// Position in the buffer as (row, col), both 0-indexed.
///
/// `row` indexes a line; `col` is a byte offset into that line, in the
/// range `0..=line_len(row)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}
