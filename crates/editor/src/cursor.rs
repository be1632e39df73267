//! Cursor navigation rules.
//!
//! `step` is a pure function of (buffer, position, direction): it never
//! mutates anything and always returns an in-bounds position. Horizontal
//! movement steps by grapheme cluster so the cursor cannot land inside a
//! multi-byte sequence; on ASCII lines each step is exactly one byte.

use ledit_buffer::{grapheme, LineBuffer, Position};
use ledit_input::Direction;

/// Computes the cursor position after one navigation step.
///
/// - Left at column 0 wraps to the end of the previous line; at (0, 0)
///   the position is unchanged.
/// - Right at end of line wraps to the start of the next line; at the
///   end of the last line the position is unchanged.
/// - Up/Down clamp the column to the target line, snapped to a grapheme
///   boundary.
///
/// Repeated steps at a buffer extremity are idempotent — there is no
/// wraparound.
pub fn step(buffer: &LineBuffer, cursor: Position, direction: Direction) -> Position {
    let mut cursor = cursor;
    match direction {
        Direction::Left => {
            if cursor.col > 0 {
                let line = buffer.line(cursor.row).unwrap_or("");
                cursor.col = grapheme::boundary_left(line, cursor.col);
            } else if cursor.row > 0 {
                cursor.row -= 1;
                cursor.col = buffer.line_len(cursor.row).unwrap_or(0);
            }
        }
        Direction::Right => {
            let line_len = buffer.line_len(cursor.row).unwrap_or(0);
            if cursor.col < line_len {
                let line = buffer.line(cursor.row).unwrap_or("");
                cursor.col = grapheme::boundary_right(line, cursor.col);
            } else if cursor.row + 1 < buffer.line_count() {
                cursor.row += 1;
                cursor.col = 0;
            }
        }
        Direction::Up => {
            if cursor.row > 0 {
                cursor.row -= 1;
                let line = buffer.line(cursor.row).unwrap_or("");
                cursor.col = grapheme::floor_boundary(line, cursor.col);
            }
        }
        Direction::Down => {
            if cursor.row + 1 < buffer.line_count() {
                cursor.row += 1;
                let line = buffer.line(cursor.row).unwrap_or("");
                cursor.col = grapheme::floor_boundary(line, cursor.col);
            }
        }
    }
    cursor
}
