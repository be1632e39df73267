//! Grapheme cluster boundary helpers for byte-offset columns.
//!
//! Columns in the buffer are byte offsets, but cursor movement and
//! backward deletion should operate on grapheme clusters — what users
//! perceive as a single "character":
//!
//! - combining sequences: é (e + combining acute)
//! - ZWJ emoji sequences
//! - regional indicator pairs
//!
//! These helpers map a byte offset to the nearest cluster boundary in
//! either direction so the cursor never lands inside a multi-byte
//! sequence. ASCII bytes are always single-byte clusters and take the
//! fast path.

use unicode_segmentation::UnicodeSegmentation;

/// Returns the byte offset of the grapheme boundary immediately left of `col`.
///
/// If `col` is 0 the result is 0. If `col` falls inside a cluster, the
/// result is the start of that cluster. `col` is clamped to the line
/// length first.
pub fn boundary_left(line: &str, col: usize) -> usize {
    if col == 0 || line.is_empty() {
        return 0;
    }
    let col = col.min(line.len());

    // Fast path: the byte before col is ASCII, so it is its own cluster.
    if line.is_char_boundary(col) && line.as_bytes()[col - 1].is_ascii() {
        return col - 1;
    }

    let mut result = 0;
    for (start, _) in line.grapheme_indices(true) {
        if start < col {
            result = start;
        } else {
            break;
        }
    }
    result
}

/// Returns the byte offset of the grapheme boundary immediately right of `col`.
///
/// If `col` is at or past the end of the line the result is the line
/// length. If `col` falls inside a cluster, the result is the end of
/// that cluster.
pub fn boundary_right(line: &str, col: usize) -> usize {
    if col >= line.len() {
        return line.len();
    }

    // Fast path: an ASCII byte followed by another ASCII byte (or the
    // end of the line) is a cluster of its own. The second check guards
    // against a combining mark attaching to the ASCII base.
    let bytes = line.as_bytes();
    if line.is_char_boundary(col)
        && bytes[col].is_ascii()
        && bytes.get(col + 1).is_none_or(|b| b.is_ascii())
    {
        return col + 1;
    }

    for (start, _) in line.grapheme_indices(true) {
        if start > col {
            return start;
        }
    }
    line.len()
}

/// Returns the largest grapheme boundary at or below `col`.
///
/// Used to clamp a remembered column onto a shorter or differently
/// segmented line after vertical movement. `col` values at or past the
/// end of the line clamp to the line length.
pub fn floor_boundary(line: &str, col: usize) -> usize {
    if col >= line.len() {
        return line.len();
    }
    if line.is_char_boundary(col) {
        // Byte offsets produced by cluster stepping are always cluster
        // starts; a bare char boundary inside a cluster is rare but
        // handled below.
        let mut last = 0;
        for (start, _) in line.grapheme_indices(true) {
            if start <= col {
                last = start;
            } else {
                break;
            }
        }
        return last;
    }
    boundary_left(line, col)
}
