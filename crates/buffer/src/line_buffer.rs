//! LineBuffer is the ordered sequence of lines being edited.
//!
//! It exposes structural queries (line count, per-line length/content)
//! and the four mutation operations: insert line, insert text, remove
//! text, and file load/save. Every mutation validates its arguments and
//! reports failures through `BufferError` instead of panicking.

use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use crate::error::BufferError;

/// An ordered sequence of owned text lines, no trailing newlines stored.
///
/// Invariant: the buffer is never empty — a fresh buffer holds exactly
/// one empty line, and `load_from_file` restores the invariant if a file
/// yields zero lines.
///
/// Structural edits (line insertion) shift the tail of the line vector;
/// character edits reallocate a single line. Both are linear in what
/// they touch, which is fine for single-character edits at a cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineBuffer {
    lines: Vec<String>,
}

impl LineBuffer {
    /// Creates a buffer holding a single empty line.
    pub fn new() -> Self {
        Self {
            lines: vec![String::new()],
        }
    }

    /// Creates a buffer from pre-split lines, mostly for tests.
    ///
    /// An empty input produces the canonical single-empty-line buffer so
    /// the non-empty invariant holds.
    pub fn from_lines(lines: Vec<String>) -> Self {
        if lines.is_empty() {
            Self::new()
        } else {
            Self { lines }
        }
    }

    // ==================== Queries ====================

    /// Returns the number of lines. Always at least 1.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Returns the content of line `row`, without a trailing newline.
    pub fn line(&self, row: usize) -> Result<&str, BufferError> {
        self.lines
            .get(row)
            .map(String::as_str)
            .ok_or(BufferError::InvalidRow {
                row,
                line_count: self.lines.len(),
            })
    }

    /// Returns the byte length of line `row`.
    pub fn line_len(&self, row: usize) -> Result<usize, BufferError> {
        self.line(row).map(str::len)
    }

    /// Iterates over all lines in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    // ==================== Mutations ====================

    /// Inserts a new empty line immediately after `after`.
    ///
    /// `None` inserts before the first line. Lines at later indices
    /// shift down by one; the line count grows by exactly one.
    ///
    /// Fails with `InvalidRow` if `after` is at or past the end of the
    /// buffer.
    pub fn insert_line(&mut self, after: Option<usize>) -> Result<(), BufferError> {
        let at = match after {
            None => 0,
            Some(row) if row < self.lines.len() => row + 1,
            Some(row) => {
                return Err(BufferError::InvalidRow {
                    row,
                    line_count: self.lines.len(),
                })
            }
        };
        self.lines.insert(at, String::new());
        Ok(())
    }

    /// Splices `fragment` into line `row` at byte offset `col`.
    ///
    /// Bytes before and after `col` are preserved verbatim; the line
    /// grows by `fragment.len()` bytes. The line count never changes —
    /// newline handling is the caller's job via `insert_line`, not a
    /// concern of this operation.
    ///
    /// Fails with `InvalidRow` if `row` is out of bounds, and with
    /// `InvalidColumn` if `col` is past the end of the line or would
    /// split a UTF-8 sequence.
    pub fn insert_text(&mut self, row: usize, col: usize, fragment: &str) -> Result<(), BufferError> {
        let line_count = self.lines.len();
        let line = self
            .lines
            .get_mut(row)
            .ok_or(BufferError::InvalidRow { row, line_count })?;
        if col > line.len() || !line.is_char_boundary(col) {
            return Err(BufferError::InvalidColumn { row, col });
        }
        line.insert_str(col, fragment);
        Ok(())
    }

    /// Deletes the `n` bytes immediately preceding offset `col` in line
    /// `row`, i.e. the span `[col - n, col)`.
    ///
    /// The line never merges with a neighbor, even when it becomes
    /// empty; only the span is removed.
    ///
    /// Fails with `InvalidRow` if `row` is out of bounds, and with
    /// `InvalidColumn` if fewer than `n` bytes precede `col`, if `col`
    /// is past the end of the line, or if either end of the span would
    /// split a UTF-8 sequence.
    pub fn remove_text(&mut self, row: usize, col: usize, n: usize) -> Result<(), BufferError> {
        let line_count = self.lines.len();
        let line = self
            .lines
            .get_mut(row)
            .ok_or(BufferError::InvalidRow { row, line_count })?;
        if col < n || col > line.len() {
            return Err(BufferError::InvalidColumn { row, col });
        }
        let start = col - n;
        if !line.is_char_boundary(start) || !line.is_char_boundary(col) {
            return Err(BufferError::InvalidColumn { row, col });
        }
        line.replace_range(start..col, "");
        Ok(())
    }

    // ==================== File I/O ====================

    /// Replaces the entire buffer with the `'\n'`-terminated segments of
    /// the file at `path`.
    ///
    /// Only segments terminated by `'\n'` become lines: a file that does
    /// not end in a newline loses its final unterminated segment. This
    /// mirrors the historical behavior of the save format (one `'\n'`
    /// per stored line) and is deliberate — see the crate docs.
    ///
    /// A file yielding zero segments (empty, or newline-free) leaves the
    /// buffer holding one empty line so the non-empty invariant holds.
    ///
    /// Non-UTF-8 bytes are replaced with U+FFFD.
    ///
    /// Fails with `Io` if the file cannot be opened or read, and with
    /// `ShortRead` if fewer bytes arrive than the file's reported length.
    pub fn load_from_file(&mut self, path: &Path) -> Result<(), BufferError> {
        let mut file = File::open(path)?;
        let expected = file.metadata()?.len();
        let mut bytes = Vec::with_capacity(expected as usize);
        file.read_to_end(&mut bytes)?;
        if (bytes.len() as u64) < expected {
            return Err(BufferError::ShortRead {
                expected,
                got: bytes.len() as u64,
            });
        }

        let mut lines = Vec::new();
        let mut start = 0;
        for (i, byte) in bytes.iter().enumerate() {
            if *byte == b'\n' {
                lines.push(String::from_utf8_lossy(&bytes[start..i]).into_owned());
                start = i + 1;
            }
        }
        // bytes[start..] is an unterminated segment and is dropped.

        if lines.is_empty() {
            lines.push(String::new());
        }
        self.lines = lines;
        Ok(())
    }

    /// Writes every line followed by a `'\n'` terminator, in order,
    /// truncating or creating the file at `path`.
    pub fn save_to_file(&self, path: &Path) -> Result<(), BufferError> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        for line in &self.lines {
            writer.write_all(line.as_bytes())?;
            writer.write_all(b"\n")?;
        }
        writer.flush()?;
        Ok(())
    }
}

impl Default for LineBuffer {
    fn default() -> Self {
        Self::new()
    }
}
