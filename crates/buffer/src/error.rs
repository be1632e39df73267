use std::io;

use thiserror::Error;

/// Errors surfaced by [`LineBuffer`](crate::LineBuffer) operations.
///
/// All failures are reported synchronously through `Result`; the buffer
/// never panics on bad arguments. The editing session treats every one
/// of these as fatal.
#[derive(Debug, Error)]
pub enum BufferError {
    /// The row is outside the buffer.
    #[error("row {row} is out of bounds (buffer has {line_count} lines)")]
    InvalidRow { row: usize, line_count: usize },

    /// The column is beyond the end of the line, splits a UTF-8
    /// sequence, or leaves too few bytes for the requested removal.
    #[error("column {col} is not a valid edit position on row {row}")]
    InvalidColumn { row: usize, col: usize },

    /// The file could not be opened, read, or written.
    #[error("file I/O failed: {0}")]
    Io(#[from] io::Error),

    /// The file yielded fewer bytes than its reported length.
    #[error("short read: expected {expected} bytes, got {got}")]
    ShortRead { expected: u64, got: u64 },
}
