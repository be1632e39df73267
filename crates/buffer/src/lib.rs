//! ledit-buffer: the line buffer at the core of the ledit editor.
//!
//! This crate owns the text being edited as an ordered sequence of lines
//! and exposes the four mutation operations everything else is built on:
//! line insertion, text insertion, text removal, and file load/save.
//!
//! # Overview
//!
//! The main type is [`LineBuffer`]:
//!
//! ```
//! use ledit_buffer::LineBuffer;
//!
//! let mut buffer = LineBuffer::new();
//! assert_eq!(buffer.line_count(), 1);
//!
//! buffer.insert_text(0, 0, "hello").unwrap();
//! assert_eq!(buffer.line(0).unwrap(), "hello");
//!
//! // A new empty line after row 0; "hello" is untouched.
//! buffer.insert_line(Some(0)).unwrap();
//! assert_eq!(buffer.line_count(), 2);
//! ```
//!
//! # Storage model
//!
//! Lines are a flat `Vec<String>` with no trailing newlines stored.
//! Structural edits shift the tail of the vector (O(line count)) and
//! character edits reallocate one line (O(line length)). Edits arrive
//! one character at a time at the cursor, so this is a deliberate
//! simplicity trade-off over a rope or gap buffer.
//!
//! # Columns are byte offsets
//!
//! All column arguments are byte offsets into the line. An offset that
//! would split a UTF-8 sequence is rejected as
//! [`BufferError::InvalidColumn`] rather than corrupting the line; the
//! [`grapheme`] helpers give callers boundary-safe offsets to step
//! between. On ASCII content byte offsets and columns coincide.
//!
//! # Failure surface
//!
//! Every operation that can fail returns [`BufferError`]. The buffer
//! never panics on out-of-range arguments.

mod error;
pub mod grapheme;
mod line_buffer;
mod types;

pub use error::BufferError;
pub use line_buffer::LineBuffer;
pub use types::Position;
