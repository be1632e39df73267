//! The editing session: one classified event in, one refresh out.
//!
//! `Session` owns the buffer, cursor, viewport, and the association
//! with a file path. It is the only thing that mutates them, and it
//! processes exactly one event at a time — there is no background work
//! and no concurrency.
//!
//! # Error policy
//!
//! Every buffer operation failure is fatal: the session records the
//! error and transitions to `Terminated(Exit::Failure)`. There is no
//! retry and no partial recovery. The frontend reports the recorded
//! error on stderr after the terminal has been restored.
//!
//! # A preserved quirk
//!
//! Backspace at column 0 moves the cursor to the end of the previous
//! line without merging the two lines. This matches the editor's
//! historical behavior; it is kept deliberately rather than "fixed".

use std::path::PathBuf;

use tracing::{debug, error, info};

use ledit_buffer::{grapheme, BufferError, LineBuffer, Position};
use ledit_input::InputEvent;

use crate::cursor;
use crate::viewport::{Extent, Viewport};

/// Whether the session is still consuming events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Running,
    Terminated(Exit),
}

/// How a terminated session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    /// Clean quit; process exit code 0.
    Success,
    /// A buffer operation failed; process exit code 1.
    Failure,
}

/// What the frontend must do after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Refresh {
    /// Repaint the visible lines (content changed or the view scrolled).
    pub redraw: bool,
    /// Where the cursor now sits on screen.
    pub cursor: Position,
}

/// The editor state machine.
#[derive(Debug)]
pub struct Session {
    buffer: LineBuffer,
    cursor: Position,
    viewport: Viewport,
    path: Option<PathBuf>,
    status: Status,
    last_error: Option<BufferError>,
}

impl Session {
    /// Starts a session with a single empty line and no associated file.
    pub fn new() -> Self {
        Self {
            buffer: LineBuffer::new(),
            cursor: Position::default(),
            viewport: Viewport::new(),
            path: None,
            status: Status::Running,
            last_error: None,
        }
    }

    /// Starts a session associated with `path`, loading it if possible.
    ///
    /// A file that cannot be opened is not an error at startup: the
    /// session begins with an empty buffer and will create the file on
    /// the first save. This mirrors the behavior of editing a new file.
    pub fn open(path: PathBuf) -> Self {
        let mut session = Self::new();
        match session.buffer.load_from_file(&path) {
            Ok(()) => {
                info!(path = %path.display(), lines = session.buffer.line_count(), "loaded file");
            }
            Err(err) => {
                debug!(path = %path.display(), %err, "starting with empty buffer");
            }
        }
        session.path = Some(path);
        session
    }

    // ==================== Accessors ====================

    pub fn buffer(&self) -> &LineBuffer {
        &self.buffer
    }

    pub fn cursor(&self) -> Position {
        self.cursor
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_running(&self) -> bool {
        self.status == Status::Running
    }

    /// The error that terminated the session, if any.
    pub fn last_error(&self) -> Option<&BufferError> {
        self.last_error.as_ref()
    }

    // ==================== Event processing ====================

    /// Processes one classified input event against the given terminal
    /// extent and reports what the frontend must repaint.
    ///
    /// Content edits and scroll changes request a full redraw of the
    /// visible window; pure cursor movement only repositions the cursor.
    pub fn apply(&mut self, event: InputEvent, extent: Extent) -> Refresh {
        let mut edited = false;

        let outcome = match event {
            InputEvent::Char(c) => {
                edited = true;
                self.insert_char(c)
            }
            InputEvent::Move(direction) => {
                self.cursor = cursor::step(&self.buffer, self.cursor, direction);
                Ok(())
            }
            InputEvent::Backspace => self.backspace(&mut edited),
            InputEvent::Newline => {
                edited = true;
                self.open_line()
            }
            InputEvent::Save => self.save(),
            InputEvent::Quit => {
                self.status = Status::Terminated(Exit::Success);
                Ok(())
            }
        };

        if let Err(err) = outcome {
            error!(%err, "buffer operation failed; terminating session");
            self.last_error = Some(err);
            self.status = Status::Terminated(Exit::Failure);
        }

        self.refresh(extent, edited)
    }

    /// Recomputes the viewport without consuming an event.
    ///
    /// Used for the initial paint and after a terminal resize; always
    /// requests a full redraw.
    pub fn refresh_forced(&mut self, extent: Extent) -> Refresh {
        let refresh = self.refresh(extent, false);
        Refresh {
            redraw: true,
            ..refresh
        }
    }

    fn refresh(&mut self, extent: Extent, edited: bool) -> Refresh {
        let scrolled = self.viewport.scroll_to_cursor(self.cursor, extent);
        Refresh {
            redraw: edited || scrolled,
            cursor: self.viewport.screen_position(self.cursor),
        }
    }

    fn insert_char(&mut self, c: char) -> Result<(), BufferError> {
        let mut utf8 = [0u8; 4];
        let fragment = c.encode_utf8(&mut utf8);
        self.buffer
            .insert_text(self.cursor.row, self.cursor.col, fragment)?;
        self.cursor.col += fragment.len();
        Ok(())
    }

    fn backspace(&mut self, edited: &mut bool) -> Result<(), BufferError> {
        if self.cursor.col == 0 {
            // Quirk, preserved: no merge with the previous line, the
            // cursor just moves to its end.
            if self.cursor.row > 0 {
                self.cursor.row -= 1;
                self.cursor.col = self.buffer.line_len(self.cursor.row)?;
            }
            return Ok(());
        }
        let line = self.buffer.line(self.cursor.row)?;
        let start = grapheme::boundary_left(line, self.cursor.col);
        let n = self.cursor.col - start;
        self.buffer.remove_text(self.cursor.row, self.cursor.col, n)?;
        self.cursor.col = start;
        *edited = true;
        Ok(())
    }

    fn open_line(&mut self) -> Result<(), BufferError> {
        self.buffer.insert_line(Some(self.cursor.row))?;
        self.cursor.row += 1;
        self.cursor.col = 0;
        Ok(())
    }

    fn save(&mut self) -> Result<(), BufferError> {
        match &self.path {
            Some(path) => {
                self.buffer.save_to_file(path)?;
                info!(path = %path.display(), lines = self.buffer.line_count(), "saved");
                Ok(())
            }
            None => {
                // No associated file: save is a no-op by contract.
                debug!("save ignored: session has no associated path");
                Ok(())
            }
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
