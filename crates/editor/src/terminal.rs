//! Terminal collaborator: raw-mode lifecycle, key decoding, painting.
//!
//! This is the only module that talks to crossterm. The session never
//! sees raw key codes or escape sequences; it receives classified
//! `InputEvent`s and answers with what to repaint.
//!
//! `RawModeGuard` scopes the terminal takeover: raw mode and the
//! alternate screen are released in `Drop`, so the terminal is restored
//! on every exit path, including failures that unwind out of the event
//! loop.

use std::io::{self, Stdout, Write};

use crossterm::cursor::MoveTo;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::Print;
use crossterm::terminal::{
    self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{execute, queue};
use tracing::debug;

use ledit_buffer::Position;
use ledit_input::{Direction, InputEvent};

use crate::session::Session;
use crate::viewport::Extent;

/// Holds the terminal in raw mode + alternate screen for its lifetime.
pub struct RawModeGuard {
    _private: (),
}

impl RawModeGuard {
    /// Enables raw mode and switches to the alternate screen.
    pub fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        if let Err(err) = execute!(io::stdout(), EnterAlternateScreen) {
            // Don't leave the terminal half-configured on failure.
            let _ = terminal::disable_raw_mode();
            return Err(err);
        }
        Ok(Self { _private: () })
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

/// Decodes one crossterm key event into a classified input event.
///
/// Returns `None` for key releases/repeats and for keys the editor has
/// no binding for. Bindings: printable characters insert themselves,
/// arrows navigate, Enter opens a line, Backspace deletes, Ctrl-X
/// saves, Ctrl-Q quits.
pub fn decode(key: KeyEvent) -> Option<InputEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('x') if ctrl => Some(InputEvent::Save),
        KeyCode::Char('q') if ctrl => Some(InputEvent::Quit),
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            Some(InputEvent::Char(c))
        }
        KeyCode::Enter => Some(InputEvent::Newline),
        KeyCode::Backspace => Some(InputEvent::Backspace),
        KeyCode::Left => Some(InputEvent::Move(Direction::Left)),
        KeyCode::Right => Some(InputEvent::Move(Direction::Right)),
        KeyCode::Up => Some(InputEvent::Move(Direction::Up)),
        KeyCode::Down => Some(InputEvent::Move(Direction::Down)),
        _ => {
            debug!(?key, "unbound key");
            None
        }
    }
}

/// Paints session state onto the terminal.
pub struct Screen {
    out: Stdout,
}

impl Screen {
    pub fn new() -> Self {
        Self { out: io::stdout() }
    }

    /// Queries the current terminal size as a viewport extent.
    pub fn extent() -> io::Result<Extent> {
        let (cols, rows) = terminal::size()?;
        Ok(Extent::new(rows as usize, cols as usize))
    }

    /// Repaints the visible window of the buffer.
    ///
    /// Clears the screen and draws each visible row, clipped to the
    /// viewport's column window. Output is queued and flushed by the
    /// following `place_cursor`, so each event repaints at most once.
    pub fn redraw(&mut self, session: &Session, extent: Extent) -> io::Result<()> {
        queue!(self.out, Clear(ClearType::All))?;

        let viewport = session.viewport();
        let line_count = session.buffer().line_count();
        for (screen_row, row) in viewport.visible_rows(line_count, extent).enumerate() {
            let line = session.buffer().line(row).unwrap_or("");
            let slice = viewport.visible_slice(line, extent.cols);
            if !slice.is_empty() {
                queue!(self.out, MoveTo(0, screen_row as u16), Print(slice))?;
            }
        }
        Ok(())
    }

    /// Moves the terminal cursor to the given screen position and
    /// flushes all queued output.
    pub fn place_cursor(&mut self, cursor: Position) -> io::Result<()> {
        queue!(self.out, MoveTo(cursor.col as u16, cursor.row as u16))?;
        self.out.flush()
    }
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}
