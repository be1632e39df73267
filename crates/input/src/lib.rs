//! Classified input events for the ledit editor.
//!
//! The terminal frontend decodes raw key codes into these events; the
//! editing session consumes them one at a time. Keeping the types in
//! their own crate means the session never depends on the terminal
//! stack and stays testable without one.

/// One classified input event.
///
/// This is the entire vocabulary the editing session understands:
/// printable characters, the four navigation directions, the two
/// structural edits, and the two commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// A printable character to insert at the cursor.
    Char(char),
    /// Cursor navigation.
    Move(Direction),
    /// Delete backward from the cursor.
    Backspace,
    /// Open a new line at the cursor.
    Newline,
    /// Persist the buffer to its associated file.
    Save,
    /// End the session cleanly.
    Quit,
}

/// A navigation direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl InputEvent {
    /// Returns true for events that can change buffer content.
    pub fn is_edit(&self) -> bool {
        matches!(
            self,
            InputEvent::Char(_) | InputEvent::Backspace | InputEvent::Newline
        )
    }
}
