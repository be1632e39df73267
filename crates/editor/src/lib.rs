//! ledit: a minimal terminal line editor.
//!
//! The editor is a tight read-event / mutate-state / render loop:
//!
//! 1. The terminal frontend decodes one key press into an `InputEvent`
//! 2. The [`Session`] mutates the buffer and/or cursor
//! 3. The viewport is recomputed against the current terminal size
//! 4. The frontend repaints if anything visible changed, then places
//!    the cursor
//!
//! Everything except the frontend is pure state-in/state-out and is
//! exercised directly by the integration tests — no terminal required.

pub mod cursor;
pub mod session;
pub mod terminal;
pub mod viewport;

pub use session::{Exit, Refresh, Session, Status};
pub use viewport::{Extent, Viewport};
