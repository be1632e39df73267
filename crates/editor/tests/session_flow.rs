//! End-to-end session scenarios driven purely through classified input
//! events — no terminal involved.

use std::fs;
use std::io::Write;

use tempfile::TempDir;

use ledit::session::{Exit, Session, Status};
use ledit::viewport::Extent;
use ledit_input::{Direction, InputEvent};

const EXTENT: Extent = Extent { rows: 24, cols: 80 };

fn typing(session: &mut Session, text: &str) {
    for c in text.chars() {
        let event = if c == '\n' {
            InputEvent::Newline
        } else {
            InputEvent::Char(c)
        };
        session.apply(event, EXTENT);
    }
}

// ==================== Load scenarios ====================

#[test]
fn open_drops_unterminated_final_segment() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("f.txt");
    let mut file = fs::File::create(&path).unwrap();
    file.write_all(b"ab\ncd").unwrap();
    drop(file);

    let session = Session::open(path);
    assert_eq!(session.buffer().iter().collect::<Vec<_>>(), vec!["ab"]);
}

#[test]
fn open_missing_file_starts_empty_and_saves_later() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("new.txt");

    let mut session = Session::open(path.clone());
    assert!(session.is_running());
    assert_eq!(session.buffer().line_count(), 1);

    typing(&mut session, "created");
    session.apply(InputEvent::Save, EXTENT);
    assert!(session.is_running());
    assert_eq!(fs::read(&path).unwrap(), b"created\n");
}

// ==================== Edit, save, reload ====================

#[test]
fn edit_save_reload_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("rt.txt");

    let mut session = Session::open(path.clone());
    typing(&mut session, "a\nb\n");
    session.apply(InputEvent::Save, EXTENT);
    session.apply(InputEvent::Quit, EXTENT);
    assert_eq!(session.status(), Status::Terminated(Exit::Success));
    assert_eq!(fs::read(&path).unwrap(), b"a\nb\n\n");

    // Every line was '\n'-terminated on disk, so reloading reproduces
    // the full line sequence.
    let reloaded = Session::open(path);
    assert_eq!(
        reloaded.buffer().iter().collect::<Vec<_>>(),
        vec!["a", "b", ""]
    );
}

// ==================== Fatal error policy ====================

#[test]
fn save_failure_terminates_with_failure() {
    let dir = TempDir::new().unwrap();
    // Parent directory does not exist, so the save cannot create the file.
    let path = dir.path().join("missing").join("f.txt");

    let mut session = Session::open(path);
    typing(&mut session, "x");
    session.apply(InputEvent::Save, EXTENT);

    assert_eq!(session.status(), Status::Terminated(Exit::Failure));
    assert!(session.last_error().is_some());
}

// ==================== Navigation extremities ====================

#[test]
fn navigation_is_idempotent_at_extremities() {
    let mut session = Session::new();
    typing(&mut session, "ab\ncd");

    for _ in 0..5 {
        session.apply(InputEvent::Move(Direction::Right), EXTENT);
    }
    let end = session.cursor();
    session.apply(InputEvent::Move(Direction::Right), EXTENT);
    assert_eq!(session.cursor(), end);

    for _ in 0..10 {
        session.apply(InputEvent::Move(Direction::Left), EXTENT);
        session.apply(InputEvent::Move(Direction::Up), EXTENT);
    }
    assert_eq!(session.cursor(), ledit_buffer::Position::new(0, 0));
}

// ==================== Viewport invariant ====================

#[test]
fn cursor_stays_on_screen_through_long_navigation() {
    let extent = Extent::new(5, 10);
    let mut session = Session::new();

    // Build 30 lines of varying width.
    for i in 0..30 {
        for _ in 0..(i % 15) {
            session.apply(InputEvent::Char('x'), extent);
        }
        session.apply(InputEvent::Newline, extent);
    }

    let walk = [
        Direction::Up,
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
        Direction::Up,
    ];
    for (i, direction) in walk.iter().cycle().take(200).enumerate() {
        let refresh = session.apply(InputEvent::Move(*direction), extent);
        let cursor = session.cursor();
        let viewport = session.viewport();
        assert!(
            cursor.row >= viewport.row_offset()
                && cursor.row - viewport.row_offset() < extent.rows,
            "row invariant broken at step {i}"
        );
        assert!(
            cursor.col >= viewport.col_offset()
                && cursor.col - viewport.col_offset() < extent.cols,
            "col invariant broken at step {i}"
        );
        assert_eq!(refresh.cursor.row, cursor.row - viewport.row_offset());
        assert_eq!(refresh.cursor.col, cursor.col - viewport.col_offset());
    }
}
