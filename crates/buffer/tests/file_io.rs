//! File load/save behavior, including the newline-termination quirk:
//! only `'\n'`-terminated segments become lines, so a file that does not
//! end in a newline loses its final segment on load.

use std::fs;
use std::io::Write;

use ledit_buffer::{BufferError, LineBuffer};
use tempfile::TempDir;

fn write_file(dir: &TempDir, name: &str, bytes: &[u8]) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let mut file = fs::File::create(&path).unwrap();
    file.write_all(bytes).unwrap();
    path
}

// ==================== Load ====================

#[test]
fn load_splits_at_newlines() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "f.txt", b"one\ntwo\nthree\n");

    let mut buf = LineBuffer::new();
    buf.load_from_file(&path).unwrap();
    assert_eq!(buf.iter().collect::<Vec<_>>(), vec!["one", "two", "three"]);
}

#[test]
fn load_drops_unterminated_final_segment() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "f.txt", b"ab\ncd");

    let mut buf = LineBuffer::new();
    buf.load_from_file(&path).unwrap();
    // "cd" has no terminating newline and is dropped.
    assert_eq!(buf.iter().collect::<Vec<_>>(), vec!["ab"]);
}

#[test]
fn load_empty_file_leaves_one_empty_line() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "f.txt", b"");

    let mut buf = LineBuffer::from_lines(vec!["old".into()]);
    buf.load_from_file(&path).unwrap();
    assert_eq!(buf.line_count(), 1);
    assert_eq!(buf.line(0).unwrap(), "");
}

#[test]
fn load_newline_free_file_leaves_one_empty_line() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "f.txt", b"no newline here");

    let mut buf = LineBuffer::new();
    buf.load_from_file(&path).unwrap();
    assert_eq!(buf.line_count(), 1);
    assert_eq!(buf.line(0).unwrap(), "");
}

#[test]
fn load_preserves_empty_lines() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "f.txt", b"\n\na\n");

    let mut buf = LineBuffer::new();
    buf.load_from_file(&path).unwrap();
    assert_eq!(buf.iter().collect::<Vec<_>>(), vec!["", "", "a"]);
}

#[test]
fn load_replaces_previous_content() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "f.txt", b"fresh\n");

    let mut buf = LineBuffer::from_lines(vec!["stale".into(), "stale".into()]);
    buf.load_from_file(&path).unwrap();
    assert_eq!(buf.iter().collect::<Vec<_>>(), vec!["fresh"]);
}

#[test]
fn load_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("does-not-exist");

    let mut buf = LineBuffer::new();
    assert!(matches!(
        buf.load_from_file(&path),
        Err(BufferError::Io(_))
    ));
    // Failed load leaves the buffer as it was.
    assert_eq!(buf.line_count(), 1);
}

// ==================== Save ====================

#[test]
fn save_terminates_every_line() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.txt");

    let buf = LineBuffer::from_lines(vec!["a".into(), "b".into()]);
    buf.save_to_file(&path).unwrap();
    assert_eq!(fs::read(&path).unwrap(), b"a\nb\n");
}

#[test]
fn save_single_empty_line_writes_one_newline() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.txt");

    LineBuffer::new().save_to_file(&path).unwrap();
    assert_eq!(fs::read(&path).unwrap(), b"\n");
}

#[test]
fn save_to_unwritable_path_is_io_error() {
    let dir = TempDir::new().unwrap();
    // The parent directory does not exist, so create() fails.
    let path = dir.path().join("missing").join("out.txt");

    let buf = LineBuffer::new();
    assert!(matches!(buf.save_to_file(&path), Err(BufferError::Io(_))));
}

// ==================== Round trip ====================

#[test]
fn save_then_load_reproduces_lines() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("rt.txt");

    let buf = LineBuffer::from_lines(vec!["a".into(), "b".into()]);
    buf.save_to_file(&path).unwrap();
    assert_eq!(fs::read(&path).unwrap(), b"a\nb\n");

    let mut reloaded = LineBuffer::new();
    reloaded.load_from_file(&path).unwrap();
    assert_eq!(reloaded, buf);
}
