//! ledit binary: argument parsing, logging setup, and the event loop.
//!
//! The loop is strictly sequential: read one event, apply it, repaint
//! what changed, place the cursor. The only blocking point is waiting
//! for the next event. Terminal state is scoped to `run` via
//! `RawModeGuard`, so the exit-code and diagnostic reporting below it
//! always runs against a restored terminal.

use std::path::PathBuf;
use std::process;

use anyhow::Context;
use clap::Parser;
use crossterm::event::{self, Event};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ledit::session::{Exit, Session, Status};
use ledit::terminal::{decode, RawModeGuard, Screen};
use ledit::viewport::Extent;

/// A minimal terminal line editor.
#[derive(Debug, Parser)]
#[command(name = "ledit", version, about)]
struct Args {
    /// File to edit; created on first save if it does not exist.
    /// Without a path, the session starts empty and Save is a no-op.
    file: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = Args::parse();

    let mut session = match args.file {
        Some(path) => Session::open(path),
        None => Session::new(),
    };

    run(&mut session).context("terminal session failed")?;

    if session.status() == Status::Terminated(Exit::Failure) {
        if let Some(err) = session.last_error() {
            eprintln!("ledit: {err}");
        }
        process::exit(1);
    }
    Ok(())
}

/// Drives the session until it terminates. The raw-mode guard is held
/// for exactly this scope and restores the terminal even when an I/O
/// error propagates out.
fn run(session: &mut Session) -> anyhow::Result<()> {
    let _guard = RawModeGuard::enter()?;
    let mut screen = Screen::new();

    let extent = Screen::extent()?;
    let refresh = session.refresh_forced(extent);
    screen.redraw(session, extent)?;
    screen.place_cursor(refresh.cursor)?;

    while session.is_running() {
        match event::read()? {
            Event::Key(key) => {
                let Some(input) = decode(key) else { continue };
                let extent = Screen::extent()?;
                let refresh = session.apply(input, extent);
                if refresh.redraw {
                    screen.redraw(session, extent)?;
                }
                screen.place_cursor(refresh.cursor)?;
            }
            Event::Resize(cols, rows) => {
                let extent = Extent::new(rows as usize, cols as usize);
                let refresh = session.refresh_forced(extent);
                screen.redraw(session, extent)?;
                screen.place_cursor(refresh.cursor)?;
            }
            _ => {}
        }
    }
    Ok(())
}

/// Installs the stderr log subscriber, but only when `RUST_LOG` is set:
/// unsolicited log lines would garble the raw-mode screen. Redirect
/// stderr to a file to capture them.
fn init_tracing() {
    if std::env::var_os("RUST_LOG").is_none() {
        return;
    }
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
