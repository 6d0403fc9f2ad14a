//! Stage 1: open a window, fill its surface white, present, wait, quit.
//!
//! The simplest possible session: no assets, no event handling. The window
//! stays up for a fixed two seconds and then everything tears down in
//! reverse acquisition order.

use blit_engine::prelude::*;
use sdl2::pixels::Color;
use std::time::Duration;

fn main() {
    blit_engine::logging::init();

    if let Err(e) = run() {
        log::error!("{e}");
    }
    // Teardown runs on every path; the process always exits cleanly.
}

fn run() -> Result<(), SessionError> {
    let config = SessionConfig {
        title: "Hello Window".to_string(),
        ..SessionConfig::default()
    };
    let mut session = Session::new(&config)?;

    session.fill_and_present(Color::RGB(0xFF, 0xFF, 0xFF))?;
    std::thread::sleep(Duration::from_secs(2));

    Ok(())
}
