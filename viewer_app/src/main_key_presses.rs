//! Stage 4: keyboard-selected images. Five bitmaps are preloaded; each
//! arrow key displays its own image, any other key falls back to the
//! default one.

use blit_engine::prelude::*;

const DEFAULT_PATH: &str = "viewer_app/assets/press.bmp";
const UP_PATH: &str = "viewer_app/assets/up.bmp";
const DOWN_PATH: &str = "viewer_app/assets/down.bmp";
const LEFT_PATH: &str = "viewer_app/assets/left.bmp";
const RIGHT_PATH: &str = "viewer_app/assets/right.bmp";

fn main() {
    blit_engine::logging::init();

    if let Err(e) = run() {
        log::error!("{e}");
    }
}

fn run() -> Result<(), SessionError> {
    let config = SessionConfig {
        title: "Key Presses".to_string(),
        ..SessionConfig::default()
    };
    let mut session = Session::new(&config)?;

    let mut assets = session.asset_store()?;
    assets.load_batch(&[
        (AssetSlot::Default, DEFAULT_PATH),
        (AssetSlot::Up, UP_PATH),
        (AssetSlot::Down, DOWN_PATH),
        (AssetSlot::Left, LEFT_PATH),
        (AssetSlot::Right, RIGHT_PATH),
    ])?;

    session.run_loop(&assets, &KeyBindings::arrows(), BlitMode::Direct)?;

    Ok(())
}
