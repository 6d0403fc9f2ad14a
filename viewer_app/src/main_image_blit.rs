//! Stage 2: load a bitmap, blit it onto the window surface once, then wait
//! for the quit event.
//!
//! The blit happens outside the loop; the loop only watches for quit.

use blit_engine::prelude::*;

const IMAGE_PATH: &str = "viewer_app/assets/hello_world.bmp";

fn main() {
    blit_engine::logging::init();

    if let Err(e) = run() {
        log::error!("{e}");
    }
}

fn run() -> Result<(), SessionError> {
    let config = SessionConfig {
        title: "Image Blit".to_string(),
        ..SessionConfig::default()
    };
    let mut session = Session::new(&config)?;

    let mut assets = session.asset_store()?;
    assets.load(AssetSlot::Default, IMAGE_PATH)?;

    session.blit_once(&assets, AssetSlot::Default, BlitMode::Direct)?;
    session.wait_for_quit();

    Ok(())
}
