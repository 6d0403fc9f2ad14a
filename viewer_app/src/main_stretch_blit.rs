//! Stage 5: optimized surface loading and soft stretching. The bitmap is
//! converted to the window surface's pixel format at load time, then
//! blitted scaled to fill the whole window every iteration.

use blit_engine::prelude::*;

const IMAGE_PATH: &str = "viewer_app/assets/stretch.bmp";

fn main() {
    blit_engine::logging::init();

    if let Err(e) = run() {
        log::error!("{e}");
    }
}

fn run() -> Result<(), SessionError> {
    let config = SessionConfig {
        title: "Stretch Blit".to_string(),
        optimize_surfaces: true,
        ..SessionConfig::default()
    };
    let mut session = Session::new(&config)?;

    let mut assets = session.asset_store()?;
    assets.load(AssetSlot::Default, IMAGE_PATH)?;

    session.run_loop(&assets, &KeyBindings::none(), BlitMode::Scaled)?;

    Ok(())
}
