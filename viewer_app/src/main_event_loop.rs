//! Stage 3: a real poll loop. The same bitmap is blitted and presented on
//! every iteration until the quit event arrives.

use blit_engine::prelude::*;

const IMAGE_PATH: &str = "viewer_app/assets/x.bmp";

fn main() {
    blit_engine::logging::init();

    if let Err(e) = run() {
        log::error!("{e}");
    }
}

fn run() -> Result<(), SessionError> {
    let config = SessionConfig {
        title: "Event Loop".to_string(),
        ..SessionConfig::default()
    };
    let mut session = Session::new(&config)?;

    let mut assets = session.asset_store()?;
    assets.load(AssetSlot::Default, IMAGE_PATH)?;

    // No bindings: every key resolves to the default slot.
    session.run_loop(&assets, &KeyBindings::none(), BlitMode::Direct)?;

    Ok(())
}
