//! Stage 6: loading a PNG through the image-decoding extension. The
//! session initializes PNG support at startup (its failure is reported
//! distinctly from window creation), then the stage behaves like the
//! stretch demo.

use blit_engine::prelude::*;

const IMAGE_PATH: &str = "viewer_app/assets/loaded.png";

fn main() {
    blit_engine::logging::init();

    if let Err(e) = run() {
        log::error!("{e}");
    }
}

fn run() -> Result<(), SessionError> {
    let config = SessionConfig {
        title: "PNG Load".to_string(),
        png_support: true,
        optimize_surfaces: true,
        ..SessionConfig::default()
    };
    let mut session = Session::new(&config)?;

    let mut assets = session.asset_store()?;
    assets.load(AssetSlot::Default, IMAGE_PATH)?;

    session.run_loop(&assets, &KeyBindings::none(), BlitMode::Scaled)?;

    Ok(())
}
