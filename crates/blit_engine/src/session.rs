//! Window session lifecycle
//!
//! A [`Session`] owns the display subsystem, one window, and the event
//! pump, in that acquisition order; drop releases them in reverse. The
//! window surface itself is re-acquired from the window every frame, so it
//! can never outlive the window that backs it.

use crate::assets::{AssetSlot, AssetStore};
use crate::config::SessionConfig;
use crate::error::SessionError;
use crate::events::{LoopState, SessionEvent};
use crate::input::KeyBindings;
use sdl2::pixels::{Color, PixelFormatEnum};
use sdl2::rect::Rect;
use sdl2::video::Window;
use sdl2::{EventPump, Sdl};

/// How an asset is placed onto the window surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlitMode {
    /// 1:1 blit at the top-left corner
    Direct,
    /// Scaled to fill the whole window
    Scaled,
}

/// One on-screen session: display subsystem, window, and event queue
///
/// At most one instance exists per process. Field order is drop order:
/// the event pump goes first, then the window, then the subsystem handle.
pub struct Session {
    event_pump: EventPump,
    window: Window,
    #[allow(dead_code)] // Held so subsystem shutdown happens after the window is destroyed
    sdl: Sdl,
    png_enabled: bool,
    optimize_surfaces: bool,
}

impl Session {
    /// Initialize the display subsystem and create the window
    ///
    /// On subsystem failure nothing was acquired. On window failure the
    /// subsystem handle never escapes this function, so its shutdown still
    /// runs. When the config asks for PNG support, the decoder is checked
    /// here and its absence is reported distinctly from window creation.
    pub fn new(config: &SessionConfig) -> Result<Self, SessionError> {
        let sdl = sdl2::init().map_err(SessionError::SubsystemInit)?;
        let video = sdl.video().map_err(SessionError::SubsystemInit)?;
        log::info!("Display subsystem initialized");

        let window = video
            .window(&config.title, config.width, config.height)
            .position_centered()
            .build()
            .map_err(|e| SessionError::WindowCreate(e.to_string()))?;
        log::info!(
            "Window created: \"{}\" {}x{}",
            config.title,
            config.width,
            config.height
        );

        let event_pump = sdl.event_pump().map_err(SessionError::SubsystemInit)?;

        let png_enabled = if config.png_support {
            ensure_png_decoder()?;
            log::info!("PNG decoding extension initialized");
            true
        } else {
            false
        };

        Ok(Self {
            event_pump,
            window,
            sdl,
            png_enabled,
            optimize_surfaces: config.optimize_surfaces,
        })
    }

    /// Pixel format of the window surface
    pub fn pixel_format(&self) -> Result<PixelFormatEnum, SessionError> {
        let surface = self
            .window
            .surface(&self.event_pump)
            .map_err(SessionError::WindowCreate)?;
        Ok(surface.pixel_format_enum())
    }

    /// Create an asset store configured for this session
    ///
    /// The store converts assets to the window surface format when the
    /// session was configured to optimize, and rejects PNG paths when PNG
    /// support was not initialized.
    pub fn asset_store(&self) -> Result<AssetStore, SessionError> {
        let target_format = if self.optimize_surfaces {
            Some(self.pixel_format()?)
        } else {
            None
        };
        Ok(AssetStore::new(target_format).with_png_support(self.png_enabled))
    }

    /// Fill the window surface with a color and present it
    pub fn fill_and_present(&mut self, color: Color) -> Result<(), SessionError> {
        let mut screen = self
            .window
            .surface(&self.event_pump)
            .map_err(SessionError::WindowCreate)?;
        screen
            .fill_rect(None, color)
            .map_err(SessionError::Present)?;
        screen.update_window().map_err(SessionError::Present)?;
        Ok(())
    }

    /// Blit one asset onto the window surface and present it
    pub fn blit_once(
        &mut self,
        assets: &AssetStore,
        slot: AssetSlot,
        mode: BlitMode,
    ) -> Result<(), SessionError> {
        self.blit_slot(assets, slot, mode)
    }

    /// Run the session loop until a quit event arrives
    ///
    /// Each iteration drains all pending events without blocking, updates
    /// the selection from any key-downs, then blits the selected asset and
    /// presents. A quit event ends the loop after that iteration's blit,
    /// never before it. There is no frame-rate limiting.
    pub fn run_loop(
        &mut self,
        assets: &AssetStore,
        bindings: &KeyBindings,
        mode: BlitMode,
    ) -> Result<(), SessionError> {
        let mut state = LoopState::new();
        log::info!("Entering session loop");

        loop {
            while let Some(event) = self.event_pump.poll_event() {
                if let Some(session_event) = SessionEvent::from_sdl(&event) {
                    state.process(session_event, bindings);
                }
            }

            // The frame for this iteration is presented even when quit was
            // just seen.
            self.blit_slot(assets, state.selection(), mode)?;

            if state.should_quit() {
                break;
            }
        }

        log::info!("Session loop ended");
        Ok(())
    }

    /// Spin until a quit event arrives, presenting nothing
    ///
    /// Used by the stages that blit once up front and then only wait.
    pub fn wait_for_quit(&mut self) {
        loop {
            while let Some(event) = self.event_pump.poll_event() {
                if matches!(SessionEvent::from_sdl(&event), Some(SessionEvent::Quit)) {
                    log::info!("Quit requested");
                    return;
                }
            }
        }
    }

    fn blit_slot(
        &mut self,
        assets: &AssetStore,
        slot: AssetSlot,
        mode: BlitMode,
    ) -> Result<(), SessionError> {
        let frame = assets.get(slot)?;
        let mut screen = self
            .window
            .surface(&self.event_pump)
            .map_err(SessionError::WindowCreate)?;

        match mode {
            BlitMode::Direct => {
                frame
                    .blit(None, &mut screen, None)
                    .map_err(SessionError::Present)?;
            }
            BlitMode::Scaled => {
                let target = Rect::new(0, 0, screen.width(), screen.height());
                frame
                    .blit_scaled(None, &mut screen, Some(target))
                    .map_err(SessionError::Present)?;
            }
        }

        screen.update_window().map_err(SessionError::Present)?;
        Ok(())
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        // Fields release themselves in declaration order after this runs:
        // event pump, then window, then the subsystem handle.
        log::info!("Session shutdown: window destroyed, display subsystem stopped");
    }
}

/// Verify the PNG decoder is compiled into the image stack
fn ensure_png_decoder() -> Result<(), SessionError> {
    if image::ImageFormat::Png.reading_enabled() {
        Ok(())
    } else {
        Err(SessionError::ExtensionInit(
            "PNG decoder is not available in this build".to_string(),
        ))
    }
}
