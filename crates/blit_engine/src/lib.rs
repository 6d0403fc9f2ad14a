//! # Blit Engine
//!
//! A small windowing library built around one idea: the **window session**.
//! A session owns a display window and its drawable surface, loads decoded
//! image assets into surface memory, runs a synchronous poll loop that maps
//! key presses to a displayed image, and releases everything in reverse
//! acquisition order when it ends.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use blit_engine::prelude::*;
//!
//! fn main() -> Result<(), SessionError> {
//!     let config = SessionConfig::default();
//!     let mut session = Session::new(&config)?;
//!
//!     let mut assets = session.asset_store()?;
//!     assets.load(AssetSlot::Default, "assets/press.bmp")?;
//!
//!     let bindings = KeyBindings::none();
//!     session.run_loop(&assets, &bindings, BlitMode::Direct)?;
//!     Ok(())
//! }
//! ```
//!
//! The event-loop reduction (`events::LoopState`) and the key-binding table
//! (`input::KeyBindings`) are plain data types with no SDL dependency at
//! runtime, so the loop semantics are unit-testable without a display.

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

pub mod assets;
pub mod config;
pub mod events;
pub mod input;
pub mod logging;

mod error;
mod session;

pub use error::SessionError;
pub use session::{BlitMode, Session};

/// Common imports for library users
pub mod prelude {
    pub use crate::{
        assets::{AssetError, AssetSlot, AssetStore, ImageData},
        config::SessionConfig,
        events::{LoopState, SessionEvent},
        input::{KeyBindings, KeySymbol},
        BlitMode, Session, SessionError,
    };
}
