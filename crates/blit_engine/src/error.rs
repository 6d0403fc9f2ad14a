//! Session-level error taxonomy
//!
//! Every failure is detected at the call site and carried up as one of
//! these variants; nothing here aborts the process. The display strings
//! follow the diagnostic shape the binaries print on failure.

use crate::assets::AssetError;
use thiserror::Error;

/// Errors raised while bringing a window session up or running its loop
#[derive(Error, Debug)]
pub enum SessionError {
    /// The display subsystem could not start; no further state was touched
    #[error("display subsystem could not be initialized! Error: {0}")]
    SubsystemInit(String),

    /// The window (or its drawable surface) could not be created; the
    /// subsystem itself is up and still gets shut down on drop
    #[error("window could not be created! Error: {0}")]
    WindowCreate(String),

    /// The image-decoding extension could not be initialized; reported
    /// distinctly from window-creation failure
    #[error("image extension could not be initialized! Error: {0}")]
    ExtensionInit(String),

    /// The window surface could not be written or presented
    #[error("surface could not be presented! Error: {0}")]
    Present(String),

    /// An asset failed to decode or convert
    #[error(transparent)]
    Asset(#[from] AssetError),
}
