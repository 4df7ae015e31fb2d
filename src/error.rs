//! Error taxonomy for navigator operations

use thiserror::Error;

/// Everything a navigator operation can fail with.
///
/// Every variant is recoverable: the menu loop prints the message and
/// returns to the prompt.
#[derive(Debug, Error)]
pub enum NavError {
    #[error("the volume is not ready")]
    NotReady,

    #[error("no volume with that number")]
    OutOfRange,

    #[error("no volume selected")]
    NoVolumeSelected,

    #[error("access denied: {0}")]
    AccessDenied(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("already at the volume root")]
    AtRoot,

    #[error("the name cannot be empty")]
    InvalidName,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
