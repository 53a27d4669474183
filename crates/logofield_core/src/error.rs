//! Mount-time failures.
//!
//! Everything here is fatal to startup: once the swarm is running, the frame
//! loop raises no errors of its own. Numeric edge cases inside a tick (bodies
//! on top of each other, pointer on a body's center) are skipped, not reported.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SwarmError {
    /// One logo image failed to load; the whole startup is aborted.
    #[error("failed to load image for logo '{id}' from '{path}': {reason}")]
    ResourceLoad {
        id: String,
        path: String,
        reason: String,
    },

    /// No window to draw into at mount.
    #[error("drawing surface unavailable: no primary window")]
    SurfaceUnavailable,

    /// Two input records share an id.
    #[error("duplicate logo id '{0}'")]
    DuplicateId(String),

    /// The configured surface cannot hold the largest possible body.
    #[error("surface {width}x{height} is too small for bodies up to {max_size} units")]
    SurfaceTooSmall { width: f32, height: f32, max_size: f32 },

    /// A sampling range or physics constant is outside its usable domain.
    #[error("invalid setting '{name}': {reason}")]
    InvalidSetting { name: &'static str, reason: String },

    /// Configuration file unreadable or malformed.
    #[error("config '{}': {reason}", path.display())]
    Config { path: PathBuf, reason: String },
}

pub type SwarmResult<T> = Result<T, SwarmError>;
