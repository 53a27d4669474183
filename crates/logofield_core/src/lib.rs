pub mod config;
pub mod constants;
pub mod error;
pub mod types;

pub use config::SwarmConfig;
pub use constants::*;
pub use error::{SwarmError, SwarmResult};
pub use types::*;

pub use glam::Vec2;
