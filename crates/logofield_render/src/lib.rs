pub mod frame;
pub mod loader;
pub mod logos;
pub mod mount;
pub mod plugin;
pub mod pointer;
pub mod surface;

pub use frame::{Frame, compose_frame};
pub use loader::{ImageLoad, ImageMap};
pub use plugin::SwarmRenderPlugin;
