pub mod input;
pub mod pipeline;
pub mod state;
pub mod swarm;

pub use input::{InputTracker, PointerEvent};
pub use pipeline::{DriverStats, SwarmSet, SwarmSimPlugin};
pub use state::{DriverState, StopSwarm, SwarmSettings, SwarmStartupFailed};
pub use swarm::SwarmState;
