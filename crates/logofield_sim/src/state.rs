use bevy::prelude::*;
use logofield_core::{SwarmConfig, SwarmError};
use std::ops::{Deref, DerefMut};

/// Lifecycle of the frame driver.
///
/// `Idle` until every logo image has loaded, then `Running` until stopped.
/// `Stopped` is terminal for a mount: nothing moves it back to `Running`.
#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DriverState {
    #[default]
    Idle,
    Running,
    Stopped,
}

/// Request to stop the swarm and tear it down. Safe to send any number of times.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct StopSwarm;

/// The swarm could not be mounted or its images could not be loaded
#[derive(Event, Debug, Clone)]
pub struct SwarmStartupFailed(pub SwarmError);

/// Configuration the swarm is mounted with
#[derive(Resource, Debug, Clone, Default)]
pub struct SwarmSettings(pub SwarmConfig);

impl Deref for SwarmSettings {
    type Target = SwarmConfig;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for SwarmSettings {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

/// Log a startup failure, broadcast it, and park the driver in `Stopped`
pub fn report_startup_failure(
    error: SwarmError,
    failures: &mut EventWriter<SwarmStartupFailed>,
    next_state: &mut NextState<DriverState>,
) {
    error!("Logo swarm startup aborted: {error}");
    failures.send(SwarmStartupFailed(error));
    next_state.set(DriverState::Stopped);
}
