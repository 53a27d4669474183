use bevy::prelude::*;

use super::input::PointerEvent;
use super::state::{DriverState, StopSwarm, SwarmSettings, SwarmStartupFailed};
use super::swarm::SwarmState;

/// Per-frame stages of a running swarm, executed in declaration order
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SwarmSet {
    /// Stop requests are turned into state changes. Runs in every state, ahead
    /// of the other stages; anything else that moves the driver must run
    /// before it, so a stop always has the last word in a frame.
    Control,
    /// Host adapters turn window input into [`PointerEvent`]s
    Capture,
    /// Pending pointer events are folded into the tracker
    Input,
    /// One physics tick
    Step,
    /// Read-only redraw of the surface
    Render,
}

/// Frame driver bookkeeping, kept across mounts
#[derive(Resource, Debug, Default)]
pub struct DriverStats {
    /// Frame iterations (tick + redraw) executed while running
    pub frames: u64,
}

/// Bevy plugin for the frame driver and simulation tick
pub struct SwarmSimPlugin;

impl Plugin for SwarmSimPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<DriverState>()
            .init_resource::<SwarmSettings>()
            .init_resource::<DriverStats>()
            .add_event::<PointerEvent>()
            .add_event::<StopSwarm>()
            .add_event::<SwarmStartupFailed>()
            .configure_sets(Update, SwarmSet::Control.before(SwarmSet::Capture))
            .configure_sets(
                Update,
                (
                    SwarmSet::Capture,
                    SwarmSet::Input,
                    SwarmSet::Step,
                    SwarmSet::Render,
                )
                    .chain()
                    .run_if(in_state(DriverState::Running)),
            )
            .configure_sets(
                Update,
                (SwarmSet::Input, SwarmSet::Step, SwarmSet::Render)
                    .run_if(resource_exists::<SwarmState>),
            )
            .add_systems(
                Update,
                (
                    handle_stop_requests.in_set(SwarmSet::Control),
                    apply_pointer_events.in_set(SwarmSet::Input),
                    simulation_tick.in_set(SwarmSet::Step),
                ),
            )
            .add_systems(OnEnter(DriverState::Running), announce_running)
            .add_systems(OnEnter(DriverState::Stopped), unmount_swarm);
    }
}

fn handle_stop_requests(
    mut requests: EventReader<StopSwarm>,
    state: Res<State<DriverState>>,
    mut next_state: ResMut<NextState<DriverState>>,
) {
    if requests.is_empty() {
        return;
    }
    requests.clear();

    if *state.get() == DriverState::Stopped {
        debug!("Stop requested for an already stopped swarm");
        return;
    }
    next_state.set(DriverState::Stopped);
}

fn apply_pointer_events(mut events: EventReader<PointerEvent>, mut swarm: ResMut<SwarmState>) {
    for event in events.read() {
        swarm.apply_pointer(event);
    }
}

/// One physics step per rendered frame
fn simulation_tick(mut swarm: ResMut<SwarmState>, mut stats: ResMut<DriverStats>) {
    swarm.tick();
    stats.frames += 1;
}

fn announce_running(swarm: Option<Res<SwarmState>>) {
    let Some(swarm) = swarm else {
        warn!("Frame driver running without a mounted swarm");
        return;
    };
    info!(
        "Logo swarm running: {} bodies on a {}x{} surface",
        swarm.bodies().len(),
        swarm.config.surface.width,
        swarm.config.surface.height
    );
}

/// Drop every body at once; pointer capture stops with the `Running` state
fn unmount_swarm(mut commands: Commands, swarm: Option<Res<SwarmState>>) {
    if let Some(swarm) = swarm {
        info!("Logo swarm stopped after {} ticks", swarm.ticks);
        commands.remove_resource::<SwarmState>();
    }
}
