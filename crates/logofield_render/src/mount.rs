use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use logofield_core::SwarmError;
use logofield_sim::state::report_startup_failure;
use logofield_sim::{DriverState, SwarmSettings, SwarmStartupFailed, SwarmState};

use crate::loader::ImageLoad;

/// Mount the swarm onto the primary window: spawn every body and start
/// loading the logo images. The driver stays `Idle` until they resolve.
pub fn mount_swarm(
    mut commands: Commands,
    settings: Res<SwarmSettings>,
    windows: Query<(), With<PrimaryWindow>>,
    asset_server: Res<AssetServer>,
    mut next_state: ResMut<NextState<DriverState>>,
    mut failures: EventWriter<SwarmStartupFailed>,
) {
    if windows.get_single().is_err() {
        report_startup_failure(SwarmError::SurfaceUnavailable, &mut failures, &mut next_state);
        return;
    }

    let swarm = match SwarmState::mount(settings.0.clone()) {
        Ok(swarm) => swarm,
        Err(error) => {
            report_startup_failure(error, &mut failures, &mut next_state);
            return;
        }
    };

    let load = ImageLoad::begin(&swarm.config.logos, &asset_server);
    info!(
        "Mounted {} logos, loading {} images",
        swarm.bodies().len(),
        load.len()
    );
    commands.insert_resource(swarm);
    commands.insert_resource(load);
}
