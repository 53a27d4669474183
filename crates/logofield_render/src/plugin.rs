use bevy::prelude::*;
use logofield_sim::{DriverState, SwarmSet};

use crate::loader::{ImageLoad, ImageMap, poll_image_load, release_images};
use crate::logos::{despawn_logo_visuals, present_frame, spawn_logo_visuals};
use crate::mount::mount_swarm;
use crate::pointer::capture_pointer_events;
use crate::surface::spawn_surface;

/// Bevy plugin for the window side of the swarm: surface, image loading,
/// pointer capture and drawing. Needs [`logofield_sim::SwarmSimPlugin`].
pub struct SwarmRenderPlugin;

impl Plugin for SwarmRenderPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (spawn_surface, mount_swarm).chain())
            .add_systems(
                Update,
                (
                    poll_image_load
                        .before(SwarmSet::Control)
                        .run_if(in_state(DriverState::Idle))
                        .run_if(resource_exists::<ImageLoad>),
                    capture_pointer_events.in_set(SwarmSet::Capture),
                    present_frame
                        .in_set(SwarmSet::Render)
                        .run_if(resource_exists::<ImageMap>),
                ),
            )
            .add_systems(OnEnter(DriverState::Running), spawn_logo_visuals)
            .add_systems(
                OnEnter(DriverState::Stopped),
                (despawn_logo_visuals, release_images),
            );
    }
}
