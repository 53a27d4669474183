use bevy::prelude::*;
use logofield_core::SwarmConfig;
use logofield_render::SwarmRenderPlugin;
use logofield_sim::{SwarmSettings, SwarmSimPlugin, SwarmStartupFailed};
use std::path::Path;

const CONFIG_PATH: &str = "assets/logofield.toml";

fn main() -> AppExit {
    let config = match SwarmConfig::load_or_default(Path::new(CONFIG_PATH)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("logofield: {e}");
            return AppExit::error();
        }
    };
    let resolution = config.surface.size();

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Logofield".into(),
                resolution: (resolution.x, resolution.y).into(),
                ..default()
            }),
            ..default()
        }))
        .insert_resource(ClearColor(Color::srgb(0.05, 0.05, 0.08)))
        .insert_resource(SwarmSettings(config))
        .add_plugins(SwarmSimPlugin)
        .add_plugins(SwarmRenderPlugin)
        .add_systems(Update, exit_on_startup_failure)
        .run()
}

fn exit_on_startup_failure(
    mut failures: EventReader<SwarmStartupFailed>,
    mut exit: EventWriter<AppExit>,
) {
    if let Some(SwarmStartupFailed(error)) = failures.read().next() {
        error!("Exiting: {error}");
        exit.send(AppExit::error());
    }
}
