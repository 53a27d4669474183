use bevy::prelude::*;
use bevy::render::camera::ScalingMode;
use logofield_sim::SwarmSettings;

/// Marker for the camera looking at the drawing surface
#[derive(Component)]
pub struct SurfaceCamera;

/// Marker for everything drawn for the current mount
#[derive(Component)]
pub struct SwarmVisual;

/// Translucent panel behind the bodies
const BACKDROP_COLOR: Color = Color::srgba(0.0, 0.0, 0.0, 0.2);

/// Camera that stretches the logical surface over the whole window, so one
/// simulation unit maps to `window_size / surface_size` display pixels.
pub fn spawn_surface(mut commands: Commands, settings: Res<SwarmSettings>) {
    let surface = settings.surface.size();

    commands.spawn((
        Camera2d,
        OrthographicProjection {
            scaling_mode: ScalingMode::Fixed {
                width: surface.x,
                height: surface.y,
            },
            ..OrthographicProjection::default_2d()
        },
        SurfaceCamera,
    ));

    commands.spawn((
        Sprite::from_color(BACKDROP_COLOR, surface),
        Transform::from_xyz(0.0, 0.0, -1.0),
        SwarmVisual,
    ));
}

/// Simulation space (top-left origin, y down) to world space (centered, y up)
pub fn surface_to_world(point: Vec2, surface: Vec2) -> Vec2 {
    Vec2::new(point.x - surface.x / 2.0, surface.y / 2.0 - point.y)
}

/// Simulation rotation is clockwise on screen; world rotation is counter-clockwise
pub fn surface_rotation(angle: f32) -> Quat {
    Quat::from_rotation_z(-angle)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SURFACE: Vec2 = Vec2::new(800.0, 600.0);

    #[test]
    fn test_corners_map_to_world_edges() {
        assert_eq!(surface_to_world(Vec2::ZERO, SURFACE), Vec2::new(-400.0, 300.0));
        assert_eq!(surface_to_world(SURFACE, SURFACE), Vec2::new(400.0, -300.0));
        assert_eq!(surface_to_world(SURFACE / 2.0, SURFACE), Vec2::ZERO);
    }

    #[test]
    fn test_rotation_flips_handedness() {
        let turned = surface_rotation(std::f32::consts::FRAC_PI_2) * Vec3::X;
        // a quarter turn clockwise on screen points +x to screen-down, world -y
        assert!((turned - Vec3::NEG_Y).length() < 1e-6);
    }
}
