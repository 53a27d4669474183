use bevy::prelude::*;
use bevy::sprite::Anchor;
use logofield_sim::{SwarmSettings, SwarmState};

use crate::frame::{Frame, compose_frame};
use crate::loader::ImageMap;
use crate::surface::{SwarmVisual, surface_rotation, surface_to_world};

/// Which copy of a logo image a sprite is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogoLayer {
    Body,
    Glow,
}

/// Sprite showing body `index`
#[derive(Component)]
pub struct LogoSprite {
    pub index: usize,
    pub layer: LogoLayer,
}

/// Hover label of body `index`
#[derive(Component)]
pub struct LogoLabel {
    pub index: usize,
}

#[derive(Component)]
pub struct SwarmCaption;

/// Each body owns a depth slot; later bodies draw over earlier ones, and within
/// a slot the glow sits as a halo behind the image and the label over both.
const DEPTH_PER_BODY: f32 = 1.0;
const GLOW_DEPTH: f32 = 0.1;
const LABEL_DEPTH: f32 = 0.2;
const CAPTION_DEPTH: f32 = 900.0;

/// Depth of one of body `index`'s sprites
pub fn sprite_depth(index: usize, layer: LogoLayer) -> f32 {
    let slot = index as f32 * DEPTH_PER_BODY;
    match layer {
        LogoLayer::Body => slot,
        LogoLayer::Glow => slot - GLOW_DEPTH,
    }
}

pub fn label_depth(index: usize) -> f32 {
    index as f32 * DEPTH_PER_BODY + LABEL_DEPTH
}

const LABEL_ALPHA: f32 = 0.9;
const CAPTION_ALPHA: f32 = 0.5;

/// Spawn one image sprite, one glow sprite and one label per body that has
/// an image, plus the caption. All start hidden; the first frame places them.
pub fn spawn_logo_visuals(
    mut commands: Commands,
    swarm: Res<SwarmState>,
    images: Res<ImageMap>,
    settings: Res<SwarmSettings>,
) {
    let render = &settings.render;

    for (index, body) in swarm.bodies().iter().enumerate() {
        let Some(image) = images.get(&body.id) else {
            warn!("No image for logo '{}', it will not be drawn", body.id);
            continue;
        };

        for layer in [LogoLayer::Body, LogoLayer::Glow] {
            commands.spawn((
                Sprite {
                    image: image.clone(),
                    custom_size: Some(Vec2::splat(body.size)),
                    ..default()
                },
                Transform::default(),
                Visibility::Hidden,
                LogoSprite { index, layer },
                SwarmVisual,
            ));
        }

        commands.spawn((
            Text2d::new(body.name.clone()),
            TextFont {
                font_size: render.label_font_size,
                ..default()
            },
            TextColor(Color::srgba(1.0, 1.0, 1.0, LABEL_ALPHA)),
            Anchor::BottomCenter,
            Transform::default(),
            Visibility::Hidden,
            LogoLabel { index },
            SwarmVisual,
        ));
    }

    commands.spawn((
        Text2d::new(render.caption.clone()),
        TextFont {
            font_size: render.caption_font_size,
            ..default()
        },
        TextColor(Color::srgba(1.0, 1.0, 1.0, CAPTION_ALPHA)),
        Anchor::BottomCenter,
        Transform::default(),
        Visibility::Hidden,
        SwarmCaption,
        SwarmVisual,
    ));
}

/// Redraw the surface from the current swarm state.
///
/// Every visual is rewritten or hidden each frame, so nothing from an earlier
/// frame survives unless the current state still calls for it.
pub fn present_frame(
    swarm: Res<SwarmState>,
    images: Res<ImageMap>,
    settings: Res<SwarmSettings>,
    mut sprites: Query<(&LogoSprite, &mut Sprite, &mut Transform, &mut Visibility)>,
    mut labels: Query<(&LogoLabel, &mut Transform, &mut Visibility), Without<LogoSprite>>,
    mut captions: Query<
        (&mut Transform, &mut Visibility),
        (With<SwarmCaption>, Without<LogoSprite>, Without<LogoLabel>),
    >,
) {
    let surface = swarm.surface_size();
    let frame: Frame = compose_frame(
        swarm.bodies(),
        &swarm.pointer(),
        &images,
        surface,
        &settings.render,
    );
    let render = &settings.render;

    for (logo, mut sprite, mut transform, mut visibility) in &mut sprites {
        let Some(draw) = frame.sprite(logo.index) else {
            *visibility = Visibility::Hidden;
            continue;
        };
        let depth = sprite_depth(logo.index, logo.layer);
        let world = surface_to_world(draw.center, surface);

        match logo.layer {
            LogoLayer::Body => {
                sprite.color = Color::srgba(1.0, 1.0, 1.0, draw.alpha);
                sprite.custom_size = Some(Vec2::splat(draw.size));
                *transform = Transform::from_xyz(world.x, world.y, depth);
                *visibility = Visibility::Visible;
            }
            LogoLayer::Glow => {
                if !draw.glow {
                    *visibility = Visibility::Hidden;
                    continue;
                }
                sprite.color = Color::srgba(1.0, 1.0, 1.0, draw.alpha * render.glow_alpha);
                sprite.custom_size = Some(Vec2::splat(draw.size + render.glow_spread));
                *transform = Transform::from_xyz(world.x, world.y, depth);
                *visibility = Visibility::Visible;
            }
        }
        transform.rotation = surface_rotation(draw.rotation);
    }

    for (label, mut transform, mut visibility) in &mut labels {
        match frame.label(label.index) {
            Some(draw) => {
                let world = surface_to_world(draw.anchor, surface);
                *transform = Transform::from_xyz(world.x, world.y, label_depth(label.index));
                *visibility = Visibility::Visible;
            }
            None => *visibility = Visibility::Hidden,
        }
    }

    for (mut transform, mut visibility) in &mut captions {
        let world = surface_to_world(frame.caption.anchor, surface);
        *transform = Transform::from_xyz(world.x, world.y, CAPTION_DEPTH);
        *visibility = Visibility::Visible;
    }
}

/// Despawn every visual of the mount
pub fn despawn_logo_visuals(mut commands: Commands, query: Query<Entity, With<SwarmVisual>>) {
    for entity in &query {
        commands.entity(entity).despawn_recursive();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glow_is_a_halo_behind_its_logo() {
        for index in 0..4 {
            let body = sprite_depth(index, LogoLayer::Body);
            let glow = sprite_depth(index, LogoLayer::Glow);
            assert!(glow < body);
            assert!(label_depth(index) > body);
        }
    }

    #[test]
    fn test_later_bodies_cover_earlier_ones() {
        // the next glow sits over this label; the first glow stays over the backdrop
        assert!(sprite_depth(1, LogoLayer::Glow) > label_depth(0));
        assert!(sprite_depth(0, LogoLayer::Glow) > -1.0);
    }
}
