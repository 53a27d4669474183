//! One frame's worth of drawing, computed from simulation state.
//!
//! [`compose_frame`] is a read-only pass over the bodies: it decides what is
//! drawn where, in store order, and leaves presenting it to [`crate::logos`].

use bevy::prelude::*;
use logofield_core::config::RenderConfig;
use logofield_core::{LogoBody, PointerState};

use crate::loader::ImageMap;

/// A body's image, drawn centered and rotated
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteDraw {
    /// Store index of the body
    pub index: usize,
    pub center: Vec2,
    pub rotation: f32,
    pub size: f32,
    pub alpha: f32,
    /// Draw the glow copy on top
    pub glow: bool,
}

/// Hover label above a body, anchored at the bottom center of the text
#[derive(Debug, Clone, PartialEq)]
pub struct LabelDraw {
    pub index: usize,
    pub text: String,
    pub anchor: Vec2,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CaptionDraw {
    pub text: String,
    pub anchor: Vec2,
}

/// Everything drawn in one frame, in simulation space
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub sprites: Vec<SpriteDraw>,
    pub labels: Vec<LabelDraw>,
    pub caption: CaptionDraw,
}

impl Frame {
    pub fn sprite(&self, index: usize) -> Option<&SpriteDraw> {
        self.sprites.iter().find(|s| s.index == index)
    }

    pub fn label(&self, index: usize) -> Option<&LabelDraw> {
        self.labels.iter().find(|l| l.index == index)
    }
}

pub fn compose_frame(
    bodies: &[LogoBody],
    pointer: &PointerState,
    images: &ImageMap,
    surface: Vec2,
    config: &RenderConfig,
) -> Frame {
    let mut sprites = Vec::with_capacity(bodies.len());
    let mut labels = Vec::new();

    for (index, body) in bodies.iter().enumerate() {
        if !images.contains(&body.id) {
            continue;
        }
        let center = body.center();

        sprites.push(SpriteDraw {
            index,
            center,
            rotation: body.rotation,
            size: body.size,
            alpha: body.opacity,
            glow: body.opacity > config.glow_threshold,
        });

        if pointer.position.distance(center) < body.size {
            labels.push(LabelDraw {
                index,
                text: body.name.clone(),
                anchor: Vec2::new(center.x, body.position.y - config.label_offset),
            });
        }
    }

    Frame {
        sprites,
        labels,
        caption: CaptionDraw {
            text: config.caption.clone(),
            anchor: Vec2::new(surface.x / 2.0, surface.y - config.caption_margin),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SURFACE: Vec2 = Vec2::new(800.0, 600.0);

    fn images(ids: &[&str]) -> ImageMap {
        ids.iter()
            .enumerate()
            .map(|(i, id)| (id.to_string(), Handle::weak_from_u128(i as u128 + 1)))
            .collect()
    }

    fn body(id: &str, position: Vec2, opacity: f32) -> LogoBody {
        let mut body = LogoBody::at_rest(id, id.to_uppercase(), 50.0, 20.0, position);
        body.opacity = opacity;
        body.rotation = 0.3;
        body
    }

    fn pointer_at(position: Vec2) -> PointerState {
        PointerState {
            position,
            engaged: false,
        }
    }

    #[test]
    fn test_sprites_follow_store_order() {
        let bodies = vec![
            body("a", Vec2::new(100.0, 100.0), 0.8),
            body("b", Vec2::new(300.0, 100.0), 0.8),
            body("c", Vec2::new(500.0, 100.0), 0.8),
        ];
        let frame = compose_frame(
            &bodies,
            &pointer_at(Vec2::ZERO),
            &images(&["a", "b", "c"]),
            SURFACE,
            &RenderConfig::default(),
        );

        let order: Vec<_> = frame.sprites.iter().map(|s| s.index).collect();
        assert_eq!(order, vec![0, 1, 2]);
        let first = &frame.sprites[0];
        assert_eq!(first.center, Vec2::new(125.0, 125.0));
        assert_eq!(first.size, 50.0);
        assert_eq!(first.alpha, 0.8);
        assert_eq!(first.rotation, 0.3);
    }

    #[test]
    fn test_glow_only_above_threshold() {
        let bodies = vec![
            body("dim", Vec2::new(100.0, 100.0), 0.9),
            body("bright", Vec2::new(300.0, 100.0), 0.95),
        ];
        let frame = compose_frame(
            &bodies,
            &pointer_at(Vec2::ZERO),
            &images(&["dim", "bright"]),
            SURFACE,
            &RenderConfig::default(),
        );
        assert!(!frame.sprite(0).unwrap().glow);
        assert!(frame.sprite(1).unwrap().glow);
    }

    #[test]
    fn test_label_when_pointer_near() {
        let bodies = vec![
            body("a", Vec2::new(100.0, 100.0), 0.8),
            body("b", Vec2::new(400.0, 400.0), 0.8),
        ];
        // 40 units from a's center, far from b
        let frame = compose_frame(
            &bodies,
            &pointer_at(Vec2::new(165.0, 125.0)),
            &images(&["a", "b"]),
            SURFACE,
            &RenderConfig::default(),
        );

        assert_eq!(frame.labels.len(), 1);
        let label = frame.label(0).unwrap();
        assert_eq!(label.text, "A");
        assert_eq!(label.anchor, Vec2::new(125.0, 90.0));
        assert!(frame.label(1).is_none());
    }

    #[test]
    fn test_no_label_at_exactly_size_distance() {
        let bodies = vec![body("a", Vec2::new(100.0, 100.0), 0.8)];
        let frame = compose_frame(
            &bodies,
            &pointer_at(Vec2::new(175.0, 125.0)),
            &images(&["a"]),
            SURFACE,
            &RenderConfig::default(),
        );
        assert!(frame.labels.is_empty());
    }

    #[test]
    fn test_missing_image_draws_nothing_for_body() {
        let bodies = vec![
            body("a", Vec2::new(100.0, 100.0), 0.8),
            body("b", Vec2::new(300.0, 100.0), 0.8),
        ];
        let frame = compose_frame(
            &bodies,
            &pointer_at(Vec2::new(325.0, 125.0)),
            &images(&["a"]),
            SURFACE,
            &RenderConfig::default(),
        );
        assert_eq!(frame.sprites.len(), 1);
        assert!(frame.sprite(1).is_none());
        assert!(frame.labels.is_empty());
    }

    #[test]
    fn test_caption_always_present() {
        let frame = compose_frame(
            &[],
            &pointer_at(Vec2::ZERO),
            &ImageMap::default(),
            SURFACE,
            &RenderConfig::default(),
        );
        assert_eq!(frame.caption.text, "Click and hold to attract logos");
        assert_eq!(frame.caption.anchor, Vec2::new(400.0, 580.0));
    }
}
