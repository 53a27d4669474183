use logofield_core::config::PhysicsConfig;
use logofield_core::{LogoBody, PointerState, Vec2};
use rand::Rng;

use crate::forces::{CollisionParams, attraction_impulse, reflect_off_bounds, resolve_collision};

/// Advance every body by one tick.
///
/// Bodies are processed in index order. Each one is pulled (or relaxed),
/// damped, integrated and reflected, then tested against every body with a
/// higher index, which at that point has not yet moved this tick. Each
/// unordered pair is therefore resolved at most once per tick.
pub fn advance(
    bodies: &mut [LogoBody],
    pointer: &PointerState,
    config: &PhysicsConfig,
    bounds: Vec2,
    rng: &mut impl Rng,
) {
    let collision = CollisionParams {
        gain: config.collision_gain,
        epsilon: config.collision_epsilon,
        spin_kick: config.spin_kick,
    };

    for i in 0..bodies.len() {
        let (head, tail) = bodies.split_at_mut(i + 1);
        let body = &mut head[i];

        if pointer.engaged {
            if let Some(dv) = attraction_impulse(
                body.center(),
                pointer.position,
                config.attraction_strength,
                config.attraction_epsilon,
            ) {
                body.velocity += dv;
                body.target_opacity = 1.0;
            }
        } else {
            body.target_opacity = config.idle_opacity.sample(rng);
        }

        body.velocity *= config.friction;

        body.position += body.velocity;
        body.rotation += body.rotation_speed;

        reflect_off_bounds(body, bounds, config.restitution);

        for other in tail.iter_mut() {
            resolve_collision(body, other, &collision, rng);
        }

        body.opacity += (body.target_opacity - body.opacity) * config.opacity_smoothing;
    }
}
