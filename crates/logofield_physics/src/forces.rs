use logofield_core::{LogoBody, Span, Vec2};
use rand::Rng;

/// Velocity change pulling a body centered at `center` toward `pointer`.
///
/// Inverse-square in the center-to-pointer distance. Returns `None` when the
/// pointer is within `epsilon` of the center, where the pull would blow up.
pub fn attraction_impulse(center: Vec2, pointer: Vec2, strength: f32, epsilon: f32) -> Option<Vec2> {
    let delta = pointer - center;
    let distance = delta.length();
    if distance <= epsilon {
        return None;
    }
    let force = strength / (distance * distance);
    Some(delta / distance * force)
}

/// Keep the bounding box inside `[0, bounds]` on each axis, bouncing off the
/// edge it crossed with `restitution` of the normal velocity kept.
pub fn reflect_off_bounds(body: &mut LogoBody, bounds: Vec2, restitution: f32) {
    let size = body.size;

    if body.position.x <= 0.0 {
        body.position.x = 0.0;
        body.velocity.x *= -restitution;
    } else if body.position.x + size >= bounds.x {
        body.position.x = bounds.x - size;
        body.velocity.x *= -restitution;
    }

    if body.position.y <= 0.0 {
        body.position.y = 0.0;
        body.velocity.y *= -restitution;
    } else if body.position.y + size >= bounds.y {
        body.position.y = bounds.y - size;
        body.velocity.y *= -restitution;
    }
}

/// Tunables for [`resolve_collision`]
#[derive(Debug, Clone, Copy)]
pub struct CollisionParams {
    pub gain: f32,
    pub epsilon: f32,
    pub spin_kick: Span,
}

/// Push two overlapping bodies apart through their velocities.
///
/// The correction is the gap between `b`'s center and the point one contact
/// distance away from `a` along the line of centers, scaled by `gain`. It is
/// split in inverse proportion to mass: `a` takes `m_b / (m_a + m_b)` of it,
/// `b` takes `m_a / (m_a + m_b)` in the opposite direction. Both bodies light
/// up and pick up a random spin kick.
///
/// Returns `false` (and changes nothing) when the bodies do not overlap or
/// their centers coincide within `epsilon`.
pub fn resolve_collision(
    a: &mut LogoBody,
    b: &mut LogoBody,
    params: &CollisionParams,
    rng: &mut impl Rng,
) -> bool {
    let center_a = a.center();
    let center_b = b.center();
    let delta = center_b - center_a;
    let distance = delta.length();
    let min_distance = a.half_size() + b.half_size();

    if distance >= min_distance || distance <= params.epsilon {
        return false;
    }

    let angle = delta.y.atan2(delta.x);
    let target = center_a + Vec2::from_angle(angle) * min_distance;
    let correction = (target - center_b) * params.gain;

    let total_mass = a.mass + b.mass;
    a.velocity -= correction * (b.mass / total_mass);
    b.velocity += correction * (a.mass / total_mass);

    a.target_opacity = 1.0;
    b.target_opacity = 1.0;

    a.rotation_speed += params.spin_kick.sample(rng);
    b.rotation_speed += params.spin_kick.sample(rng);

    true
}
