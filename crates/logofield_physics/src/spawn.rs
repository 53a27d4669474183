use logofield_core::config::SpawnConfig;
use logofield_core::{LogoBody, LogoSpec, Span, Vec2};
use rand::Rng;
use std::f32::consts::TAU;

/// Create one body per logo, in input order.
///
/// Each body's bounding box is placed fully inside `bounds`; the caller is
/// responsible for `bounds` being at least `config.size.max` on both axes.
pub fn spawn_bodies(
    logos: &[LogoSpec],
    config: &SpawnConfig,
    bounds: Vec2,
    rng: &mut impl Rng,
) -> Vec<LogoBody> {
    logos
        .iter()
        .map(|logo| spawn_body(logo, config, bounds, rng))
        .collect()
}

fn spawn_body(logo: &LogoSpec, config: &SpawnConfig, bounds: Vec2, rng: &mut impl Rng) -> LogoBody {
    let size = config.size.sample(rng);
    let mass = size / config.mass_divisor;

    let position = Vec2::new(
        Span::new(0.0, (bounds.x - size).max(0.0)).sample(rng),
        Span::new(0.0, (bounds.y - size).max(0.0)).sample(rng),
    );
    let velocity = Vec2::new(config.velocity.sample(rng), config.velocity.sample(rng));

    LogoBody {
        id: logo.id.clone(),
        name: logo.name.clone(),
        size,
        mass,
        position,
        velocity,
        rotation: Span::new(0.0, TAU).sample(rng),
        rotation_speed: config.rotation_speed.sample(rng),
        opacity: config.opacity.sample(rng),
        target_opacity: config.opacity.sample(rng),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use logofield_core::default_roster;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn bounds() -> Vec2 {
        Vec2::new(800.0, 600.0)
    }

    #[test]
    fn test_one_body_per_logo_in_order() {
        let logos = default_roster();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let bodies = spawn_bodies(&logos, &SpawnConfig::default(), bounds(), &mut rng);

        assert_eq!(bodies.len(), logos.len());
        for (body, logo) in bodies.iter().zip(&logos) {
            assert_eq!(body.id, logo.id);
            assert_eq!(body.name, logo.name);
        }
    }

    #[test]
    fn test_sampled_state_respects_ranges() {
        let config = SpawnConfig::default();
        let logos: Vec<_> = (0..200)
            .map(|i| LogoSpec::new(format!("logo-{i}"), "Logo", "logo.png"))
            .collect();
        let mut rng = ChaCha8Rng::seed_from_u64(2);

        for body in spawn_bodies(&logos, &config, bounds(), &mut rng) {
            assert!((40.0..=80.0).contains(&body.size));
            assert!((body.mass - body.size / 20.0).abs() < 1e-6);
            assert!(body.mass > 0.0);
            assert!(body.fits_within(bounds(), 1e-3));
            assert!(body.velocity.x.abs() <= 0.75 && body.velocity.y.abs() <= 0.75);
            assert!((0.0..=TAU).contains(&body.rotation));
            assert!(body.rotation_speed.abs() <= 0.015);
            assert!((0.7..=1.0).contains(&body.opacity));
            assert!((0.7..=1.0).contains(&body.target_opacity));
        }
    }

    #[test]
    fn test_same_seed_same_bodies() {
        let logos = default_roster();
        let config = SpawnConfig::default();
        let a = spawn_bodies(&logos, &config, bounds(), &mut ChaCha8Rng::seed_from_u64(5));
        let b = spawn_bodies(&logos, &config, bounds(), &mut ChaCha8Rng::seed_from_u64(5));
        assert_eq!(a, b);
    }
}
