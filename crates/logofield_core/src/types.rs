use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// One logo supplied by the embedding page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogoSpec {
    /// Unique within one mount
    pub id: String,
    /// Label shown when the pointer hovers the body
    pub name: String,
    /// Asset path of the logo image
    pub image: String,
}

impl LogoSpec {
    pub fn new(id: impl Into<String>, name: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            image: image.into(),
        }
    }
}

/// The logos shown when no roster is configured
pub fn default_roster() -> Vec<LogoSpec> {
    vec![
        LogoSpec::new("react", "React", "logos/react.png"),
        LogoSpec::new("typescript", "TypeScript", "logos/ts.png"),
        LogoSpec::new("nextjs", "Next.js", "logos/next.png"),
        LogoSpec::new("tailwind", "Tailwind CSS", "logos/tailwind.png"),
        LogoSpec::new("nodejs", "Node.js", "logos/node-js.png"),
        LogoSpec::new("javascript", "JavaScript", "logos/js.png"),
        LogoSpec::new("html", "HTML5", "logos/html.png"),
        LogoSpec::new("css", "CSS3", "logos/css.png"),
    ]
}

/// Half-open sampling interval `[min, max)`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Span {
    pub min: f32,
    pub max: f32,
}

impl Span {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Interval centered on zero
    pub const fn symmetric(half_width: f32) -> Self {
        Self {
            min: -half_width,
            max: half_width,
        }
    }

    /// Uniform sample; a degenerate span always yields `min`
    pub fn sample(&self, rng: &mut impl Rng) -> f32 {
        self.min + rng.r#gen::<f32>() * (self.max - self.min)
    }
}

/// Latest pointer sample in simulation space
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerState {
    pub position: Vec2,
    /// Pointer held down over the surface
    pub engaged: bool,
}

/// One simulated logo.
///
/// `position` is the top-left corner of the `size`×`size` bounding box, in the
/// surface's top-left-origin, y-down coordinate system.
#[derive(Debug, Clone, PartialEq)]
pub struct LogoBody {
    pub id: String,
    pub name: String,
    pub size: f32,
    pub mass: f32,
    pub position: Vec2,
    pub velocity: Vec2,
    pub rotation: f32,
    pub rotation_speed: f32,
    pub opacity: f32,
    pub target_opacity: f32,
}

impl LogoBody {
    /// A motionless, fully opaque body. Mass is derived from `size`.
    pub fn at_rest(
        id: impl Into<String>,
        name: impl Into<String>,
        size: f32,
        mass_divisor: f32,
        position: Vec2,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            size,
            mass: size / mass_divisor,
            position,
            velocity: Vec2::ZERO,
            rotation: 0.0,
            rotation_speed: 0.0,
            opacity: 1.0,
            target_opacity: 1.0,
        }
    }

    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn half_size(&self) -> f32 {
        self.size / 2.0
    }

    pub fn center(&self) -> Vec2 {
        self.position + Vec2::splat(self.half_size())
    }

    /// Whether the whole bounding box lies within `[0, bounds]`, with `tolerance` slack
    pub fn fits_within(&self, bounds: Vec2, tolerance: f32) -> bool {
        self.position.x >= -tolerance
            && self.position.y >= -tolerance
            && self.position.x + self.size <= bounds.x + tolerance
            && self.position.y + self.size <= bounds.y + tolerance
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_span_samples_stay_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let span = Span::new(40.0, 80.0);
        for _ in 0..1_000 {
            let v = span.sample(&mut rng);
            assert!((40.0..=80.0).contains(&v), "sample {v} out of range");
        }
    }

    #[test]
    fn test_degenerate_span() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        assert_eq!(Span::new(3.0, 3.0).sample(&mut rng), 3.0);
    }

    #[test]
    fn test_center_and_mass() {
        let body = LogoBody::at_rest("a", "A", 60.0, 20.0, Vec2::new(10.0, 20.0));
        assert_eq!(body.center(), Vec2::new(40.0, 50.0));
        assert!((body.mass - 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_default_roster_ids_unique() {
        let roster = default_roster();
        let mut ids: Vec<_> = roster.iter().map(|l| l.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), roster.len());
    }
}
