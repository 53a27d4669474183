//! Construction-time configuration.
//!
//! Every field defaults to the matching value in [`crate::constants`]. A TOML
//! file may override any subset; missing keys keep their defaults:
//!
//! ```toml
//! seed = 42
//!
//! [physics]
//! friction = 0.98
//!
//! [[logos]]
//! id = "rust"
//! name = "Rust"
//! image = "logos/rust.png"
//! ```

use std::fs;
use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::{SwarmError, SwarmResult};
use crate::types::{LogoSpec, Span, default_roster};

/// Whole-swarm configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwarmConfig {
    /// Fixed seed for a reproducible run; fresh entropy when absent
    pub seed: Option<u64>,
    pub surface: SurfaceConfig,
    pub spawn: SpawnConfig,
    pub physics: PhysicsConfig,
    pub render: RenderConfig,
    /// Logos to simulate, in draw order
    pub logos: Vec<LogoSpec>,
}

impl Default for SwarmConfig {
    fn default() -> Self {
        Self {
            seed: None,
            surface: SurfaceConfig::default(),
            spawn: SpawnConfig::default(),
            physics: PhysicsConfig::default(),
            render: RenderConfig::default(),
            logos: default_roster(),
        }
    }
}

/// Logical size of the drawing surface
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            width: SURFACE_WIDTH,
            height: SURFACE_HEIGHT,
        }
    }
}

impl SurfaceConfig {
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

/// Sampling ranges for freshly mounted bodies
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnConfig {
    pub size: Span,
    pub mass_divisor: f32,
    pub velocity: Span,
    pub rotation_speed: Span,
    pub opacity: Span,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            size: Span::new(MIN_SIZE, MAX_SIZE),
            mass_divisor: MASS_DIVISOR,
            velocity: Span::symmetric(MAX_INITIAL_SPEED),
            rotation_speed: Span::symmetric(MAX_ROTATION_SPEED),
            opacity: Span::new(MIN_IDLE_OPACITY, MAX_IDLE_OPACITY),
        }
    }
}

/// Per-tick physics constants
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    pub friction: f32,
    pub restitution: f32,
    pub attraction_strength: f32,
    pub attraction_epsilon: f32,
    pub collision_gain: f32,
    pub collision_epsilon: f32,
    pub spin_kick: Span,
    /// Band the idle shimmer resamples target opacity from
    pub idle_opacity: Span,
    pub opacity_smoothing: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            friction: FRICTION,
            restitution: RESTITUTION,
            attraction_strength: ATTRACTION_STRENGTH,
            attraction_epsilon: ATTRACTION_EPSILON,
            collision_gain: COLLISION_GAIN,
            collision_epsilon: COLLISION_EPSILON,
            spin_kick: Span::symmetric(SPIN_KICK),
            idle_opacity: Span::new(MIN_IDLE_OPACITY, MAX_IDLE_OPACITY),
            opacity_smoothing: OPACITY_SMOOTHING,
        }
    }
}

/// Look of a rendered frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub glow_threshold: f32,
    pub glow_spread: f32,
    pub glow_alpha: f32,
    pub label_offset: f32,
    pub label_font_size: f32,
    pub caption: String,
    pub caption_font_size: f32,
    pub caption_margin: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            glow_threshold: GLOW_THRESHOLD,
            glow_spread: GLOW_SPREAD,
            glow_alpha: GLOW_ALPHA,
            label_offset: LABEL_OFFSET,
            label_font_size: LABEL_FONT_SIZE,
            caption: CAPTION_TEXT.to_string(),
            caption_font_size: CAPTION_FONT_SIZE,
            caption_margin: CAPTION_MARGIN,
        }
    }
}

impl SwarmConfig {
    /// Read a TOML config and validate it
    pub fn load(path: &Path) -> SwarmResult<Self> {
        let text = fs::read_to_string(path).map_err(|e| SwarmError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let config = Self::from_toml(&text).map_err(|e| match e {
            SwarmError::Config { reason, .. } => SwarmError::Config {
                path: path.to_path_buf(),
                reason,
            },
            other => other,
        })?;
        Ok(config)
    }

    /// Load `path` if it exists, defaults otherwise
    pub fn load_or_default(path: &Path) -> SwarmResult<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn from_toml(text: &str) -> SwarmResult<Self> {
        let config: Self = toml::from_str(text).map_err(|e| SwarmError::Config {
            path: Default::default(),
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check the invariants the simulation relies on: positive sizes and
    /// masses, opacities inside [0, 1], and a surface that fits any body.
    pub fn validate(&self) -> SwarmResult<()> {
        let spawn = &self.spawn;
        if spawn.size.min <= 0.0 || spawn.size.max < spawn.size.min {
            return Err(invalid("spawn.size", "must satisfy 0 < min <= max"));
        }
        if spawn.mass_divisor <= 0.0 {
            return Err(invalid("spawn.mass_divisor", "must be positive"));
        }
        for (name, span) in [
            ("spawn.opacity", spawn.opacity),
            ("physics.idle_opacity", self.physics.idle_opacity),
        ] {
            if span.min < 0.0 || span.max > 1.0 || span.max < span.min {
                return Err(invalid(name, "must satisfy 0 <= min <= max <= 1"));
            }
        }
        let physics = &self.physics;
        if !(0.0..=1.0).contains(&physics.friction) {
            return Err(invalid("physics.friction", "must lie in [0, 1]"));
        }
        if !(0.0..=1.0).contains(&physics.restitution) {
            return Err(invalid("physics.restitution", "must lie in [0, 1]"));
        }
        if !(0.0..=1.0).contains(&physics.opacity_smoothing) {
            return Err(invalid("physics.opacity_smoothing", "must lie in [0, 1]"));
        }
        if physics.attraction_epsilon <= 0.0 || physics.collision_epsilon <= 0.0 {
            return Err(invalid("physics epsilon", "must be positive"));
        }

        let SurfaceConfig { width, height } = self.surface;
        if width < spawn.size.max || height < spawn.size.max {
            return Err(SwarmError::SurfaceTooSmall {
                width,
                height,
                max_size: spawn.size.max,
            });
        }
        Ok(())
    }
}

fn invalid(name: &'static str, reason: &str) -> SwarmError {
    SwarmError::InvalidSetting {
        name,
        reason: reason.to_string(),
    }
}
