// Default tunables. All distances are simulation-space units (one unit is one
// logical surface pixel), all rates are per tick (one tick per rendered frame).

/// Logical width of the drawing surface
pub const SURFACE_WIDTH: f32 = 800.0;

/// Logical height of the drawing surface
pub const SURFACE_HEIGHT: f32 = 600.0;

/// Body diameter is sampled from [MIN_SIZE, MAX_SIZE)
pub const MIN_SIZE: f32 = 40.0;
pub const MAX_SIZE: f32 = 80.0;

/// mass = size / MASS_DIVISOR
pub const MASS_DIVISOR: f32 = 20.0;

/// Initial velocity components are sampled from [-MAX_INITIAL_SPEED, MAX_INITIAL_SPEED)
pub const MAX_INITIAL_SPEED: f32 = 0.75;

/// Initial rotation speed is sampled from [-MAX_ROTATION_SPEED, MAX_ROTATION_SPEED) rad/tick
pub const MAX_ROTATION_SPEED: f32 = 0.015;

/// Resting opacity band, used at spawn and for the idle shimmer
pub const MIN_IDLE_OPACITY: f32 = 0.7;
pub const MAX_IDLE_OPACITY: f32 = 1.0;

/// Velocity multiplier applied every tick
pub const FRICTION: f32 = 0.99;

/// Fraction of velocity kept after bouncing off a surface edge
pub const RESTITUTION: f32 = 0.8;

/// Numerator of the inverse-square pull toward the pointer
pub const ATTRACTION_STRENGTH: f32 = 0.5;

/// Below this center-to-pointer distance the pull is skipped
pub const ATTRACTION_EPSILON: f32 = 5.0;

/// Fraction of the overlap correction turned into velocity per tick
pub const COLLISION_GAIN: f32 = 0.05;

/// Below this center-to-center distance a pair cannot be separated and is skipped
pub const COLLISION_EPSILON: f32 = 1e-4;

/// Rotation speed kick on collision is sampled from [-SPIN_KICK, SPIN_KICK)
pub const SPIN_KICK: f32 = 0.005;

/// Exponential relaxation rate of opacity toward its target
pub const OPACITY_SMOOTHING: f32 = 0.1;

/// Bodies brighter than this get the glow pass
pub const GLOW_THRESHOLD: f32 = 0.9;

/// Extra diameter of the glow copy around the body
pub const GLOW_SPREAD: f32 = 15.0;

/// Alpha of the glow copy relative to the body opacity
pub const GLOW_ALPHA: f32 = 0.5;

/// Gap between the top of a body and its hover label
pub const LABEL_OFFSET: f32 = 10.0;

pub const LABEL_FONT_SIZE: f32 = 14.0;

pub const CAPTION_TEXT: &str = "Click and hold to attract logos";

pub const CAPTION_FONT_SIZE: f32 = 16.0;

/// Distance of the caption baseline from the bottom edge
pub const CAPTION_MARGIN: f32 = 20.0;
