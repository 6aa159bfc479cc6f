//! Shared constants for the solar-system visualization.

/// Decimal digits of angle precision used by the animators.
/// Higher precision gives smoother stepping at the cost of more updates.
pub const ANGLE_PRECISION: u32 = 5;

/// Maximum angle advance (degrees) a single catch-up step may apply.
///
/// The stepping integrator scales its increment by the elapsed time, so a
/// frame-time spike (window minimized for minutes) would otherwise translate
/// into an arbitrarily large orbit jump.
pub const MAX_CATCHUP_DEGREES: f64 = 45.0;

/// Radius of the unit sphere mesh every body is built from, in render units.
/// Orbit-radius spacing math depends on this value.
pub const SPHERE_MESH_RADIUS: f64 = 2.0;

/// Render scale assigned to Earth; all other bodies scale relative to it.
pub const EARTH_SCALE: f64 = 200.0;

/// Master multiplier for the per-body distance margins.
pub const DISTANCE_MODIFIER: f64 = 240.0;

/// Default length of one Earth year in wall-clock seconds.
pub const DEFAULT_YEAR_SECONDS: f64 = 3600.0;

/// Bounds for the user-adjustable year length.
pub const MIN_YEAR_SECONDS: f64 = 1.0;
pub const MAX_YEAR_SECONDS: f64 = 3600.0;

/// Degrees in a full revolution.
pub const FULL_TURN: f64 = 360.0;
