//! Rate-limited orbital angle integrator.
//!
//! Each animated body owns one [`OrbitAnimator`] holding its spin and orbit
//! angles. Angles advance in fixed fractional-degree steps gated by wall
//! time, so the angular rate is independent of frame rate: a fast renderer
//! steps more often with the same small step, a slow one catches up with a
//! proportionally larger (but clamped) increment.

use bevy::math::DVec3;
use thiserror::Error;

use crate::types::{FULL_TURN, MAX_CATCHUP_DEGREES};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnimatorError {
    #[error("orbital days must be positive and finite, got {0}")]
    InvalidOrbitalDays(f64),
    #[error("orbital delay must be positive and finite, got {0}")]
    InvalidOrbitalDelay(f64),
}

/// Advance `angle` if enough wall time has passed for at least one step.
///
/// The step size is `10^-precision` degrees; a step is due every
/// `step × delay_per_angle` seconds. When more than one step interval has
/// elapsed, the increment scales proportionally so slow frames do not slow
/// the body down, capped at [`MAX_CATCHUP_DEGREES`] so a minutes-long stall
/// cannot fling it around the orbit.
///
/// Returns whether the angle moved.
fn step_angle(
    angle: &mut f64,
    previous_ms: &mut f64,
    now_ms: f64,
    delay_per_angle: f64,
    precision: u32,
) -> bool {
    let step = 10f64.powi(-(precision as i32));
    let required_ms = step * delay_per_angle * 1000.0;
    let elapsed_ms = now_ms - *previous_ms;
    if elapsed_ms <= required_ms {
        return false;
    }
    let increment = ((elapsed_ms / required_ms) * step).min(MAX_CATCHUP_DEGREES);
    *angle = (*angle + increment).rem_euclid(FULL_TURN);
    *previous_ms = now_ms;
    true
}

/// Spin + orbit integrator and orbit-angle → 3D offset resolver for one body.
#[derive(Clone, Debug)]
pub struct OrbitAnimator {
    /// Seconds for one full orbit.
    orbital_delay: f64,
    /// Self-rotations per orbit.
    orbital_days: f64,
    /// Seconds per degree of orbit.
    delay_per_orbit_angle: f64,
    /// Seconds per degree of spin.
    delay_per_spin_angle: f64,
    orbit_angle: f64,
    spin_angle: f64,
    previous_orbit_ms: f64,
    previous_spin_ms: f64,
    oval_ratio: f64,
    orbit_radius: f64,
    /// Orbital-plane tilt in degrees (ancestor inclinations included).
    tilt: f64,
    position: DVec3,
}

impl OrbitAnimator {
    pub fn new(
        orbital_delay: f64,
        orbital_days: f64,
        oval_ratio: f64,
        orbit_radius: f64,
        tilt: f64,
    ) -> Result<Self, AnimatorError> {
        if !(orbital_days.is_finite() && orbital_days > 0.0) {
            return Err(AnimatorError::InvalidOrbitalDays(orbital_days));
        }
        if !(orbital_delay.is_finite() && orbital_delay > 0.0) {
            return Err(AnimatorError::InvalidOrbitalDelay(orbital_delay));
        }
        let mut animator = Self {
            orbital_delay,
            orbital_days,
            delay_per_orbit_angle: 0.0,
            delay_per_spin_angle: 0.0,
            orbit_angle: 0.0,
            spin_angle: 0.0,
            previous_orbit_ms: 0.0,
            previous_spin_ms: 0.0,
            oval_ratio,
            orbit_radius,
            tilt,
            position: DVec3::ZERO,
        };
        animator.init_delays();
        Ok(animator)
    }

    fn init_delays(&mut self) {
        self.delay_per_orbit_angle = self.orbital_delay / FULL_TURN;
        self.delay_per_spin_angle = (self.orbital_delay / self.orbital_days) / FULL_TURN;
    }

    /// Step spin and orbit, recomputing the 3D offset from `origin` whenever
    /// the orbit angle moved or `force` is set. `force` never advances the
    /// angles, so it can resync the position after an external angle change.
    pub fn animate(
        &mut self,
        origin: DVec3,
        now_ms: f64,
        spin_precision: u32,
        orbit_precision: u32,
        force: bool,
    ) {
        step_angle(
            &mut self.spin_angle,
            &mut self.previous_spin_ms,
            now_ms,
            self.delay_per_spin_angle,
            spin_precision,
        );
        let orbit_stepped = step_angle(
            &mut self.orbit_angle,
            &mut self.previous_orbit_ms,
            now_ms,
            self.delay_per_orbit_angle,
            orbit_precision,
        );
        if orbit_stepped || force {
            self.position = self.orbit_offset() + origin;
        }
    }

    /// Recompute the 3D offset from the current orbit angle without stepping
    /// and without touching the step timers. Used after an external angle
    /// change (randomization) so the new angle materializes immediately,
    /// even while the clock is paused.
    pub fn resync(&mut self, origin: DVec3) {
        self.position = self.orbit_offset() + origin;
    }

    /// Resolve the orbit angle into a 3D offset: an ellipse in the XZ plane
    /// (oval ratio shrinks the X semi-axis), with the X component redistributed
    /// into Y by the plane tilt.
    fn orbit_offset(&self) -> DVec3 {
        let orbit = self.orbit_angle.to_radians();
        let tilt = self.tilt.to_radians();
        let diag = orbit.sin() * self.orbit_radius * self.oval_ratio;
        DVec3::new(
            tilt.cos() * diag,
            tilt.sin() * diag,
            orbit.cos() * self.orbit_radius,
        )
    }

    pub fn set_orbital_delay(&mut self, delay: f64) -> Result<(), AnimatorError> {
        if !(delay.is_finite() && delay > 0.0) {
            return Err(AnimatorError::InvalidOrbitalDelay(delay));
        }
        self.orbital_delay = delay;
        self.init_delays();
        Ok(())
    }

    pub fn set_orbit_angle(&mut self, degrees: f64) {
        self.orbit_angle = degrees.rem_euclid(FULL_TURN);
    }

    pub fn set_spin_angle(&mut self, degrees: f64) {
        self.spin_angle = degrees.rem_euclid(FULL_TURN);
    }

    pub fn orbit_angle(&self) -> f64 {
        self.orbit_angle
    }

    pub fn spin_angle(&self) -> f64 {
        self.spin_angle
    }

    pub fn position(&self) -> DVec3 {
        self.position
    }

    pub fn orbital_delay(&self) -> f64 {
        self.orbital_delay
    }
}
