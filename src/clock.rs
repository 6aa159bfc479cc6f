//! Pause-aware play clock for the animation.
//!
//! Wall-clock time keeps running while the scene is paused; the animators
//! must never see those gaps. The clock accumulates paused intervals and
//! exposes a "play time" that freezes during pauses, so pause/resume is
//! transparent to all downstream angle-stepping math.

use bevy::prelude::*;

/// Resource tracking pause state and accumulated paused time.
#[derive(Resource, Clone, Debug)]
pub struct PlayClock {
    pausing: bool,
    /// Suppresses angle-step gating on the very first frame so bodies snap
    /// to their randomized initial angles instead of waiting a full step
    /// interval.
    just_started: bool,
    pause_started_at: f64,
    total_paused: f64,
}

impl Default for PlayClock {
    fn default() -> Self {
        Self {
            pausing: false,
            just_started: true,
            pause_started_at: 0.0,
            total_paused: 0.0,
        }
    }
}

impl PlayClock {
    /// Set the pause state, recording timestamps on transitions.
    ///
    /// `now` is wall-clock time in seconds. A no-op when already in the
    /// requested state: pausing twice has no effect, and the target form
    /// lets callers request "set paused" / "set running" idempotently
    /// without knowing the current state.
    pub fn set_paused(&mut self, now: f64, target: bool) {
        if self.pausing == target {
            return;
        }
        if !self.pausing {
            self.pause_started_at = now;
        } else {
            self.total_paused += now - self.pause_started_at;
        }
        self.pausing = !self.pausing;
    }

    /// Flip the pause state.
    pub fn toggle(&mut self, now: f64) {
        self.set_paused(now, !self.pausing);
    }

    /// Play time in milliseconds: wall time minus every paused interval.
    pub fn play_time_ms(&self, now: f64) -> f64 {
        (now - self.total_paused) * 1000.0
    }

    pub fn is_paused(&self) -> bool {
        self.pausing
    }

    pub fn just_started(&self) -> bool {
        self.just_started
    }

    /// Cleared by the composer after the first animation pass.
    pub fn clear_just_started(&mut self) {
        self.just_started = false;
    }

    /// True when the animators may advance this frame.
    pub fn can_animate(&self) -> bool {
        !self.pausing || self.just_started
    }

    /// Credit `secs` to the paused total.
    ///
    /// Used once at startup to swallow asset-loading time, so play time
    /// starts near zero instead of jumping ahead on the first frame.
    pub fn add_paused_secs(&mut self, secs: f64) {
        self.total_paused += secs;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn play_time_excludes_paused_interval() {
        let mut clock = PlayClock::default();
        clock.set_paused(10.0, true);
        clock.set_paused(15.0, false);
        // Paused for 5 s; at t=20 only 15 s of play time have elapsed.
        assert_relative_eq!(clock.play_time_ms(20.0), 15_000.0);
    }

    #[test]
    fn pausing_twice_has_no_effect() {
        let mut clock = PlayClock::default();
        clock.set_paused(10.0, true);
        clock.set_paused(12.0, true); // already paused, must not reset the start
        clock.set_paused(15.0, false);
        assert_relative_eq!(clock.play_time_ms(20.0), 15_000.0);
    }

    #[test]
    fn resuming_when_running_is_a_no_op() {
        let mut clock = PlayClock::default();
        clock.set_paused(5.0, false);
        assert!(!clock.is_paused());
        assert_relative_eq!(clock.play_time_ms(10.0), 10_000.0);
    }

    #[test]
    fn toggle_flips_state() {
        let mut clock = PlayClock::default();
        clock.toggle(1.0);
        assert!(clock.is_paused());
        clock.toggle(2.0);
        assert!(!clock.is_paused());
        assert_relative_eq!(clock.play_time_ms(3.0), 2_000.0);
    }

    #[test]
    fn just_started_overrides_pause_gating() {
        let mut clock = PlayClock::default();
        clock.set_paused(0.0, true);
        assert!(clock.can_animate(), "first frame must animate even paused");
        clock.clear_just_started();
        assert!(!clock.can_animate());
        clock.set_paused(1.0, false);
        assert!(clock.can_animate());
    }

    #[test]
    fn load_time_rectification_shifts_play_time() {
        let mut clock = PlayClock::default();
        clock.add_paused_secs(7.5);
        assert_relative_eq!(clock.play_time_ms(7.5), 0.0);
    }
}
