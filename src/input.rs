//! Keyboard shortcuts for simulation control.

use bevy::prelude::*;

use crate::clock::PlayClock;
use crate::scene::SolarScene;
use crate::sim::RandomizeOrbits;

/// Plugin providing keyboard input handling.
pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, keyboard_shortcuts);
    }
}

/// Handle keyboard shortcuts for simulation control.
fn keyboard_shortcuts(
    keys: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
    mut clock: ResMut<PlayClock>,
    mut scene: ResMut<SolarScene>,
    mut randomize_events: MessageWriter<RandomizeOrbits>,
) {
    // Space: toggle pause
    if keys.just_pressed(KeyCode::Space) {
        clock.toggle(time.elapsed_secs_f64());
        info!(
            "Animation {}",
            if clock.is_paused() { "paused" } else { "running" }
        );
    }

    // R: new random orbit angles
    if keys.just_pressed(KeyCode::KeyR) {
        randomize_events.write(RandomizeOrbits);
    }

    // Year-length presets with number keys
    let preset = if keys.just_pressed(KeyCode::Digit1) {
        Some(3600.0)
    } else if keys.just_pressed(KeyCode::Digit2) {
        Some(900.0)
    } else if keys.just_pressed(KeyCode::Digit3) {
        Some(60.0)
    } else if keys.just_pressed(KeyCode::Digit4) {
        Some(1.0)
    } else {
        None
    };
    if let Some(seconds) = preset {
        match scene.set_year_seconds(seconds) {
            Ok(()) => info!("Year length: {seconds} s"),
            Err(err) => warn!("Year length change rejected: {err}"),
        }
    }
}
