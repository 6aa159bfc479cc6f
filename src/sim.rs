//! Per-frame simulation drive.
//!
//! Connects the play clock to the scene: advances animators from play time,
//! composes model matrices, and services orbit-randomization requests.

use bevy::prelude::*;
use rand::rng;

use crate::clock::PlayClock;
use crate::scene::SolarScene;

/// Request to throw every animated body to a fresh random orbit angle.
#[derive(Message)]
pub struct RandomizeOrbits;

/// Plugin wiring the clock and scene into the update loop.
pub struct SimPlugin;

impl Plugin for SimPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PlayClock>()
            .add_message::<RandomizeOrbits>()
            .add_systems(Startup, initialize_scene)
            .add_systems(Update, (apply_randomize_requests, drive_scene).chain());
    }
}

/// Randomize the starting angles and credit startup time to the paused
/// total, so play time begins near zero on the first rendered frame.
fn initialize_scene(
    mut scene: ResMut<SolarScene>,
    mut clock: ResMut<PlayClock>,
    time: Res<Time>,
) {
    let mut rng = rng();
    scene.randomize_angles(&mut rng);
    clock.add_paused_secs(time.elapsed_secs_f64());
    info!("Scene initialized with randomized orbit angles");
}

fn apply_randomize_requests(
    mut requests: MessageReader<RandomizeOrbits>,
    mut scene: ResMut<SolarScene>,
) {
    if requests.read().next().is_none() {
        return;
    }
    let mut rng = rng();
    scene.randomize_angles(&mut rng);
    // Refresh positions from the new angles without stepping: play time
    // still includes any in-progress pause, so feeding it to the animators
    // here would leave their timers ahead of the resumed clock.
    scene.resync_positions();
    info!("Orbit angles randomized");
}

/// Advance the animators when the clock allows it, then compose the model
/// matrices. Composition runs every frame so camera focus and follower
/// placement stay valid while paused.
pub fn drive_scene(
    mut scene: ResMut<SolarScene>,
    mut clock: ResMut<PlayClock>,
    time: Res<Time>,
) {
    if clock.can_animate() {
        let ms = clock.play_time_ms(time.elapsed_secs_f64());
        let force = clock.just_started();
        scene.animate(ms, force);
        clock.clear_just_started();
    }
    scene.compose();
}
