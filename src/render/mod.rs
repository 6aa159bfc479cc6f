//! Rendering systems: body meshes, lighting, and transform sync.

pub mod bodies;
mod sync;

use bevy::prelude::*;

use self::bodies::spawn_bodies;
use self::sync::{apply_light_intensity, sync_body_transforms};
use crate::sim::drive_scene;

pub use self::bodies::{BodyIndex, LightSettings};

/// Plugin aggregating all rendering functionality.
pub struct RenderPlugin;

impl Plugin for RenderPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LightSettings>()
            .add_systems(Startup, spawn_bodies)
            // Transforms are read from the composed scene, so sync must run
            // after the simulation drive.
            .add_systems(
                Update,
                (sync_body_transforms, apply_light_intensity).after(drive_scene),
            );
    }
}
