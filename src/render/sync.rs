//! Transform synchronization from the composed scene.
//!
//! The scene does all of its math in f64; the conversion to f32 transforms
//! happens here, once per body per frame.

use bevy::prelude::*;

use crate::render::bodies::{BodyIndex, LightSettings};
use crate::scene::SolarScene;

/// Copy each body's composed model matrix into its render transform.
pub fn sync_body_transforms(
    scene: Res<SolarScene>,
    mut query: Query<(&BodyIndex, &mut Transform)>,
) {
    for (index, mut transform) in query.iter_mut() {
        if index.0 >= scene.bodies.len() {
            continue;
        }
        *transform = Transform::from_matrix(scene.bodies[index.0].model.as_mat4());
    }
}

/// Apply the user-set intensity scale to the sun light.
pub fn apply_light_intensity(
    settings: Res<LightSettings>,
    mut lights: Query<&mut PointLight>,
) {
    if !settings.is_changed() {
        return;
    }
    for mut light in lights.iter_mut() {
        light.intensity = super::bodies::BASE_LIGHT_INTENSITY * settings.intensity_scale;
    }
}
