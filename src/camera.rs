//! Orbit-focus camera.
//!
//! The camera orbits whichever body it is focused on, tracking that body's
//! composed world position every frame. Right-drag orbits, scroll wheel
//! zooms, and the focus target is picked from the settings panel.

use bevy::{
    input::mouse::{AccumulatedMouseMotion, AccumulatedMouseScroll},
    prelude::*,
};

use crate::scene::SolarScene;
use crate::sim::drive_scene;

/// Near/far planes sized for the scene's render units.
pub const NEAR_PLANE: f32 = 10.0;
pub const FAR_PLANE: f32 = 400_000.0;

/// Orbit distance bounds and default.
pub const MIN_DISTANCE: f64 = 50.0;
pub const MAX_DISTANCE: f64 = 350_000.0;
pub const DEFAULT_DISTANCE: f64 = 40_000.0;

/// Zoom speed multiplier for scroll wheel.
pub const ZOOM_SPEED: f64 = 0.1;

/// Orbit speed in radians per pixel of mouse motion.
pub const ORBIT_SPEED: f64 = 0.005;

/// Marker component for the main camera.
#[derive(Component)]
pub struct MainCamera;

/// Resource tracking the orbit-camera state.
#[derive(Resource)]
pub struct OrbitCamera {
    pub yaw: f64,
    pub pitch: f64,
    pub distance: f64,
    /// Scene body the camera orbits around.
    pub focus: usize,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.4,
            distance: DEFAULT_DISTANCE,
            focus: 0,
        }
    }
}

/// Plugin providing camera functionality.
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<OrbitCamera>()
            .add_systems(Startup, setup_camera)
            .add_systems(
                Update,
                (camera_zoom, camera_orbit, track_focus.after(drive_scene)),
            );
    }
}

/// Spawn the main camera with a perspective projection sized for the scene.
fn setup_camera(mut commands: Commands) {
    commands.spawn((
        Camera3d::default(),
        Projection::from(PerspectiveProjection {
            near: NEAR_PLANE,
            far: FAR_PLANE,
            ..default()
        }),
        Transform::from_xyz(0.0, 15_000.0, DEFAULT_DISTANCE as f32)
            .looking_at(Vec3::ZERO, Vec3::Y),
        MainCamera,
    ));
}

/// Scroll wheel moves the camera along its focus axis, logarithmically.
fn camera_zoom(mouse_scroll: Res<AccumulatedMouseScroll>, mut camera: ResMut<OrbitCamera>) {
    if mouse_scroll.delta.y == 0.0 {
        return;
    }
    let zoom_factor = 1.0 - f64::from(mouse_scroll.delta.y) * ZOOM_SPEED;
    camera.distance = (camera.distance * zoom_factor).clamp(MIN_DISTANCE, MAX_DISTANCE);
}

/// Right-drag rotates the camera around the focus body.
fn camera_orbit(
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    mouse_motion: Res<AccumulatedMouseMotion>,
    mut camera: ResMut<OrbitCamera>,
) {
    if !mouse_buttons.pressed(MouseButton::Right) {
        return;
    }
    if mouse_motion.delta == Vec2::ZERO {
        return;
    }
    camera.yaw -= f64::from(mouse_motion.delta.x) * ORBIT_SPEED;
    // Keep the pitch off the poles so the up vector stays valid.
    camera.pitch = (camera.pitch + f64::from(mouse_motion.delta.y) * ORBIT_SPEED)
        .clamp(-1.5, 1.5);
}

/// Place the camera on its orbit sphere around the focused body's composed
/// world position. Runs after scene composition so a moving focus target is
/// tracked without lag.
fn track_focus(
    camera: Res<OrbitCamera>,
    scene: Res<SolarScene>,
    mut camera_query: Query<&mut Transform, With<MainCamera>>,
) {
    let Ok(mut transform) = camera_query.single_mut() else {
        return;
    };
    let focus = if camera.focus < scene.bodies.len() {
        camera.focus
    } else {
        0
    };
    let target = scene.bodies[focus].final_position;

    let offset = bevy::math::DVec3::new(
        camera.yaw.sin() * camera.pitch.cos(),
        camera.pitch.sin(),
        camera.yaw.cos() * camera.pitch.cos(),
    ) * camera.distance;

    let eye = (target + offset).as_vec3();
    let target = target.as_vec3();
    *transform = Transform::from_translation(eye).looking_at(target, Vec3::Y);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_camera_focuses_the_first_body() {
        let camera = OrbitCamera::default();
        assert_eq!(camera.focus, 0);
        assert!(camera.distance >= MIN_DISTANCE && camera.distance <= MAX_DISTANCE);
    }
}
