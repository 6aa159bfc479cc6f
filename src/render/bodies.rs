//! Body spawning: meshes, materials, and scene lighting.
//!
//! Every body renders from the same unit primitives (a sphere of radius 2
//! and a flat torus for the ring discs); the per-body model matrix applies
//! the real scale, so mesh size never changes per body.

use bevy::prelude::*;

use crate::catalog::SUN;
use crate::scene::{MeshKind, SolarScene};
use crate::types::SPHERE_MESH_RADIUS;

/// Ring disc dimensions, relative to the unit sphere the planet uses.
const RING_MAJOR_RADIUS: f32 = 3.2;
const RING_MINOR_RADIUS: f32 = 0.08;

/// Range of the sun's point light, covering the whole scene.
const LIGHT_RANGE: f32 = 400_000.0;
pub const BASE_LIGHT_INTENSITY: f32 = 5e12;

/// Component linking an entity to its index in the [`SolarScene`] body list.
#[derive(Component)]
pub struct BodyIndex(pub usize);

/// Resource scaling the sun light's intensity, driven by the settings panel.
#[derive(Resource)]
pub struct LightSettings {
    pub intensity_scale: f32,
}

impl Default for LightSettings {
    fn default() -> Self {
        Self {
            intensity_scale: 1.0,
        }
    }
}

/// Approximate visual color for a body, by catalog name.
fn body_color(name: &str) -> Color {
    match name {
        "Sun" => Color::srgb(1.0, 0.95, 0.4),
        "Mercury" => Color::srgb(0.6, 0.6, 0.6),
        "Venus" => Color::srgb(0.9, 0.85, 0.7),
        "Earth" => Color::srgb(0.2, 0.5, 0.8),
        "Mars" => Color::srgb(0.8, 0.4, 0.2),
        "Jupiter" => Color::srgb(0.8, 0.7, 0.6),
        "Saturn" => Color::srgb(0.9, 0.85, 0.6),
        "Saturn ring" => Color::srgb(0.85, 0.78, 0.55),
        "Uranus" => Color::srgb(0.6, 0.8, 0.9),
        "Uranus ring" => Color::srgb(0.7, 0.8, 0.85),
        "Neptune" => Color::srgb(0.3, 0.5, 0.9),
        "Pluto" => Color::srgb(0.75, 0.7, 0.65),
        "Moon" => Color::srgb(0.7, 0.7, 0.7),
        _ => Color::srgb(0.5, 0.5, 0.5),
    }
}

/// Spawn one entity per scene body plus the sun light.
pub fn spawn_bodies(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    scene: Res<SolarScene>,
) {
    let sphere_mesh = meshes.add(Sphere::new(SPHERE_MESH_RADIUS as f32));
    let ring_mesh = meshes.add(Torus {
        minor_radius: RING_MINOR_RADIUS,
        major_radius: RING_MAJOR_RADIUS,
    });

    for (i, body) in scene.bodies.iter().enumerate() {
        let name = scene.name_of(i);
        let color = body_color(name);
        let is_sun = body.catalog_index == SUN && body.parent.is_none();

        let material = materials.add(StandardMaterial {
            base_color: color,
            emissive: if is_sun {
                color.to_linear() * 2.0
            } else {
                LinearRgba::BLACK
            },
            ..default()
        });
        let mesh = match body.mesh {
            MeshKind::Sphere => sphere_mesh.clone(),
            MeshKind::Ring => ring_mesh.clone(),
        };

        commands.spawn((
            Mesh3d(mesh),
            MeshMaterial3d(material),
            Transform::from_matrix(body.model.as_mat4()),
            BodyIndex(i),
            Name::new(name),
        ));
    }

    // The sun is the only light source.
    commands.spawn((
        PointLight {
            intensity: BASE_LIGHT_INTENSITY,
            range: LIGHT_RANGE,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, 0.0),
    ));
    commands.insert_resource(GlobalAmbientLight {
        color: Color::WHITE,
        brightness: 60.0,
        ..default()
    });

    info!("Spawned {} celestial bodies", scene.bodies.len());
}
