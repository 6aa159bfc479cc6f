//! Scene assembly and per-frame orchestration.
//!
//! A [`SolarScene`] is built once from a typed body layout plus the constants
//! catalog. Construction validates everything that used to be a runtime
//! hazard: parents must appear before their children (which also rules out
//! cycles), catalog links must resolve, and animated bodies must have usable
//! periods. After a successful build the per-frame loop has no failure path.
//!
//! Each frame runs two passes: `animate` advances the animators and stores
//! orbit-relative positions, `compose` folds the parent chain into a model
//! matrix and final world position for every body.

use bevy::math::{DMat4, DVec3, DVec4};
use bevy::prelude::Resource;
use rand::Rng;
use thiserror::Error;

use crate::animator::{AnimatorError, OrbitAnimator};
use crate::catalog::{self, BodyConstants};
use crate::hierarchy;
use crate::types::{
    ANGLE_PRECISION, DEFAULT_YEAR_SECONDS, DISTANCE_MODIFIER, EARTH_SCALE, FULL_TURN,
    MAX_YEAR_SECONDS, MIN_YEAR_SECONDS, SPHERE_MESH_RADIUS,
};

#[derive(Error, Debug)]
pub enum SceneBuildError {
    #[error("body {body}: catalog index {index} out of range ({len} entries)")]
    CatalogIndexOutOfRange { body: usize, index: usize, len: usize },
    #[error("body {body}: parent {parent} must come earlier in the layout")]
    ParentNotBefore { body: usize, parent: usize },
    #[error("body {body} ({name}): animated body needs a finite positive orbital period")]
    UnusablePeriod { body: usize, name: String },
    #[error("layout has no animated Earth entry to derive scales and delays from")]
    MissingEarth,
    #[error("body {body}: {source}")]
    Animator { body: usize, source: AnimatorError },
}

/// Render geometry used for a body.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MeshKind {
    Sphere,
    Ring,
}

/// One row of the scene layout.
///
/// `parent` is an index into the same layout: an animated body orbits it, a
/// non-animated body with a parent follows it (the ring discs). Parents must
/// come before children so that a parent's position is already resolved when
/// its children animate and compose.
#[derive(Clone, Debug)]
pub struct BodySpec {
    pub animated: bool,
    pub scale_modifier: f64,
    /// Distance to the previous body orbiting the same parent, in units of
    /// [`DISTANCE_MODIFIER`].
    pub distance_margin: f64,
    pub oval_ratio: f64,
    /// When false the spin angle is initialized relative to the orbit angle
    /// instead of randomized, keeping phase-locked bodies coherent.
    pub random_spin: bool,
    pub parent: Option<usize>,
    /// Index into the constants catalog.
    pub constants: usize,
    pub mesh: MeshKind,
    /// Whether the camera focus selector offers this body.
    pub focusable: bool,
}

impl BodySpec {
    fn planet(distance_margin: f64, constants: usize) -> Self {
        Self {
            animated: true,
            scale_modifier: 1.0,
            distance_margin,
            oval_ratio: 1.0,
            random_spin: true,
            parent: Some(0),
            constants,
            mesh: MeshKind::Sphere,
            focusable: true,
        }
    }

    fn ring(parent: usize, constants: usize) -> Self {
        Self {
            animated: false,
            scale_modifier: 0.9,
            distance_margin: 0.0,
            oval_ratio: 1.0,
            random_spin: true,
            parent: Some(parent),
            constants,
            mesh: MeshKind::Ring,
            focusable: false,
        }
    }
}

/// The stock solar-system layout: Sun, eight planets plus Pluto, the Moon
/// around Earth and the two ring discs following their planets.
pub fn default_layout() -> Vec<BodySpec> {
    vec![
        // 0. sun
        BodySpec {
            animated: false,
            scale_modifier: 0.3,
            distance_margin: 0.0,
            oval_ratio: 1.0,
            random_spin: true,
            parent: None,
            constants: 0,
            mesh: MeshKind::Sphere,
            focusable: true,
        },
        // 1-3. inner planets
        BodySpec::planet(20.0, 1),
        BodySpec::planet(20.0, 2),
        BodySpec::planet(20.0, 3),
        // 4. moon, phase-locked spin
        BodySpec {
            animated: true,
            scale_modifier: 1.0,
            distance_margin: 5.0,
            oval_ratio: 1.0,
            random_spin: false,
            parent: Some(3),
            constants: 10,
            mesh: MeshKind::Sphere,
            focusable: true,
        },
        // 5-7. mars, jupiter, saturn
        BodySpec::planet(20.0, 4),
        BodySpec::planet(55.0, 5),
        BodySpec::planet(60.0, 6),
        // 8. saturn ring
        BodySpec::ring(7, 11),
        // 9. uranus
        BodySpec::planet(100.0, 7),
        // 10. uranus ring
        BodySpec::ring(9, 12),
        // 11-12. neptune, pluto
        BodySpec::planet(80.0, 8),
        BodySpec::planet(40.0, 9),
    ]
}

/// Per-body live state.
#[derive(Clone, Debug)]
pub struct SceneBody {
    /// Orbit offset relative to the parent, resolved by the animator.
    pub position: DVec3,
    /// World position after transform composition.
    pub final_position: DVec3,
    pub spin: f64,
    pub scale: f64,
    pub orbit_radius: f64,
    pub oval_ratio: f64,
    /// Ascending-node sum over the ancestors, applied before the parent
    /// translation so nested orbits follow their parent's node shift.
    pub parents_ascending_node_sum: f64,
    /// Inclination sum including the body's own, keeping the body
    /// perpendicular to its inclined orbit plane.
    pub all_inclination_sum: f64,
    pub catalog_index: usize,
    pub animator: Option<usize>,
    pub parent: Option<usize>,
    pub mesh: MeshKind,
    pub focusable: bool,
    pub random_spin: bool,
    pub model: DMat4,
}

impl SceneBody {
    #[cfg(test)]
    pub(crate) fn placeholder(catalog_index: usize, parent: Option<usize>) -> Self {
        Self {
            position: DVec3::ZERO,
            final_position: DVec3::ZERO,
            spin: 0.0,
            scale: 1.0,
            orbit_radius: 0.0,
            oval_ratio: 1.0,
            parents_ascending_node_sum: 0.0,
            all_inclination_sum: 0.0,
            catalog_index,
            animator: None,
            parent,
            mesh: MeshKind::Sphere,
            focusable: false,
            random_spin: true,
            model: DMat4::IDENTITY,
        }
    }
}

/// The assembled scene: bodies in layout order plus their animators.
#[derive(Resource, Debug)]
pub struct SolarScene {
    pub bodies: Vec<SceneBody>,
    animators: Vec<OrbitAnimator>,
    catalog: Vec<BodyConstants>,
    earth_index: usize,
    year_seconds: f64,
}

impl SolarScene {
    /// Build the stock solar system with the default year length.
    pub fn with_default_layout() -> Result<Self, SceneBuildError> {
        Self::build(
            &default_layout(),
            catalog::solar_system_constants(),
            DEFAULT_YEAR_SECONDS,
        )
    }

    /// Validate the layout and derive every body's scale, orbit radius,
    /// orbital delay, ancestor sums and animator.
    pub fn build(
        specs: &[BodySpec],
        catalog: Vec<BodyConstants>,
        year_seconds: f64,
    ) -> Result<Self, SceneBuildError> {
        let year_seconds = year_seconds.clamp(MIN_YEAR_SECONDS, MAX_YEAR_SECONDS);

        for (i, spec) in specs.iter().enumerate() {
            if spec.constants >= catalog.len() {
                return Err(SceneBuildError::CatalogIndexOutOfRange {
                    body: i,
                    index: spec.constants,
                    len: catalog.len(),
                });
            }
            if let Some(parent) = spec.parent
                && parent >= i
            {
                return Err(SceneBuildError::ParentNotBefore { body: i, parent });
            }
            if spec.animated {
                let bc = &catalog[spec.constants];
                let usable = bc.orbital_period.is_finite()
                    && bc.orbital_period > 0.0
                    && bc.local_orbital_period.is_finite()
                    && bc.local_orbital_period > 0.0;
                if !usable {
                    return Err(SceneBuildError::UnusablePeriod {
                        body: i,
                        name: bc.name.to_owned(),
                    });
                }
            }
        }

        let earth_index = specs
            .iter()
            .position(|s| s.animated && s.constants == catalog::EARTH)
            .ok_or(SceneBuildError::MissingEarth)?;

        let mut animator_count = 0;
        let mut bodies: Vec<SceneBody> = specs
            .iter()
            .map(|spec| {
                let animator = spec.animated.then(|| {
                    let idx = animator_count;
                    animator_count += 1;
                    idx
                });
                SceneBody {
                    position: DVec3::ZERO,
                    final_position: DVec3::ZERO,
                    spin: 0.0,
                    scale: 1.0,
                    orbit_radius: 0.0,
                    oval_ratio: spec.oval_ratio,
                    parents_ascending_node_sum: 0.0,
                    all_inclination_sum: 0.0,
                    catalog_index: spec.constants,
                    animator,
                    parent: spec.parent,
                    mesh: spec.mesh,
                    focusable: spec.focusable,
                    random_spin: spec.random_spin,
                    model: DMat4::IDENTITY,
                }
            })
            .collect();

        // Scales relative to Earth; Earth itself is the reference.
        for (i, spec) in specs.iter().enumerate() {
            if i == earth_index {
                continue;
            }
            bodies[i].scale = hierarchy::relative_value(
                catalog[spec.constants].radius,
                catalog::EARTH_RADIUS,
                EARTH_SCALE,
                spec.scale_modifier,
            );
        }
        bodies[earth_index].scale = EARTH_SCALE;

        let sphere_radius: Vec<f64> = bodies
            .iter()
            .map(|b| b.scale * SPHERE_MESH_RADIUS)
            .collect();

        // Orbit radii chain outward from the previous sibling orbiting the
        // same parent, or from the parent itself for the innermost body.
        for i in 0..bodies.len() {
            let Some(parent) = bodies[i].parent else {
                continue;
            };
            let previous_sibling = (0..i).rev().find(|&j| bodies[j].parent == Some(parent));
            let margin = specs[i].distance_margin * DISTANCE_MODIFIER;
            bodies[i].orbit_radius = match previous_sibling {
                None => sphere_radius[parent] + sphere_radius[i] + margin,
                Some(j) => bodies[j].orbit_radius + sphere_radius[j] + sphere_radius[i] + margin,
            };
        }

        // Ancestor sums, computed once.
        for i in 0..bodies.len() {
            if bodies[i].animator.is_none() && bodies[i].parent.is_none() {
                continue;
            }
            bodies[i].parents_ascending_node_sum = match bodies[i].parent {
                Some(parent) => hierarchy::sum_ascending_nodes(&bodies, &catalog, parent),
                None => 0.0,
            };
            bodies[i].all_inclination_sum = hierarchy::sum_inclinations(&bodies, &catalog, i);
        }

        let mut animators = Vec::with_capacity(animator_count);
        for (i, body) in bodies.iter().enumerate() {
            if body.animator.is_none() {
                continue;
            }
            let bc = &catalog[body.catalog_index];
            let delay = orbital_delay(bc, &catalog[catalog::EARTH], i == earth_index, year_seconds);
            let animator = OrbitAnimator::new(
                delay,
                bc.local_orbital_period,
                body.oval_ratio,
                body.orbit_radius,
                body.all_inclination_sum,
            )
            .map_err(|source| SceneBuildError::Animator { body: i, source })?;
            animators.push(animator);
        }

        Ok(Self {
            bodies,
            animators,
            catalog,
            earth_index,
            year_seconds,
        })
    }

    /// Advance every animated body to play time `ms` and refresh follower
    /// positions. `force` recomputes positions even when no angle stepped,
    /// used on the first frame and after external angle changes.
    pub fn animate(&mut self, ms: f64, force: bool) {
        for i in 0..self.bodies.len() {
            match (self.bodies[i].animator, self.bodies[i].parent) {
                (None, None) => {}
                (None, Some(parent)) => {
                    self.bodies[i].position = self.bodies[parent].position;
                }
                (Some(animator), _) => {
                    let a = &mut self.animators[animator];
                    a.animate(DVec3::ZERO, ms, ANGLE_PRECISION, ANGLE_PRECISION, force);
                    self.bodies[i].position = a.position();
                    self.bodies[i].spin = a.spin_angle();
                }
            }
        }
    }

    /// Refresh every body's resolved position from its current angles
    /// without advancing any animator or touching its step timers. Play
    /// time keeps running through a pause until the clock accrues the gap
    /// at resume, so stepping here would poison the timers with a future
    /// timestamp and stall the animation for the length of the pause.
    pub fn resync_positions(&mut self) {
        for i in 0..self.bodies.len() {
            match (self.bodies[i].animator, self.bodies[i].parent) {
                (None, None) => {}
                (None, Some(parent)) => {
                    self.bodies[i].position = self.bodies[parent].position;
                }
                (Some(animator), _) => {
                    let a = &mut self.animators[animator];
                    a.resync(DVec3::ZERO);
                    self.bodies[i].position = a.position();
                    self.bodies[i].spin = a.spin_angle();
                }
            }
        }
    }

    /// Fold the parent chain into a model matrix and world position for
    /// every body. Runs every frame regardless of whether any angle stepped.
    pub fn compose(&mut self) {
        for i in 0..self.bodies.len() {
            let body = &self.bodies[i];
            let bc = &self.catalog[body.catalog_index];

            if body.animator.is_none() && body.parent.is_none() {
                let model = DMat4::from_translation(body.position)
                    * DMat4::from_rotation_z(bc.axial_tilt.to_radians())
                    * DMat4::from_scale(DVec3::splat(body.scale));
                let final_position = body.position;
                let body = &mut self.bodies[i];
                body.model = model;
                body.final_position = final_position;
                continue;
            }

            let ancestor_translation = match body.parent {
                Some(parent) => hierarchy::sum_positions(&self.bodies, parent),
                None => DVec3::ZERO,
            };
            // A follower's copied position is already covered by the
            // ancestor translation, so its own offset is zero.
            let own_offset = if body.animator.is_some() {
                body.position
            } else {
                DVec3::ZERO
            };
            let model = DMat4::from_rotation_y(body.parents_ascending_node_sum.to_radians())
                * DMat4::from_translation(ancestor_translation)
                * DMat4::from_rotation_y(bc.ascending_node.to_radians())
                * DMat4::from_translation(own_offset)
                * DMat4::from_rotation_z((bc.axial_tilt + body.all_inclination_sum).to_radians())
                * DMat4::from_rotation_y(body.spin.to_radians())
                * DMat4::from_scale(DVec3::splat(body.scale));
            let origin = model * DVec4::new(0.0, 0.0, 0.0, 1.0);
            let final_position = origin.truncate() / origin.w;

            let body = &mut self.bodies[i];
            body.model = model;
            body.final_position = final_position;
        }
    }

    /// Re-derive every animator's orbital delay from a new year length.
    pub fn set_year_seconds(&mut self, seconds: f64) -> Result<(), SceneBuildError> {
        self.year_seconds = seconds.clamp(MIN_YEAR_SECONDS, MAX_YEAR_SECONDS);
        for i in 0..self.bodies.len() {
            let Some(animator) = self.bodies[i].animator else {
                continue;
            };
            let bc = &self.catalog[self.bodies[i].catalog_index];
            let delay = orbital_delay(
                bc,
                &self.catalog[catalog::EARTH],
                i == self.earth_index,
                self.year_seconds,
            );
            self.animators[animator]
                .set_orbital_delay(delay)
                .map_err(|source| SceneBuildError::Animator { body: i, source })?;
        }
        Ok(())
    }

    pub fn year_seconds(&self) -> f64 {
        self.year_seconds
    }

    /// Throw every animated body to a random orbit angle. Bodies with a
    /// fixed spin get their spin tied to the new orbit angle instead of a
    /// second random draw.
    pub fn randomize_angles(&mut self, rng: &mut impl Rng) {
        for body in &self.bodies {
            let Some(animator) = body.animator else {
                continue;
            };
            let orbit = f64::from(rng.random_range(0..360));
            let spin = if body.random_spin {
                f64::from(rng.random_range(0..360))
            } else {
                orbit + self.catalog[body.catalog_index].default_spin_angle
            };
            self.animators[animator].set_orbit_angle(orbit);
            self.animators[animator].set_spin_angle(spin.rem_euclid(FULL_TURN));
        }
    }

    pub fn constants_of(&self, body: usize) -> &BodyConstants {
        &self.catalog[self.bodies[body].catalog_index]
    }

    pub fn name_of(&self, body: usize) -> &'static str {
        self.catalog[self.bodies[body].catalog_index].name
    }

    pub fn animator(&self, body: usize) -> Option<&OrbitAnimator> {
        self.bodies[body].animator.map(|i| &self.animators[i])
    }

    #[cfg(test)]
    pub(crate) fn animator_mut(&mut self, body: usize) -> Option<&mut OrbitAnimator> {
        let index = self.bodies[body].animator?;
        Some(&mut self.animators[index])
    }

    pub fn earth_index(&self) -> usize {
        self.earth_index
    }

    /// Bodies offered by the camera focus selector, in layout order.
    pub fn focusable_bodies(&self) -> impl Iterator<Item = (usize, &'static str)> + '_ {
        self.bodies
            .iter()
            .enumerate()
            .filter(|(_, b)| b.focusable)
            .map(|(i, b)| (i, self.catalog[b.catalog_index].name))
    }
}

/// Earth uses the year length directly; everyone else gets a delay scaled by
/// their period relative to Earth's.
fn orbital_delay(
    bc: &BodyConstants,
    earth: &BodyConstants,
    is_earth: bool,
    year_seconds: f64,
) -> f64 {
    if is_earth {
        year_seconds
    } else {
        hierarchy::relative_value(bc.orbital_period, earth.orbital_period, year_seconds, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use crate::catalog::{solar_system_constants, EARTH_ORBITAL_PERIOD, EARTH_RADIUS, SUN_RADIUS};

    fn scene() -> SolarScene {
        match SolarScene::with_default_layout() {
            Ok(s) => s,
            Err(e) => panic!("default layout must build: {e}"),
        }
    }

    #[test]
    fn earth_is_the_scale_reference() {
        let s = scene();
        let earth = s.earth_index();
        assert_relative_eq!(s.bodies[earth].scale, EARTH_SCALE);
        // Sun: radius ratio times the 0.3 esthetic modifier.
        assert_relative_eq!(
            s.bodies[0].scale,
            SUN_RADIUS / EARTH_RADIUS * EARTH_SCALE * 0.3,
            max_relative = 1e-12
        );
    }

    #[test]
    fn orbit_radii_chain_outward_from_the_sun() {
        let s = scene();
        let sphere = |i: usize| s.bodies[i].scale * SPHERE_MESH_RADIUS;
        // Mercury is the innermost: sun surface + own surface + margin.
        assert_relative_eq!(
            s.bodies[1].orbit_radius,
            sphere(0) + sphere(1) + 20.0 * DISTANCE_MODIFIER,
            max_relative = 1e-12
        );
        // Venus stacks on Mercury's orbit.
        assert_relative_eq!(
            s.bodies[2].orbit_radius,
            s.bodies[1].orbit_radius + sphere(1) + sphere(2) + 20.0 * DISTANCE_MODIFIER,
            max_relative = 1e-12
        );
        // The moon orbits Earth, not the sun.
        assert_relative_eq!(
            s.bodies[4].orbit_radius,
            sphere(3) + sphere(4) + 5.0 * DISTANCE_MODIFIER,
            max_relative = 1e-12
        );
    }

    #[test]
    fn delays_scale_with_the_orbital_period() {
        let s = scene();
        let earth_delay = match s.animator(s.earth_index()) {
            Some(a) => a.orbital_delay(),
            None => panic!("earth must be animated"),
        };
        assert_relative_eq!(earth_delay, DEFAULT_YEAR_SECONDS);
        let mercury_delay = match s.animator(1) {
            Some(a) => a.orbital_delay(),
            None => panic!("mercury must be animated"),
        };
        assert_relative_eq!(
            mercury_delay,
            87.9691 / EARTH_ORBITAL_PERIOD * DEFAULT_YEAR_SECONDS,
            max_relative = 1e-12
        );
    }

    #[test]
    fn year_length_change_rescales_every_delay() {
        let mut s = scene();
        if let Err(e) = s.set_year_seconds(360.0) {
            panic!("rescale failed: {e}");
        }
        let mercury_delay = match s.animator(1) {
            Some(a) => a.orbital_delay(),
            None => panic!("mercury must be animated"),
        };
        assert_relative_eq!(
            mercury_delay,
            87.9691 / EARTH_ORBITAL_PERIOD * 360.0,
            max_relative = 1e-12
        );
        // Out-of-range requests clamp instead of failing.
        if let Err(e) = s.set_year_seconds(0.0) {
            panic!("clamped rescale failed: {e}");
        }
        assert_relative_eq!(s.year_seconds(), MIN_YEAR_SECONDS);
    }

    #[test]
    fn forward_parent_reference_is_rejected() {
        let mut layout = default_layout();
        layout[1].parent = Some(5);
        let err = SolarScene::build(&layout, solar_system_constants(), DEFAULT_YEAR_SECONDS);
        assert!(matches!(
            err,
            Err(SceneBuildError::ParentNotBefore { body: 1, parent: 5 })
        ));
    }

    #[test]
    fn self_parent_reference_is_rejected() {
        let mut layout = default_layout();
        layout[2].parent = Some(2);
        let err = SolarScene::build(&layout, solar_system_constants(), DEFAULT_YEAR_SECONDS);
        assert!(matches!(
            err,
            Err(SceneBuildError::ParentNotBefore { body: 2, parent: 2 })
        ));
    }

    #[test]
    fn dangling_catalog_link_is_rejected() {
        let mut layout = default_layout();
        layout[3].constants = 99;
        let err = SolarScene::build(&layout, solar_system_constants(), DEFAULT_YEAR_SECONDS);
        assert!(matches!(
            err,
            Err(SceneBuildError::CatalogIndexOutOfRange { body: 3, index: 99, .. })
        ));
    }

    #[test]
    fn animating_a_body_without_a_period_is_rejected() {
        let mut layout = default_layout();
        // The sun's periods are infinite; animating it must fail.
        layout[0].animated = true;
        let err = SolarScene::build(&layout, solar_system_constants(), DEFAULT_YEAR_SECONDS);
        assert!(matches!(err, Err(SceneBuildError::UnusablePeriod { body: 0, .. })));
    }

    #[test]
    fn layout_without_earth_is_rejected() {
        let layout = vec![default_layout()[0].clone()];
        let err = SolarScene::build(&layout, solar_system_constants(), DEFAULT_YEAR_SECONDS);
        assert!(matches!(err, Err(SceneBuildError::MissingEarth)));
    }

    #[test]
    fn follower_copies_its_parents_position() {
        let mut s = scene();
        s.animate(60_000.0, true);
        // Body 8 is the saturn ring following body 7.
        assert_eq!(s.bodies[8].parent, Some(7));
        assert_relative_eq!(s.bodies[8].position.x, s.bodies[7].position.x);
        assert_relative_eq!(s.bodies[8].position.z, s.bodies[7].position.z);
    }

    #[test]
    fn ring_composes_onto_its_planet() {
        let mut s = scene();
        let mut rng = rand::rng();
        s.randomize_angles(&mut rng);
        s.animate(0.0, true);
        s.compose();
        let ring = s.bodies[8].final_position;
        let saturn = s.bodies[7].final_position;
        assert_relative_eq!(ring.x, saturn.x, epsilon = 1e-6);
        assert_relative_eq!(ring.y, saturn.y, epsilon = 1e-6);
        assert_relative_eq!(ring.z, saturn.z, epsilon = 1e-6);
    }

    #[test]
    fn moon_keeps_its_orbit_radius_from_earth_after_composition() {
        let mut s = scene();
        let mut rng = rand::rng();
        s.randomize_angles(&mut rng);
        s.animate(0.0, true);
        s.compose();
        let earth = s.bodies[s.earth_index()].final_position;
        let moon = s.bodies[4].final_position;
        // Rotations are isometries, so the composed separation is exactly
        // the moon's orbit radius for a circular orbit.
        assert_relative_eq!(
            earth.distance(moon),
            s.bodies[4].orbit_radius,
            max_relative = 1e-9
        );
    }

    #[test]
    fn single_step_offsets_by_the_stepped_angle() {
        let mut s = scene();
        let earth = s.earth_index();
        match s.animator_mut(earth) {
            Some(a) => a.set_orbit_angle(0.0),
            None => panic!("earth must be animated"),
        }
        s.animate(0.0, true);
        let radius = s.bodies[earth].orbit_radius;
        assert_relative_eq!(s.bodies[earth].position.z, radius, max_relative = 1e-12);

        // Past one step interval the angle advances proportionally.
        let step = 1e-5;
        let required_ms = step * (DEFAULT_YEAR_SECONDS / FULL_TURN) * 1000.0;
        s.animate(1.5 * required_ms, false);
        let angle = match s.animator(earth) {
            Some(a) => a.orbit_angle(),
            None => panic!("earth must be animated"),
        };
        assert!(angle > 0.0 && angle < 1.0e-3);
        assert_relative_eq!(
            s.bodies[earth].position.x,
            angle.to_radians().sin() * radius,
            max_relative = 1e-9
        );
        assert_relative_eq!(
            s.bodies[earth].position.z,
            angle.to_radians().cos() * radius,
            max_relative = 1e-9
        );
    }

    #[test]
    fn randomize_while_paused_does_not_stall_after_resume() {
        use crate::clock::PlayClock;

        let mut s = scene();
        let mut clock = PlayClock::default();
        s.animate(clock.play_time_ms(0.0), true);
        clock.clear_just_started();

        // Angle change during a long pause must not step the animators:
        // their timers would end up ahead of play time and freeze every
        // body until play time caught back up.
        clock.set_paused(10.0, true);
        let mut rng = rand::rng();
        s.randomize_angles(&mut rng);
        s.resync_positions();
        clock.set_paused(100.0, false);

        let earth = s.earth_index();
        let at_resume = match s.animator(earth) {
            Some(a) => a.orbit_angle(),
            None => panic!("earth must be animated"),
        };
        s.animate(clock.play_time_ms(130.0), false);
        let after = match s.animator(earth) {
            Some(a) => a.orbit_angle(),
            None => panic!("earth must be animated"),
        };
        // 40 s of accumulated play (10 before the pause, 30 after) at
        // 3600 s per orbit is 4 degrees.
        let advanced = (after - at_resume).rem_euclid(FULL_TURN);
        assert!(
            advanced > 3.5 && advanced < 4.5,
            "expected ~4 degrees of advance after resume, got {advanced}"
        );
    }

    #[test]
    fn fixed_spin_bodies_lock_spin_to_orbit() {
        let mut s = scene();
        let mut rng = rand::rng();
        s.randomize_angles(&mut rng);
        let moon = match s.animator(4) {
            Some(a) => a,
            None => panic!("moon must be animated"),
        };
        // Moon's default spin offset is zero, so spin equals orbit angle.
        assert_relative_eq!(moon.spin_angle(), moon.orbit_angle());
    }
}
