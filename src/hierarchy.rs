//! Recursive parent-chain sums over the body hierarchy.
//!
//! Each body's orientation and placement depend on the accumulated values of
//! its ancestors: ascending nodes and inclinations come from the constants
//! catalog, positions from the live scene bodies. Parent links are validated
//! at scene build (parent index strictly below child index), so recursion
//! here always terminates at a root.

use bevy::math::DVec3;

use crate::catalog::BodyConstants;
use crate::scene::SceneBody;

/// Sum of ascending-node angles for `index` and all of its ancestors.
pub fn sum_ascending_nodes(bodies: &[SceneBody], catalog: &[BodyConstants], index: usize) -> f64 {
    let own = catalog[bodies[index].catalog_index].ascending_node;
    match bodies[index].parent {
        Some(parent) => own + sum_ascending_nodes(bodies, catalog, parent),
        None => own,
    }
}

/// Sum of inclination angles for `index` and all of its ancestors.
pub fn sum_inclinations(bodies: &[SceneBody], catalog: &[BodyConstants], index: usize) -> f64 {
    let own = catalog[bodies[index].catalog_index].inclination;
    match bodies[index].parent {
        Some(parent) => own + sum_inclinations(bodies, catalog, parent),
        None => own,
    }
}

/// Sum of resolved orbit positions for the ancestors of `index`, the body's
/// own position included. Used as the translation chain in composition.
pub fn sum_positions(bodies: &[SceneBody], index: usize) -> DVec3 {
    let own = bodies[index].position;
    match bodies[index].parent {
        Some(parent) => own + sum_positions(bodies, parent),
        None => own,
    }
}

/// Rescale `a1` from the `b1` reference frame into the `b2` frame:
/// `a1 / b1 * b2 * ratio`.
///
/// Drives both body scales (radius relative to Earth's radius and render
/// scale) and orbital delays (period relative to Earth's period and the
/// user-set year length).
pub fn relative_value(a1: f64, b1: f64, b2: f64, ratio: f64) -> f64 {
    a1 / b1 * b2 * ratio
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn body(parent: Option<usize>, catalog_index: usize, position: DVec3) -> SceneBody {
        let mut b = SceneBody::placeholder(catalog_index, parent);
        b.position = position;
        b
    }

    fn constants(ascending_node: f64, inclination: f64) -> BodyConstants {
        BodyConstants {
            name: "test",
            radius: 1.0,
            orbital_period: 1.0,
            local_orbital_period: 1.0,
            ascending_node,
            inclination,
            axial_tilt: 0.0,
            default_spin_angle: 0.0,
        }
    }

    #[test]
    fn root_sums_are_the_own_values() {
        let catalog = vec![constants(12.5, 3.0)];
        let bodies = vec![body(None, 0, DVec3::new(1.0, 2.0, 3.0))];
        assert_relative_eq!(sum_ascending_nodes(&bodies, &catalog, 0), 12.5);
        assert_relative_eq!(sum_inclinations(&bodies, &catalog, 0), 3.0);
        assert_relative_eq!(sum_positions(&bodies, 0).y, 2.0);
    }

    #[test]
    fn three_level_chain_adds_every_ancestor() {
        let catalog = vec![constants(10.0, 1.0), constants(20.0, 2.0), constants(30.0, 4.0)];
        let bodies = vec![
            body(None, 0, DVec3::new(1.0, 0.0, 0.0)),
            body(Some(0), 1, DVec3::new(0.0, 2.0, 0.0)),
            body(Some(1), 2, DVec3::new(0.0, 0.0, 4.0)),
        ];
        assert_relative_eq!(sum_ascending_nodes(&bodies, &catalog, 2), 60.0);
        assert_relative_eq!(sum_inclinations(&bodies, &catalog, 2), 7.0);
        let total = sum_positions(&bodies, 2);
        assert_relative_eq!(total.x, 1.0);
        assert_relative_eq!(total.y, 2.0);
        assert_relative_eq!(total.z, 4.0);
    }

    #[test]
    fn relative_value_is_identity_on_the_reference() {
        assert_relative_eq!(relative_value(365.256, 365.256, 3600.0, 1.0), 3600.0);
    }

    #[test]
    fn relative_value_scales_linearly() {
        // Half the reference period maps to half the reference delay.
        assert_relative_eq!(relative_value(50.0, 100.0, 3600.0, 1.0), 1800.0);
        assert_relative_eq!(relative_value(50.0, 100.0, 3600.0, 2.0), 3600.0);
    }
}
