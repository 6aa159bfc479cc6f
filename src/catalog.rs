//! Physical constants for the rendered bodies.
//!
//! Radii are in km, periods in Earth days (or the body's own days for the
//! local period), angles in degrees. Inclinations are relative to the
//! ecliptic; some axial tilts exceed 90 degrees for retrograde rotation.

/// One catalog entry. `local_orbital_period` is the number of self-rotations
/// per orbit; `default_spin_angle` is the spin offset applied relative to the
/// orbit angle for bodies whose spin is phase-locked instead of randomized.
#[derive(Clone, Debug, PartialEq)]
pub struct BodyConstants {
    pub name: &'static str,
    pub radius: f64,
    pub orbital_period: f64,
    pub local_orbital_period: f64,
    pub ascending_node: f64,
    pub inclination: f64,
    pub axial_tilt: f64,
    pub default_spin_angle: f64,
}

pub const SUN_RADIUS: f64 = 696_340.0;
pub const SUN_AXIAL_TILT: f64 = 7.25;
pub const EARTH_RADIUS: f64 = 6371.0;
pub const EARTH_ORBITAL_PERIOD: f64 = 365.256363004;
pub const SATURN_RADIUS: f64 = 58_232.0;
pub const URANUS_RADIUS: f64 = 25_362.0;
pub const URANUS_AXIAL_TILT: f64 = 97.77;

/// Catalog index of the Sun and of Earth. Scene assembly uses Earth as the
/// reference body for scales and orbital delays.
pub const SUN: usize = 0;
pub const EARTH: usize = 3;

/// The fixed 13-entry constants table: Sun, the nine planets, the Moon and
/// the two ring discs. Ring entries reuse their planet's radius and carry a
/// small tilt of their own; their periods are irrelevant since rings are
/// never animated independently.
pub fn solar_system_constants() -> Vec<BodyConstants> {
    vec![
        BodyConstants {
            name: "Sun",
            radius: SUN_RADIUS,
            orbital_period: f64::INFINITY,
            local_orbital_period: f64::INFINITY,
            ascending_node: 0.0,
            inclination: 0.0,
            axial_tilt: SUN_AXIAL_TILT,
            default_spin_angle: 0.0,
        },
        BodyConstants {
            name: "Mercury",
            radius: 2439.7,
            orbital_period: 87.9691,
            local_orbital_period: 1.500005977,
            ascending_node: 48.331,
            inclination: 7.005,
            axial_tilt: 0.034,
            default_spin_angle: 0.0,
        },
        BodyConstants {
            name: "Venus",
            radius: 6051.8,
            orbital_period: 224.701,
            local_orbital_period: 1.924633833,
            ascending_node: 76.68,
            inclination: 3.39458,
            // retrograde
            axial_tilt: 177.36,
            default_spin_angle: 0.0,
        },
        BodyConstants {
            name: "Earth",
            radius: EARTH_RADIUS,
            orbital_period: EARTH_ORBITAL_PERIOD,
            local_orbital_period: EARTH_ORBITAL_PERIOD,
            ascending_node: -11.26064,
            inclination: 0.0,
            axial_tilt: 23.4392811,
            default_spin_angle: 0.0,
        },
        BodyConstants {
            name: "Mars",
            radius: 3389.5,
            orbital_period: 686.98,
            local_orbital_period: 669.7709063,
            ascending_node: 49.558,
            inclination: 1.85,
            axial_tilt: 25.19,
            default_spin_angle: 0.0,
        },
        BodyConstants {
            name: "Jupiter",
            radius: 69_911.0,
            orbital_period: 4332.59,
            local_orbital_period: 10_467.99987,
            ascending_node: 100.464,
            inclination: 1.303,
            axial_tilt: 3.12,
            default_spin_angle: 0.0,
        },
        BodyConstants {
            name: "Saturn",
            radius: SATURN_RADIUS,
            orbital_period: 10_759.22,
            local_orbital_period: 24_132.84795,
            ascending_node: 113.665,
            inclination: 2.485,
            axial_tilt: 26.73,
            default_spin_angle: 0.0,
        },
        BodyConstants {
            name: "Uranus",
            radius: URANUS_RADIUS,
            orbital_period: 30_688.5,
            local_orbital_period: 42_738.3101,
            ascending_node: 74.006,
            inclination: 0.773,
            axial_tilt: URANUS_AXIAL_TILT,
            default_spin_angle: 0.0,
        },
        BodyConstants {
            name: "Neptune",
            radius: 24_622.0,
            orbital_period: 60_195.0,
            local_orbital_period: 89_731.72161,
            ascending_node: 131.783,
            inclination: 1.77,
            axial_tilt: 28.33,
            default_spin_angle: 0.0,
        },
        BodyConstants {
            name: "Pluto",
            radius: 1188.3,
            orbital_period: 90_560.0,
            local_orbital_period: 14_150.0,
            ascending_node: 110.299,
            inclination: 17.16,
            axial_tilt: 122.53,
            default_spin_angle: 0.0,
        },
        BodyConstants {
            name: "Moon",
            radius: 1737.4,
            orbital_period: 27.321661,
            local_orbital_period: 1.0,
            // The real node regresses a full revolution in 18.61 years;
            // treated as zero here.
            ascending_node: 0.0,
            inclination: 5.145,
            axial_tilt: 6.687,
            default_spin_angle: 0.0,
        },
        BodyConstants {
            name: "Saturn ring",
            radius: SATURN_RADIUS,
            orbital_period: f64::INFINITY,
            local_orbital_period: f64::INFINITY,
            ascending_node: 0.0,
            inclination: 0.0,
            axial_tilt: 2.0,
            default_spin_angle: 0.0,
        },
        BodyConstants {
            name: "Uranus ring",
            radius: URANUS_RADIUS,
            orbital_period: f64::INFINITY,
            local_orbital_period: f64::INFINITY,
            ascending_node: 0.0,
            inclination: 0.0,
            axial_tilt: URANUS_AXIAL_TILT,
            default_spin_angle: 0.0,
        },
    ]
}
