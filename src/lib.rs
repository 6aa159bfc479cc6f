//! Orrery - Interactive 3D Solar System
//!
//! A library crate providing the orbital kinematics and transform
//! composition engine behind the visualization, plus the Bevy plugins
//! that drive it.

pub mod animator;
pub mod camera;
pub mod catalog;
pub mod clock;
pub mod hierarchy;
pub mod input;
pub mod render;
pub mod scene;
pub mod sim;
pub mod types;
pub mod ui;
