//! Orrery - Interactive 3D Solar System
//!
//! A desktop application animating the solar system with rate-limited
//! orbital kinematics and hierarchical transform composition.

use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use orrery::camera::CameraPlugin;
use orrery::input::InputPlugin;
use orrery::render::RenderPlugin;
use orrery::scene::SolarScene;
use orrery::sim::SimPlugin;
use orrery::ui::UiPlugin;

fn main() {
    // Scene assembly validates the whole layout; refuse to start on error.
    let scene = match SolarScene::with_default_layout() {
        Ok(scene) => scene,
        Err(err) => {
            eprintln!("failed to assemble the solar system: {err}");
            std::process::exit(1);
        }
    };

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "3D Solar System".into(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(EguiPlugin::default())
        // Insert resources before plugins that depend on them
        .insert_resource(scene)
        .add_plugins((SimPlugin, CameraPlugin, RenderPlugin, InputPlugin, UiPlugin))
        .run();
}
