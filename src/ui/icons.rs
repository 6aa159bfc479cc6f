//! Phosphor icons for the settings panel.
//!
//! The icon font must be registered with egui before the first panel draws
//! any icon glyph, otherwise the glyphs render as tofu boxes.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

/// Set once the icon font has been registered with the egui context.
#[derive(Resource, Default)]
pub struct FontsInitialized(pub bool);

/// Register the Phosphor font. Scheduled in `EguiPrimaryContextPass` so the
/// context exists; panel systems are gated on [`FontsInitialized`].
pub fn setup_fonts(mut contexts: EguiContexts, mut initialized: ResMut<FontsInitialized>) {
    if initialized.0 {
        return;
    }

    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);

    ctx.set_fonts(fonts);
    initialized.0 = true;

    info!("Phosphor icon fonts initialized");
}

// Icons used by the settings panel, under names matching their role here.
// The full set is browsable at https://phosphoricons.com/

/// Play icon (triangle pointing right)
pub const PLAY: &str = egui_phosphor::regular::PLAY;
/// Pause icon (two vertical bars)
pub const PAUSE: &str = egui_phosphor::regular::PAUSE;
/// Shuffle icon, used for orbit randomization
pub const SHUFFLE: &str = egui_phosphor::regular::SHUFFLE;
/// Clock icon for the year-length slider
pub const CLOCK: &str = egui_phosphor::regular::CLOCK;
/// Sun icon for the light intensity slider
pub const SUN: &str = egui_phosphor::regular::SUN;
/// Camera icon for the focus selector
pub const CAMERA: &str = egui_phosphor::regular::VIDEO_CAMERA;
