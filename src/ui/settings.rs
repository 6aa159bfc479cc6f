//! Settings panel at the bottom of the screen.
//!
//! Play/pause, year length, orbit randomization, camera focus and light
//! intensity, all on one bar.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::camera::OrbitCamera;
use crate::clock::PlayClock;
use crate::render::LightSettings;
use crate::scene::SolarScene;
use crate::sim::RandomizeOrbits;
use crate::types::{MAX_YEAR_SECONDS, MIN_YEAR_SECONDS};
use crate::ui::icons;

/// System that renders the settings panel.
pub fn settings_panel(
    mut contexts: EguiContexts,
    mut scene: ResMut<SolarScene>,
    mut clock: ResMut<PlayClock>,
    mut camera: ResMut<OrbitCamera>,
    mut light: ResMut<LightSettings>,
    mut randomize_events: MessageWriter<RandomizeOrbits>,
    time: Res<Time>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::TopBottomPanel::bottom("settings")
        .frame(
            egui::Frame::none()
                .fill(egui::Color32::from_rgba_unmultiplied(20, 20, 30, 220))
                .inner_margin(egui::Margin::symmetric(16, 8)),
        )
        .show(ctx, |ui| {
            ui.horizontal_centered(|ui| {
                // Play/Pause button
                let icon = if clock.is_paused() {
                    icons::PLAY
                } else {
                    icons::PAUSE
                };
                if ui
                    .button(icon)
                    .on_hover_text(if clock.is_paused() {
                        "Play (Space)"
                    } else {
                        "Pause (Space)"
                    })
                    .clicked()
                {
                    clock.toggle(time.elapsed_secs_f64());
                }

                ui.separator();

                // Year-length slider
                ui.label(icons::CLOCK);
                let mut year = scene.year_seconds();
                if ui
                    .add(
                        egui::Slider::new(&mut year, MIN_YEAR_SECONDS..=MAX_YEAR_SECONDS)
                            .custom_formatter(|v, _| format!("1 yr : {v:.0} sec"))
                            .logarithmic(true),
                    )
                    .changed()
                {
                    if let Err(err) = scene.set_year_seconds(year) {
                        warn!("Year length change rejected: {err}");
                    }
                }

                ui.separator();

                // Random orbit angles
                if ui
                    .button(format!("{} Random Orbit", icons::SHUFFLE))
                    .on_hover_text("Randomize orbit angles (R)")
                    .clicked()
                {
                    randomize_events.write(RandomizeOrbits);
                }

                ui.separator();

                // Camera focus selector
                ui.label(icons::CAMERA);
                let current = scene.name_of(camera.focus.min(scene.bodies.len() - 1));
                egui::ComboBox::from_id_salt("focus_body")
                    .selected_text(current)
                    .show_ui(ui, |ui| {
                        let choices: Vec<(usize, &str)> = scene.focusable_bodies().collect();
                        for (index, name) in choices {
                            ui.selectable_value(&mut camera.focus, index, name);
                        }
                    });

                ui.separator();

                // Light intensity
                ui.label(icons::SUN);
                ui.add(
                    egui::Slider::new(&mut light.intensity_scale, 0.0..=1.0)
                        .fixed_decimals(2),
                );
            });
        });
}
