//! Control panel - effect, geometry, motion, attraction and appearance groups

use eframe::egui;
use std::ops::RangeInclusive;
use tracing::{debug, warn};

use super::SignalNoiseApp;
use crate::core::{
    angular_step_for_detail, detail_for_angular_step, Appearance, Effect, GradientMode,
    RenderParameters, Rgb,
};
use crate::theme::{colors, from_rgb_array, to_rgb_array};

/// Labelled full-width slider; double-click restores `default`.
fn labeled_slider(
    ui: &mut egui::Ui,
    label: &str,
    value: &mut f64,
    range: RangeInclusive<f64>,
    decimals: usize,
    default: f64,
) -> bool {
    ui.label(
        egui::RichText::new(format!("{}: {:.*}", label, decimals, *value)).color(colors::TEXT_MUTED),
    );
    let full_width = ui.available_width();
    ui.spacing_mut().slider_width = full_width;
    let response = ui.add(
        egui::Slider::new(value, range)
            .clamping(egui::SliderClamping::Always)
            .show_value(false),
    );
    if response.double_clicked() {
        *value = default;
        return true;
    }
    response.changed()
}

fn color_row(ui: &mut egui::Ui, label: &str, color: &mut Rgb) {
    ui.horizontal(|ui| {
        let mut rgb = to_rgb_array(*color);
        if ui.color_edit_button_srgb(&mut rgb).changed() {
            *color = from_rgb_array(rgb);
        }
        ui.label(egui::RichText::new(label).color(colors::TEXT_SECONDARY));
    });
}

fn random_seed() -> Option<u32> {
    let mut bytes = [0u8; 4];
    match getrandom::getrandom(&mut bytes) {
        Ok(()) => Some(u32::from_le_bytes(bytes)),
        Err(e) => {
            warn!(error = %e, "No entropy for reseed");
            None
        }
    }
}

impl SignalNoiseApp {
    pub(crate) fn render_panel(&mut self, ctx: &egui::Context) {
        let width = ctx.screen_rect().width() * 0.2;
        egui::SidePanel::left("controls")
            .default_width(width)
            .min_width(260.0)
            .resizable(true)
            .frame(egui::Frame::new().fill(colors::BG_PANEL).inner_margin(8.0))
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    let group_frame = egui::Frame::new()
                        .stroke(egui::Stroke::new(1.0, colors::TEXT_MUTED.gamma_multiply(0.6)))
                        .corner_radius(4.0)
                        .inner_margin(6.0);

                    group_frame.show(ui, |ui| {
                        ui.set_min_width(ui.available_width());
                        self.effect_group(ui);
                    });
                    ui.add_space(8.0);

                    group_frame.show(ui, |ui| {
                        ui.set_min_width(ui.available_width());
                        geometry_group(ui, &mut self.params);
                    });
                    ui.add_space(8.0);

                    group_frame.show(ui, |ui| {
                        ui.set_min_width(ui.available_width());
                        self.motion_group(ui);
                    });
                    ui.add_space(8.0);

                    group_frame.show(ui, |ui| {
                        ui.set_min_width(ui.available_width());
                        attraction_group(ui, &mut self.params);
                    });
                    ui.add_space(8.0);

                    group_frame.show(ui, |ui| {
                        ui.set_min_width(ui.available_width());
                        appearance_group(ui, &mut self.appearance);
                    });
                    ui.add_space(8.0);

                    group_frame.show(ui, |ui| {
                        ui.set_min_width(ui.available_width());
                        self.render_export(ui);
                    });
                });
            });
    }

    fn effect_group(&mut self, ui: &mut egui::Ui) {
        ui.label(egui::RichText::new("Effect:").color(colors::TEXT_MUTED));
        for &effect in Effect::ALL {
            if ui.radio_value(&mut self.effect, effect, effect.label()).changed() {
                debug!(%effect, "Effect changed");
            }
        }

        ui.add_space(4.0);
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new(format!("Seed: {:08x}", self.params.seed))
                    .color(colors::TEXT_SECONDARY)
                    .monospace(),
            );
            if ui.button("Reseed").clicked() {
                if let Some(seed) = random_seed() {
                    debug!(seed, "Reseeded noise field");
                    self.params.seed = seed;
                }
            }
        });
    }

    fn motion_group(&mut self, ui: &mut egui::Ui) {
        let defaults = Appearance::default();
        ui.label(egui::RichText::new("Motion:").color(colors::TEXT_MUTED));

        ui.label(
            egui::RichText::new(format!("Speed: {:.4}", self.appearance.speed))
                .color(colors::TEXT_MUTED),
        );
        let full_width = ui.available_width();
        ui.spacing_mut().slider_width = full_width;
        let response = ui.add(
            egui::Slider::new(&mut self.appearance.speed, 0.001..=0.02)
                .logarithmic(true)
                .clamping(egui::SliderClamping::Always)
                .show_value(false),
        );
        if response.double_clicked() {
            self.appearance.speed = defaults.speed;
        }

        let mut paused = self.paused;
        if ui.checkbox(&mut paused, "Paused").changed() {
            self.paused = paused;
        }
    }
}

fn geometry_group(ui: &mut egui::Ui, params: &mut RenderParameters) {
    let defaults = RenderParameters::default();
    ui.label(egui::RichText::new("Rings:").color(colors::TEXT_MUTED));

    ui.label(
        egui::RichText::new(format!("Count: {}", params.ring_count)).color(colors::TEXT_MUTED),
    );
    let full_width = ui.available_width();
    ui.spacing_mut().slider_width = full_width;
    let response = ui.add(
        egui::Slider::new(&mut params.ring_count, 10..=150)
            .clamping(egui::SliderClamping::Always)
            .show_value(false),
    );
    if response.double_clicked() {
        params.ring_count = defaults.ring_count;
    }

    labeled_slider(ui, "Spacing", &mut params.base_spacing, 2.0..=20.0, 1, defaults.base_spacing);
    labeled_slider(
        ui,
        "Spacing expansion",
        &mut params.spacing_expansion,
        -3.0..=3.0,
        2,
        defaults.spacing_expansion,
    );
    labeled_slider(ui, "Chaos", &mut params.chaos, 0.0..=3.0, 2, defaults.chaos);
    labeled_slider(
        ui,
        "Chaos intensity",
        &mut params.chaos_intensity,
        0.5..=4.0,
        2,
        defaults.chaos_intensity,
    );
    labeled_slider(
        ui,
        "Ripple depth",
        &mut params.ripple_depth,
        0.5..=2.0,
        2,
        defaults.ripple_depth,
    );

    // Detail is edited on a 0..1 scale and stored as the angular step
    let mut detail = detail_for_angular_step(params.angular_step);
    if labeled_slider(
        ui,
        "Detail",
        &mut detail,
        0.0..=1.0,
        2,
        detail_for_angular_step(defaults.angular_step),
    ) {
        params.angular_step = angular_step_for_detail(detail);
    }
}

fn attraction_group(ui: &mut egui::Ui, params: &mut RenderParameters) {
    let defaults = RenderParameters::default();
    ui.label(egui::RichText::new("Gravity:").color(colors::TEXT_MUTED));

    labeled_slider(
        ui,
        "Orbit radius",
        &mut params.gravity_radius,
        0.0..=200.0,
        0,
        defaults.gravity_radius,
    );
    labeled_slider(
        ui,
        "Orbit speed",
        &mut params.gravity_speed,
        0.0..=0.05,
        3,
        defaults.gravity_speed,
    );
    labeled_slider(
        ui,
        "Strength",
        &mut params.gravity_strength,
        0.0..=2.0,
        2,
        defaults.gravity_strength,
    );

    ui.add_space(4.0);
    ui.checkbox(&mut params.mouse_gravity_enabled, "Pointer attraction");
    if params.mouse_gravity_enabled {
        labeled_slider(
            ui,
            "Pointer intensity",
            &mut params.mouse_intensity,
            0.0..=1.0,
            2,
            defaults.mouse_intensity,
        );
    } else {
        ui.label(
            egui::RichText::new("  Rings ignore the cursor")
                .color(colors::TEXT_MUTED)
                .small(),
        );
    }
}

fn appearance_group(ui: &mut egui::Ui, appearance: &mut Appearance) {
    let defaults = Appearance::default();
    ui.label(egui::RichText::new("Appearance:").color(colors::TEXT_MUTED));

    labeled_slider(ui, "Size", &mut appearance.size, 0.5..=2.0, 2, defaults.size);
    labeled_slider(
        ui,
        "Line weight",
        &mut appearance.line_weight,
        1.0..=5.0,
        1,
        defaults.line_weight,
    );
    labeled_slider(ui, "Blur", &mut appearance.blur, 0.0..=10.0, 1, defaults.blur);

    ui.add_space(4.0);
    ui.checkbox(&mut appearance.background_enabled, "Background");
    if appearance.background_enabled {
        color_row(ui, "Background colour", &mut appearance.background_color);
    }

    ui.add_space(4.0);
    ui.label(egui::RichText::new("Stroke:").color(colors::TEXT_MUTED));
    ui.horizontal(|ui| {
        for &mode in GradientMode::ALL {
            ui.radio_value(&mut appearance.gradient_type, mode, mode.label());
        }
    });

    match appearance.gradient_type {
        GradientMode::Solid => color_row(ui, "Line colour", &mut appearance.line_color),
        GradientMode::Linear | GradientMode::Radial => {
            color_row(ui, "Start colour", &mut appearance.start_color);
            color_row(ui, "End colour", &mut appearance.end_color);
            if appearance.gradient_type == GradientMode::Linear {
                labeled_slider(
                    ui,
                    "Rotation",
                    &mut appearance.gradient_rotation,
                    0.0..=360.0,
                    0,
                    defaults.gradient_rotation,
                );
            }
        }
    }
}
