//! Header bar with panel toggle, playback controls and status

use eframe::egui;
use crate::theme::colors;
use crate::time::now_seconds;
use super::SignalNoiseApp;

impl SignalNoiseApp {
    pub(crate) fn render_header(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            // LEFT: panel toggle and playback
            let panel_text = if self.show_panel { "Controls <<<" } else { "Controls >>>" };
            if ui.button(egui::RichText::new(panel_text)).clicked() {
                self.show_panel = !self.show_panel;
            }

            let play_text = if self.paused { "Play" } else { "Pause" };
            if ui.button(play_text).clicked() {
                self.paused = !self.paused;
            }

            // RIGHT: status (right-to-left order)
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(egui::RichText::new("SIGNAL/NOISE").color(colors::TEXT_PRIMARY));
                ui.add_space(10.0);

                ui.label(
                    egui::RichText::new(format!("{:.0} fps", self.fps_counter.fps()))
                        .color(colors::TEXT_SECONDARY),
                );
                ui.label(egui::RichText::new("/").color(colors::TEXT_MUTED));
                ui.label(
                    egui::RichText::new(format!("t={:.0}", self.clock.time()))
                        .color(colors::TEXT_MUTED),
                );
                ui.label(egui::RichText::new("/").color(colors::TEXT_MUTED));
                ui.label(
                    egui::RichText::new(format!("{} rings", self.params.ring_count))
                        .color(colors::TEXT_MUTED),
                );

                if let Some(err) = &self.last_error {
                    ui.add_space(10.0);
                    ui.colored_label(colors::ERROR, err);
                }
            });
        });
    }
}

/// FPS counter over the last 60 frames
pub struct FpsCounter {
    frames: Vec<f64>,
}

impl FpsCounter {
    pub fn new() -> Self {
        Self {
            frames: Vec::with_capacity(60),
        }
    }

    pub fn tick(&mut self) {
        self.frames.push(now_seconds());
        if self.frames.len() > 60 {
            self.frames.remove(0);
        }
    }

    pub fn fps(&self) -> f64 {
        let (Some(first), Some(last)) = (self.frames.first(), self.frames.last()) else {
            return 0.0;
        };
        let elapsed = last - first;
        if self.frames.len() < 2 || elapsed == 0.0 {
            return 0.0;
        }
        (self.frames.len() as f64 - 1.0) / elapsed
    }
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new()
    }
}
