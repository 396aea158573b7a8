//! Embed export - element id, snippet generation and clipboard copy

use eframe::egui;
use tracing::{info, warn};

use super::SignalNoiseApp;
use crate::core::{embed_snippet, DEFAULT_BUNDLE_URL};
use crate::theme::colors;

/// Last generated snippet and a one-line status
#[derive(Default)]
pub struct ExportState {
    pub snippet: Option<String>,
    pub status: Option<String>,
}

impl SignalNoiseApp {
    pub(crate) fn render_export(&mut self, ui: &mut egui::Ui) {
        ui.label(egui::RichText::new("Export:").color(colors::TEXT_MUTED));

        ui.horizontal(|ui| {
            ui.label(egui::RichText::new("Element").color(colors::TEXT_SECONDARY));
            ui.add(
                egui::TextEdit::singleline(&mut self.element)
                    .desired_width(f32::INFINITY)
                    .hint_text("#my-element"),
            );
        });

        if ui.button("Generate embed code").clicked() {
            let config = self.current_config();
            match embed_snippet(&config, DEFAULT_BUNDLE_URL) {
                Ok(snippet) => {
                    info!(el = %config.el, bytes = snippet.len(), "Embed code generated");
                    self.export.snippet = Some(snippet);
                    self.export.status = None;
                }
                Err(e) => {
                    warn!(error = %e, "Embed export failed");
                    self.export.snippet = None;
                    self.export.status = Some(e.to_string());
                }
            }
        }

        if let Some(snippet) = &self.export.snippet {
            let mut shown = snippet.as_str();
            ui.add(
                egui::TextEdit::multiline(&mut shown)
                    .font(egui::TextStyle::Monospace)
                    .desired_rows(8)
                    .desired_width(f32::INFINITY),
            );
            if ui.button("Copy").clicked() {
                ui.ctx().copy_text(snippet.clone());
                self.export.status = Some("Copied to clipboard".to_string());
            }
        }

        if let Some(status) = &self.export.status {
            ui.label(egui::RichText::new(status).color(colors::TEXT_SECONDARY).small());
        }
    }
}
