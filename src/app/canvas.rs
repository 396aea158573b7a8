//! Ring canvas - egui-backed drawing surface

use eframe::egui;
use egui::epaint::PathStroke;
use tracing::warn;

use super::SignalNoiseApp;
use crate::core::{draw_frame, Point, RenderParameters, Rgb, StrokePaint, Surface};
use crate::theme::to_color32;

/// `Surface` that paints into an egui painter, origin at the canvas centre.
pub(crate) struct EguiSurface<'a> {
    painter: &'a egui::Painter,
    center: egui::Pos2,
    paint: StrokePaint,
    stroke_width: f32,
}

impl<'a> EguiSurface<'a> {
    pub(crate) fn new(painter: &'a egui::Painter, center: egui::Pos2) -> Self {
        Self {
            painter,
            center,
            paint: StrokePaint::Solid(Rgb::new(255, 255, 255)),
            stroke_width: 1.0,
        }
    }

    fn path_stroke(&self) -> PathStroke {
        match &self.paint {
            StrokePaint::Solid(c) => PathStroke::new(self.stroke_width, to_color32(*c)),
            gradient => {
                let gradient = gradient.clone();
                let center = self.center;
                PathStroke::new_uv(self.stroke_width, move |_bounds, pos| {
                    let p = Point::new((pos.x - center.x) as f64, (pos.y - center.y) as f64);
                    to_color32(gradient.color_at(p))
                })
            }
        }
    }
}

impl Surface for EguiSurface<'_> {
    fn clear(&mut self) {
        // Nothing painted yet this frame; the clear colour is transparent
    }

    fn fill_background(&mut self, color: Rgb) {
        self.painter
            .rect_filled(self.painter.clip_rect(), 0.0, to_color32(color));
    }

    fn set_stroke(&mut self, paint: StrokePaint) {
        self.paint = paint;
    }

    fn set_stroke_width(&mut self, width: f64) {
        self.stroke_width = width as f32;
    }

    fn draw_closed_polyline(&mut self, points: &[Point]) {
        if points.len() < 2 {
            return;
        }
        let pts: Vec<egui::Pos2> = points
            .iter()
            .map(|p| self.center + egui::vec2(p.x as f32, p.y as f32))
            .collect();
        self.painter.add(egui::Shape::closed_line(pts, self.path_stroke()));
    }
}

impl SignalNoiseApp {
    /// Render one frame of rings into the remaining space of `ui`.
    pub(crate) fn render_canvas(&mut self, ui: &mut egui::Ui, params: RenderParameters) {
        let available = ui.available_size();
        let (response, painter) = ui.allocate_painter(available, egui::Sense::hover());
        let rect = response.rect;
        let center = rect.center();

        // Pointer in ring space (undo the display scale)
        if let Some(pos) = response.hover_pos() {
            let size = self.appearance.size.max(f64::EPSILON);
            self.pointer = Point::new(
                (pos.x - center.x) as f64 / size,
                (pos.y - center.y) as f64 / size,
            );
        }

        let field = self.renderer.field_for(params.seed);
        let rings = match self.effect.render(&params, field) {
            Ok(rings) => {
                self.last_error = None;
                rings
            }
            Err(e) => {
                if self.last_error.is_none() {
                    warn!(error = %e, "Frame skipped");
                }
                self.last_error = Some(e.to_string());
                return;
            }
        };

        let mut surface = EguiSurface::new(&painter, center);
        draw_frame(
            &mut surface,
            &self.appearance,
            &rings,
            rect.width() as f64,
            rect.height() as f64,
        );
    }
}
