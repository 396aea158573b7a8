//! Browser app - builder (canvas + control panel) and embed-only runner
//!
//! Both modes share the same per-frame path: advance the clock, snapshot
//! `RenderParameters`, render rings through the selected effect, draw them
//! through an egui-backed `Surface`.

mod canvas;
mod export;
mod header;
mod panel;

use eframe::egui;
use tracing::{info, warn};

use crate::core::{Appearance, Effect, EmbedConfig, FrameClock, Point, RenderParameters, RingRenderer};
use crate::theme::{colors, panel_visuals};
use crate::time::FrameTimer;

/// Which surface the app is running as
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Full tool: canvas plus control and export panels
    Builder,
    /// Canvas only, driven by an exported config
    Embed,
}

/// Signal/Noise app - one instance per canvas
pub struct SignalNoiseApp {
    pub(crate) mode: Mode,
    pub(crate) effect: Effect,
    /// Geometry parameters edited by the panel; `time` and `pointer` are
    /// filled in per frame.
    pub(crate) params: RenderParameters,
    pub(crate) appearance: Appearance,
    /// CSS selector written into exported configs
    pub(crate) element: String,
    pub(crate) clock: FrameClock,
    pub(crate) paused: bool,
    renderer: RingRenderer,
    frame_timer: FrameTimer,
    pub(crate) fps_counter: header::FpsCounter,
    /// Last pointer position in ring space
    pub(crate) pointer: Point,
    /// Show control panel (builder only)
    pub(crate) show_panel: bool,
    pub(crate) export: export::ExportState,
    /// Render error from the last frame, shown in the header
    pub(crate) last_error: Option<String>,
    /// Canvas element, for the CSS blur filter
    canvas: web_sys::HtmlCanvasElement,
    applied_blur: Option<f64>,
}

impl SignalNoiseApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        mode: Mode,
        config: EmbedConfig,
        canvas: web_sys::HtmlCanvasElement,
    ) -> Self {
        cc.egui_ctx.set_visuals(panel_visuals());

        let effect = config.effect;
        let element = config.el.clone();
        let params = config.params();
        let appearance = config.appearance();

        info!(?mode, %effect, el = %element, rings = params.ring_count, "Starting renderer");

        Self {
            mode,
            effect,
            clock: FrameClock::new(params.time),
            renderer: RingRenderer::new(params.seed),
            params,
            appearance,
            element,
            paused: false,
            frame_timer: FrameTimer::default(),
            fps_counter: header::FpsCounter::new(),
            pointer: Point::ORIGIN,
            show_panel: mode == Mode::Builder,
            export: export::ExportState::default(),
            last_error: None,
            canvas,
            applied_blur: None,
        }
    }

    /// Current state as an embed config
    pub(crate) fn current_config(&self) -> EmbedConfig {
        let mut params = self.params.clone();
        params.time = self.clock.time();
        EmbedConfig::from_parts(&self.element, self.effect, &params, &self.appearance)
    }

    /// Parameter snapshot for the frame about to be drawn
    fn frame_params(&self) -> RenderParameters {
        RenderParameters {
            time: self.clock.time(),
            pointer: self.pointer,
            ..self.params.clone()
        }
    }

    /// Mirror the blur setting onto the canvas element's CSS filter.
    fn sync_blur(&mut self) {
        let blur = self.appearance.blur;
        if self.applied_blur == Some(blur) {
            return;
        }
        let value = if blur > 0.0 { format!("blur({:.1}px)", blur) } else { "none".to_string() };
        if let Err(e) = self.canvas.style().set_property("filter", &value) {
            warn!(error = ?e, "Failed to apply canvas blur");
        }
        self.applied_blur = Some(blur);
    }
}

impl eframe::App for SignalNoiseApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Continuous animation
        ctx.request_repaint();

        self.fps_counter.tick();
        let frames = self.frame_timer.tick();
        if !self.paused {
            self.clock.advance(self.appearance.speed, frames);
        }
        self.sync_blur();

        if self.mode == Mode::Builder {
            egui::TopBottomPanel::top("header")
                .frame(egui::Frame::new().fill(colors::BG_PANEL).inner_margin(4.0))
                .show(ctx, |ui| {
                    self.render_header(ui);
                });

            // Control panel must be shown before CentralPanel
            if self.show_panel {
                self.render_panel(ctx);
            }
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(egui::Color32::TRANSPARENT))
            .show(ctx, |ui| {
                let params = self.frame_params();
                self.render_canvas(ui, params);
            });
    }

    fn clear_color(&self, _visuals: &egui::Visuals) -> [f32; 4] {
        // Background is painted by the surface, or left transparent
        [0.0, 0.0, 0.0, 0.0]
    }
}
