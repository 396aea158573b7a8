//! Signal/Noise - animated concentric rings distorted by layered noise
//!
//! `core` holds the platform-independent renderer, configuration and
//! exporters. With the `wasm` feature the crate also builds a browser app:
//! - `start_builder`: canvas plus control panel and embed export
//! - `start_embed`: canvas only, driven by an exported config

pub mod core;

#[cfg(all(feature = "wasm", target_arch = "wasm32"))]
mod app;
#[cfg(all(feature = "wasm", target_arch = "wasm32"))]
mod theme;
#[cfg(all(feature = "wasm", target_arch = "wasm32"))]
mod time;

#[cfg(all(feature = "wasm", target_arch = "wasm32"))]
pub use web::{start_builder, start_embed};

#[cfg(all(feature = "wasm", target_arch = "wasm32"))]
mod web {
    use tracing::{error, info, warn};
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;

    use crate::app::{Mode, SignalNoiseApp};
    use crate::core::{element_id, EmbedConfig};

    /// Global a host page may set before calling `start_builder`
    const BUILDER_CONFIG_GLOBAL: &str = "window.__signal_noise_config";

    #[wasm_bindgen(start)]
    pub fn init_runtime() {
        console_error_panic_hook::set_once();

        // Initialize tracing for browser console
        tracing_wasm::set_as_global_default();
    }

    fn document() -> Result<web_sys::Document, JsValue> {
        web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document"))
    }

    /// Start the builder on an existing `<canvas id=...>`.
    #[wasm_bindgen]
    pub fn start_builder(canvas_id: &str) -> Result<(), JsValue> {
        let canvas = document()?
            .get_element_by_id(canvas_id)
            .ok_or_else(|| JsValue::from_str(&format!("no element with id {:?}", canvas_id)))?
            .dyn_into::<web_sys::HtmlCanvasElement>()
            .map_err(|_| JsValue::from_str(&format!("element {:?} is not a canvas", canvas_id)))?;

        let config = initial_builder_config();
        run(canvas, Mode::Builder, config);
        Ok(())
    }

    /// Start an embed from an exported config JSON.
    ///
    /// A canvas filling the element named by `el` is created and animated.
    /// Malformed configs are rejected before anything is drawn.
    #[wasm_bindgen]
    pub fn start_embed(config_json: &str) -> Result<(), JsValue> {
        let config = EmbedConfig::from_json(config_json)
            .map_err(|e| JsValue::from_str(&format!("invalid embed config: {}", e)))?;

        // Bare ids are accepted as well as `#id`; anything else is used as a selector
        let selector = match element_id(&config.el) {
            Ok(id) => format!("#{}", id),
            Err(_) => config.el.clone(),
        };
        let document = document()?;
        let host = document
            .query_selector(&selector)?
            .ok_or_else(|| JsValue::from_str(&format!("no element matches {:?}", selector)))?;

        let canvas = document
            .create_element("canvas")?
            .dyn_into::<web_sys::HtmlCanvasElement>()
            .map_err(|_| JsValue::from_str("created element is not a canvas"))?;
        canvas.set_attribute("style", "width:100%;height:100%;display:block")?;
        host.append_child(&canvas)?;

        run(canvas, Mode::Embed, config);
        Ok(())
    }

    /// Config for a fresh builder: the page-provided global if valid, else defaults.
    fn initial_builder_config() -> EmbedConfig {
        let value = match js_sys::eval(BUILDER_CONFIG_GLOBAL) {
            Ok(v) if !v.is_undefined() && !v.is_null() => v,
            _ => return EmbedConfig::default(),
        };
        let json = match js_sys::JSON::stringify(&value) {
            Ok(s) => String::from(s),
            Err(e) => {
                warn!(error = ?e, "Builder config is not serialisable, using defaults");
                return EmbedConfig::default();
            }
        };
        match EmbedConfig::from_json(&json) {
            Ok(config) => {
                info!("Loaded builder config from page");
                config
            }
            Err(e) => {
                warn!(error = %e, "Ignoring invalid builder config");
                EmbedConfig::default()
            }
        }
    }

    fn run(canvas: web_sys::HtmlCanvasElement, mode: Mode, config: EmbedConfig) {
        let web_options = eframe::WebOptions::default();
        let app_canvas = canvas.clone();

        wasm_bindgen_futures::spawn_local(async move {
            let result = eframe::WebRunner::new()
                .start(
                    canvas,
                    web_options,
                    Box::new(move |cc| Ok(Box::new(SignalNoiseApp::new(cc, mode, config, app_canvas)))),
                )
                .await;
            if let Err(e) = result {
                error!(error = ?e, "Failed to start eframe");
            }
        });
    }
}
