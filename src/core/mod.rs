//! Platform-agnostic core module - shared between the WASM builder and CLI

pub mod clock;
pub mod config;
pub mod effects;
pub mod embed;
pub mod error;
pub mod noise;
pub mod params;
pub mod ring;
pub mod style;
pub mod svg;

pub use clock::{FrameClock, DEFAULT_SPEED};
pub use config::EmbedConfig;
pub use effects::Effect;
pub use embed::{element_id, embed_snippet, DEFAULT_BUNDLE_URL};
pub use error::{ConfigError, RenderError};
pub use noise::NoiseField;
pub use params::{angular_step_for_detail, detail_for_angular_step, Point, RenderParameters};
pub use ring::{render, RingPath, RingRenderer};
pub use style::{draw_frame, Appearance, GradientMode, Rgb, StrokePaint, Surface};
pub use svg::SvgSurface;
