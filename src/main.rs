//! Standalone CLI for rendering ring frames to SVG
//!
//! Run with: cargo run --features cli --bin signal-noise-cli
//!
//! Environment:
//! - `SIGNAL_NOISE_CONFIG`  path to an embed config JSON (defaults if unset)
//! - `SIGNAL_NOISE_FRAMES`  number of frames to render (default 1)
//! - `SIGNAL_NOISE_OUT`     output directory (default `.`)
//! - `SIGNAL_NOISE_SIZE`    canvas size as `WxH` (default `1280x800`)
//! - `SIGNAL_NOISE_SNIPPET` when set, also write `embed.html`

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    use signal_noise::core::{
        draw_frame, embed_snippet, EmbedConfig, FrameClock, RingRenderer, SvgSurface,
        DEFAULT_BUNDLE_URL,
    };
    use std::path::PathBuf;
    use std::time::Instant;
    use tracing::{debug, info};
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,signal_noise=debug"));
    fmt().with_env_filter(filter).with_target(true).init();

    let config = match std::env::var("SIGNAL_NOISE_CONFIG") {
        Ok(path) => {
            info!(path = %path, "Loading embed config");
            EmbedConfig::from_json(&std::fs::read_to_string(&path)?)?
        }
        Err(_) => EmbedConfig::default(),
    };
    let frames: u32 = match std::env::var("SIGNAL_NOISE_FRAMES") {
        Ok(s) => s.parse()?,
        Err(_) => 1,
    };
    let out_dir = PathBuf::from(std::env::var("SIGNAL_NOISE_OUT").unwrap_or_else(|_| ".".into()));
    let (width, height) = match std::env::var("SIGNAL_NOISE_SIZE") {
        Ok(s) => parse_size(&s).ok_or_else(|| format!("invalid SIGNAL_NOISE_SIZE {:?}, expected WxH", s))?,
        Err(_) => (1280.0, 800.0),
    };
    std::fs::create_dir_all(&out_dir)?;

    if std::env::var("SIGNAL_NOISE_SNIPPET").is_ok() {
        let path = out_dir.join("embed.html");
        std::fs::write(&path, embed_snippet(&config, DEFAULT_BUNDLE_URL)?)?;
        info!(path = %path.display(), "Wrote embed snippet");
    }

    let effect = config.effect;
    let (_el, _effect, mut params, appearance) = config.into_parts()?;
    let mut clock = FrameClock::new(params.time);
    let mut renderer = RingRenderer::new(params.seed);

    info!(%effect, rings = params.ring_count, frames, width, height, "Rendering");
    let started = Instant::now();

    for frame in 0..frames {
        params.time = clock.time();
        let rings = effect.render(&params, renderer.field_for(params.seed))?;

        let mut surface = SvgSurface::new(width, height).with_blur(appearance.blur);
        draw_frame(&mut surface, &appearance, &rings, width, height);

        let path = out_dir.join(format!("frame_{:04}.svg", frame));
        std::fs::write(&path, surface.finish())?;
        debug!(frame, time = params.time, paths = surface.path_count(), path = %path.display(), "Frame written");

        clock.advance(appearance.speed, 1.0);
    }

    info!(
        frames,
        elapsed_ms = started.elapsed().as_millis() as u64,
        out = %out_dir.display(),
        "Done"
    );
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
fn parse_size(s: &str) -> Option<(f64, f64)> {
    let (w, h) = s.split_once(['x', 'X'])?;
    let w: f64 = w.trim().parse().ok()?;
    let h: f64 = h.trim().parse().ok()?;
    (w > 0.0 && h > 0.0).then_some((w, h))
}

#[cfg(target_arch = "wasm32")]
fn main() {}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::parse_size;

    #[test]
    fn test_parse_size() {
        assert_eq!(parse_size("1280x800"), Some((1280.0, 800.0)));
        assert_eq!(parse_size("640X480"), Some((640.0, 480.0)));
        assert_eq!(parse_size("0x480"), None);
        assert_eq!(parse_size("wide"), None);
    }
}
