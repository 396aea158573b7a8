//! Embed snippet generation
//!
//! Produces a copy-paste HTML block that loads the wasm bundle and starts the
//! renderer inside the configured host element.

use std::fmt::Write;

use super::config::EmbedConfig;
use super::error::ConfigError;

/// Default location of the wasm-bindgen JS glue
pub const DEFAULT_BUNDLE_URL: &str = "./pkg/signal_noise.js";

/// Build the embed snippet for `config`, loading the bundle from `bundle_url`.
///
/// `config.el` may be given with or without the leading `#`; the snippet's
/// container id and the selector passed to `start_embed` always agree.
pub fn embed_snippet(config: &EmbedConfig, bundle_url: &str) -> Result<String, ConfigError> {
    let id = element_id(&config.el)?;
    let config = EmbedConfig {
        el: format!("#{}", id),
        ..config.clone()
    };
    let json = config.to_json()?;

    let mut html = String::with_capacity(json.len() + 512);
    let _ = writeln!(html, "<!-- Paste this into your page's custom code block, just before </body> -->");
    let _ = writeln!(
        html,
        r#"<div id="{}" style="position:relative;width:100%;height:100%;overflow:hidden;"></div>"#,
        escape_attr(id)
    );
    let _ = writeln!(html);
    let _ = writeln!(html, r#"<script type="module">"#);
    let _ = writeln!(
        html,
        r#"import init, {{ start_embed }} from "{}";"#,
        escape_attr(bundle_url)
    );
    let _ = writeln!(html, "await init();");
    // `</` would terminate the script element early
    let _ = writeln!(html, "start_embed(JSON.stringify({}));", json.replace("</", "<\\/"));
    let _ = write!(html, "</script>");

    Ok(html)
}

/// Element id from `el`, which is either `#id` or a bare `id`.
///
/// Only ids that are also valid CSS id selectors are accepted: ASCII
/// letters, digits, `-` and `_`, not starting with a digit.
pub fn element_id(el: &str) -> Result<&str, ConfigError> {
    let trimmed = el.trim();
    let id = trimmed.strip_prefix('#').unwrap_or(trimmed);
    let valid = !id.is_empty()
        && !id.starts_with(|c: char| c.is_ascii_digit())
        && id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(id)
    } else {
        Err(ConfigError::Element(el.to_string()))
    }
}

fn escape_attr(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::DEFAULT_ELEMENT;

    #[test]
    fn test_snippet_carries_config() {
        let config = EmbedConfig {
            el: "#hero-rings".into(),
            ring_count: 42,
            ..Default::default()
        };
        let html = embed_snippet(&config, DEFAULT_BUNDLE_URL).unwrap();
        assert!(html.contains(r#"<div id="hero-rings""#));
        assert!(html.contains(r#""ringCount": 42"#));
        assert!(html.contains("start_embed("));
        assert!(html.contains(DEFAULT_BUNDLE_URL));
        assert!(html.trim_end().ends_with("</script>"));
    }

    #[test]
    fn test_snippet_json_parses_back() {
        let config = EmbedConfig::default();
        let html = embed_snippet(&config, DEFAULT_BUNDLE_URL).unwrap();
        let back = embedded_config(&html);
        assert_eq!(back, config);
        assert_eq!(back.el, DEFAULT_ELEMENT);
    }

    fn embedded_config(html: &str) -> EmbedConfig {
        let start = html.find("JSON.stringify(").unwrap() + "JSON.stringify(".len();
        let end = html.rfind("));").unwrap();
        EmbedConfig::from_json(&html[start..end]).unwrap()
    }

    #[test]
    fn test_div_id_and_selector_agree() {
        for el in ["#hero-rings", "hero-rings", "  #hero-rings "] {
            let config = EmbedConfig { el: el.into(), ..Default::default() };
            let html = embed_snippet(&config, DEFAULT_BUNDLE_URL).unwrap();
            assert!(html.contains(r#"<div id="hero-rings""#), "{:?}", el);
            assert_eq!(embedded_config(&html).el, "#hero-rings", "{:?}", el);
        }
    }

    #[test]
    fn test_non_id_selectors_rejected() {
        for el in [".banner", "div > p", "#a\"b", "", "#", "#9lives", "main#hero"] {
            let config = EmbedConfig { el: el.into(), ..Default::default() };
            assert!(
                matches!(embed_snippet(&config, DEFAULT_BUNDLE_URL), Err(ConfigError::Element(_))),
                "{:?} accepted",
                el
            );
        }
    }
}
