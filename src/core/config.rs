//! Embed configuration - flat key/value object carried by exported snippets
//!
//! Every render parameter except the runtime pointer position round-trips
//! through this object unchanged.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::effects::Effect;
use super::error::ConfigError;
use super::params::{Point, RenderParameters};
use super::style::{Appearance, GradientMode, Rgb};

/// Placeholder element id written into fresh exports
pub const DEFAULT_ELEMENT: &str = "#YOUR-ELEMENT-ID";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmbedConfig {
    /// CSS selector of the host element
    pub el: String,
    pub effect: Effect,
    pub seed: u32,

    #[serde(alias = "rings")]
    pub ring_count: i32,
    pub base_spacing: f64,
    pub spacing_expansion: f64,
    pub chaos: f64,
    pub chaos_intensity: f64,
    pub ripple_depth: f64,
    pub angular_step: f64,
    pub gravity_radius: f64,
    pub gravity_speed: f64,
    pub gravity_strength: f64,
    #[serde(alias = "mouseGravity")]
    pub mouse_gravity_enabled: bool,
    pub mouse_intensity: f64,
    pub time: f64,

    pub speed: f64,
    pub line_color: Rgb,
    pub background_color: Rgb,
    pub background_enabled: bool,
    pub gradient_type: GradientMode,
    pub start_color: Rgb,
    pub end_color: Rgb,
    pub gradient_rotation: f64,
    pub line_weight: f64,
    pub size: f64,
    pub blur: f64,
}

impl Default for EmbedConfig {
    fn default() -> Self {
        Self::from_parts(
            DEFAULT_ELEMENT,
            Effect::default(),
            &RenderParameters::default(),
            &Appearance::default(),
        )
    }
}

impl EmbedConfig {
    pub fn from_parts(
        el: &str,
        effect: Effect,
        params: &RenderParameters,
        appearance: &Appearance,
    ) -> Self {
        Self {
            el: el.to_string(),
            effect,
            seed: params.seed,
            ring_count: params.ring_count,
            base_spacing: params.base_spacing,
            spacing_expansion: params.spacing_expansion,
            chaos: params.chaos,
            chaos_intensity: params.chaos_intensity,
            ripple_depth: params.ripple_depth,
            angular_step: params.angular_step,
            gravity_radius: params.gravity_radius,
            gravity_speed: params.gravity_speed,
            gravity_strength: params.gravity_strength,
            mouse_gravity_enabled: params.mouse_gravity_enabled,
            mouse_intensity: params.mouse_intensity,
            time: params.time,
            speed: appearance.speed,
            line_color: appearance.line_color,
            background_color: appearance.background_color,
            background_enabled: appearance.background_enabled,
            gradient_type: appearance.gradient_type,
            start_color: appearance.start_color,
            end_color: appearance.end_color,
            gradient_rotation: appearance.gradient_rotation,
            line_weight: appearance.line_weight,
            size: appearance.size,
            blur: appearance.blur,
        }
    }

    /// Render parameters described by this config; the pointer starts at the origin.
    pub fn params(&self) -> RenderParameters {
        RenderParameters {
            ring_count: self.ring_count,
            base_spacing: self.base_spacing,
            spacing_expansion: self.spacing_expansion,
            chaos: self.chaos,
            chaos_intensity: self.chaos_intensity,
            ripple_depth: self.ripple_depth,
            angular_step: self.angular_step,
            gravity_radius: self.gravity_radius,
            gravity_speed: self.gravity_speed,
            gravity_strength: self.gravity_strength,
            mouse_gravity_enabled: self.mouse_gravity_enabled,
            mouse_intensity: self.mouse_intensity,
            time: self.time,
            seed: self.seed,
            pointer: Point::ORIGIN,
        }
    }

    pub fn appearance(&self) -> Appearance {
        Appearance {
            line_color: self.line_color,
            background_color: self.background_color,
            background_enabled: self.background_enabled,
            gradient_type: self.gradient_type,
            start_color: self.start_color,
            end_color: self.end_color,
            gradient_rotation: self.gradient_rotation,
            line_weight: self.line_weight,
            size: self.size,
            blur: self.blur,
            speed: self.speed,
        }
    }

    /// Split into validated parts.
    pub fn into_parts(self) -> Result<(String, Effect, RenderParameters, Appearance), ConfigError> {
        let params = self.params();
        params.validate()?;
        let appearance = self.appearance();
        Ok((self.el, self.effect, params, appearance))
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse and validate a config object. Missing keys take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        if let Some(name) = value.get("effect").and_then(|v| v.as_str()) {
            if Effect::from_name(name).is_none() {
                return Err(ConfigError::Effect(name.to_string()));
            }
        }
        let config: Self = serde_json::from_value(value)?;
        config.params().validate()?;
        debug!(el = %config.el, effect = %config.effect, rings = config.ring_count, "Loaded embed config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ring::render;

    fn tweaked() -> (RenderParameters, Appearance) {
        let params = RenderParameters {
            ring_count: 37,
            base_spacing: 7.25,
            spacing_expansion: -1.3,
            chaos: 2.17,
            chaos_intensity: 3.3,
            ripple_depth: 0.61,
            angular_step: 0.0731,
            gravity_radius: 144.0,
            gravity_speed: 0.033,
            gravity_strength: 1.21,
            mouse_gravity_enabled: false,
            mouse_intensity: 0.19,
            time: 9876.54321,
            seed: 123_456,
            pointer: Point::ORIGIN,
        };
        let appearance = Appearance {
            line_color: Rgb::new(1, 2, 3),
            gradient_type: GradientMode::Radial,
            gradient_rotation: 45.0,
            line_weight: 2.2,
            size: 1.4,
            blur: 0.3,
            speed: 0.011,
            background_enabled: false,
            ..Default::default()
        };
        (params, appearance)
    }

    #[test]
    fn test_round_trip_is_lossless() {
        let (params, appearance) = tweaked();
        let config = EmbedConfig::from_parts("#hero", Effect::RadialField, &params, &appearance);
        let json = config.to_json().unwrap();
        let back = EmbedConfig::from_json(&json).unwrap();
        assert_eq!(back, config);

        let (el, effect, p2, a2) = back.into_parts().unwrap();
        assert_eq!(el, "#hero");
        assert_eq!(effect, Effect::RadialField);
        assert_eq!(p2, params);
        assert_eq!(a2, appearance);
    }

    #[test]
    fn test_round_trip_renders_identically() {
        let (params, appearance) = tweaked();
        let json = EmbedConfig::from_parts("#x", Effect::SignalRings, &params, &appearance)
            .to_json()
            .unwrap();
        let restored = EmbedConfig::from_json(&json).unwrap().params();
        assert_eq!(render(&params).unwrap(), render(&restored).unwrap());
    }

    #[test]
    fn test_keys_are_flat_camel_case() {
        let json = EmbedConfig::default().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let obj = value.as_object().unwrap();
        for key in ["el", "ringCount", "mouseGravityEnabled", "gravityStrength", "lineColor", "gradientType"] {
            assert!(obj.contains_key(key), "missing {}", key);
        }
        assert!(obj.values().all(|v| !v.is_object() && !v.is_array()));
        assert_eq!(obj["lineColor"], "#00C8A0");
    }

    #[test]
    fn test_legacy_aliases_and_defaults() {
        let config = EmbedConfig::from_json(r##"{"el": "#a", "rings": 12, "mouseGravity": false}"##).unwrap();
        assert_eq!(config.ring_count, 12);
        assert!(!config.mouse_gravity_enabled);
        assert_eq!(config.chaos, RenderParameters::default().chaos);
        assert_eq!(config.effect, Effect::SignalRings);
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(matches!(
            EmbedConfig::from_json(r##"{"lineColor": "teal"}"##),
            Err(ConfigError::Json(_))
        ));
        assert!(matches!(
            EmbedConfig::from_json(r#"{"effect": "plasma"}"#),
            Err(ConfigError::Effect(_))
        ));
        assert!(matches!(
            EmbedConfig::from_json(r#"{"angularStep": 0}"#),
            Err(ConfigError::Render(_))
        ));
        assert!(matches!(
            EmbedConfig::from_json(r#"{"angularStep": 1e-300}"#),
            Err(ConfigError::Render(_))
        ));
        assert!(matches!(EmbedConfig::from_json("{"), Err(ConfigError::Json(_))));
    }
}
