//! Effect registry
//!
//! Effects are selected by name (as written in embed configs) and dispatched
//! through a plain enum.

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::error::RenderError;
use super::noise::NoiseField;
use super::params::{Point, RenderParameters};
use super::ring::{pull_toward, render_rings, RingPath, GRAVITY_FLOOR, RING_PREALLOC};

// Radial field constants
const RADIAL_RIPPLE: f64 = 20.0;
const RADIAL_RING_OFFSET: f64 = 0.1;
const RADIAL_TIME_RATE: f64 = 0.4;

/// Available ring effects
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    /// Two-field noise rings with orbit and pointer attraction
    #[default]
    #[serde(rename = "signalRings")]
    SignalRings,
    /// Single-field rings with orbit attraction only
    #[serde(rename = "radialField")]
    RadialField,
}

impl Effect {
    pub const ALL: &'static [Effect] = &[Effect::SignalRings, Effect::RadialField];

    /// Registry key used in embed configs
    pub fn name(self) -> &'static str {
        match self {
            Self::SignalRings => "signalRings",
            Self::RadialField => "radialField",
        }
    }

    /// Human-readable label for the panel
    pub fn label(self) -> &'static str {
        match self {
            Self::SignalRings => "Signal rings",
            Self::RadialField => "Radial field",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|e| e.name() == name)
    }

    pub fn render(
        self,
        params: &RenderParameters,
        field: &NoiseField,
    ) -> Result<Vec<RingPath>, RenderError> {
        match self {
            Self::SignalRings => render_rings(params, field),
            Self::RadialField => render_radial_field(params, field),
        }
    }
}

impl std::fmt::Display for Effect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Single noise octave blend, no pointer attraction.
fn render_radial_field(
    params: &RenderParameters,
    field: &NoiseField,
) -> Result<Vec<RingPath>, RenderError> {
    params.validate()?;

    let rings = params.rings();
    let steps = params.points_per_ring();
    let gravity = params.attractor();
    let z = params.time * RADIAL_TIME_RATE;

    trace!(rings, steps, time = params.time, "Rendering radial field");

    let mut out = Vec::with_capacity(rings.min(RING_PREALLOC));
    for i in 0..rings {
        let base_radius = params.base_radius(i);
        let ring_offset = i as f64 * RADIAL_RING_OFFSET;
        let points = (0..steps)
            .map(|k| {
                let a = k as f64 * params.angular_step;
                let (sin_a, cos_a) = a.sin_cos();
                let ripple = RADIAL_RIPPLE * params.chaos * field.sample(cos_a + ring_offset, sin_a, z);
                let radius = base_radius + ripple;
                let p = Point::new(radius * cos_a, radius * sin_a);
                pull_toward(p, gravity, params.gravity_strength, GRAVITY_FLOOR)
            })
            .collect();
        out.push(RingPath { points });
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_name() {
        for &effect in Effect::ALL {
            assert_eq!(Effect::from_name(effect.name()), Some(effect));
        }
        assert_eq!(Effect::from_name("spiralGalaxy"), None);
    }

    #[test]
    fn test_every_effect_honors_counts() {
        let params = RenderParameters {
            ring_count: 5,
            angular_step: 0.1,
            ..Default::default()
        };
        let field = NoiseField::new(params.seed);
        for &effect in Effect::ALL {
            let rings = effect.render(&params, &field).unwrap();
            assert_eq!(rings.len(), 5, "{}", effect);
            assert!(rings.iter().all(|r| r.len() == 63), "{}", effect);
        }
    }

    #[test]
    fn test_every_effect_validates() {
        let params = RenderParameters { angular_step: -1.0, ..Default::default() };
        let field = NoiseField::default();
        for &effect in Effect::ALL {
            assert!(effect.render(&params, &field).is_err(), "{}", effect);
        }
    }

    #[test]
    fn test_radial_field_ignores_pointer() {
        let field = NoiseField::default();
        let params = RenderParameters { ring_count: 3, ..Default::default() };
        let moved = RenderParameters { pointer: Point::new(200.0, 40.0), ..params.clone() };
        assert_eq!(
            Effect::RadialField.render(&params, &field).unwrap(),
            Effect::RadialField.render(&moved, &field).unwrap()
        );
    }

    #[test]
    fn test_serde_uses_registry_names() {
        let json = serde_json::to_string(&Effect::RadialField).unwrap();
        assert_eq!(json, "\"radialField\"");
        let back: Effect = serde_json::from_str("\"signalRings\"").unwrap();
        assert_eq!(back, Effect::SignalRings);
    }
}
