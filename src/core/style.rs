//! Stroke styling and the abstract drawing surface

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::trace;

use super::error::ConfigError;
use super::params::Point;
use super::ring::RingPath;

/// Opaque sRGB colour, `#RRGGBB` on the wire
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || ConfigError::Color(s.to_string());
        let hex = s.strip_prefix('#').ok_or_else(bad)?;
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(bad());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| bad());
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl TryFrom<String> for Rgb {
    type Error = ConfigError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Rgb> for String {
    fn from(c: Rgb) -> Self {
        c.to_hex()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// How the ring stroke is coloured
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GradientMode {
    #[default]
    Solid,
    Linear,
    Radial,
}

impl GradientMode {
    pub const ALL: &'static [GradientMode] =
        &[GradientMode::Solid, GradientMode::Linear, GradientMode::Radial];

    pub fn label(self) -> &'static str {
        match self {
            Self::Solid => "Solid",
            Self::Linear => "Linear",
            Self::Radial => "Radial",
        }
    }
}

/// Visual settings that do not affect ring geometry
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appearance {
    pub line_color: Rgb,
    pub background_color: Rgb,
    pub background_enabled: bool,
    pub gradient_type: GradientMode,
    pub start_color: Rgb,
    pub end_color: Rgb,
    /// Linear gradient rotation in degrees
    pub gradient_rotation: f64,
    pub line_weight: f64,
    /// Uniform scale applied to ring coordinates
    pub size: f64,
    /// Canvas blur radius in pixels
    pub blur: f64,
    /// Clock rate (see `FrameClock`)
    pub speed: f64,
}

impl Default for Appearance {
    fn default() -> Self {
        Self {
            line_color: Rgb::new(0x00, 0xC8, 0xA0),
            background_color: Rgb::new(0x20, 0x23, 0x24),
            background_enabled: true,
            gradient_type: GradientMode::Solid,
            start_color: Rgb::new(0x00, 0xC8, 0xA0),
            end_color: Rgb::new(0xFF, 0x00, 0x80),
            gradient_rotation: 0.0,
            line_weight: 1.5,
            size: 1.0,
            blur: 0.0,
            speed: super::clock::DEFAULT_SPEED,
        }
    }
}

/// Resolved stroke colour, in centred pixel coordinates
#[derive(Clone, Debug, PartialEq)]
pub enum StrokePaint {
    Solid(Rgb),
    LinearGradient { from: Point, to: Point, stops: [Rgb; 2] },
    RadialGradient { center: Point, radius: f64, stops: [Rgb; 2] },
}

impl StrokePaint {
    /// Colour at `p`, linearly interpolated between the two stops.
    pub fn color_at(&self, p: Point) -> Rgb {
        match self {
            Self::Solid(c) => *c,
            Self::LinearGradient { from, to, stops } => {
                let (dx, dy) = (to.x - from.x, to.y - from.y);
                let len2 = dx * dx + dy * dy;
                let t = if len2 > 0.0 {
                    ((p.x - from.x) * dx + (p.y - from.y) * dy) / len2
                } else {
                    0.0
                };
                mix(stops[0], stops[1], t)
            }
            Self::RadialGradient { center, radius, stops } => {
                let t = if *radius > 0.0 { p.distance(*center) / radius } else { 0.0 };
                mix(stops[0], stops[1], t)
            }
        }
    }
}

fn mix(a: Rgb, b: Rgb, t: f64) -> Rgb {
    let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
    let lerp = |x: u8, y: u8| (x as f64 + (y as f64 - x as f64) * t).round() as u8;
    Rgb::new(lerp(a.r, b.r), lerp(a.g, b.g), lerp(a.b, b.b))
}

impl Appearance {
    /// Resolve the stroke for a canvas of `width` x `height` pixels.
    ///
    /// Gradient geometry scales with `size`, like the rings it colours.
    pub fn stroke_paint(&self, width: f64, height: f64) -> StrokePaint {
        let scale = self.size;
        let stops = [self.start_color, self.end_color];
        match self.gradient_type {
            GradientMode::Solid => StrokePaint::Solid(self.line_color),
            GradientMode::Linear => {
                let angle = self.gradient_rotation.to_radians();
                let (hw, hh) = (width / 2.0 * scale, height / 2.0 * scale);
                StrokePaint::LinearGradient {
                    from: Point::new(-hw * angle.cos(), -hh * angle.sin()),
                    to: Point::new(hw * angle.cos(), hh * angle.sin()),
                    stops,
                }
            }
            GradientMode::Radial => StrokePaint::RadialGradient {
                center: Point::ORIGIN,
                radius: width.max(height) / 2.0 * scale,
                stops,
            },
        }
    }
}

/// 2D drawing target. Coordinates are centred on the canvas.
pub trait Surface {
    /// Make the canvas fully transparent
    fn clear(&mut self);
    fn fill_background(&mut self, color: Rgb);
    fn set_stroke(&mut self, paint: StrokePaint);
    fn set_stroke_width(&mut self, width: f64);
    fn draw_closed_polyline(&mut self, points: &[Point]);
}

/// Draw one frame of rings onto `surface`.
pub fn draw_frame<S: Surface + ?Sized>(
    surface: &mut S,
    appearance: &Appearance,
    rings: &[RingPath],
    width: f64,
    height: f64,
) {
    if appearance.background_enabled {
        surface.fill_background(appearance.background_color);
    } else {
        surface.clear();
    }

    surface.set_stroke(appearance.stroke_paint(width, height));
    surface.set_stroke_width(appearance.line_weight);

    trace!(rings = rings.len(), size = appearance.size, "Drawing frame");

    let mut scaled = Vec::new();
    for ring in rings {
        if ring.is_empty() {
            continue;
        }
        scaled.clear();
        scaled.extend(ring.iter().map(|p| p.scaled(appearance.size)));
        surface.draw_closed_polyline(&scaled);
    }
}
