//! Render parameters - one immutable snapshot per frame

use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

use super::error::RenderError;
use super::noise::DEFAULT_SEED;

/// Radius of the innermost ring
pub const INNER_RADIUS: f64 = 50.0;
/// Fraction of `spacing_expansion` applied to the base spacing
pub const SPACING_EXPANSION_RATE: f64 = 0.15;

/// Upper bound on vertices per ring; finer steps are rejected
pub const MAX_POINTS_PER_RING: usize = 1 << 20;

/// Angular step range covered by the detail slider (coarse to fine)
const DETAIL_COARSE_STEP: f64 = 0.12;
const DETAIL_FINE_STEP: f64 = 0.02;

/// 2D point in ring space (origin at the canvas centre)
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Point) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    pub fn scaled(self, factor: f64) -> Self {
        Self::new(self.x * factor, self.y * factor)
    }
}

/// Everything the ring renderer needs to produce one frame
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderParameters {
    /// Number of concentric rings. Negative counts are rejected at render time.
    pub ring_count: i32,
    pub base_spacing: f64,
    pub spacing_expansion: f64,
    pub chaos: f64,
    pub chaos_intensity: f64,
    pub ripple_depth: f64,
    /// Angular sampling resolution in radians
    pub angular_step: f64,
    pub gravity_radius: f64,
    pub gravity_speed: f64,
    pub gravity_strength: f64,
    pub mouse_gravity_enabled: bool,
    pub mouse_intensity: f64,
    /// Animation clock, advanced by the caller between frames
    pub time: f64,
    /// Noise lattice seed
    pub seed: u32,
    /// Pointer position in ring space. Runtime-only.
    #[serde(skip)]
    pub pointer: Point,
}

impl Default for RenderParameters {
    fn default() -> Self {
        Self {
            ring_count: 60,
            base_spacing: 6.0,
            spacing_expansion: 0.0,
            chaos: 0.8,
            chaos_intensity: 1.2,
            ripple_depth: 1.2,
            angular_step: angular_step_for_detail(0.7),
            gravity_radius: 100.0,
            gravity_speed: 0.01,
            gravity_strength: 0.4,
            mouse_gravity_enabled: true,
            mouse_intensity: 0.5,
            time: 0.0,
            seed: DEFAULT_SEED,
            pointer: Point::ORIGIN,
        }
    }
}

impl RenderParameters {
    /// Check the constraints the renderer cannot degrade around.
    pub fn validate(&self) -> Result<(), RenderError> {
        if self.ring_count < 0 {
            return Err(RenderError::invalid(
                "ringCount",
                format!("must be >= 0, got {}", self.ring_count),
            ));
        }
        if !(self.angular_step.is_finite() && self.angular_step > 0.0) {
            return Err(RenderError::invalid(
                "angularStep",
                format!("must be a finite value > 0, got {}", self.angular_step),
            ));
        }
        let points = (TAU / self.angular_step).ceil();
        if !points.is_finite() || points > MAX_POINTS_PER_RING as f64 {
            return Err(RenderError::invalid(
                "angularStep",
                format!(
                    "{} gives more than {} points per ring",
                    self.angular_step, MAX_POINTS_PER_RING
                ),
            ));
        }
        Ok(())
    }

    /// Number of rings to produce (assumes `validate` passed)
    pub fn rings(&self) -> usize {
        self.ring_count.max(0) as usize
    }

    /// Radial gap between successive rings
    pub fn effective_spacing(&self) -> f64 {
        self.base_spacing * (1.0 + self.spacing_expansion * SPACING_EXPANSION_RATE)
    }

    /// Undistorted radius of ring `i`
    pub fn base_radius(&self, i: usize) -> f64 {
        INNER_RADIUS + i as f64 * self.effective_spacing()
    }

    /// Vertices per ring: `ceil(2π / angular_step)`
    pub fn points_per_ring(&self) -> usize {
        (TAU / self.angular_step).ceil() as usize
    }

    /// Position of the orbiting attractor at the current time
    pub fn attractor(&self) -> Point {
        let phase = self.time * self.gravity_speed;
        Point::new(
            phase.cos() * self.gravity_radius,
            phase.sin() * self.gravity_radius,
        )
    }
}

/// Map the panel's detail level (0 = coarse, 1 = fine) to an angular step.
pub fn angular_step_for_detail(detail: f64) -> f64 {
    let d = detail.clamp(0.0, 1.0);
    DETAIL_COARSE_STEP + (DETAIL_FINE_STEP - DETAIL_COARSE_STEP) * d
}

/// Inverse of [`angular_step_for_detail`], clamped to `[0, 1]`.
pub fn detail_for_angular_step(step: f64) -> f64 {
    ((step - DETAIL_COARSE_STEP) / (DETAIL_FINE_STEP - DETAIL_COARSE_STEP)).clamp(0.0, 1.0)
}
