//! Ring renderer - noise-distorted concentric rings pulled by attractors
//!
//! Each frame is a pure function of [`RenderParameters`]: the noise field is
//! derived from `params.seed`, the attractor orbit and the noise drift are
//! derived from `params.time`.

use std::f64::consts::FRAC_PI_2;
use tracing::trace;

use super::error::RenderError;
use super::noise::NoiseField;
use super::params::{Point, RenderParameters};

/// Denominator floor for the orbiting attractor pull
pub const GRAVITY_FLOOR: f64 = 50.0;
/// Denominator floor for the pointer attractor pull
pub const POINTER_FLOOR: f64 = 150.0;

/// Cap on the up-front ring allocation; larger counts grow on demand
pub(crate) const RING_PREALLOC: usize = 4096;

/// Maximum ripple amplitude in ring-space units (before chaos scaling)
const RIPPLE_AMPLITUDE: f64 = 20.0;
const PRIMARY_WEIGHT: f64 = 0.6;
const SECONDARY_WEIGHT: f64 = 0.4;

// Noise drift per unit of time
const DRIFT_X1: f64 = -0.0036;
const DRIFT_Y1: f64 = 0.0024;
const DRIFT_X2: f64 = 0.0024;
const DRIFT_Y2: f64 = -0.00192;
const DRIFT_Z: f64 = 0.00012;

// Starting offsets keep the two fields far apart in noise space
const ORIGIN_Y1: f64 = 10_000.0;
const ORIGIN_X2: f64 = 20_000.0;
const ORIGIN_Y2: f64 = 30_000.0;

/// One closed polyline. The last point implicitly connects to the first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RingPath {
    pub points: Vec<Point>,
}

impl RingPath {
    pub fn with_capacity(n: usize) -> Self {
        Self {
            points: Vec::with_capacity(n),
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Point> {
        self.points.iter()
    }
}

/// Offsets of the two noise fields at a given time
#[derive(Clone, Copy, Debug)]
struct NoiseDrift {
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    z: f64,
}

impl NoiseDrift {
    fn at(time: f64) -> Self {
        Self {
            x1: DRIFT_X1 * time,
            y1: ORIGIN_Y1 + DRIFT_Y1 * time,
            x2: ORIGIN_X2 + DRIFT_X2 * time,
            y2: ORIGIN_Y2 + DRIFT_Y2 * time,
            z: DRIFT_Z * time,
        }
    }
}

/// Displace `p` toward `target` with inverse-distance pull and a denominator floor.
#[inline]
pub(crate) fn pull_toward(p: Point, target: Point, strength: f64, floor: f64) -> Point {
    let dx = target.x - p.x;
    let dy = target.y - p.y;
    let d = (dx * dx + dy * dy).sqrt();
    let pull = strength / (d + floor);
    Point::new(p.x + dx * pull * floor, p.y + dy * pull * floor)
}

/// Render every ring of one frame.
pub fn render_rings(
    params: &RenderParameters,
    field: &NoiseField,
) -> Result<Vec<RingPath>, RenderError> {
    params.validate()?;

    let rings = params.rings();
    let steps = params.points_per_ring();
    let gravity = params.attractor();
    let drift = NoiseDrift::at(params.time);
    let chaos = RIPPLE_AMPLITUDE * params.chaos * params.chaos_intensity;

    trace!(rings, steps, time = params.time, "Rendering signal rings");

    let mut out = Vec::with_capacity(rings.min(RING_PREALLOC));
    for i in 0..rings {
        let fi = i as f64;
        let base_radius = params.base_radius(i);
        let freq1 = (0.12 * fi + 0.2) * params.ripple_depth;
        let freq2 = (0.1 * fi + 0.15) * params.ripple_depth * 0.8;
        let z1 = drift.z + fi * 0.02;
        let z2 = drift.z * 0.9 + fi * 0.05;

        let mut path = RingPath::with_capacity(steps);
        for k in 0..steps {
            let a = k as f64 * params.angular_step;
            let (sin_a, cos_a) = a.sin_cos();
            let (sin_b, cos_b) = (a + FRAC_PI_2).sin_cos();

            let n1 = field.sample(cos_a * freq1 + drift.x1, sin_a * freq1 + drift.y1, z1);
            let n2 = field.sample(cos_b * freq2 + drift.x2, sin_b * freq2 + drift.y2, z2);
            let combined = n1 * PRIMARY_WEIGHT + n2 * SECONDARY_WEIGHT;

            let radius = base_radius + chaos * combined;
            let mut p = Point::new(radius * cos_a, radius * sin_a);

            p = pull_toward(p, gravity, params.gravity_strength, GRAVITY_FLOOR);
            if params.mouse_gravity_enabled {
                p = pull_toward(p, params.pointer, params.mouse_intensity, POINTER_FLOOR);
            }

            path.points.push(p);
        }
        out.push(path);
    }

    Ok(out)
}

/// Renderer that keeps its noise lattice between frames.
///
/// The lattice is rebuilt only when `params.seed` changes, so output stays
/// identical to [`render_rings`] with a fresh field.
#[derive(Debug, Default)]
pub struct RingRenderer {
    field: NoiseField,
}

impl RingRenderer {
    pub fn new(seed: u32) -> Self {
        Self {
            field: NoiseField::new(seed),
        }
    }

    /// Noise field for `seed`, reusing the cached lattice when it matches.
    pub fn field_for(&mut self, seed: u32) -> &NoiseField {
        if self.field.seed() != seed {
            trace!(seed, "Reseeding noise field");
            self.field = NoiseField::new(seed);
        }
        &self.field
    }

    pub fn render(&mut self, params: &RenderParameters) -> Result<Vec<RingPath>, RenderError> {
        let field = self.field_for(params.seed);
        render_rings(params, field)
    }
}

/// One-shot render with a freshly seeded noise field
pub fn render(params: &RenderParameters) -> Result<Vec<RingPath>, RenderError> {
    render_rings(params, &NoiseField::new(params.seed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::effects::Effect;
    use std::f64::consts::PI;

    fn calm_params() -> RenderParameters {
        RenderParameters {
            ring_count: 1,
            base_spacing: 6.0,
            spacing_expansion: 0.0,
            chaos: 0.0,
            angular_step: PI / 2.0,
            gravity_strength: 0.0,
            mouse_gravity_enabled: false,
            time: 0.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_single_ring_quarter_steps() {
        let rings = render(&calm_params()).unwrap();
        assert_eq!(rings.len(), 1);
        assert_eq!(rings[0].len(), 4);

        for (k, p) in rings[0].iter().enumerate() {
            let r = p.distance(Point::ORIGIN);
            assert!((r - 50.0).abs() < 1e-9, "point {} at radius {}", k, r);
            let expected = k as f64 * PI / 2.0;
            let angle = p.y.atan2(p.x).rem_euclid(2.0 * PI);
            let diff = (angle - expected).abs();
            assert!(diff < 1e-9 || (diff - 2.0 * PI).abs() < 1e-9, "point {} at angle {}", k, angle);
        }
    }

    #[test]
    fn test_counts_match_parameters() {
        for (rings, step) in [(1, 0.05), (7, 0.3), (60, 0.12), (3, 1.0), (2, 7.0)] {
            let params = RenderParameters {
                ring_count: rings,
                angular_step: step,
                ..Default::default()
            };
            let out = render(&params).unwrap();
            let expected = (2.0 * PI / step).ceil() as usize;
            assert_eq!(out.len(), rings as usize);
            for path in &out {
                assert_eq!(path.len(), expected, "step {}", step);
            }
        }
    }

    #[test]
    fn test_zero_rings_is_empty() {
        let params = RenderParameters { ring_count: 0, ..Default::default() };
        assert!(render(&params).unwrap().is_empty());
    }

    #[test]
    fn test_invalid_input_rejected() {
        let negative = RenderParameters { ring_count: -3, ..Default::default() };
        assert!(render(&negative).is_err());

        let zero_step = RenderParameters { angular_step: 0.0, ..Default::default() };
        assert!(render(&zero_step).is_err());
    }

    #[test]
    fn test_idempotent() {
        let params = RenderParameters {
            time: 1234.5,
            pointer: Point::new(30.0, -12.0),
            ..Default::default()
        };
        let a = render(&params).unwrap();
        let b = render(&params).unwrap();
        assert_eq!(a.len(), b.len());
        for (ra, rb) in a.iter().zip(&b) {
            for (pa, pb) in ra.iter().zip(rb.iter()) {
                assert_eq!(pa.x.to_bits(), pb.x.to_bits());
                assert_eq!(pa.y.to_bits(), pb.y.to_bits());
            }
        }
    }

    #[test]
    fn test_cached_renderer_matches_one_shot() {
        let mut renderer = RingRenderer::new(1);
        let params = RenderParameters { seed: 99, ring_count: 5, ..Default::default() };
        assert_eq!(renderer.render(&params).unwrap(), render(&params).unwrap());
    }

    #[test]
    fn test_continuous_in_time() {
        let params = RenderParameters {
            ring_count: 10,
            time: 500.0,
            gravity_speed: 0.05,
            gravity_strength: 2.0,
            chaos: 3.0,
            chaos_intensity: 4.0,
            ..Default::default()
        };
        let later = RenderParameters { time: params.time + 1e-6, ..params.clone() };
        let a = render(&params).unwrap();
        let b = render(&later).unwrap();
        for (ra, rb) in a.iter().zip(&b) {
            for (pa, pb) in ra.iter().zip(rb.iter()) {
                assert!(pa.distance(*pb) < 1e-3, "jump {}", pa.distance(*pb));
            }
        }
    }

    #[test]
    fn test_no_attractors_gives_noise_only_shape() {
        let params = RenderParameters {
            ring_count: 4,
            gravity_strength: 0.0,
            mouse_gravity_enabled: false,
            time: 77.0,
            ..Default::default()
        };
        let field = NoiseField::new(params.seed);
        let drift = NoiseDrift::at(params.time);
        let rings = render_rings(&params, &field).unwrap();

        for (i, path) in rings.iter().enumerate() {
            let fi = i as f64;
            let freq1 = (0.12 * fi + 0.2) * params.ripple_depth;
            let freq2 = (0.1 * fi + 0.15) * params.ripple_depth * 0.8;
            for (k, p) in path.iter().enumerate() {
                let a = k as f64 * params.angular_step;
                let n1 = field.sample(a.cos() * freq1 + drift.x1, a.sin() * freq1 + drift.y1, drift.z + fi * 0.02);
                let b = a + FRAC_PI_2;
                let n2 = field.sample(b.cos() * freq2 + drift.x2, b.sin() * freq2 + drift.y2, drift.z * 0.9 + fi * 0.05);
                let r = params.base_radius(i)
                    + 20.0 * params.chaos * params.chaos_intensity * (0.6 * n1 + 0.4 * n2);
                assert!((p.x - r * a.cos()).abs() < 1e-9);
                assert!((p.y - r * a.sin()).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_tiny_step_is_an_error_not_a_panic() {
        let params = RenderParameters {
            ring_count: 1,
            angular_step: 1e-300,
            ..Default::default()
        };
        assert!(matches!(
            render(&params),
            Err(RenderError::InvalidParameter { name: "angularStep", .. })
        ));
        assert!(Effect::RadialField.render(&params, &NoiseField::default()).is_err());
    }

    #[test]
    fn test_gravity_pulls_toward_attractor() {
        let base = RenderParameters {
            ring_count: 1,
            chaos: 0.0,
            gravity_strength: 0.0,
            gravity_radius: 100.0,
            gravity_speed: 0.0,
            mouse_gravity_enabled: false,
            angular_step: PI / 2.0,
            ..Default::default()
        };
        let pulled = RenderParameters { gravity_strength: 1.0, ..base.clone() };
        let g = pulled.attractor();

        let free = render(&base).unwrap();
        let warped = render(&pulled).unwrap();
        for (pf, pw) in free[0].iter().zip(warped[0].iter()) {
            assert!(pw.distance(g) < pf.distance(g));
        }
    }

    /// Undistorted vertex `k` of a single ring at radius 50.
    fn bare_vertex(k: usize, step: f64) -> (f64, f64) {
        let a = k as f64 * step;
        let (sin_a, cos_a) = a.sin_cos();
        (50.0 * cos_a, 50.0 * sin_a)
    }

    #[test]
    fn test_gravity_pull_exact() {
        let params = RenderParameters {
            ring_count: 1,
            chaos: 0.0,
            angular_step: PI / 2.0,
            gravity_radius: 100.0,
            gravity_speed: 0.3,
            gravity_strength: 0.8,
            mouse_gravity_enabled: false,
            time: 0.0,
            ..Default::default()
        };
        let rings = render(&params).unwrap();

        // At t = 0 the attractor sits at (100, 0)
        let (gx, gy) = (100.0, 0.0);
        for (k, p) in rings[0].iter().enumerate() {
            let (x, y) = bare_vertex(k, params.angular_step);
            let d = ((gx - x) * (gx - x) + (gy - y) * (gy - y)).sqrt();
            let pull = 0.8 / (d + 50.0);
            let ex = x + (gx - x) * pull * 50.0;
            let ey = y + (gy - y) * pull * 50.0;
            assert!((p.x - ex).abs() < 1e-9 && (p.y - ey).abs() < 1e-9, "vertex {}", k);
        }
    }

    #[test]
    fn test_gravity_then_pointer_pull_exact() {
        let params = RenderParameters {
            ring_count: 1,
            chaos: 0.0,
            angular_step: PI / 2.0,
            gravity_radius: 100.0,
            gravity_speed: 0.0,
            gravity_strength: 1.5,
            mouse_gravity_enabled: true,
            mouse_intensity: 0.7,
            pointer: Point::new(-30.0, 20.0),
            time: 0.0,
            ..Default::default()
        };
        let rings = render(&params).unwrap();

        let (gx, gy) = (100.0, 0.0);
        let (px, py) = (-30.0, 20.0);
        for (k, p) in rings[0].iter().enumerate() {
            let (mut x, mut y) = bare_vertex(k, params.angular_step);

            let d = ((gx - x) * (gx - x) + (gy - y) * (gy - y)).sqrt();
            let pull = 1.5 / (d + 50.0);
            x += (gx - x) * pull * 50.0;
            y += (gy - y) * pull * 50.0;

            let md = ((px - x) * (px - x) + (py - y) * (py - y)).sqrt();
            let mpull = 0.7 / (md + 150.0);
            x += (px - x) * mpull * 150.0;
            y += (py - y) * mpull * 150.0;

            assert!((p.x - x).abs() < 1e-9 && (p.y - y).abs() < 1e-9, "vertex {}", k);
        }
    }

    #[test]
    fn test_pointer_at_vertex_is_finite() {
        let params = RenderParameters {
            ring_count: 1,
            chaos: 0.0,
            gravity_strength: 0.0,
            angular_step: PI / 2.0,
            mouse_gravity_enabled: true,
            mouse_intensity: 1.0,
            pointer: Point::new(50.0, 0.0),
            ..Default::default()
        };
        let rings = render(&params).unwrap();
        assert!(rings[0].iter().all(|p| p.x.is_finite() && p.y.is_finite()));
        assert!((rings[0].points[0].x - 50.0).abs() < 1e-9);
    }
}
