//! SVG drawing surface, used by the CLI to dump frames

use std::fmt::Write;

use super::params::Point;
use super::style::{Rgb, StrokePaint, Surface};

const STROKE_GRADIENT_ID: &str = "stroke";
const BLUR_FILTER_ID: &str = "blur";

/// Accumulates one frame as an SVG document of `width` x `height` pixels.
pub struct SvgSurface {
    width: f64,
    height: f64,
    blur: f64,
    background: Option<Rgb>,
    paint: StrokePaint,
    stroke_width: f64,
    paths: String,
    path_count: usize,
}

impl SvgSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            blur: 0.0,
            background: None,
            paint: StrokePaint::Solid(Rgb::new(255, 255, 255)),
            stroke_width: 1.0,
            paths: String::new(),
            path_count: 0,
        }
    }

    /// Gaussian blur applied to the ring group
    pub fn with_blur(mut self, blur: f64) -> Self {
        self.blur = blur.max(0.0);
        self
    }

    pub fn path_count(&self) -> usize {
        self.path_count
    }

    /// Finish the document.
    pub fn finish(&self) -> String {
        let (w, h) = (self.width, self.height);
        let mut svg = String::with_capacity(self.paths.len() + 1024);

        let _ = writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="{} {} {w} {h}">"#,
            -w / 2.0,
            -h / 2.0,
        );

        let _ = writeln!(svg, "<defs>");
        match &self.paint {
            StrokePaint::Solid(_) => {}
            StrokePaint::LinearGradient { from, to, stops } => {
                let _ = writeln!(
                    svg,
                    r#"<linearGradient id="{STROKE_GRADIENT_ID}" gradientUnits="userSpaceOnUse" x1="{:.3}" y1="{:.3}" x2="{:.3}" y2="{:.3}">"#,
                    from.x, from.y, to.x, to.y
                );
                write_stops(&mut svg, stops);
                let _ = writeln!(svg, "</linearGradient>");
            }
            StrokePaint::RadialGradient { center, radius, stops } => {
                let _ = writeln!(
                    svg,
                    r#"<radialGradient id="{STROKE_GRADIENT_ID}" gradientUnits="userSpaceOnUse" cx="{:.3}" cy="{:.3}" r="{:.3}">"#,
                    center.x, center.y, radius
                );
                write_stops(&mut svg, stops);
                let _ = writeln!(svg, "</radialGradient>");
            }
        }
        if self.blur > 0.0 {
            let _ = writeln!(
                svg,
                r#"<filter id="{BLUR_FILTER_ID}"><feGaussianBlur stdDeviation="{:.3}"/></filter>"#,
                self.blur
            );
        }
        let _ = writeln!(svg, "</defs>");

        if let Some(bg) = self.background {
            let _ = writeln!(
                svg,
                r#"<rect x="{}" y="{}" width="{w}" height="{h}" fill="{}"/>"#,
                -w / 2.0,
                -h / 2.0,
                bg
            );
        }

        let stroke = match &self.paint {
            StrokePaint::Solid(c) => c.to_hex(),
            _ => format!("url(#{STROKE_GRADIENT_ID})"),
        };
        let filter = if self.blur > 0.0 {
            format!(r#" filter="url(#{BLUR_FILTER_ID})""#)
        } else {
            String::new()
        };
        let _ = writeln!(
            svg,
            r#"<g fill="none" stroke="{}" stroke-width="{:.3}" stroke-linejoin="round" stroke-linecap="round"{}>"#,
            stroke, self.stroke_width, filter
        );
        svg.push_str(&self.paths);
        let _ = writeln!(svg, "</g>");
        let _ = write!(svg, "</svg>");
        svg
    }
}

fn write_stops(svg: &mut String, stops: &[Rgb; 2]) {
    let _ = writeln!(svg, r#"<stop offset="0" stop-color="{}"/>"#, stops[0]);
    let _ = writeln!(svg, r#"<stop offset="1" stop-color="{}"/>"#, stops[1]);
}

impl Surface for SvgSurface {
    fn clear(&mut self) {
        self.background = None;
        self.paths.clear();
        self.path_count = 0;
    }

    fn fill_background(&mut self, color: Rgb) {
        self.background = Some(color);
        self.paths.clear();
        self.path_count = 0;
    }

    fn set_stroke(&mut self, paint: StrokePaint) {
        self.paint = paint;
    }

    fn set_stroke_width(&mut self, width: f64) {
        self.stroke_width = width;
    }

    fn draw_closed_polyline(&mut self, points: &[Point]) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        let _ = write!(self.paths, r#"<path d="M{:.3},{:.3}"#, first.x, first.y);
        for p in rest {
            let _ = write!(self.paths, " L{:.3},{:.3}", p.x, p.y);
        }
        let _ = writeln!(self.paths, r#" Z"/>"#);
        self.path_count += 1;
    }
}
