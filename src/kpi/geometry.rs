//! Series to chart geometry.
//!
//! Charts draw into a fixed virtual canvas (an SVG `viewBox`), so every
//! function here works in canvas units. Screen Y grows downward: the largest
//! value lands on the smallest `y`.

use std::f64::consts::PI;

/// Numeric range a series is normalised against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Domain {
    pub min: f64,
    pub max: f64,
}

impl Domain {
    pub fn fixed(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Percentage gauges and rates.
    pub fn percent() -> Self {
        Self::fixed(0.0, 100.0)
    }

    /// Min/max over the values. An empty slice gives `[0, 0]`.
    pub fn from_values(values: &[f64]) -> Self {
        Self::spanning(&[values])
    }

    /// Shared domain for several series drawn on one chart (actual vs budget).
    pub fn spanning(series: &[&[f64]]) -> Self {
        let mut values = series.iter().flat_map(|s| s.iter().copied());
        let Some(first) = values.next() else {
            return Self::fixed(0.0, 0.0);
        };
        let (min, max) = values.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v)));
        Self { min, max }
    }

    /// `max - min`, or 1 for a flat domain so normalisation never divides by zero.
    pub fn span(&self) -> f64 {
        let span = self.max - self.min;
        if span == 0.0 {
            1.0
        } else {
            span
        }
    }

    pub fn clamp(&self, value: f64) -> f64 {
        let (lo, hi) = if self.min <= self.max {
            (self.min, self.max)
        } else {
            (self.max, self.min)
        };
        value.clamp(lo, hi)
    }

    /// Position of `value` in the domain, 0 at `min` and 1 at `max`.
    pub fn normalize(&self, value: f64) -> f64 {
        (value - self.min) / self.span()
    }
}

/// Target rectangle in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasRange {
    pub x0: f64,
    pub x1: f64,
    pub y0: f64,
    pub y1: f64,
}

impl CanvasRange {
    pub fn new(x0: f64, x1: f64, y0: f64, y1: f64) -> Self {
        Self { x0, x1, y0, y1 }
    }

    /// Full `width x height` canvas with `padding` on every side.
    pub fn padded(width: f64, height: f64, padding: f64) -> Self {
        Self::new(padding, width - padding, padding, height - padding)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometryPoint {
    pub x: f64,
    pub y: f64,
}

/// Spread `values` evenly across `[x0, x1]` and interpolate them into `[y0, y1]`.
///
/// Fewer than two values cannot describe a trend, so they map to nothing.
/// Values outside `domain` are not clamped and may fall outside the range.
pub fn map_linear(values: &[f64], domain: Domain, range: CanvasRange) -> Vec<GeometryPoint> {
    let n = values.len();
    if n <= 1 {
        return Vec::new();
    }

    let step = (range.x1 - range.x0) / (n - 1) as f64;
    values
        .iter()
        .enumerate()
        .map(|(i, &value)| GeometryPoint {
            x: range.x0 + i as f64 * step,
            y: range.y1 - domain.normalize(value) * (range.y1 - range.y0),
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CircularOptions {
    /// Pin out-of-domain values to the domain edges (an over-100% gauge shows a full ring).
    pub clamp: bool,
}

impl Default for CircularOptions {
    fn default() -> Self {
        Self { clamp: true }
    }
}

/// `stroke-dashoffset` for a radial gauge: `circumference` when empty, 0 when full.
///
/// With `clamp` off the raw ratio is used, so out-of-domain values can give a
/// negative offset or one larger than the circumference.
pub fn map_circular(
    value: f64,
    domain: Domain,
    circumference: f64,
    options: CircularOptions,
) -> f64 {
    let value = if options.clamp {
        domain.clamp(value)
    } else {
        value
    };
    circumference - domain.normalize(value) * circumference
}

pub fn circumference(radius: f64) -> f64 {
    2.0 * PI * radius
}

/// Close a polyline into a polygon against `baseline_y` for gradient fills.
pub fn map_area(points: &[GeometryPoint], baseline_y: f64) -> Vec<GeometryPoint> {
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return Vec::new();
    };

    let mut polygon = Vec::with_capacity(points.len() + 2);
    polygon.extend_from_slice(points);
    polygon.push(GeometryPoint {
        x: last.x,
        y: baseline_y,
    });
    polygon.push(GeometryPoint {
        x: first.x,
        y: baseline_y,
    });
    polygon
}

/// `points` attribute for `<polyline>` / `<polygon>`.
pub fn to_svg_points(points: &[GeometryPoint]) -> String {
    points
        .iter()
        .map(|p| format!("{:.2},{:.2}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}
