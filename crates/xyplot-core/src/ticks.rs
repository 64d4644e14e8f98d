// File: crates/xyplot-core/src/ticks.rs
// Summary: Axes/tic polyline in surface space and formatted tic labels.

use crate::axis::{axis_or_default, AxisKey, AxisParameters};
use crate::format::NumberFormat;
use crate::geometry::Point;
use crate::plot::PlotData;
use crate::settings::PlotSettings;
use crate::types::SurfaceSize;

/// Label values closer to zero than this print as `0`.
pub const TINY: f64 = 1e-15;

/// `n` evenly spaced values from `start` to `end`, endpoints exact.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    if n < 2 {
        return vec![start, end];
    }
    let last = (n - 1) as f64;
    (0..n).map(|i| if i + 1 == n { end } else { start + (end - start) * i as f64 / last }).collect()
}

#[inline]
fn zero_if_tiny(v: f64) -> f64 { if v.abs() > TINY { v } else { 0.0 } }

/// The `major_tics + 1` labeled values from `min` to `max`, ascending.
pub fn tic_values(axis: &AxisParameters) -> Vec<f64> {
    linspace(axis.min, axis.max, axis.major() + 1).into_iter().map(zero_if_tiny).collect()
}

pub fn axis_labels(axis: &AxisParameters, format: &NumberFormat) -> Vec<String> {
    tic_values(axis).into_iter().map(|v| format.format(v)).collect()
}

/// Labels for every drawn axis, ascending by value. `s` is empty without a secondary axis.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlotLabels {
    pub x: Vec<String>,
    pub y: Vec<String>,
    pub s: Vec<String>,
}

impl PlotLabels {
    pub fn for_plot(data: &PlotData) -> Self {
        let settings = &data.settings;
        let format = settings.number_format();
        let labels = |key| axis_labels(&axis_or_default(settings, key), &format);
        Self {
            x: labels(AxisKey::X),
            y: labels(AxisKey::Y),
            s: if data.show_secondary() { labels(AxisKey::Secondary) } else { Vec::new() },
        }
    }
}

/// Tic counts of one side of the frame.
#[derive(Clone, Copy, Debug)]
struct Side {
    from: Point,
    to: Point,
    /// Unit vector pointing into the plot area.
    inward: Point,
    major: usize,
    minor: usize,
}

impl Side {
    fn tic_count(&self) -> usize { self.major.saturating_mul(self.minor.saturating_add(1)) }

    fn walk(&self, out: &mut Vec<Point>, minor_len: f64, major_len: f64) {
        let steps = (self.major * self.minor) as f64;
        let at = |i: usize| {
            let t = i as f64 / steps;
            Point::new(self.from.x + (self.to.x - self.from.x) * t, self.from.y + (self.to.y - self.from.y) * t)
        };
        let mut tic = |cur: Point, len: f64| {
            out.push(cur);
            out.push(Point::new(cur.x + self.inward.x * len, cur.y + self.inward.y * len));
            out.push(cur);
        };
        for j in 0..self.major {
            for m in 0..self.minor {
                tic(at(j * self.minor + m), minor_len);
            }
            tic(at((j + 1) * self.minor), major_len);
        }
    }
}

/// The frame with tic marks as one continuous polyline.
///
/// Runs bottom (left to right), right (up), top (right to left), left (down);
/// each tic contributes three points: the frame point, the tic end, the frame
/// point again. Tic lengths are `size_minor`/`size_major` times the surface
/// diagonal. The right side uses the secondary axis counts when it is shown.
pub fn tic_polyline(settings: &PlotSettings, show_secondary: bool, size: SurfaceSize) -> Vec<Point> {
    let (w, h) = (size.width, size.height);
    let x = axis_or_default(settings, AxisKey::X);
    let y = axis_or_default(settings, AxisKey::Y);
    let right = if show_secondary { axis_or_default(settings, AxisKey::Secondary) } else { y.clone() };

    let sides = [
        Side { from: Point::new(0.0, h), to: Point::new(w, h), inward: Point::new(0.0, -1.0), major: x.major(), minor: x.minor() },
        Side { from: Point::new(w, h), to: Point::new(w, 0.0), inward: Point::new(-1.0, 0.0), major: right.major(), minor: right.minor() },
        Side { from: Point::new(w, 0.0), to: Point::new(0.0, 0.0), inward: Point::new(0.0, 1.0), major: x.major(), minor: x.minor() },
        Side { from: Point::new(0.0, 0.0), to: Point::new(0.0, h), inward: Point::new(1.0, 0.0), major: y.major(), minor: y.minor() },
    ];

    let diagonal = size.diagonal();
    let minor_len = diagonal * settings.size_minor;
    let major_len = diagonal * settings.size_major;

    let tics = sides.iter().fold(0usize, |n, s| n.saturating_add(s.tic_count()));
    let mut out = Vec::with_capacity(tics.saturating_mul(3));
    for side in &sides {
        side.walk(&mut out, minor_len, major_len);
    }
    out
}
