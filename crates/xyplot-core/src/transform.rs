// File: crates/xyplot-core/src/transform.rs
// Summary: Data-space to surface-space projection (origin top-left, y growing downward).

use crate::axis::{axis_or_default, AxisKey};
use crate::geometry::Point;
use crate::line::PlotLine;
use crate::plot::PlotData;
use crate::settings::PlotSettings;
use crate::types::{PlotPoint, SurfaceSize};

/// Axis ranges resolved once per redraw.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projection {
    pub size: SurfaceSize,
    x: (f64, f64),
    y: (f64, f64),
    s: (f64, f64),
}

impl Projection {
    /// `show_secondary` selects whether secondary lines use the s axis or share y.
    pub fn new(settings: &PlotSettings, show_secondary: bool, size: SurfaceSize) -> Self {
        let range = |key| {
            let a = axis_or_default(settings, key);
            (a.min, a.max)
        };
        let y = range(AxisKey::Y);
        let s = if show_secondary { range(AxisKey::Secondary) } else { y };
        Self { size, x: range(AxisKey::X), y, s }
    }

    pub fn for_plot(data: &PlotData, size: SurfaceSize) -> Self {
        Self::new(&data.settings, data.show_secondary(), size)
    }

    /// Project one point. Degenerate axes or non-finite results give the origin.
    pub fn project(&self, point: &PlotPoint, secondary: bool) -> Point {
        let (x_min, x_max) = self.x;
        let (y_min, y_max) = if secondary { self.s } else { self.y };
        let dx = x_max - x_min;
        let dy = y_max - y_min;
        if dx == 0.0 || dy == 0.0 {
            return Point::ORIGIN;
        }
        let p = Point::new(
            self.size.width * (point.x - x_min) / dx,
            self.size.height * (1.0 - (point.y - y_min) / dy),
        );
        if p.is_finite() { p } else { Point::ORIGIN }
    }

    pub fn project_line(&self, line: &PlotLine) -> Vec<Point> {
        line.values.iter().map(|p| self.project(p, line.secondary)).collect()
    }

    /// True when `p` lies on or inside the surface bounds.
    pub fn in_bounds(&self, p: Point) -> bool {
        (0.0..=self.size.width).contains(&p.x) && (0.0..=self.size.height).contains(&p.y)
    }
}

/// Project a single point of `line` onto a surface of `size`.
pub fn project(point: &PlotPoint, line: &PlotLine, size: SurfaceSize, settings: &PlotSettings, show_secondary: bool) -> Point {
    Projection::new(settings, show_secondary, size).project(point, line.secondary)
}
