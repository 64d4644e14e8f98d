// File: crates/xyplot-core/src/legend.rs
// Summary: Legend contents and drag placement in normalized surface coordinates.

use crate::geometry::{clamp, Point};
use crate::line::LineStyle;
use crate::plot::PlotData;
use crate::shape::PointShape;
use crate::types::{Argb, NormPoint, SurfaceSize};

/// One legend row.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
    /// Index of the line in `plot_lines`.
    pub index: usize,
    pub name: String,
    pub color: Argb,
    pub style: LineStyle,
    pub shape: PointShape,
    pub secondary: bool,
    pub selected: bool,
}

/// Rows for every line that has a legend name, in line order.
pub fn legend_entries(data: &PlotData) -> Vec<LegendEntry> {
    data.plot_lines
        .iter()
        .enumerate()
        .filter_map(|(index, line)| {
            let name = line.legend.as_ref()?;
            Some(LegendEntry {
                index,
                name: name.clone(),
                color: line.line_color,
                style: line.line_style.clone(),
                shape: line.point_shape.clone(),
                secondary: line.secondary,
                selected: data.settings.selection == Some(index),
            })
        })
        .collect()
}

/// Top-left pixel position of the legend for a stored normalized position.
pub fn legend_origin(pos: NormPoint, surface: SurfaceSize) -> Point {
    Point::new(pos.x * surface.width, pos.y * surface.height)
}

/// Tracks one drag gesture of the legend box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LegendDrag {
    start: NormPoint,
    current: NormPoint,
}

impl LegendDrag {
    pub fn begin(start: NormPoint) -> Self { Self { start, current: start } }

    /// Position for a drag `translation` (pixels, relative to the gesture start),
    /// clamped so the legend stays on the surface.
    pub fn update(&mut self, translation: Point, surface: SurfaceSize, legend: SurfaceSize) -> NormPoint {
        let room_x = (surface.width - legend.width).max(0.0);
        let room_y = (surface.height - legend.height).max(0.0);
        let x = clamp(translation.x + self.start.x * surface.width, 0.0, room_x);
        let y = clamp(translation.y + self.start.y * surface.height, 0.0, room_y);
        self.current = NormPoint::new(
            if surface.width > 0.0 { x / surface.width } else { 0.0 },
            if surface.height > 0.0 { y / surface.height } else { 0.0 },
        );
        self.current
    }

    pub fn current(&self) -> NormPoint { self.current }

    /// Finish the gesture, storing the final position in the plot settings.
    pub fn end(self, data: &mut PlotData) -> NormPoint {
        data.settings.legend_pos = self.current;
        self.current
    }
}
