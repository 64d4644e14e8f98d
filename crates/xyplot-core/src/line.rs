// File: crates/xyplot-core/src/line.rs
// Summary: Line series model: points plus stroke color, stroke style, marker and axis routing.

use serde::{Deserialize, Serialize};

use crate::shape::PointShape;
use crate::types::{Argb, PlotPoint};

/// Stroke end style. Serialized as its integer code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub enum LineCap {
    #[default]
    Butt,
    Round,
    Square,
}

impl From<i32> for LineCap {
    fn from(code: i32) -> Self {
        match code {
            1 => LineCap::Round,
            2 => LineCap::Square,
            _ => LineCap::Butt,
        }
    }
}

impl From<LineCap> for i32 {
    fn from(cap: LineCap) -> Self {
        match cap {
            LineCap::Butt => 0,
            LineCap::Round => 1,
            LineCap::Square => 2,
        }
    }
}

/// Stroke corner style. Serialized as its integer code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub enum LineJoin {
    #[default]
    Miter,
    Round,
    Bevel,
}

impl From<i32> for LineJoin {
    fn from(code: i32) -> Self {
        match code {
            1 => LineJoin::Round,
            2 => LineJoin::Bevel,
            _ => LineJoin::Miter,
        }
    }
}

impl From<LineJoin> for i32 {
    fn from(join: LineJoin) -> Self {
        match join {
            LineJoin::Miter => 0,
            LineJoin::Round => 1,
            LineJoin::Bevel => 2,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LineStyle {
    pub line_width: f64,
    pub line_cap: LineCap,
    pub line_join: LineJoin,
    pub miter_limit: f64,
    /// Alternating on/off lengths in pixels; empty means solid.
    pub dash: Vec<f64>,
    pub dash_phase: f64,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            line_width: 2.0,
            line_cap: LineCap::Butt,
            line_join: LineJoin::Miter,
            miter_limit: 10.0,
            dash: Vec::new(),
            dash_phase: 0.0,
        }
    }
}

impl LineStyle {
    pub fn solid(width: f64) -> Self { Self { line_width: width, ..Self::default() } }

    pub fn dashed(width: f64, dash: impl Into<Vec<f64>>) -> Self {
        Self { line_width: width, dash: dash.into(), ..Self::default() }
    }

    /// A dash pattern is usable when it has positive total length and no negative entries.
    pub fn is_dashed(&self) -> bool {
        !self.dash.is_empty()
            && self.dash.iter().all(|d| d.is_finite() && *d >= 0.0)
            && self.dash.iter().sum::<f64>() > 0.0
    }
}

/// One plotted series.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlotLine {
    #[serde(default)]
    pub values: Vec<PlotPoint>,
    #[serde(default = "default_line_color")]
    pub line_color: Argb,
    #[serde(default)]
    pub line_style: LineStyle,
    #[serde(default = "hidden_marker")]
    pub point_shape: PointShape,
    /// Routes the line to the secondary axis when one is shown.
    #[serde(default)]
    pub secondary: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legend: Option<String>,
}

fn default_line_color() -> Argb { Argb::BLACK }

fn hidden_marker() -> PointShape { PointShape::default().with_color(Argb::CLEAR) }

impl Default for PlotLine {
    fn default() -> Self {
        Self {
            values: Vec::new(),
            line_color: default_line_color(),
            line_style: LineStyle::default(),
            point_shape: hidden_marker(),
            secondary: false,
            legend: None,
        }
    }
}

impl PlotLine {
    pub fn new() -> Self { Self::default() }

    pub fn from_points<P: Into<PlotPoint>>(points: impl IntoIterator<Item = P>) -> Self {
        Self { values: points.into_iter().map(Into::into).collect(), ..Self::default() }
    }

    pub fn with_color(mut self, color: Argb) -> Self { self.line_color = color; self }
    pub fn with_style(mut self, style: LineStyle) -> Self { self.line_style = style; self }
    pub fn with_marker(mut self, shape: PointShape) -> Self { self.point_shape = shape; self }
    pub fn on_secondary(mut self, secondary: bool) -> Self { self.secondary = secondary; self }

    pub fn with_legend(mut self, name: impl Into<String>) -> Self {
        self.legend = Some(name.into());
        self
    }

    pub fn append(&mut self, point: impl Into<PlotPoint>) { self.values.push(point.into()); }

    pub fn clear(&mut self) { self.values.clear(); }

    pub fn len(&self) -> usize { self.values.len() }

    pub fn is_empty(&self) -> bool { self.values.is_empty() }

    /// Marker color; clear means markers are not drawn.
    pub fn point_color(&self) -> Argb { self.point_shape.color }
}
