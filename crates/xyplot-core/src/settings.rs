// File: crates/xyplot-core/src/settings.rs
// Summary: Global plot configuration (titles, axes, tic sizes, label format, scaling flags, legend).

use serde::{Deserialize, Serialize};

use crate::axis::{AxisKey, AxisParameters};
use crate::format::NumberFormat;
use crate::text::StyledText;
use crate::types::NormPoint;

pub const DEFAULT_SIZE_MINOR: f64 = 0.005;
pub const DEFAULT_SIZE_MAJOR: f64 = 0.01;
pub const DEFAULT_FORMAT: &str = "%g";

/// Plot-wide settings. `s_axis == None` means no secondary axis is configured.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlotSettings {
    pub title: StyledText,
    pub x_axis: Option<AxisParameters>,
    pub y_axis: Option<AxisParameters>,
    pub s_axis: Option<AxisParameters>,
    /// Minor tic length as a fraction of the plot diagonal.
    pub size_minor: f64,
    /// Major tic length as a fraction of the plot diagonal.
    pub size_major: f64,
    /// printf-style label format, see [`NumberFormat`].
    pub format: String,
    pub show_secondary_axis: bool,
    pub auto_scale: bool,
    /// Secondary axis picks its own tic counts instead of sharing the primary's.
    pub independent_tics: bool,
    pub legend_pos: NormPoint,
    pub legend: bool,
    /// Index of the selected line, if any.
    pub selection: Option<usize>,
}

impl Default for PlotSettings {
    fn default() -> Self {
        Self {
            title: StyledText::default(),
            x_axis: Some(AxisParameters::default()),
            y_axis: Some(AxisParameters::default()),
            s_axis: None,
            size_minor: DEFAULT_SIZE_MINOR,
            size_major: DEFAULT_SIZE_MAJOR,
            format: DEFAULT_FORMAT.to_string(),
            show_secondary_axis: false,
            auto_scale: true,
            independent_tics: false,
            legend_pos: NormPoint::default(),
            legend: true,
            selection: None,
        }
    }
}

impl PlotSettings {
    pub fn new() -> Self { Self::default() }

    pub fn with_title(mut self, title: impl Into<StyledText>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_axis(mut self, key: AxisKey, axis: AxisParameters) -> Self {
        *crate::axis::axis_mut(&mut self, key) = Some(axis);
        self
    }

    pub fn with_secondary(mut self, show: bool, independent_tics: bool) -> Self {
        self.show_secondary_axis = show;
        self.independent_tics = independent_tics;
        self
    }

    /// Label formatter; an invalid `format` falls back to `%g`.
    pub fn number_format(&self) -> NumberFormat { NumberFormat::parse_or_default(&self.format) }
}
