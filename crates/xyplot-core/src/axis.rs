// File: crates/xyplot-core/src/axis.rs
// Summary: Axis model (extent, tic counts, title, visibility) and explicit per-axis accessors.

use serde::{Deserialize, Serialize};

use crate::nice::AxisScale;
use crate::settings::PlotSettings;
use crate::text::StyledText;

pub const DEFAULT_MAJOR_TICS: usize = 10;
pub const DEFAULT_MINOR_TICS: usize = 5;
/// Largest tic count accepted from the editor or used for geometry.
pub const MAX_TICS: usize = 1000;

/// Which of the three axes an operation addresses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AxisKey {
    X,
    Y,
    /// Secondary (right-hand) Y axis.
    Secondary,
}

impl AxisKey {
    pub fn name(self) -> &'static str {
        match self {
            AxisKey::X => "x",
            AxisKey::Y => "y",
            AxisKey::Secondary => "s",
        }
    }
}

/// Extent, tic counts, title and visibility of one axis.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AxisParameters {
    pub min: f64,
    pub max: f64,
    pub major_tics: usize,
    pub minor_tics: usize,
    pub title: StyledText,
    pub show: bool,
}

impl Default for AxisParameters {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 1.0,
            major_tics: DEFAULT_MAJOR_TICS,
            minor_tics: DEFAULT_MINOR_TICS,
            title: StyledText::default(),
            show: true,
        }
    }
}

impl AxisParameters {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max, ..Self::default() }
    }

    pub fn with_title(mut self, title: impl Into<StyledText>) -> Self {
        self.title = title.into();
        self
    }

    #[inline]
    pub fn span(&self) -> f64 { self.max - self.min }

    /// Overwrite only the numeric fields; title and `show` are preserved.
    pub fn apply_scale(&mut self, scale: &AxisScale) {
        self.min = scale.min;
        self.max = scale.max;
        self.major_tics = scale.major_tics;
        self.minor_tics = scale.minor_tics;
    }

    pub fn scale(&self) -> AxisScale {
        AxisScale { min: self.min, max: self.max, major_tics: self.major_tics, minor_tics: self.minor_tics }
    }

    /// Major tics clamped to `1..=MAX_TICS`, for geometry that divides by it.
    pub fn major(&self) -> usize { self.major_tics.clamp(1, MAX_TICS) }
    /// Minor tics clamped to `1..=MAX_TICS`.
    pub fn minor(&self) -> usize { self.minor_tics.clamp(1, MAX_TICS) }
}

pub fn axis_ref(settings: &PlotSettings, key: AxisKey) -> Option<&AxisParameters> {
    match key {
        AxisKey::X => settings.x_axis.as_ref(),
        AxisKey::Y => settings.y_axis.as_ref(),
        AxisKey::Secondary => settings.s_axis.as_ref(),
    }
}

pub fn axis_mut(settings: &mut PlotSettings, key: AxisKey) -> &mut Option<AxisParameters> {
    match key {
        AxisKey::X => &mut settings.x_axis,
        AxisKey::Y => &mut settings.y_axis,
        AxisKey::Secondary => &mut settings.s_axis,
    }
}

/// The axis if configured, otherwise the default `[0,1]` axis.
pub fn axis_or_default(settings: &PlotSettings, key: AxisKey) -> AxisParameters {
    axis_ref(settings, key).cloned().unwrap_or_default()
}

/// Title of the axis, or empty text when the axis is absent.
pub fn axis_title(settings: &PlotSettings, key: AxisKey) -> StyledText {
    axis_ref(settings, key).map(|a| a.title.clone()).unwrap_or_default()
}

/// Set the title of a configured axis. Returns `false` (and changes nothing)
/// when the axis is absent.
pub fn set_axis_title(settings: &mut PlotSettings, key: AxisKey, title: StyledText) -> bool {
    match axis_mut(settings, key) {
        Some(axis) => {
            axis.title = title;
            true
        }
        None => false,
    }
}
