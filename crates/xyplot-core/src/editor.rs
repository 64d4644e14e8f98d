// File: crates/xyplot-core/src/editor.rs
// Summary: Settings-editor model: text drafts of axis fields, toggle side effects, commit.

use tracing::debug;

use crate::axis::{AxisKey, AxisParameters, DEFAULT_MAJOR_TICS, DEFAULT_MINOR_TICS, MAX_TICS};
use crate::nice::{adjust_axis, AxisScale};
use crate::plot::PlotData;
use crate::settings::PlotSettings;

fn parse_value(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

fn parse_tics(text: &str) -> Option<usize> {
    text.trim().parse::<usize>().ok().filter(|n| (1..=MAX_TICS).contains(n))
}

/// Editable text for one axis. `from` is the axis as it was when editing began.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisDraft {
    pub from: Option<AxisParameters>,
    pub min: String,
    pub max: String,
    pub major_tics: String,
    pub minor_tics: String,
}

impl AxisDraft {
    pub fn new(axis: Option<&AxisParameters>) -> Self {
        Self {
            from: axis.cloned(),
            min: axis.map_or(0.0, |a| a.min).to_string(),
            max: axis.map_or(1.0, |a| a.max).to_string(),
            major_tics: axis.map_or(DEFAULT_MAJOR_TICS, |a| a.major_tics).to_string(),
            minor_tics: axis.map_or(DEFAULT_MINOR_TICS, |a| a.minor_tics).to_string(),
        }
    }

    /// The edited axis. Fields whose text does not parse keep their previous
    /// value; an axis that was absent stays absent.
    pub fn axis_parameters(&self) -> Option<AxisParameters> {
        let mut axis = self.from.clone()?;
        if let Some(v) = parse_value(&self.min) { axis.min = v; }
        if let Some(v) = parse_value(&self.max) { axis.max = v; }
        if let Some(n) = parse_tics(&self.major_tics) { axis.major_tics = n; }
        if let Some(n) = parse_tics(&self.minor_tics) { axis.minor_tics = n; }
        Some(axis)
    }

    /// Current range, unparsable text falling back to the previous value (or `[0,1]`).
    fn range(&self) -> (f64, f64) {
        let base = self.from.clone().unwrap_or_default();
        (parse_value(&self.min).unwrap_or(base.min), parse_value(&self.max).unwrap_or(base.max))
    }

    fn set_range(&mut self, scale: &AxisScale) {
        self.min = scale.min.to_string();
        self.max = scale.max.to_string();
    }

    fn set_tics(&mut self, scale: &AxisScale) {
        self.major_tics = scale.major_tics.to_string();
        self.minor_tics = scale.minor_tics.to_string();
    }
}

/// Working copy of a plot's settings while the user edits them.
///
/// Nothing reaches the plot until [`commit`](Self::commit); dropping the
/// editor cancels.
#[derive(Clone, Debug, PartialEq)]
pub struct SettingsEditor {
    pub settings: PlotSettings,
    pub x: AxisDraft,
    pub y: AxisDraft,
    pub s: AxisDraft,
}

impl SettingsEditor {
    pub fn from_data(data: &PlotData) -> Self {
        let settings = data.settings.clone();
        Self {
            x: AxisDraft::new(settings.x_axis.as_ref()),
            y: AxisDraft::new(settings.y_axis.as_ref()),
            s: AxisDraft::new(settings.s_axis.as_ref()),
            settings,
        }
    }

    pub fn draft_mut(&mut self, key: AxisKey) -> &mut AxisDraft {
        match key {
            AxisKey::X => &mut self.x,
            AxisKey::Y => &mut self.y,
            AxisKey::Secondary => &mut self.s,
        }
    }

    /// Whether the min/max fields of `key` accept input.
    pub fn range_editable(&self, key: AxisKey) -> bool {
        match key {
            AxisKey::Secondary => !self.settings.auto_scale && self.settings.show_secondary_axis,
            _ => !self.settings.auto_scale,
        }
    }

    /// Whether the tic-count fields of `key` accept input.
    pub fn tics_editable(&self, key: AxisKey) -> bool {
        match key {
            AxisKey::Secondary => self.range_editable(key) && self.settings.independent_tics,
            _ => !self.settings.auto_scale,
        }
    }

    pub fn set_auto_scale(&mut self, on: bool) { self.settings.auto_scale = on; }

    pub fn set_legend(&mut self, on: bool) { self.settings.legend = on; }

    /// Toggle the secondary axis. With auto-scale off, switching it off folds
    /// the s range into y (shared tics) or rescales s alone (independent tics).
    pub fn set_show_secondary(&mut self, on: bool) {
        self.settings.show_secondary_axis = on;
        if self.settings.auto_scale || on {
            return;
        }
        if self.settings.independent_tics {
            let (lo, hi) = self.s.range();
            let scale = adjust_axis(lo, hi);
            self.s.set_range(&scale);
            self.s.set_tics(&scale);
        } else {
            let (y_lo, y_hi) = self.y.range();
            let (s_lo, s_hi) = self.s.range();
            let scale = adjust_axis(y_lo.min(s_lo), y_hi.max(s_hi));
            self.y.set_range(&scale);
            self.s.set_range(&scale);
            self.y.set_tics(&scale);
        }
        debug!(y = ?self.y, s = ?self.s, "secondary axis folded");
    }

    /// Toggle independent secondary tics. With auto-scale off, switching it on
    /// rescales s when the secondary axis shows, otherwise copies y's tic counts.
    pub fn set_independent_tics(&mut self, on: bool) {
        self.settings.independent_tics = on;
        if self.settings.auto_scale || !on {
            return;
        }
        if self.settings.show_secondary_axis {
            let (lo, hi) = self.s.range();
            let scale = adjust_axis(lo, hi);
            self.s.set_range(&scale);
            self.s.set_tics(&scale);
        } else {
            self.s.major_tics = self.y.major_tics.clone();
            self.s.minor_tics = self.y.minor_tics.clone();
        }
    }

    /// Write the edited settings back into `data` and rescale.
    pub fn commit(mut self, data: &mut PlotData) {
        self.settings.x_axis = self.x.axis_parameters();
        self.settings.y_axis = self.y.axis_parameters();
        self.settings.s_axis = self.s.axis_parameters();
        data.settings = self.settings;
        data.scale_axes();
    }
}
