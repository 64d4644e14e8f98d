// File: crates/xyplot-core/src/plot.rs
// Summary: PlotData aggregate root: ordered lines, settings and persistence key.

use serde::{Deserialize, Serialize};

use crate::line::PlotLine;
use crate::settings::PlotSettings;
use crate::types::PlotPoint;

/// Everything needed to draw one plot.
///
/// Equality compares lines and settings; `plot_name` is a storage key, not content.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlotData {
    #[serde(default)]
    pub plot_lines: Vec<PlotLine>,
    #[serde(default)]
    pub settings: PlotSettings,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plot_name: Option<String>,
}

impl PartialEq for PlotData {
    fn eq(&self, other: &Self) -> bool {
        self.plot_lines == other.plot_lines && self.settings == other.settings
    }
}

impl PlotData {
    pub fn new(plot_lines: Vec<PlotLine>, settings: PlotSettings) -> Self {
        Self { plot_lines, settings, plot_name: None }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.plot_name = Some(name.into());
        self
    }

    pub fn has_primary_lines(&self) -> bool { self.plot_lines.iter().any(|l| !l.secondary) }

    pub fn has_secondary_lines(&self) -> bool { self.plot_lines.iter().any(|l| l.secondary) }

    /// True when the secondary axis cannot be in use: no primary lines, no
    /// secondary lines, or the secondary axis switched off.
    pub fn no_secondary(&self) -> bool {
        !self.has_primary_lines() || !self.has_secondary_lines() || !self.settings.show_secondary_axis
    }

    /// Whether secondary lines are projected onto the secondary axis.
    pub fn show_secondary(&self) -> bool { self.settings.show_secondary_axis && !self.no_secondary() }

    /// Append a line and rescale (when auto-scale is on).
    pub fn add_line(&mut self, line: PlotLine) {
        self.plot_lines.push(line);
        self.scale_axes();
    }

    /// Append a point to line `index` and rescale. Returns `false` when the line does not exist.
    pub fn append_point(&mut self, index: usize, point: impl Into<PlotPoint>) -> bool {
        let Some(line) = self.plot_lines.get_mut(index) else { return false };
        line.append(point);
        self.scale_axes();
        true
    }

    /// Remove all points of line `index` and rescale. Returns `false` when the line does not exist.
    pub fn clear_line(&mut self, index: usize) -> bool {
        let Some(line) = self.plot_lines.get_mut(index) else { return false };
        line.clear();
        self.scale_axes();
        true
    }
}
