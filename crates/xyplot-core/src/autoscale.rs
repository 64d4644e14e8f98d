// File: crates/xyplot-core/src/autoscale.rs
// Summary: Scale-axes orchestration: bucket data extrema per axis and write nice scales into settings.

use tracing::debug;

use crate::axis::{axis_mut, AxisKey, AxisParameters};
use crate::line::PlotLine;
use crate::nice::{adjust_axis, adjust_axis_with_tics, AxisScale};
use crate::plot::PlotData;

/// Raw data range of one bucket.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Extent {
    pub min: f64,
    pub max: f64,
}

impl Extent {
    /// Range of the finite values, `None` if there are none.
    pub fn of(values: impl IntoIterator<Item = f64>) -> Option<Self> {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for v in values.into_iter().filter(|v| v.is_finite()) {
            min = min.min(v);
            max = max.max(v);
        }
        if min <= max { Some(Self { min, max }) } else { None }
    }

    pub fn union(a: Option<Self>, b: Option<Self>) -> Option<Self> {
        match (a, b) {
            (Some(a), Some(b)) => Some(Self { min: a.min.min(b.min), max: a.max.max(b.max) }),
            (a, None) => a,
            (None, b) => b,
        }
    }
}

/// Extrema of the three data buckets. Points with a non-finite coordinate are skipped.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DataExtents {
    pub x: Option<Extent>,
    pub primary_y: Option<Extent>,
    pub secondary_y: Option<Extent>,
}

impl DataExtents {
    pub fn scan(lines: &[PlotLine]) -> Self {
        let mut out = Self::default();
        for line in lines {
            let pts = || line.values.iter().filter(|p| p.is_finite());
            out.x = Extent::union(out.x, Extent::of(pts().map(|p| p.x)));
            let y = Extent::of(pts().map(|p| p.y));
            if line.secondary {
                out.secondary_y = Extent::union(out.secondary_y, y);
            } else {
                out.primary_y = Extent::union(out.primary_y, y);
            }
        }
        out
    }
}

fn apply(axis: &mut Option<AxisParameters>, scale: &AxisScale) {
    axis.get_or_insert_with(AxisParameters::default).apply_scale(scale);
}

impl PlotData {
    /// Rescale axes to fit the data, only when `settings.auto_scale` is on.
    pub fn scale_axes(&mut self) {
        if self.settings.auto_scale {
            self.axes_scale();
        }
    }

    /// Rescale axes to fit the data regardless of `auto_scale`.
    ///
    /// Only numeric range and tic fields change; titles and `show` flags stay.
    /// An axis whose bucket holds no finite points keeps its previous range.
    pub fn axes_scale(&mut self) {
        let show_secondary = self.show_secondary();
        let independent = self.settings.independent_tics;
        let ext = DataExtents::scan(&self.plot_lines);
        let settings = &mut self.settings;

        for key in [AxisKey::X, AxisKey::Y] {
            axis_mut(settings, key).get_or_insert_with(AxisParameters::default);
        }

        if let Some(x) = ext.x {
            let scale = adjust_axis(x.min, x.max);
            debug!(axis = AxisKey::X.name(), ?scale, "axis scaled");
            apply(&mut settings.x_axis, &scale);
        }

        if !show_secondary {
            // One shared Y axis holds both buckets; a configured s axis mirrors it.
            if let Some(y) = Extent::union(ext.primary_y, ext.secondary_y) {
                let scale = adjust_axis(y.min, y.max);
                debug!(axis = AxisKey::Y.name(), ?scale, "axis scaled");
                apply(&mut settings.y_axis, &scale);
            }
            if let (Some(y), Some(s)) = (settings.y_axis.as_ref(), settings.s_axis.as_mut()) {
                s.apply_scale(&y.scale());
            }
            return;
        }

        if let Some(y) = ext.primary_y {
            let scale = adjust_axis(y.min, y.max);
            debug!(axis = AxisKey::Y.name(), ?scale, "axis scaled");
            apply(&mut settings.y_axis, &scale);
        }
        if let Some(s) = ext.secondary_y {
            let scale = if independent {
                adjust_axis(s.min, s.max)
            } else {
                let y = settings.y_axis.as_ref().map(AxisParameters::scale).unwrap_or_default();
                adjust_axis_with_tics(s.min, s.max, y.major_tics, y.minor_tics)
            };
            debug!(axis = AxisKey::Secondary.name(), ?scale, independent, "axis scaled");
            apply(&mut settings.s_axis, &scale);
        }
    }
}
