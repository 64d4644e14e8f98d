// File: crates/xyplot-core/src/lib.rs
// Summary: Core library entry point; exports the plot model, auto-scaling, projection and storage API.

pub mod error;
pub mod types;
pub mod geometry;
pub mod text;
pub mod format;
pub mod nice;
pub mod axis;
pub mod settings;
pub mod shape;
pub mod line;
pub mod plot;
pub mod autoscale;
pub mod transform;
pub mod ticks;
pub mod legend;
pub mod codec;
pub mod store;
pub mod editor;

pub use error::{PlotError, Result};
pub use types::{Argb, Insets, NormPoint, PlotPoint, SurfaceSize};
pub use geometry::{Point, RectF};
pub use text::{StyledText, TextRun};
pub use format::NumberFormat;
pub use nice::{adjust_axis, adjust_axis_with_tics, AxisScale};
pub use axis::{axis_or_default, axis_title, set_axis_title, AxisKey, AxisParameters};
pub use settings::PlotSettings;
pub use shape::{symbol_catalog, PointShape, ShapePath, Symbol};
pub use line::{LineCap, LineJoin, LineStyle, PlotLine};
pub use plot::PlotData;
pub use transform::{project, Projection};
pub use ticks::{axis_labels, tic_polyline, tic_values, PlotLabels};
pub use legend::{legend_entries, LegendDrag, LegendEntry};
pub use store::{AutoSaver, FileStore, MemoryStore, PlotStore};
pub use editor::{AxisDraft, SettingsEditor};
