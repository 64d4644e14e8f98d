// File: crates/xyplot-render-skia/src/lib.rs
// Summary: Skia renderer crate; draws xyplot-core plots on CPU raster surfaces.

pub mod paint;
pub mod render;
pub mod text;
pub mod theme;

pub use render::{PlotRenderer, RenderOptions};
pub use text::TextShaper;
pub use theme::Theme;
