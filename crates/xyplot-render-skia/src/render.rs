// File: crates/xyplot-render-skia/src/render.rs
// Summary: Headless plot rendering pipeline using Skia CPU raster surfaces.

use anyhow::{anyhow, Result};
use skia_safe as skia;
use tracing::debug;
use xyplot_core::geometry::clamp;
use xyplot_core::legend::legend_origin;
use xyplot_core::types::{HEIGHT, WIDTH};
use xyplot_core::{
    axis_title, legend_entries, tic_polyline, AxisKey, Insets, PlotData, PlotLabels, Point, PointShape, Projection,
    SurfaceSize,
};

use crate::paint::{fill_paint, line_paint, polyline, stroke_paint, to_color, to_path};
use crate::text::TextShaper;
use crate::theme::Theme;

/// Gap between the frame and tic labels, in pixels.
const LABEL_GAP: f32 = 6.0;
const LEGEND_PAD: f32 = 8.0;
const LEGEND_SAMPLE: f32 = 36.0;

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Side of the box a point marker is fitted into, in pixels.
    pub marker_px: f32,
    pub label_size: f32,
    pub draw_labels: bool,
    pub draw_legend: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::light(),
            marker_px: 10.0,
            label_size: 13.0,
            draw_labels: true,
            draw_legend: true,
        }
    }
}

impl RenderOptions {
    /// Plot area inside the insets. The right inset grows to the left one's
    /// width when the secondary axis needs room for labels.
    pub fn plot_rect(&self, show_secondary: bool) -> skia::Rect {
        let right = if show_secondary { self.insets.right.max(self.insets.left) } else { self.insets.right };
        let left = self.insets.left as f32;
        let top = self.insets.top as f32;
        skia::Rect::from_ltrb(
            left,
            top,
            (self.width as f32 - right as f32).max(left + 1.0),
            (self.height as f32 - self.insets.bottom as f32).max(top + 1.0),
        )
    }
}

#[derive(Default)]
pub struct PlotRenderer {
    shaper: TextShaper,
}

impl PlotRenderer {
    pub fn new() -> Self { Self::default() }

    /// Render `data` and return encoded PNG bytes.
    pub fn render_png_bytes(&self, data: &PlotData, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = self.draw(data, opts)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let png = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow!("encode PNG failed"))?;
        Ok(png.as_bytes().to_vec())
    }

    /// Render `data` to a PNG at `output_png_path`, creating parent directories.
    pub fn render_to_png(
        &self,
        data: &PlotData,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let bytes = self.render_png_bytes(data, opts)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }

    /// Render into an unpremultiplied RGBA8 buffer: `(pixels, width, height, stride)`.
    pub fn render_rgba8(&self, data: &PlotData, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
        let mut surface = self.draw(data, opts)?;
        let info = skia::ImageInfo::new(
            (opts.width, opts.height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = opts.width.max(0) as usize * 4;
        let mut pixels = vec![0u8; stride * opts.height.max(0) as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(anyhow!("reading surface pixels failed"));
        }
        Ok((pixels, opts.width as u32, opts.height as u32, stride))
    }

    fn draw(&self, data: &PlotData, opts: &RenderOptions) -> Result<skia::Surface> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| anyhow!("failed to create raster surface"))?;
        debug!(width = opts.width, height = opts.height, lines = data.plot_lines.len(), "rendering plot");
        self.draw_plot(surface.canvas(), data, opts);
        Ok(surface)
    }

    fn draw_plot(&self, canvas: &skia::Canvas, data: &PlotData, opts: &RenderOptions) {
        canvas.clear(opts.theme.background);

        let area = opts.plot_rect(data.show_secondary());
        canvas.draw_rect(area, &fill_paint(opts.theme.plot_background));
        let size = SurfaceSize::new(area.width() as f64, area.height() as f64);

        canvas.save();
        canvas.translate((area.left, area.top));
        draw_lines(canvas, data, &Projection::for_plot(data, size), opts.marker_px);
        draw_frame(canvas, data, size, opts);
        canvas.restore();

        if opts.draw_labels {
            self.draw_labels(canvas, data, area, opts);
        }
        if opts.draw_legend && data.settings.legend {
            self.draw_legend(canvas, data, opts);
        }
    }

    fn draw_labels(&self, canvas: &skia::Canvas, data: &PlotData, area: skia::Rect, opts: &RenderOptions) {
        let labels = PlotLabels::for_plot(data);
        let size = opts.label_size;
        let color = opts.theme.tic_label;
        let widest = |texts: &[String]| {
            texts.iter().map(|t| self.shaper.measure_width(t, size, true)).fold(0.0f32, f32::max)
        };

        for (i, text) in labels.x.iter().enumerate() {
            let x = area.left + area.width() * fraction(i, labels.x.len());
            let w = self.shaper.measure_width(text, size, true);
            self.shaper.draw_left(canvas, text, x - w * 0.5, area.bottom + LABEL_GAP + size, size, color, true);
        }
        for (i, text) in labels.y.iter().enumerate() {
            let y = area.bottom - area.height() * fraction(i, labels.y.len());
            let w = self.shaper.measure_width(text, size, true);
            self.shaper.draw_left(canvas, text, area.left - LABEL_GAP - w, y + size * 0.35, size, color, true);
        }
        for (i, text) in labels.s.iter().enumerate() {
            let y = area.bottom - area.height() * fraction(i, labels.s.len());
            self.shaper.draw_left(canvas, text, area.right + LABEL_GAP, y + size * 0.35, size, color, true);
        }

        let settings = &data.settings;
        let title_color = opts.theme.title;
        if !settings.title.is_empty() {
            let p = self.shaper.layout_styled(&settings.title, 1.0, title_color);
            self.shaper.draw_centered(canvas, &p, area.center_x(), area.top * 0.5, 0.0);
        }

        let x_title = axis_title(settings, AxisKey::X);
        if !x_title.is_empty() {
            let p = self.shaper.layout_styled(&x_title, 1.0, title_color);
            let below = area.bottom + LABEL_GAP + size;
            self.shaper.draw_centered(canvas, &p, area.center_x(), (below + opts.height as f32) * 0.5, 0.0);
        }

        let y_title = axis_title(settings, AxisKey::Y);
        if !y_title.is_empty() {
            let p = self.shaper.layout_styled(&y_title, 1.0, title_color);
            let left_of = area.left - LABEL_GAP - widest(&labels.y);
            self.shaper.draw_centered(canvas, &p, left_of * 0.5, area.center_y(), -90.0);
        }

        if data.show_secondary() {
            let s_title = axis_title(settings, AxisKey::Secondary);
            if !s_title.is_empty() {
                let p = self.shaper.layout_styled(&s_title, 1.0, title_color);
                let right_of = area.right + LABEL_GAP + widest(&labels.s);
                self.shaper.draw_centered(canvas, &p, (right_of + opts.width as f32) * 0.5, area.center_y(), 90.0);
            }
        }
    }

    fn draw_legend(&self, canvas: &skia::Canvas, data: &PlotData, opts: &RenderOptions) {
        let entries = legend_entries(data);
        if entries.is_empty() {
            return;
        }
        let size = opts.label_size;
        let row_h = size + 8.0;
        let name_w = entries
            .iter()
            .map(|e| self.shaper.measure_width(&e.name, size, false))
            .fold(0.0f32, f32::max);
        let box_w = LEGEND_PAD * 3.0 + LEGEND_SAMPLE + name_w;
        let box_h = LEGEND_PAD * 2.0 + row_h * entries.len() as f32;

        let surface = SurfaceSize::new(opts.width as f64, opts.height as f64);
        let origin = legend_origin(data.settings.legend_pos, surface);
        let x = clamp(origin.x as f32, 0.0, (opts.width as f32 - box_w).max(0.0));
        let y = clamp(origin.y as f32, 0.0, (opts.height as f32 - box_h).max(0.0));

        let frame = skia::Rect::from_xywh(x, y, box_w, box_h);
        canvas.draw_rect(frame, &fill_paint(opts.theme.legend_background));
        canvas.draw_rect(frame, &stroke_paint(opts.theme.legend_border, 1.0));

        for (row, entry) in entries.iter().enumerate() {
            let top = y + LEGEND_PAD + row_h * row as f32;
            let cy = top + row_h * 0.5;
            let x0 = x + LEGEND_PAD;
            if !entry.color.is_clear() {
                let sample = polyline([Some(Point::new(x0 as f64, cy as f64)), Some(Point::new((x0 + LEGEND_SAMPLE) as f64, cy as f64))]);
                canvas.draw_path(&sample, &line_paint(&entry.style, entry.color));
            }
            if !entry.shape.color.is_clear() {
                draw_marker(canvas, &entry.shape, Point::new((x0 + LEGEND_SAMPLE * 0.5) as f64, cy as f64), opts.marker_px);
            }
            let text_x = x0 + LEGEND_SAMPLE + LEGEND_PAD;
            self.shaper.draw_left(canvas, &entry.name, text_x, cy + size * 0.35, size, opts.theme.tic_label, false);
            if entry.selected {
                let r = skia::Rect::from_xywh(x + 2.0, top, box_w - 4.0, row_h);
                canvas.draw_rect(r, &stroke_paint(opts.theme.selection, 1.5));
            }
        }
    }
}

// ---- helpers ----------------------------------------------------------------

#[inline]
fn fraction(i: usize, n: usize) -> f32 {
    if n < 2 { 0.0 } else { i as f32 / (n - 1) as f32 }
}

/// Lines clipped to the plot area, then markers at in-bounds points.
/// Non-finite samples break the line.
fn draw_lines(canvas: &skia::Canvas, data: &PlotData, projection: &Projection, marker_px: f32) {
    let bounds = skia::Rect::from_wh(projection.size.width as f32, projection.size.height as f32);
    for line in &data.plot_lines {
        let points: Vec<Option<Point>> = line
            .values
            .iter()
            .map(|v| v.is_finite().then(|| projection.project(v, line.secondary)))
            .collect();

        if !line.line_color.is_clear() && line.len() > 1 {
            canvas.save();
            canvas.clip_rect(bounds, skia::ClipOp::Intersect, true);
            canvas.draw_path(&polyline(points.iter().copied()), &line_paint(&line.line_style, line.line_color));
            canvas.restore();
        }

        if !line.point_color().is_clear() {
            for &p in points.iter().flatten().filter(|p| projection.in_bounds(**p)) {
                draw_marker(canvas, &line.point_shape, p, marker_px);
            }
        }
    }
}

fn draw_marker(canvas: &skia::Canvas, shape: &PointShape, center: Point, box_px: f32) {
    let path = to_path(&shape.outline_at(center, box_px as f64));
    let color = to_color(shape.color);
    let paint = if shape.fill { fill_paint(color) } else { stroke_paint(color, 1.0) };
    canvas.draw_path(&path, &paint);
}

/// Frame and tic marks, stroked relative to the plot size.
fn draw_frame(canvas: &skia::Canvas, data: &PlotData, size: SurfaceSize, opts: &RenderOptions) {
    let points = tic_polyline(&data.settings, data.show_secondary(), size);
    let width = (size.width.max(size.height) / 500.0 + 0.5) as f32;
    canvas.draw_path(&polyline(points.into_iter().map(Some)), &stroke_paint(opts.theme.frame, width));
}
