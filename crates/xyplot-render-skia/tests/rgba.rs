// File: crates/xyplot-render-skia/tests/rgba.rs
// Purpose: Validate RGBA rendering buffer shape and a few pixels.

use xyplot_core::{Argb, PlotData, PlotLine, PlotSettings};
use xyplot_render_skia::{PlotRenderer, RenderOptions};

#[test]
fn render_rgba8_buffer() {
    let data = PlotData::new(
        vec![PlotLine::from_points([(0.0, 0.0), (4.0, 4.0)]).with_color(Argb::RED)],
        PlotSettings::default(),
    );

    let mut opts = RenderOptions::default();
    opts.draw_labels = false; // avoid font variance
    let (px, w, h, stride) = PlotRenderer::new().render_rgba8(&data, &opts).expect("rgba render");
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // Top-left pixel is opaque theme background (RGBA).
    let bg = opts.theme.background;
    assert_eq!(&px[0..4], &[bg.r(), bg.g(), bg.b(), 255]);

    // Off the diagonal line the plot area shows its own background.
    let area = opts.plot_rect(false);
    let x = (area.left + area.width() * 0.75) as usize;
    let y = (area.top + area.height() * 0.75) as usize;
    let i = y * stride + x * 4;
    let plot_bg = opts.theme.plot_background;
    assert_eq!(&px[i..i + 4], &[plot_bg.r(), plot_bg.g(), plot_bg.b(), 255]);
}
