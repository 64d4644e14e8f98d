// File: crates/xyplot-render-skia/tests/smoke.rs
// Purpose: Basic end-to-end render smoke test writing a PNG.

use xyplot_core::{Argb, AxisKey, AxisParameters, LineStyle, PlotData, PlotLine, PlotSettings, StyledText};
use xyplot_render_skia::{PlotRenderer, RenderOptions, Theme};

fn two_axis_plot() -> PlotData {
    let settings = PlotSettings::default()
        .with_title(StyledText::from_markdown("# **Smoke** plot"))
        .with_secondary(true, false);
    let mut data = PlotData::new(
        vec![
            PlotLine::from_points([(0.0, 0.0), (1.0, 2.0), (2.0, 1.0), (3.0, 3.5), (4.0, 2.5)])
                .with_color(Argb::RED)
                .with_legend("primary"),
            PlotLine::from_points([(0.0, 10.0), (2.0, 40.0), (4.0, 25.0)])
                .with_color(Argb::BLUE)
                .with_style(LineStyle::dashed(2.0, vec![15.0, 5.0]))
                .on_secondary(true)
                .with_legend("secondary"),
        ],
        settings,
    );
    data.axes_scale();
    data
}

#[test]
fn render_smoke_png() {
    let data = two_axis_plot();
    let renderer = PlotRenderer::new();
    let opts = RenderOptions::default();
    let out = std::path::PathBuf::from("target/test_out/smoke.png");

    renderer.render_to_png(&data, &opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works
    let bytes = renderer.render_png_bytes(&data, &opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn degenerate_data_still_renders() {
    let mut settings = PlotSettings::default();
    settings.auto_scale = false;
    let settings = settings.with_axis(AxisKey::X, AxisParameters::new(3.0, 3.0));
    let data = PlotData::new(
        vec![
            PlotLine::new().with_legend("empty"),
            PlotLine::from_points([(f64::NAN, 1.0), (1.0, f64::INFINITY), (2.0, 2.0)]),
        ],
        settings,
    );
    let mut opts = RenderOptions::default();
    opts.theme = Theme::dark();
    let bytes = PlotRenderer::new().render_png_bytes(&data, &opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]));
}

#[test]
fn tiny_surface_renders() {
    let mut opts = RenderOptions::default();
    opts.width = 64;
    opts.height = 48;
    let bytes = PlotRenderer::new().render_png_bytes(&two_axis_plot(), &opts).expect("render bytes");
    let img = image::load_from_memory(&bytes).expect("decode").to_rgba8();
    assert_eq!((img.width(), img.height()), (64, 48));
}
