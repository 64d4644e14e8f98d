// File: crates/xyplot-render-skia/tests/paint.rs
// Purpose: Core-to-Skia conversions and theme lookup.

use xyplot_core::{Argb, LineCap, LineJoin, LineStyle, Point, Symbol};
use xyplot_render_skia::paint::{line_paint, polyline, to_color, to_path};
use xyplot_render_skia::theme::{find, presets};

#[test]
fn colors_keep_channels() {
    let c = to_color(Argb::from_argb(0x80, 1, 2, 3));
    assert_eq!((c.a(), c.r(), c.g(), c.b()), (0x80, 1, 2, 3));
}

#[test]
fn polyline_breaks_on_gaps() {
    let p = |x, y| Some(Point::new(x, y));
    let path = polyline([p(0.0, 0.0), p(1.0, 1.0), None, p(2.0, 0.0), p(3.0, 1.0)]);
    assert_eq!(path.count_points(), 4);
    assert_eq!(path.count_verbs(), 4);
}

#[test]
fn shape_paths_convert() {
    let ellipse = to_path(&Symbol::Ellipse.unit_path());
    let bounds = ellipse.bounds();
    assert!((bounds.width() - 1.0).abs() < 1e-4 && (bounds.height() - 1.0).abs() < 1e-4);
}

#[test]
fn line_style_reaches_paint() {
    let mut style = LineStyle::dashed(3.0, vec![15.0, 5.0]);
    style.line_cap = LineCap::Round;
    style.line_join = LineJoin::Bevel;
    let paint = line_paint(&style, Argb::BLUE);
    assert_eq!(paint.stroke_width(), 3.0);
    assert_eq!(paint.stroke_cap(), skia_safe::paint::Cap::Round);
    assert_eq!(paint.stroke_join(), skia_safe::paint::Join::Bevel);
    assert!(paint.path_effect().is_some());
    assert!(line_paint(&LineStyle::solid(1.0), Argb::BLUE).path_effect().is_none());
}

#[test]
fn theme_lookup_falls_back_to_light() {
    assert_eq!(presets().len(), 2);
    assert_eq!(find("DARK").name, "dark");
    assert_eq!(find("neon").name, "light");
}
