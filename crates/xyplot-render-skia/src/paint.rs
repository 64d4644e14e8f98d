// File: crates/xyplot-render-skia/src/paint.rs
// Summary: Conversions from core colors, line styles and shape paths to Skia types.

use skia_safe as skia;
use xyplot_core::shape::PathCmd;
use xyplot_core::{Argb, LineCap, LineJoin, LineStyle, Point, ShapePath};

#[inline]
pub fn to_color(c: Argb) -> skia::Color {
    skia::Color::from_argb(c.a(), c.r(), c.g(), c.b())
}

#[inline]
pub fn to_point(p: Point) -> skia::Point {
    skia::Point::new(p.x as f32, p.y as f32)
}

pub fn fill_paint(color: skia::Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(color);
    paint
}

pub fn stroke_paint(color: skia::Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_color(color);
    paint
}

/// Stroke paint carrying width, cap, join, miter limit and dash of `style`.
pub fn line_paint(style: &LineStyle, color: Argb) -> skia::Paint {
    let mut paint = stroke_paint(to_color(color), style.line_width.max(0.0) as f32);
    paint.set_stroke_cap(match style.line_cap {
        LineCap::Butt => skia::paint::Cap::Butt,
        LineCap::Round => skia::paint::Cap::Round,
        LineCap::Square => skia::paint::Cap::Square,
    });
    paint.set_stroke_join(match style.line_join {
        LineJoin::Miter => skia::paint::Join::Miter,
        LineJoin::Round => skia::paint::Join::Round,
        LineJoin::Bevel => skia::paint::Join::Bevel,
    });
    paint.set_stroke_miter(style.miter_limit as f32);
    if style.is_dashed() {
        let mut intervals: Vec<f32> = style.dash.iter().map(|&d| d as f32).collect();
        // Skia wants an even interval count.
        if intervals.len() % 2 == 1 {
            intervals.extend_from_within(..);
        }
        if let Some(effect) = skia::PathEffect::dash(&intervals, style.dash_phase as f32) {
            paint.set_path_effect(effect);
        }
    }
    paint
}

pub fn to_path(shape: &ShapePath) -> skia::Path {
    let mut path = skia::Path::new();
    for cmd in &shape.cmds {
        match *cmd {
            PathCmd::MoveTo(p) => { path.move_to(to_point(p)); }
            PathCmd::LineTo(p) => { path.line_to(to_point(p)); }
            PathCmd::QuadTo(c, p) => { path.quad_to(to_point(c), to_point(p)); }
            PathCmd::CubicTo(c1, c2, p) => { path.cubic_to(to_point(c1), to_point(c2), to_point(p)); }
            PathCmd::Close => { path.close(); }
        }
    }
    path
}

/// Open polyline through `points`; a `None` breaks the path.
pub fn polyline(points: impl IntoIterator<Item = Option<Point>>) -> skia::Path {
    let mut path = skia::Path::new();
    let mut pen_down = false;
    for p in points {
        match p {
            Some(p) if pen_down => { path.line_to(to_point(p)); }
            Some(p) => {
                path.move_to(to_point(p));
                pen_down = true;
            }
            None => pen_down = false,
        }
    }
    path
}
