// File: crates/xyplot-core/src/shape.rs
// Summary: Point-marker symbols as pure unit-rect path generators, with a textual path codec.
//
// Path description grammar (postfix, whitespace separated):
//   x y m              move to
//   x y l              line to
//   cx cy x y q        quadratic curve
//   c1x c1y c2x c2y x y c   cubic curve
//   h                  close subpath
//   x y w h re         rectangle

use std::f64::consts::{FRAC_PI_4, PI};
use std::fmt::Write as _;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{PlotError, Result};
use crate::geometry::{Point, RectF};
use crate::types::Argb;

/// Cubic control-point factor for a quarter ellipse.
const KAPPA: f64 = 0.552_284_749_830_793_4;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCmd {
    MoveTo(Point),
    LineTo(Point),
    QuadTo(Point, Point),
    CubicTo(Point, Point, Point),
    Close,
}

/// A vector path; markers are stored in unit-rect coordinates.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct ShapePath {
    pub cmds: Vec<PathCmd>,
}

impl ShapePath {
    pub fn new() -> Self { Self::default() }

    pub fn move_to(&mut self, p: Point) { self.cmds.push(PathCmd::MoveTo(p)); }
    pub fn line_to(&mut self, p: Point) { self.cmds.push(PathCmd::LineTo(p)); }
    pub fn cubic_to(&mut self, c1: Point, c2: Point, p: Point) { self.cmds.push(PathCmd::CubicTo(c1, c2, p)); }
    pub fn close(&mut self) { self.cmds.push(PathCmd::Close); }

    pub fn add_rect(&mut self, r: RectF) {
        self.move_to(Point::new(r.left, r.top));
        self.line_to(Point::new(r.right, r.top));
        self.line_to(Point::new(r.right, r.bottom));
        self.line_to(Point::new(r.left, r.bottom));
        self.close();
    }

    pub fn is_empty(&self) -> bool { self.cmds.is_empty() }

    /// Apply `f` to every coordinate.
    pub fn map_points(&self, f: impl Fn(Point) -> Point) -> ShapePath {
        let cmds = self
            .cmds
            .iter()
            .map(|c| match *c {
                PathCmd::MoveTo(p) => PathCmd::MoveTo(f(p)),
                PathCmd::LineTo(p) => PathCmd::LineTo(f(p)),
                PathCmd::QuadTo(c1, p) => PathCmd::QuadTo(f(c1), f(p)),
                PathCmd::CubicTo(c1, c2, p) => PathCmd::CubicTo(f(c1), f(c2), f(p)),
                PathCmd::Close => PathCmd::Close,
            })
            .collect();
        ShapePath { cmds }
    }

    /// Scale about the unit-rect center `(0.5, 0.5)`.
    pub fn scaled_about_center(&self, sx: f64, sy: f64) -> ShapePath {
        self.map_points(|p| Point::new(0.5 + (p.x - 0.5) * sx, 0.5 + (p.y - 0.5) * sy))
    }

    /// Serialize with shortest round-trip number formatting.
    pub fn description(&self) -> String {
        let mut out = String::new();
        let mut put = |pts: &[Point], op: &str| {
            for p in pts {
                let _ = write!(out, "{} {} ", p.x, p.y);
            }
            out.push_str(op);
            out.push(' ');
        };
        for c in &self.cmds {
            match *c {
                PathCmd::MoveTo(p) => put(&[p], "m"),
                PathCmd::LineTo(p) => put(&[p], "l"),
                PathCmd::QuadTo(c1, p) => put(&[c1, p], "q"),
                PathCmd::CubicTo(c1, c2, p) => put(&[c1, c2, p], "c"),
                PathCmd::Close => put(&[], "h"),
            }
        }
        out.trim_end().to_string()
    }

    /// Parse a description produced by [`ShapePath::description`].
    pub fn parse(src: &str) -> Result<ShapePath> {
        let mut path = ShapePath::new();
        let mut stack: Vec<f64> = Vec::with_capacity(6);
        let take = |stack: &mut Vec<f64>, n: usize, op: &str| -> Result<Vec<Point>> {
            if stack.len() != n * 2 {
                return Err(PlotError::InvalidPath(format!("'{op}' expects {} numbers, found {}", n * 2, stack.len())));
            }
            let pts = stack.chunks(2).map(|c| Point::new(c[0], c[1])).collect();
            stack.clear();
            Ok(pts)
        };
        for tok in src.split_whitespace() {
            match tok {
                "m" => path.move_to(take(&mut stack, 1, tok)?[0]),
                "l" => path.line_to(take(&mut stack, 1, tok)?[0]),
                "q" => {
                    let p = take(&mut stack, 2, tok)?;
                    path.cmds.push(PathCmd::QuadTo(p[0], p[1]));
                }
                "c" => {
                    let p = take(&mut stack, 3, tok)?;
                    path.cubic_to(p[0], p[1], p[2]);
                }
                "h" => {
                    take(&mut stack, 0, tok)?;
                    path.close();
                }
                "re" => {
                    let p = take(&mut stack, 2, tok)?;
                    path.add_rect(RectF::from_ltrb(p[0].x, p[0].y, p[0].x + p[1].x, p[0].y + p[1].y));
                }
                num => {
                    let v: f64 = num
                        .parse()
                        .map_err(|_| PlotError::InvalidPath(format!("unexpected token '{num}'")))?;
                    if !v.is_finite() {
                        return Err(PlotError::InvalidPath(format!("non-finite coordinate '{num}'")));
                    }
                    stack.push(v);
                }
            }
        }
        if !stack.is_empty() {
            return Err(PlotError::InvalidPath(format!("{} dangling numbers", stack.len())));
        }
        if path.is_empty() {
            return Err(PlotError::InvalidPath("empty path".to_string()));
        }
        Ok(path)
    }
}

/// Closed set of marker symbols, each a pure function of the unit rect.
#[derive(Clone, Debug, PartialEq)]
pub enum Symbol {
    /// Regular polygon. `open` draws spokes from the center (plus, X, asterisk);
    /// `corner_start` rotates by 45 degrees and circumscribes the unit rect.
    Polygon { sides: u32, open: bool, corner_start: bool },
    Rectangle,
    Ellipse,
    /// Arrow pointing left (or right when `left == false`).
    Arrow { left: bool },
    /// Path decoded from a stored description.
    Custom(ShapePath),
}

impl Default for Symbol {
    fn default() -> Self { Symbol::Polygon { sides: 4, open: false, corner_start: false } }
}

impl Symbol {
    pub fn unit_path(&self) -> ShapePath {
        match self {
            Symbol::Polygon { sides, open, corner_start } => polygon(*sides, *open, *corner_start),
            Symbol::Rectangle => {
                let mut p = ShapePath::new();
                p.add_rect(RectF::UNIT);
                p
            }
            Symbol::Ellipse => ellipse(),
            Symbol::Arrow { left } => arrow(*left),
            Symbol::Custom(path) => path.clone(),
        }
    }
}

fn polygon(sides: u32, open: bool, corner_start: bool) -> ShapePath {
    let sides = sides.max(3);
    let center = Point::new(0.5, 0.5);
    let radius = if corner_start { 2f64.sqrt() } else { 1.0 } * 0.5;
    let angle = 2.0 * PI / sides as f64;
    let offset = if corner_start { FRAC_PI_4 } else { 0.0 };
    let mut path = ShapePath::new();
    for side in 0..sides {
        let a = side as f64 * angle + offset;
        let vertex = Point::new(center.x + a.cos() * radius, center.y + a.sin() * radius);
        if open {
            path.move_to(center);
            path.line_to(vertex);
        } else if side == 0 {
            path.move_to(vertex);
        } else {
            path.line_to(vertex);
        }
    }
    if !open {
        path.close();
    }
    path
}

fn ellipse() -> ShapePath {
    let (c, r, k) = (0.5, 0.5, 0.5 * KAPPA);
    let mut p = ShapePath::new();
    p.move_to(Point::new(c + r, c));
    p.cubic_to(Point::new(c + r, c + k), Point::new(c + k, c + r), Point::new(c, c + r));
    p.cubic_to(Point::new(c - k, c + r), Point::new(c - r, c + k), Point::new(c - r, c));
    p.cubic_to(Point::new(c - r, c - k), Point::new(c - k, c - r), Point::new(c, c - r));
    p.cubic_to(Point::new(c + k, c - r), Point::new(c + r, c - k), Point::new(c + r, c));
    p.close();
    p
}

fn arrow(left: bool) -> ShapePath {
    let h = 0.5f64.atan().sin();
    let tip = Point::new(if left { 0.0 } else { 1.0 }, 0.5);
    let mut p = ShapePath::new();
    p.move_to(tip);
    p.line_to(Point::new(0.5, 0.5 - h));
    p.move_to(tip);
    p.line_to(Point::new(0.5, 0.5 + h));
    p.move_to(tip);
    p.line_to(Point::new(if left { 1.0 } else { 0.0 }, 0.5));
    p
}

/// Marker drawn at every point of a line.
#[derive(Clone, Debug)]
pub struct PointShape {
    pub symbol: Symbol,
    pub fill: bool,
    pub color: Argb,
    /// Rotation in radians about the marker center.
    pub angle: f64,
    /// Scale relative to the renderer's marker box.
    pub size: f64,
    pub inset_amount: f64,
}

impl Default for PointShape {
    fn default() -> Self {
        Self { symbol: Symbol::default(), fill: false, color: Argb::BLACK, angle: 0.0, size: 1.0, inset_amount: 0.0 }
    }
}

impl PartialEq for PointShape {
    /// Symbols compare by generated geometry, so a decoded `Custom` path equals
    /// the built-in symbol it was encoded from.
    fn eq(&self, other: &Self) -> bool {
        self.fill == other.fill
            && self.color == other.color
            && self.size == other.size
            && self.angle == other.angle
            && self.inset_amount == other.inset_amount
            && self.symbol.unit_path().description() == other.symbol.unit_path().description()
    }
}

impl PointShape {
    pub fn new(symbol: Symbol) -> Self { Self { symbol, ..Self::default() } }

    pub fn with_color(mut self, color: Argb) -> Self { self.color = color; self }
    pub fn with_fill(mut self, fill: bool) -> Self { self.fill = fill; self }
    pub fn with_size(mut self, size: f64) -> Self { self.size = size; self }
    pub fn with_angle_degrees(mut self, degrees: f64) -> Self { self.angle = degrees.to_radians(); self }

    /// Copy inset by a further `amount` pixels on every side.
    pub fn inset(&self, amount: f64) -> Self {
        let mut s = self.clone();
        s.inset_amount += amount;
        s
    }

    /// Outline in surface coordinates for a marker centered at `center` in a
    /// `box_px` square: scaled by `size`, inset, then rotated by `angle`.
    pub fn outline_at(&self, center: Point, box_px: f64) -> ShapePath {
        let side = (box_px * self.size).max(0.0);
        let rect = RectF::from_center(center, side, side).inset(self.inset_amount.max(0.0));
        let angle = self.angle;
        self.symbol
            .unit_path()
            .map_points(|p| rect.map_unit(p).rotated_about(center, angle))
    }
}

/// Stored form of a [`PointShape`]: path description plus scalar fields.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PointShapeRecord {
    shape_path: String,
    #[serde(default)]
    inset_amount: f64,
    color: Argb,
    fill: bool,
    angle: f64,
    size: f64,
}

impl Serialize for PointShape {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        PointShapeRecord {
            shape_path: self.symbol.unit_path().description(),
            inset_amount: self.inset_amount,
            color: self.color,
            fill: self.fill,
            angle: self.angle,
            size: self.size,
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for PointShape {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let rec = PointShapeRecord::deserialize(deserializer)?;
        let symbol = match ShapePath::parse(&rec.shape_path) {
            Ok(path) => Symbol::Custom(path),
            Err(e) => {
                warn!("{e}; substituting rectangle marker");
                Symbol::Rectangle
            }
        };
        Ok(PointShape {
            symbol,
            fill: rec.fill,
            color: rec.color,
            angle: rec.angle,
            size: rec.size,
            inset_amount: rec.inset_amount,
        })
    }
}

/// Stock marker set, in menu order.
pub fn symbol_catalog() -> Vec<PointShape> {
    let diamond = Symbol::default();
    let triangle = Symbol::Polygon { sides: 3, open: false, corner_start: false };
    let unit_square = Symbol::Rectangle.unit_path();
    let square_707 = Symbol::Custom(unit_square.scaled_about_center(0.707, 0.707));
    let narrow_diamond = Symbol::Custom(diamond.unit_path().scaled_about_center(0.7, 1.0));
    let spokes = |sides| Symbol::Polygon { sides, open: true, corner_start: false };
    vec![
        PointShape::new(Symbol::Rectangle).with_color(Argb::CLEAR),
        PointShape::new(diamond.clone()),
        PointShape::new(narrow_diamond).with_color(Argb::RED),
        PointShape::new(Symbol::Rectangle).with_color(Argb::RED).with_size(0.7),
        PointShape::new(square_707.clone()).with_color(Argb::RED),
        PointShape::new(Symbol::Ellipse).with_color(Argb::BLUE),
        PointShape::new(square_707.clone()).with_angle_degrees(45.0).with_color(Argb::GREEN),
        PointShape::new(triangle.clone()).with_angle_degrees(90.0).with_color(Argb::PURPLE),
        PointShape::new(triangle.clone()).with_angle_degrees(-90.0).with_color(Argb::ORANGE),
        PointShape::new(square_707).with_color(Argb::RED),
        PointShape::new(Symbol::Rectangle).with_color(Argb::RED).with_size(0.707),
        PointShape::new(Symbol::Ellipse).with_fill(true).with_color(Argb::BLUE),
        PointShape::new(Symbol::Polygon { sides: 13, open: false, corner_start: false }).with_color(Argb::BLUE),
        PointShape::new(diamond).with_color(Argb::GREEN),
        PointShape::new(triangle.clone()).with_angle_degrees(90.0).with_color(Argb::PURPLE),
        PointShape::new(triangle).with_angle_degrees(-90.0).with_color(Argb::ORANGE),
        PointShape::new(spokes(4)),
        PointShape::new(spokes(4)).with_angle_degrees(45.0),
        PointShape::new(spokes(6)),
        PointShape::new(Symbol::Arrow { left: true }),
        PointShape::new(Symbol::Arrow { left: false }),
    ]
}
