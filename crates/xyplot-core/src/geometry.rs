// File: crates/xyplot-core/src/geometry.rs
// Summary: Lightweight geometry helpers for surface-space math.

/// A point in surface space (pixels, origin top-left) or unit-rect space.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self { Self { x, y } }

    #[inline]
    pub fn is_finite(&self) -> bool { self.x.is_finite() && self.y.is_finite() }

    /// Rotate about `center` by `radians` (positive is clockwise on a y-down surface).
    pub fn rotated_about(self, center: Point, radians: f64) -> Point {
        if radians == 0.0 {
            return self;
        }
        let (s, c) = radians.sin_cos();
        let dx = self.x - center.x;
        let dy = self.y - center.y;
        Point::new(center.x + dx * c - dy * s, center.y + dx * s + dy * c)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self { Self::new(x, y) }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectF {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl RectF {
    pub const UNIT: RectF = RectF { left: 0.0, top: 0.0, right: 1.0, bottom: 1.0 };

    pub const fn from_ltrb(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self { left, top, right, bottom }
    }
    pub fn from_center(center: Point, width: f64, height: f64) -> Self {
        Self::from_ltrb(
            center.x - width * 0.5,
            center.y - height * 0.5,
            center.x + width * 0.5,
            center.y + height * 0.5,
        )
    }
    pub fn width(&self) -> f64 { self.right - self.left }
    pub fn height(&self) -> f64 { self.bottom - self.top }
    pub fn center(&self) -> Point { Point::new((self.left + self.right) * 0.5, (self.top + self.bottom) * 0.5) }

    /// Shrink by `amount` on every side; collapses to the center instead of inverting.
    pub fn inset(&self, amount: f64) -> Self {
        let dx = amount.min(self.width() * 0.5);
        let dy = amount.min(self.height() * 0.5);
        Self::from_ltrb(self.left + dx, self.top + dy, self.right - dx, self.bottom - dy)
    }

    /// Map a unit-rect point into this rect.
    #[inline]
    pub fn map_unit(&self, p: Point) -> Point {
        Point::new(self.left + p.x * self.width(), self.top + p.y * self.height())
    }

    pub fn contains(&self, p: Point) -> bool {
        self.left <= p.x && p.x <= self.right && self.top <= p.y && p.y <= self.bottom
    }
}

#[inline]
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    if v < lo { lo } else if v > hi { hi } else { v }
}
