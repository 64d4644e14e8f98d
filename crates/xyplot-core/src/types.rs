// File: crates/xyplot-core/src/types.rs
// Summary: Shared value types (data points, colors, surface sizes, normalized positions).

use serde::{Deserialize, Serialize};

/// Default surface width in pixels.
pub const WIDTH: i32 = 1024;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 640;

/// One data sample of a line. The label is carried but not drawn.
///
/// Non-finite coordinates are stored as `null` and read back as NaN.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlotPoint {
    #[serde(with = "nullable_f64")]
    pub x: f64,
    #[serde(with = "nullable_f64")]
    pub y: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl PlotPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, label: None }
    }

    pub fn with_label(x: f64, y: f64, label: impl Into<String>) -> Self {
        Self { x, y, label: Some(label.into()) }
    }

    #[inline]
    pub fn is_finite(&self) -> bool { self.x.is_finite() && self.y.is_finite() }
}

mod nullable_f64 {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(v: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        v.is_finite().then_some(*v).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
    }
}

impl From<(f64, f64)> for PlotPoint {
    fn from((x, y): (f64, f64)) -> Self { Self::new(x, y) }
}

/// Packed 32-bit ARGB color (alpha in the top byte).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Argb(pub u32);

impl Argb {
    pub const CLEAR: Argb = Argb(0x0000_0000);
    pub const BLACK: Argb = Argb(0xFF00_0000);
    pub const WHITE: Argb = Argb(0xFFFF_FFFF);
    pub const RED: Argb = Argb(0xFFFF_3B30);
    pub const GREEN: Argb = Argb(0xFF34_C759);
    pub const BLUE: Argb = Argb(0xFF00_7AFF);
    pub const ORANGE: Argb = Argb(0xFFFF_9500);
    pub const PURPLE: Argb = Argb(0xFFAF_52DE);

    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Argb(((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }
    pub const fn a(self) -> u8 { (self.0 >> 24) as u8 }
    pub const fn r(self) -> u8 { (self.0 >> 16) as u8 }
    pub const fn g(self) -> u8 { (self.0 >> 8) as u8 }
    pub const fn b(self) -> u8 { self.0 as u8 }

    /// Fully transparent colors mark "don't draw" for lines and markers.
    pub const fn is_clear(self) -> bool { self.a() == 0 }
}

/// Drawing-surface size in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceSize {
    pub width: f64,
    pub height: f64,
}

impl SurfaceSize {
    pub const fn new(width: f64, height: f64) -> Self { Self { width, height } }

    /// Diagonal length; tic lengths are fractions of it.
    pub fn diagonal(&self) -> f64 { (self.width * self.width + self.height * self.height).sqrt() }
}

/// A position expressed as fractions of the surface, each in `0..=1`.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct NormPoint {
    pub x: f64,
    pub y: f64,
}

impl NormPoint {
    pub const fn new(x: f64, y: f64) -> Self { Self { x, y } }
}

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(96, 40, 64, 88)
    }
}
