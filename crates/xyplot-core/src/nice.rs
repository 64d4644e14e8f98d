// File: crates/xyplot-core/src/nice.rs
// Summary: "Nice" axis auto-scaling: rounded extents plus major/minor tic counts.
//
// Steps are drawn from the ladder {1, 2, 2.5, 5} x 10^e. For a raw [min, max] the
// smallest step whose rounded extent needs at most `MAX_MAJOR_TICS` major
// divisions wins. Extents are rounded outward to step multiples, so data is
// never clipped.

use tracing::warn;

use crate::axis::{DEFAULT_MAJOR_TICS, DEFAULT_MINOR_TICS, MAX_TICS};

/// Upper bound on major divisions chosen by [`adjust_axis`].
pub const MAX_MAJOR_TICS: usize = 10;

/// Leading digits of the candidate steps.
pub const NICE_MANTISSAS: [f64; 4] = [1.0, 2.0, 2.5, 5.0];

/// Minor divisions per major step, indexed like [`NICE_MANTISSAS`].
const MINOR_FOR_MANTISSA: [usize; 4] = [5, 4, 5, 5];

/// Relative tolerance when snapping a quotient onto an integer step count.
const SNAP: f64 = 1e-9;

/// Spans below this are treated as zero-length.
const MIN_SPAN: f64 = 1e-280;
/// Extrema beyond this would overflow the rounded extent.
const MAX_MAGNITUDE: f64 = 1e300;

/// A rounded axis extent with its tic counts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisScale {
    pub min: f64,
    pub max: f64,
    pub major_tics: usize,
    pub minor_tics: usize,
}

impl Default for AxisScale {
    fn default() -> Self {
        Self { min: 0.0, max: 1.0, major_tics: DEFAULT_MAJOR_TICS, minor_tics: DEFAULT_MINOR_TICS }
    }
}

impl AxisScale {
    /// Distance between major tics.
    pub fn step(&self) -> f64 { (self.max - self.min) / self.major_tics.max(1) as f64 }
}

/// One rung of the step ladder: `NICE_MANTISSAS[index] * 10^exponent`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct NiceStep {
    index: usize,
    exponent: i32,
}

impl NiceStep {
    /// First rung one decade below the span's own decade.
    fn below(span: f64) -> Self {
        Self { index: 0, exponent: span.log10().floor() as i32 - 1 }
    }

    fn next(self) -> Self {
        if self.index + 1 < NICE_MANTISSAS.len() {
            Self { index: self.index + 1, exponent: self.exponent }
        } else {
            Self { index: 0, exponent: self.exponent + 1 }
        }
    }

    fn value(&self) -> f64 { self.multiple(1.0) }

    /// `k` steps as the double nearest the exact decimal `k * mantissa * 10^e`.
    fn multiple(&self, k: f64) -> f64 { scale_pow10(k * NICE_MANTISSAS[self.index], self.exponent) }

    fn minor_tics(&self) -> usize { MINOR_FOR_MANTISSA[self.index] }

    /// Lowest multiple `k` with `k * step <= v`.
    fn floor_count(&self, v: f64) -> f64 {
        let mut k = snapped(v / self.value(), f64::floor);
        if self.multiple(k) > v {
            k -= 1.0;
        }
        k
    }

    /// Highest multiple `k` with `k * step >= v`.
    fn ceil_count(&self, v: f64) -> f64 {
        let mut k = snapped(v / self.value(), f64::ceil);
        if self.multiple(k) < v {
            k += 1.0;
        }
        k
    }
}

/// Multiply or divide by an exact power of ten so decimal grid values stay exact.
fn scale_pow10(v: f64, exponent: i32) -> f64 {
    if exponent >= 0 {
        v * 10f64.powi(exponent)
    } else {
        v / 10f64.powi(-exponent)
    }
}

fn snapped(q: f64, round: fn(f64) -> f64) -> f64 {
    let r = q.round();
    if (q - r).abs() <= SNAP * r.abs().max(1.0) { r } else { round(q) }
}

/// Widen a zero-length or numerically negligible range.
///
/// Fallback width is `max(1, |value|)`, centered on the value: `5` becomes
/// `[2.5, 7.5]`, `0` becomes `[-0.5, 0.5]`.
fn widen_degenerate(min: f64, max: f64) -> (f64, f64) {
    let magnitude = min.abs().max(max.abs());
    if max - min > magnitude * f64::EPSILON * 16.0 && max - min > MIN_SPAN {
        return (min, max);
    }
    let center = (min + max) * 0.5;
    let half = center.abs().max(1.0) * 0.5;
    (center - half, center + half)
}

/// Normalize raw extrema: order them and widen degenerate spans.
/// Returns `None` when the inputs are not finite or the span overflows.
fn prepare(min: f64, max: f64) -> Option<(f64, f64)> {
    if !min.is_finite() || !max.is_finite() || min.abs().max(max.abs()) > MAX_MAGNITUDE {
        return None;
    }
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    let (lo, hi) = widen_degenerate(lo, hi);
    Some((lo, hi))
}

/// Round `[min, max]` outward to a nice step and pick tic counts.
///
/// Non-finite input yields the default `[0,1]` scale; `min > max` is swapped;
/// `min == max` is widened as described in [`widen_degenerate`].
pub fn adjust_axis(min: f64, max: f64) -> AxisScale {
    let Some((lo, hi)) = prepare(min, max) else {
        warn!("adjust_axis: unusable range [{min}, {max}], using default scale");
        return AxisScale::default();
    };

    let mut step = NiceStep::below(hi - lo);
    loop {
        let k_lo = step.floor_count(lo);
        let k_hi = step.ceil_count(hi);
        let major = (k_hi - k_lo) as usize;
        if major <= MAX_MAJOR_TICS {
            return AxisScale {
                min: step.multiple(k_lo),
                max: step.multiple(k_hi),
                major_tics: major.max(1),
                minor_tics: step.minor_tics(),
            };
        }
        step = step.next();
    }
}

/// Round `[min, max]` outward to a nice step using exactly `major_tics` divisions.
///
/// Used for a secondary axis that shares the primary axis's tic geometry: the
/// gridlines line up even though the two extents differ. Counts are clamped
/// to `1..=MAX_TICS`.
pub fn adjust_axis_with_tics(min: f64, max: f64, major_tics: usize, minor_tics: usize) -> AxisScale {
    let major_tics = major_tics.clamp(1, MAX_TICS);
    let minor_tics = minor_tics.clamp(1, MAX_TICS);
    let Some((lo, hi)) = prepare(min, max) else {
        warn!("adjust_axis_with_tics: unusable range [{min}, {max}], using default scale");
        return AxisScale { major_tics, minor_tics, ..AxisScale::default() };
    };

    // Past this step size every further rung fails the same way.
    let limit = 2.0 * lo.abs().max(hi.abs());
    let mut step = NiceStep::below((hi - lo) / major_tics as f64);
    loop {
        let k_lo = step.floor_count(lo);
        let top = step.multiple(k_lo + major_tics as f64);
        if top >= hi {
            return AxisScale { min: step.multiple(k_lo), max: top, major_tics, minor_tics };
        }
        if step.value() > limit {
            // A single division cannot straddle zero on a step grid; keep the free extent.
            let free = adjust_axis(lo, hi);
            return AxisScale { min: free.min, max: free.max, major_tics, minor_tics };
        }
        step = step.next();
    }
}

/// True when `step` is one of the ladder values `{1, 2, 2.5, 5} x 10^e`.
pub fn is_nice_step(step: f64) -> bool {
    if !(step.is_finite() && step > 0.0) {
        return false;
    }
    let exponent = step.log10().floor() as i32;
    [exponent - 1, exponent, exponent + 1].iter().any(|&e| {
        NICE_MANTISSAS
            .iter()
            .any(|&m| ((step - scale_pow10(m, e)) / step).abs() < 1e-9)
    })
}
