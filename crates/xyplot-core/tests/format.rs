// File: crates/xyplot-core/tests/format.rs
// Purpose: printf-style label formatting.

use xyplot_core::{NumberFormat, PlotError};

fn fmt(spec: &str, v: f64) -> String { NumberFormat::parse(spec).expect(spec).format(v) }

#[test]
fn general_matches_c_semantics() {
    assert_eq!(fmt("%g", 0.5), "0.5");
    assert_eq!(fmt("%g", 2.5), "2.5");
    assert_eq!(fmt("%g", -3.0), "-3");
    assert_eq!(fmt("%g", 0.0), "0");
    assert_eq!(fmt("%g", 123456.0), "123456");
    assert_eq!(fmt("%g", 1e6), "1e+06");
    assert_eq!(fmt("%g", 0.0001), "0.0001");
    assert_eq!(fmt("%g", 1e-5), "1e-05");
    assert_eq!(fmt("%g", 0.1 + 0.2), "0.3");
    assert_eq!(fmt("%G", 1e-7), "1E-07");
    assert_eq!(fmt("%.3g", 3.14159), "3.14");
}

#[test]
fn fixed_and_exponent() {
    assert_eq!(fmt("%.2f", 3.14159), "3.14");
    assert_eq!(fmt("%f", 1.5), "1.500000");
    assert_eq!(fmt("%12.3e|", 1234.56), "   1.235e+03|");
    assert_eq!(fmt("%.1E", 0.00042), "4.2E-04");
}

#[test]
fn flags_width_and_literals() {
    assert_eq!(fmt("%+.1f", 2.0), "+2.0");
    assert_eq!(fmt("%05.1f", -2.5), "-02.5");
    assert_eq!(fmt("%-6g|", 1.5), "1.5   |");
    assert_eq!(fmt("% g", 7.0), " 7");
    assert_eq!(fmt("x=%g%%", 50.0), "x=50%");
    assert_eq!(fmt("%lf V", 1.25), "1.250000 V");
}

#[test]
fn non_finite_values() {
    assert_eq!(fmt("%g", f64::NAN), "nan");
    assert_eq!(fmt("%g", f64::INFINITY), "inf");
    assert_eq!(fmt("%5.1f", f64::NEG_INFINITY), " -inf");
}

#[test]
fn invalid_specs_are_rejected() {
    for spec in ["%d", "abc", "%g %g", "%", "100%"] {
        assert!(matches!(NumberFormat::parse(spec), Err(PlotError::InvalidFormat(_))), "{spec}");
    }
    assert_eq!(NumberFormat::parse_or_default("%q"), NumberFormat::default());
}

#[test]
fn display_round_trips_spec() {
    for spec in ["%g", "%.2f", "%-8.3e", "x=%+g%%"] {
        assert_eq!(NumberFormat::parse(spec).unwrap().to_string(), spec);
    }
}
