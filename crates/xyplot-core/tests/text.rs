// File: crates/xyplot-core/tests/text.rs
// Purpose: Styled titles: markdown runs, lenient byte decoding, axis title accessors.

use xyplot_core::text::HEADING_SIZES;
use xyplot_core::{axis_title, set_axis_title, AxisKey, PlotSettings, StyledText};

#[test]
fn markdown_heading_and_emphasis() {
    let t = StyledText::from_markdown("# **Plot** and *more*");
    assert_eq!(t.as_plain(), "Plot and more");
    assert_eq!(t.runs.len(), 3);
    assert!(t.runs[0].bold && !t.runs[0].italic);
    assert!(!t.runs[1].bold);
    assert!(t.runs[2].italic);
    assert!(t.runs.iter().all(|r| r.size == Some(HEADING_SIZES[0])));

    let plain = StyledText::from_markdown("a * b");
    assert_eq!(plain.as_plain(), "a * b");
    assert_eq!(plain.runs[0].size, None);
}

#[test]
fn bytes_round_trip_and_fallbacks() {
    let t = StyledText::from_markdown("### Right *axis*");
    assert_eq!(StyledText::from_bytes(Some(&t.to_bytes())), t);

    assert!(StyledText::from_bytes(None).is_empty());

    let broken = StyledText::from_bytes(Some(b"\xff\x00junk"));
    assert_eq!(broken.as_plain(), "Could not decode");
    assert_eq!(broken.runs[0].size, Some(HEADING_SIZES[0]));
}

#[test]
fn axis_title_accessors() {
    let mut settings = PlotSettings::default();
    assert!(axis_title(&settings, AxisKey::Secondary).is_empty());
    assert!(!set_axis_title(&mut settings, AxisKey::Secondary, "ignored".into()));
    assert!(settings.s_axis.is_none());

    assert!(set_axis_title(&mut settings, AxisKey::Y, "Volts".into()));
    assert_eq!(AxisKey::Secondary.name(), "s");
    assert_eq!(axis_title(&settings, AxisKey::Y).as_plain(), "Volts");
}
