// File: crates/xyplot-core/tests/autoscale.rs
// Purpose: Validate axis auto-scaling over primary/secondary lines.

use xyplot_core::{AxisParameters, PlotData, PlotLine, PlotPoint, PlotSettings};

fn sample_line() -> PlotLine { PlotLine::from_points([(0.0, 0.0), (1.0, 5.0), (2.0, 3.0)]) }

fn axes(data: &PlotData) -> (AxisParameters, AxisParameters) {
    (data.settings.x_axis.clone().unwrap(), data.settings.y_axis.clone().unwrap())
}

fn assert_finite(data: &PlotData) {
    for axis in [&data.settings.x_axis, &data.settings.y_axis, &data.settings.s_axis].into_iter().flatten() {
        assert!(axis.min.is_finite() && axis.max.is_finite(), "{axis:?}");
        assert!(axis.min < axis.max, "{axis:?}");
        assert!(axis.major_tics >= 1 && axis.minor_tics >= 1, "{axis:?}");
    }
}

#[test]
fn single_line_default_settings() {
    let mut data = PlotData::new(vec![], PlotSettings::default());
    data.add_line(sample_line());

    let (x, y) = axes(&data);
    assert_eq!((x.min, x.max), (0.0, 2.0));
    assert_eq!((x.major_tics, x.minor_tics), (10, 4));
    assert_eq!((y.min, y.max), (0.0, 5.0));
    assert_eq!((y.major_tics, y.minor_tics), (10, 5));
    assert!(data.settings.s_axis.is_none());
}

#[test]
fn shared_tics_align_secondary_grid() {
    let settings = PlotSettings::default().with_secondary(true, false);
    let mut data = PlotData::new(
        vec![sample_line(), PlotLine::from_points([(0.0, 0.0), (1.0, 0.3), (2.0, 0.6)]).on_secondary(true)],
        settings,
    );
    data.axes_scale();

    let y = data.settings.y_axis.clone().unwrap();
    let s = data.settings.s_axis.clone().expect("secondary axis created");
    assert_eq!(y.major_tics, s.major_tics);
    assert_eq!(y.minor_tics, s.minor_tics);
    assert_ne!((y.min, y.max), (s.min, s.max));
    assert!(s.min <= 0.0 && s.max >= 0.6);
    assert_eq!((y.min, y.max), (0.0, 5.0));
}

#[test]
fn independent_tics_scale_secondary_alone() {
    let settings = PlotSettings::default().with_secondary(true, true);
    let mut data = PlotData::new(
        vec![sample_line(), PlotLine::from_points([(0.0, 0.0), (2.0, 0.6)]).on_secondary(true)],
        settings,
    );
    data.axes_scale();

    let s = data.settings.s_axis.clone().unwrap();
    assert_eq!((s.min, s.max, s.major_tics, s.minor_tics), (0.0, 0.6, 6, 5));
    let y = data.settings.y_axis.clone().unwrap();
    assert_eq!((y.min, y.max, y.major_tics), (0.0, 5.0, 10));
}

#[test]
fn hidden_secondary_merges_into_y_and_mirrors_s() {
    let mut settings = PlotSettings::default();
    settings.s_axis = Some(AxisParameters::new(-100.0, 100.0).with_title("Right"));
    let mut data = PlotData::new(
        vec![sample_line(), PlotLine::from_points([(0.0, -1.0)]).on_secondary(true)],
        settings,
    );
    assert!(data.no_secondary());
    data.axes_scale();

    let y = data.settings.y_axis.clone().unwrap();
    assert_eq!((y.min, y.max, y.major_tics), (-1.0, 5.0, 6));
    let s = data.settings.s_axis.clone().unwrap();
    assert_eq!(s.scale(), y.scale());
    assert_eq!(s.title.as_plain(), "Right");
}

#[test]
fn empty_line_is_ignored() {
    let mut data = PlotData::new(vec![PlotLine::new(), sample_line()], PlotSettings::default());
    data.axes_scale();
    let (x, y) = axes(&data);
    assert_eq!((x.min, x.max), (0.0, 2.0));
    assert_eq!((y.min, y.max), (0.0, 5.0));
    assert_finite(&data);
}

#[test]
fn non_finite_points_are_skipped() {
    let mut line = sample_line();
    line.append(PlotPoint::new(f64::NAN, 1.0));
    line.append(PlotPoint::new(1.0, f64::INFINITY));
    let mut data = PlotData::new(vec![line], PlotSettings::default());
    data.axes_scale();
    let (x, y) = axes(&data);
    assert_eq!((x.min, x.max), (0.0, 2.0));
    assert_eq!((y.min, y.max), (0.0, 5.0));
}

#[test]
fn empty_buckets_keep_previous_ranges() {
    let settings = PlotSettings::default().with_axis(xyplot_core::AxisKey::X, AxisParameters::new(-3.0, 7.0));
    let mut data = PlotData::new(vec![PlotLine::new()], settings);
    data.axes_scale();
    let (x, y) = axes(&data);
    assert_eq!((x.min, x.max), (-3.0, 7.0));
    assert_eq!((y.min, y.max), (0.0, 1.0));

    let mut bare = PlotData::new(vec![], PlotSettings { x_axis: None, y_axis: None, ..PlotSettings::default() });
    bare.axes_scale();
    assert_eq!(bare.settings.x_axis, Some(AxisParameters::default()));
    assert_eq!(bare.settings.y_axis, Some(AxisParameters::default()));
}

#[test]
fn scaling_is_idempotent() {
    let settings = PlotSettings::default().with_secondary(true, false);
    let mut data = PlotData::new(
        vec![sample_line(), PlotLine::from_points([(0.5, 12.0), (1.5, -7.0)]).on_secondary(true)],
        settings,
    );
    data.axes_scale();
    let once = data.settings.clone();
    data.axes_scale();
    assert_eq!(data.settings, once);
}

#[test]
fn titles_and_visibility_survive_scaling() {
    let mut settings = PlotSettings::default();
    settings.y_axis = Some(AxisParameters { show: false, ..AxisParameters::default().with_title("Volts") });
    let mut data = PlotData::new(vec![sample_line()], settings);
    data.axes_scale();
    let y = data.settings.y_axis.clone().unwrap();
    assert_eq!(y.title.as_plain(), "Volts");
    assert!(!y.show);
    assert_eq!(y.max, 5.0);
}

#[test]
fn scale_axes_respects_auto_scale_flag() {
    let settings = PlotSettings { auto_scale: false, ..PlotSettings::default() };
    let mut data = PlotData::new(vec![], settings);
    data.add_line(sample_line());
    let (_, y) = axes(&data);
    assert_eq!((y.min, y.max), (0.0, 1.0));

    data.axes_scale();
    let (_, y) = axes(&data);
    assert_eq!((y.min, y.max), (0.0, 5.0));
}

#[test]
fn appending_points_rescales() {
    let mut data = PlotData::new(vec![sample_line()], PlotSettings::default());
    assert!(data.append_point(0, (4.0, 9.5)));
    let (x, y) = axes(&data);
    assert_eq!((x.min, x.max), (0.0, 4.0));
    assert_eq!((y.min, y.max), (0.0, 10.0));
    assert!(!data.append_point(7, (1.0, 1.0)));

    assert!(data.clear_line(0));
    assert!(data.plot_lines[0].is_empty());
    assert_finite(&data);
}

#[test]
fn secondary_flags() {
    let data = PlotData::new(vec![sample_line()], PlotSettings::default().with_secondary(true, false));
    assert!(data.has_primary_lines());
    assert!(!data.has_secondary_lines());
    assert!(data.no_secondary());
    assert!(!data.show_secondary());

    let data = PlotData::new(
        vec![sample_line(), sample_line().on_secondary(true)],
        PlotSettings::default().with_secondary(true, false),
    );
    assert!(!data.no_secondary());
    assert!(data.show_secondary());
}
