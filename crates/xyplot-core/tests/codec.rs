// File: crates/xyplot-core/tests/codec.rs
// Purpose: JSON round-trip of the full plot aggregate and lenient decoding.

use xyplot_core::codec::{decode, encode};
use xyplot_core::{
    Argb, AxisParameters, LineCap, LineJoin, LineStyle, MemoryStore, PlotData, PlotError, PlotLine, PlotPoint,
    PlotSettings, PlotStore, PointShape, StyledText, Symbol,
};

fn sample_plot() -> PlotData {
    let primary = PlotLine::from_points((0..20).map(|i| {
        let x = i as f64 * 0.15;
        (x, 2.9 * (-(x - 1.0) * (x - 1.0) * 16.0).exp())
    }))
    .with_color(Argb::RED)
    .with_marker(
        PointShape::new(Symbol::Polygon { sides: 4, open: true, corner_start: false })
            .with_angle_degrees(45.0)
            .with_color(Argb::RED),
    )
    .with_legend("Gaussian");

    let mut style = LineStyle::dashed(2.0, vec![15.0, 5.0]);
    style.line_cap = LineCap::Round;
    style.line_join = LineJoin::Bevel;
    style.dash_phase = 2.5;
    let mut secondary = PlotLine::from_points([(0.0, 0.3), (1.5, 0.6)]).with_color(Argb::BLUE).with_style(style).on_secondary(true);
    secondary.append(PlotPoint::with_label(3.0, 0.3, "end"));

    let mut settings = PlotSettings::default()
        .with_title(StyledText::from_markdown("# **Plot** title"))
        .with_secondary(true, false);
    settings.s_axis = Some(AxisParameters::default().with_title(StyledText::from_markdown("### Right *axis*")));
    settings.selection = Some(1);

    let mut data = PlotData::new(vec![primary, secondary], settings).with_name("Graph 1");
    data.axes_scale();
    data
}

#[test]
fn round_trip_preserves_structure() {
    let data = sample_plot();
    let bytes = encode(&data).expect("encode");
    let back = decode(&bytes).expect("decode");
    assert_eq!(back, data);
    assert_eq!(back.plot_name.as_deref(), Some("Graph 1"));
    assert!(back.plot_lines[1].secondary);
    assert_eq!(back.plot_lines[1].line_style.dash, vec![15.0, 5.0]);
    assert_eq!(back.plot_lines[1].values[2].label.as_deref(), Some("end"));
}

#[test]
fn wire_format_uses_camel_case_and_packed_colors() {
    let json: serde_json::Value = serde_json::from_slice(&encode(&sample_plot()).unwrap()).unwrap();
    assert!(json["plotLines"].is_array());
    assert_eq!(json["plotLines"][0]["lineColor"], serde_json::json!(Argb::RED.0));
    assert_eq!(json["plotLines"][1]["lineStyle"]["lineCap"], 1);
    assert_eq!(json["plotLines"][1]["lineStyle"]["lineJoin"], 2);
    assert!(json["plotLines"][0]["pointShape"]["shapePath"].is_string());
    assert!(json["settings"]["xAxis"]["majorTics"].is_u64());
    assert!(json["settings"]["sAxis"]["title"].is_array());
    assert!(json["settings"]["showSecondaryAxis"].as_bool().unwrap());
}

#[test]
fn missing_fields_take_defaults() {
    let data = decode(br#"{"plotLines":[{"values":[{"x":1,"y":2}]}]}"#).expect("decode");
    assert_eq!(data.settings, PlotSettings::default());
    let line = &data.plot_lines[0];
    assert_eq!(line.line_color, Argb::BLACK);
    assert_eq!(line.line_style, LineStyle::default());
    assert!(line.point_color().is_clear());
    assert_eq!(line.values, vec![PlotPoint::new(1.0, 2.0)]);
}

#[test]
fn unknown_style_codes_fall_back() {
    let data = decode(br#"{"plotLines":[{"lineStyle":{"lineCap":9,"lineJoin":-1}}]}"#).expect("decode");
    assert_eq!(data.plot_lines[0].line_style.line_cap, LineCap::Butt);
    assert_eq!(data.plot_lines[0].line_style.line_join, LineJoin::Miter);
}

#[test]
fn malformed_shape_path_decodes_to_rectangle() {
    let mut value = serde_json::to_value(PointShape::default().with_color(Argb::GREEN)).unwrap();
    value["shapePath"] = serde_json::json!("1 2 zz");
    let shape: PointShape = serde_json::from_value(value).expect("lenient decode");
    assert_eq!(shape.symbol, Symbol::Rectangle);
    assert_eq!(shape.color, Argb::GREEN);
}

#[test]
fn garbage_is_a_decode_error() {
    assert!(matches!(decode(b"not json"), Err(PlotError::Decode(_))));
}

#[test]
fn corrupted_title_keeps_the_rest_of_the_plot() {
    let data = sample_plot();
    let mut json: serde_json::Value = serde_json::from_slice(&encode(&data).unwrap()).unwrap();
    json["settings"]["title"] = serde_json::json!("garbage");
    json["settings"]["sAxis"]["title"] = serde_json::json!({ "runs": 3 });

    let mut store = MemoryStore::new();
    store.save("p", &serde_json::to_vec(&json).unwrap()).unwrap();
    let loaded = PlotData::default().load_from(&store, "p");

    assert_eq!(loaded.plot_lines, data.plot_lines);
    assert_eq!(loaded.settings.title.as_plain(), "Could not decode");
    assert_eq!(loaded.settings.s_axis.as_ref().unwrap().title.as_plain(), "Could not decode");
    assert_eq!(loaded.settings.x_axis, data.settings.x_axis);
}

#[test]
fn non_finite_points_survive_storage() {
    let line = PlotLine::from_points([(0.0, 0.0), (f64::NAN, 1.0), (2.0, f64::INFINITY), (3.0, 3.0)]);
    let data = PlotData::new(vec![line], PlotSettings::default()).with_name("gaps");

    let json: serde_json::Value = serde_json::from_slice(&encode(&data).unwrap()).unwrap();
    assert!(json["plotLines"][0]["values"][1]["x"].is_null());
    assert!(json["plotLines"][0]["values"][2]["y"].is_null());

    let mut store = MemoryStore::new();
    assert!(data.save_to(&mut store));
    let back = PlotData::default().load_from(&store, "gaps");
    let values = &back.plot_lines[0].values;
    assert_eq!(values.len(), 4);
    assert!(values[1].x.is_nan() && values[1].y == 1.0);
    assert!(values[2].y.is_nan());
    assert_eq!(values[3], PlotPoint::new(3.0, 3.0));
}
