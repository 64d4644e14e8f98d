use xyplot_core::{tic_polyline, AxisKey, AxisParameters, PlotSettings, Projection, PlotLine, SurfaceSize};
use criterion::{criterion_group, criterion_main, Criterion, black_box};

fn bench_tic_polyline(c: &mut Criterion) {
    let mut settings = PlotSettings::default();
    settings.s_axis = Some(AxisParameters { major_tics: 6, minor_tics: 4, ..AxisParameters::default() });
    let size = SurfaceSize::new(1024.0, 640.0);
    c.bench_function("tic_polyline_secondary", |b| {
        b.iter(|| black_box(tic_polyline(black_box(&settings), true, size)));
    });
}

fn bench_project_line(c: &mut Criterion) {
    let settings = PlotSettings::default()
        .with_axis(AxisKey::X, AxisParameters::new(0.0, 1_000.0))
        .with_axis(AxisKey::Y, AxisParameters::new(-12.0, 12.0));
    let line = PlotLine::from_points((0..50_000).map(|i| (i as f64 * 0.02, (i as f64 * 0.01).sin() * 10.0)));
    let proj = Projection::new(&settings, false, SurfaceSize::new(1024.0, 640.0));
    c.bench_function("project_line_50k", |b| {
        b.iter(|| black_box(proj.project_line(black_box(&line))));
    });
}

criterion_group!(benches, bench_tic_polyline, bench_project_line);
criterion_main!(benches);
