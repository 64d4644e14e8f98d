use xyplot_core::{adjust_axis, PlotData, PlotLine, PlotSettings};
use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, black_box};

fn gen_plot(n: usize) -> PlotData {
    let mut primary = PlotLine::new();
    let mut secondary = PlotLine::new().on_secondary(true);
    for i in 0..n {
        let x = i as f64 * 0.03;
        primary.append((x, 2.9 * (-(x - 1.0) * (x - 1.0) * 16.0).exp()));
        secondary.append((x, 0.3 * ((x * std::f64::consts::PI).sin() + 1.0)));
    }
    PlotData::new(vec![primary, secondary], PlotSettings::default().with_secondary(true, false))
}

fn bench_adjust_axis(c: &mut Criterion) {
    let ranges: Vec<(f64, f64)> = (1..1_000).map(|i| (-(i as f64) * 0.731, i as f64 * 13.7)).collect();
    c.bench_function("adjust_axis_1k_ranges", |b| {
        b.iter(|| {
            for &(lo, hi) in &ranges {
                black_box(adjust_axis(black_box(lo), black_box(hi)));
            }
        });
    });
}

fn bench_axes_scale(c: &mut Criterion) {
    let mut group = c.benchmark_group("axes_scale");
    for &n in &[1_000usize, 100_000usize] {
        let data = gen_plot(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter_batched(
                || data.clone(),
                |mut d| { d.axes_scale(); black_box(d.settings.y_axis); },
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_adjust_axis, bench_axes_scale);
criterion_main!(benches);
