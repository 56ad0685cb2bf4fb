use bar_line_chart::api::{BarLineChart, FrameStyle, StyleEnvironment};
use bar_line_chart::core::{ChartDataPoint, Legend, ValueScale, Viewport};
use bar_line_chart::render::Color;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn generated_points(count: usize, tag: &str) -> Vec<ChartDataPoint> {
    (0..count)
        .map(|i| {
            let t = i as f64;
            let shade = (i % 16) as f64 / 16.0;
            ChartDataPoint::new(
                100.0 + (t * 0.1).sin() * 40.0,
                format!("{tag}{i}"),
                Legend::new(format!("{tag}{}", i % 8), Color::rgb(shade, 0.4, 1.0 - shade)),
            )
        })
        .collect()
}

fn bench_value_scale_fit_10k(c: &mut Criterion) {
    let values: Vec<f64> = (0..10_000).map(|i| (i as f64 * 0.01).cos() * 250.0).collect();

    c.bench_function("value_scale_fit_10k", |b| {
        b.iter(|| {
            let _ = ValueScale::fit(black_box(values.iter().copied()), black_box(None));
        })
    });
}

fn bench_compose_2k(c: &mut Criterion) {
    let chart = BarLineChart::new(generated_points(2_000, "bar"), generated_points(2_000, "line"))
        .with_limit(ChartDataPoint::new(
            150.0,
            "limit",
            Legend::new("limit", Color::rgb(0.2, 0.2, 0.2)),
        ));
    let environment = StyleEnvironment::new();

    c.bench_function("bar_line_compose_2k", |b| {
        b.iter(|| {
            let _ = black_box(chart.render(black_box(&environment)));
        })
    });
}

fn bench_render_frame_2k(c: &mut Criterion) {
    let chart = BarLineChart::new(generated_points(2_000, "bar"), generated_points(2_000, "line"));
    let environment = StyleEnvironment::new();
    let frame_style = FrameStyle::default();

    c.bench_function("bar_line_render_frame_2k", |b| {
        b.iter(|| {
            let _ = chart
                .render_frame(
                    black_box(&environment),
                    black_box(Viewport::new(1600, 900)),
                    black_box(&frame_style),
                )
                .expect("frame build should succeed");
        })
    });
}

criterion_group!(
    benches,
    bench_value_scale_fit_10k,
    bench_compose_2k,
    bench_render_frame_2k
);
criterion_main!(benches);
