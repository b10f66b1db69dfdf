use anyhow::Result;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sales_core::raster::render_png_bytes;
use sales_core::svg::to_svg_string;
use sales_core::{
    Bar, BarSelection, Chart, ChartConfig, ChartVariant, Dataset, DatasetState, Metric, Pie, PieSelection,
    Record, Scatter, ScatterSelection, Theme,
};

const CATEGORIES: [&str; 5] = ["Sports", "Home", "Books", "Toys", "Garden"];

fn build_dataset(n: usize) -> Dataset {
    let records = (0..n)
        .map(|i| {
            let sales = (i as f64 * 0.37).sin().abs() * 1_000.0;
            let cost = sales * 0.6;
            Record::new(CATEGORIES[i % CATEGORIES.len()], (2015 + i % 10).to_string())
                .with_sales(sales)
                .with_cost(cost)
                .with_profit(sales - cost)
                .with_rating((i % 50) as f64 / 10.0)
        })
        .collect();
    Dataset::from_records(records)
}

fn bench_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("update");
    for &n in &[10_000usize, 100_000usize] {
        let ds = build_dataset(n);
        let bar = BarSelection { category: "Home".into(), metric: Metric::Profit };
        let pie = PieSelection { year: "2020".into() };
        let scatter = ScatterSelection::default();
        group.bench_function(format!("bar_{n}"), |b| b.iter(|| black_box(Bar::update(&ds, &bar))));
        group.bench_function(format!("pie_{n}"), |b| b.iter(|| black_box(Pie::update(&ds, &pie))));
        group.bench_function(format!("scatter_{n}"), |b| b.iter(|| black_box(Scatter::update(&ds, &scatter))));
    }
    group.finish();
}

fn bench_export(c: &mut Criterion) {
    let data = std::sync::Arc::new(DatasetState::from(build_dataset(2_000)));
    let chart: Chart<Scatter> = Chart::new(ChartConfig::default(), Theme::dashboard(), data);
    let Some(surface) = chart.surface() else { return };

    let mut group = c.benchmark_group("export");
    group.bench_function("svg_scatter_2000", |b| b.iter(|| black_box(to_svg_string(surface, None))));
    group.bench_function("png_scatter_2000", |b| {
        b.iter(|| -> Result<()> {
            let bytes = render_png_bytes(surface)?;
            black_box(bytes);
            Ok(())
        });
    });
    group.finish();
}

criterion_group!(benches, bench_update, bench_export);
criterion_main!(benches);
