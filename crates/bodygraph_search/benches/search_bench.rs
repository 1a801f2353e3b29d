use criterion::{Criterion, black_box, criterion_group, criterion_main};
use bodygraph_ephem::AnalyticEphemeris;
use bodygraph_search::{DesignConfig, solve_design_instant};

fn design_bench(c: &mut Criterion) {
    let eph = AnalyticEphemeris::default();
    let config = DesignConfig::standard();
    c.bench_function("solve_design_instant", |b| {
        b.iter(|| solve_design_instant(&eph, black_box(2_441_835.788_194), &config))
    });
}

criterion_group!(benches, design_bench);
criterion_main!(benches);
