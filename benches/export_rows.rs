//! Benchmarks for export row assembly and CSV rendering

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use splitwatch::export::build_export;
use splitwatch::test_utils::{FailingBenchmarkProvider, even_splits, session_with_splits};
use splitwatch::{SessionConfig, StaticBenchmarkProvider, compute_export_row};
use std::hint::black_box;

fn bench_compute_row(c: &mut Criterion) {
    let session = session_with_splits(SessionConfig::new(1, 2000, 100), &[(1, even_splits(20, 21.5))])
        .expect("session");
    let boat = &session.boats()[0];

    c.bench_function("compute_export_row", |b| {
        b.iter(|| compute_export_row(black_box(boat), 2000, black_box(360.0), 20))
    });
}

fn bench_build_and_render(c: &mut Criterion) {
    let runtime = tokio::runtime::Builder::new_current_thread().build().expect("runtime");
    let provider = FailingBenchmarkProvider::new(StaticBenchmarkProvider::new()).failing_for("W8+");
    let mut group = c.benchmark_group("build_and_render");

    for boats in [2u32, 8, 16] {
        let splits: Vec<(u32, Vec<f64>)> = (1..=boats).map(|slot| (slot, even_splits(4, 90.0))).collect();
        let session =
            session_with_splits(SessionConfig::new(boats, 2000, 500), &splits).expect("session");

        group.bench_with_input(BenchmarkId::new("boats", boats), &session, |b, session| {
            b.iter(|| {
                let export = runtime.block_on(build_export(session, &provider)).expect("export");
                black_box(export.to_csv_string().expect("csv"))
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_compute_row, bench_build_and_render);
criterion_main!(benches);
