//! Benchmarks for split recording and pace formatting
//!
//! Split recording sits on the button-press path, so it should stay well
//! under a display tick even with many boats.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use splitwatch::format::{format_pace, format_total_time, pace_per_500};
use splitwatch::test_utils::{ManualClock, even_splits};
use splitwatch::types::Split;
use splitwatch::{BoatId, Session, SessionConfig};
use std::hint::black_box;
use std::time::Duration;

fn bench_split_derivation(c: &mut Criterion) {
    let first = Split::following(None, 95.3, 500);

    c.bench_function("split_following", |b| {
        b.iter(|| Split::following(black_box(Some(&first)), black_box(191.7), black_box(500)))
    });
}

fn bench_formatting(c: &mut Criterion) {
    let mut group = c.benchmark_group("formatting");

    group.bench_function("pace", |b| {
        b.iter(|| format_pace(pace_per_500(black_box(96.42), black_box(500))))
    });
    group.bench_function("total_time", |b| b.iter(|| format_total_time(black_box(412.876))));

    group.finish();
}

fn bench_full_session(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_session");

    for boats in [1u32, 4, 8] {
        group.bench_with_input(BenchmarkId::new("boats", boats), &boats, |b, &boats| {
            let times = even_splits(20, 30.0);
            b.iter(|| {
                let mut session =
                    Session::new(SessionConfig::new(boats, 2000, 100)).expect("valid config");
                session.start();
                for slot in 1..=boats {
                    for t in &times {
                        let _ = black_box(session.record_split(BoatId::new(slot), *t));
                    }
                }
                session
            })
        });
    }

    group.finish();
}

fn bench_clock_split(c: &mut Criterion) {
    let clock = ManualClock::new();
    let mut session = Session::new(SessionConfig::new(1, 2000, 50)).expect("valid config");
    session.start();

    c.bench_function("record_split_now_at_limit", |b| {
        b.iter(|| {
            clock.advance(Duration::from_millis(10));
            // Past the limit this measures the rejection path
            let _ = black_box(session.record_split_now(BoatId::new(1), &clock));
        })
    });
}

criterion_group!(
    benches,
    bench_split_derivation,
    bench_formatting,
    bench_full_session,
    bench_clock_split
);
criterion_main!(benches);
