//! Criterion benchmarks for grid construction and index building.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use datepicker_core::{
    build_grid, BlockedDateIndex, BlockedDateRecord, CalendarDate, Constraints, VisibleMonth,
};

fn fixture_records(count: u32) -> Vec<BlockedDateRecord> {
    (0..count)
        .map(|i| BlockedDateRecord {
            day: format!("2020-{:02}-{:02}", i % 12 + 1, i % 28 + 1),
            reason: "Nu onorăm comenzi în această zi.".to_string(),
        })
        .collect()
}

fn bench_build_grid(c: &mut Criterion) {
    let (blocked, _) = BlockedDateIndex::build(&fixture_records(48));
    let constraints = Constraints {
        min_date: Some(CalendarDate::new(2020, 2, 16)),
        blocked,
    };
    let today = CalendarDate::new(2020, 2, 15);
    let visible = VisibleMonth {
        year: 2020,
        month: 2,
    };
    let selection = Some(CalendarDate::new(2020, 2, 20));

    c.bench_function("build_grid march_2020", |b| {
        b.iter(|| {
            build_grid(
                black_box(visible),
                black_box(today),
                black_box(&constraints),
                black_box(selection),
            )
        })
    });
}

fn bench_build_index(c: &mut Criterion) {
    let records = fixture_records(365);

    c.bench_function("blocked_index build 365", |b| {
        b.iter(|| BlockedDateIndex::build(black_box(&records)))
    });
}

criterion_group!(benches, bench_build_grid, bench_build_index);
criterion_main!(benches);
