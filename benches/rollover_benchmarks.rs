//! Performance benchmarks for the rollover engine.
//!
//! This benchmark suite measures a full rollover run over synthetic
//! employee populations of increasing size.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

use chrono::{DateTime, FixedOffset, TimeZone};
use rust_decimal::Decimal;

use rollover_engine::models::{EmployeeRecord, LedgerEntryDraft, Period};
use rollover_engine::rollover::run_rollover;
use rollover_engine::store::{DocumentStore, MemoryStore};

fn as_of() -> DateTime<FixedOffset> {
    FixedOffset::east_opt(5 * 3600 + 30 * 60)
        .unwrap()
        .with_ymd_and_hms(2026, 1, 25, 0, 0, 0)
        .unwrap()
}

/// Seeds a store with `count` employees; one third each with a shortfall,
/// a surplus, and no current-period entry.
fn seeded_store(count: usize) -> MemoryStore {
    let store = MemoryStore::new();
    let current = Period::new(2026, 1).unwrap();

    for i in 0..count {
        let id = format!("emp_{i:05}");
        store
            .put_employee(EmployeeRecord {
                id: id.clone(),
                display_name: format!("Employee {i}"),
                base_salary: Some(Decimal::new(1000, 0)),
            })
            .unwrap();

        let expenses = match i % 3 {
            0 => Some(Decimal::new(1200, 0)), // shortfall -200
            1 => Some(Decimal::new(700, 0)),  // surplus +300
            _ => None,                        // no entry this period
        };
        if let Some(expenses) = expenses {
            store
                .insert_ledger_entry(LedgerEntryDraft::new(
                    id,
                    current,
                    Decimal::new(1000, 0),
                    expenses,
                ))
                .unwrap();
        }
    }

    store
}

fn bench_rollover_populations(c: &mut Criterion) {
    let mut group = c.benchmark_group("rollover");

    for count in [10usize, 100, 1000] {
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter_batched(
                || seeded_store(count),
                |store| {
                    let outcome = run_rollover(black_box(&store), as_of()).unwrap();
                    assert_eq!(outcome.entries_created, count);
                },
                criterion::BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_rollover_populations);
criterion_main!(benches);
