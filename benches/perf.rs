use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use wcq_sim::simulate::Simulator;
use wcq_sim::tables;
use wcq_sim::win_prob::{MatchTable, ModelParams};

fn bench_match_table_build(c: &mut Criterion) {
    let t = tables::afc_group_c().expect("builtin tables");
    let params = ModelParams::default();

    c.bench_function("match_table_build", |b| {
        b.iter(|| {
            let table = MatchTable::build(black_box(&t), black_box(&params)).unwrap();
            black_box(table.len());
        })
    });
}

fn bench_single_trial(c: &mut Criterion) {
    let t = tables::afc_group_c().expect("builtin tables");
    let table = MatchTable::build(&t, &ModelParams::default()).unwrap();
    let sim = Simulator::new(&t, &table, "idn", 7).unwrap();

    let mut trial = 0u64;
    c.bench_function("single_trial", |b| {
        b.iter(|| {
            trial = trial.wrapping_add(1);
            let r = sim.run_trial(black_box(trial));
            black_box(r.target_position);
        })
    });
}

fn bench_parallel_run(c: &mut Criterion) {
    let t = tables::afc_group_c().expect("builtin tables");
    let table = MatchTable::build(&t, &ModelParams::default()).unwrap();
    let sim = Simulator::new(&t, &table, "idn", 7).unwrap();
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(4)
        .build()
        .expect("pool");

    c.bench_function("parallel_run_10k", |b| {
        b.iter(|| {
            let report = sim.run_parallel(black_box(10_000), &pool).unwrap();
            black_box(report.direct);
        })
    });
}

criterion_group!(
    perf,
    bench_match_table_build,
    bench_single_trial,
    bench_parallel_run
);
criterion_main!(perf);
