use std::path::Path;

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use ganzhi_base::Gender;
use ganzhi_core::TableSolarTerms;
use ganzhi_search::{chart_report_for, four_pillars_for, luck_schedule};
use ganzhi_time::CivilTime;

const TERMS_PATH: &str = "tests/data/solar_terms_1996_1998.json";

fn chart_bench(c: &mut Criterion) {
    let provider = TableSolarTerms::load(Path::new(TERMS_PATH)).expect("fixture table");
    let birth: CivilTime = "1997-01-21 16:30".parse().expect("valid timestamp");

    let mut group = c.benchmark_group("chart");
    group.bench_function("four_pillars_for", |b| {
        b.iter(|| four_pillars_for(black_box(&provider), black_box(&birth)))
    });
    group.bench_function("chart_report_for", |b| {
        b.iter(|| chart_report_for(black_box(&provider), black_box(&birth)))
    });
    group.finish();
}

fn luck_bench(c: &mut Criterion) {
    let provider = TableSolarTerms::load(Path::new(TERMS_PATH)).expect("fixture table");
    let birth: CivilTime = "1997-01-21 16:30".parse().expect("valid timestamp");

    let mut group = c.benchmark_group("luck");
    group.bench_function("luck_schedule_8", |b| {
        b.iter(|| luck_schedule(black_box(&provider), black_box(&birth), Gender::Female, 8))
    });
    group.finish();
}

criterion_group!(benches, chart_bench, luck_bench);
criterion_main!(benches);
