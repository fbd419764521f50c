use criterion::{Criterion, black_box, criterion_group, criterion_main};
use panchanga_core::{
    AngaConfig, AngaKind, DayConfig, Location, anga_snapshot, build_day_descriptor,
    karana_from_elongation, nakshatra_from_longitude, next_new_moon, next_transition, tithi_at,
    tithi_from_elongation, yoga_from_sum,
};
use panchanga_time::CivilDate;

fn classifier_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("classifiers");
    group.bench_function("tithi_from_elongation", |b| {
        b.iter(|| tithi_from_elongation(black_box(211.75)))
    });
    group.bench_function("karana_from_elongation", |b| {
        b.iter(|| karana_from_elongation(black_box(211.75)))
    });
    group.bench_function("nakshatra_from_longitude", |b| {
        b.iter(|| nakshatra_from_longitude(black_box(123.456)))
    });
    group.bench_function("yoga_from_sum", |b| {
        b.iter(|| yoga_from_sum(black_box(278.31)))
    });
    group.finish();
}

fn instant_bench(c: &mut Criterion) {
    let jd = 2_460_310.75;
    let config = AngaConfig::default();

    let mut group = c.benchmark_group("instants");
    group.bench_function("tithi_at", |b| b.iter(|| tithi_at(black_box(jd))));
    group.bench_function("anga_snapshot", |b| {
        b.iter(|| anga_snapshot(black_box(jd), &config))
    });
    group.finish();
}

fn search_bench(c: &mut Criterion) {
    let jd = 2_460_310.75;
    let config = AngaConfig::default();

    let mut group = c.benchmark_group("searches");
    group.sample_size(20);
    group.bench_function("next_tithi_transition", |b| {
        b.iter(|| next_transition(AngaKind::Tithi, black_box(jd), &config))
    });
    group.bench_function("next_new_moon", |b| b.iter(|| next_new_moon(black_box(jd))));
    group.finish();
}

fn day_bench(c: &mut Criterion) {
    let delhi = Location::new(28.6139, 77.209, 216.0, 5.5);
    let date = CivilDate::new(2024, 3, 20).unwrap();
    let config = DayConfig::default();

    let mut group = c.benchmark_group("day");
    group.sample_size(10);
    group.bench_function("build_day_descriptor", |b| {
        b.iter(|| build_day_descriptor(&delhi, black_box(date), &config))
    });
    group.finish();
}

criterion_group!(
    benches,
    classifier_bench,
    instant_bench,
    search_bench,
    day_bench
);
criterion_main!(benches);
