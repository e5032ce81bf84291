use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use tracklens::aggregate::{aggregate, Field, GenreGrouping, NumericBins, StatsMode, TOP_GENRES};
use tracklens::dataset::Record;
use tracklens::selection::RecordFilter;
use tracklens::views::perceptive;

fn synthetic_tracks(n: usize) -> Vec<Record> {
    let mut rng = fastrand::Rng::with_seed(42);
    (0..n)
        .map(|i| {
            let genre = TOP_GENRES[i % TOP_GENRES.len()];
            Record::new(genre)
                .with(Field::Year, 1960.0 + rng.f64() * 64.0)
                .with(Field::Popularity, rng.f64() * 100.0)
                .with(Field::Valence, rng.f64())
                .with(Field::Energy, rng.f64())
                .with(Field::Danceability, rng.f64())
        })
        .collect()
}

fn criterion_benchmark(c: &mut Criterion) {
    let records = synthetic_tracks(100_000);
    let genres = GenreGrouping::new();

    c.bench_function("genre year stats (100k tracks)", |b| {
        b.iter(|| {
            aggregate(
                black_box(&records),
                &genres,
                &[Field::Year],
                StatsMode::MeanAndDeviation,
            )
        })
    });

    c.bench_function("popularity bins (100k tracks)", |b| {
        b.iter(|| {
            let bins = NumericBins::observe(black_box(&records), Field::Popularity, 10);
            bins.map(|bins| aggregate(&records, &bins, &[Field::Popularity], StatsMode::Mean))
        })
    });

    c.bench_function("perceptive view (100k tracks)", |b| {
        b.iter(|| perceptive::build(black_box(&records), &RecordFilter::default(), 10))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
