use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{rngs::SmallRng, Rng, SeedableRng};
use tides_core::{ElevationGrid, GridLocation, Terrain, TerrainAnalyzer};

fn random_analyzer(size: usize, seed: u64) -> TerrainAnalyzer {
    let mut rng = SmallRng::seed_from_u64(seed);
    let values = (0..size * size).map(|_| rng.gen_range(-10.0..10.0)).collect();
    let grid = ElevationGrid::new(size, size, values).expect("bench grid");
    let sources = vec![GridLocation::new(0, 0), GridLocation::new(size - 1, size - 1)];
    TerrainAnalyzer::new(Terrain::new(grid, sources).expect("bench sources"))
}

fn bench_flood(c: &mut Criterion) {
    let mut group = c.benchmark_group("flood");

    for size in [16usize, 64, 128, 256] {
        let analyzer = random_analyzer(size, 0x71de_5eed);
        group.bench_with_input(BenchmarkId::new("mask", size), &analyzer, |b, analyzer| {
            b.iter(|| analyzer.flooded_regions(2.5));
        });
        group.bench_with_input(BenchmarkId::new("islands", size), &analyzer, |b, analyzer| {
            b.iter(|| analyzer.number_of_islands(2.5));
        });
    }

    group.finish();
}

criterion_group!(flood_benches, bench_flood);
criterion_main!(flood_benches);
