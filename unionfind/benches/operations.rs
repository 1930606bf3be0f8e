use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use unionfind::{DisjointSets, StructureKind};

fn random_pairs(n: usize, count: usize, seed: u64) -> Vec<(usize, usize)> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| (rng.gen_range(0..n), rng.gen_range(0..n)))
        .collect()
}

fn bench_random_unions(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_unions");
    for &n in &[1_000usize, 10_000, 100_000] {
        let pairs = random_pairs(n, n, 42);
        for kind in StructureKind::all() {
            group.bench_with_input(BenchmarkId::new(kind.name(), n), &pairs, |b, pairs| {
                b.iter(|| {
                    let mut s = kind.build(n);
                    for &(x, y) in pairs {
                        let _ = s.union(x, y);
                    }
                    black_box(s.pointer_updates())
                })
            });
        }
    }
    group.finish();
}

fn bench_chain_then_find(c: &mut Criterion) {
    let mut group = c.benchmark_group("chain_then_find");
    let n = 50_000;
    let queries: Vec<usize> = random_pairs(n, n, 7).into_iter().map(|(x, _)| x).collect();
    for kind in StructureKind::all() {
        group.bench_function(kind.name(), |b| {
            b.iter(|| {
                let mut s = kind.build(n);
                for i in 0..n - 1 {
                    let _ = s.union(i, i + 1);
                }
                for &q in &queries {
                    let _ = black_box(s.find(q));
                }
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_random_unions, bench_chain_then_find);
criterion_main!(benches);
