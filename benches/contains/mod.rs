use avltree::{AvlTree, DuplicatePolicy};
use criterion::{
    measurement::Measurement, BatchSize, BenchmarkGroup, BenchmarkId, Criterion, Throughput,
};

use crate::Lfsr;

#[derive(Debug, Clone, Copy)]
struct BenchName {
    bench: &'static str,
    n_values: usize,
    n_lookups: usize,
}

impl From<BenchName> for BenchmarkId {
    fn from(v: BenchName) -> Self {
        Self::new(
            format!("{}_values_{}_n_lookups", v.n_values, v.bench),
            v.n_lookups,
        )
    }
}

pub(super) fn bench(c: &mut Criterion) {
    let mut g = c.benchmark_group("contains");

    // Tree size
    for n_values in [1_000, 10_000] {
        // Number of lookups
        for n_lookups in [100, 1_000] {
            bench_param(&mut g, n_values, n_lookups)
        }
    }
}

/// For a tree containing `n_values`, perform two benchmarks that each perform
/// `n_lookups`, one run causing all hits, one run causing all misses.
fn bench_param<M>(g: &mut BenchmarkGroup<'_, M>, n_values: usize, n_lookups: usize)
where
    M: Measurement,
{
    // The tree must be at least as big as the number of lookups.
    assert!(n_values >= n_lookups);

    // Generate the tree.
    let mut rand = Lfsr::default();
    let mut t = AvlTree::with_duplicates(DuplicatePolicy::Reject);
    let mut inserted = Vec::with_capacity(n_values);

    for _i in 0..n_values {
        let v = rand.next();
        t.insert(v);
        inserted.push(v);
    }

    // Continue using the LFSR to generate n_lookups values that will all miss,
    // as the LFSR does not repeat values before cycling.
    let bench_name = BenchName {
        bench: "misses",
        n_values,
        n_lookups,
    };
    g.throughput(Throughput::Elements(n_lookups as _)); // Lookups per second
    g.bench_function(BenchmarkId::from(bench_name), |b| {
        b.iter_batched(
            || {
                let mut rand = rand.clone();
                (0..n_lookups).map(|_| rand.next()).collect::<Vec<_>>()
            },
            |lookups| {
                for v in &lookups {
                    assert!(!t.contains(v));
                }
            },
            BatchSize::SmallInput,
        );
    });

    // And then perform a benchmark looking up values known to exist.
    let bench_name = BenchName {
        bench: "hits",
        n_values,
        n_lookups,
    };
    g.throughput(Throughput::Elements(n_lookups as _)); // Lookups per second
    g.bench_function(BenchmarkId::from(bench_name), |b| {
        b.iter(|| {
            for v in &inserted[..n_lookups] {
                assert!(t.contains(v));
            }
        });
    });
}
