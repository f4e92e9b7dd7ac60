use avltree::AvlTree;
use criterion::{measurement::Measurement, BenchmarkGroup, BenchmarkId, Criterion, Throughput};

use crate::Lfsr;

#[derive(Debug)]
struct BenchName {
    order: &'static str,
    n_values: usize,
}

impl From<BenchName> for BenchmarkId {
    fn from(v: BenchName) -> Self {
        Self::new(format!("{}/n_values", v.order), v.n_values)
    }
}

pub(super) fn bench(c: &mut Criterion) {
    let mut g = c.benchmark_group("insert");

    for n_values in [1, 100, 1_000, 10_000] {
        bench_ascending(&mut g, n_values);
        bench_descending(&mut g, n_values);
        bench_random(&mut g, n_values);
    }
}

/// Define a benchmark measuring the time needed to insert `n_values` values,
/// generated in the order produced by `$values`, into an empty tree.
macro_rules! insert_bench {
    (
        $order:ident,
        $values:expr
    ) => {
        paste::paste! {
            fn [<bench_ $order>]<M>(g: &mut BenchmarkGroup<'_, M>, n_values: usize)
            where
                M: Measurement,
            {
                let bench_name = BenchName {
                    order: stringify!($order),
                    n_values,
                };

                // Values inserted per second
                g.throughput(Throughput::Elements(n_values as _));
                g.bench_function(BenchmarkId::from(bench_name), |b| {
                    b.iter_batched(
                        || {
                            let values: Vec<u16> = $values(n_values);
                            (AvlTree::default(), values)
                        },
                        |(mut t, values)| {
                            for v in values {
                                t.insert(v);
                            }
                            t
                        },
                        criterion::BatchSize::PerIteration,
                    );
                });
            }
        }
    };
}

insert_bench!(ascending, |n: usize| (0..n as u16).collect());
insert_bench!(descending, |n: usize| (0..n as u16).rev().collect());
insert_bench!(random, |n: usize| {
    let mut rand = Lfsr::default();
    (0..n).map(|_| rand.next()).collect()
});
