use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use ndlerp::{EvalConfig, ExtrapMethod, GridTable, InterpMethod, eval, interpolate_1d, locate};

/// Evenly spaced breakpoints on `[0, 1]`.
fn axis(n: usize) -> Vec<f64> {
    (0..n).map(|i| i as f64 / (n - 1) as f64).collect()
}

/// Smooth samples on an `ndim`-dimensional grid with `n` points per axis.
fn grid_data(ndim: usize, n: usize) -> Vec<f64> {
    let size = n.pow(ndim as u32);
    (0..size)
        .map(|flat| {
            let mut rest = flat;
            let mut acc = 0.0;
            for _ in 0..ndim {
                let x = (rest % n) as f64 / (n - 1) as f64;
                acc += (3.0 * x).sin();
                rest /= n;
            }
            acc
        })
        .collect()
}

fn locate_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("locate");
    for n in [8, 64, 1024] {
        let xs = axis(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &xs, |b, xs| {
            b.iter(|| locate(black_box(0.618), black_box(xs)))
        });
    }
    group.finish();
}

fn kernel_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("interpolate_1d");
    let xs = axis(32);
    let ys: Vec<f64> = xs.iter().map(|x| (3.0 * x).sin()).collect();
    for interp in InterpMethod::ALL {
        let config = EvalConfig::bounded(interp);
        group.bench_function(interp.as_str(), |b| {
            b.iter(|| interpolate_1d(&xs, &ys, black_box(0.4321), &config))
        });
    }
    group.finish();
}

fn nd_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("eval_nd");
    let n = 10;
    let xs = axis(n);
    for ndim in [1, 2, 3, 4] {
        let data = grid_data(ndim, n);
        let shape = vec![n; ndim];
        let coords = vec![&xs[..]; ndim];
        let table =
            GridTable::new(&data, &shape, coords).expect("benchmark table should be valid");
        let point = vec![0.4321; ndim];
        for interp in [
            InterpMethod::Linear,
            InterpMethod::Akima,
            InterpMethod::Steffen,
        ] {
            group.bench_with_input(
                BenchmarkId::new(interp.as_str(), ndim),
                &point,
                |b, point| {
                    b.iter(|| {
                        eval(&table, black_box(point), interp, ExtrapMethod::Hold)
                    })
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, locate_benchmarks, kernel_benchmarks, nd_benchmarks);
criterion_main!(benches);
