use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::{rngs::StdRng, Rng, SeedableRng};
use strided_slice::{StridedSlice, StridedSliceMut};

fn random_data(len: usize) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(0);
    (0..len).map(|_| rng.gen::<f64>()).collect()
}

// Summing every element: contiguous slice vs unit-stride view.
fn bench_sum_contiguous(c: &mut Criterion) {
    let mut group = c.benchmark_group("sum_contiguous");
    for len in [1_000usize, 100_000, 1_000_000] {
        group.throughput(Throughput::Elements(len as u64));
        let data = random_data(len);

        group.bench_with_input(BenchmarkId::new("slice", len), &len, |b, _| {
            b.iter(|| black_box(&data).iter().sum::<f64>());
        });

        group.bench_with_input(BenchmarkId::new("strided", len), &len, |b, _| {
            let view = StridedSlice::from_slice(&data);
            b.iter(|| black_box(view).iter().sum::<f64>());
        });
    }
    group.finish();
}

// Summing a column of a row-major matrix: `step_by` vs a strided view.
fn bench_sum_column(c: &mut Criterion) {
    let mut group = c.benchmark_group("sum_column");
    for size in [100usize, 500, 1000] {
        group.throughput(Throughput::Elements(size as u64));
        let data = random_data(size * size);

        group.bench_with_input(BenchmarkId::new("step_by", size), &size, |b, &size| {
            b.iter(|| black_box(&data).iter().step_by(size).sum::<f64>());
        });

        group.bench_with_input(BenchmarkId::new("strided", size), &size, |b, &size| {
            let column = StridedSlice::new(&data, size, size as isize).unwrap();
            b.iter(|| black_box(column).iter().sum::<f64>());
        });
    }
    group.finish();
}

// Deriving subviews only touches geometry.
fn bench_subview_chain(c: &mut Criterion) {
    let data = random_data(4096);
    let view = StridedSlice::from_slice(&data);
    c.bench_function("subview_chain", |b| {
        b.iter(|| {
            let v = black_box(view).drop_first(3).skip(5).drop_last(2).reversed();
            (v.len(), v.as_ptr())
        })
    });
}

fn bench_equality(c: &mut Criterion) {
    let mut group = c.benchmark_group("equality");
    let len = 100_000usize;
    let packed = random_data(len);
    let spread: Vec<f64> = packed.iter().flat_map(|&x| [x, -1.0]).collect();
    group.throughput(Throughput::Elements(len as u64));

    group.bench_function("slice", |b| {
        let other = packed.clone();
        b.iter(|| black_box(&packed[..]) == black_box(&other[..]));
    });

    group.bench_function("strided_vs_contiguous", |b| {
        let strided = StridedSlice::new(&spread, len, 2).unwrap();
        let contiguous = StridedSlice::from_slice(&packed);
        b.iter(|| black_box(strided) == black_box(contiguous));
    });
    group.finish();
}

fn bench_fill_strided(c: &mut Criterion) {
    let mut group = c.benchmark_group("fill_strided");
    for stride in [1isize, 2, 8] {
        let len = 100_000usize;
        group.throughput(Throughput::Elements(len as u64));
        let mut data = vec![0.0f64; len * stride as usize];

        group.bench_with_input(BenchmarkId::from_parameter(stride), &stride, |b, &stride| {
            b.iter(|| {
                let mut view = StridedSliceMut::new(&mut data, len, stride).unwrap();
                view.fill(black_box(1.0));
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_sum_contiguous,
    bench_sum_column,
    bench_subview_chain,
    bench_equality,
    bench_fill_strided
);
criterion_main!(benches);
