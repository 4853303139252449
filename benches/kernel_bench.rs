use criterion::{black_box, criterion_group, criterion_main, Criterion};
use binary_num::*;

fn bench_complex_div(c: &mut Criterion) {
    let a = Complex::new(1.25, -3.5);
    let b = Complex::new(-0.75, 2.0);
    c.bench_function("complex_div", |bench| {
        bench.iter(|| black_box(a) / black_box(b))
    });
}

fn bench_complex_sqrt(c: &mut Criterion) {
    let z = Complex::new(-3.0, 4.0);
    c.bench_function("complex_sqrt", |b| b.iter(|| black_box(z).sqrt()));
}

fn bench_complex_asin(c: &mut Criterion) {
    let z = Complex::new(0.7, -1.2);
    c.bench_function("complex_asin", |b| b.iter(|| black_box(z).asin()));
}

fn bench_complex_roots_100(c: &mut Criterion) {
    let z = Complex::new(-2.0, 1.0);
    c.bench_function("complex_roots_100", |b| b.iter(|| black_box(z).roots(100)));
}

fn bench_split_pow(c: &mut Criterion) {
    let z = SplitComplex::new(-5.0, 3.0);
    c.bench_function("split_pow", |b| b.iter(|| black_box(z).pow(black_box(2.5))));
}

fn bench_dual_tan(c: &mut Criterion) {
    let z = DualNumber::variable(0.8);
    c.bench_function("dual_tan", |b| b.iter(|| black_box(z).tan()));
}

fn bench_mandelbrot_64x64(c: &mut Criterion) {
    let f = EscapeFunction::builder()
        .init(|_: Complex| Complex::ZERO)
        .step(|c, z| z.pow2() + c)
        .escape_test(|z: Complex| z.abs2() > 4.0)
        .max_iters(256)
        .build()
        .unwrap();
    let seeds: Vec<Complex> = (0..64 * 64)
        .map(|k| Complex::new(-2.0 + 3.0 * (k % 64) as f64 / 64.0, -1.5 + 3.0 * (k / 64) as f64 / 64.0))
        .collect();
    c.bench_function("mandelbrot_64x64", |b| {
        b.iter(|| seeds.iter().map(|&s| f.apply(black_box(s)).iters()).sum::<usize>())
    });
}

fn bench_newton_cube(c: &mut Criterion) {
    let f = Newton::new(|z: Complex| z.pow3().minus_real(1.0))
        .derivative(|z: Complex| z.pow2().scale(3.0))
        .build()
        .unwrap();
    let seed = Complex::new(-1.0, 1.5);
    c.bench_function("newton_cube", |b| b.iter(|| f.apply(black_box(seed))));
}

criterion_group!(
    benches,
    bench_complex_div,
    bench_complex_sqrt,
    bench_complex_asin,
    bench_complex_roots_100,
    bench_split_pow,
    bench_dual_tan,
    bench_mandelbrot_64x64,
    bench_newton_cube,
);
criterion_main!(benches);
