use rayon::prelude::*;

use binary_num::*;

fn mandelbrot(max_iters: usize) -> EscapeFunction<Complex> {
    EscapeFunction::builder()
        .init(|_: Complex| Complex::ZERO)
        .step(|c, z| z.pow2() + c)
        .escape_test(|z: Complex| z.abs2() > 4.0)
        .max_iters(max_iters)
        .include_init(true)
        .build()
        .unwrap()
}

fn grid(n: usize) -> Vec<Complex> {
    let step = 3.0 / n as f64;
    (0..n * n)
        .map(|k| Complex::new(-2.0 + step * (k % n) as f64, -1.5 + step * (k / n) as f64))
        .collect()
}

#[test]
fn interior_points_are_contained() {
    let f = mandelbrot(200);
    for c in [Complex::ZERO, Complex::real(-1.0), Complex::new(-0.1, 0.1), Complex::real(0.25)] {
        let r = f.apply(c);
        assert!(r.is_contained(), "{} -> {:?}", c, r);
        assert_eq!(r.iters(), 0);
        assert_eq!(r.max_iters(), 200);
    }
}

#[test]
fn contained_reports_the_last_iterate() {
    // an escape test that never holds runs past the cap
    let f = EscapeFunction::builder()
        .step(|_, z: f64| z + 1.0)
        .escape_test(|_: f64| false)
        .max_iters(5)
        .build()
        .unwrap();

    let r = f.apply(1.0);
    assert!(r.is_contained());
    assert_eq!(r.iters(), 0);
    assert_eq!(r.max_iters(), 5);
    assert_eq!(r.z(), 7.0);
    assert_eq!(r, EscapeTimeResult::Contained { max_iters: 5, z: 7.0 });

    // counting the initial iterate stops one step earlier
    let f = EscapeFunction::builder()
        .step(|_, z: f64| z + 1.0)
        .escape_test(|_: f64| false)
        .max_iters(5)
        .include_init(true)
        .build()
        .unwrap();
    assert_eq!(f.apply(1.0), EscapeTimeResult::Contained { max_iters: 5, z: 6.0 });
}

#[test]
fn exterior_points_escape() {
    let f = mandelbrot(200);

    // 0 -> 1 + i -> 1 + 3i, with the initial zero counted
    let r = f.apply(Complex::new(1.0, 1.0));
    assert_eq!(
        r,
        EscapeTimeResult::Escaped {
            iters: 3,
            max_iters: 200,
            z: Complex::new(1.0, 3.0)
        }
    );

    let r = f.apply(Complex::real(2.5));
    assert!(r.is_escaped());
    assert_eq!(r.iters(), 2);
}

#[test]
fn shortcut_reports_the_seed() {
    // points inside the main cardioid never escape
    let cardioid = |c: Complex| {
        let q = (c.x() - 0.25).powi(2) + c.y() * c.y();
        q * (q + (c.x() - 0.25)) <= 0.25 * c.y() * c.y()
    };
    let f = EscapeFunction::builder()
        .init(|_: Complex| Complex::ZERO)
        .shortcut_containment_test(cardioid)
        .step(|c, z: Complex| z.pow2() + c)
        .containment_test(|z: Complex| z.abs2() <= 4.0)
        .max_iters(50)
        .build()
        .unwrap();

    let c = Complex::new(-0.2, 0.3);
    assert_eq!(f.apply(c), EscapeTimeResult::Contained { max_iters: 50, z: c });
}

#[test]
fn split_complex_iteration() {
    // the hyperbolic analogue of the Mandelbrot iteration
    let f = EscapeFunction::builder()
        .init(|_: SplitComplex| SplitComplex::ZERO)
        .step(|c, z: SplitComplex| z.pow2() + c)
        .escape_test(|z: SplitComplex| z.x().abs() + z.y().abs() > 4.0)
        .max_iters(100)
        .build()
        .unwrap();

    assert!(f.apply(SplitComplex::new(-0.5, 0.2)).is_contained());
    assert!(f.apply(SplitComplex::new(0.5, 0.0)).is_escaped());
}

#[test]
fn results_are_bit_identical_across_threads() {
    let f = mandelbrot(100);
    let seeds = grid(64);

    let sequential: Vec<EscapeTimeResult<Complex>> = seeds.iter().map(|&c| f.apply(c)).collect();
    for _ in 0..4 {
        let parallel: Vec<EscapeTimeResult<Complex>> = seeds.par_iter().map(|&c| f.apply(c)).collect();
        for (a, b) in sequential.iter().zip(parallel.iter()) {
            assert_eq!(a.iters(), b.iters());
            assert_eq!(a.is_escaped(), b.is_escaped());
            assert_eq!(a.z().x().to_bits(), b.z().x().to_bits());
            assert_eq!(a.z().y().to_bits(), b.z().y().to_bits());
        }
    }
}

#[test]
fn shared_compute_function() {
    let f = mandelbrot(50).into_fn();
    let seeds = grid(16);

    let counts: Vec<usize> = seeds
        .par_iter()
        .map({
            let f = f.clone();
            move |&c| f(c).iters()
        })
        .collect();

    for (c, n) in seeds.iter().zip(counts) {
        assert_eq!(f(*c).iters(), n);
    }
}
