/*
    Comparison against MPFR/MPC at high precision
*/

use rug::{Complex as MpComplex, Float};

use binary_num::*;

const PREC: u32 = 256;

const POINTS: [(f64, f64); 12] = [
    (0.5, 0.25),
    (-3.0, 4.0),
    (1e-3, -2.0),
    (-0.75, 1e-9),
    (1.0, 1e-10),
    (0.999, 0.001),
    (2.0, -1e-300),
    (1e150, -1e150),
    (-1e-160, 3e-160),
    (7.5e200, 1.25),
    (-1.0, -1.0),
    (0.0, 2.0),
];

fn mp(x: f64, y: f64) -> MpComplex {
    MpComplex::with_val(PREC, (x, y))
}

// Error of `got` relative to the modulus of `want`.
fn rel_err(got: Complex, want: &MpComplex) -> f64 {
    let wx = want.real().to_f64();
    let wy = want.imag().to_f64();
    let err = (got.x() - wx).hypot(got.y() - wy);
    let scale = wx.hypot(wy);
    if scale == 0.0 {
        err
    } else {
        err / scale
    }
}

fn check<F, G>(name: &str, ours: F, theirs: G, tol: f64)
where
    F: Fn(Complex) -> Complex,
    G: Fn(MpComplex) -> MpComplex,
{
    for &(x, y) in &POINTS {
        let got = ours(Complex::new(x, y));
        let want = theirs(mp(x, y));
        let err = rel_err(got, &want);
        assert!(
            err <= tol,
            "{}({}, {}) = {} (expected {}), relative error {:e}",
            name,
            x,
            y,
            got,
            want.to_string_radix(10, Some(20)),
            err
        );
    }
}

#[test]
fn sqrt() {
    check("sqrt", |z| z.sqrt(), |w| w.sqrt(), 4.0 * f64::EPSILON);
}

#[test]
fn log() {
    check("log", |z| z.log(), |w| w.ln(), 4.0 * f64::EPSILON);
}

#[test]
fn asin() {
    check("asin", |z| z.asin(), |w| w.asin(), 8.0 * f64::EPSILON);
}

#[test]
fn acos() {
    check("acos", |z| z.acos(), |w| w.acos(), 8.0 * f64::EPSILON);
}

#[test]
fn exp() {
    let points = [(0.5, 0.25), (-3.0, 4.0), (1e-3, -2.0), (700.0, 1.0), (-700.0, 2.0), (0.0, 100.0)];
    for &(x, y) in &points {
        let got = Complex::new(x, y).exp();
        let want = mp(x, y).exp();
        let err = rel_err(got, &want);
        assert!(err <= 4.0 * f64::EPSILON, "exp({}, {}) = {}, relative error {:e}", x, y, got, err);
    }
}

#[test]
fn logabs() {
    for &(x, y) in &POINTS {
        let got = Complex::new(x, y).logabs();
        let want = Float::with_val(PREC, x).hypot(&Float::with_val(PREC, y)).ln().to_f64();
        let err = (got - want).abs() / want.abs().max(f64::MIN_POSITIVE);
        assert!(err <= 4.0 * f64::EPSILON, "logabs({}, {}) = {} (expected {})", x, y, got, want);
    }
}
