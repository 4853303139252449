/*
    Arithmetic
*/

use super::*;
use crate::util::{box_infinite, nan_to_zero};

// Multiplies `a + ib` by `c + id`.
//
// The FOIL expansion is exact enough for finite operands but reports NaN
// for products such as `(inf + i NaN) * 2`. When either component of the
// naive result is NaN, the infinite operand is boxed to `+/-1` (finite
// components to `+/-0`), NaNs in the other operand are zeroed, and the
// product is recomputed scaled by infinity (C99 Annex G, `_Cmultd`).
pub(super) fn mul(mut a: f64, mut b: f64, mut c: f64, mut d: f64) -> Complex {
    let ac = a * c;
    let bd = b * d;
    let ad = a * d;
    let bc = b * c;

    let x = ac - bd;
    let y = ad + bc;
    if !(x.is_nan() || y.is_nan()) {
        return Complex::new(x, y);
    }

    let mut recalc = false;
    if a.is_infinite() || b.is_infinite() {
        // `a + ib` is infinite
        a = box_infinite(a);
        b = box_infinite(b);
        c = nan_to_zero(c);
        d = nan_to_zero(d);
        recalc = true;
    }

    if c.is_infinite() || d.is_infinite() {
        // `c + id` is infinite
        c = box_infinite(c);
        d = box_infinite(d);
        a = nan_to_zero(a);
        b = nan_to_zero(b);
        recalc = true;
    }

    if !recalc && (ac.is_infinite() || bd.is_infinite() || ad.is_infinite() || bc.is_infinite()) {
        // finite operands whose partial products overflowed
        a = nan_to_zero(a);
        b = nan_to_zero(b);
        c = nan_to_zero(c);
        d = nan_to_zero(d);
        recalc = true;
    }

    if recalc {
        Complex::new(f64::INFINITY * (a * c - b * d), f64::INFINITY * (a * d + b * c))
    } else {
        Complex::new(x, y)
    }
}

// Divides `a + ib` by `c + id` (Smith, 1962).
//
// A real divisor degrades to scalar division. Otherwise the ratio of the
// smaller to the larger divisor component is used as the pivot so that no
// intermediate exceeds the magnitude of the operands. NaN results from
// infinite/finite and finite/infinite quotients are recovered as in
// C99 Annex G (`_Cdivd`).
pub(super) fn div(a: f64, b: f64, c: f64, d: f64) -> Complex {
    if d == 0.0 {
        return Complex::new(a / c, b / c);
    }

    let (mut x, mut y) = if c.abs() < d.abs() {
        let u = c / d;
        let den = c * u + d;
        ((a * u + b) / den, (b * u - a) / den)
    } else {
        let u = d / c;
        let den = c + d * u;
        ((a + b * u) / den, (b - a * u) / den)
    };

    if x.is_nan() || y.is_nan() {
        if (a.is_infinite() || b.is_infinite()) && c.is_finite() && d.is_finite() {
            // infinite / finite
            let a = box_infinite(a);
            let b = box_infinite(b);
            x = f64::INFINITY * (a * c + b * d);
            y = f64::INFINITY * (b * c - a * d);
        } else if (c.is_infinite() || d.is_infinite()) && a.is_finite() && b.is_finite() {
            // finite / infinite
            let c = box_infinite(c);
            let d = box_infinite(d);
            x = 0.0 * (a * c + b * d);
            y = 0.0 * (b * c - a * d);
        }
    }

    Complex::new(x, y)
}

// Computes `1 / (x + iy)` as `(x - iy) / (x^2 + y^2)`.
//
// Real and imaginary inputs are special-cased so that no spurious signed
// zero appears, `(0, 0)` is the only input mapped to `NaN + NaN i`, and the
// general formula falls back to Smith's division whenever a square
// underflows or the sum overflows.
pub(super) fn inverse(x: f64, y: f64) -> Complex {
    if x == 0.0 && y == 0.0 {
        return Complex::NAN;
    }

    if y == 0.0 {
        return Complex::real(x.recip());
    }

    if x == 0.0 {
        return Complex::imaginary(-y.recip());
    }

    if x.is_infinite() || y.is_infinite() {
        if x.is_nan() || y.is_nan() {
            return Complex::NAN;
        }
        return Complex::new(0.0_f64.copysign(x), 0.0_f64.copysign(-y));
    }

    let x2 = x * x;
    let y2 = y * y;
    let d = x2 + y2;
    if x2 == 0.0 || y2 == 0.0 || d < f64::MIN_POSITIVE || d.is_infinite() {
        div(1.0, 0.0, x, y)
    } else {
        Complex::new(x / d, -y / d)
    }
}
