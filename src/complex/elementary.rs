/*
    Elementary functions
*/

use super::*;
use crate::util::zero_times;

// Above this exponent `exp(x)` overflows although `exp(x) * cos(y)` may not.
const EXP_OVERFLOW: f64 = 709.0;

// Above this magnitude `|x| + hypot(x, y)` may overflow.
const SQRT_LARGE: f64 = f64::MAX / 4.0;

// Below this magnitude `|x| + hypot(x, y)` loses precision to subnormals.
const SQRT_SMALL: f64 = f64::MIN_POSITIVE * 4.0;

// Returns `hypot(x, y)`. Infinite if either component is infinite,
// even when the other one is NaN.
pub(super) fn abs(x: f64, y: f64) -> f64 {
    if x.is_infinite() || y.is_infinite() {
        f64::INFINITY
    } else if x.is_nan() || y.is_nan() {
        f64::NAN
    } else {
        x.hypot(y)
    }
}

// Returns `log |x + iy|` without squaring the components.
//
// With `a = min(|x|, |y|)`, `b = max(|x|, |y|)` and `u = a / b`,
// `log |z| = log b + log1p(u^2) / 2`.
pub(super) fn logabs(x: f64, y: f64) -> f64 {
    let ax = x.abs();
    let ay = y.abs();
    if ax.is_infinite() || ay.is_infinite() {
        f64::INFINITY
    } else if ax.is_nan() || ay.is_nan() {
        f64::NAN
    } else if ay == 0.0 {
        // also covers `log 0 = -inf`
        ax.ln()
    } else if ax == 0.0 {
        ay.ln()
    } else {
        let (a, b) = if ax < ay { (ax, ay) } else { (ay, ax) };
        let u = a / b;
        b.ln() + 0.5 * (u * u).ln_1p()
    }
}

// Complex exponential with the C99 special values.
pub(super) fn exp(x: f64, y: f64) -> Complex {
    if y == 0.0 {
        // keeps the sign of the zero
        return Complex::new(x.exp(), y);
    }

    if x.is_infinite() && !y.is_finite() {
        return if x < 0.0 {
            Complex::new(0.0, 0.0_f64.copysign(y))
        } else {
            Complex::new(x, f64::NAN)
        };
    }

    let (s, c) = y.sin_cos();
    if x > EXP_OVERFLOW {
        let h = (0.5 * x).exp();
        Complex::new(h * c * h, h * s * h)
    } else {
        let e = x.exp();
        Complex::new(e * c, e * s)
    }
}

// Square root (Friedland, 1967).
//
// `t = sqrt((|x| + |z|) / 2)`; the result is `(t, y / 2t)` when `x >= 0`
// and `(|y| / 2t, copysign(t, y))` otherwise, which never subtracts
// nearly equal quantities.
pub(super) fn sqrt(x: f64, y: f64) -> Complex {
    if x == 0.0 && y == 0.0 {
        return Complex::new(0.0, y);
    }

    if y.is_infinite() {
        return Complex::new(f64::INFINITY, y);
    }

    if x.is_nan() {
        return Complex::NAN;
    }

    if y.is_nan() {
        return if x == f64::INFINITY {
            Complex::new(x, y)
        } else if x == f64::NEG_INFINITY {
            Complex::new(f64::NAN, f64::INFINITY)
        } else {
            Complex::NAN
        };
    }

    let ax = x.abs();
    let ay = y.abs();
    let t = if ax > SQRT_LARGE || ay > SQRT_LARGE {
        // scale down by 4, the root scales by 2
        2.0 * ((0.25 * ax + abs(0.25 * x, 0.25 * y)) * 0.5).sqrt()
    } else if ax < SQRT_SMALL && ay < SQRT_SMALL {
        // scale up by 2^106, the root scales by 2^53
        let s = 2.0_f64.powi(106);
        ((s * ax + abs(s * x, s * y)) * 0.5).sqrt() * 2.0_f64.powi(-53)
    } else {
        ((ax + abs(x, y)) * 0.5).sqrt()
    };

    if x >= 0.0 {
        Complex::new(t, y / (2.0 * t))
    } else {
        Complex::new(ay / (2.0 * t), t.copysign(y))
    }
}

// sin(x + iy) = sin x cosh y + i cos x sinh y
pub(super) fn sin(x: f64, y: f64) -> Complex {
    if y == 0.0 {
        Complex::new(x.sin(), zero_times(y, x.cos()))
    } else if x == 0.0 {
        Complex::new(zero_times(x, y.cosh()), y.sinh())
    } else {
        let (s, c) = x.sin_cos();
        Complex::new(s * y.cosh(), c * y.sinh())
    }
}

// cos(x + iy) = cos x cosh y - i sin x sinh y
pub(super) fn cos(x: f64, y: f64) -> Complex {
    if y == 0.0 {
        Complex::new(x.cos(), -zero_times(y, x.sin()))
    } else if x == 0.0 {
        Complex::new(y.cosh(), -zero_times(x, y.sinh()))
    } else {
        let (s, c) = x.sin_cos();
        Complex::new(c * y.cosh(), -s * y.sinh())
    }
}

// sinh(x + iy) = sinh x cos y + i cosh x sin y
pub(super) fn sinh(x: f64, y: f64) -> Complex {
    if y == 0.0 {
        Complex::new(x.sinh(), zero_times(y, x.cosh()))
    } else if x == 0.0 {
        Complex::new(zero_times(x, y.cos()), y.sin())
    } else {
        let (s, c) = y.sin_cos();
        Complex::new(x.sinh() * c, x.cosh() * s)
    }
}

// cosh(x + iy) = cosh x cos y + i sinh x sin y
pub(super) fn cosh(x: f64, y: f64) -> Complex {
    if y == 0.0 {
        Complex::new(x.cosh(), zero_times(y, x.sinh()))
    } else if x == 0.0 {
        Complex::new(y.cos(), zero_times(x, y.sin()))
    } else {
        let (s, c) = y.sin_cos();
        Complex::new(x.cosh() * c, x.sinh() * s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn abs_special_values() {
        assert_eq!(abs(f64::INFINITY, f64::NAN), f64::INFINITY);
        assert_eq!(abs(f64::NAN, f64::NEG_INFINITY), f64::INFINITY);
        assert!(abs(f64::NAN, 1.0).is_nan());
        assert_eq!(abs(3.0, -4.0), 5.0);
    }

    #[test]
    fn logabs_avoids_overflow() {
        let l = logabs(1e300, 1e300);
        let expected = 1e300_f64.ln() + 0.5 * 2.0_f64.ln();
        assert!((l - expected).abs() < 1e-12);
        assert_eq!(logabs(0.0, -0.0), f64::NEG_INFINITY);
        assert_eq!(logabs(0.0, 1.0), 0.0);
    }

    #[test]
    fn logabs_near_one() {
        // |1 + 1e-10 i| - 1 is below the resolution of a double near 1
        let l = logabs(1.0, 1e-10);
        assert!((l - 5e-21).abs() < 1e-35);
    }

    #[test]
    fn sqrt_extremes() {
        let z = sqrt(f64::MAX, f64::MAX);
        assert!(z.x.is_finite() && z.y.is_finite());

        let z = sqrt(-4.0 * f64::MIN_POSITIVE * f64::EPSILON, 0.0);
        assert_eq!(z.x, 0.0);
        assert!(z.y > 0.0);
        assert!((z.y * z.y / (4.0 * f64::MIN_POSITIVE * f64::EPSILON) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn exp_large_real_part() {
        // exp(709.9) overflows, exp(709.9) * cos(pi / 3) does not
        let z = exp(709.9, std::f64::consts::FRAC_PI_3);
        assert!(z.x.is_finite());
        assert!(z.y.is_finite());
    }

    #[test]
    fn real_axis_keeps_signed_zero() {
        assert_eq!(sin(1.0, -0.0).y.to_bits(), (-0.0_f64).to_bits());
        assert_eq!(cosh(f64::INFINITY, 0.0).y, 0.0);
        assert_eq!(exp(2.0, -0.0).y.to_bits(), (-0.0_f64).to_bits());
    }
}
