/*
    Inverse trigonometric functions
*/

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, LN_2, PI};

use super::*;

// Crossover points between the formulas of Hull, Fairgrieve and Tang (1997)
const A_CROSSOVER: f64 = 1.5;
const B_CROSSOVER: f64 = 0.6417;

// Outside `[SAFE_MIN, SAFE_MAX]` the auxiliary quantities may over- or underflow.
const SAFE_MAX: f64 = 1.675_975_991_242_824_6e153; // sqrt(f64::MAX) / 8
const SAFE_MIN: f64 = 5.966_672_584_960_166e-154; // 4 * sqrt(f64::MIN_POSITIVE)

// Shared core of `asin` and `acos` for finite `x >= 0`, `y >= 0`.
// Returns `(Re asin z, Re acos z, |Im asin z|)`; `Im acos z` has the same
// magnitude with the opposite sign.
fn hull(x: f64, y: f64) -> (f64, f64, f64) {
    let xp1 = 1.0 + x;
    let xm1 = x - 1.0;

    if x > SAFE_MIN && x < SAFE_MAX && y > SAFE_MIN && y < SAFE_MAX {
        let r = xp1.hypot(y);
        let s = xm1.hypot(y);
        let a = 0.5 * (r + s);
        let b = x / a;
        let yy = y * y;

        let (asin_re, acos_re) = if b <= B_CROSSOVER {
            (b.asin(), b.acos())
        } else {
            let apx = a + x;
            let t = if x <= 1.0 {
                (0.5 * apx * (yy / (r + xp1) + (s - xm1))).sqrt()
            } else {
                y * (0.5 * (apx / (r + xp1) + apx / (s + xm1))).sqrt()
            };
            ((x / t).atan(), (t / x).atan())
        };

        let im = if a <= A_CROSSOVER {
            let am1 = if x < 1.0 {
                0.5 * (yy / (r + xp1) + yy / (s - xm1))
            } else {
                0.5 * (yy / (r + xp1) + (s + xm1))
            };
            (am1 + (am1 * (a + 1.0)).sqrt()).ln_1p()
        } else {
            (a + ((a - 1.0) * (a + 1.0)).sqrt()).ln()
        };

        return (asin_re, acos_re, im);
    }

    if y <= f64::EPSILON * xm1.abs() {
        // close to the real axis, away from the branch points
        if x < 1.0 {
            (x.asin(), x.acos(), y / (xp1 * (1.0 - x)).sqrt())
        } else {
            let acos_re = if y == 0.0 { 0.0 } else { y / (xp1 * xm1).sqrt() };
            let im = if f64::MAX / xp1 > xm1 {
                (xm1 + (xp1 * xm1).sqrt()).ln_1p()
            } else {
                LN_2 + x.ln()
            };
            (FRAC_PI_2, acos_re, im)
        }
    } else if y <= SAFE_MIN {
        // tiny `y` next to the branch point `x = 1`
        let sy = y.sqrt();
        (FRAC_PI_2 - sy, sy, sy)
    } else if f64::EPSILON * y - 1.0 >= x {
        // `y` so large that `x` no longer matters
        let xoy = x / y;
        (xoy, FRAC_PI_2 - xoy, LN_2 + y.ln())
    } else if x > 1.0 {
        // large `x` or `y`
        let xoy = x / y;
        (
            xoy.atan(),
            (y / x).atan(),
            LN_2 + y.ln() + 0.5 * (xoy * xoy).ln_1p(),
        )
    } else {
        // tiny `x`
        let a = (1.0 + y * y).sqrt();
        let xoa = x / a;
        (xoa, FRAC_PI_2 - xoa, 0.5 * (2.0 * y * (y + a)).ln_1p())
    }
}

// Inverse sine and cosine
impl Complex {
    /// Inverse sine, with branch cuts on the real axis outside `[-1, 1]`.
    pub fn asin(&self) -> Complex {
        let (x, y) = (self.x, self.y);

        if x.is_nan() {
            return if y.is_infinite() {
                Complex::new(x, y)
            } else {
                Complex::NAN
            };
        }

        if y.is_nan() {
            return if x == 0.0 {
                Complex::new(x, y)
            } else if x.is_infinite() {
                Complex::new(f64::NAN, f64::INFINITY)
            } else {
                Complex::NAN
            };
        }

        if y.is_infinite() {
            let re = if x.is_infinite() { FRAC_PI_4 } else { 0.0 };
            return Complex::new(re.copysign(x), y);
        }

        if x.is_infinite() {
            return Complex::new(FRAC_PI_2.copysign(x), f64::INFINITY.copysign(y));
        }

        let (re, _, im) = hull(x.abs(), y.abs());
        Complex::new(re.copysign(x), im.copysign(y))
    }

    /// Inverse cosine, with branch cuts on the real axis outside `[-1, 1]`.
    pub fn acos(&self) -> Complex {
        let (x, y) = (self.x, self.y);

        if x.is_nan() {
            return if y.is_infinite() {
                Complex::new(x, -y)
            } else {
                Complex::NAN
            };
        }

        if y.is_nan() {
            return if x == 0.0 {
                Complex::new(FRAC_PI_2, y)
            } else if x.is_infinite() {
                Complex::new(f64::NAN, f64::INFINITY)
            } else {
                Complex::NAN
            };
        }

        if y.is_infinite() {
            let re = if x == f64::NEG_INFINITY {
                3.0 * FRAC_PI_4
            } else if x == f64::INFINITY {
                FRAC_PI_4
            } else {
                FRAC_PI_2
            };
            return Complex::new(re, -y);
        }

        if x.is_infinite() {
            let re = if x < 0.0 { PI } else { 0.0 };
            return Complex::new(re, -f64::INFINITY.copysign(y));
        }

        let (_, re, im) = hull(x.abs(), y.abs());
        let re = if x.is_sign_negative() { PI - re } else { re };
        let im = if y.is_sign_negative() { im } else { -im };
        Complex::new(re, im)
    }
}

// Functions derived from `asin`, `acos` and `log`
impl Complex {
    /// Inverse hyperbolic sine, `asinh z = -i asin(i z)`.
    pub fn asinh(&self) -> Complex {
        let w = self.times_j().asin();
        Complex::new(w.y, -w.x)
    }

    /// Inverse hyperbolic cosine, with non-negative real part.
    pub fn acosh(&self) -> Complex {
        let w = self.acos();
        if self.y.is_sign_negative() {
            Complex::new(w.y, -w.x)
        } else {
            Complex::new(-w.y, w.x)
        }
    }

    /// Inverse hyperbolic tangent, with branch cuts on the real axis
    /// outside `[-1, 1]`.
    ///
    /// `Re = log1p(4x / ((1 - x)^2 + y^2)) / 4` and
    /// `Im = atan2(2y, (1 - x)(1 + x) - y^2) / 2`.
    pub fn atanh(&self) -> Complex {
        let (x, y) = (self.x, self.y);

        // an infinite component decides the result even next to a NaN
        if y.is_infinite() {
            return Complex::new(0.0_f64.copysign(x), FRAC_PI_2.copysign(y));
        }
        if x.is_infinite() {
            let im = if y.is_nan() { y } else { FRAC_PI_2.copysign(y) };
            return Complex::new(0.0_f64.copysign(x), im);
        }
        if x == 0.0 && y.is_nan() {
            return Complex::new(x, y);
        }
        if self.is_nan() {
            return Complex::NAN;
        }

        let one_minus = 1.0 - x;
        let re = 0.25 * (4.0 * x / (one_minus * one_minus + y * y)).ln_1p();
        let im = 0.5 * (2.0 * y).atan2(one_minus * (1.0 + x) - y * y);
        Complex::new(re, im)
    }

    /// Inverse tangent, `atan z = -i atanh(i z)`.
    pub fn atan(&self) -> Complex {
        let w = self.times_j().atanh();
        Complex::new(w.y, -w.x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crossover_regions_agree_with_real_functions() {
        for &x in &[0.0, 0.3, 0.6, 0.7, 0.99, 1.0] {
            let (asin_re, acos_re, im) = hull(x, 0.0);
            assert!((asin_re - f64::asin(x)).abs() < 1e-15, "asin {}", x);
            assert!((acos_re - f64::acos(x)).abs() < 1e-15, "acos {}", x);
            assert_eq!(im, 0.0);
        }
    }

    #[test]
    fn real_axis_beyond_one() {
        let (asin_re, acos_re, im) = hull(2.0, 0.0);
        assert_eq!(asin_re, FRAC_PI_2);
        assert_eq!(acos_re, 0.0);
        assert!((im - 2.0_f64.acosh()).abs() < 1e-15);
    }

    #[test]
    fn huge_arguments_stay_finite() {
        let (asin_re, acos_re, im) = hull(1e300, 1e300);
        assert!((asin_re - FRAC_PI_4).abs() < 1e-15);
        assert!((acos_re - FRAC_PI_4).abs() < 1e-15);
        assert!((im - (LN_2 + 1e300_f64.ln() + 0.5 * LN_2)).abs() < 1e-12);
    }
}
