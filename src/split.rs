/*
    Split-complex numbers
*/

mod classify;

pub use classify::Region;

use crate::{BinaryError, BinaryNumber, RegionMap};

/// A split-complex (hyperbolic) number `x + j y` where `j * j = +1`.
///
/// The quadratic form `x^2 - y^2` is indefinite: it vanishes on the null
/// lines `y = +/-x`, which carry the zero divisors of the algebra. `log`
/// and `exp` use the hyperbolic polar form `r (cosh t + j sinh t)`, which
/// only covers the quadrant [`Region::PosX`]; `pow` reaches the other three
/// quadrants through the algebra's [`RegionMap`].
#[derive(Clone, Copy, Debug, Default)]
pub struct SplitComplex {
    x: f64,
    y: f64,
}

// Constants and constructors
impl SplitComplex {
    /// `0 + 0j`
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// `1 + 0j`
    pub const ONE: Self = Self::new(1.0, 0.0);

    /// `0 + 1j`
    pub const J: Self = Self::new(0.0, 1.0);

    /// `NaN + NaN j`
    pub const NAN: Self = Self::new(f64::NAN, f64::NAN);

    /// Creates `x + j y`.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Creates the real number `x + 0j`.
    #[inline]
    pub const fn real(x: f64) -> Self {
        Self::new(x, 0.0)
    }

    /// Creates a number from its hyperbolic modulus and angle,
    /// `r cosh t + j r sinh t`.
    pub fn polar(r: f64, t: f64) -> Self {
        Self::new(r * t.cosh(), r * t.sinh())
    }

    /// Returns the signed quadratic form `x^2 - y^2`, evaluated as
    /// `(x + y)(x - y)` to limit cancellation.
    pub fn modulus2(&self) -> f64 {
        (self.x + self.y) * (self.x - self.y)
    }
}

impl BinaryNumber for SplitComplex {
    const ALGEBRA: &'static str = "split-complex";
    const J_SQUARED: f64 = 1.0;
    const REGION_MAP: RegionMap<Self> = RegionMap::new(classify::quadrant_involution);

    #[inline]
    fn z(x: f64, y: f64) -> Self {
        Self::new(x, y)
    }

    #[inline]
    fn x(&self) -> f64 {
        self.x
    }

    #[inline]
    fn y(&self) -> f64 {
        self.y
    }

    /// Returns `sqrt(|x^2 - y^2|)`.
    fn abs(&self) -> f64 {
        self.modulus2().abs().sqrt()
    }

    /// Returns the hyperbolic angle `atanh(s / l)`, where `l` is the
    /// component of larger magnitude and `s` the other one, both signed.
    ///
    /// The angle is NaN on the null lines, where it would be infinite.
    fn arg(&self) -> f64 {
        let (ax, ay) = (self.x.abs(), self.y.abs());
        if self.is_nan() || ax == ay {
            f64::NAN
        } else if ax > ay {
            (self.y / self.x).atanh()
        } else {
            (self.x / self.y).atanh()
        }
    }

    /// Returns `(x - j y) / (x^2 - y^2)`, or NaN on the null lines.
    ///
    /// Evaluated in the null basis `u = x + y`, `v = x - y`, where the
    /// inverse is `(1/u, 1/v)`, so that neither square can overflow.
    fn inverse(&self) -> Self {
        let u = self.x + self.y;
        let v = self.x - self.y;
        if u == 0.0 || v == 0.0 {
            return Self::NAN;
        }
        let (iu, iv) = (u.recip(), v.recip());
        Self::new(0.5 * (iu + iv), 0.5 * (iu - iv))
    }

    fn times_j(&self) -> Self {
        Self::new(self.y, self.x)
    }

    fn times_j_by(&self, a: f64) -> Self {
        Self::new(a * self.y, a * self.x)
    }

    fn times_neg_j(&self) -> Self {
        Self::new(-self.y, -self.x)
    }

    fn times(&self, other: &Self) -> Self {
        let (a, b, c, d) = (self.x, self.y, other.x, other.y);
        Self::new(a * c + b * d, a * d + b * c)
    }

    fn div_j(&self) -> Result<Self, BinaryError> {
        Ok(self.times_j())
    }

    fn div_j_by(&self, a: f64) -> Result<Self, BinaryError> {
        Ok(Self::new(self.y / a, self.x / a))
    }

    fn div_neg_j(&self) -> Result<Self, BinaryError> {
        Ok(self.times_neg_j())
    }

    fn log(&self) -> Self {
        Self::new(self.logabs(), self.arg())
    }

    // exp(x + jy) = e^x (cosh y + j sinh y)
    fn exp(&self) -> Self {
        let e = self.x.exp();
        if self.y == 0.0 {
            Self::new(e, self.y)
        } else {
            Self::new(e * self.y.cosh(), e * self.y.sinh())
        }
    }

    // sin(x + jy) = sin x cos y + j cos x sin y
    fn sin(&self) -> Self {
        let (s, c) = self.x.sin_cos();
        let (sy, cy) = self.y.sin_cos();
        Self::new(s * cy, c * sy)
    }

    // cos(x + jy) = cos x cos y - j sin x sin y
    fn cos(&self) -> Self {
        let (s, c) = self.x.sin_cos();
        let (sy, cy) = self.y.sin_cos();
        Self::new(c * cy, -s * sy)
    }

    // sinh(x + jy) = sinh x cosh y + j cosh x sinh y
    fn sinh(&self) -> Self {
        let (x, y) = (self.x, self.y);
        Self::new(x.sinh() * y.cosh(), x.cosh() * y.sinh())
    }

    // cosh(x + jy) = cosh x cosh y + j sinh x sinh y
    fn cosh(&self) -> Self {
        let (x, y) = (self.x, self.y);
        Self::new(x.cosh() * y.cosh(), x.sinh() * y.sinh())
    }

    /// Returns `log sqrt(|x^2 - y^2|)`.
    ///
    /// With `a = min(|x|, |y|)`, `b = max(|x|, |y|)` and `u = a / b` this is
    /// `log b + log1p(-u^2) / 2`, with `log1p(-u^2)` split into
    /// `log1p(u) + log1p(-u)`. It is `-inf` on the null lines.
    fn logabs(&self) -> f64 {
        let ax = self.x.abs();
        let ay = self.y.abs();
        if ax.is_nan() || ay.is_nan() {
            f64::NAN
        } else if ax == ay {
            if ax.is_infinite() {
                f64::NAN
            } else {
                f64::NEG_INFINITY
            }
        } else if ax.is_infinite() || ay.is_infinite() {
            f64::INFINITY
        } else {
            let (a, b) = if ax < ay { (ax, ay) } else { (ay, ax) };
            if a == 0.0 {
                b.ln()
            } else {
                let u = a / b;
                b.ln() + 0.5 * (u.ln_1p() + (-u).ln_1p())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_basis_inverse() {
        let z = SplitComplex::new(5.0, 3.0).inverse();
        assert_eq!(z, SplitComplex::new(5.0 / 16.0, -3.0 / 16.0));

        // x^2 - y^2 underflows, the inverse does not
        let z = SplitComplex::new(1e-200, 0.0).inverse();
        assert!((z.x - 1e200).abs() / 1e200 < 1e-15);
    }

    #[test]
    fn logabs_close_to_null_line() {
        // |x^2 - y^2| = 2e-8 + 1e-16
        let z = SplitComplex::new(1.0 + 1e-8, 1.0);
        let expected = 0.5 * (2e-8 + 1e-16_f64).ln();
        assert!((z.logabs() - expected).abs() < 1e-7 * expected.abs());
    }
}
