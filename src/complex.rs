/*
    Complex numbers
*/

mod arithmetic;
mod elementary;
mod inverse_trig;
mod roots;

use crate::{BinaryError, BinaryNumber, RegionMap};

/// A complex number `x + i y` where `i * i = -1`.
///
/// Multiplication and division follow the C99 Annex G recovery rules so
/// that true infinities are not reported as NaN, division uses Smith's
/// algorithm, `sqrt` uses Friedland's algorithm and `asin`/`acos` use the
/// method of Hull, Fairgrieve and Tang.
#[derive(Clone, Copy, Debug, Default)]
pub struct Complex {
    x: f64,
    y: f64,
}

// Constants and constructors
impl Complex {
    /// `0 + 0i`
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// `1 + 0i`
    pub const ONE: Self = Self::new(1.0, 0.0);

    /// `0 + 1i`
    pub const I: Self = Self::new(0.0, 1.0);

    /// `NaN + NaN i`
    pub const NAN: Self = Self::new(f64::NAN, f64::NAN);

    /// Creates `x + i y`.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Creates the real number `x + 0i`.
    #[inline]
    pub const fn real(x: f64) -> Self {
        Self::new(x, 0.0)
    }

    /// Creates the imaginary number `0 + i y`.
    #[inline]
    pub const fn imaginary(y: f64) -> Self {
        Self::new(0.0, y)
    }

    /// Creates a complex number from its modulus and argument.
    pub fn polar(r: f64, theta: f64) -> Self {
        let (s, c) = theta.sin_cos();
        Self::new(r * c, r * s)
    }

    /// Square root of a real number, continued analytically into the
    /// imaginary axis for negative inputs.
    pub fn sqrt_real(a: f64) -> Self {
        if a >= 0.0 {
            Self::real(a.sqrt())
        } else if a < 0.0 {
            Self::imaginary((-a).sqrt())
        } else {
            Self::real(f64::NAN)
        }
    }

    /// Returns `x^2 + y^2`, which is infinite whenever a component is.
    pub fn abs2(&self) -> f64 {
        if self.x.is_infinite() || self.y.is_infinite() {
            f64::INFINITY
        } else {
            self.x * self.x + self.y * self.y
        }
    }
}

impl BinaryNumber for Complex {
    const ALGEBRA: &'static str = "complex";
    const J_SQUARED: f64 = -1.0;
    const REGION_MAP: RegionMap<Self> = RegionMap::IDENTITY;

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

    fn abs(&self) -> f64 {
        elementary::abs(self.x, self.y)
    }

    /// Returns `atan2(y, x)` in `[-pi, pi]`, with the branch cut on the
    /// negative real axis; the sign of a zero `y` picks the side of the cut.
    fn arg(&self) -> f64 {
        self.y.atan2(self.x)
    }

    fn inverse(&self) -> Self {
        arithmetic::inverse(self.x, self.y)
    }

    fn times_j(&self) -> Self {
        Self::new(-self.y, self.x)
    }

    fn times_j_by(&self, a: f64) -> Self {
        Self::new(-a * self.y, a * self.x)
    }

    fn times_neg_j(&self) -> Self {
        Self::new(self.y, -self.x)
    }

    fn times(&self, other: &Self) -> Self {
        arithmetic::mul(self.x, self.y, other.x, other.y)
    }

    fn div_j(&self) -> Result<Self, BinaryError> {
        Ok(Self::new(self.y, -self.x))
    }

    fn div_j_by(&self, a: f64) -> Result<Self, BinaryError> {
        Ok(Self::new(self.y / a, -self.x / a))
    }

    fn div_neg_j(&self) -> Result<Self, BinaryError> {
        Ok(Self::new(-self.y, self.x))
    }

    fn log(&self) -> Self {
        Self::new(self.logabs(), self.arg())
    }

    fn exp(&self) -> Self {
        elementary::exp(self.x, self.y)
    }

    fn sin(&self) -> Self {
        elementary::sin(self.x, self.y)
    }

    fn cos(&self) -> Self {
        elementary::cos(self.x, self.y)
    }

    fn sinh(&self) -> Self {
        elementary::sinh(self.x, self.y)
    }

    fn cosh(&self) -> Self {
        elementary::cosh(self.x, self.y)
    }

    fn div(&self, other: &Self) -> Self {
        arithmetic::div(self.x, self.y, other.x, other.y)
    }

    fn logabs(&self) -> f64 {
        elementary::logabs(self.x, self.y)
    }

    fn sqrt(&self) -> Self {
        elementary::sqrt(self.x, self.y)
    }
}
