/*
    Dual numbers
*/

use crate::{BinaryError, BinaryNumber, Involution, RegionMap};

/// A dual number `x + e y` where `e * e = 0`.
///
/// Every analytic function extends to the dual numbers through its first
/// derivative, `f(x + e y) = f(x) + e y f'(x)`, which makes them a vehicle
/// for forward-mode automatic differentiation: seed `y = 1` with
/// [`DualNumber::variable`] and read `f'(x)` off the `e` component.
///
/// `e` is a zero divisor, so division by `e` is not defined and the
/// `div_j` family reports [`BinaryError::Unsupported`].
#[derive(Clone, Copy, Debug, Default)]
pub struct DualNumber {
    x: f64,
    y: f64,
}

impl DualNumber {
    /// `0 + 0e`
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// `1 + 0e`
    pub const ONE: Self = Self::new(1.0, 0.0);

    /// `0 + 1e`
    pub const EPSILON: Self = Self::new(0.0, 1.0);

    /// `NaN + NaN e`
    pub const NAN: Self = Self::new(f64::NAN, f64::NAN);

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// A constant, with zero derivative.
    #[inline]
    pub const fn real(x: f64) -> Self {
        Self::new(x, 0.0)
    }

    /// An independent variable at `x`, with unit derivative.
    #[inline]
    pub const fn variable(x: f64) -> Self {
        Self::new(x, 1.0)
    }

    // f(x + e y) = f(x) + e y f'(x)
    #[inline]
    fn lift(&self, fx: f64, dfx: f64) -> Self {
        Self::new(fx, self.y * dfx)
    }

    fn unsupported(op: &'static str) -> BinaryError {
        BinaryError::Unsupported {
            algebra: Self::ALGEBRA,
            op,
        }
    }
}

// Negative real parts are reflected through the origin, where the real
// logarithm is defined.
fn sign_involution(z: &DualNumber) -> Involution<DualNumber> {
    if z.x < 0.0 {
        negate
    } else {
        keep
    }
}

fn negate(z: DualNumber) -> DualNumber {
    DualNumber::new(-z.x, -z.y)
}

fn keep(z: DualNumber) -> DualNumber {
    z
}

impl BinaryNumber for DualNumber {
    const ALGEBRA: &'static str = "dual";
    const J_SQUARED: f64 = 0.0;
    const REGION_MAP: RegionMap<Self> = RegionMap::new(sign_involution);

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

    /// Returns `|x|`; the `e` component carries no magnitude.
    fn abs(&self) -> f64 {
        self.x.abs()
    }

    /// Returns the slope `y / x`.
    fn arg(&self) -> f64 {
        self.y / self.x
    }

    fn inverse(&self) -> Self {
        let r = self.x.recip();
        Self::new(r, -self.y * r * r)
    }

    fn times_j(&self) -> Self {
        Self::new(0.0, self.x)
    }

    fn times_j_by(&self, a: f64) -> Self {
        Self::new(0.0, a * self.x)
    }

    fn times_neg_j(&self) -> Self {
        Self::new(0.0, -self.x)
    }

    fn times(&self, other: &Self) -> Self {
        let (a, b, c, d) = (self.x, self.y, other.x, other.y);
        Self::new(a * c, a * d + b * c)
    }

    fn div_j(&self) -> Result<Self, BinaryError> {
        Err(Self::unsupported("div_j"))
    }

    fn div_j_by(&self, _a: f64) -> Result<Self, BinaryError> {
        Err(Self::unsupported("div_j_by"))
    }

    fn div_neg_j(&self) -> Result<Self, BinaryError> {
        Err(Self::unsupported("div_neg_j"))
    }

    fn log(&self) -> Self {
        self.lift(self.x.ln(), self.x.recip())
    }

    fn exp(&self) -> Self {
        let e = self.x.exp();
        self.lift(e, e)
    }

    fn sin(&self) -> Self {
        let (s, c) = self.x.sin_cos();
        self.lift(s, c)
    }

    fn cos(&self) -> Self {
        let (s, c) = self.x.sin_cos();
        self.lift(c, -s)
    }

    fn sinh(&self) -> Self {
        self.lift(self.x.sinh(), self.x.cosh())
    }

    fn cosh(&self) -> Self {
        self.lift(self.x.cosh(), self.x.sinh())
    }

    fn logabs(&self) -> f64 {
        self.x.abs().ln()
    }

    /// `x^a + e a x^(a-1) y`, exact for every real exponent.
    ///
    /// The exponents `0`, `1` and `-1` and a zero base are special-cased as
    /// in [`BinaryNumber::pow`].
    fn pow(&self, a: f64) -> Self {
        if a == 0.0 {
            Self::ONE
        } else if a == 1.0 {
            *self
        } else if a == -1.0 {
            self.inverse()
        } else if self.is_zero() {
            Self::ZERO
        } else {
            self.lift(self.x.powf(a), a * self.x.powf(a - 1.0))
        }
    }

    fn sqrt(&self) -> Self {
        if self.is_zero() {
            return Self::ZERO;
        }
        let s = self.x.sqrt();
        self.lift(s, 0.5 / s)
    }

    fn tan(&self) -> Self {
        let c = self.x.cos();
        self.lift(self.x.tan(), (c * c).recip())
    }

    fn tanh(&self) -> Self {
        let c = self.x.cosh();
        self.lift(self.x.tanh(), (c * c).recip())
    }
}
