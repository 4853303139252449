/*
    Defines a binary number
*/

use std::fmt::Debug;

use crate::BinaryError;

/// The binary number type.
///
/// The central abstraction of this library.
/// A `BinaryNumber` is a pair `x + j y` of IEEE-754 doubles where `j * j`
/// is a fixed constant of the algebra: `-1` for complex numbers, `+1` for
/// split-complex numbers and `0` for dual numbers.
///
/// Implementors supply a small set of primitives; every other operation is
/// derived once, here, from those primitives. An algebra may override a
/// derived operation when it has a closed form that is more accurate.
///
/// Every operation is total: undefined results are reported as NaN or
/// signed infinities, never as panics. The only fallible operations are the
/// `div_j` family, which some algebras cannot define at all.
pub trait BinaryNumber: Copy + Default + PartialEq + Debug {
    /// Name of the algebra, used in diagnostics.
    const ALGEBRA: &'static str;

    /// The value of `j * j` in this algebra.
    const J_SQUARED: f64;

    /// Projection into the primary region of this algebra's `log`/`exp` pair.
    const REGION_MAP: RegionMap<Self>;

    /// Constructs `x + j y`.
    fn z(x: f64, y: f64) -> Self;

    /// Returns the real component.
    fn x(&self) -> f64;

    /// Returns the `j` component.
    fn y(&self) -> f64;

    /// Returns the magnitude of this number in its algebra's norm.
    fn abs(&self) -> f64;

    /// Returns the argument (angle) of this number in its algebra's geometry.
    fn arg(&self) -> f64;

    /// Returns `1 / self`.
    fn inverse(&self) -> Self;

    /// Returns `j * self`.
    fn times_j(&self) -> Self;

    /// Returns `a j * self`.
    fn times_j_by(&self, a: f64) -> Self;

    /// Returns `-j * self`.
    fn times_neg_j(&self) -> Self;

    /// Returns `self * other`.
    fn times(&self, other: &Self) -> Self;

    /// Returns `self / j`.
    fn div_j(&self) -> Result<Self, BinaryError>;

    /// Returns `self / (a j)`.
    fn div_j_by(&self, a: f64) -> Result<Self, BinaryError>;

    /// Returns `self / -j`.
    fn div_neg_j(&self) -> Result<Self, BinaryError>;

    /// Natural logarithm.
    fn log(&self) -> Self;

    /// Natural exponential.
    fn exp(&self) -> Self;

    fn sin(&self) -> Self;

    fn cos(&self) -> Self;

    fn sinh(&self) -> Self;

    fn cosh(&self) -> Self;

    //
    // Classification
    //

    /// Returns true if either component is NaN.
    fn is_nan(&self) -> bool {
        self.x().is_nan() || self.y().is_nan()
    }

    /// Returns true if one component is infinite and the other is not NaN.
    fn is_infinite(&self) -> bool {
        let (x, y) = (self.x(), self.y());
        (x.is_infinite() && !y.is_nan()) || (y.is_infinite() && !x.is_nan())
    }

    /// Returns true if both components are finite.
    fn is_finite(&self) -> bool {
        self.x().is_finite() && self.y().is_finite()
    }

    /// Returns true if both components are zero (of either sign).
    fn is_zero(&self) -> bool {
        self.x() == 0.0 && self.y() == 0.0
    }

    /// Returns true if the `j` component is zero.
    fn is_real(&self) -> bool {
        self.y() == 0.0
    }

    //
    // Linear structure
    //

    fn plus(&self, other: &Self) -> Self {
        Self::z(self.x() + other.x(), self.y() + other.y())
    }

    fn plus_real(&self, a: f64) -> Self {
        Self::z(self.x() + a, self.y())
    }

    fn minus(&self, other: &Self) -> Self {
        Self::z(self.x() - other.x(), self.y() - other.y())
    }

    fn minus_real(&self, a: f64) -> Self {
        Self::z(self.x() - a, self.y())
    }

    /// Multiplies both components by the scalar `a`.
    fn scale(&self, a: f64) -> Self {
        Self::z(self.x() * a, self.y() * a)
    }

    /// Divides both components by the scalar `a`.
    fn div_real(&self, a: f64) -> Self {
        Self::z(self.x() / a, self.y() / a)
    }

    fn negative(&self) -> Self {
        Self::z(-self.x(), -self.y())
    }

    fn conjugate(&self) -> Self {
        Self::z(self.x(), -self.y())
    }

    /// Takes the absolute value of each component.
    fn rectify(&self) -> Self {
        Self::z(self.x().abs(), self.y().abs())
    }

    //
    // Multiplicative structure
    //

    fn div(&self, other: &Self) -> Self {
        self.times(&other.inverse())
    }

    fn pow2(&self) -> Self {
        self.times(self)
    }

    fn pow3(&self) -> Self {
        self.times(self).times(self)
    }

    /// Raises this number to a real power.
    ///
    /// Exact for the exponents `0`, `1` and `-1`; zero raised to any other
    /// power is zero. Everything else goes through `exp(a log z)` inside the
    /// algebra's primary region, see [`RegionMap`].
    fn pow(&self, a: f64) -> Self {
        if a == 0.0 {
            Self::z(1.0, 0.0)
        } else if a == 1.0 {
            *self
        } else if a == -1.0 {
            self.inverse()
        } else if self.is_zero() {
            Self::z(0.0, 0.0)
        } else {
            Self::REGION_MAP.apply(*self, |z| z.log().scale(a).exp())
        }
    }

    /// Raises this number to a power in the same algebra.
    fn pow_value(&self, other: &Self) -> Self {
        if other.y() == 0.0 {
            self.pow(other.x())
        } else if self.is_zero() {
            Self::z(0.0, 0.0)
        } else {
            Self::REGION_MAP.apply(*self, |z| z.log().times(other).exp())
        }
    }

    fn sqrt(&self) -> Self {
        self.pow(0.5)
    }

    //
    // Logarithms
    //

    /// Returns `log(abs())`.
    fn logabs(&self) -> f64 {
        self.abs().ln()
    }

    /// Logarithm in the real base `b`.
    fn log_base(&self, b: f64) -> Self {
        self.log().scale(b.ln().recip())
    }

    fn log2(&self) -> Self {
        self.log().scale(std::f64::consts::LOG2_E)
    }

    fn log10(&self) -> Self {
        self.log().scale(std::f64::consts::LOG10_E)
    }

    //
    // Circular family
    //

    fn tan(&self) -> Self {
        self.sin().div(&self.cos())
    }

    fn cot(&self) -> Self {
        self.cos().div(&self.sin())
    }

    fn sec(&self) -> Self {
        self.cos().inverse()
    }

    fn csc(&self) -> Self {
        self.sin().inverse()
    }

    //
    // Hyperbolic family
    //

    fn tanh(&self) -> Self {
        self.sinh().div(&self.cosh())
    }

    fn coth(&self) -> Self {
        self.cosh().div(&self.sinh())
    }

    fn sech(&self) -> Self {
        self.cosh().inverse()
    }

    fn csch(&self) -> Self {
        self.sinh().inverse()
    }
}

/// An involution of the plane: applying it twice gives back the input.
pub type Involution<V> = fn(V) -> V;

/// Region mapping for `log`/`exp` based computations.
///
/// Some algebras only have a canonical logarithm on part of the plane.
/// A `RegionMap` picks, for each point, an involution `R` that moves the
/// point into that primary region. A computation `f` is then evaluated as
/// `R(f(R(z)))`, so the result lands back in the region `z` came from
/// instead of collapsing into the primary one.
#[derive(Clone, Copy)]
pub struct RegionMap<V> {
    select: fn(&V) -> Involution<V>,
}

impl<V: Copy> RegionMap<V> {
    /// The map that leaves every point where it is.
    pub const IDENTITY: Self = Self {
        select: select_identity::<V>,
    };

    /// Creates a map from a function choosing the involution for a point.
    pub const fn new(select: fn(&V) -> Involution<V>) -> Self {
        Self { select }
    }

    /// Returns the involution chosen for `z`.
    pub fn involution(&self, z: &V) -> Involution<V> {
        (self.select)(z)
    }

    /// Moves `z` into the primary region.
    pub fn project(&self, z: V) -> V {
        self.involution(&z)(z)
    }

    /// Evaluates `f` inside the primary region and maps the result back.
    pub fn apply<F: FnOnce(V) -> V>(&self, z: V, f: F) -> V {
        let r = self.involution(&z);
        r(f(r(z)))
    }
}

fn identity<V>(z: V) -> V {
    z
}

fn select_identity<V>(_: &V) -> Involution<V> {
    identity::<V>
}
