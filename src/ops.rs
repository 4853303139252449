/*
    Operations
*/

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use num_traits::{Inv, One, Pow, Zero};

use crate::util::canonical_bits;
use crate::{BinaryNumber, Complex, DualNumber, SplitComplex};

// Operator overloading, equality, formatting and `num_traits` support,
// all routed through the `BinaryNumber` primitives of `$T`.
macro_rules! impl_binary_ops {
    ($T:ty, $unit:expr) => {
        // Equality is bitwise on both components, so `+0 != -0`;
        // NaNs are canonicalised so every NaN equals every other NaN.
        impl PartialEq for $T {
            fn eq(&self, other: &Self) -> bool {
                canonical_bits(self.x()) == canonical_bits(other.x())
                    && canonical_bits(self.y()) == canonical_bits(other.y())
            }
        }

        impl Eq for $T {}

        impl Hash for $T {
            fn hash<H: Hasher>(&self, state: &mut H) {
                canonical_bits(self.x()).hash(state);
                canonical_bits(self.y()).hash(state);
            }
        }

        impl fmt::Display for $T {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let (x, y) = (self.x(), self.y());
                if y.is_sign_negative() && !y.is_nan() {
                    write!(f, "{} - {}{}", x, -y, $unit)
                } else {
                    write!(f, "{} + {}{}", x, y, $unit)
                }
            }
        }

        impl From<f64> for $T {
            fn from(x: f64) -> Self {
                <$T as BinaryNumber>::z(x, 0.0)
            }
        }

        impl From<(f64, f64)> for $T {
            fn from((x, y): (f64, f64)) -> Self {
                <$T as BinaryNumber>::z(x, y)
            }
        }

        impl Neg for $T {
            type Output = $T;

            fn neg(self) -> $T {
                self.negative()
            }
        }

        impl Add for $T {
            type Output = $T;

            fn add(self, rhs: $T) -> $T {
                self.plus(&rhs)
            }
        }

        impl Add<f64> for $T {
            type Output = $T;

            fn add(self, rhs: f64) -> $T {
                self.plus_real(rhs)
            }
        }

        impl Add<$T> for f64 {
            type Output = $T;

            fn add(self, rhs: $T) -> $T {
                rhs.plus_real(self)
            }
        }

        impl Sub for $T {
            type Output = $T;

            fn sub(self, rhs: $T) -> $T {
                self.minus(&rhs)
            }
        }

        impl Sub<f64> for $T {
            type Output = $T;

            fn sub(self, rhs: f64) -> $T {
                self.minus_real(rhs)
            }
        }

        impl Sub<$T> for f64 {
            type Output = $T;

            fn sub(self, rhs: $T) -> $T {
                rhs.negative().plus_real(self)
            }
        }

        impl Mul for $T {
            type Output = $T;

            fn mul(self, rhs: $T) -> $T {
                self.times(&rhs)
            }
        }

        impl Mul<f64> for $T {
            type Output = $T;

            fn mul(self, rhs: f64) -> $T {
                self.scale(rhs)
            }
        }

        impl Mul<$T> for f64 {
            type Output = $T;

            fn mul(self, rhs: $T) -> $T {
                rhs.scale(self)
            }
        }

        impl Div for $T {
            type Output = $T;

            fn div(self, rhs: $T) -> $T {
                BinaryNumber::div(&self, &rhs)
            }
        }

        impl Div<f64> for $T {
            type Output = $T;

            fn div(self, rhs: f64) -> $T {
                self.div_real(rhs)
            }
        }

        impl Div<$T> for f64 {
            type Output = $T;

            fn div(self, rhs: $T) -> $T {
                rhs.inverse().scale(self)
            }
        }

        impl AddAssign for $T {
            fn add_assign(&mut self, rhs: $T) {
                *self = self.plus(&rhs);
            }
        }

        impl SubAssign for $T {
            fn sub_assign(&mut self, rhs: $T) {
                *self = self.minus(&rhs);
            }
        }

        impl MulAssign for $T {
            fn mul_assign(&mut self, rhs: $T) {
                *self = self.times(&rhs);
            }
        }

        impl DivAssign for $T {
            fn div_assign(&mut self, rhs: $T) {
                *self = BinaryNumber::div(self, &rhs);
            }
        }

        impl Zero for $T {
            fn zero() -> Self {
                <$T as BinaryNumber>::z(0.0, 0.0)
            }

            fn is_zero(&self) -> bool {
                BinaryNumber::is_zero(self)
            }
        }

        impl One for $T {
            fn one() -> Self {
                <$T as BinaryNumber>::z(1.0, 0.0)
            }
        }

        impl Inv for $T {
            type Output = $T;

            fn inv(self) -> $T {
                self.inverse()
            }
        }

        impl Pow<f64> for $T {
            type Output = $T;

            fn pow(self, a: f64) -> $T {
                BinaryNumber::pow(&self, a)
            }
        }

        impl Pow<$T> for $T {
            type Output = $T;

            fn pow(self, a: $T) -> $T {
                self.pow_value(&a)
            }
        }
    };
}

impl_binary_ops!(Complex, "i");
impl_binary_ops!(SplitComplex, "j");
impl_binary_ops!(DualNumber, "ε");
