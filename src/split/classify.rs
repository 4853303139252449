/*
    Region classification
*/

use std::fmt;

use super::SplitComplex;
use crate::Involution;

/// The eight disjoint regions of the split-complex plane.
///
/// The null lines `y = x` and `y = -x` (the numbers with zero modulus)
/// separate four open quadrants, each named after the half-axis it contains.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Region {
    /// Either component is NaN.
    Nan,
    /// Both components are zero.
    Zero,
    /// The null line `y = x`, without the origin.
    PosNullVector,
    /// The null line `y = -x`, without the origin.
    NegNullVector,
    /// `x > |y|`
    PosX,
    /// `x < -|y|`
    NegX,
    /// `y > |x|`
    PosY,
    /// `y < -|x|`
    NegY,
}

impl Region {
    /// Returns true for the two null lines.
    pub fn is_null_vector(&self) -> bool {
        matches!(self, Region::PosNullVector | Region::NegNullVector)
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Region::Nan => "NAN",
            Region::Zero => "ZERO",
            Region::PosNullVector => "POS_NULL_VECTOR",
            Region::NegNullVector => "NEG_NULL_VECTOR",
            Region::PosX => "POS_X",
            Region::NegX => "NEG_X",
            Region::PosY => "POS_Y",
            Region::NegY => "NEG_Y",
        };
        write!(f, "{}", name)
    }
}

impl SplitComplex {
    /// Returns the region of the plane this number lies in.
    pub fn classify(&self) -> Region {
        let (x, y) = (self.x, self.y);
        if x.is_nan() || y.is_nan() {
            Region::Nan
        } else if x == 0.0 && y == 0.0 {
            Region::Zero
        } else if x == y {
            Region::PosNullVector
        } else if x == -y {
            Region::NegNullVector
        } else if x.abs() > y.abs() {
            if x > 0.0 {
                Region::PosX
            } else {
                Region::NegX
            }
        } else if y > 0.0 {
            Region::PosY
        } else {
            Region::NegY
        }
    }
}

// Involutions moving each quadrant onto `PosX`
fn negate(z: SplitComplex) -> SplitComplex {
    SplitComplex::new(-z.x, -z.y)
}

fn swap(z: SplitComplex) -> SplitComplex {
    SplitComplex::new(z.y, z.x)
}

fn negate_swap(z: SplitComplex) -> SplitComplex {
    SplitComplex::new(-z.y, -z.x)
}

fn keep(z: SplitComplex) -> SplitComplex {
    z
}

pub(super) fn quadrant_involution(z: &SplitComplex) -> Involution<SplitComplex> {
    match z.classify() {
        Region::NegX => negate,
        Region::PosY => swap,
        Region::NegY => negate_swap,
        _ => keep,
    }
}
