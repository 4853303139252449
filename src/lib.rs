/*
    Top-level
*/

mod complex;
mod dual;
mod error;
mod escape;
mod number;
mod ops;
mod solver;
mod split;
mod util;

pub use complex::Complex;
pub use dual::DualNumber;
pub use error::BinaryError;
pub use escape::{ComputeFunction, EscapeFunction, EscapeFunctionBuilder, EscapeTimeResult};
pub use number::*;
pub use solver::{Halley, Newton, Tolerances};
pub use split::{Region, SplitComplex};
