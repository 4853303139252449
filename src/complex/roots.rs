/*
    Root extraction
*/

use std::f64::consts::TAU;

use tracing::debug;

use super::*;
use crate::util::positive_angle;

impl Complex {
    /// Largest root count accepted by [`Complex::roots`].
    pub const MAX_ROOTS: i32 = 10_000;

    /// Returns the `n` distinct `n`-th roots of this number.
    ///
    /// The roots are ordered by their angle in `[0, 2pi)`, measured with
    /// the branch cut on the positive real axis. A NaN or infinite number
    /// has no roots and zero has the single root zero, except that `n = 1`
    /// always returns `[self]`.
    ///
    /// # Errors
    ///
    /// Returns [`BinaryError::InvalidRootCount`] unless `1 <= n <= MAX_ROOTS`.
    pub fn roots(&self, n: i32) -> Result<Vec<Complex>, BinaryError> {
        if !(1..=Self::MAX_ROOTS).contains(&n) {
            debug!(n, max = Self::MAX_ROOTS, "rejected root count");
            return Err(BinaryError::InvalidRootCount {
                n,
                max: Self::MAX_ROOTS,
            });
        }

        if n == 1 {
            return Ok(vec![*self]);
        }

        if self.is_nan() || self.is_infinite() {
            return Ok(Vec::new());
        }

        if self.is_zero() {
            return Ok(vec![Complex::ZERO]);
        }

        let nf = f64::from(n);
        let radius = (self.logabs() / nf).exp();
        let theta = self.arg() / nf;
        let mut angles: Vec<f64> = (0..n)
            .map(|k| positive_angle(theta + TAU * f64::from(k) / nf))
            .collect();
        angles.sort_by(f64::total_cmp);

        Ok(angles
            .into_iter()
            .map(|t| Complex::polar(radius, t))
            .collect())
    }
}
