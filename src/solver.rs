/*
    Root finders
*/

use std::sync::Arc;

use tracing::trace;

use crate::escape::{EscapeFunction, Step, Stepper};
use crate::{BinaryError, BinaryNumber, ComputeFunction};

// Iteration cap of the root finders unless set otherwise.
const DEFAULT_MAX_ITERS: usize = 100;

/// Stopping thresholds shared by [`Newton`] and [`Halley`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tolerances {
    relative_step: f64,
    min_denominator: f64,
    derivative_epsilon: f64,
}

impl Tolerances {
    /// Creates the default tolerances: a relative step of `1e-7`,
    /// a smallest denominator of `1e-14` and a finite-difference
    /// step of `1e-7`.
    pub fn new() -> Self {
        Self {
            relative_step: 1e-7,
            min_denominator: 1e-14,
            derivative_epsilon: 1e-7,
        }
    }

    /// Sets the relative step size below which the iteration has converged.
    pub fn relative_step(mut self, tol: f64) -> Self {
        self.relative_step = tol;
        self
    }

    /// Sets the denominator magnitude below which a step is refused.
    pub fn min_denominator(mut self, tol: f64) -> Self {
        self.min_denominator = tol;
        self
    }

    /// Sets the step of the symmetric difference quotient used when no
    /// derivative is supplied.
    pub fn derivative_epsilon(mut self, eps: f64) -> Self {
        self.derivative_epsilon = eps;
        self
    }
}

impl Default for Tolerances {
    fn default() -> Self {
        Self::new()
    }
}

// Euclidean distance between the component pairs. The algebra's own norm
// vanishes on whole lines for split-complex and dual numbers, so it cannot
// measure a step.
fn distance<V: BinaryNumber>(a: &V, b: &V) -> f64 {
    (a.x() - b.x()).hypot(a.y() - b.y())
}

fn magnitude<V: BinaryNumber>(z: &V) -> f64 {
    z.x().hypot(z.y())
}

// Classifies the iterate `next` following `z`.
fn settle<V: BinaryNumber>(i: usize, z: V, next: V, tol: &Tolerances) -> Step<V> {
    if !next.is_finite() {
        trace!(i, "root finder stopped: non-finite iterate");
        Step::Contain(next)
    } else if distance(&next, &z) <= tol.relative_step * magnitude(&next) {
        Step::Escape(next)
    } else {
        Step::Continue(next)
    }
}

// A denominator is usable when it is invertible in the algebra and not tiny.
fn usable<V: BinaryNumber>(i: usize, d: &V, tol: &Tolerances) -> bool {
    let ok = d.abs() >= tol.min_denominator;
    if !ok {
        trace!(i, denominator = d.abs(), "root finder stopped: denominator too small");
    }
    ok
}

fn guarded<V: BinaryNumber + 'static>(
    max_iters: usize,
    step: impl Fn(usize, V) -> Step<V> + Send + Sync + 'static,
) -> Result<EscapeFunction<V>, BinaryError> {
    if max_iters < 1 {
        return Err(BinaryError::InvalidMaxIters { max_iters });
    }

    Ok(EscapeFunction {
        init: Box::new(|z| z),
        shortcut_containment_test: None,
        stepper: Stepper::Guarded(Box::new(step)),
        max_iters,
        include_init: false,
    })
}

/// Newton's method, `z <- z - f(z) / f'(z)`.
///
/// The resulting [`EscapeFunction`] maps a starting point to `Escaped`
/// once the iteration converges (the final iterate is the root) and to
/// `Contained` when it does not converge within the iteration cap, leaves
/// the finite numbers, or meets a vanishing derivative.
pub struct Newton<V> {
    f: ComputeFunction<V, V>,
    df: Option<ComputeFunction<V, V>>,
    max_iters: usize,
    tolerances: Tolerances,
}

impl<V: BinaryNumber + 'static> Newton<V> {
    /// Creates a solver for the roots of `f`.
    ///
    /// Without [`Newton::derivative`] the derivative is approximated by the
    /// symmetric difference quotient `(f(z + e) - f(z - e)) / 2e`.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(V) -> V + Send + Sync + 'static,
    {
        Self {
            f: Arc::new(f),
            df: None,
            max_iters: DEFAULT_MAX_ITERS,
            tolerances: Tolerances::default(),
        }
    }

    /// Sets the analytic derivative of `f`.
    pub fn derivative<F>(mut self, df: F) -> Self
    where
        F: Fn(V) -> V + Send + Sync + 'static,
    {
        self.df = Some(Arc::new(df));
        self
    }

    pub fn max_iters(mut self, max_iters: usize) -> Self {
        self.max_iters = max_iters;
        self
    }

    pub fn tolerances(mut self, tolerances: Tolerances) -> Self {
        self.tolerances = tolerances;
        self
    }

    /// Builds the iteration.
    ///
    /// # Errors
    ///
    /// Returns [`BinaryError::InvalidMaxIters`] for an iteration cap of zero.
    pub fn build(self) -> Result<EscapeFunction<V>, BinaryError> {
        let tol = self.tolerances;
        let f = self.f;
        let df: ComputeFunction<V, V> = match self.df {
            Some(df) => df,
            None => {
                let f = Arc::clone(&f);
                let eps = tol.derivative_epsilon;
                Arc::new(move |z: V| {
                    f(z.plus_real(eps))
                        .minus(&f(z.minus_real(eps)))
                        .div_real(2.0 * eps)
                })
            }
        };

        guarded(self.max_iters, move |i, z: V| {
            let dfz = df(z);
            if !usable(i, &dfz, &tol) {
                return Step::Contain(z);
            }
            let next = z.minus(&f(z).div(&dfz));
            settle(i, z, next, &tol)
        })
    }
}

/// Halley's method, `z <- z - 2 f f' / (2 f'^2 - f f'')`.
///
/// Converges cubically near a simple root. Both derivatives are required.
/// Termination follows [`Newton`].
pub struct Halley<V> {
    f: ComputeFunction<V, V>,
    df: Option<ComputeFunction<V, V>>,
    d2f: Option<ComputeFunction<V, V>>,
    max_iters: usize,
    tolerances: Tolerances,
}

impl<V: BinaryNumber + 'static> Halley<V> {
    /// Creates a solver for the roots of `f`.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(V) -> V + Send + Sync + 'static,
    {
        Self {
            f: Arc::new(f),
            df: None,
            d2f: None,
            max_iters: DEFAULT_MAX_ITERS,
            tolerances: Tolerances::default(),
        }
    }

    /// Sets the first derivative of `f`.
    pub fn derivative<F>(mut self, df: F) -> Self
    where
        F: Fn(V) -> V + Send + Sync + 'static,
    {
        self.df = Some(Arc::new(df));
        self
    }

    /// Sets the second derivative of `f`.
    pub fn second_derivative<F>(mut self, d2f: F) -> Self
    where
        F: Fn(V) -> V + Send + Sync + 'static,
    {
        self.d2f = Some(Arc::new(d2f));
        self
    }

    pub fn max_iters(mut self, max_iters: usize) -> Self {
        self.max_iters = max_iters;
        self
    }

    pub fn tolerances(mut self, tolerances: Tolerances) -> Self {
        self.tolerances = tolerances;
        self
    }

    /// Builds the iteration.
    ///
    /// # Errors
    ///
    /// Returns [`BinaryError::MissingDerivative`] if either derivative is
    /// missing and [`BinaryError::InvalidMaxIters`] for an iteration cap of zero.
    pub fn build(self) -> Result<EscapeFunction<V>, BinaryError> {
        let df = self.df.ok_or(BinaryError::MissingDerivative { order: 1 })?;
        let d2f = self.d2f.ok_or(BinaryError::MissingDerivative { order: 2 })?;
        let tol = self.tolerances;
        let f = self.f;

        guarded(self.max_iters, move |i, z: V| {
            let fz = f(z);
            let dfz = df(z);
            let denom = dfz.pow2().scale(2.0).minus(&fz.times(&d2f(z)));
            if !usable(i, &denom, &tol) {
                return Step::Contain(z);
            }
            let next = z.minus(&fz.times(&dfz).scale(2.0).div(&denom));
            settle(i, z, next, &tol)
        })
    }
}
