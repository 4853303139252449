/*
    Escape-time iteration
*/

mod builder;

use std::sync::Arc;

pub use builder::EscapeFunctionBuilder;

/// A plain function surface handed to rendering and coloring code.
pub type ComputeFunction<A, B> = Arc<dyn Fn(A) -> B + Send + Sync>;

pub(crate) type InitFn<V> = Box<dyn Fn(V) -> V + Send + Sync>;
pub(crate) type TestFn<V> = Box<dyn Fn(V) -> bool + Send + Sync>;
pub(crate) type StepFn<V> = Box<dyn Fn(V, V) -> V + Send + Sync>;
pub(crate) type GuardedStepFn<V> = Box<dyn Fn(usize, V) -> Step<V> + Send + Sync>;

/// Terminal state of an escape-time iteration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EscapeTimeResult<V> {
    /// The escape test held after `iters` iterations.
    Escaped { iters: usize, max_iters: usize, z: V },
    /// The iteration cap was reached, or the point was known to be
    /// contained, without the escape test ever holding.
    Contained { max_iters: usize, z: V },
}

impl<V: Copy> EscapeTimeResult<V> {
    /// Iterations taken before escaping; zero for a contained point.
    pub fn iters(&self) -> usize {
        match *self {
            EscapeTimeResult::Escaped { iters, .. } => iters,
            EscapeTimeResult::Contained { .. } => 0,
        }
    }

    pub fn max_iters(&self) -> usize {
        match *self {
            EscapeTimeResult::Escaped { max_iters, .. } => max_iters,
            EscapeTimeResult::Contained { max_iters, .. } => max_iters,
        }
    }

    /// The final iterate.
    pub fn z(&self) -> V {
        match *self {
            EscapeTimeResult::Escaped { z, .. } => z,
            EscapeTimeResult::Contained { z, .. } => z,
        }
    }

    pub fn is_escaped(&self) -> bool {
        matches!(self, EscapeTimeResult::Escaped { .. })
    }

    pub fn is_contained(&self) -> bool {
        matches!(self, EscapeTimeResult::Contained { .. })
    }
}

/// Outcome of a single iteration step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Step<V> {
    /// Keep iterating from the new iterate.
    Continue(V),
    /// Stop, the new iterate escaped.
    Escape(V),
    /// Stop, the iteration cannot make further progress.
    Contain(V),
}

// How an `EscapeFunction` advances `z`.
pub(crate) enum Stepper<V> {
    // `z <- step(seed, z)`, then the escape test
    Plain { step: StepFn<V>, escape_test: TestFn<V> },
    // steps that decide for themselves when to stop
    Guarded(GuardedStepFn<V>),
}

impl<V: Copy> Stepper<V> {
    fn escapes(&self, z: V) -> bool {
        match self {
            Stepper::Plain { escape_test, .. } => escape_test(z),
            Stepper::Guarded(_) => false,
        }
    }

    fn advance(&self, i: usize, seed: V, z: V) -> Step<V> {
        match self {
            Stepper::Plain { step, escape_test } => {
                let next = step(seed, z);
                if escape_test(next) {
                    Step::Escape(next)
                } else {
                    Step::Continue(next)
                }
            }
            Stepper::Guarded(step) => step(i, z),
        }
    }
}

/// A validated escape-time configuration mapping a seed to its
/// [`EscapeTimeResult`].
///
/// The function holds no mutable state, so [`EscapeFunction::apply`] may
/// be called concurrently, and the same seed always gives a bit-identical
/// result.
pub struct EscapeFunction<V> {
    pub(crate) init: InitFn<V>,
    pub(crate) shortcut_containment_test: Option<TestFn<V>>,
    pub(crate) stepper: Stepper<V>,
    pub(crate) max_iters: usize,
    pub(crate) include_init: bool,
}

impl<V: Copy + 'static> EscapeFunction<V> {
    /// Starts a new configuration.
    pub fn builder() -> EscapeFunctionBuilder<V> {
        EscapeFunctionBuilder::new()
    }

    /// The iteration cap.
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Iterates from `seed` until it escapes or the cap is reached.
    pub fn apply(&self, seed: V) -> EscapeTimeResult<V> {
        let max_iters = self.max_iters;

        if let Some(test) = &self.shortcut_containment_test {
            if test(seed) {
                return EscapeTimeResult::Contained { max_iters, z: seed };
            }
        }

        let mut z = (self.init)(seed);
        let mut i = usize::from(self.include_init);
        if self.stepper.escapes(z) {
            return EscapeTimeResult::Escaped { iters: i, max_iters, z };
        }

        loop {
            i += 1;
            match self.stepper.advance(i, seed, z) {
                Step::Continue(next) => z = next,
                Step::Escape(next) => {
                    return EscapeTimeResult::Escaped {
                        iters: i,
                        max_iters,
                        z: next,
                    }
                }
                Step::Contain(next) => return EscapeTimeResult::Contained { max_iters, z: next },
            }

            if i > max_iters {
                return EscapeTimeResult::Contained { max_iters, z };
            }
        }
    }

    /// Converts this function into a shareable closure.
    pub fn into_fn(self) -> ComputeFunction<V, EscapeTimeResult<V>> {
        Arc::new(move |seed| self.apply(seed))
    }
}

impl<V> std::fmt::Debug for EscapeFunction<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EscapeFunction")
            .field("max_iters", &self.max_iters)
            .field("include_init", &self.include_init)
            .field("shortcut", &self.shortcut_containment_test.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doubling(max_iters: usize, include_init: bool) -> EscapeFunction<f64> {
        EscapeFunction::builder()
            .step(|_, z: f64| 2.0 * z)
            .escape_test(|z: f64| z > 100.0)
            .max_iters(max_iters)
            .include_init(include_init)
            .build()
            .unwrap()
    }

    #[test]
    fn counts_iterations() {
        // 1 -> 2 -> 4 -> ... -> 128
        assert_eq!(doubling(20, false).apply(1.0).iters(), 7);
        assert_eq!(doubling(20, true).apply(1.0).iters(), 8);
    }

    #[test]
    fn escaped_at_init() {
        let r = doubling(20, false).apply(500.0);
        assert_eq!(
            r,
            EscapeTimeResult::Escaped {
                iters: 0,
                max_iters: 20,
                z: 500.0
            }
        );
    }

    #[test]
    fn cap_reached() {
        let r = doubling(3, false).apply(1.0);
        assert!(r.is_contained());
        assert_eq!(r.iters(), 0);
        assert_eq!(r.max_iters(), 3);
        // 1 -> 2 -> 4 -> 8 -> 16, the last step passes the cap
        assert_eq!(r.z(), 16.0);
    }

    #[test]
    fn guarded_step_stops_early() {
        let f = EscapeFunction {
            init: Box::new(|z: f64| z),
            shortcut_containment_test: None,
            stepper: Stepper::Guarded(Box::new(|i, z| {
                if i == 2 {
                    Step::Contain(z)
                } else {
                    Step::Continue(z + 1.0)
                }
            })),
            max_iters: 10,
            include_init: false,
        };
        assert_eq!(f.apply(0.0), EscapeTimeResult::Contained { max_iters: 10, z: 1.0 });
    }
}
