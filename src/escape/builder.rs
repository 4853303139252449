/*
    Escape function configuration
*/

use tracing::debug;

use super::*;
use crate::BinaryError;

/// Builder for an [`EscapeFunction`].
///
/// `step`, `max_iters` and one of `escape_test` or `containment_test` are
/// required. The remaining fields default to the identity `init`, no
/// shortcut containment test and `include_init` false.
pub struct EscapeFunctionBuilder<V> {
    init: Option<InitFn<V>>,
    shortcut_containment_test: Option<TestFn<V>>,
    escape_test: Option<TestFn<V>>,
    step: Option<StepFn<V>>,
    max_iters: Option<usize>,
    include_init: bool,
}

impl<V: Copy + 'static> EscapeFunctionBuilder<V> {
    /// Creates an empty configuration.
    pub fn new() -> Self {
        Self {
            init: None,
            shortcut_containment_test: None,
            escape_test: None,
            step: None,
            max_iters: None,
            include_init: false,
        }
    }

    /// Sets the map from the seed to the first iterate.
    pub fn init<F>(mut self, init: F) -> Self
    where
        F: Fn(V) -> V + Send + Sync + 'static,
    {
        self.init = Some(Box::new(init));
        self
    }

    /// Sets a test on the seed that, when it holds, skips the iteration
    /// and reports the seed as contained.
    pub fn shortcut_containment_test<F>(mut self, test: F) -> Self
    where
        F: Fn(V) -> bool + Send + Sync + 'static,
    {
        self.shortcut_containment_test = Some(Box::new(test));
        self
    }

    /// Sets the test ending the iteration as escaped.
    pub fn escape_test<F>(mut self, test: F) -> Self
    where
        F: Fn(V) -> bool + Send + Sync + 'static,
    {
        self.escape_test = Some(Box::new(test));
        self
    }

    /// Sets the escape test to the negation of `test`.
    pub fn containment_test<F>(mut self, test: F) -> Self
    where
        F: Fn(V) -> bool + Send + Sync + 'static,
    {
        self.escape_test = Some(Box::new(move |z| !test(z)));
        self
    }

    /// Sets the iteration `z <- step(seed, z)`.
    pub fn step<F>(mut self, step: F) -> Self
    where
        F: Fn(V, V) -> V + Send + Sync + 'static,
    {
        self.step = Some(Box::new(step));
        self
    }

    /// Sets the iteration cap.
    pub fn max_iters(mut self, max_iters: usize) -> Self {
        self.max_iters = Some(max_iters);
        self
    }

    /// Sets whether computing the first iterate counts as an iteration.
    pub fn include_init(mut self, include_init: bool) -> Self {
        self.include_init = include_init;
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`BinaryError::MissingStep`], [`BinaryError::MissingEscapeTest`],
    /// [`BinaryError::MissingMaxIters`] or [`BinaryError::InvalidMaxIters`].
    pub fn build(self) -> Result<EscapeFunction<V>, BinaryError> {
        let step = self.step.ok_or_else(|| {
            debug!("escape function rejected: no step function");
            BinaryError::MissingStep
        })?;

        let escape_test = self.escape_test.ok_or_else(|| {
            debug!("escape function rejected: no escape test");
            BinaryError::MissingEscapeTest
        })?;

        let max_iters = self.max_iters.ok_or_else(|| {
            debug!("escape function rejected: no iteration cap");
            BinaryError::MissingMaxIters
        })?;

        if max_iters < 1 {
            debug!(max_iters, "escape function rejected: iteration cap");
            return Err(BinaryError::InvalidMaxIters { max_iters });
        }

        Ok(EscapeFunction {
            init: self.init.unwrap_or_else(|| Box::new(|z| z)),
            shortcut_containment_test: self.shortcut_containment_test,
            stepper: Stepper::Plain { step, escape_test },
            max_iters,
            include_init: self.include_init,
        })
    }
}

impl<V: Copy + 'static> Default for EscapeFunctionBuilder<V> {
    fn default() -> Self {
        Self::new()
    }
}
