/*
    Errors
*/

/// Errors reported by constructors, builders and partial operations.
///
/// Arithmetic itself never fails: mathematically undefined inputs produce
/// NaN or a signed infinity. A `BinaryError` means a caller asked for a
/// configuration that cannot be built, or for an operation the algebra does
/// not define at all.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BinaryError {
    /// `roots(n)` was asked for a root count outside `1 ..= MAX_ROOTS`.
    #[error("invalid root count, must be 1 <= n <= {max}: {n}")]
    InvalidRootCount { n: i32, max: i32 },

    /// An escape function was built without a step function.
    #[error("escape function requires a step function")]
    MissingStep,

    /// An escape function was built without an escape or containment test.
    #[error("escape function requires an escape test or a containment test")]
    MissingEscapeTest,

    /// An escape function was built without an iteration cap.
    #[error("escape function requires an iteration cap")]
    MissingMaxIters,

    /// An escape function was built with an iteration cap below one.
    #[error("invalid iteration cap, must be at least 1: {max_iters}")]
    InvalidMaxIters { max_iters: usize },

    /// A root finder was built without a derivative it cannot approximate.
    #[error("root finder requires a derivative of order {order}")]
    MissingDerivative { order: u8 },

    /// The algebra has no closed form for the requested operation.
    #[error("{op} is not supported for {algebra}")]
    Unsupported {
        algebra: &'static str,
        op: &'static str,
    },
}
