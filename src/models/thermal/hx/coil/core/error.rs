use thiserror::Error;

/// Errors that can occur while building or evaluating a coil exchanger.
#[derive(Debug, Error)]
pub enum CoilHxError {
    /// A geometry dimension is non-positive or inconsistent.
    #[error("invalid geometry `{field}`: {reason}")]
    InvalidGeometry { field: &'static str, reason: String },

    /// A boundary condition or solver setting is invalid.
    #[error("invalid input `{field}`: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    /// The assembled linear system has no unique solution.
    #[error("singular linear system at row {row}")]
    SingularSystem { row: usize },

    /// The property model could not evaluate a state.
    ///
    /// The model's own error is kept as the source.
    #[error("property evaluation failed: {context}")]
    PropertyOutOfRange {
        /// The property call that failed.
        context: String,

        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The fixed-point iteration hit its iteration cap.
    #[error("did not converge after {iters} iterations (residual {residual:e})")]
    DidNotConverge { iters: usize, residual: f64 },
}

impl CoilHxError {
    /// Wraps a property model failure with context.
    pub(super) fn property_failed(
        context: impl Into<String>,
        err: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::PropertyOutOfRange {
            context: context.into(),
            source: Box::new(err),
        }
    }

    pub(super) fn invalid_input(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            reason: reason.into(),
        }
    }
}
