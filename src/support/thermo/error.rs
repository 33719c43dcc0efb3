use thiserror::Error;

/// Errors that may occur when evaluating fluid properties.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PropertyError {
    /// The property is undefined at the given state.
    #[error("undefined property: {context}")]
    Undefined { context: String },

    /// The state is outside the model's valid domain.
    #[error("out of domain: {context}")]
    OutOfDomain { context: String },

    /// The calculation failed due to a numerical or internal error.
    #[error("calculation error: {context}")]
    Calculation { context: String },
}
