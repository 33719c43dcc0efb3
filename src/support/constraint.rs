//! Type-level numeric constraints checked once at construction.
//!
//! A [`Constrained<T, C>`] wraps a value that has been checked against the
//! marker constraint `C`. After construction the wrapper carries no runtime
//! cost and the invariant travels with the type.
//!
//! # Provided constraints
//!
//! - [`StrictlyPositive`]: Greater than zero
//! - [`NonNegative`]: Zero or greater
//!
//! Both work for plain numbers and for [`uom`] quantities.
//!
//! # Example
//!
//! ```
//! use coil_hx::support::constraint::{Constrained, StrictlyPositive};
//! use uom::si::{f64::Length, length::millimeter};
//!
//! let d = StrictlyPositive::new(Length::new::<millimeter>(12.4)).unwrap();
//! assert!(StrictlyPositive::new(Length::new::<millimeter>(0.0)).is_err());
//! let _inner: Length = d.into_inner();
//! ```

mod non_negative;
mod strictly_positive;

use std::marker::PhantomData;

use thiserror::Error;

pub use non_negative::NonNegative;
pub use strictly_positive::StrictlyPositive;

/// A numeric invariant enforced at construction time.
///
/// Implement this for a zero-sized marker type to define a new constraint.
pub trait Constraint<T> {
    /// Checks that the given value satisfies this constraint.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] describing the violation.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// The reason a value failed a [`Constraint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("value must not be negative")]
    Negative,
    #[error("value must not be zero")]
    Zero,
    #[error("value is not a number")]
    NotANumber,
}

/// A result type alias to use with [`Constraint`].
pub type ConstraintResult<T, E = ConstraintError> = Result<T, E>;

/// A value that has been checked against the constraint `C`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Constrained<T, C: Constraint<T>> {
    value: T,
    _marker: PhantomData<C>,
}

impl<T, C: Constraint<T>> Constrained<T, C> {
    /// Checks `value` against `C` and wraps it.
    ///
    /// # Errors
    ///
    /// Returns an error if the value does not satisfy the constraint.
    pub fn new(value: T) -> Result<Self, ConstraintError> {
        C::check(&value)?;
        Ok(Self {
            value,
            _marker: PhantomData,
        })
    }

    /// Consumes the wrapper and returns the inner value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T, C: Constraint<T>> AsRef<T> for Constrained<T, C> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}
