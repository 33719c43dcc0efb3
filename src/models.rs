//! Public Twine models.
//!
//! # Model structure
//!
//! Each model lives in its own module and contains an internal `core` submodule
//! where the computation and domain logic lives. The `core` module is an
//! implementation detail; the model module re-exports the types callers need.
//!
//! The [`twine_core::Model`] implementation is a thin adapter that delegates to
//! the model's core API.

pub mod thermal;
