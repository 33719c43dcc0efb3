//! Fluid property modeling.
//!
//! The exchanger consumes properties through the capability traits in
//! [`capability`]: a model constructs a [`State`] from a fluid, temperature and
//! pressure, and then answers property queries for that state.
//! Models that cannot evaluate a state return a [`PropertyError`].

mod error;
mod state;

pub mod capability;
pub mod fluid;
pub mod model;

pub use error::PropertyError;
pub use state::State;
