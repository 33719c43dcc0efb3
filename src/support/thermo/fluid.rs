//! Canonical fluid identifiers.
//!
//! A fluid type names a substance. Each model decides how that name is
//! interpreted, usually through a trait the fluid implements (constants for
//! [`Incompressible`](crate::support::thermo::model::Incompressible), a table
//! for [`LiquidTable`](crate::support::thermo::model::LiquidTable)).

mod water;

pub use water::Water;
