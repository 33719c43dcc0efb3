//! Supporting utilities shared by the models in this crate.

pub mod constraint;
pub mod hx;
pub mod interp;
pub mod thermo;
pub mod units;
