//! # Coil HX
//!
//! Steady-state thermal-hydraulic model of helically-coiled tube-in-shell
//! heat exchangers.
//!
//! Given inlet temperatures, pressures and mass flow rates on both sides plus
//! the coil bundle geometry, the model computes the axial temperature
//! distribution, wall temperatures, heat-transfer coefficients and the total
//! exchanged thermal power.
//!
//! ## Crate layout
//!
//! - [`models`]: The discretized coil exchanger and its [`twine_core::Model`] adapter.
//! - [`support`]: Supporting utilities used by models (constraints, units,
//!   fluid properties, heat-transfer correlations).
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful
//! on their own (the coil Nusselt correlations in particular), but their APIs
//! are not stable. Breaking changes may occur as needed.

pub mod models;
pub mod support;
