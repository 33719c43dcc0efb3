//! Nusselt-number correlations for helically coiled tube bundles.
//!
//! Both correlations are pure functions of dimensionless groups plus a little
//! geometry. Regime selection is expressed as small enums so every branch is
//! visible in a `match`:
//!
//! - [`in_coil_nusselt`]: Flow inside a coiled tube, with [`CoilRegime`]
//!   (laminar / turbulent) and [`ThermalDirection`] (heating / cooling).
//! - [`cross_flow_nusselt`]: Flow across a staggered coil bundle, with
//!   [`ReynoldsBand`], a row-count correction and an incidence correction.
//!
//! Reynolds numbers are taken by absolute value.

mod cross_flow;
mod in_coil;

pub use cross_flow::{ReynoldsBand, cross_flow_nusselt, incidence_correction, row_correction};
pub use in_coil::{CoilRegime, ThermalDirection, critical_reynolds, dean_number, in_coil_nusselt};
