//! Heat exchanger analysis toolkit.
//!
//! Heat exchangers transfer thermal energy between two fluid streams. This
//! module collects the pieces the coil exchanger model is built from:
//!
//! - **Flow arrangements**: [`FlowArrangement`]
//! - **Nusselt correlations** for helically coiled bundles: [`correlation`]
//! - **Effectiveness-NTU relations**: [`effectiveness`], the closed-form
//!   reference for constant-property exchangers
//!
//! # Example
//!
//! ```
//! use coil_hx::support::hx::{FlowArrangement, effectiveness};
//! use uom::si::{f64::ThermalConductance, thermal_conductance::kilowatt_per_kelvin};
//!
//! let ua = ThermalConductance::new::<kilowatt_per_kelvin>(3.0);
//! let rates = [
//!     ThermalConductance::new::<kilowatt_per_kelvin>(3.0),
//!     ThermalConductance::new::<kilowatt_per_kelvin>(6.0),
//! ];
//!
//! let eff = effectiveness::effectiveness(FlowArrangement::CounterFlow, ua, rates);
//! assert!(eff > 0.0 && eff < 1.0);
//! ```

mod arrangement;
pub mod correlation;
pub mod effectiveness;

pub use arrangement::FlowArrangement;
