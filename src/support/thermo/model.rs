//! Property models.
//!
//! - [`Incompressible`]: Constant properties, useful as a synthetic stand-in.
//! - [`LiquidTable`]: Temperature-tabulated compressed-liquid properties with
//!   a declared pressure and temperature envelope.
//! - `CoolProp` (feature `coolprop`): Reference equation of state and
//!   transport properties through `rfluids`.

pub mod incompressible;
pub mod table;

#[cfg(feature = "coolprop")]
#[cfg_attr(docsrs, doc(cfg(feature = "coolprop")))]
pub mod coolprop;

pub use incompressible::Incompressible;
pub use table::LiquidTable;

#[cfg(feature = "coolprop")]
#[cfg_attr(docsrs, doc(cfg(feature = "coolprop")))]
pub use coolprop::CoolProp;
