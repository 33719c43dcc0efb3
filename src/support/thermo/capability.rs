//! Capability traits used to query and construct thermodynamic states.

mod properties;
mod state_from;

pub use properties::*;
pub use state_from::StateFrom;

/// Base trait for all property models.
///
/// A model names the fluid type its states carry. Everything else is
/// expressed through capability traits, so a model only implements what it
/// can actually compute.
pub trait ThermoModel {
    type Fluid;
}
