//! Heat exchanger models.
//!
//! - [`coil`]: discretized helically coiled tube-in-shell exchanger, solved as
//!   a stateful [`CoilExchanger`](coil::CoilExchanger) or through the
//!   [`CoilHx`](coil::CoilHx) [`twine_core::Model`] adapter.

pub mod coil;
