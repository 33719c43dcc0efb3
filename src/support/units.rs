//! Extensions to [`uom`].
//!
//! Absolute temperatures in [`uom`] cannot be subtracted into an interval or
//! averaged directly (see
//! [#380](https://github.com/iliekturtles/uom/issues/380) and
//! [#289](https://github.com/iliekturtles/uom/issues/289)).
//! The exchanger works with segment-face temperatures and their midpoints all
//! the time, so both operations live here.
//!
//! ```
//! use uom::si::{f64::ThermodynamicTemperature, thermodynamic_temperature::kelvin};
//! use coil_hx::support::units::TemperatureDifference;
//!
//! let inlet = ThermodynamicTemperature::new::<kelvin>(598.15);
//! let outlet = ThermodynamicTemperature::new::<kelvin>(313.15);
//! let drop = inlet.minus(outlet);
//! let bulk = inlet.midpoint(outlet);
//! # let _ = (drop, bulk);
//! ```

use uom::si::{
    f64::{TemperatureInterval, ThermodynamicTemperature},
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::kelvin as abs_kelvin,
};

/// Extension trait for arithmetic on absolute temperatures.
pub trait TemperatureDifference {
    /// Returns the temperature difference `self - other`.
    fn minus(self, other: Self) -> TemperatureInterval;

    /// Returns the arithmetic mean of `self` and `other`.
    fn midpoint(self, other: Self) -> Self;
}

impl TemperatureDifference for ThermodynamicTemperature {
    fn minus(self, other: Self) -> TemperatureInterval {
        TemperatureInterval::new::<delta_kelvin>(
            self.get::<abs_kelvin>() - other.get::<abs_kelvin>(),
        )
    }

    fn midpoint(self, other: Self) -> Self {
        ThermodynamicTemperature::new::<abs_kelvin>(
            0.5 * (self.get::<abs_kelvin>() + other.get::<abs_kelvin>()),
        )
    }
}
