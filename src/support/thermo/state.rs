use uom::si::{
    f64::{MassDensity, SpecificVolume, ThermodynamicTemperature},
    mass_density::kilogram_per_cubic_meter,
    specific_volume::cubic_meter_per_kilogram,
};

/// The thermodynamic state of a fluid.
///
/// The `Fluid` type parameter identifies the substance. It is usually a
/// marker type such as [`Water`](crate::support::thermo::fluid::Water).
///
/// # Example
///
/// ```
/// use coil_hx::support::thermo::{State, fluid::Water};
/// use uom::si::{
///     f64::{MassDensity, ThermodynamicTemperature},
///     mass_density::kilogram_per_cubic_meter,
///     thermodynamic_temperature::kelvin,
/// };
///
/// let state = State::new(
///     ThermodynamicTemperature::new::<kelvin>(313.15),
///     MassDensity::new::<kilogram_per_cubic_meter>(999.0),
///     Water,
/// );
/// assert!(state.specific_volume().value > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct State<Fluid> {
    pub temperature: ThermodynamicTemperature,
    pub density: MassDensity,
    pub fluid: Fluid,
}

impl<Fluid> State<Fluid> {
    /// Creates a new state with the given temperature, density, and fluid.
    #[must_use]
    pub fn new(temperature: ThermodynamicTemperature, density: MassDensity, fluid: Fluid) -> Self {
        Self {
            temperature,
            density,
            fluid,
        }
    }

    /// Returns the specific volume, `1 / ρ`.
    #[must_use]
    pub fn specific_volume(&self) -> SpecificVolume {
        SpecificVolume::new::<cubic_meter_per_kilogram>(
            self.density.get::<kilogram_per_cubic_meter>().recip(),
        )
    }
}
