use uom::si::f64::{Pressure, ThermodynamicTemperature};

/// Inlet condition of one side of the exchanger.
///
/// `fluid` identifies the substance for the property model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Inlet<Fluid> {
    pub fluid: Fluid,
    pub temperature: ThermodynamicTemperature,
    pub pressure: Pressure,
}

impl<Fluid> Inlet<Fluid> {
    #[must_use]
    pub fn new(fluid: Fluid, temperature: ThermodynamicTemperature, pressure: Pressure) -> Self {
        Self {
            fluid,
            temperature,
            pressure,
        }
    }
}

impl<Fluid: Default> Inlet<Fluid> {
    /// Creates an inlet for a marker fluid.
    #[must_use]
    pub fn at(temperature: ThermodynamicTemperature, pressure: Pressure) -> Self {
        Self::new(Fluid::default(), temperature, pressure)
    }
}

/// Inlet conditions for the tube and shell sides.
#[derive(Debug, Clone)]
pub struct Inlets<TubeFluid, ShellFluid> {
    /// Inlet of the tube side, always at face 0.
    pub tube: Inlet<TubeFluid>,

    /// Inlet of the shell side; its face depends on the flow arrangement.
    pub shell: Inlet<ShellFluid>,
}
