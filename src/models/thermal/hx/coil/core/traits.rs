//! Internal traits for the coil exchanger.

use uom::si::f64::{Pressure, ThermodynamicTemperature};

use crate::support::thermo::capability::{
    HasCp, HasKinematicViscosity, HasPrandtl, HasThermalConductivity, StateFrom, ThermoModel,
};

/// Required property model bounds for one side of a coil exchanger.
#[doc(hidden)]
pub trait CoilHxThermoModel<Fluid>:
    ThermoModel<Fluid = Fluid>
    + HasCp
    + HasThermalConductivity
    + HasKinematicViscosity
    + HasPrandtl
    + StateFrom<(Fluid, ThermodynamicTemperature, Pressure)>
{
}

impl<Fluid, T> CoilHxThermoModel<Fluid> for T where
    T: ThermoModel<Fluid = Fluid>
        + HasCp
        + HasThermalConductivity
        + HasKinematicViscosity
        + HasPrandtl
        + StateFrom<(Fluid, ThermodynamicTemperature, Pressure)>
{
}
