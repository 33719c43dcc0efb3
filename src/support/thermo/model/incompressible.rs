//! Constant-property liquid model.
//!
//! `Incompressible` treats density, specific heat, thermal conductivity and
//! kinematic viscosity as constants. Pressure is accepted but ignored.
//!
//! It is the model to reach for when checking the exchanger against closed-form
//! results, since every segment then sees identical properties.

use std::{convert::Infallible, marker::PhantomData};

use thiserror::Error;
use uom::si::f64::{
    DiffusionCoefficient, MassDensity, Pressure, SpecificHeatCapacity, ThermalConductivity,
    ThermodynamicTemperature,
};

use crate::support::{
    constraint::{Constraint, StrictlyPositive},
    thermo::{
        PropertyError, State,
        capability::{
            HasCp, HasKinematicViscosity, HasPrandtl, HasThermalConductivity, StateFrom,
            ThermoModel,
        },
    },
};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum IncompressibleParametersError {
    #[error("invalid density: {density:?}")]
    Density { density: MassDensity },
    #[error("invalid cp: {cp:?}")]
    Cp { cp: SpecificHeatCapacity },
    #[error("invalid thermal conductivity: {conductivity:?}")]
    Conductivity { conductivity: ThermalConductivity },
    #[error("invalid kinematic viscosity: {viscosity:?}")]
    Viscosity { viscosity: DiffusionCoefficient },
}

/// Constant parameters for the [`Incompressible`] model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IncompressibleParameters {
    pub density: MassDensity,
    pub cp: SpecificHeatCapacity,
    pub conductivity: ThermalConductivity,
    pub viscosity: DiffusionCoefficient,
}

/// Fluid constants required by the [`Incompressible`] model.
pub trait IncompressibleFluid {
    /// Returns the constant parameters for use with [`Incompressible`].
    fn parameters() -> IncompressibleParameters;
}

/// Liquid model with constant transport properties.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Incompressible<Fluid> {
    parameters: IncompressibleParameters,
    _marker: PhantomData<Fluid>,
}

impl<Fluid> ThermoModel for Incompressible<Fluid> {
    type Fluid = Fluid;
}

impl<Fluid> Incompressible<Fluid> {
    /// Creates a model using the constants defined by `Fluid`.
    ///
    /// # Errors
    ///
    /// Returns [`IncompressibleParametersError`] if any constant is not strictly positive.
    pub fn new() -> Result<Self, IncompressibleParametersError>
    where
        Fluid: IncompressibleFluid,
    {
        Self::with_parameters(Fluid::parameters())
    }

    /// Creates a model from explicit constants.
    ///
    /// # Errors
    ///
    /// Returns [`IncompressibleParametersError`] if any constant is not strictly positive.
    pub fn with_parameters(
        parameters: IncompressibleParameters,
    ) -> Result<Self, IncompressibleParametersError> {
        let IncompressibleParameters {
            density,
            cp,
            conductivity,
            viscosity,
        } = parameters;

        if StrictlyPositive::check(&density.value).is_err() {
            return Err(IncompressibleParametersError::Density { density });
        }
        if StrictlyPositive::check(&cp.value).is_err() {
            return Err(IncompressibleParametersError::Cp { cp });
        }
        if StrictlyPositive::check(&conductivity.value).is_err() {
            return Err(IncompressibleParametersError::Conductivity { conductivity });
        }
        if StrictlyPositive::check(&viscosity.value).is_err() {
            return Err(IncompressibleParametersError::Viscosity { viscosity });
        }

        Ok(Self {
            parameters,
            _marker: PhantomData,
        })
    }

    /// Returns the constants used by this model.
    #[must_use]
    pub fn parameters(&self) -> IncompressibleParameters {
        self.parameters
    }
}

impl<Fluid> HasCp for Incompressible<Fluid> {
    fn cp(&self, _state: &State<Fluid>) -> Result<SpecificHeatCapacity, PropertyError> {
        Ok(self.parameters.cp)
    }
}

impl<Fluid> HasThermalConductivity for Incompressible<Fluid> {
    fn thermal_conductivity(
        &self,
        _state: &State<Fluid>,
    ) -> Result<ThermalConductivity, PropertyError> {
        Ok(self.parameters.conductivity)
    }
}

impl<Fluid> HasKinematicViscosity for Incompressible<Fluid> {
    fn kinematic_viscosity(
        &self,
        _state: &State<Fluid>,
    ) -> Result<DiffusionCoefficient, PropertyError> {
        Ok(self.parameters.viscosity)
    }
}

impl<Fluid> HasPrandtl for Incompressible<Fluid> {}

/// The returned state always carries the constant density.
impl<Fluid> StateFrom<(Fluid, ThermodynamicTemperature, Pressure)> for Incompressible<Fluid> {
    type Error = Infallible;

    fn state_from(
        &self,
        (fluid, temperature, _pressure): (Fluid, ThermodynamicTemperature, Pressure),
    ) -> Result<State<Fluid>, Self::Error> {
        Ok(State::new(temperature, self.parameters.density, fluid))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        diffusion_coefficient::square_meter_per_second, mass_density::kilogram_per_cubic_meter,
        pressure::megapascal, specific_heat_capacity::joule_per_kilogram_kelvin,
        thermal_conductivity::watt_per_meter_kelvin, thermodynamic_temperature::kelvin,
    };

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    struct MockLiquid;

    impl IncompressibleFluid for MockLiquid {
        fn parameters() -> IncompressibleParameters {
            IncompressibleParameters {
                density: MassDensity::new::<kilogram_per_cubic_meter>(1000.0),
                cp: SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(4000.0),
                conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(0.5),
                viscosity: DiffusionCoefficient::new::<square_meter_per_second>(1e-6),
            }
        }
    }

    #[test]
    fn prandtl_from_constants() {
        let thermo = Incompressible::<MockLiquid>::new().unwrap();
        let state = thermo
            .state_from((
                ThermodynamicTemperature::new::<kelvin>(350.0),
                Pressure::new::<megapascal>(15.7),
            ))
            .unwrap();

        // 1e-6 · 1000 · 4000 / 0.5
        assert_relative_eq!(thermo.prandtl(&state).unwrap(), 8.0, epsilon = 1e-12);
        assert_relative_eq!(
            state.density.get::<kilogram_per_cubic_meter>(),
            1000.0
        );
    }

    #[test]
    fn rejects_non_positive_constants() {
        let mut parameters = MockLiquid::parameters();
        parameters.conductivity = ThermalConductivity::new::<watt_per_meter_kelvin>(0.0);

        assert!(matches!(
            Incompressible::<MockLiquid>::with_parameters(parameters),
            Err(IncompressibleParametersError::Conductivity { .. })
        ));
    }
}
