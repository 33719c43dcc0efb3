use uom::si::f64::{DiffusionCoefficient, SpecificHeatCapacity, ThermalConductivity};

use crate::support::thermo::{PropertyError, State};

use super::ThermoModel;

pub trait HasCp: ThermoModel {
    /// Returns the specific heat capacity at constant pressure for the given state.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] if `cp` cannot be calculated.
    fn cp(&self, state: &State<Self::Fluid>) -> Result<SpecificHeatCapacity, PropertyError>;
}

pub trait HasThermalConductivity: ThermoModel {
    /// Returns the thermal conductivity for the given state.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] if the conductivity cannot be calculated.
    fn thermal_conductivity(
        &self,
        state: &State<Self::Fluid>,
    ) -> Result<ThermalConductivity, PropertyError>;
}

pub trait HasKinematicViscosity: ThermoModel {
    /// Returns the kinematic viscosity for the given state.
    ///
    /// `uom` has no kinematic viscosity quantity, so the value is carried as a
    /// [`DiffusionCoefficient`], which has the same dimension (m²/s).
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] if the viscosity cannot be calculated.
    fn kinematic_viscosity(
        &self,
        state: &State<Self::Fluid>,
    ) -> Result<DiffusionCoefficient, PropertyError>;
}

/// Prandtl number, `Pr = ν·ρ·cp / k`.
///
/// The provided method derives it from the other transport capabilities.
/// Models with a better source (e.g. a tabulated Prandtl number) can override it.
pub trait HasPrandtl: HasCp + HasThermalConductivity + HasKinematicViscosity {
    /// Returns the (dimensionless) Prandtl number for the given state.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] if any of the underlying properties fail,
    /// or if the result is not a finite positive number.
    fn prandtl(&self, state: &State<Self::Fluid>) -> Result<f64, PropertyError> {
        let nu = self.kinematic_viscosity(state)?;
        let cp = self.cp(state)?;
        let k = self.thermal_conductivity(state)?;

        // SI base values, so the product is dimensionless.
        let pr = nu.value * state.density.value * cp.value / k.value;
        if pr.is_finite() && pr > 0.0 {
            Ok(pr)
        } else {
            Err(PropertyError::Calculation {
                context: format!("prandtl number evaluated to {pr}"),
            })
        }
    }
}
