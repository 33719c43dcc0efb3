//! Temperature-tabulated compressed-liquid properties.
//!
//! [`LiquidTable`] linearly interpolates density, `cp`, conductivity and
//! viscosity in temperature. Compressed liquids are nearly insensitive to
//! pressure, so pressure only has to fall inside the envelope the table was
//! built for. Any state outside the envelope is rejected with
//! [`PropertyError::OutOfDomain`].

use std::marker::PhantomData;

use thiserror::Error;
use uom::si::{
    diffusion_coefficient::square_meter_per_second,
    f64::{
        DiffusionCoefficient, MassDensity, Pressure, SpecificHeatCapacity, ThermalConductivity,
        ThermodynamicTemperature,
    },
    mass_density::kilogram_per_cubic_meter,
    pressure::pascal,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermal_conductivity::watt_per_meter_kelvin,
    thermodynamic_temperature::kelvin,
};

use crate::support::{
    constraint::{Constraint, StrictlyPositive},
    interp::interp_clamped,
    thermo::{
        PropertyError, State,
        capability::{
            HasCp, HasKinematicViscosity, HasPrandtl, HasThermalConductivity, StateFrom,
            ThermoModel,
        },
    },
};

/// One tabulated state point, in SI base units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LiquidTableRow {
    /// Temperature in K.
    pub temperature: f64,
    /// Density in kg/m³.
    pub density: f64,
    /// Specific heat in J/(kg·K).
    pub cp: f64,
    /// Thermal conductivity in W/(m·K).
    pub conductivity: f64,
    /// Dynamic viscosity in Pa·s.
    pub viscosity: f64,
}

/// Tabulated data and its pressure envelope, in Pa.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LiquidTableData {
    pub min_pressure: f64,
    pub max_pressure: f64,
    pub rows: &'static [LiquidTableRow],
}

/// Fluids that ship a property table for [`LiquidTable`].
pub trait TabulatedFluid {
    fn table() -> LiquidTableData;
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum LiquidTableError {
    #[error("table needs at least two rows, got {len}")]
    TooFewRows { len: usize },
    #[error("temperatures must be strictly ascending (row {index})")]
    NotAscending { index: usize },
    #[error("{column} must be strictly positive (row {index})")]
    NonPositive { index: usize, column: &'static str },
    #[error("invalid pressure envelope [{min}, {max}] Pa")]
    PressureRange { min: f64, max: f64 },
}

/// Compressed-liquid model backed by a temperature table.
#[derive(Debug, Clone, PartialEq)]
pub struct LiquidTable<Fluid> {
    temperature: Vec<f64>,
    density: Vec<f64>,
    cp: Vec<f64>,
    conductivity: Vec<f64>,
    kinematic_viscosity: Vec<f64>,
    pressure: (f64, f64),
    _marker: PhantomData<Fluid>,
}

impl<Fluid> ThermoModel for LiquidTable<Fluid> {
    type Fluid = Fluid;
}

impl<Fluid> LiquidTable<Fluid> {
    /// Creates a model from the table shipped with `Fluid`.
    ///
    /// # Errors
    ///
    /// Returns [`LiquidTableError`] if the table is malformed.
    pub fn new() -> Result<Self, LiquidTableError>
    where
        Fluid: TabulatedFluid,
    {
        Self::from_data(Fluid::table())
    }

    /// Creates a model from explicit table data.
    ///
    /// # Errors
    ///
    /// Returns [`LiquidTableError`] if the table is malformed.
    pub fn from_data(data: LiquidTableData) -> Result<Self, LiquidTableError> {
        let LiquidTableData {
            min_pressure,
            max_pressure,
            rows,
        } = data;

        if rows.len() < 2 {
            return Err(LiquidTableError::TooFewRows { len: rows.len() });
        }
        if StrictlyPositive::check(&min_pressure).is_err() || max_pressure <= min_pressure {
            return Err(LiquidTableError::PressureRange {
                min: min_pressure,
                max: max_pressure,
            });
        }

        for (index, row) in rows.iter().enumerate() {
            let columns = [
                ("temperature", row.temperature),
                ("density", row.density),
                ("cp", row.cp),
                ("conductivity", row.conductivity),
                ("viscosity", row.viscosity),
            ];
            if let Some((column, _)) = columns
                .into_iter()
                .find(|(_, v)| StrictlyPositive::check(v).is_err())
            {
                return Err(LiquidTableError::NonPositive { index, column });
            }
            if index > 0 && row.temperature <= rows[index - 1].temperature {
                return Err(LiquidTableError::NotAscending { index });
            }
        }

        Ok(Self {
            temperature: rows.iter().map(|r| r.temperature).collect(),
            density: rows.iter().map(|r| r.density).collect(),
            cp: rows.iter().map(|r| r.cp).collect(),
            conductivity: rows.iter().map(|r| r.conductivity).collect(),
            kinematic_viscosity: rows.iter().map(|r| r.viscosity / r.density).collect(),
            pressure: (min_pressure, max_pressure),
            _marker: PhantomData,
        })
    }

    /// Returns the temperature in K if it lies inside the table.
    fn checked_temperature(&self, t: ThermodynamicTemperature) -> Result<f64, PropertyError> {
        let t = t.get::<kelvin>();
        let (lo, hi) = (self.temperature[0], self.temperature[self.temperature.len() - 1]);
        if t >= lo && t <= hi {
            Ok(t)
        } else {
            Err(PropertyError::OutOfDomain {
                context: format!("temperature {t:.2} K outside [{lo}, {hi}] K"),
            })
        }
    }

    fn checked_pressure(&self, p: Pressure) -> Result<(), PropertyError> {
        let p = p.get::<pascal>();
        let (lo, hi) = self.pressure;
        if p >= lo && p <= hi {
            Ok(())
        } else {
            Err(PropertyError::OutOfDomain {
                context: format!("pressure {p:.0} Pa outside [{lo}, {hi}] Pa"),
            })
        }
    }

    fn lookup(&self, column: &[f64], state: &State<Fluid>) -> Result<f64, PropertyError> {
        let t = self.checked_temperature(state.temperature)?;
        Ok(interp_clamped(t, &self.temperature, column))
    }
}

impl<Fluid> HasCp for LiquidTable<Fluid> {
    fn cp(&self, state: &State<Fluid>) -> Result<SpecificHeatCapacity, PropertyError> {
        let cp = self.lookup(&self.cp, state)?;
        Ok(SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(cp))
    }
}

impl<Fluid> HasThermalConductivity for LiquidTable<Fluid> {
    fn thermal_conductivity(
        &self,
        state: &State<Fluid>,
    ) -> Result<ThermalConductivity, PropertyError> {
        let k = self.lookup(&self.conductivity, state)?;
        Ok(ThermalConductivity::new::<watt_per_meter_kelvin>(k))
    }
}

impl<Fluid> HasKinematicViscosity for LiquidTable<Fluid> {
    fn kinematic_viscosity(
        &self,
        state: &State<Fluid>,
    ) -> Result<DiffusionCoefficient, PropertyError> {
        let nu = self.lookup(&self.kinematic_viscosity, state)?;
        Ok(DiffusionCoefficient::new::<square_meter_per_second>(nu))
    }
}

impl<Fluid> HasPrandtl for LiquidTable<Fluid> {}

impl<Fluid> StateFrom<(Fluid, ThermodynamicTemperature, Pressure)> for LiquidTable<Fluid> {
    type Error = PropertyError;

    fn state_from(
        &self,
        (fluid, temperature, pressure): (Fluid, ThermodynamicTemperature, Pressure),
    ) -> Result<State<Fluid>, Self::Error> {
        self.checked_pressure(pressure)?;
        let t = self.checked_temperature(temperature)?;
        let rho = interp_clamped(t, &self.temperature, &self.density);
        Ok(State::new(
            temperature,
            MassDensity::new::<kilogram_per_cubic_meter>(rho),
            fluid,
        ))
    }
}
