//! CoolProp-backed fluid property model.

mod error;

use std::{
    marker::PhantomData,
    sync::{Mutex, MutexGuard},
};

use rfluids::{
    io::{FluidInputPair, FluidParam},
    native::AbstractState,
};
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

use crate::support::thermo::{
    PropertyError, State,
    capability::{
        HasCp, HasKinematicViscosity, HasPrandtl, HasThermalConductivity, StateFrom, ThermoModel,
    },
};

pub use error::CoolPropError;

/// Trait used to mark fluids as usable with the [`CoolProp`] model.
///
/// Implementors provide the backend and fluid identifiers needed to construct a
/// `CoolProp` `AbstractState`.
#[cfg_attr(docsrs, doc(cfg(feature = "coolprop")))]
pub trait CoolPropFluid: Default + Send + Sync + 'static {
    const BACKEND: &'static str;
    const NAME: &'static str;
}

/// A fluid property model backed by `CoolProp`.
///
/// States are built from temperature and pressure; transport properties are
/// evaluated from the state's temperature and density.
#[cfg_attr(docsrs, doc(cfg(feature = "coolprop")))]
pub struct CoolProp<F: CoolPropFluid> {
    state: Mutex<AbstractState>,
    _f: PhantomData<F>,
}

impl<F: CoolPropFluid> ThermoModel for CoolProp<F> {
    type Fluid = F;
}

impl<F: CoolPropFluid> CoolProp<F> {
    /// Construct a new CoolProp-backed model instance.
    ///
    /// # Errors
    ///
    /// Returns [`CoolPropError`] if the underlying `AbstractState` cannot be
    /// created for the given `F::BACKEND` and `F::NAME`.
    pub fn new() -> Result<Self, CoolPropError> {
        let state = AbstractState::new(F::BACKEND, F::NAME)?;
        Ok(Self {
            state: Mutex::new(state),
            _f: PhantomData,
        })
    }

    /// Locks the underlying `AbstractState` and updates it from `state`.
    fn lock_with_state(
        &self,
        state: &State<F>,
    ) -> Result<MutexGuard<'_, AbstractState>, CoolPropError> {
        let mut abstract_state = self.state.lock()?;
        abstract_state.update(
            FluidInputPair::DMassT,
            state.density.get::<kilogram_per_cubic_meter>(),
            state.temperature.get::<kelvin>(),
        )?;
        Ok(abstract_state)
    }

    /// Evaluates one output parameter at `state`.
    fn output(&self, state: &State<F>, param: FluidParam) -> Result<f64, CoolPropError> {
        let abstract_state = self.lock_with_state(state)?;
        Ok(abstract_state.keyed_output(param)?)
    }
}

impl<F: CoolPropFluid> HasCp for CoolProp<F> {
    fn cp(&self, state: &State<Self::Fluid>) -> Result<SpecificHeatCapacity, PropertyError> {
        let cp = self.output(state, FluidParam::CpMass)?;
        Ok(SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(cp))
    }
}

impl<F: CoolPropFluid> HasThermalConductivity for CoolProp<F> {
    fn thermal_conductivity(
        &self,
        state: &State<Self::Fluid>,
    ) -> Result<ThermalConductivity, PropertyError> {
        let k = self.output(state, FluidParam::Conductivity)?;
        Ok(ThermalConductivity::new::<watt_per_meter_kelvin>(k))
    }
}

impl<F: CoolPropFluid> HasKinematicViscosity for CoolProp<F> {
    fn kinematic_viscosity(
        &self,
        state: &State<Self::Fluid>,
    ) -> Result<DiffusionCoefficient, PropertyError> {
        // Pa·s divided by kg/m³.
        let mu = self.output(state, FluidParam::DynViscosity)?;
        let rho = state.density.get::<kilogram_per_cubic_meter>();
        Ok(DiffusionCoefficient::new::<square_meter_per_second>(
            mu / rho,
        ))
    }
}

impl<F: CoolPropFluid> HasPrandtl for CoolProp<F> {}

impl<F: CoolPropFluid> StateFrom<(F, ThermodynamicTemperature, Pressure)> for CoolProp<F> {
    type Error = CoolPropError;

    fn state_from(
        &self,
        (fluid, temperature, pressure): (F, ThermodynamicTemperature, Pressure),
    ) -> Result<State<F>, Self::Error> {
        let mut abstract_state = self.state.lock()?;
        abstract_state.update(
            FluidInputPair::PT,
            pressure.get::<pascal>(),
            temperature.get::<kelvin>(),
        )?;

        let density = abstract_state.keyed_output(FluidParam::DMass)?;

        Ok(State {
            temperature,
            density: MassDensity::new::<kilogram_per_cubic_meter>(density),
            fluid,
        })
    }
}

// Static assertion: CoolProp<F> must be Send + Sync for any CoolPropFluid.
// rfluids serializes all CoolProp FFI calls; the local mutex keeps each
// update/query pair atomic.
#[allow(dead_code)]
const _: () = {
    fn assert_send_sync<T: Send + Sync>() {}
    fn check<F: CoolPropFluid>() {
        assert_send_sync::<CoolProp<F>>();
    }
};
