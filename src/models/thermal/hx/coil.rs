//! Helically coiled tube-in-shell heat exchanger.
//!
//! [`CoilExchanger`] is the stateful solver: build it once from a
//! [`CoilHxInput`], call [`evaluate`](CoilExchanger::evaluate), then read the
//! converged profiles. [`CoilHx`] wraps the same solver as a
//! [`twine_core::Model`] that maps an input to a [`Results`] snapshot.
//!
//! # Example
//!
//! ```
//! use coil_hx::{
//!     models::thermal::hx::coil::{
//!         CoilExchanger, CoilGeometry, CoilHxInput, InitialHtc, Inlet, Inlets, MassFlows,
//!     },
//!     support::{hx::FlowArrangement, thermo::{fluid::Water, model::LiquidTable}},
//! };
//! use uom::si::{
//!     f64::{MassRate, Pressure, ThermalConductivity, ThermodynamicTemperature},
//!     mass_rate::kilogram_per_second,
//!     pressure::megapascal,
//!     thermal_conductivity::watt_per_meter_kelvin,
//!     thermodynamic_temperature::kelvin,
//! };
//!
//! let water = LiquidTable::<Water>::new()?;
//! let p = Pressure::new::<megapascal>(15.7);
//!
//! let input = CoilHxInput {
//!     inlets: Inlets {
//!         tube: Inlet::at(ThermodynamicTemperature::new::<kelvin>(313.15), p),
//!         shell: Inlet::at(ThermodynamicTemperature::new::<kelvin>(598.15), p),
//!     },
//!     m_dot: MassFlows::new(
//!         MassRate::new::<kilogram_per_second>(13.889),
//!         MassRate::new::<kilogram_per_second>(3.056),
//!     )?,
//!     geometry: CoilGeometry::reference_cooler(),
//!     wall_conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(18.0),
//!     segments: 20,
//!     arrangement: FlowArrangement::CounterFlow,
//!     initial_htc: InitialHtc::default(),
//! };
//!
//! let mut hx = CoilExchanger::new(&input, &water, &water)?;
//! hx.evaluate()?;
//! assert!(hx.tube_outlet() > input.inlets.tube.temperature);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod core;

pub use self::core::{
    CoilExchanger, CoilGeometry, CoilHxError, CoilHxInput, CoilHxThermoModel, Convergence,
    EvaluateConfig, InitialHtc, Inlet, Inlets, MassFlows, Results, SideProfile,
};

use std::marker::PhantomData;

use twine_core::Model;

/// [`Model`] adapter for the coil exchanger.
///
/// Each call builds a fresh [`CoilExchanger`], evaluates it with the adapter's
/// config, and returns the converged snapshot.
#[derive(Debug)]
pub struct CoilHx<'a, TubeFluid, ShellFluid, TubeThermo, ShellThermo> {
    tube_thermo: &'a TubeThermo,
    shell_thermo: &'a ShellThermo,
    config: EvaluateConfig,
    _fluids: PhantomData<(TubeFluid, ShellFluid)>,
}

impl<'a, TubeFluid, ShellFluid, TubeThermo, ShellThermo>
    CoilHx<'a, TubeFluid, ShellFluid, TubeThermo, ShellThermo>
{
    #[must_use]
    pub fn new(
        tube_thermo: &'a TubeThermo,
        shell_thermo: &'a ShellThermo,
        config: EvaluateConfig,
    ) -> Self {
        Self {
            tube_thermo,
            shell_thermo,
            config,
            _fluids: PhantomData,
        }
    }
}

impl<TubeFluid, ShellFluid, TubeThermo, ShellThermo> Model
    for CoilHx<'_, TubeFluid, ShellFluid, TubeThermo, ShellThermo>
where
    TubeFluid: Clone,
    ShellFluid: Clone,
    TubeThermo: CoilHxThermoModel<TubeFluid>,
    ShellThermo: CoilHxThermoModel<ShellFluid>,
{
    type Input = CoilHxInput<TubeFluid, ShellFluid>;
    type Output = Results;
    type Error = CoilHxError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let mut hx = CoilExchanger::new(input, self.tube_thermo, self.shell_thermo)?
            .with_config(self.config);
        hx.evaluate()?;
        Ok(hx.results())
    }
}
