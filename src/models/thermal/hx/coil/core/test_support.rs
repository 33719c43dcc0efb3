use uom::si::{
    f64::{
        MassRate, Pressure, ThermalConductance, ThermalConductivity, ThermodynamicTemperature,
    },
    mass_rate::kilogram_per_second,
    pressure::megapascal,
    thermal_conductivity::watt_per_meter_kelvin,
    thermodynamic_temperature::kelvin,
};

use crate::support::{
    hx::FlowArrangement,
    thermo::{
        fluid::Water,
        model::{Incompressible, LiquidTable},
    },
};

use super::{
    CoilExchanger, CoilGeometry, CoilHxInput, InitialHtc, Inlet, Inlets, MassFlows,
    SegmentGeometry, state::SideState,
};

pub(super) const TUBE_INLET: f64 = 313.15;
pub(super) const SHELL_INLET: f64 = 598.15;

pub(super) fn constant_water() -> Incompressible<Water> {
    Incompressible::new().unwrap()
}

pub(super) fn table_water() -> LiquidTable<Water> {
    LiquidTable::new().unwrap()
}

pub(super) fn wall_conductivity() -> ThermalConductivity {
    ThermalConductivity::new::<watt_per_meter_kelvin>(18.0)
}

/// The reference water cooler: cold water in the tubes, hot water outside.
pub(super) fn reference_input(
    segments: usize,
    arrangement: FlowArrangement,
) -> CoilHxInput<Water, Water> {
    let pressure = Pressure::new::<megapascal>(15.7);
    CoilHxInput {
        inlets: Inlets {
            tube: Inlet::at(ThermodynamicTemperature::new::<kelvin>(TUBE_INLET), pressure),
            shell: Inlet::at(ThermodynamicTemperature::new::<kelvin>(SHELL_INLET), pressure),
        },
        m_dot: MassFlows::new(
            MassRate::new::<kilogram_per_second>(13.889),
            MassRate::new::<kilogram_per_second>(3.056),
        )
        .unwrap(),
        geometry: CoilGeometry::reference_cooler(),
        wall_conductivity: wall_conductivity(),
        segments,
        arrangement,
        initial_htc: InitialHtc::default(),
    }
}

/// Reference input with a different shell-side flow rate.
pub(super) fn with_shell_flow(
    input: CoilHxInput<Water, Water>,
    kg_per_s: f64,
) -> CoilHxInput<Water, Water> {
    let tube = input.m_dot.tube();
    CoilHxInput {
        m_dot: MassFlows::new(tube, MassRate::new::<kilogram_per_second>(kg_per_s)).unwrap(),
        ..input
    }
}

/// Freshly seeded sides of the reference cooler with constant properties.
pub(super) fn constant_sides(segments: usize) -> (SideState, SideState) {
    let thermo = constant_water();
    let input = reference_input(segments, FlowArrangement::CounterFlow);
    let hx = CoilExchanger::new(&input, &thermo, &thermo).unwrap();
    (hx.tube.clone(), hx.shell.clone())
}

/// Radial wall conductance of one segment of the reference cooler.
pub(super) fn wall_conductance(segments: usize) -> ThermalConductance {
    SegmentGeometry::new(
        &CoilGeometry::reference_cooler(),
        wall_conductivity(),
        segments,
    )
    .wall_conductance
}
