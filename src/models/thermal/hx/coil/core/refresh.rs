//! Property evaluation and heat-transfer coefficient updates.

use uom::si::f64::{HeatTransfer, Pressure, ThermodynamicTemperature};

use super::{
    CoilHxError,
    state::{Properties, Side, SideState},
    traits::CoilHxThermoModel,
};

/// Where a property call happens, for error context.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Site {
    Inlet,
    Segment(usize),
    Wall(usize),
}

impl std::fmt::Display for Site {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Inlet => f.write_str("inlet"),
            Self::Segment(i) => write!(f, "segment {i}"),
            Self::Wall(i) => write!(f, "wall {i}"),
        }
    }
}

/// Evaluates bulk properties of `fluid` at `temperature` and `pressure`.
///
/// # Errors
///
/// Returns [`CoilHxError::PropertyOutOfRange`] wrapping the model's error.
pub(crate) fn properties<Fluid, Thermo>(
    thermo: &Thermo,
    fluid: &Fluid,
    temperature: ThermodynamicTemperature,
    pressure: Pressure,
    side: Side,
    site: Site,
) -> Result<Properties, CoilHxError>
where
    Fluid: Clone,
    Thermo: CoilHxThermoModel<Fluid>,
{
    let failed = |call: &str| format!("{call}({side} {site})");

    let state = thermo
        .state_from((fluid.clone(), temperature, pressure))
        .map_err(|err| CoilHxError::property_failed(failed("state"), err))?;
    let cp = thermo
        .cp(&state)
        .map_err(|err| CoilHxError::property_failed(failed("cp"), err))?;
    let conductivity = thermo
        .thermal_conductivity(&state)
        .map_err(|err| CoilHxError::property_failed(failed("thermal_conductivity"), err))?;
    let viscosity = thermo
        .kinematic_viscosity(&state)
        .map_err(|err| CoilHxError::property_failed(failed("kinematic_viscosity"), err))?;
    let prandtl = thermo
        .prandtl(&state)
        .map_err(|err| CoilHxError::property_failed(failed("prandtl"), err))?;

    Ok(Properties {
        density: state.density,
        specific_volume: state.specific_volume(),
        cp,
        conductivity,
        viscosity,
        prandtl,
    })
}

/// Prandtl number of `fluid` at the wall temperature of segment `i`.
fn wall_prandtl<Fluid, Thermo>(
    thermo: &Thermo,
    fluid: &Fluid,
    temperature: ThermodynamicTemperature,
    pressure: Pressure,
    side: Side,
    i: usize,
) -> Result<f64, CoilHxError>
where
    Fluid: Clone,
    Thermo: CoilHxThermoModel<Fluid>,
{
    let site = Site::Wall(i);
    let state = thermo
        .state_from((fluid.clone(), temperature, pressure))
        .map_err(|err| CoilHxError::property_failed(format!("state({side} {site})"), err))?;
    thermo
        .prandtl(&state)
        .map_err(|err| CoilHxError::property_failed(format!("prandtl({side} {site})"), err))
}

/// Refreshes every segment of one side from its current face and wall temperatures.
///
/// `nusselt` maps `(Re, Pr_bulk, Pr_wall)` to the side's Nusselt number.
///
/// # Errors
///
/// Returns [`CoilHxError::PropertyOutOfRange`] on the first failing property call.
pub(crate) fn refresh_side<Fluid, Thermo>(
    state: &mut SideState,
    side: Side,
    fluid: &Fluid,
    thermo: &Thermo,
    nusselt: impl Fn(f64, f64, f64) -> f64,
) -> Result<(), CoilHxError>
where
    Fluid: Clone,
    Thermo: CoilHxThermoModel<Fluid>,
{
    state.update_bulk();
    let pressure = state.boundary.pressure;

    for i in 0..state.segments() {
        let props = properties(thermo, fluid, state.bulk[i], pressure, side, Site::Segment(i))?;
        state.set_properties(i, &props);
        state.prandtl_wall[i] = wall_prandtl(thermo, fluid, state.wall[i], pressure, side, i)?;

        let nu = nusselt(state.reynolds[i], state.prandtl_bulk[i], state.prandtl_wall[i]);
        let htc: HeatTransfer = state.conductivity[i] / state.boundary.diameter * nu;
        state.htc[i] = htc;

        state.duty[i] = state.segment_duty(i);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        area::square_meter,
        f64::{Area, Length, MassRate},
        heat_transfer::watt_per_square_meter_kelvin, length::millimeter,
        mass_rate::kilogram_per_second, power::watt, pressure::megapascal,
        thermodynamic_temperature::kelvin,
    };

    use crate::support::thermo::{
        fluid::Water,
        model::{Incompressible, LiquidTable},
    };

    use crate::models::thermal::hx::coil::core::state::SideBoundary;

    fn boundary(inlet: f64) -> SideBoundary {
        SideBoundary {
            inlet_temperature: ThermodynamicTemperature::new::<kelvin>(inlet),
            pressure: Pressure::new::<megapascal>(15.7),
            m_dot: MassRate::new::<kilogram_per_second>(3.0),
            area: Area::new::<square_meter>(1.0),
            flow_area: Area::new::<square_meter>(0.005),
            diameter: Length::new::<millimeter>(16.0),
        }
    }

    fn seeded<Thermo: CoilHxThermoModel<Water>>(thermo: &Thermo, inlet: f64) -> SideState {
        let boundary = boundary(inlet);
        let props = properties(
            thermo,
            &Water,
            boundary.inlet_temperature,
            boundary.pressure,
            Side::Shell,
            Site::Inlet,
        )
        .unwrap();
        SideState::uniform(
            boundary,
            &props,
            HeatTransfer::new::<watt_per_square_meter_kelvin>(5000.0),
            2,
        )
    }

    #[test]
    fn constant_nusselt_sets_htc_and_duty() {
        let thermo = Incompressible::<Water>::new().unwrap();
        let mut state = seeded(&thermo, 400.0);
        state.faces = [400.0, 390.0, 385.0]
            .map(ThermodynamicTemperature::new::<kelvin>)
            .to_vec();

        refresh_side(&mut state, Side::Shell, &Water, &thermo, |_, _, _| 100.0).unwrap();

        // h = k / d · Nu = 0.67 / 0.016 · 100
        for htc in &state.htc {
            assert_relative_eq!(
                htc.get::<watt_per_square_meter_kelvin>(),
                0.67 / 0.016 * 100.0,
                max_relative = 1e-12
            );
        }
        // ṁ·cp·ΔT = 3 · 4180 · (10 + 5)
        assert_relative_eq!(
            state.total_duty().get::<watt>(),
            3.0 * 4180.0 * 15.0,
            max_relative = 1e-9
        );
        assert_relative_eq!(state.bulk[1].get::<kelvin>(), 387.5);
    }

    #[test]
    fn velocity_uses_specific_volume() {
        let thermo = LiquidTable::<Water>::new().unwrap();
        let state = seeded(&thermo, 400.0);
        let props = properties(
            &thermo,
            &Water,
            state.bulk[0],
            state.boundary.pressure,
            Side::Shell,
            Site::Segment(0),
        )
        .unwrap();

        assert_relative_eq!(
            props.specific_volume.value * props.density.value,
            1.0,
            max_relative = 1e-12
        );
        // u = ṁ·v / A_flow
        assert_relative_eq!(
            state.velocity[0].value,
            3.0 * props.specific_volume.value / 0.005,
            max_relative = 1e-12
        );
    }

    #[test]
    fn wall_prandtl_follows_wall_temperature() {
        let thermo = LiquidTable::<Water>::new().unwrap();
        let mut state = seeded(&thermo, 400.0);
        state.wall = [350.0, 450.0]
            .map(ThermodynamicTemperature::new::<kelvin>)
            .to_vec();

        refresh_side(&mut state, Side::Tube, &Water, &thermo, |_, pr, pr_w| pr / pr_w).unwrap();

        // Liquid water's Prandtl number falls as it warms.
        assert!(state.prandtl_wall[0] > state.prandtl_bulk[0]);
        assert!(state.prandtl_wall[1] < state.prandtl_bulk[1]);
    }

    #[test]
    fn out_of_envelope_temperature_names_the_call() {
        let thermo = LiquidTable::<Water>::new().unwrap();
        let mut state = seeded(&thermo, 400.0);
        state.faces[2] = ThermodynamicTemperature::new::<kelvin>(2000.0);

        let err = refresh_side(&mut state, Side::Tube, &Water, &thermo, |_, _, _| 1.0).unwrap_err();
        match err {
            CoilHxError::PropertyOutOfRange { context, .. } => {
                assert_eq!(context, "state(tube segment 1)");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
