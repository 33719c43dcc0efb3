use uom::si::{
    diffusion_coefficient::square_meter_per_second,
    f64::{DiffusionCoefficient, MassDensity, SpecificHeatCapacity, ThermalConductivity},
    mass_density::kilogram_per_cubic_meter,
    specific_heat_capacity::kilojoule_per_kilogram_kelvin,
    thermal_conductivity::watt_per_meter_kelvin,
};

use crate::support::thermo::model::{
    incompressible::{IncompressibleFluid, IncompressibleParameters},
    table::{LiquidTableData, LiquidTableRow, TabulatedFluid},
};

/// Canonical identifier for water.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Water;

/// Representative values for compressed liquid water near 350 K.
impl IncompressibleFluid for Water {
    fn parameters() -> IncompressibleParameters {
        IncompressibleParameters {
            density: MassDensity::new::<kilogram_per_cubic_meter>(980.0),
            cp: SpecificHeatCapacity::new::<kilojoule_per_kilogram_kelvin>(4.18),
            conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(0.67),
            viscosity: DiffusionCoefficient::new::<square_meter_per_second>(3.8e-7),
        }
    }
}

const fn row(temperature: f64, density: f64, cp: f64, conductivity: f64, mu: f64) -> LiquidTableRow {
    LiquidTableRow {
        temperature,
        density,
        cp,
        conductivity,
        viscosity: mu * 1e-6,
    }
}

/// Compressed liquid water, 14–22 MPa.
///
/// Columns: T [K], ρ [kg/m³], cp [J/(kg·K)], k [W/(m·K)], μ [µPa·s].
/// Values at 16 MPa, rounded from IAPWS-IF97 and the IAPWS viscosity and
/// conductivity formulations. Pressure sensitivity across the envelope is a
/// few percent at most. The `coolprop` feature provides the full formulations.
static WATER_ROWS: [LiquidTableRow; 18] = [
    row(290.0, 1006.3, 4163.0, 0.600, 1080.0),
    row(300.0, 1003.3, 4163.0, 0.617, 852.0),
    row(320.0, 996.0, 4160.0, 0.643, 574.0),
    row(340.0, 986.3, 4170.0, 0.665, 422.0),
    row(360.0, 974.4, 4185.0, 0.680, 327.0),
    row(380.0, 960.7, 4210.0, 0.689, 264.0),
    row(400.0, 945.5, 4240.0, 0.693, 219.0),
    row(420.0, 928.8, 4280.0, 0.694, 186.0),
    row(440.0, 910.8, 4330.0, 0.691, 161.0),
    row(460.0, 891.3, 4400.0, 0.685, 141.0),
    row(480.0, 870.2, 4480.0, 0.676, 126.0),
    row(500.0, 847.2, 4580.0, 0.664, 113.0),
    row(520.0, 822.0, 4710.0, 0.649, 102.0),
    row(540.0, 794.0, 4890.0, 0.630, 93.0),
    row(560.0, 762.6, 5130.0, 0.607, 85.0),
    row(580.0, 726.2, 5520.0, 0.579, 77.0),
    row(600.0, 682.0, 6220.0, 0.545, 70.0),
    row(610.0, 655.0, 6900.0, 0.523, 66.0),
];

#[cfg(feature = "coolprop")]
impl crate::support::thermo::model::coolprop::CoolPropFluid for Water {
    const BACKEND: &'static str = "HEOS";
    const NAME: &'static str = "Water";
}

impl TabulatedFluid for Water {
    fn table() -> LiquidTableData {
        LiquidTableData {
            min_pressure: 14.0e6,
            max_pressure: 22.0e6,
            rows: &WATER_ROWS,
        }
    }
}
