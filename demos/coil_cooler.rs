//! Runs the reference coil exchangers and prints their duties.
//!
//! ```sh
//! cargo run --example coil_cooler
//! ```
//!
//! Raise the logger level to `Debug` to see every fixed-point iteration.

use std::error::Error;

use coil_hx::{
    models::thermal::hx::coil::{
        CoilExchanger, CoilGeometry, CoilHxInput, InitialHtc, Inlet, Inlets, MassFlows,
    },
    support::{
        hx::FlowArrangement,
        thermo::{fluid::Water, model::LiquidTable},
    },
};
use simplelog::{Config, LevelFilter, SimpleLogger};
use uom::si::{
    angle::degree,
    area::square_meter,
    f64::{
        Angle, Area, Length, MassRate, Pressure, ThermalConductivity, ThermodynamicTemperature,
    },
    length::meter,
    mass_rate::kilogram_per_second,
    power::kilowatt,
    pressure::megapascal,
    thermal_conductivity::watt_per_meter_kelvin,
    thermodynamic_temperature::degree_celsius,
};

fn input(
    geometry: CoilGeometry,
    m_dot: (f64, f64),
    segments: usize,
    arrangement: FlowArrangement,
) -> Result<CoilHxInput<Water, Water>, Box<dyn Error>> {
    let p = Pressure::new::<megapascal>(15.7);
    Ok(CoilHxInput {
        inlets: Inlets {
            tube: Inlet::at(ThermodynamicTemperature::new::<degree_celsius>(40.0), p),
            shell: Inlet::at(ThermodynamicTemperature::new::<degree_celsius>(325.0), p),
        },
        m_dot: MassFlows::new(
            MassRate::new::<kilogram_per_second>(m_dot.0),
            MassRate::new::<kilogram_per_second>(m_dot.1),
        )?,
        geometry,
        wall_conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(18.0),
        segments,
        arrangement,
        initial_htc: InitialHtc::default(),
    })
}

fn run(
    label: &str,
    input: &CoilHxInput<Water, Water>,
    water: &LiquidTable<Water>,
) -> Result<f64, Box<dyn Error>> {
    let mut hx = CoilExchanger::new(input, water, water)?;
    let convergence = hx.evaluate()?;
    let duty = hx.shell_duty().get::<kilowatt>();

    println!("{label}");
    println!(
        "  {} segments, {:?}, converged in {} iterations",
        hx.segments(),
        hx.arrangement(),
        convergence.iters
    );
    println!(
        "  total power  {duty:.1} kW (tube side {:.1} kW)",
        hx.tube_duty().get::<kilowatt>()
    );
    println!(
        "  outlets      tube {:.1} °C, shell {:.1} °C",
        hx.tube_outlet().get::<degree_celsius>(),
        hx.shell_outlet().get::<degree_celsius>(),
    );
    println!();

    Ok(duty)
}

fn main() -> Result<(), Box<dyn Error>> {
    SimpleLogger::init(LevelFilter::Info, Config::default())?;

    let water = LiquidTable::<Water>::new()?;

    let cooler = input(
        CoilGeometry::reference_cooler(),
        (13.889, 3.056),
        500,
        FlowArrangement::CounterFlow,
    )?;
    run("Cooler, counter-flow", &cooler, &water)?;

    let parallel_cooler = CoilGeometry {
        vertical_rows: 50,
        tube_side_area: Area::new::<square_meter>(8.579_249_854),
        shell_side_area: Area::new::<square_meter>(11.069_999_81),
        tube_side_flow_area: Area::new::<square_meter>(0.0053),
        shell_side_flow_area: Area::new::<square_meter>(0.004_35),
        ..CoilGeometry::reference_cooler()
    };
    let parallel = input(parallel_cooler, (13.889, 3.056), 10, FlowArrangement::ParallelFlow)?;
    run("Cooler, parallel flow", &parallel, &water)?;

    let recuperator = CoilGeometry {
        vertical_rows: 50,
        wrap_angle: Angle::new::<degree>(4.0),
        winding_diameter: Length::new::<meter>(0.25),
        tube_length: Length::new::<meter>(12.45),
        tube_count: 44,
        tube_side_area: Area::new::<square_meter>(22.283),
        shell_side_area: Area::new::<square_meter>(28.752),
        tube_side_flow_area: Area::new::<square_meter>(0.005_313_564_2),
        shell_side_flow_area: Area::new::<square_meter>(0.009_319),
        ..CoilGeometry::reference_cooler()
    };
    let flow = (5.0 * 1.667, 5.0 * 1.667);
    let detailed = run(
        "Recuperator, 6 sections",
        &input(recuperator, flow, 6, FlowArrangement::CounterFlow)?,
        &water,
    )?;
    let lumped = run(
        "Recuperator, 1 section",
        &input(recuperator, flow, 1, FlowArrangement::CounterFlow)?,
        &water,
    )?;
    println!(
        "Lumping the recuperator into one section changes its power by {:+.2} %",
        100.0 * (lumped - detailed) / detailed
    );

    Ok(())
}
