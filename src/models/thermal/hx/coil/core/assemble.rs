//! Linearized balances of one solver step.
//!
//! Coefficients are frozen at the current heat-transfer coefficients and
//! specific heats, so each step is an exact linear solve.

use uom::si::{
    f64::{ThermalConductance, ThermodynamicTemperature},
    thermal_conductance::watt_per_kelvin,
    thermodynamic_temperature::kelvin,
};

use crate::support::hx::FlowArrangement;

use super::{
    state::SideState,
    system::{Balance, Block, LinearSystem, Solution, Unknown},
};

/// A face temperature in a balance: either a boundary value or an unknown.
#[derive(Debug, Clone, Copy, PartialEq)]
enum FaceRef {
    Known(f64),
    Unknown(Unknown),
}

/// Tube faces run `0 → n`; face 0 is the inlet.
fn tube_face(tube: &SideState, face: usize) -> FaceRef {
    match face.checked_sub(1) {
        None => FaceRef::Known(tube.boundary.inlet_temperature.get::<kelvin>()),
        Some(segment) => FaceRef::Unknown(Unknown::new(Block::TubeFace, segment)),
    }
}

/// Shell faces are numbered like tube faces; the inlet face depends on the arrangement.
fn shell_face(shell: &SideState, arrangement: FlowArrangement, face: usize) -> FaceRef {
    let n = shell.segments();
    if face == arrangement.shell_inlet_face(n) {
        return FaceRef::Known(shell.boundary.inlet_temperature.get::<kelvin>());
    }
    let segment = match arrangement {
        FlowArrangement::CounterFlow => face,
        FlowArrangement::ParallelFlow => face - 1,
    };
    FaceRef::Unknown(Unknown::new(Block::ShellFace, segment))
}

fn add_term(
    system: &mut LinearSystem,
    balance: Balance,
    segment: usize,
    face: FaceRef,
    coefficient: f64,
) {
    match face {
        FaceRef::Known(t) => system.add_rhs(balance, segment, -coefficient * t),
        FaceRef::Unknown(unknown) => system.add(balance, segment, unknown, coefficient),
    }
}

/// Adds `(a/2 + c)·T_down + (a/2 − c)·T_up − a·T_wall` to a fluid energy balance.
///
/// Advection `c·(T_down − T_up)` equals convection to the wall
/// `a·(T_wall − (T_up + T_down)/2)`.
fn fluid_energy(
    system: &mut LinearSystem,
    balance: Balance,
    segment: usize,
    (up, down): (FaceRef, FaceRef),
    wall: Unknown,
    c: f64,
    a: f64,
) {
    add_term(system, balance, segment, down, 0.5 * a + c);
    add_term(system, balance, segment, up, 0.5 * a - c);
    system.add(balance, segment, wall, -a);
}

/// Builds the `4n` balances from the current state of both sides.
pub(crate) fn assemble(
    tube: &SideState,
    shell: &SideState,
    arrangement: FlowArrangement,
    wall_conductance: ThermalConductance,
) -> LinearSystem {
    let n = tube.segments();
    let k = wall_conductance.get::<watt_per_kelvin>();
    let mut system = LinearSystem::new(n);

    for i in 0..n {
        let tube_wall = Unknown::new(Block::TubeWall, i);
        let shell_wall = Unknown::new(Block::ShellWall, i);

        let c_t = tube.capacitance(i).get::<watt_per_kelvin>();
        let a_t = tube.convective_conductance(i).get::<watt_per_kelvin>();
        let (t_up, t_down) = (tube_face(tube, i), tube_face(tube, i + 1));

        let c_s = shell.capacitance(i).get::<watt_per_kelvin>();
        let a_s = shell.convective_conductance(i).get::<watt_per_kelvin>();
        let (up, down) = arrangement.shell_faces(i);
        let (s_up, s_down) = (
            shell_face(shell, arrangement, up),
            shell_face(shell, arrangement, down),
        );

        fluid_energy(&mut system, Balance::TubeEnergy, i, (t_up, t_down), tube_wall, c_t, a_t);
        fluid_energy(&mut system, Balance::ShellEnergy, i, (s_up, s_down), shell_wall, c_s, a_s);

        // Heat gained by the tube fluid is conducted through the wall.
        add_term(&mut system, Balance::TubeWall, i, t_down, c_t);
        add_term(&mut system, Balance::TubeWall, i, t_up, -c_t);
        system.add(Balance::TubeWall, i, shell_wall, -k);
        system.add(Balance::TubeWall, i, tube_wall, k);

        // Heat lost by the shell fluid is conducted through the wall.
        add_term(&mut system, Balance::ShellWall, i, s_up, c_s);
        add_term(&mut system, Balance::ShellWall, i, s_down, -c_s);
        system.add(Balance::ShellWall, i, shell_wall, -k);
        system.add(Balance::ShellWall, i, tube_wall, k);
    }

    system
}

/// Writes a solution back into the face and wall arrays of both sides.
pub(crate) fn unpack(
    solution: &Solution,
    tube: &mut SideState,
    shell: &mut SideState,
    arrangement: FlowArrangement,
) {
    let temperature = |face: FaceRef| {
        ThermodynamicTemperature::new::<kelvin>(match face {
            FaceRef::Known(t) => t,
            FaceRef::Unknown(unknown) => solution.get(unknown),
        })
    };

    for face in 0..tube.faces.len() {
        tube.faces[face] = temperature(tube_face(tube, face));
    }
    for face in 0..shell.faces.len() {
        shell.faces[face] = temperature(shell_face(shell, arrangement, face));
    }
    for i in 0..tube.segments() {
        tube.wall[i] = temperature(FaceRef::Unknown(Unknown::new(Block::TubeWall, i)));
        shell.wall[i] = temperature(FaceRef::Unknown(Unknown::new(Block::ShellWall, i)));
    }
}
