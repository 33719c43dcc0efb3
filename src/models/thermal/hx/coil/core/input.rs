mod config;
mod geometry;
mod inlets;
mod mass_flows;

pub use config::{EvaluateConfig, InitialHtc};
pub use geometry::CoilGeometry;
pub use inlets::{Inlet, Inlets};
pub use mass_flows::MassFlows;

pub(crate) use geometry::SegmentGeometry;

use uom::si::f64::ThermalConductivity;

use crate::support::hx::FlowArrangement;

/// Everything needed to build a [`CoilExchanger`](super::CoilExchanger).
#[derive(Debug, Clone)]
pub struct CoilHxInput<TubeFluid, ShellFluid> {
    /// Inlet conditions of both sides.
    pub inlets: Inlets<TubeFluid, ShellFluid>,

    /// Mass flow rates of both sides.
    pub m_dot: MassFlows,

    /// Bundle geometry.
    pub geometry: CoilGeometry,

    /// Thermal conductivity of the tube wall material.
    pub wall_conductivity: ThermalConductivity,

    /// Number of axial segments, at least 1.
    pub segments: usize,

    /// Relative direction of the two streams.
    pub arrangement: FlowArrangement,

    /// Heat-transfer coefficients used for the first linear solve.
    pub initial_htc: InitialHtc,
}
