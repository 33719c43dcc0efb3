//! Owned snapshot of a converged exchanger.

use uom::si::f64::{HeatTransfer, Power, ThermodynamicTemperature, Velocity};

use crate::support::hx::FlowArrangement;

use super::state::SideState;

/// Axial profile of one side.
///
/// `faces` has one more entry than the per-segment arrays. Face 0 is where
/// the tube side enters.
#[derive(Debug, Clone, PartialEq)]
pub struct SideProfile {
    pub faces: Vec<ThermodynamicTemperature>,

    /// Midpoint temperature of each segment.
    pub bulk: Vec<ThermodynamicTemperature>,

    /// Wall surface temperature on this side of each segment.
    pub wall: Vec<ThermodynamicTemperature>,

    pub htc: Vec<HeatTransfer>,
    pub reynolds: Vec<f64>,
    pub velocity: Vec<Velocity>,

    /// Heat exchanged in each segment, always non-negative.
    pub duty: Vec<Power>,

    pub total_duty: Power,
}

impl From<&SideState> for SideProfile {
    fn from(state: &SideState) -> Self {
        Self {
            faces: state.faces.clone(),
            bulk: state.bulk.clone(),
            wall: state.wall.clone(),
            htc: state.htc.clone(),
            reynolds: state.reynolds.clone(),
            velocity: state.velocity.clone(),
            duty: state.duty.clone(),
            total_duty: state.total_duty(),
        }
    }
}

/// Converged state of a coil exchanger.
#[derive(Debug, Clone, PartialEq)]
pub struct Results {
    pub tube: SideProfile,
    pub shell: SideProfile,
    pub arrangement: FlowArrangement,

    /// Linear solves performed by the evaluation that produced this snapshot.
    pub iters: usize,

    /// Relative change in shell-side duty over the last iteration.
    pub residual: f64,
}

impl Results {
    /// Number of axial segments.
    #[must_use]
    pub fn segments(&self) -> usize {
        self.tube.bulk.len()
    }

    #[must_use]
    pub fn tube_outlet(&self) -> ThermodynamicTemperature {
        self.tube.faces[self.segments()]
    }

    /// Shell outlet temperature; face 0 in counter-flow, face `n` in parallel flow.
    #[must_use]
    pub fn shell_outlet(&self) -> ThermodynamicTemperature {
        self.shell.faces[self.arrangement.shell_outlet_face(self.segments())]
    }

    /// Relative mismatch `|Q_tube − Q_shell| / Q_shell`.
    ///
    /// Zero when neither side exchanges any heat.
    #[must_use]
    pub fn heat_balance_error(&self) -> f64 {
        heat_balance_error(self.tube.total_duty, self.shell.total_duty)
    }
}

pub(crate) fn heat_balance_error(tube: Power, shell: Power) -> f64 {
    let mismatch = (tube - shell).abs();
    if mismatch.value == 0.0 {
        0.0
    } else {
        mismatch.value / shell.value.abs()
    }
}
