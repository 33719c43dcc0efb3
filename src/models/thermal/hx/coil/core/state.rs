//! Mutable per-side solver state.

use num_traits::Zero;
use uom::si::f64::{
    Area, DiffusionCoefficient, HeatTransfer, Length, MassDensity, MassRate, Power, Pressure,
    SpecificHeatCapacity, SpecificVolume, ThermalConductance, ThermalConductivity,
    ThermodynamicTemperature, Velocity,
};

use crate::support::units::TemperatureDifference;

/// Which side of the exchanger a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Side {
    Tube,
    Shell,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Tube => "tube",
            Self::Shell => "shell",
        })
    }
}

/// Fixed boundary values and per-segment geometry of one side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct SideBoundary {
    pub(crate) inlet_temperature: ThermodynamicTemperature,
    pub(crate) pressure: Pressure,
    pub(crate) m_dot: MassRate,

    /// Heat-transfer surface of one segment.
    pub(crate) area: Area,
    pub(crate) flow_area: Area,

    /// Characteristic length of the Reynolds and Nusselt numbers.
    pub(crate) diameter: Length,
}

/// Bulk transport properties at one temperature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Properties {
    pub(crate) density: MassDensity,
    pub(crate) specific_volume: SpecificVolume,
    pub(crate) cp: SpecificHeatCapacity,
    pub(crate) conductivity: ThermalConductivity,
    pub(crate) viscosity: DiffusionCoefficient,
    pub(crate) prandtl: f64,
}

/// Per-segment arrays of one side.
///
/// `faces` has `n + 1` entries, every other array has `n`.
#[derive(Debug, Clone)]
pub(crate) struct SideState {
    pub(crate) boundary: SideBoundary,
    pub(crate) faces: Vec<ThermodynamicTemperature>,
    pub(crate) bulk: Vec<ThermodynamicTemperature>,
    pub(crate) wall: Vec<ThermodynamicTemperature>,
    pub(crate) density: Vec<MassDensity>,
    pub(crate) cp: Vec<SpecificHeatCapacity>,
    pub(crate) conductivity: Vec<ThermalConductivity>,
    pub(crate) prandtl_bulk: Vec<f64>,
    pub(crate) prandtl_wall: Vec<f64>,
    pub(crate) velocity: Vec<Velocity>,
    pub(crate) reynolds: Vec<f64>,
    pub(crate) htc: Vec<HeatTransfer>,
    pub(crate) duty: Vec<Power>,
}

impl SideState {
    /// Every segment at the inlet temperature with the inlet properties.
    ///
    /// The wall starts at the fluid temperature, so the wall Prandtl number
    /// equals the bulk one, and no heat has been exchanged yet.
    pub(crate) fn uniform(
        boundary: SideBoundary,
        inlet: &Properties,
        htc: HeatTransfer,
        segments: usize,
    ) -> Self {
        let velocity = boundary.velocity(inlet.specific_volume);
        let reynolds = boundary.reynolds(velocity, inlet.viscosity);
        let t = boundary.inlet_temperature;

        Self {
            boundary,
            faces: vec![t; segments + 1],
            bulk: vec![t; segments],
            wall: vec![t; segments],
            density: vec![inlet.density; segments],
            cp: vec![inlet.cp; segments],
            conductivity: vec![inlet.conductivity; segments],
            prandtl_bulk: vec![inlet.prandtl; segments],
            prandtl_wall: vec![inlet.prandtl; segments],
            velocity: vec![velocity; segments],
            reynolds: vec![reynolds; segments],
            htc: vec![htc; segments],
            duty: vec![Power::zero(); segments],
        }
    }

    pub(crate) fn segments(&self) -> usize {
        self.bulk.len()
    }

    /// Capacitance rate `ṁ·cp` of segment `i`.
    pub(crate) fn capacitance(&self, i: usize) -> ThermalConductance {
        self.boundary.m_dot * self.cp[i]
    }

    /// Convective conductance `h·A` of segment `i`.
    pub(crate) fn convective_conductance(&self, i: usize) -> ThermalConductance {
        self.htc[i] * self.boundary.area
    }

    /// Recomputes bulk temperatures from the face temperatures.
    pub(crate) fn update_bulk(&mut self) {
        for (bulk, pair) in self.bulk.iter_mut().zip(self.faces.windows(2)) {
            *bulk = pair[0].midpoint(pair[1]);
        }
    }

    /// Heat picked up or given off in segment `i`, `ṁ·cp·|ΔT|`.
    pub(crate) fn segment_duty(&self, i: usize) -> Power {
        self.capacitance(i) * self.faces[i].minus(self.faces[i + 1]).abs()
    }

    pub(crate) fn total_duty(&self) -> Power {
        self.duty.iter().fold(Power::zero(), |total, &q| total + q)
    }

    /// Stores bulk properties for segment `i` and derives velocity and Reynolds number.
    pub(crate) fn set_properties(&mut self, i: usize, props: &Properties) {
        let velocity = self.boundary.velocity(props.specific_volume);

        self.density[i] = props.density;
        self.cp[i] = props.cp;
        self.conductivity[i] = props.conductivity;
        self.prandtl_bulk[i] = props.prandtl;
        self.velocity[i] = velocity;
        self.reynolds[i] = self.boundary.reynolds(velocity, props.viscosity);
    }
}

impl SideBoundary {
    /// Mean velocity `ṁ·v / A_flow`.
    fn velocity(&self, specific_volume: SpecificVolume) -> Velocity {
        self.m_dot * specific_volume / self.flow_area
    }

    /// Reynolds number `u·d / ν`.
    fn reynolds(&self, velocity: Velocity, viscosity: DiffusionCoefficient) -> f64 {
        // SI base values, so the quotient is dimensionless.
        velocity.value * self.diameter.value / viscosity.value
    }
}
