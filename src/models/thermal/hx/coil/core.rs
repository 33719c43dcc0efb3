//! Discretized helically coiled tube-in-shell heat exchanger.
//!
//! The bundle is split into `n` axial segments. Each step assembles the
//! energy balances of both fluids and the radial wall conduction into one
//! linear system, solves it, and re-evaluates fluid properties and
//! heat-transfer coefficients at the new temperatures. [`CoilExchanger::evaluate`]
//! repeats steps until the total shell-side duty stops changing.

mod assemble;
mod error;
mod input;
mod refresh;
mod results;
mod state;
mod system;
mod traits;

#[cfg(test)]
mod test_support;

pub use error::CoilHxError;
pub use input::{
    CoilGeometry, CoilHxInput, EvaluateConfig, InitialHtc, Inlet, Inlets, MassFlows,
};
pub use results::{Results, SideProfile};
pub use traits::CoilHxThermoModel;

use log::{debug, trace, warn};
use uom::si::{
    f64::{HeatTransfer, Power, ThermodynamicTemperature},
    power::watt,
    thermodynamic_temperature::kelvin,
};

use crate::support::{
    constraint::{Constraint, NonNegative, StrictlyPositive},
    hx::{
        FlowArrangement,
        correlation::{ThermalDirection, cross_flow_nusselt, in_coil_nusselt},
    },
    units::TemperatureDifference,
};

use assemble::{assemble, unpack};
use input::SegmentGeometry;
use refresh::{Site, properties, refresh_side};
use state::{Side, SideBoundary, SideState};
use system::SingularPivot;

/// Outcome of a converged [`CoilExchanger::evaluate`] call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Convergence {
    /// Linear solves performed.
    pub iters: usize,

    /// Relative change in total shell-side duty over the last solve.
    pub residual: f64,
}

/// A coil exchanger bound to its property models.
///
/// Construction validates the input and seeds every segment with inlet
/// properties. [`evaluate`](Self::evaluate) then iterates to the converged
/// temperature field, which the accessors and [`results`](Self::results) expose.
#[derive(Debug, Clone)]
pub struct CoilExchanger<'a, TubeFluid, ShellFluid, TubeThermo, ShellThermo> {
    tube_fluid: TubeFluid,
    shell_fluid: ShellFluid,
    tube_thermo: &'a TubeThermo,
    shell_thermo: &'a ShellThermo,
    geometry: CoilGeometry,
    segment: SegmentGeometry,
    arrangement: FlowArrangement,
    config: EvaluateConfig,
    tube: SideState,
    shell: SideState,
    last: Option<Convergence>,
}

impl<'a, TubeFluid, ShellFluid, TubeThermo, ShellThermo>
    CoilExchanger<'a, TubeFluid, ShellFluid, TubeThermo, ShellThermo>
where
    TubeFluid: Clone,
    ShellFluid: Clone,
    TubeThermo: CoilHxThermoModel<TubeFluid>,
    ShellThermo: CoilHxThermoModel<ShellFluid>,
{
    /// Validates `input` and seeds both sides with their inlet properties.
    ///
    /// # Errors
    ///
    /// Returns [`CoilHxError::InvalidGeometry`] or [`CoilHxError::InvalidInput`]
    /// for bad input, and [`CoilHxError::PropertyOutOfRange`] if either inlet
    /// state cannot be evaluated.
    pub fn new(
        input: &CoilHxInput<TubeFluid, ShellFluid>,
        tube_thermo: &'a TubeThermo,
        shell_thermo: &'a ShellThermo,
    ) -> Result<Self, CoilHxError> {
        validate(input)?;

        let geometry = input.geometry;
        let n = input.segments;
        let segment = SegmentGeometry::new(&geometry, input.wall_conductivity, n);
        let CoilHxInput { inlets, m_dot, .. } = input;

        let tube_boundary = SideBoundary {
            inlet_temperature: inlets.tube.temperature,
            pressure: inlets.tube.pressure,
            m_dot: m_dot.tube(),
            area: segment.tube_area,
            flow_area: geometry.tube_side_flow_area,
            diameter: geometry.inner_diameter,
        };
        let shell_boundary = SideBoundary {
            inlet_temperature: inlets.shell.temperature,
            pressure: inlets.shell.pressure,
            m_dot: m_dot.shell(),
            area: segment.shell_area,
            flow_area: geometry.shell_side_flow_area,
            diameter: geometry.outer_diameter,
        };

        let tube_props = properties(
            tube_thermo,
            &inlets.tube.fluid,
            tube_boundary.inlet_temperature,
            tube_boundary.pressure,
            Side::Tube,
            Site::Inlet,
        )?;
        let shell_props = properties(
            shell_thermo,
            &inlets.shell.fluid,
            shell_boundary.inlet_temperature,
            shell_boundary.pressure,
            Side::Shell,
            Site::Inlet,
        )?;

        debug!(
            "coil exchanger: {n} segments, {:?}, inlets {:.2} K / {:.2} K",
            input.arrangement,
            tube_boundary.inlet_temperature.get::<kelvin>(),
            shell_boundary.inlet_temperature.get::<kelvin>(),
        );

        Ok(Self {
            tube_fluid: inlets.tube.fluid.clone(),
            shell_fluid: inlets.shell.fluid.clone(),
            tube_thermo,
            shell_thermo,
            geometry,
            segment,
            arrangement: input.arrangement,
            config: EvaluateConfig::default(),
            tube: SideState::uniform(tube_boundary, &tube_props, input.initial_htc.tube, n),
            shell: SideState::uniform(shell_boundary, &shell_props, input.initial_htc.shell, n),
            last: None,
        })
    }

    /// Replaces the convergence settings used by [`evaluate`](Self::evaluate).
    #[must_use]
    pub fn with_config(self, config: EvaluateConfig) -> Self {
        Self { config, ..self }
    }

    /// Iterates until the total shell-side duty settles.
    ///
    /// Each iteration is one [`step`](Self::step). The iteration stops when the
    /// change in shell-side duty is within `duty_abs_tol`, or its relative
    /// change `|ΔQ| / |Q_new|` is within `duty_rel_tol`.
    /// Calling it again on a converged exchanger returns after one step.
    ///
    /// A failed call leaves [`last_convergence`](Self::last_convergence) empty.
    ///
    /// # Errors
    ///
    /// Returns [`CoilHxError::InvalidInput`] for an unusable config,
    /// [`CoilHxError::DidNotConverge`] when `max_iters` is reached, and any
    /// error from [`step`](Self::step).
    pub fn evaluate(&mut self) -> Result<Convergence, CoilHxError> {
        validate_config(&self.config)?;

        let abs_tol = self.config.duty_abs_tol.get::<watt>();
        let mut q_prev = self.shell.total_duty().get::<watt>();
        let mut residual = f64::INFINITY;

        for iter in 1..=self.config.max_iters {
            self.step()?;

            let q_new = self.shell.total_duty().get::<watt>();
            let change = (q_new - q_prev).abs();
            residual = relative_change(q_prev, q_new);

            debug!("iteration {iter}: shell duty {q_new:.6e} W, residual {residual:.3e}");

            if change <= abs_tol || residual <= self.config.duty_rel_tol {
                let convergence = Convergence {
                    iters: iter,
                    residual,
                };
                self.last = Some(convergence);
                return Ok(convergence);
            }
            q_prev = q_new;
        }

        warn!(
            "no convergence after {} iterations (residual {residual:.3e})",
            self.config.max_iters
        );
        Err(CoilHxError::DidNotConverge {
            iters: self.config.max_iters,
            residual,
        })
    }

    /// Performs one linearized solve and refreshes properties.
    ///
    /// # Errors
    ///
    /// Returns [`CoilHxError::SingularSystem`] if the balances have no unique
    /// solution, or [`CoilHxError::PropertyOutOfRange`] if a new temperature
    /// leaves the property model's envelope.
    pub fn step(&mut self) -> Result<(), CoilHxError> {
        self.last = None;

        let system = assemble(
            &self.tube,
            &self.shell,
            self.arrangement,
            self.segment.wall_conductance,
        );
        let solution = system
            .solve()
            .map_err(|SingularPivot { row }| CoilHxError::SingularSystem { row })?;
        unpack(&solution, &mut self.tube, &mut self.shell, self.arrangement);

        trace!(
            "solved {} balances: tube outlet {:.3} K, shell outlet {:.3} K",
            4 * self.segments(),
            self.tube_outlet().get::<kelvin>(),
            self.shell_outlet().get::<kelvin>(),
        );

        self.refresh()
    }

    fn refresh(&mut self) -> Result<(), CoilHxError> {
        let n = self.segments();
        let direction = ThermalDirection::from_rise(self.tube.faces[n].minus(self.tube.faces[0]));
        let (tube_d, coil_d) = (self.geometry.inner_diameter, self.geometry.winding_diameter);
        refresh_side(
            &mut self.tube,
            Side::Tube,
            &self.tube_fluid,
            self.tube_thermo,
            |re, pr, pr_wall| in_coil_nusselt(tube_d, coil_d, re, pr, pr_wall, direction),
        )?;

        let wrap = self.geometry.wrap_angle;
        let rows = f64::from(self.geometry.vertical_rows);
        refresh_side(
            &mut self.shell,
            Side::Shell,
            &self.shell_fluid,
            self.shell_thermo,
            |re, pr, _| cross_flow_nusselt(re, pr, wrap, rows),
        )
    }
}

impl<TubeFluid, ShellFluid, TubeThermo, ShellThermo>
    CoilExchanger<'_, TubeFluid, ShellFluid, TubeThermo, ShellThermo>
{
    #[must_use]
    pub fn segments(&self) -> usize {
        self.tube.segments()
    }

    #[must_use]
    pub fn arrangement(&self) -> FlowArrangement {
        self.arrangement
    }

    #[must_use]
    pub fn config(&self) -> EvaluateConfig {
        self.config
    }

    /// Tube-side midpoint temperature of each segment.
    #[must_use]
    pub fn tube_bulk(&self) -> &[ThermodynamicTemperature] {
        &self.tube.bulk
    }

    /// Shell-side midpoint temperature of each segment.
    #[must_use]
    pub fn shell_bulk(&self) -> &[ThermodynamicTemperature] {
        &self.shell.bulk
    }

    /// Tube-side face temperatures, `n + 1` values from the tube inlet.
    #[must_use]
    pub fn tube_faces(&self) -> &[ThermodynamicTemperature] {
        &self.tube.faces
    }

    /// Shell-side face temperatures, numbered like the tube faces.
    #[must_use]
    pub fn shell_faces(&self) -> &[ThermodynamicTemperature] {
        &self.shell.faces
    }

    #[must_use]
    pub fn tube_htc(&self) -> &[HeatTransfer] {
        &self.tube.htc
    }

    #[must_use]
    pub fn shell_htc(&self) -> &[HeatTransfer] {
        &self.shell.htc
    }

    /// Total heat picked up or given off by the tube side.
    #[must_use]
    pub fn tube_duty(&self) -> Power {
        self.tube.total_duty()
    }

    /// Total heat picked up or given off by the shell side.
    #[must_use]
    pub fn shell_duty(&self) -> Power {
        self.shell.total_duty()
    }

    #[must_use]
    pub fn tube_outlet(&self) -> ThermodynamicTemperature {
        self.tube.faces[self.segments()]
    }

    #[must_use]
    pub fn shell_outlet(&self) -> ThermodynamicTemperature {
        self.shell.faces[self.arrangement.shell_outlet_face(self.segments())]
    }

    /// Convergence of the current temperature field.
    ///
    /// `None` before the first evaluation and after any [`step`](CoilExchanger::step)
    /// or [`evaluate`](CoilExchanger::evaluate) that did not end converged.
    #[must_use]
    pub fn last_convergence(&self) -> Option<Convergence> {
        self.last
    }

    /// Snapshot of both profiles.
    ///
    /// Without a converged evaluation behind the current state, `iters` is 0 and
    /// `residual` is infinite.
    #[must_use]
    pub fn results(&self) -> Results {
        let Convergence { iters, residual } = self.last.unwrap_or(Convergence {
            iters: 0,
            residual: f64::INFINITY,
        });
        Results {
            tube: SideProfile::from(&self.tube),
            shell: SideProfile::from(&self.shell),
            arrangement: self.arrangement,
            iters,
            residual,
        }
    }
}

/// `|Q_new − Q_prev| / |Q_new|`, zero when nothing changed.
///
/// Infinite when the duty drops to exactly zero; `duty_abs_tol` covers that case.
fn relative_change(q_prev: f64, q_new: f64) -> f64 {
    let change = (q_new - q_prev).abs();
    if change == 0.0 { 0.0 } else { change / q_new.abs() }
}

fn validate<TubeFluid, ShellFluid>(
    input: &CoilHxInput<TubeFluid, ShellFluid>,
) -> Result<(), CoilHxError> {
    input.geometry.validate()?;

    if input.segments == 0 {
        return Err(CoilHxError::invalid_input("segments", "at least one segment is required"));
    }

    let checks = [
        ("m_dot.tube", StrictlyPositive::check(&input.m_dot.tube())),
        ("m_dot.shell", StrictlyPositive::check(&input.m_dot.shell())),
        ("wall_conductivity", StrictlyPositive::check(&input.wall_conductivity)),
        ("initial_htc.tube", StrictlyPositive::check(&input.initial_htc.tube)),
        ("initial_htc.shell", StrictlyPositive::check(&input.initial_htc.shell)),
        ("inlets.tube.pressure", StrictlyPositive::check(&input.inlets.tube.pressure)),
        ("inlets.shell.pressure", StrictlyPositive::check(&input.inlets.shell.pressure)),
        (
            "inlets.tube.temperature",
            StrictlyPositive::check(&input.inlets.tube.temperature.get::<kelvin>()),
        ),
        (
            "inlets.shell.temperature",
            StrictlyPositive::check(&input.inlets.shell.temperature.get::<kelvin>()),
        ),
    ];
    for (field, check) in checks {
        check.map_err(|err| CoilHxError::invalid_input(field, err.to_string()))?;
    }

    Ok(())
}

fn validate_config(config: &EvaluateConfig) -> Result<(), CoilHxError> {
    if config.max_iters == 0 {
        return Err(CoilHxError::invalid_input("max_iters", "must be at least 1"));
    }
    NonNegative::check(&config.duty_rel_tol)
        .map_err(|err| CoilHxError::invalid_input("duty_rel_tol", err.to_string()))?;
    NonNegative::check(&config.duty_abs_tol)
        .map_err(|err| CoilHxError::invalid_input("duty_abs_tol", err.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        f64::{Length, MassRate, Pressure, ThermalConductance},
        heat_transfer::watt_per_square_meter_kelvin,
        length::millimeter,
        mass_rate::kilogram_per_second,
        thermal_conductance::watt_per_kelvin,
    };

    use crate::support::{hx::effectiveness, thermo::fluid::Water};

    use super::test_support::{
        self, SHELL_INLET, TUBE_INLET, constant_water, reference_input, table_water, with_shell_flow,
    };

    fn evaluated<Thermo: CoilHxThermoModel<Water>>(
        input: &CoilHxInput<Water, Water>,
        thermo: &Thermo,
    ) -> Results {
        let mut hx = CoilExchanger::new(input, thermo, thermo).unwrap();
        hx.evaluate().unwrap();
        hx.results()
    }

    fn kelvin_of(t: ThermodynamicTemperature) -> f64 {
        t.get::<kelvin>()
    }

    #[test]
    fn rejects_invalid_input() {
        let thermo = constant_water();
        let base = reference_input(10, FlowArrangement::CounterFlow);

        let input = CoilHxInput {
            segments: 0,
            ..base.clone()
        };
        assert!(matches!(
            CoilExchanger::new(&input, &thermo, &thermo),
            Err(CoilHxError::InvalidInput {
                field: "segments",
                ..
            })
        ));

        let input = CoilHxInput {
            m_dot: MassFlows::new_unchecked(
                MassRate::new::<kilogram_per_second>(13.889),
                MassRate::new::<kilogram_per_second>(0.0),
            ),
            ..base.clone()
        };
        assert!(matches!(
            CoilExchanger::new(&input, &thermo, &thermo),
            Err(CoilHxError::InvalidInput {
                field: "m_dot.shell",
                ..
            })
        ));

        let input = CoilHxInput {
            initial_htc: InitialHtc {
                tube: HeatTransfer::new::<watt_per_square_meter_kelvin>(-1.0),
                ..InitialHtc::default()
            },
            ..base.clone()
        };
        assert!(matches!(
            CoilExchanger::new(&input, &thermo, &thermo),
            Err(CoilHxError::InvalidInput {
                field: "initial_htc.tube",
                ..
            })
        ));

        let input = CoilHxInput {
            geometry: CoilGeometry {
                outer_diameter: Length::new::<millimeter>(10.0),
                ..CoilGeometry::reference_cooler()
            },
            ..base
        };
        assert!(matches!(
            CoilExchanger::new(&input, &thermo, &thermo),
            Err(CoilHxError::InvalidGeometry { .. })
        ));
    }

    #[test]
    fn rejects_invalid_config() {
        let thermo = constant_water();
        let input = reference_input(4, FlowArrangement::CounterFlow);

        let mut hx = CoilExchanger::new(&input, &thermo, &thermo)
            .unwrap()
            .with_config(EvaluateConfig {
                max_iters: 0,
                ..EvaluateConfig::default()
            });
        assert!(matches!(
            hx.evaluate(),
            Err(CoilHxError::InvalidInput {
                field: "max_iters",
                ..
            })
        ));

        let mut hx = hx.with_config(EvaluateConfig {
            duty_rel_tol: -1e-3,
            ..EvaluateConfig::default()
        });
        assert!(matches!(
            hx.evaluate(),
            Err(CoilHxError::InvalidInput {
                field: "duty_rel_tol",
                ..
            })
        ));
    }

    #[test]
    fn inlet_outside_property_envelope() {
        let thermo = table_water();
        let mut input = reference_input(4, FlowArrangement::CounterFlow);
        input.inlets.shell.temperature = ThermodynamicTemperature::new::<kelvin>(700.0);

        match CoilExchanger::new(&input, &thermo, &thermo) {
            Err(CoilHxError::PropertyOutOfRange { context, .. }) => {
                assert_eq!(context, "state(shell inlet)");
            }
            other => panic!("unexpected: {other:?}"),
        }

        let mut input = reference_input(4, FlowArrangement::CounterFlow);
        input.inlets.tube.pressure = Pressure::new::<uom::si::pressure::megapascal>(1.0);
        assert!(matches!(
            CoilExchanger::new(&input, &thermo, &thermo),
            Err(CoilHxError::PropertyOutOfRange { .. })
        ));
    }

    /// With constant properties the coefficients are uniform, so the
    /// discretized solution approaches the closed-form effectiveness.
    fn check_against_effectiveness(arrangement: FlowArrangement) {
        let thermo = constant_water();
        let input = reference_input(200, arrangement);
        let mut hx = CoilExchanger::new(&input, &thermo, &thermo).unwrap();
        hx.evaluate().unwrap();

        let geometry = CoilGeometry::reference_cooler();
        let h_t = hx.tube_htc()[0];
        let h_s = hx.shell_htc()[0];
        assert!(hx.tube_htc().iter().all(|&h| h == h_t));
        assert!(hx.shell_htc().iter().all(|&h| h == h_s));

        let a = (h_t * geometry.tube_side_area).get::<watt_per_kelvin>();
        let b = (h_s * geometry.shell_side_area).get::<watt_per_kelvin>();
        let k = test_support::wall_conductance(1).get::<watt_per_kelvin>();
        let ua = ThermalConductance::new::<watt_per_kelvin>(1.0 / (1.0 / a + 1.0 / k + 1.0 / b));

        let rates = [hx.tube.capacitance(0), hx.shell.capacitance(0)];
        let inlet_difference = input
            .inlets
            .shell
            .temperature
            .minus(input.inlets.tube.temperature);
        let expected = effectiveness::heat_rate(arrangement, ua, rates, inlet_difference);

        assert_relative_eq!(
            hx.shell_duty().get::<watt>(),
            expected.get::<watt>(),
            max_relative = 1e-3
        );
        assert_relative_eq!(
            hx.tube_duty().get::<watt>(),
            expected.get::<watt>(),
            max_relative = 1e-3
        );
    }

    #[test]
    fn counter_flow_matches_effectiveness_ntu() {
        check_against_effectiveness(FlowArrangement::CounterFlow);
    }

    #[test]
    fn parallel_flow_matches_effectiveness_ntu() {
        check_against_effectiveness(FlowArrangement::ParallelFlow);
    }

    #[test]
    fn conserves_energy_with_varying_properties() {
        let thermo = table_water();
        for arrangement in [FlowArrangement::CounterFlow, FlowArrangement::ParallelFlow] {
            let results = evaluated(&reference_input(50, arrangement), &thermo);
            assert!(
                results.heat_balance_error() <= 1e-3,
                "{arrangement:?}: {}",
                results.heat_balance_error()
            );
            assert!(results.tube.duty.iter().all(|q| q.get::<watt>() >= 0.0));
        }
    }

    #[test]
    fn counter_flow_outlets_stay_between_inlets() {
        let thermo = table_water();
        let results = evaluated(&reference_input(50, FlowArrangement::CounterFlow), &thermo);

        let tube_out = kelvin_of(results.tube_outlet());
        let shell_out = kelvin_of(results.shell_outlet());
        assert!(TUBE_INLET < tube_out && tube_out < SHELL_INLET, "{tube_out}");
        assert!(TUBE_INLET < shell_out && shell_out < SHELL_INLET, "{shell_out}");

        // Both profiles rise from face 0 to face n.
        let rising = |faces: &[ThermodynamicTemperature]| faces.windows(2).all(|w| w[1] > w[0]);
        assert!(rising(&results.tube.faces));
        assert!(rising(&results.shell.faces));
        assert!(
            results
                .tube
                .bulk
                .iter()
                .zip(&results.shell.bulk)
                .all(|(t, s)| t < s)
        );
    }

    #[test]
    fn parallel_flow_outlets_do_not_cross() {
        let thermo = table_water();
        let results = evaluated(&reference_input(20, FlowArrangement::ParallelFlow), &thermo);
        assert!(results.tube_outlet() < results.shell_outlet());
        assert_relative_eq!(kelvin_of(results.shell.faces[0]), SHELL_INLET);
    }

    #[test]
    fn duty_is_insensitive_to_segment_count() {
        let thermo = table_water();
        // At the reference shell flow the single segment overshoots by about 5 %.
        // A larger shell flow keeps the shell side far from its capacity limit,
        // where one segment is a fair approximation.
        let input = |n| with_shell_flow(reference_input(n, FlowArrangement::CounterFlow), 10.0);

        let coarse = evaluated(&input(1), &thermo).shell.total_duty;
        let fine = evaluated(&input(100), &thermo).shell.total_duty;

        assert_relative_eq!(
            coarse.get::<watt>(),
            fine.get::<watt>(),
            max_relative = 0.05
        );
    }

    #[test]
    fn reference_cooler_scenario() {
        let thermo = table_water();
        let input = reference_input(500, FlowArrangement::CounterFlow);
        let mut hx = CoilExchanger::new(&input, &thermo, &thermo).unwrap();

        let convergence = hx.evaluate().unwrap();
        assert!(convergence.iters < 20);
        assert!(convergence.residual <= 1e-3);

        let results = hx.results();
        let q = results.shell.total_duty.get::<watt>();
        assert!(q > 1e5 && q < 1e7, "shell duty {q} W");
        assert!(results.heat_balance_error() <= 1e-3);
        assert_eq!(results.iters, convergence.iters);
        assert_eq!(hx.tube_bulk().len(), 500);
        assert_eq!(hx.shell_faces().len(), 501);
    }

    #[cfg(feature = "coolprop")]
    #[test]
    fn reference_cooler_with_coolprop_water() {
        use crate::support::thermo::model::CoolProp;

        let coolprop = CoolProp::<Water>::new().unwrap();
        let input = reference_input(100, FlowArrangement::CounterFlow);

        let exact = evaluated(&input, &coolprop);
        let tabulated = evaluated(&input, &table_water());

        assert!(exact.heat_balance_error() <= 1e-3);
        assert_relative_eq!(
            exact.shell.total_duty.get::<watt>(),
            tabulated.shell.total_duty.get::<watt>(),
            max_relative = 0.08
        );
    }

    #[test]
    fn second_evaluation_is_a_fixed_point() {
        let thermo = table_water();
        let input = reference_input(100, FlowArrangement::CounterFlow);
        let mut hx = CoilExchanger::new(&input, &thermo, &thermo).unwrap();

        hx.evaluate().unwrap();
        let first = hx.results();

        let again = hx.evaluate().unwrap();
        let second = hx.results();

        assert_eq!(again.iters, 1);
        assert_relative_eq!(
            first.shell.total_duty.get::<watt>(),
            second.shell.total_duty.get::<watt>(),
            max_relative = 1e-3
        );
        for (a, b) in first.tube.faces.iter().zip(&second.tube.faces) {
            assert_relative_eq!(kelvin_of(*a), kelvin_of(*b), epsilon = 0.1);
        }
    }

    #[test]
    fn iteration_cap_reports_residual() {
        let thermo = table_water();
        let input = reference_input(10, FlowArrangement::CounterFlow);
        let mut hx = CoilExchanger::new(&input, &thermo, &thermo)
            .unwrap()
            .with_config(EvaluateConfig {
                max_iters: 1,
                ..EvaluateConfig::default()
            });

        match hx.evaluate() {
            Err(CoilHxError::DidNotConverge { iters, residual }) => {
                assert_eq!(iters, 1);
                // The first solve starts from zero duty.
                assert_relative_eq!(residual, 1.0);
            }
            other => panic!("unexpected: {other:?}"),
        }
        assert!(hx.last_convergence().is_none());
    }

    #[test]
    fn failed_reevaluation_clears_convergence() {
        let thermo = table_water();
        let input = reference_input(20, FlowArrangement::CounterFlow);
        let mut hx = CoilExchanger::new(&input, &thermo, &thermo).unwrap();

        let first = hx.evaluate().unwrap();
        assert_eq!(hx.last_convergence(), Some(first));
        assert_eq!(hx.results().iters, first.iters);

        let mut hx = hx.with_config(EvaluateConfig {
            max_iters: 1,
            duty_rel_tol: 0.0,
            duty_abs_tol: Power::new::<watt>(0.0),
        });
        assert!(matches!(
            hx.evaluate(),
            Err(CoilHxError::DidNotConverge { iters: 1, .. })
        ));

        assert!(hx.last_convergence().is_none());
        let results = hx.results();
        assert_eq!(results.iters, 0);
        assert!(results.residual.is_infinite());
    }

    #[test]
    fn residual_is_relative_to_new_duty() {
        assert_relative_eq!(relative_change(110.0, 100.0), 0.1);
        assert_relative_eq!(relative_change(100.0, 110.0), 10.0 / 110.0);
        assert_eq!(relative_change(0.0, 0.0), 0.0);
        assert!(relative_change(5.0, 0.0).is_infinite());
    }

    #[test]
    fn equal_inlets_exchange_nothing() {
        let thermo = table_water();
        let mut input = reference_input(10, FlowArrangement::CounterFlow);
        input.inlets.shell.temperature = input.inlets.tube.temperature;

        let mut hx = CoilExchanger::new(&input, &thermo, &thermo).unwrap();
        let convergence = hx.evaluate().unwrap();

        assert_eq!(convergence.iters, 1);
        assert!(hx.shell_duty().get::<watt>() < 1e-3);
        assert!(hx.tube_duty().get::<watt>() < 1e-3);
    }

    #[test]
    fn results_before_evaluation() {
        let thermo = constant_water();
        let input = reference_input(3, FlowArrangement::ParallelFlow);
        let hx = CoilExchanger::new(&input, &thermo, &thermo).unwrap();

        let results = hx.results();
        assert_eq!(results.iters, 0);
        assert!(results.residual.is_infinite());
        assert_eq!(results.heat_balance_error(), 0.0);
        assert_eq!(results.segments(), 3);
        assert_eq!(hx.arrangement(), FlowArrangement::ParallelFlow);
    }
}
