//! Effectiveness-NTU relations for single-pass exchangers.
//!
//! With constant properties and a constant overall conductance `UA`, a
//! counter-flow or parallel-flow exchanger has a closed-form effectiveness.
//! The discretized coil model converges to these values in that limit.

use uom::si::{
    f64::{Power, Ratio, TemperatureInterval, ThermalConductance},
    ratio::ratio,
};

use super::FlowArrangement;

/// Number of transfer units, `UA / C_min`.
#[must_use]
pub fn ntu(ua: ThermalConductance, capacitance_rates: [ThermalConductance; 2]) -> f64 {
    let [first, second] = capacitance_rates;
    let ntu: Ratio = ua / first.min(second);
    ntu.get::<ratio>()
}

/// Capacity ratio, `C_min / C_max`.
#[must_use]
pub fn capacity_ratio(capacitance_rates: [ThermalConductance; 2]) -> f64 {
    let [first, second] = capacitance_rates;
    let cr: Ratio = first.min(second) / first.max(second);
    cr.get::<ratio>()
}

/// Effectiveness from NTU and capacity ratio.
///
/// A capacity ratio of zero (one stream with unbounded capacitance) reduces to
/// `1 - exp(-NTU)` for either arrangement.
#[must_use]
pub fn effectiveness_from_ntu(arrangement: FlowArrangement, ntu: f64, cr: f64) -> f64 {
    if cr == 0.0 {
        return 1.0 - (-ntu).exp();
    }
    match arrangement {
        FlowArrangement::CounterFlow if (1.0 - cr).abs() < 1e-9 => ntu / (1.0 + ntu),
        FlowArrangement::CounterFlow => {
            let e = (-ntu * (1.0 - cr)).exp();
            (1.0 - e) / (1.0 - cr * e)
        }
        FlowArrangement::ParallelFlow => (1.0 - (-ntu * (1.0 + cr)).exp()) / (1.0 + cr),
    }
}

/// Effectiveness of an exchanger with conductance `ua`.
#[must_use]
pub fn effectiveness(
    arrangement: FlowArrangement,
    ua: ThermalConductance,
    capacitance_rates: [ThermalConductance; 2],
) -> f64 {
    effectiveness_from_ntu(
        arrangement,
        ntu(ua, capacitance_rates),
        capacity_ratio(capacitance_rates),
    )
}

/// Heat transfer rate, `ε · C_min · |ΔT_inlets|`.
#[must_use]
pub fn heat_rate(
    arrangement: FlowArrangement,
    ua: ThermalConductance,
    capacitance_rates: [ThermalConductance; 2],
    inlet_difference: TemperatureInterval,
) -> Power {
    let [first, second] = capacitance_rates;
    let c_min = first.min(second);
    effectiveness(arrangement, ua, capacitance_rates) * c_min * inlet_difference.abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        power::watt, temperature_interval::kelvin as delta_kelvin,
        thermal_conductance::watt_per_kelvin,
    };

    fn conductance(value: f64) -> ThermalConductance {
        ThermalConductance::new::<watt_per_kelvin>(value)
    }

    #[test]
    fn balanced_counter_flow() {
        assert_relative_eq!(
            effectiveness_from_ntu(FlowArrangement::CounterFlow, 3.0, 1.0),
            0.75
        );
    }

    #[test]
    fn unbounded_capacitance_matches_for_both_arrangements() {
        for arrangement in [FlowArrangement::CounterFlow, FlowArrangement::ParallelFlow] {
            assert_relative_eq!(
                effectiveness_from_ntu(arrangement, 2.0, 0.0),
                1.0 - (-2.0_f64).exp()
            );
        }
    }

    #[test]
    fn parallel_flow_saturates() {
        assert_relative_eq!(
            effectiveness_from_ntu(FlowArrangement::ParallelFlow, 50.0, 0.5),
            1.0 / 1.5,
            max_relative = 1e-12
        );
    }

    #[test]
    fn counter_flow_beats_parallel_flow() {
        let rates = [conductance(1000.0), conductance(2000.0)];
        let ua = conductance(1500.0);
        assert!(
            effectiveness(FlowArrangement::CounterFlow, ua, rates)
                > effectiveness(FlowArrangement::ParallelFlow, ua, rates)
        );
    }

    #[test]
    fn heat_rate_uses_minimum_capacitance() {
        let rates = [conductance(4000.0), conductance(1000.0)];
        let ua = conductance(1000.0);
        let q = heat_rate(
            FlowArrangement::CounterFlow,
            ua,
            rates,
            TemperatureInterval::new::<delta_kelvin>(-100.0),
        );

        let e = (-0.75_f64).exp();
        let eff = (1.0 - e) / (1.0 - 0.25 * e);
        assert_relative_eq!(q.get::<watt>(), eff * 1000.0 * 100.0, max_relative = 1e-12);
    }
}
