use uom::si::{
    f64::{HeatTransfer, Power},
    heat_transfer::watt_per_square_meter_kelvin,
    power::milliwatt,
};

/// Convergence settings for the fixed-point iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvaluateConfig {
    /// Maximum number of linear solves before giving up.
    pub max_iters: usize,

    /// Relative change in total shell-side duty that counts as converged.
    pub duty_rel_tol: f64,

    /// Absolute change in total shell-side duty that counts as converged.
    ///
    /// Also covers the case where the duty is zero on both sides.
    pub duty_abs_tol: Power,
}

impl Default for EvaluateConfig {
    fn default() -> Self {
        Self {
            max_iters: 100,
            duty_rel_tol: 1e-3,
            duty_abs_tol: Power::new::<milliwatt>(1.0),
        }
    }
}

/// Heat-transfer coefficients assumed before the first solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InitialHtc {
    pub tube: HeatTransfer,
    pub shell: HeatTransfer,
}

impl Default for InitialHtc {
    fn default() -> Self {
        Self {
            tube: HeatTransfer::new::<watt_per_square_meter_kelvin>(4.5e3),
            shell: HeatTransfer::new::<watt_per_square_meter_kelvin>(5.5e3),
        }
    }
}
