use uom::si::{
    f64::{Length, Ratio, TemperatureInterval},
    ratio::ratio,
};

/// Whether the tube-side fluid is being heated or cooled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThermalDirection {
    Heating,
    Cooling,
}

impl ThermalDirection {
    /// Classifies a temperature rise from inlet to outlet.
    ///
    /// Only a strictly positive rise counts as heating.
    #[must_use]
    pub fn from_rise(rise: TemperatureInterval) -> Self {
        if rise.value > 0.0 {
            Self::Heating
        } else {
            Self::Cooling
        }
    }
}

/// Flow regime inside a coiled tube.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoilRegime {
    /// Below the critical Reynolds number; laminar or transitional.
    Laminar,
    Turbulent,
}

impl CoilRegime {
    /// Classifies `re` against the critical Reynolds number for curvature `d_ratio`.
    #[must_use]
    pub fn classify(re: f64, d_ratio: f64) -> Self {
        if re.abs() < critical_reynolds(d_ratio) {
            Self::Laminar
        } else {
            Self::Turbulent
        }
    }
}

/// Critical Reynolds number for coiled-tube flow, `20000·(d/D)^0.32`.
#[must_use]
pub fn critical_reynolds(d_ratio: f64) -> f64 {
    20_000.0 * d_ratio.powf(0.32)
}

/// Dean number, `Re·√(d/D)`.
#[must_use]
pub fn dean_number(re: f64, d_ratio: f64) -> f64 {
    re.abs() * d_ratio.sqrt()
}

/// Dean number at or below which the laminar curvature correction is 1.
const DEAN_THRESHOLD: f64 = 11.6;

/// Nusselt number for flow inside a helically coiled tube.
///
/// `tube_diameter` is the inner tube diameter and `coil_diameter` the average
/// winding diameter. `pr_wall` only enters the laminar branch; `direction`
/// only enters the turbulent branch.
#[must_use]
pub fn in_coil_nusselt(
    tube_diameter: Length,
    coil_diameter: Length,
    re: f64,
    pr_bulk: f64,
    pr_wall: f64,
    direction: ThermalDirection,
) -> f64 {
    let d_ratio: Ratio = tube_diameter / coil_diameter;
    let d_ratio = d_ratio.get::<ratio>();
    let re = re.abs();

    match CoilRegime::classify(re, d_ratio) {
        CoilRegime::Laminar => {
            let nu0 = 0.15 * re.powf(0.33) * pr_bulk.powf(0.43) * (pr_bulk / pr_wall).powf(0.25);
            let dn = dean_number(re, d_ratio);
            let c = if dn <= DEAN_THRESHOLD {
                1.0
            } else {
                0.4 * dn.powf(0.37)
            };
            c * nu0
        }
        CoilRegime::Turbulent => {
            let nu0 = 0.023 * pr_bulk * re.powf(0.8)
                / (1.0 + 2.14 * re.powf(-0.1) * (pr_bulk.powf(0.7) - 1.0));
            let c = match direction {
                ThermalDirection::Heating => 1.0 + 6.3 * (1.0 - d_ratio) * d_ratio.powf(1.15),
                ThermalDirection::Cooling => 1.0 - 0.3 * (-0.015 * d_ratio).exp(),
            };
            c * nu0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{length::millimeter, temperature_interval::kelvin};

    const D_RATIO: f64 = 12.4 / 377.0;

    fn reference_coil() -> (Length, Length) {
        (
            Length::new::<millimeter>(12.4),
            Length::new::<millimeter>(377.0),
        )
    }

    #[test]
    fn critical_reynolds_for_reference_coil() {
        assert_relative_eq!(critical_reynolds(D_RATIO), 6706.4965, max_relative = 1e-6);
        assert_eq!(CoilRegime::classify(6700.0, D_RATIO), CoilRegime::Laminar);
        assert_eq!(CoilRegime::classify(-6710.0, D_RATIO), CoilRegime::Turbulent);
    }

    #[test]
    fn laminar_branch() {
        let (d, coil_d) = reference_coil();

        // Dean number above the threshold.
        let nu = in_coil_nusselt(d, coil_d, 1000.0, 5.0, 3.0, ThermalDirection::Heating);
        assert_relative_eq!(nu, 9.116_547_552, max_relative = 1e-8);

        // Dean number below the threshold, so no curvature correction.
        assert!(dean_number(50.0, D_RATIO) < DEAN_THRESHOLD);
        let nu = in_coil_nusselt(d, coil_d, 50.0, 5.0, 3.0, ThermalDirection::Heating);
        assert_relative_eq!(nu, 1.238_142_553, max_relative = 1e-8);
    }

    #[test]
    fn turbulent_branch_depends_on_direction() {
        let (d, coil_d) = reference_coil();

        let heating = in_coil_nusselt(d, coil_d, 57_000.0, 5.0, 3.0, ThermalDirection::Heating);
        let cooling = in_coil_nusselt(d, coil_d, 57_000.0, 5.0, 3.0, ThermalDirection::Cooling);

        assert_relative_eq!(heating, 329.593_294_46, max_relative = 1e-8);
        assert_relative_eq!(cooling, 206.025_270_95, max_relative = 1e-8);
    }

    #[test]
    fn reynolds_sign_is_ignored() {
        let (d, coil_d) = reference_coil();
        let direction = ThermalDirection::Cooling;

        assert_relative_eq!(
            in_coil_nusselt(d, coil_d, -20_000.0, 3.0, 2.0, direction),
            in_coil_nusselt(d, coil_d, 20_000.0, 3.0, 2.0, direction),
        );
    }

    #[test]
    fn regime_switch_step_is_bounded() {
        let (d, coil_d) = reference_coil();
        let re_cr = critical_reynolds(D_RATIO);
        let nu = |re| in_coil_nusselt(d, coil_d, re, 4.0, 4.0, ThermalDirection::Heating);

        let below = nu(re_cr * (1.0 - 1e-9));
        let above = nu(re_cr * (1.0 + 1e-9));

        // The two branches do not meet; the jump stays below a factor of two.
        assert!(above > below);
        assert!(above / below < 2.0, "below = {below}, above = {above}");
    }

    #[test]
    fn direction_from_rise() {
        assert_eq!(
            ThermalDirection::from_rise(TemperatureInterval::new::<kelvin>(1.0)),
            ThermalDirection::Heating
        );
        assert_eq!(
            ThermalDirection::from_rise(TemperatureInterval::new::<kelvin>(0.0)),
            ThermalDirection::Cooling
        );
        assert_eq!(
            ThermalDirection::from_rise(TemperatureInterval::new::<kelvin>(-5.0)),
            ThermalDirection::Cooling
        );
    }
}
