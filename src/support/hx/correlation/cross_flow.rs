use uom::si::{angle::radian, f64::Angle};

use crate::support::interp::interp_clamped;

/// Reynolds-number band of the cross-flow correlation.
///
/// Each band carries its own `(c, n)` in `Nu0 = c·Re^n·Pr^0.36`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReynoldsBand {
    /// `Re ≤ 40`
    Creeping,
    /// `40 < Re ≤ 1000`
    Laminar,
    /// `1000 < Re ≤ 2·10⁵`
    Subcritical,
    /// `Re > 2·10⁵`
    Critical,
}

impl ReynoldsBand {
    /// Classifies a Reynolds number; the sign is ignored.
    #[must_use]
    pub fn classify(re: f64) -> Self {
        let re = re.abs();
        if re <= 40.0 {
            Self::Creeping
        } else if re <= 1_000.0 {
            Self::Laminar
        } else if re <= 2.0e5 {
            Self::Subcritical
        } else {
            Self::Critical
        }
    }

    /// Returns `(c, n)` for this band.
    #[must_use]
    pub fn coefficients(self) -> (f64, f64) {
        match self {
            Self::Creeping => (0.9, 0.4),
            Self::Laminar => (0.52, 0.5),
            Self::Subcritical => (0.26, 0.63),
            Self::Critical => (0.02, 0.84),
        }
    }
}

const ROW_COUNTS: [f64; 11] = [
    0.813_693_22,
    1.079_657_7,
    1.553_653_7,
    2.330_480_6,
    3.412_771_6,
    4.813_693_2,
    6.198_815,
    8.284_397_6,
    11.620_803,
    13.877_551,
    18.541_145,
];

const ROW_FACTORS: [f64; 11] = [
    0.671_428_57,
    0.719_973_54,
    0.778_968_25,
    0.839_021_16,
    0.880_952_38,
    0.917_989_42,
    0.941_798_94,
    0.965_608_47,
    0.987_566_14,
    0.998_015_87,
    1.0,
];

/// Row-count correction `Cz` for a bundle with `rows` transverse rows.
///
/// Interpolated from a fixed curve and clamped to its endpoints, so the
/// result always lies in `[0.671, 1.0]`.
#[must_use]
pub fn row_correction(rows: f64) -> f64 {
    interp_clamped(rows, &ROW_COUNTS, &ROW_FACTORS)
}

/// Incidence-angle correction `Cf = √sin(angle)`.
///
/// Angles outside `(0°, 180°)` have a non-positive sine and yield `0` or `NaN`;
/// callers validate the wrap angle before getting here.
#[must_use]
pub fn incidence_correction(angle: Angle) -> f64 {
    angle.get::<radian>().sin().sqrt()
}

/// Nusselt number for cross flow over a staggered coil bundle.
///
/// `angle` is the flow incidence angle (the coil wrap angle) and `rows` the
/// number of transverse tube rows.
#[must_use]
pub fn cross_flow_nusselt(re: f64, pr: f64, angle: Angle, rows: f64) -> f64 {
    let (c, n) = ReynoldsBand::classify(re).coefficients();
    let nu0 = c * re.abs().powf(n) * pr.powf(0.36);
    nu0 * row_correction(rows) * incidence_correction(angle)
}
