use std::f64::consts::PI;
use std::fmt::Debug;

use num_traits::Zero;
use uom::si::{
    angle::degree,
    area::square_meter,
    f64::{Angle, Area, Length, ThermalConductance, ThermalConductivity},
    length::{meter, millimeter},
    thermal_conductance::watt_per_kelvin,
    thermal_conductivity::watt_per_meter_kelvin,
};

use crate::support::constraint::{Constraint, StrictlyPositive};

use crate::models::thermal::hx::coil::core::CoilHxError;

/// Geometry of a helically coiled tube bundle.
///
/// Lengths and areas are bundle totals; the exchanger splits them evenly
/// across its segments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoilGeometry {
    /// Inner tube diameter, the tube-side characteristic length.
    pub inner_diameter: Length,

    /// Outer tube diameter, the shell-side characteristic length.
    pub outer_diameter: Length,

    pub horizontal_pitch: Length,
    pub vertical_pitch: Length,

    /// Number of tube rows crossed by the shell-side flow.
    pub vertical_rows: u32,

    /// Average coil wrap (helix) angle, in `(0°, 90°]`.
    pub wrap_angle: Angle,

    /// Average coil winding diameter.
    pub winding_diameter: Length,

    /// Average length of one tube.
    pub tube_length: Length,

    pub tube_count: u32,

    /// Heat-transfer surface on the tube side.
    pub tube_side_area: Area,

    /// Heat-transfer surface on the shell side.
    pub shell_side_area: Area,

    /// Flow cross-section on the tube side.
    pub tube_side_flow_area: Area,

    /// Flow cross-section on the shell side.
    pub shell_side_flow_area: Area,
}

impl CoilGeometry {
    /// Bundle of the reference water cooler.
    #[must_use]
    pub fn reference_cooler() -> Self {
        Self {
            inner_diameter: Length::new::<millimeter>(12.4),
            outer_diameter: Length::new::<millimeter>(16.0),
            horizontal_pitch: Length::new::<millimeter>(17.0),
            vertical_pitch: Length::new::<millimeter>(17.0),
            vertical_rows: 3,
            wrap_angle: Angle::new::<degree>(10.0),
            winding_diameter: Length::new::<meter>(0.377),
            tube_length: Length::new::<meter>(6.024),
            tube_count: 36,
            tube_side_area: Area::new::<square_meter>(8.414),
            shell_side_area: Area::new::<square_meter>(10.857),
            tube_side_flow_area: Area::new::<square_meter>(0.005_217_085_8),
            shell_side_flow_area: Area::new::<square_meter>(0.004_347_461_6),
        }
    }

    /// Checks that every dimension is physically meaningful.
    ///
    /// # Errors
    ///
    /// Returns [`CoilHxError::InvalidGeometry`] naming the first offending field.
    pub fn validate(&self) -> Result<(), CoilHxError> {
        positive("inner_diameter", self.inner_diameter)?;
        positive("outer_diameter", self.outer_diameter)?;
        positive("horizontal_pitch", self.horizontal_pitch)?;
        positive("vertical_pitch", self.vertical_pitch)?;
        positive("vertical_rows", self.vertical_rows)?;
        positive("winding_diameter", self.winding_diameter)?;
        positive("tube_length", self.tube_length)?;
        positive("tube_count", self.tube_count)?;
        positive("tube_side_area", self.tube_side_area)?;
        positive("shell_side_area", self.shell_side_area)?;
        positive("tube_side_flow_area", self.tube_side_flow_area)?;
        positive("shell_side_flow_area", self.shell_side_flow_area)?;

        if self.inner_diameter >= self.outer_diameter {
            return Err(CoilHxError::InvalidGeometry {
                field: "inner_diameter",
                reason: format!(
                    "{:?} is not smaller than outer diameter {:?}",
                    self.inner_diameter, self.outer_diameter
                ),
            });
        }

        let wrap = self.wrap_angle.get::<degree>();
        if wrap.is_nan() || wrap <= 0.0 || wrap > 90.0 {
            return Err(CoilHxError::InvalidGeometry {
                field: "wrap_angle",
                reason: format!("{wrap}° is outside (0°, 90°]"),
            });
        }

        Ok(())
    }
}

fn positive<T: PartialOrd + Zero + Debug>(field: &'static str, value: T) -> Result<(), CoilHxError> {
    StrictlyPositive::check(&value).map_err(|err| CoilHxError::InvalidGeometry {
        field,
        reason: format!("{value:?}: {err}"),
    })
}

/// Per-segment share of the bundle geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct SegmentGeometry {
    pub(crate) tube_area: Area,
    pub(crate) shell_area: Area,

    /// Radial conduction conductance of the wall for one segment.
    pub(crate) wall_conductance: ThermalConductance,
}

impl SegmentGeometry {
    /// Splits a validated geometry into `segments` equal parts.
    pub(crate) fn new(
        geometry: &CoilGeometry,
        wall_conductivity: ThermalConductivity,
        segments: usize,
    ) -> Self {
        #[allow(clippy::cast_precision_loss)]
        let n = segments as f64;

        // 2π·λ / ln(d_out / d_in), per unit tube length.
        let per_length = 2.0 * PI * wall_conductivity.get::<watt_per_meter_kelvin>()
            / (geometry.outer_diameter.get::<meter>() / geometry.inner_diameter.get::<meter>())
                .ln();
        let length = geometry.tube_length.get::<meter>() / n;

        Self {
            tube_area: geometry.tube_side_area / n,
            shell_area: geometry.shell_side_area / n,
            wall_conductance: ThermalConductance::new::<watt_per_kelvin>(
                per_length * length * f64::from(geometry.tube_count),
            ),
        }
    }
}
