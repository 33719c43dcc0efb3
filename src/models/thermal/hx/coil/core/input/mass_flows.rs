use crate::support::constraint::{Constrained, ConstraintResult, StrictlyPositive};
use uom::si::f64::MassRate;

/// Mass flow rates for the tube and shell sides.
#[derive(Debug, Clone, Copy)]
pub struct MassFlows {
    tube: MassRate,
    shell: MassRate,
}

impl MassFlows {
    /// Constructs validated mass flows.
    ///
    /// # Errors
    ///
    /// Returns an error if either flow rate is not strictly positive.
    pub fn new(tube: MassRate, shell: MassRate) -> ConstraintResult<Self> {
        let tube = Constrained::<MassRate, StrictlyPositive>::new(tube)?;
        let shell = Constrained::<MassRate, StrictlyPositive>::new(shell)?;
        Ok(Self::from_constrained(tube, shell))
    }

    /// Constructs mass flows from pre-validated values.
    #[must_use]
    pub fn from_constrained(
        tube: Constrained<MassRate, StrictlyPositive>,
        shell: Constrained<MassRate, StrictlyPositive>,
    ) -> Self {
        Self {
            tube: tube.into_inner(),
            shell: shell.into_inner(),
        }
    }

    /// Constructs mass flows without validation.
    ///
    /// The exchanger still checks these values when it is built and reports
    /// non-positive flows as invalid input.
    #[must_use]
    pub fn new_unchecked(tube: MassRate, shell: MassRate) -> Self {
        Self { tube, shell }
    }

    #[must_use]
    pub fn tube(&self) -> MassRate {
        self.tube
    }

    #[must_use]
    pub fn shell(&self) -> MassRate {
        self.shell
    }
}
