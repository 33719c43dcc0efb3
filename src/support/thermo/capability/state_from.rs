use crate::support::thermo::State;

use super::ThermoModel;

/// Capability for constructing a [`State`] from a typed input.
///
/// `StateFrom<Input>` expresses, at compile time, which inputs a model can
/// use to construct a state. The exchanger needs
/// `StateFrom<(Fluid, ThermodynamicTemperature, Pressure)>`.
///
/// Models reject inputs outside their validity envelope with their own error
/// type, which callers surface unchanged.
///
/// ## Default fluid convenience
///
/// If a model implements `StateFrom<(Fluid, A, B)>` and `Fluid: Default`, it
/// also implements `StateFrom<(A, B)>`, so marker fluids can be omitted:
/// `thermo.state_from((t, p))`.
pub trait StateFrom<Input>: ThermoModel {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Create a thermodynamic state from the provided input.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the state cannot be created from `input`.
    fn state_from(&self, input: Input) -> Result<State<Self::Fluid>, Self::Error>;
}

impl<M, A, B> StateFrom<(A, B)> for M
where
    M: ThermoModel + StateFrom<(<M as ThermoModel>::Fluid, A, B)>,
    <M as ThermoModel>::Fluid: Default,
{
    type Error = <M as StateFrom<(<M as ThermoModel>::Fluid, A, B)>>::Error;

    fn state_from(&self, (a, b): (A, B)) -> Result<State<Self::Fluid>, Self::Error> {
        self.state_from((<M as ThermoModel>::Fluid::default(), a, b))
    }
}
