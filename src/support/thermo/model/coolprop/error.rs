use std::sync::PoisonError;

use thiserror::Error;

use crate::support::thermo::PropertyError;

/// Errors returned by the [`CoolProp`](super::CoolProp) model.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CoolPropError {
    #[error(transparent)]
    Rfluids(#[from] rfluids::native::CoolPropError),
    #[error("CoolProp abstract state mutex poisoned")]
    Poisoned,
}

impl<T> From<PoisonError<T>> for CoolPropError {
    fn from(_: PoisonError<T>) -> Self {
        CoolPropError::Poisoned
    }
}

impl From<CoolPropError> for PropertyError {
    fn from(error: CoolPropError) -> Self {
        match error {
            CoolPropError::Rfluids(message) => classify(&message.to_string()),
            CoolPropError::Poisoned => PropertyError::Calculation {
                context: "CoolProp abstract state mutex poisoned".to_string(),
            },
        }
    }
}

/// Sorts a CoolProp error message into a [`PropertyError`] variant.
///
/// `rfluids` reports CoolProp failures as plain strings, so the message text
/// is the only signal. Unrecognized messages become
/// [`PropertyError::Calculation`] with the message kept as context.
fn classify(message: &str) -> PropertyError {
    const UNDEFINED: &[&str] = &["not defined"];
    const OUT_OF_DOMAIN: &[&str] = &[
        "not in range",
        "out of range",
        "outside the range of validity",
        "must be in range",
        "must be between",
        "below minimum",
        "above maximum",
        "not a valid number",
        "invalid state",
    ];

    let lowered = message.to_lowercase();
    let context = message.to_string();
    let mentions = |needles: &[&str]| needles.iter().any(|needle| lowered.contains(needle));

    if mentions(UNDEFINED) {
        PropertyError::Undefined { context }
    } else if mentions(OUT_OF_DOMAIN) {
        PropertyError::OutOfDomain { context }
    } else {
        PropertyError::Calculation { context }
    }
}
