use thiserror::Error;

/// Everything that can stop a simulation or a scalar formula from producing a value.
///
/// All variants except [`SimError::Cancelled`] are caller-input defects and are
/// raised before any state is advanced.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    /// Thruster input did not carry exactly four magnitudes.
    #[error("expected exactly 4 thruster magnitudes, got {0}")]
    Shape(usize),

    /// A physical quantity is outside its valid range.
    #[error("{name} must be {requirement}, got {value}")]
    Domain {
        name: &'static str,
        requirement: &'static str,
        value: f64,
    },

    /// A NaN or infinity reached a numeric computation.
    #[error("{name} must be a finite number, got {value}")]
    InputKind { name: &'static str, value: f64 },

    #[error("simulation cancelled after {completed} of {total} samples")]
    Cancelled { completed: usize, total: usize },
}

impl SimError {
    /// Name of the precondition that failed, if this is a validation error.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            SimError::Shape(_) => Some("thrusters"),
            SimError::Domain { name, .. } | SimError::InputKind { name, .. } => Some(name),
            SimError::Cancelled { .. } => None,
        }
    }
}
