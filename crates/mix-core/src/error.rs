use thiserror::Error;

pub type CoreResult<T> = Result<T, CoreError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Value for {what} must be positive, got {value}")]
    NonPositive { what: &'static str, value: f64 },

    #[error("Value for {what} out of range: {value} (allowed {min}..={max})")]
    OutOfRange {
        what: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

impl CoreError {
    /// Offending value carried by every variant.
    pub fn value(&self) -> f64 {
        match self {
            CoreError::NonFinite { value, .. }
            | CoreError::NonPositive { value, .. }
            | CoreError::OutOfRange { value, .. } => *value,
        }
    }
}
