//! Error types for mix design runs.

use mix_catalog::CatalogError;
use mix_core::CoreError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that abort a design run.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DesignError {
    #[error("Missing required parameter: {field}")]
    MissingParameter { field: &'static str },

    #[error("Unknown concrete grade: {name}")]
    UnknownGrade { name: String },

    #[error("Unsupported aggregate configuration: {detail}")]
    UnsupportedAggregateConfiguration { detail: String },

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidRange {
        field: &'static str,
        value: f64,
        reason: String,
    },

    #[error("Unknown {field}: '{value}'")]
    UnknownCategory { field: &'static str, value: String },

    #[error("Design state incomplete: {field} not yet derived")]
    IncompleteState { field: &'static str },
}

pub type DesignResult<T> = Result<T, DesignError>;

/// Coarse error category, stable across message wording changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    MissingParameter,
    UnknownGrade,
    UnsupportedAggregateConfiguration,
    InvalidRange,
    UnknownCategory,
    Internal,
}

impl DesignError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DesignError::MissingParameter { .. } => ErrorKind::MissingParameter,
            DesignError::UnknownGrade { .. } => ErrorKind::UnknownGrade,
            DesignError::UnsupportedAggregateConfiguration { .. } => {
                ErrorKind::UnsupportedAggregateConfiguration
            }
            DesignError::InvalidRange { .. } => ErrorKind::InvalidRange,
            DesignError::UnknownCategory { .. } => ErrorKind::UnknownCategory,
            DesignError::IncompleteState { .. } => ErrorKind::Internal,
        }
    }
}

impl From<CatalogError> for DesignError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::UnknownGrade { name } => DesignError::UnknownGrade { name },
            CatalogError::UnknownExposure { name } => DesignError::UnknownCategory {
                field: "exposure",
                value: name,
            },
            e @ (CatalogError::UnsupportedAggregateSize { .. }
            | CatalogError::UnsupportedZone { .. }) => {
                DesignError::UnsupportedAggregateConfiguration {
                    detail: e.to_string(),
                }
            }
        }
    }
}

impl From<CoreError> for DesignError {
    fn from(err: CoreError) -> Self {
        let value = err.value();
        match err {
            CoreError::NonFinite { what, .. } => DesignError::InvalidRange {
                field: what,
                value,
                reason: "must be finite".to_string(),
            },
            CoreError::NonPositive { what, .. } => DesignError::InvalidRange {
                field: what,
                value,
                reason: "must be positive".to_string(),
            },
            CoreError::OutOfRange { what, min, max, .. } => DesignError::InvalidRange {
                field: what,
                value,
                reason: format!("allowed range {min}..={max}"),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = DesignError::MissingParameter { field: "grade" };
        assert!(err.to_string().contains("grade"));

        let err = DesignError::InvalidRange {
            field: "slump_mm",
            value: -5.0,
            reason: "must be positive".into(),
        };
        assert!(err.to_string().contains("slump_mm"));
        assert!(err.to_string().contains("-5"));
    }

    #[test]
    fn catalog_errors_map_to_design_kinds() {
        let err: DesignError = CatalogError::UnsupportedAggregateSize { size_mm: 25.0 }.into();
        assert_eq!(err.kind(), ErrorKind::UnsupportedAggregateConfiguration);
        assert!(err.to_string().contains("25 mm"));

        let err: DesignError = CatalogError::UnsupportedZone { zone: "V".into() }.into();
        assert_eq!(err.kind(), ErrorKind::UnsupportedAggregateConfiguration);

        let err: DesignError = CatalogError::UnknownGrade { name: "M27".into() }.into();
        assert_eq!(err, DesignError::UnknownGrade { name: "M27".into() });
    }

    #[test]
    fn core_errors_map_to_invalid_range() {
        let err: DesignError = CoreError::OutOfRange {
            what: "slump_mm",
            value: 200.0,
            min: 25.0,
            max: 150.0,
        }
        .into();
        assert_eq!(err.kind(), ErrorKind::InvalidRange);
        assert!(err.to_string().contains("25..=150"));
    }
}
