//! Reference data lookup errors.

use thiserror::Error;

pub type CatalogResult<T> = Result<T, CatalogError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    #[error("Unknown concrete grade: {name}")]
    UnknownGrade { name: String },

    #[error("Unknown exposure condition: {name}")]
    UnknownExposure { name: String },

    #[error("Unsupported maximum aggregate size: {size_mm} mm (supported: 10, 20, 40)")]
    UnsupportedAggregateSize { size_mm: f64 },

    #[error("Unsupported fine aggregate zone: '{zone}' (supported: I, II, III, IV)")]
    UnsupportedZone { zone: String },
}
