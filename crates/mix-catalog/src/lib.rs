//! mix-catalog: static reference data for concrete mix proportioning.
//!
//! Provides:
//! - Grade catalog (characteristic strength, standard deviation, margin)
//! - Exposure catalog (durability limits used by frontends)
//! - Aggregate size and fine-aggregate zone enumerations
//! - Entrapped air content by maximum aggregate size
//!
//! Every table here is immutable `'static` data and can be shared freely
//! between concurrent design runs.

pub mod aggregate;
pub mod air;
pub mod error;
pub mod exposure;
pub mod grade;

pub use aggregate::{AggregateSize, FineAggregateZone};
pub use air::{air_content, air_content_for_mm};
pub use error::{CatalogError, CatalogResult};
pub use exposure::{ExposureCatalogEntry, ExposureClass, exposure_catalog, lookup_exposure};
pub use grade::{GradeSpec, filter_grades, grade_catalog, lookup_grade};
