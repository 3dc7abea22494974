//! Entrapped air content for non air-entrained concrete.

use crate::aggregate::AggregateSize;
use crate::error::CatalogResult;

/// Entrapped air as a fraction of concrete volume.
pub fn air_content(size: AggregateSize) -> f64 {
    match size {
        AggregateSize::Mm10 => 0.015,
        AggregateSize::Mm20 => 0.010,
        AggregateSize::Mm40 => 0.008,
    }
}

/// Same lookup keyed by raw size; sizes outside the table are an error.
pub fn air_content_for_mm(size_mm: f64) -> CatalogResult<f64> {
    AggregateSize::from_mm(size_mm).map(air_content)
}
