//! Aggregate grading categories supported by the proportioning tables.

use std::fmt;
use std::str::FromStr;

use crate::error::{CatalogError, CatalogResult};

/// Nominal maximum size of coarse aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AggregateSize {
    Mm10,
    Mm20,
    Mm40,
}

impl AggregateSize {
    pub const ALL: [AggregateSize; 3] = [Self::Mm10, Self::Mm20, Self::Mm40];

    /// Sizes are compared exactly; fractional, negative and non-finite
    /// sizes are all unsupported.
    pub fn from_mm(size_mm: f64) -> CatalogResult<Self> {
        Self::ALL
            .into_iter()
            .find(|size| f64::from(size.mm()) == size_mm)
            .ok_or(CatalogError::UnsupportedAggregateSize { size_mm })
    }

    pub fn mm(self) -> u32 {
        match self {
            Self::Mm10 => 10,
            Self::Mm20 => 20,
            Self::Mm40 => 40,
        }
    }
}

impl fmt::Display for AggregateSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} mm", self.mm())
    }
}

/// Grading zone of the fine aggregate, coarsest (I) to finest (IV).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FineAggregateZone {
    I,
    II,
    III,
    IV,
}

impl FineAggregateZone {
    pub const ALL: [FineAggregateZone; 4] = [Self::I, Self::II, Self::III, Self::IV];

    pub fn label(self) -> &'static str {
        match self {
            Self::I => "I",
            Self::II => "II",
            Self::III => "III",
            Self::IV => "IV",
        }
    }

    /// Zero-based column index into the coarse volume table.
    pub fn index(self) -> usize {
        self as usize
    }
}

impl FromStr for FineAggregateZone {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let trimmed = trimmed
            .strip_prefix("Zone ")
            .or_else(|| trimmed.strip_prefix("zone "))
            .unwrap_or(trimmed)
            .trim();
        Self::ALL
            .into_iter()
            .find(|z| z.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| CatalogError::UnsupportedZone {
                zone: s.to_string(),
            })
    }
}

impl fmt::Display for FineAggregateZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Zone {}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn supported_sizes_round_trip() {
        for size in AggregateSize::ALL {
            assert_eq!(AggregateSize::from_mm(f64::from(size.mm())).unwrap(), size);
        }
    }

    #[test]
    fn unsupported_size_is_rejected() {
        assert_eq!(
            AggregateSize::from_mm(25.0),
            Err(CatalogError::UnsupportedAggregateSize { size_mm: 25.0 })
        );
        assert!(AggregateSize::from_mm(0.0).is_err());
        assert!(AggregateSize::from_mm(20.5).is_err());
        assert!(AggregateSize::from_mm(-10.0).is_err());
        assert!(AggregateSize::from_mm(f64::NAN).is_err());
    }

    #[test]
    fn zone_parsing() {
        assert_eq!("II".parse::<FineAggregateZone>().unwrap(), FineAggregateZone::II);
        assert_eq!("iv".parse::<FineAggregateZone>().unwrap(), FineAggregateZone::IV);
        assert_eq!(
            "Zone III".parse::<FineAggregateZone>().unwrap(),
            FineAggregateZone::III
        );
        assert!("V".parse::<FineAggregateZone>().is_err());
        assert!("".parse::<FineAggregateZone>().is_err());
    }

    #[test]
    fn zone_index_follows_declaration_order() {
        let idx: Vec<_> = FineAggregateZone::ALL.iter().map(|z| z.index()).collect();
        assert_eq!(idx, vec![0, 1, 2, 3]);
    }
}
