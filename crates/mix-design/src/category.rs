//! Closed categories for the free-text selections of a design request.
//!
//! Frontends pass human-readable labels ("OPC 53 Grade", "Superplasticizer -
//! PCE based", ...). Each label is classified here exactly once. Labels that
//! match none of the known names land in the catch-all category of their
//! rule; that fall-through is logged at WARN so a typo does not go unnoticed.

use std::fmt;

use crate::error::{DesignError, DesignResult};

/// Site quality control level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SiteControl {
    #[default]
    Good,
    Fair,
}

impl SiteControl {
    pub fn parse(label: &str) -> DesignResult<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "good" => Ok(Self::Good),
            "fair" => Ok(Self::Fair),
            _ => Err(DesignError::UnknownCategory {
                field: "site_control",
                value: label.to_string(),
            }),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Good => "Good",
            Self::Fair => "Fair",
        }
    }
}

impl fmt::Display for SiteControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Strength band of the cement, selecting the w/c step function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CementBand {
    /// 53 grade OPC
    High,
    /// 43 grade OPC
    Mid,
    /// 33 grade OPC, PPC, PSC and anything unrecognised
    Base,
}

impl CementBand {
    pub fn classify(label: &str) -> Self {
        if label.contains("53") {
            return Self::High;
        }
        if label.contains("43") {
            return Self::Mid;
        }

        let lower = label.to_ascii_lowercase();
        let known = ["33", "ppc", "psc"].iter().any(|k| lower.contains(k));
        if !known {
            tracing::warn!(
                cement_type = label,
                "Unrecognised cement type, using base strength band"
            );
        }
        Self::Base
    }
}

/// Coarse aggregate particle shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AggregateShape {
    /// Reference shape; no water reduction
    #[default]
    CrushedAngular,
    SubAngular,
    GravelWithCrushed,
    Rounded,
}

impl AggregateShape {
    pub const DEFAULT_LABEL: &'static str = "Crushed angular aggregate";

    /// First match wins, in the order sub-angular, gravel with some crushed, rounded.
    pub fn classify(label: &str) -> Self {
        let lower = label.to_ascii_lowercase();
        if lower.contains("sub-angular") {
            Self::SubAngular
        } else if lower.contains("gravel with some crushed") {
            Self::GravelWithCrushed
        } else if lower.contains("rounded") {
            Self::Rounded
        } else {
            if !lower.contains("angular") {
                tracing::warn!(
                    aggregate_shape = label,
                    "Unrecognised aggregate shape, assuming crushed angular"
                );
            }
            Self::CrushedAngular
        }
    }
}

/// How the concrete is placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PlacingMethod {
    #[default]
    NonPumped,
    Pumped,
}

impl PlacingMethod {
    pub const DEFAULT_LABEL: &'static str = "Chute (Non pumpable)";

    /// Labels mentioning "pump" are pumped unless negated ("non pumpable",
    /// "non-pump", "not pumped").
    pub fn classify(label: &str) -> Self {
        let lower = label.to_ascii_lowercase();
        let negated = ["non pump", "non-pump", "nonpump", "not pump"]
            .iter()
            .any(|n| lower.contains(n));
        if lower.contains("pump") && !negated {
            Self::Pumped
        } else {
            Self::NonPumped
        }
    }
}

/// Chemical admixture family, ordered from strongest to weakest water reduction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdmixtureKind {
    PceSuperplasticizer,
    Superplasticizer,
    Plasticizer,
    Other,
}

impl AdmixtureKind {
    pub fn classify(label: &str) -> Self {
        let lower = label.to_ascii_lowercase();
        if lower.contains("superplasticizer") {
            if lower.contains("pce") {
                Self::PceSuperplasticizer
            } else {
                Self::Superplasticizer
            }
        } else if lower.contains("plasticizer") {
            Self::Plasticizer
        } else {
            tracing::warn!(
                admixture_type = label,
                "Unrecognised admixture type, using minimum water reduction"
            );
            Self::Other
        }
    }

    /// Fractional reduction of mixing water.
    pub fn water_reduction(self) -> f64 {
        match self {
            Self::PceSuperplasticizer => 0.30,
            Self::Superplasticizer => 0.23,
            Self::Plasticizer => 0.15,
            Self::Other => 0.10,
        }
    }
}
