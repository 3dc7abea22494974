//! Preliminary concrete mix proportioning engine.
//!
//! The engine runs a fixed sequence of pure stages over an immutable
//! [`MixState`]:
//!
//! 1. target mean strength from grade and site control
//! 2. water-cement ratio from cement strength band, capped by exposure
//! 3. water content from aggregate size, slump, shape and admixture
//! 4. cement content, raised to the exposure minimum when needed
//! 5. coarse/fine aggregate volume fractions
//! 6. entrapped air content
//!
//! Free-text labels from the request are classified into closed categories
//! once, when a [`MixRequest`] is validated into [`MixInputs`]. Stages never
//! see raw labels and never fall back silently on unknown table keys.
//!
//! # Example
//!
//! ```
//! use mix_design::{DesignOptions, MixRequest, perform_full_design};
//!
//! let request = MixRequest {
//!     grade: Some("M20".into()),
//!     exposure: Some("Moderate".into()),
//!     max_wc_ratio: Some(0.50),
//!     min_cement_kg_m3: Some(240.0),
//!     cement_type: Some("OPC 43 Grade".into()),
//!     max_aggregate_size_mm: Some(20.0),
//!     fine_aggregate_zone: Some("II".into()),
//!     slump_mm: Some(75.0),
//!     ..MixRequest::default()
//! };
//!
//! let result = perform_full_design(&request, &DesignOptions::default());
//! let report = result.report().expect("design should succeed");
//! assert_eq!(report.water_content_kg_m3, 192.0);
//! ```

pub mod aggregate;
pub mod category;
pub mod cement;
pub mod error;
pub mod pipeline;
pub mod report;
pub mod request;
pub mod state;
pub mod strength;
pub mod water;
pub mod wc_ratio;

pub use aggregate::{AggregateVolumes, base_coarse_volume, proportion_aggregates};
pub use category::{AdmixtureKind, AggregateShape, CementBand, PlacingMethod, SiteControl};
pub use cement::{CementCorrection, correct_cement_content};
pub use error::{DesignError, DesignResult, ErrorKind};
pub use pipeline::{
    DesignStage, ProgressCallback, perform_full_design, perform_full_design_with_progress,
    run_design, run_design_with_progress,
};
pub use report::{MixReport, MixResult};
pub use request::{DesignOptions, MixInputs, MixRequest, SpecificGravities};
pub use state::MixState;
pub use strength::{TargetStrength, target_strength};
pub use water::estimate_water_content;
pub use wc_ratio::select_wc_ratio;

pub use mix_catalog::{AggregateSize, ExposureClass, FineAggregateZone, GradeSpec};
