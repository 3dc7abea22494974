//! Design request record and its validation into typed inputs.

use mix_catalog::{AggregateSize, ExposureClass, FineAggregateZone, GradeSpec, lookup_grade};
use mix_core::numeric::{ensure_finite, ensure_in_range, ensure_positive};
use mix_core::units::{Length, in_mm, mm};
use serde::{Deserialize, Serialize};

use crate::category::{AdmixtureKind, AggregateShape, CementBand, PlacingMethod, SiteControl};
use crate::error::{DesignError, DesignResult};

/// Raw design request as supplied by a frontend.
///
/// Every field is optional so that an absent value can be reported as
/// `MissingParameter` instead of failing deserialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MixRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
    /// Exposure condition name, echoed in the report
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exposure: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_wc_ratio: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_cement_kg_m3: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cement_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_aggregate_size_mm: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fine_aggregate_zone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slump_mm: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specific_gravity_cement: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specific_gravity_coarse: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specific_gravity_fine: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site_control: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aggregate_shape: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placing_method: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_admixture: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admixture_type: Option<String>,
    /// Dosage as percent of cement mass (informational)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admixture_dosage_percent: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specific_gravity_admixture: Option<f64>,
}

/// Validation bounds applied while building [`MixInputs`].
#[derive(Debug, Clone, PartialEq)]
pub struct DesignOptions {
    pub min_slump_mm: f64,
    pub max_slump_mm: f64,
    pub min_specific_gravity: f64,
    pub max_specific_gravity: f64,
}

impl Default for DesignOptions {
    fn default() -> Self {
        Self {
            min_slump_mm: 25.0,
            max_slump_mm: 150.0,
            min_specific_gravity: 0.5,
            max_specific_gravity: 4.0,
        }
    }
}

/// Specific gravities of the constituents. Carried through unchanged; the
/// proportioning stages do not consume them.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SpecificGravities {
    pub cement: Option<f64>,
    pub coarse_aggregate: Option<f64>,
    pub fine_aggregate: Option<f64>,
    pub admixture: Option<f64>,
}

/// Fully validated, typed design inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct MixInputs {
    pub grade: &'static GradeSpec,
    pub exposure: ExposureClass,
    pub cement_type: String,
    pub cement_band: CementBand,
    pub max_aggregate_size: AggregateSize,
    pub zone: FineAggregateZone,
    pub slump: Length,
    pub site_control: SiteControl,
    pub aggregate_shape: AggregateShape,
    pub placing_method: PlacingMethod,
    /// `None` when no admixture is used
    pub admixture: Option<AdmixtureKind>,
    pub admixture_dosage_percent: Option<f64>,
    pub specific_gravities: SpecificGravities,
}

fn required_str<'a>(value: &'a Option<String>, field: &'static str) -> DesignResult<&'a str> {
    value
        .as_deref()
        .ok_or(DesignError::MissingParameter { field })
}

fn required_copy<T: Copy>(value: Option<T>, field: &'static str) -> DesignResult<T> {
    value.ok_or(DesignError::MissingParameter { field })
}

fn optional_gravity(
    value: Option<f64>,
    field: &'static str,
    options: &DesignOptions,
) -> DesignResult<Option<f64>> {
    value
        .map(|v| {
            ensure_in_range(
                v,
                options.min_specific_gravity,
                options.max_specific_gravity,
                field,
            )
        })
        .transpose()
        .map_err(DesignError::from)
}

impl MixInputs {
    /// Validate a raw request. Fails on the first problem found.
    pub fn from_request(request: &MixRequest, options: &DesignOptions) -> DesignResult<Self> {
        let grade_name = required_str(&request.grade, "grade")?;
        let grade = lookup_grade(grade_name)?;

        let exposure_name = required_str(&request.exposure, "exposure")?;
        let max_wc_ratio = required_copy(request.max_wc_ratio, "max_wc_ratio")?;
        let max_wc_ratio = ensure_positive(max_wc_ratio, "max_wc_ratio")?;
        let max_wc_ratio = ensure_in_range(max_wc_ratio, 0.0, 1.0, "max_wc_ratio")?;
        let min_cement = required_copy(request.min_cement_kg_m3, "min_cement_kg_m3")?;
        let min_cement = ensure_finite(min_cement, "min_cement_kg_m3")?;
        if min_cement < 0.0 {
            return Err(DesignError::InvalidRange {
                field: "min_cement_kg_m3",
                value: min_cement,
                reason: "must not be negative".to_string(),
            });
        }
        let exposure = ExposureClass::new(exposure_name, max_wc_ratio, min_cement);

        let cement_type = required_str(&request.cement_type, "cement_type")?;
        let cement_band = CementBand::classify(cement_type);

        let size_mm = required_copy(request.max_aggregate_size_mm, "max_aggregate_size_mm")?;
        let max_aggregate_size = AggregateSize::from_mm(size_mm)?;
        let zone_label = required_str(&request.fine_aggregate_zone, "fine_aggregate_zone")?;
        let zone: FineAggregateZone = zone_label.parse()?;

        let slump_mm = required_copy(request.slump_mm, "slump_mm")?;
        let slump_mm = ensure_positive(slump_mm, "slump_mm")?;
        let slump_mm = ensure_in_range(
            slump_mm,
            options.min_slump_mm,
            options.max_slump_mm,
            "slump_mm",
        )?;

        let specific_gravities = SpecificGravities {
            cement: optional_gravity(
                request.specific_gravity_cement,
                "specific_gravity_cement",
                options,
            )?,
            coarse_aggregate: optional_gravity(
                request.specific_gravity_coarse,
                "specific_gravity_coarse",
                options,
            )?,
            fine_aggregate: optional_gravity(
                request.specific_gravity_fine,
                "specific_gravity_fine",
                options,
            )?,
            admixture: optional_gravity(
                request.specific_gravity_admixture,
                "specific_gravity_admixture",
                options,
            )?,
        };

        let site_control = match &request.site_control {
            Some(label) => SiteControl::parse(label)?,
            None => SiteControl::default(),
        };
        let aggregate_shape = request
            .aggregate_shape
            .as_deref()
            .map(AggregateShape::classify)
            .unwrap_or_default();
        let placing_method = request
            .placing_method
            .as_deref()
            .map(PlacingMethod::classify)
            .unwrap_or_default();

        let admixture = if request.use_admixture.unwrap_or(false) {
            let label = required_str(&request.admixture_type, "admixture_type")?;
            Some(AdmixtureKind::classify(label))
        } else {
            None
        };
        let admixture_dosage_percent = match (admixture, request.admixture_dosage_percent) {
            (Some(_), Some(dosage)) => Some(ensure_in_range(
                dosage,
                0.0,
                100.0,
                "admixture_dosage_percent",
            )?),
            _ => None,
        };

        Ok(Self {
            grade,
            exposure,
            cement_type: cement_type.to_string(),
            cement_band,
            max_aggregate_size,
            zone,
            slump: mm(slump_mm),
            site_control,
            aggregate_shape,
            placing_method,
            admixture,
            admixture_dosage_percent,
            specific_gravities,
        })
    }

    pub fn slump_mm(&self) -> f64 {
        in_mm(self.slump)
    }
}
