//! Design state threaded through the pipeline.

use mix_core::units::Content;

use crate::aggregate::AggregateVolumes;
use crate::cement::CementCorrection;
use crate::error::{DesignError, DesignResult};
use crate::request::MixInputs;
use crate::strength::TargetStrength;

/// Inputs plus every quantity derived so far.
///
/// A state is never mutated in place: each stage consumes it and returns a
/// new one with its own result filled in. Runs share nothing but the
/// `'static` reference tables.
#[derive(Debug, Clone, PartialEq)]
pub struct MixState {
    inputs: MixInputs,
    target: Option<TargetStrength>,
    selected_wc_ratio: Option<f64>,
    water_content: Option<Content>,
    cement: Option<CementCorrection>,
    aggregates: Option<AggregateVolumes>,
    air_content: Option<f64>,
}

impl MixState {
    pub fn new(inputs: MixInputs) -> Self {
        Self {
            inputs,
            target: None,
            selected_wc_ratio: None,
            water_content: None,
            cement: None,
            aggregates: None,
            air_content: None,
        }
    }

    pub fn inputs(&self) -> &MixInputs {
        &self.inputs
    }

    pub fn with_target_strength(self, target: TargetStrength) -> Self {
        Self {
            target: Some(target),
            ..self
        }
    }

    pub fn with_selected_wc_ratio(self, wc_ratio: f64) -> Self {
        Self {
            selected_wc_ratio: Some(wc_ratio),
            ..self
        }
    }

    pub fn with_water_content(self, water: Content) -> Self {
        Self {
            water_content: Some(water),
            ..self
        }
    }

    pub fn with_cement(self, cement: CementCorrection) -> Self {
        Self {
            cement: Some(cement),
            ..self
        }
    }

    pub fn with_aggregates(self, volumes: AggregateVolumes) -> Self {
        Self {
            aggregates: Some(volumes),
            ..self
        }
    }

    pub fn with_air_content(self, air: f64) -> Self {
        Self {
            air_content: Some(air),
            ..self
        }
    }

    pub fn target_strength(&self) -> DesignResult<TargetStrength> {
        self.target.ok_or(DesignError::IncompleteState {
            field: "target_strength",
        })
    }

    /// w/c as chosen from strength and exposure, before any cement correction.
    pub fn selected_wc_ratio(&self) -> DesignResult<f64> {
        self.selected_wc_ratio.ok_or(DesignError::IncompleteState {
            field: "wc_ratio",
        })
    }

    /// w/c in force: the corrected ratio once cement has been derived.
    pub fn wc_ratio(&self) -> DesignResult<f64> {
        match self.cement {
            Some(c) => Ok(c.wc_ratio),
            None => self.selected_wc_ratio(),
        }
    }

    pub fn water_content(&self) -> DesignResult<Content> {
        self.water_content.ok_or(DesignError::IncompleteState {
            field: "water_content",
        })
    }

    pub fn cement(&self) -> DesignResult<CementCorrection> {
        self.cement.ok_or(DesignError::IncompleteState {
            field: "cement_content",
        })
    }

    pub fn aggregates(&self) -> DesignResult<AggregateVolumes> {
        self.aggregates.ok_or(DesignError::IncompleteState {
            field: "aggregate_volumes",
        })
    }

    pub fn air_content(&self) -> DesignResult<f64> {
        self.air_content.ok_or(DesignError::IncompleteState {
            field: "air_content",
        })
    }
}
