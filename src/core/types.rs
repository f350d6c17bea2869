use std::fmt;

use serde::Serialize;

/// Standardised-approach risk-weighted assets, one figure per risk category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RwaInputs {
    pub credit: f64,
    pub equity: f64,
    pub operational: f64,
    pub market: f64,
    pub cva: f64,
}

impl RwaInputs {
    pub fn total(&self) -> f64 {
        self.credit + self.equity + self.operational + self.market + self.cva
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InternalModelInputs {
    pub rwas: f64,
    pub costs: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Inputs {
    pub rwas: RwaInputs,
    pub internal_model: InternalModelInputs,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RwaSource {
    InternalModel,
    OutputFloor,
}

impl fmt::Display for RwaSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RwaSource::InternalModel => f.write_str("Internal Model"),
            RwaSource::OutputFloor => f.write_str("Output Floor"),
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum CostVerdict {
    WorthIt,
    NotWorthIt,
}

impl CostVerdict {
    pub fn is_worth_it(self) -> bool {
        matches!(self, CostVerdict::WorthIt)
    }

    pub fn explanation(self) -> &'static str {
        match self {
            CostVerdict::WorthIt => "The internal model is worth the cost.",
            CostVerdict::NotWorthIt => {
                "The internal model is not worth the cost. Stick to the standard model."
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputFloorResult {
    pub total_rwas: f64,
    pub output_floor_value: f64,
    pub max_allowed_internal_model_rwas: f64,
    pub chosen_rwa_value: f64,
    pub chosen_rwa_source: RwaSource,
    pub benefit_from_internal_model: f64,
    pub cost_benefit_threshold: f64,
    pub is_internal_model_worth_it: bool,
    pub explanation: &'static str,
}
