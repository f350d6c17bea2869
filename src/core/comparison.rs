use serde::Serialize;

use super::types::{Inputs, OutputFloorResult};

pub const STANDARDISED_APPROACH_LABEL: &str = "With standardised approach";
pub const INTERNAL_MODELS_LABEL: &str = "With internal models";
pub const RWAS_SERIES: &str = "RWAs";
pub const OUTPUT_FLOOR_SERIES: &str = "Output Floor";

/// One approach on the comparison chart: its RWAs next to the floor that applies to it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonBar {
    pub approach: &'static str,
    pub rwas: f64,
    pub output_floor: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartPoint {
    pub approach: &'static str,
    pub series: &'static str,
    pub value: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonChart {
    pub bars: [ComparisonBar; 2],
}

impl ComparisonChart {
    /// Flattens the bars into (approach, series, value) rows, RWAs first per approach.
    pub fn long_format(&self) -> Vec<ChartPoint> {
        self.bars
            .iter()
            .flat_map(|bar| {
                [
                    ChartPoint {
                        approach: bar.approach,
                        series: RWAS_SERIES,
                        value: bar.rwas,
                    },
                    ChartPoint {
                        approach: bar.approach,
                        series: OUTPUT_FLOOR_SERIES,
                        value: bar.output_floor,
                    },
                ]
            })
            .collect()
    }
}

/// Builds the standardised-vs-internal comparison from one evaluated snapshot.
///
/// The standardised approach is its own floor, so both of its values are the RWA total.
pub fn comparison_chart(inputs: &Inputs, result: &OutputFloorResult) -> ComparisonChart {
    ComparisonChart {
        bars: [
            ComparisonBar {
                approach: STANDARDISED_APPROACH_LABEL,
                rwas: result.total_rwas,
                output_floor: result.total_rwas,
            },
            ComparisonBar {
                approach: INTERNAL_MODELS_LABEL,
                rwas: inputs.internal_model.rwas,
                output_floor: result.output_floor_value,
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::InputArgs;
    use crate::core::evaluate;

    fn sample_inputs() -> Inputs {
        InputArgs::default().into()
    }

    #[test]
    fn comparison_chart_pairs_each_approach_with_its_floor() {
        let inputs = sample_inputs();
        let result = evaluate(&inputs).expect("valid inputs");
        let chart = comparison_chart(&inputs, &result);

        let [standardised, internal] = chart.bars;
        assert_eq!(standardised.approach, STANDARDISED_APPROACH_LABEL);
        assert_eq!(standardised.rwas, result.total_rwas);
        assert_eq!(standardised.output_floor, result.total_rwas);

        assert_eq!(internal.approach, INTERNAL_MODELS_LABEL);
        assert_eq!(internal.rwas, 370_000_000.0);
        assert_eq!(internal.output_floor, result.output_floor_value);
    }

    #[test]
    fn long_format_lists_rwas_then_floor_per_approach() {
        let inputs = sample_inputs();
        let result = evaluate(&inputs).expect("valid inputs");
        let points = comparison_chart(&inputs, &result).long_format();

        let layout: Vec<(&str, &str)> = points.iter().map(|p| (p.approach, p.series)).collect();
        assert_eq!(
            layout,
            vec![
                (STANDARDISED_APPROACH_LABEL, RWAS_SERIES),
                (STANDARDISED_APPROACH_LABEL, OUTPUT_FLOOR_SERIES),
                (INTERNAL_MODELS_LABEL, RWAS_SERIES),
                (INTERNAL_MODELS_LABEL, OUTPUT_FLOOR_SERIES),
            ]
        );
        assert_eq!(points[3].value, result.output_floor_value);
    }

    #[test]
    fn chart_serializes_with_camel_case_keys() {
        let inputs = sample_inputs();
        let result = evaluate(&inputs).expect("valid inputs");
        let json = serde_json::to_value(comparison_chart(&inputs, &result))
            .expect("chart should serialize");

        assert_eq!(json["bars"][1]["approach"], INTERNAL_MODELS_LABEL);
        assert!(json["bars"][1].get("outputFloor").is_some());
    }
}
