use std::fmt;

use super::EvaluationReport;
use crate::core::{MAX_BENEFIT_PERCENTAGE, OUTPUT_FLOOR_PERCENTAGE};

impl fmt::Display for EvaluationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rwas = &self.inputs.rwas;
        let internal = &self.inputs.internal_model;
        let result = &self.result;
        let floor_pct = OUTPUT_FLOOR_PERCENTAGE * 100.0;
        let benefit_pct = MAX_BENEFIT_PERCENTAGE * 100.0;

        writeln!(f, "Results")?;
        writeln!(f, "  Output Floor Value: {:.2}", result.output_floor_value)?;
        writeln!(
            f,
            "  Chosen RWA Value: {:.2} (Source: {})",
            result.chosen_rwa_value, result.chosen_rwa_source
        )?;
        writeln!(
            f,
            "  Is Internal Model Worth It? {}: {}",
            result.is_internal_model_worth_it, result.explanation
        )?;
        writeln!(f)?;

        writeln!(f, "Calculation")?;
        writeln!(
            f,
            "  Total RWAs = {:.2} + {:.2} + {:.2} + {:.2} + {:.2} = {:.2}",
            rwas.credit, rwas.equity, rwas.operational, rwas.market, rwas.cva, result.total_rwas
        )?;
        writeln!(
            f,
            "  Output Floor = {floor_pct:.1}% x {:.2} = {:.2}",
            result.total_rwas, result.output_floor_value
        )?;
        writeln!(
            f,
            "  Max Allowed Internal Model RWAs = (1 - {benefit_pct:.1}%) x {:.2} = {:.2}",
            result.output_floor_value, result.max_allowed_internal_model_rwas
        )?;
        writeln!(
            f,
            "  Internal Model RWAs {:.2} {} {:.2} -> use {}",
            internal.rwas,
            if internal.rwas >= result.max_allowed_internal_model_rwas {
                ">="
            } else {
                "<"
            },
            result.max_allowed_internal_model_rwas,
            result.chosen_rwa_source
        )?;
        writeln!(
            f,
            "  Benefit from Internal Model = {:.2} - {:.2} = {:.2}",
            internal.rwas, result.output_floor_value, result.benefit_from_internal_model
        )?;
        write!(
            f,
            "  Cost Benefit Threshold = {:.2} / {benefit_pct:.1}% = {:.2}",
            internal.costs, result.cost_benefit_threshold
        )
    }
}
