use super::constants::{MAX_BENEFIT_PERCENTAGE, OUTPUT_FLOOR_PERCENTAGE};
use super::error::InputError;
use super::types::{CostVerdict, Inputs, OutputFloorResult, RwaInputs, RwaSource};

/// Output floor for the given standardised-approach RWAs.
///
/// Performs no validation: negative inputs flow straight through the sum.
pub fn compute_output_floor(rwas: &RwaInputs) -> f64 {
    OUTPUT_FLOOR_PERCENTAGE * rwas.total()
}

/// Lowest internal-model RWA figure that may still be used in place of the floor.
pub fn max_allowed_internal_model_rwas(rwas: &RwaInputs) -> f64 {
    max_allowed_for_floor(compute_output_floor(rwas))
}

/// Picks the RWA figure that applies. Ties go to the internal model.
pub fn determine_rwa_usage(rwas: &RwaInputs, internal_model_rwas: f64) -> (f64, RwaSource) {
    let usage = rwa_usage(compute_output_floor(rwas), internal_model_rwas);
    (usage.chosen_value, usage.source)
}

pub fn evaluate_internal_model_costs(
    rwas: &RwaInputs,
    internal_model_rwas: f64,
    internal_model_costs: f64,
) -> (bool, CostVerdict) {
    let benefit = internal_model_rwas - compute_output_floor(rwas);
    let verdict = cost_verdict(benefit, cost_benefit_threshold(internal_model_costs));
    (verdict.is_worth_it(), verdict)
}

pub fn validate_inputs(inputs: &Inputs) -> Result<(), InputError> {
    for (field, value) in [
        ("credit_rwas", inputs.rwas.credit),
        ("equity_rwas", inputs.rwas.equity),
        ("operational_rwas", inputs.rwas.operational),
        ("market_rwas", inputs.rwas.market),
        ("cva_rwas", inputs.rwas.cva),
        ("internal_model_rwas", inputs.internal_model.rwas),
        ("internal_model_costs", inputs.internal_model.costs),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(InputError::Invalid { field, value });
        }
    }
    Ok(())
}

/// Validates one input snapshot and derives every result field from it.
pub fn evaluate(inputs: &Inputs) -> Result<OutputFloorResult, InputError> {
    validate_inputs(inputs)?;

    let rwas = &inputs.rwas;
    let internal_model_rwas = inputs.internal_model.rwas;

    let total_rwas = rwas.total();
    if !total_rwas.is_finite() {
        return Err(InputError::Overflow {
            field: "total_rwas",
        });
    }
    let output_floor_value = OUTPUT_FLOOR_PERCENTAGE * total_rwas;
    let usage = rwa_usage(output_floor_value, internal_model_rwas);

    let benefit = internal_model_rwas - output_floor_value;
    let threshold = cost_benefit_threshold(inputs.internal_model.costs);
    if !threshold.is_finite() {
        return Err(InputError::Overflow {
            field: "cost_benefit_threshold",
        });
    }
    let verdict = cost_verdict(benefit, threshold);

    Ok(OutputFloorResult {
        total_rwas,
        output_floor_value,
        max_allowed_internal_model_rwas: usage.max_allowed,
        chosen_rwa_value: usage.chosen_value,
        chosen_rwa_source: usage.source,
        benefit_from_internal_model: benefit,
        cost_benefit_threshold: threshold,
        is_internal_model_worth_it: verdict.is_worth_it(),
        explanation: verdict.explanation(),
    })
}

struct RwaUsage {
    max_allowed: f64,
    chosen_value: f64,
    source: RwaSource,
}

fn max_allowed_for_floor(output_floor_value: f64) -> f64 {
    (1.0 - MAX_BENEFIT_PERCENTAGE) * output_floor_value
}

fn rwa_usage(output_floor_value: f64, internal_model_rwas: f64) -> RwaUsage {
    let max_allowed = max_allowed_for_floor(output_floor_value);
    let (chosen_value, source) = if internal_model_rwas >= max_allowed {
        (internal_model_rwas, RwaSource::InternalModel)
    } else {
        (output_floor_value, RwaSource::OutputFloor)
    };
    RwaUsage {
        max_allowed,
        chosen_value,
        source,
    }
}

fn cost_benefit_threshold(internal_model_costs: f64) -> f64 {
    internal_model_costs / MAX_BENEFIT_PERCENTAGE
}

fn cost_verdict(benefit: f64, threshold: f64) -> CostVerdict {
    if benefit > threshold {
        CostVerdict::WorthIt
    } else {
        CostVerdict::NotWorthIt
    }
}
