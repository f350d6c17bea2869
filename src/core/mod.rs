mod comparison;
mod constants;
mod engine;
mod error;
mod types;

pub use comparison::{
    ChartPoint, ComparisonBar, ComparisonChart, INTERNAL_MODELS_LABEL, OUTPUT_FLOOR_SERIES,
    RWAS_SERIES, STANDARDISED_APPROACH_LABEL, comparison_chart,
};
pub use constants::{MAX_BENEFIT_PERCENTAGE, OUTPUT_FLOOR_PERCENTAGE};
pub use engine::{
    compute_output_floor, determine_rwa_usage, evaluate, evaluate_internal_model_costs,
    max_allowed_internal_model_rwas, validate_inputs,
};
pub use error::InputError;
pub use types::{
    CostVerdict, InternalModelInputs, Inputs, OutputFloorResult, RwaInputs, RwaSource,
};
