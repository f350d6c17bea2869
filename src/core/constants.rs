/// Share of the standardised-approach RWA total that forms the output floor (72.5%).
pub const OUTPUT_FLOOR_PERCENTAGE: f64 = 0.725;

/// Largest capital benefit an internal model may deliver below the floor (27.5%).
pub const MAX_BENEFIT_PERCENTAGE: f64 = 0.275;
