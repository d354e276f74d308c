// ================================================
// PUBLIC FUNCTIONS
// ================================================

/// Round to whole currency units, half away from zero.
pub fn round_currency(value: f64) -> f64 {
    // Adding zero turns -0.0 into 0.0
    value.round() + 0.0
}

/// Round to one decimal place, half away from zero.
pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Earnings as a percentage of contributions.
///
/// Returns `0.0` when the rounded contributions are zero, so a payment that
/// rounds away never yields `NaN` or infinity.
pub fn return_rate_pct(earnings: f64, contributions: f64) -> f64 {
    if round_currency(contributions) == 0.0 {
        return 0.0;
    }
    round_one_decimal(earnings / contributions * 100.0)
}
