//! # Pension Savings Calculator
//!
//! Required monthly contribution to reach a savings target by retirement,
//! compared across starting ages and projected year by year.
//!
//! Every calculation assumes an ordinary annuity: level contributions paid at
//! the end of each month, compounded monthly at `annual_return_rate / 12`.
//! Solving for the payment ([`compute_payment`]) and projecting forward
//! ([`project_growth_series`]) share the same accumulation factor
//! [`sn`](crate::annuities_certain::sn), so the two always agree.
//!
//! ## Quick Start
//! ```rust
//! # use rspension::prelude::*;
//! let result = compute_payment()
//!     .start_age(30)
//!     .end_age(60)
//!     .target_amount(1_000_000.0)
//!     .annual_return_rate(0.08)
//!     .call()?;
//! assert_eq!(result.monthly_payment, 671.0);
//!
//! let comparison = sweep_by_start_age()
//!     .end_age(60)
//!     .target_amount(1_000_000.0)
//!     .annual_return_rate(0.08)
//!     .current_age(30)
//!     .call()?;
//! assert_eq!(comparison.len(), 7);
//! # PensionResult::Ok(())
//! ```

use crate::PensionResult;
use crate::annuities_certain::{pmt_for_fv, sn};
use crate::config::CalculatorConfig;
use crate::helpers::{return_rate_pct, round_currency};
use crate::int_rate_convert::{MONTHS_PER_YEAR, annual_to_monthly_rate};
use crate::params::{GrowthParams, MIN_START_AGE, PaymentParams, SweepParams};
use bon::builder;
use serde::Serialize;

// ================================================
// RESULT TYPES
// ================================================

/// Summary of the contribution needed to reach a savings target.
///
/// Currency amounts are rounded to whole units. Formatting them for display
/// is left to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    /// Constant contribution paid at the end of every month.
    pub monthly_payment: f64,
    /// Sum of all contributions over the saving period.
    pub total_contributions: f64,
    /// Part of the target produced by investment returns.
    pub total_earnings: f64,
    /// Earnings as a percentage of contributions, one decimal place.
    /// `0.0` when contributions round to zero.
    pub return_rate_percent: f64,
    pub years: u32,
    pub total_months: u32,
}

/// One row of the starting-age comparison.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgeComparison {
    pub age: u32,
    /// Set on the row matching the saver's own age.
    pub is_current_age: bool,
    pub result: CalculationResult,
}

/// Savings position at a whole year of the saving period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthPoint {
    pub age: u32,
    pub total_contributions: f64,
    pub total_earnings: f64,
    pub total_value: f64,
}

/// Everything a results view needs for one saver.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsPlan {
    pub result: CalculationResult,
    pub comparison: Vec<AgeComparison>,
    pub growth: Vec<GrowthPoint>,
}

// ================================================
// PUBLIC FUNCTIONS
// ================================================

/// Monthly contribution required to accumulate `target_amount` by `end_age`.
///
/// # Formula
/// ```text
/// PMT = FV / sₙ,   sₙ = ((1 + r)ⁿ - 1) / r,   r = i / 12,   n = 12 · (end_age - start_age)
/// ```
/// With `i = 0` the factor reduces to `n` and the target is split evenly over
/// the months.
///
/// # Parameters
/// - `start_age`: Age of the first contribution, at least `min_start_age` (default 18)
/// - `end_age`: Retirement age, greater than `start_age`
/// - `target_amount`: Savings wanted at `end_age`, positive
/// - `annual_return_rate`: Nominal annual return as a fraction, non-negative
/// - `min_start_age`: Youngest allowed start age (default 18)
///
/// # Errors
/// [`PensionError::InvalidInput`](crate::PensionError::InvalidInput) when any
/// constraint is violated. Nothing is computed in that case.
#[builder]
pub fn compute_payment(
    start_age: u32,
    end_age: u32,
    target_amount: f64,
    annual_return_rate: f64,
    #[builder(default = MIN_START_AGE)] min_start_age: u32,
) -> PensionResult<CalculationResult> {
    let params = PaymentParams {
        start_age,
        end_age,
        target_amount,
        annual_return_rate,
        min_start_age,
    };
    params.validate_all()?;

    let years = end_age - start_age;
    let total_months = years * MONTHS_PER_YEAR;
    let monthly_rate = annual_to_monthly_rate(annual_return_rate);

    let monthly_payment = pmt_for_fv()
        .fv(target_amount)
        .i(monthly_rate)
        .n(total_months)
        .call()?;
    let total_contributions = monthly_payment * total_months as f64;
    let total_earnings = target_amount - total_contributions;

    let result = CalculationResult {
        monthly_payment: round_currency(monthly_payment),
        total_contributions: round_currency(total_contributions),
        total_earnings: round_currency(total_earnings),
        return_rate_percent: return_rate_pct(total_earnings, total_contributions),
        years,
        total_months,
    };

    log::debug!(
        "Payment for {target_amount} from age {start_age} to {end_age} at {annual_return_rate}: {}/month",
        result.monthly_payment
    );
    Ok(result)
}

/// Compare the required contribution across starting ages.
///
/// Ages at or above `end_age` are skipped, the rest keep their input order.
/// Starting earlier never needs a larger payment than starting later.
///
/// # Parameters
/// - `end_age`, `target_amount`, `annual_return_rate`: As for [`compute_payment`]
/// - `candidate_ages`: Ages to compare, taken from `config` when omitted
/// - `current_age`: Flags the matching row when given
/// - `config`: Candidate ages and minimum age, [`CalculatorConfig::default`] when omitted
///
/// # Errors
/// [`PensionError::InvalidInput`](crate::PensionError::InvalidInput) when the
/// shared inputs are invalid, even if no candidate is kept, or when a kept
/// candidate is under the minimum age.
#[builder]
pub fn sweep_by_start_age(
    end_age: u32,
    target_amount: f64,
    annual_return_rate: f64,
    candidate_ages: Option<Vec<u32>>,
    current_age: Option<u32>,
    config: Option<&CalculatorConfig>,
) -> PensionResult<Vec<AgeComparison>> {
    let params = SweepParams {
        end_age,
        target_amount,
        annual_return_rate,
    };
    params.validate_all()?;

    let default_config = CalculatorConfig::default();
    let config = config.unwrap_or(&default_config);
    let ages = candidate_ages.unwrap_or_else(|| config.candidate_ages.clone());

    let comparison = ages
        .into_iter()
        .filter(|age| *age < end_age)
        .map(|age| -> PensionResult<AgeComparison> {
            let result = compute_payment()
                .start_age(age)
                .end_age(end_age)
                .target_amount(target_amount)
                .annual_return_rate(annual_return_rate)
                .min_start_age(config.min_start_age)
                .call()?;
            Ok(AgeComparison {
                age,
                is_current_age: current_age == Some(age),
                result,
            })
        })
        .collect::<PensionResult<Vec<_>>>()?;

    log::debug!(
        "Compared {} starting ages for retirement at {end_age}",
        comparison.len()
    );
    Ok(comparison)
}

/// Year-by-year accumulation of a fixed monthly contribution.
///
/// Produces one point per whole year from `start_age` to `end_age` inclusive.
///
/// # Formula
/// ```text
/// contributions(t) = PMT · 12t
/// value(t)         = PMT · s₁₂ₜ   (0 at t = 0)
/// earnings(t)      = value(t) - contributions(t)
/// ```
/// Amounts are rounded to whole currency units.
///
/// # Errors
/// [`PensionError::InvalidInput`](crate::PensionError::InvalidInput) when
/// `end_age <= start_age`, the payment is negative or not finite, or the rate
/// is negative or not finite.
#[builder]
pub fn project_growth_series(
    start_age: u32,
    end_age: u32,
    monthly_payment: f64,
    annual_return_rate: f64,
) -> PensionResult<Vec<GrowthPoint>> {
    let params = GrowthParams {
        start_age,
        end_age,
        monthly_payment,
        annual_return_rate,
    };
    params.validate_all()?;

    let monthly_rate = annual_to_monthly_rate(annual_return_rate);
    let years = end_age - start_age;

    let mut series = Vec::with_capacity(years as usize + 1);
    for year in 0..=years {
        let months = year * MONTHS_PER_YEAR;
        let total_contributions = monthly_payment * months as f64;
        let total_value = monthly_payment * sn().i(monthly_rate).n(months).call()?;
        let total_earnings = total_value - total_contributions;

        log::trace!("Age {}: value {total_value:.2}", start_age + year);
        series.push(GrowthPoint {
            age: start_age + year,
            total_contributions: round_currency(total_contributions),
            total_earnings: round_currency(total_earnings),
            total_value: round_currency(total_value),
        });
    }

    Ok(series)
}

/// Payment, starting-age comparison and growth series in one call.
///
/// The comparison flags `start_age` as the saver's own age, and the growth
/// series projects the rounded monthly payment the saver would actually pay.
#[builder]
pub fn savings_plan(
    start_age: u32,
    end_age: u32,
    target_amount: f64,
    annual_return_rate: f64,
    config: Option<&CalculatorConfig>,
) -> PensionResult<SavingsPlan> {
    let default_config = CalculatorConfig::default();
    let config = config.unwrap_or(&default_config);

    let result = compute_payment()
        .start_age(start_age)
        .end_age(end_age)
        .target_amount(target_amount)
        .annual_return_rate(annual_return_rate)
        .min_start_age(config.min_start_age)
        .call()?;

    let comparison = sweep_by_start_age()
        .end_age(end_age)
        .target_amount(target_amount)
        .annual_return_rate(annual_return_rate)
        .current_age(start_age)
        .config(config)
        .call()?;

    let growth = project_growth_series()
        .start_age(start_age)
        .end_age(end_age)
        .monthly_payment(result.monthly_payment)
        .annual_return_rate(annual_return_rate)
        .call()?;

    Ok(SavingsPlan {
        result,
        comparison,
        growth,
    })
}
