//! # RSPension
//!
//! A small, type-safe Rust library for pension savings calculations.
//!
//! ## Features
//! - **Required Contribution**: Monthly payment needed to reach a savings target by retirement
//! - **Start-Age Comparison**: The same target compared across a set of starting ages
//! - **Growth Projection**: Year-by-year contributions, earnings and value for charting
//! - **Builder Pattern**: All functions use builder pattern with automatic parameter validation
//!
//! ## Quick Start
//!
//! ```rust
//! use rspension::prelude::*;
//!
//! // 8% return, saving from 30 until 60
//! let result = compute_payment()
//!     .start_age(30)
//!     .end_age(60)
//!     .target_amount(1_000_000.0)
//!     .annual_return_rate(pct_to_rate(8.0))
//!     .call()?;
//!
//! let growth = project_growth_series()
//!     .start_age(30)
//!     .end_age(60)
//!     .monthly_payment(result.monthly_payment)
//!     .annual_return_rate(0.08)
//!     .call()?;
//!
//! println!("Monthly payment: {}", result.monthly_payment);
//! println!("Value at 60: {}", growth.last().unwrap().total_value);
//! # PensionResult::Ok(())
//! ```
//!
//! ## Supported Functions
//!
//! - **Calculator**: `compute_payment`, `sweep_by_start_age`, `project_growth_series`, `savings_plan`
//! - **Annuities Certain**: `sn`, `pmt_for_fv`
//! - **Interest Rate Conversions**: percentages, nominal monthly and effective rates
//!
//! ## Notes
//! - Contributions are paid at the end of each month, compounded at `annual_return_rate / 12`
//! - Currency amounts are rounded to whole units; formatting is left to the caller
//! - Invalid inputs return [`PensionError::InvalidInput`] before anything is computed

pub type PensionResult<T> = Result<T, PensionError>;
pub use error::PensionError;

pub mod annuities_certain;
pub mod calculator;
pub mod config;
mod error;
pub mod helpers;
pub mod int_rate_convert;
pub mod params;
pub mod prelude;
