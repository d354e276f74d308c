//! # RSPension Prelude
//!
//! Conveniently re-exports the most common types and functions for pension calculations.
//! Import this module to access all primary RSPension features with a single `use` statement.
//!
//! ## Example
//!
//! ```rust
//! # use rspension::prelude::*;
//! let config = CalculatorConfig::builder()
//!     .candidate_ages(vec![25, 35, 45])
//!     .build()?;
//! let plan = savings_plan()
//!     .start_age(35)
//!     .end_age(67)
//!     .target_amount(500_000.0)
//!     .annual_return_rate(0.05)
//!     .config(&config)
//!     .call()?;
//! println!("Monthly payment: {}", plan.result.monthly_payment);
//! # PensionResult::Ok(())
//! ```

// Package Result and error types
pub use crate::{PensionError, PensionResult};

// Interest rate conversion functions
pub use crate::int_rate_convert::*;

// Certain annuities
pub use crate::annuities_certain::*;

// Calculator functions and result types
pub use crate::calculator::*;

// Configuration
pub use crate::config::{CalculatorConfig, DEFAULT_CANDIDATE_AGES};
pub use crate::params::{MAX_AGE, MIN_START_AGE};
