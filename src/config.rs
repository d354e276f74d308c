//! # Calculator Configuration (CalculatorConfig)
//!
//! Settings shared by the comparison sweep and the combined savings plan.
//!
//! ## Quick Start
//! ```rust
//! # use rspension::prelude::*;
//! // Defaults: starting ages 25, 30, ..., 55 and a minimum saving age of 18
//! let config = CalculatorConfig::builder().build()?;
//! assert_eq!(config.candidate_ages, vec![25, 30, 35, 40, 45, 50, 55]);
//!
//! // Load from JSON, missing fields fall back to the defaults
//! let config = CalculatorConfig::from_json_str(r#"{ "candidateAges": [20, 40, 60] }"#)?;
//! assert_eq!(config.min_start_age, 18);
//! # PensionResult::Ok(())
//! ```
//!
//! ## Configuration Options
//! - **candidate_ages**: Starting ages compared by [`crate::calculator::sweep_by_start_age`], in display order
//! - **min_start_age**: Youngest age at which saving may start, never below [`MIN_START_AGE`]

use crate::PensionResult;
use crate::params::{MAX_AGE, MIN_START_AGE, validate_min_start_age};
use bon::bon;
use garde::Validate;
use serde::{Deserialize, Serialize};

/// Starting ages compared when no other list is configured.
pub const DEFAULT_CANDIDATE_AGES: [u32; 7] = [25, 30, 35, 40, 45, 50, 55];

#[derive(Debug, Clone, PartialEq, Eq, Validate, Serialize, Deserialize)]
#[garde(allow_unvalidated)]
#[serde(default, rename_all = "camelCase")]
pub struct CalculatorConfig {
    /// Starting ages to compare. Order is preserved in the output.
    #[garde(length(min = 1), custom(validate_candidate_ages))]
    pub candidate_ages: Vec<u32>,

    /// Youngest age at which saving may start.
    #[garde(custom(validate_min_start_age))]
    pub min_start_age: u32,
}

/// Custom validation function for candidate_ages field
#[allow(clippy::ptr_arg)]
fn validate_candidate_ages(value: &Vec<u32>, _context: &()) -> garde::Result {
    if let Some(age) = value.iter().find(|age| **age > MAX_AGE) {
        return Err(garde::Error::new(format!(
            "candidate age {age} cannot exceed {MAX_AGE}"
        )));
    }
    Ok(())
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        CalculatorConfig {
            candidate_ages: DEFAULT_CANDIDATE_AGES.to_vec(),
            min_start_age: MIN_START_AGE,
        }
    }
}

#[bon]
impl CalculatorConfig {
    #[builder]
    pub fn new(
        #[builder(default = DEFAULT_CANDIDATE_AGES.to_vec())] candidate_ages: Vec<u32>,
        #[builder(default = MIN_START_AGE)] min_start_age: u32,
    ) -> PensionResult<Self> {
        let config = CalculatorConfig {
            candidate_ages,
            min_start_age,
        };
        config.validate_all()?;
        Ok(config)
    }

    /// Parse a configuration from JSON and validate it.
    pub fn from_json_str(json: &str) -> PensionResult<Self> {
        let config: CalculatorConfig = serde_json::from_str(json)?;
        config.validate_all()?;
        log::debug!(
            "Loaded calculator config: {} candidate ages, min start age {}",
            config.candidate_ages.len(),
            config.min_start_age
        );
        Ok(config)
    }

    /// Validate with cross-field validation using Result<(), garde::Report>
    pub fn validate_all(&self) -> Result<(), garde::Report> {
        self.validate()?;

        // Every candidate must be a start age the sweep will accept
        let mut report = garde::Report::new();
        let min_start_age = self.min_start_age;
        for age in self.candidate_ages.iter().filter(|age| **age < min_start_age) {
            report.append(
                garde::Path::new("candidate_ages"),
                garde::Error::new(format!(
                    "candidate age {age} cannot be less than min_start_age {min_start_age}"
                )),
            );
        }

        if report.is_empty() {
            Ok(())
        } else {
            Err(report)
        }
    }
}
