use bon::Builder;
use garde::Validate;

/// Youngest age at which saving may start.
pub const MIN_START_AGE: u32 = 18;

/// Oldest age any calculation accepts.
pub const MAX_AGE: u32 = 150;

// =======================================
// PAYMENT PARAMETER STRUCT
// =======================================
#[derive(Debug, Clone, Validate, Builder)]
#[garde(allow_unvalidated)]
pub struct PaymentParams {
    // Age when contributions start
    // Lower bound is checked against min_start_age in the cross-field pass
    #[garde(range(max = 150))]
    pub start_age: u32,

    // Retirement age - must be greater than start_age
    #[garde(range(max = 150))]
    pub end_age: u32,

    // Savings balance wanted at end_age
    pub target_amount: f64,

    // Annual return as a fraction, 0.08 for 8%
    pub annual_return_rate: f64,

    // Youngest allowed start age, MIN_START_AGE unless configured higher
    #[builder(default = MIN_START_AGE)]
    #[garde(custom(validate_min_start_age))]
    pub min_start_age: u32,
}

impl PaymentParams {
    /// Validate with cross-field validation using Result<(), garde::Report>
    pub fn validate_all(&self) -> Result<(), garde::Report> {
        // First run garde's built-in validations
        self.validate()?;

        // Then run our custom cross-field validations
        self.validate_custom_constraints()
    }

    /// Custom cross-field validations that garde can't handle with attributes
    fn validate_custom_constraints(&self) -> Result<(), garde::Report> {
        let mut errors: ErrorVec = Vec::new();

        validate_start_age(self.start_age, self.min_start_age, &mut errors);
        validate_age_order(self.start_age, self.end_age, &mut errors);

        validate_target(self.target_amount, &mut errors);
        validate_rate(self.annual_return_rate, &mut errors);

        into_report(errors)
    }
}

// =======================================
// START-AGE SWEEP PARAMETER STRUCT
// =======================================
#[derive(Debug, Clone, Validate, Builder)]
#[garde(allow_unvalidated)]
pub struct SweepParams {
    // Retirement age shared by every compared start age
    #[garde(range(max = 150))]
    pub end_age: u32,

    // Savings balance wanted at end_age
    pub target_amount: f64,

    // Annual return as a fraction
    pub annual_return_rate: f64,
}

impl SweepParams {
    /// Validate with cross-field validation using Result<(), garde::Report>
    pub fn validate_all(&self) -> Result<(), garde::Report> {
        self.validate()?;
        self.validate_custom_constraints()
    }

    fn validate_custom_constraints(&self) -> Result<(), garde::Report> {
        let mut errors: ErrorVec = Vec::new();

        validate_target(self.target_amount, &mut errors);
        validate_rate(self.annual_return_rate, &mut errors);

        into_report(errors)
    }
}

// =======================================
// GROWTH SERIES PARAMETER STRUCT
// =======================================
#[derive(Debug, Clone, Validate, Builder)]
#[garde(allow_unvalidated)]
pub struct GrowthParams {
    // Age at year 0 of the series
    #[garde(range(max = 150))]
    pub start_age: u32,

    // Age at the last point of the series
    #[garde(range(max = 150))]
    pub end_age: u32,

    // Contribution paid at the end of every month
    pub monthly_payment: f64,

    // Annual return as a fraction
    pub annual_return_rate: f64,
}

impl GrowthParams {
    /// Validate with cross-field validation using Result<(), garde::Report>
    pub fn validate_all(&self) -> Result<(), garde::Report> {
        self.validate()?;
        self.validate_custom_constraints()
    }

    fn validate_custom_constraints(&self) -> Result<(), garde::Report> {
        let mut errors: ErrorVec = Vec::new();

        validate_age_order(self.start_age, self.end_age, &mut errors);

        let payment = self.monthly_payment;
        if !payment.is_finite() || payment < 0.0 {
            errors.push((
                "monthly_payment",
                format!("monthly_payment {payment} must be a non-negative finite amount"),
            ));
        }

        validate_rate(self.annual_return_rate, &mut errors);

        into_report(errors)
    }
}

// =======================================
// PRIVATE FUNCTIONS
// =======================================

type ErrorVec = Vec<(&'static str, String)>;

/// Custom validation function for min_start_age fields
pub(crate) fn validate_min_start_age(value: &u32, _context: &()) -> garde::Result {
    if *value < MIN_START_AGE || *value > MAX_AGE {
        return Err(garde::Error::new(format!(
            "min_start_age {value} must be between {MIN_START_AGE} and {MAX_AGE}"
        )));
    }
    Ok(())
}

fn validate_target(target: f64, errors: &mut ErrorVec) {
    if !target.is_finite() || target <= 0.0 {
        errors.push((
            "target_amount",
            format!("target_amount {target} must be a positive finite amount"),
        ));
    }
}

fn validate_start_age(start_age: u32, min_start_age: u32, errors: &mut ErrorVec) {
    if start_age < min_start_age {
        errors.push((
            "start_age",
            format!("start_age {start_age} cannot be less than minimum age {min_start_age}"),
        ));
    }
}

fn validate_age_order(start_age: u32, end_age: u32, errors: &mut ErrorVec) {
    // Also rules out a zero-month horizon
    if end_age <= start_age {
        errors.push((
            "end_age",
            format!("end_age {end_age} must be greater than start_age {start_age}"),
        ));
    }
}

fn validate_rate(rate: f64, errors: &mut ErrorVec) {
    if !rate.is_finite() || rate < 0.0 {
        errors.push((
            "annual_return_rate",
            format!("annual_return_rate {rate} must be a non-negative finite rate"),
        ));
    }
}

fn into_report(errors: ErrorVec) -> Result<(), garde::Report> {
    let mut report = garde::Report::new();
    for (path, message) in errors {
        report.append(garde::Path::new(path), garde::Error::new(message));
    }

    if report.is_empty() {
        Ok(())
    } else {
        Err(report)
    }
}
