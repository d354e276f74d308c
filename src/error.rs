use thiserror::Error;

/// Errors returned by the pension calculator.
#[derive(Debug, Error)]
pub enum PensionError {
    /// One or more inputs violate the calculator's constraints.
    ///
    /// The report lists every violated field, not only the first one.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] garde::Report),

    /// A calculator configuration could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

impl PensionError {
    /// Whether this error was raised by parameter validation.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, PensionError::InvalidInput(_))
    }
}
