//! Error taxonomy.
//!
//! Only configuration problems are errors. A run that exceeds its time limit
//! is a normal [`SimulationOutcome::TimedOut`](crate::models::SimulationOutcome)
//! result carrying partial data.

use thiserror::Error;

use crate::validation::ValidationError;

#[derive(Debug, Error)]
pub enum ForecastError {
    #[error("invalid forecast input: {}", summarize(.0))]
    InvalidInput(Vec<ValidationError>),

    #[error("failed to parse forecast request: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type ForecastResult<T> = Result<T, ForecastError>;

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_invalid_input_message_lists_problems() {
        let err = ForecastError::InvalidInput(vec![
            ValidationError::new(ValidationErrorKind::NonPositiveCount, "no designers"),
            ValidationError::new(ValidationErrorKind::EmptyProject, "Website 2 has no pages"),
        ]);
        assert_eq!(
            err.to_string(),
            "invalid forecast input: no designers; Website 2 has no pages"
        );
    }

    #[test]
    fn test_parse_error_converts() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: ForecastError = json_err.into();
        assert!(matches!(err, ForecastError::Parse(_)));
    }
}
