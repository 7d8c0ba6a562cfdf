//! Input validation for forecast requests.
//!
//! Checks a request before planning and reports every problem found:
//! - Non-positive resource counts
//! - Non-positive or non-finite efforts
//! - Projects without pages
//! - Duplicate project IDs
//! - Unusable simulation parameters
//!
//! The planner and simulation themselves never reject input; a request
//! that skips validation simply runs (and may time out).

use std::collections::HashSet;

use thiserror::Error;

use crate::config::{ForecastRequest, SimulationConfig};
use crate::models::{Project, ResourceCategory, ResourceCounts, Stage, StageEfforts};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A resource category has no units.
    NonPositiveCount,
    /// A stage effort is zero, negative, or not finite.
    NonPositiveEffort,
    /// A project has zero pages.
    EmptyProject,
    /// Two projects share the same ID.
    DuplicateId,
    /// Time step, time limit, or concurrency cap is unusable.
    InvalidConfig,
}

impl ValidationError {
    pub fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a complete forecast request.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_request(request: &ForecastRequest) -> ValidationResult {
    let mut errors = Vec::new();

    check_resources(&request.resources, &mut errors);
    check_efforts(&request.efforts, &mut errors);
    check_projects(&request.projects, &mut errors);
    check_config(&request.config, &mut errors);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_resources(counts: &ResourceCounts, errors: &mut Vec<ValidationError>) {
    for category in ResourceCategory::ALL {
        if counts.get(category) == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveCount,
                format!("Resource category '{category}' has no units"),
            ));
        }
    }
}

fn check_efforts(efforts: &StageEfforts, errors: &mut Vec<ValidationError>) {
    for stage in Stage::PAGE_CHAIN.into_iter().chain([Stage::Finalize]) {
        let effort = efforts.get(stage);
        // Written negated so NaN is rejected too.
        if !(effort > 0.0 && effort.is_finite()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveEffort,
                format!("Effort for stage '{stage}' must be positive and finite, got {effort}"),
            ));
        }
    }
}

fn check_projects(projects: &[Project], errors: &mut Vec<ValidationError>) {
    let mut ids = HashSet::new();
    for project in projects {
        if !ids.insert(project.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate project ID: {}", project.id),
            ));
        }
        if project.pages == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyProject,
                format!("Project '{}' has no pages", project.display_name()),
            ));
        }
    }
}

/// Validates only the loop parameters.
///
/// Used when a plan is built by hand and skips request validation.
pub fn validate_config(config: &SimulationConfig) -> ValidationResult {
    let mut errors = Vec::new();
    check_config(config, &mut errors);
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_config(config: &SimulationConfig, errors: &mut Vec<ValidationError>) {
    if !(config.time_step > 0.0 && config.time_step.is_finite()) {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidConfig,
            format!("Time step must be positive and finite, got {}", config.time_step),
        ));
    }
    if !(config.time_limit >= 0.0 && config.time_limit.is_finite()) {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidConfig,
            format!("Time limit must be non-negative and finite, got {}", config.time_limit),
        ));
    }
    if config.max_active_projects == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidConfig,
            "At least one project must be allowed to be active",
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn has_kind(errors: &[ValidationError], kind: ValidationErrorKind) -> bool {
        errors.iter().any(|e| e.kind == kind)
    }

    #[test]
    fn test_default_request_is_valid() {
        assert!(validate_request(&ForecastRequest::default()).is_ok());
    }

    #[test]
    fn test_zero_resource_count() {
        let mut r = ForecastRequest::default();
        r.resources.front_end_build = 0;
        let errors = validate_request(&r).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::NonPositiveCount);
        assert!(errors[0].message.contains("Front-End-Build"));
    }

    #[test]
    fn test_non_positive_efforts() {
        let mut r = ForecastRequest::default();
        r.efforts.content = 0.0;
        r.efforts.finalize = -1.0;
        r.efforts.design = f64::NAN;
        let errors = validate_request(&r).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors
            .iter()
            .all(|e| e.kind == ValidationErrorKind::NonPositiveEffort));
    }

    #[test]
    fn test_infinite_effort_rejected() {
        let mut r = ForecastRequest::default();
        r.efforts.platform_build = f64::INFINITY;
        let errors = validate_request(&r).unwrap_err();
        assert!(has_kind(&errors, ValidationErrorKind::NonPositiveEffort));
    }

    #[test]
    fn test_empty_project() {
        let r = ForecastRequest::default().with_sites(&[3, 0]);
        let errors = validate_request(&r).unwrap_err();
        assert!(has_kind(&errors, ValidationErrorKind::EmptyProject));
        assert!(errors[0].message.contains("Website 2"));
    }

    #[test]
    fn test_duplicate_project_id() {
        let r = ForecastRequest::new(
            ResourceCounts::uniform(1),
            vec![Project::new(1, 2), Project::new(1, 3)],
        );
        let errors = validate_request(&r).unwrap_err();
        assert!(has_kind(&errors, ValidationErrorKind::DuplicateId));
    }

    #[test]
    fn test_invalid_config() {
        let r = ForecastRequest::default().with_config(
            SimulationConfig::default()
                .with_time_step(0.0)
                .with_time_limit(f64::NAN)
                .with_max_active_projects(0),
        );
        let errors = validate_request(&r).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors
            .iter()
            .all(|e| e.kind == ValidationErrorKind::InvalidConfig));
    }

    #[test]
    fn test_validate_config_alone() {
        assert!(validate_config(&SimulationConfig::default()).is_ok());
        let errors =
            validate_config(&SimulationConfig::default().with_time_step(-0.5)).unwrap_err();
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_multiple_errors() {
        let mut r = ForecastRequest::default().with_sites(&[0]);
        r.resources = ResourceCounts::uniform(0);
        let errors = validate_request(&r).unwrap_err();
        // Four empty categories plus one empty project.
        assert_eq!(errors.len(), 5);
    }

    #[test]
    fn test_empty_portfolio_is_valid() {
        let r = ForecastRequest::new(ResourceCounts::default(), Vec::new());
        assert!(validate_request(&r).is_ok());
    }
}
