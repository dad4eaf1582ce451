//! Input validation for staffing problems.
//!
//! Checks structural integrity of the roster and backlog before
//! scheduling. Detects:
//! - Duplicate contributor or project names
//! - Projects with zero duration
//! - Projects without requirements
//! - Duplicate requirement skills, when the policy rejects them
//!
//! An unstaffable requirement (no contributor has the skill) is not an
//! error: the project simply never gets scheduled.

use std::collections::HashSet;

use crate::config::DuplicateSkillPolicy;
use crate::models::Repository;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two contributors or two projects share a name.
    DuplicateName,
    /// A project takes zero days.
    ZeroDuration,
    /// A project has no requirement slots.
    NoRequirements,
    /// A project lists the same skill twice.
    DuplicateRequirementSkill,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a repository.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_repository(
    repository: &Repository,
    duplicates: DuplicateSkillPolicy,
) -> ValidationResult {
    let mut errors = Vec::new();

    let mut contributor_names = HashSet::new();
    for c in &repository.contributors {
        if !contributor_names.insert(c.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateName,
                format!("Duplicate contributor name: {}", c.name),
            ));
        }
    }

    let mut project_names = HashSet::new();
    for p in &repository.projects {
        if !project_names.insert(p.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateName,
                format!("Duplicate project name: {}", p.name),
            ));
        }

        if p.duration == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroDuration,
                format!("Project '{}' has zero duration", p.name),
            ));
        }

        if p.requirements.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::NoRequirements,
                format!("Project '{}' has no requirements", p.name),
            ));
        }

        if duplicates == DuplicateSkillPolicy::Reject && p.has_duplicate_skills() {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateRequirementSkill,
                format!("Project '{}' requires the same skill more than once", p.name),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
