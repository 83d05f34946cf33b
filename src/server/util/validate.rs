//! Explicit request validation.
//!
//! Request DTOs implement [`Validate`] and are checked by the boundary before any
//! service is called. Rules collect violations instead of stopping at the first,
//! so a client sees everything wrong with a body in one response.

use crate::{model::api::FieldViolationDto, server::error::validation::ValidationError};

pub trait Validate {
    /// Returns every rule the value breaks; empty when the value is valid.
    fn violations(&self) -> Vec<FieldViolationDto>;

    fn validate(&self) -> Result<(), ValidationError> {
        let violations = self.violations();
        if violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::InvalidFields(violations))
        }
    }
}

/// Records a violation when `value` is empty.
pub fn require_not_empty(field: &str, value: &str, violations: &mut Vec<FieldViolationDto>) {
    if value.is_empty() {
        violations.push(FieldViolationDto {
            field: field.to_string(),
            message: format!("{field} should not be empty"),
        });
    }
}

/// Records a violation when `value` has fewer than `min` characters.
pub fn require_min_length(
    field: &str,
    value: &str,
    min: usize,
    violations: &mut Vec<FieldViolationDto>,
) {
    if value.chars().count() < min {
        violations.push(FieldViolationDto {
            field: field.to_string(),
            message: format!("{field} must be longer than or equal to {min} characters"),
        });
    }
}
