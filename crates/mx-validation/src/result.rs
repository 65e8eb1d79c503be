//! Validation outcome types

use mx_ir::{FieldPath, Value};
use mx_schema::{ConstraintKind, Facet};
use std::fmt;
use thiserror::Error;

/// One constraint violation
#[derive(Error, Debug, Clone, PartialEq)]
#[error("Field '{field_path}': {message}")]
pub struct ValidationError {
    /// Path of the offending value from the validation root
    pub field_path: FieldPath,
    /// The value that failed, if one was present
    pub value: Option<Value>,
    /// The constraint that was violated
    pub constraint: ConstraintKind,
    /// The facet of the constraint that was violated
    pub facet: Facet,
    /// Human-readable description
    pub message: String,
}

/// Outcome of one validation call
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationResult {
    errors: Vec<ValidationError>,
    warnings: Vec<String>,
}

impl ValidationResult {
    /// Create an empty (valid) result
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether no errors were recorded
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    #[must_use]
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Errors in discovery order
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    #[must_use]
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    #[must_use]
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// Errors for one facet, in discovery order
    pub fn errors_for(&self, facet: Facet) -> impl Iterator<Item = &ValidationError> {
        self.errors.iter().filter(move |e| e.facet == facet)
    }

    /// Errors attributed to exactly `path` (rendered form)
    pub fn errors_at<'a>(&'a self, path: &'a str) -> impl Iterator<Item = &'a ValidationError> {
        self.errors
            .iter()
            .filter(move |e| e.field_path.to_string() == path)
    }

    /// Append an error
    pub fn add_error(
        &mut self,
        field_path: FieldPath,
        value: Option<Value>,
        constraint: ConstraintKind,
        facet: Facet,
        message: impl Into<String>,
    ) {
        self.push(ValidationError {
            field_path,
            value,
            constraint,
            facet,
            message: message.into(),
        });
    }

    /// Append an already built error
    pub fn push(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Append a warning; validity is unaffected
    pub fn add_warning(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }

    /// Append all errors and warnings of `other` after our own
    pub fn merge(&mut self, other: ValidationResult) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() && self.warnings.is_empty() {
            return f.write_str("Validation passed");
        }
        if self.is_valid() {
            writeln!(f, "Validation passed")?;
        } else {
            writeln!(f, "Validation failed with {} error(s):", self.errors.len())?;
            for error in &self.errors {
                writeln!(f, "  - {error}")?;
            }
        }
        if !self.warnings.is_empty() {
            writeln!(f, "\nWarnings ({}):", self.warnings.len())?;
            for warning in &self.warnings {
                writeln!(f, "  - {warning}")?;
            }
        }
        Ok(())
    }
}
