#![deny(warnings)]
#![deny(rust_2018_idioms)]
#![deny(unsafe_op_in_unsafe_fn)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

//! # mx-validation
//!
//! Constraint validation for ISO 20022 record instances.
//!
//! Values are checked against the constraints extracted by `mx-schema`, at
//! three granularities: a single candidate value for one field, every field
//! of one record, and a whole message tree with path-attributed errors.
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! use mx_validation::{validate_message, ValidationConfig, Validator};
//!
//! // Stop at the first error
//! let result = validate_message(&document, true)?;
//! if !result.is_valid() {
//!     println!("{}", result.errors()[0]);
//! }
//!
//! // Collect everything, capped at 50 errors
//! let validator = Validator::with_config(ValidationConfig::collect_all().with_max_errors(50));
//! let report = validator.validate_message(&document)?.to_yaml()?;
//! ```

pub mod engine;
pub mod reporter;
pub mod result;
pub mod rules;

pub use engine::{ValidationConfig, Validator};
pub use mx_schema::{get_constraints, ConstraintKind, Facet, SchemaError};
pub use reporter::ValidationReporter;
pub use result::{ValidationError, ValidationResult};

use mx_ir::{Record, RecordType, Value};
use thiserror::Error;

/// Errors that prevent validation from running
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error("Field '{field}' not found in {type_name}")]
    UnknownField { type_name: String, field: String },

    #[error("Report rendering failed: {0}")]
    Report(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

fn validator(strict: bool) -> Validator {
    Validator::with_config(ValidationConfig {
        strict,
        ..ValidationConfig::default()
    })
}

/// Check one candidate value for one field of `record_type`, collecting all
/// violations. `None` is an absent value.
///
/// # Errors
///
/// Returns [`Error::UnknownField`] for a field the type does not declare and
/// [`Error::Schema`] when the type's constraints cannot be extracted.
pub fn validate_field(
    record_type: RecordType,
    field_name: &str,
    value: Option<&Value>,
) -> Result<ValidationResult> {
    Validator::new().validate_field(record_type, field_name, value)
}

/// Check the fields of one record without descending into nested records
///
/// # Errors
///
/// Returns [`Error::Schema`] when the record type's constraints cannot be
/// extracted.
pub fn validate_instance(instance: &dyn Record, strict: bool) -> Result<ValidationResult> {
    validator(strict).validate_instance(instance)
}

/// Check a record and every nested record and list element reachable from it
///
/// # Errors
///
/// Returns [`Error::Schema`] when constraints cannot be extracted for any
/// record type in the tree.
pub fn validate_message(instance: &dyn Record, strict: bool) -> Result<ValidationResult> {
    validator(strict).validate_message(instance)
}
