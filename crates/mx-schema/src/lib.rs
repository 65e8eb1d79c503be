#![deny(warnings)]
#![deny(rust_2018_idioms)]
#![deny(unsafe_op_in_unsafe_fn)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

//! # mx-schema
//!
//! Constraint model and schema introspection for ISO 20022 record types.
//!
//! Generated record types carry raw per-field metadata ([`mx_ir::FieldMeta`]).
//! This crate translates that metadata once per type into a typed
//! [`RecordSchema`] and caches it process-wide, keyed by type identity.
//!
//! ```rust,ignore
//! use mx_ir::RecordType;
//!
//! let schema = mx_schema::get_constraints(RecordType::of::<PaymentIdentification7>())?;
//! let uetr = schema.field("uetr").unwrap();
//! assert!(uetr.pattern().is_some());
//! ```

pub mod introspect;
pub mod model;
pub mod registry;

pub use introspect::build_schema;
pub use model::{
    AllowedValues, ConstraintKind, Facet, FieldDescriptor, FieldKind, Pattern, RecordSchema,
};
pub use registry::SchemaRegistry;

use mx_ir::{RecordType, TypedRecord};
use std::sync::Arc;
use thiserror::Error;

/// Errors raised while extracting constraints from a record type
#[derive(Error, Debug, Clone)]
pub enum SchemaError {
    #[error("Record type {type_name} carries no field metadata")]
    NoFieldMetadata { type_name: String },

    #[error("Invalid metadata on {type_name}.{field}: {reason}")]
    InvalidMetadata {
        type_name: String,
        field: String,
        reason: String,
    },

    #[error("Invalid pattern '{pattern}' on {type_name}.{field}: {source}")]
    InvalidPattern {
        type_name: String,
        field: String,
        pattern: String,
        source: regex::Error,
    },

    #[error("Duplicate field '{field}' in {type_name}")]
    DuplicateField { type_name: String, field: String },
}

impl SchemaError {
    /// Build an invalid-metadata error for one field
    pub fn invalid_metadata(
        record_type: RecordType,
        field: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidMetadata {
            type_name: record_type.name().to_string(),
            field: field.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SchemaError>;

/// Constraint schema of a record type, from the process-wide cache
///
/// # Errors
///
/// Returns a [`SchemaError`] when the type carries no usable field metadata.
pub fn get_constraints(record_type: RecordType) -> Result<Arc<RecordSchema>> {
    registry::global().get_or_build(record_type)
}

/// Constraint schema of `R`, from the process-wide cache
///
/// # Errors
///
/// Returns a [`SchemaError`] when the type carries no usable field metadata.
pub fn get_constraints_of<R: TypedRecord>() -> Result<Arc<RecordSchema>> {
    get_constraints(RecordType::of::<R>())
}
