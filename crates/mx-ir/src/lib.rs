#![deny(warnings)]
#![deny(rust_2018_idioms)]
#![deny(unsafe_op_in_unsafe_fn)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

//! # mx-ir
//!
//! Value model and record abstraction for schema-derived ISO 20022 messages.
//!
//! Record types produced by the message generator implement [`Record`] (the
//! object-safe accessor used while walking an instance tree) and
//! [`TypedRecord`] (the static half that carries the field metadata attached
//! at type-definition time). Constraint extraction and validation work
//! against these two traits, never against a concrete message type.

/// Raw per-field metadata attached to generated record types.
pub mod metadata;
/// Dotted/indexed addresses of values inside a message tree.
pub mod path;
/// Record traits, type identity and field accessors.
pub mod record;
/// Scalar values held by record fields.
pub mod value;

pub use metadata::{FieldMeta, FieldShape, MetaValue, ScalarType};
pub use path::{FieldPath, PathSegment};
pub use record::{Code, FieldValue, Record, RecordType, TypedRecord};
pub use value::Value;

/// Exact decimal used for amounts and numeric facets; keeps the written scale.
pub use rust_decimal::Decimal;

use thiserror::Error;

/// Errors that can occur when working with the value model
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid path '{path}': {reason}")]
    InvalidPath { path: String, reason: String },
}

impl Error {
    /// Build an invalid-path error with input path and parsing reason.
    pub fn invalid_path(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidPath {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

/// Crate-local result type for value model operations.
pub type Result<T> = std::result::Result<T, Error>;
