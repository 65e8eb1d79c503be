#![deny(warnings)]
#![deny(rust_2018_idioms)]
#![deny(unsafe_op_in_unsafe_fn)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

//! # mx-messages
//!
//! ISO 20022 message record types in the shape the message generator emits:
//! plain structs with optional and repeated fields, a [`mx_ir::Record`]
//! implementation exposing each field by name, and static
//! [`mx_ir::FieldMeta`] carrying the XSD facets.
//!
//! Field names are the snake_case forms of the XML element names
//! (`GrpHdr` becomes `grp_hdr`).

pub mod pacs_008_001_08;

pub use pacs_008_001_08 as pacs_008;
