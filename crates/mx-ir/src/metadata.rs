//! Raw field metadata attached to generated record types
//!
//! The message generator emits one [`FieldMeta`] per field: its name, its
//! structural shape and an ordered list of facet entries keyed the way the
//! generator names them (`min_length`, `pattern`, `min_occurs`, ...). The
//! entries are untyped static data; `mx-schema` turns them into typed
//! constraints.

use crate::record::RecordType;

/// Lexical type of a scalar field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarType {
    Text,
    Integer,
    Decimal,
    Boolean,
    Date,
    Time,
    DateTime,
    Binary,
}

impl ScalarType {
    /// Whether numeric facets (bounds, digit counts) make sense for this type.
    #[must_use]
    pub fn is_numeric(self) -> bool {
        matches!(self, ScalarType::Integer | ScalarType::Decimal)
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            ScalarType::Text => "string",
            ScalarType::Integer => "integer",
            ScalarType::Decimal => "decimal",
            ScalarType::Boolean => "boolean",
            ScalarType::Date => "date",
            ScalarType::Time => "time",
            ScalarType::DateTime => "dateTime",
            ScalarType::Binary => "base64Binary",
        }
    }
}

/// A single metadata value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaValue {
    Bool(bool),
    Int(i64),
    /// Text, also used for decimal bounds so they keep their exact digits
    Text(&'static str),
}

/// Structural shape of a field
#[derive(Debug, Clone, Copy)]
pub enum FieldShape {
    /// Single scalar value
    Scalar(ScalarType),
    /// Single code from a closed code set
    Enum(&'static [&'static str]),
    /// Single nested record
    Record(fn() -> RecordType),
    /// Repeated scalar values
    ScalarList(ScalarType),
    /// Repeated nested records
    RecordList(fn() -> RecordType),
}

impl FieldShape {
    #[must_use]
    pub fn is_list(&self) -> bool {
        matches!(self, FieldShape::ScalarList(_) | FieldShape::RecordList(_))
    }
}

/// Metadata of one field as emitted by the generator
#[derive(Debug, Clone, Copy)]
pub struct FieldMeta {
    /// Field name, unique within the record type
    pub name: &'static str,

    /// Structural shape
    pub shape: FieldShape,

    /// Facet entries in declaration order
    pub entries: &'static [(&'static str, MetaValue)],
}

impl FieldMeta {
    /// Create field metadata
    #[must_use]
    pub const fn new(
        name: &'static str,
        shape: FieldShape,
        entries: &'static [(&'static str, MetaValue)],
    ) -> Self {
        Self {
            name,
            shape,
            entries,
        }
    }

    /// Look up the first entry with the given key
    #[must_use]
    pub fn get(&self, key: &str) -> Option<MetaValue> {
        self.entries
            .iter()
            .find(|(entry_key, _)| *entry_key == key)
            .map(|(_, value)| *value)
    }
}
