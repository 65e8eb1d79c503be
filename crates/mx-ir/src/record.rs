//! Record traits and field accessors

use crate::metadata::FieldMeta;
use crate::value::Value;
use std::any::TypeId;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Object-safe view of a record instance.
///
/// Implemented by every generated record type. The validator only ever
/// talks to instances through this trait.
pub trait Record: fmt::Debug + Send + Sync {
    /// Identity and metadata of the concrete record type.
    fn record_type(&self) -> RecordType;

    /// Current value of the named field.
    ///
    /// Returns `None` when the type does not expose a field with that name.
    fn field(&self, name: &str) -> Option<FieldValue<'_>>;
}

/// Static half of a record type: name and attached field metadata.
pub trait TypedRecord: Record + Sized + 'static {
    /// Schema name of the type (e.g. `PaymentIdentification7`)
    const NAME: &'static str;

    /// Field metadata in declaration order
    fn field_metadata() -> &'static [FieldMeta];
}

/// Identity of a record type, usable without an instance
#[derive(Clone, Copy)]
pub struct RecordType {
    id: TypeId,
    name: &'static str,
    metadata: fn() -> &'static [FieldMeta],
}

impl RecordType {
    /// Record type of `R`
    #[must_use]
    pub fn of<R: TypedRecord>() -> Self {
        Self {
            id: TypeId::of::<R>(),
            name: R::NAME,
            metadata: R::field_metadata,
        }
    }

    #[must_use]
    pub fn id(&self) -> TypeId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Field metadata attached to the type
    #[must_use]
    pub fn field_metadata(&self) -> &'static [FieldMeta] {
        (self.metadata)()
    }
}

impl PartialEq for RecordType {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for RecordType {}

impl Hash for RecordType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RecordType").field(&self.name).finish()
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// A closed set of codes (an XSD enumeration)
pub trait Code: Copy {
    /// All codes of the set, in schema order
    const CODES: &'static [&'static str];

    /// Code of this variant
    fn as_code(&self) -> &'static str;
}

/// Current value of one field of a record instance
#[derive(Debug, Clone)]
pub enum FieldValue<'a> {
    /// No value provided
    Absent,
    /// A single scalar or code
    Scalar(Value),
    /// A single nested record
    Record(&'a dyn Record),
    /// A repeated scalar field
    Scalars(Vec<Value>),
    /// A repeated record field
    Records(Vec<&'a dyn Record>),
}

impl<'a> FieldValue<'a> {
    /// Scalar from an optional field
    pub fn scalar<T>(value: &Option<T>) -> Self
    where
        T: Clone + Into<Value>,
    {
        match value {
            Some(v) => FieldValue::Scalar(v.clone().into()),
            None => FieldValue::Absent,
        }
    }

    /// Code from an optional enumeration field
    pub fn code<C: Code>(value: &Option<C>) -> Self {
        match value {
            Some(code) => FieldValue::Scalar(Value::String(code.as_code().to_owned())),
            None => FieldValue::Absent,
        }
    }

    /// Nested record from an optional field
    pub fn record<R: Record + 'a>(value: &'a Option<R>) -> Self {
        match value {
            Some(record) => FieldValue::Record(record),
            None => FieldValue::Absent,
        }
    }

    /// Repeated scalars
    pub fn scalars<T>(values: &[T]) -> Self
    where
        T: Clone + Into<Value>,
    {
        FieldValue::Scalars(values.iter().cloned().map(Into::into).collect())
    }

    /// Repeated codes
    pub fn codes<C: Code>(values: &[C]) -> Self {
        FieldValue::Scalars(
            values
                .iter()
                .map(|code| Value::String(code.as_code().to_owned()))
                .collect(),
        )
    }

    /// Repeated nested records
    pub fn records<R: Record + 'a>(values: &'a [R]) -> Self {
        FieldValue::Records(values.iter().map(|r| r as &dyn Record).collect())
    }

    #[must_use]
    pub fn is_absent(&self) -> bool {
        matches!(self, FieldValue::Absent)
    }

    /// Number of occurrences: 0 when absent, 1 for single values, the
    /// element count for repeated fields.
    #[must_use]
    pub fn occurrences(&self) -> usize {
        match self {
            FieldValue::Absent => 0,
            FieldValue::Scalar(_) | FieldValue::Record(_) => 1,
            FieldValue::Scalars(values) => values.len(),
            FieldValue::Records(records) => records.len(),
        }
    }

    /// Short name of the shape, used in diagnostics.
    #[must_use]
    pub fn shape_name(&self) -> &'static str {
        match self {
            FieldValue::Absent => "absent",
            FieldValue::Scalar(_) => "scalar",
            FieldValue::Record(_) => "record",
            FieldValue::Scalars(_) => "scalar list",
            FieldValue::Records(_) => "record list",
        }
    }
}
