//! Constraint model definitions

use mx_ir::{Decimal, RecordType, ScalarType};
use regex::Regex;
use serde::{Serialize, Serializer};
use std::fmt;

/// A regular expression facet.
///
/// XSD patterns are implicitly anchored, so the compiled expression must
/// match the whole value. Equality compares the source text.
#[derive(Clone)]
pub struct Pattern {
    source: String,
    regex: Regex,
}

impl Pattern {
    /// Compile a pattern
    ///
    /// # Errors
    ///
    /// Returns the regex compilation error for malformed patterns.
    pub fn new(source: impl Into<String>) -> Result<Self, regex::Error> {
        let source = source.into();
        let regex = Regex::new(&format!("^(?:{source})$"))?;
        Ok(Self { source, regex })
    }

    /// Pattern as declared
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Whether the whole of `text` matches
    #[must_use]
    pub fn is_full_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Eq for Pattern {}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Pattern").field(&self.source).finish()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// The closed set of codes an enumerated field accepts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowedValues {
    codes: Vec<String>,
}

impl AllowedValues {
    /// Create from codes, keeping schema order and dropping duplicates
    pub fn with_codes<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for code in codes {
            let code = code.into();
            if !unique.contains(&code) {
                unique.push(code);
            }
        }
        Self { codes: unique }
    }

    /// Check if a code is allowed (case-sensitive)
    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.codes.iter().any(|c| c == code)
    }

    #[must_use]
    pub fn codes(&self) -> &[String] {
        &self.codes
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

impl fmt::Display for AllowedValues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.codes.join(", "))
    }
}

/// One kind of constraint attached to a field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstraintKind {
    /// Whole-value regular expression
    Pattern(Pattern),
    /// Length bounds, either side optional
    Length {
        min: Option<usize>,
        max: Option<usize>,
    },
    /// Numeric bounds, any combination
    NumericBound {
        min_inclusive: Option<Decimal>,
        max_inclusive: Option<Decimal>,
        min_exclusive: Option<Decimal>,
        max_exclusive: Option<Decimal>,
    },
    /// Digit count limits
    DecimalPrecision {
        total_digits: Option<u32>,
        fraction_digits: Option<u32>,
    },
    /// Whether a value must be present
    Required(bool),
    /// Allowed codes
    Enumerated(AllowedValues),
    /// Repetition bounds of a repeated field; `max: None` is unbounded
    Occurs { min: usize, max: Option<usize> },
}

impl ConstraintKind {
    /// Length bounds
    #[must_use]
    pub fn length(min: Option<usize>, max: Option<usize>) -> Self {
        Self::Length { min, max }
    }

    /// Repetition bounds
    #[must_use]
    pub fn occurs(min: usize, max: Option<usize>) -> Self {
        Self::Occurs { min, max }
    }

    /// Numeric bound with only an inclusive minimum
    #[must_use]
    pub fn min_inclusive(min: Decimal) -> Self {
        Self::NumericBound {
            min_inclusive: Some(min),
            max_inclusive: None,
            min_exclusive: None,
            max_exclusive: None,
        }
    }

    /// Compiled pattern constraint
    ///
    /// # Errors
    ///
    /// Returns the regex compilation error for malformed patterns.
    pub fn pattern(source: impl Into<String>) -> Result<Self, regex::Error> {
        Pattern::new(source).map(Self::Pattern)
    }

    /// Short snake_case name of the constraint kind
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Pattern(_) => "pattern",
            Self::Length { .. } => "length",
            Self::NumericBound { .. } => "numeric_bound",
            Self::DecimalPrecision { .. } => "decimal_precision",
            Self::Required(_) => "required",
            Self::Enumerated(_) => "enumerated",
            Self::Occurs { .. } => "occurs",
        }
    }
}

fn write_range<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    label: &str,
    min: Option<&T>,
    max: Option<&T>,
) -> fmt::Result {
    match (min, max) {
        (Some(min), Some(max)) => write!(f, "{label} {min}..={max}"),
        (Some(min), None) => write!(f, "{label} >= {min}"),
        (None, Some(max)) => write!(f, "{label} <= {max}"),
        (None, None) => write!(f, "{label} unbounded"),
    }
}

impl fmt::Display for ConstraintKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pattern(pattern) => write!(f, "pattern '{pattern}'"),
            Self::Length { min, max } => write_range(f, "length", min.as_ref(), max.as_ref()),
            Self::NumericBound {
                min_inclusive,
                max_inclusive,
                min_exclusive,
                max_exclusive,
            } => {
                let mut parts = Vec::new();
                if let Some(v) = min_exclusive {
                    parts.push(format!("> {v}"));
                } else if let Some(v) = min_inclusive {
                    parts.push(format!(">= {v}"));
                }
                if let Some(v) = max_exclusive {
                    parts.push(format!("< {v}"));
                } else if let Some(v) = max_inclusive {
                    parts.push(format!("<= {v}"));
                }
                write!(f, "value {}", parts.join(" and "))
            }
            Self::DecimalPrecision {
                total_digits,
                fraction_digits,
            } => {
                write!(f, "digits")?;
                if let Some(total) = total_digits {
                    write!(f, " total <= {total}")?;
                }
                if let Some(fraction) = fraction_digits {
                    write!(f, " fraction <= {fraction}")?;
                }
                Ok(())
            }
            Self::Required(required) => {
                f.write_str(if *required { "required" } else { "optional" })
            }
            Self::Enumerated(values) => write!(f, "one of {values}"),
            Self::Occurs { min, max } => write_range(f, "occurs", Some(min), max.as_ref()),
        }
    }
}

/// The individual facet a violation refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Facet {
    Required,
    Pattern,
    MinLength,
    MaxLength,
    MinInclusive,
    MaxInclusive,
    MinExclusive,
    MaxExclusive,
    TotalDigits,
    FractionDigits,
    Enumeration,
    MinOccurs,
    MaxOccurs,
}

impl Facet {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Facet::Required => "required",
            Facet::Pattern => "pattern",
            Facet::MinLength => "min_length",
            Facet::MaxLength => "max_length",
            Facet::MinInclusive => "min_inclusive",
            Facet::MaxInclusive => "max_inclusive",
            Facet::MinExclusive => "min_exclusive",
            Facet::MaxExclusive => "max_exclusive",
            Facet::TotalDigits => "total_digits",
            Facet::FractionDigits => "fraction_digits",
            Facet::Enumeration => "enum",
            Facet::MinOccurs => "min_occurs",
            Facet::MaxOccurs => "max_occurs",
        }
    }
}

impl fmt::Display for Facet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Facet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Structural kind of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Scalar(ScalarType),
    Enum,
    NestedRecord(RecordType),
    ListOfScalar(ScalarType),
    ListOfRecord(RecordType),
}

impl FieldKind {
    #[must_use]
    pub fn is_list(&self) -> bool {
        matches!(self, FieldKind::ListOfScalar(_) | FieldKind::ListOfRecord(_))
    }

    /// Lexical type of the field's values, if they are scalars
    #[must_use]
    pub fn scalar_type(&self) -> Option<ScalarType> {
        match self {
            FieldKind::Scalar(scalar) | FieldKind::ListOfScalar(scalar) => Some(*scalar),
            FieldKind::Enum => Some(ScalarType::Text),
            FieldKind::NestedRecord(_) | FieldKind::ListOfRecord(_) => None,
        }
    }

    /// Referenced record type, if the field holds records
    #[must_use]
    pub fn record_type(&self) -> Option<RecordType> {
        match self {
            FieldKind::NestedRecord(record) | FieldKind::ListOfRecord(record) => Some(*record),
            _ => None,
        }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            FieldKind::Scalar(_) => "scalar",
            FieldKind::Enum => "enum",
            FieldKind::NestedRecord(_) => "record",
            FieldKind::ListOfScalar(_) => "scalar list",
            FieldKind::ListOfRecord(_) => "record list",
        }
    }
}

/// Static description of one field: kind and constraints
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Field name, unique within the record type
    pub name: String,
    /// Constraints in declaration order
    pub constraints: Vec<ConstraintKind>,
    /// Structural kind
    pub kind: FieldKind,
}

impl FieldDescriptor {
    /// Create a field descriptor
    pub fn new(name: impl Into<String>, kind: FieldKind, constraints: Vec<ConstraintKind>) -> Self {
        Self {
            name: name.into(),
            constraints,
            kind,
        }
    }

    /// Whether a value must be present
    #[must_use]
    pub fn is_required(&self) -> bool {
        self.constraints
            .iter()
            .any(|c| matches!(c, ConstraintKind::Required(true)))
    }

    /// Repetition bounds, for repeated fields that declare them
    #[must_use]
    pub fn occurs(&self) -> Option<(usize, Option<usize>)> {
        self.constraints.iter().find_map(|c| match c {
            ConstraintKind::Occurs { min, max } => Some((*min, *max)),
            _ => None,
        })
    }

    /// Pattern facet, if declared
    #[must_use]
    pub fn pattern(&self) -> Option<&Pattern> {
        self.constraints.iter().find_map(|c| match c {
            ConstraintKind::Pattern(pattern) => Some(pattern),
            _ => None,
        })
    }

    /// First constraint of the given kind name (see [`ConstraintKind::name`])
    #[must_use]
    pub fn constraint(&self, name: &str) -> Option<&ConstraintKind> {
        self.constraints.iter().find(|c| c.name() == name)
    }
}

/// Ordered field descriptors of one record type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordSchema {
    record_type: RecordType,
    fields: Vec<FieldDescriptor>,
}

impl RecordSchema {
    /// Create a schema from descriptors in declaration order
    #[must_use]
    pub fn new(record_type: RecordType, fields: Vec<FieldDescriptor>) -> Self {
        Self {
            record_type,
            fields,
        }
    }

    #[must_use]
    pub fn record_type(&self) -> RecordType {
        self.record_type
    }

    /// Schema name of the record type
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.record_type.name()
    }

    #[must_use]
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    /// Look up a field by name
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Field names in declaration order
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }
}
