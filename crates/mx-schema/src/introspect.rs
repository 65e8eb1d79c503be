//! Translation of raw field metadata into typed constraints

use crate::model::{AllowedValues, ConstraintKind, FieldDescriptor, FieldKind, Pattern, RecordSchema};
use crate::{Result, SchemaError};
use mx_ir::{Decimal, FieldMeta, FieldShape, MetaValue, RecordType};
use std::collections::HashSet;
use tracing::{trace, warn};

/// Keys the generator emits for information only
const INFORMATIONAL_KEYS: &[&str] = &["name", "namespace", "type", "format"];

fn is_informational(key: &str) -> bool {
    INFORMATIONAL_KEYS.contains(&key)
}

/// Build the constraint schema of a record type from its field metadata
///
/// # Errors
///
/// Returns [`SchemaError::NoFieldMetadata`] for types without metadata and
/// other [`SchemaError`] variants for inconsistent metadata.
pub fn build_schema(record_type: RecordType) -> Result<RecordSchema> {
    let metadata = record_type.field_metadata();
    if metadata.is_empty() {
        return Err(SchemaError::NoFieldMetadata {
            type_name: record_type.name().to_string(),
        });
    }

    let mut seen = HashSet::new();
    let mut fields = Vec::with_capacity(metadata.len());
    for meta in metadata {
        if !seen.insert(meta.name) {
            return Err(SchemaError::DuplicateField {
                type_name: record_type.name().to_string(),
                field: meta.name.to_string(),
            });
        }
        let descriptor = FieldBuilder::new(record_type, meta).build()?;
        trace!(
            record_type = record_type.name(),
            field = meta.name,
            kind = descriptor.kind.name(),
            constraints = descriptor.constraints.len(),
            "Built field descriptor"
        );
        fields.push(descriptor);
    }

    Ok(RecordSchema::new(record_type, fields))
}

/// Constraint kinds in the order their first key was declared
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Required,
    Pattern,
    Length,
    NumericBound,
    DecimalPrecision,
    Occurs,
}

/// Accumulates the facet entries of one field
struct FieldBuilder<'m> {
    record_type: RecordType,
    meta: &'m FieldMeta,
    order: Vec<Slot>,
    seen_keys: HashSet<&'static str>,
    required: Option<bool>,
    pattern: Option<Pattern>,
    min_length: Option<usize>,
    max_length: Option<usize>,
    min_inclusive: Option<Decimal>,
    max_inclusive: Option<Decimal>,
    min_exclusive: Option<Decimal>,
    max_exclusive: Option<Decimal>,
    total_digits: Option<u32>,
    fraction_digits: Option<u32>,
    min_occurs: Option<usize>,
    max_occurs: Option<Option<usize>>,
}

impl<'m> FieldBuilder<'m> {
    fn new(record_type: RecordType, meta: &'m FieldMeta) -> Self {
        Self {
            record_type,
            meta,
            order: Vec::new(),
            seen_keys: HashSet::new(),
            required: None,
            pattern: None,
            min_length: None,
            max_length: None,
            min_inclusive: None,
            max_inclusive: None,
            min_exclusive: None,
            max_exclusive: None,
            total_digits: None,
            fraction_digits: None,
            min_occurs: None,
            max_occurs: None,
        }
    }

    fn invalid(&self, reason: impl Into<String>) -> SchemaError {
        SchemaError::invalid_metadata(self.record_type, self.meta.name, reason)
    }

    fn build(mut self) -> Result<FieldDescriptor> {
        for &(key, value) in self.meta.entries {
            self.apply(key, value)?;
        }

        let kind = match self.meta.shape {
            FieldShape::Scalar(scalar) => FieldKind::Scalar(scalar),
            FieldShape::Enum(_) => FieldKind::Enum,
            FieldShape::Record(record) => FieldKind::NestedRecord(record()),
            FieldShape::ScalarList(scalar) => FieldKind::ListOfScalar(scalar),
            FieldShape::RecordList(record) => FieldKind::ListOfRecord(record()),
        };
        self.check_applicability(kind)?;

        let mut constraints = Vec::with_capacity(self.order.len() + 1);
        for slot in &self.order {
            if let Some(constraint) = self.assemble(*slot, kind)? {
                constraints.push(constraint);
            }
        }

        if let FieldShape::Enum(codes) = self.meta.shape {
            if codes.is_empty() {
                return Err(self.invalid("enumeration declares no codes"));
            }
            constraints.push(ConstraintKind::Enumerated(AllowedValues::with_codes(
                codes.iter().copied(),
            )));
        }

        Ok(FieldDescriptor::new(self.meta.name, kind, constraints))
    }

    fn mark(&mut self, key: &'static str, slot: Slot) -> Result<()> {
        if !self.seen_keys.insert(key) {
            return Err(self.invalid(format!("duplicate '{key}' entry")));
        }
        if !self.order.contains(&slot) {
            self.order.push(slot);
        }
        Ok(())
    }

    fn apply(&mut self, key: &'static str, value: MetaValue) -> Result<()> {
        match key {
            "required" => {
                self.mark(key, Slot::Required)?;
                self.required = Some(self.expect_bool(key, value)?);
            }
            "pattern" => {
                self.mark(key, Slot::Pattern)?;
                let source = self.expect_text(key, value)?;
                let pattern = Pattern::new(source).map_err(|source_err| {
                    SchemaError::InvalidPattern {
                        type_name: self.record_type.name().to_string(),
                        field: self.meta.name.to_string(),
                        pattern: source.to_string(),
                        source: source_err,
                    }
                })?;
                self.pattern = Some(pattern);
            }
            "min_length" => {
                self.mark(key, Slot::Length)?;
                self.min_length = Some(self.expect_count(key, value)?);
            }
            "max_length" => {
                self.mark(key, Slot::Length)?;
                self.max_length = Some(self.expect_count(key, value)?);
            }
            "min_inclusive" => {
                self.mark(key, Slot::NumericBound)?;
                self.min_inclusive = Some(self.expect_decimal(key, value)?);
            }
            "max_inclusive" => {
                self.mark(key, Slot::NumericBound)?;
                self.max_inclusive = Some(self.expect_decimal(key, value)?);
            }
            "min_exclusive" => {
                self.mark(key, Slot::NumericBound)?;
                self.min_exclusive = Some(self.expect_decimal(key, value)?);
            }
            "max_exclusive" => {
                self.mark(key, Slot::NumericBound)?;
                self.max_exclusive = Some(self.expect_decimal(key, value)?);
            }
            "total_digits" => {
                self.mark(key, Slot::DecimalPrecision)?;
                self.total_digits = Some(self.expect_digits(key, value)?);
            }
            "fraction_digits" => {
                self.mark(key, Slot::DecimalPrecision)?;
                self.fraction_digits = Some(self.expect_digits(key, value)?);
            }
            "min_occurs" => {
                self.mark(key, Slot::Occurs)?;
                self.min_occurs = Some(self.expect_count(key, value)?);
            }
            "max_occurs" => {
                self.mark(key, Slot::Occurs)?;
                self.max_occurs = Some(match value {
                    MetaValue::Text("unbounded") => None,
                    other => Some(self.expect_count(key, other)?),
                });
            }
            key if is_informational(key) => {}
            unknown => {
                warn!(
                    record_type = self.record_type.name(),
                    field = self.meta.name,
                    key = unknown,
                    "Ignoring unrecognized field metadata key"
                );
            }
        }
        Ok(())
    }

    /// Reject facets that cannot apply to the field's kind
    fn check_applicability(&self, kind: FieldKind) -> Result<()> {
        let scalar = kind.scalar_type();
        let numeric = scalar.is_some_and(mx_ir::ScalarType::is_numeric);
        for slot in &self.order {
            let applicable = match slot {
                Slot::Required | Slot::Occurs => true,
                Slot::Pattern | Slot::Length => scalar.is_some(),
                Slot::NumericBound | Slot::DecimalPrecision => numeric,
            };
            if !applicable {
                return Err(self.invalid(format!(
                    "{slot:?} facet does not apply to a {} field of type {}",
                    kind.name(),
                    scalar.map_or("record", mx_ir::ScalarType::name),
                )));
            }
        }

        if let (Some(min), Some(max)) = (self.min_length, self.max_length) {
            if min > max {
                return Err(self.invalid(format!("min_length {min} exceeds max_length {max}")));
            }
        }
        if let (Some(min), Some(Some(max))) = (self.min_occurs, self.max_occurs) {
            if min > max {
                return Err(self.invalid(format!("min_occurs {min} exceeds max_occurs {max}")));
            }
        }
        Ok(())
    }

    fn assemble(&self, slot: Slot, kind: FieldKind) -> Result<Option<ConstraintKind>> {
        let constraint = match slot {
            Slot::Required => self.required.map(ConstraintKind::Required),
            Slot::Pattern => self.pattern.clone().map(ConstraintKind::Pattern),
            Slot::Length => Some(ConstraintKind::Length {
                min: self.min_length,
                max: self.max_length,
            }),
            Slot::NumericBound => Some(ConstraintKind::NumericBound {
                min_inclusive: self.min_inclusive,
                max_inclusive: self.max_inclusive,
                min_exclusive: self.min_exclusive,
                max_exclusive: self.max_exclusive,
            }),
            Slot::DecimalPrecision => Some(ConstraintKind::DecimalPrecision {
                total_digits: self.total_digits,
                fraction_digits: self.fraction_digits,
            }),
            Slot::Occurs if kind.is_list() => Some(ConstraintKind::Occurs {
                min: self.min_occurs.unwrap_or(0),
                max: self.max_occurs.unwrap_or(None),
            }),
            Slot::Occurs => {
                // A singular element: minOccurs carries required-ness
                if let Some(Some(max)) = self.max_occurs {
                    if max > 1 {
                        return Err(self.invalid(format!(
                            "max_occurs {max} on a single-valued field"
                        )));
                    }
                }
                match (self.required, self.min_occurs) {
                    (None, Some(min)) if min >= 1 => Some(ConstraintKind::Required(true)),
                    _ => None,
                }
            }
        };
        Ok(constraint)
    }

    fn expect_bool(&self, key: &str, value: MetaValue) -> Result<bool> {
        match value {
            MetaValue::Bool(b) => Ok(b),
            other => Err(self.invalid(format!("'{key}' expects a boolean, got {other:?}"))),
        }
    }

    fn expect_text(&self, key: &str, value: MetaValue) -> Result<&'static str> {
        match value {
            MetaValue::Text(text) => Ok(text),
            other => Err(self.invalid(format!("'{key}' expects text, got {other:?}"))),
        }
    }

    fn expect_count(&self, key: &str, value: MetaValue) -> Result<usize> {
        match value {
            MetaValue::Int(n) => usize::try_from(n)
                .map_err(|_| self.invalid(format!("'{key}' must not be negative, got {n}"))),
            other => Err(self.invalid(format!("'{key}' expects an integer, got {other:?}"))),
        }
    }

    fn expect_digits(&self, key: &str, value: MetaValue) -> Result<u32> {
        let count = self.expect_count(key, value)?;
        u32::try_from(count).map_err(|_| self.invalid(format!("'{key}' is out of range: {count}")))
    }

    fn expect_decimal(&self, key: &str, value: MetaValue) -> Result<Decimal> {
        match value {
            MetaValue::Int(n) => Ok(Decimal::from(n)),
            MetaValue::Text(text) => text
                .parse()
                .map_err(|e| self.invalid(format!("'{key}' is not a decimal: {e}"))),
            MetaValue::Bool(_) => {
                Err(self.invalid(format!("'{key}' expects a number, got {value:?}")))
            }
        }
    }
}
