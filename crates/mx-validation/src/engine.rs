//! Validation engine
//!
//! Walks record instances against their cached schemas. Instance validation
//! checks the fields of one record; message validation additionally descends
//! into nested records and list elements, attributing every error to its
//! path from the root (`a.b.[2].c`).
//!
//! Strict mode stops at the first error. The walk threads a
//! [`ControlFlow`] through the recursion so a break at any depth unwinds
//! without visiting further fields.

use crate::result::{ValidationError, ValidationResult};
use crate::rules::{self, Violation};
use crate::{Error, Result};
use mx_ir::{FieldPath, FieldValue, Record, RecordType, Value};
use mx_schema::{ConstraintKind, Facet, FieldDescriptor, FieldKind, RecordSchema};
use std::ops::ControlFlow;
use tracing::{debug, trace};

/// Validation configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationConfig {
    /// Stop at the first error
    pub strict: bool,
    /// Maximum errors before stopping (0 = unlimited)
    pub max_errors: usize,
    /// Warn when the schema lists a field the instance does not expose
    pub warn_on_unexposed_fields: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            strict: true,
            max_errors: 0,
            warn_on_unexposed_fields: true,
        }
    }
}

impl ValidationConfig {
    /// Stop at the first error
    #[must_use]
    pub fn strict() -> Self {
        Self::default()
    }

    /// Collect every error
    #[must_use]
    pub fn collect_all() -> Self {
        Self {
            strict: false,
            ..Self::default()
        }
    }

    /// Set the error limit
    #[must_use]
    pub fn with_max_errors(mut self, max_errors: usize) -> Self {
        self.max_errors = max_errors;
        self
    }
}

/// Accumulates errors and decides when the walk must stop
struct Collector {
    result: ValidationResult,
    strict: bool,
    max_errors: usize,
}

impl Collector {
    fn new(strict: bool, max_errors: usize) -> Self {
        Self {
            result: ValidationResult::new(),
            strict,
            max_errors,
        }
    }

    fn error(
        &mut self,
        path: FieldPath,
        value: Option<&Value>,
        constraint: &ConstraintKind,
        violation: Violation,
    ) -> ControlFlow<()> {
        self.result.push(ValidationError {
            field_path: path,
            value: value.cloned(),
            constraint: constraint.clone(),
            facet: violation.facet,
            message: violation.message,
        });
        if self.should_stop() {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    }

    fn warning(&mut self, record_path: &FieldPath, message: String) {
        if record_path.is_root() {
            self.result.add_warning(message);
        } else {
            self.result.add_warning(format!("{record_path}: {message}"));
        }
    }

    fn should_stop(&self) -> bool {
        self.result.has_errors()
            && (self.strict || (self.max_errors > 0 && self.result.error_count() >= self.max_errors))
    }

    fn finish(self) -> ValidationResult {
        self.result
    }
}

/// Main validation engine
#[derive(Debug, Clone, Default)]
pub struct Validator {
    config: ValidationConfig,
}

impl Validator {
    /// Create a validator with the default (strict) configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with specific configuration
    #[must_use]
    pub fn with_config(config: ValidationConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Check one candidate value for one field, collecting every violation.
    ///
    /// `None` stands for an absent value: only the required check applies.
    /// For list fields the value is checked as a single element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownField`] when the record type has no such
    /// field, or the schema error when constraints cannot be extracted.
    pub fn validate_field(
        &self,
        record_type: RecordType,
        field_name: &str,
        value: Option<&Value>,
    ) -> Result<ValidationResult> {
        let schema = mx_schema::get_constraints(record_type)?;
        let descriptor = schema
            .field(field_name)
            .ok_or_else(|| Error::UnknownField {
                type_name: record_type.name().to_string(),
                field: field_name.to_string(),
            })?;

        let mut collector = Collector::new(false, self.config.max_errors);
        let path = FieldPath::field(field_name);
        match value {
            None => {
                let _ = check_presence(descriptor, &path, &mut collector);
            }
            Some(value) if descriptor.kind.scalar_type().is_some() => {
                let _ = check_scalar(descriptor, value, path, &mut collector);
            }
            Some(value) => collector.warning(
                &FieldPath::root(),
                format!(
                    "field '{field_name}' holds records; {} value not checked",
                    value.kind_name()
                ),
            ),
        }
        Ok(collector.finish())
    }

    /// Check the fields of one record, without descending into nested records.
    ///
    /// # Errors
    ///
    /// Returns the schema error when constraints cannot be extracted for the
    /// instance's record type.
    pub fn validate_instance(&self, instance: &dyn Record) -> Result<ValidationResult> {
        let schema = mx_schema::get_constraints(instance.record_type())?;
        let mut collector = self.collector();
        let _ = self.check_fields(instance, &schema, &FieldPath::root(), &mut collector);
        Ok(collector.finish())
    }

    /// Check a record and everything reachable from it.
    ///
    /// # Errors
    ///
    /// Returns the schema error of the first record type, at any depth,
    /// whose constraints cannot be extracted.
    pub fn validate_message(&self, instance: &dyn Record) -> Result<ValidationResult> {
        let record_type = instance.record_type();
        debug!(
            record_type = record_type.name(),
            strict = self.config.strict,
            "Validating message"
        );

        let mut collector = self.collector();
        let mut path = FieldPath::root();
        let _ = self.walk(instance, &mut path, &mut collector)?;
        let result = collector.finish();

        debug!(
            record_type = record_type.name(),
            error_count = result.error_count(),
            warning_count = result.warnings().len(),
            "Message validation finished"
        );
        Ok(result)
    }

    fn collector(&self) -> Collector {
        Collector::new(self.config.strict, self.config.max_errors)
    }

    /// Instance checks for `record`, then descent in field order
    fn walk(
        &self,
        record: &dyn Record,
        path: &mut FieldPath,
        collector: &mut Collector,
    ) -> Result<ControlFlow<()>> {
        let schema = mx_schema::get_constraints(record.record_type())?;
        let ControlFlow::Continue(fields) = self.check_fields(record, &schema, path, collector)
        else {
            return Ok(ControlFlow::Break(()));
        };

        for (descriptor, value) in fields {
            match value {
                FieldValue::Record(child) => {
                    path.push_field(descriptor.name.as_str());
                    let flow = self.walk(child, path, collector);
                    path.pop();
                    if flow?.is_break() {
                        return Ok(ControlFlow::Break(()));
                    }
                }
                FieldValue::Records(children) => {
                    for (index, child) in children.into_iter().enumerate() {
                        path.push_field(descriptor.name.as_str());
                        path.push_index(index);
                        let flow = self.walk(child, path, collector);
                        path.pop();
                        path.pop();
                        if flow?.is_break() {
                            return Ok(ControlFlow::Break(()));
                        }
                    }
                }
                FieldValue::Scalars(values) => {
                    for (index, value) in values.iter().enumerate() {
                        let element = path.child(&descriptor.name).index(index);
                        if check_scalar(descriptor, value, element, collector).is_break() {
                            return Ok(ControlFlow::Break(()));
                        }
                    }
                }
                FieldValue::Absent | FieldValue::Scalar(_) => {}
            }
        }
        Ok(ControlFlow::Continue(()))
    }

    /// Field-level checks of one record.
    ///
    /// Returns the fields that were read and matched their declared shape,
    /// so the caller can descend without asking the record again.
    fn check_fields<'s, 'r>(
        &self,
        record: &'r dyn Record,
        schema: &'s RecordSchema,
        path: &FieldPath,
        collector: &mut Collector,
    ) -> ControlFlow<(), Vec<(&'s FieldDescriptor, FieldValue<'r>)>> {
        trace!(
            record_type = schema.name(),
            path = %path,
            "Checking record fields"
        );

        let mut fields = Vec::with_capacity(schema.len());
        for descriptor in schema.fields() {
            let Some(value) = record.field(&descriptor.name) else {
                if self.config.warn_on_unexposed_fields {
                    collector.warning(
                        path,
                        format!(
                            "field '{}' is not exposed by {}",
                            descriptor.name,
                            schema.name()
                        ),
                    );
                }
                continue;
            };

            if !shape_matches(&descriptor.kind, &value) {
                collector.warning(
                    path,
                    format!(
                        "field '{}' declared as {} but holds {}; skipped",
                        descriptor.name,
                        descriptor.kind.name(),
                        value.shape_name()
                    ),
                );
                continue;
            }

            check_field(descriptor, &value, path.child(&descriptor.name), collector)?;
            fields.push((descriptor, value));
        }
        ControlFlow::Continue(fields)
    }
}

/// Whether a value has the structure its descriptor declares
fn shape_matches(kind: &FieldKind, value: &FieldValue<'_>) -> bool {
    matches!(
        (kind, value),
        (_, FieldValue::Absent)
            | (FieldKind::Scalar(_) | FieldKind::Enum, FieldValue::Scalar(_))
            | (FieldKind::NestedRecord(_), FieldValue::Record(_))
            | (FieldKind::ListOfScalar(_), FieldValue::Scalars(_))
            | (FieldKind::ListOfRecord(_), FieldValue::Records(_))
    )
}

/// Checks of one field value at `path`, excluding list elements
fn check_field(
    descriptor: &FieldDescriptor,
    value: &FieldValue<'_>,
    path: FieldPath,
    collector: &mut Collector,
) -> ControlFlow<()> {
    match value {
        FieldValue::Absent => {
            let before = collector.result.error_count();
            check_presence(descriptor, &path, collector)?;
            // A missing required list is already reported once
            if collector.result.error_count() == before {
                check_repetition(descriptor, 0, &path, collector)?;
            }
            ControlFlow::Continue(())
        }
        FieldValue::Scalar(value) => check_scalar(descriptor, value, path, collector),
        FieldValue::Record(_) => ControlFlow::Continue(()),
        FieldValue::Scalars(_) | FieldValue::Records(_) => {
            check_repetition(descriptor, value.occurrences(), &path, collector)
        }
    }
}

fn check_presence(
    descriptor: &FieldDescriptor,
    path: &FieldPath,
    collector: &mut Collector,
) -> ControlFlow<()> {
    match descriptor.constraint("required") {
        Some(constraint @ ConstraintKind::Required(true)) => collector.error(
            path.clone(),
            None,
            constraint,
            Violation::new(Facet::Required, rules::REQUIRED_MESSAGE),
        ),
        _ => ControlFlow::Continue(()),
    }
}

fn check_repetition(
    descriptor: &FieldDescriptor,
    count: usize,
    path: &FieldPath,
    collector: &mut Collector,
) -> ControlFlow<()> {
    let Some(constraint @ ConstraintKind::Occurs { min, max }) = descriptor.constraint("occurs")
    else {
        return ControlFlow::Continue(());
    };
    match rules::check_occurs(count, *min, *max) {
        Some(violation) => {
            let count = Value::Integer(i64::try_from(count).unwrap_or(i64::MAX));
            collector.error(path.clone(), Some(&count), constraint, violation)
        }
        None => ControlFlow::Continue(()),
    }
}

/// Value constraints of one present scalar, in declaration order
fn check_scalar(
    descriptor: &FieldDescriptor,
    value: &Value,
    path: FieldPath,
    collector: &mut Collector,
) -> ControlFlow<()> {
    for constraint in &descriptor.constraints {
        for violation in rules::check_constraint(value, constraint) {
            collector.error(path.clone(), Some(value), constraint, violation)?;
        }
    }
    ControlFlow::Continue(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mx_ir::{FieldMeta, FieldShape, MetaValue, ScalarType, TypedRecord};

    #[derive(Debug, Default)]
    struct Amount {
        value: Option<String>,
        ccy: Option<String>,
    }

    impl Record for Amount {
        fn record_type(&self) -> RecordType {
            RecordType::of::<Self>()
        }

        fn field(&self, name: &str) -> Option<FieldValue<'_>> {
            match name {
                "value" => Some(FieldValue::scalar(&self.value)),
                "ccy" => Some(FieldValue::scalar(&self.ccy)),
                _ => None,
            }
        }
    }

    impl TypedRecord for Amount {
        const NAME: &'static str = "Amount";

        fn field_metadata() -> &'static [FieldMeta] {
            const FIELDS: &[FieldMeta] = &[
                FieldMeta::new(
                    "value",
                    FieldShape::Scalar(ScalarType::Text),
                    &[
                        ("required", MetaValue::Bool(true)),
                        ("pattern", MetaValue::Text("[0-9]+")),
                        ("max_length", MetaValue::Int(3)),
                    ],
                ),
                FieldMeta::new(
                    "ccy",
                    FieldShape::Scalar(ScalarType::Text),
                    &[
                        ("required", MetaValue::Bool(true)),
                        ("pattern", MetaValue::Text("[A-Z]{3,3}")),
                    ],
                ),
                FieldMeta::new("note", FieldShape::Scalar(ScalarType::Text), &[]),
            ];
            FIELDS
        }
    }

    #[derive(Debug, Default)]
    struct Ledger {
        entries: Vec<Amount>,
    }

    impl Record for Ledger {
        fn record_type(&self) -> RecordType {
            RecordType::of::<Self>()
        }

        fn field(&self, name: &str) -> Option<FieldValue<'_>> {
            match name {
                "entries" => Some(FieldValue::records(&self.entries)),
                _ => None,
            }
        }
    }

    impl TypedRecord for Ledger {
        const NAME: &'static str = "Ledger";

        fn field_metadata() -> &'static [FieldMeta] {
            const FIELDS: &[FieldMeta] = &[FieldMeta::new(
                "entries",
                FieldShape::RecordList(RecordType::of::<Amount>),
                &[("max_occurs", MetaValue::Text("unbounded"))],
            )];
            FIELDS
        }
    }

    fn amount(value: &str, ccy: &str) -> Amount {
        Amount {
            value: Some(value.to_string()),
            ccy: Some(ccy.to_string()),
        }
    }

    #[test]
    fn test_default_config_is_strict() {
        let config = ValidationConfig::default();
        assert!(config.strict);
        assert_eq!(config.max_errors, 0);
        assert!(!ValidationConfig::collect_all().strict);
    }

    #[test]
    fn test_valid_instance() {
        let validator = Validator::with_config(ValidationConfig::collect_all());
        let result = validator.validate_instance(&amount("100", "EUR")).unwrap();
        assert!(result.is_valid());
        // "note" is in the schema but the record does not expose it
        assert_eq!(result.warnings().len(), 1);
        assert!(result.warnings()[0].contains("'note'"));
    }

    #[test]
    fn test_strict_stops_at_first_error() {
        let instance = amount("12AB", "eur");

        let strict = Validator::new().validate_instance(&instance).unwrap();
        assert_eq!(strict.error_count(), 1);
        assert_eq!(strict.errors()[0].facet, Facet::Pattern);

        let all = Validator::with_config(ValidationConfig::collect_all())
            .validate_instance(&instance)
            .unwrap();
        let facets: Vec<Facet> = all.errors().iter().map(|e| e.facet).collect();
        assert_eq!(facets, vec![Facet::Pattern, Facet::MaxLength, Facet::Pattern]);
    }

    #[test]
    fn test_max_errors_limit() {
        let validator =
            Validator::with_config(ValidationConfig::collect_all().with_max_errors(2));
        let result = validator.validate_instance(&amount("12AB", "eur")).unwrap();
        assert_eq!(result.error_count(), 2);
    }

    #[test]
    fn test_absent_required_reports_only_required() {
        let validator = Validator::with_config(ValidationConfig::collect_all());
        let result = validator.validate_instance(&Amount::default()).unwrap();
        assert_eq!(result.error_count(), 2);
        for error in result.errors() {
            assert_eq!(error.facet, Facet::Required);
            assert!(error.value.is_none());
        }
        assert_eq!(result.errors()[0].field_path.to_string(), "value");
    }

    #[test]
    fn test_nested_warnings_carry_element_path() {
        let ledger = Ledger {
            entries: vec![amount("100", "EUR"), amount("7", "USD")],
        };

        let result = Validator::with_config(ValidationConfig::collect_all())
            .validate_message(&ledger)
            .unwrap();

        assert!(result.is_valid());
        assert_eq!(
            result.warnings(),
            [
                "entries.[0]: field 'note' is not exposed by Amount".to_string(),
                "entries.[1]: field 'note' is not exposed by Amount".to_string(),
            ]
        );
    }

    #[test]
    fn test_validate_field() {
        let validator = Validator::new();
        let record_type = RecordType::of::<Amount>();

        let ok = validator
            .validate_field(record_type, "ccy", Some(&Value::from("USD")))
            .unwrap();
        assert!(ok.is_valid());

        // Always collects everything, whatever the configured strictness
        let bad = validator
            .validate_field(record_type, "value", Some(&Value::from("ABCD")))
            .unwrap();
        assert_eq!(bad.error_count(), 2);

        let missing = validator.validate_field(record_type, "ccy", None).unwrap();
        assert_eq!(missing.error_count(), 1);
        assert_eq!(missing.errors()[0].message, rules::REQUIRED_MESSAGE);
    }

    #[test]
    fn test_validate_unknown_field() {
        let err = Validator::new()
            .validate_field(RecordType::of::<Amount>(), "nope", None)
            .unwrap_err();
        assert!(matches!(err, Error::UnknownField { ref field, .. } if field == "nope"));
    }

    #[test]
    fn test_shape_matches() {
        assert!(shape_matches(
            &FieldKind::Scalar(ScalarType::Text),
            &FieldValue::Absent
        ));
        assert!(shape_matches(
            &FieldKind::Enum,
            &FieldValue::Scalar(Value::from("CRED"))
        ));
        assert!(!shape_matches(
            &FieldKind::ListOfScalar(ScalarType::Text),
            &FieldValue::Scalar(Value::from("x"))
        ));
    }
}
