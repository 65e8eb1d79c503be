use std::sync::Arc;

use mx_ir::{
    Decimal, FieldMeta, FieldPath, FieldShape, FieldValue, MetaValue, Record, RecordType,
    ScalarType, TypedRecord, Value,
};
use mx_messages::pacs_008::{
    ActiveCurrencyAndAmount, ChargeBearerType1Code, CreditTransferTransaction39,
    PaymentIdentification7, SettlementInstruction7,
};
use mx_validation::{
    get_constraints, validate_field, validate_instance, validate_message, ConstraintKind, Error,
    Facet, SchemaError, ValidationResult,
};

fn dec(text: &str) -> Decimal {
    text.parse().expect("test decimal should parse")
}

fn record_type<R: TypedRecord>() -> RecordType {
    RecordType::of::<R>()
}

#[test]
fn get_constraints_is_idempotent() {
    let first = get_constraints(record_type::<PaymentIdentification7>()).unwrap();
    let second = get_constraints(record_type::<PaymentIdentification7>()).unwrap();

    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(*first, *second);
    assert_eq!(
        first.field_names().collect::<Vec<_>>(),
        vec!["instr_id", "end_to_end_id", "tx_id", "uetr", "clr_sys_ref"]
    );
}

#[test]
fn amount_constraints_are_typed() {
    let schema = get_constraints(record_type::<ActiveCurrencyAndAmount>()).unwrap();
    let value = schema.field("value").unwrap();

    assert_eq!(
        value.constraints,
        vec![
            ConstraintKind::Required(true),
            ConstraintKind::min_inclusive(dec("0")),
            ConstraintKind::DecimalPrecision {
                total_digits: Some(18),
                fraction_digits: Some(5),
            },
        ]
    );
}

#[test]
fn absent_required_field_yields_exactly_one_error() {
    let result =
        validate_field(record_type::<PaymentIdentification7>(), "end_to_end_id", None).unwrap();

    assert_eq!(result.error_count(), 1);
    let error = &result.errors()[0];
    assert_eq!(error.facet, Facet::Required);
    assert_eq!(error.constraint, ConstraintKind::Required(true));
    assert_eq!(error.field_path, FieldPath::field("end_to_end_id"));
    assert!(error.value.is_none());
}

#[test]
fn absent_optional_field_is_valid() {
    let result = validate_field(record_type::<PaymentIdentification7>(), "uetr", None).unwrap();
    assert!(result.is_valid());
}

#[test]
fn end_to_end_id_length_boundaries() {
    let check = |len: usize| {
        validate_field(
            record_type::<PaymentIdentification7>(),
            "end_to_end_id",
            Some(&Value::from("E".repeat(len))),
        )
        .unwrap()
    };

    assert_eq!(check(0).errors()[0].facet, Facet::MinLength);
    assert!(check(1).is_valid());
    assert!(check(35).is_valid());

    let too_long = check(36);
    assert_eq!(too_long.error_count(), 1);
    assert_eq!(too_long.errors()[0].facet, Facet::MaxLength);
    assert_eq!(
        too_long.errors()[0].message,
        "Length 36 exceeds maximum allowed length 35"
    );
}

#[test]
fn amount_minimum_is_inclusive() {
    let check = |text: &str| {
        validate_field(
            record_type::<ActiveCurrencyAndAmount>(),
            "value",
            Some(&Value::Decimal(dec(text))),
        )
        .unwrap()
    };

    assert!(check("0").is_valid());
    assert!(check("0.00001").is_valid());

    let negative = check("-0.01");
    assert_eq!(negative.error_count(), 1);
    assert_eq!(negative.errors()[0].facet, Facet::MinInclusive);
    assert_eq!(negative.errors()[0].value, Some(Value::Decimal(dec("-0.01"))));
}

#[test]
fn amount_digit_limits() {
    let check = |text: &str| {
        validate_field(
            record_type::<ActiveCurrencyAndAmount>(),
            "value",
            Some(&Value::Decimal(dec(text))),
        )
        .unwrap()
    };

    assert!(check("1234567890123.12345").is_valid());

    let too_precise = check("1.123456");
    assert_eq!(too_precise.errors()[0].facet, Facet::FractionDigits);

    let too_many = check("12345678901234.12345");
    assert_eq!(too_many.errors()[0].facet, Facet::TotalDigits);
    assert_eq!(
        too_many.errors()[0].message,
        "Total digits 19 exceeds maximum allowed 18"
    );
}

#[test]
fn uetr_pattern() {
    let check = |text: &str| {
        validate_field(
            record_type::<PaymentIdentification7>(),
            "uetr",
            Some(&Value::from(text)),
        )
        .unwrap()
    };

    assert!(check("550e8400-e29b-41d4-a716-446655440000").is_valid());
    assert!(check("eb6305c9-1f7f-49de-aed0-16487c27b42d").is_valid());
    assert!(!check("not-a-valid-uuid").is_valid());
    // Version nibble must be 4
    assert!(!check("eb6305c9-1f7f-59de-aed0-16487c27b42d").is_valid());
    assert!(!check("EB6305C9-1F7F-49DE-AED0-16487C27B42D").is_valid());
    assert!(!check("eb6305c9-1f7f-49de-aed0-16487c27b42d-extra").is_valid());

    let result = check("not-a-uuid");
    assert_eq!(result.errors()[0].facet, Facet::Pattern);
    assert!(result.errors()[0].message.starts_with("Value 'not-a-uuid' does not match"));
}

#[test]
fn enumerated_code_checked_against_allowed_values() {
    let check = |text: &str| {
        validate_field(
            record_type::<SettlementInstruction7>(),
            "sttlm_mtd",
            Some(&Value::from(text)),
        )
        .unwrap()
    };

    assert!(check("CLRG").is_valid());
    let result = check("clrg");
    assert_eq!(result.errors()[0].facet, Facet::Enumeration);
    assert_eq!(
        result.errors()[0].message,
        "Value 'clrg' is not a valid enum value. Valid values: [INDA, INGA, COVE, CLRG]"
    );
}

#[test]
fn record_field_with_scalar_value_only_warns() {
    let result = validate_field(
        record_type::<CreditTransferTransaction39>(),
        "pmt_id",
        Some(&Value::from("E2E-001")),
    )
    .unwrap();

    assert!(result.is_valid());
    assert_eq!(result.warnings().len(), 1);
}

#[test]
fn unknown_field_is_an_error() {
    let err = validate_field(record_type::<PaymentIdentification7>(), "uetr2", None).unwrap_err();
    assert!(matches!(err, Error::UnknownField { .. }));
    assert_eq!(
        err.to_string(),
        "Field 'uetr2' not found in PaymentIdentification7"
    );
}

fn three_bad_fields() -> PaymentIdentification7 {
    PaymentIdentification7 {
        instr_id: Some("I".repeat(36)),
        end_to_end_id: None,
        tx_id: Some("TX-001".to_string()),
        uetr: Some("not-a-uuid".to_string()),
        clr_sys_ref: None,
    }
}

#[test]
fn non_strict_instance_collects_every_field() {
    let result = validate_instance(&three_bad_fields(), false).unwrap();

    let found: Vec<(String, Facet)> = result
        .errors()
        .iter()
        .map(|e| (e.field_path.to_string(), e.facet))
        .collect();
    assert_eq!(
        found,
        vec![
            ("instr_id".to_string(), Facet::MaxLength),
            ("end_to_end_id".to_string(), Facet::Required),
            ("uetr".to_string(), Facet::Pattern),
        ]
    );
}

#[test]
fn strict_instance_stops_after_first_error() {
    let result = validate_instance(&three_bad_fields(), true).unwrap();
    assert_eq!(result.error_count(), 1);
    assert_eq!(result.errors()[0].field_path.to_string(), "instr_id");
}

#[test]
fn strict_result_is_prefix_of_collect_all_result() {
    let transaction = CreditTransferTransaction39 {
        chrg_br: Some(ChargeBearerType1Code::Cred),
        ..CreditTransferTransaction39::default()
    };
    let strict = validate_instance(&transaction, true).unwrap();
    let all = validate_instance(&transaction, false).unwrap();

    // Six required nested records are missing
    assert_eq!(strict.error_count(), 1);
    assert_eq!(all.error_count(), 6);
    assert_eq!(strict.errors()[0], all.errors()[0]);
}

#[test]
fn merge_concatenates_in_order() {
    let mut a = validate_instance(&three_bad_fields(), true).unwrap();
    let b = validate_field(record_type::<PaymentIdentification7>(), "end_to_end_id", None).unwrap();
    let c = validate_field(
        record_type::<ActiveCurrencyAndAmount>(),
        "ccy",
        Some(&Value::from("eur")),
    )
    .unwrap();

    let first = a.errors()[0].clone();
    let second = b.errors()[0].clone();
    let third = c.errors()[0].clone();

    a.merge(b);
    a.merge(c);
    assert_eq!(a.errors(), [first, second, third]);
}

#[test]
fn warnings_do_not_affect_validity() {
    let mut result = ValidationResult::new();
    result.add_warning("something to look at");
    assert!(result.is_valid());
    assert!(result.has_warnings());
}

#[derive(Debug, Default)]
struct Fee {
    amount: Option<Decimal>,
}

impl Record for Fee {
    fn record_type(&self) -> RecordType {
        RecordType::of::<Self>()
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "amount" => Some(FieldValue::scalar(&self.amount)),
            _ => None,
        }
    }
}

impl TypedRecord for Fee {
    const NAME: &'static str = "Fee";

    fn field_metadata() -> &'static [FieldMeta] {
        const FIELDS: &[FieldMeta] = &[
            FieldMeta::new(
                "amount",
                FieldShape::Scalar(ScalarType::Decimal),
                &[
                    ("min_inclusive", MetaValue::Text("5")),
                    ("min_exclusive", MetaValue::Text("5")),
                    ("max_inclusive", MetaValue::Text("100")),
                ],
            ),
            FieldMeta::new("currency", FieldShape::Scalar(ScalarType::Text), &[]),
        ];
        FIELDS
    }
}

#[test]
fn exclusive_bound_takes_precedence() {
    let at_bound = Fee {
        amount: Some(dec("5")),
    };
    let result = validate_instance(&at_bound, false).unwrap();
    assert_eq!(result.error_count(), 1);
    assert_eq!(result.errors()[0].facet, Facet::MinExclusive);

    let above = Fee {
        amount: Some(dec("5.01")),
    };
    assert!(validate_instance(&above, false).unwrap().is_valid());
}

#[test]
fn unexposed_field_produces_a_warning() {
    let result = validate_message(&Fee::default(), false).unwrap();
    assert!(result.is_valid());
    assert_eq!(result.warnings(), ["field 'currency' is not exposed by Fee".to_string()]);
}

#[derive(Debug)]
struct Broken;

impl Record for Broken {
    fn record_type(&self) -> RecordType {
        RecordType::of::<Self>()
    }

    fn field(&self, _name: &str) -> Option<FieldValue<'_>> {
        None
    }
}

impl TypedRecord for Broken {
    const NAME: &'static str = "Broken";

    fn field_metadata() -> &'static [FieldMeta] {
        const FIELDS: &[FieldMeta] = &[FieldMeta::new(
            "code",
            FieldShape::Scalar(ScalarType::Text),
            &[("pattern", MetaValue::Text("[A-Z"))],
        )];
        FIELDS
    }
}

#[test]
fn schema_errors_surface_as_errors() {
    let err = validate_message(&Broken, false).unwrap_err();
    assert!(matches!(err, Error::Schema(SchemaError::InvalidPattern { .. })));

    assert!(get_constraints(record_type::<Broken>()).is_err());
}

#[derive(Debug, Default)]
struct Batch {
    reference: Vec<String>,
}

impl Record for Batch {
    fn record_type(&self) -> RecordType {
        RecordType::of::<Self>()
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "reference" => Some(FieldValue::scalars(&self.reference)),
            _ => None,
        }
    }
}

impl TypedRecord for Batch {
    const NAME: &'static str = "Batch";

    fn field_metadata() -> &'static [FieldMeta] {
        const FIELDS: &[FieldMeta] = &[FieldMeta::new(
            "reference",
            FieldShape::ScalarList(ScalarType::Text),
            &[
                ("min_occurs", MetaValue::Int(1)),
                ("max_occurs", MetaValue::Int(1)),
            ],
        )];
        FIELDS
    }
}

#[test]
fn exactly_one_occurrence_required() {
    let empty = validate_message(&Batch::default(), false).unwrap();
    assert_eq!(empty.error_count(), 1);
    let error = &empty.errors()[0];
    assert_eq!(error.constraint, ConstraintKind::occurs(1, Some(1)));
    assert_eq!(error.field_path.to_string(), "reference");
    assert_eq!(error.value, Some(Value::Integer(0)));

    let one = Batch {
        reference: vec!["REF-1".to_string()],
    };
    assert!(validate_message(&one, false).unwrap().is_valid());

    let two = Batch {
        reference: vec!["REF-1".to_string(), "REF-2".to_string()],
    };
    let result = validate_message(&two, false).unwrap();
    assert_eq!(result.errors()[0].facet, Facet::MaxOccurs);
}
