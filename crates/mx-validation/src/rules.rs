//! Constraint checks for single scalar values
//!
//! Every check is a pure function of a value and one constraint. A
//! constraint that does not apply to the value's kind (a length on a
//! number, a bound on text) yields no violation.

use mx_ir::{Decimal, Value};
use mx_schema::{AllowedValues, ConstraintKind, Facet, Pattern};

/// A failed facet, not yet attributed to a path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub facet: Facet,
    pub message: String,
}

impl Violation {
    pub fn new(facet: Facet, message: impl Into<String>) -> Self {
        Self {
            facet,
            message: message.into(),
        }
    }
}

/// Message used when a required value is missing
pub const REQUIRED_MESSAGE: &str = "Field is required but no value was provided";

/// Check a present value against one constraint, in facet order.
///
/// `Required` and `Occurs` concern presence and repetition and never fail
/// for a single present value.
#[must_use]
pub fn check_constraint(value: &Value, constraint: &ConstraintKind) -> Vec<Violation> {
    match constraint {
        ConstraintKind::Pattern(pattern) => check_pattern(value, pattern).into_iter().collect(),
        ConstraintKind::Length { min, max } => {
            check_length(value, *min, *max).into_iter().collect()
        }
        ConstraintKind::NumericBound {
            min_inclusive,
            max_inclusive,
            min_exclusive,
            max_exclusive,
        } => check_numeric_bound(
            value,
            min_inclusive.as_ref(),
            max_inclusive.as_ref(),
            min_exclusive.as_ref(),
            max_exclusive.as_ref(),
        ),
        ConstraintKind::DecimalPrecision {
            total_digits,
            fraction_digits,
        } => check_precision(value, *total_digits, *fraction_digits),
        ConstraintKind::Enumerated(allowed) => {
            check_enumerated(value, allowed).into_iter().collect()
        }
        ConstraintKind::Required(_) | ConstraintKind::Occurs { .. } => Vec::new(),
    }
}

/// Whole-value pattern match on the lexical form
#[must_use]
pub fn check_pattern(value: &Value, pattern: &Pattern) -> Option<Violation> {
    let text = value.as_text()?;
    if pattern.is_full_match(&text) {
        return None;
    }
    Some(Violation::new(
        Facet::Pattern,
        format!("Value '{text}' does not match required pattern '{pattern}'"),
    ))
}

/// Character length for text, octet length for binary
#[must_use]
pub fn check_length(value: &Value, min: Option<usize>, max: Option<usize>) -> Option<Violation> {
    let len = value.facet_length()?;

    if let Some(min) = min {
        if len < min {
            return Some(Violation::new(
                Facet::MinLength,
                format!("Length {len} is less than minimum required length {min}"),
            ));
        }
    }

    if let Some(max) = max {
        if len > max {
            return Some(Violation::new(
                Facet::MaxLength,
                format!("Length {len} exceeds maximum allowed length {max}"),
            ));
        }
    }

    None
}

/// Numeric bounds; an exclusive bound replaces the inclusive one on its side
#[must_use]
pub fn check_numeric_bound(
    value: &Value,
    min_inclusive: Option<&Decimal>,
    max_inclusive: Option<&Decimal>,
    min_exclusive: Option<&Decimal>,
    max_exclusive: Option<&Decimal>,
) -> Vec<Violation> {
    let Some(number) = value.as_decimal() else {
        return Vec::new();
    };
    let mut violations = Vec::new();

    if let Some(min) = min_exclusive {
        if number <= *min {
            violations.push(Violation::new(
                Facet::MinExclusive,
                format!("Value {number} must be greater than {min}"),
            ));
        }
    } else if let Some(min) = min_inclusive {
        if number < *min {
            violations.push(Violation::new(
                Facet::MinInclusive,
                format!("Value {number} is less than minimum allowed value {min}"),
            ));
        }
    }

    if let Some(max) = max_exclusive {
        if number >= *max {
            violations.push(Violation::new(
                Facet::MaxExclusive,
                format!("Value {number} must be less than {max}"),
            ));
        }
    } else if let Some(max) = max_inclusive {
        if number > *max {
            violations.push(Violation::new(
                Facet::MaxInclusive,
                format!("Value {number} exceeds maximum allowed value {max}"),
            ));
        }
    }

    violations
}

/// Digit counts of a numeric value
#[must_use]
pub fn check_precision(
    value: &Value,
    total_digits: Option<u32>,
    fraction_digits: Option<u32>,
) -> Vec<Violation> {
    let Some(number) = value.as_decimal() else {
        return Vec::new();
    };
    let mut violations = Vec::new();

    if let Some(max) = total_digits {
        let total = self::total_digits(&number);
        if total > max {
            violations.push(Violation::new(
                Facet::TotalDigits,
                format!("Total digits {total} exceeds maximum allowed {max}"),
            ));
        }
    }

    if let Some(max) = fraction_digits {
        let fraction = number.scale();
        if fraction > max {
            violations.push(Violation::new(
                Facet::FractionDigits,
                format!("Fraction digits {fraction} exceeds maximum allowed {max}"),
            ));
        }
    }

    violations
}

/// Significant digits of the unscaled value, trailing fraction zeros included
/// as written. Zero has one digit.
fn total_digits(number: &Decimal) -> u32 {
    let mut magnitude = number.mantissa().unsigned_abs();
    let mut digits = 1;
    while magnitude >= 10 {
        magnitude /= 10;
        digits += 1;
    }
    digits
}

/// Case-sensitive code membership
#[must_use]
pub fn check_enumerated(value: &Value, allowed: &AllowedValues) -> Option<Violation> {
    let text = value.as_text()?;
    if allowed.contains(&text) {
        return None;
    }
    Some(Violation::new(
        Facet::Enumeration,
        format!("Value '{text}' is not a valid enum value. Valid values: {allowed}"),
    ))
}

/// Repetition count of a list field
#[must_use]
pub fn check_occurs(count: usize, min: usize, max: Option<usize>) -> Option<Violation> {
    if count < min {
        return Some(Violation::new(
            Facet::MinOccurs,
            format!("List has {count} items but minimum required is {min}"),
        ));
    }
    match max {
        Some(max) if count > max => Some(Violation::new(
            Facet::MaxOccurs,
            format!("List has {count} items but maximum allowed is {max}"),
        )),
        _ => None,
    }
}
