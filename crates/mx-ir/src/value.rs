//! Scalar values held by record fields

use rust_decimal::Decimal;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, SecondsFormat};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// A present scalar value.
///
/// There is no null variant; absence is expressed by
/// [`FieldValue::Absent`](crate::FieldValue::Absent) or `Option::None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// Text value
    String(String),

    /// Integer value
    Integer(i64),

    /// Decimal value with its written scale
    Decimal(Decimal),

    /// Boolean value
    Boolean(bool),

    /// Calendar date (`xs:date`)
    Date(NaiveDate),

    /// Time of day (`xs:time`)
    Time(NaiveTime),

    /// Date and time with offset (`xs:dateTime`)
    DateTime(DateTime<FixedOffset>),

    /// Raw bytes (`xs:base64Binary`)
    Binary(Vec<u8>),
}

impl Value {
    /// Lexical form of the value, as it would be written in the message.
    ///
    /// Binary values have no meaningful text form and return `None`.
    #[must_use]
    pub fn as_text(&self) -> Option<Cow<'_, str>> {
        match self {
            Value::String(s) => Some(Cow::Borrowed(s)),
            Value::Integer(i) => Some(Cow::Owned(i.to_string())),
            Value::Decimal(d) => Some(Cow::Owned(d.to_string())),
            Value::Boolean(b) => Some(Cow::Borrowed(if *b { "true" } else { "false" })),
            Value::Date(d) => Some(Cow::Owned(d.format("%Y-%m-%d").to_string())),
            Value::Time(t) => Some(Cow::Owned(t.format("%H:%M:%S%.f").to_string())),
            Value::DateTime(dt) => Some(Cow::Owned(dt.to_rfc3339_opts(SecondsFormat::AutoSi, true))),
            Value::Binary(_) => None,
        }
    }

    /// Numeric view for integer and decimal values.
    #[must_use]
    pub fn as_decimal(&self) -> Option<Decimal> {
        match self {
            Value::Integer(i) => Some(Decimal::from(*i)),
            Value::Decimal(d) => Some(*d),
            _ => None,
        }
    }

    /// Length as counted by the `length` facets: characters for text,
    /// octets for binary. Other values have no length.
    #[must_use]
    pub fn facet_length(&self) -> Option<usize> {
        match self {
            Value::String(s) => Some(s.chars().count()),
            Value::Binary(bytes) => Some(bytes.len()),
            _ => None,
        }
    }

    /// Short name of the variant, used in diagnostics.
    #[must_use]
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::String(_) => "string",
            Value::Integer(_) => "integer",
            Value::Decimal(_) => "decimal",
            Value::Boolean(_) => "boolean",
            Value::Date(_) => "date",
            Value::Time(_) => "time",
            Value::DateTime(_) => "dateTime",
            Value::Binary(_) => "binary",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_text() {
            Some(text) => f.write_str(&text),
            None => match self {
                Value::Binary(bytes) => write!(f, "<{} bytes>", bytes.len()),
                _ => Ok(()),
            },
        }
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_owned())
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<Decimal> for Value {
    fn from(value: Decimal) -> Self {
        Value::Decimal(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<NaiveDate> for Value {
    fn from(value: NaiveDate) -> Self {
        Value::Date(value)
    }
}

impl From<NaiveTime> for Value {
    fn from(value: NaiveTime) -> Self {
        Value::Time(value)
    }
}

impl From<DateTime<FixedOffset>> for Value {
    fn from(value: DateTime<FixedOffset>) -> Self {
        Value::DateTime(value)
    }
}

impl From<Vec<u8>> for Value {
    fn from(value: Vec<u8>) -> Self {
        Value::Binary(value)
    }
}
