//! YAML rendering of validation results

use crate::result::ValidationResult;
use crate::Result;
use mx_schema::Facet;
use serde::Serialize;
use serde_yaml::{Mapping, Value as YamlValue};

#[derive(Serialize)]
struct Report<'a> {
    validation_status: &'static str,
    error_count: usize,
    warning_count: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    errors: Vec<ReportEntry<'a>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    warnings: Vec<&'a str>,
}

#[derive(Serialize)]
struct ReportEntry<'a> {
    field: String,
    constraint: Facet,
    /// Outer `None` leaves the key out; `Some(None)` writes `null`
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<Option<String>>,
    message: &'a str,
}

#[derive(Serialize)]
struct Summary {
    status: &'static str,
    errors: usize,
    warnings: usize,
    #[serde(skip_serializing_if = "Mapping::is_empty")]
    error_breakdown: Mapping,
}

fn status(result: &ValidationResult) -> &'static str {
    if result.is_valid() { "PASSED" } else { "FAILED" }
}

/// Renders validation results as YAML documents
#[derive(Debug, Clone)]
pub struct ValidationReporter {
    include_values: bool,
}

impl ValidationReporter {
    /// Create a new validation reporter
    #[must_use]
    pub fn new() -> Self {
        Self {
            include_values: true,
        }
    }

    /// Whether offending values are written into the full report
    #[must_use]
    pub fn with_values(mut self, include_values: bool) -> Self {
        self.include_values = include_values;
        self
    }

    /// Full report: status, counts, every error and warning.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Report`] if serialization fails.
    pub fn to_yaml(&self, result: &ValidationResult) -> Result<String> {
        let errors = result
            .errors()
            .iter()
            .map(|error| ReportEntry {
                field: error.field_path.to_string(),
                constraint: error.facet,
                value: self
                    .include_values
                    .then(|| error.value.as_ref().map(ToString::to_string)),
                message: &error.message,
            })
            .collect();

        let report = Report {
            validation_status: status(result),
            error_count: result.error_count(),
            warning_count: result.warnings().len(),
            errors,
            warnings: result.warnings().iter().map(String::as_str).collect(),
        };
        Ok(serde_yaml::to_string(&report)?)
    }

    /// Summary: status, counts and error count per facet in first-seen order.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Report`] if serialization fails.
    pub fn to_summary_yaml(&self, result: &ValidationResult) -> Result<String> {
        let mut breakdown: Vec<(Facet, u64)> = Vec::new();
        for error in result.errors() {
            match breakdown.iter_mut().find(|(facet, _)| *facet == error.facet) {
                Some((_, count)) => *count += 1,
                None => breakdown.push((error.facet, 1)),
            }
        }

        let error_breakdown = breakdown
            .into_iter()
            .map(|(facet, count)| {
                (
                    YamlValue::String(facet.as_str().to_string()),
                    YamlValue::Number(count.into()),
                )
            })
            .collect();

        let summary = Summary {
            status: status(result),
            errors: result.error_count(),
            warnings: result.warnings().len(),
            error_breakdown,
        };
        Ok(serde_yaml::to_string(&summary)?)
    }
}

impl Default for ValidationReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidationResult {
    /// Full YAML report with default reporter settings
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Report`] if serialization fails.
    pub fn to_yaml(&self) -> Result<String> {
        ValidationReporter::new().to_yaml(self)
    }

    /// YAML summary with default reporter settings
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Report`] if serialization fails.
    pub fn to_summary_yaml(&self) -> Result<String> {
        ValidationReporter::new().to_summary_yaml(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mx_ir::{FieldPath, Value};
    use mx_schema::ConstraintKind;

    fn failing_result() -> ValidationResult {
        let mut result = ValidationResult::new();
        result.add_error(
            "grp_hdr.msg_id".parse::<FieldPath>().unwrap(),
            Some(Value::from("X".repeat(36))),
            ConstraintKind::length(Some(1), Some(35)),
            Facet::MaxLength,
            "Length 36 exceeds maximum allowed length 35",
        );
        result.add_error(
            FieldPath::field("ccy"),
            Some(Value::from("eur")),
            ConstraintKind::pattern("[A-Z]{3,3}").unwrap(),
            Facet::Pattern,
            "Value 'eur' does not match required pattern '[A-Z]{3,3}'",
        );
        result.add_error(
            FieldPath::field("end_to_end_id"),
            None,
            ConstraintKind::Required(true),
            Facet::Required,
            "Field is required but no value was provided",
        );
        result.add_error(
            FieldPath::field("uetr"),
            Some(Value::from("nope")),
            ConstraintKind::pattern("[a-f0-9]{8}").unwrap(),
            Facet::Pattern,
            "Value 'nope' does not match required pattern '[a-f0-9]{8}'",
        );
        result.add_warning("field 'x' is not exposed by Foo");
        result
    }

    #[test]
    fn test_passed_report() {
        let yaml = ValidationResult::new().to_yaml().unwrap();
        let parsed: YamlValue = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed["validation_status"], "PASSED");
        assert_eq!(parsed["error_count"], 0);
        assert!(parsed.get("errors").is_none());
    }

    #[test]
    fn test_failed_report() {
        let yaml = failing_result().to_yaml().unwrap();
        let parsed: YamlValue = serde_yaml::from_str(&yaml).unwrap();

        assert_eq!(parsed["validation_status"], "FAILED");
        assert_eq!(parsed["error_count"], 4);
        assert_eq!(parsed["warning_count"], 1);

        let first = &parsed["errors"][0];
        assert_eq!(first["field"], "grp_hdr.msg_id");
        assert_eq!(first["constraint"], "max_length");
        assert_eq!(first["message"], "Length 36 exceeds maximum allowed length 35");

        assert_eq!(parsed["errors"][1]["value"], "eur");
        let absent = parsed["errors"][2].get("value").unwrap();
        assert!(absent.is_null());
        assert_eq!(parsed["warnings"][0], "field 'x' is not exposed by Foo");
    }

    #[test]
    fn test_report_without_values() {
        let yaml = ValidationReporter::new()
            .with_values(false)
            .to_yaml(&failing_result())
            .unwrap();
        let parsed: YamlValue = serde_yaml::from_str(&yaml).unwrap();
        assert!(parsed["errors"][1].get("value").is_none());
    }

    #[test]
    fn test_summary_breakdown_order() {
        let yaml = failing_result().to_summary_yaml().unwrap();
        let parsed: YamlValue = serde_yaml::from_str(&yaml).unwrap();

        assert_eq!(parsed["status"], "FAILED");
        assert_eq!(parsed["errors"], 4);
        assert_eq!(parsed["warnings"], 1);

        let breakdown = parsed["error_breakdown"].as_mapping().unwrap();
        let keys: Vec<&str> = breakdown.keys().filter_map(YamlValue::as_str).collect();
        assert_eq!(keys, vec!["max_length", "pattern", "required"]);
        assert_eq!(parsed["error_breakdown"]["pattern"], 2);
    }

    #[test]
    fn test_summary_of_valid_result() {
        let yaml = ValidationResult::new().to_summary_yaml().unwrap();
        assert!(yaml.contains("status: PASSED"));
        assert!(!yaml.contains("error_breakdown"));
    }
}
