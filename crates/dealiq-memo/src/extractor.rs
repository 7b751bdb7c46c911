//! Field extraction
//!
//! Every "missing field ⇒ empty value" decision lives here. Callers never
//! index into records directly.

use crate::error::NormalizeIssue;
use crate::normalized::{KeyValue, NormalizedSection};
use crate::section::SectionKind;
use serde_json::{Map, Number, Value};

/// "Description"
pub const DESCRIPTION: &str = "Description";
/// "Market Position"
pub const MARKET_POSITION: &str = "Market Position";
/// "Products/Services"
pub const PRODUCTS: &str = "Products/Services";
/// "Approach"
pub const APPROACH: &str = "Approach";
/// "Fair Value"
pub const FAIR_VALUE: &str = "Fair Value";
/// "Risk"
pub const RISK: &str = "Risk";
/// "Mitigation"
pub const MITIGATION: &str = "Mitigation";

/// Coerce any JSON value to display text
///
/// Strings are used verbatim, `null` is empty, and nested structures are
/// written as compact JSON. Whole-number floats drop the fractional part, so
/// `1.0` and `1e2` read `1` and `100`.
#[must_use]
pub fn display_string(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Null => String::new(),
        Value::Number(number) => number_text(number),
        other => other.to_string(),
    }
}

fn number_text(number: &Number) -> String {
    match number.as_f64() {
        // Past 1e21 the shortest form is exponential anyway
        Some(value) if number.is_f64() && value.fract() == 0.0 && value.abs() < 1e21 => {
            if value == 0.0 {
                "0".to_string()
            } else {
                format!("{value:.0}")
            }
        }
        _ => number.to_string(),
    }
}

/// A risk entry as read from the generator
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RiskEntry {
    /// Display statement
    pub risk: String,
    /// Read but not displayed
    pub mitigation: Option<String>,
}

/// Reads named fields out of one record, logging every default it substitutes
pub struct FieldReader<'a> {
    section: SectionKind,
    record: &'a Map<String, Value>,
    issues: &'a mut Vec<NormalizeIssue>,
}

impl<'a> FieldReader<'a> {
    /// Reader over `record` from `section`
    pub fn new(
        section: SectionKind,
        record: &'a Map<String, Value>,
        issues: &'a mut Vec<NormalizeIssue>,
    ) -> Self {
        Self {
            section,
            record,
            issues,
        }
    }

    fn missing(&mut self, field: &str) {
        tracing::debug!(section = %self.section, field, "missing field defaulted");
        self.issues
            .push(NormalizeIssue::missing_field(self.section, field));
    }

    /// Required text field; absent or `null` yields `""`
    pub fn text(&mut self, field: &str) -> String {
        let record = self.record;
        match record.get(field) {
            Some(Value::Null) | None => {
                self.missing(field);
                String::new()
            }
            Some(value) => display_string(value),
        }
    }

    /// Optional text field, no issue when absent
    #[must_use]
    pub fn optional_text(&self, field: &str) -> Option<String> {
        match self.record.get(field) {
            Some(Value::Null) | None => None,
            Some(value) => Some(display_string(value)),
        }
    }

    /// Sequence field; absent yields an empty sequence, a lone scalar a
    /// one-element sequence
    pub fn sequence(&mut self, field: &str) -> Vec<String> {
        let record = self.record;
        match record.get(field) {
            Some(Value::Array(items)) => items.iter().map(display_string).collect(),
            Some(Value::Null) | None => {
                self.missing(field);
                Vec::new()
            }
            Some(value) => vec![display_string(value)],
        }
    }
}

/// Business Overview record → `BusinessProfile`
pub fn business_profile(
    record: &Map<String, Value>,
    issues: &mut Vec<NormalizeIssue>,
) -> NormalizedSection {
    let mut reader = FieldReader::new(SectionKind::BusinessOverview, record, issues);
    NormalizedSection::BusinessProfile {
        description: reader.text(DESCRIPTION),
        market_position: reader.text(MARKET_POSITION),
        products: reader.sequence(PRODUCTS),
    }
}

/// Valuation Narrative record → `ValuationView`
pub fn valuation_view(
    record: &Map<String, Value>,
    issues: &mut Vec<NormalizeIssue>,
) -> NormalizedSection {
    let mut reader = FieldReader::new(SectionKind::ValuationNarrative, record, issues);
    NormalizedSection::ValuationView {
        approach: reader.text(APPROACH),
        fair_value: reader.text(FAIR_VALUE),
    }
}

/// Any record → `KeyValueList`, one row per key in insertion order
#[must_use]
pub fn key_value_list(record: &Map<String, Value>) -> NormalizedSection {
    NormalizedSection::KeyValueList {
        entries: record
            .iter()
            .map(|(label, value)| KeyValue::new(label.clone(), display_string(value)))
            .collect(),
    }
}

/// Reduce one element of a risk list
pub fn risk_entry(value: &Value, issues: &mut Vec<NormalizeIssue>) -> RiskEntry {
    match value {
        Value::String(text) => RiskEntry {
            risk: text.clone(),
            mitigation: None,
        },
        Value::Object(record) => {
            let mut reader =
                FieldReader::new(SectionKind::RisksAndRecommendations, record, issues);
            RiskEntry {
                risk: reader.text(RISK),
                mitigation: reader.optional_text(MITIGATION),
            }
        }
        other => RiskEntry {
            risk: display_string(other),
            mitigation: None,
        },
    }
}

/// Risk list → `RiskList` of display statements
pub fn risk_list(items: &[Value], issues: &mut Vec<NormalizeIssue>) -> NormalizedSection {
    NormalizedSection::RiskList {
        risks: items
            .iter()
            .map(|item| risk_entry(item, issues).risk)
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn record(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn display_string_coercions() {
        assert_eq!(display_string(&json!("x")), "x");
        assert_eq!(display_string(&json!(12)), "12");
        assert_eq!(display_string(&json!(0.25)), "0.25");
        assert_eq!(display_string(&json!(false)), "false");
        assert_eq!(display_string(&Value::Null), "");
        assert_eq!(display_string(&json!({"a": [1, 2]})), r#"{"a":[1,2]}"#);
    }

    #[test]
    fn whole_floats_display_without_fraction() {
        let metrics: Value =
            serde_json::from_str(r#"{"x": 1.0, "y": 1e2, "z": -3.0, "w": -0.0}"#).unwrap();
        let shown: Vec<String> = metrics
            .as_object()
            .unwrap()
            .values()
            .map(display_string)
            .collect();
        assert_eq!(shown, vec!["1", "100", "-3", "0"]);

        assert_eq!(display_string(&json!(53.25)), "53.25");
        assert_eq!(display_string(&json!(u64::MAX)), "18446744073709551615");
    }

    #[test]
    fn business_profile_defaults_missing_products() {
        let mut issues = Vec::new();
        let section = business_profile(
            &record(json!({"Description": "Chips", "Market Position": "Leader"})),
            &mut issues,
        );
        assert_eq!(
            section,
            NormalizedSection::BusinessProfile {
                description: "Chips".into(),
                market_position: "Leader".into(),
                products: Vec::new(),
            }
        );
        assert_eq!(
            issues,
            vec![NormalizeIssue::missing_field(SectionKind::BusinessOverview, PRODUCTS)]
        );
    }

    #[test]
    fn business_profile_stringifies_products() {
        let mut issues = Vec::new();
        let section = business_profile(
            &record(json!({
                "Description": "d",
                "Market Position": "m",
                "Products/Services": ["Cloud", 42]
            })),
            &mut issues,
        );
        let NormalizedSection::BusinessProfile { products, .. } = section else {
            panic!("expected business profile");
        };
        assert_eq!(products, vec!["Cloud".to_string(), "42".to_string()]);
        assert!(issues.is_empty());
    }

    #[test]
    fn valuation_missing_fair_value() {
        let mut issues = Vec::new();
        let section = valuation_view(&record(json!({"Approach": "DCF"})), &mut issues);
        assert_eq!(
            section,
            NormalizedSection::ValuationView {
                approach: "DCF".into(),
                fair_value: String::new(),
            }
        );
        assert_eq!(issues.len(), 1);
    }

    #[test]
    fn key_values_keep_insertion_order() {
        let section = key_value_list(&record(json!({
            "Revenue": "$10B",
            "EBITDA": 3.5,
            "Automotive": {"share": "40%"}
        })));
        assert_eq!(
            section,
            NormalizedSection::KeyValueList {
                entries: vec![
                    KeyValue::new("Revenue", "$10B"),
                    KeyValue::new("EBITDA", "3.5"),
                    KeyValue::new("Automotive", r#"{"share":"40%"}"#),
                ],
            }
        );
    }

    #[test]
    fn risk_entry_reads_record_and_keeps_mitigation_aside() {
        let mut issues = Vec::new();
        let entry = risk_entry(
            &json!({"Risk": "FX exposure", "Mitigation": "Hedging"}),
            &mut issues,
        );
        assert_eq!(entry.risk, "FX exposure");
        assert_eq!(entry.mitigation.as_deref(), Some("Hedging"));
        assert!(issues.is_empty());
    }

    #[test]
    fn risk_entry_without_risk_field_is_empty() {
        let mut issues = Vec::new();
        let entry = risk_entry(&json!({"Mitigation": "Hedging"}), &mut issues);
        assert_eq!(entry.risk, "");
        assert_eq!(issues.len(), 1);
    }

    #[test]
    fn risk_list_mixes_strings_and_records() {
        let mut issues = Vec::new();
        let section = risk_list(
            &[json!("High leverage"), json!({"Risk": "FX exposure"})],
            &mut issues,
        );
        assert_eq!(
            section,
            NormalizedSection::RiskList {
                risks: vec!["High leverage".into(), "FX exposure".into()],
            }
        );
    }
}
