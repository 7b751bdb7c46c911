//! Ambiguous-encoding resolver
//!
//! Turns a [`RawSectionValue`] into a [`Resolved`] value. Strings get exactly
//! one decode attempt; a string that decodes to another string is not decoded
//! again.

use crate::error::{DecodeError, NormalizeIssue};
use crate::raw::RawSectionValue;
use crate::section::SectionKind;
use serde_json::{Map, Value};

/// A section value after encoding ambiguity has been settled
#[derive(Debug, Clone, PartialEq)]
pub enum Resolved {
    /// Literal text, trimmed
    Text(String),
    /// Named fields
    Record(Map<String, Value>),
    /// Ordered elements
    List(Vec<Value>),
}

/// Decode a string as one JSON object or array
///
/// The whole trimmed string must be a single value; trailing content is a
/// syntax error. Scalars are rejected.
pub fn decode_structured(text: &str) -> Result<Resolved, DecodeError> {
    match serde_json::from_str::<Value>(text.trim())? {
        Value::Object(map) => Ok(Resolved::Record(map)),
        Value::Array(items) => Ok(Resolved::List(items)),
        Value::String(_) => Err(DecodeError::Scalar("string")),
        Value::Number(_) => Err(DecodeError::Scalar("number")),
        Value::Bool(_) => Err(DecodeError::Scalar("boolean")),
        Value::Null => Err(DecodeError::Scalar("null")),
    }
}

/// Resolve a raw value, discarding diagnostics
#[must_use]
pub fn resolve(raw: &RawSectionValue) -> Resolved {
    resolve_text_or_structure(raw, |_| {})
}

/// Resolve a raw value, recording an issue when a structured-looking string
/// had to be kept as text
pub(crate) fn resolve_logged(
    section: SectionKind,
    raw: &RawSectionValue,
    issues: &mut Vec<NormalizeIssue>,
) -> Resolved {
    resolve_text_or_structure(raw, |err| {
        tracing::debug!(%section, error = %err, "structured-looking text kept as literal");
        issues.push(NormalizeIssue::encoding_ambiguity(section, err.to_string()));
    })
}

fn resolve_text_or_structure(
    raw: &RawSectionValue,
    mut on_ambiguous: impl FnMut(&DecodeError),
) -> Resolved {
    match raw {
        RawSectionValue::Record(map) => Resolved::Record(map.clone()),
        RawSectionValue::List(items) => Resolved::List(items.clone()),
        RawSectionValue::EncodedText { decoded, .. } => decoded.clone(),
        RawSectionValue::Text(text) => {
            let trimmed = text.trim();
            // Anything else cannot decode to a record or list
            if !looks_structured(trimmed) {
                return Resolved::Text(trimmed.to_string());
            }
            match decode_structured(trimmed) {
                Ok(resolved) => resolved,
                Err(err) => {
                    on_ambiguous(&err);
                    Resolved::Text(trimmed.to_string())
                }
            }
        }
    }
}

/// Prose never starts with these; a failed decode of such text is worth noting
fn looks_structured(trimmed: &str) -> bool {
    trimmed.starts_with(['{', '[', '"'])
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn structured_values_pass_through() {
        let raw = RawSectionValue::from_value(json!({"a": 1}));
        assert_eq!(resolve(&raw), Resolved::Record(json!({"a": 1}).as_object().unwrap().clone()));

        let raw = RawSectionValue::from_value(json!(["x"]));
        assert_eq!(resolve(&raw), Resolved::List(vec![json!("x")]));
    }

    #[test]
    fn encoded_object_decodes() {
        let raw = RawSectionValue::from_text("  {\"headline\": \"Growth story\"}\n");
        let expected = json!({"headline": "Growth story"});
        assert_eq!(resolve(&raw), Resolved::Record(expected.as_object().unwrap().clone()));
    }

    #[test]
    fn encoded_array_decodes() {
        let raw = RawSectionValue::Text("[\"High leverage\"]".into());
        assert_eq!(resolve(&raw), Resolved::List(vec![json!("High leverage")]));
    }

    #[test]
    fn prose_is_trimmed_text() {
        let raw = RawSectionValue::Text("  Strong buy based on margins. \n".into());
        assert_eq!(resolve(&raw), Resolved::Text("Strong buy based on margins.".into()));
    }

    #[test]
    fn trailing_garbage_is_rejected() {
        assert!(decode_structured(r#"{"a": 1} and more"#).is_err());
        assert!(decode_structured(r#"[1, 2]]"#).is_err());

        let raw = RawSectionValue::Text(r#"{"a": 1} trailing"#.into());
        assert_eq!(resolve(&raw), Resolved::Text(r#"{"a": 1} trailing"#.into()));
    }

    #[test]
    fn scalars_are_not_structure() {
        assert!(matches!(decode_structured("42"), Err(DecodeError::Scalar("number"))));
        assert!(matches!(decode_structured("null"), Err(DecodeError::Scalar("null"))));
        assert!(matches!(decode_structured("\"x\""), Err(DecodeError::Scalar("string"))));
    }

    #[test]
    fn doubly_encoded_string_stays_text() {
        let inner = json!({"headline": "Growth"}).to_string();
        let outer = Value::String(inner).to_string();

        let raw = RawSectionValue::Text(outer.clone());
        assert_eq!(resolve(&raw), Resolved::Text(outer));
    }

    #[test]
    fn ambiguity_is_logged_only_for_structured_looking_text() {
        let mut issues = Vec::new();
        resolve_logged(
            SectionKind::ExecutiveSummary,
            &RawSectionValue::Text("plain prose".into()),
            &mut issues,
        );
        assert!(issues.is_empty());

        resolve_logged(
            SectionKind::ExecutiveSummary,
            &RawSectionValue::Text("{\"unterminated\": ".into()),
            &mut issues,
        );
        assert_eq!(issues.len(), 1);
        assert!(matches!(issues[0], NormalizeIssue::EncodingAmbiguity { .. }));
    }

    #[test]
    fn encoded_text_uses_boundary_decode() {
        let decoded = Resolved::List(vec![json!("Supply constraints")]);
        let raw = RawSectionValue::EncodedText {
            text: "not what was decoded".into(),
            decoded: decoded.clone(),
        };
        assert_eq!(resolve(&raw), decoded);
    }

    #[test]
    fn empty_string_is_empty_text() {
        let raw = RawSectionValue::Text(String::new());
        assert_eq!(resolve(&raw), Resolved::Text(String::new()));
    }
}
