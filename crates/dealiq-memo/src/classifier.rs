//! Shape classifier
//!
//! Section identity wins over generic shape: the same record is a business
//! profile under "Business Overview" and a structured dump anywhere else.

use crate::error::NormalizeIssue;
use crate::extractor;
use crate::normalized::NormalizedSection;
use crate::resolver::Resolved;
use crate::section::SectionKind;
use serde_json::{Map, Value};

/// Pick and build the normalized shape for a resolved value
pub fn classify(
    section: SectionKind,
    resolved: Resolved,
    issues: &mut Vec<NormalizeIssue>,
) -> NormalizedSection {
    match (section, resolved) {
        (_, Resolved::Text(text)) => plain_text(section, text),

        (SectionKind::BusinessOverview, Resolved::Record(record)) => {
            extractor::business_profile(&record, issues)
        }

        (SectionKind::FinancialHighlights | SectionKind::KeyMetrics, Resolved::Record(record)) => {
            extractor::key_value_list(&record)
        }

        (SectionKind::RisksAndRecommendations, Resolved::List(items)) => {
            extractor::risk_list(&items, issues)
        }
        (SectionKind::RisksAndRecommendations, Resolved::Record(record)) => {
            match nested_risk_list(&record) {
                Some(items) => extractor::risk_list(items, issues),
                None => NormalizedSection::plain(section.fallback_text()),
            }
        }

        (SectionKind::ValuationNarrative, Resolved::Record(record)) => {
            extractor::valuation_view(&record, issues)
        }

        (_, Resolved::Record(record)) => structured_dump(&Value::Object(record)),
        (_, Resolved::List(items)) => structured_dump(&Value::Array(items)),
    }
}

fn plain_text(section: SectionKind, text: String) -> NormalizedSection {
    if text.is_empty() {
        NormalizedSection::plain(section.fallback_text())
    } else {
        NormalizedSection::PlainText { text }
    }
}

/// The generator sometimes wraps the risk list under the section's own name
fn nested_risk_list(record: &Map<String, Value>) -> Option<&[Value]> {
    match record.get(SectionKind::RisksAndRecommendations.key()) {
        Some(Value::Array(items)) => Some(items.as_slice()),
        _ => None,
    }
}

fn structured_dump(value: &Value) -> NormalizedSection {
    // Serializing a Value cannot fail; fall back to compact output regardless.
    let dump = serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string());
    NormalizedSection::Structured { dump }
}
