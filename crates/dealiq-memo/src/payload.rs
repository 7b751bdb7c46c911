//! Wire payload returned by the memo generator
//!
//! Field names are exact and case-sensitive, spaces and ampersands included.
//! Absent fields default to empty text rather than failing the decode.

use crate::extractor::display_string;
use crate::raw::RawSectionValue;
use crate::section::SectionKind;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Root response of one memo request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemoPayload {
    /// Company display name
    #[serde(default, deserialize_with = "display_field")]
    pub company_name: String,
    /// Sector
    #[serde(rename = "Sector", default, deserialize_with = "display_field")]
    pub sector: String,
    /// Formatted market capitalisation
    #[serde(rename = "Market Cap", default, deserialize_with = "display_field")]
    pub market_cap: String,
    /// Formatted last price
    #[serde(rename = "Price", default, deserialize_with = "display_field")]
    pub price: String,
    /// Formatted trading volume
    #[serde(rename = "Volume", default, deserialize_with = "display_field")]
    pub volume: String,
    /// Signed percentage change
    #[serde(rename = "Price Change", default, deserialize_with = "display_field")]
    pub price_change: String,
    /// Metric name → display string, keys not fixed in advance
    #[serde(rename = "Key Metrics", default)]
    pub key_metrics: RawSectionValue,
    /// Generated narrative
    #[serde(default)]
    pub memo: Memo,
}

impl MemoPayload {
    /// Decode a response body
    ///
    /// Sections of any shape decode, but the body as a whole is bound by the
    /// JSON decoder's nesting limit of 128 levels. A body nested deeper fails
    /// here, before any section is normalized.
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }

    /// Raw value for any section, key metrics included
    #[must_use]
    pub fn section(&self, kind: SectionKind) -> &RawSectionValue {
        match kind {
            SectionKind::KeyMetrics => &self.key_metrics,
            other => self.memo.section(other),
        }
    }
}

/// The eight generated sections, each independently polymorphic
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Memo {
    /// "Executive Summary"
    #[serde(rename = "Executive Summary", default)]
    pub executive_summary: RawSectionValue,
    /// "Business Overview"
    #[serde(rename = "Business Overview", default)]
    pub business_overview: RawSectionValue,
    /// "Financial Highlights"
    #[serde(rename = "Financial Highlights", default)]
    pub financial_highlights: RawSectionValue,
    /// "Comparable Companies"
    #[serde(rename = "Comparable Companies", default)]
    pub comparable_companies: RawSectionValue,
    /// "Valuation Narrative"
    #[serde(rename = "Valuation Narrative", default)]
    pub valuation_narrative: RawSectionValue,
    /// "Risks & Recommendations"
    #[serde(rename = "Risks & Recommendations", default)]
    pub risks_and_recommendations: RawSectionValue,
    /// "Recommendation"
    #[serde(rename = "Recommendation", default)]
    pub recommendation: RawSectionValue,
    /// "Target Price"
    #[serde(rename = "Target Price", default)]
    pub target_price: RawSectionValue,
}

impl Memo {
    /// Raw value for a memo section
    ///
    /// Key metrics are not part of the memo and read as empty text here.
    #[must_use]
    pub fn section(&self, kind: SectionKind) -> &RawSectionValue {
        static EMPTY: RawSectionValue = RawSectionValue::Text(String::new());
        match kind {
            SectionKind::ExecutiveSummary => &self.executive_summary,
            SectionKind::BusinessOverview => &self.business_overview,
            SectionKind::FinancialHighlights => &self.financial_highlights,
            SectionKind::ComparableCompanies => &self.comparable_companies,
            SectionKind::ValuationNarrative => &self.valuation_narrative,
            SectionKind::RisksAndRecommendations => &self.risks_and_recommendations,
            SectionKind::Recommendation => &self.recommendation,
            SectionKind::TargetPrice => &self.target_price,
            SectionKind::KeyMetrics => &EMPTY,
        }
    }
}

fn display_field<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Value::deserialize(deserializer).map(|value| display_string(&value))
}
