//! Section identities
//!
//! The generator keys sections on literal names with embedded spaces and
//! ampersands. Those names are matched exactly; nothing is sanitized.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A named subdivision of the memo (plus the payload's key-metrics block)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SectionKind {
    /// "Executive Summary"
    #[serde(rename = "Executive Summary")]
    ExecutiveSummary,
    /// "Business Overview"
    #[serde(rename = "Business Overview")]
    BusinessOverview,
    /// "Financial Highlights"
    #[serde(rename = "Financial Highlights")]
    FinancialHighlights,
    /// "Comparable Companies"
    #[serde(rename = "Comparable Companies")]
    ComparableCompanies,
    /// "Valuation Narrative"
    #[serde(rename = "Valuation Narrative")]
    ValuationNarrative,
    /// "Risks & Recommendations"
    #[serde(rename = "Risks & Recommendations")]
    RisksAndRecommendations,
    /// "Recommendation"
    #[serde(rename = "Recommendation")]
    Recommendation,
    /// "Target Price"
    #[serde(rename = "Target Price")]
    TargetPrice,
    /// "Key Metrics" (lives beside the memo, not inside it)
    #[serde(rename = "Key Metrics")]
    KeyMetrics,
}

impl SectionKind {
    /// The eight memo sections, in display order
    pub const MEMO_SECTIONS: [SectionKind; 8] = [
        SectionKind::ExecutiveSummary,
        SectionKind::BusinessOverview,
        SectionKind::FinancialHighlights,
        SectionKind::ComparableCompanies,
        SectionKind::ValuationNarrative,
        SectionKind::RisksAndRecommendations,
        SectionKind::Recommendation,
        SectionKind::TargetPrice,
    ];

    /// Literal wire key
    #[inline]
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::ExecutiveSummary => "Executive Summary",
            Self::BusinessOverview => "Business Overview",
            Self::FinancialHighlights => "Financial Highlights",
            Self::ComparableCompanies => "Comparable Companies",
            Self::ValuationNarrative => "Valuation Narrative",
            Self::RisksAndRecommendations => "Risks & Recommendations",
            Self::Recommendation => "Recommendation",
            Self::TargetPrice => "Target Price",
            Self::KeyMetrics => "Key Metrics",
        }
    }

    /// Look up a section by its exact, case-sensitive wire key
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::MEMO_SECTIONS
            .into_iter()
            .chain(std::iter::once(Self::KeyMetrics))
            .find(|kind| kind.key() == key)
    }

    /// Text shown when the section has nothing usable
    #[must_use]
    pub const fn fallback_text(self) -> &'static str {
        match self {
            Self::ExecutiveSummary => "No summary available.",
            Self::BusinessOverview => "No business overview provided.",
            Self::FinancialHighlights => "No financial highlights provided.",
            Self::ComparableCompanies => "No comparable companies provided.",
            Self::ValuationNarrative => "No valuation narrative provided.",
            Self::RisksAndRecommendations => "No risks provided.",
            Self::Recommendation | Self::TargetPrice => "N/A",
            Self::KeyMetrics => "No key metrics provided.",
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_round_trip_through_lookup() {
        for kind in SectionKind::MEMO_SECTIONS {
            assert_eq!(SectionKind::from_key(kind.key()), Some(kind));
        }
        assert_eq!(
            SectionKind::from_key("Key Metrics"),
            Some(SectionKind::KeyMetrics)
        );
    }

    #[test]
    fn lookup_is_case_sensitive_and_literal() {
        assert_eq!(SectionKind::from_key("risks & recommendations"), None);
        assert_eq!(SectionKind::from_key("Risks and Recommendations"), None);
        assert_eq!(SectionKind::from_key("Risks_Recommendations"), None);
    }

    #[test]
    fn serializes_as_wire_key() {
        let json = serde_json::to_string(&SectionKind::RisksAndRecommendations).unwrap();
        assert_eq!(json, "\"Risks & Recommendations\"");
    }

    #[test]
    fn display_uses_wire_key() {
        assert_eq!(SectionKind::TargetPrice.to_string(), "Target Price");
    }
}
