//! Normalized memo view-model
//!
//! Everything the view layer needs, already interpreted: no consumer of a
//! [`NormalizedMemo`] looks at raw generator output again.

use crate::error::NormalizeIssue;
use crate::normalized::NormalizedSection;
use crate::normalizer::normalize_section_with_issues;
use crate::payload::MemoPayload;
use crate::resolver::{resolve, Resolved};
use crate::section::SectionKind;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of the day's price change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceDirection {
    /// Flat or positive
    Up,
    /// Change text starts with `-`
    Down,
}

impl PriceDirection {
    /// Classify a formatted change such as `"+1.20%"` or `"-0.45%"`
    #[must_use]
    pub fn from_change(change: &str) -> Self {
        if change.trim_start().starts_with('-') {
            Self::Down
        } else {
            Self::Up
        }
    }
}

/// Investment recommendation label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "label", content = "text", rename_all = "snake_case")]
pub enum Recommendation {
    /// "BUY"
    Buy,
    /// "SELL"
    Sell,
    /// "HOLD"
    Hold,
    /// Free text that is none of the known labels
    Unrecognized(String),
    /// Nothing provided
    Missing,
}

impl Recommendation {
    /// Parse the Recommendation section text
    ///
    /// Matching ignores case and surrounding whitespace but is otherwise exact.
    /// This is looser than the web view, which compares `BUY` and `SELL`
    /// verbatim: there `"buy"` gets the neutral style, here it is [`Self::Buy`].
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            Self::Missing
        } else if trimmed.eq_ignore_ascii_case("BUY") {
            Self::Buy
        } else if trimmed.eq_ignore_ascii_case("SELL") {
            Self::Sell
        } else if trimmed.eq_ignore_ascii_case("HOLD") {
            Self::Hold
        } else {
            Self::Unrecognized(trimmed.to_string())
        }
    }

    /// Whether the label is one of BUY / SELL / HOLD
    #[inline]
    #[must_use]
    pub fn is_known(&self) -> bool {
        matches!(self, Self::Buy | Self::Sell | Self::Hold)
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Buy => f.write_str("BUY"),
            Self::Sell => f.write_str("SELL"),
            Self::Hold => f.write_str("HOLD"),
            Self::Unrecognized(text) => f.write_str(text),
            Self::Missing => f.write_str(SectionKind::Recommendation.fallback_text()),
        }
    }
}

/// Company identity block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyView {
    /// Display name
    pub name: String,
    /// Sector
    pub sector: String,
    /// Market capitalisation
    pub market_cap: String,
    /// Last price
    pub price: String,
    /// Signed change text
    pub price_change: String,
    /// Derived from `price_change`
    pub direction: PriceDirection,
    /// Trading volume
    pub volume: String,
}

/// A fully normalized memo, ready for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedMemo {
    /// Company identity
    pub company: CompanyView,
    /// Key metrics as a key-value list (or fallback text)
    pub key_metrics: NormalizedSection,
    /// The eight memo sections in display order
    pub sections: IndexMap<SectionKind, NormalizedSection>,
    /// Parsed recommendation label
    pub recommendation: Recommendation,
    /// Recovered problems across all sections
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub issues: Vec<NormalizeIssue>,
}

impl NormalizedMemo {
    /// Normalize every section of a payload
    #[must_use]
    pub fn from_payload(payload: &MemoPayload) -> Self {
        let mut issues = Vec::new();

        let key_metrics = {
            let normalized =
                normalize_section_with_issues(SectionKind::KeyMetrics, &payload.key_metrics);
            issues.extend(normalized.issues);
            normalized.section
        };

        let sections = SectionKind::MEMO_SECTIONS
            .into_iter()
            .map(|kind| {
                let normalized = normalize_section_with_issues(kind, payload.memo.section(kind));
                issues.extend(normalized.issues);
                (kind, normalized.section)
            })
            .collect();

        let recommendation = match resolve(&payload.memo.recommendation) {
            Resolved::Text(text) => Recommendation::parse(&text),
            Resolved::Record(_) | Resolved::List(_) => Recommendation::Missing,
        };

        if !issues.is_empty() {
            tracing::debug!(count = issues.len(), "memo normalized with recovered issues");
        }

        Self {
            company: CompanyView {
                name: payload.company_name.clone(),
                sector: payload.sector.clone(),
                market_cap: payload.market_cap.clone(),
                price: payload.price.clone(),
                price_change: payload.price_change.clone(),
                direction: PriceDirection::from_change(&payload.price_change),
                volume: payload.volume.clone(),
            },
            key_metrics,
            sections,
            recommendation,
            issues,
        }
    }

    /// Normalized section by identity
    #[must_use]
    pub fn section(&self, kind: SectionKind) -> Option<&NormalizedSection> {
        match kind {
            SectionKind::KeyMetrics => Some(&self.key_metrics),
            other => self.sections.get(&other),
        }
    }

    /// Target price display text (`N/A` when absent)
    #[must_use]
    pub fn target_price(&self) -> String {
        self.section(SectionKind::TargetPrice)
            .map_or_else(
                || SectionKind::TargetPrice.fallback_text().to_string(),
                NormalizedSection::to_display_text,
            )
    }
}

impl From<&MemoPayload> for NormalizedMemo {
    fn from(payload: &MemoPayload) -> Self {
        Self::from_payload(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn price_direction_from_sign() {
        assert_eq!(PriceDirection::from_change("-1.25%"), PriceDirection::Down);
        assert_eq!(PriceDirection::from_change("+0.40%"), PriceDirection::Up);
        assert_eq!(PriceDirection::from_change("N/A"), PriceDirection::Up);
    }

    #[test]
    fn recommendation_labels() {
        assert_eq!(Recommendation::parse("BUY"), Recommendation::Buy);
        assert_eq!(Recommendation::parse(" sell "), Recommendation::Sell);
        assert_eq!(Recommendation::parse("Hold"), Recommendation::Hold);
        assert_eq!(Recommendation::parse("buy"), Recommendation::Buy);
        assert_eq!(Recommendation::parse(""), Recommendation::Missing);
        assert_eq!(
            Recommendation::parse("BUY on dips"),
            Recommendation::Unrecognized("BUY on dips".into())
        );
        assert!(!Recommendation::parse("Accumulate").is_known());
    }

    #[test]
    fn recommendation_display() {
        assert_eq!(Recommendation::Buy.to_string(), "BUY");
        assert_eq!(Recommendation::Missing.to_string(), "N/A");
    }

    #[test]
    fn empty_payload_uses_fallbacks() {
        let memo = NormalizedMemo::from_payload(&MemoPayload::default());

        assert_eq!(memo.sections.len(), 8);
        assert_eq!(
            memo.section(SectionKind::RisksAndRecommendations),
            Some(&NormalizedSection::plain("No risks provided."))
        );
        assert_eq!(memo.key_metrics, NormalizedSection::plain("No key metrics provided."));
        assert_eq!(memo.target_price(), "N/A");
        assert_eq!(memo.recommendation, Recommendation::Missing);
        assert!(memo.issues.is_empty());
    }

    #[test]
    fn sections_keep_display_order() {
        let memo = NormalizedMemo::from_payload(&MemoPayload::default());
        let order: Vec<SectionKind> = memo.sections.keys().copied().collect();
        assert_eq!(order, SectionKind::MEMO_SECTIONS.to_vec());
    }
}
