//! Renderable section shapes

use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

/// One label/value row of a key-value section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyValue {
    /// Field name exactly as the generator sent it
    pub label: String,
    /// Display string
    pub value: String,
}

impl KeyValue {
    /// Create a row
    #[inline]
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// A section in the shape the view layer displays directly
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NormalizedSection {
    /// Prose
    PlainText {
        /// Display text
        text: String,
    },
    /// Business Overview record
    BusinessProfile {
        /// "Description"
        description: String,
        /// "Market Position"
        market_position: String,
        /// "Products/Services", in order
        products: Vec<String>,
    },
    /// Ordered label/value rows
    KeyValueList {
        /// Rows in the generator's key order
        entries: Vec<KeyValue>,
    },
    /// Itemized risk statements
    RiskList {
        /// One display string per risk
        risks: Vec<String>,
    },
    /// Valuation Narrative record
    ValuationView {
        /// "Approach"
        approach: String,
        /// "Fair Value"
        fair_value: String,
    },
    /// Structure no section rule claimed, pretty-printed
    Structured {
        /// Two-space indented JSON
        dump: String,
    },
}

impl NormalizedSection {
    /// Plain text section
    #[inline]
    pub fn plain(text: impl Into<String>) -> Self {
        Self::PlainText { text: text.into() }
    }

    /// Whether this is prose (including fallbacks)
    #[inline]
    #[must_use]
    pub fn is_plain_text(&self) -> bool {
        matches!(self, Self::PlainText { .. })
    }

    /// Human-readable rendering of any shape
    #[must_use]
    pub fn to_display_text(&self) -> String {
        let mut out = String::new();
        match self {
            Self::PlainText { text } => out.push_str(text),
            Self::Structured { dump } => out.push_str(dump),
            Self::BusinessProfile {
                description,
                market_position,
                products,
            } => {
                let _ = writeln!(out, "Description: {description}");
                let _ = writeln!(out, "Market Position: {market_position}");
                out.push_str("Products/Services:");
                for product in products {
                    let _ = write!(out, "\n  - {product}");
                }
            }
            Self::KeyValueList { entries } => {
                let rows: Vec<String> = entries
                    .iter()
                    .map(|entry| format!("{}: {}", entry.label, entry.value))
                    .collect();
                out.push_str(&rows.join("\n"));
            }
            Self::RiskList { risks } => {
                let rows: Vec<String> = risks.iter().map(|risk| format!("• {risk}")).collect();
                out.push_str(&rows.join("\n"));
            }
            Self::ValuationView {
                approach,
                fair_value,
            } => {
                let _ = write!(out, "Approach: {approach}\nFair Value: {fair_value}");
            }
        }
        out
    }
}
