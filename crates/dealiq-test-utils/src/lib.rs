//! Testing utilities for DealIQ workspace
//!
//! Payload fixtures shaped like real generator output. Everything is returned
//! as plain JSON so any crate can use it without type coupling.

#![allow(missing_docs)]

use serde_json::{json, Value};

pub const SAMPLE_TICKER: &str = "NVDA";

pub fn company_block() -> Value {
    json!({
        "company_name": "NVIDIA Corporation",
        "Sector": "Technology",
        "Market Cap": "$3.20T",
        "Price": "$130.00",
        "Volume": "250,000,000",
        "Price Change": "-1.25%",
        "Key Metrics": {
            "peRatio": "55.10",
            "eps": "$2.36",
            "dividend": "$0.04",
            "beta": "1.68"
        }
    })
}

/// Memo whose sections arrive in every encoding the generator is known to use
pub fn mixed_encoding_memo() -> Value {
    json!({
        "Executive Summary": "Strong buy based on margins.",
        "Business Overview": json!({
            "Description": "Designs GPUs and accelerated computing platforms.",
            "Products/Services": ["Data Center GPUs", "Gaming GPUs", "Networking"],
            "Market Position": "Dominant share of AI accelerators."
        }).to_string(),
        "Financial Highlights": {
            "Revenue (TTM)": "$96.3B",
            "YoY Growth": 1.22,
            "Net Margin": "53%"
        },
        "Comparable Companies": [
            {"Company": "AMD", "Market Position": "Challenger", "Valuation Multiple": "45x P/E"},
            {"Company": "Intel", "Market Position": "Incumbent"}
        ],
        "Valuation Narrative": {"Approach": "DCF with 10% WACC", "Fair Value": "$150"},
        "Risks & Recommendations": json!({
            "Risks & Recommendations": [
                "Export restrictions",
                {"Risk": "Customer concentration", "Mitigation": "Diversifying cloud base"}
            ]
        }).to_string(),
        "Recommendation": "BUY",
        "Target Price": "$150.00"
    })
}

/// Memo where the generator returned prose for everything
pub fn plain_text_memo() -> Value {
    json!({
        "Executive Summary": "Solid quarter.",
        "Business Overview": "Makes chips.",
        "Financial Highlights": "Revenue up.",
        "Comparable Companies": "AMD, Intel.",
        "Valuation Narrative": "Fairly valued.",
        "Risks & Recommendations": "Export controls.",
        "Recommendation": "HOLD",
        "Target Price": "$130.00"
    })
}

pub fn payload_with_memo(memo: Value) -> Value {
    let mut payload = company_block();
    payload["memo"] = memo;
    payload
}

pub fn sample_payload() -> Value {
    payload_with_memo(mixed_encoding_memo())
}

pub fn sample_payload_json() -> String {
    sample_payload().to_string()
}
