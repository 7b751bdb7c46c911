//! Terminal rendering of a normalized memo
//!
//! Purely declarative: every decision about shape was made by the normalizer.

use crate::ticker::Ticker;
use dealiq_memo::{NormalizedMemo, NormalizedSection, PriceDirection, SectionKind};
use std::fmt::Write as _;

/// Display groups, in the order the memo is read
const GROUPS: [(&str, &[SectionKind]); 4] = [
    ("Summary", &[SectionKind::ExecutiveSummary]),
    (
        "Overview",
        &[
            SectionKind::BusinessOverview,
            SectionKind::FinancialHighlights,
            SectionKind::ComparableCompanies,
        ],
    ),
    ("Risks", &[SectionKind::RisksAndRecommendations]),
    ("Recommendation", &[SectionKind::ValuationNarrative]),
];

/// Render the whole memo as plain text
#[must_use]
pub fn render_memo(memo: &NormalizedMemo, ticker: Option<&Ticker>) -> String {
    let mut out = String::new();
    render_header(&mut out, memo, ticker);

    for (title, kinds) in GROUPS {
        let _ = writeln!(out, "\n== {title} ==");
        if title == "Recommendation" {
            let _ = writeln!(out, "Recommendation: {}", memo.recommendation);
            let _ = writeln!(out, "Target Price: {}", memo.target_price());
        }
        for kind in kinds {
            if let Some(section) = memo.section(*kind) {
                let _ = writeln!(out, "\n{kind}");
                out.push_str(&indent(&render_section(section)));
                out.push('\n');
            }
        }
    }
    out
}

fn render_header(out: &mut String, memo: &NormalizedMemo, ticker: Option<&Ticker>) {
    let company = &memo.company;
    match ticker {
        Some(ticker) => {
            let _ = writeln!(out, "{} ({ticker})", company.name);
        }
        None => {
            let _ = writeln!(out, "{}", company.name);
        }
    }
    let arrow = match company.direction {
        PriceDirection::Up => '▲',
        PriceDirection::Down => '▼',
    };
    let _ = writeln!(out, "{}", company.sector);
    let _ = writeln!(out, "{}  {arrow} {}", company.price, company.price_change);

    let _ = writeln!(out, "\n== Key Metrics ==");
    out.push_str(&indent(&render_section(&memo.key_metrics)));
    out.push('\n');
    let _ = writeln!(out, "  Market Cap: {}", company.market_cap);
    let _ = writeln!(out, "  Volume: {}", company.volume);
}

/// Body text of one section
#[must_use]
pub fn render_section(section: &NormalizedSection) -> String {
    section.to_display_text()
}

fn indent(text: &str) -> String {
    text.lines()
        .map(|line| format!("  {line}"))
        .collect::<Vec<_>>()
        .join("\n")
}
