//! Section normalizer entry points

use crate::classifier::classify;
use crate::error::NormalizeIssue;
use crate::normalized::NormalizedSection;
use crate::raw::RawSectionValue;
use crate::resolver::resolve_logged;
use crate::section::SectionKind;

/// A normalized section plus whatever was recovered along the way
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    /// Renderable shape
    pub section: NormalizedSection,
    /// Recovered problems, in the order they were met
    pub issues: Vec<NormalizeIssue>,
}

/// Normalize one section value
///
/// Never fails; see [`normalize_section_with_issues`] for diagnostics.
#[must_use]
pub fn normalize_section(section: SectionKind, raw: &RawSectionValue) -> NormalizedSection {
    normalize_section_with_issues(section, raw).section
}

/// Normalize one section value, keeping the recovered issues
#[must_use]
pub fn normalize_section_with_issues(section: SectionKind, raw: &RawSectionValue) -> Normalized {
    let mut issues = Vec::new();
    let resolved = resolve_logged(section, raw, &mut issues);
    let section = classify(section, resolved, &mut issues);
    Normalized { section, issues }
}
