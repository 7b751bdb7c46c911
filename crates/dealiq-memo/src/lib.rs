//! DealIQ Memo Normalizer
//!
//! The trusted boundary between the memo generator's loosely typed output and
//! the view layer.
//!
//! # Pipeline
//!
//! - **Resolve**: decide whether a string section is literal prose or an
//!   encoded JSON structure, and decode it when it is
//! - **Classify**: pick the renderable shape from the section identity and the
//!   resolved value
//! - **Extract**: pull the named fields each shape needs, defaulting anything
//!   the generator left out
//!
//! ```text
//! MemoPayload → RawSectionValue → Resolver → Resolved → Classifier/Extractor → NormalizedSection
//!                                                                ↓
//!                                                        NormalizeIssue log
//! ```
//!
//! Normalization is total: every input maps to some [`NormalizedSection`],
//! and recovered problems are reported as [`NormalizeIssue`] values instead of
//! errors.
//!
//! # Example
//!
//! ```rust
//! use dealiq_memo::{normalize_section, NormalizedSection, RawSectionValue, SectionKind};
//!
//! let raw = RawSectionValue::from_text(r#"{"Approach": "DCF"}"#);
//! let section = normalize_section(SectionKind::ValuationNarrative, &raw);
//!
//! assert_eq!(
//!     section,
//!     NormalizedSection::ValuationView {
//!         approach: "DCF".to_string(),
//!         fair_value: String::new(),
//!     }
//! );
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

// Core modules
pub mod classifier;
pub mod error;
pub mod extractor;
pub mod memo;
pub mod normalized;
pub mod normalizer;
pub mod payload;
pub mod raw;
pub mod resolver;
pub mod section;

// Re-exports for convenience
pub use error::{DecodeError, NormalizeIssue};
pub use memo::{CompanyView, NormalizedMemo, PriceDirection, Recommendation};
pub use normalized::{KeyValue, NormalizedSection};
pub use normalizer::{normalize_section, normalize_section_with_issues, Normalized};
pub use payload::{Memo, MemoPayload};
pub use raw::RawSectionValue;
pub use resolver::{decode_structured, resolve, Resolved};
pub use section::SectionKind;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with normalized memos
    pub use crate::memo::{NormalizedMemo, Recommendation};
    pub use crate::normalized::NormalizedSection;
    pub use crate::normalizer::normalize_section;
    pub use crate::payload::MemoPayload;
    pub use crate::raw::RawSectionValue;
    pub use crate::section::SectionKind;
}
