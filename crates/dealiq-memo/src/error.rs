//! Error types for the memo normalizer
//!
//! Nothing here ever fails a render. Decode problems are recovered inside the
//! normalizer and surface only as [`NormalizeIssue`] records:
//! - Encoding ambiguity (a string that looked structured but did not decode)
//! - Missing fields (an expected key absent from a record)

use crate::section::SectionKind;
use serde::{Deserialize, Serialize};

/// Why a string did not decode into a structured value
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// Not valid JSON, or trailing content after one value
    #[error("invalid structured syntax: {0}")]
    Syntax(#[from] serde_json::Error),

    /// Valid JSON, but a scalar rather than an object or array
    #[error("decoded to a {0}, not an object or array")]
    Scalar(&'static str),
}

/// A recovered, non-fatal problem met while normalizing a section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[serde(tag = "issue", rename_all = "snake_case")]
pub enum NormalizeIssue {
    /// A string that looked like encoded structure was kept as literal text
    #[error("{section}: kept as text ({reason})")]
    EncodingAmbiguity {
        /// Section the value came from
        section: SectionKind,
        /// Decoder message
        reason: String,
    },

    /// An expected field was absent and replaced by an empty value
    #[error("{section}: missing field '{field}'")]
    MissingField {
        /// Section the record came from
        section: SectionKind,
        /// Literal field name
        field: String,
    },
}

impl NormalizeIssue {
    /// Create encoding ambiguity issue
    pub fn encoding_ambiguity(section: SectionKind, reason: impl Into<String>) -> Self {
        Self::EncodingAmbiguity {
            section,
            reason: reason.into(),
        }
    }

    /// Create missing field issue
    pub fn missing_field(section: SectionKind, field: impl Into<String>) -> Self {
        Self::MissingField {
            section,
            field: field.into(),
        }
    }

    /// Section the issue belongs to
    #[inline]
    #[must_use]
    pub fn section(&self) -> SectionKind {
        match self {
            Self::EncodingAmbiguity { section, .. } | Self::MissingField { section, .. } => {
                *section
            }
        }
    }
}
