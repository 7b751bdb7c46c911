//! Ticker symbols as typed by the user

use crate::error::ClientError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// A trimmed, upper-cased, non-empty ticker symbol
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Ticker(String);

impl Ticker {
    /// Normalize user input; empty input is rejected before any request
    pub fn parse(input: &str) -> Result<Self, ClientError> {
        let symbol = input.trim().to_uppercase();
        if symbol.is_empty() {
            return Err(ClientError::InvalidTicker(input.to_string()));
        }
        Ok(Self(symbol))
    }

    /// Symbol text
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Ticker {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Ticker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Request body of the memo endpoint
#[derive(Debug, Serialize)]
pub(crate) struct MemoRequest<'a> {
    pub(crate) ticker: &'a Ticker,
}
