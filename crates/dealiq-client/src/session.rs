//! Memo session
//!
//! Holds the memo currently on display. Each request is numbered when it is
//! issued; a response is published only if no newer request was issued while
//! it was in flight. A failed latest request clears the view so a stale memo
//! is never shown under a new ticker.

use crate::client::MemoSource;
use crate::error::ClientError;
use crate::ticker::Ticker;
use dealiq_memo::NormalizedMemo;
use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;

/// Sequence number of a memo request within one session
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct RequestId(pub u64);

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Default)]
struct SessionState {
    latest: RequestId,
    current: Option<(Ticker, Arc<NormalizedMemo>)>,
}

/// Single-writer holder of the latest normalized memo
#[derive(Debug)]
pub struct MemoSession<S> {
    source: S,
    state: Mutex<SessionState>,
}

impl<S: MemoSource> MemoSession<S> {
    /// Create session over a memo source
    #[must_use]
    pub fn new(source: S) -> Self {
        Self {
            source,
            state: Mutex::new(SessionState::default()),
        }
    }

    /// Fetch, normalize and publish the memo for `ticker`
    ///
    /// Returns [`ClientError::Superseded`] if a newer request was issued
    /// before this one completed; the newer request owns the view.
    pub async fn request(&self, ticker: Ticker) -> Result<Arc<NormalizedMemo>, ClientError> {
        let id = self.begin();
        tracing::debug!(request = %id, %ticker, "memo request issued");

        let result = self.source.fetch(&ticker).await;
        self.complete(id, ticker, result)
    }

    /// Parse user input and request it
    pub async fn request_input(&self, input: &str) -> Result<Arc<NormalizedMemo>, ClientError> {
        let ticker = Ticker::parse(input)?;
        self.request(ticker).await
    }

    /// Memo on display, if any
    #[must_use]
    pub fn current(&self) -> Option<Arc<NormalizedMemo>> {
        self.state
            .lock()
            .current
            .as_ref()
            .map(|(_, memo)| Arc::clone(memo))
    }

    /// Ticker of the memo on display, if any
    #[must_use]
    pub fn current_ticker(&self) -> Option<Ticker> {
        self.state
            .lock()
            .current
            .as_ref()
            .map(|(ticker, _)| ticker.clone())
    }

    /// Most recently issued request
    #[must_use]
    pub fn latest_request(&self) -> RequestId {
        self.state.lock().latest
    }

    fn begin(&self) -> RequestId {
        let mut state = self.state.lock();
        state.latest = RequestId(state.latest.0 + 1);
        state.latest
    }

    fn complete(
        &self,
        id: RequestId,
        ticker: Ticker,
        result: Result<dealiq_memo::MemoPayload, ClientError>,
    ) -> Result<Arc<NormalizedMemo>, ClientError> {
        let mut state = self.state.lock();
        if id != state.latest {
            tracing::warn!(request = %id, latest = %state.latest, %ticker, "discarding stale memo response");
            return Err(ClientError::Superseded {
                request: id,
                latest: state.latest,
            });
        }

        match result {
            Ok(payload) => {
                let memo = Arc::new(NormalizedMemo::from_payload(&payload));
                tracing::info!(
                    request = %id,
                    %ticker,
                    issues = memo.issues.len(),
                    "memo ready"
                );
                state.current = Some((ticker, Arc::clone(&memo)));
                Ok(memo)
            }
            Err(err) => {
                tracing::warn!(request = %id, %ticker, error = %err, "memo request failed");
                state.current = None;
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use dealiq_memo::{MemoPayload, SectionKind};

    struct FixedSource(Result<serde_json::Value, u16>);

    #[async_trait]
    impl MemoSource for FixedSource {
        async fn fetch(&self, _ticker: &Ticker) -> Result<MemoPayload, ClientError> {
            match &self.0 {
                Ok(body) => Ok(serde_json::from_value(body.clone()).unwrap()),
                Err(status) => Err(ClientError::Status {
                    url: "test".into(),
                    status: *status,
                    body: String::new(),
                }),
            }
        }
    }

    #[tokio::test]
    async fn successful_request_is_published() {
        let session = MemoSession::new(FixedSource(Ok(dealiq_test_utils::sample_payload())));

        let memo = session.request_input("nvda").await.unwrap();
        assert_eq!(memo.company.name, "NVIDIA Corporation");
        assert!(memo.section(SectionKind::ExecutiveSummary).is_some());
        assert_eq!(session.current_ticker().unwrap().as_str(), "NVDA");
        assert_eq!(session.latest_request(), RequestId(1));
    }

    #[tokio::test]
    async fn blank_input_never_issues_a_request() {
        let session = MemoSession::new(FixedSource(Ok(dealiq_test_utils::sample_payload())));

        let err = session.request_input("  ").await.unwrap_err();
        assert!(matches!(err, ClientError::InvalidTicker(_)));
        assert_eq!(session.latest_request(), RequestId(0));
        assert!(session.current().is_none());
    }

    #[tokio::test]
    async fn failure_is_surfaced_with_no_memo_shown() {
        let session = MemoSession::new(FixedSource(Err(502)));

        let err = session.request_input("nvda").await.unwrap_err();
        assert!(err.is_user_visible());
        assert!(err.is_retryable());
        assert!(session.current().is_none());
    }
}
