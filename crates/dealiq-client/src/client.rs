//! Memo transport
//!
//! One POST per memo. The body is read as text first so a decode failure can
//! report what the generator actually sent.

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::ticker::{MemoRequest, Ticker};
use async_trait::async_trait;
use dealiq_memo::MemoPayload;
use reqwest::header::{HeaderValue, ACCEPT, USER_AGENT};

/// Anything that can produce a raw memo payload for a ticker
#[async_trait]
pub trait MemoSource: Send + Sync {
    /// Fetch the payload for one ticker
    async fn fetch(&self, ticker: &Ticker) -> Result<MemoPayload, ClientError>;
}

/// [`MemoSource`] backed by the generator's HTTP endpoint
#[derive(Debug, Clone)]
pub struct HttpMemoSource {
    config: ClientConfig,
    http: reqwest::Client,
}

impl HttpMemoSource {
    /// Build the HTTP client from configuration
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| ClientError::Config(e.to_string()))?;
        Ok(Self { config, http })
    }

    /// Configuration in use
    #[inline]
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    async fn exec_request(&self, url: &str, ticker: &Ticker) -> Result<String, ClientError> {
        let mut req = self
            .http
            .post(url)
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .json(&MemoRequest { ticker });
        if let Ok(agent) = HeaderValue::from_str(&self.config.user_agent) {
            req = req.header(USER_AGENT, agent);
        }

        let res = req
            .send()
            .await
            .map_err(|e| ClientError::transport(url, e))?;
        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(|e| ClientError::transport(url, e))?;

        if !status.is_success() {
            return Err(ClientError::Status {
                url: url.to_string(),
                status: status.as_u16(),
                body,
            });
        }
        Ok(body)
    }
}

#[async_trait]
impl MemoSource for HttpMemoSource {
    async fn fetch(&self, ticker: &Ticker) -> Result<MemoPayload, ClientError> {
        let url = self.config.memo_url();
        tracing::info!(%ticker, %url, "requesting memo");

        let body = self.exec_request(&url, ticker).await?;
        let payload = MemoPayload::from_json(&body).map_err(|e| ClientError::decode(&url, e))?;

        tracing::debug!(%ticker, bytes = body.len(), company = %payload.company_name, "memo received");
        Ok(payload)
    }
}
