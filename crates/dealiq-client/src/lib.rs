//! DealIQ Client
//!
//! The thin shell around the memo normalizer:
//! - Validates the ticker the user typed
//! - Performs the one request/response exchange with the memo generator
//! - Holds the latest normalized memo and discards stale responses
//! - Renders a normalized memo for the terminal
//!
//! # Example
//!
//! ```rust,ignore
//! use dealiq_client::{ClientConfig, HttpMemoSource, MemoSession, Ticker};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let source = HttpMemoSource::new(ClientConfig::from_env())?;
//! let session = MemoSession::new(source);
//!
//! let memo = session.request(Ticker::parse("nvda")?).await?;
//! println!("{}", dealiq_client::render::render_memo(&memo));
//! # Ok(())
//! # }
//! ```

#![warn(unreachable_pub)]
#![warn(missing_docs)]

// Core modules
pub mod client;
pub mod config;
pub mod error;
pub mod render;
pub mod session;
pub mod ticker;

// Re-exports for convenience
pub use client::{HttpMemoSource, MemoSource};
pub use config::ClientConfig;
pub use error::ClientError;
pub use session::{MemoSession, RequestId};
pub use ticker::Ticker;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
