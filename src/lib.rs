#![deny(warnings)]
#![deny(clippy::all)]
#![deny(missing_docs)]

//! # `bondmcp-async`
//!
//! An async BondMCP health AI API client for Rust with rate limiting,
//! retries with exponential backoff, cancellation, and a typed error
//! taxonomy.
//!
//! ## Quick Start
//!
//! ```no_run
//! use bondmcp_async::{Client, types::ask::AskRequest};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::new("your-api-key")?;
//!
//! let req = AskRequest::new("What are the benefits of vitamin D?").with_citations();
//! let resp = client.ask().query(req).await?;
//!
//! println!("Answer: {}", resp.data.answer);
//! # Ok(())
//! # }
//! ```
//!
//! ## Resilience
//!
//! Every resource method goes through a single request executor that
//! acquires a rate-limit permit (when a budget is configured), retries
//! transport failures and retryable statuses (429, 5xx) with exponential
//! backoff, honors server `retry_after` hints, and observes a caller
//! [`CancellationToken`](tokio_util::sync::CancellationToken) at every
//! suspension point. See [`BondConfig`] for the policy knobs.
//!
//! ## Authentication
//!
//! Pass an API key to [`Client::new`], or set `BONDMCP_API_KEY` and use
//! [`BondConfig::new`] with [`Client::with_config`]. Every request carries
//! a `Authorization: Bearer` header.

/// HTTP client implementation and request executor
pub mod client;
/// Configuration types for the client
pub mod config;
/// Error types and status classification
pub mod error;
/// Outbound rate limiting
pub mod limiter;
/// API resource implementations
pub mod resources;
/// Retry and backoff policy utilities
pub mod retry;
/// Test support utilities (for use in tests)
#[doc(hidden)]
pub mod test_support;
/// Request and response types
pub mod types;
/// Usage statistics tracking
pub mod usage;

pub use crate::client::{Client, Envelope};
pub use crate::config::{BondConfig, RateLimit};
pub use crate::error::BondError;
pub use crate::usage::UsageStats;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::types::ask::*;
    pub use crate::types::common::*;
    pub use crate::types::health::*;
    pub use crate::types::labs::*;
    pub use crate::types::supplements::*;
    pub use crate::{BondConfig, BondError, Client, Envelope, RateLimit, UsageStats};
}
