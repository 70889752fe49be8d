// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! # casgate - envelope-aware API client
//!
//! A thin interception layer over an HTTP transport for a single-page
//! storefront backend.
//!
//! ## Features
//!
//! - Request normalization: every URL is pinned to `apiVersion=4`
//! - Envelope classification: `{ code, msg, data, pageDto }` answers become
//!   `Ok` (code 200) or a typed `Error`
//! - Business error toasts with a per-request override (`alert_on_error`)
//! - CAS session reverification on code 700 / HTTP 302, at most one in flight
//! - Transport failures announced as "timed out" or "network error"
//!
//! ## Example
//!
//! ```rust,no_run
//! use casgate::{ApiClient, ClientConfig, Request};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ClientConfig::new().base_url("https://shop.example.com".parse()?);
//!     let client = ApiClient::new(config)?;
//!
//!     match client.request(Request::post("/api/order/list")).await {
//!         Ok(response) => println!("{}", response.text_lossy()),
//!         Err(e) if e.is_business() => println!("rejected: {:?}", e.envelope()),
//!         Err(e) => return Err(e.into()),
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod browser;
pub mod client;
pub mod envelope;
pub mod error;
pub mod http;
pub mod pipeline;
pub mod session;

// Re-exports for convenience

// Client
pub use client::{ApiClient, ApiClientBuilder, ClientConfig};

// Envelope
pub use envelope::{CodeClass, Envelope, PageDto};

// Errors
pub use error::{Error, Result};

// HTTP
pub use http::{AlertOnError, HttpClient, HttpClientConfig, Request, Response, Transport};

// Pipeline
pub use pipeline::{
    ApiVersionNormalizer, Classification, EnvelopeClassifier, Pipeline, RequestLogger,
    RequestStage, ResponseClassifier, TransportFailure,
};

// Session
pub use session::{ReverificationGuard, SessionVerifier, VerifyOutcome};

// Browser collaborators
pub use browser::{
    MemoryNavigator, MemorySessionStorage, Navigator, Notification, Notifier,
    RecordingNotifier, SessionStorage, Severity, TracingNotifier,
};

/// casgate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
