// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! HTTP layer for casgate
//!
//! Request/response model, the `Transport` seam and the reqwest-backed
//! client that implements it.

mod client;
mod request;
mod response;
mod transport;

pub use client::{HttpClient, HttpClientConfig};
pub use request::{AlertOnError, Request};
pub use response::Response;
pub use transport::Transport;

/// Default user agent string
pub const DEFAULT_USER_AGENT: &str = concat!("casgate/", env!("CARGO_PKG_VERSION"));
