// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! API client and its configuration

mod api_client;
mod config;

pub use api_client::{ApiClient, ApiClientBuilder};
pub use config::{ClientConfig, DEFAULT_TIMEOUT};
