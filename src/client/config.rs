// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Client configuration

use std::time::Duration;

use reqwest::header::{HeaderName, HeaderValue};
use reqwest::Method;
use url::Url;

use crate::error::{Error, Result};
use crate::http::{HttpClientConfig, DEFAULT_USER_AGENT};
use crate::pipeline::DEFAULT_API_VERSION;
use crate::session::{DEFAULT_REDIRECT_KEY, DEFAULT_VERIFY_PATH};

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(10_000);

/// API client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL relative request paths are resolved against
    pub base_url: Option<Url>,
    /// Default timeout for requests
    pub timeout: Duration,
    /// Method used when the caller does not pick one
    pub default_method: Method,
    /// Value of the `apiVersion` query parameter
    pub api_version: String,
    /// CAS verification endpoint
    pub verify_path: String,
    /// sessionStorage key for the pre-login location
    pub redirect_storage_key: String,
    /// User agent string
    pub user_agent: String,
    /// Maximum redirects to follow
    pub max_redirects: usize,
    /// Default headers
    pub default_headers: Vec<(String, String)>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout: DEFAULT_TIMEOUT,
            default_method: Method::POST,
            api_version: DEFAULT_API_VERSION.to_string(),
            verify_path: DEFAULT_VERIFY_PATH.to_string(),
            redirect_storage_key: DEFAULT_REDIRECT_KEY.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            max_redirects: 10,
            default_headers: vec![],
        }
    }
}

impl ClientConfig {
    /// Create a new client config
    pub fn new() -> Self {
        Self::default()
    }

    /// Set base URL
    pub fn base_url(mut self, base_url: Url) -> Self {
        self.base_url = Some(base_url);
        self
    }

    /// Set timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set default method
    pub fn default_method(mut self, method: Method) -> Self {
        self.default_method = method;
        self
    }

    /// Set API version
    pub fn api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = version.into();
        self
    }

    /// Set CAS verification endpoint
    pub fn verify_path(mut self, path: impl Into<String>) -> Self {
        self.verify_path = path.into();
        self
    }

    /// Set sessionStorage key for the pre-login location
    pub fn redirect_storage_key(mut self, key: impl Into<String>) -> Self {
        self.redirect_storage_key = key.into();
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Add default header
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.push((name.into(), value.into()));
        self
    }

    /// Reject configurations that cannot work
    pub fn validate(&self) -> Result<()> {
        if self.api_version.is_empty() {
            return Err(Error::Config("api_version must not be empty".into()));
        }
        if self.verify_path.is_empty() {
            return Err(Error::Config("verify_path must not be empty".into()));
        }
        if self.redirect_storage_key.is_empty() {
            return Err(Error::Config("redirect_storage_key must not be empty".into()));
        }
        if self.timeout.is_zero() {
            return Err(Error::Config("timeout must be greater than zero".into()));
        }
        Ok(())
    }

    /// Transport settings derived from this config
    pub fn http_config(&self) -> Result<HttpClientConfig> {
        let mut config = HttpClientConfig {
            base_url: self.base_url.clone(),
            user_agent: self.user_agent.clone(),
            timeout: self.timeout,
            max_redirects: self.max_redirects,
            ..HttpClientConfig::default()
        };

        for (name, value) in &self.default_headers {
            let name = HeaderName::try_from(name.as_str())
                .map_err(|e| Error::Config(format!("Invalid header name '{}': {}", name, e)))?;
            let value = HeaderValue::try_from(value.as_str())
                .map_err(|e| Error::Config(format!("Invalid header value for '{}': {}", name, e)))?;
            config.default_headers.insert(name, value);
        }

        Ok(config)
    }
}
