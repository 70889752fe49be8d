// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! HTTP client implementation

use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::cookie::Jar;
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::redirect::Policy;
use reqwest::Client;
use url::Url;

use super::request::Request;
use super::response::Response;
use super::transport::Transport;
use super::DEFAULT_USER_AGENT;
use crate::error::{Error, Result};

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Base URL relative request paths are resolved against
    pub base_url: Option<Url>,
    /// User agent string
    pub user_agent: String,
    /// Default timeout
    pub timeout: Duration,
    /// Maximum redirects to follow
    pub max_redirects: usize,
    /// Default headers
    pub default_headers: HeaderMap,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        let mut default_headers = HeaderMap::new();
        default_headers.insert(
            "accept",
            HeaderValue::from_static("application/json, text/plain, */*"),
        );

        Self {
            base_url: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs(10),
            max_redirects: 10,
            default_headers,
        }
    }
}

/// reqwest-backed transport
///
/// Holds two reqwest clients sharing one cookie jar: one that follows
/// redirects and one that hands 3xx answers back untouched.
#[derive(Clone)]
pub struct HttpClient {
    following: Client,
    manual: Client,
    config: HttpClientConfig,
}

impl HttpClient {
    /// Create a new HTTP client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(HttpClientConfig::default())
    }

    /// Create a new HTTP client with custom configuration
    pub fn with_config(config: HttpClientConfig) -> Result<Self> {
        let jar = Arc::new(Jar::default());
        let following = Self::base_builder(&config, &jar)
            .redirect(Policy::limited(config.max_redirects))
            .build()?;
        let manual = Self::base_builder(&config, &jar)
            .redirect(Policy::none())
            .build()?;

        Ok(Self {
            following,
            manual,
            config,
        })
    }

    fn base_builder(config: &HttpClientConfig, jar: &Arc<Jar>) -> reqwest::ClientBuilder {
        Client::builder()
            .user_agent(&config.user_agent)
            .timeout(config.timeout)
            .default_headers(config.default_headers.clone())
            .cookie_provider(Arc::clone(jar))
    }

    /// Resolve a request URL against the base URL
    pub fn resolve(&self, url: &str) -> Result<Url> {
        match Url::parse(url) {
            Ok(url) => Ok(url),
            Err(url::ParseError::RelativeUrlWithoutBase) => match &self.config.base_url {
                Some(base) => Ok(base.join(url)?),
                None => Err(Error::Config(format!(
                    "relative URL '{}' requires a base URL",
                    url
                ))),
            },
            Err(e) => Err(e.into()),
        }
    }

    /// Execute a request
    pub async fn execute(&self, request: Request) -> Result<Response> {
        let start = Instant::now();
        let url = self.resolve(&request.url)?;

        let client = if request.follow_redirects {
            &self.following
        } else {
            &self.manual
        };

        let mut builder = client.request(request.method.clone(), url.clone());

        for (name, value) in request.headers.iter() {
            builder = builder.header(name, value);
        }

        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        if let Some(timeout) = request.timeout {
            builder = builder.timeout(timeout);
        }

        let response = builder.send().await?;
        let response_time = start.elapsed().as_millis() as u64;

        let redirected = response.url() != &url;
        let final_url = response.url().clone();
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await?;

        Ok(Response::new(
            status,
            headers,
            body,
            final_url,
            redirected,
            response_time,
        )
        .with_redirect_suppressed(request.follow_redirects))
    }

    /// Get client configuration
    pub fn config(&self) -> &HttpClientConfig {
        &self.config
    }
}

#[async_trait]
impl Transport for HttpClient {
    async fn send(&self, request: Request) -> Result<Response> {
        self.execute(request).await
    }
}
