// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! HTTP request types and builder

use std::time::Duration;

use bytes::Bytes;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Method;
use serde::Serialize;

use crate::error::Result;

/// HTTP request representation
///
/// The URL is kept as written by the caller. Relative paths such as
/// `/api/shop/list` are resolved against the client's base URL at dispatch.
#[derive(Debug, Clone)]
pub struct Request {
    /// Request method
    pub method: Method,
    /// Request URL, absolute or relative to the client's base URL
    pub url: String,
    /// Request headers
    pub headers: HeaderMap,
    /// Request body
    pub body: Option<Bytes>,
    /// Request timeout, `None` uses the client default
    pub timeout: Option<Duration>,
    /// Follow redirects
    pub follow_redirects: bool,
    /// Notification behaviour for business errors
    pub alert_on_error: AlertOnError,
}

/// How a failed business response is announced to the user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AlertOnError {
    /// Show the envelope message, or a generic one if it is empty
    #[default]
    Default,
    /// Show nothing
    Silent,
    /// Show this text instead of the envelope message
    Message(String),
}

impl From<bool> for AlertOnError {
    fn from(alert: bool) -> Self {
        if alert {
            AlertOnError::Default
        } else {
            AlertOnError::Silent
        }
    }
}

impl From<&str> for AlertOnError {
    fn from(message: &str) -> Self {
        AlertOnError::Message(message.to_string())
    }
}

impl From<String> for AlertOnError {
    fn from(message: String) -> Self {
        AlertOnError::Message(message)
    }
}

impl Request {
    /// Create a new request with arbitrary method
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: HeaderMap::new(),
            body: None,
            timeout: None,
            follow_redirects: true,
            alert_on_error: AlertOnError::Default,
        }
    }

    /// Create a new GET request
    pub fn get(url: impl Into<String>) -> Self {
        Self::new(Method::GET, url)
    }

    /// Create a new POST request
    pub fn post(url: impl Into<String>) -> Self {
        Self::new(Method::POST, url)
    }

    /// Set a header
    pub fn header(mut self, name: impl AsRef<str>, value: impl AsRef<str>) -> Self {
        if let (Ok(name), Ok(value)) = (
            HeaderName::try_from(name.as_ref()),
            HeaderValue::try_from(value.as_ref()),
        ) {
            self.headers.insert(name, value);
        }
        self
    }

    /// Set the request body
    pub fn body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Set JSON body
    pub fn json<T: Serialize + ?Sized>(mut self, data: &T) -> Result<Self> {
        let json = serde_json::to_vec(data)?;
        self.body = Some(Bytes::from(json));
        self = self.header("content-type", "application/json");
        Ok(self)
    }

    /// Set timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set follow redirects
    pub fn follow_redirects(mut self, follow: bool) -> Self {
        self.follow_redirects = follow;
        self
    }

    /// Override the business error notification
    ///
    /// Accepts `false` to silence it, `true` for the default behaviour, or a
    /// custom message.
    pub fn alert_on_error(mut self, alert: impl Into<AlertOnError>) -> Self {
        self.alert_on_error = alert.into();
        self
    }
}
