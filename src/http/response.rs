// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! HTTP response types

use bytes::Bytes;
use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use url::Url;

use crate::envelope::Envelope;
use crate::error::{Error, Result};

/// HTTP response representation
#[derive(Debug, Clone)]
pub struct Response {
    /// Response status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Response body
    pub body: Bytes,
    /// Final URL (after redirects)
    pub url: Url,
    /// Whether redirects were followed to reach this response
    pub redirected: bool,
    /// Whether a redirect was returned instead of followed
    pub redirect_suppressed: bool,
    /// Response time in milliseconds
    pub response_time_ms: u64,
}

impl Response {
    /// Create a new response
    pub fn new(
        status: StatusCode,
        headers: HeaderMap,
        body: Bytes,
        url: Url,
        redirected: bool,
        response_time_ms: u64,
    ) -> Self {
        Self {
            status,
            headers,
            body,
            url,
            redirected,
            redirect_suppressed: false,
            response_time_ms,
        }
    }

    /// Mark a 3xx answer to a request that did not follow redirects
    pub fn with_redirect_suppressed(mut self, follow_redirects: bool) -> Self {
        self.redirect_suppressed = !follow_redirects && self.status.is_redirection();
        self
    }

    /// Check if status is success (2xx)
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Check if status is redirect (3xx)
    pub fn is_redirect(&self) -> bool {
        self.status.is_redirection()
    }

    /// Redirect that the transport refused to follow
    ///
    /// Equivalent of a browser `opaqueredirect` response with status 0.
    pub fn is_opaque_redirect(&self) -> bool {
        self.redirect_suppressed
    }

    /// Get status code as u16
    pub fn status_code(&self) -> u16 {
        self.status.as_u16()
    }

    /// Get body as text, lossy conversion
    pub fn text_lossy(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Parse body as JSON
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_slice(&self.body).map_err(Error::from)
    }

    /// Parse body as a backend envelope
    pub fn envelope<T: DeserializeOwned + Default>(&self) -> Result<Envelope<T>> {
        self.json()
    }

    /// Get a header value
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Redirect target, if any
    pub fn location(&self) -> Option<&str> {
        self.header("location")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: StatusCode, body: &'static str) -> Response {
        Response::new(
            status,
            HeaderMap::new(),
            Bytes::from(body),
            Url::parse("https://example.com/fr/cas/verify.do").unwrap(),
            false,
            12,
        )
    }

    #[test]
    fn test_response_status() {
        let resp = response(StatusCode::OK, "");
        assert!(resp.is_success());
        assert_eq!(resp.status_code(), 200);
        assert!(!resp.is_opaque_redirect());
    }

    #[test]
    fn test_redirect_suppressed_only_without_follow() {
        let resp = response(StatusCode::FOUND, "").with_redirect_suppressed(false);
        assert!(resp.is_opaque_redirect());

        let resp = response(StatusCode::FOUND, "").with_redirect_suppressed(true);
        assert!(!resp.is_opaque_redirect());
        assert!(resp.location().is_none());

        let resp = response(StatusCode::OK, "{}").with_redirect_suppressed(false);
        assert!(!resp.is_opaque_redirect());
    }

    #[test]
    fn test_response_envelope() {
        let resp = response(StatusCode::OK, r#"{"code":500,"msg":"bad input","data":null}"#);
        let envelope: Envelope = resp.envelope().unwrap();
        assert_eq!(envelope.code, 500);
        assert_eq!(envelope.msg, "bad input");

        let resp = response(StatusCode::OK, "<html></html>");
        assert!(resp.envelope::<serde_json::Value>().is_err());
    }
}
