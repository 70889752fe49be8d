// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! API version query parameter

use super::stage::RequestStage;
use crate::http::Request;

/// API version every request is pinned to
pub const DEFAULT_API_VERSION: &str = "4";

/// Appends `apiVersion=<version>` to every request URL
#[derive(Debug, Clone)]
pub struct ApiVersionNormalizer {
    marker: String,
}

impl ApiVersionNormalizer {
    pub fn new(version: impl AsRef<str>) -> Self {
        Self {
            marker: format!("apiVersion={}", version.as_ref()),
        }
    }

    /// The literal `apiVersion=<version>` pair
    pub fn marker(&self) -> &str {
        &self.marker
    }

    /// Add the marker to `url` unless it is already there
    pub fn normalize_url(&self, url: &str) -> String {
        if url.is_empty() || url.contains(self.marker.as_str()) {
            return url.to_string();
        }

        let separator = if url.contains('?') { '&' } else { '?' };
        format!("{}{}{}", url, separator, self.marker)
    }
}

impl Default for ApiVersionNormalizer {
    fn default() -> Self {
        Self::new(DEFAULT_API_VERSION)
    }
}

impl RequestStage for ApiVersionNormalizer {
    fn name(&self) -> &'static str {
        "api-version"
    }

    fn apply(&self, mut request: Request) -> Request {
        request.url = self.normalize_url(&request.url);
        request
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_appends_query() {
        let normalizer = ApiVersionNormalizer::default();
        assert_eq!(normalizer.normalize_url("/api/foo"), "/api/foo?apiVersion=4");
        assert_eq!(
            normalizer.normalize_url("https://shop.example.com/api/foo"),
            "https://shop.example.com/api/foo?apiVersion=4"
        );
    }

    #[test]
    fn test_extends_existing_query() {
        let normalizer = ApiVersionNormalizer::default();
        assert_eq!(normalizer.normalize_url("/api/foo?x=1"), "/api/foo?x=1&apiVersion=4");
        assert_eq!(normalizer.normalize_url("/api/foo?"), "/api/foo?&apiVersion=4");
        assert_eq!(
            normalizer.normalize_url("/api/foo?apiVersion=3"),
            "/api/foo?apiVersion=3&apiVersion=4"
        );
    }

    #[test]
    fn test_idempotent() {
        let normalizer = ApiVersionNormalizer::default();
        for url in ["/api/foo?apiVersion=4", "/api/foo?x=1&apiVersion=4"] {
            assert_eq!(normalizer.normalize_url(url), url);
        }

        let once = normalizer.normalize_url("/api/foo?x=1");
        assert_eq!(normalizer.normalize_url(&once), once);
    }

    #[test]
    fn test_empty_url_untouched() {
        assert_eq!(ApiVersionNormalizer::default().normalize_url(""), "");
    }

    #[test]
    fn test_stage_keeps_other_fields() {
        let request = Request::get("/api/foo")
            .header("x-trace", "1")
            .alert_on_error(false)
            .follow_redirects(false);
        let out = ApiVersionNormalizer::new("7").apply(request.clone());

        assert_eq!(out.url, "/api/foo?apiVersion=7");
        assert_eq!(out.method, request.method);
        assert_eq!(out.headers, request.headers);
        assert_eq!(out.alert_on_error, request.alert_on_error);
        assert_eq!(out.follow_redirects, request.follow_redirects);
    }
}
