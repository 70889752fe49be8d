// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Request stages
//!
//! A stage takes a request and returns the request to send. Stages run in
//! the order they were added to the pipeline.

use crate::http::Request;

/// One request transformation step
pub trait RequestStage: Send + Sync {
    /// Stage name for logs
    fn name(&self) -> &'static str;

    /// Transform the request
    fn apply(&self, request: Request) -> Request;
}

/// Logs every request leaving the pipeline
#[derive(Debug, Clone, Default)]
pub struct RequestLogger {
    /// Log request bodies
    pub log_bodies: bool,
    /// Only log URLs containing this pattern
    pub url_filter: Option<String>,
}

impl RequestLogger {
    fn matches(&self, request: &Request) -> bool {
        match self.url_filter {
            Some(ref filter) => request.url.contains(filter.as_str()),
            None => true,
        }
    }
}

impl RequestStage for RequestLogger {
    fn name(&self) -> &'static str {
        "request-logger"
    }

    fn apply(&self, request: Request) -> Request {
        if self.matches(&request) {
            tracing::debug!(method = %request.method, url = %request.url, "Request");

            if self.log_bodies {
                if let Some(ref body) = request.body {
                    tracing::debug!(body = ?String::from_utf8_lossy(body), "Request body");
                }
            }
        }
        request
    }
}
