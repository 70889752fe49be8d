// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Error types for casgate
//!
//! Every rejected call surfaces one of these. Business and session failures
//! carry the backend envelope so callers can inspect `code`, `msg` and `data`.

use thiserror::Error;

use crate::envelope::Envelope;

/// Result type alias for casgate operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for casgate
#[derive(Error, Debug)]
pub enum Error {
    /// Envelope code in the unified business error range (400..700)
    #[error("business error {}: {}", .envelope.code, .envelope.msg)]
    Business { envelope: Envelope },

    /// Session invalid (envelope code 700 or HTTP 302)
    #[error("session expired (status {status})")]
    SessionExpired {
        envelope: Option<Envelope>,
        status: u16,
    },

    /// Envelope with a code that is neither success nor a known failure
    #[error("request rejected with code {}", .envelope.code)]
    Rejected { envelope: Envelope },

    /// Body could not be read as an envelope
    #[error("malformed envelope (status {status}): {reason}")]
    MalformedEnvelope { status: u16, reason: String },

    /// Session verification endpoint asked for a login redirect
    #[error("{message}")]
    Reverification {
        message: String,
        location: Option<String>,
    },

    /// HTTP transport failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Timeout error
    #[error("Operation timed out after {duration_ms}ms: {operation}")]
    Timeout {
        operation: String,
        duration_ms: u64,
        url: Option<String>,
    },

    /// Network failure that never produced a response
    #[error("Network error: {0}")]
    Network(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a new network error
    pub fn network<S: Into<String>>(msg: S) -> Self {
        Error::Network(msg.into())
    }

    /// Create a timeout error
    pub fn timeout(operation: impl Into<String>, duration_ms: u64) -> Self {
        Error::Timeout {
            operation: operation.into(),
            duration_ms,
            url: None,
        }
    }

    /// Create a timeout error with URL
    pub fn timeout_with_url(
        operation: impl Into<String>,
        duration_ms: u64,
        url: impl Into<String>,
    ) -> Self {
        Error::Timeout {
            operation: operation.into(),
            duration_ms,
            url: Some(url.into()),
        }
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Error::Other(msg.into())
    }

    /// The backend envelope the call was rejected with, if any
    pub fn envelope(&self) -> Option<&Envelope> {
        match self {
            Error::Business { envelope } | Error::Rejected { envelope } => Some(envelope),
            Error::SessionExpired { envelope, .. } => envelope.as_ref(),
            _ => None,
        }
    }

    /// Check if this is a timeout error
    pub fn is_timeout(&self) -> bool {
        match self {
            Error::Timeout { .. } => true,
            Error::Http(e) => e.is_timeout(),
            _ => false,
        }
    }

    /// Check if the request never reached the backend
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Error::Http(_) | Error::Network(_) | Error::Timeout { .. }
        )
    }

    /// Check if this is a business error (envelope code 400..700)
    pub fn is_business(&self) -> bool {
        matches!(self, Error::Business { .. })
    }

    /// Check if the session was reported invalid
    pub fn is_session_expired(&self) -> bool {
        matches!(self, Error::SessionExpired { .. })
    }

    /// Envelope code if the error carries an envelope
    pub fn code(&self) -> Option<i64> {
        self.envelope().map(|e| e.code)
    }

    /// Get HTTP status code if available
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::SessionExpired { status, .. } => Some(*status),
            Error::MalformedEnvelope { status, .. } => Some(*status),
            Error::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
