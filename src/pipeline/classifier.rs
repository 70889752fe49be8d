// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Response classification
//!
//! Decides what a completed response means for the caller. Classification is
//! pure; `ApiClient` performs the notifications and session checks it asks
//! for.

use reqwest::StatusCode;

use crate::envelope::{CodeClass, Envelope};
use crate::http::{AlertOnError, Request};

/// Message shown for business errors without a backend message
pub const DEFAULT_BUSINESS_MESSAGE: &str = "service error";

/// Outcome of one response
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// Envelope code 200: hand the response to the caller unchanged
    Success,
    /// Envelope code 400..700: fail, optionally telling the user
    BusinessError { notice: Option<String> },
    /// Envelope code 700 or HTTP 302: fail and re-verify the session
    SessionInvalid,
    /// Any other envelope code: fail
    Rejected,
    /// Body is not an envelope: fail
    Malformed,
}

/// Maps a response to a `Classification`
pub trait ResponseClassifier: Send + Sync {
    fn classify(
        &self,
        request: &Request,
        status: StatusCode,
        envelope: Option<&Envelope>,
    ) -> Classification;
}

/// Classifier for the backend's uniform envelope
#[derive(Debug, Clone)]
pub struct EnvelopeClassifier {
    default_message: String,
}

impl EnvelopeClassifier {
    pub fn new(default_message: impl Into<String>) -> Self {
        Self {
            default_message: default_message.into(),
        }
    }

    /// Text to show for a business error, `None` when silenced
    pub fn notice(&self, alert: &AlertOnError, envelope: &Envelope) -> Option<String> {
        match alert {
            AlertOnError::Silent => None,
            AlertOnError::Message(message) => Some(message.clone()),
            AlertOnError::Default => Some(
                envelope
                    .message()
                    .unwrap_or(self.default_message.as_str())
                    .to_string(),
            ),
        }
    }
}

impl Default for EnvelopeClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_BUSINESS_MESSAGE)
    }
}

impl ResponseClassifier for EnvelopeClassifier {
    fn classify(
        &self,
        request: &Request,
        status: StatusCode,
        envelope: Option<&Envelope>,
    ) -> Classification {
        let redirected = status == StatusCode::FOUND;

        let Some(envelope) = envelope else {
            return if redirected {
                Classification::SessionInvalid
            } else {
                Classification::Malformed
            };
        };

        match envelope.class() {
            CodeClass::Success => Classification::Success,
            CodeClass::BusinessError => Classification::BusinessError {
                notice: self.notice(&request.alert_on_error, envelope),
            },
            CodeClass::SessionInvalid => Classification::SessionInvalid,
            CodeClass::Other if redirected => Classification::SessionInvalid,
            CodeClass::Other => Classification::Rejected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn envelope(code: i64, msg: &str) -> Envelope {
        Envelope::new(code, msg, Value::Null)
    }

    fn classify(request: &Request, status: StatusCode, envelope: Option<&Envelope>) -> Classification {
        EnvelopeClassifier::default().classify(request, status, envelope)
    }

    #[test]
    fn test_success() {
        let request = Request::post("/api/foo");
        assert_eq!(
            classify(&request, StatusCode::OK, Some(&envelope(200, ""))),
            Classification::Success
        );
        // 200 wins even on a raw 302
        assert_eq!(
            classify(&request, StatusCode::FOUND, Some(&envelope(200, ""))),
            Classification::Success
        );
    }

    #[test]
    fn test_business_error_notice() {
        let request = Request::post("/api/foo");
        for code in [400, 500, 600] {
            assert_eq!(
                classify(&request, StatusCode::OK, Some(&envelope(code, "bad input"))),
                Classification::BusinessError {
                    notice: Some("bad input".to_string())
                }
            );
        }

        assert_eq!(
            classify(&request, StatusCode::OK, Some(&envelope(500, ""))),
            Classification::BusinessError {
                notice: Some(DEFAULT_BUSINESS_MESSAGE.to_string())
            }
        );
    }

    #[test]
    fn test_business_error_override() {
        let custom = Request::post("/api/foo?x=1").alert_on_error("Custom failure");
        assert_eq!(
            classify(&custom, StatusCode::OK, Some(&envelope(400, "ignored"))),
            Classification::BusinessError {
                notice: Some("Custom failure".to_string())
            }
        );

        let silent = Request::post("/api/foo").alert_on_error(false);
        assert_eq!(
            classify(&silent, StatusCode::OK, Some(&envelope(400, "ignored"))),
            Classification::BusinessError { notice: None }
        );
    }

    #[test]
    fn test_session_invalid_boundary() {
        let request = Request::post("/api/foo");
        assert!(matches!(
            classify(&request, StatusCode::OK, Some(&envelope(699, ""))),
            Classification::BusinessError { .. }
        ));
        assert_eq!(
            classify(&request, StatusCode::OK, Some(&envelope(700, ""))),
            Classification::SessionInvalid
        );
        assert_eq!(
            classify(&request, StatusCode::FOUND, Some(&envelope(0, ""))),
            Classification::SessionInvalid
        );
        assert_eq!(
            classify(&request, StatusCode::FOUND, None),
            Classification::SessionInvalid
        );
        // business range is checked before the raw 302
        assert!(matches!(
            classify(&request, StatusCode::FOUND, Some(&envelope(500, ""))),
            Classification::BusinessError { .. }
        ));
    }

    #[test]
    fn test_rejected_and_malformed() {
        let request = Request::post("/api/foo");
        assert_eq!(
            classify(&request, StatusCode::OK, Some(&envelope(0, ""))),
            Classification::Rejected
        );
        assert_eq!(
            classify(&request, StatusCode::OK, Some(&envelope(701, ""))),
            Classification::Rejected
        );
        assert_eq!(
            classify(&request, StatusCode::INTERNAL_SERVER_ERROR, None),
            Classification::Malformed
        );
    }
}
