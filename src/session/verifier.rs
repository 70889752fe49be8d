// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! CAS session verification
//!
//! Asks the CAS gateway whether the current session is still good. The
//! request does not follow redirects:
//!
//! - a suppressed redirect means CAS renegotiated the session, nothing to do
//! - an envelope with code 700 means the login is gone: remember where the
//!   user was, send them to the login page and fail
//! - any other envelope counts as a valid session

use std::sync::Arc;

use crate::browser::{Navigator, SessionStorage};
use crate::envelope::{Envelope, CODE_SESSION_INVALID};
use crate::error::{Error, Result};
use crate::http::{Request, Transport};

/// Fixed CAS verification endpoint
pub const DEFAULT_VERIFY_PATH: &str = "/fr/cas/verify.do";
/// sessionStorage key holding the page to return to after login
pub const DEFAULT_REDIRECT_KEY: &str = "__market_redirect";
/// Error text when the gateway sends no message
pub const SESSION_EXPIRED_MESSAGE: &str = "session login expired";

/// How a verification that did not fail ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerifyOutcome {
    /// The gateway answered with a redirect that was not followed
    RedirectNegotiated,
    /// The gateway answered with a non-700 envelope
    SessionValid,
}

/// Runs the CAS verification protocol
#[derive(Clone)]
pub struct SessionVerifier {
    transport: Arc<dyn Transport>,
    storage: Arc<dyn SessionStorage>,
    navigator: Arc<dyn Navigator>,
    verify_path: String,
    redirect_key: String,
}

impl SessionVerifier {
    pub fn new(
        transport: Arc<dyn Transport>,
        storage: Arc<dyn SessionStorage>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            transport,
            storage,
            navigator,
            verify_path: DEFAULT_VERIFY_PATH.to_string(),
            redirect_key: DEFAULT_REDIRECT_KEY.to_string(),
        }
    }

    /// Use another verification endpoint
    pub fn verify_path(mut self, path: impl Into<String>) -> Self {
        self.verify_path = path.into();
        self
    }

    /// Use another sessionStorage key for the return location
    pub fn redirect_key(mut self, key: impl Into<String>) -> Self {
        self.redirect_key = key.into();
        self
    }

    /// Check the session once
    pub async fn verify(&self) -> Result<VerifyOutcome> {
        let request = Request::get(self.verify_path.as_str()).follow_redirects(false);
        let response = self.transport.send(request).await?;

        if response.is_opaque_redirect() {
            tracing::debug!(
                status = response.status_code(),
                location = response.location(),
                "CAS redirect negotiated"
            );
            return Ok(VerifyOutcome::RedirectNegotiated);
        }

        let envelope: Envelope = response.envelope()?;
        if envelope.code != CODE_SESSION_INVALID {
            tracing::debug!(code = envelope.code, "CAS session valid");
            return Ok(VerifyOutcome::SessionValid);
        }

        let here = self.navigator.current_location();
        self.storage.set_item(&self.redirect_key, &here);

        match envelope.location.as_deref() {
            Some(location) => {
                tracing::info!(from = %here, to = location, "CAS login required");
                self.navigator.navigate(location);
            }
            None => tracing::warn!("CAS login required but no location was sent"),
        }

        Err(Error::Reverification {
            message: envelope
                .message()
                .unwrap_or(SESSION_EXPIRED_MESSAGE)
                .to_string(),
            location: envelope.location,
        })
    }

    /// Take the page saved before the login redirect
    pub fn take_saved_location(&self) -> Option<String> {
        self.storage.remove_item(&self.redirect_key)
    }
}
