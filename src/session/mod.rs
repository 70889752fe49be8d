// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! CAS session handling

mod guard;
mod verifier;

pub use guard::{GuardPermit, ReverificationGuard};
pub use verifier::{
    SessionVerifier, VerifyOutcome, DEFAULT_REDIRECT_KEY, DEFAULT_VERIFY_PATH,
    SESSION_EXPIRED_MESSAGE,
};
