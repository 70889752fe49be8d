// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Transport failure classification

use crate::browser::Notification;
use crate::error::Error;

pub const TIMEOUT_MESSAGE: &str = "request timed out, please refresh and retry";
pub const NETWORK_MESSAGE: &str = "network error, please try refreshing";

/// Kind of failure for a request that never produced a response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportFailure {
    /// Timed out or aborted on the client side
    Timeout,
    /// Anything else
    Network,
}

impl TransportFailure {
    pub fn classify(error: &Error) -> Self {
        if error.is_timeout() {
            TransportFailure::Timeout
        } else {
            TransportFailure::Network
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            TransportFailure::Timeout => TIMEOUT_MESSAGE,
            TransportFailure::Network => NETWORK_MESSAGE,
        }
    }

    pub fn notification(&self) -> Notification {
        Notification::error(self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        let timeout = TransportFailure::classify(&Error::timeout("POST /api/foo", 10_000));
        assert_eq!(timeout, TransportFailure::Timeout);
        assert_eq!(timeout.notification().message, TIMEOUT_MESSAGE);

        let network = TransportFailure::classify(&Error::network("connection refused"));
        assert_eq!(network, TransportFailure::Network);
        assert_eq!(network.message(), NETWORK_MESSAGE);

        assert_eq!(
            TransportFailure::classify(&Error::Config("no base url".into())),
            TransportFailure::Network
        );
    }
}
