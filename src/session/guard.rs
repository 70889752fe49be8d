// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Single-slot tracker for the in-flight session check

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// At most one session reverification runs at a time per client.
///
/// Clones share the same slot.
#[derive(Debug, Clone, Default)]
pub struct ReverificationGuard {
    in_flight: Arc<AtomicBool>,
}

impl ReverificationGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the slot, or `None` if a check is already running
    pub fn try_acquire(&self) -> Option<GuardPermit> {
        self.in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| GuardPermit {
                in_flight: Arc::clone(&self.in_flight),
            })
    }

    /// Whether a check currently holds the slot
    pub fn is_held(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }
}

/// Held while a reverification runs. Dropping it frees the slot.
#[derive(Debug)]
pub struct GuardPermit {
    in_flight: Arc<AtomicBool>,
}

impl Drop for GuardPermit {
    fn drop(&mut self) {
        self.in_flight.store(false, Ordering::Release);
    }
}
