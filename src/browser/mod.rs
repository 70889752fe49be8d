// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Browser-side collaborators
//!
//! Toast notifications, sessionStorage and page navigation, each behind a
//! trait with an in-memory implementation.

mod navigator;
mod notifier;
mod storage;

pub use navigator::{MemoryNavigator, Navigator};
pub use notifier::{Notification, Notifier, RecordingNotifier, Severity, TracingNotifier};
pub use storage::{MemorySessionStorage, SessionStorage};
