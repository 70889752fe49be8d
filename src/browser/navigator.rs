// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Page location and navigation

use std::sync::Arc;

use parking_lot::RwLock;

/// Reads and changes the current page location
pub trait Navigator: Send + Sync {
    /// Current page URL (`document.location.href`)
    fn current_location(&self) -> String;

    /// Leave the current page for `location`
    fn navigate(&self, location: &str);
}

impl<N: Navigator + ?Sized> Navigator for Arc<N> {
    fn current_location(&self) -> String {
        (**self).current_location()
    }

    fn navigate(&self, location: &str) {
        (**self).navigate(location)
    }
}

/// In-memory navigator that records every navigation
#[derive(Debug, Default, Clone)]
pub struct MemoryNavigator {
    state: Arc<RwLock<NavigatorState>>,
}

#[derive(Debug, Default)]
struct NavigatorState {
    location: String,
    history: Vec<String>,
}

impl MemoryNavigator {
    /// Create a navigator positioned at `location`
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            state: Arc::new(RwLock::new(NavigatorState {
                location: location.into(),
                history: Vec::new(),
            })),
        }
    }

    /// Locations navigated to, oldest first
    pub fn history(&self) -> Vec<String> {
        self.state.read().history.clone()
    }
}

impl Navigator for MemoryNavigator {
    fn current_location(&self) -> String {
        self.state.read().location.clone()
    }

    fn navigate(&self, location: &str) {
        tracing::info!(location, "Navigating");
        let mut state = self.state.write();
        state.history.push(location.to_string());
        state.location = location.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_history() {
        let navigator = MemoryNavigator::new("https://shop.example.com/orders");
        assert_eq!(navigator.current_location(), "https://shop.example.com/orders");
        assert!(navigator.history().is_empty());

        navigator.navigate("https://cas.example.com/login");
        assert_eq!(navigator.current_location(), "https://cas.example.com/login");
        assert_eq!(navigator.history(), vec!["https://cas.example.com/login".to_string()]);
    }
}
