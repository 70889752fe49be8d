// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Session-scoped key/value storage (sessionStorage)

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

/// Tab-scoped string storage
pub trait SessionStorage: Send + Sync {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str);
    fn remove_item(&self, key: &str) -> Option<String>;
}

impl<S: SessionStorage + ?Sized> SessionStorage for Arc<S> {
    fn get_item(&self, key: &str) -> Option<String> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Option<String> {
        (**self).remove_item(key)
    }
}

/// In-memory session storage
#[derive(Debug, Default, Clone)]
pub struct MemorySessionStorage {
    items: Arc<RwLock<HashMap<String, String>>>,
}

impl MemorySessionStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }

    /// Snapshot of all items
    pub fn items(&self) -> HashMap<String, String> {
        self.items.read().clone()
    }
}

impl SessionStorage for MemorySessionStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.read().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) {
        self.items.write().insert(key.to_string(), value.to_string());
    }

    fn remove_item(&self, key: &str) -> Option<String> {
        self.items.write().remove(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_roundtrip() {
        let storage = MemorySessionStorage::new();
        assert!(storage.is_empty());

        storage.set_item("__market_redirect", "https://shop.example.com/orders");
        assert_eq!(
            storage.get_item("__market_redirect").as_deref(),
            Some("https://shop.example.com/orders")
        );

        storage.set_item("__market_redirect", "https://shop.example.com/cart");
        assert_eq!(storage.len(), 1);

        assert_eq!(
            storage.remove_item("__market_redirect").as_deref(),
            Some("https://shop.example.com/cart")
        );
        assert!(storage.get_item("__market_redirect").is_none());
    }
}
