use std::collections::HashMap;

use anyhow::anyhow;

/// A synchronous string key-value store, such as the browser's local storage
pub trait Storage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()>;
}

impl<S: Storage + ?Sized> Storage for &mut S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        (**self).set(key, value)
    }
}

/// In-memory `Storage`, optionally with a size quota to simulate a full store
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    items: HashMap<String, String>,
    quota: Option<usize>,
    writes: usize,
}

impl MemoryStorage {
    pub fn new() -> MemoryStorage {
        MemoryStorage::default()
    }

    /// Writes fail once the sum of all keys and values would exceed `bytes`
    pub fn with_quota(bytes: usize) -> MemoryStorage {
        MemoryStorage {
            quota: Some(bytes),
            ..MemoryStorage::default()
        }
    }

    /// Number of successful writes so far
    pub fn writes(&self) -> usize {
        self.writes
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn used_without(&self, key: &str) -> usize {
        self.items
            .iter()
            .filter(|(k, _)| *k != key)
            .map(|(k, v)| k.len() + v.len())
            .sum()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        if let Some(quota) = self.quota {
            let needed = self.used_without(key) + key.len() + value.len();
            if needed > quota {
                return Err(anyhow!(
                    "storage quota exceeded: {needed} bytes needed, {quota} available"
                ));
            }
        }
        self.items.insert(String::from(key), String::from(value));
        self.writes += 1;
        Ok(())
    }
}
