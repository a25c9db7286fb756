use super::KeyValueStore;
use anyhow::Result;
use std::collections::HashMap;

/// Volatile map-backed store.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Records every write so tests can assert on write traffic.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct CountingStore {
    pub inner: MemoryStore,
    pub writes: Vec<(String, usize)>,
}

#[cfg(test)]
impl CountingStore {
    pub fn writes_to(&self, key: &str) -> usize {
        self.writes.iter().filter(|(k, _)| k == key).count()
    }
}

#[cfg(test)]
impl KeyValueStore for CountingStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.inner.get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.writes.push((key.to_string(), value.len()));
        self.inner.set(key, value)
    }
}
