use anyhow::Result;
use std::collections::HashMap;
use std::sync::RwLock;

use super::Storage;

/// Volatile storage, lost on exit.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self
            .entries
            .read()
            .map_err(|_| anyhow::anyhow!("memory storage lock poisoned"))?;
        Ok(entries.get(key).cloned())
    }

    fn put(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| anyhow::anyhow!("memory storage lock poisoned"))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_storage_starts_empty() {
        let store = MemoryStorage::new();
        assert!(store.load_quotes().unwrap().is_none());
        assert!(store.load_selected_category().unwrap().is_none());
    }

    #[test]
    fn memory_storage_keeps_keys_apart() {
        let store = MemoryStorage::new();
        store.save_selected_category("Work").unwrap();
        store.save_quotes(&[]).unwrap();
        assert_eq!(store.load_selected_category().unwrap().as_deref(), Some("Work"));
        assert_eq!(store.load_quotes().unwrap(), Some(Vec::new()));
    }
}
