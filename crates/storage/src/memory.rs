use std::{collections::BTreeMap, sync::Mutex};

use fitflow_domain::StorageError;

use crate::Backend;

/// Key-value store kept in process memory, used in place of local storage
/// outside the browser.
#[derive(Debug, Default)]
pub struct Memory {
    entries: Mutex<BTreeMap<String, String>>,
}

impl Backend for Memory {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self
            .entries
            .lock()
            .map_err(|err| StorageError::Other(err.to_string().into()))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|err| StorageError::Other(err.to_string().into()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_memory() {
        let memory = Memory::default();

        assert_eq!(memory.get("ff-theme").unwrap(), None);

        memory.set("ff-theme", "light").unwrap();
        memory.set("ff-theme", "dark").unwrap();

        assert_eq!(memory.get("ff-theme").unwrap(), Some("dark".to_string()));
    }
}
