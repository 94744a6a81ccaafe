use fitflow_domain::StorageError;
use gloo_storage::Storage as GlooStorage;

use crate::Backend;

/// The browser's local storage.
///
/// Values are stored as raw strings so that keys written by other scripts of
/// the page, like the plain theme name, stay readable.
pub struct LocalStorage;

impl Backend for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        gloo_storage::LocalStorage::raw()
            .get_item(key)
            .map_err(|err| StorageError::Other(format!("{err:?}").into()))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        gloo_storage::LocalStorage::raw()
            .set_item(key, value)
            .map_err(|err| StorageError::Other(format!("{err:?}").into()))
    }
}
