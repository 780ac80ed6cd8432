use serde::{Serialize, de::DeserializeOwned};
use tracing::warn;

use crate::error::StorageError;
use crate::objects::KeyValueStore;

/// Load a JSON value. A missing key and an unreadable value both come back
/// as `None`; the latter is logged.
pub fn load_item<T, S>(store: &S, key: &str) -> Result<Option<T>, StorageError>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    let Some(raw) = store.get_raw(key)? else {
        return Ok(None);
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Ok(Some(value)),
        Err(e) => {
            warn!(key, error = %e, "discarding unreadable stored value");
            Ok(None)
        }
    }
}

/// Save a value as JSON.
pub fn save_item<T, S>(store: &S, key: &str, value: &T) -> Result<(), StorageError>
where
    T: Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    let json = serde_json::to_string(value)?;
    store.put_raw(key, &json)
}
