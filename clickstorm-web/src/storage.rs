//! localStorage persistence gateway for the progression snapshot.

use clickstorm_game::{Progress, ProgressStore};
use thiserror::Error;

use crate::dom::{js_error_message, local_storage};

/// localStorage key holding the serialized snapshot.
pub const SAVE_KEY: &str = "clickstorm.save";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("localStorage unavailable: {0}")]
    Unavailable(String),
    #[error("storage write rejected: {0}")]
    Write(String),
    #[error("saved progress is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Durable store backed by the browser's `localStorage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStore;

impl ProgressStore for LocalStore {
    type Error = StorageError;

    fn save(&self, progress: &Progress) -> Result<(), Self::Error> {
        let text = serde_json::to_string(progress)?;
        let storage =
            local_storage().map_err(|err| StorageError::Unavailable(js_error_message(&err)))?;
        storage
            .set_item(SAVE_KEY, &text)
            .map_err(|err| StorageError::Write(js_error_message(&err)))
    }

    fn load(&self) -> Result<Option<Progress>, Self::Error> {
        let storage =
            local_storage().map_err(|err| StorageError::Unavailable(js_error_message(&err)))?;
        let Some(text) = storage
            .get_item(SAVE_KEY)
            .map_err(|err| StorageError::Unavailable(js_error_message(&err)))?
        else {
            return Ok(None);
        };
        Ok(Some(serde_json::from_str(&text)?))
    }

    fn clear(&self) -> Result<(), Self::Error> {
        let storage =
            local_storage().map_err(|err| StorageError::Unavailable(js_error_message(&err)))?;
        storage
            .remove_item(SAVE_KEY)
            .map_err(|err| StorageError::Write(js_error_message(&err)))
    }
}
