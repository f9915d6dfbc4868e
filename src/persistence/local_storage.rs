//! Browser LocalStorage backend

use web_sys::Storage;

use super::{ScoreStore, StoreError, encode_score, parse_score};

/// LocalStorage key used by earlier web builds, so records carry over
const STORAGE_KEY: &str = "dinoHighScore";

/// High score in `window.localStorage`
#[derive(Debug, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    fn storage() -> Result<Storage, StoreError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or_else(|| StoreError::Unavailable("no localStorage".into()))
    }
}

impl ScoreStore for LocalStorageStore {
    fn load_high_score(&mut self) -> Result<Option<f64>, StoreError> {
        let storage = Self::storage()?;
        match storage.get_item(STORAGE_KEY) {
            Ok(Some(text)) => parse_score(&text),
            Ok(None) => Ok(None),
            Err(err) => Err(StoreError::Unavailable(format!("{err:?}"))),
        }
    }

    fn save_high_score(&mut self, score: f64) -> Result<(), StoreError> {
        let storage = Self::storage()?;
        storage
            .set_item(STORAGE_KEY, &encode_score(score))
            .map_err(|err| StoreError::Unavailable(format!("{err:?}")))
    }
}
