//! Native high score file

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::{ScoreStore, StoreError, encode_score, parse_score};

/// Stores the high score as a single number in a text file
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ScoreStore for FileStore {
    fn load_high_score(&mut self) -> Result<Option<f64>, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(text) => parse_score(&text),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn save_high_score(&mut self, score: f64) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        // Atomic replace
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, encode_score(score))?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}
