use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use turbo_sim::high_score::{HighScoreStore, StoreError};

/// On-disk high score record.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct HighScoreFile {
    pub high_score: u64,
}

/// High score persisted as a small JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileHighScore {
    path: PathBuf,
}

impl JsonFileHighScore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HighScoreStore for JsonFileHighScore {
    fn load(&self) -> Result<u64, StoreError> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(0),
            Err(e) => return Err(e.into()),
        };
        let data: HighScoreFile = serde_json::from_str(&json)?;
        Ok(data.high_score)
    }

    fn save(&mut self, score: u64) -> Result<(), StoreError> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }
        let json = serde_json::to_string_pretty(&HighScoreFile { high_score: score })?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}
