use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

const APP_DIR_NAME: &str = "ai-snake";
const SCORE_FILE_NAME: &str = "scores.json";

/// Failures reading or writing the persisted high score.
#[derive(Debug, Error)]
pub enum ScoreError {
    #[error("score file I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("score file is malformed: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct ScoreFile {
    high_score: u32,
}

/// Returns the directory holding the score file and logs.
#[must_use]
pub fn data_dir() -> PathBuf {
    let mut base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base
}

/// Returns the platform-correct score file path.
#[must_use]
pub fn scores_path() -> PathBuf {
    data_dir().join(SCORE_FILE_NAME)
}

/// Loads high score from disk.
///
/// Returns `Ok(0)` when the score file does not yet exist (first run).
pub fn load_high_score() -> Result<u32, ScoreError> {
    load_high_score_from_path(&scores_path())
}

/// Saves high score to disk, creating parent directories when needed.
pub fn save_high_score(score: u32) -> Result<(), ScoreError> {
    save_high_score_to_path(&scores_path(), score)
}

fn load_high_score_from_path(path: &Path) -> Result<u32, ScoreError> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(0),
        Err(e) => return Err(e.into()),
    };

    let file: ScoreFile = serde_json::from_str(&raw)?;
    Ok(file.high_score)
}

fn save_high_score_to_path(path: &Path, score: u32) -> Result<(), ScoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let payload = ScoreFile { high_score: score };
    let json = serde_json::to_string_pretty(&payload)?;

    fs::write(path, json)?;
    Ok(())
}
