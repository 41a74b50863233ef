//! Reading and writing diagram state files.

use std::{fs, io, path::Path};

use log::{debug, info};
use thiserror::Error;

use trackplan::{DiagramState, TrackplanError};

/// State file errors for CLI
#[derive(Debug, Error)]
pub enum StateFileError {
    #[error("Failed to parse state file: {0}")]
    Parse(String),

    #[error("Failed to serialize state: {0}")]
    Serialize(String),
}

impl From<StateFileError> for TrackplanError {
    fn from(err: StateFileError) -> Self {
        TrackplanError::Io(io::Error::new(io::ErrorKind::InvalidData, err.to_string()))
    }
}

/// Load a state file.
///
/// # Errors
///
/// Returns error if the file cannot be read or is not a valid state file.
pub fn load_state(path: &Path) -> Result<DiagramState, TrackplanError> {
    let content = fs::read_to_string(path)?;
    let state = toml::from_str(&content).map_err(|e| StateFileError::Parse(e.to_string()))?;
    debug!(path = path.display().to_string(); "State file loaded");
    Ok(state)
}

/// Load a state file, or start from an empty state when it does not exist.
///
/// # Errors
///
/// Returns error if an existing file cannot be read or parsed.
pub fn load_or_default(path: &Path) -> Result<DiagramState, TrackplanError> {
    if path.exists() {
        load_state(path)
    } else {
        info!(path = path.display().to_string(); "State file not found, starting empty");
        Ok(DiagramState::default())
    }
}

/// Write a state file, replacing any previous content.
///
/// # Errors
///
/// Returns error if serialization or the write fails.
pub fn save_state(path: &Path, state: &DiagramState) -> Result<(), TrackplanError> {
    let content = toml::to_string(state).map_err(|e| StateFileError::Serialize(e.to_string()))?;
    fs::write(path, content)?;
    debug!(path = path.display().to_string(); "State file written");
    Ok(())
}
