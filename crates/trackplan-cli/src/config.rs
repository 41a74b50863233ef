//! Configuration file loading for the CLI
//!
//! This module handles finding and loading TOML configuration files
//! from various locations (explicit path, local directory, system directory).

use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use thiserror::Error;

use trackplan::{TrackplanError, config::AppConfig};

/// Configuration-related errors for CLI
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration: {0}")]
    Parse(String),

    #[error("Missing configuration file: {0}")]
    MissingFile(PathBuf),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<ConfigError> for TrackplanError {
    fn from(err: ConfigError) -> Self {
        TrackplanError::Config(err.to_string())
    }
}

/// Find and load configuration from various locations
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Local project directory (trackplan/config.toml)
/// 3. Platform-specific config directory
/// 4. Default config if none found
///
/// # Arguments
///
/// * `explicit_path` - Optional explicit path to config file
///
/// # Errors
///
/// Returns error if:
/// - Explicit path is provided but file doesn't exist
/// - Config file exists but cannot be parsed or fails validation
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, TrackplanError> {
    // 1. Try the explicitly provided path first if available
    if let Some(path) = explicit_path {
        let path = path.as_ref();
        info!(path = path.display().to_string(); "Loading configuration from explicit path");
        return load_config_file(path);
    }

    // 2. Try the local project directory
    let local_config = Path::new("trackplan/config.toml");
    if local_config.exists() {
        info!(path = local_config.display().to_string(); "Loading configuration from local path");
        return load_config_file(local_config);
    }

    // 3. Try the platform-specific config directory
    if let Some(proj_dirs) = ProjectDirs::from("com", "trackplan", "trackplan") {
        let system_config = proj_dirs.config_dir().join("config.toml");

        if system_config.exists() {
            info!(path = system_config.display().to_string(); "Loading configuration from system path");
            return load_config_file(system_config);
        }

        debug!(path = system_config.display().to_string(); "System configuration file not found");
    } else {
        debug!("Could not determine platform-specific config directory");
    }

    // 4. If no config is found, return default config
    debug!("No configuration file found, using default configuration");
    Ok(AppConfig::default())
}

/// Load configuration from a TOML file
///
/// # Errors
///
/// Returns error if:
/// - File doesn't exist
/// - File cannot be read
/// - TOML parsing fails
/// - The layout or style section is invalid
fn load_config_file(path: impl AsRef<Path>) -> Result<AppConfig, TrackplanError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConfigError::MissingFile(path.to_path_buf()).into());
    }

    let content = fs::read_to_string(path)?;

    let config: AppConfig =
        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;

    config.layout().validate().map_err(ConfigError::Validation)?;
    config
        .style()
        .palette()
        .map_err(ConfigError::Validation)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn config_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_explicit_config() {
        let file = config_file("[layout]\nwidth = 1200\n");
        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config.layout().width(), 1200.0);
        assert_eq!(config.layout().top_track_y(), 280.0);
    }

    #[test]
    fn test_missing_explicit_config() {
        let err = load_config(Some("/nonexistent/trackplan.toml")).unwrap_err();
        assert!(matches!(err, TrackplanError::Config(msg) if msg.contains("Missing")));
    }

    #[test]
    fn test_unparsable_config() {
        let file = config_file("[layout\n");
        let err = load_config(Some(file.path())).unwrap_err();
        assert!(matches!(err, TrackplanError::Config(msg) if msg.contains("parse")));
    }

    #[test]
    fn test_invalid_color_rejected_at_load() {
        let file = config_file("[style]\naccent_color = \"bogus\"\n");
        let err = load_config(Some(file.path())).unwrap_err();
        assert!(matches!(err, TrackplanError::Config(msg) if msg.contains("Validation")));
    }
}
