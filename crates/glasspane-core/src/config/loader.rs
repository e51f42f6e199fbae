use std::io::ErrorKind;
use std::path::PathBuf;

use super::Config;
use crate::log_warn;

/// Returns the config directory: `~/.config/glasspane/`.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".config").join("glasspane"))
}

/// Returns the config file path: `~/.config/glasspane/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Why a config file could not be loaded.
#[derive(thiserror::Error, Debug)]
pub enum LoadError {
    /// The file does not exist.
    #[error("config file not found")]
    Missing,
    /// The file exists but could not be read or parsed.
    #[error("{0}")]
    Invalid(String),
}

/// Tries to load and parse `config.toml`.
///
/// Values are clamped to safe ranges via [`Config::validate`].
pub fn try_load() -> Result<Config, LoadError> {
    let path = config_path()
        .ok_or_else(|| LoadError::Invalid("could not determine config path".into()))?;
    let content = std::fs::read_to_string(&path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => LoadError::Missing,
        _ => LoadError::Invalid(format!("{}: {e}", path.display())),
    })?;
    parse(&content).map_err(|e| LoadError::Invalid(format!("{}: {e}", path.display())))
}

/// Loads the configuration from disk, falling back to defaults.
///
/// A missing file silently yields defaults; an unreadable or invalid one
/// is reported on stderr and in the log.
pub fn load() -> Config {
    match try_load() {
        Ok(config) => config,
        Err(LoadError::Missing) => Config::default(),
        Err(e) => {
            eprintln!("Warning: {e}");
            log_warn!("using default config: {e}");
            Config::default()
        }
    }
}

/// Parses and validates config text.
pub(crate) fn parse(content: &str) -> Result<Config, toml::de::Error> {
    let mut config: Config = toml::from_str(content)?;
    config.validate();
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_validates_values() {
        // Arrange
        let content = "[overlay]\nsync_interval = 12\n";

        // Act
        let config = parse(content).unwrap();

        // Assert
        assert_eq!(config.overlay.sync_interval, 4);
    }

    #[test]
    fn parse_rejects_malformed_toml() {
        assert!(parse("[overlay\ntitle = 1").is_err());
    }

    #[test]
    fn config_path_lives_under_config_dir() {
        if let (Some(dir), Some(path)) = (config_dir(), config_path()) {
            assert!(path.starts_with(dir));
            assert!(path.ends_with("config.toml"));
        }
    }
}
