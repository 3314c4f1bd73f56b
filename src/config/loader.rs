//! Config file loader and serialization.

use super::AppConfig;
use crate::error::ConfigError;
use std::fs;
use std::path::{Path, PathBuf};

/// Get the global config path: ~/.config/gpu-bench/config.toml
pub fn get_global_config_path() -> Result<PathBuf, ConfigError> {
    let config_dir = dirs::config_dir().ok_or_else(|| {
        ConfigError::ValidationFailed("Cannot determine config directory".to_string())
    })?;

    Ok(config_dir.join("gpu-bench").join("config.toml"))
}

/// Validate config path (.toml extension required).
pub fn validate_config_path(path: &Path) -> Result<(), ConfigError> {
    if path.as_os_str().is_empty() {
        return Err(ConfigError::ValidationFailed(
            "Configuration path cannot be empty".to_string(),
        ));
    }

    match path.extension() {
        Some(ext) if ext == "toml" => Ok(()),
        Some(ext) => Err(ConfigError::ValidationFailed(format!(
            "Configuration file must have .toml extension, got .{}",
            ext.to_string_lossy()
        ))),
        None => Err(ConfigError::ValidationFailed(
            "Configuration file must have .toml extension".to_string(),
        )),
    }
}

/// Load and validate config from a TOML file.
pub fn load_config_from_file(path: &Path) -> Result<AppConfig, ConfigError> {
    validate_config_path(path)?;

    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ConfigError::FileNotFound(format!(
                "Configuration file not found at: {}",
                path.display()
            ))
        } else {
            ConfigError::IoError(e)
        }
    })?;

    let config: AppConfig = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// Load config, falling back to defaults when the file does not exist.
pub fn load_or_default(path: &Path) -> Result<AppConfig, ConfigError> {
    match load_config_from_file(path) {
        Ok(config) => {
            log::info!("[Config] Loaded configuration from {}", path.display());
            Ok(config)
        }
        Err(ConfigError::FileNotFound(_)) => {
            log::info!("[Config] No configuration at {}, using defaults", path.display());
            Ok(AppConfig::default())
        }
        Err(e) => Err(e),
    }
}

/// Save config to a TOML file, creating parent directories.
pub fn save_config_to_file(config: &AppConfig, path: &Path) -> Result<(), ConfigError> {
    validate_config_path(path)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ScoreType;
    use tempfile::TempDir;

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested/config.toml");

        let original = AppConfig {
            search_delay_ms: 120,
            default_score_type: ScoreType::SteelNomad,
            extra_catalog: Some(PathBuf::from("/tmp/extra.json")),
            ..AppConfig::default()
        };

        save_config_to_file(&original, &path).expect("Failed to save config");
        let loaded = load_config_from_file(&path).expect("Failed to load config");
        assert_eq!(loaded, original);
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("absent.toml");

        assert!(matches!(
            load_config_from_file(&path),
            Err(ConfigError::FileNotFound(_))
        ));
        assert_eq!(load_or_default(&path).unwrap(), AppConfig::default());
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "search_delay_ms = \"soon\"").unwrap();

        assert!(matches!(load_or_default(&path), Err(ConfigError::InvalidToml(_))));
    }

    #[test]
    fn test_invalid_values_rejected_on_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "suggestion_limit = 0").unwrap();

        assert!(matches!(
            load_config_from_file(&path),
            Err(ConfigError::ValidationFailed(_))
        ));
    }

    #[test]
    fn test_path_extension_checked() {
        assert!(validate_config_path(Path::new("config.json")).is_err());
        assert!(validate_config_path(Path::new("")).is_err());
        assert!(validate_config_path(Path::new("config")).is_err());
        assert!(validate_config_path(Path::new("config.toml")).is_ok());
    }
}
