use config::{Config, File};
use mealmind_api::DEFAULT_BASE_URL;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Configuration error: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Settings {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub reduced_motion: bool,
    #[serde(default)]
    pub dark_mode: bool,
    #[serde(default = "default_export_dir")]
    pub export_dir: PathBuf,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_export_dir() -> PathBuf {
    dirs::download_dir().unwrap_or_else(|| PathBuf::from("."))
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            reduced_motion: false,
            dark_mode: false,
            export_dir: default_export_dir(),
        }
    }
}

impl Settings {
    /// Load settings from the config file (if any) overlaid with `MEALMIND__*`
    /// environment variables.
    ///
    /// An explicit path wins over `MEALMIND_CONFIG`, which wins over
    /// `<config_dir>/mealmind/config.toml`.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self, SettingsError> {
        let config_path = explicit_path
            .map(Path::to_path_buf)
            .or_else(|| std::env::var("MEALMIND_CONFIG").ok().map(PathBuf::from))
            .or_else(|| dirs::config_dir().map(|d| d.join("mealmind").join("config.toml")));

        let mut builder = Config::builder();
        if let Some(path) = config_path {
            builder = builder.add_source(File::from(path).required(explicit_path.is_some()));
        }

        let settings = builder
            .add_source(config::Environment::with_prefix("MEALMIND").separator("__"))
            .build()?;

        let settings: Settings = settings.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.base_url.trim().is_empty() {
            return Err(SettingsError::Invalid("base_url is required".to_string()));
        }
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(SettingsError::Invalid(
                "base_url must be a valid HTTP(S) URL".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert_eq!(settings.base_url, DEFAULT_BASE_URL);
        assert!(!settings.reduced_motion);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_base_url() {
        let mut settings = Settings::default();

        settings.base_url = "  ".to_string();
        assert!(matches!(settings.validate(), Err(SettingsError::Invalid(_))));

        settings.base_url = "ftp://meal-mind.example.com".to_string();
        assert!(matches!(settings.validate(), Err(SettingsError::Invalid(_))));

        settings.base_url = "http://localhost:10000".to_string();
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_load_from_explicit_file() {
        let path = std::env::temp_dir().join(format!(
            "mealmind-config-test-{}.toml",
            std::process::id()
        ));
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "base_url = \"http://localhost:10000\"").unwrap();
        writeln!(file, "reduced_motion = true").unwrap();
        writeln!(file, "export_dir = \"/tmp/mealmind-exports\"").unwrap();
        drop(file);

        let settings = Settings::load(Some(&path)).unwrap();
        assert_eq!(settings.base_url, "http://localhost:10000");
        assert!(settings.reduced_motion);
        assert!(!settings.dark_mode);
        assert_eq!(settings.export_dir, PathBuf::from("/tmp/mealmind-exports"));

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_load_missing_explicit_file_fails() {
        let path = std::env::temp_dir().join("mealmind-config-does-not-exist.toml");
        assert!(matches!(
            Settings::load(Some(&path)),
            Err(SettingsError::Load(_))
        ));
    }
}
