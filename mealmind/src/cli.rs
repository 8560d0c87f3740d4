use clap::Parser;
use std::path::PathBuf;

use crate::config::Settings;

/// Terminal client for the MealMind recipe suggestion service
#[derive(Debug, Parser)]
#[command(name = "mealmind", version, about)]
pub struct Cli {
    /// Path to a config file (defaults to ~/.config/mealmind/config.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Backend base URL
    #[arg(long)]
    pub base_url: Option<String>,

    /// Move focus without settle delays
    #[arg(long)]
    pub reduced_motion: bool,

    /// Start in dark mode
    #[arg(long)]
    pub dark: bool,

    /// Directory exported recipes are written to
    #[arg(long)]
    pub export_dir: Option<PathBuf>,
}

impl Cli {
    /// Apply command line overrides on top of loaded settings
    pub fn apply(&self, mut settings: Settings) -> Settings {
        if let Some(base_url) = &self.base_url {
            settings.base_url = base_url.clone();
        }
        if self.reduced_motion {
            settings.reduced_motion = true;
        }
        if self.dark {
            settings.dark_mode = true;
        }
        if let Some(export_dir) = &self.export_dir {
            settings.export_dir = export_dir.clone();
        }
        settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_settings() {
        let cli = Cli::parse_from([
            "mealmind",
            "--base-url",
            "http://localhost:10000",
            "--dark",
            "--export-dir",
            "/tmp/recipes",
        ]);

        let settings = cli.apply(Settings::default());
        assert_eq!(settings.base_url, "http://localhost:10000");
        assert!(settings.dark_mode);
        assert!(!settings.reduced_motion);
        assert_eq!(settings.export_dir, PathBuf::from("/tmp/recipes"));
    }

    #[test]
    fn test_no_flags_keep_settings() {
        let cli = Cli::parse_from(["mealmind"]);
        let settings = cli.apply(Settings::default());
        assert_eq!(settings, Settings::default());
    }
}
