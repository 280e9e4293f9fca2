//! trendctl settings
//!
//! Settings say where the scraper's files live and how to launch it. They
//! are read from YAML, every field is optional:
//!
//! ```yaml
//! config_path: /app/config/config.yaml
//! keywords_path: /app/config/frequency_words.txt
//! crontab_path: /app/config/crontab
//! workdir: /app
//! runner: /usr/local/bin/python main.py
//! editor: vim
//! ```
//!
//! Lookup order: an explicit `--settings` file (which must exist), then
//! `<config dir>/trendctl/settings.yaml` when present, then the defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::common::fs::read_text;
use crate::error::{self, Result};

const SETTINGS_DIR: &str = "trendctl";
const SETTINGS_FILE: &str = "settings.yaml";
const FALLBACK_EDITOR: &str = "nano";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub config_path: PathBuf,
    pub keywords_path: PathBuf,
    pub crontab_path: PathBuf,
    /// Directory the job is started from
    pub workdir: String,
    /// Command line that runs the job once
    pub runner: String,
    pub editor: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            config_path: PathBuf::from("/app/config/config.yaml"),
            keywords_path: PathBuf::from("/app/config/frequency_words.txt"),
            crontab_path: PathBuf::from("/app/config/crontab"),
            workdir: "/app".to_string(),
            runner: "/usr/local/bin/python main.py".to_string(),
            editor: None,
        }
    }
}

impl Settings {
    /// Resolve settings from an explicit file, the user config dir, or defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.is_file() {
                return Err(error::config::not_found(path.display().to_string()));
            }
            return Self::from_file(path);
        }

        match default_path() {
            Some(path) if path.is_file() => Self::from_file(&path),
            _ => {
                debug!("no settings file, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = read_text(path)?;
        let settings = parse(&content)
            .map_err(|e| error::config::parse_failed(path.display().to_string(), e.to_string()))?;
        debug!(path = %path.display(), "loaded settings");
        Ok(settings)
    }

    /// Parse settings YAML; an empty document gives the defaults.
    pub fn from_yaml(content: &str) -> Result<Self> {
        Ok(parse(content)?)
    }

    /// Apply per-invocation path overrides.
    #[must_use]
    pub fn with_overrides(
        mut self,
        config: Option<PathBuf>,
        keywords: Option<PathBuf>,
        crontab: Option<PathBuf>,
    ) -> Self {
        if let Some(path) = config {
            self.config_path = path;
        }
        if let Some(path) = keywords {
            self.keywords_path = path;
        }
        if let Some(path) = crontab {
            self.crontab_path = path;
        }
        self
    }

    /// Editor command: the setting, then `$EDITOR`, then nano.
    pub fn editor(&self) -> String {
        self.editor
            .clone()
            .filter(|e| !e.trim().is_empty())
            .or_else(|| std::env::var("EDITOR").ok().filter(|e| !e.trim().is_empty()))
            .unwrap_or_else(|| FALLBACK_EDITOR.to_string())
    }
}

fn parse(content: &str) -> std::result::Result<Settings, serde_yaml::Error> {
    if content.trim().is_empty() {
        return Ok(Settings::default());
    }
    serde_yaml::from_str(content)
}

/// `<config dir>/trendctl/settings.yaml`
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(SETTINGS_DIR).join(SETTINGS_FILE))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::TrendctlError;
    use serial_test::serial;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.config_path, PathBuf::from("/app/config/config.yaml"));
        assert_eq!(settings.workdir, "/app");
        assert_eq!(settings.runner, "/usr/local/bin/python main.py");
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let settings = Settings::from_yaml("workdir: /srv/trend\neditor: vim\n").unwrap();
        assert_eq!(settings.workdir, "/srv/trend");
        assert_eq!(settings.editor.as_deref(), Some("vim"));
        assert_eq!(settings.crontab_path, PathBuf::from("/app/config/crontab"));
    }

    #[test]
    fn test_empty_yaml_is_default() {
        assert_eq!(Settings::from_yaml("  \n").unwrap(), Settings::default());
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let result = Settings::from_yaml("confg_path: /x\n");
        assert!(matches!(result, Err(TrendctlError::SettingsParseFailed { .. })));
    }

    #[test]
    fn test_explicit_file_must_exist() {
        let temp = TempDir::new().unwrap();
        let result = Settings::load(Some(&temp.path().join("missing.yaml")));
        assert!(matches!(result, Err(TrendctlError::SettingsNotFound { .. })));
    }

    #[test]
    fn test_explicit_file_parse_error_names_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("settings.yaml");
        std::fs::write(&path, "workdir: [unclosed\n").unwrap();
        let err = Settings::load(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("settings.yaml"));
    }

    #[test]
    fn test_overrides() {
        let settings = Settings::default().with_overrides(
            Some(PathBuf::from("/tmp/c.yaml")),
            None,
            Some(PathBuf::from("/tmp/cron")),
        );
        assert_eq!(settings.config_path, PathBuf::from("/tmp/c.yaml"));
        assert_eq!(settings.keywords_path, PathBuf::from("/app/config/frequency_words.txt"));
        assert_eq!(settings.crontab_path, PathBuf::from("/tmp/cron"));
    }

    #[test]
    #[serial]
    fn test_editor_resolution() {
        let previous = std::env::var("EDITOR").ok();

        let configured = Settings {
            editor: Some("vim".to_string()),
            ..Settings::default()
        };
        assert_eq!(configured.editor(), "vim");

        // SAFETY: serialized with the other env-mutating tests
        unsafe { std::env::set_var("EDITOR", "emacs") };
        assert_eq!(Settings::default().editor(), "emacs");

        unsafe { std::env::remove_var("EDITOR") };
        assert_eq!(Settings::default().editor(), FALLBACK_EDITOR);

        if let Some(value) = previous {
            unsafe { std::env::set_var("EDITOR", value) };
        }
    }
}
