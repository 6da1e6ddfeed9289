//! Form configuration.
//!
//! Values come from, in order of precedence: command-line flags, a YAML file
//! (`--config`, or `<config_dir>/registration-form/config.yaml` when present),
//! and built-in defaults.

use crate::core::app::{AppOptions, DEFAULT_NOTICE_TIMEOUT};
use crate::core::controller::RegistrationForm;
use crate::core::form_state::FormVariant;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;
use tracing::level_filters::LevelFilter;

const CONFIG_DIR_NAME: &str = "registration-form";
const CONFIG_FILE_NAME: &str = "config.yaml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config from {origin}")]
    Parse {
        origin: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormConfig {
    pub variant: FormVariant,
    pub title: String,
    /// Shown above the title; the terminal prints the path in place of the image.
    pub logo_path: Option<PathBuf>,
    pub notice_timeout_ms: u64,
    /// Used when `RUST_LOG` is not set.
    pub log_level: String,
}

impl Default for FormConfig {
    fn default() -> Self {
        let options = AppOptions::default();
        Self {
            variant: FormVariant::default(),
            title: options.title,
            logo_path: None,
            notice_timeout_ms: DEFAULT_NOTICE_TIMEOUT.as_millis() as u64,
            log_level: "info".to_string(),
        }
    }
}

impl FormConfig {
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Loads `explicit` if given, else the default file if it exists, else
    /// the built-in defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        match Self::default_path() {
            Some(path) if path.is_file() => Self::load(&path),
            _ => {
                debug!("no config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loading config");
        Self::parse(&raw, &path.display().to_string())
    }

    pub fn from_yaml_str(raw: &str) -> Result<Self, ConfigError> {
        Self::parse(raw, "<inline>")
    }

    fn parse(raw: &str, origin: &str) -> Result<Self, ConfigError> {
        // An empty document deserializes to unit, not to a mapping.
        let config: Self = if raw.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml::from_str(raw).map_err(|source| ConfigError::Parse {
                origin: origin.to_string(),
                source,
            })?
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.title.trim().is_empty() {
            return Err(ConfigError::Invalid("title must not be empty".to_string()));
        }
        if self.notice_timeout_ms == 0 {
            return Err(ConfigError::Invalid(
                "notice_timeout_ms must be greater than zero".to_string(),
            ));
        }
        self.log_level.parse::<LevelFilter>().map_err(|_| {
            ConfigError::Invalid(format!("unknown log_level `{}`", self.log_level))
        })?;
        Ok(())
    }

    pub fn notice_timeout(&self) -> Duration {
        Duration::from_millis(self.notice_timeout_ms)
    }

    pub fn build_form(&self) -> RegistrationForm {
        let form = RegistrationForm::new(self.variant);
        match &self.logo_path {
            Some(path) => form.with_logo(path),
            None => form,
        }
    }

    pub fn app_options(&self) -> AppOptions {
        AppOptions {
            title: self.title.clone(),
            notice_timeout: self.notice_timeout(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, FormConfig};
    use crate::core::form_state::FormVariant;
    use std::io::Write;
    use std::path::PathBuf;
    use std::time::Duration;

    #[test]
    fn partial_yaml_fills_defaults() {
        let config = FormConfig::from_yaml_str("variant: event\nnotice_timeout_ms: 1500\n")
            .expect("config");
        assert_eq!(config.variant, FormVariant::Event);
        assert_eq!(config.notice_timeout(), Duration::from_millis(1500));
        assert_eq!(config.title, "Student Registration Form");
        assert_eq!(config.logo_path, None);
    }

    #[test]
    fn empty_document_is_default() {
        assert_eq!(FormConfig::from_yaml_str("").expect("config"), FormConfig::default());
    }

    #[test]
    fn unknown_variant_and_keys_are_rejected() {
        assert!(matches!(
            FormConfig::from_yaml_str("variant: country\n"),
            Err(ConfigError::Parse { .. })
        ));
        assert!(matches!(
            FormConfig::from_yaml_str("colour: blue\n"),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(matches!(
            FormConfig::from_yaml_str("notice_timeout_ms: 0\n"),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            FormConfig::from_yaml_str("log_level: loud\n"),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn load_reads_file_and_builds_form() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(
            file,
            "variant: destination\ntitle: Global Minds\nlogo_path: assets/logo.png"
        )
        .expect("write");

        let config = FormConfig::resolve(Some(file.path())).expect("config");
        assert_eq!(config.title, "Global Minds");
        assert_eq!(config.logo_path, Some(PathBuf::from("assets/logo.png")));

        let form = config.build_form();
        assert_eq!(form.variant(), FormVariant::Destination);
        assert_eq!(form.logo_path(), Some(PathBuf::from("assets/logo.png").as_path()));
        assert_eq!(config.app_options().title, "Global Minds");
    }

    #[test]
    fn missing_explicit_file_is_an_io_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let missing = dir.path().join("nope.yaml");
        assert!(matches!(
            FormConfig::resolve(Some(&missing)),
            Err(ConfigError::Io { .. })
        ));
    }
}
