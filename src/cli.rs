use crate::config::{ConfigError, FormConfig};
use crate::core::form_state::FormVariant;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "registration-form",
    version,
    about = "Student registration form for the terminal"
)]
pub struct Cli {
    /// Which dependent field to collect: `destination` (country) or `event`.
    #[arg(long)]
    pub variant: Option<FormVariant>,

    /// YAML config file. Defaults to <config_dir>/registration-form/config.yaml.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Logo shown above the form title.
    #[arg(long)]
    pub logo: Option<PathBuf>,

    /// Write logs to this file. Logging is off otherwise.
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// How long submit notices stay on screen.
    #[arg(long)]
    pub notice_timeout_ms: Option<u64>,
}

impl Cli {
    /// Resolves the config file and applies flag overrides on top.
    pub fn resolve_config(&self) -> Result<FormConfig, ConfigError> {
        let mut config = FormConfig::resolve(self.config.as_deref())?;
        self.apply_overrides(&mut config);
        config.validate()?;
        Ok(config)
    }

    fn apply_overrides(&self, config: &mut FormConfig) {
        if let Some(variant) = self.variant {
            config.variant = variant;
        }
        if let Some(logo) = &self.logo {
            config.logo_path = Some(logo.clone());
        }
        if let Some(timeout) = self.notice_timeout_ms {
            config.notice_timeout_ms = timeout;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Cli;
    use crate::config::{ConfigError, FormConfig};
    use crate::core::form_state::FormVariant;
    use clap::Parser;
    use std::io::Write;

    #[test]
    fn flags_override_file_values() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "variant: destination\nnotice_timeout_ms: 1000").expect("write");
        let path = file.path().to_string_lossy().to_string();

        let cli = Cli::try_parse_from([
            "registration-form",
            "--config",
            path.as_str(),
            "--variant",
            "event",
            "--logo",
            "logo.png",
        ])
        .expect("args");
        let config = cli.resolve_config().expect("config");

        assert_eq!(config.variant, FormVariant::Event);
        assert_eq!(config.notice_timeout_ms, 1000);
        assert_eq!(
            config.logo_path.as_deref().and_then(|p| p.to_str()),
            Some("logo.png")
        );
    }

    #[test]
    fn bad_variant_flag_is_a_parse_error() {
        assert!(Cli::try_parse_from(["registration-form", "--variant", "survey"]).is_err());
    }

    #[test]
    fn zero_timeout_flag_fails_validation() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "title: Form").expect("write");
        let path = file.path().to_string_lossy().to_string();

        let cli = Cli::try_parse_from([
            "registration-form",
            "--config",
            path.as_str(),
            "--notice-timeout-ms",
            "0",
        ])
        .expect("args");
        assert!(matches!(cli.resolve_config(), Err(ConfigError::Invalid(_))));
        assert_ne!(FormConfig::default().notice_timeout_ms, 0);
    }
}
