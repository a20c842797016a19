use std::path::{Path, PathBuf};
use config::{Config, ConfigError};
use serde::{Deserialize, Serialize};
use ramp_model::report::DEFAULT_PRECISION;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Settings {
    log_level: String,
    log_file: String,
    report_precision: usize
}

impl Settings {
    const LOG_LEVEL: &'static str = "log_level";
    const LOG_FILE: &'static str = "log_file";
    const REPORT_PRECISION: &'static str = "report_precision";
    const CONFIG_FILENAME: &'static str = "ramp-velocity-conf";
    const ENV_PREFIX: &'static str = "RAMP_VELOCITY";

    pub fn default() -> Self {
        Settings {
            log_level: "info".to_string(),
            log_file: String::new(),
            report_precision: DEFAULT_PRECISION,
        }
    }

    pub fn load() -> Result<Self, ConfigError> {
        Settings::load_from(Settings::CONFIG_FILENAME)
    }

    /// Load from the optional config file `name` layered under any
    /// `RAMP_VELOCITY_*` environment variables. A broken source is reported
    /// and the defaults are used instead.
    pub fn load_from(name: &str) -> Result<Self, ConfigError> {
        let built = Settings::builder_with_defaults()?
            .add_source(config::File::with_name(name).required(false))
            .add_source(config::Environment::with_prefix(Settings::ENV_PREFIX))
            .build()
            .and_then(|settings| settings.try_deserialize::<Settings>());
        match built {
            Ok(settings) => Ok(settings),
            Err(e) => {
                eprintln!("Failed to load settings. {}", e.to_string());
                Settings::builder_with_defaults()?.build()?.try_deserialize()
            }
        }
    }

    fn builder_with_defaults() -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        let defaults = Settings::default();
        Config::builder()
            .set_default(Settings::LOG_LEVEL, defaults.log_level)?
            .set_default(Settings::LOG_FILE, defaults.log_file)?
            .set_default(Settings::REPORT_PRECISION, defaults.report_precision as i64)
    }

    pub fn log_level(&self) -> &str {
        &self.log_level
    }

    pub fn log_file(&self) -> Option<PathBuf> {
        if self.log_file.trim().is_empty() {
            return None;
        }
        Some(PathBuf::from(&self.log_file))
    }

    pub fn set_log_file(&mut self, new_path: &Path) {
        self.log_file = new_path.to_string_lossy().into_owned();
    }

    pub fn report_precision(&self) -> usize {
        self.report_precision
    }
}
