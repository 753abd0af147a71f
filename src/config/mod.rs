use crate::errors::{AppError, AppResult};
use crate::models::timeframe::Timeframe;
use crate::reporter::Reporter;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Defaults pushed onto reporters. Every field is optional: whatever is
/// left out stays unset on the reporter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReporterConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeframe: Option<Timeframe>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_range_limit: Option<i64>,
}

impl ReporterConfig {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("rreporter")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rreporter.conf")
    }

    /// Load [`ReporterConfig::config_file`] from the platform config dir.
    /// A missing file is not an error: defaults (nothing set) are returned.
    /// A file that exists but cannot be read or parsed is an error.
    pub fn load() -> AppResult<Self> {
        Self::load_or_default(&Self::config_file())
    }

    /// Like [`ReporterConfig::load`], for an explicit path.
    pub fn load_or_default(path: &Path) -> AppResult<Self> {
        if path.exists() {
            Self::load_from(path)
        } else {
            debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path)?;
        let cfg = Self::from_yaml(&content)?;
        debug!(path = %path.display(), ?cfg, "config loaded");
        Ok(cfg)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        // an empty file is a valid, empty config
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let cfg: Self = serde_yaml::from_str(content)?;
        if let Some(limit) = cfg.date_range_limit
            && limit < 0
        {
            return Err(AppError::Config(format!(
                "date_range_limit must not be negative (got {limit})"
            )));
        }
        Ok(cfg)
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let yaml = serde_yaml::to_string(self)?;
        fs::write(path, yaml)?;
        Ok(())
    }

    /// Apply the configured defaults to `reporter`.
    pub fn apply<R: Reporter>(&self, reporter: &mut R) {
        if let Some(tf) = self.timeframe {
            reporter.set_timeframe(tf);
        }
        if let Some(limit) = self.date_range_limit {
            reporter.set_date_range_limit(limit);
        }
    }
}
