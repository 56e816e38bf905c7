use crate::core::CsvFormat;
use crate::errors::{AppError, AppResult};
use crate::utils::date::parse_timezone;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_timezone")]
    pub timezone: String,
    #[serde(default = "default_encoding")]
    pub encoding: String,
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
    #[serde(default = "default_preview_rows")]
    pub preview_rows: usize,
    #[serde(default = "default_bar_width")]
    pub bar_width: usize,
    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_timezone() -> String {
    "Europe/Zurich".to_string()
}
fn default_encoding() -> String {
    "utf-16".to_string()
}
fn default_delimiter() -> String {
    "\t".to_string()
}
fn default_preview_rows() -> usize {
    10
}
fn default_bar_width() -> usize {
    40
}
fn default_color() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timezone: default_timezone(),
            encoding: default_encoding(),
            delimiter: default_delimiter(),
            preview_rows: default_preview_rows(),
            bar_width: default_bar_width(),
            color: default_color(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".nukistats")
    }

    /// Return the full path of the default config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("nukistats.conf")
    }

    /// Load configuration from `path`, or return defaults if it does not exist
    pub fn load(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("cannot parse {}: {e}", path.display())))
    }

    /// Write the configuration to `path`, creating parent directories
    pub fn save(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }

        let yaml = serde_yaml::to_string(self)
            .map_err(|e| AppError::Config(format!("cannot serialize configuration: {e}")))?;
        let mut file = fs::File::create(path)?;
        file.write_all(yaml.as_bytes())?;
        Ok(())
    }

    pub fn tz(&self) -> AppResult<Tz> {
        parse_timezone(&self.timezone)
    }

    pub fn csv_format(&self) -> AppResult<CsvFormat> {
        CsvFormat::from_labels(&self.encoding, &self.delimiter)
    }
}
