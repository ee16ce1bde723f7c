//! Program configuration, read from an optional JSON file.
//! Every field has a default, so an empty document `{}` is a valid configuration.

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::holiday_provider::json_file::HolidayEntry;
use crate::holiday_provider::{BuiltinIranProvider, HolidayProvider, JsonFileProvider, ProviderError};
use crate::labels::CalendarLabels;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read configuration: {0}")]
    IoError(#[from] std::io::Error),
    #[error("failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),
    #[error("invalid year '{0}'")]
    InvalidYear(String),
    #[error("unexpected argument '{0}'")]
    UnexpectedArgument(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub year: i32,
    /// Directory the exports are written to
    pub output_dir: PathBuf,
    /// CSV file name, defaults to `iran_holidays_<year>.csv`
    pub csv_file: Option<PathBuf>,
    /// JSON file name, defaults to `iran_holidays_<year>.json`
    pub json_file: Option<PathBuf>,
    /// Additional log file, next to the console log
    pub log_file: Option<PathBuf>,
    pub show_persian_names: bool,
    /// Holiday data file, the built-in rules are used if not given
    pub holiday_data: Option<PathBuf>,
    /// Days added to all Lunar Hijri holidays of the built-in rules, at most 3 in either direction
    pub hijri_offset_days: i64,
    /// One-off closures added to the built-in rules
    pub extra_holidays: Vec<HolidayEntry>,
    pub labels: CalendarLabels,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            year: 2025,
            output_dir: PathBuf::from("."),
            csv_file: None,
            json_file: None,
            log_file: Some(PathBuf::from("holidays.log")),
            show_persian_names: true,
            holiday_data: None,
            hijri_offset_days: 0,
            extra_holidays: Vec::new(),
            labels: CalendarLabels::default(),
        }
    }
}

impl Config {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Config, ConfigError> {
        let config: Config = serde_json::from_reader(reader)?;
        Ok(config)
    }

    /// Build the configuration from command line arguments `[YEAR] [CONFIG.json]`
    /// (program name excluded). A numeric argument is the year, any other the
    /// configuration file. A given year overrides the year of the file.
    pub fn from_args(args: &[String]) -> Result<Config, ConfigError> {
        let mut year = None;
        let mut path = None;
        for arg in args {
            let numeric = !arg.is_empty() && arg.chars().all(|c| c.is_ascii_digit());
            if numeric && year.is_none() && path.is_none() {
                year = Some(
                    arg.parse::<i32>()
                        .map_err(|_| ConfigError::InvalidYear(arg.clone()))?,
                );
            } else if !numeric && path.is_none() {
                path = Some(PathBuf::from(arg));
            } else {
                return Err(ConfigError::UnexpectedArgument(arg.clone()));
            }
        }
        let mut config = match path {
            Some(path) => Self::from_path(path)?,
            None => Config::default(),
        };
        if let Some(year) = year {
            config.year = year;
        }
        Ok(config)
    }

    /// The holiday provider selected by this configuration
    pub fn provider(&self) -> Result<Box<dyn HolidayProvider>, ProviderError> {
        match &self.holiday_data {
            Some(path) => Ok(Box::new(JsonFileProvider::from_path(path)?)),
            None => {
                let mut provider = BuiltinIranProvider::with_hijri_offset(self.hijri_offset_days)?;
                for entry in &self.extra_holidays {
                    provider.add_singular_day(entry.date, &entry.name);
                }
                Ok(Box::new(provider))
            }
        }
    }

    /// Target path of the CSV export inside the output directory
    pub fn csv_path(&self) -> PathBuf {
        match &self.csv_file {
            Some(file) => self.output_dir.join(file),
            None => self.output_dir.join(format!("iran_holidays_{}.csv", self.year)),
        }
    }

    /// Target path of the JSON export inside the output directory
    pub fn json_path(&self) -> PathBuf {
        match &self.json_file {
            Some(file) => self.output_dir.join(file),
            None => self.output_dir.join(format!("iran_holidays_{}.json", self.year)),
        }
    }
}
