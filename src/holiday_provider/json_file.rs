//! Holiday data read from a JSON document
//!
//! ```json
//! {
//!   "country": "IR",
//!   "years": {
//!     "2025": [ { "date": "2025-03-21", "name": "Nowruz" } ]
//!   }
//! }
//! ```
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use super::{check_country, HolidayProvider, ProviderError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayEntry {
    pub date: NaiveDate,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonFileProvider {
    country: String,
    years: BTreeMap<i32, Vec<HolidayEntry>>,
}

impl JsonFileProvider {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<JsonFileProvider, ProviderError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<JsonFileProvider, ProviderError> {
        let provider: JsonFileProvider = serde_json::from_reader(reader)?;
        Ok(provider)
    }
}

impl HolidayProvider for JsonFileProvider {
    fn lookup(
        &self,
        year: i32,
        country: &str,
    ) -> Result<BTreeMap<NaiveDate, String>, ProviderError> {
        check_country(&self.country, country)?;
        let entries = self
            .years
            .get(&year)
            .ok_or(ProviderError::UnsupportedYear(year))?;
        let mut holidays: BTreeMap<NaiveDate, String> = BTreeMap::new();
        for entry in entries.iter().filter(|e| e.date.year() == year) {
            holidays
                .entry(entry.date)
                .and_modify(|name| {
                    name.push_str("; ");
                    name.push_str(&entry.name);
                })
                .or_insert_with(|| entry.name.clone());
        }
        Ok(holidays)
    }
}
