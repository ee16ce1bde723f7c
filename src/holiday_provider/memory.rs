//! Implementation of an in-memory holiday provider
use chrono::{Datelike, NaiveDate};
use std::collections::BTreeMap;

use super::{check_country, HolidayProvider, ProviderError};

/// Holidays stored in memory, e.g. for tests or data fetched elsewhere
#[derive(Debug, Clone)]
pub struct MemoryProvider {
    country: String,
    holidays: BTreeMap<NaiveDate, String>,
}

impl MemoryProvider {
    pub fn new(country: &str) -> MemoryProvider {
        MemoryProvider {
            country: country.to_string(),
            holidays: BTreeMap::new(),
        }
    }

    /// Add a holiday, replacing the name of an existing holiday on the same date
    pub fn insert(&mut self, date: NaiveDate, name: &str) {
        self.holidays.insert(date, name.to_string());
    }

    pub fn with_holiday(mut self, date: NaiveDate, name: &str) -> MemoryProvider {
        self.insert(date, name);
        self
    }
}

impl HolidayProvider for MemoryProvider {
    fn lookup(
        &self,
        year: i32,
        country: &str,
    ) -> Result<BTreeMap<NaiveDate, String>, ProviderError> {
        check_country(&self.country, country)?;
        Ok(self
            .holidays
            .iter()
            .filter(|(date, _)| date.year() == year)
            .map(|(date, name)| (*date, name.clone()))
            .collect())
    }
}
