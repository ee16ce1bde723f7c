//! Sources of official holiday data.
//! The off-day calendar only relies on the [`HolidayProvider`] interface, the
//! correctness of the holiday data is the responsibility of the provider.

use chrono::NaiveDate;
use std::collections::BTreeMap;
use thiserror::Error;

use crate::date_helper::DateError;

/// ISO 3166 code of Iran
pub const IRAN: &str = "IR";

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("country '{0}' is not supported by the holiday provider")]
    UnsupportedCountry(String),
    #[error("year {0} is not supported by the holiday provider")]
    UnsupportedYear(i32),
    #[error("Hijri offset of {0} days is out of the accepted range")]
    InvalidHijriOffset(i64),
    #[error("failed to read holiday data: {0}")]
    ReadFailed(#[from] std::io::Error),
    #[error("failed to parse holiday data: {0}")]
    ParseFailed(#[from] serde_json::Error),
    #[error("date conversion failed: {0}")]
    DateError(#[from] DateError),
}

/// General interface for official holiday data
pub trait HolidayProvider {
    /// Official holidays of `country` in the Gregorian `year`, mapped to their names
    fn lookup(&self, year: i32, country: &str)
        -> Result<BTreeMap<NaiveDate, String>, ProviderError>;
}

impl<P: HolidayProvider + ?Sized> HolidayProvider for Box<P> {
    fn lookup(
        &self,
        year: i32,
        country: &str,
    ) -> Result<BTreeMap<NaiveDate, String>, ProviderError> {
        (**self).lookup(year, country)
    }
}

pub mod builtin;
pub mod json_file;
pub mod memory;

pub use builtin::BuiltinIranProvider;
pub use json_file::JsonFileProvider;
pub use memory::MemoryProvider;

fn check_country(supported: &str, country: &str) -> Result<(), ProviderError> {
    if supported.eq_ignore_ascii_case(country) {
        Ok(())
    } else {
        Err(ProviderError::UnsupportedCountry(country.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boxed_provider_delegates() {
        let mut provider = MemoryProvider::new(IRAN);
        provider.insert(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(), "test");
        let boxed: Box<dyn HolidayProvider> = Box::new(provider);
        assert_eq!(boxed.lookup(2025, IRAN).unwrap().len(), 1);
        assert!(matches!(
            boxed.lookup(2025, "DE"),
            Err(ProviderError::UnsupportedCountry(_))
        ));
    }

    #[test]
    fn country_codes_ignore_case() {
        assert!(check_country(IRAN, "ir").is_ok());
        assert!(check_country(IRAN, "IQ").is_err());
    }
}
