//! # iran_offdays
//!
//! Computes the non-working days of a Gregorian year in Iran: the official
//! holidays plus the weekly rest days Thursday and Friday.
//!
//! Official holidays come from a [`HolidayProvider`](holiday_provider::HolidayProvider).
//! The crate ships built-in rules for the Solar Hijri and Lunar Hijri holidays,
//! a provider reading holiday data from a JSON file and an in-memory provider.
//! The off-day collection can be printed as bilingual (Persian/English) listing,
//! summarized in statistics and exported as CSV or JSON.
//!
//! ```no_run
//! use iran_offdays::holiday_provider::BuiltinIranProvider;
//! use iran_offdays::IranianHolidayCalendar;
//!
//! let mut calendar = IranianHolidayCalendar::new(2025, Box::new(BuiltinIranProvider::new()));
//! calendar.print_calendar(true).unwrap();
//! calendar.print_statistics().unwrap();
//! calendar.save_to_csv(None).unwrap();
//! calendar.save_to_json(None).unwrap();
//! ```

pub mod calendar;
pub mod config;
pub mod date_helper;
pub mod export;
pub mod holiday_provider;
pub mod labels;
pub mod off_day;
pub mod off_day_calendar;
pub mod statistics;

pub use off_day::OffDay;
pub use off_day_calendar::{CalendarError, IranianHolidayCalendar};
pub use statistics::Statistics;
