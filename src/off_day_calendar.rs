//! Calendar of all off-days of one Gregorian year.
//!
//! Off-days are the official holidays delivered by a [`HolidayProvider`] plus every
//! Thursday and Friday. A date which is both an official holiday and a weekend day
//! yields a single off-day carrying the official holiday label; the weekend counts
//! in [`Statistics`] are derived from the weekday and therefore still include it.
//!
//! The collection is generated on first use and cached until `generate_off_days`
//! is called again.

use chrono::{Datelike, NaiveDate};
use log::{error, info, warn};
use std::collections::BTreeMap;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::date_helper::{days_of_year, DateError};
use crate::export::{self, ExportError, OffDayReport};
use crate::holiday_provider::{HolidayProvider, ProviderError, IRAN};
use crate::labels::CalendarLabels;
use crate::off_day::OffDay;
use crate::statistics::Statistics;

#[derive(Error, Debug)]
pub enum CalendarError {
    #[error("invalid year: {0}")]
    InvalidYear(#[from] DateError),
    #[error("holiday provider failed: {0}")]
    ProviderError(#[from] ProviderError),
    #[error("export failed: {0}")]
    ExportError(#[from] ExportError),
    #[error("failed to write output: {0}")]
    OutputError(#[from] io::Error),
}

pub struct IranianHolidayCalendar {
    year: i32,
    labels: CalendarLabels,
    provider: Box<dyn HolidayProvider>,
    off_days: Option<Vec<OffDay>>,
}

impl IranianHolidayCalendar {
    pub fn new(year: i32, provider: Box<dyn HolidayProvider>) -> IranianHolidayCalendar {
        Self::with_labels(year, provider, CalendarLabels::default())
    }

    pub fn with_labels(
        year: i32,
        provider: Box<dyn HolidayProvider>,
        labels: CalendarLabels,
    ) -> IranianHolidayCalendar {
        info!("Initialized Iranian holiday calendar for year {}", year);
        IranianHolidayCalendar {
            year,
            labels,
            provider,
            off_days: None,
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn labels(&self) -> &CalendarLabels {
        &self.labels
    }

    /// Off-days generated so far, `None` before the first generation
    pub fn cached_off_days(&self) -> Option<&[OffDay]> {
        self.off_days.as_deref()
    }

    /// (Re-)compute all off-days of the year, sorted by date.
    /// On failure the previously cached collection is discarded.
    pub fn generate_off_days(&mut self) -> Result<&[OffDay], CalendarError> {
        self.off_days = None;
        let off_days = self.collect_off_days().map_err(|err| {
            error!("Generating off-days for {} failed: {}", self.year, err);
            err
        })?;
        info!(
            "Generated {} off-days for year {}",
            off_days.len(),
            self.year
        );
        let off_days = self.off_days.insert(off_days);
        Ok(off_days.as_slice())
    }

    fn collect_off_days(&self) -> Result<Vec<OffDay>, CalendarError> {
        let mut off_days: BTreeMap<NaiveDate, OffDay> = BTreeMap::new();

        for date in days_of_year(self.year)? {
            if let Some(label) = self.labels.weekly_rest_label(date.weekday()) {
                off_days.insert(date, OffDay::weekly_rest(date, label.to_string()));
            }
        }

        // official holidays take precedence over the weekly rest label
        let holidays = self.provider.lookup(self.year, IRAN)?;
        for (date, name) in holidays {
            if date.year() != self.year {
                warn!("Ignoring holiday '{}' on {} outside of {}", name, date, self.year);
                continue;
            }
            off_days.insert(date, OffDay::official(date, self.labels.official_label(&name)));
        }

        Ok(off_days.into_values().collect())
    }

    /// Cached off-days, generated on first access
    pub fn off_days(&mut self) -> Result<&[OffDay], CalendarError> {
        if self.off_days.is_none() {
            self.generate_off_days()?;
        }
        Ok(self.off_days.as_deref().unwrap_or_default())
    }

    /// Write the off-days grouped by month. With `show_persian_names` the Persian
    /// month and weekday names are included.
    pub fn render_calendar<W: Write>(
        &mut self,
        out: &mut W,
        show_persian_names: bool,
    ) -> Result<(), CalendarError> {
        let year = self.year;
        self.off_days()?;
        let labels = &self.labels;
        let off_days = self.off_days.as_deref().unwrap_or_default();

        let rule = "=".repeat(80);
        writeln!(out)?;
        writeln!(out, "{}", rule)?;
        writeln!(out, "🇮🇷 تقویم تعطیلات ایران - سال {}", year)?;
        writeln!(out, "Iranian Holidays Calendar - Year {}", year)?;
        writeln!(out, "{}", rule)?;

        let mut current_month = 0;
        for off_day in off_days {
            let month = off_day.month();
            if month != current_month {
                current_month = month;
                let month_name = if show_persian_names {
                    labels.persian_month(month).to_string()
                } else {
                    format!("Month {}", month)
                };
                writeln!(out)?;
                writeln!(out, "📅 {} ({:02}):", month_name, month)?;
                writeln!(out, "{}", "-".repeat(50))?;
            }
            let weekday_english = CalendarLabels::english_weekday(off_day.date());
            let weekday = if show_persian_names {
                format!(
                    "{} ({})",
                    labels.persian_weekday(off_day.weekday()),
                    weekday_english
                )
            } else {
                weekday_english
            };
            writeln!(
                out,
                "{} | {:02}/{:02} | {} | {}",
                off_day.date(),
                off_day.day(),
                month,
                weekday,
                off_day.label()
            )?;
        }
        Ok(())
    }

    pub fn print_calendar(&mut self, show_persian_names: bool) -> Result<(), CalendarError> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.render_calendar(&mut out, show_persian_names)
    }

    pub fn statistics(&mut self) -> Result<Statistics, CalendarError> {
        let year = self.year;
        Ok(Statistics::from_off_days(year, self.off_days()?))
    }

    pub fn render_statistics<W: Write>(&mut self, out: &mut W) -> Result<(), CalendarError> {
        let stats = self.statistics()?;
        stats.render(self.year, out)?;
        Ok(())
    }

    pub fn print_statistics(&mut self) -> Result<(), CalendarError> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.render_statistics(&mut out)
    }

    pub fn default_csv_path(&self) -> PathBuf {
        PathBuf::from(format!("iran_holidays_{}.csv", self.year))
    }

    pub fn default_json_path(&self) -> PathBuf {
        PathBuf::from(format!("iran_holidays_{}.json", self.year))
    }

    /// Save the off-days as CSV file, returns the path written
    pub fn save_to_csv(&mut self, path: Option<&Path>) -> Result<PathBuf, CalendarError> {
        let path = path.map_or_else(|| self.default_csv_path(), Path::to_path_buf);
        self.off_days()?;
        let off_days = self.off_days.as_deref().unwrap_or_default();
        export::save_csv(&path, off_days, &self.labels).map_err(|err| {
            error!("Error saving CSV file {}: {}", path.display(), err);
            err
        })?;
        info!("Saved calendar to CSV: {}", path.display());
        Ok(path)
    }

    /// Save the off-days as JSON file, returns the path written
    pub fn save_to_json(&mut self, path: Option<&Path>) -> Result<PathBuf, CalendarError> {
        let path = path.map_or_else(|| self.default_json_path(), Path::to_path_buf);
        let report = self.report()?;
        export::save_json(&path, &report).map_err(|err| {
            error!("Error saving JSON file {}: {}", path.display(), err);
            err
        })?;
        info!("Saved calendar to JSON: {}", path.display());
        Ok(path)
    }

    /// The document written by the JSON export
    pub fn report(&mut self) -> Result<OffDayReport, CalendarError> {
        let year = self.year;
        self.off_days()?;
        let off_days = self.off_days.as_deref().unwrap_or_default();
        Ok(OffDayReport::new(year, off_days, &self.labels))
    }
}
