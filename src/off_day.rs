use chrono::{Datelike, NaiveDate, Weekday};

/// A non-working day: an official holiday or a weekly rest day.
/// Day and month are always derived from the date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OffDay {
    date: NaiveDate,
    label: String,
    is_official_holiday: bool,
}

impl OffDay {
    pub fn official(date: NaiveDate, label: String) -> OffDay {
        OffDay {
            date,
            label,
            is_official_holiday: true,
        }
    }

    pub fn weekly_rest(date: NaiveDate, label: String) -> OffDay {
        OffDay {
            date,
            label,
            is_official_holiday: false,
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn day(&self) -> u32 {
        self.date.day()
    }

    pub fn month(&self) -> u32 {
        self.date.month()
    }

    pub fn weekday(&self) -> Weekday {
        self.date.weekday()
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_official_holiday(&self) -> bool {
        self.is_official_holiday
    }

    /// Thursday or Friday, independent of whether the day is also an official holiday
    pub fn is_on_weekend(&self) -> bool {
        is_weekly_rest_day(self.weekday())
    }
}

/// The Iranian weekend
pub fn is_weekly_rest_day(weekday: Weekday) -> bool {
    matches!(weekday, Weekday::Thu | Weekday::Fri)
}
