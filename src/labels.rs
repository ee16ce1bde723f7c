//! Display names used in the calendar listing and the exports.
//! The tables are only used for presentation, they never decide which day is off.

use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

const PERSIAN_MONTHS: [&str; 12] = [
    "فروردین",
    "اردیبهشت",
    "خرداد",
    "تیر",
    "مرداد",
    "شهریور",
    "مهر",
    "آبان",
    "آذر",
    "دی",
    "بهمن",
    "اسفند",
];

/// Monday based, like `Weekday::num_days_from_monday`
const PERSIAN_WEEKDAYS: [&str; 7] = [
    "دوشنبه",
    "سه‌شنبه",
    "چهارشنبه",
    "پنج‌شنبه",
    "جمعه",
    "شنبه",
    "یکشنبه",
];

/// Labels and name tables, fixed for the lifetime of a calendar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarLabels {
    /// Month names indexed by the month number minus one
    pub persian_months: [String; 12],
    /// Weekday names starting with Monday
    pub persian_weekdays: [String; 7],
    /// Prefix of official holiday labels
    pub official_marker: String,
    pub thursday_label: String,
    pub friday_label: String,
    /// Used if a month number has no name
    pub unknown: String,
}

impl Default for CalendarLabels {
    fn default() -> Self {
        CalendarLabels {
            persian_months: PERSIAN_MONTHS.map(String::from),
            persian_weekdays: PERSIAN_WEEKDAYS.map(String::from),
            official_marker: "🎌".to_string(),
            thursday_label: "📅 تعطیلی هفتگی (پنج‌شنبه)".to_string(),
            friday_label: "🕌 تعطیلی هفتگی (جمعه)".to_string(),
            unknown: "نامعلوم".to_string(),
        }
    }
}

impl CalendarLabels {
    pub fn persian_month(&self, month: u32) -> &str {
        month
            .checked_sub(1)
            .and_then(|idx| self.persian_months.get(idx as usize))
            .map_or(self.unknown.as_str(), |name| name.as_str())
    }

    pub fn persian_weekday(&self, weekday: Weekday) -> &str {
        &self.persian_weekdays[weekday.num_days_from_monday() as usize]
    }

    /// Full English weekday name, e.g. "Thursday"
    pub fn english_weekday(date: NaiveDate) -> String {
        date.format("%A").to_string()
    }

    /// Label of an official holiday with the given name
    pub fn official_label(&self, name: &str) -> String {
        if self.official_marker.is_empty() {
            name.to_string()
        } else {
            format!("{} {}", self.official_marker, name)
        }
    }

    /// Label of a weekly rest day, `None` for working weekdays
    pub fn weekly_rest_label(&self, weekday: Weekday) -> Option<&str> {
        match weekday {
            Weekday::Thu => Some(self.thursday_label.as_str()),
            Weekday::Fri => Some(self.friday_label.as_str()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_tables() {
        let labels = CalendarLabels::default();
        assert_eq!(labels.persian_month(1), "فروردین");
        assert_eq!(labels.persian_month(12), "اسفند");
        assert_eq!(labels.persian_month(0), "نامعلوم");
        assert_eq!(labels.persian_month(13), "نامعلوم");
        assert_eq!(labels.persian_weekday(Weekday::Fri), "جمعه");
        assert_eq!(labels.persian_weekday(Weekday::Sat), "شنبه");
        let date = NaiveDate::from_ymd_opt(2025, 3, 20).unwrap();
        assert_eq!(CalendarLabels::english_weekday(date), "Thursday");
    }

    #[test]
    fn labels() {
        let mut labels = CalendarLabels::default();
        assert_eq!(labels.official_label("Nowruz"), "🎌 Nowruz");
        assert!(labels.weekly_rest_label(Weekday::Thu).unwrap().contains("پنج‌شنبه"));
        assert!(labels.weekly_rest_label(Weekday::Fri).unwrap().contains("جمعه"));
        assert_eq!(labels.weekly_rest_label(Weekday::Sat), None);
        labels.official_marker.clear();
        assert_eq!(labels.official_label("Nowruz"), "Nowruz");
    }

    #[test]
    fn partial_labels_from_json() {
        let labels: CalendarLabels =
            serde_json::from_str(r#"{ "official_marker": "*" }"#).unwrap();
        assert_eq!(labels.official_marker, "*");
        assert_eq!(labels.persian_month(2), "اردیبهشت");
    }
}
