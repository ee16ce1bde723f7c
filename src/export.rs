//! Export of off-days to CSV and JSON files.
//! CSV files start with a UTF-8 byte order mark so spreadsheet tools detect the
//! encoding of the Persian text; JSON files keep non-ASCII characters unescaped.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use thiserror::Error;

use crate::labels::CalendarLabels;
use crate::off_day::OffDay;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("failed to access file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("failed to write CSV: {0}")]
    CsvError(#[from] csv::Error),
    #[error("failed to convert JSON: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("inconsistent off-day entry for {0}")]
    InconsistentEntry(NaiveDate),
}

#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    #[serde(rename = "Date")]
    date: NaiveDate,
    #[serde(rename = "Day")]
    day: u32,
    #[serde(rename = "Month")]
    month: u32,
    #[serde(rename = "Label")]
    label: &'a str,
    #[serde(rename = "Persian_Month")]
    persian_month: &'a str,
    #[serde(rename = "Weekday_Persian")]
    weekday_persian: &'a str,
    #[serde(rename = "Weekday_English")]
    weekday_english: String,
}

/// Entry of the `holidays` array of the JSON export
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OffDayEntry {
    pub date: NaiveDate,
    pub day: u32,
    pub month: u32,
    pub label: String,
    pub persian_month: String,
    pub weekday_persian: String,
    pub weekday_english: String,
    pub is_official_holiday: bool,
}

impl OffDayEntry {
    pub fn new(off_day: &OffDay, labels: &CalendarLabels) -> OffDayEntry {
        OffDayEntry {
            date: off_day.date(),
            day: off_day.day(),
            month: off_day.month(),
            label: off_day.label().to_string(),
            persian_month: labels.persian_month(off_day.month()).to_string(),
            weekday_persian: labels.persian_weekday(off_day.weekday()).to_string(),
            weekday_english: CalendarLabels::english_weekday(off_day.date()),
            is_official_holiday: off_day.is_official_holiday(),
        }
    }

    /// Rebuild the off-day, rejecting entries whose day or month contradict the date
    pub fn to_off_day(&self) -> Result<OffDay, ExportError> {
        let off_day = if self.is_official_holiday {
            OffDay::official(self.date, self.label.clone())
        } else {
            OffDay::weekly_rest(self.date, self.label.clone())
        };
        if off_day.day() != self.day || off_day.month() != self.month {
            return Err(ExportError::InconsistentEntry(self.date));
        }
        Ok(off_day)
    }
}

/// Document written by the JSON export
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OffDayReport {
    pub year: i32,
    pub total_off_days: usize,
    pub holidays: Vec<OffDayEntry>,
}

impl OffDayReport {
    pub fn new(year: i32, off_days: &[OffDay], labels: &CalendarLabels) -> OffDayReport {
        OffDayReport {
            year,
            total_off_days: off_days.len(),
            holidays: off_days
                .iter()
                .map(|d| OffDayEntry::new(d, labels))
                .collect(),
        }
    }

    pub fn off_days(&self) -> Result<Vec<OffDay>, ExportError> {
        self.holidays.iter().map(OffDayEntry::to_off_day).collect()
    }
}

/// Write off-days as CSV, including byte order mark and header row
pub fn write_csv<W: Write>(
    mut writer: W,
    off_days: &[OffDay],
    labels: &CalendarLabels,
) -> Result<(), ExportError> {
    writer.write_all(UTF8_BOM)?;
    let mut csv_writer = csv::Writer::from_writer(writer);
    for off_day in off_days {
        csv_writer.serialize(CsvRow {
            date: off_day.date(),
            day: off_day.day(),
            month: off_day.month(),
            label: off_day.label(),
            persian_month: labels.persian_month(off_day.month()),
            weekday_persian: labels.persian_weekday(off_day.weekday()),
            weekday_english: CalendarLabels::english_weekday(off_day.date()),
        })?;
    }
    if off_days.is_empty() {
        csv_writer.write_record([
            "Date",
            "Day",
            "Month",
            "Label",
            "Persian_Month",
            "Weekday_Persian",
            "Weekday_English",
        ])?;
    }
    csv_writer.flush()?;
    Ok(())
}

pub fn save_csv(
    path: &Path,
    off_days: &[OffDay],
    labels: &CalendarLabels,
) -> Result<(), ExportError> {
    let file = File::create(path)?;
    write_csv(BufWriter::new(file), off_days, labels)
}

/// Write the report as pretty printed JSON
pub fn write_json<W: Write>(mut writer: W, report: &OffDayReport) -> Result<(), ExportError> {
    serde_json::to_writer_pretty(&mut writer, report)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

pub fn save_json(path: &Path, report: &OffDayReport) -> Result<(), ExportError> {
    let file = File::create(path)?;
    write_json(BufWriter::new(file), report)
}

/// Read a report written by the JSON export
pub fn read_json(path: &Path) -> Result<OffDayReport, ExportError> {
    let file = File::open(path)?;
    let report = serde_json::from_reader(BufReader::new(file))?;
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<OffDay> {
        vec![
            OffDay::official(
                NaiveDate::from_ymd_opt(2025, 3, 20).unwrap(),
                "🎌 روز ملی".to_string(),
            ),
            OffDay::weekly_rest(
                NaiveDate::from_ymd_opt(2025, 3, 21).unwrap(),
                "🕌 تعطیلی هفتگی (جمعه)".to_string(),
            ),
        ]
    }

    #[test]
    fn csv_layout() {
        let labels = CalendarLabels::default();
        let mut out = Vec::new();
        write_csv(&mut out, &sample(), &labels).unwrap();
        assert!(out.starts_with(UTF8_BOM));
        let text = String::from_utf8(out[UTF8_BOM.len()..].to_vec()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            "Date,Day,Month,Label,Persian_Month,Weekday_Persian,Weekday_English"
        );
        assert_eq!(lines[1], "2025-03-20,20,3,🎌 روز ملی,خرداد,پنج‌شنبه,Thursday");
        assert!(lines[2].starts_with("2025-03-21,21,3,"));
        assert!(lines[2].ends_with(",Friday"));
    }

    #[test]
    fn csv_header_without_rows() {
        let mut out = Vec::new();
        write_csv(&mut out, &[], &CalendarLabels::default()).unwrap();
        let text = String::from_utf8(out[UTF8_BOM.len()..].to_vec()).unwrap();
        assert_eq!(
            text.trim_end(),
            "Date,Day,Month,Label,Persian_Month,Weekday_Persian,Weekday_English"
        );
    }

    #[test]
    fn json_keeps_unicode() {
        let labels = CalendarLabels::default();
        let report = OffDayReport::new(2025, &sample(), &labels);
        let mut out = Vec::new();
        write_json(&mut out, &report).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("روز ملی"));
        assert!(!text.contains("\\u"));
        assert!(text.contains("\"total_off_days\": 2"));
        assert!(text.contains("\"is_official_holiday\": true"));
    }

    #[test]
    fn json_file_round_trip() {
        let labels = CalendarLabels::default();
        let off_days = sample();
        let report = OffDayReport::new(2025, &off_days, &labels);
        let path = std::env::temp_dir().join(format!(
            "iran_offdays_export_test_{}.json",
            std::process::id()
        ));
        save_json(&path, &report).unwrap();
        let read_back = read_json(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(read_back, report);
        assert_eq!(read_back.off_days().unwrap(), off_days);
    }

    #[test]
    fn inconsistent_entry() {
        let labels = CalendarLabels::default();
        let mut entry = OffDayEntry::new(&sample()[0], &labels);
        entry.day = 1;
        assert!(matches!(
            entry.to_off_day(),
            Err(ExportError::InconsistentEntry(_))
        ));
    }

    #[test]
    fn unwritable_path() {
        let result = save_csv(
            Path::new("/nonexistent/dir/out.csv"),
            &sample(),
            &CalendarLabels::default(),
        );
        assert!(matches!(result, Err(ExportError::IoError(_))));
    }
}
