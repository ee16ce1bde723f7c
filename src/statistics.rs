//! Aggregate numbers of an off-day collection.
//! Thursdays and Fridays are counted by the weekday of the date, so an official
//! holiday falling on the weekend counts as official holiday and as weekend day.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::{self, Write};

use crate::date_helper::days_in_year;
use crate::off_day::OffDay;
use chrono::Weekday;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    pub total_off_days: usize,
    pub official_holidays: usize,
    pub thursday_weekly_offs: usize,
    pub friday_weekly_offs: usize,
    pub weekend_days: usize,
    /// Official holidays which fall on a Thursday or Friday
    pub official_on_weekend: usize,
    pub working_days: usize,
    pub days_in_year: usize,
}

impl Statistics {
    pub fn from_off_days(year: i32, off_days: &[OffDay]) -> Statistics {
        let total_off_days = off_days.len();
        let thursday_weekly_offs = count(off_days, |d| d.weekday() == Weekday::Thu);
        let friday_weekly_offs = count(off_days, |d| d.weekday() == Weekday::Fri);
        let days_in_year = days_in_year(year) as usize;
        Statistics {
            total_off_days,
            official_holidays: count(off_days, |d| d.is_official_holiday()),
            thursday_weekly_offs,
            friday_weekly_offs,
            weekend_days: thursday_weekly_offs + friday_weekly_offs,
            official_on_weekend: count(off_days, |d| d.is_official_holiday() && d.is_on_weekend()),
            working_days: days_in_year.saturating_sub(total_off_days),
            days_in_year,
        }
    }

    /// The statistics as name/value pairs
    pub fn as_map(&self) -> BTreeMap<&'static str, usize> {
        let mut map = BTreeMap::new();
        map.insert("total_off_days", self.total_off_days);
        map.insert("official_holidays", self.official_holidays);
        map.insert("thursday_weekly_offs", self.thursday_weekly_offs);
        map.insert("friday_weekly_offs", self.friday_weekly_offs);
        map.insert("weekend_days", self.weekend_days);
        map.insert("official_on_weekend", self.official_on_weekend);
        map.insert("working_days", self.working_days);
        map.insert("days_in_year", self.days_in_year);
        map
    }

    /// Bilingual statistics report
    pub fn render<W: Write>(&self, year: i32, out: &mut W) -> io::Result<()> {
        let rule = "=".repeat(60);
        writeln!(out)?;
        writeln!(out, "{}", rule)?;
        writeln!(out, "📊 آمار تقویم سال {}", year)?;
        writeln!(out, "Calendar Statistics for {}", year)?;
        writeln!(out, "{}", rule)?;
        writeln!(out, "🗓️  کل روزهای تعطیل / Total off-days: {}", self.total_off_days)?;
        writeln!(out, "🎌 تعطیلات رسمی / Official holidays: {}", self.official_holidays)?;
        writeln!(out, "📅 پنج‌شنبه‌ها / Thursdays: {}", self.thursday_weekly_offs)?;
        writeln!(out, "🕌 جمعه‌ها / Fridays: {}", self.friday_weekly_offs)?;
        writeln!(out, "🏠 کل آخر هفته‌ها / Weekend days: {}", self.weekend_days)?;
        writeln!(
            out,
            "🔁 تعطیلات رسمی در آخر هفته / Official holidays on weekends: {}",
            self.official_on_weekend
        )?;
        writeln!(out, "💼 روزهای کاری / Working days: {}", self.working_days)?;
        writeln!(out, "{}", rule)?;
        writeln!(out)
    }
}

fn count<F: Fn(&OffDay) -> bool>(off_days: &[OffDay], pred: F) -> usize {
    off_days.iter().filter(|d| pred(d)).count()
}
