//! Date conversions needed to place Iranian holidays on the Gregorian calendar.
//! Solar Hijri (Jalali) dates follow the Persian calendar of `icu_calendar`,
//! Lunar Hijri dates its arithmetical (civil) Islamic calendar.

use chrono::{Datelike, Duration, NaiveDate};
use icu_calendar::islamic::IslamicCivil;
use icu_calendar::persian::Persian;
use icu_calendar::{AsCalendar, Date, Iso};
use std::ops::RangeInclusive;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    #[error("Solar Hijri year {0} is out of the supported range")]
    JalaliYearOutOfRange(i32),
    #[error("invalid Solar Hijri date {0}/{1}/{2}")]
    InvalidJalaliDate(i32, u32, u32),
    #[error("invalid Lunar Hijri date {0}/{1}/{2}")]
    InvalidHijriDate(i32, u32, u32),
    #[error("Gregorian year {0} can not be represented")]
    InvalidYear(i32),
    #[error("shifting {0} by {1} days leaves the supported date range")]
    DateOutOfRange(NaiveDate, i64),
}

/// Solar Hijri years accepted for conversion
const JALALI_YEARS: RangeInclusive<i32> = 1..=9999;
/// Lunar Hijri years accepted for conversion
const HIJRI_YEARS: RangeInclusive<i32> = 1..=9999;

fn to_naive_date<A: AsCalendar>(date: &Date<A>) -> Option<NaiveDate> {
    let iso = date.to_calendar(Iso);
    NaiveDate::from_ymd_opt(iso.year().number, iso.month().ordinal, iso.day_of_month().0)
}

fn persian_date(jy: i32, jm: u32, jd: u32) -> Result<Date<Persian>, DateError> {
    if !JALALI_YEARS.contains(&jy) {
        return Err(DateError::JalaliYearOutOfRange(jy));
    }
    let month = u8::try_from(jm).map_err(|_| DateError::InvalidJalaliDate(jy, jm, jd))?;
    let day = u8::try_from(jd).map_err(|_| DateError::InvalidJalaliDate(jy, jm, jd))?;
    Date::try_new_persian_date(jy, month, day).map_err(|_| DateError::InvalidJalaliDate(jy, jm, jd))
}

fn islamic_date(hy: i32, hm: u32, hd: u32) -> Result<Date<IslamicCivil>, DateError> {
    if !HIJRI_YEARS.contains(&hy) {
        return Err(DateError::InvalidHijriDate(hy, hm, hd));
    }
    let month = u8::try_from(hm).map_err(|_| DateError::InvalidHijriDate(hy, hm, hd))?;
    let day = u8::try_from(hd).map_err(|_| DateError::InvalidHijriDate(hy, hm, hd))?;
    Date::try_new_islamic_civil_date_with_calendar(hy, month, day, IslamicCivil::new())
        .map_err(|_| DateError::InvalidHijriDate(hy, hm, hd))
}

/// True if the Solar Hijri year has 366 days (30 days in Esfand)
pub fn is_jalali_leap_year(jy: i32) -> Result<bool, DateError> {
    Ok(persian_date(jy, 1, 1)?.days_in_year() == 366)
}

/// Gregorian date of Nowruz, the first day of Farvardin
pub fn nowruz(jy: i32) -> Result<NaiveDate, DateError> {
    jalali_to_gregorian(jy, 1, 1)
}

/// Convert a Solar Hijri date to the Gregorian calendar
pub fn jalali_to_gregorian(jy: i32, jm: u32, jd: u32) -> Result<NaiveDate, DateError> {
    let date = persian_date(jy, jm, jd)?;
    to_naive_date(&date).ok_or(DateError::JalaliYearOutOfRange(jy))
}

/// Convert a date of the arithmetical Lunar Hijri calendar to the Gregorian calendar
pub fn hijri_to_gregorian(hy: i32, hm: u32, hd: u32) -> Result<NaiveDate, DateError> {
    let date = islamic_date(hy, hm, hd)?;
    to_naive_date(&date).ok_or(DateError::InvalidHijriDate(hy, hm, hd))
}

/// Last day of a month of the arithmetical Lunar Hijri calendar
pub fn hijri_month_end(hy: i32, hm: u32) -> Result<NaiveDate, DateError> {
    let last_day = islamic_date(hy, hm, 1)?.days_in_month();
    hijri_to_gregorian(hy, hm, last_day as u32)
}

/// Shift a date by a number of days
pub fn shift_days(date: NaiveDate, days: i64) -> Result<NaiveDate, DateError> {
    Duration::try_days(days)
        .and_then(|delta| date.checked_add_signed(delta))
        .ok_or(DateError::DateOutOfRange(date, days))
}

/// Range of Lunar Hijri years which may have days in the given Gregorian years
pub fn hijri_years_overlapping(start: i32, end: i32) -> RangeInclusive<i32> {
    let approx = |year: i32| (year - 622) * 33 / 32;
    (approx(start) - 1).max(1)..=(approx(end) + 2)
}

/// Number of days of a Gregorian year
pub fn days_in_year(year: i32) -> u32 {
    match NaiveDate::from_ymd_opt(year, 12, 31) {
        Some(date) => date.ordinal(),
        None => 0,
    }
}

/// Iterate over all days of a Gregorian year in ascending order
pub fn days_of_year(year: i32) -> Result<impl Iterator<Item = NaiveDate>, DateError> {
    let first = NaiveDate::from_ymd_opt(year, 1, 1).ok_or(DateError::InvalidYear(year))?;
    NaiveDate::from_ymd_opt(year, 12, 31).ok_or(DateError::InvalidYear(year))?;
    Ok(first.iter_days().take_while(move |d| d.year() == year))
}
