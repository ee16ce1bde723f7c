//! Rule based calendar of official holidays.
//! Iranian holidays are defined either on the Solar Hijri calendar (e.g. Nowruz),
//! on the Lunar Hijri calendar (religious holidays) or, for closures announced
//! at short notice, on a single Gregorian date. The rules are evaluated once
//! for a range of Gregorian years.

use chrono::{Datelike, NaiveDate};
use std::collections::BTreeMap;

use crate::date_helper::{
    hijri_month_end, hijri_to_gregorian, hijri_years_overlapping, jalali_to_gregorian,
    shift_days, DateError,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Holiday {
    /// A day of the Solar Hijri year, e.g. 1 Farvardin
    SolarHijriDay { month: u32, day: u32, name: String },
    /// A day of the Lunar Hijri year, e.g. 10 Muharram
    LunarHijriDay { month: u32, day: u32, name: String },
    /// The last day of a Lunar Hijri month, which is either the 29th or the 30th
    LunarHijriMonthEnd { month: u32, name: String },
    /// A single holiday valid only once in time
    SingularDay { date: NaiveDate, name: String },
}

// Calendar of precomputed holidays, each date may carry several holiday names
#[derive(Debug, Clone, Default)]
pub struct Calendar {
    holidays: BTreeMap<NaiveDate, Vec<String>>,
}

impl Calendar {
    /// Pre-compute holidays for a given range of Gregorian years based on a set of holiday rules.
    /// Lunar Hijri dates are shifted by `hijri_offset` days.
    pub fn calc_calendar(
        holiday_rules: &[Holiday],
        start: i32,
        end: i32,
        hijri_offset: i64,
    ) -> Result<Calendar, DateError> {
        let mut cal = Calendar::default();
        let in_range = |date: &NaiveDate| date.year() >= start && date.year() <= end;

        for rule in holiday_rules {
            match rule {
                Holiday::SolarHijriDay { month, day, name } => {
                    // a Solar Hijri year starts in March, so the Gregorian year `y`
                    // touches the Solar Hijri years `y - 622` and `y - 621`
                    for jy in start - 622..=end - 621 {
                        let date = match jalali_to_gregorian(jy, *month, *day) {
                            Ok(date) => date,
                            // 30 Esfand exists in leap years only
                            Err(DateError::InvalidJalaliDate(..)) => continue,
                            Err(err) => return Err(err),
                        };
                        if in_range(&date) {
                            cal.insert(date, name);
                        }
                    }
                }
                Holiday::LunarHijriDay { month, day, name } => {
                    for hy in hijri_years_overlapping(start, end) {
                        let date =
                            shift_days(hijri_to_gregorian(hy, *month, *day)?, hijri_offset)?;
                        if in_range(&date) {
                            cal.insert(date, name);
                        }
                    }
                }
                Holiday::LunarHijriMonthEnd { month, name } => {
                    for hy in hijri_years_overlapping(start, end) {
                        let date = shift_days(hijri_month_end(hy, *month)?, hijri_offset)?;
                        if in_range(&date) {
                            cal.insert(date, name);
                        }
                    }
                }
                Holiday::SingularDay { date, name } => {
                    if in_range(date) {
                        cal.insert(*date, name);
                    }
                }
            }
        }
        Ok(cal)
    }

    fn insert(&mut self, date: NaiveDate, name: &str) {
        let names = self.holidays.entry(date).or_default();
        if !names.iter().any(|n| n == name) {
            names.push(name.to_string());
        }
    }

    /// Holidays of one year, several holidays on the same date are joined by `"; "`
    pub fn holidays_of_year(&self, year: i32) -> BTreeMap<NaiveDate, String> {
        self.holidays
            .iter()
            .filter(|(date, _)| date.year() == year)
            .map(|(date, names)| (*date, names.join("; ")))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn singular_days_calendar() {
        let holidays = vec![
            Holiday::SingularDay {
                date: date(2019, 11, 20),
                name: "first".to_string(),
            },
            Holiday::SingularDay {
                date: date(2020, 11, 20),
                name: "out of range".to_string(),
            },
        ];
        let cal = Calendar::calc_calendar(&holidays, 2018, 2019, 0).unwrap();
        let year = cal.holidays_of_year(2019);
        assert_eq!(year.len(), 1);
        assert_eq!(year[&date(2019, 11, 20)], "first");
        assert!(cal.holidays_of_year(2020).is_empty());
    }

    #[test]
    fn solar_and_lunar_rules() {
        let holidays = vec![
            Holiday::SolarHijriDay {
                month: 1,
                day: 1,
                name: "Nowruz".to_string(),
            },
            Holiday::SolarHijriDay {
                month: 11,
                day: 22,
                name: "Revolution Day".to_string(),
            },
            Holiday::LunarHijriDay {
                month: 10,
                day: 1,
                name: "Eid al-Fitr".to_string(),
            },
        ];
        let cal = Calendar::calc_calendar(&holidays, 2025, 2025, 0).unwrap();
        let year = cal.holidays_of_year(2025);
        assert_eq!(year.len(), 3);
        assert_eq!(year[&date(2025, 3, 21)], "Nowruz");
        assert_eq!(year[&date(2025, 2, 10)], "Revolution Day");
        assert_eq!(year[&date(2025, 3, 31)], "Eid al-Fitr");

        let shifted = Calendar::calc_calendar(&holidays, 2025, 2025, 1)
            .unwrap()
            .holidays_of_year(2025);
        assert!(shifted.contains_key(&date(2025, 4, 1)));
        assert!(!shifted.contains_key(&date(2025, 3, 31)));
        assert!(shifted.contains_key(&date(2025, 3, 21)));
    }

    #[test]
    fn huge_hijri_offset_is_an_error() {
        let holidays = vec![Holiday::LunarHijriMonthEnd {
            month: 2,
            name: "end of Safar".to_string(),
        }];
        assert!(matches!(
            Calendar::calc_calendar(&holidays, 2025, 2025, i64::MAX),
            Err(DateError::DateOutOfRange(_, i64::MAX))
        ));
        assert!(Calendar::calc_calendar(&holidays, 2025, 2025, 1_000_000_000).is_err());
    }

    #[test]
    fn holidays_on_same_date_are_joined() {
        let holidays = vec![
            Holiday::SingularDay {
                date: date(2025, 1, 1),
                name: "a".to_string(),
            },
            Holiday::SingularDay {
                date: date(2025, 1, 1),
                name: "b".to_string(),
            },
            Holiday::SingularDay {
                date: date(2025, 1, 1),
                name: "a".to_string(),
            },
        ];
        let cal = Calendar::calc_calendar(&holidays, 2025, 2025, 0).unwrap();
        assert_eq!(cal.holidays_of_year(2025)[&date(2025, 1, 1)], "a; b");
    }
}
