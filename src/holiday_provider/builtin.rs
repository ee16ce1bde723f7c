//! Built-in rules for the official holidays of the Islamic Republic of Iran.
//! Religious holidays follow the arithmetical Lunar Hijri calendar; the
//! officially announced dates depend on moon sighting and may differ by a day,
//! which can be corrected with a Hijri offset or by using a holiday data file.

use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::ops::RangeInclusive;

use super::{check_country, HolidayProvider, ProviderError, IRAN};
use crate::calendar::{Calendar, Holiday};

/// Gregorian years covered by the built-in rules
pub const SUPPORTED_YEARS: RangeInclusive<i32> = 1980..=2100;

/// Accepted correction of the Lunar Hijri holidays, in days
pub const HIJRI_OFFSET_DAYS: RangeInclusive<i64> = -3..=3;

const SOLAR_HOLIDAYS: [(u32, u32, &str); 10] = [
    (1, 1, "جشن نوروز / Nowruz"),
    (1, 2, "عید نوروز / Nowruz Holiday"),
    (1, 3, "عید نوروز / Nowruz Holiday"),
    (1, 4, "عید نوروز / Nowruz Holiday"),
    (1, 12, "روز جمهوری اسلامی / Islamic Republic Day"),
    (1, 13, "روز طبیعت / Nature's Day"),
    (3, 14, "رحلت حضرت امام خمینی / Death of Imam Khomeini"),
    (3, 15, "قیام ۱۵ خرداد / 15 Khordad Uprising"),
    (11, 22, "پیروزی انقلاب اسلامی / Islamic Revolution Day"),
    (12, 29, "روز ملی شدن صنعت نفت / Iranian Oil Industry Nationalization Day"),
];

const LUNAR_HOLIDAYS: [(u32, u32, &str); 16] = [
    (1, 9, "تاسوعای حسینی / Tasua"),
    (1, 10, "عاشورای حسینی / Ashura"),
    (2, 20, "اربعین حسینی / Arbaeen"),
    (
        2,
        28,
        "رحلت رسول اکرم و شهادت امام حسن مجتبی / Death of Prophet Muhammad and Martyrdom of Hasan ibn Ali",
    ),
    (3, 8, "شهادت امام حسن عسکری / Martyrdom of Hasan al-Askari"),
    (
        3,
        17,
        "میلاد رسول اکرم و امام جعفر صادق / Birthday of Muhammad and Imam Ja'far al-Sadiq",
    ),
    (6, 3, "شهادت حضرت فاطمه زهرا / Martyrdom of Fatima"),
    (7, 13, "ولادت امام علی / Birthday of Imam Ali"),
    (7, 27, "مبعث رسول اکرم / Isra' and Mi'raj"),
    (8, 15, "ولادت حضرت قائم / Birthday of Mahdi"),
    (9, 21, "شهادت حضرت علی / Martyrdom of Imam Ali"),
    (10, 1, "عید سعید فطر / Eid al-Fitr"),
    (10, 2, "تعطیل به مناسبت عید سعید فطر / Eid al-Fitr Holiday"),
    (10, 25, "شهادت امام جعفر صادق / Martyrdom of Imam Ja'far al-Sadiq"),
    (12, 10, "عید سعید قربان / Eid al-Adha"),
    (12, 18, "عید سعید غدیر خم / Eid al-Ghadir"),
];

const LAST_DAY_OF_SAFAR: &str = "شهادت امام رضا / Martyrdom of Ali al-Rida";

/// The complete set of Iranian holiday rules
pub fn iranian_holiday_rules() -> Vec<Holiday> {
    let solar = SOLAR_HOLIDAYS
        .iter()
        .map(|(month, day, name)| Holiday::SolarHijriDay {
            month: *month,
            day: *day,
            name: name.to_string(),
        });
    let lunar = LUNAR_HOLIDAYS
        .iter()
        .map(|(month, day, name)| Holiday::LunarHijriDay {
            month: *month,
            day: *day,
            name: name.to_string(),
        });
    solar
        .chain(lunar)
        .chain(std::iter::once(Holiday::LunarHijriMonthEnd {
            month: 2,
            name: LAST_DAY_OF_SAFAR.to_string(),
        }))
        .collect()
}

/// Holiday provider evaluating the built-in Iranian holiday rules
#[derive(Debug, Clone)]
pub struct BuiltinIranProvider {
    rules: Vec<Holiday>,
    hijri_offset: i64,
}

impl BuiltinIranProvider {
    pub fn new() -> BuiltinIranProvider {
        BuiltinIranProvider {
            rules: iranian_holiday_rules(),
            hijri_offset: 0,
        }
    }

    /// Shift all Lunar Hijri holidays by `hijri_offset` days
    pub fn with_hijri_offset(hijri_offset: i64) -> Result<BuiltinIranProvider, ProviderError> {
        if !HIJRI_OFFSET_DAYS.contains(&hijri_offset) {
            return Err(ProviderError::InvalidHijriOffset(hijri_offset));
        }
        Ok(BuiltinIranProvider {
            hijri_offset,
            ..Self::new()
        })
    }

    /// Add a one-off holiday, e.g. a closure announced by the government
    pub fn add_singular_day(&mut self, date: NaiveDate, name: &str) {
        self.rules.push(Holiday::SingularDay {
            date,
            name: name.to_string(),
        });
    }
}

impl Default for BuiltinIranProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl HolidayProvider for BuiltinIranProvider {
    fn lookup(
        &self,
        year: i32,
        country: &str,
    ) -> Result<BTreeMap<NaiveDate, String>, ProviderError> {
        check_country(IRAN, country)?;
        if !SUPPORTED_YEARS.contains(&year) {
            return Err(ProviderError::UnsupportedYear(year));
        }
        let cal = Calendar::calc_calendar(&self.rules, year, year, self.hijri_offset)?;
        Ok(cal.holidays_of_year(year))
    }
}
