//! Approximate alternate-calendar representations of a Gregorian date.
//!
//! None of these are authoritative. Hijri and Bengali dates come from a fixed
//! epoch plus an average year length, then a fixed month table; Hebrew,
//! Chinese and Hindu dates relabel the Gregorian year and month. Results are
//! estimates for display and can be off by days (Hijri, Bengali) or months
//! (the others) from the real calendars.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::locale::{Locale, bengali_digits};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarSystem {
    Hijri,
    Bengali,
    Hebrew,
    Chinese,
    Hindu,
}

impl CalendarSystem {
    /// Era label appended after the year, if the calendar uses one.
    pub fn era(self, locale: Locale) -> Option<&'static str> {
        match (self, locale) {
            (CalendarSystem::Hijri, Locale::En) => Some("Hijri"),
            (CalendarSystem::Hijri, Locale::Bn) => Some("হিজরি"),
            (CalendarSystem::Bengali, Locale::En) => Some("Bengali Era"),
            (CalendarSystem::Bengali, Locale::Bn) => Some("বাংলা সন"),
            (CalendarSystem::Hindu, _) => Some("(Vikram Samvat)"),
            (CalendarSystem::Hebrew | CalendarSystem::Chinese, _) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarDate {
    pub system: CalendarSystem,
    pub year: i64,
    pub month: &'static str,
    pub day: u32,
}

impl CalendarDate {
    /// `day month year [era]` with digits in the requested locale.
    pub fn localized(&self, locale: Locale) -> String {
        let mut out = format!("{} {} {}", self.day, self.month, self.year);
        if let Some(era) = self.system.era(locale) {
            out.push(' ');
            out.push_str(era);
        }
        match locale {
            Locale::En => out,
            Locale::Bn => bengali_digits(&out),
        }
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.localized(Locale::En))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChineseDate {
    #[serde(flatten)]
    pub date: CalendarDate,
    pub animal: &'static str,
}

impl fmt::Display for ChineseDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({} Year)", self.date.day, self.date.month, self.animal)
    }
}

// Hijri: epoch 622-07-16, ~354.37-day years, months alternate 30/29 days.
const HIJRI_YEAR_DAYS: f64 = 354.37;
const HIJRI_MONTH_DAYS: [i64; 12] = [30, 29, 30, 29, 30, 29, 30, 29, 30, 29, 30, 29];

const HIJRI_MONTHS_EN: [&str; 12] = [
    "Muharram",
    "Safar",
    "Rabi' al-awwal",
    "Rabi' al-thani",
    "Jumada al-awwal",
    "Jumada al-thani",
    "Rajab",
    "Sha'ban",
    "Ramadan",
    "Shawwal",
    "Dhu al-Qi'dah",
    "Dhu al-Hijjah",
];

const HIJRI_MONTHS_BN: [&str; 12] = [
    "মুহাররম",
    "সফর",
    "রবিউল আউয়াল",
    "রবিউস সানি",
    "জুমাদাল উলা",
    "জুমাদাস সানি",
    "রজব",
    "শাবান",
    "রমজান",
    "শাওয়াল",
    "জিলকদ",
    "জিলহজ",
];

// Bengali: epoch 594-04-14 (1 Boishakh), 365.25-day years, fixed month start offsets.
const BENGALI_YEAR_DAYS: f64 = 365.25;
const BENGALI_MONTH_STARTS: [i64; 12] = [0, 31, 61, 92, 123, 154, 184, 215, 245, 276, 307, 335];

const BENGALI_MONTHS_EN: [&str; 12] = [
    "Boishakh", "Joishtho", "Asharh", "Srabon", "Bhadro", "Ashwin", "Kartik", "Agrahayan", "Poush",
    "Magh", "Falgun", "Chaitra",
];

const BENGALI_MONTHS_BN: [&str; 12] = [
    "বৈশাখ",
    "জ্যৈষ্ঠ",
    "আষাঢ়",
    "শ্রাবণ",
    "ভাদ্র",
    "আশ্বিন",
    "কার্তিক",
    "অগ্রহায়ণ",
    "পৌষ",
    "মাঘ",
    "ফাল্গুন",
    "চৈত্র",
];

const HEBREW_YEAR_OFFSET: i64 = 3760;
const HEBREW_MONTHS: [&str; 12] = [
    "Tishrei", "Cheshvan", "Kislev", "Tevet", "Shevat", "Adar", "Nisan", "Iyar", "Sivan", "Tammuz",
    "Av", "Elul",
];

const CHINESE_ANIMALS: [&str; 12] = [
    "Rat", "Ox", "Tiger", "Rabbit", "Dragon", "Snake", "Horse", "Goat", "Monkey", "Rooster", "Dog",
    "Pig",
];

const HINDU_YEAR_OFFSET: i64 = 78;
const HINDU_MONTHS: [&str; 12] = [
    "Chaitra",
    "Vaishakha",
    "Jyeshtha",
    "Ashadha",
    "Shravana",
    "Bhadrapada",
    "Kartika",
    "Margashirsha",
    "Pausha",
    "Magha",
    "Phalguna",
    "Chaitra",
];

const HIJRI_EPOCH: NaiveDate = epoch(622, 7, 16);
const BENGALI_EPOCH: NaiveDate = epoch(594, 4, 14);

/// Builds an epoch at compile time; an invalid date fails the build.
const fn epoch(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => panic!("invalid calendar epoch"),
    }
}

fn days_since(epoch: NaiveDate, date: NaiveDate) -> i64 {
    (date - epoch).num_days()
}

/// Splits a day count into a 1-based year and the (truncated) day within it.
fn split_years(days: i64, year_len: f64) -> (i64, i64) {
    let days = days as f64;
    let year = (days / year_len).floor() as i64 + 1;
    let day_of_year = (days % year_len).floor() as i64;
    (year, day_of_year)
}

fn month_label(names: &[&'static str; 12], month: usize) -> &'static str {
    names.get(month.wrapping_sub(1)).copied().unwrap_or(names[0])
}

pub fn convert_to_hijri(date: NaiveDate, locale: Locale) -> CalendarDate {
    let (year, day_of_year) = split_years(days_since(HIJRI_EPOCH, date), HIJRI_YEAR_DAYS);

    let mut month = 1;
    let mut remaining = day_of_year;
    for (i, &len) in HIJRI_MONTH_DAYS.iter().enumerate() {
        if remaining <= len {
            month = i + 1;
            break;
        }
        remaining -= len;
    }

    let names = match locale {
        Locale::En => &HIJRI_MONTHS_EN,
        Locale::Bn => &HIJRI_MONTHS_BN,
    };

    CalendarDate {
        system: CalendarSystem::Hijri,
        year,
        month: month_label(names, month),
        day: (remaining + 1).clamp(1, 31) as u32,
    }
}

pub fn convert_to_bengali(date: NaiveDate, locale: Locale) -> CalendarDate {
    let (year, day_of_year) = split_years(days_since(BENGALI_EPOCH, date), BENGALI_YEAR_DAYS);

    let mut month = 1;
    let mut day = 1;
    for i in 0..12 {
        let starts_here = day_of_year >= BENGALI_MONTH_STARTS[i];
        let before_next = i == 11 || day_of_year < BENGALI_MONTH_STARTS[i + 1];
        if starts_here && before_next {
            month = i + 1;
            day = day_of_year - BENGALI_MONTH_STARTS[i] + 1;
            break;
        }
    }

    // Chaitra overflow in the long years spills into the next Boishakh.
    if month == 12 && day > 30 {
        month = 1;
        day -= 30;
    }

    let names = match locale {
        Locale::En => &BENGALI_MONTHS_EN,
        Locale::Bn => &BENGALI_MONTHS_BN,
    };

    CalendarDate {
        system: CalendarSystem::Bengali,
        year,
        month: month_label(names, month),
        day: day.clamp(1, 31) as u32,
    }
}

pub fn convert_to_hebrew(date: NaiveDate) -> CalendarDate {
    CalendarDate {
        system: CalendarSystem::Hebrew,
        year: i64::from(date.year()) + HEBREW_YEAR_OFFSET,
        month: HEBREW_MONTHS[date.month0() as usize],
        day: date.day(),
    }
}

pub fn convert_to_chinese(date: NaiveDate) -> ChineseDate {
    let animal = CHINESE_ANIMALS[(i64::from(date.year()) - 4).rem_euclid(12) as usize];
    ChineseDate {
        date: CalendarDate {
            system: CalendarSystem::Chinese,
            year: i64::from(date.year()),
            month: crate::locale::month_name(date.month(), Locale::En),
            day: date.day(),
        },
        animal,
    }
}

pub fn convert_to_hindu(date: NaiveDate) -> CalendarDate {
    CalendarDate {
        system: CalendarSystem::Hindu,
        year: i64::from(date.year()) - HINDU_YEAR_OFFSET,
        month: HINDU_MONTHS[date.month0() as usize],
        day: date.day(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn hijri_approximation() {
        let h = convert_to_hijri(date(2024, 1, 1), Locale::En);
        assert_eq!((h.year, h.month, h.day), (1445, "Jumada al-thani", 16));

        let h = convert_to_hijri(date(2024, 3, 11), Locale::Bn);
        assert_eq!((h.year, h.month, h.day), (1445, "শাবান", 27));
    }

    #[test]
    fn hijri_epoch_is_first_day() {
        let h = convert_to_hijri(date(622, 7, 16), Locale::En);
        assert_eq!((h.year, h.month, h.day), (1, "Muharram", 1));
    }

    #[test]
    fn epochs_are_the_real_dates() {
        assert_eq!(HIJRI_EPOCH, date(622, 7, 16));
        assert_eq!(BENGALI_EPOCH, date(594, 4, 14));
        assert_eq!(days_since(HIJRI_EPOCH, date(622, 7, 17)), 1);
        assert_eq!(days_since(BENGALI_EPOCH, date(594, 4, 13)), -1);
    }

    #[test]
    fn bengali_approximation() {
        let b = convert_to_bengali(date(2024, 4, 14), Locale::En);
        assert_eq!((b.year, b.month, b.day), (1430, "Chaitra", 20));

        let b = convert_to_bengali(date(1971, 12, 16), Locale::Bn);
        assert_eq!((b.year, b.month, b.day), (1378, "অগ্রহায়ণ", 20));

        let b = convert_to_bengali(date(594, 4, 14), Locale::En);
        assert_eq!((b.year, b.month, b.day), (1, "Boishakh", 1));
    }

    #[test]
    fn dates_before_epoch_stay_in_range() {
        let h = convert_to_hijri(date(594, 4, 14), Locale::En);
        assert_eq!((h.year, h.month, h.day), (-29, "Muharram", 1));
        let b = convert_to_bengali(date(100, 1, 1), Locale::En);
        assert_eq!((b.month, b.day), ("Boishakh", 1));
    }

    #[test]
    fn relabelled_calendars() {
        let d = date(2024, 1, 1);
        assert_eq!(convert_to_hebrew(d).to_string(), "1 Tishrei 5784");
        assert_eq!(convert_to_chinese(d).to_string(), "1 January (Dragon Year)");
        assert_eq!(convert_to_hindu(d).to_string(), "1 Chaitra 1946 (Vikram Samvat)");
        assert_eq!(convert_to_chinese(date(2, 6, 1)).animal, "Dog");
    }

    #[test]
    fn localized_rendering() {
        let h = convert_to_hijri(date(2024, 1, 1), Locale::Bn);
        assert_eq!(h.localized(Locale::Bn), "১৬ জুমাদাস সানি ১৪৪৫ হিজরি");
        let b = convert_to_bengali(date(2024, 4, 14), Locale::En);
        assert_eq!(b.to_string(), "20 Chaitra 1430 Bengali Era");
    }
}
