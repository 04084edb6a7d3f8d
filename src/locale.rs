//! Locale handling: the one place where output branches on English vs Bengali.
//!
//! Calendar and age arithmetic never look at a [`Locale`]; they hand back
//! indices and numbers, and the tables here turn those into display strings.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::error::AgeError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Bn,
}

impl Locale {
    pub fn tag(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Bn => "bn",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Locale {
    type Err = AgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Locale::En),
            "bn" => Ok(Locale::Bn),
            other => Err(AgeError::InvalidInput(format!(
                "unsupported locale {other:?} (expected \"en\" or \"bn\")"
            ))),
        }
    }
}

/// A piece of text carried in both supported languages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bilingual {
    pub en: &'static str,
    pub bn: &'static str,
}

impl Bilingual {
    pub const fn new(en: &'static str, bn: &'static str) -> Self {
        Self { en, bn }
    }

    pub fn get(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::En => self.en,
            Locale::Bn => self.bn,
        }
    }
}

const BENGALI_DIGITS: [char; 10] = ['০', '১', '২', '৩', '৪', '৫', '৬', '৭', '৮', '৯'];

const GREGORIAN_MONTHS_EN: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const GREGORIAN_MONTHS_BN: [&str; 12] = [
    "জানুয়ারি",
    "ফেব্রুয়ারি",
    "মার্চ",
    "এপ্রিল",
    "মে",
    "জুন",
    "জুলাই",
    "আগস্ট",
    "সেপ্টেম্বর",
    "অক্টোবর",
    "নভেম্বর",
    "ডিসেম্বর",
];

/// Replaces every ASCII digit with its Bengali counterpart, leaving everything else alone.
pub fn bengali_digits(s: &str) -> String {
    s.chars()
        .map(|c| match c.to_digit(10) {
            Some(d) => BENGALI_DIGITS[d as usize],
            None => c,
        })
        .collect()
}

/// Bengali output swaps digits without grouping; English output groups thousands with commas.
pub fn format_number(n: i64, locale: Locale) -> String {
    match locale {
        Locale::Bn => bengali_digits(&n.to_string()),
        Locale::En => group_thousands(n),
    }
}

fn group_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Gregorian month name for a 1-based month number.
pub fn month_name(month: u32, locale: Locale) -> &'static str {
    let idx = (month.clamp(1, 12) - 1) as usize;
    match locale {
        Locale::En => GREGORIAN_MONTHS_EN[idx],
        Locale::Bn => GREGORIAN_MONTHS_BN[idx],
    }
}

/// Long-form date: `January 5, 2024` or `৫ জানুয়ারি ২০২৪`.
pub fn format_date(date: NaiveDate, locale: Locale) -> String {
    let month = month_name(date.month(), locale);
    match locale {
        Locale::En => format!("{month} {}, {}", date.day(), date.year()),
        Locale::Bn => format!(
            "{} {month} {}",
            format_number(date.day() as i64, locale),
            format_number(date.year() as i64, locale)
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_locale_tags() {
        assert_eq!("en".parse::<Locale>(), Ok(Locale::En));
        assert_eq!(" BN ".parse::<Locale>(), Ok(Locale::Bn));
        assert!(matches!(
            "fr".parse::<Locale>(),
            Err(AgeError::InvalidInput(_))
        ));
    }

    #[test]
    fn english_numbers_are_grouped() {
        assert_eq!(format_number(0, Locale::En), "0");
        assert_eq!(format_number(999, Locale::En), "999");
        assert_eq!(format_number(1000, Locale::En), "1,000");
        assert_eq!(format_number(1234567, Locale::En), "1,234,567");
        assert_eq!(format_number(-45678, Locale::En), "-45,678");
    }

    #[test]
    fn bengali_numbers_swap_digits_only() {
        assert_eq!(format_number(2024, Locale::Bn), "২০২৪");
        assert_eq!(format_number(1234567, Locale::Bn), "১২৩৪৫৬৭");
        assert_eq!(format_number(-7, Locale::Bn), "-৭");
    }

    #[test]
    fn long_dates() {
        let d = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert_eq!(format_date(d, Locale::En), "January 5, 2024");
        assert_eq!(format_date(d, Locale::Bn), "৫ জানুয়ারি ২০২৪");
    }

    #[test]
    fn bilingual_picks_language() {
        let text = Bilingual::new("Age", "বয়স");
        assert_eq!(text.get(Locale::En), "Age");
        assert_eq!(text.get(Locale::Bn), "বয়স");
    }
}
