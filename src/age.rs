//! age.rs
//!
//! This module turns a birth instant and an as-of instant into an
//! [`AgeBreakdown`]: "X years, Y months, Z days" plus whole-unit totals,
//! the next-birthday countdown and a few illustrative fun facts.
//!
//! Chrono does not provide a built-in year/month/day diff (unlike Python’s
//! relativedelta), so we implement the calendar-aware borrowing rules manually.
//!
//! This logic correctly handles:
//!   • month underflow (borrowing from years)
//!   • day underflow (borrowing from the month before the reference month)
//!   • leap years, including Feb 29 birthdays in common years
//!   • varying month lengths

use chrono::{Datelike, Days, Local, NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;
use tracing::debug;

use crate::error::AgeError;
use crate::locale::{Locale, format_number};

const SHARE_URL: &str = "https://agecalculator.yec.org.bd";
const APP_URL: &str =
    "https://play.google.com/store/apps/details?id=com.yec.agecalculatorbangladesh";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgeBreakdown {
    pub years: i32,
    pub months: u32,
    pub days: u32,

    pub total_days: i64,
    pub total_weeks: i64,
    pub total_months: i64,
    pub total_hours: i64,
    pub total_minutes: i64,
    pub total_seconds: i64,

    pub next_birthday: NaiveDate,
    pub days_until_birthday: i64,
    /// Whole weeks since the most recent birthday, the companion of `years`.
    pub weeks_since_birthday: i64,

    /// Leap years in `[birth year, reference year]`, both ends included.
    pub leap_years: u32,

    // Illustrative only: 72 bpm, 15 breaths a minute, 8 h of sleep, 3 meals a day.
    pub heartbeats: i64,
    pub breaths: i64,
    pub sleep_hours: i64,
    pub meals_eaten: i64,
}

/// Age at `reference`, or at the current local wall-clock time when `reference` is `None`.
///
/// Past the last birthday of chrono's final year, `next_birthday` is pinned to
/// [`NaiveDate::MAX`].
pub fn compute_age(
    birth: NaiveDateTime,
    reference: Option<NaiveDateTime>,
) -> Result<AgeBreakdown, AgeError> {
    let reference = reference.unwrap_or_else(|| Local::now().naive_local());
    AgeBreakdown::between(birth, reference)
}

/// Date-granular variant: both dates are taken at midnight.
pub fn age_on(birth: NaiveDate, reference: NaiveDate) -> Result<AgeBreakdown, AgeError> {
    AgeBreakdown::between(birth.and_time(NaiveTime::MIN), reference.and_time(NaiveTime::MIN))
}

impl AgeBreakdown {
    pub fn between(birth: NaiveDateTime, reference: NaiveDateTime) -> Result<Self, AgeError> {
        if reference < birth {
            return Err(AgeError::ReferenceBeforeBirth { birth, reference });
        }

        let b = birth.date();
        let today = reference.date();

        let mut years = today.year() - b.year();
        let mut months = today.month() as i32 - b.month() as i32;
        let mut days = today.day() as i32 - b.day() as i32;

        // Fix day underflow
        if days < 0 {
            months -= 1;

            // Determine the previous month relative to `today`.
            let (prev_year, prev_month) = if today.month() == 1 {
                (today.year() - 1, 12)
            } else {
                (today.year(), today.month() - 1)
            };

            days += days_in_month(prev_year, prev_month) as i32;

            // Still negative only when the birth day is past the end of the
            // previous month (Jan 31 -> Mar 1). That month's last day stands in
            // for the birth day, leaving the reference day itself.
            if days < 0 {
                days = today.day() as i32;
            }
        }

        // Fix month underflow
        if months < 0 {
            years -= 1;
            months += 12;
        }

        let elapsed = reference - birth;
        let total_days = elapsed.num_days();
        let total_seconds = elapsed.num_seconds();
        let total_minutes = total_seconds / 60;

        let next_birthday = next_birthday(b, today)?;
        let last_birthday = last_birthday(b, today)?;

        let age = AgeBreakdown {
            years,
            months: months as u32,
            days: days as u32,
            total_days,
            total_weeks: total_days / 7,
            total_months: i64::from(years) * 12 + i64::from(months),
            total_hours: total_minutes / 60,
            total_minutes,
            total_seconds,
            next_birthday,
            days_until_birthday: (next_birthday - today).num_days(),
            weeks_since_birthday: (today - last_birthday).num_days() / 7,
            leap_years: count_leap_years(b.year(), today.year()),
            heartbeats: total_seconds * 6 / 5,
            breaths: total_seconds / 4,
            sleep_hours: total_days * 8,
            meals_eaten: total_days * 3,
        };

        debug!(
            %birth,
            %reference,
            years = age.years,
            months = age.months,
            days = age.days,
            "computed age"
        );

        Ok(age)
    }

    /// Returns the human age as a string, e.g. `34 years, 1 month, 3 days`.
    pub fn summary(&self, locale: Locale) -> String {
        match locale {
            Locale::En => format!(
                "{} year{}, {} month{}, {} day{}",
                self.years,
                plural(i64::from(self.years)),
                self.months,
                plural(i64::from(self.months)),
                self.days,
                plural(i64::from(self.days))
            ),
            Locale::Bn => format!(
                "{} বছর {} মাস {} দিন",
                format_number(i64::from(self.years), locale),
                format_number(i64::from(self.months), locale),
                format_number(i64::from(self.days), locale)
            ),
        }
    }

    /// One-line message for sharing a result.
    pub fn share_message(&self, locale: Locale) -> String {
        match locale {
            Locale::En => format!(
                "My age: {} years {} months {} days | Thanks for using Age Calculator Bangladesh. \
                 Download Android app: {APP_URL} | Website: {SHARE_URL}",
                self.years, self.months, self.days
            ),
            Locale::Bn => format!(
                "আমার বয়স: {} বছর {} মাস {} দিন | ধন্যবাদ বয়স ক্যালকুলেটর বাংলাদেশ ব্যবহার করার জন্য। \
                 অ্যান্ড্রয়েড অ্যাপ ডাউনলোড করুন: {APP_URL} | ওয়েবসাইট: {SHARE_URL}",
                format_number(i64::from(self.years), locale),
                format_number(i64::from(self.months), locale),
                format_number(i64::from(self.days), locale)
            ),
        }
    }
}

fn plural(n: i64) -> &'static str {
    if n == 1 { "" } else { "s" }
}

/// The birthday falling in `year`. A day the month lacks spills into the next
/// month, so Feb 29 becomes Mar 1 in a common year.
fn anniversary(birth: NaiveDate, year: i32) -> Result<NaiveDate, AgeError> {
    NaiveDate::from_ymd_opt(year, birth.month(), birth.day())
        .or_else(|| {
            NaiveDate::from_ymd_opt(year, birth.month(), 1)?
                .checked_add_days(Days::new(u64::from(birth.day() - 1)))
        })
        .ok_or_else(|| AgeError::InvalidInput(format!("year {year} is outside the supported range")))
}

/// First birthday on or after `today`. In chrono's last representable year
/// it saturates at [`NaiveDate::MAX`].
fn next_birthday(birth: NaiveDate, today: NaiveDate) -> Result<NaiveDate, AgeError> {
    let this_year = anniversary(birth, today.year())?;
    if this_year >= today {
        return Ok(this_year);
    }
    match today.year().checked_add(1) {
        Some(next) if next <= NaiveDate::MAX.year() => anniversary(birth, next),
        _ => Ok(NaiveDate::MAX),
    }
}

/// Most recent birthday on or before `today` (the birth date itself in the first year).
fn last_birthday(birth: NaiveDate, today: NaiveDate) -> Result<NaiveDate, AgeError> {
    let this_year = anniversary(birth, today.year())?;
    if this_year > today {
        Ok(anniversary(birth, today.year() - 1)?.max(birth))
    } else {
        Ok(this_year)
    }
}

fn count_leap_years(from: i32, to: i32) -> u32 {
    (from..=to).filter(|&y| is_leap_year(y)).count() as u32
}

/// Returns number of days in a given year/month (handles leap years)
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 30, // should never occur but keeps function total
    }
}

/// Leap-year rule (Gregorian):
///   - divisible by 4 → leap year
///   - except divisible by 100 → not leap year
///   - except divisible by 400 → leap year
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Parses `YYYY-MM-DD`.
pub fn parse_date(s: &str) -> Result<NaiveDate, AgeError> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|e| AgeError::InvalidInput(format!("{s:?} is not a YYYY-MM-DD date: {e}")))
}

/// Parses `YYYY-MM-DD`, `YYYY-MM-DDTHH:MM` or `YYYY-MM-DDTHH:MM:SS`; a bare date means midnight.
pub fn parse_instant(s: &str) -> Result<NaiveDateTime, AgeError> {
    let s = s.trim();
    for fmt in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(dt);
        }
    }
    parse_date(s).map(|d| d.and_time(NaiveTime::MIN))
}
