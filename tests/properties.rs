//! Behavioural properties of the public API, checked over ranges of inputs.

use boyos::legal::legal_info;
use boyos::vaccination::{Category, VaccineStatus, vaccination_schedule};
use boyos::zodiac::{ZodiacSign, zodiac_sign};
use boyos::{AgeReport, AgeRequest, Locale, age_on, compute_age};
use chrono::{Datelike, Days, NaiveDate};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn sample_births() -> Vec<NaiveDate> {
    vec![
        date(1950, 1, 1),
        date(1971, 12, 16),
        date(1988, 2, 29),
        date(1990, 2, 28),
        date(1992, 6, 14),
        date(1999, 12, 31),
        date(2000, 3, 31),
        date(2012, 8, 31),
        date(2020, 2, 29),
    ]
}

/// Every day of 2023 and 2024, covering a common and a leap year.
fn sample_references() -> impl Iterator<Item = NaiveDate> {
    let start = date(2023, 1, 1);
    (0..731).map(move |i| start + Days::new(i))
}

#[test]
fn total_months_match_years_and_months() {
    for birth in sample_births() {
        for reference in sample_references() {
            let age = age_on(birth, reference).unwrap();
            assert_eq!(
                i64::from(age.years) * 12 + i64::from(age.months),
                age.total_months,
                "{birth} -> {reference}"
            );
            assert!(age.months < 12);
        }
    }
}

/// Length of the month before `reference`'s month.
fn previous_month_len(reference: NaiveDate) -> i64 {
    let first = reference.with_day(1).unwrap();
    i64::from(first.pred_opt().unwrap().day())
}

#[test]
fn days_follow_the_borrow_rule() {
    for birth in sample_births() {
        for reference in sample_references() {
            let age = age_on(birth, reference).unwrap();
            let days = i64::from(age.days);
            let raw = i64::from(reference.day()) - i64::from(birth.day());

            if raw >= 0 {
                assert_eq!(days, raw, "{birth} -> {reference}");
            } else {
                let prev = previous_month_len(reference);
                let borrowed = raw + prev;
                let expected = if borrowed < 0 { i64::from(reference.day()) } else { borrowed };
                assert_eq!(days, expected, "{birth} -> {reference}");
                assert!(days < prev, "{birth} -> {reference}: {days} >= {prev}");
            }
        }
    }
}

#[test]
fn long_months_borrow_the_previous_month_length() {
    let age = age_on(date(2023, 1, 31), date(2023, 3, 30)).unwrap();
    assert_eq!((age.months, age.days), (1, 27));
    let age = age_on(date(2024, 3, 31), date(2024, 5, 30)).unwrap();
    assert_eq!((age.months, age.days), (1, 29));
}

#[test]
fn feb_28_to_mar_31_borrows_from_february() {
    let age = age_on(date(1990, 2, 28), date(1990, 3, 31)).unwrap();
    assert_eq!((age.years, age.months, age.days), (0, 1, 3));
}

#[test]
fn next_birthday_is_within_a_year() {
    for birth in sample_births() {
        for reference in sample_references() {
            let age = age_on(birth, reference).unwrap();
            assert!(
                (0..=366).contains(&age.days_until_birthday),
                "{birth} -> {reference}: {}",
                age.days_until_birthday
            );
            assert!(age.next_birthday >= reference);
            assert_eq!(
                (age.next_birthday - reference).num_days(),
                age.days_until_birthday
            );
        }
    }
}

#[test]
fn leap_years_count_both_ends() {
    let age = age_on(date(2000, 1, 1), date(2004, 1, 1)).unwrap();
    assert_eq!(age.leap_years, 2);
}

#[test]
fn zodiac_boundaries_start_on_the_cutoff_plus_one() {
    assert_eq!(zodiac_sign(date(2024, 3, 21), Locale::En).zodiac(), ZodiacSign::Aries);
    assert_eq!(zodiac_sign(date(2024, 3, 20), Locale::En).zodiac(), ZodiacSign::Pisces);
}

#[test]
fn legal_topics_accumulate_with_age() {
    let mut previous = legal_info(0).unwrap();
    for age in 1..=100 {
        let current = legal_info(age).unwrap();
        assert!(previous.len() <= current.len(), "age {age}");
        for topic in previous.keys() {
            assert!(current.contains_key(topic), "{topic:?} dropped at {age}");
        }
        previous = current;
    }
}

#[test]
fn vaccination_band_selection() {
    // Six weeks of life.
    let infant = vaccination_schedule(6, 0).unwrap();
    let penta = infant
        .iter()
        .find(|v| v.en.starts_with("Pentavalent 1"))
        .unwrap();
    assert!(matches!(penta.status, VaccineStatus::Due | VaccineStatus::Upcoming));

    let adult = vaccination_schedule(0, 25).unwrap();
    assert_eq!(adult.iter().filter(|v| v.age == "19-26 years").count(), 4);
    assert_eq!(
        adult
            .iter()
            .filter(|v| v.category == Some(Category::Emergency))
            .count(),
        3
    );
    assert!(
        adult
            .iter()
            .all(|v| !v.age.ends_with("weeks") && !v.age.ends_with("months"))
    );
    assert!(adult.iter().all(|v| v.age != "15 years" && v.age != "10 years"));
}

#[test]
fn identical_inputs_give_identical_outputs() {
    let birth = date(1992, 6, 14).and_hms_opt(7, 45, 0).unwrap();
    let reference = date(2024, 3, 10).and_hms_opt(12, 0, 0).unwrap();

    assert_eq!(
        compute_age(birth, Some(reference)).unwrap(),
        compute_age(birth, Some(reference)).unwrap()
    );

    let request = AgeRequest::new(birth)
        .with_reference(reference)
        .with_locale(Locale::Bn);
    assert_eq!(
        AgeReport::compute(&request).unwrap(),
        AgeReport::compute(&request).unwrap()
    );
    assert_eq!(legal_info(40).unwrap(), legal_info(40).unwrap());
    assert_eq!(
        vaccination_schedule(3, 2).unwrap(),
        vaccination_schedule(3, 2).unwrap()
    );
}

#[test]
fn report_serializes_to_camel_case_json() {
    let request = AgeRequest::parse("1992-06-14", Some("2024-03-10"), Locale::En).unwrap();
    let report = AgeReport::compute(&request).unwrap();
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["age"]["years"], 31);
    assert_eq!(json["age"]["totalMonths"], 380);
    assert_eq!(json["age"]["daysUntilBirthday"], 96);
    assert_eq!(json["zodiac"]["sign"], "Gemini");
    assert_eq!(json["calendars"]["chinese"]["animal"], "Monkey");
    assert_eq!(json["outlook"]["lifeExpectancy"], 74);
    assert!(json["legal"]["voting"]["en"].is_string());
    assert_eq!(json["locale"], "en");
}
