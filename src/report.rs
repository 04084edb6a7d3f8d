//! The single compute boundary: one validated request in, one immutable
//! report out.

use chrono::{Local, NaiveDateTime};
use serde::Serialize;
use tracing::{debug, trace};

use crate::age::{self, AgeBreakdown};
use crate::calendar::{self, CalendarDate, ChineseDate};
use crate::error::AgeError;
use crate::legal::{self, LegalInfo};
use crate::locale::{Locale, format_number};
use crate::vaccination::{self, VaccinationEntry};
use crate::zodiac::{self, ZodiacAssignment};

/// Average life expectancy at birth in Bangladesh, in years.
pub const LIFE_EXPECTANCY_YEARS: i32 = 74;

const MILESTONES: [(i32, &str); 8] = [
    (18, "Legal Adult"),
    (21, "Drinking Age (US)"),
    (25, "Car Rental Age"),
    (30, "Thirties"),
    (40, "Forties"),
    (50, "Half Century"),
    (65, "Retirement Age"),
    (100, "Century"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgeRequest {
    pub birth: NaiveDateTime,
    /// `None` means "now" on the local wall clock.
    pub reference: Option<NaiveDateTime>,
    pub locale: Locale,
}

impl AgeRequest {
    pub fn new(birth: NaiveDateTime) -> Self {
        Self {
            birth,
            reference: None,
            locale: Locale::default(),
        }
    }

    /// Builds a request from user-supplied strings.
    pub fn parse(birth: &str, reference: Option<&str>, locale: Locale) -> Result<Self, AgeError> {
        let birth = age::parse_instant(birth)?;
        let reference = reference.map(age::parse_instant).transpose()?;
        Ok(Self {
            birth,
            reference,
            locale,
        })
    }

    pub fn with_reference(mut self, reference: NaiveDateTime) -> Self {
        self.reference = Some(reference);
        self
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LifeOutlook {
    pub life_expectancy: i32,
    pub years_left: i32,
    /// Percentage of the expectancy already lived; exceeds 100 past it.
    pub life_progress: f64,
}

impl LifeOutlook {
    pub fn for_years(years: i32) -> Self {
        Self {
            life_expectancy: LIFE_EXPECTANCY_YEARS,
            years_left: (LIFE_EXPECTANCY_YEARS - years).max(0),
            life_progress: f64::from(years) / f64::from(LIFE_EXPECTANCY_YEARS) * 100.0,
        }
    }

    pub fn summary(&self, locale: Locale) -> String {
        let left = format_number(i64::from(self.years_left), locale);
        match locale {
            Locale::En => format!("World Bank average life expectancy data {left} years remaining"),
            Locale::Bn => format!("বিশ্বব্যাংকের গড় আয়ুর তথ্য অনুযায়ী {left} বছর বাকি"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Milestone {
    pub age: i32,
    pub label: &'static str,
    pub reached: bool,
}

pub fn milestones(years: i32) -> Vec<Milestone> {
    MILESTONES
        .iter()
        .map(|&(age, label)| Milestone {
            age,
            label,
            reached: years >= age,
        })
        .collect()
}

/// The birth date expressed in each supported calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Calendars {
    pub hijri: CalendarDate,
    pub bengali: CalendarDate,
    pub hebrew: CalendarDate,
    pub chinese: ChineseDate,
    pub hindu: CalendarDate,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgeReport {
    pub birth: NaiveDateTime,
    pub reference: NaiveDateTime,
    pub locale: Locale,
    pub age: AgeBreakdown,
    pub summary: String,
    pub zodiac: ZodiacAssignment,
    pub calendars: Calendars,
    pub legal: LegalInfo,
    pub vaccinations: Vec<VaccinationEntry>,
    pub outlook: LifeOutlook,
    pub milestones: Vec<Milestone>,
}

impl AgeReport {
    pub fn compute(request: &AgeRequest) -> Result<Self, AgeError> {
        let reference = request
            .reference
            .unwrap_or_else(|| Local::now().naive_local());
        debug!(birth = %request.birth, %reference, locale = %request.locale, "computing age report");

        let age = age::compute_age(request.birth, Some(reference))?;
        let years = i64::from(age.years);

        let birth_date = request.birth.date();
        let locale = request.locale;
        let calendars = Calendars {
            hijri: calendar::convert_to_hijri(birth_date, locale),
            bengali: calendar::convert_to_bengali(birth_date, locale),
            hebrew: calendar::convert_to_hebrew(birth_date),
            chinese: calendar::convert_to_chinese(birth_date),
            hindu: calendar::convert_to_hindu(birth_date),
        };
        trace!(hijri = %calendars.hijri, bengali = %calendars.bengali, "converted birth date");

        let legal = legal::legal_info(years)?;
        let vaccinations = vaccination::vaccination_schedule(age.weeks_since_birthday, years)?;

        let report = Self {
            birth: request.birth,
            reference,
            locale,
            summary: age.summary(locale),
            zodiac: zodiac::zodiac_sign(birth_date, locale),
            calendars,
            legal,
            vaccinations,
            outlook: LifeOutlook::for_years(age.years),
            milestones: milestones(age.years),
            age,
        };

        debug!(
            years = report.age.years,
            legal_topics = report.legal.len(),
            vaccinations = report.vaccinations.len(),
            "age report ready"
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::legal::LegalTopic;

    fn request(birth: &str, on: &str) -> AgeRequest {
        AgeRequest::parse(birth, Some(on), Locale::En).unwrap()
    }

    #[test]
    fn parses_request_strings() {
        let req = AgeRequest::parse("1992-06-14", Some("2024-03-10T08:30"), Locale::Bn).unwrap();
        assert_eq!(req.birth.to_string(), "1992-06-14 00:00:00");
        assert_eq!(req.reference.unwrap().to_string(), "2024-03-10 08:30:00");
        assert_eq!(req.locale, Locale::Bn);

        assert!(matches!(
            AgeRequest::parse("14/06/1992", None, Locale::En),
            Err(AgeError::InvalidInput(_))
        ));
        assert!(AgeRequest::parse("1992-06-14", Some("soon"), Locale::En).is_err());
    }

    #[test]
    fn report_ties_the_pieces_together() {
        let report = AgeReport::compute(&request("1992-06-14", "2024-03-10")).unwrap();

        assert_eq!((report.age.years, report.age.months, report.age.days), (31, 8, 25));
        assert_eq!(report.zodiac.sign, "Gemini");
        assert!(report.legal.contains_key(&LegalTopic::Marriage));
        assert!(!report.legal.contains_key(&LegalTopic::Retirement));
        assert_eq!(report.outlook.years_left, 43);
        assert_eq!(report.summary, report.age.summary(Locale::En));
        assert_eq!(report.calendars.hindu.year, 1914);
        assert_eq!(report.calendars.chinese.animal, "Monkey");
    }

    #[test]
    fn vaccinations_use_weeks_since_birthday() {
        // 1 year 22 weeks is 74 weeks, just inside the 18 month window.
        // Adding total weeks on top of the year would land past every band.
        let report = AgeReport::compute(&request("2023-01-01", "2024-06-03")).unwrap();
        assert_eq!(report.age.years, 1);
        assert_eq!(report.age.weeks_since_birthday, 22);
        assert!(report.vaccinations.iter().any(|v| v.age == "18 months"));
    }

    #[test]
    fn reference_before_birth_fails() {
        let err = AgeReport::compute(&request("2024-03-10", "2024-03-09")).unwrap_err();
        assert!(matches!(err, AgeError::ReferenceBeforeBirth { .. }));
    }

    #[test]
    fn life_outlook() {
        let young = LifeOutlook::for_years(37);
        assert_eq!(young.years_left, 37);
        assert!((young.life_progress - 50.0).abs() < 1e-9);

        let old = LifeOutlook::for_years(90);
        assert_eq!(old.years_left, 0);
        assert!(old.life_progress > 100.0);
        assert_eq!(
            LifeOutlook::for_years(70).summary(Locale::Bn),
            "বিশ্বব্যাংকের গড় আয়ুর তথ্য অনুযায়ী ৪ বছর বাকি"
        );
    }

    #[test]
    fn milestones_flag_reached() {
        let reached: Vec<_> = milestones(30)
            .into_iter()
            .filter(|m| m.reached)
            .map(|m| m.label)
            .collect();
        assert_eq!(
            reached,
            vec!["Legal Adult", "Drinking Age (US)", "Car Rental Age", "Thirties"]
        );
        assert!(milestones(0).iter().all(|m| !m.reached));
    }

    #[test]
    fn builder_defaults_to_now() {
        let birth = age::parse_instant("2000-01-01").unwrap();
        let req = AgeRequest::new(birth);
        assert_eq!(req.reference, None);
        assert_eq!(req.locale, Locale::En);
        let report = AgeReport::compute(&req.with_locale(Locale::Bn)).unwrap();
        assert!(report.reference >= birth);
        assert_eq!(report.zodiac.sign, "মকর");
    }
}
