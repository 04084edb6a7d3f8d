//! Plain-text rendering of an [`AgeReport`] for terminals.

use crate::locale::{Locale, format_date, format_number};
use crate::report::AgeReport;
use crate::vaccination::VaccineStatus;

struct Labels {
    age: &'static str,
    born: &'static str,
    next_birthday: &'static str,
    days: &'static str,
    zodiac: &'static str,
    calendars: &'static str,
    milestones: &'static str,
    legal: &'static str,
    vaccinations: &'static str,
    none: &'static str,
}

const EN: Labels = Labels {
    age: "Age",
    born: "Born",
    next_birthday: "Next birthday",
    days: "days",
    zodiac: "Zodiac",
    calendars: "Calendars",
    milestones: "Milestones",
    legal: "Legal rights",
    vaccinations: "Vaccinations",
    none: "none",
};

const BN: Labels = Labels {
    age: "বয়স",
    born: "জন্ম",
    next_birthday: "পরবর্তী জন্মদিন",
    days: "দিন",
    zodiac: "রাশি",
    calendars: "বর্ষপঞ্জি",
    milestones: "মাইলফলক",
    legal: "আইনি অধিকার",
    vaccinations: "টিকা",
    none: "নেই",
};

fn status_label(status: VaccineStatus, locale: Locale) -> &'static str {
    match (status, locale) {
        (VaccineStatus::Completed, Locale::En) => "completed",
        (VaccineStatus::Due, Locale::En) => "due",
        (VaccineStatus::Upcoming, Locale::En) => "upcoming",
        (VaccineStatus::Overdue, Locale::En) => "overdue",
        (VaccineStatus::Completed, Locale::Bn) => "সম্পন্ন",
        (VaccineStatus::Due, Locale::Bn) => "বাকি",
        (VaccineStatus::Upcoming, Locale::Bn) => "আসন্ন",
        (VaccineStatus::Overdue, Locale::Bn) => "মেয়াদোত্তীর্ণ",
    }
}

pub fn render(report: &AgeReport) -> String {
    let locale = report.locale;
    let l = match locale {
        Locale::En => &EN,
        Locale::Bn => &BN,
    };
    let age = &report.age;
    let mut lines = Vec::new();

    lines.push(format!("{}: {}", l.age, report.summary));
    lines.push(format!("{}: {}", l.born, format_date(report.birth.date(), locale)));
    lines.push(format!(
        "{}: {} ({} {})",
        l.next_birthday,
        format_date(age.next_birthday, locale),
        format_number(age.days_until_birthday, locale),
        l.days
    ));
    lines.push(format!(
        "{}: {} {} ({})",
        l.zodiac, report.zodiac.info.symbol, report.zodiac.sign, report.zodiac.info.element
    ));
    lines.push(report.outlook.summary(locale));

    lines.push(String::new());
    lines.push(format!("{}:", l.calendars));
    let calendars = &report.calendars;
    for rendered in [
        calendars.hijri.localized(locale),
        calendars.bengali.localized(locale),
        calendars.hebrew.to_string(),
        calendars.chinese.to_string(),
        calendars.hindu.to_string(),
    ] {
        lines.push(format!("  {rendered}"));
    }

    lines.push(String::new());
    lines.push(format!("{}:", l.milestones));
    for m in &report.milestones {
        let mark = if m.reached { "✓" } else { " " };
        lines.push(format!("  [{mark}] {} ({})", m.label, format_number(i64::from(m.age), locale)));
    }

    lines.push(String::new());
    lines.push(format!("{}:", l.legal));
    for (topic, entry) in &report.legal {
        lines.push(format!("  {}: {}", topic.title().get(locale), entry.text(locale)));
    }

    lines.push(String::new());
    lines.push(format!("{}:", l.vaccinations));
    if report.vaccinations.is_empty() {
        lines.push(format!("  {}", l.none));
    }
    for v in &report.vaccinations {
        lines.push(format!(
            "  {} [{}, {}]",
            v.name(locale),
            v.age,
            status_label(v.status, locale)
        ));
    }

    lines.push(String::new());
    lines.push(age.share_message(locale));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::AgeRequest;

    fn render_for(birth: &str, on: &str, locale: Locale) -> String {
        let request = AgeRequest::parse(birth, Some(on), locale).unwrap();
        render(&AgeReport::compute(&request).unwrap())
    }

    #[test]
    fn english_block() {
        let out = render_for("1992-06-14", "2024-03-10", Locale::En);
        assert!(out.starts_with("Age: 31 years, 8 months, 25 days\n"));
        assert!(out.contains("Born: June 14, 1992"));
        assert!(out.contains("Next birthday: June 14, 2024 (96 days)"));
        assert!(out.contains("  [✓] Thirties (30)"));
        assert!(out.contains("  Voting: Eligible to vote"));
        assert!(out.contains("World Bank average life expectancy data 43 years remaining"));
    }

    #[test]
    fn bengali_block() {
        let out = render_for("1992-06-14", "2024-03-10", Locale::Bn);
        assert!(out.starts_with("বয়স: ৩১ বছর ৮ মাস ২৫ দিন\n"));
        assert!(out.contains("ভোটাধিকার: জাতীয় ও স্থানীয় নির্বাচনে ভোট দেওয়ার যোগ্য।"));
    }

    #[test]
    fn empty_vaccination_list_is_marked() {
        // 1 year 6 weeks falls between the infant bands and the 18 month band.
        let out = render_for("2023-01-01", "2024-02-12", Locale::En);
        assert!(out.contains("Vaccinations:\n  none"));
    }
}
