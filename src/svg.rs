use std::str::FromStr;

use crate::error::AgeError;
use crate::locale::{Bilingual, Locale, format_date, format_number};
use crate::report::AgeReport;

const START_Y: i32 = 30;
const LINE_HEIGHT: i32 = 20;
const LEFT_PADDING: f32 = 15.0;
const RIGHT_PADDING: f32 = 30.0;
const CHAR_WIDTH: f32 = 9.6;
const MIN_COL_CHARS: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

pub struct ThemeColors {
    pub bg: &'static str,
    pub text: &'static str,
    pub key: &'static str,
    pub value: &'static str,
    pub cc: &'static str,
}

impl Theme {
    pub fn colors(self) -> ThemeColors {
        match self {
            Theme::Dark => ThemeColors {
                bg: "#161b22",
                text: "#c9d1d9",
                key: "#ffa657",
                value: "#a5d6ff",
                cc: "#616e7f",
            },
            Theme::Light => ThemeColors {
                bg: "#ffffff",
                text: "#24292f",
                key: "#d73a49",
                value: "#0366d6",
                cc: "#6a737d",
            },
        }
    }
}

impl FromStr for Theme {
    type Err = AgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            other => Err(AgeError::InvalidInput(format!(
                "unknown theme {other:?} (expected \"dark\" or \"light\")"
            ))),
        }
    }
}

// Utilities for building SVG content

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Character width of a string as rendered in a monospace font.
fn width(s: &str) -> usize {
    s.chars().count()
}

pub fn build_stat_row(key: &str, value: &str, align_width: usize) -> (String, String, String) {
    let key_part = format!("{key}: ");
    let base_len = width(&key_part) + width(value);
    let available = align_width.saturating_sub(base_len);

    let dots = match available {
        0 => "".to_string(),
        1 => " ".to_string(),
        2 => ". ".to_string(),
        n => ".".repeat(n),
    };

    (key_part, dots, value.to_string())
}

fn build_header_line(label: &str, align_width: usize) -> String {
    let base = format!("{label} ");
    let dash_count = align_width.saturating_sub(width(&base)) + 2;
    format!("{base}{}", "-".repeat(dash_count))
}

enum Line {
    Header(&'static Bilingual),
    Blank,
    Stat { key: &'static Bilingual, value: String },
}

static TITLE: Bilingual = Bilingual::new("age@bangladesh", "বয়স@বাংলাদেশ");
static TOTALS: Bilingual = Bilingual::new("- Time Lived", "- অতিবাহিত সময়");
static CALENDARS: Bilingual = Bilingual::new("- Calendars", "- বর্ষপঞ্জি");
static LIFE: Bilingual = Bilingual::new("- Life", "- জীবন");

static AGE: Bilingual = Bilingual::new("Age", "বয়স");
static BORN: Bilingual = Bilingual::new("Born", "জন্ম");
static AS_OF: Bilingual = Bilingual::new("As of", "তারিখ");
static NEXT_BIRTHDAY: Bilingual = Bilingual::new("Next birthday", "পরবর্তী জন্মদিন");
static ZODIAC: Bilingual = Bilingual::new("Zodiac", "রাশি");
static DAYS: Bilingual = Bilingual::new("Days", "দিন");
static WEEKS: Bilingual = Bilingual::new("Weeks", "সপ্তাহ");
static MONTHS: Bilingual = Bilingual::new("Months", "মাস");
static HOURS: Bilingual = Bilingual::new("Hours", "ঘন্টা");
static MINUTES: Bilingual = Bilingual::new("Minutes", "মিনিট");
static SECONDS: Bilingual = Bilingual::new("Seconds", "সেকেন্ড");
static HIJRI: Bilingual = Bilingual::new("Hijri", "হিজরি");
static BENGALI: Bilingual = Bilingual::new("Bengali", "বাংলা");
static HEBREW: Bilingual = Bilingual::new("Hebrew", "হিব্রু");
static CHINESE: Bilingual = Bilingual::new("Chinese", "চীনা");
static HINDU: Bilingual = Bilingual::new("Hindu", "হিন্দু");
static EXPECTANCY: Bilingual = Bilingual::new("Life expectancy", "গড় আয়ু");
static PROGRESS: Bilingual = Bilingual::new("Life progress", "জীবনের অগ্রগতি");
static HEARTBEATS: Bilingual = Bilingual::new("Heartbeats", "হৃদস্পন্দন");
static BREATHS: Bilingual = Bilingual::new("Breaths", "শ্বাস");

fn stat(key: &'static Bilingual, value: String) -> Line {
    Line::Stat { key, value }
}

fn report_lines(report: &AgeReport) -> Vec<Line> {
    let locale = report.locale;
    let age = &report.age;
    let num = |n: i64| format_number(n, locale);
    let days_word = match locale {
        Locale::En => "days",
        Locale::Bn => "দিন",
    };

    let progress = format!("{:.1}%", report.outlook.life_progress);
    let progress = match locale {
        Locale::En => progress,
        Locale::Bn => crate::locale::bengali_digits(&progress),
    };

    vec![
        Line::Header(&TITLE),
        stat(&AGE, report.summary.clone()),
        stat(&BORN, format_date(report.birth.date(), locale)),
        stat(&AS_OF, format_date(report.reference.date(), locale)),
        stat(
            &NEXT_BIRTHDAY,
            format!(
                "{} ({} {days_word})",
                format_date(age.next_birthday, locale),
                num(age.days_until_birthday)
            ),
        ),
        stat(
            &ZODIAC,
            format!("{} {}", report.zodiac.info.symbol, report.zodiac.sign),
        ),
        Line::Blank,
        Line::Header(&TOTALS),
        stat(&DAYS, num(age.total_days)),
        stat(&WEEKS, num(age.total_weeks)),
        stat(&MONTHS, num(age.total_months)),
        stat(&HOURS, num(age.total_hours)),
        stat(&MINUTES, num(age.total_minutes)),
        stat(&SECONDS, num(age.total_seconds)),
        Line::Blank,
        Line::Header(&CALENDARS),
        stat(&HIJRI, report.calendars.hijri.localized(locale)),
        stat(&BENGALI, report.calendars.bengali.localized(locale)),
        stat(&HEBREW, report.calendars.hebrew.to_string()),
        stat(&CHINESE, report.calendars.chinese.to_string()),
        stat(&HINDU, report.calendars.hindu.to_string()),
        Line::Blank,
        Line::Header(&LIFE),
        stat(&EXPECTANCY, num(i64::from(report.outlook.life_expectancy))),
        stat(&PROGRESS, progress),
        stat(&HEARTBEATS, num(age.heartbeats)),
        stat(&BREATHS, num(age.breaths)),
    ]
}

/// Renders the report as a themed key/value card.
pub fn generate_svg(report: &AgeReport, theme: Theme) -> String {
    let colors = theme.colors();
    let locale = report.locale;
    let lines = report_lines(report);

    let align_width = lines
        .iter()
        .filter_map(|line| match line {
            Line::Stat { key, value } => Some(width(key.get(locale)) + 2 + width(value)),
            _ => None,
        })
        .max()
        .unwrap_or(0)
        .max(MIN_COL_CHARS);

    let mut tspans = String::new();
    for (i, line) in lines.iter().enumerate() {
        let y = START_Y + (i as i32) * LINE_HEIGHT;

        match line {
            Line::Blank => {}
            Line::Header(label) => {
                tspans.push_str(&format!(
                    r#"<tspan x="{LEFT_PADDING}" y="{y}">{}</tspan>
"#,
                    escape_xml(&build_header_line(label.get(locale), align_width))
                ));
            }
            Line::Stat { key, value } => {
                let (k, d, v) = build_stat_row(key.get(locale), value, align_width);
                tspans.push_str(&format!(
                    r#"<tspan x="{LEFT_PADDING}" y="{y}" class="cc">. </tspan>
<tspan class="key">{}</tspan><tspan class="cc">{}</tspan><tspan class="value">{}</tspan>
"#,
                    escape_xml(&k),
                    escape_xml(&d),
                    escape_xml(&v)
                ));
            }
        }
    }

    let w = LEFT_PADDING + (align_width as f32 + 2.0) * CHAR_WIDTH + RIGHT_PADDING;
    let h = lines.len() as f32 * LINE_HEIGHT as f32 + START_Y as f32 + 30.0;

    format!(
        r#"<?xml version='1.0' encoding='UTF-8'?>
<svg xmlns="http://www.w3.org/2000/svg"
     width="{w}px" height="{h}px"
     font-family="ConsolasFallback,Consolas,monospace"
     font-size="16px">

<style>
.key      {{ fill: {key}; }}
.value    {{ fill: {value}; }}
.cc       {{ fill: {cc}; }}
</style>

<rect width="{w}px" height="{h}px" fill="{bg}" rx="15"/>

<text fill="{text}" xml:space="preserve">
{tspans}
</text>

</svg>
"#,
        bg = colors.bg,
        text = colors.text,
        key = colors.key,
        value = colors.value,
        cc = colors.cc,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::AgeRequest;

    fn report(locale: Locale) -> AgeReport {
        let request = AgeRequest::parse("1992-06-14", Some("2024-03-10"), locale).unwrap();
        AgeReport::compute(&request).unwrap()
    }

    #[test]
    fn stat_rows_pad_with_dots() {
        let (k, d, v) = build_stat_row("Age", "31", 20);
        assert_eq!(k, "Age: ");
        assert_eq!(d, ".".repeat(13));
        assert_eq!(v, "31");

        assert_eq!(build_stat_row("Age", "31", 8).1, " ");
        assert_eq!(build_stat_row("Age", "31", 9).1, ". ");
        assert_eq!(build_stat_row("Age", "31", 3).1, "");
    }

    #[test]
    fn rows_align_by_characters_not_bytes() {
        let (k, d, v) = build_stat_row("বয়স", "৩১", 20);
        assert_eq!(width(&k) + width(&d) + width(&v), 20);
    }

    #[test]
    fn header_fills_with_dashes() {
        assert_eq!(build_header_line("- Life", 10), "- Life -----");
    }

    #[test]
    fn themes_parse_and_color() {
        assert_eq!("Light".parse::<Theme>(), Ok(Theme::Light));
        assert!("sepia".parse::<Theme>().is_err());
        assert_eq!(Theme::default().colors().bg, "#161b22");
    }

    #[test]
    fn card_renders_report() {
        let svg = generate_svg(&report(Locale::En), Theme::Light);
        assert!(svg.starts_with("<?xml"));
        assert!(svg.contains("fill=\"#ffffff\""));
        assert!(svg.contains("31 years, 8 months, 25 days"));
        assert!(svg.contains("Gemini"));
        assert!(svg.contains("Vikram Samvat"));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn bengali_card_uses_bengali_labels() {
        let svg = generate_svg(&report(Locale::Bn), Theme::Dark);
        assert!(svg.contains("বয়স@বাংলাদেশ"));
        assert!(svg.contains("মিথুন"));
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(escape_xml("a<b & c>"), "a&lt;b &amp; c&gt;");
    }
}
