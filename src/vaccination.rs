//! Bangladesh EPI vaccination schedule, filtered and annotated for a given age.
//!
//! Pediatric bands are keyed by a nominal age label ("6 weeks", "9 months",
//! "4-5 years") and only show up inside a visibility window around that age.
//! Women of childbearing age get a fixed dosing block, adults get their age
//! bracket plus the emergency set.
//!
//! Note that nothing but the women's block covers the years between the last
//! pediatric band (15 years) and the first adult bracket (19 years).

use serde::Serialize;
use tracing::trace;

use crate::error::AgeError;
use crate::locale::{Bilingual, Locale};

const WEEKS_PER_MONTH: f64 = 4.33;
const WEEKS_PER_YEAR: i64 = 52;

/// Weeks before a band's nominal age when it becomes visible.
const LEAD_WEEKS: f64 = 4.0;
/// Weeks after the nominal age during which the dose is still `due`.
const DUE_WEEKS: f64 = 4.0;
/// Weeks after the nominal age when the band drops out of the schedule.
const GRACE_WEEKS: f64 = 8.0;

const WOMEN_MIN_YEARS: i64 = 15;
const WOMEN_MAX_YEARS: i64 = 49;
const ADULT_MIN_YEARS: i64 = 19;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VaccineStatus {
    Completed,
    Due,
    Upcoming,
    Overdue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Mandatory,
    Recommended,
    Emergency,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VaccinationEntry {
    pub en: &'static str,
    pub bn: &'static str,
    /// Label of the band or bracket this entry came from.
    pub age: &'static str,
    pub status: VaccineStatus,
    pub priority: Priority,
    pub guidance: Bilingual,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
}

impl VaccinationEntry {
    pub fn name(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::En => self.en,
            Locale::Bn => self.bn,
        }
    }

    pub fn guidance(&self, locale: Locale) -> &'static str {
        self.guidance.get(locale)
    }

    fn new(
        vaccine: &Vaccine,
        age: &'static str,
        (status, priority): (VaccineStatus, Priority),
        category: Category,
    ) -> Self {
        Self {
            en: vaccine.name.en,
            bn: vaccine.name.bn,
            age,
            status,
            priority,
            guidance: vaccine.guidance.clone(),
            category: Some(category),
        }
    }
}

struct Vaccine {
    name: Bilingual,
    guidance: Bilingual,
}

struct Band {
    label: &'static str,
    vaccines: &'static [Vaccine],
}

struct Bracket {
    label: &'static str,
    min_years: i64,
    /// `None` for the open-ended senior bracket.
    max_years: Option<i64>,
    vaccines: &'static [(Category, Vaccine)],
}

impl Bracket {
    fn contains(&self, years: i64) -> bool {
        years >= self.min_years && self.max_years.is_none_or(|max| years <= max)
    }
}

/// Nominal age of a band label in weeks. Ranges use their lower bound;
/// labels without a recognised unit count as birth.
fn label_weeks(label: &str) -> f64 {
    let leading: String = label.chars().take_while(char::is_ascii_digit).collect();
    let n = leading.parse::<i64>().unwrap_or(0);
    if label.contains("weeks") {
        n as f64
    } else if label.contains("months") {
        n as f64 * WEEKS_PER_MONTH
    } else if label.contains("years") {
        (n * WEEKS_PER_YEAR) as f64
    } else {
        0.0
    }
}

/// Status of a pediatric dose given how far past its nominal age the child is.
fn classify(current_weeks: f64, band_weeks: f64) -> (VaccineStatus, Priority) {
    if current_weeks >= band_weeks {
        if current_weeks <= band_weeks + DUE_WEEKS {
            (VaccineStatus::Due, Priority::High)
        } else if current_weeks <= band_weeks + GRACE_WEEKS {
            (VaccineStatus::Overdue, Priority::High)
        } else {
            (VaccineStatus::Completed, Priority::Low)
        }
    } else {
        (VaccineStatus::Upcoming, Priority::Medium)
    }
}

fn visible(current_weeks: f64, band_weeks: f64) -> bool {
    current_weeks >= band_weeks - LEAD_WEEKS && current_weeks <= band_weeks + GRACE_WEEKS
}

fn women_dose(index: usize) -> (VaccineStatus, Priority) {
    match index {
        0 | 1 => (VaccineStatus::Due, Priority::High),
        2 | 3 => (VaccineStatus::Upcoming, Priority::Medium),
        _ => (VaccineStatus::Upcoming, Priority::Low),
    }
}

/// Vaccines relevant at `age_weeks` weeks past `age_years` whole years.
pub fn vaccination_schedule(age_weeks: i64, age_years: i64) -> Result<Vec<VaccinationEntry>, AgeError> {
    AgeError::check_non_negative("age in weeks", age_weeks)?;
    AgeError::check_non_negative("age in years", age_years)?;

    let current_weeks = age_weeks.saturating_add(age_years.saturating_mul(WEEKS_PER_YEAR)) as f64;
    let mut entries = Vec::new();

    for band in &PEDIATRIC_BANDS {
        let band_weeks = label_weeks(band.label);
        if !visible(current_weeks, band_weeks) {
            continue;
        }
        let status = classify(current_weeks, band_weeks);
        entries.extend(
            band.vaccines
                .iter()
                .map(|v| VaccinationEntry::new(v, band.label, status, Category::Mandatory)),
        );
    }

    if (WOMEN_MIN_YEARS..=WOMEN_MAX_YEARS).contains(&age_years) {
        entries.extend(WOMEN_BLOCK.vaccines.iter().enumerate().map(|(i, v)| {
            VaccinationEntry::new(v, WOMEN_BLOCK.label, women_dose(i), Category::Mandatory)
        }));
    }

    if age_years >= ADULT_MIN_YEARS {
        if let Some(bracket) = ADULT_BRACKETS.iter().find(|b| b.contains(age_years)) {
            entries.extend(bracket.vaccines.iter().map(|(category, v)| {
                let status = match category {
                    Category::Mandatory => (VaccineStatus::Due, Priority::High),
                    Category::Emergency => (VaccineStatus::Upcoming, Priority::High),
                    Category::Recommended => (VaccineStatus::Upcoming, Priority::Medium),
                };
                VaccinationEntry::new(v, bracket.label, status, *category)
            }));
        }

        entries.extend(EMERGENCY.iter().map(|(label, v)| {
            VaccinationEntry::new(
                v,
                *label,
                (VaccineStatus::Upcoming, Priority::High),
                Category::Emergency,
            )
        }));
    }

    trace!(age_weeks, age_years, entries = entries.len(), "built vaccination schedule");
    Ok(entries)
}

const fn vaccine(en: &'static str, bn: &'static str, guide_en: &'static str, guide_bn: &'static str) -> Vaccine {
    Vaccine {
        name: Bilingual::new(en, bn),
        guidance: Bilingual::new(guide_en, guide_bn),
    }
}

static PEDIATRIC_BANDS: [Band; 10] = [
    Band {
        label: "0 weeks",
        vaccines: &[
            vaccine(
                "BCG (Bacillus Calmette-Guérin)",
                "বিসিজি (ব্যাসিলাস ক্যালমেট-গুয়েরিন)",
                "Protects against tuberculosis. Given at birth or as soon as possible after birth.",
                "যক্ষ্মা থেকে সুরক্ষা দেয়। জন্মের সময় বা জন্মের পর যত তাড়াতাড়ি সম্ভব দেওয়া হয়।",
            ),
            vaccine(
                "Oral Polio Vaccine (OPV) 0",
                "ওরাল পোলিও ভ্যাকসিন (ওপিভি) ০",
                "First dose of polio vaccine. Essential for polio prevention.",
                "পোলিও ভ্যাকসিনের প্রথম ডোজ। পোলিও প্রতিরোধের জন্য অপরিহার্য।",
            ),
        ],
    },
    Band {
        label: "6 weeks",
        vaccines: &[
            vaccine(
                "Pentavalent 1 (DPT + HepB + Hib)",
                "পেন্টাভ্যালেন্ট ১ (ডিপিটি + হেপবি + হিব)",
                "Protects against Diphtheria, Pertussis, Tetanus, Hepatitis B, and Haemophilus influenzae type b.",
                "ডিপথেরিয়া, পারটুসিস, টিটেনাস, হেপাটাইটিস বি এবং হেমোফিলাস ইনফ্লুয়েঞ্জা টাইপ বি থেকে সুরক্ষা দেয়।",
            ),
            vaccine(
                "OPV 1",
                "ওপিভি ১",
                "Second dose of polio vaccine. Maintains polio immunity.",
                "পোলিও ভ্যাকসিনের দ্বিতীয় ডোজ। পোলিও প্রতিরোধ ক্ষমতা বজায় রাখে।",
            ),
            vaccine(
                "PCV 1 (Pneumococcal Conjugate Vaccine)",
                "পিসিভি ১ (নিউমোকোকাল কনজুগেট ভ্যাকসিন)",
                "Protects against pneumococcal diseases including pneumonia and meningitis.",
                "নিউমোনিয়া এবং মেনিনজাইটিস সহ নিউমোকোকাল রোগ থেকে সুরক্ষা দেয়।",
            ),
        ],
    },
    Band {
        label: "10 weeks",
        vaccines: &[
            vaccine(
                "Pentavalent 2 (DPT + HepB + Hib)",
                "পেন্টাভ্যালেন্ট ২ (ডিপিটি + হেপবি + হিব)",
                "Second dose of pentavalent vaccine. Boosts immunity against 5 diseases.",
                "পেন্টাভ্যালেন্ট ভ্যাকসিনের দ্বিতীয় ডোজ। ৫টি রোগের বিরুদ্ধে প্রতিরোধ ক্ষমতা বাড়ায়।",
            ),
            vaccine(
                "OPV 2",
                "ওপিভি ২",
                "Third dose of polio vaccine. Critical for polio eradication.",
                "পোলিও ভ্যাকসিনের তৃতীয় ডোজ। পোলিও নির্মূলের জন্য গুরুত্বপূর্ণ।",
            ),
            vaccine(
                "PCV 2",
                "পিসিভি ২",
                "Second dose of pneumococcal vaccine. Strengthens protection against pneumonia.",
                "নিউমোকোকাল ভ্যাকসিনের দ্বিতীয় ডোজ। নিউমোনিয়া থেকে সুরক্ষা শক্তিশালী করে।",
            ),
        ],
    },
    Band {
        label: "14 weeks",
        vaccines: &[
            vaccine(
                "Pentavalent 3 (DPT + HepB + Hib)",
                "পেন্টাভ্যালেন্ট ৩ (ডিপিটি + হেপবি + হিব)",
                "Final dose of primary pentavalent series. Completes basic immunization.",
                "প্রাথমিক পেন্টাভ্যালেন্ট সিরিজের শেষ ডোজ। মৌলিক টিকাদান সম্পূর্ণ করে।",
            ),
            vaccine(
                "OPV 3",
                "ওপিভি ৩",
                "Fourth dose of polio vaccine. Ensures complete polio protection.",
                "পোলিও ভ্যাকসিনের চতুর্থ ডোজ। সম্পূর্ণ পোলিও সুরক্ষা নিশ্চিত করে।",
            ),
            vaccine(
                "IPV (Inactivated Polio Vaccine)",
                "আইপিভি (ইনঅ্যাকটিভেটেড পোলিও ভ্যাকসিন)",
                "Injectable polio vaccine. Provides additional protection against polio.",
                "ইনজেকশনযোগ্য পোলিও ভ্যাকসিন। পোলিও থেকে অতিরিক্ত সুরক্ষা প্রদান করে।",
            ),
        ],
    },
    Band {
        label: "9 months",
        vaccines: &[
            vaccine(
                "MR 1 (Measles and Rubella)",
                "এমআর ১ (হাম ও রুবেলা)",
                "Protects against measles and rubella. Critical for preventing these serious diseases.",
                "হাম ও রুবেলা থেকে সুরক্ষা দেয়। এই গুরুতর রোগ প্রতিরোধের জন্য অপরিহার্য।",
            ),
            vaccine(
                "PCV 3",
                "পিসিভি ৩",
                "Final dose of pneumococcal vaccine. Completes pneumococcal protection.",
                "নিউমোকোকাল ভ্যাকসিনের শেষ ডোজ। নিউমোকোকাল সুরক্ষা সম্পূর্ণ করে।",
            ),
        ],
    },
    Band {
        label: "10 months",
        vaccines: &[vaccine(
            "Measles (Separate dose)",
            "হাম (পৃথক ডোজ)",
            "Additional measles vaccine dose given separately after MR vaccine for enhanced protection.",
            "এমআর ভ্যাকসিনের পর পৃথকভাবে দেওয়া অতিরিক্ত হাম ভ্যাকসিন ডোজ যা সুরক্ষা বাড়ায়।",
        )],
    },
    Band {
        label: "18 months",
        vaccines: &[
            vaccine(
                "DPT Booster 1",
                "ডিপিটি বুস্টার ১",
                "Booster dose for Diphtheria, Pertussis, and Tetanus. Maintains immunity.",
                "ডিপথেরিয়া, পারটুসিস এবং টিটেনাসের জন্য বুস্টার ডোজ। প্রতিরোধ ক্ষমতা বজায় রাখে।",
            ),
            vaccine(
                "OPV Booster 1",
                "ওপিভি বুস্টার ১",
                "Booster dose of polio vaccine. Ensures continued polio protection.",
                "পোলিও ভ্যাকসিনের বুস্টার ডোজ। অব্যাহত পোলিও সুরক্ষা নিশ্চিত করে।",
            ),
        ],
    },
    Band {
        label: "4-5 years",
        vaccines: &[vaccine(
            "MR 2 (Measles and Rubella)",
            "এমআর ২ (হাম ও রুবেলা)",
            "Second dose of measles and rubella vaccine. Ensures lifelong protection.",
            "হাম ও রুবেলা ভ্যাকসিনের দ্বিতীয় ডোজ। আজীবন সুরক্ষা নিশ্চিত করে।",
        )],
    },
    Band {
        label: "10 years",
        vaccines: &[vaccine(
            "Td (Tetanus and Diphtheria)",
            "টিডি (টিটেনাস ও ডিপথেরিয়া)",
            "Protects against tetanus and diphtheria. Important for school-age children.",
            "টিটেনাস ও ডিপথেরিয়া থেকে সুরক্ষা দেয়। স্কুল-বয়সী শিশুদের জন্য গুরুত্বপূর্ণ।",
        )],
    },
    Band {
        label: "15 years",
        vaccines: &[vaccine(
            "Td Booster",
            "টিডি বুস্টার",
            "Booster dose for tetanus and diphtheria. Maintains protection into adulthood.",
            "টিটেনাস ও ডিপথেরিয়ার জন্য বুস্টার ডোজ। প্রাপ্তবয়স্ক হওয়া পর্যন্ত সুরক্ষা বজায় রাখে।",
        )],
    },
];

static WOMEN_BLOCK: Band = Band {
    label: "15-49 years (Women)",
    vaccines: &[
        vaccine(
            "TT 1 (Tetanus Toxoid) - Women's Vaccine",
            "টিটি ১ (টিটেনাস টক্সয়েড) - মহিলাদের ভ্যাকসিন",
            "First dose of tetanus toxoid for women of childbearing age. Protects against tetanus during pregnancy and childbirth.",
            "সন্তান ধারণক্ষম মহিলাদের জন্য টিটেনাস টক্সয়েডের প্রথম ডোজ। গর্ভাবস্থা ও প্রসবকালে টিটেনাস থেকে সুরক্ষা দেয়।",
        ),
        vaccine(
            "TT 2 (Tetanus Toxoid) - Women's Vaccine",
            "টিটি ২ (টিটেনাস টক্সয়েড) - মহিলাদের ভ্যাকসিন",
            "Second dose of tetanus toxoid. Should be given 4 weeks after TT1 for complete protection.",
            "টিটেনাস টক্সয়েডের দ্বিতীয় ডোজ। সম্পূর্ণ সুরক্ষার জন্য টিটি১ এর ৪ সপ্তাহ পর দেওয়া উচিত।",
        ),
        vaccine(
            "TT 3 (Tetanus Toxoid) - Women's Vaccine",
            "টিটি ৩ (টিটেনাস টক্সয়েড) - মহিলাদের ভ্যাকসিন",
            "Third dose of tetanus toxoid. Provides protection for 5 years.",
            "টিটেনাস টক্সয়েডের তৃতীয় ডোজ। ৫ বছর সুরক্ষা প্রদান করে।",
        ),
        vaccine(
            "TT 4 (Tetanus Toxoid) - Women's Vaccine",
            "টিটি ৪ (টিটেনাস টক্সয়েড) - মহিলাদের ভ্যাকসিন",
            "Fourth dose of tetanus toxoid. Extends protection for 10 years.",
            "টিটেনাস টক্সয়েডের চতুর্থ ডোজ। সুরক্ষা ১০ বছর পর্যন্ত বাড়ায়।",
        ),
        vaccine(
            "TT 5 (Tetanus Toxoid) - Women's Vaccine",
            "টিটি ৫ (টিটেনাস টক্সয়েড) - মহিলাদের ভ্যাকসিন",
            "Fifth and final dose of tetanus toxoid. Provides lifelong protection against tetanus.",
            "টিটেনাস টক্সয়েডের পঞ্চম ও শেষ ডোজ। টিটেনাস থেকে আজীবন সুরক্ষা প্রদান করে।",
        ),
        vaccine(
            "MR (Measles and Rubella) - Women's Vaccine",
            "এমআর (হাম ও রুবেলা) - মহিলাদের ভ্যাকসিন",
            "Measles and rubella vaccine for women of childbearing age. Prevents congenital rubella syndrome in newborns.",
            "সন্তান ধারণক্ষম মহিলাদের জন্য হাম ও রুবেলা ভ্যাকসিন। নবজাতকের মধ্যে জন্মগত রুবেলা সিনড্রোম প্রতিরোধ করে।",
        ),
        vaccine(
            "HPV (Human Papillomavirus) - Women's Vaccine",
            "এইচপিভি (হিউম্যান প্যাপিলোমাভাইরাস) - মহিলাদের ভ্যাকসিন",
            "HPV vaccine. Protects against cervical cancer.",
            "এইচপিভি ভ্যাকসিন জরায়ুর ক্যান্সার থেকে সুরক্ষা দেয়।",
        ),
    ],
};

static ADULT_BRACKETS: [Bracket; 4] = [
    Bracket {
        label: "19-26 years",
        min_years: 19,
        max_years: Some(26),
        vaccines: &[
            (
                Category::Mandatory,
                vaccine(
                    "Td Booster (Tetanus & Diphtheria) - Mandatory",
                    "টিডি বুস্টার (টিটেনাস ও ডিপথেরিয়া) - বাধ্যতামূলক",
                    "Mandatory booster for tetanus and diphtheria. Required for college admission and employment.",
                    "টিটেনাস ও ডিপথেরিয়ার জন্য বাধ্যতামূলক বুস্টার। কলেজে ভর্তি ও চাকরির জন্য প্রয়োজনীয়।",
                ),
            ),
            (
                Category::Recommended,
                vaccine(
                    "MMR (Measles, Mumps, Rubella) - Recommended",
                    "এমএমআর (হাম, গালফোলা, রুবেলা) - সুপারিশকৃত",
                    "Recommended for adults who haven't received MMR vaccine. Prevents outbreaks in college settings.",
                    "যারা এমএমআর ভ্যাকসিন পায়নি তাদের জন্য সুপারিশকৃত। কলেজে রোগের প্রাদুর্ভাব প্রতিরোধ করে।",
                ),
            ),
            (
                Category::Recommended,
                vaccine(
                    "Varicella (Chickenpox) - Recommended",
                    "ভ্যারিসেলা (চিকেনপক্স) - সুপারিশকৃত",
                    "Recommended for adults who haven't had chickenpox. Prevents severe complications in adults.",
                    "যারা চিকেনপক্স হয়নি তাদের জন্য সুপারিশকৃত। প্রাপ্তবয়স্কদের মধ্যে গুরুতর জটিলতা প্রতিরোধ করে।",
                ),
            ),
            (
                Category::Recommended,
                vaccine(
                    "Hepatitis B - Recommended",
                    "হেপাটাইটিস বি - সুপারিশকৃত",
                    "Recommended for adults at risk of hepatitis B infection. Important for healthcare workers.",
                    "হেপাটাইটিস বি সংক্রমণের ঝুঁকিতে থাকা প্রাপ্তবয়স্কদের জন্য সুপারিশকৃত। স্বাস্থ্যসেবা কর্মীদের জন্য গুরুত্বপূর্ণ।",
                ),
            ),
        ],
    },
    Bracket {
        label: "27-49 years",
        min_years: 27,
        max_years: Some(49),
        vaccines: &[
            (
                Category::Mandatory,
                vaccine(
                    "Td Booster (every 10 years) - Mandatory",
                    "টিডি বুস্টার (প্রতি ১০ বছর অন্তর) - বাধ্যতামূলক",
                    "Mandatory tetanus and diphtheria booster every 10 years. Required for workplace safety.",
                    "প্রতি ১০ বছর অন্তর বাধ্যতামূলক টিটেনাস ও ডিপথেরিয়া বুস্টার। কর্মক্ষেত্রে নিরাপত্তার জন্য প্রয়োজনীয়।",
                ),
            ),
            (
                Category::Recommended,
                vaccine(
                    "Influenza (annually) - Recommended",
                    "ইনফ্লুয়েঞ্জা (বার্ষিক) - সুপারিশকৃত",
                    "Annual flu vaccine recommended for all adults. Essential for those with chronic conditions.",
                    "সকল প্রাপ্তবয়স্কের জন্য বার্ষিক ফ্লু ভ্যাকসিন সুপারিশকৃত। দীর্ঘস্থায়ী রোগে আক্রান্তদের জন্য অপরিহার্য।",
                ),
            ),
            (
                Category::Recommended,
                vaccine(
                    "Pneumococcal (PCV13/PPSV23) - Recommended",
                    "নিউমোকোকাল (পিসিভি১৩/পিপিএসভি২৩) - সুপারিশকৃত",
                    "Recommended for adults with chronic conditions. Protects against pneumonia and related infections.",
                    "দীর্ঘস্থায়ী রোগে আক্রান্ত প্রাপ্তবয়স্কদের জন্য সুপারিশকৃত। নিউমোনিয়া ও সম্পর্কিত সংক্রমণ থেকে সুরক্ষা দেয়।",
                ),
            ),
            (
                Category::Recommended,
                vaccine(
                    "Hepatitis A - Recommended",
                    "হেপাটাইটিস এ - সুপারিশকৃত",
                    "Recommended for travelers and those at risk. Prevents food and water-borne hepatitis.",
                    "ভ্রমণকারী ও ঝুঁকিতে থাকা ব্যক্তিদের জন্য সুপারিশকৃত। খাদ্য ও পানি-বাহিত হেপাটাইটিস প্রতিরোধ করে।",
                ),
            ),
        ],
    },
    Bracket {
        label: "50-64 years",
        min_years: 50,
        max_years: Some(64),
        vaccines: &[
            (
                Category::Mandatory,
                vaccine(
                    "Td Booster (every 10 years) - Mandatory",
                    "টিডি বুস্টার (প্রতি ১০ বছর অন্তর) - বাধ্যতামূলক",
                    "Mandatory tetanus and diphtheria booster. Critical for workplace and home safety.",
                    "বাধ্যতামূলক টিটেনাস ও ডিপথেরিয়া বুস্টার। কর্মক্ষেত্রে ও বাড়িতে নিরাপত্তার জন্য গুরুত্বপূর্ণ।",
                ),
            ),
            (
                Category::Mandatory,
                vaccine(
                    "Influenza (annually) - Mandatory",
                    "ইনফ্লুয়েঞ্জা (বার্ষিক) - বাধ্যতামূলক",
                    "Mandatory annual flu vaccine for this age group. High risk of complications.",
                    "এই বয়সের গ্রুপের জন্য বাধ্যতামূলক বার্ষিক ফ্লু ভ্যাকসিন। জটিলতার উচ্চ ঝুঁকি।",
                ),
            ),
            (
                Category::Mandatory,
                vaccine(
                    "Pneumococcal (PCV13/PPSV23) - Mandatory",
                    "নিউমোকোকাল (পিসিভি১৩/পিপিএসভি২৩) - বাধ্যতামূলক",
                    "Mandatory pneumococcal vaccine. High risk of pneumonia in this age group.",
                    "বাধ্যতামূলক নিউমোকোকাল ভ্যাকসিন। এই বয়সের গ্রুপে নিউমোনিয়ার উচ্চ ঝুঁকি।",
                ),
            ),
            (
                Category::Recommended,
                vaccine(
                    "Shingles (Zoster) - Recommended",
                    "শিঙ্গলস (জোস্টার) - সুপারিশকৃত",
                    "Recommended for adults 50+. Prevents shingles and post-herpetic neuralgia.",
                    "৫০+ প্রাপ্তবয়স্কদের জন্য সুপারিশকৃত। শিঙ্গলস ও পোস্ট-হারপেটিক নিউরালজিয়া প্রতিরোধ করে।",
                ),
            ),
        ],
    },
    Bracket {
        label: "65+ years",
        min_years: 65,
        max_years: None,
        vaccines: &[
            (
                Category::Mandatory,
                vaccine(
                    "Td Booster (every 10 years) - Mandatory",
                    "টিডি বুস্টার (প্রতি ১০ বছর অন্তর) - বাধ্যতামূলক",
                    "Mandatory tetanus and diphtheria booster. Essential for senior safety and independence.",
                    "বাধ্যতামূলক টিটেনাস ও ডিপথেরিয়া বুস্টার। বয়স্কদের নিরাপত্তা ও স্বাধীনতার জন্য অপরিহার্য।",
                ),
            ),
            (
                Category::Mandatory,
                vaccine(
                    "Influenza (annually) - Mandatory",
                    "ইনফ্লুয়েঞ্জা (বার্ষিক) - বাধ্যতামূলক",
                    "Mandatory annual flu vaccine. Seniors are at highest risk of complications.",
                    "বাধ্যতামূলক বার্ষিক ফ্লু ভ্যাকসিন। বয়স্কদের মধ্যে জটিলতার সর্বোচ্চ ঝুঁকি।",
                ),
            ),
            (
                Category::Mandatory,
                vaccine(
                    "Pneumococcal (PCV13/PPSV23) - Mandatory",
                    "নিউমোকোকাল (পিসিভি১৩/পিপিএসভি২৩) - বাধ্যতামূলক",
                    "Mandatory pneumococcal vaccine. Critical for preventing pneumonia in seniors.",
                    "বাধ্যতামূলক নিউমোকোকাল ভ্যাকসিন। বয়স্কদের মধ্যে নিউমোনিয়া প্রতিরোধের জন্য গুরুত্বপূর্ণ।",
                ),
            ),
            (
                Category::Mandatory,
                vaccine(
                    "Shingles (Zoster) - Mandatory",
                    "শিঙ্গলস (জোস্টার) - বাধ্যতামূলক",
                    "Mandatory shingles vaccine for seniors. High risk of complications.",
                    "বয়স্কদের জন্য বাধ্যতামূলক শিঙ্গলস ভ্যাকসিন। জটিলতার উচ্চ ঝুঁকি।",
                ),
            ),
        ],
    },
];

static EMERGENCY: [(&str, Vaccine); 3] = [
    (
        "As per guidelines",
        vaccine(
            "COVID-19 (as per guidelines) - Emergency",
            "কোভিড-১৯ (নির্দেশিকা অনুযায়ী) - জরুরি",
            "Emergency vaccine during pandemic. Follow national and international guidelines for booster doses.",
            "মহামারীর সময় জরুরি ভ্যাকসিন। বুস্টার ডোজের জন্য জাতীয় ও আন্তর্জাতিক নির্দেশিকা অনুসরণ করুন।",
        ),
    ),
    (
        "If exposed to rabies",
        vaccine(
            "Rabies (if exposed) - Emergency",
            "রেবিস (সংস্পর্শে এলে) - জরুরি",
            "Emergency vaccine if exposed to rabies. Must be given immediately after exposure.",
            "রেবিস সংস্পর্শে এলে জরুরি ভ্যাকসিন। সংস্পর্শের পর অবিলম্বে দেওয়া আবশ্যক।",
        ),
    ),
    (
        "If injured and not up to date",
        vaccine(
            "Tetanus (if injured) - Emergency",
            "টিটেনাস (আঘাত পেলে) - জরুরি",
            "Emergency tetanus vaccine if injured and not up to date with Td boosters.",
            "আঘাত পেলে এবং টিডি বুস্টার আপ টু ডেট না থাকলে জরুরি টিটেনাস ভ্যাকসিন।",
        ),
    ),
];
