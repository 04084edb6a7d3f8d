//! Bangladesh legal rights and obligations by age.
//!
//! Every topic has one or more tiers, each opening at a minimum age in whole
//! years. A topic appears once its lowest tier is reached and always shows the
//! text of the highest tier reached, so older ages only ever add topics or
//! replace a topic's text.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::trace;

use crate::error::AgeError;
use crate::locale::{Bilingual, Locale};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum LegalTopic {
    Citizenship,
    Inheritance,
    IdDocuments,
    Financial,
    Marriage,
    Voting,
    Business,
    Driving,
    Alcohol,
    Tobacco,
    ProfessionalLicenses,
    Education,
    Political,
    Retirement,
    Employment,
    Military,
    Medical,
    Contracts,
    CriminalResponsibility,
    SpecialRights,
    LegalAssistance,
    Healthcare,
    DigitalRights,
}

impl LegalTopic {
    pub fn title(self) -> Bilingual {
        use LegalTopic::*;
        match self {
            Citizenship => Bilingual::new("Citizenship", "নাগরিকত্ব"),
            Inheritance => Bilingual::new("Inheritance", "উত্তরাধিকার"),
            IdDocuments => Bilingual::new("ID Documents", "পরিচয়পত্র"),
            Financial => Bilingual::new("Financial & Property", "আর্থিক ও সম্পত্তি"),
            Marriage => Bilingual::new("Marriage", "বিবাহ"),
            Voting => Bilingual::new("Voting", "ভোটাধিকার"),
            Business => Bilingual::new("Business & Licenses", "ব্যবসা ও লাইসেন্স"),
            Driving => Bilingual::new("Driving", "ড্রাইভিং"),
            Alcohol => Bilingual::new("Alcohol", "মদ"),
            Tobacco => Bilingual::new("Tobacco", "তামাক"),
            ProfessionalLicenses => Bilingual::new("Professional Licenses", "পেশাদার লাইসেন্স"),
            Education => Bilingual::new("Education", "শিক্ষা"),
            Political => Bilingual::new("Political Rights", "রাজনৈতিক অধিকার"),
            Retirement => Bilingual::new("Retirement", "অবসর"),
            Employment => Bilingual::new("Employment", "কর্মসংস্থান"),
            Military => Bilingual::new("Military", "সামরিক"),
            Medical => Bilingual::new("Medical Consent", "চিকিৎসা সম্মতি"),
            Contracts => Bilingual::new("Contracts", "চুক্তি"),
            CriminalResponsibility => Bilingual::new("Criminal Responsibility", "ফৌজদারি দায়"),
            SpecialRights => Bilingual::new("Special Rights & Benefits", "বিশেষ অধিকার ও সুবিধা"),
            LegalAssistance => Bilingual::new("Legal Aid & Justice", "আইনি সহায়তা ও বিচার"),
            Healthcare => Bilingual::new("Healthcare", "স্বাস্থ্যসেবা"),
            DigitalRights => Bilingual::new("Digital Rights", "ডিজিটাল অধিকার"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegalInfoEntry {
    pub en: &'static str,
    pub bn: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constitutional_reference: Option<Bilingual>,
}

impl LegalInfoEntry {
    pub fn text(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::En => self.en,
            Locale::Bn => self.bn,
        }
    }
}

/// Topics in their display order.
pub type LegalInfo = BTreeMap<LegalTopic, LegalInfoEntry>;

struct Tier {
    min_age: i64,
    text: Bilingual,
    reference: Bilingual,
}

struct Rule {
    topic: LegalTopic,
    /// Highest `min_age` first.
    tiers: &'static [Tier],
}

impl Rule {
    fn applicable(&self, age_years: i64) -> Option<&'static Tier> {
        self.tiers.iter().find(|tier| age_years >= tier.min_age)
    }
}

pub fn legal_info(age_years: i64) -> Result<LegalInfo, AgeError> {
    AgeError::check_non_negative("age in years", age_years)?;

    let info: LegalInfo = RULES
        .iter()
        .filter_map(|rule| {
            rule.applicable(age_years).map(|tier| {
                let entry = LegalInfoEntry {
                    en: tier.text.en,
                    bn: tier.text.bn,
                    constitutional_reference: Some(tier.reference.clone()),
                };
                (rule.topic, entry)
            })
        })
        .collect();

    trace!(age_years, topics = info.len(), "resolved legal info");
    Ok(info)
}

const fn tier(min_age: i64, en: &'static str, bn: &'static str, ref_en: &'static str, ref_bn: &'static str) -> Tier {
    Tier {
        min_age,
        text: Bilingual::new(en, bn),
        reference: Bilingual::new(ref_en, ref_bn),
    }
}

static RULES: [Rule; 23] = [
    Rule {
        topic: LegalTopic::Citizenship,
        tiers: &[tier(
            0,
            "Every person born in Bangladesh is a citizen by birth. Basic rights like freedom of speech, assembly, and religion are guaranteed by the constitution.",
            "বাংলাদেশে জন্মগ্রহণকারী প্রতিটি ব্যক্তি জন্মসূত্রে নাগরিক। বাক স্বাধীনতা, সমাবেশ এবং ধর্মের স্বাধীনতার মতো মৌলিক অধিকার সংবিধান দ্বারা নিশ্চিত করা হয়েছে।",
            "Constitution of Bangladesh: Article 6 (Citizenship), Article 27 (Equality before law), Article 39 (Freedom of thought, conscience and speech), Article 37 (Freedom of assembly), Article 41 (Freedom of religion)",
            "বাংলাদেশের সংবিধান: অনুচ্ছেদ ৬ (নাগরিকত্ব), অনুচ্ছেদ ২৭ (আইনের দৃষ্টিতে সমতা), অনুচ্ছেদ ৩৯ (চিন্তা, বিবেক ও বাক স্বাধীনতা), অনুচ্ছেদ ৩৭ (সমাবেশের স্বাধীনতা), অনুচ্ছেদ ৪১ (ধর্মীয় স্বাধীনতা)",
        )],
    },
    Rule {
        topic: LegalTopic::Inheritance,
        tiers: &[tier(
            0,
            "Inheritance laws in Bangladesh are primarily based on religious personal laws (e.g., Muslim, Hindu, Christian laws).",
            "বাংলাদেশে উত্তরাধিকার আইন প্রধানত ধর্মীয় ব্যক্তিগত আইনের (যেমন মুসলিম, হিন্দু, খ্রিস্টান আইন) উপর ভিত্তি করে।",
            "Constitution of Bangladesh: Article 8 (Fundamental principles), Article 27 (Equality before law), Article 28 (Discrimination on grounds of religion, race, caste, sex or place of birth)",
            "বাংলাদেশের সংবিধান: অনুচ্ছেদ ৮ (মৌলিক নীতি), অনুচ্ছেদ ২৭ (আইনের দৃষ্টিতে সমতা), অনুচ্ছেদ ২৮ (ধর্ম, বর্ণ, জাত, লিঙ্গ বা জন্মস্থানের কারণে বৈষম্য)",
        )],
    },
    Rule {
        topic: LegalTopic::IdDocuments,
        tiers: &[
            tier(
                18,
                "National ID Card (NID) is mandatory for citizens aged 18 and above. Birth registration is required for all ages.",
                "১৮ বছর বা তার বেশি বয়সী নাগরিকদের জন্য জাতীয় পরিচয়পত্র (NID) বাধ্যতামূলক। সকল বয়সের জন্য জন্ম নিবন্ধন প্রয়োজন।",
                "Constitution of Bangladesh: Article 6 (Citizenship), Article 27 (Equality before law), National Identity Registration Act 2010",
                "বাংলাদেশের সংবিধান: অনুচ্ছেদ ৬ (নাগরিকত্ব), অনুচ্ছেদ ২৭ (আইনের দৃষ্টিতে সমতা), জাতীয় পরিচয় নিবন্ধন আইন ২০১০",
            ),
            tier(
                0,
                "Birth registration is required for all ages.",
                "সকল বয়সের জন্য জন্ম নিবন্ধন প্রয়োজন।",
                "Constitution of Bangladesh: Article 6 (Citizenship), Birth and Death Registration Act 2004",
                "বাংলাদেশের সংবিধান: অনুচ্ছেদ ৬ (নাগরিকত্ব), জন্ম ও মৃত্যু নিবন্ধন আইন ২০০৪",
            ),
        ],
    },
    Rule {
        topic: LegalTopic::Financial,
        tiers: &[tier(
            18,
            "Can open bank accounts, own property, enter into contracts, and take loans. Can also be held financially liable.",
            "ব্যাংক অ্যাকাউন্ট খুলতে, সম্পত্তি মালিক হতে, চুক্তি করতে এবং ঋণ নিতে পারে। আর্থিকভাবে দায়বদ্ধও হতে পারে।",
            "Constitution of Bangladesh: Article 42 (Right to property), Article 27 (Equality before law), Contract Act 1872, Transfer of Property Act 1882",
            "বাংলাদেশের সংবিধান: অনুচ্ছেদ ৪২ (সম্পত্তির অধিকার), অনুচ্ছেদ ২৭ (আইনের দৃষ্টিতে সমতা), চুক্তি আইন ১৮৭২, সম্পত্তি হস্তান্তর আইন ১৮৮২",
        )],
    },
    Rule {
        topic: LegalTopic::Marriage,
        tiers: &[
            tier(
                21,
                "Minimum legal age for marriage is 21 for males and 18 for females. Laws vary based on religion.",
                "বিবাহের জন্য সর্বনিম্ন আইনি বয়স পুরুষদের জন্য ২১ বছর এবং মহিলাদের জন্য ১৮ বছর। আইন ধর্ম অনুযায়ী ভিন্ন হয়।",
                "Constitution of Bangladesh: Article 8 (Fundamental principles), Article 27 (Equality before law), Child Marriage Restraint Act 2017, Muslim Family Laws Ordinance 1961",
                "বাংলাদেশের সংবিধান: অনুচ্ছেদ ৮ (মৌলিক নীতি), অনুচ্ছেদ ২৭ (আইনের দৃষ্টিতে সমতা), শিশু বিবাহ নিরোধ আইন ২০১৭, মুসলিম পারিবারিক আইন অধ্যাদেশ ১৯৬১",
            ),
            tier(
                18,
                "Minimum legal age for marriage is 18 for females. Laws vary based on religion.",
                "বিবাহের জন্য সর্বনিম্ন আইনি বয়স মহিলাদের জন্য ১৮ বছর। আইন ধর্ম অনুযায়ী ভিন্ন হয়।",
                "Constitution of Bangladesh: Article 8 (Fundamental principles), Article 27 (Equality before law), Child Marriage Restraint Act 2017, Muslim Family Laws Ordinance 1961",
                "বাংলাদেশের সংবিধান: অনুচ্ছেদ ৮ (মৌলিক নীতি), অনুচ্ছেদ ২৭ (আইনের দৃষ্টিতে সমতা), শিশু বিবাহ নিরোধ আইন ২০১৭, মুসলিম পারিবারিক আইন অধ্যাদেশ ১৯৬১",
            ),
        ],
    },
    Rule {
        topic: LegalTopic::Voting,
        tiers: &[tier(
            18,
            "Eligible to vote in national and local elections.",
            "জাতীয় ও স্থানীয় নির্বাচনে ভোট দেওয়ার যোগ্য।",
            "Constitution of Bangladesh: Article 122 (Qualifications for election to Parliament), Article 27 (Equality before law), Representation of the People Order 1972",
            "বাংলাদেশের সংবিধান: অনুচ্ছেদ ১২২ (সংসদে নির্বাচনের যোগ্যতা), অনুচ্ছেদ ২৭ (আইনের দৃষ্টিতে সমতা), জনপ্রতিনিধিত্ব আদেশ ১৯৭২",
        )],
    },
    Rule {
        topic: LegalTopic::Business,
        tiers: &[tier(
            18,
            "Can obtain trade licenses and register businesses.",
            "ট্রেড লাইসেন্স এবং ব্যবসা নিবন্ধন করতে পারে।",
            "Constitution of Bangladesh: Article 40 (Freedom of profession, occupation or business), Article 27 (Equality before law), Trade Organization Act 1961",
            "বাংলাদেশের সংবিধান: অনুচ্ছেদ ৪০ (পেশা, বৃত্তি বা ব্যবসার স্বাধীনতা), অনুচ্ছেদ ২৭ (আইনের দৃষ্টিতে সমতা), বাণিজ্য সংগঠন আইন ১৯৬১",
        )],
    },
    Rule {
        topic: LegalTopic::Driving,
        tiers: &[tier(
            18,
            "Eligible for a driving license for private vehicles. Commercial vehicle licenses require higher age.",
            "ব্যক্তিগত গাড়ির জন্য ড্রাইভিং লাইসেন্সের যোগ্য। বাণিজ্যিক গাড়ির লাইসেন্সের জন্য উচ্চতর বয়স প্রয়োজন।",
            "Constitution of Bangladesh: Article 40 (Freedom of profession, occupation or business), Motor Vehicles Ordinance 1983",
            "বাংলাদেশের সংবিধান: অনুচ্ছেদ ৪০ (পেশা, বৃত্তি বা ব্যবসার স্বাধীনতা), মোটর যানবাহন অধ্যাদেশ ১৯৮৩",
        )],
    },
    Rule {
        topic: LegalTopic::Alcohol,
        tiers: &[tier(
            21,
            "Legal age for alcohol consumption and purchase (for non-Muslims and specific licensed premises).",
            "মদ পান এবং কেনার আইনি বয়স (অমুসলিম এবং নির্দিষ্ট লাইসেন্সপ্রাপ্ত প্রতিষ্ঠানের জন্য)।",
            "Constitution of Bangladesh: Article 41 (Freedom of religion), Article 27 (Equality before law), Intoxicating Substances Act 1990",
            "বাংলাদেশের সংবিধান: অনুচ্ছেদ ৪১ (ধর্মীয় স্বাধীনতা), অনুচ্ছেদ ২৭ (আইনের দৃষ্টিতে সমতা), মাদকদ্রব্য আইন ১৯৯০",
        )],
    },
    Rule {
        topic: LegalTopic::Tobacco,
        tiers: &[tier(
            18,
            "Legal age for tobacco consumption and purchase.",
            "তামাক সেবন এবং কেনার আইনি বয়স।",
            "Constitution of Bangladesh: Article 15 (Fundamental responsibility of the State), Smoking and Tobacco Products Usage (Control) Act 2005",
            "বাংলাদেশের সংবিধান: অনুচ্ছেদ ১৫ (রাষ্ট্রের মৌলিক দায়িত্ব), ধূমপান ও তামাকজাত দ্রব্য ব্যবহার (নিয়ন্ত্রণ) আইন ২০০৫",
        )],
    },
    Rule {
        topic: LegalTopic::ProfessionalLicenses,
        tiers: &[tier(
            18,
            "Can apply for various professional licenses (e.g., medical, engineering) upon meeting educational and other requirements.",
            "শিক্ষাগত এবং অন্যান্য প্রয়োজনীয়তা পূরণ সাপেক্ষে বিভিন্ন পেশাদার লাইসেন্সের (যেমন চিকিৎসা, প্রকৌশল) জন্য আবেদন করতে পারে।",
            "Constitution of Bangladesh: Article 40 (Freedom of profession, occupation or business), Article 27 (Equality before law), Bangladesh Medical and Dental Council Act 2010",
            "বাংলাদেশের সংবিধান: অনুচ্ছেদ ৪০ (পেশা, বৃত্তি বা ব্যবসার স্বাধীনতা), অনুচ্ছেদ ২৭ (আইনের দৃষ্টিতে সমতা), বাংলাদেশ মেডিকেল ও ডেন্টাল কাউন্সিল আইন ২০১০",
        )],
    },
    Rule {
        topic: LegalTopic::Education,
        tiers: &[tier(
            0,
            "Right to free and compulsory primary education up to class five. Access to higher education based on merit.",
            "পঞ্চম শ্রেণী পর্যন্ত বিনামূল্যে ও বাধ্যতামূলক প্রাথমিক শিক্ষার অধিকার। মেধার ভিত্তিতে উচ্চশিক্ষার সুযোগ।",
            "Constitution of Bangladesh: Article 17 (Free and compulsory education), Article 27 (Equality before law), Primary Education (Compulsory) Act 1990",
            "বাংলাদেশের সংবিধান: অনুচ্ছেদ ১৭ (বিনামূল্যে ও বাধ্যতামূলক শিক্ষা), অনুচ্ছেদ ২৭ (আইনের দৃষ্টিতে সমতা), প্রাথমিক শিক্ষা (বাধ্যতামূলক) আইন ১৯৯০",
        )],
    },
    Rule {
        topic: LegalTopic::Political,
        tiers: &[tier(
            18,
            "Can participate in political activities, form associations, and stand for elections (subject to other qualifications).",
            "রাজনৈতিক কার্যক্রমে অংশগ্রহণ করতে, সমিতি গঠন করতে এবং নির্বাচনে দাঁড়াতে পারে (অন্যান্য যোগ্যতা সাপেক্ষে)।",
            "Constitution of Bangladesh: Article 38 (Freedom of association), Article 122 (Qualifications for election to Parliament), Article 27 (Equality before law)",
            "বাংলাদেশের সংবিধান: অনুচ্ছেদ ৩৮ (সংগঠনের স্বাধীনতা), অনুচ্ছেদ ১২২ (সংসদে নির্বাচনের যোগ্যতা), অনুচ্ছেদ ২৭ (আইনের দৃষ্টিতে সমতা)",
        )],
    },
    Rule {
        topic: LegalTopic::Retirement,
        tiers: &[tier(
            59,
            "General retirement age for government employees is 59 years (can vary for specific professions).",
            "সরকারি কর্মচারীদের জন্য সাধারণ অবসরের বয়স ৫৯ বছর (নির্দিষ্ট পেশার জন্য ভিন্ন হতে পারে)।",
            "Constitution of Bangladesh: Article 27 (Equality before law), Government Servants (Retirement) Act 1974, Public Service Commission Rules",
            "বাংলাদেশের সংবিধান: অনুচ্ছেদ ২৭ (আইনের দৃষ্টিতে সমতা), সরকারি কর্মচারী (অবসর) আইন ১৯৭৪, সরকারি কর্ম কমিশন বিধিমালা",
        )],
    },
    Rule {
        topic: LegalTopic::Employment,
        tiers: &[
            tier(
                18,
                "Can enter into full-time employment contracts. Child labor laws prohibit employment below 14 years.",
                "পূর্ণকালীন কর্মসংস্থান চুক্তিতে প্রবেশ করতে পারে। ১৪ বছরের নিচে শিশুদের শ্রম আইন দ্বারা নিষিদ্ধ।",
                "Constitution of Bangladesh: Article 40 (Freedom of profession, occupation or business), Article 27 (Equality before law), Labour Act 2006",
                "বাংলাদেশের সংবিধান: অনুচ্ছেদ ৪০ (পেশা, বৃত্তি বা ব্যবসার স্বাধীনতা), অনুচ্ছেদ ২৭ (আইনের দৃষ্টিতে সমতা), শ্রম আইন ২০০৬",
            ),
            tier(
                14,
                "Can engage in light work that does not harm health or education, with restrictions.",
                "স্বাস্থ্য বা শিক্ষার ক্ষতি করে না এমন হালকা কাজ করতে পারে, তবে বিধিনিষেধ সহ।",
                "Constitution of Bangladesh: Article 17 (Free and compulsory education), Article 15 (Fundamental responsibility of the State), Labour Act 2006",
                "বাংলাদেশের সংবিধান: অনুচ্ছেদ ১৭ (বিনামূল্যে ও বাধ্যতামূলক শিক্ষা), অনুচ্ছেদ ১৫ (রাষ্ট্রের মৌলিক দায়িত্ব), শ্রম আইন ২০০৬",
            ),
        ],
    },
    Rule {
        topic: LegalTopic::Military,
        tiers: &[tier(
            18,
            "Eligible to join the armed forces (Army, Navy, Air Force) as a general recruit, subject to physical and educational qualifications.",
            "শারীরিক ও শিক্ষাগত যোগ্যতা সাপেক্ষে সাধারণ নিয়োগ হিসাবে সশস্ত্র বাহিনীতে (সেনাবাহিনী, নৌবাহিনী, বিমান বাহিনী) যোগদানের যোগ্য।",
            "Constitution of Bangladesh: Article 61 (Supreme command of the armed forces), Article 27 (Equality before law), Army Act 1952",
            "বাংলাদেশের সংবিধান: অনুচ্ছেদ ৬১ (সশস্ত্র বাহিনীর সর্বাধিনায়কত্ব), অনুচ্ছেদ ২৭ (আইনের দৃষ্টিতে সমতা), সেনা আইন ১৯৫২",
        )],
    },
    Rule {
        topic: LegalTopic::Medical,
        tiers: &[
            tier(
                18,
                "Can provide consent for medical treatment and procedures.",
                "চিকিৎসা এবং পদ্ধতির জন্য সম্মতি দিতে পারে।",
                "Constitution of Bangladesh: Article 15 (Fundamental responsibility of the State), Article 27 (Equality before law), Medical Practice and Private Clinics and Laboratories (Regulation) Ordinance 1982",
                "বাংলাদেশের সংবিধান: অনুচ্ছেদ ১৫ (রাষ্ট্রের মৌলিক দায়িত্ব), অনুচ্ছেদ ২৭ (আইনের দৃষ্টিতে সমতা), চিকিৎসা অনুশীলন ও বেসরকারি ক্লিনিক ও পরীক্ষাগার (নিয়ন্ত্রণ) অধ্যাদেশ ১৯৮২",
            ),
            tier(
                12,
                "Minors aged 12 and above may provide consent for certain medical treatments, especially related to their own health, but parental consent is often still required for major procedures.",
                "১২ বছর বা তার বেশি বয়সী অপ্রাপ্তবয়স্করা নির্দিষ্ট চিকিৎসার জন্য সম্মতি দিতে পারে, বিশেষ করে তাদের নিজস্ব স্বাস্থ্য সম্পর্কিত, তবে বড় পদ্ধতির জন্য প্রায়শই পিতামাতার সম্মতি এখনও প্রয়োজন।",
                "Constitution of Bangladesh: Article 15 (Fundamental responsibility of the State), Article 17 (Free and compulsory education), Medical Practice and Private Clinics and Laboratories (Regulation) Ordinance 1982",
                "বাংলাদেশের সংবিধান: অনুচ্ছেদ ১৫ (রাষ্ট্রের মৌলিক দায়িত্ব), অনুচ্ছেদ ১৭ (বিনামূল্যে ও বাধ্যতামূলক শিক্ষা), চিকিৎসা অনুশীলন ও বেসরকারি ক্লিনিক ও পরীক্ষাগার (নিয়ন্ত্রণ) অধ্যাদেশ ১৯৮২",
            ),
        ],
    },
    Rule {
        topic: LegalTopic::Contracts,
        tiers: &[tier(
            18,
            "Can legally enter into contracts and agreements.",
            "আইনত চুক্তি এবং চুক্তিতে প্রবেশ করতে পারে।",
            "Constitution of Bangladesh: Article 27 (Equality before law), Article 42 (Right to property), Contract Act 1872",
            "বাংলাদেশের সংবিধান: অনুচ্ছেদ ২৭ (আইনের দৃষ্টিতে সমতা), অনুচ্ছেদ ৪২ (সম্পত্তির অধিকার), চুক্তি আইন ১৮৭২",
        )],
    },
    Rule {
        topic: LegalTopic::CriminalResponsibility,
        tiers: &[
            tier(
                9,
                "A child aged 9 or above can be held criminally responsible if they have attained sufficient maturity of understanding to judge the nature and consequences of their conduct.",
                "৯ বছর বা তার বেশি বয়সী একটি শিশু যদি তার আচরণের প্রকৃতি এবং পরিণতি বিচার করার জন্য পর্যাপ্ত পরিপক্কতা অর্জন করে তবে তাকে ফৌজদারিভাবে দায়ী করা যেতে পারে।",
                "Constitution of Bangladesh: Article 27 (Equality before law), Article 35 (Protection in respect of trial and punishment), Penal Code 1860, Children Act 2013",
                "বাংলাদেশের সংবিধান: অনুচ্ছেদ ২৭ (আইনের দৃষ্টিতে সমতা), অনুচ্ছেদ ৩৫ (বিচার ও শাস্তি সম্পর্কে সুরক্ষা), দণ্ডবিধি ১৮৬০, শিশু আইন ২০১৩",
            ),
            tier(
                7,
                "A child under 9 years of age is generally presumed to be incapable of committing an offense. However, a child between 7 and 9 years may be held responsible if they have attained sufficient maturity of understanding.",
                "৯ বছরের কম বয়সী একটি শিশুকে সাধারণত অপরাধ করতে অক্ষম বলে ধরে নেওয়া হয়। তবে, ৭ থেকে ৯ বছরের মধ্যে একটি শিশু যদি পর্যাপ্ত পরিপক্কতা অর্জন করে তবে তাকে দায়ী করা যেতে পারে।",
                "Constitution of Bangladesh: Article 27 (Equality before law), Article 35 (Protection in respect of trial and punishment), Penal Code 1860, Children Act 2013",
                "বাংলাদেশের সংবিধান: অনুচ্ছেদ ২৭ (আইনের দৃষ্টিতে সমতা), অনুচ্ছেদ ৩৫ (বিচার ও শাস্তি সম্পর্কে সুরক্ষা), দণ্ডবিধি ১৮৬০, শিশু আইন ২০১৩",
            ),
        ],
    },
    Rule {
        topic: LegalTopic::SpecialRights,
        tiers: &[tier(
            60,
            "Elderly citizens may be eligible for various social safety net programs and benefits.",
            "বয়স্ক নাগরিকরা বিভিন্ন সামাজিক নিরাপত্তা বেষ্টনী কর্মসূচী এবং সুবিধার জন্য যোগ্য হতে পারে।",
            "Constitution of Bangladesh: Article 15 (Fundamental responsibility of the State), Article 27 (Equality before law), Social Safety Net Programs Act 2018",
            "বাংলাদেশের সংবিধান: অনুচ্ছেদ ১৫ (রাষ্ট্রের মৌলিক দায়িত্ব), অনুচ্ছেদ ২৭ (আইনের দৃষ্টিতে সমতা), সামাজিক নিরাপত্তা বেষ্টনী কর্মসূচী আইন ২০১৮",
        )],
    },
    Rule {
        topic: LegalTopic::LegalAssistance,
        tiers: &[tier(
            0,
            "Access to legal aid services for indigent persons is available through the National Legal Aid Services Organization.",
            "জাতীয় আইনগত সহায়তা প্রদান সংস্থা-এর মাধ্যমে দরিদ্র ব্যক্তিদের জন্য আইনি সহায়তা পরিষেবা উপলব্ধ।",
            "Constitution of Bangladesh: Article 27 (Equality before law), Article 35 (Protection in respect of trial and punishment), Legal Aid Services Act 2000",
            "বাংলাদেশের সংবিধান: অনুচ্ছেদ ২৭ (আইনের দৃষ্টিতে সমতা), অনুচ্ছেদ ৩৫ (বিচার ও শাস্তি সম্পর্কে সুরক্ষা), আইনগত সহায়তা পরিষেবা আইন ২০০০",
        )],
    },
    Rule {
        topic: LegalTopic::Healthcare,
        tiers: &[tier(
            0,
            "Right to health services, including access to public hospitals and health centers.",
            "সরকারি হাসপাতাল ও স্বাস্থ্য কেন্দ্র সহ স্বাস্থ্য পরিষেবা পাওয়ার অধিকার।",
            "Constitution of Bangladesh: Article 15 (Fundamental responsibility of the State), Article 27 (Equality before law), Article 18 (Public health and morality)",
            "বাংলাদেশের সংবিধান: অনুচ্ছেদ ১৫ (রাষ্ট্রের মৌলিক দায়িত্ব), অনুচ্ছেদ ২৭ (আইনের দৃষ্টিতে সমতা), অনুচ্ছেদ ১৮ (জনস্বাস্থ্য ও নৈতিকতা)",
        )],
    },
    Rule {
        topic: LegalTopic::DigitalRights,
        tiers: &[tier(
            18,
            "Can legally use social media, online services, and digital platforms, subject to national laws.",
            "জাতীয় আইন সাপেক্ষে সামাজিক মাধ্যম, অনলাইন পরিষেবা এবং ডিজিটাল প্ল্যাটফর্ম আইনত ব্যবহার করতে পারে।",
            "Constitution of Bangladesh: Article 39 (Freedom of thought, conscience and speech), Article 27 (Equality before law), Digital Security Act 2018",
            "বাংলাদেশের সংবিধান: অনুচ্ছেদ ৩৯ (চিন্তা, বিবেক ও বাক স্বাধীনতা), অনুচ্ছেদ ২৭ (আইনের দৃষ্টিতে সমতা), ডিজিটাল নিরাপত্তা আইন ২০১৮",
        )],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    fn topics(age: i64) -> Vec<LegalTopic> {
        legal_info(age).unwrap().into_keys().collect()
    }

    #[test]
    fn newborn_has_universal_rights_only() {
        assert_eq!(
            topics(0),
            vec![
                LegalTopic::Citizenship,
                LegalTopic::Inheritance,
                LegalTopic::IdDocuments,
                LegalTopic::Education,
                LegalTopic::LegalAssistance,
                LegalTopic::Healthcare,
            ]
        );
    }

    #[test]
    fn tiers_pick_highest_threshold_reached() {
        let marriage = |age| legal_info(age).unwrap().get(&LegalTopic::Marriage).map(|e| e.en);
        assert_eq!(marriage(17), None);
        assert!(marriage(18).unwrap().starts_with("Minimum legal age for marriage is 18"));
        assert!(marriage(21).unwrap().starts_with("Minimum legal age for marriage is 21"));

        let criminal = |age| {
            legal_info(age)
                .unwrap()
                .get(&LegalTopic::CriminalResponsibility)
                .map(|e| e.en)
        };
        assert_eq!(criminal(6), None);
        assert!(criminal(7).unwrap().starts_with("A child under 9"));
        assert!(criminal(9).unwrap().starts_with("A child aged 9"));

        let info = legal_info(13).unwrap();
        assert!(info[&LegalTopic::Medical].en.starts_with("Minors aged 12"));
        assert!(!info.contains_key(&LegalTopic::Employment));
        let info = legal_info(14).unwrap();
        assert!(info[&LegalTopic::Employment].en.starts_with("Can engage in light work"));
    }

    #[test]
    fn seniors_gain_retirement_then_special_rights() {
        assert!(!legal_info(58).unwrap().contains_key(&LegalTopic::Retirement));
        let at_59 = legal_info(59).unwrap();
        assert!(at_59.contains_key(&LegalTopic::Retirement));
        assert!(!at_59.contains_key(&LegalTopic::SpecialRights));
        assert_eq!(legal_info(60).unwrap().len(), 23);
    }

    #[test]
    fn every_entry_cites_a_reference() {
        for entry in legal_info(100).unwrap().values() {
            assert!(entry.constitutional_reference.is_some());
            assert!(!entry.text(Locale::Bn).is_empty());
        }
    }

    #[test]
    fn negative_age_is_rejected() {
        assert_eq!(
            legal_info(-1),
            Err(AgeError::OutOfDomain {
                what: "age in years",
                value: -1
            })
        );
    }

    #[test]
    fn serializes_with_camel_case_keys_in_order() {
        let json = serde_json::to_value(legal_info(0).unwrap()).unwrap();
        let keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
        assert!(keys.contains(&"idDocuments".to_string()));
        assert!(keys.contains(&"legalAssistance".to_string()));
        assert!(json["citizenship"]["constitutionalReference"]["en"].is_string());
    }
}
