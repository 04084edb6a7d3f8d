//! Tropical zodiac sign for a birth date.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::locale::Locale;

/// Last day of each month that still belongs to the sign "owned" by that month
/// (January → Capricorn, February → Aquarius, ...). Later days belong to the next sign.
const CUTOFF_DAY: [u32; 12] = [20, 19, 20, 20, 21, 21, 22, 23, 23, 23, 22, 22];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ZodiacSign {
    Capricorn,
    Aquarius,
    Pisces,
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
}

impl ZodiacSign {
    pub const ALL: [ZodiacSign; 12] = [
        ZodiacSign::Capricorn,
        ZodiacSign::Aquarius,
        ZodiacSign::Pisces,
        ZodiacSign::Aries,
        ZodiacSign::Taurus,
        ZodiacSign::Gemini,
        ZodiacSign::Cancer,
        ZodiacSign::Leo,
        ZodiacSign::Virgo,
        ZodiacSign::Libra,
        ZodiacSign::Scorpio,
        ZodiacSign::Sagittarius,
    ];

    pub fn for_month_day(month: u32, day: u32) -> ZodiacSign {
        let month0 = (month.clamp(1, 12) - 1) as usize;
        let index = if day <= CUTOFF_DAY[month0] {
            month0
        } else {
            (month0 + 1) % 12
        };
        Self::ALL[index]
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn info(self, locale: Locale) -> &'static ZodiacInfo {
        let data = &SIGNS[self.index()];
        match locale {
            Locale::En => &data.0,
            Locale::Bn => &data.1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ZodiacInfo {
    pub name: &'static str,
    pub personality: &'static str,
    pub traits: &'static str,
    pub element: &'static str,
    pub symbol: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ZodiacAssignment {
    pub sign: &'static str,
    pub info: ZodiacInfo,
    pub info_en: ZodiacInfo,
    pub info_bn: ZodiacInfo,
    pub index: usize,
}

impl ZodiacAssignment {
    pub fn zodiac(&self) -> ZodiacSign {
        ZodiacSign::ALL[self.index]
    }
}

pub fn zodiac_sign(date: NaiveDate, locale: Locale) -> ZodiacAssignment {
    let sign = ZodiacSign::for_month_day(date.month(), date.day());
    let info = sign.info(locale).clone();
    ZodiacAssignment {
        sign: info.name,
        info,
        info_en: sign.info(Locale::En).clone(),
        info_bn: sign.info(Locale::Bn).clone(),
        index: sign.index(),
    }
}

const fn info(
    name: &'static str,
    personality: &'static str,
    traits: &'static str,
    element: &'static str,
    symbol: &'static str,
) -> ZodiacInfo {
    ZodiacInfo {
        name,
        personality,
        traits,
        element,
        symbol,
    }
}

static SIGNS: [(ZodiacInfo, ZodiacInfo); 12] = [
    (
        info(
            "Capricorn",
            "Capricorn is ambitious, disciplined, and practical. This sign represents natural leadership with strong determination.",
            "Hardworking, responsible, patient, and goal-oriented.",
            "Earth",
            "🐐",
        ),
        info(
            "মকর",
            "মকর রাশি উচ্চাকাঙ্ক্ষী, শৃঙ্খলাবদ্ধ এবং বাস্তববাদী। এই রাশি দৃঢ় সংকল্প সহ স্বাভাবিক নেতৃত্বের প্রতিনিধিত্ব করে।",
            "পরিশ্রমী, দায়িত্বশীল, ধৈর্যশীল এবং লক্ষ্যভিত্তিক।",
            "মৃত্তিকা",
            "🐐",
        ),
    ),
    (
        info(
            "Aquarius",
            "Aquarius is independent, innovative, and humanitarian. This sign thinks outside the box and cares deeply about humanity.",
            "Original, progressive, friendly, and humanitarian.",
            "Air",
            "♒",
        ),
        info(
            "কুম্ভ",
            "কুম্ভ রাশি স্বাধীন, উদ্ভাবনী এবং মানবতাবাদী। এই রাশি প্রচলিত ধারার বাইরে চিন্তা করে এবং মানবতার জন্য কাজ করে।",
            "মৌলিক, প্রগতিশীল, বন্ধুত্বপূর্ণ এবং মানবতাবাদী।",
            "বায়ু",
            "♒",
        ),
    ),
    (
        info(
            "Pisces",
            "Pisces is compassionate, intuitive, and artistic. This sign has a deep connection to emotions and creativity.",
            "Empathetic, imaginative, gentle, and spiritual.",
            "Water",
            "🐟",
        ),
        info(
            "মীন",
            "মীন রাশি সহানুভূতিশীল, স্বজ্ঞাত এবং শৈল্পিক। এই রাশির আবেগ এবং সৃজনশীলতার সাথে গভীর সংযোগ রয়েছে।",
            "সহানুভূতিশীল, কল্পনাপ্রবণ, নম্র এবং আধ্যাত্মিক।",
            "জল",
            "🐟",
        ),
    ),
    (
        info(
            "Aries",
            "Aries is bold, energetic, and pioneering. This sign represents natural born leadership with lots of enthusiasm.",
            "Courageous, confident, passionate, and independent.",
            "Fire",
            "♈",
        ),
        info(
            "মেষ",
            "মেষ রাশি সাহসী, উদ্যমী এবং অগ্রগামী। এই রাশি প্রচুর উৎসাহ সহ স্বাভাবিক নেতৃত্বের প্রতিনিধিত্ব করে।",
            "সাহসী, আত্মবিশ্বাসী, আবেগপ্রবণ এবং স্বাধীন।",
            "অগ্নি",
            "♈",
        ),
    ),
    (
        info(
            "Taurus",
            "Taurus is reliable, patient, and practical. This sign values stability and enjoys life's pleasures.",
            "Determined, loyal, sensual, and grounded.",
            "Earth",
            "🐂",
        ),
        info(
            "বৃষ",
            "বৃষ রাশি নির্ভরযোগ্য, ধৈর্যশীল এবং বাস্তববাদী। এই রাশি স্থিতিশীলতা মূল্য দেয় এবং জীবনের আনন্দ উপভোগ করে।",
            "দৃঢ়প্রতিজ্ঞ, অনুগত, সংবেদনশীল এবং ভিত্তিমূলক।",
            "মৃত্তিকা",
            "🐂",
        ),
    ),
    (
        info(
            "Gemini",
            "Gemini is curious, adaptable, and communicative. This sign loves learning and connecting with others.",
            "Versatile, expressive, quick-witted, and sociable.",
            "Air",
            "♊",
        ),
        info(
            "মিথুন",
            "মিথুন রাশি কৌতূহলী, অভিযোজিত এবং যোগাযোগমূলক। এই রাশি শেখা এবং অন্যদের সাথে সংযোগ স্থাপন করতে ভালোবাসে।",
            "বহুমুখী, অভিব্যক্তিপূর্ণ, তীক্ষ্ণবুদ্ধি এবং সামাজিক।",
            "বায়ু",
            "♊",
        ),
    ),
    (
        info(
            "Cancer",
            "Cancer is nurturing, intuitive, and protective. This sign has strong emotional intelligence and cares deeply.",
            "Loyal, empathetic, imaginative, and protective.",
            "Water",
            "♋",
        ),
        info(
            "কর্কট",
            "কর্কট রাশি যত্নশীল, স্বজ্ঞাত এবং সুরক্ষামূলক। এই রাশির শক্তিশালী আবেগিক বুদ্ধিমত্তা রয়েছে এবং গভীরভাবে যত্ন নেয়।",
            "অনুগত, সহানুভূতিশীল, কল্পনাপ্রবণ এবং সুরক্ষামূলক।",
            "জল",
            "♋",
        ),
    ),
    (
        info(
            "Leo",
            "Leo is confident, creative, and generous. This sign has a natural flair for drama and leadership.",
            "Dramatic, creative, self-confident, and generous.",
            "Fire",
            "♌",
        ),
        info(
            "সিংহ",
            "সিংহ রাশি আত্মবিশ্বাসী, সৃজনশীল এবং উদার। এই রাশির নাটকীয়তা এবং নেতৃত্বের জন্য স্বাভাবিক দক্ষতা রয়েছে।",
            "নাটকীয়, সৃজনশীল, আত্মবিশ্বাসী এবং উদার।",
            "অগ্নি",
            "♌",
        ),
    ),
    (
        info(
            "Virgo",
            "Virgo is analytical, practical, and detail-oriented. This sign has a keen eye for perfection and service.",
            "Loyal, analytical, kind, and hardworking.",
            "Earth",
            "♍",
        ),
        info(
            "কন্যা",
            "কন্যা রাশি বিশ্লেষণাত্মক, বাস্তববাদী এবং বিস্তারিত-ভিত্তিক। এই রাশির নিখুঁততা এবং সেবার জন্য তীক্ষ্ণ দৃষ্টি রয়েছে।",
            "অনুগত, বিশ্লেষণাত্মক, দয়ালু এবং পরিশ্রমী।",
            "মৃত্তিকা",
            "♍",
        ),
    ),
    (
        info(
            "Libra",
            "Libra is diplomatic, fair-minded, and social. This sign seeks balance and harmony in all relationships.",
            "Cooperative, diplomatic, gracious, and fair-minded.",
            "Air",
            "♎",
        ),
        info(
            "তুলা",
            "তুলা রাশি কূটনৈতিক, ন্যায়পরায়ণ এবং সামাজিক। এই রাশি সব সম্পর্কে ভারসাম্য এবং সাদৃশ্য খুঁজে।",
            "সহযোগিতামূলক, কূটনৈতিক, মার্জিত এবং ন্যায়পরায়ণ।",
            "বায়ু",
            "♎",
        ),
    ),
    (
        info(
            "Scorpio",
            "Scorpio is passionate, resourceful, and brave. This sign has intense emotions and strong intuition.",
            "Resourceful, brave, passionate, and stubborn.",
            "Water",
            "♏",
        ),
        info(
            "বৃশ্চিক",
            "বৃশ্চিক রাশি আবেগপ্রবণ, সম্পদশালী এবং সাহসী। এই রাশির তীব্র আবেগ এবং শক্তিশালী স্বজ্ঞা রয়েছে।",
            "সম্পদশালী, সাহসী, আবেগপ্রবণ এবং জেদী।",
            "জল",
            "♏",
        ),
    ),
    (
        info(
            "Sagittarius",
            "Sagittarius is adventurous, independent, and philosophical. This sign loves freedom and exploring new horizons.",
            "Generous, idealistic, great sense of humor, and philosophical.",
            "Fire",
            "♐",
        ),
        info(
            "ধনু",
            "ধনু রাশি দুঃসাহসিক, স্বাধীন এবং দার্শনিক। এই রাশি স্বাধীনতা এবং নতুন দিগন্ত অন্বেষণ করতে ভালোবাসে।",
            "উদার, আদর্শবাদী, মহান রসবোধ এবং দার্শনিক।",
            "অগ্নি",
            "♐",
        ),
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    fn sign_on(m: u32, d: u32) -> ZodiacSign {
        ZodiacSign::for_month_day(m, d)
    }

    #[test]
    fn boundaries_start_on_the_listed_day() {
        assert_eq!(sign_on(3, 20), ZodiacSign::Pisces);
        assert_eq!(sign_on(3, 21), ZodiacSign::Aries);
        assert_eq!(sign_on(1, 20), ZodiacSign::Capricorn);
        assert_eq!(sign_on(1, 21), ZodiacSign::Aquarius);
        assert_eq!(sign_on(12, 22), ZodiacSign::Sagittarius);
        assert_eq!(sign_on(12, 23), ZodiacSign::Capricorn);
        assert_eq!(sign_on(8, 23), ZodiacSign::Leo);
        assert_eq!(sign_on(8, 24), ZodiacSign::Virgo);
    }

    #[test]
    fn every_day_of_a_leap_year_has_a_sign() {
        let mut day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        while day.year() == 2024 {
            let z = zodiac_sign(day, Locale::En);
            assert!(z.index < 12);
            assert_eq!(z.sign, z.info_en.name);
            day = day.succ_opt().unwrap();
        }
    }

    #[test]
    fn localized_assignment() {
        let d = NaiveDate::from_ymd_opt(1990, 7, 30).unwrap();
        let z = zodiac_sign(d, Locale::Bn);
        assert_eq!(z.zodiac(), ZodiacSign::Leo);
        assert_eq!(z.sign, "সিংহ");
        assert_eq!(z.info.element, "অগ্নি");
        assert_eq!(z.info_en.element, "Fire");
        assert_eq!(z.info.symbol, "♌");
        assert_eq!(z.index, 7);
    }
}
