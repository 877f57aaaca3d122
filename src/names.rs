//! Month names in English and Hebrew, and parsing of month names.

use crate::HDateError;
use crate::prelude::*;
use crate::types::HMonth;
use std::str::FromStr;

/// Languages month names can be rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display)]
pub enum Locale {
    /// English transliteration
    #[default]
    #[display(fmt = "en")]
    En,
    /// Hebrew with vowel points
    #[display(fmt = "he")]
    He,
    /// Hebrew without vowel points
    #[display(fmt = "he-x-NoNikud")]
    HeNoNikud,
}

impl FromStr for Locale {
    type Err = HDateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        [Self::En, Self::He, Self::HeNoNikud]
            .into_iter()
            .find(|locale| tag.eq_ignore_ascii_case(&locale.to_string()))
            .ok_or_else(|| HDateError::UnknownLocale(tag.to_owned()))
    }
}

struct MonthNames {
    /// Indexed by month number - 1, with the leap-year Adar names
    months: [&'static str; 13],
    /// The single Adar of a common year
    adar: &'static str,
}

static EN_NAMES: MonthNames = MonthNames {
    months: [
        "Nisan", "Iyyar", "Sivan", "Tamuz", "Av", "Elul", "Tishrei", "Cheshvan", "Kislev",
        "Tevet", "Sh'vat", "Adar I", "Adar II",
    ],
    adar: "Adar",
};

static HE_NAMES: MonthNames = MonthNames {
    months: [
        "נִיסָן",
        "אִיָיר",
        "סִיוָן",
        "תַּמּוּז",
        "אָב",
        "אֱלוּל",
        "תִּשְׁרֵי",
        "חֶשְׁוָן",
        "כִּסְלֵו",
        "טֵבֵת",
        "שְׁבָט",
        "אַדָר א׳",
        "אַדָר ב׳",
    ],
    adar: "אַדָר",
};

static HE_NO_NIKUD_NAMES: MonthNames = MonthNames {
    months: [
        "ניסן",
        "אייר",
        "סיון",
        "תמוז",
        "אב",
        "אלול",
        "תשרי",
        "חשון",
        "כסלו",
        "טבת",
        "שבט",
        "אדר א׳",
        "אדר ב׳",
    ],
    adar: "אדר",
};

fn names_for(locale: Locale) -> &'static MonthNames {
    match locale {
        Locale::En => &EN_NAMES,
        Locale::He => &HE_NAMES,
        Locale::HeNoNikud => &HE_NO_NIKUD_NAMES,
    }
}

/// Name of `month` in `locale`.
///
/// In a common year (`leap == false`) both Adars are named plain "Adar".
pub fn month_name(month: HMonth, leap: bool, locale: Locale) -> &'static str {
    let names = names_for(locale);
    match month.normalize(leap) {
        HMonth::Adar1 if !leap => names.adar,
        month => names.months[usize::from(month.get() - 1)],
    }
}

/// Hebrew vowel points and cantillation marks.
const fn is_hebrew_mark(c: char) -> bool {
    matches!(c, '\u{0591}'..='\u{05C7}')
}

/// Geresh, gershayim and their ASCII stand-ins.
const fn is_geresh(c: char) -> bool {
    matches!(c, '\u{05F3}' | '\u{05F4}' | '\'' | '"')
}

/// "Adar I", "Adar 1", "Adar1", "Adar a", "אדר א" name the first Adar.
fn names_first_adar(name: &str) -> bool {
    let mut rev = name.chars().rev();
    match (rev.next(), rev.next()) {
        (Some('1' | 'a' | 'א'), _) => true,
        (Some('i'), Some(prev)) => prev != 'i',
        _ => false,
    }
}

const fn adar(first: bool) -> HMonth {
    if first { HMonth::Adar1 } else { HMonth::Adar2 }
}

/// Parses an English or Hebrew month name.
///
/// Matching is case-insensitive and looks at the first one or two letters,
/// so abbreviations work ("Si" is Sivan, "Sh" is Sh'vat). A single letter is
/// accepted only where it is unambiguous. A bare "Adar" is Adar II, the Adar
/// of every year.
///
/// # Errors
/// Returns `HDateError::UnparseableMonthName` if the text names no month.
pub fn month_from_name(name: &str) -> Result<HMonth, HDateError> {
    let cleaned: String = name
        .trim()
        .to_lowercase()
        .chars()
        .filter(|&c| !is_hebrew_mark(c))
        .collect();
    let cleaned = cleaned.trim_end_matches(is_geresh).trim_end();
    // "בניסן", "באדר"
    let cleaned = cleaned.strip_prefix('ב').unwrap_or(cleaned);

    let mut chars = cleaned.chars();
    let month = match (chars.next(), chars.next()) {
        // "november"
        (Some('n'), Some('o')) => None,
        (Some('n' | 'נ'), _) => Some(HMonth::Nisan),
        (Some('i'), _) => Some(HMonth::Iyyar),
        (Some('e'), _) => Some(HMonth::Elul),
        (Some('c' | 'ח'), _) => Some(HMonth::Cheshvan),
        (Some('k' | 'כ'), _) => Some(HMonth::Kislev),
        (Some('s'), Some('i')) | (Some('ס'), _) => Some(HMonth::Sivan),
        (Some('s'), Some('h')) | (Some('ש'), _) => Some(HMonth::Shvat),
        (Some('t'), Some('a')) | (Some('ת'), Some('מ')) => Some(HMonth::Tamuz),
        (Some('t'), Some('i')) | (Some('ת'), Some('ש')) => Some(HMonth::Tishrei),
        (Some('t'), Some('e')) | (Some('ט'), _) => Some(HMonth::Tevet),
        (Some('a'), Some('v')) | (Some('א'), Some('ב')) => Some(HMonth::Av),
        (Some('a'), Some('d')) | (Some('א'), Some('ד')) => Some(adar(names_first_adar(cleaned))),
        (Some('א'), Some('י')) => Some(HMonth::Iyyar),
        (Some('א'), Some('ל')) => Some(HMonth::Elul),
        _ => None,
    };
    month.ok_or_else(|| HDateError::UnparseableMonthName(name.to_owned()))
}

impl FromStr for HMonth {
    type Err = HDateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        month_from_name(s)
    }
}
