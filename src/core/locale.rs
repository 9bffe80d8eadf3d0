use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GoldError;

const PERSIAN_DIGITS: [char; 10] = ['۰', '۱', '۲', '۳', '۴', '۵', '۶', '۷', '۸', '۹'];
const ARABIC_INDIC_DIGITS: [char; 10] = ['٠', '١', '٢', '٣', '٤', '٥', '٦', '٧', '٨', '٩'];

/// Persian thousands separator used by `fa-IR` number formatting.
pub const PERSIAN_GROUP_SEPARATOR: char = '٬';
/// Persian decimal separator used by `fa-IR` number formatting.
pub const PERSIAN_DECIMAL_SEPARATOR: char = '٫';

/// Page language. Each language implies one display currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Persian: right-to-left, Persian digits, Toman.
    #[default]
    Fa,
    /// English: left-to-right, ASCII digits, US dollars.
    En,
}

/// Text direction of a page language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    Rtl,
    Ltr,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::Fa, Language::En];

    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Fa => "fa",
            Self::En => "en",
        }
    }

    /// Native display name shown in the language picker.
    #[must_use]
    pub const fn native_name(self) -> &'static str {
        match self {
            Self::Fa => "فارسی",
            Self::En => "English",
        }
    }

    #[must_use]
    pub const fn direction(self) -> TextDirection {
        match self {
            Self::Fa => TextDirection::Rtl,
            Self::En => TextDirection::Ltr,
        }
    }

    #[must_use]
    pub const fn uses_native_digits(self) -> bool {
        matches!(self, Self::Fa)
    }

    /// Localized literal for zero.
    #[must_use]
    pub const fn zero_literal(self) -> &'static str {
        match self {
            Self::Fa => "۰",
            Self::En => "0",
        }
    }

    /// Calendar year the bundled price series belongs to.
    #[must_use]
    pub const fn series_year(self) -> &'static str {
        match self {
            Self::Fa => "1404",
            Self::En => "2025",
        }
    }

    /// Rewrites ASCII digits into this language's script.
    #[must_use]
    pub fn localize_digits(self, text: &str) -> String {
        if self.uses_native_digits() {
            to_persian_digits(text)
        } else {
            text.to_owned()
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = GoldError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        match code.trim().to_ascii_lowercase().as_str() {
            "fa" => Ok(Self::Fa),
            "en" => Ok(Self::En),
            other => Err(GoldError::UnsupportedLanguage(other.to_owned())),
        }
    }
}

/// Maps every ASCII digit to its Persian counterpart.
#[must_use]
pub fn to_persian_digits(text: &str) -> String {
    text.chars()
        .map(|ch| match ch.to_digit(10) {
            Some(digit) if ch.is_ascii_digit() => PERSIAN_DIGITS[digit as usize],
            _ => ch,
        })
        .collect()
}

/// Maps Persian and Arabic-Indic digits to ASCII, leaving other chars untouched.
#[must_use]
pub fn to_ascii_digits(text: &str) -> String {
    text.chars().map(ascii_digit_for).collect()
}

fn ascii_digit_for(ch: char) -> char {
    let position = PERSIAN_DIGITS
        .iter()
        .position(|candidate| *candidate == ch)
        .or_else(|| ARABIC_INDIC_DIGITS.iter().position(|candidate| *candidate == ch));
    match position {
        Some(digit) => char::from(b'0' + digit as u8),
        None => ch,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_scripts_round_trip() {
        assert_eq!(to_persian_digits("7,189,000"), "۷,۱۸۹,۰۰۰");
        assert_eq!(to_ascii_digits("۷,۱۸۹,۰۰۰"), "7,189,000");
        assert_eq!(to_ascii_digits("٣٤٥"), "345");
    }

    #[test]
    fn language_codes_parse_case_insensitively() {
        assert_eq!("FA".parse::<Language>().expect("fa"), Language::Fa);
        assert_eq!(" en ".parse::<Language>().expect("en"), Language::En);
        assert!("de".parse::<Language>().is_err());
    }
}
