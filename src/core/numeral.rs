//! Locale-aware numeral parsing and formatting.
//!
//! Parsing is lenient: anything that is not a digit or a decimal point is
//! discarded and unparsable text reads as zero.

use rust_decimal::Decimal;
use rust_decimal::prelude::{FromPrimitive, RoundingStrategy};

use crate::core::locale::{
    Language, PERSIAN_DECIMAL_SEPARATOR, PERSIAN_GROUP_SEPARATOR, to_ascii_digits,
};

/// Fraction digits kept by locale display formatting.
const LOCALE_MAX_FRACTION_DIGITS: u32 = 3;

/// Inserts `,` every three digits of the integer part.
#[must_use]
pub fn group_thousands(number: &str) -> String {
    let (integer, fraction) = match number.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (number, None),
    };

    let digits: Vec<char> = integer.chars().collect();
    let mut grouped = String::with_capacity(number.len() + digits.len() / 3);
    for (position, ch) in digits.iter().enumerate() {
        let remaining = digits.len() - position;
        if position > 0 && remaining % 3 == 0 && digits[position - 1].is_ascii_digit() {
            grouped.push(',');
        }
        grouped.push(*ch);
    }

    if let Some(fraction) = fraction {
        grouped.push('.');
        grouped.push_str(fraction);
    }
    grouped
}

/// Removes grouping separators, maps native digits to ASCII and keeps only
/// digits and decimal points.
#[must_use]
pub fn clean_numeric_text(raw: &str) -> String {
    to_ascii_digits(raw)
        .chars()
        .map(|ch| if ch == PERSIAN_DECIMAL_SEPARATOR { '.' } else { ch })
        .filter(|ch| ch.is_ascii_digit() || *ch == '.')
        .collect()
}

/// Reads the numeric value of a localized field.
///
/// The longest `digits[.digits]` prefix of the cleaned text is parsed, so
/// stray trailing points or a second decimal point never fail the parse.
#[must_use]
pub fn parse_lenient(raw: &str) -> f64 {
    let cleaned = clean_numeric_text(raw);
    let mut seen_point = false;
    let prefix: String = cleaned
        .chars()
        .take_while(|ch| {
            if *ch == '.' {
                if seen_point {
                    return false;
                }
                seen_point = true;
            }
            true
        })
        .collect();

    match prefix.trim_end_matches('.').parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

/// Formats an ASCII numeric string for display in `language`.
///
/// `always_group` forces thousands grouping; otherwise only strings of four
/// chars or more are grouped. Empty or `"0"` renders as the zero literal.
#[must_use]
pub fn format_for_language(number: &str, language: Language, always_group: bool) -> String {
    if number.is_empty() || number == "0" {
        return language.zero_literal().to_owned();
    }

    let grouped = if always_group || number.chars().count() >= 4 {
        group_thousands(number)
    } else {
        number.to_owned()
    };
    language.localize_digits(&grouped)
}

/// Formats a whole-unit monetary amount: rounded, grouped, localized.
#[must_use]
pub fn format_amount(value: f64, language: Language) -> String {
    let rounded = if value.is_finite() { value.round() } else { 0.0 };
    // Avoids rendering "-0".
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format_for_language(&format!("{rounded:.0}"), language, true)
}

/// Formats a value the way the browser's locale formatting does for the page
/// locales: at most three fraction digits, locale grouping and digits.
#[must_use]
pub fn format_locale_number(value: f64, language: Language) -> String {
    let Some(decimal) = Decimal::from_f64(value) else {
        return language.zero_literal().to_owned();
    };
    let rounded = decimal
        .round_dp_with_strategy(
            LOCALE_MAX_FRACTION_DIGITS,
            RoundingStrategy::MidpointAwayFromZero,
        )
        .normalize();

    let text = rounded.to_string();
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    let grouped = format!("{sign}{}", group_thousands(unsigned));

    match language {
        Language::En => grouped,
        Language::Fa => language.localize_digits(
            &grouped
                .chars()
                .map(|ch| match ch {
                    ',' => PERSIAN_GROUP_SEPARATOR,
                    '.' => PERSIAN_DECIMAL_SEPARATOR,
                    other => other,
                })
                .collect::<String>(),
        ),
    }
}

/// Formats a percentage with one decimal, explicitly signed when non-negative.
///
/// Persian output uses the same decimal separator as [`format_locale_number`].
#[must_use]
pub fn format_signed_percent(percent: f64, language: Language) -> String {
    let rounded = Decimal::from_f64(percent)
        .unwrap_or_default()
        .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
    let rounded = if rounded.is_zero() {
        Decimal::ZERO
    } else {
        rounded
    };

    let body = format!("{rounded:.1}");
    let signed = if rounded.is_sign_negative() {
        format!("{body}%")
    } else {
        format!("+{body}%")
    };
    match language {
        Language::En => signed,
        Language::Fa => language.localize_digits(
            &signed
                .chars()
                .map(|ch| if ch == '.' { PERSIAN_DECIMAL_SEPARATOR } else { ch })
                .collect::<String>(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_integer_part_only() {
        assert_eq!(group_thousands("7189000"), "7,189,000");
        assert_eq!(group_thousands("123"), "123");
        assert_eq!(group_thousands("1234.5678"), "1,234.5678");
        assert_eq!(group_thousands("1000000.25"), "1,000,000.25");
    }

    #[test]
    fn lenient_parse_never_fails() {
        assert_eq!(parse_lenient(""), 0.0);
        assert_eq!(parse_lenient("abc"), 0.0);
        assert_eq!(parse_lenient("."), 0.0);
        assert_eq!(parse_lenient("۷,۱۸۹,۰۰۰"), 7_189_000.0);
        assert_eq!(parse_lenient("12.5.3"), 12.5);
        assert_eq!(parse_lenient("-45"), 45.0);
        assert_eq!(parse_lenient("۱۲٫۵"), 12.5);
    }

    #[test]
    fn short_non_currency_values_stay_ungrouped() {
        assert_eq!(format_for_language("18", Language::En, false), "18");
        assert_eq!(format_for_language("1800", Language::En, false), "1,800");
        assert_eq!(format_for_language("180", Language::En, true), "180");
        assert_eq!(format_for_language("", Language::Fa, false), "۰");
    }

    #[test]
    fn locale_numbers_match_browser_style() {
        assert_eq!(format_locale_number(7_189_000.0, Language::En), "7,189,000");
        assert_eq!(format_locale_number(7_189_000.0, Language::Fa), "۷٬۱۸۹٬۰۰۰");
        assert_eq!(
            format_locale_number(6_800_000.0 / 90_560.0, Language::En),
            "75.088"
        );
        assert_eq!(format_locale_number(79.5, Language::Fa), "۷۹٫۵");
    }

    #[test]
    fn signed_percent_marks_non_negative_values() {
        assert_eq!(format_signed_percent(5.72, Language::En), "+5.7%");
        assert_eq!(format_signed_percent(0.0, Language::En), "+0.0%");
        assert_eq!(format_signed_percent(-0.04, Language::En), "+0.0%");
        assert_eq!(format_signed_percent(-1.25, Language::En), "-1.3%");
        assert_eq!(format_signed_percent(5.72, Language::Fa), "+۵٫۷%");
    }
}
