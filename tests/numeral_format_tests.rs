use approx::assert_relative_eq;
use gold_price::core::{
    CurrencyContext, Language, TOMAN_PER_USD, format_amount, format_locale_number,
    format_signed_percent, to_ascii_digits, to_persian_digits,
};
use gold_price::pricing::normalize_field;

#[test]
fn digit_scripts_map_both_ways() {
    assert_eq!(to_persian_digits("0123456789"), "۰۱۲۳۴۵۶۷۸۹");
    assert_eq!(to_ascii_digits("۰۱۲۳۴۵۶۷۸۹"), "0123456789");
    assert_eq!(to_ascii_digits("٠١٢٣٤٥٦٧٨٩"), "0123456789");
    assert_eq!(to_persian_digits("12,5%"), "۱۲,۵%");
}

#[test]
fn normalize_field_reformats_any_script() {
    assert_eq!(normalize_field("7189000", Language::Fa, true), "۷,۱۸۹,۰۰۰");
    assert_eq!(normalize_field("۷۱۸۹۰۰۰", Language::En, true), "7,189,000");
    assert_eq!(normalize_field("79.38", Language::En, true), "79.38");
    assert_eq!(normalize_field("18", Language::Fa, false), "۱۸");
    assert_eq!(normalize_field("", Language::En, false), "0");
    assert_eq!(normalize_field("abc", Language::Fa, true), "۰");
    assert_eq!(normalize_field("1,2,3,4", Language::En, false), "1,234");
}

#[test]
fn amounts_round_to_whole_units() {
    assert_eq!(format_amount(1_699_048.26, Language::En), "1,699,048");
    assert_eq!(format_amount(92_467_362.5, Language::En), "92,467,363");
    assert_eq!(format_amount(0.4, Language::Fa), "۰");
    assert_eq!(format_amount(-0.2, Language::En), "0");
    assert_eq!(format_amount(f64::NAN, Language::En), "0");
}

#[test]
fn locale_numbers_trim_trailing_zeros() {
    assert_eq!(format_locale_number(79.5, Language::En), "79.5");
    assert_eq!(format_locale_number(1234.0, Language::En), "1,234");
    assert_eq!(format_locale_number(1234.5678, Language::Fa), "۱٬۲۳۴٫۵۶۸");
}

#[test]
fn percent_change_is_signed() {
    assert_eq!(format_signed_percent(12.345, Language::En), "+12.3%");
    assert_eq!(format_signed_percent(-3.0, Language::Fa), "-۳٫۰%");
}

#[test]
fn currency_context_converts_at_the_fixed_rate() {
    let english = CurrencyContext::new(Language::En, TOMAN_PER_USD);
    assert!(english.is_foreign());
    assert_relative_eq!(english.to_display(90_560.0), 1.0);
    assert_relative_eq!(english.to_base(2.5), 226_400.0);

    let persian = english.with_language(Language::Fa);
    assert!(!persian.is_foreign());
    assert_relative_eq!(persian.to_display(7_189_000.0), 7_189_000.0);
    assert_relative_eq!(persian.to_base(7_189_000.0), 7_189_000.0);
}
