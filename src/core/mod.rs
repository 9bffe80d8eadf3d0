pub mod currency;
pub mod locale;
pub mod numeral;
pub mod series;
pub mod types;

pub use currency::{Currency, CurrencyContext, TOMAN_PER_USD};
pub use locale::{Language, TextDirection, to_ascii_digits, to_persian_digits};
pub use numeral::{
    clean_numeric_text, format_amount, format_for_language, format_locale_number,
    format_signed_percent, group_thousands, parse_lenient,
};
pub use series::{DEFAULT_GOLD_PRICES_TOMAN, PriceSeries, SeriesStatistics, StatisticsDisplay};
pub use types::{PixelPoint, Viewport};
