use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::currency::CurrencyContext;
use crate::core::locale::Language;
use crate::core::numeral::{format_locale_number, format_signed_percent};
use crate::error::{GoldError, GoldResult};

/// Monthly 18k gold prices over the past year, in Toman.
pub const DEFAULT_GOLD_PRICES_TOMAN: [f64; 12] = [
    6_800_000.0,
    6_780_000.0,
    6_850_000.0,
    6_880_000.0,
    6_950_000.0,
    6_920_000.0,
    7_050_000.0,
    7_080_000.0,
    7_020_000.0,
    7_160_000.0,
    7_130_000.0,
    7_189_000.0,
];

/// Immutable base-currency price series.
///
/// Serialized as a plain array; deserialization applies the same checks as
/// [`PriceSeries::new`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct PriceSeries {
    base_prices: Vec<f64>,
}

impl Default for PriceSeries {
    fn default() -> Self {
        Self {
            base_prices: DEFAULT_GOLD_PRICES_TOMAN.to_vec(),
        }
    }
}

impl PriceSeries {
    pub fn new(base_prices: Vec<f64>) -> GoldResult<Self> {
        validate_prices(&base_prices)?;
        Ok(Self { base_prices })
    }

    /// Re-checks the construction rules: non-empty, finite, positive.
    pub fn validate(&self) -> GoldResult<()> {
        validate_prices(&self.base_prices)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.base_prices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.base_prices.is_empty()
    }

    #[must_use]
    pub fn base_prices(&self) -> &[f64] {
        &self.base_prices
    }

    /// Highest valid data index.
    #[must_use]
    pub fn last_index(&self) -> usize {
        self.base_prices.len() - 1
    }

    /// Recomputes every price in the display currency of `context`.
    #[must_use]
    pub fn displayed(&self, context: CurrencyContext) -> Vec<f64> {
        self.base_prices
            .iter()
            .map(|price| context.to_display(*price))
            .collect()
    }
}

impl TryFrom<Vec<f64>> for PriceSeries {
    type Error = GoldError;

    fn try_from(base_prices: Vec<f64>) -> Result<Self, Self::Error> {
        Self::new(base_prices)
    }
}

impl From<PriceSeries> for Vec<f64> {
    fn from(series: PriceSeries) -> Self {
        series.base_prices
    }
}

fn validate_prices(base_prices: &[f64]) -> GoldResult<()> {
    if base_prices.is_empty() {
        return Err(GoldError::InvalidData("price series must not be empty".to_owned()));
    }
    if base_prices
        .iter()
        .any(|price| !price.is_finite() || *price <= 0.0)
    {
        return Err(GoldError::InvalidData("series prices must be finite and > 0".to_owned()));
    }
    Ok(())
}

/// Summary panel values for one displayed series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesStatistics {
    pub min: f64,
    pub max: f64,
    pub last: f64,
    pub percent_change: f64,
}

impl SeriesStatistics {
    /// Returns `None` for an empty series.
    #[must_use]
    pub fn from_values(values: &[f64]) -> Option<Self> {
        let first = *values.first()?;
        let last = *values.last()?;
        let min = values.iter().copied().map(OrderedFloat).min()?.into_inner();
        let max = values.iter().copied().map(OrderedFloat).max()?.into_inner();
        let percent_change = if first == 0.0 {
            0.0
        } else {
            (last - first) / first * 100.0
        };

        Some(Self {
            min,
            max,
            last,
            percent_change,
        })
    }

    #[must_use]
    pub fn display(&self, language: Language) -> StatisticsDisplay {
        StatisticsDisplay {
            min: format_locale_number(self.min, language),
            max: format_locale_number(self.max, language),
            last: format_locale_number(self.last, language),
            percent_change: format_signed_percent(self.percent_change, language),
        }
    }
}

/// Localized text of the statistics panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatisticsDisplay {
    pub min: String,
    pub max: String,
    pub last: String,
    pub percent_change: String,
}
