use serde::{Deserialize, Serialize};

use crate::core::{CurrencyContext, Language, format_amount, parse_lenient};

/// Fixed sales tax applied to wage and profit.
pub const DEFAULT_TAX_RATE: f64 = 0.09;

/// User-editable calculator field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceField {
    /// Gold rate per gram, in the display currency. Always grouped.
    UnitPrice,
    /// Weight in grams.
    Weight,
    WagePercent,
    ProfitPercent,
}

impl PriceField {
    pub const ALL: [PriceField; 4] = [
        PriceField::UnitPrice,
        PriceField::Weight,
        PriceField::WagePercent,
        PriceField::ProfitPercent,
    ];

    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::UnitPrice => 0,
            Self::Weight => 1,
            Self::WagePercent => 2,
            Self::ProfitPercent => 3,
        }
    }

    #[must_use]
    pub const fn is_currency(self) -> bool {
        matches!(self, Self::UnitPrice)
    }

    /// Element id the host binds this field to.
    #[must_use]
    pub const fn element_id(self) -> &'static str {
        match self {
            Self::UnitPrice => "price",
            Self::Weight => "weight",
            Self::WagePercent => "wages",
            Self::ProfitPercent => "profit",
        }
    }
}

/// Numeric calculator inputs, all non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PriceInputs {
    /// Unit price in the display currency of the active context.
    pub unit_price: f64,
    pub weight: f64,
    pub wage_percent: f64,
    pub profit_percent: f64,
}

impl PriceInputs {
    /// Leniently parses the four localized field texts.
    #[must_use]
    pub fn parse(unit_price: &str, weight: &str, wage_percent: &str, profit_percent: &str) -> Self {
        Self {
            unit_price: parse_lenient(unit_price),
            weight: parse_lenient(weight),
            wage_percent: parse_lenient(wage_percent),
            profit_percent: parse_lenient(profit_percent),
        }
    }
}

/// Monetary outputs in the display currency.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DerivedPrice {
    pub gold_price: f64,
    pub wage_amount: f64,
    pub profit_amount: f64,
    pub tax_amount: f64,
    pub final_price: f64,
}

impl DerivedPrice {
    pub const ZERO: DerivedPrice = DerivedPrice {
        gold_price: 0.0,
        wage_amount: 0.0,
        profit_amount: 0.0,
        tax_amount: 0.0,
        final_price: 0.0,
    };

    #[must_use]
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    #[must_use]
    fn map(self, convert: impl Fn(f64) -> f64) -> Self {
        Self {
            gold_price: convert(self.gold_price),
            wage_amount: convert(self.wage_amount),
            profit_amount: convert(self.profit_amount),
            tax_amount: convert(self.tax_amount),
            final_price: convert(self.final_price),
        }
    }

    /// Whole-unit, grouped, localized text for every output.
    #[must_use]
    pub fn display(&self, language: Language) -> DerivedPriceDisplay {
        DerivedPriceDisplay {
            gold_price: format_amount(self.gold_price, language),
            wage_amount: format_amount(self.wage_amount, language),
            profit_amount: format_amount(self.profit_amount, language),
            tax_amount: format_amount(self.tax_amount, language),
            final_price: format_amount(self.final_price, language),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedPriceDisplay {
    pub gold_price: String,
    pub wage_amount: String,
    pub profit_amount: String,
    pub tax_amount: String,
    pub final_price: String,
}

/// Computes the five outputs with the standard 9% tax.
#[must_use]
pub fn compute(inputs: &PriceInputs, context: CurrencyContext) -> DerivedPrice {
    compute_with_tax_rate(inputs, context, DEFAULT_TAX_RATE)
}

/// Computes the five outputs in base currency and converts them for display.
///
/// A non-positive weight yields [`DerivedPrice::ZERO`].
#[must_use]
pub fn compute_with_tax_rate(
    inputs: &PriceInputs,
    context: CurrencyContext,
    tax_rate: f64,
) -> DerivedPrice {
    if inputs.weight <= 0.0 {
        return DerivedPrice::ZERO;
    }

    let rate = context.to_base(inputs.unit_price);
    let gold_price = rate * inputs.weight;
    let wage_amount = gold_price * (inputs.wage_percent / 100.0);
    let profit_amount = (gold_price + wage_amount) * (inputs.profit_percent / 100.0);
    let tax_amount = (wage_amount + profit_amount) * tax_rate;
    let final_price = gold_price + wage_amount + profit_amount + tax_amount;

    DerivedPrice {
        gold_price,
        wage_amount,
        profit_amount,
        tax_amount,
        final_price,
    }
    .map(|amount| context.to_display(amount))
}
