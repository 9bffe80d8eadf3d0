use serde::{Deserialize, Serialize};

use crate::core::locale::Language;

/// Toman per US dollar used by the bundled page.
pub const TOMAN_PER_USD: u32 = 90_560;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Currency {
    /// Base currency; all arithmetic happens in Toman.
    Toman,
    Usd,
}

/// Active language plus the fixed conversion rate to the foreign currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyContext {
    pub language: Language,
    /// Base-currency units per foreign-currency unit.
    pub conversion_rate: u32,
}

impl Default for CurrencyContext {
    fn default() -> Self {
        Self::new(Language::default(), TOMAN_PER_USD)
    }
}

impl CurrencyContext {
    #[must_use]
    pub const fn new(language: Language, conversion_rate: u32) -> Self {
        Self {
            language,
            conversion_rate,
        }
    }

    #[must_use]
    pub const fn with_language(self, language: Language) -> Self {
        Self::new(language, self.conversion_rate)
    }

    #[must_use]
    pub const fn display_currency(self) -> Currency {
        match self.language {
            Language::Fa => Currency::Toman,
            Language::En => Currency::Usd,
        }
    }

    #[must_use]
    pub const fn is_foreign(self) -> bool {
        matches!(self.display_currency(), Currency::Usd)
    }

    /// Converts a base-currency amount into the display currency.
    #[must_use]
    pub fn to_display(self, base_amount: f64) -> f64 {
        if self.is_foreign() {
            base_amount / f64::from(self.conversion_rate)
        } else {
            base_amount
        }
    }

    /// Converts a display-currency amount back into base currency.
    #[must_use]
    pub fn to_base(self, display_amount: f64) -> f64 {
        if self.is_foreign() {
            display_amount * f64::from(self.conversion_rate)
        } else {
            display_amount
        }
    }
}
