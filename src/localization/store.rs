use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::{Language, TextDirection};
use crate::error::{GoldError, GoldResult};
use crate::extensions::LanguageChange;

/// Month labels every text table carries, one per series point.
pub const MONTHS_PER_YEAR: usize = 12;

const FA_TEXTS: &str = include_str!("locales/fa.json");
const EN_TEXTS: &str = include_str!("locales/en.json");

/// Every translatable string of the page for one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextTable {
    pub title: String,
    pub subtitle: String,
    pub price_label: String,
    pub weight_label: String,
    pub wages_label: String,
    pub profit_label: String,
    pub price_unit: String,
    pub weight_unit: String,
    pub percent_unit: String,
    pub final_price_title: String,
    pub final_price_tooltip: String,
    pub gold_price_title: String,
    pub gold_price_tooltip: String,
    pub wage_amount_title: String,
    pub wage_amount_tooltip: String,
    pub profit_amount_title: String,
    pub profit_amount_tooltip: String,
    pub tax_amount_title: String,
    pub tax_amount_tooltip: String,
    pub final_price_tag: String,
    pub gold_price_tag: String,
    pub wages_tag: String,
    pub profit_tag: String,
    pub tax_tag: String,
    pub nav_gold_price: String,
    pub nav_calculator: String,
    pub nav_rules: String,
    pub nav_contact: String,
    pub mobile_menu_title: String,
    pub chart_title: String,
    pub chart_subtitle: String,
    pub chart_price_label: String,
    pub chart_date_label: String,
    pub chart_tooltip_price_label: String,
    pub chart_min_price_label: String,
    pub chart_max_price_label: String,
    pub chart_current_price_label: String,
    pub chart_yearly_change_label: String,
    pub chart_sources_title: String,
    pub months: Vec<String>,
}

impl TextTable {
    pub fn from_json_str(input: &str) -> GoldResult<Self> {
        let table: Self = serde_json::from_str(input)
            .map_err(|e| GoldError::InvalidData(format!("failed to parse text table: {e}")))?;
        if table.months.len() != MONTHS_PER_YEAR {
            return Err(GoldError::InvalidData(format!(
                "text table must list {MONTHS_PER_YEAR} months, got {}",
                table.months.len()
            )));
        }
        Ok(table)
    }
}

/// Current page language plus the bundled text tables.
#[derive(Debug, Clone)]
pub struct LocalizationStore {
    current: Language,
    fa: TextTable,
    en: TextTable,
}

impl LocalizationStore {
    /// Loads the bundled Persian and English tables.
    pub fn new(initial: Language) -> GoldResult<Self> {
        Ok(Self {
            current: initial,
            fa: TextTable::from_json_str(FA_TEXTS)?,
            en: TextTable::from_json_str(EN_TEXTS)?,
        })
    }

    #[must_use]
    pub fn current(&self) -> Language {
        self.current
    }

    #[must_use]
    pub fn direction(&self) -> TextDirection {
        self.current.direction()
    }

    #[must_use]
    pub fn texts(&self) -> &TextTable {
        self.texts_for(self.current)
    }

    #[must_use]
    pub fn texts_for(&self, language: Language) -> &TextTable {
        match language {
            Language::Fa => &self.fa,
            Language::En => &self.en,
        }
    }

    #[must_use]
    pub fn months(&self) -> Vec<String> {
        self.texts().months.clone()
    }

    /// Switches language by code.
    ///
    /// Returns `Ok(None)` when `code` is already active and the change to
    /// broadcast otherwise.
    pub fn change_language(&mut self, code: &str) -> GoldResult<Option<LanguageChange>> {
        let language: Language = code.parse()?;
        if language == self.current {
            trace!(language = %language, "language unchanged");
            return Ok(None);
        }

        self.current = language;
        debug!(
            language = %language,
            direction = ?language.direction(),
            "language changed"
        );
        Ok(Some(LanguageChange {
            language,
            months: self.months(),
        }))
    }
}
