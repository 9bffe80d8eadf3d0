use serde::{Deserialize, Serialize};

use crate::chart::ChartConfig;
use crate::core::Language;
use crate::error::{GoldError, GoldResult};
use crate::localization::MONTHS_PER_YEAR;
use crate::pricing::PricingConfig;

/// Bootstrap configuration for a whole page.
///
/// Serializable so hosts can ship it as a JSON file next to the markup.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PageConfig {
    #[serde(default)]
    pub language: Language,
    #[serde(default)]
    pub pricing: PricingConfig,
    #[serde(default)]
    pub chart: ChartConfig,
}

impl PageConfig {
    #[must_use]
    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    #[must_use]
    pub fn with_pricing(mut self, pricing: PricingConfig) -> Self {
        self.pricing = pricing;
        self
    }

    #[must_use]
    pub fn with_chart(mut self, chart: ChartConfig) -> Self {
        self.chart = chart;
        self
    }

    pub fn validate(&self) -> GoldResult<()> {
        self.pricing.validate()?;
        self.chart.validate()?;
        if self.pricing.conversion_rate != self.chart.conversion_rate {
            return Err(GoldError::Config(format!(
                "pricing and chart conversion rates differ: {} vs {}",
                self.pricing.conversion_rate, self.chart.conversion_rate
            )));
        }
        // The page labels the chart with the bundled month tables.
        if self.chart.series.len() != MONTHS_PER_YEAR {
            return Err(GoldError::Config(format!(
                "chart series must have {MONTHS_PER_YEAR} monthly prices, got {}",
                self.chart.series.len()
            )));
        }
        Ok(())
    }

    /// Serializes config to pretty JSON.
    pub fn to_json_pretty(&self) -> GoldResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| GoldError::Config(format!("failed to serialize config: {e}")))
    }

    /// Deserializes and validates config from JSON.
    pub fn from_json_str(input: &str) -> GoldResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| GoldError::Config(format!("failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }
}
