use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::{
    CurrencyContext, Language, TOMAN_PER_USD, clean_numeric_text, format_for_language,
};
use crate::error::{GoldError, GoldResult};

use super::formula::{DEFAULT_TAX_RATE, compute_with_tax_rate};
use super::{DerivedPrice, FormSurface, OutputTarget, PriceField, PriceInputs};

/// Calculator tuning. Defaults reproduce the published page.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Toman per US dollar.
    #[serde(default = "default_conversion_rate")]
    pub conversion_rate: u32,
    #[serde(default = "default_tax_rate")]
    pub tax_rate: f64,
    #[serde(default = "default_wage_percent")]
    pub default_wage_percent: f64,
    #[serde(default = "default_profit_percent")]
    pub default_profit_percent: f64,
    /// Unit price shown after load or a language switch, in Toman.
    #[serde(default = "default_seed_unit_price")]
    pub seed_unit_price: f64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            conversion_rate: default_conversion_rate(),
            tax_rate: default_tax_rate(),
            default_wage_percent: default_wage_percent(),
            default_profit_percent: default_profit_percent(),
            seed_unit_price: default_seed_unit_price(),
        }
    }
}

impl PricingConfig {
    pub fn validate(&self) -> GoldResult<()> {
        if self.conversion_rate == 0 {
            return Err(GoldError::Config("conversion rate must be > 0".to_owned()));
        }
        for (name, value) in [
            ("tax_rate", self.tax_rate),
            ("default_wage_percent", self.default_wage_percent),
            ("default_profit_percent", self.default_profit_percent),
            ("seed_unit_price", self.seed_unit_price),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(GoldError::Config(format!("`{name}` must be finite and >= 0")));
            }
        }
        Ok(())
    }

    /// Seed unit price as plain ASCII text in the display currency of `context`.
    #[must_use]
    pub fn seed_text(&self, context: CurrencyContext) -> String {
        if context.is_foreign() {
            format!("{:.2}", context.to_display(self.seed_unit_price))
        } else {
            self.seed_unit_price.to_string()
        }
    }
}

fn default_conversion_rate() -> u32 {
    TOMAN_PER_USD
}

fn default_tax_rate() -> f64 {
    DEFAULT_TAX_RATE
}

fn default_wage_percent() -> f64 {
    18.0
}

fn default_profit_percent() -> f64 {
    7.0
}

fn default_seed_unit_price() -> f64 {
    7_189_000.0
}

/// Reformats raw field text for `language`.
///
/// Grouping separators are dropped, native digits mapped to ASCII and every
/// other non-numeric char discarded before regrouping and relocalizing.
#[must_use]
pub fn normalize_field(raw: &str, language: Language, is_currency_field: bool) -> String {
    let cleaned = clean_numeric_text(raw);
    let cleaned = if cleaned.is_empty() { "0" } else { cleaned.as_str() };
    format_for_language(cleaned, language, is_currency_field)
}

/// Live gold-price calculator bound to a [`FormSurface`].
pub struct PricingEngine<S: FormSurface> {
    surface: S,
    config: PricingConfig,
    context: CurrencyContext,
    fields: [String; 4],
}

impl<S: FormSurface> PricingEngine<S> {
    /// Binds the engine to `surface`, writes default inputs and clears outputs.
    ///
    /// Fails when a field or a required output target is absent.
    pub fn attach(surface: S, config: PricingConfig, language: Language) -> GoldResult<Self> {
        config.validate()?;

        if let Some(field) = PriceField::ALL
            .into_iter()
            .find(|field| !surface.has_field(*field))
        {
            return Err(GoldError::MissingIntegrationPoint {
                component: "pricing",
                target: field.element_id().to_owned(),
            });
        }
        if let Some(target) = OutputTarget::REQUIRED
            .into_iter()
            .find(|target| !surface.has_output(*target))
        {
            return Err(GoldError::MissingIntegrationPoint {
                component: "pricing",
                target: target.element_id().to_owned(),
            });
        }

        let mut engine = Self {
            surface,
            config,
            context: CurrencyContext::new(language, config.conversion_rate),
            fields: Default::default(),
        };
        engine.write_default_inputs();
        engine.recompute();
        debug!(language = %language, "pricing engine attached");
        Ok(engine)
    }

    #[must_use]
    pub fn context(&self) -> CurrencyContext {
        self.context
    }

    #[must_use]
    pub fn config(&self) -> PricingConfig {
        self.config
    }

    #[must_use]
    pub fn field_text(&self, field: PriceField) -> &str {
        &self.fields[field.index()]
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    #[must_use]
    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Reformats raw text for the active language.
    #[must_use]
    pub fn normalize_field(&self, raw: &str, is_currency_field: bool) -> String {
        normalize_field(raw, self.context.language, is_currency_field)
    }

    #[must_use]
    pub fn inputs(&self) -> PriceInputs {
        PriceInputs::parse(
            self.field_text(PriceField::UnitPrice),
            self.field_text(PriceField::Weight),
            self.field_text(PriceField::WagePercent),
            self.field_text(PriceField::ProfitPercent),
        )
    }

    /// Outputs for the current fields, in the display currency.
    #[must_use]
    pub fn derived(&self) -> DerivedPrice {
        compute_with_tax_rate(&self.inputs(), self.context, self.config.tax_rate)
    }

    /// Handles a keystroke: reformats the field live, then recomputes.
    pub fn on_input(&mut self, field: PriceField, raw: &str) -> DerivedPrice {
        let formatted = self.normalize_field(raw, field.is_currency());
        trace!(?field, raw, formatted = %formatted, "field reformatted");
        self.write_field(field, formatted);
        self.recompute()
    }

    /// Switches display currency and digit script.
    ///
    /// The unit price returns to the seed value in the new currency; the other
    /// fields keep their values and are re-rendered in the new script.
    pub fn on_currency_context_change(&mut self, language: Language) -> DerivedPrice {
        self.context = self.context.with_language(language);
        debug!(language = %language, foreign = self.context.is_foreign(), "pricing context changed");

        let seed = self.config.seed_text(self.context);
        self.write_field(
            PriceField::UnitPrice,
            format_for_language(&seed, language, true),
        );
        for field in [
            PriceField::Weight,
            PriceField::WagePercent,
            PriceField::ProfitPercent,
        ] {
            let cleaned = clean_numeric_text(self.field_text(field));
            if cleaned.is_empty() {
                continue;
            }
            self.write_field(field, format_for_language(&cleaned, language, false));
        }
        self.recompute()
    }

    /// Recomputes and writes all outputs and badges.
    pub fn recompute(&mut self) -> DerivedPrice {
        let inputs = self.inputs();
        let language = self.context.language;

        self.write_badge(OutputTarget::WageBadge, inputs.wage_percent);
        self.write_badge(OutputTarget::ProfitBadge, inputs.profit_percent);

        let derived = compute_with_tax_rate(&inputs, self.context, self.config.tax_rate);
        let display = derived.display(language);
        for (target, text) in [
            (OutputTarget::GoldPrice, &display.gold_price),
            (OutputTarget::WageAmount, &display.wage_amount),
            (OutputTarget::ProfitAmount, &display.profit_amount),
            (OutputTarget::TaxAmount, &display.tax_amount),
            (OutputTarget::FinalPrice, &display.final_price),
        ] {
            self.surface.set_output_text(target, text);
        }

        trace!(
            weight = inputs.weight,
            final_price = derived.final_price,
            cleared = derived.is_zero(),
            "pricing recomputed"
        );
        derived
    }

    fn write_default_inputs(&mut self) {
        let language = self.context.language;
        let seed = self.config.seed_text(self.context);
        self.write_field(
            PriceField::UnitPrice,
            format_for_language(&seed, language, true),
        );
        self.write_field(PriceField::Weight, String::new());
        self.write_field(
            PriceField::WagePercent,
            format_for_language(&self.config.default_wage_percent.to_string(), language, false),
        );
        self.write_field(
            PriceField::ProfitPercent,
            format_for_language(
                &self.config.default_profit_percent.to_string(),
                language,
                false,
            ),
        );
    }

    fn write_field(&mut self, field: PriceField, text: String) {
        self.surface.set_field_text(field, &text);
        self.fields[field.index()] = text;
    }

    fn write_badge(&mut self, target: OutputTarget, percent: f64) {
        if !self.surface.has_output(target) {
            return;
        }
        let text = format!(
            "{}%",
            format_for_language(&percent.to_string(), self.context.language, false)
        );
        self.surface.set_output_text(target, &text);
    }
}
