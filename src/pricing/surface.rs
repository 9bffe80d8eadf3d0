use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

use super::PriceField;

/// Text target written by the pricing engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputTarget {
    GoldPrice,
    WageAmount,
    ProfitAmount,
    TaxAmount,
    FinalPrice,
    WageBadge,
    ProfitBadge,
}

impl OutputTarget {
    /// Targets the engine cannot run without.
    pub const REQUIRED: [OutputTarget; 5] = [
        OutputTarget::GoldPrice,
        OutputTarget::WageAmount,
        OutputTarget::ProfitAmount,
        OutputTarget::TaxAmount,
        OutputTarget::FinalPrice,
    ];

    #[must_use]
    pub const fn element_id(self) -> &'static str {
        match self {
            Self::GoldPrice => "gold-price",
            Self::WageAmount => "wage-amount",
            Self::ProfitAmount => "profit-amount",
            Self::TaxAmount => "tax-amount",
            Self::FinalPrice => "final-price",
            Self::WageBadge => "wage-badge",
            Self::ProfitBadge => "profit-badge",
        }
    }
}

/// Host binding for the calculator form.
///
/// Input events reach the engine through `PricingEngine::on_input`; the
/// surface only receives the reformatted field and output texts.
pub trait FormSurface {
    fn has_field(&self, field: PriceField) -> bool;
    fn has_output(&self, target: OutputTarget) -> bool;
    fn set_field_text(&mut self, field: PriceField, text: &str);
    fn set_output_text(&mut self, target: OutputTarget, text: &str);
}

/// In-memory form used by tests and headless hosts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryFormSurface {
    missing_fields: IndexSet<PriceField>,
    missing_outputs: IndexSet<OutputTarget>,
    fields: IndexMap<PriceField, String>,
    outputs: IndexMap<OutputTarget, String>,
    writes: usize,
}

impl MemoryFormSurface {
    #[must_use]
    pub fn without_field(mut self, field: PriceField) -> Self {
        self.missing_fields.insert(field);
        self
    }

    #[must_use]
    pub fn without_output(mut self, target: OutputTarget) -> Self {
        self.missing_outputs.insert(target);
        self
    }

    #[must_use]
    pub fn field_text(&self, field: PriceField) -> Option<&str> {
        self.fields.get(&field).map(String::as_str)
    }

    #[must_use]
    pub fn output_text(&self, target: OutputTarget) -> Option<&str> {
        self.outputs.get(&target).map(String::as_str)
    }

    /// Total number of text writes received.
    #[must_use]
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl FormSurface for MemoryFormSurface {
    fn has_field(&self, field: PriceField) -> bool {
        !self.missing_fields.contains(&field)
    }

    fn has_output(&self, target: OutputTarget) -> bool {
        !self.missing_outputs.contains(&target)
    }

    fn set_field_text(&mut self, field: PriceField, text: &str) {
        if self.has_field(field) {
            self.fields.insert(field, text.to_owned());
            self.writes += 1;
        }
    }

    fn set_output_text(&mut self, target: OutputTarget, text: &str) {
        if self.has_output(target) {
            self.outputs.insert(target, text.to_owned());
            self.writes += 1;
        }
    }
}
