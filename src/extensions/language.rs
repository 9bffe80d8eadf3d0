use serde::{Deserialize, Serialize};

use crate::chart::ChartInteractionEngine;
use crate::core::Language;
use crate::error::GoldResult;
use crate::interaction::FrameScheduler;
use crate::pricing::{FormSurface, PricingEngine};
use crate::render::Renderer;

/// Notification emitted when the page language changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageChange {
    pub language: Language,
    /// Month labels of the new language, in series order.
    pub months: Vec<String>,
}

/// Observer of language changes.
///
/// Receivers react independently; handling the same change twice must leave
/// the receiver in the same state.
pub trait LanguageListener {
    fn id(&self) -> &str;
    fn on_language_change(&mut self, change: &LanguageChange) -> GoldResult<()>;
}

impl<S: FormSurface> LanguageListener for PricingEngine<S> {
    fn id(&self) -> &str {
        "pricing"
    }

    fn on_language_change(&mut self, change: &LanguageChange) -> GoldResult<()> {
        self.on_currency_context_change(change.language);
        Ok(())
    }
}

impl<R: Renderer, S: FrameScheduler> LanguageListener for ChartInteractionEngine<R, S> {
    fn id(&self) -> &str {
        "chart"
    }

    fn on_language_change(&mut self, change: &LanguageChange) -> GoldResult<()> {
        self.apply_language(change.language, change.months.clone())
    }
}
