use tracing::{debug, warn};

use crate::chart::ChartInteractionEngine;
use crate::error::{GoldError, GoldResult};
use crate::extensions::{LanguageChange, LanguageListener};
use crate::interaction::FrameScheduler;
use crate::localization::{LocalizationStore, PreferenceStore, Theme, ThemeStore};
use crate::pricing::{FormSurface, PricingEngine};
use crate::render::Renderer;

use super::PageConfig;

/// Owning coordinator of one page.
///
/// Components whose integration points are missing stay disabled; the rest
/// of the page keeps working.
pub struct GoldPage<F, R, S, P>
where
    F: FormSurface,
    R: Renderer,
    S: FrameScheduler,
    P: PreferenceStore,
{
    localization: LocalizationStore,
    theme: ThemeStore<P>,
    pricing: Option<PricingEngine<F>>,
    chart: Option<ChartInteractionEngine<R, S>>,
    listeners: Vec<Box<dyn LanguageListener>>,
}

impl<F, R, S, P> GoldPage<F, R, S, P>
where
    F: FormSurface,
    R: Renderer,
    S: FrameScheduler,
    P: PreferenceStore,
{
    /// Builds every component. Only invalid config or a broken text bundle
    /// fail the page as a whole.
    pub fn new(
        config: PageConfig,
        surface: F,
        renderer: Option<R>,
        scheduler: S,
        storage: P,
        system_prefers_dark: bool,
    ) -> GoldResult<Self> {
        config.validate()?;
        let localization = LocalizationStore::new(config.language)?;
        let theme = ThemeStore::load(storage, system_prefers_dark);

        let pricing = PricingEngine::attach(surface, config.pricing, config.language)
            .inspect_err(|err| warn!(error = %err, "pricing calculator disabled"))
            .ok();
        let chart = ChartInteractionEngine::attach(
            renderer,
            scheduler,
            config.chart,
            config.language,
            localization.months(),
        )
        .inspect_err(|err| warn!(error = %err, "price chart disabled"))
        .ok();

        debug!(
            language = %config.language,
            pricing_enabled = pricing.is_some(),
            chart_enabled = chart.is_some(),
            theme = %theme.preference(),
            "page initialized"
        );

        Ok(Self {
            localization,
            theme,
            pricing,
            chart,
            listeners: Vec::new(),
        })
    }

    #[must_use]
    pub fn localization(&self) -> &LocalizationStore {
        &self.localization
    }

    #[must_use]
    pub fn pricing(&self) -> Option<&PricingEngine<F>> {
        self.pricing.as_ref()
    }

    pub fn pricing_mut(&mut self) -> Option<&mut PricingEngine<F>> {
        self.pricing.as_mut()
    }

    #[must_use]
    pub fn chart(&self) -> Option<&ChartInteractionEngine<R, S>> {
        self.chart.as_ref()
    }

    pub fn chart_mut(&mut self) -> Option<&mut ChartInteractionEngine<R, S>> {
        self.chart.as_mut()
    }

    #[must_use]
    pub fn theme(&self) -> &ThemeStore<P> {
        &self.theme
    }

    /// Adds an extra language observer. Ids must be unique.
    pub fn register_listener(&mut self, listener: Box<dyn LanguageListener>) -> GoldResult<()> {
        if self
            .listeners
            .iter()
            .any(|existing| existing.id() == listener.id())
        {
            return Err(GoldError::InvalidData(format!(
                "language listener `{}` is already registered",
                listener.id()
            )));
        }
        self.listeners.push(listener);
        Ok(())
    }

    /// Switches language and notifies every component.
    ///
    /// Returns `false` when `code` is already the active language. A failing
    /// receiver is logged and does not stop delivery to the others.
    pub fn change_language(&mut self, code: &str) -> GoldResult<bool> {
        let Some(change) = self.localization.change_language(code)? else {
            return Ok(false);
        };

        if let Some(pricing) = self.pricing.as_mut() {
            deliver(pricing, &change);
        }
        if let Some(chart) = self.chart.as_mut() {
            deliver(chart, &change);
        }
        for listener in &mut self.listeners {
            deliver(listener.as_mut(), &change);
        }
        Ok(true)
    }

    pub fn set_theme(&mut self, name: &str) -> GoldResult<Theme> {
        self.theme.set_theme(name)
    }

    pub fn on_system_theme_change(&mut self, prefers_dark: bool) -> Theme {
        self.theme.on_system_theme_change(prefers_dark)
    }
}

fn deliver<L: LanguageListener + ?Sized>(listener: &mut L, change: &LanguageChange) {
    if let Err(err) = listener.on_language_change(change) {
        warn!(
            listener = listener.id(),
            error = %err,
            "language change not applied"
        );
    }
}
