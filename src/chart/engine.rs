use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::core::{
    CurrencyContext, Language, PixelPoint, PriceSeries, SeriesStatistics, StatisticsDisplay,
    TOMAN_PER_USD, Viewport, format_locale_number,
};
use crate::error::{GoldError, GoldResult};
use crate::interaction::{
    FillAnimationState, FillEasingConfig, FillStep, FrameHandle, FrameScheduler, HoverPhase,
    ManualFrameScheduler, NO_HOVER_INDEX, TooltipLayout, TooltipPosition, nearest_index,
    place_tooltip,
};
use crate::render::{ChartFrame, LineDataset, Paint, RedrawMode, Renderer};

use super::fill::{fill_dataset, line_stroke, point_colors};

/// Chart geometry, easing and data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    pub viewport: Viewport,
    #[serde(default)]
    pub easing: FillEasingConfig,
    #[serde(default)]
    pub tooltip: TooltipLayout,
    #[serde(default = "default_conversion_rate")]
    pub conversion_rate: u32,
    #[serde(default)]
    pub series: PriceSeries,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self::new(Viewport::new(800, 320))
    }
}

impl ChartConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            easing: FillEasingConfig::default(),
            tooltip: TooltipLayout::default(),
            conversion_rate: default_conversion_rate(),
            series: PriceSeries::default(),
        }
    }

    #[must_use]
    pub fn with_series(mut self, series: PriceSeries) -> Self {
        self.series = series;
        self
    }

    pub fn validate(&self) -> GoldResult<()> {
        if !self.viewport.is_valid() {
            return Err(GoldError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        if self.conversion_rate == 0 {
            return Err(GoldError::Config("conversion rate must be > 0".to_owned()));
        }
        let FillEasingConfig { speed, tolerance } = self.easing;
        if !speed.is_finite() || speed <= 0.0 || speed > 1.0 {
            return Err(GoldError::Config("easing speed must be in (0, 1]".to_owned()));
        }
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err(GoldError::Config("easing tolerance must be finite and > 0".to_owned()));
        }
        self.series
            .validate()
            .map_err(|err| GoldError::Config(format!("invalid price series: {err}")))
    }
}

fn default_conversion_rate() -> u32 {
    TOMAN_PER_USD
}

/// Pointer sample delivered with a hit-tested hover.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerHover {
    /// Horizontal position converted to data-index space by the renderer.
    pub data_x: f64,
    pub pixel: PixelPoint,
}

impl PointerHover {
    #[must_use]
    pub fn new(data_x: f64, pixel_x: f64, pixel_y: f64) -> Self {
        Self {
            data_x,
            pixel: PixelPoint::new(pixel_x, pixel_y),
        }
    }
}

/// Headline date/price readout above the chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Readout {
    pub date: String,
    pub price: String,
}

/// Floating tooltip and hover guide line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipState {
    pub visible: bool,
    pub position: Option<TooltipPosition>,
    pub date: String,
    pub price: String,
    /// Horizontal pixel of the hover guide line while visible.
    pub hover_line_x: Option<f64>,
}

impl TooltipState {
    fn hidden() -> Self {
        Self {
            visible: false,
            position: None,
            date: String::new(),
            price: String::new(),
            hover_line_x: None,
        }
    }
}

/// Hover-driven price chart: owns the series, fill animation and readouts
/// and drives an external [`Renderer`] one [`ChartFrame`] at a time.
pub struct ChartInteractionEngine<R: Renderer, S: FrameScheduler> {
    renderer: R,
    scheduler: S,
    config: ChartConfig,
    context: CurrencyContext,
    labels: Vec<String>,
    displayed: Vec<f64>,
    line: LineDataset,
    animation: FillAnimationState,
    pending_frame: Option<FrameHandle>,
    statistics: SeriesStatistics,
    readout: Readout,
    tooltip: TooltipState,
}

impl<R: Renderer, S: FrameScheduler> ChartInteractionEngine<R, S> {
    /// Builds the chart and renders the initial frame.
    ///
    /// A missing renderer disables the chart entirely: nothing is computed.
    pub fn attach(
        renderer: Option<R>,
        scheduler: S,
        config: ChartConfig,
        language: Language,
        labels: Vec<String>,
    ) -> GoldResult<Self> {
        let Some(renderer) = renderer else {
            return Err(GoldError::MissingIntegrationPoint {
                component: "chart",
                target: "renderer".to_owned(),
            });
        };
        config.validate()?;
        validate_labels(&labels, config.series.len())?;

        let context = CurrencyContext::new(language, config.conversion_rate);
        let displayed = config.series.displayed(context);
        let line = LineDataset {
            values: displayed.clone(),
            stroke: Paint::Gradient(line_stroke(config.viewport.width_f64())),
            point_colors: point_colors(config.series.base_prices()),
        };
        let statistics = statistics_of(&displayed)?;

        let mut engine = Self {
            renderer,
            scheduler,
            animation: FillAnimationState::new(config.easing),
            config,
            context,
            labels,
            displayed,
            line,
            pending_frame: None,
            statistics,
            readout: Readout {
                date: String::new(),
                price: String::new(),
            },
            tooltip: TooltipState::hidden(),
        };
        engine.readout = engine.idle_readout();
        engine.render(RedrawMode::Animated)?;
        debug!(
            language = %language,
            points = engine.displayed.len(),
            "chart engine attached"
        );
        Ok(engine)
    }

    #[must_use]
    pub fn context(&self) -> CurrencyContext {
        self.context
    }

    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Series converted to the active display currency.
    #[must_use]
    pub fn displayed_series(&self) -> &[f64] {
        &self.displayed
    }

    #[must_use]
    pub fn statistics(&self) -> SeriesStatistics {
        self.statistics
    }

    #[must_use]
    pub fn statistics_display(&self) -> StatisticsDisplay {
        self.statistics.display(self.context.language)
    }

    #[must_use]
    pub fn readout(&self) -> &Readout {
        &self.readout
    }

    #[must_use]
    pub fn tooltip(&self) -> &TooltipState {
        &self.tooltip
    }

    #[must_use]
    pub fn animation(&self) -> FillAnimationState {
        self.animation
    }

    #[must_use]
    pub fn phase(&self) -> HoverPhase {
        self.animation.phase()
    }

    /// Last index currently covered by the fill.
    #[must_use]
    pub fn fill_index(&self) -> Option<usize> {
        self.animation.fill_index(self.displayed.len())
    }

    #[must_use]
    pub fn pending_frame(&self) -> Option<FrameHandle> {
        self.pending_frame
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Handles pointer movement. `None` means the pointer hit no data point
    /// (or left the chart) and resets toward idle.
    pub fn pointer_hover(&mut self, hover: Option<PointerHover>) {
        let Some(hover) = hover else {
            self.pointer_leave();
            return;
        };
        let Some(index) = nearest_index(hover.data_x, self.displayed.len()) else {
            trace!(data_x = hover.data_x, "ignoring hover without a data index");
            return;
        };

        let price = format_locale_number(self.displayed[index], self.context.language);
        let month = self.labels[index].clone();
        self.readout = Readout {
            date: self.dated_label(&month),
            price: price.clone(),
        };
        self.tooltip = TooltipState {
            visible: true,
            position: Some(place_tooltip(
                hover.pixel,
                self.config.viewport,
                self.config.tooltip,
            )),
            date: month,
            price,
            hover_line_x: Some(hover.pixel.x),
        };

        trace!(index, "hover target updated");
        self.animation.set_target(index as i32);
        self.start_fill_animation();
    }

    /// Pointer left the plot: restore idle readouts and ease the fill back out.
    pub fn pointer_leave(&mut self) {
        self.readout = self.idle_readout();
        self.tooltip = TooltipState::hidden();
        self.animation.set_target(NO_HOVER_INDEX);
        self.start_fill_animation();
    }

    /// Applies a language/currency change: labels, converted series,
    /// statistics and idle readout are replaced; hover animation is kept.
    pub fn apply_language(&mut self, language: Language, labels: Vec<String>) -> GoldResult<()> {
        validate_labels(&labels, self.config.series.len())?;

        self.context = self.context.with_language(language);
        self.labels = labels;
        self.displayed = self.config.series.displayed(self.context);
        self.line.values = self.displayed.clone();
        self.statistics = statistics_of(&self.displayed)?;
        self.readout = self.idle_readout();

        debug!(
            language = %language,
            phase = ?self.animation.phase(),
            "chart language applied"
        );
        self.render(RedrawMode::Animated)
    }

    /// Advances the fill animation for the frame identified by `handle`.
    ///
    /// Frames that are not the currently pending one are ignored. A renderer
    /// failure halts the loop.
    pub fn on_animation_frame(&mut self, handle: FrameHandle) -> GoldResult<()> {
        if self.pending_frame != Some(handle) {
            trace!(frame = handle.id(), "ignoring stale animation frame");
            return Ok(());
        }
        self.pending_frame = None;

        let step = self.animation.step();
        if step == FillStep::Stopped {
            return Ok(());
        }

        if let Err(err) = self.render(RedrawMode::Immediate) {
            warn!(error = %err, "halting fill animation after render failure");
            self.animation.halt();
            return Err(err);
        }

        match step {
            FillStep::Advanced => {
                self.pending_frame = Some(self.scheduler.request_frame());
            }
            FillStep::Settled => {
                debug!(
                    index = self.animation.target_index(),
                    "fill animation settled"
                );
            }
            FillStep::Stopped => {}
        }
        Ok(())
    }

    /// Cancels any scheduled frame and stops the loop where it is.
    pub fn stop_animation(&mut self) {
        if let Some(handle) = self.pending_frame.take() {
            self.scheduler.cancel_frame(handle);
        }
        self.animation.halt();
    }

    /// Current frame as it would be handed to the renderer.
    #[must_use]
    pub fn frame(&self, mode: RedrawMode) -> ChartFrame {
        ChartFrame {
            viewport: self.config.viewport,
            labels: self.labels.clone(),
            line: self.line.clone(),
            fill: fill_dataset(
                &self.displayed,
                self.fill_index(),
                self.config.viewport.width_f64(),
                self.config.viewport.height_f64(),
            ),
            mode,
        }
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    fn start_fill_animation(&mut self) {
        if !self.animation.start() {
            return;
        }
        trace!(
            current = self.animation.current_index(),
            target = self.animation.target_index(),
            "fill animation started"
        );
        self.pending_frame = Some(self.scheduler.request_frame());
    }

    fn render(&mut self, mode: RedrawMode) -> GoldResult<()> {
        let frame = self.frame(mode);
        self.renderer.render(&frame)
    }

    fn idle_readout(&self) -> Readout {
        let last = self.displayed.len() - 1;
        Readout {
            date: self.dated_label(&self.labels[last]),
            price: format_locale_number(self.displayed[last], self.context.language),
        }
    }

    /// `"{month} {year}"` for both hovered and idle readouts.
    ///
    /// Every point of the bundled series belongs to one calendar year, so a
    /// hovered month never gets an earlier year than the idle readout.
    fn dated_label(&self, month: &str) -> String {
        format!("{month} {}", self.context.language.series_year())
    }
}

impl<R: Renderer> ChartInteractionEngine<R, ManualFrameScheduler> {
    /// Delivers pending manual frames until the loop stops or `max_frames`
    /// were processed. Returns the number of frames delivered.
    pub fn drain_frames(&mut self, max_frames: usize) -> GoldResult<usize> {
        let mut delivered = 0;
        while delivered < max_frames {
            let Some(handle) = self.scheduler.next_due() else {
                break;
            };
            self.on_animation_frame(handle)?;
            delivered += 1;
        }
        Ok(delivered)
    }
}

fn validate_labels(labels: &[String], series_len: usize) -> GoldResult<()> {
    if labels.len() != series_len {
        return Err(GoldError::InvalidData(format!(
            "expected {series_len} month labels, got {}",
            labels.len()
        )));
    }
    Ok(())
}

fn statistics_of(displayed: &[f64]) -> GoldResult<SeriesStatistics> {
    SeriesStatistics::from_values(displayed)
        .ok_or_else(|| GoldError::InvalidData("price series must not be empty".to_owned()))
}
