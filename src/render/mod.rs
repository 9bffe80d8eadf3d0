mod frame;
mod null_renderer;
mod primitives;

pub use frame::{ChartFrame, FillDataset, LineDataset, RedrawMode};
pub use null_renderer::NullRenderer;
pub use primitives::{Color, GradientStop, LinearGradient, Paint};

use crate::error::GoldResult;

/// Contract implemented by the host's chart renderer.
///
/// Backends receive a fully materialized `ChartFrame` so drawing code stays
/// isolated from pricing, localization and hover logic.
pub trait Renderer {
    fn render(&mut self, frame: &ChartFrame) -> GoldResult<()>;
}
