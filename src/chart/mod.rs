//! Price chart hover interaction: fill easing, gradients, tooltip and
//! statistics, rendered through the host's [`crate::render::Renderer`].

mod engine;
mod fill;

pub use engine::{
    ChartConfig, ChartInteractionEngine, PointerHover, Readout, TooltipState,
};
pub use fill::{
    fill_dataset, fill_gradient, fill_overlay, fill_progress, fill_values, line_stroke,
    point_colors,
};
