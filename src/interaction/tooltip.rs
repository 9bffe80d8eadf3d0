use serde::{Deserialize, Serialize};

use crate::core::{PixelPoint, Viewport};

/// Tooltip box geometry and placement thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TooltipLayout {
    pub width: f64,
    pub height: f64,
    /// Minimum distance kept from every chart edge.
    pub margin: f64,
    /// Gap between the pointer and the box bottom.
    pub vertical_gap: f64,
    /// Horizontal gap when the box is shifted to one side of the pointer.
    pub side_gap: f64,
    /// Pointer positions below this width fraction shift the box right.
    pub left_zone: f64,
    /// Pointer positions above this width fraction shift the box left.
    pub right_zone: f64,
}

impl Default for TooltipLayout {
    fn default() -> Self {
        Self {
            width: 200.0,
            height: 80.0,
            margin: 20.0,
            vertical_gap: 10.0,
            side_gap: 15.0,
            left_zone: 0.3,
            right_zone: 0.7,
        }
    }
}

/// Top-left corner of the tooltip box in chart pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TooltipPosition {
    pub left: f64,
    pub top: f64,
}

/// Places the tooltip above the pointer, shifted away from the near edge and
/// clamped inside the chart minus the layout margin.
#[must_use]
pub fn place_tooltip(pointer: PixelPoint, chart: Viewport, layout: TooltipLayout) -> TooltipPosition {
    let chart_width = chart.width_f64();
    let chart_height = chart.height_f64();

    let left = if pointer.x < chart_width * layout.left_zone {
        pointer.x + layout.side_gap
    } else if pointer.x > chart_width * layout.right_zone {
        pointer.x - layout.width - layout.side_gap
    } else {
        pointer.x - layout.width / 2.0
    };
    let top = pointer.y - layout.height - layout.vertical_gap;

    TooltipPosition {
        left: clamp_into(left, layout.margin, chart_width - layout.width - layout.margin),
        top: clamp_into(top, layout.margin, chart_height - layout.height - layout.margin),
    }
}

// Upper bound first, then lower: a chart smaller than the box pins to the margin.
fn clamp_into(value: f64, low: f64, high: f64) -> f64 {
    value.min(high).max(low)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_above_pointer_in_middle_zone() {
        let position = place_tooltip(
            PixelPoint::new(400.0, 200.0),
            Viewport::new(800, 400),
            TooltipLayout::default(),
        );
        assert_eq!(position.left, 300.0);
        assert_eq!(position.top, 110.0);
    }

    #[test]
    fn clamps_near_edges() {
        let layout = TooltipLayout::default();
        let chart = Viewport::new(800, 400);

        let left_edge = place_tooltip(PixelPoint::new(2.0, 30.0), chart, layout);
        assert_eq!(left_edge.left, 20.0);
        assert_eq!(left_edge.top, 20.0);

        let right_edge = place_tooltip(PixelPoint::new(790.0, 399.0), chart, layout);
        assert_eq!(right_edge.left, 575.0);
        assert_eq!(right_edge.top, 300.0);
    }
}
