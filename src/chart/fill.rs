use crate::render::{Color, FillDataset, LinearGradient, Paint};

/// Alpha of the hover fill gradient.
const FILL_ALPHA: f64 = 0.3;

fn orange() -> Color {
    Color::rgb8(249, 115, 22)
}

fn amber() -> Color {
    Color::rgb8(245, 158, 11)
}

fn yellow() -> Color {
    Color::rgb8(234, 179, 8)
}

fn lime() -> Color {
    Color::rgb8(132, 204, 22)
}

fn emerald() -> Color {
    Color::rgb8(16, 185, 129)
}

fn line_green() -> Color {
    Color::rgb8(55, 196, 66)
}

/// Share of the series covered by a fill ending at `fill_index`.
#[must_use]
pub fn fill_progress(fill_index: usize, series_len: usize) -> f64 {
    if series_len <= 1 {
        return 1.0;
    }
    fill_index.min(series_len - 1) as f64 / (series_len - 1) as f64
}

/// Horizontal fill gradient spanning `[0, canvas_width * progress]`.
///
/// Longer fills get more color stops: 2 up to 25%, 3 up to 50%, 4 up to 75%,
/// 5 beyond.
#[must_use]
pub fn fill_gradient(progress: f64, canvas_width: f64) -> LinearGradient {
    let gradient = LinearGradient::horizontal(canvas_width * progress)
        .with_stop(0.0, orange().with_alpha(FILL_ALPHA));

    if progress <= 0.25 {
        gradient.with_stop(1.0, amber().with_alpha(FILL_ALPHA))
    } else if progress <= 0.5 {
        gradient
            .with_stop(0.4, amber().with_alpha(FILL_ALPHA))
            .with_stop(1.0, yellow().with_alpha(FILL_ALPHA))
    } else if progress <= 0.75 {
        gradient
            .with_stop(0.3, amber().with_alpha(FILL_ALPHA))
            .with_stop(0.6, yellow().with_alpha(FILL_ALPHA))
            .with_stop(1.0, lime().with_alpha(FILL_ALPHA))
    } else {
        gradient
            .with_stop(0.25, amber().with_alpha(FILL_ALPHA))
            .with_stop(0.5, yellow().with_alpha(FILL_ALPHA))
            .with_stop(0.75, lime().with_alpha(FILL_ALPHA))
            .with_stop(1.0, emerald().with_alpha(FILL_ALPHA))
    }
}

/// Vertical emerald fade laid over the fill.
#[must_use]
pub fn fill_overlay(canvas_height: f64) -> LinearGradient {
    LinearGradient::vertical(canvas_height)
        .with_stop(0.0, emerald().with_alpha(0.3))
        .with_stop(1.0, emerald().with_alpha(0.05))
}

/// Values for indices `[0, fill_index]`, gaps after.
#[must_use]
pub fn fill_values(displayed: &[f64], fill_index: usize) -> Vec<Option<f64>> {
    displayed
        .iter()
        .enumerate()
        .map(|(index, value)| (index <= fill_index).then_some(*value))
        .collect()
}

/// Complete fill dataset for the given fill boundary; `None` clears it.
#[must_use]
pub fn fill_dataset(
    displayed: &[f64],
    fill_index: Option<usize>,
    canvas_width: f64,
    canvas_height: f64,
) -> FillDataset {
    let Some(fill_index) = fill_index else {
        return FillDataset::cleared(displayed.len());
    };
    let progress = fill_progress(fill_index, displayed.len());
    FillDataset {
        values: fill_values(displayed, fill_index),
        fill: Paint::Gradient(fill_gradient(progress, canvas_width)),
        overlay: Some(fill_overlay(canvas_height)),
    }
}

/// Stroke gradient of the main price line, low prices orange to high green.
#[must_use]
pub fn line_stroke(canvas_width: f64) -> LinearGradient {
    LinearGradient::horizontal(canvas_width)
        .with_stop(0.0, orange())
        .with_stop(0.3, amber())
        .with_stop(0.6, yellow())
        .with_stop(0.8, lime())
        .with_stop(1.0, line_green())
}

/// Point colors bucketed by each price's position between series min and max.
#[must_use]
pub fn point_colors(values: &[f64]) -> Vec<Color> {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let span = max - min;

    values
        .iter()
        .map(|value| {
            let ratio = if span > 0.0 { (value - min) / span } else { 1.0 };
            if ratio < 0.2 {
                orange()
            } else if ratio < 0.4 {
                amber()
            } else if ratio < 0.6 {
                yellow()
            } else if ratio < 0.8 {
                lime()
            } else {
                line_green()
            }
        })
        .collect()
}
