use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{GoldError, GoldResult};
use crate::render::{Color, LinearGradient, Paint};

/// How the renderer should apply a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RedrawMode {
    /// Renderer may tween from the previous frame.
    Animated,
    /// Apply immediately without transitions; used by per-frame fill updates.
    Immediate,
}

/// Main price line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineDataset {
    pub values: Vec<f64>,
    pub stroke: Paint,
    pub point_colors: Vec<Color>,
}

/// Hover area fill. `None` values are gaps so the fill stops at the hovered point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FillDataset {
    pub values: Vec<Option<f64>>,
    pub fill: Paint,
    pub overlay: Option<LinearGradient>,
}

impl FillDataset {
    /// Fully reset fill: every point empty and a transparent paint.
    #[must_use]
    pub fn cleared(len: usize) -> Self {
        Self {
            values: vec![None; len],
            fill: Paint::transparent(),
            overlay: None,
        }
    }

    #[must_use]
    pub fn filled_len(&self) -> usize {
        self.values.iter().take_while(|value| value.is_some()).count()
    }

    #[must_use]
    pub fn is_cleared(&self) -> bool {
        self.values.iter().all(Option::is_none)
    }
}

/// Backend-agnostic description of one chart draw pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartFrame {
    pub viewport: Viewport,
    pub labels: Vec<String>,
    pub line: LineDataset,
    pub fill: FillDataset,
    pub mode: RedrawMode,
}

impl ChartFrame {
    pub fn validate(&self) -> GoldResult<()> {
        if !self.viewport.is_valid() {
            return Err(GoldError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        let len = self.line.values.len();
        if self.labels.len() != len || self.fill.values.len() != len {
            return Err(GoldError::InvalidData(format!(
                "frame datasets must align: labels={}, line={len}, fill={}",
                self.labels.len(),
                self.fill.values.len()
            )));
        }
        if self.line.point_colors.len() != len {
            return Err(GoldError::InvalidData(
                "one point color per line value is required".to_owned(),
            ));
        }
        if self.line.values.iter().any(|value| !value.is_finite()) {
            return Err(GoldError::InvalidData("line values must be finite".to_owned()));
        }
        if self.fill.values.iter().flatten().any(|value| !value.is_finite()) {
            return Err(GoldError::InvalidData("fill values must be finite".to_owned()));
        }

        self.line.stroke.validate()?;
        for color in &self.line.point_colors {
            color.validate()?;
        }
        self.fill.fill.validate()?;
        if let Some(overlay) = &self.fill.overlay {
            overlay.validate()?;
        }
        Ok(())
    }
}
