use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{GoldError, GoldResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Builds a color from 8-bit channels, as written in CSS.
    #[must_use]
    pub fn rgba8(red: u8, green: u8, blue: u8, alpha: f64) -> Self {
        Self::rgba(
            f64::from(red) / 255.0,
            f64::from(green) / 255.0,
            f64::from(blue) / 255.0,
            alpha,
        )
    }

    #[must_use]
    pub fn rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::rgba8(red, green, blue, 1.0)
    }

    #[must_use]
    pub const fn transparent() -> Self {
        Self::rgba(0.0, 0.0, 0.0, 0.0)
    }

    #[must_use]
    pub fn with_alpha(self, alpha: f64) -> Self {
        Self { alpha, ..self }
    }

    pub fn validate(self) -> GoldResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(GoldError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// One color stop at a normalized offset along a gradient.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    pub offset: f64,
    pub color: Color,
}

impl GradientStop {
    #[must_use]
    pub const fn new(offset: f64, color: Color) -> Self {
        Self { offset, color }
    }
}

/// Linear gradient between two points in pixel space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearGradient {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
    pub stops: SmallVec<[GradientStop; 5]>,
}

impl LinearGradient {
    #[must_use]
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self {
            x0,
            y0,
            x1,
            y1,
            stops: SmallVec::new(),
        }
    }

    #[must_use]
    pub fn horizontal(width: f64) -> Self {
        Self::new(0.0, 0.0, width, 0.0)
    }

    #[must_use]
    pub fn vertical(height: f64) -> Self {
        Self::new(0.0, 0.0, 0.0, height)
    }

    #[must_use]
    pub fn with_stop(mut self, offset: f64, color: Color) -> Self {
        self.stops.push(GradientStop::new(offset, color));
        self
    }

    pub fn validate(&self) -> GoldResult<()> {
        if !self.x0.is_finite() || !self.y0.is_finite() || !self.x1.is_finite() || !self.y1.is_finite()
        {
            return Err(GoldError::InvalidData("gradient coordinates must be finite".to_owned()));
        }
        if self.stops.is_empty() {
            return Err(GoldError::InvalidData("gradient needs at least one color stop".to_owned()));
        }

        let mut previous = 0.0;
        for stop in &self.stops {
            if !stop.offset.is_finite() || !(0.0..=1.0).contains(&stop.offset) {
                return Err(GoldError::InvalidData(
                    "gradient stop offset must be in [0, 1]".to_owned(),
                ));
            }
            if stop.offset < previous {
                return Err(GoldError::InvalidData(
                    "gradient stop offsets must be ascending".to_owned(),
                ));
            }
            previous = stop.offset;
            stop.color.validate()?;
        }
        Ok(())
    }
}

/// Paint used for a dataset stroke or fill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Paint {
    Solid(Color),
    Gradient(LinearGradient),
}

impl Paint {
    #[must_use]
    pub const fn transparent() -> Self {
        Self::Solid(Color::transparent())
    }

    pub fn validate(&self) -> GoldResult<()> {
        match self {
            Self::Solid(color) => color.validate(),
            Self::Gradient(gradient) => gradient.validate(),
        }
    }
}
