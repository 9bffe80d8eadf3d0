mod scheduler;
mod tooltip;

pub use scheduler::{FrameHandle, FrameScheduler, ManualFrameScheduler};
pub use tooltip::{TooltipLayout, TooltipPosition, place_tooltip};

use serde::{Deserialize, Serialize};

/// Fill index meaning "no hover, fully reset".
pub const NO_HOVER_INDEX: i32 = -1;

/// Observable phase of the hover fill state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HoverPhase {
    /// No hover and nothing filled.
    Idle,
    /// Settled on a hovered data point.
    Tracking,
    /// Animation loop running toward the target.
    Converging,
}

/// Tuning for the exponential fill ease.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FillEasingConfig {
    /// Fraction of the remaining distance covered per frame.
    pub speed: f64,
    /// Distance below which the current index snaps to the target.
    pub tolerance: f64,
}

impl Default for FillEasingConfig {
    fn default() -> Self {
        Self {
            speed: 0.08,
            tolerance: 0.1,
        }
    }
}

/// Result of advancing the animation by one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FillStep {
    /// Moved closer; another frame is needed.
    Advanced,
    /// Snapped onto the target and stopped.
    Settled,
    /// Nothing to do, the loop is not running.
    Stopped,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FillAnimationState {
    current_index: f64,
    target_index: i32,
    running: bool,
    easing: FillEasingConfig,
}

impl Default for FillAnimationState {
    fn default() -> Self {
        Self::new(FillEasingConfig::default())
    }
}

impl FillAnimationState {
    #[must_use]
    pub fn new(easing: FillEasingConfig) -> Self {
        Self {
            current_index: f64::from(NO_HOVER_INDEX),
            target_index: NO_HOVER_INDEX,
            running: false,
            easing,
        }
    }

    #[must_use]
    pub fn current_index(self) -> f64 {
        self.current_index
    }

    #[must_use]
    pub fn target_index(self) -> i32 {
        self.target_index
    }

    #[must_use]
    pub fn is_running(self) -> bool {
        self.running
    }

    #[must_use]
    pub fn easing(self) -> FillEasingConfig {
        self.easing
    }

    #[must_use]
    pub fn phase(self) -> HoverPhase {
        if self.running {
            HoverPhase::Converging
        } else if self.target_index == NO_HOVER_INDEX {
            HoverPhase::Idle
        } else {
            HoverPhase::Tracking
        }
    }

    pub fn set_target(&mut self, target_index: i32) {
        self.target_index = target_index.max(NO_HOVER_INDEX);
    }

    /// Marks the loop as running. Returns `false` when it already was.
    pub fn start(&mut self) -> bool {
        if self.running {
            return false;
        }
        self.running = true;
        true
    }

    /// Stops the loop where it is without snapping.
    pub fn halt(&mut self) {
        self.running = false;
    }

    /// Remaining distance to the target.
    #[must_use]
    pub fn remaining(self) -> f64 {
        (f64::from(self.target_index) - self.current_index).abs()
    }

    /// Advances one frame: `current += (target - current) * speed`, snapping
    /// once the remaining distance is below tolerance.
    pub fn step(&mut self) -> FillStep {
        if !self.running {
            return FillStep::Stopped;
        }

        let target = f64::from(self.target_index);
        let diff = target - self.current_index;
        if diff.abs() < self.easing.tolerance {
            self.current_index = target;
            self.running = false;
            return FillStep::Settled;
        }

        self.current_index += diff * self.easing.speed;
        FillStep::Advanced
    }

    /// Last data index covered by the fill, or `None` when nothing is filled.
    #[must_use]
    pub fn fill_index(self, series_len: usize) -> Option<usize> {
        if self.current_index < 0.0 || series_len == 0 {
            return None;
        }
        let rounded = self.current_index.round() as usize;
        Some(rounded.min(series_len - 1))
    }
}

/// Nearest series index for a horizontal data-space position.
#[must_use]
pub fn nearest_index(data_x: f64, series_len: usize) -> Option<usize> {
    if series_len == 0 || !data_x.is_finite() {
        return None;
    }
    let last = (series_len - 1) as f64;
    Some(data_x.clamp(0.0, last).round() as usize)
}
