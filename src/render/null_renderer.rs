use crate::error::GoldResult;
use crate::render::{ChartFrame, RedrawMode, Renderer};

/// No-op renderer used by tests and headless engine usage.
///
/// It still validates every frame so tests catch misaligned datasets or bad
/// gradients before a real backend is involved.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub immediate_frames: usize,
    pub last_frame: Option<ChartFrame>,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &ChartFrame) -> GoldResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        if frame.mode == RedrawMode::Immediate {
            self.immediate_frames += 1;
        }
        self.last_frame = Some(frame.clone());
        Ok(())
    }
}
