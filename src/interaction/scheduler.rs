use std::collections::VecDeque;

/// Identifies one requested animation frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(u64);

impl FrameHandle {
    #[must_use]
    pub const fn id(self) -> u64 {
        self.0
    }
}

/// Tick source for display-frame callbacks.
///
/// The host delivers each granted frame back to the engine that requested it
/// along with its handle. A cancelled handle must never be delivered.
pub trait FrameScheduler {
    fn request_frame(&mut self) -> FrameHandle;
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// Scheduler driven by explicit ticks, for tests and headless hosts.
#[derive(Debug, Default)]
pub struct ManualFrameScheduler {
    next_id: u64,
    queued: VecDeque<FrameHandle>,
    requested_total: usize,
    cancelled_total: usize,
}

impl ManualFrameScheduler {
    /// Pops the oldest pending frame.
    pub fn next_due(&mut self) -> Option<FrameHandle> {
        self.queued.pop_front()
    }

    #[must_use]
    pub fn pending(&self) -> usize {
        self.queued.len()
    }

    #[must_use]
    pub fn requested_total(&self) -> usize {
        self.requested_total
    }

    #[must_use]
    pub fn cancelled_total(&self) -> usize {
        self.cancelled_total
    }
}

impl FrameScheduler for ManualFrameScheduler {
    fn request_frame(&mut self) -> FrameHandle {
        self.next_id += 1;
        self.requested_total += 1;
        let handle = FrameHandle(self.next_id);
        self.queued.push_back(handle);
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        let before = self.queued.len();
        self.queued.retain(|queued| *queued != handle);
        if self.queued.len() != before {
            self.cancelled_total += 1;
        }
    }
}
