//! Frame loop control
//!
//! The tick asks the loop to pause when there is nothing to animate and the
//! message handler starts it again. Both only see a [`FrameController`].

/// Start/pause capability for the animation frame loop
pub trait FrameController {
    /// Resume producing frames. No-op when already running.
    fn start(&mut self);
    /// Stop after the current frame. No-op when already paused.
    fn pause(&mut self);
    fn is_running(&self) -> bool;
}

/// Running flag plus a pending wake-up.
///
/// The host checks [`FrameSwitch::take_wake`] after delivering an event and
/// schedules a frame only when the loop went from paused to running, so a
/// running loop is never scheduled twice.
#[derive(Debug, Default)]
pub struct FrameSwitch {
    running: bool,
    wake_pending: bool,
}

impl FrameSwitch {
    /// Starts paused
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true once after each paused -> running transition
    pub fn take_wake(&mut self) -> bool {
        std::mem::take(&mut self.wake_pending)
    }
}

impl FrameController for FrameSwitch {
    fn start(&mut self) {
        if !self.running {
            log::debug!("frame loop resumed");
            self.running = true;
            self.wake_pending = true;
        }
    }

    fn pause(&mut self) {
        if self.running {
            log::debug!("frame loop paused");
            self.running = false;
        }
        self.wake_pending = false;
    }

    fn is_running(&self) -> bool {
        self.running
    }
}
