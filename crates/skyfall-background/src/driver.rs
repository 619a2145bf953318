//! Frame scheduling and cancellation.
//!
//! The application owns an explicit loop: it asks the [`FrameClock`] how long
//! to wait, and when a frame is due it steps the mounted backdrop's
//! [`FrameDriver`]. Revoking a [`FrameHandle`] stops the driver for good, so a
//! frame that was already scheduled when its backdrop went away draws nothing.

use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};
use std::time::{Duration, Instant};

use skyfall_core::Speed;

use crate::animations::Effect;
use crate::surface::Surface;

/// Cancels the next frame of a [`FrameDriver`] and every frame after it.
#[derive(Debug, Clone, Default)]
pub struct FrameHandle {
    cancelled: Arc<AtomicBool>,
}

impl FrameHandle {
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}

/// Outcome of a single [`FrameDriver::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameStatus {
    /// The frame was drawn and every entity advanced.
    Drawn,
    /// No drawing surface yet; nothing happened.
    Skipped,
    /// The driver was cancelled; nothing happened and nothing ever will.
    Cancelled,
}

/// Runs frames for one mounted effect until cancelled.
#[derive(Debug, Default)]
pub struct FrameDriver {
    handle: FrameHandle,
    frames: u64,
}

impl FrameDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// A handle that can cancel this driver.
    pub fn handle(&self) -> FrameHandle {
        self.handle.clone()
    }

    pub fn cancel(&self) {
        self.handle.cancel();
    }

    /// Frames drawn so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Draw one frame of `effect` onto `surface`.
    ///
    /// A missing surface is not an error: the frame is skipped and the next
    /// one tries again.
    pub fn step(
        &mut self,
        effect: &mut Effect,
        surface: Option<&mut dyn Surface>,
        speed: Speed,
    ) -> FrameStatus {
        if self.handle.is_cancelled() {
            log::trace!("frame for {:?} dropped after cancel", effect.kind());
            return FrameStatus::Cancelled;
        }
        let Some(surface) = surface else {
            return FrameStatus::Skipped;
        };
        effect.draw_frame(surface, speed);
        self.frames += 1;
        FrameStatus::Drawn
    }
}

/// Paces frames at a fixed interval, standing in for the display refresh.
///
/// Missed frames are never replayed: after a stall or a pause the next frame
/// is due immediately and the schedule restarts from there.
#[derive(Debug, Clone)]
pub struct FrameClock {
    interval: Duration,
    next_frame: Instant,
    paused: bool,
}

impl FrameClock {
    /// A clock whose first frame is due at `now`.
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            next_frame: now,
            paused: false,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Stop delivering frames, e.g. while the terminal is not focused.
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Deliver frames again, starting with one due at `now`.
    pub fn resume(&mut self, now: Instant) {
        if self.paused {
            self.paused = false;
            self.next_frame = now;
        }
    }

    /// How long to wait for input before the next frame is due, or `None`
    /// while paused.
    pub fn timeout(&self, now: Instant) -> Option<Duration> {
        if self.paused {
            None
        } else {
            Some(self.next_frame.saturating_duration_since(now))
        }
    }

    /// Consume the frame due at `now`, if any.
    pub fn take_due(&mut self, now: Instant) -> bool {
        if self.paused || now < self.next_frame {
            return false;
        }
        self.next_frame += self.interval;
        if self.next_frame <= now {
            self.next_frame = now + self.interval;
        }
        true
    }
}
