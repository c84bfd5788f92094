// Copyright 2026 the Glissade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Browser [`Scheduler`]: a [`FrameSlot`] plus an [`IntervalTimer`].

use glissade_core::backend::Scheduler;
use glissade_core::time::{Duration, HostTime};

use crate::frame::FrameSlot;
use crate::interval::IntervalTimer;

/// Deferred work for a mounted carousel.
///
/// Both callbacks are installed after the carousel is shared, since they call
/// back into it; see [`set_frame_callback`](Self::set_frame_callback) and
/// [`set_auto_advance_handler`](Self::set_auto_advance_handler).
#[derive(Debug, Default)]
pub struct WebScheduler {
    frames: FrameSlot,
    auto_advance: IntervalTimer,
}

impl WebScheduler {
    /// Creates a scheduler with no callbacks installed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs the callback that receives fired frame offsets.
    pub fn set_frame_callback(&mut self, callback: impl FnMut(f64) + 'static) {
        self.frames.set_callback(callback);
    }

    /// Installs the auto-advance tick handler.
    pub fn set_auto_advance_handler(&mut self, handler: impl FnMut() + 'static) {
        self.auto_advance.set_handler(handler);
    }
}

impl Scheduler for WebScheduler {
    fn now(&self) -> HostTime {
        crate::now()
    }

    fn request_frame(&mut self, offset: f64) {
        self.frames.request(offset);
    }

    fn cancel_frame(&mut self) {
        self.frames.cancel();
    }

    fn restart_auto_advance(&mut self, period: Duration) {
        self.auto_advance.restart(period);
    }

    fn stop_auto_advance(&mut self) {
        self.auto_advance.stop();
    }
}
