// Copyright 2026 the Glissade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A virtual-time scheduler: single frame slot and repeating timer.

use alloc::rc::Rc;
use core::cell::Cell;

use glissade_core::backend::Scheduler;
use glissade_core::time::{Duration, HostTime};

/// Display refresh interval used by the simulator (60 Hz).
pub const FRAME_INTERVAL: Duration = Duration(16_667);

/// A frame request waiting for the next vsync.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PendingFrame {
    /// When the frame fires.
    pub due: HostTime,
    /// Offset to commit.
    pub offset: f64,
}

/// The repeating auto-advance timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Interval {
    /// Time of the next tick.
    pub due: HostTime,
    /// Tick period.
    pub period: Duration,
}

/// A [`Scheduler`] over a shared virtual clock.
///
/// Frames fire on a fixed vsync grid; the interval fires at exact deadlines.
/// The [`Simulation`](crate::Simulation) drains both in time order.
#[derive(Debug)]
pub struct SimScheduler {
    clock: Rc<Cell<HostTime>>,
    frame: Option<PendingFrame>,
    interval: Option<Interval>,
    frames_requested: u64,
    frames_superseded: u64,
}

impl SimScheduler {
    /// Creates a scheduler reading time from `clock`.
    #[must_use]
    pub fn new(clock: Rc<Cell<HostTime>>) -> Self {
        Self {
            clock,
            frame: None,
            interval: None,
            frames_requested: 0,
            frames_superseded: 0,
        }
    }

    /// Returns the pending frame, if any.
    #[must_use]
    pub fn pending_frame(&self) -> Option<PendingFrame> {
        self.frame
    }

    /// Removes and returns the pending frame.
    pub fn take_frame(&mut self) -> Option<PendingFrame> {
        self.frame.take()
    }

    /// Returns the armed interval, if any.
    #[must_use]
    pub fn interval(&self) -> Option<Interval> {
        self.interval
    }

    /// Moves the interval's deadline forward by one period, returning the
    /// deadline that just elapsed.
    pub fn fire_interval(&mut self) -> Option<HostTime> {
        let interval = self.interval.as_mut()?;
        let fired = interval.due;
        interval.due = fired + interval.period;
        Some(fired)
    }

    /// Returns how many frames were requested in total.
    #[must_use]
    pub fn frames_requested(&self) -> u64 {
        self.frames_requested
    }

    /// Returns how many requests were replaced before their frame fired.
    #[must_use]
    pub fn frames_superseded(&self) -> u64 {
        self.frames_superseded
    }

    fn next_vsync(&self) -> HostTime {
        let now = self.clock.get().ticks();
        let step = FRAME_INTERVAL.ticks();
        HostTime((now / step + 1) * step)
    }
}

impl Scheduler for SimScheduler {
    fn now(&self) -> HostTime {
        self.clock.get()
    }

    fn request_frame(&mut self, offset: f64) {
        self.frames_requested += 1;
        if self.frame.is_some() {
            self.frames_superseded += 1;
        }
        self.frame = Some(PendingFrame {
            due: self.next_vsync(),
            offset,
        });
    }

    fn cancel_frame(&mut self) {
        self.frame = None;
    }

    fn restart_auto_advance(&mut self, period: Duration) {
        self.interval = Some(Interval {
            due: self.clock.get() + period,
            period,
        });
    }

    fn stop_auto_advance(&mut self) {
        self.interval = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frames_land_on_the_vsync_grid() {
        let clock = Rc::new(Cell::new(HostTime(20_000)));
        let mut s = SimScheduler::new(Rc::clone(&clock));
        s.request_frame(-5.0);
        assert_eq!(s.pending_frame().map(|f| f.due), Some(HostTime(33_334)));

        clock.set(HostTime(33_334));
        s.request_frame(-6.0);
        assert_eq!(
            s.pending_frame().map(|f| f.due),
            Some(HostTime(50_001)),
            "a request on a vsync boundary waits for the next one"
        );
    }

    #[test]
    fn new_request_supersedes_pending() {
        let clock = Rc::new(Cell::new(HostTime::ZERO));
        let mut s = SimScheduler::new(clock);
        s.request_frame(1.0);
        s.request_frame(2.0);
        assert_eq!(s.pending_frame().map(|f| f.offset), Some(2.0), "latest wins");
        assert_eq!(s.frames_superseded(), 1);
        s.cancel_frame();
        assert_eq!(s.take_frame(), None, "cancelled");
    }

    #[test]
    fn restart_replaces_interval() {
        let clock = Rc::new(Cell::new(HostTime::ZERO));
        let mut s = SimScheduler::new(Rc::clone(&clock));
        s.restart_auto_advance(Duration::from_millis(5000));
        clock.set(HostTime::from_millis(2000));
        s.restart_auto_advance(Duration::from_millis(5000));
        assert_eq!(
            s.interval().map(|i| i.due),
            Some(HostTime::from_millis(7000)),
            "countdown restarted"
        );
        assert_eq!(s.fire_interval(), Some(HostTime::from_millis(7000)));
        assert_eq!(s.interval().map(|i| i.due), Some(HostTime::from_millis(12000)));
        s.stop_auto_advance();
        assert_eq!(s.fire_interval(), None, "stopped");
    }
}
