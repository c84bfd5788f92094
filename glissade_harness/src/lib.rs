// Copyright 2026 the Glissade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deterministic virtual-time host for the Glissade carousel.
//!
//! [`Simulation`] wires a [`Carousel`] to a [`SimTrack`] and a
//! [`SimScheduler`] sharing one virtual clock. Time only moves when the
//! caller advances it; frames fire on a 60 Hz grid and auto-advance ticks at
//! their exact deadlines, in time order. This makes the timing behavior of
//! the widget (timer resets, frame coalescing, drags that start mid-snap)
//! testable without a browser.

#![no_std]

extern crate alloc;

mod scheduler;
mod track;

use alloc::rc::Rc;
use core::cell::Cell;

use glissade_core::backend::Track as _;
use glissade_core::gesture::{PointerKind, Swipe};
use glissade_core::time::{Duration, HostTime};
use glissade_core::trace::{NoopSink, TraceSink};
use glissade_core::{Carousel, CarouselConfig, Error};

pub use scheduler::{FRAME_INTERVAL, Interval, PendingFrame, SimScheduler};
pub use track::{SimTrack, ease_in_out};

/// Counters accumulated while the simulation runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SimStats {
    /// Frames that fired and were committed.
    pub frames: u64,
    /// Auto-advance ticks delivered (skipped ones included).
    pub ticks: u64,
}

/// A carousel driven by a virtual clock.
#[derive(Debug)]
pub struct Simulation {
    clock: Rc<Cell<HostTime>>,
    carousel: Carousel<SimTrack, SimScheduler>,
    stats: SimStats,
}

impl Simulation {
    /// Creates and starts a carousel with `slide_count` slides of
    /// `slide_width` pixels at time zero.
    ///
    /// # Errors
    ///
    /// Propagates [`Carousel::new`] errors.
    pub fn new(slide_count: usize, slide_width: f64, config: CarouselConfig) -> Result<Self, Error> {
        Self::with_trace_sink(slide_count, slide_width, config, NoopSink)
    }

    /// Like [`new`](Self::new), routing trace events to `sink`.
    ///
    /// # Errors
    ///
    /// Propagates [`Carousel::new`] errors.
    pub fn with_trace_sink(
        slide_count: usize,
        slide_width: f64,
        config: CarouselConfig,
        sink: impl TraceSink + 'static,
    ) -> Result<Self, Error> {
        let clock = Rc::new(Cell::new(HostTime::ZERO));
        let track = SimTrack::new(Rc::clone(&clock), slide_width);
        let scheduler = SimScheduler::new(Rc::clone(&clock));
        let mut carousel =
            Carousel::new(track, scheduler, slide_count, config)?.with_trace_sink(sink);
        carousel.start();
        Ok(Self {
            clock,
            carousel,
            stats: SimStats::default(),
        })
    }

    /// Returns the current virtual time.
    #[must_use]
    pub fn now(&self) -> HostTime {
        self.clock.get()
    }

    /// Returns the carousel.
    #[must_use]
    pub fn carousel(&self) -> &Carousel<SimTrack, SimScheduler> {
        &self.carousel
    }

    /// Returns the carousel mutably.
    pub fn carousel_mut(&mut self) -> &mut Carousel<SimTrack, SimScheduler> {
        &mut self.carousel
    }

    /// Returns the current slide index.
    #[must_use]
    pub fn current(&self) -> usize {
        self.carousel.current()
    }

    /// Returns the offset on screen right now.
    #[must_use]
    pub fn rendered_offset(&self) -> f64 {
        self.carousel.track().rendered_offset()
    }

    /// Returns the run counters.
    #[must_use]
    pub fn stats(&self) -> SimStats {
        self.stats
    }

    /// Advances the clock by `d`, delivering every frame and tick due.
    pub fn advance_by(&mut self, d: Duration) {
        self.advance_to(self.now() + d);
    }

    /// Advances the clock to `target`, delivering every frame and tick due at
    /// or before it in time order. Frames go first when both are due at once.
    ///
    /// Going backwards is a no-op.
    pub fn advance_to(&mut self, target: HostTime) {
        loop {
            let scheduler = self.carousel.scheduler();
            let frame = scheduler.pending_frame().map(|f| f.due);
            let tick = scheduler.interval().map(|i| i.due);
            let next = match (frame, tick) {
                (Some(f), Some(t)) => f.min(t),
                (Some(f), None) => f,
                (None, Some(t)) => t,
                (None, None) => break,
            };
            if next > target {
                break;
            }
            self.clock.set(next.max(self.now()));

            if frame == Some(next) {
                if let Some(pending) = self.carousel.scheduler_mut().take_frame() {
                    self.carousel.commit_frame(pending.offset);
                    self.stats.frames += 1;
                }
            } else {
                self.carousel.scheduler_mut().fire_interval();
                self.carousel.auto_advance();
                self.stats.ticks += 1;
            }
        }
        if target > self.now() {
            self.clock.set(target);
        }
    }

    /// Advances the clock until no transition is running.
    pub fn settle(&mut self) {
        let duration = self.carousel.config().transition.duration;
        self.advance_by(duration);
    }

    /// Clicks the next button.
    pub fn click_next(&mut self) {
        self.carousel.next();
    }

    /// Clicks the previous button.
    pub fn click_prev(&mut self) {
        self.carousel.prev();
    }

    /// Presses a pointer at `x`.
    pub fn press(&mut self, x: f64, pointer: PointerKind) {
        self.carousel.begin_drag(x, pointer);
    }

    /// Moves the pressed pointer to `x`.
    pub fn move_pointer(&mut self, x: f64) {
        self.carousel.drag_to(x);
    }

    /// Releases the pointer.
    pub fn release(&mut self) -> Option<Swipe> {
        self.carousel.end_drag()
    }

    /// A full drag: press at `from`, move to `to`, wait one frame, release.
    pub fn swipe(&mut self, from: f64, to: f64, pointer: PointerKind) -> Option<Swipe> {
        self.press(from, pointer);
        self.move_pointer(to);
        self.advance_by(FRAME_INTERVAL);
        self.release()
    }

    /// Changes the slide width and delivers a resize.
    pub fn resize(&mut self, slide_width: f64) {
        self.carousel.track_mut().set_slide_width(slide_width);
        self.carousel.resize();
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;

    const WIDTH: f64 = 300.0;

    fn sim(n: usize) -> Simulation {
        Simulation::new(n, WIDTH, CarouselConfig::web()).expect("valid carousel")
    }

    #[test]
    fn index_tracks_net_transitions() {
        // +1 for next, -1 for prev; a fixed mixed pattern.
        let pattern: [i64; 12] = [1, 1, -1, 1, -1, -1, -1, 1, 1, 1, -1, 1];
        for n in 1..=6_usize {
            let mut s = sim(n);
            let mut net = 0_i64;
            for &step in pattern.iter().cycle().take(40) {
                if step > 0 {
                    s.click_next();
                } else {
                    s.click_prev();
                }
                net += step;
                s.advance_by(Duration::from_millis(40));

                let current = s.current();
                assert!(current < n, "index {current} out of range for n={n}");
                let expected = net.rem_euclid(n as i64) as usize;
                assert_eq!(current, expected, "n={n} net={net}");
            }
        }
    }

    #[test]
    fn wraparound_with_three_slides() {
        let mut s = sim(3);
        s.click_prev();
        assert_eq!(s.current(), 2, "prev from 0");
        s.settle();
        assert_eq!(s.rendered_offset(), -600.0);

        s.click_next();
        assert_eq!(s.current(), 0, "next from 2");
        s.settle();
        assert_eq!(s.rendered_offset(), 0.0);
    }

    #[test]
    fn resize_is_idempotent() {
        let mut s = sim(4);
        s.click_next();
        s.click_next();
        s.settle();

        s.resize(420.0);
        let once = s.rendered_offset();
        assert_eq!(once, -840.0, "re-measured width, no animation");
        let writes = s.carousel().track().writes();

        s.carousel_mut().resize();
        assert_eq!(s.rendered_offset(), once, "second resize changes nothing");
        assert_eq!(s.current(), 2);
        assert_eq!(
            s.carousel().track().writes(),
            writes + 1,
            "resize rewrites the same offset"
        );
    }

    #[test]
    fn drag_below_threshold_stays() {
        let mut s = sim(3);
        assert_eq!(s.swipe(500.0, 490.0, PointerKind::Mouse), Some(Swipe::Stay));
        assert_eq!(s.current(), 0);
        s.settle();
        assert_eq!(s.rendered_offset(), 0.0, "snapped back");

        assert_eq!(
            s.swipe(500.0, 485.0, PointerKind::Mouse),
            Some(Swipe::Stay),
            "exactly 15 px does not clear 5% of 300 px"
        );
    }

    #[test]
    fn drag_past_threshold_changes_slide() {
        let mut s = sim(3);
        assert_eq!(s.swipe(500.0, 484.0, PointerKind::Mouse), Some(Swipe::Next));
        assert_eq!(s.current(), 1, "-16 px advances");
        s.settle();
        assert_eq!(s.rendered_offset(), -300.0);

        assert_eq!(s.swipe(100.0, 116.0, PointerKind::Touch), Some(Swipe::Previous));
        assert_eq!(s.current(), 0, "+16 px goes back");

        assert_eq!(s.swipe(100.0, 116.0, PointerKind::Touch), Some(Swipe::Previous));
        assert_eq!(s.current(), 2, "swiping back from 0 wraps");

        assert_eq!(s.swipe(300.0, 280.0, PointerKind::Mouse), Some(Swipe::Next));
        assert_eq!(s.current(), 0, "-20 px advances and wraps");
    }

    #[test]
    fn drag_moves_are_coalesced_per_frame() {
        let mut s = sim(3);
        s.press(200.0, PointerKind::Mouse);
        for x in [198.0, 195.0, 190.0, 170.0] {
            s.move_pointer(x);
        }
        assert_eq!(s.rendered_offset(), 0.0, "nothing applied before the frame");
        s.advance_by(FRAME_INTERVAL);
        assert_eq!(s.rendered_offset(), -30.0, "only the latest move rendered");
        assert_eq!(s.stats().frames, 1, "one frame for four moves");
        assert_eq!(s.carousel().scheduler().frames_superseded(), 3);
    }

    #[test]
    fn auto_advance_fires_every_period() {
        let mut s = sim(3);
        s.advance_to(HostTime::from_millis(4999));
        assert_eq!(s.current(), 0, "not yet");
        s.advance_to(HostTime::from_millis(5000));
        assert_eq!(s.current(), 1, "first tick at 5 s");
        s.advance_to(HostTime::from_millis(10000));
        assert_eq!(s.current(), 2, "second tick at 10 s");
        s.advance_to(HostTime::from_millis(15000));
        assert_eq!(s.current(), 0, "wraps");
        assert_eq!(s.stats().ticks, 3);
    }

    #[test]
    fn click_resets_auto_advance_countdown() {
        let mut s = sim(5);
        s.advance_to(HostTime::from_millis(2000));
        s.click_next();
        assert_eq!(s.current(), 1);

        s.advance_to(HostTime::from_millis(6999));
        assert_eq!(s.current(), 1, "old 5 s tick was cancelled");
        s.advance_to(HostTime::from_millis(7000));
        assert_eq!(s.current(), 2, "next tick one period after the click");
    }

    #[test]
    fn drag_start_resets_auto_advance_countdown() {
        let mut s = sim(5);
        s.advance_to(HostTime::from_millis(4000));
        s.swipe(100.0, 95.0, PointerKind::Touch);
        s.advance_to(HostTime::from_millis(8999));
        assert_eq!(s.current(), 0, "countdown restarted at 4 s");
        s.advance_to(HostTime::from_millis(9000));
        assert_eq!(s.current(), 1);
    }

    #[test]
    fn long_drag_skips_auto_advance() {
        let mut s = sim(3);
        s.press(100.0, PointerKind::Mouse);
        s.move_pointer(110.0);
        s.advance_to(HostTime::from_millis(6000));
        assert_eq!(s.current(), 0, "tick during the drag is skipped");
        assert_eq!(s.stats().ticks, 1, "tick still delivered");
        assert_eq!(s.rendered_offset(), 10.0, "track stays under the pointer");
        assert_eq!(s.release(), Some(Swipe::Stay));
    }

    #[test]
    fn double_click_settles_on_a_slide() {
        let mut s = sim(5);
        s.click_next();
        s.advance_by(Duration::from_millis(50));
        assert!(s.rendered_offset() > -WIDTH, "first snap still in flight");

        s.click_next();
        assert_eq!(
            s.rendered_offset(),
            -WIDTH,
            "second click snaps onto slide 1 before animating"
        );
        assert_eq!(s.current(), 2);

        let mut samples = Vec::new();
        for _ in 0..20 {
            s.advance_by(Duration::from_millis(16));
            samples.push(s.rendered_offset());
        }
        assert!(
            samples.windows(2).all(|w| w[1] <= w[0]),
            "second animation moves monotonically: {samples:?}"
        );
        s.settle();
        assert_eq!(s.rendered_offset(), -2.0 * WIDTH, "rests exactly on slide 2");
        assert!(!s.carousel().track().is_animating());
    }

    #[test]
    fn drag_started_mid_snap_uses_rendered_offset() {
        let mut s = sim(3);
        s.click_next();
        s.advance_by(Duration::from_millis(150));
        let on_screen = s.rendered_offset();
        assert!(on_screen < 0.0 && on_screen > -WIDTH, "mid-snap: {on_screen}");

        s.press(100.0, PointerKind::Touch);
        assert_eq!(s.carousel().baseline(), on_screen, "baseline is what was on screen");
        s.move_pointer(100.0);
        s.advance_by(FRAME_INTERVAL);
        assert_eq!(s.rendered_offset(), on_screen, "track picked up where it was");
    }

    #[test]
    fn tap_mid_snap_does_not_change_slide() {
        let mut s = sim(3);
        s.click_next();
        s.advance_by(Duration::from_millis(100));
        let on_screen = s.rendered_offset();

        s.press(100.0, PointerKind::Mouse);
        s.advance_by(Duration::from_millis(50));
        assert_eq!(s.rendered_offset(), on_screen, "track held under the pointer");
        assert_eq!(s.release(), Some(Swipe::Stay), "no movement, no swipe");
        assert_eq!(s.current(), 1);
        s.settle();
        assert_eq!(s.rendered_offset(), -WIDTH, "finishes the interrupted snap");
    }

    #[test]
    fn rapid_clicks_with_container_press_settle_on_slide_two() {
        // A button inside the container also sees the container's
        // mousedown and mouseup before its click.
        let mut s = sim(5);
        for _ in 0..2 {
            s.press(150.0, PointerKind::Mouse);
            s.advance_by(Duration::from_millis(60));
            assert_eq!(s.release(), Some(Swipe::Stay), "press before a click");
            s.click_next();
            s.advance_by(Duration::from_millis(90));
        }
        s.settle();
        assert_eq!(s.current(), 2);
        assert_eq!(s.rendered_offset(), -2.0 * WIDTH, "rests exactly on slide 2");
    }

    #[test]
    fn touch_cancel_restores_current_slide() {
        let mut s = sim(3);
        s.press(200.0, PointerKind::Touch);
        s.move_pointer(50.0);
        s.advance_by(FRAME_INTERVAL);
        assert!(s.carousel_mut().cancel_drag(), "drag was active");
        s.settle();
        assert_eq!(s.current(), 0);
        assert_eq!(s.rendered_offset(), 0.0);
        assert!(!s.carousel().track().is_dragging(), "affordance cleared");
    }
}
