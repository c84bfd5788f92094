// Copyright 2026 the Glissade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The carousel controller.
//!
//! [`Carousel`] owns the only mutable state of the widget: the current slide,
//! the drag gesture, and the baseline offset that drag deltas are measured
//! from. Every input the host receives maps onto one method:
//!
//! | host input                       | method                                  |
//! |----------------------------------|-----------------------------------------|
//! | page ready                       | [`start`](Carousel::start)              |
//! | prev / next button               | [`prev`](Carousel::prev) / [`next`](Carousel::next) |
//! | auto-advance timer tick          | [`auto_advance`](Carousel::auto_advance) |
//! | pointer press / move / release   | [`begin_drag`](Carousel::begin_drag) / [`drag_to`](Carousel::drag_to) / [`end_drag`](Carousel::end_drag) |
//! | touch cancelled                  | [`cancel_drag`](Carousel::cancel_drag)  |
//! | frame requested during a drag    | [`commit_frame`](Carousel::commit_frame) |
//! | viewport resize                  | [`resize`](Carousel::resize)            |
//!
//! Slide indices wrap in both directions; there is no first or last slide.

use alloc::boxed::Box;

use crate::backend::{Scheduler, Track};
use crate::config::CarouselConfig;
use crate::error::Error;
use crate::gesture::{Gesture, PointerKind, Swipe, resolve_swipe, swipe_threshold};
use crate::trace::{
    AutoAdvanceSkippedEvent, DragEndEvent, DragStartEvent, NavCause, NavigateEvent, NoopSink,
    TraceSink, Tracer,
};

/// How a move reaches its target offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Motion {
    /// Apply the configured transition.
    Animated,
    /// Jump without a transition (a *snap*).
    Instant,
}

/// Returns the canonical track offset for slide `index`.
#[inline]
#[must_use]
pub fn slide_offset(index: usize, slide_width: f64) -> f64 {
    if index == 0 {
        0.0
    } else {
        -(index as f64) * slide_width
    }
}

/// A carousel bound to a [`Track`] and a [`Scheduler`].
pub struct Carousel<T, S> {
    track: T,
    scheduler: S,
    config: CarouselConfig,
    slide_count: usize,
    current: usize,
    gesture: Gesture,
    /// Offset at the start of the current drag or after the last move.
    baseline: f64,
    sink: Box<dyn TraceSink>,
}

impl<T, S> core::fmt::Debug for Carousel<T, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Carousel")
            .field("config", &self.config)
            .field("slide_count", &self.slide_count)
            .field("current", &self.current)
            .field("gesture", &self.gesture)
            .field("baseline", &self.baseline)
            .finish_non_exhaustive()
    }
}

impl<T: Track, S: Scheduler> Carousel<T, S> {
    /// Creates a carousel over `slide_count` slides.
    ///
    /// Nothing is written to the track until [`start`](Self::start).
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyCarousel`] if `slide_count` is zero, or
    /// [`Error::InvalidConfig`] if `config` fails validation.
    pub fn new(
        track: T,
        scheduler: S,
        slide_count: usize,
        config: CarouselConfig,
    ) -> Result<Self, Error> {
        if slide_count == 0 {
            return Err(Error::EmptyCarousel);
        }
        config.validate()?;
        Ok(Self {
            track,
            scheduler,
            config,
            slide_count,
            current: 0,
            gesture: Gesture::Idle,
            baseline: 0.0,
            sink: Box::new(NoopSink),
        })
    }

    /// Routes trace events to `sink`.
    ///
    /// Events are only delivered when the `trace` feature is enabled.
    #[must_use]
    pub fn with_trace_sink(mut self, sink: impl TraceSink + 'static) -> Self {
        self.sink = Box::new(sink);
        self
    }

    /// Snaps to the first slide and starts the auto-advance timer.
    pub fn start(&mut self) {
        self.settle(0, Motion::Instant, NavCause::Start);
        self.restart_auto_advance();
    }

    /// Returns the current slide index.
    #[inline]
    #[must_use]
    pub fn current(&self) -> usize {
        self.current
    }

    /// Returns the number of slides.
    #[inline]
    #[must_use]
    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    /// Returns the drag gesture state.
    #[inline]
    #[must_use]
    pub fn gesture(&self) -> Gesture {
        self.gesture
    }

    /// Returns `true` while a drag is in progress.
    #[inline]
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.gesture.is_dragging()
    }

    /// Returns the offset drag deltas are measured from.
    #[inline]
    #[must_use]
    pub fn baseline(&self) -> f64 {
        self.baseline
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// Returns the track.
    #[must_use]
    pub fn track(&self) -> &T {
        &self.track
    }

    /// Returns the track mutably.
    pub fn track_mut(&mut self) -> &mut T {
        &mut self.track
    }

    /// Returns the scheduler.
    #[must_use]
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Returns the scheduler mutably.
    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    // -----------------------------------------------------------------------
    // Position renderer
    // -----------------------------------------------------------------------

    /// Moves the track to slide `index` (reduced modulo the slide count).
    ///
    /// The slide width is measured fresh. Afterwards the track's offset is
    /// exactly `-index * slide_width` and the baseline matches it.
    pub fn move_to(&mut self, index: usize, motion: Motion) {
        self.settle(index, motion, NavCause::Jump);
    }

    fn position(&mut self, index: usize, motion: Motion) -> f64 {
        let index = index % self.slide_count;
        let offset = slide_offset(index, self.track.slide_width());
        self.track.set_transition(match motion {
            Motion::Animated => Some(self.config.transition),
            Motion::Instant => None,
        });
        self.track.translate(offset);
        self.current = index;
        self.baseline = offset;
        offset
    }

    fn settle(&mut self, index: usize, motion: Motion, cause: NavCause) {
        let from = self.current;
        let offset = self.position(index, motion);
        let e = NavigateEvent {
            at: self.scheduler.now(),
            from,
            to: self.current,
            offset,
            animated: motion == Motion::Animated,
            cause,
        };
        self.tracer().navigate(&e);
    }

    // -----------------------------------------------------------------------
    // Discrete navigation
    // -----------------------------------------------------------------------

    /// Animates to the previous slide, wrapping from the first to the last.
    ///
    /// The track is first snapped onto the current slide so a half-finished
    /// animation or drag never leaves it between slides.
    pub fn prev(&mut self) {
        let i = self.current;
        self.position(i, Motion::Instant);
        self.settle(self.wrap_back(i), Motion::Animated, NavCause::Prev);
        self.restart_auto_advance();
    }

    /// Animates to the next slide, wrapping from the last to the first.
    ///
    /// Snaps onto the current slide first, like [`prev`](Self::prev).
    pub fn next(&mut self) {
        let i = self.current;
        self.position(i, Motion::Instant);
        self.settle(self.wrap_forward(i), Motion::Animated, NavCause::Next);
        self.restart_auto_advance();
    }

    /// Handles an auto-advance tick: animates to the next slide.
    ///
    /// Returns `false` if the tick was skipped because a drag is active.
    pub fn auto_advance(&mut self) -> bool {
        if self.is_dragging() {
            let e = AutoAdvanceSkippedEvent {
                at: self.scheduler.now(),
                current: self.current,
            };
            self.tracer().auto_advance_skipped(&e);
            return false;
        }
        self.settle(
            self.wrap_forward(self.current),
            Motion::Animated,
            NavCause::AutoAdvance,
        );
        true
    }

    // -----------------------------------------------------------------------
    // Drag gesture
    // -----------------------------------------------------------------------

    /// Starts a drag at pointer coordinate `x`.
    ///
    /// The baseline is the *rendered* offset, so a drag that starts during a
    /// snap animation picks the track up where it is on screen. Starting a
    /// drag while one is active restarts it from `x`.
    pub fn begin_drag(&mut self, x: f64, pointer: PointerKind) {
        let baseline = self.track.rendered_offset();
        // Freeze the track where it is on screen; dropping the transition
        // alone would make it jump to the snap target.
        self.track.set_transition(None);
        self.track.translate(baseline);
        self.gesture = Gesture::Dragging { start_x: x, pointer };
        self.baseline = baseline;
        self.track.set_dragging(true);
        self.restart_auto_advance();
        self.scheduler.cancel_frame();

        let e = DragStartEvent {
            at: self.scheduler.now(),
            pointer,
            x,
            baseline,
        };
        self.tracer().drag_start(&e);
    }

    /// Tracks the pointer at `x`, requesting a frame that moves the track by
    /// the same amount the pointer moved since the drag started.
    ///
    /// Ignored unless a drag is active.
    pub fn drag_to(&mut self, x: f64) {
        if let Gesture::Dragging { start_x, .. } = self.gesture {
            self.scheduler.request_frame(self.baseline + (x - start_x));
        }
    }

    /// Applies a frame requested by [`drag_to`](Self::drag_to).
    ///
    /// Frames that fire after the drag ended are dropped.
    pub fn commit_frame(&mut self, offset: f64) {
        if self.is_dragging() {
            self.track.translate(offset);
        }
    }

    /// Ends the drag and snaps to the resolved slide.
    ///
    /// The track's rendered offset is compared against the baseline. Dragging
    /// right past the swipe threshold goes to the previous slide, dragging
    /// left goes to the next one, anything shorter snaps back. Returns `None`
    /// if no drag was active.
    pub fn end_drag(&mut self) -> Option<Swipe> {
        if !self.release() {
            return None;
        }

        let moved_by = self.track.rendered_offset() - self.baseline;
        let width = self.track.slide_width();
        let swipe = resolve_swipe(moved_by, width, self.config.swipe_threshold);
        let target = match swipe {
            Swipe::Previous => self.wrap_back(self.current),
            Swipe::Next => self.wrap_forward(self.current),
            Swipe::Stay => self.current,
        };

        self.trace_drag_end(moved_by, swipe, false);
        self.settle(target, Motion::Animated, NavCause::Swipe);
        Some(swipe)
    }

    /// Abandons the drag without changing slides and snaps back.
    ///
    /// Returns `false` if no drag was active.
    pub fn cancel_drag(&mut self) -> bool {
        if !self.release() {
            return false;
        }
        let moved_by = self.track.rendered_offset() - self.baseline;
        self.trace_drag_end(moved_by, Swipe::Stay, true);
        self.settle(self.current, Motion::Animated, NavCause::Swipe);
        true
    }

    fn trace_drag_end(&mut self, moved_by: f64, swipe: Swipe, cancelled: bool) {
        let e = DragEndEvent {
            at: self.scheduler.now(),
            moved_by,
            threshold: swipe_threshold(self.track.slide_width(), self.config.swipe_threshold),
            swipe,
            cancelled,
        };
        self.tracer().drag_end(&e);
    }

    /// Leaves the dragging state, releasing the pending frame and the drag
    /// affordance. Returns `false` if no drag was active.
    fn release(&mut self) -> bool {
        if !self.is_dragging() {
            return false;
        }
        self.scheduler.cancel_frame();
        self.gesture = Gesture::Idle;
        self.track.set_dragging(false);
        true
    }

    // -----------------------------------------------------------------------
    // Resize
    // -----------------------------------------------------------------------

    /// Re-measures the slide width and snaps onto the current slide.
    ///
    /// Repeated calls without an intervening change are no-ops on screen.
    pub fn resize(&mut self) {
        self.settle(self.current, Motion::Instant, NavCause::Resize);
    }

    // -----------------------------------------------------------------------
    // Helpers
    // -----------------------------------------------------------------------

    fn wrap_forward(&self, i: usize) -> usize {
        (i + 1) % self.slide_count
    }

    fn wrap_back(&self, i: usize) -> usize {
        (i + self.slide_count - 1) % self.slide_count
    }

    fn restart_auto_advance(&mut self) {
        match self.config.auto_advance {
            Some(period) => self.scheduler.restart_auto_advance(period),
            None => self.scheduler.stop_auto_advance(),
        }
    }

    fn tracer(&mut self) -> Tracer<'_> {
        Tracer::new(self.sink.as_mut())
    }
}
