// Copyright 2026 the Glissade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for the carousel.
//!
//! This module provides a [`TraceSink`] trait with per-event methods that the
//! [`Carousel`](crate::Carousel) calls at each state change. All method bodies
//! default to no-ops, so implementing only the events you care about is fine.
//!
//! [`Tracer`] wraps a `&mut dyn TraceSink`. When the `trace` feature is
//! **off**, every `Tracer` method compiles to nothing (zero overhead). When
//! **on**, each method is one dynamic call into the sink.

use crate::gesture::{PointerKind, Swipe};
use crate::time::HostTime;

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Why the carousel moved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NavCause {
    /// Initial placement at mount.
    Start,
    /// The previous button.
    Prev,
    /// The next button.
    Next,
    /// The auto-advance timer.
    AutoAdvance,
    /// The end of a drag gesture (committed or not).
    Swipe,
    /// Viewport resize reconciliation.
    Resize,
    /// A direct [`Carousel::move_to`](crate::Carousel::move_to) call.
    Jump,
}

impl NavCause {
    /// Returns a short lowercase label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Prev => "prev",
            Self::Next => "next",
            Self::AutoAdvance => "auto",
            Self::Swipe => "swipe",
            Self::Resize => "resize",
            Self::Jump => "jump",
        }
    }
}

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted after the position renderer settles on a slide.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavigateEvent {
    /// Host time of the move.
    pub at: HostTime,
    /// Slide index before the move.
    pub from: usize,
    /// Slide index after the move.
    pub to: usize,
    /// Target offset written to the track.
    pub offset: f64,
    /// Whether the move was animated.
    pub animated: bool,
    /// What triggered the move.
    pub cause: NavCause,
}

/// Emitted when a drag starts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragStartEvent {
    /// Host time of the press.
    pub at: HostTime,
    /// Device that started the drag.
    pub pointer: PointerKind,
    /// Pointer x coordinate.
    pub x: f64,
    /// Rendered track offset captured as the drag baseline.
    pub baseline: f64,
}

/// Emitted when a drag ends.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragEndEvent {
    /// Host time of the release.
    pub at: HostTime,
    /// Rendered offset at release minus the baseline.
    pub moved_by: f64,
    /// Displacement the drag had to exceed.
    pub threshold: f64,
    /// Resolved outcome; always [`Swipe::Stay`] for a cancelled drag.
    pub swipe: Swipe,
    /// Whether the drag was abandoned (touch cancel, focus loss) rather than
    /// released.
    pub cancelled: bool,
}

/// Emitted when an auto-advance tick is ignored because a drag is active.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AutoAdvanceSkippedEvent {
    /// Host time of the tick.
    pub at: HostTime,
    /// Slide that stayed current.
    pub current: usize,
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from the carousel.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called after every position change.
    fn on_navigate(&mut self, e: &NavigateEvent) {
        _ = e;
    }

    /// Called when a drag starts.
    fn on_drag_start(&mut self, e: &DragStartEvent) {
        _ = e;
    }

    /// Called when a drag ends.
    fn on_drag_end(&mut self, e: &DragEndEvent) {
        _ = e;
    }

    /// Called when an auto-advance tick is skipped.
    fn on_auto_advance_skipped(&mut self, e: &AutoAdvanceSkippedEvent) {
        _ = e;
    }
}

// ---------------------------------------------------------------------------
// NoopSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Thin wrapper around a borrowed [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing and
/// the sink is never touched. When **on**, each method dispatches directly.
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: &'a mut dyn TraceSink,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn TraceSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Emits a [`NavigateEvent`].
    #[inline]
    pub fn navigate(&mut self, e: &NavigateEvent) {
        #[cfg(feature = "trace")]
        self.sink.on_navigate(e);
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`DragStartEvent`].
    #[inline]
    pub fn drag_start(&mut self, e: &DragStartEvent) {
        #[cfg(feature = "trace")]
        self.sink.on_drag_start(e);
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`DragEndEvent`].
    #[inline]
    pub fn drag_end(&mut self, e: &DragEndEvent) {
        #[cfg(feature = "trace")]
        self.sink.on_drag_end(e);
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits an [`AutoAdvanceSkippedEvent`].
    #[inline]
    pub fn auto_advance_skipped(&mut self, e: &AutoAdvanceSkippedEvent) {
        #[cfg(feature = "trace")]
        self.sink.on_auto_advance_skipped(e);
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noop_sink_accepts_all_events() {
        let mut sink = NoopSink;
        let mut tracer = Tracer::new(&mut sink);
        tracer.navigate(&NavigateEvent {
            at: HostTime::ZERO,
            from: 0,
            to: 1,
            offset: -300.0,
            animated: true,
            cause: NavCause::Next,
        });
        tracer.auto_advance_skipped(&AutoAdvanceSkippedEvent {
            at: HostTime::ZERO,
            current: 0,
        });
    }

    #[cfg(feature = "trace")]
    #[test]
    fn tracer_dispatches_to_sink() {
        #[derive(Default)]
        struct Counting {
            navigations: usize,
            drags: usize,
        }

        impl TraceSink for Counting {
            fn on_navigate(&mut self, _: &NavigateEvent) {
                self.navigations += 1;
            }
            fn on_drag_start(&mut self, _: &DragStartEvent) {
                self.drags += 1;
            }
        }

        let mut sink = Counting::default();
        {
            let mut tracer = Tracer::new(&mut sink);
            tracer.navigate(&NavigateEvent {
                at: HostTime::ZERO,
                from: 0,
                to: 0,
                offset: 0.0,
                animated: false,
                cause: NavCause::Start,
            });
            tracer.drag_start(&DragStartEvent {
                at: HostTime::ZERO,
                pointer: PointerKind::Touch,
                x: 40.0,
                baseline: 0.0,
            });
        }
        assert_eq!(sink.navigations, 1, "one navigate event");
        assert_eq!(sink.drags, 1, "one drag start event");
    }
}
