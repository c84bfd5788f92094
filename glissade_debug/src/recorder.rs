// Copyright 2026 the Glissade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory event recording.
//!
//! A carousel owns its sink, so [`RecordingSink`] is a handle onto a shared
//! log: hand one clone to the carousel and read the events back through
//! another.

use std::cell::RefCell;
use std::rc::Rc;

use glissade_core::time::HostTime;
use glissade_core::trace::{
    AutoAdvanceSkippedEvent, DragEndEvent, DragStartEvent, NavigateEvent, TraceSink,
};

/// One recorded trace event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RecordedEvent {
    /// See [`TraceSink::on_navigate`].
    Navigate(NavigateEvent),
    /// See [`TraceSink::on_drag_start`].
    DragStart(DragStartEvent),
    /// See [`TraceSink::on_drag_end`].
    DragEnd(DragEndEvent),
    /// See [`TraceSink::on_auto_advance_skipped`].
    AutoAdvanceSkipped(AutoAdvanceSkippedEvent),
}

impl RecordedEvent {
    /// Returns the host time the event carries.
    #[must_use]
    pub fn at(&self) -> HostTime {
        match self {
            Self::Navigate(e) => e.at,
            Self::DragStart(e) => e.at,
            Self::DragEnd(e) => e.at,
            Self::AutoAdvanceSkipped(e) => e.at,
        }
    }
}

/// A [`TraceSink`] appending to a log shared by all its clones.
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    events: Rc<RefCell<Vec<RecordedEvent>>>,
}

impl RecordingSink {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the events recorded so far.
    #[must_use]
    pub fn events(&self) -> Vec<RecordedEvent> {
        self.events.borrow().clone()
    }

    /// Removes and returns the events recorded so far.
    #[must_use]
    pub fn take(&self) -> Vec<RecordedEvent> {
        self.events.take()
    }

    /// Returns the number of recorded events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    /// Returns `true` if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }

    fn push(&self, event: RecordedEvent) {
        self.events.borrow_mut().push(event);
    }
}

impl TraceSink for RecordingSink {
    fn on_navigate(&mut self, e: &NavigateEvent) {
        self.push(RecordedEvent::Navigate(*e));
    }

    fn on_drag_start(&mut self, e: &DragStartEvent) {
        self.push(RecordedEvent::DragStart(*e));
    }

    fn on_drag_end(&mut self, e: &DragEndEvent) {
        self.push(RecordedEvent::DragEnd(*e));
    }

    fn on_auto_advance_skipped(&mut self, e: &AutoAdvanceSkippedEvent) {
        self.push(RecordedEvent::AutoAdvanceSkipped(*e));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glissade_core::CarouselConfig;
    use glissade_core::gesture::{PointerKind, Swipe};
    use glissade_core::time::Duration;
    use glissade_core::trace::NavCause;
    use glissade_harness::Simulation;

    fn causes(events: &[RecordedEvent]) -> Vec<NavCause> {
        events
            .iter()
            .filter_map(|e| match e {
                RecordedEvent::Navigate(n) => Some(n.cause),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn records_start_and_button_navigation() {
        let log = RecordingSink::new();
        let mut sim =
            Simulation::with_trace_sink(3, 400.0, CarouselConfig::web(), log.clone()).unwrap();
        sim.click_next();
        sim.click_prev();

        let events = log.events();
        assert_eq!(
            causes(&events),
            [NavCause::Start, NavCause::Next, NavCause::Prev]
        );
        let RecordedEvent::Navigate(next) = events[1] else {
            panic!("expected a navigate event, got {:?}", events[1]);
        };
        assert_eq!((next.from, next.to), (0, 1));
        assert_eq!(next.offset, -400.0);
        assert!(next.animated);
    }

    #[test]
    fn records_a_committed_swipe() {
        let log = RecordingSink::new();
        let mut sim =
            Simulation::with_trace_sink(3, 400.0, CarouselConfig::web(), log.clone()).unwrap();
        let _ = log.take();

        assert_eq!(sim.swipe(300.0, 200.0, PointerKind::Touch), Some(Swipe::Next));

        let events = log.take();
        assert_eq!(events.len(), 3, "{events:?}");
        assert!(matches!(
            events[0],
            RecordedEvent::DragStart(DragStartEvent {
                pointer: PointerKind::Touch,
                ..
            })
        ));
        let RecordedEvent::DragEnd(end) = events[1] else {
            panic!("expected a drag end, got {:?}", events[1]);
        };
        assert_eq!(end.moved_by, -100.0);
        assert_eq!(end.threshold, 20.0);
        assert_eq!(end.swipe, Swipe::Next);
        assert_eq!(causes(&events), [NavCause::Swipe]);
        assert!(log.is_empty());
    }

    #[test]
    fn records_skipped_ticks_during_a_long_drag() {
        let log = RecordingSink::new();
        let mut sim =
            Simulation::with_trace_sink(3, 400.0, CarouselConfig::web(), log.clone()).unwrap();
        sim.press(200.0, PointerKind::Mouse);
        sim.advance_by(Duration::from_millis(5_000));

        let skipped: Vec<_> = log
            .events()
            .into_iter()
            .filter(|e| matches!(e, RecordedEvent::AutoAdvanceSkipped(_)))
            .collect();
        assert_eq!(skipped.len(), 1);
        assert_eq!(skipped[0].at(), sim.now());
    }
}
