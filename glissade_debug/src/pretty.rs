// Copyright 2026 the Glissade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr).

use std::io::Write;

use glissade_core::gesture::{PointerKind, Swipe};
use glissade_core::time::HostTime;
use glissade_core::trace::{
    AutoAdvanceSkippedEvent, DragEndEvent, DragStartEvent, NavigateEvent, TraceSink,
};

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink").finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
        }
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self { writer }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the sink and returns its writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

fn ms(t: HostTime) -> f64 {
    t.as_millis_f64()
}

fn pointer_name(pointer: PointerKind) -> &'static str {
    match pointer {
        PointerKind::Mouse => "mouse",
        PointerKind::Touch => "touch",
    }
}

fn swipe_name(swipe: Swipe) -> &'static str {
    match swipe {
        Swipe::Previous => "prev",
        Swipe::Next => "next",
        Swipe::Stay => "stay",
    }
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_navigate(&mut self, e: &NavigateEvent) {
        let motion = if e.animated { "animated" } else { "instant" };
        let _ = writeln!(
            self.writer,
            "[nav:{}] {} -> {} offset={}px {motion} at {:.1}ms",
            e.cause.as_str(),
            e.from,
            e.to,
            e.offset,
            ms(e.at),
        );
    }

    fn on_drag_start(&mut self, e: &DragStartEvent) {
        let _ = writeln!(
            self.writer,
            "[drag:start] {} x={} baseline={}px at {:.1}ms",
            pointer_name(e.pointer),
            e.x,
            e.baseline,
            ms(e.at),
        );
    }

    fn on_drag_end(&mut self, e: &DragEndEvent) {
        let tag = if e.cancelled { "cancel" } else { "end" };
        let _ = writeln!(
            self.writer,
            "[drag:{tag}] moved={}px threshold={}px -> {} at {:.1}ms",
            e.moved_by,
            e.threshold,
            swipe_name(e.swipe),
            ms(e.at),
        );
    }

    fn on_auto_advance_skipped(&mut self, e: &AutoAdvanceSkippedEvent) {
        let _ = writeln!(
            self.writer,
            "[auto:skip] slide={} dragging at {:.1}ms",
            e.current,
            ms(e.at),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glissade_core::trace::NavCause;

    #[test]
    fn navigate_line() {
        let mut sink = PrettyPrintSink::with_writer(Vec::new());
        sink.on_navigate(&NavigateEvent {
            at: HostTime::from_millis(1_500),
            from: 2,
            to: 0,
            offset: 0.0,
            animated: true,
            cause: NavCause::Next,
        });
        let out = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(out, "[nav:next] 2 -> 0 offset=0px animated at 1500.0ms\n");
    }

    #[test]
    fn drag_lines() {
        let mut sink = PrettyPrintSink::with_writer(Vec::new());
        sink.on_drag_start(&DragStartEvent {
            at: HostTime::ZERO,
            pointer: PointerKind::Touch,
            x: 120.0,
            baseline: -400.0,
        });
        sink.on_drag_end(&DragEndEvent {
            at: HostTime::from_millis(250),
            moved_by: 12.5,
            threshold: 20.0,
            swipe: Swipe::Stay,
            cancelled: false,
        });
        sink.on_drag_end(&DragEndEvent {
            at: HostTime::from_millis(400),
            moved_by: -30.0,
            threshold: 20.0,
            swipe: Swipe::Stay,
            cancelled: true,
        });
        let out = String::from_utf8(sink.into_inner()).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(
            lines,
            [
                "[drag:start] touch x=120 baseline=-400px at 0.0ms",
                "[drag:end] moved=12.5px threshold=20px -> stay at 250.0ms",
                "[drag:cancel] moved=-30px threshold=20px -> stay at 400.0ms",
            ]
        );
    }
}
