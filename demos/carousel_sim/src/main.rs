// Copyright 2026 the Glissade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scripted carousel session that exercises the tracing and diagnostics
//! pipeline.
//!
//! Drives a five-slide carousel through button clicks, swipes, a resize, and
//! auto-advance on a virtual clock, printing every event through a
//! [`PrettyPrintSink`](glissade_debug::pretty::PrettyPrintSink) and writing a
//! Chrome trace of the session to `carousel_trace.json`.

use std::fs::File;
use std::io::{BufWriter, Write as _};

use glissade_core::CarouselConfig;
use glissade_core::carousel::Motion;
use glissade_core::gesture::PointerKind;
use glissade_core::time::Duration;
use glissade_core::trace::{
    AutoAdvanceSkippedEvent, DragEndEvent, DragStartEvent, NavigateEvent, TraceSink,
};
use glissade_debug::pretty::PrettyPrintSink;
use glissade_debug::recorder::RecordingSink;
use glissade_harness::Simulation;

const SLIDES: usize = 5;
const SLIDE_WIDTH: f64 = 640.0;
const TRACE_PATH: &str = "carousel_trace.json";

/// Forwards every event to both sinks.
#[derive(Debug)]
struct Tee {
    pretty: PrettyPrintSink,
    recorder: RecordingSink,
}

impl TraceSink for Tee {
    fn on_navigate(&mut self, e: &NavigateEvent) {
        self.pretty.on_navigate(e);
        self.recorder.on_navigate(e);
    }

    fn on_drag_start(&mut self, e: &DragStartEvent) {
        self.pretty.on_drag_start(e);
        self.recorder.on_drag_start(e);
    }

    fn on_drag_end(&mut self, e: &DragEndEvent) {
        self.pretty.on_drag_end(e);
        self.recorder.on_drag_end(e);
    }

    fn on_auto_advance_skipped(&mut self, e: &AutoAdvanceSkippedEvent) {
        self.pretty.on_auto_advance_skipped(e);
        self.recorder.on_auto_advance_skipped(e);
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let recorder = RecordingSink::new();
    let sink = Tee {
        pretty: PrettyPrintSink::new(Box::new(std::io::stdout())),
        recorder: recorder.clone(),
    };
    let mut sim = Simulation::with_trace_sink(SLIDES, SLIDE_WIDTH, CarouselConfig::web(), sink)?;

    // Buttons, letting each transition finish.
    sim.click_next();
    sim.settle();
    sim.click_next();
    sim.settle();
    sim.click_prev();
    sim.settle();

    // A short drag snaps back; a long one commits.
    sim.swipe(320.0, 300.0, PointerKind::Mouse);
    sim.settle();
    sim.swipe(320.0, 100.0, PointerKind::Touch);
    sim.settle();

    // Wrap backwards past the first slide.
    sim.carousel_mut().move_to(0, Motion::Instant);
    sim.click_prev();
    sim.settle();

    // The viewport narrows.
    sim.resize(480.0);

    // Holding a drag across a tick skips it; releasing in place snaps back.
    sim.press(200.0, PointerKind::Mouse);
    sim.advance_by(Duration::from_millis(5_500));
    sim.release();
    sim.settle();

    // Left alone, the carousel advances twice.
    sim.advance_by(Duration::from_millis(10_000));

    let stats = sim.stats();
    println!(
        "-- {} frames committed, {} ticks, ended on slide {} of {SLIDES}",
        stats.frames,
        stats.ticks,
        sim.current() + 1,
    );

    let mut file = BufWriter::new(File::create(TRACE_PATH)?);
    glissade_debug::chrome::export(&recorder.events(), &mut file)?;
    file.flush()?;
    println!("-- wrote {} events to {TRACE_PATH}", recorder.len());
    Ok(())
}
