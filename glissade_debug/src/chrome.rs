// Copyright 2026 the Glissade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chrome Trace Event Format exporter.
//!
//! [`export`] writes events collected by a
//! [`RecordingSink`](super::recorder::RecordingSink) as [Chrome Trace Event
//! Format][format] JSON.
//!
//! Drags become `B`/`E` duration pairs on their own track; navigations and
//! skipped ticks are instant events.
//!
//! [format]: https://docs.google.com/document/d/1CvAClvFfyA5R-PhYUmn5OOQtYMH4h6I0nSsKchNAySU

use std::io::{self, Write};

use serde_json::{Value, json};

use glissade_core::time::HostTime;

use crate::recorder::RecordedEvent;

const TID_NAVIGATION: u32 = 0;
const TID_GESTURE: u32 = 1;

/// Exports recorded events as Chrome Trace Event Format JSON.
///
/// The output is a complete JSON array of trace event objects, suitable for
/// loading into `chrome://tracing` or [Perfetto](https://ui.perfetto.dev/).
pub fn export(events: &[RecordedEvent], writer: &mut dyn Write) -> io::Result<()> {
    let mut out: Vec<Value> = Vec::with_capacity(events.len());

    for recorded in events {
        match recorded {
            RecordedEvent::Navigate(e) => {
                out.push(json!({
                    "ph": "i",
                    "name": "Navigate",
                    "cat": e.cause.as_str(),
                    "ts": us(e.at),
                    "pid": 0,
                    "tid": TID_NAVIGATION,
                    "s": "t",
                    "args": {
                        "from": e.from,
                        "to": e.to,
                        "offset": e.offset,
                        "animated": e.animated,
                    }
                }));
            }
            RecordedEvent::DragStart(e) => {
                out.push(json!({
                    "ph": "B",
                    "name": "Drag",
                    "cat": "Gesture",
                    "ts": us(e.at),
                    "pid": 0,
                    "tid": TID_GESTURE,
                    "args": {
                        "pointer": format!("{:?}", e.pointer),
                        "x": e.x,
                        "baseline": e.baseline,
                    }
                }));
            }
            RecordedEvent::DragEnd(e) => {
                out.push(json!({
                    "ph": "E",
                    "name": "Drag",
                    "cat": "Gesture",
                    "ts": us(e.at),
                    "pid": 0,
                    "tid": TID_GESTURE,
                    "args": {
                        "moved_by": e.moved_by,
                        "threshold": e.threshold,
                        "swipe": format!("{:?}", e.swipe),
                        "cancelled": e.cancelled,
                    }
                }));
            }
            RecordedEvent::AutoAdvanceSkipped(e) => {
                out.push(json!({
                    "ph": "i",
                    "name": "AutoAdvanceSkipped",
                    "cat": "Timer",
                    "ts": us(e.at),
                    "pid": 0,
                    "tid": TID_NAVIGATION,
                    "s": "t",
                    "args": {
                        "current": e.current,
                    }
                }));
            }
        }
    }

    serde_json::to_writer_pretty(writer, &out)?;
    Ok(())
}

fn us(t: HostTime) -> u64 {
    t.ticks()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recorder::RecordingSink;
    use glissade_core::CarouselConfig;
    use glissade_core::gesture::PointerKind;
    use glissade_harness::Simulation;

    fn exported(events: &[RecordedEvent]) -> Vec<Value> {
        let mut buf = Vec::new();
        export(events, &mut buf).unwrap();
        match serde_json::from_slice::<Value>(&buf).unwrap() {
            Value::Array(items) => items,
            other => panic!("expected an array, got {other}"),
        }
    }

    #[test]
    fn empty_log_exports_empty_array() {
        assert!(exported(&[]).is_empty());
    }

    #[test]
    fn swipe_exports_a_duration_pair() {
        let log = RecordingSink::new();
        let mut sim =
            Simulation::with_trace_sink(4, 300.0, CarouselConfig::web(), log.clone()).unwrap();
        let _ = log.take();
        sim.swipe(100.0, 150.0, PointerKind::Mouse);

        let items = exported(&log.events());
        let phases: Vec<&str> = items.iter().map(|v| v["ph"].as_str().unwrap()).collect();
        assert_eq!(phases, ["B", "E", "i"]);

        assert_eq!(items[0]["name"], "Drag");
        assert_eq!(items[0]["tid"], TID_GESTURE);
        assert_eq!(items[1]["args"]["swipe"], "Previous");
        assert_eq!(items[1]["ts"], 16_667);
        assert_eq!(items[2]["cat"], "swipe");
        assert_eq!(items[2]["args"]["to"], 3);
        assert_eq!(items[2]["args"]["offset"], -900.0);
    }

    #[test]
    fn cancelled_drag_still_closes_its_span() {
        let log = RecordingSink::new();
        let mut sim =
            Simulation::with_trace_sink(3, 300.0, CarouselConfig::web(), log.clone()).unwrap();
        let _ = log.take();
        sim.press(100.0, PointerKind::Touch);
        sim.move_pointer(60.0);
        sim.advance_by(glissade_harness::FRAME_INTERVAL);
        assert!(sim.carousel_mut().cancel_drag(), "drag was active");

        let items = exported(&log.events());
        let phases: Vec<&str> = items.iter().map(|v| v["ph"].as_str().unwrap()).collect();
        assert_eq!(phases, ["B", "E", "i"], "every B has its E");
        assert_eq!(items[1]["args"]["cancelled"], true);
        assert_eq!(items[1]["args"]["swipe"], "Stay");
        assert_eq!(items[1]["args"]["moved_by"], -40.0);
        assert_eq!(items[2]["args"]["to"], 0, "cancel keeps the slide");
    }
}
