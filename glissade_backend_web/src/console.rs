// Copyright 2026 the Glissade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Browser console diagnostics.

use alloc::format;

use glissade_core::trace::{
    AutoAdvanceSkippedEvent, DragEndEvent, DragStartEvent, NavigateEvent, TraceSink,
};
use wasm_bindgen::JsValue;
use web_sys::console;

/// Reports a fatal mount problem on `console.error`.
pub(crate) fn error(message: &str) {
    console::error_1(&JsValue::from_str(message));
}

/// Reports a non-fatal mount problem on `console.warn`.
pub(crate) fn warn(message: &str) {
    console::warn_1(&JsValue::from_str(message));
}

/// A [`TraceSink`] that writes one `console.debug` line per event.
///
/// Events only arrive when the `trace` feature is enabled.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleSink;

fn debug(line: &str) {
    console::debug_1(&JsValue::from_str(line));
}

impl TraceSink for ConsoleSink {
    fn on_navigate(&mut self, e: &NavigateEvent) {
        debug(&format!(
            "[carousel:{}] {} -> {} offset={}px animated={} at={:.1}ms",
            e.cause.as_str(),
            e.from,
            e.to,
            e.offset,
            e.animated,
            e.at.as_millis_f64(),
        ));
    }

    fn on_drag_start(&mut self, e: &DragStartEvent) {
        debug(&format!(
            "[carousel:drag] start {:?} x={} baseline={}px",
            e.pointer, e.x, e.baseline,
        ));
    }

    fn on_drag_end(&mut self, e: &DragEndEvent) {
        let tag = if e.cancelled { "cancel" } else { "end" };
        debug(&format!(
            "[carousel:drag] {tag} moved={}px threshold={}px -> {:?}",
            e.moved_by, e.threshold, e.swipe,
        ));
    }

    fn on_auto_advance_skipped(&mut self, e: &AutoAdvanceSkippedEvent) {
        debug(&format!(
            "[carousel:auto] skipped on slide {} (dragging)",
            e.current
        ));
    }
}
