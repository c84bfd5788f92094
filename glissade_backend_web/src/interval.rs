// Copyright 2026 the Glissade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Restartable `setInterval` timer.

use alloc::boxed::Box;

use glissade_core::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = "setInterval")]
    fn set_interval(handler: &JsValue, timeout_ms: i32) -> i32;

    #[wasm_bindgen(js_name = "clearInterval")]
    fn clear_interval(id: i32);
}

/// A repeating timer whose countdown can be restarted.
///
/// [`restart`](Self::restart) clears the running interval before starting a
/// new one, so the next tick is always one full period after the restart.
pub struct IntervalTimer {
    handler: Option<Closure<dyn FnMut()>>,
    id: Option<i32>,
}

impl IntervalTimer {
    /// Creates a stopped timer with no handler.
    #[must_use]
    pub fn new() -> Self {
        Self {
            handler: None,
            id: None,
        }
    }

    /// Installs the tick handler. Takes effect on the next
    /// [`restart`](Self::restart).
    pub fn set_handler(&mut self, handler: impl FnMut() + 'static) {
        self.handler = Some(Closure::wrap(Box::new(handler) as Box<dyn FnMut()>));
    }

    /// Cancels the running interval and starts a fresh one of `period`.
    ///
    /// Without a handler installed the timer just stays stopped.
    pub fn restart(&mut self, period: Duration) {
        self.stop();
        if let Some(handler) = &self.handler {
            let id = set_interval(handler.as_ref().unchecked_ref(), timeout_ms(period));
            self.id = Some(id);
        }
    }

    /// Cancels the running interval, if any.
    pub fn stop(&mut self) {
        if let Some(id) = self.id.take() {
            clear_interval(id);
        }
    }
}

impl Default for IntervalTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for IntervalTimer {
    fn drop(&mut self) {
        self.stop();
    }
}

impl core::fmt::Debug for IntervalTimer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("IntervalTimer")
            .field("has_handler", &self.handler.is_some())
            .field("id", &self.id)
            .finish()
    }
}

/// Converts a period to the millisecond argument of `setInterval`, saturating
/// at `i32::MAX`.
pub(crate) fn timeout_ms(period: Duration) -> i32 {
    i32::try_from(period.as_millis()).unwrap_or(i32::MAX)
}
