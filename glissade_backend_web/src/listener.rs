// Copyright 2026 the Glissade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scoped DOM event subscriptions.
//!
//! A [`Listener`] registers a callback on construction and unregisters it on
//! drop. Callbacks are reference counted so the same closure can be attached
//! and detached repeatedly (the document-wide mouse listeners live only for
//! the duration of one drag) and so that dropping a guard from inside its own
//! callback never frees the closure that is running.

use alloc::boxed::Box;
use alloc::rc::Rc;

use wasm_bindgen::JsCast as _;
use wasm_bindgen::prelude::*;
use web_sys::{Event, EventTarget};

/// A shareable DOM event callback.
pub(crate) type Callback = Rc<Closure<dyn FnMut(Event)>>;

/// Wraps `f` as a [`Callback`].
pub(crate) fn callback(f: impl FnMut(Event) + 'static) -> Callback {
    Rc::new(Closure::wrap(Box::new(f) as Box<dyn FnMut(Event)>))
}

/// An event listener that is removed when dropped.
pub(crate) struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Callback,
}

impl Listener {
    /// Registers `callback` for `event` on `target`.
    pub(crate) fn attach(
        target: &EventTarget,
        event: &'static str,
        callback: &Callback,
    ) -> Result<Self, JsValue> {
        target.add_event_listener_with_callback(event, (**callback).as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event,
            callback: Rc::clone(callback),
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, (*self.callback).as_ref().unchecked_ref());
    }
}

impl core::fmt::Debug for Listener {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Listener")
            .field("event", &self.event)
            .finish_non_exhaustive()
    }
}
