// Copyright 2026 the Glissade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single-slot `requestAnimationFrame` requests.
//!
//! [`FrameSlot`] holds at most one outstanding animation-frame callback. A new
//! request cancels the pending one and replaces its value, so however many
//! pointer moves arrive between two display refreshes, only the latest offset
//! is committed, once.

use alloc::boxed::Box;
use alloc::rc::Rc;
use core::cell::{Cell, RefCell};

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;

// Direct global bindings so pointer moves never fetch the Window object.
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = performance, js_name = "now")]
    pub(crate) fn performance_now() -> f64;

    #[wasm_bindgen(js_name = "requestAnimationFrame")]
    fn request_animation_frame(callback: &JsValue) -> i32;

    #[wasm_bindgen(js_name = "cancelAnimationFrame")]
    fn cancel_animation_frame(id: i32);
}

type FrameClosure = Closure<dyn FnMut(f64)>;

/// A cancellable, coalescing animation-frame request.
///
/// Create with [`FrameSlot::new`], install the commit callback with
/// [`set_callback`](Self::set_callback), then call
/// [`request`](Self::request) as often as needed.
pub struct FrameSlot {
    inner: Rc<FrameInner>,
}

struct FrameInner {
    /// The JS closure registered with `requestAnimationFrame`.
    ///
    /// Created once and reused for every request; it references `inner`
    /// itself, so [`Drop`] breaks the cycle by taking it.
    closure: RefCell<Option<FrameClosure>>,

    /// Receives the pending offset when the frame fires.
    callback: RefCell<Option<Box<dyn FnMut(f64)>>>,

    /// Offset carried by the outstanding request.
    pending: Cell<f64>,

    /// ID of the outstanding `requestAnimationFrame` call, if any.
    raf_id: Cell<Option<i32>>,
}

impl FrameSlot {
    /// Creates an empty slot with no callback installed.
    #[must_use]
    pub fn new() -> Self {
        let inner = Rc::new(FrameInner {
            closure: RefCell::new(None),
            callback: RefCell::new(None),
            pending: Cell::new(0.0),
            raf_id: Cell::new(None),
        });

        let frame_inner = Rc::clone(&inner);
        let closure = Closure::wrap(Box::new(move |_timestamp_ms: f64| {
            frame_inner.raf_id.set(None);
            let offset = frame_inner.pending.get();
            if let Some(callback) = frame_inner.callback.borrow_mut().as_mut() {
                callback(offset);
            }
        }) as Box<dyn FnMut(f64)>);
        *inner.closure.borrow_mut() = Some(closure);

        Self { inner }
    }

    /// Installs the callback that commits an offset when its frame fires.
    pub fn set_callback(&self, callback: impl FnMut(f64) + 'static) {
        *self.inner.callback.borrow_mut() = Some(Box::new(callback));
    }

    /// Requests that `offset` be committed on the next animation frame,
    /// superseding any outstanding request.
    pub fn request(&self, offset: f64) {
        self.cancel();
        self.inner.pending.set(offset);
        if let Some(ref closure) = *self.inner.closure.borrow() {
            let id = request_animation_frame(closure.as_ref().unchecked_ref());
            self.inner.raf_id.set(Some(id));
        }
    }

    /// Cancels the outstanding request, if any.
    pub fn cancel(&self) {
        if let Some(id) = self.inner.raf_id.take() {
            cancel_animation_frame(id);
        }
    }

    /// Returns `true` while a request is outstanding.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.inner.raf_id.get().is_some()
    }
}

impl Default for FrameSlot {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for FrameSlot {
    fn drop(&mut self) {
        self.cancel();
        // Drop the JS closure so it doesn't leak.
        self.inner.closure.borrow_mut().take();
    }
}

impl core::fmt::Debug for FrameSlot {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FrameSlot")
            .field("pending", &self.is_pending())
            .field("offset", &self.inner.pending.get())
            .finish_non_exhaustive()
    }
}
