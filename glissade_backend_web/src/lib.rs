// Copyright 2026 the Glissade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web backend for glissade.
//!
//! This crate binds the core controller to a page:
//!
//! - [`DomTrack`]: the track element, its computed style, and the drag class
//! - [`WebScheduler`]: `requestAnimationFrame` coalescing plus `setInterval`
//! - [`mount`]: locates the markup and wires mouse, touch, button, and resize
//!   events
//! - [`ConsoleSink`]: trace events on `console.debug`
//!
//! # Example
//!
//! ```no_run
//! use glissade_backend_web::{Selectors, mount};
//! use glissade_core::CarouselConfig;
//!
//! let window = web_sys::window().unwrap();
//! mount(&window, &Selectors::DEFAULT, CarouselConfig::web())
//!     .unwrap()
//!     .forget();
//! ```

#![no_std]

extern crate alloc;

mod console;
mod dom;
mod frame;
mod interval;
mod listener;
mod mount;
mod scheduler;

pub use console::ConsoleSink;
pub use dom::{CURSOR_DRAGGING, CURSOR_IDLE, DRAGGING_CLASS, DomTrack};
pub use frame::FrameSlot;
pub use interval::IntervalTimer;
pub use mount::{DomCarousel, MountError, Mounted, Selectors, mount, mount_default};
pub use scheduler::WebScheduler;

use glissade_core::time::HostTime;

/// Returns the current host time from `performance.now()`, in microseconds.
#[must_use]
pub fn now() -> HostTime {
    HostTime::from_millis_f64(frame::performance_now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString as _;

    #[test]
    fn default_selectors_match_stock_markup() {
        let s = Selectors::default();
        assert_eq!(s.container, ".carousel-container");
        assert_eq!(s.track, ".carousel-track");
        assert_eq!(s.slide, ".carousel-slide");
        assert_eq!(s.prev, ".carousel-button.prev");
        assert_eq!(s.next, ".carousel-button.next");
    }

    #[test]
    fn mount_errors_name_the_selector() {
        let err = MountError::MissingTrack(".carousel-track");
        assert_eq!(err.to_string(), "track `.carousel-track` not found");
        let err = MountError::from(glissade_core::Error::EmptyCarousel);
        assert!(matches!(err, MountError::Core(_)));
    }
}
