// Copyright 2026 the Glissade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host contract for carousel integrations.
//!
//! The [`Carousel`](crate::Carousel) never touches a platform API directly.
//! A host provides two pieces:
//!
//! - **Track**: Implements [`Track`] over the element that holds the slides:
//!   measuring a slide, reading the live offset, and writing offset,
//!   transition and drag affordance.
//!
//! - **Scheduler**: Implements [`Scheduler`] over the host's deferred work:
//!   the single-slot frame request used during drags, the repeating
//!   auto-advance timer, and the clock.
//!
//! Hosts feed callbacks back into the controller: a fired frame goes to
//! [`Carousel::commit_frame`](crate::Carousel::commit_frame), a timer tick to
//! [`Carousel::auto_advance`](crate::Carousel::auto_advance).
//!
//! # Crate boundaries
//!
//! `glissade_core` owns the state machine and this contract module. Backend
//! crates (`glissade_backend_web`, the `glissade_harness` simulator) depend on
//! it and provide the glue.

use crate::config::Transition;
use crate::time::{Duration, HostTime};

/// The horizontally translated element holding all slides in a row.
///
/// All slides are assumed to have the width of the first one; hosts measure
/// only that slide.
pub trait Track {
    /// Returns the rendered width of one slide, measured now.
    ///
    /// The controller calls this on every move and never caches the result,
    /// since the viewport may have changed in between.
    fn slide_width(&self) -> f64;

    /// Returns the offset actually on screen, including any in-flight
    /// transition.
    fn rendered_offset(&self) -> f64;

    /// Sets the transition used by subsequent offset writes. `None` makes
    /// writes take effect instantly.
    fn set_transition(&mut self, transition: Option<Transition>);

    /// Writes the track's horizontal offset in pixels.
    fn translate(&mut self, offset: f64);

    /// Toggles the "being dragged" affordance (transition suppression and
    /// grabbing cursor).
    fn set_dragging(&mut self, dragging: bool);
}

/// Deferred work owned by the host.
pub trait Scheduler {
    /// Returns the current host time.
    fn now(&self) -> HostTime;

    /// Requests that `offset` be committed on the next display frame.
    ///
    /// At most one request is outstanding: a new request supersedes the
    /// pending one, whose value is dropped.
    fn request_frame(&mut self, offset: f64);

    /// Cancels the pending frame request, if any.
    fn cancel_frame(&mut self);

    /// Cancels the running auto-advance timer and starts a fresh one firing
    /// every `period`, first at `now() + period`.
    fn restart_auto_advance(&mut self, period: Duration);

    /// Cancels the auto-advance timer.
    fn stop_auto_advance(&mut self);
}
