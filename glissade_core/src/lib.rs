// Copyright 2026 the Glissade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Platform-independent controller for a swipeable, auto-advancing carousel.
//!
//! `glissade_core` owns the carousel's state machine and nothing else. It is
//! `no_std` compatible (with `alloc`) and talks to the outside world through
//! two small traits, so the same controller runs against live DOM elements
//! and against a deterministic virtual-time host in tests.
//!
//! # Architecture
//!
//! ```text
//!   host input (click, pointer, resize, timer)
//!       │
//!       ▼
//!   Carousel::{next, prev, begin_drag, drag_to, end_drag, resize, auto_advance}
//!       │                                 │
//!       ▼                                 ▼
//!   Track (measure, translate)      Scheduler (frame slot, auto-advance timer)
//!                                         │
//!                 ┌───────────────────────┘
//!                 ▼
//!   Carousel::commit_frame() ──► Track::translate()
//! ```
//!
//! **[`carousel`]**: The [`Carousel`] controller: current index, drag
//! gesture, and the position renderer.
//!
//! **[`backend`]**: The [`Track`](backend::Track) and
//! [`Scheduler`](backend::Scheduler) traits that hosts implement.
//!
//! **[`gesture`]**: Pointer kinds and the swipe resolution rule.
//!
//! **[`config`]**: [`CarouselConfig`] and the fixed [`Transition`] curve.
//!
//! **[`css`]**: Parsing of computed `transform` values into offsets.
//!
//! **[`time`]**: Microsecond [`HostTime`](time::HostTime) and
//! [`Duration`](time::Duration).
//!
//! **[`trace`]**: [`TraceSink`](trace::TraceSink) trait and event types for
//! carousel instrumentation, with zero-overhead [`Tracer`](trace::Tracer)
//! wrapper.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one branch
//!   per call site).

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod backend;
pub mod carousel;
pub mod config;
pub mod css;
mod error;
pub mod gesture;
pub mod time;
pub mod trace;

pub use carousel::Carousel;
pub use config::{CarouselConfig, Transition};
pub use error::Error;
