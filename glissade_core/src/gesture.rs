// Copyright 2026 the Glissade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag gesture state and swipe resolution.

/// Which input device started a drag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerKind {
    /// Primary mouse button.
    Mouse,
    /// First touch point of a touch sequence.
    Touch,
}

/// The drag state machine: idle → dragging → idle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Gesture {
    /// No drag in progress.
    Idle,
    /// A pointer is held down on the carousel.
    Dragging {
        /// Horizontal pointer coordinate captured at drag start.
        start_x: f64,
        /// Device that started the drag.
        pointer: PointerKind,
    },
}

impl Gesture {
    /// Returns `true` between a drag start and its matching end.
    #[inline]
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }
}

/// Outcome of a finished drag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Swipe {
    /// Dragged right past the threshold: go to the previous slide.
    Previous,
    /// Dragged left past the threshold: go to the next slide.
    Next,
    /// Threshold not met: stay on the current slide.
    Stay,
}

/// Resolves a drag displacement into a slide change.
///
/// `moved_by` is the rendered offset at release minus the offset at drag
/// start. The drag commits only when `|moved_by|` is strictly greater than
/// `ratio * slide_width`.
#[must_use]
pub fn resolve_swipe(moved_by: f64, slide_width: f64, ratio: f64) -> Swipe {
    if moved_by.abs() > swipe_threshold(slide_width, ratio) {
        if moved_by > 0.0 {
            Swipe::Previous
        } else {
            Swipe::Next
        }
    } else {
        Swipe::Stay
    }
}

/// Returns the displacement (in pixels) a drag must exceed.
#[inline]
#[must_use]
pub fn swipe_threshold(slide_width: f64, ratio: f64) -> f64 {
    slide_width * ratio
}
