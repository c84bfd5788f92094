// Copyright 2026 the Glissade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A simulated track with CSS-like transition behavior.

use alloc::rc::Rc;
use core::cell::Cell;

use glissade_core::Transition;
use glissade_core::backend::Track;
use glissade_core::time::{Duration, HostTime};
use kurbo::{CubicBez, ParamCurve as _};

/// An in-flight transition between two offsets.
#[derive(Clone, Copy, Debug)]
struct Tween {
    from: f64,
    to: f64,
    started: HostTime,
    duration: Duration,
}

/// A [`Track`] that models what a browser renders.
///
/// Writing an offset with a transition set starts a tween from the currently
/// rendered offset; writing without one (or while dragging, where the
/// drag transitions are suppressed) lands immediately. Turning on the drag
/// affordance mid-tween jumps to the tween's target, as removing a CSS
/// transition does, so a drag has to pin the track first.
#[derive(Debug)]
pub struct SimTrack {
    clock: Rc<Cell<HostTime>>,
    slide_width: f64,
    transition: Option<Transition>,
    style_offset: f64,
    tween: Option<Tween>,
    dragging: bool,
    writes: u64,
}

impl SimTrack {
    /// Creates a track whose slides are `slide_width` pixels wide.
    #[must_use]
    pub fn new(clock: Rc<Cell<HostTime>>, slide_width: f64) -> Self {
        Self {
            clock,
            slide_width,
            transition: None,
            style_offset: 0.0,
            tween: None,
            dragging: false,
            writes: 0,
        }
    }

    /// Changes the slide width, as a viewport resize would.
    pub fn set_slide_width(&mut self, width: f64) {
        self.slide_width = width;
    }

    /// Returns the offset last written to the track's style.
    #[must_use]
    pub fn style_offset(&self) -> f64 {
        self.style_offset
    }

    /// Returns `true` while the drag affordance is on.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Returns `true` while a transition is still running.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.tween
            .is_some_and(|t| self.clock.get() < t.started + t.duration)
    }

    /// Returns how many offset writes the track has received.
    #[must_use]
    pub fn writes(&self) -> u64 {
        self.writes
    }
}

impl Track for SimTrack {
    fn slide_width(&self) -> f64 {
        self.slide_width
    }

    fn rendered_offset(&self) -> f64 {
        let Some(tween) = self.tween else {
            return self.style_offset;
        };
        let elapsed = self.clock.get().saturating_duration_since(tween.started);
        if tween.duration == Duration::ZERO || elapsed >= tween.duration {
            return tween.to;
        }
        let progress = elapsed.as_millis_f64() / tween.duration.as_millis_f64();
        tween.from + (tween.to - tween.from) * ease_in_out(progress)
    }

    fn set_transition(&mut self, transition: Option<Transition>) {
        self.transition = transition;
    }

    fn translate(&mut self, offset: f64) {
        let from = self.rendered_offset();
        self.tween = match self.transition {
            Some(t) if !self.dragging && from != offset => Some(Tween {
                from,
                to: offset,
                started: self.clock.get(),
                duration: t.duration,
            }),
            _ => None,
        };
        self.style_offset = offset;
        self.writes += 1;
    }

    fn set_dragging(&mut self, dragging: bool) {
        if dragging {
            self.tween = None;
        }
        self.dragging = dragging;
    }
}

/// Evaluates the CSS `ease-in-out` timing function at `progress` in `[0, 1]`.
///
/// The curve maps time (x) to progress (y); x is inverted by bisection, which
/// is exact enough because x is monotonic for these control points.
#[must_use]
pub fn ease_in_out(progress: f64) -> f64 {
    let (x1, y1, x2, y2) = Transition::EASE_IN_OUT;
    let curve = CubicBez::new((0.0, 0.0), (x1, y1), (x2, y2), (1.0, 1.0));
    let target = progress.clamp(0.0, 1.0);

    let (mut lo, mut hi) = (0.0, 1.0);
    for _ in 0..48 {
        let mid = (lo + hi) * 0.5;
        if curve.eval(mid).x < target {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    curve.eval((lo + hi) * 0.5).y
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track() -> (Rc<Cell<HostTime>>, SimTrack) {
        let clock = Rc::new(Cell::new(HostTime::ZERO));
        let track = SimTrack::new(Rc::clone(&clock), 300.0);
        (clock, track)
    }

    #[test]
    fn easing_endpoints_and_symmetry() {
        assert!(ease_in_out(0.0).abs() < 1e-9, "starts at 0");
        assert!((ease_in_out(1.0) - 1.0).abs() < 1e-9, "ends at 1");
        assert!((ease_in_out(0.5) - 0.5).abs() < 1e-6, "symmetric curve");
        assert!(ease_in_out(0.25) < 0.25, "slow start");
    }

    #[test]
    fn animated_write_tweens_to_target() {
        let (clock, mut t) = track();
        t.set_transition(Some(Transition::STANDARD));
        t.translate(-300.0);
        assert_eq!(t.rendered_offset(), 0.0, "tween starts where the track was");
        assert!(t.is_animating(), "tween running");

        clock.set(HostTime::from_millis(150));
        let mid = t.rendered_offset();
        assert!(mid < 0.0 && mid > -300.0, "between slides: {mid}");

        clock.set(HostTime::from_millis(300));
        assert_eq!(t.rendered_offset(), -300.0, "lands exactly on target");
        assert!(!t.is_animating(), "tween finished");
    }

    #[test]
    fn instant_write_lands_immediately() {
        let (_clock, mut t) = track();
        t.set_transition(None);
        t.translate(-600.0);
        assert_eq!(t.rendered_offset(), -600.0);
        assert_eq!(t.writes(), 1);
    }

    #[test]
    fn dragging_suppresses_transitions() {
        let (clock, mut t) = track();
        t.set_transition(Some(Transition::STANDARD));
        t.translate(-300.0);
        clock.set(HostTime::from_millis(100));
        t.set_dragging(true);
        assert_eq!(t.rendered_offset(), -300.0, "tween cut to its target");
        t.translate(-280.0);
        assert_eq!(t.rendered_offset(), -280.0, "drag writes are instant");
    }
}
