// Copyright 2026 the Glissade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! DOM-backed [`Track`].
//!
//! Writes `transform`/`transition` on the track element, toggles the
//! `is-dragging` class and the container cursor, and reads the rendered
//! offset back from the computed style.

use alloc::string::String;

use glissade_core::Transition;
use glissade_core::backend::Track;
use glissade_core::css;
use web_sys::{Element, HtmlElement, Window};

/// Class added to the track while a drag is in progress.
pub const DRAGGING_CLASS: &str = "is-dragging";

/// Container cursor while idle.
pub const CURSOR_IDLE: &str = "grab";

/// Container cursor while dragging.
pub const CURSOR_DRAGGING: &str = "grabbing";

/// The carousel's track and the elements it is measured against.
#[derive(Clone)]
pub struct DomTrack {
    window: Window,
    container: HtmlElement,
    track: HtmlElement,
    first_slide: Element,
    /// Last offset written, used when the computed style is unavailable.
    written: f64,
}

impl core::fmt::Debug for DomTrack {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DomTrack")
            .field("track", &"HtmlElement")
            .field("written", &self.written)
            .finish_non_exhaustive()
    }
}

impl DomTrack {
    /// Creates a track over already-located elements.
    ///
    /// Slides are assumed to share `first_slide`'s width.
    #[must_use]
    pub fn new(
        window: Window,
        container: HtmlElement,
        track: HtmlElement,
        first_slide: Element,
    ) -> Self {
        let _ = container.style().set_property("cursor", CURSOR_IDLE);
        Self {
            window,
            container,
            track,
            first_slide,
            written: 0.0,
        }
    }

    fn computed_transform(&self) -> Option<String> {
        let style = self.window.get_computed_style(&self.track).ok()??;
        style.get_property_value("transform").ok()
    }
}

impl Track for DomTrack {
    fn slide_width(&self) -> f64 {
        self.first_slide.get_bounding_client_rect().width()
    }

    fn rendered_offset(&self) -> f64 {
        self.computed_transform()
            .and_then(|value| css::translate_x(&value))
            .unwrap_or(self.written)
    }

    fn set_transition(&mut self, transition: Option<Transition>) {
        let value = transition_value(transition);
        let _ = self.track.style().set_property("transition", &value);
    }

    fn translate(&mut self, offset: f64) {
        let _ = self
            .track
            .style()
            .set_property("transform", &css::translate_x_value(offset));
        self.written = offset;
    }

    fn set_dragging(&mut self, dragging: bool) {
        let classes = self.track.class_list();
        if dragging {
            let _ = classes.add_1(DRAGGING_CLASS);
            // An inline transition outranks the stylesheet's drag rule.
            let _ = self.track.style().set_property("transition", "none");
        } else {
            let _ = classes.remove_1(DRAGGING_CLASS);
        }
        let _ = self
            .container
            .style()
            .set_property("cursor", cursor(dragging));
    }
}

/// Returns the container cursor for the drag state.
pub(crate) fn cursor(dragging: bool) -> &'static str {
    if dragging {
        CURSOR_DRAGGING
    } else {
        CURSOR_IDLE
    }
}

/// Returns the CSS `transition` value for an optional transition.
pub(crate) fn transition_value(transition: Option<Transition>) -> String {
    match transition {
        Some(t) => t.css(),
        None => String::from("none"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glissade_core::time::Duration;

    #[test]
    fn transition_values() {
        assert_eq!(transition_value(None), "none", "snaps disable transitions");
        assert_eq!(
            transition_value(Some(Transition::STANDARD)),
            "transform 0.3s ease-in-out"
        );
        let slow = Transition {
            duration: Duration::from_millis(1250),
        };
        assert_eq!(transition_value(Some(slow)), "transform 1.25s ease-in-out");
    }

    #[test]
    fn cursor_follows_drag_state() {
        assert_eq!(cursor(false), "grab");
        assert_eq!(cursor(true), "grabbing");
    }
}
