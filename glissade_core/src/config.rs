// Copyright 2026 the Glissade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Carousel configuration.
//!
//! [`CarouselConfig`] bundles the three tunables of the widget: how often it
//! advances on its own, how long the snap animation lasts, and how far a drag
//! has to travel before it commits to a slide change. [`CarouselConfig::web`]
//! is the preset used by the browser backend.

use alloc::format;
use alloc::string::String;

use crate::error::Error;
use crate::time::Duration;

/// The track's snap animation.
///
/// The easing curve is fixed to CSS `ease-in-out`
/// (`cubic-bezier(0.42, 0, 0.58, 1)`); only the duration is configurable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    /// How long a full snap takes.
    pub duration: Duration,
}

impl Transition {
    /// Control points of the fixed `ease-in-out` curve, as
    /// `(x1, y1, x2, y2)` of a CSS `cubic-bezier()`.
    pub const EASE_IN_OUT: (f64, f64, f64, f64) = (0.42, 0.0, 0.58, 1.0);

    /// The default 300 ms snap.
    pub const STANDARD: Self = Self {
        duration: Duration::from_millis(300),
    };

    /// Returns the CSS `transition` shorthand, e.g. `transform 0.3s ease-in-out`.
    #[must_use]
    pub fn css(&self) -> String {
        format!("transform {}s ease-in-out", self.duration.as_secs_f64())
    }
}

impl Default for Transition {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Configuration for a [`Carousel`](crate::Carousel).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CarouselConfig {
    /// Period of the auto-advance timer. `None` disables auto-advance.
    pub auto_advance: Option<Duration>,
    /// Snap animation used by animated moves.
    pub transition: Transition,
    /// Fraction of the slide width a drag must exceed to change slides.
    pub swipe_threshold: f64,
}

impl CarouselConfig {
    /// Default configuration for the browser: 5 s auto-advance, 300 ms snap,
    /// 5 % swipe threshold.
    #[must_use]
    pub const fn web() -> Self {
        Self {
            auto_advance: Some(Duration::from_millis(5000)),
            transition: Transition::STANDARD,
            swipe_threshold: 0.05,
        }
    }

    /// Checks that every field is in range.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] naming the offending field.
    pub fn validate(&self) -> Result<(), Error> {
        if self.auto_advance == Some(Duration::ZERO) {
            return Err(Error::InvalidConfig("auto_advance must be non-zero"));
        }
        if !(self.swipe_threshold.is_finite() && self.swipe_threshold > 0.0) {
            return Err(Error::InvalidConfig("swipe_threshold must be positive"));
        }
        Ok(())
    }
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self::web()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_transition_css() {
        assert_eq!(Transition::STANDARD.css(), "transform 0.3s ease-in-out");
    }

    #[test]
    fn web_preset_is_valid() {
        let config = CarouselConfig::web();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.auto_advance, Some(Duration(5_000_000)), "5 s period");
    }

    #[test]
    fn rejects_out_of_range_fields() {
        let zero_period = CarouselConfig {
            auto_advance: Some(Duration::ZERO),
            ..CarouselConfig::web()
        };
        assert!(
            matches!(zero_period.validate(), Err(Error::InvalidConfig(_))),
            "zero period must be rejected"
        );

        let negative = CarouselConfig {
            swipe_threshold: -0.1,
            ..CarouselConfig::web()
        };
        assert!(negative.validate().is_err(), "negative threshold");

        let disabled = CarouselConfig {
            auto_advance: None,
            ..CarouselConfig::web()
        };
        assert!(disabled.validate().is_ok(), "auto-advance may be disabled");
    }
}
