// Copyright 2026 the Glissade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Errors reported when constructing a [`Carousel`](crate::Carousel).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// The carousel was created with zero slides.
    EmptyCarousel,
    /// A [`CarouselConfig`](crate::CarouselConfig) field is out of range.
    InvalidConfig(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCarousel => f.write_str("carousel needs at least one slide"),
            Self::InvalidConfig(field) => write!(f, "invalid carousel config: {field}"),
        }
    }
}

impl core::error::Error for Error {}
