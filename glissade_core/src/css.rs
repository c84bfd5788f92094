// Copyright 2026 the Glissade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! CSS `transform` values.
//!
//! The track's *rendered* offset differs from the last offset we wrote while a
//! transition is running. Browsers report it through the computed style as a
//! resolved matrix (`none`, `matrix(a, b, c, d, e, f)` or `matrix3d(...)`);
//! [`parse_transform`] turns that into a 2D [`Affine`] whose x translation is
//! the offset (`m41` in `DOMMatrix` terms).

use alloc::format;
use alloc::string::String;

use kurbo::Affine;

/// Parses a computed CSS `transform` value.
///
/// Only the resolved forms produced by `getComputedStyle` are accepted. For
/// `matrix3d` the z components are dropped. Returns `None` for anything else.
#[must_use]
pub fn parse_transform(value: &str) -> Option<Affine> {
    let value = value.trim();
    if value.is_empty() || value == "none" {
        return Some(Affine::IDENTITY);
    }

    if let Some(args) = function_args(value, "matrix3d") {
        let mut m = [0.0; 16];
        if fill(args, &mut m)? != 16 {
            return None;
        }
        // Column-major: m11 m12 _ _ m21 m22 _ _ _ _ _ _ m41 m42 _ _
        return Some(Affine::new([m[0], m[1], m[4], m[5], m[12], m[13]]));
    }

    if let Some(args) = function_args(value, "matrix") {
        let mut m = [0.0; 6];
        if fill(args, &mut m)? != 6 {
            return None;
        }
        return Some(Affine::new(m));
    }

    None
}

/// Returns the x translation of a computed CSS `transform` value.
#[must_use]
pub fn translate_x(value: &str) -> Option<f64> {
    parse_transform(value).map(|affine| affine.translation().x)
}

/// Formats an offset as the `transform` value written to the track.
#[must_use]
pub fn translate_x_value(offset: f64) -> String {
    format!("translateX({offset}px)")
}

fn function_args<'a>(value: &'a str, name: &str) -> Option<&'a str> {
    value
        .strip_prefix(name)?
        .trim_start()
        .strip_prefix('(')?
        .strip_suffix(')')
}

/// Parses comma-separated numbers into `out`, returning how many were read,
/// or `None` on a malformed or surplus component.
fn fill(args: &str, out: &mut [f64]) -> Option<usize> {
    let mut count = 0;
    for part in args.split(',') {
        let slot = out.get_mut(count)?;
        *slot = part.trim().parse().ok()?;
        count += 1;
    }
    Some(count)
}
