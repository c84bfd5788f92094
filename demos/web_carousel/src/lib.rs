// Copyright 2026 the Glissade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web example: the stock carousel markup brought to life.
//!
//! Build with: `wasm-pack build --target web demos/web_carousel`
//! Then serve `demos/web_carousel/` and open `index.html`.
//!
//! The module is imported from a module script, which runs after the markup
//! is parsed. Build with `--features trace` to see every navigation and drag
//! on `console.debug`.

#![no_std]

use wasm_bindgen::prelude::*;

/// Mounts the page's carousel for the lifetime of the page.
#[wasm_bindgen(start)]
pub fn main() {
    // Failures are already on `console.error`; the rest of the page keeps
    // working without the carousel.
    let _ = glissade_backend_web::mount_default();
}
