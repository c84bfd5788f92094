// Copyright 2026 the Glissade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Locating the carousel markup and binding its events.

use alloc::format;
use alloc::rc::{Rc, Weak};
use alloc::vec::Vec;
use core::cell::RefCell;
use core::fmt;

use glissade_core::backend::Scheduler as _;
use glissade_core::gesture::PointerKind;
use glissade_core::{Carousel, CarouselConfig};
use wasm_bindgen::JsCast as _;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, MouseEvent, TouchEvent, Window};

use crate::console::{self, ConsoleSink};
use crate::dom::DomTrack;
use crate::listener::{Callback, Listener, callback};
use crate::scheduler::WebScheduler;

/// A carousel bound to live DOM elements.
pub type DomCarousel = Carousel<DomTrack, WebScheduler>;

type Shared = Rc<RefCell<DomCarousel>>;

/// Present exactly while a mouse drag holds the document listeners.
type DragSlot = Rc<RefCell<Option<[Listener; 2]>>>;

/// CSS selectors locating the carousel markup.
///
/// The track, slides and buttons are looked up inside the container; buttons
/// fall back to a document-wide lookup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Selectors {
    /// The element receiving pointer input.
    pub container: &'static str,
    /// The translated element holding the slides.
    pub track: &'static str,
    /// Each slide.
    pub slide: &'static str,
    /// The previous button.
    pub prev: &'static str,
    /// The next button.
    pub next: &'static str,
}

impl Selectors {
    /// Selectors matching the stock markup.
    pub const DEFAULT: Self = Self {
        container: ".carousel-container",
        track: ".carousel-track",
        slide: ".carousel-slide",
        prev: ".carousel-button.prev",
        next: ".carousel-button.next",
    };
}

impl Default for Selectors {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Why a carousel could not be mounted.
#[derive(Debug)]
pub enum MountError {
    /// No global `window` (not running in a browser main thread).
    NoWindow,
    /// The window has no document.
    NoDocument,
    /// Nothing matched the container selector.
    MissingContainer(&'static str),
    /// Nothing matched the track selector inside the container.
    MissingTrack(&'static str),
    /// The slide selector matched no elements.
    NoSlides(&'static str),
    /// The controller rejected the slide count or configuration.
    Core(glissade_core::Error),
    /// A DOM call threw.
    Js(JsValue),
}

impl fmt::Display for MountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoWindow => f.write_str("no global window"),
            Self::NoDocument => f.write_str("window has no document"),
            Self::MissingContainer(sel) => write!(f, "container `{sel}` not found"),
            Self::MissingTrack(sel) => write!(f, "track `{sel}` not found"),
            Self::NoSlides(sel) => write!(f, "no slides match `{sel}`"),
            Self::Core(err) => write!(f, "{err}"),
            Self::Js(value) => write!(f, "DOM call failed: {value:?}"),
        }
    }
}

impl core::error::Error for MountError {}

impl From<glissade_core::Error> for MountError {
    fn from(err: glissade_core::Error) -> Self {
        Self::Core(err)
    }
}

impl From<JsValue> for MountError {
    fn from(value: JsValue) -> Self {
        Self::Js(value)
    }
}

impl From<MountError> for JsValue {
    fn from(err: MountError) -> Self {
        match err {
            MountError::Js(value) => value,
            other => Self::from_str(&format!("{other}")),
        }
    }
}

/// A mounted carousel and its event bindings.
///
/// Dropping it unbinds every listener and stops its timers. For a carousel
/// that lives as long as the page, call [`forget`](Self::forget).
pub struct Mounted {
    carousel: Shared,
    drag: DragSlot,
    _listeners: Vec<Listener>,
}

impl fmt::Debug for Mounted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mounted")
            .field("carousel", &self.carousel.borrow())
            .field("dragging", &self.drag.borrow().is_some())
            .field("listeners", &self._listeners.len())
            .finish()
    }
}

impl Drop for Mounted {
    fn drop(&mut self) {
        // A held `mouseup` listener owns the controller and the slot owns it
        // back; break the cycle or the drag outlives the mount.
        self.drag.borrow_mut().take();
        if let Ok(mut carousel) = self.carousel.try_borrow_mut() {
            let scheduler = carousel.scheduler_mut();
            scheduler.cancel_frame();
            scheduler.stop_auto_advance();
        }
    }
}

impl Mounted {
    /// Returns the shared controller.
    #[must_use]
    pub fn carousel(&self) -> &Rc<RefCell<DomCarousel>> {
        &self.carousel
    }

    /// Leaks the bindings so the carousel keeps running for the page's
    /// lifetime.
    pub fn forget(self) {
        core::mem::forget(self);
    }
}

/// Mounts the carousel matched by `selectors` in `window`'s document.
///
/// On failure the error is reported once on `console.error`, no listener is
/// left bound, and the widget stays inert. Missing buttons are not fatal:
/// they are reported on `console.warn` and left unbound.
///
/// # Errors
///
/// See [`MountError`].
pub fn mount(
    window: &Window,
    selectors: &Selectors,
    config: CarouselConfig,
) -> Result<Mounted, MountError> {
    let result = try_mount(window, selectors, config);
    if let Err(err) = &result {
        console::error(&format!("Carousel elements not found: {err}"));
    }
    result
}

/// Mounts the stock markup with the default configuration and keeps it
/// running for the page's lifetime.
///
/// # Errors
///
/// See [`MountError`]; the error has already been logged.
pub fn mount_default() -> Result<(), MountError> {
    let Some(window) = web_sys::window() else {
        console::error("Carousel disabled: no global window");
        return Err(MountError::NoWindow);
    };
    mount(&window, &Selectors::DEFAULT, CarouselConfig::web())?.forget();
    Ok(())
}

fn try_mount(
    window: &Window,
    selectors: &Selectors,
    config: CarouselConfig,
) -> Result<Mounted, MountError> {
    let document = window.document().ok_or(MountError::NoDocument)?;

    let container = html(document.query_selector(selectors.container)?)
        .ok_or(MountError::MissingContainer(selectors.container))?;
    let track = html(container.query_selector(selectors.track)?)
        .ok_or(MountError::MissingTrack(selectors.track))?;
    let slides = track.query_selector_all(selectors.slide)?;
    let first_slide = slides
        .item(0)
        .and_then(|node| node.dyn_into::<Element>().ok())
        .ok_or(MountError::NoSlides(selectors.slide))?;
    let slide_count = slides.length() as usize;

    let dom_track = DomTrack::new(window.clone(), container.clone(), track, first_slide);
    let carousel = Carousel::new(dom_track, WebScheduler::new(), slide_count, config)?
        .with_trace_sink(ConsoleSink);
    let shared: Shared = Rc::new(RefCell::new(carousel));
    install_scheduler_callbacks(&shared);

    let mut listeners = Vec::new();
    bind_buttons(&document, &container, selectors, &shared, &mut listeners)?;
    let drag = bind_mouse(window, &document, &container, selectors, &shared, &mut listeners)?;
    bind_touch(&container, selectors, &shared, &mut listeners)?;

    let on_resize = callback({
        let shared = Rc::clone(&shared);
        move |_event: Event| {
            shared.borrow_mut().resize();
        }
    });
    listeners.push(Listener::attach(window.as_ref(), "resize", &on_resize)?);

    shared.borrow_mut().start();
    Ok(Mounted {
        carousel: shared,
        drag,
        _listeners: listeners,
    })
}

fn html(element: Option<Element>) -> Option<HtmlElement> {
    element?.dyn_into::<HtmlElement>().ok()
}

/// Routes fired frames and timer ticks back into the controller.
///
/// The callbacks hold weak references so a dropped [`Mounted`] goes inert.
fn install_scheduler_callbacks(shared: &Shared) {
    let weak: Weak<RefCell<DomCarousel>> = Rc::downgrade(shared);
    let mut carousel = shared.borrow_mut();
    let scheduler = carousel.scheduler_mut();

    scheduler.set_frame_callback({
        let weak = Weak::clone(&weak);
        move |offset| {
            if let Some(c) = weak.upgrade() {
                c.borrow_mut().commit_frame(offset);
            }
        }
    });
    scheduler.set_auto_advance_handler(move || {
        if let Some(c) = weak.upgrade() {
            c.borrow_mut().auto_advance();
        }
    });
}

fn bind_buttons(
    document: &Document,
    container: &HtmlElement,
    selectors: &Selectors,
    shared: &Shared,
    listeners: &mut Vec<Listener>,
) -> Result<(), MountError> {
    let buttons: [(&'static str, fn(&mut DomCarousel)); 2] = [
        (selectors.prev, DomCarousel::prev),
        (selectors.next, DomCarousel::next),
    ];
    for (selector, navigate) in buttons {
        let button = match container.query_selector(selector)? {
            Some(button) => Some(button),
            None => document.query_selector(selector)?,
        };
        let Some(button) = button else {
            console::warn(&format!("Carousel button `{selector}` not found; left unbound"));
            continue;
        };
        let on_click = callback({
            let shared = Rc::clone(shared);
            move |_event: Event| {
                navigate(&mut shared.borrow_mut());
            }
        });
        listeners.push(Listener::attach(button.as_ref(), "click", &on_click)?);
    }
    Ok(())
}

/// Returns `true` if `event` started on the prev or next button.
///
/// Presses there belong to the button's own `click`, not to a drag.
fn on_button(event: &Event, selectors: &Selectors) -> bool {
    let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
        return false;
    };
    [selectors.prev, selectors.next]
        .into_iter()
        .any(|selector| matches!(target.closest(selector), Ok(Some(_))))
}

/// Mouse drags: `mousedown` on the container, `mousemove`/`mouseup` on the
/// whole document for the duration of one drag only.
fn bind_mouse(
    window: &Window,
    document: &Document,
    container: &HtmlElement,
    selectors: &Selectors,
    shared: &Shared,
    listeners: &mut Vec<Listener>,
) -> Result<DragSlot, MountError> {
    let drag: DragSlot = Rc::default();
    let selectors = *selectors;
    let document: EventTarget = document.clone().into();

    let on_move = callback({
        let shared = Rc::clone(shared);
        move |event: Event| {
            if let Some(e) = event.dyn_ref::<MouseEvent>() {
                shared.borrow_mut().drag_to(f64::from(e.client_x()));
            }
        }
    });

    let on_up = callback({
        let shared = Rc::clone(shared);
        let drag = Rc::clone(&drag);
        move |_event: Event| {
            shared.borrow_mut().end_drag();
            drag.borrow_mut().take();
        }
    });

    let on_down = callback({
        let shared = Rc::clone(shared);
        let drag = Rc::clone(&drag);
        move |event: Event| {
            let Some(e) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            if e.button() != 0 || on_button(&event, &selectors) {
                return;
            }
            // Keep the browser from starting a native image drag.
            event.prevent_default();
            shared
                .borrow_mut()
                .begin_drag(f64::from(e.client_x()), PointerKind::Mouse);

            let mut slot = drag.borrow_mut();
            if slot.is_none() {
                match subscribe(&document, &on_move, &on_up) {
                    Ok(pair) => *slot = Some(pair),
                    Err(_) => {
                        console::warn("Carousel could not track the mouse; drag cancelled");
                        shared.borrow_mut().cancel_drag();
                    }
                }
            }
        }
    });
    listeners.push(Listener::attach(container.as_ref(), "mousedown", &on_down)?);

    // Losing focus mid-drag never delivers a `mouseup`.
    let on_blur = callback({
        let shared = Rc::clone(shared);
        let drag = Rc::clone(&drag);
        move |_event: Event| {
            shared.borrow_mut().cancel_drag();
            drag.borrow_mut().take();
        }
    });
    listeners.push(Listener::attach(window.as_ref(), "blur", &on_blur)?);
    Ok(drag)
}

fn subscribe(
    document: &EventTarget,
    on_move: &Callback,
    on_up: &Callback,
) -> Result<[Listener; 2], JsValue> {
    Ok([
        Listener::attach(document, "mousemove", on_move)?,
        Listener::attach(document, "mouseup", on_up)?,
    ])
}

/// Touch drags use the touch sequence's own events on the container.
fn bind_touch(
    container: &HtmlElement,
    selectors: &Selectors,
    shared: &Shared,
    listeners: &mut Vec<Listener>,
) -> Result<(), MountError> {
    let target: &EventTarget = container.as_ref();
    let selectors = *selectors;

    let on_start = callback({
        let shared = Rc::clone(shared);
        move |event: Event| {
            if on_button(&event, &selectors) {
                return;
            }
            if let Some(x) = touch_x(&event) {
                shared.borrow_mut().begin_drag(x, PointerKind::Touch);
            }
        }
    });
    listeners.push(Listener::attach(target, "touchstart", &on_start)?);

    let on_move = callback({
        let shared = Rc::clone(shared);
        move |event: Event| {
            if let Some(x) = touch_x(&event) {
                shared.borrow_mut().drag_to(x);
            }
        }
    });
    listeners.push(Listener::attach(target, "touchmove", &on_move)?);

    let on_end = callback({
        let shared = Rc::clone(shared);
        move |_event: Event| {
            shared.borrow_mut().end_drag();
        }
    });
    listeners.push(Listener::attach(target, "touchend", &on_end)?);

    let on_cancel = callback({
        let shared = Rc::clone(shared);
        move |_event: Event| {
            shared.borrow_mut().cancel_drag();
        }
    });
    listeners.push(Listener::attach(target, "touchcancel", &on_cancel)?);
    Ok(())
}

/// Returns the x coordinate of the first active touch.
fn touch_x(event: &Event) -> Option<f64> {
    let touches = event.dyn_ref::<TouchEvent>()?.touches();
    Some(f64::from(touches.get(0)?.client_x()))
}
