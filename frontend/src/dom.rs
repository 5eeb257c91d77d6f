//! Thin wrappers over the browser APIs the page touches.
//!
//! Everything that registers something with the browser hands back a guard
//! that undoes the registration when dropped, so component effects can own
//! them and release them from their cleanup closures.

use log::{debug, warn};
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Event, EventTarget, HtmlElement, ScrollBehavior, ScrollToOptions, Window,
};

use crate::config::ScrollConfig;
use crate::nav::NavItem;
use crate::scroll::SectionBounds;

fn missing(what: &str) -> JsValue {
    JsValue::from_str(&format!("{} is not available", what))
}

pub fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| missing("window"))
}

pub fn document() -> Result<Document, JsValue> {
    window()?.document().ok_or_else(|| missing("document"))
}

/// Current vertical scroll offset of the page.
pub fn scroll_offset() -> Result<f64, JsValue> {
    window()?.scroll_y()
}

/// A DOM event listener that is removed again when the guard is dropped.
pub struct EventListener {
    target: EventTarget,
    event_type: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl EventListener {
    pub fn new<F>(target: &EventTarget, event_type: &'static str, callback: F) -> Result<Self, JsValue>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(callback) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(event_type, callback.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event_type,
            callback,
        })
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        if let Err(err) = self
            .target
            .remove_event_listener_with_callback(self.event_type, self.callback.as_ref().unchecked_ref())
        {
            warn!("Failed to detach {} listener: {:?}", self.event_type, err);
        }
    }
}

/// A pending `requestAnimationFrame` callback, cancelled on drop if it has not run yet.
pub struct AnimationFrame {
    window: Window,
    handle: i32,
    _callback: Closure<dyn FnMut()>,
}

impl AnimationFrame {
    pub fn request<F>(callback: F) -> Result<Self, JsValue>
    where
        F: FnOnce() + 'static,
    {
        let window = window()?;
        let mut callback = Some(callback);
        let callback = Closure::wrap(Box::new(move || {
            if let Some(callback) = callback.take() {
                callback();
            }
        }) as Box<dyn FnMut()>);
        let handle = window.request_animation_frame(callback.as_ref().unchecked_ref())?;
        Ok(Self {
            window,
            handle,
            _callback: callback,
        })
    }
}

impl Drop for AnimationFrame {
    fn drop(&mut self) {
        // Cancelling a frame that already fired is a no-op in the browser.
        if let Err(err) = self.window.cancel_animation_frame(self.handle) {
            debug!("Failed to cancel animation frame {}: {:?}", self.handle, err);
        }
    }
}

/// Keeps `<body>` from scrolling while held. Restores the previous inline
/// `overflow` value on drop.
pub struct BodyScrollLock {
    body: HtmlElement,
    previous: String,
}

impl BodyScrollLock {
    pub fn acquire() -> Result<Self, JsValue> {
        let body = document()?.body().ok_or_else(|| missing("body"))?;
        let style = body.style();
        let previous = style.get_property_value("overflow")?;
        style.set_property("overflow", "hidden")?;
        Ok(Self { body, previous })
    }
}

impl Drop for BodyScrollLock {
    fn drop(&mut self) {
        let style = self.body.style();
        let restored = if self.previous.is_empty() {
            style.remove_property("overflow").map(|_| ())
        } else {
            style.set_property("overflow", &self.previous)
        };
        if let Err(err) = restored {
            warn!("Failed to restore body scrolling: {:?}", err);
        }
    }
}

fn section_top(document: &Document, id: &str) -> Option<f64> {
    let element = document.get_element_by_id(id)?;
    let element = element.dyn_into::<HtmlElement>().ok()?;
    Some(f64::from(element.offset_top()))
}

/// Top offsets of the sections named by `items`, in the order given.
/// Ids with no matching element are left out.
pub fn section_bounds(items: &[NavItem]) -> Result<Vec<SectionBounds>, JsValue> {
    let document = document()?;
    Ok(items
        .iter()
        .filter_map(|item| {
            section_top(&document, item.id).map(|top| SectionBounds { id: item.id, top })
        })
        .collect())
}

/// Smooth-scrolls so that section `id` sits just below the fixed header.
/// Returns `Ok(false)` without scrolling when there is no such section.
pub fn scroll_to_section(id: &str, config: &ScrollConfig) -> Result<bool, JsValue> {
    let window = window()?;
    let document = window.document().ok_or_else(|| missing("document"))?;
    let Some(top) = section_top(&document, id) else {
        debug!("No section with id {:?}, skipping scroll", id);
        return Ok(false);
    };

    let options = ScrollToOptions::new();
    options.set_top(top - config.header_offset);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
    Ok(true)
}
