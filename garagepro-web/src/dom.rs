//! Thin helpers over `web-sys` for lookups, listeners and timers.

use crate::errors::{WebError, WebResult};
use std::cell::Cell;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, Window};

pub fn window() -> WebResult<Window> {
    web_sys::window().ok_or(WebError::MissingElement("window"))
}

pub fn document() -> WebResult<Document> {
    window()?.document().ok_or(WebError::MissingElement("document"))
}

/// All elements matching `selector`, in document order.
pub fn query_all(document: &Document, selector: &str) -> WebResult<Vec<Element>> {
    let list = document.query_selector_all(selector)?;
    let mut out = Vec::with_capacity(list.length() as usize);
    for i in 0..list.length() {
        if let Some(el) = list.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
            out.push(el);
        }
    }
    Ok(out)
}

/// Element by id, cast to `T`. `None` when absent or of another type.
pub fn by_id<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    document.get_element_by_id(id).and_then(|el| el.dyn_into::<T>().ok())
}

/// Attach a listener for the lifetime of the page.
pub fn on<F>(target: &EventTarget, event: &str, handler: F) -> WebResult<()>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

pub fn set_timeout<F>(delay_ms: u32, f: F) -> WebResult<i32>
where
    F: FnOnce() + 'static,
{
    let callback = Closure::once_into_js(f);
    let handle = window()?.set_timeout_with_callback_and_timeout_and_arguments_0(
        callback.unchecked_ref(),
        clamp_delay(delay_ms),
    )?;
    Ok(handle)
}

pub fn clear_timeout(handle: i32) {
    if let Some(win) = web_sys::window() {
        win.clear_timeout_with_handle(handle);
    }
}

/// Recurring timer for the lifetime of the page.
pub fn set_interval<F>(period_ms: u32, f: F) -> WebResult<i32>
where
    F: FnMut() + 'static,
{
    let closure = Closure::<dyn FnMut()>::new(f);
    let handle = window()?.set_interval_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        clamp_delay(period_ms),
    )?;
    closure.forget();
    Ok(handle)
}

fn clamp_delay(ms: u32) -> i32 {
    i32::try_from(ms).unwrap_or(i32::MAX)
}

/// Collapses bursts of calls into one, fired after a quiet period.
#[derive(Debug)]
pub struct Debouncer {
    delay_ms: u32,
    pending: Cell<Option<i32>>,
}

impl Debouncer {
    pub fn new(delay_ms: u32) -> Self {
        Self { delay_ms, pending: Cell::new(None) }
    }

    /// Replace any pending call with `f`.
    pub fn schedule<F>(&self, f: F) -> WebResult<()>
    where
        F: FnOnce() + 'static,
    {
        self.cancel();
        let handle = set_timeout(self.delay_ms, f)?;
        self.pending.set(Some(handle));
        Ok(())
    }

    pub fn cancel(&self) {
        if let Some(handle) = self.pending.take() {
            clear_timeout(handle);
        }
    }
}
