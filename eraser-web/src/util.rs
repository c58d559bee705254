use std::fmt::Display;

use chrono::TimeZone;
use eraser_client::api::Time;
use wasm_bindgen::{prelude::*, JsCast};

use crate::config::SITE_NAME;

pub fn page_title(title: &str) -> String {
    match title.is_empty() {
        true => String::from(SITE_NAME),
        false => format!("{title} | {SITE_NAME}"),
    }
}

pub fn format_date<Tz>(date: &Time, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    date.with_timezone(tz)
        .format("%B %-d, %Y at %H:%M")
        .to_string()
}

pub fn comment_count_label(n: usize) -> String {
    match n {
        1 => String::from("1 Comment"),
        n => format!("{n} Comments"),
    }
}

type IntersectionCallback = dyn FnMut(js_sys::Array, web_sys::IntersectionObserver);

/// Keeps an `IntersectionObserver` alive; disconnects it when dropped
pub struct IntersectionWatch {
    observer: web_sys::IntersectionObserver,
    _callback: Closure<IntersectionCallback>,
}

impl Drop for IntersectionWatch {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Calls `f` once, the first time `elt` comes into view
///
/// Fails if the browser has no `IntersectionObserver`, in which case callers
/// should behave as if the element was already visible.
pub fn on_first_intersection<F>(
    elt: &web_sys::Element,
    threshold: f64,
    root_margin: &str,
    f: F,
) -> Result<IntersectionWatch, JsValue>
where
    F: FnOnce() + 'static,
{
    let mut f = Some(f);
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
            let visible = entries.iter().any(|e| {
                e.unchecked_into::<web_sys::IntersectionObserverEntry>()
                    .is_intersecting()
            });
            if visible {
                observer.disconnect();
                if let Some(f) = f.take() {
                    f();
                }
            }
        },
    ) as Box<IntersectionCallback>);
    let mut options = web_sys::IntersectionObserverInit::new();
    options
        .threshold(&JsValue::from_f64(threshold))
        .root_margin(root_margin);
    let observer = web_sys::IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        &options,
    )?;
    observer.observe(elt);
    Ok(IntersectionWatch {
        observer,
        _callback: callback,
    })
}
