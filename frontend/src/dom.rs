//! Small web-sys helpers shared by the page behaviors. Every write is best
//! effort: a missing window, body or API simply turns the call into a no-op.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Array, Reflect};
use web_sys::{
    window, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

pub fn body() -> Option<HtmlElement> {
    window()?.document()?.body()
}

pub fn set_body_class(class: &str, on: bool) {
    if let Some(body) = body() {
        let _ = body.class_list().toggle_with_force(class, on);
    }
}

pub fn set_body_overflow(value: &str) {
    if let Some(body) = body() {
        let _ = body.style().set_property("overflow", value);
    }
}

pub fn viewport_width() -> Option<f64> {
    window()?.inner_width().ok()?.as_f64()
}

pub fn intersection_observer_supported() -> bool {
    match window() {
        Some(window) => Reflect::has(&window, &JsValue::from_str("IntersectionObserver"))
            .unwrap_or(false),
        None => false,
    }
}

/// What an intersection callback wants done with its element afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Observe {
    Keep,
    Stop,
}

/// Keeps an intersection observer alive; disconnects it on drop.
pub struct ObserverGuard {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for ObserverGuard {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Watches `element` and reports every intersection change to `on_change`.
/// Returns `None` when the observer could not be created.
pub fn observe<F>(
    element: &Element,
    threshold: f64,
    root_margin: Option<&str>,
    mut on_change: F,
) -> Option<ObserverGuard>
where
    F: FnMut(bool) -> Observe + 'static,
{
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if on_change(entry.is_intersecting()) == Observe::Stop {
                    observer.unobserve(&entry.target());
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    if let Some(margin) = root_margin {
        options.set_root_margin(margin);
    }

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options).ok()?;
    observer.observe(element);

    Some(ObserverGuard {
        observer,
        _callback: callback,
    })
}
