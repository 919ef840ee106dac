use leptos::{html, prelude::*};
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;

type ResizeCallback = Closure<dyn FnMut(js_sys::Array, web_sys::ResizeObserver)>;

/// Tracks the container's pixel width. A `ResizeObserver` is attached
/// once the node mounts and disconnected on cleanup regardless of exit
/// path, so the subscription never outlives the component. Resize is the
/// sole trigger for scene recomputation; hover state lives elsewhere and
/// never reaches this signal.
pub fn observe_container_width(container: NodeRef<html::Div>) -> ReadSignal<f64> {
    let (width, set_width) = signal(0.0);
    let observer: StoredValue<Option<(web_sys::ResizeObserver, ResizeCallback)>, LocalStorage> =
        StoredValue::new_local(None);

    Effect::new(move |_| {
        let Some(el) = container.get() else {
            return;
        };
        if observer.with_value(|o| o.is_some()) {
            return;
        }

        // Initial read; the observer only fires on subsequent changes in
        // some engines.
        set_width.set(el.client_width() as f64);

        let callback: ResizeCallback =
            Closure::new(move |entries: js_sys::Array, _: web_sys::ResizeObserver| {
                if let Ok(entry) = entries.get(0).dyn_into::<web_sys::ResizeObserverEntry>() {
                    set_width.set(entry.content_rect().width());
                }
            });

        match web_sys::ResizeObserver::new(callback.as_ref().unchecked_ref()) {
            Ok(ob) => {
                ob.observe(&el);
                observer.set_value(Some((ob, callback)));
            },
            Err(e) => {
                tracing::warn!(?e, "ResizeObserver unavailable; width will not track resizes");
                drop(callback);
            },
        }
    });

    on_cleanup(move || {
        observer.update_value(|o| {
            if let Some((ob, _)) = o.take() {
                ob.disconnect();
            }
        });
    });

    width
}
