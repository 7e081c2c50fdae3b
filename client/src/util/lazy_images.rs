//! Lazy image loading states.
//!
//! Every `img[loading="lazy"]` starts with the `image-loading` class and is
//! watched by an `IntersectionObserver` that fires slightly before the image
//! scrolls into view. Once loaded it switches to `image-loaded` (plus
//! `loaded` for CSS transitions); a failed load gets `image-error`.

#[cfg(test)]
#[path = "lazy_images_test.rs"]
mod lazy_images_test;

pub const ROOT_MARGIN: &str = "50px 0px";
pub const THRESHOLD: f64 = 0.01;

/// `sizes` hint for a loaded image: the profile photo spans the column on
/// small screens, everything else is a logo.
#[must_use]
pub fn sizes_hint(src: &str) -> &'static str {
    if src.contains("profile.") {
        "(max-width: 768px) 100vw, 400px"
    } else {
        "80px"
    }
}

/// Start observing all lazy images currently in the document.
pub fn init() {
    #[cfg(feature = "hydrate")]
    {
        if let Err(e) = observe_all() {
            leptos::logging::warn!("lazy images disabled: {e:?}");
        }
    }
}

#[cfg(feature = "hydrate")]
fn observe_all() -> Result<(), wasm_bindgen::JsValue> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let doc = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| wasm_bindgen::JsValue::from_str("no document"))?;

    let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                observer.unobserve(&target);
                if let Ok(img) = target.dyn_into::<web_sys::HtmlImageElement>() {
                    load_image(&img);
                }
            }
        },
    );

    let options = web_sys::IntersectionObserverInit::new();
    options.set_root_margin(ROOT_MARGIN);
    options.set_threshold(&wasm_bindgen::JsValue::from_f64(THRESHOLD));
    let observer = web_sys::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    // The observer lives for the whole page view.
    callback.forget();

    let images = doc.query_selector_all("img[loading=\"lazy\"]")?;
    for i in 0..images.length() {
        let Some(img) = images.item(i).and_then(|n| n.dyn_into::<web_sys::Element>().ok()) else {
            continue;
        };
        let _ = img.class_list().add_1("image-loading");
        observer.observe(&img);
    }
    Ok(())
}

#[cfg(feature = "hydrate")]
fn load_image(img: &web_sys::HtmlImageElement) {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    if img.complete() && img.natural_height() != 0 {
        mark_loaded(img);
        return;
    }

    let on_load = {
        let img = img.clone();
        Closure::once_into_js(move || mark_loaded(&img))
    };
    let on_error = {
        let img = img.clone();
        Closure::once_into_js(move || mark_failed(&img))
    };
    let _ = img.add_event_listener_with_callback("load", on_load.unchecked_ref());
    let _ = img.add_event_listener_with_callback("error", on_error.unchecked_ref());
}

#[cfg(feature = "hydrate")]
fn mark_loaded(img: &web_sys::HtmlImageElement) {
    let classes = img.class_list();
    let _ = classes.remove_1("image-loading");
    let _ = classes.add_2("image-loaded", "loaded");
    img.set_decoding("async");
    img.set_sizes(sizes_hint(&img.src()));
}

#[cfg(feature = "hydrate")]
fn mark_failed(img: &web_sys::HtmlImageElement) {
    let classes = img.class_list();
    let _ = classes.remove_1("image-loading");
    let _ = classes.add_1("image-error");
}
