//! Small page polish: preloader fade, card hover lift, lazy-image fade-in,
//! image preload hints, the page-transition class and loading state on
//! plain form submits.

#[cfg(test)]
#[path = "enhance_test.rs"]
mod enhance_test;

#[must_use]
pub fn card_transform(hovering: bool) -> &'static str {
    if hovering { "translateY(-8px) scale(1.02)" } else { "translateY(0) scale(1)" }
}

/// URL for a `<link rel="preload">` hint: the element's `src`, else its
/// `data-src`. Empty values count as missing.
#[must_use]
pub fn preload_href(src: Option<&str>, data_src: Option<&str>) -> Option<String> {
    [src, data_src]
        .into_iter()
        .flatten()
        .find(|s| !s.is_empty())
        .map(str::to_owned)
}

#[cfg(feature = "hydrate")]
pub use browser::EnhanceBinding;

#[cfg(feature = "hydrate")]
mod browser {
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::{Document, HtmlButtonElement, HtmlInputElement};

    use super::{card_transform, preload_href};
    use crate::config::FxConfig;
    use crate::consts::{
        ANY_SUBMIT_SELECTOR, CARD_HOVER_SELECTOR, CONTACT_FORM_ID, HIDDEN_CLASS, LAZY_LOADING_IMAGE_SELECTOR,
        LAZY_SRC_ATTR, LOADING_CLASS, PAGE_TRANSITION_CLASS, PRELOAD_SELECTOR, PRELOADER_ID,
    };
    use crate::dom::{Listener, query_all, set_class, set_style, settle};
    use crate::error::FxError;

    fn hide_preloader(document: &Document, config: &FxConfig) {
        let Some(preloader) = document.get_element_by_id(PRELOADER_ID) else {
            return;
        };
        let (delay, fade) = (config.preloader_delay_ms, config.preloader_fade_ms);
        wasm_bindgen_futures::spawn_local(async move {
            TimeoutFuture::new(delay).await;
            set_class(&preloader, HIDDEN_CLASS, true);
            TimeoutFuture::new(fade).await;
            preloader.remove();
        });
    }

    /// The module may start after `load` has already fired.
    fn load_complete(document: &Document) -> bool {
        settle(js_sys::Reflect::get(document, &JsValue::from_str("readyState")), "readyState")
            .and_then(|state| state.as_string())
            .is_some_and(|state| state == "complete")
    }

    fn add_preload_hints(document: &Document) -> Result<(), FxError> {
        let targets = query_all(document, PRELOAD_SELECTOR);
        if targets.is_empty() {
            return Ok(());
        }
        let head = document.head().ok_or(FxError::MissingElement("head"))?;
        for el in targets {
            let Some(href) = preload_href(el.get_attribute("src").as_deref(), el.get_attribute(LAZY_SRC_ATTR).as_deref())
            else {
                continue;
            };
            let link = document.create_element("link")?;
            link.set_attribute("rel", "preload")?;
            link.set_attribute("as", "image")?;
            link.set_attribute("href", &href)?;
            head.append_child(&link)?;
        }
        Ok(())
    }

    fn disable_submit(form: &web_sys::Element) {
        let Some(submit) = settle(form.query_selector(ANY_SUBMIT_SELECTOR), ANY_SUBMIT_SELECTOR).flatten() else {
            return;
        };
        set_class(&submit, LOADING_CLASS, true);
        if let Some(button) = submit.dyn_ref::<HtmlButtonElement>() {
            button.set_disabled(true);
        } else if let Some(input) = submit.dyn_ref::<HtmlInputElement>() {
            input.set_disabled(true);
        }
    }

    pub struct EnhanceBinding {
        _listeners: Vec<Listener>,
    }

    impl EnhanceBinding {
        pub fn attach(document: &Document, config: &FxConfig) -> Result<Self, FxError> {
            let window = crate::dom::window()?;
            let mut listeners = Vec::new();

            if load_complete(document) {
                hide_preloader(document, config);
            } else {
                let (document, config) = (document.clone(), config.clone());
                listeners.push(Listener::new(&window, "load", move |_| hide_preloader(&document, &config)));
            }

            for card in query_all(document, CARD_HOVER_SELECTOR) {
                for (event, hovering) in [("mouseenter", true), ("mouseleave", false)] {
                    let target = card.clone();
                    listeners.push(Listener::new(&card, event, move |_| {
                        set_style(&target, "transform", card_transform(hovering));
                    }));
                }
            }

            for img in query_all(document, LAZY_LOADING_IMAGE_SELECTOR) {
                let target = img.clone();
                listeners.push(Listener::new(&img, "load", move |_| {
                    set_class(&target, "loaded", true);
                    set_style(&target, "animation", "fadeIn 0.5s ease-in");
                }));
            }

            if let Err(err) = add_preload_hints(document) {
                log::warn!("preload hints skipped: {err}");
            }

            if let Some(body) = document.body() {
                set_class(&body, PAGE_TRANSITION_CLASS, true);
            }

            // The contact form manages its own busy state.
            for form in query_all(document, "form").into_iter().filter(|f| f.id() != CONTACT_FORM_ID) {
                let target = form.clone();
                listeners.push(Listener::new(&form, "submit", move |_| disable_submit(&target)));
            }

            Ok(Self { _listeners: listeners })
        }
    }
}
