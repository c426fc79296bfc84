//! One-shot reveal animations driven by viewport intersection.
//!
//! DESIGN
//! ======
//! Every observed element holds a [`OneShot`] subscription: it fires on the
//! first intersecting notification and is released from observation at the
//! same moment, so it can never fire again. [`RevealRegistry`] owns the set
//! of pending subscriptions for one observer; firing is order-independent
//! across elements.
//!
//! A notification qualifies only when the element intersects AND its visible
//! ratio has reached the group threshold. Browsers deliver an initial
//! notification on `observe()` for any overlap at all, so the ratio is
//! checked here rather than trusted to the observer.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use crate::config::FxConfig;
use crate::consts::{
    FADE_UP_CLASS, LAZY_IMAGE_SELECTOR, PROGRESS_SELECTOR, SCROLL_REVEAL_SELECTOR, SECTION_REVEAL_SELECTOR,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OneShot {
    #[default]
    Armed,
    Fired,
}

impl OneShot {
    /// Returns `true` exactly once: on the first qualifying notification.
    pub fn notify(&mut self, qualifies: bool) -> bool {
        if *self == Self::Armed && qualifies {
            *self = Self::Fired;
            return true;
        }
        false
    }
}

/// Outcome of delivering one notification to a registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Delivery {
    /// First qualifying notification; the element is now released.
    Fired,
    /// Still observed, not yet intersecting.
    Waiting,
    /// Not (or no longer) observed.
    Released,
}

/// Pending subscriptions for one observer.
#[derive(Debug)]
pub struct RevealRegistry<K> {
    pending: Vec<(K, OneShot)>,
    threshold: f64,
}

impl<K> Default for RevealRegistry<K> {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl<K> RevealRegistry<K> {
    /// A registry firing once an element is at least `threshold` visible.
    #[must_use]
    pub fn new(threshold: f64) -> Self {
        Self { pending: Vec::new(), threshold }
    }

    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }
}

impl<K: PartialEq> RevealRegistry<K> {
    pub fn observe(&mut self, key: K) {
        if !self.is_observed(&key) {
            self.pending.push((key, OneShot::Armed));
        }
    }

    /// Deliver one observer entry for `key` with its visible `ratio`.
    pub fn notify(&mut self, key: &K, is_intersecting: bool, ratio: f64) -> Delivery {
        let Some(index) = self.pending.iter().position(|(k, _)| k == key) else {
            return Delivery::Released;
        };
        let qualifies = is_intersecting && ratio >= self.threshold;
        if self.pending[index].1.notify(qualifies) {
            self.pending.swap_remove(index);
            return Delivery::Fired;
        }
        Delivery::Waiting
    }

    #[must_use]
    pub fn is_observed(&self, key: &K) -> bool {
        self.pending.iter().any(|(k, _)| k == key)
    }

    #[must_use]
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Drain everything still pending, e.g. when intersection detection is
    /// unavailable and every element is revealed up front.
    pub fn release_all(&mut self) -> Vec<K> {
        self.pending.drain(..).map(|(k, _)| k).collect()
    }
}

/// What happens to an element when its subscription fires.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RevealEffect {
    /// Add these classes.
    AddClasses(Vec<&'static str>),
    /// Reset the inline width to zero, then restore it after a delay.
    ReplayWidth { delay_ms: u32 },
    /// Move `data-src` into `src`.
    SwapSource,
}

impl RevealEffect {
    /// Whether the no-observer fallback should apply this effect up front.
    /// Width replay is purely cosmetic and is skipped.
    #[must_use]
    pub fn applies_without_observer(&self) -> bool {
        !matches!(self, Self::ReplayWidth { .. })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RevealGroup {
    pub selector: &'static str,
    pub effect: RevealEffect,
    pub threshold: f64,
    pub root_margin: &'static str,
}

/// The stock reveal groups for the page.
#[must_use]
pub fn default_groups(config: &FxConfig) -> Vec<RevealGroup> {
    vec![
        RevealGroup {
            selector: SECTION_REVEAL_SELECTOR,
            effect: RevealEffect::AddClasses(vec!["fade-in"]),
            threshold: config.reveal_threshold,
            root_margin: "0px 0px -50px 0px",
        },
        RevealGroup {
            selector: SCROLL_REVEAL_SELECTOR,
            effect: RevealEffect::AddClasses(vec!["revealed", FADE_UP_CLASS]),
            threshold: config.reveal_threshold,
            root_margin: "0px 0px -100px 0px",
        },
        RevealGroup {
            selector: PROGRESS_SELECTOR,
            effect: RevealEffect::ReplayWidth { delay_ms: config.progress_delay_ms },
            threshold: config.progress_threshold,
            root_margin: "0px",
        },
        RevealGroup { selector: LAZY_IMAGE_SELECTOR, effect: RevealEffect::SwapSource, threshold: 0.0, root_margin: "0px" },
    ]
}

/// `animation-delay` for the `index`-th child of a stagger group.
#[must_use]
pub fn stagger_delay(index: u32, step_s: f64) -> String {
    // Scale through tenths-of-a-millisecond to keep `0.3s` from printing as `0.30000000000000004s`.
    let tenths_ms = (f64::from(index) * step_s * 10_000.0).round();
    format!("{}s", tenths_ms / 10_000.0)
}

#[cfg(feature = "hydrate")]
pub use browser::RevealBinding;

#[cfg(feature = "hydrate")]
mod browser {
    use std::cell::RefCell;
    use std::rc::Rc;

    use gloo_timers::callback::Timeout;
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::{Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

    use super::{Delivery, RevealEffect, RevealGroup, RevealRegistry, default_groups, stagger_delay};
    use crate::config::FxConfig;
    use crate::consts::{FADE_UP_CLASS, LAZY_SRC_ATTR, STAGGER_SELECTOR};
    use crate::dom::{query_all, set_class, set_style, settle, style_value};
    use crate::error::FxError;

    fn apply(el: &Element, effect: &RevealEffect) {
        match effect {
            RevealEffect::AddClasses(classes) => {
                for class in classes {
                    set_class(el, class, true);
                }
            }
            RevealEffect::ReplayWidth { delay_ms } => {
                let width = style_value(el, "width");
                set_style(el, "width", "0");
                let el = el.clone();
                Timeout::new(*delay_ms, move || set_style(&el, "width", &width)).forget();
            }
            RevealEffect::SwapSource => {
                if let Some(src) = el.get_attribute(LAZY_SRC_ATTR) {
                    settle(el.set_attribute("src", &src), "src");
                    settle(el.remove_attribute(LAZY_SRC_ATTR), LAZY_SRC_ATTR);
                }
            }
        }
    }

    /// One browser observer plus its one-shot subscriptions.
    struct GroupObserver {
        observer: IntersectionObserver,
        _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
    }

    impl GroupObserver {
        fn attach(group: RevealGroup, elements: Vec<Element>) -> Result<Self, FxError> {
            let registry = Rc::new(RefCell::new(RevealRegistry::new(group.threshold)));
            let effect = group.effect.clone();
            let callback = {
                let registry = Rc::clone(&registry);
                Closure::wrap(Box::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
                    for entry in entries.iter() {
                        let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                            continue;
                        };
                        let target = entry.target();
                        let delivery = registry
                            .borrow_mut()
                            .notify(&target, entry.is_intersecting(), entry.intersection_ratio());
                        if delivery == Delivery::Fired {
                            apply(&target, &effect);
                            observer.unobserve(&target);
                        }
                    }
                }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>)
            };
            let init = IntersectionObserverInit::new();
            init.set_threshold(&JsValue::from_f64(group.threshold));
            init.set_root_margin(group.root_margin);
            let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
            for el in elements {
                observer.observe(&el);
                registry.borrow_mut().observe(el);
            }
            log::debug!("observing {} element(s) for {}", registry.borrow().pending(), group.selector);
            Ok(Self { observer, _callback: callback })
        }
    }

    impl Drop for GroupObserver {
        fn drop(&mut self) {
            self.observer.disconnect();
        }
    }

    fn observer_supported() -> bool {
        web_sys::window().is_some_and(|w| {
            settle(js_sys::Reflect::has(&w, &JsValue::from_str("IntersectionObserver")), "IntersectionObserver check")
                .unwrap_or(false)
        })
    }

    fn stagger(document: &Document, step_s: f64) {
        for group in query_all(document, STAGGER_SELECTOR) {
            let children = group.children();
            for index in 0..children.length() {
                if let Some(child) = children.item(index) {
                    set_style(&child, "animation-delay", &stagger_delay(index, step_s));
                    set_class(&child, FADE_UP_CLASS, true);
                }
            }
        }
    }

    pub struct RevealBinding {
        _observers: Vec<GroupObserver>,
        _stagger: Timeout,
    }

    impl RevealBinding {
        pub fn attach(document: &Document, config: &FxConfig) -> Result<Self, FxError> {
            let groups = default_groups(config);
            let mut observers = Vec::new();
            if observer_supported() {
                for group in groups {
                    let elements = query_all(document, group.selector);
                    if elements.is_empty() {
                        continue;
                    }
                    match GroupObserver::attach(group, elements) {
                        Ok(observer) => observers.push(observer),
                        Err(err) => log::warn!("reveal observer not created: {err}"),
                    }
                }
            } else {
                log::info!("IntersectionObserver unavailable; revealing everything");
                for group in groups.iter().filter(|g| g.effect.applies_without_observer()) {
                    let mut registry = RevealRegistry::default();
                    for el in query_all(document, group.selector) {
                        registry.observe(el);
                    }
                    for el in registry.release_all() {
                        apply(&el, &group.effect);
                    }
                }
            }

            let (document, step) = (document.clone(), config.stagger_step_s);
            let stagger = Timeout::new(config.stagger_delay_ms, move || stagger(&document, step));
            Ok(Self { _observers: observers, _stagger: stagger })
        }
    }
}
