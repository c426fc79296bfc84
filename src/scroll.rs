//! Scroll-driven page chrome: active nav link, header shadow, parallax and
//! scroll direction.
//!
//! ARCHITECTURE
//! ============
//! [`ScrollCoordinator`] is a pure function of the scroll offset plus the
//! last measured section geometry, so every decision is re-derivable and
//! testable without a browser. The browser binding only measures, feeds
//! offsets through rate gates, and writes the resulting classes and styles.
//!
//! Event policy:
//! - active link + header shadow: trailing debounce, plus once at attach
//! - scroll direction: throttle
//! - parallax: one animation frame in flight at a time ([`FrameGate`])
//! - resize: trailing debounce that re-measures sections

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Measured position of one `section[id]`, in document coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    #[must_use]
    pub fn new(id: &str, top: f64, height: f64) -> Self {
        Self { id: id.to_owned(), top, height }
    }

    /// Whether `offset` lies in `[top - lead, top - lead + height)`.
    #[must_use]
    pub fn contains(&self, offset: f64, lead: f64) -> bool {
        let start = self.top - lead;
        offset >= start && offset < start + self.height
    }
}

/// Id of the section active at `offset`. Sections are checked in document
/// order and the last match wins when ranges overlap.
#[must_use]
pub fn active_section(sections: &[SectionBounds], offset: f64, lead: f64) -> Option<&str> {
    sections
        .iter()
        .rev()
        .find(|s| s.contains(offset, lead))
        .map(|s| s.id.as_str())
}

/// Whether a nav link `href` points at section `id`.
#[must_use]
pub fn link_targets(href: &str, id: &str) -> bool {
    href.strip_prefix('#') == Some(id)
}

#[must_use]
pub fn header_shadow(offset: f64, threshold: f64) -> bool {
    offset > threshold
}

/// Speed factor from a `data-parallax` value; empty or unparsable values
/// use `default`.
#[must_use]
pub fn parallax_speed(raw: Option<&str>, default: f64) -> f64 {
    match raw.map(str::trim) {
        Some(s) if !s.is_empty() => match s.parse::<f64>() {
            Ok(v) if v.is_finite() => v,
            _ => default,
        },
        _ => default,
    }
}

/// Vertical translation for a parallax layer.
#[must_use]
pub fn parallax_translate(offset: f64, speed: f64) -> f64 {
    -(offset * speed)
}

#[must_use]
pub fn parallax_transform(offset: f64, speed: f64) -> String {
    format!("translateY({}px)", parallax_translate(offset, speed))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollDirection {
    Down,
    Up,
}

impl ScrollDirection {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Down => crate::consts::SCROLLING_DOWN_CLASS,
            Self::Up => crate::consts::SCROLLING_UP_CLASS,
        }
    }

    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Down => Self::Up,
            Self::Up => Self::Down,
        }
    }
}

/// Classifies each sample against the previous one.
#[derive(Clone, Copy, Debug)]
pub struct DirectionTracker {
    last: f64,
}

impl DirectionTracker {
    #[must_use]
    pub fn new(initial: f64) -> Self {
        Self { last: initial }
    }

    /// Strictly greater than the previous sample is down; anything else is up.
    pub fn observe(&mut self, offset: f64) -> ScrollDirection {
        let direction = if offset > self.last { ScrollDirection::Down } else { ScrollDirection::Up };
        self.last = offset;
        direction
    }
}

/// The "ticking" guard: at most one animation frame pending at a time.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameGate {
    ticking: bool,
}

impl FrameGate {
    /// Returns `true` when the caller should request a frame.
    pub fn request(&mut self) -> bool {
        if self.ticking {
            return false;
        }
        self.ticking = true;
        true
    }

    pub fn complete(&mut self) {
        self.ticking = false;
    }

    #[must_use]
    pub fn is_ticking(&self) -> bool {
        self.ticking
    }
}

/// Result of one nav/header tick.
#[derive(Clone, Debug, PartialEq)]
pub struct ScrollUpdate {
    /// `None` leaves the current highlight untouched.
    pub active: Option<String>,
    pub header_shadow: bool,
}

pub struct ScrollCoordinator {
    sections: Vec<SectionBounds>,
    lead: f64,
    shadow_threshold: f64,
}

impl ScrollCoordinator {
    #[must_use]
    pub fn new(sections: Vec<SectionBounds>, lead: f64, shadow_threshold: f64) -> Self {
        Self { sections, lead, shadow_threshold }
    }

    /// Replace geometry after a resize.
    pub fn remeasure(&mut self, sections: Vec<SectionBounds>) {
        self.sections = sections;
    }

    #[must_use]
    pub fn sections(&self) -> &[SectionBounds] {
        &self.sections
    }

    #[must_use]
    pub fn tick(&self, offset: f64) -> ScrollUpdate {
        ScrollUpdate {
            active: active_section(&self.sections, offset, self.lead).map(str::to_owned),
            header_shadow: header_shadow(offset, self.shadow_threshold),
        }
    }
}

#[cfg(feature = "hydrate")]
pub use browser::ScrollBinding;

#[cfg(feature = "hydrate")]
mod browser {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;
    use web_sys::{Document, Element, HtmlElement, Window};

    use super::{DirectionTracker, FrameGate, ScrollCoordinator, ScrollUpdate, SectionBounds, link_targets};
    use super::{parallax_speed, parallax_transform};
    use crate::config::FxConfig;
    use crate::consts::{
        ACTIVE_CLASS, HEADER_ID, HEADER_SHADOW, NAV_LINK_SELECTOR, PARALLAX_ATTR, PARALLAX_SELECTOR,
        SECTION_SELECTOR,
    };
    use crate::dom::{Listener, as_html, query_all, set_class, set_style, settle};
    use crate::error::FxError;
    use crate::timing::{RateLimited, RatePolicy};

    fn offset(window: &Window) -> f64 {
        settle(window.page_y_offset(), "pageYOffset").unwrap_or(0.0)
    }

    fn measure(sections: &[Element]) -> Vec<SectionBounds> {
        sections
            .iter()
            .filter_map(|el| {
                let html = as_html(el)?;
                Some(SectionBounds::new(
                    &el.id(),
                    f64::from(html.offset_top()),
                    f64::from(html.offset_height()),
                ))
            })
            .collect()
    }

    struct Chrome {
        links: Vec<Element>,
        header: Option<Element>,
    }

    impl Chrome {
        fn apply(&self, update: &ScrollUpdate) {
            if let Some(active) = update.active.as_deref() {
                for link in &self.links {
                    let href = link.get_attribute("href").unwrap_or_default();
                    set_class(link, ACTIVE_CLASS, link_targets(&href, active));
                }
            }
            if let Some(header) = &self.header {
                set_style(header, "box-shadow", if update.header_shadow { HEADER_SHADOW } else { "none" });
            }
        }
    }

    struct Parallax {
        layers: Vec<(HtmlElement, f64)>,
        gate: Cell<FrameGate>,
        frame: RefCell<Option<Closure<dyn FnMut(f64)>>>,
    }

    impl Parallax {
        fn collect(document: &Document, default_speed: f64) -> Self {
            let layers = query_all(document, PARALLAX_SELECTOR)
                .into_iter()
                .filter_map(|el| {
                    let speed = parallax_speed(el.get_attribute(PARALLAX_ATTR).as_deref(), default_speed);
                    el.dyn_ref::<HtmlElement>().map(|html| (html.clone(), speed))
                })
                .collect();
            Self { layers, gate: Cell::new(FrameGate::default()), frame: RefCell::new(None) }
        }

        fn schedule(self: &Rc<Self>, window: &Window) {
            let mut gate = self.gate.get();
            if self.layers.is_empty() || !gate.request() {
                return;
            }
            self.gate.set(gate);
            let this = Rc::clone(self);
            let win = window.clone();
            let cb: Closure<dyn FnMut(f64)> = Closure::once(move |_ts: f64| {
                let scrolled = offset(&win);
                for (layer, speed) in &this.layers {
                    settle(layer.style().set_property("transform", &parallax_transform(scrolled, *speed)), "transform");
                }
                let mut gate = this.gate.get();
                gate.complete();
                this.gate.set(gate);
                this.frame.borrow_mut().take();
            });
            if settle(window.request_animation_frame(cb.as_ref().unchecked_ref()), "requestAnimationFrame").is_some() {
                *self.frame.borrow_mut() = Some(cb);
            } else {
                let mut gate = self.gate.get();
                gate.complete();
                self.gate.set(gate);
            }
        }
    }

    pub struct ScrollBinding {
        _listeners: Vec<Listener>,
    }

    impl ScrollBinding {
        pub fn attach(document: &Document, config: &FxConfig) -> Result<Self, FxError> {
            let window = crate::dom::window()?;
            let section_els = query_all(document, SECTION_SELECTOR);
            let coordinator = Rc::new(RefCell::new(ScrollCoordinator::new(
                measure(&section_els),
                config.section_lead_px,
                config.header_shadow_px,
            )));
            let chrome = Rc::new(Chrome {
                links: query_all(document, NAV_LINK_SELECTOR),
                header: document.get_element_by_id(HEADER_ID),
            });
            if chrome.header.is_none() {
                log::debug!("no #header; shadow updates disabled");
            }

            let refresh = {
                let (coordinator, chrome, window) = (Rc::clone(&coordinator), Rc::clone(&chrome), window.clone());
                move || chrome.apply(&coordinator.borrow().tick(offset(&window)))
            };
            refresh();
            let refresh = Rc::new(refresh);

            let nav_tick = {
                let refresh = Rc::clone(&refresh);
                RateLimited::new(RatePolicy::Debounce { quiet_ms: config.scroll_debounce_ms }, move || refresh())
            };

            let body = document.body();
            let tracker = Rc::new(Cell::new(DirectionTracker::new(offset(&window))));
            let direction_tick = {
                let (tracker, window) = (Rc::clone(&tracker), window.clone());
                RateLimited::new(RatePolicy::Throttle { interval_ms: config.direction_throttle_ms }, move || {
                    let mut t = tracker.get();
                    let direction = t.observe(offset(&window));
                    tracker.set(t);
                    if let Some(body) = &body {
                        set_class(body, direction.class(), true);
                        set_class(body, direction.opposite().class(), false);
                    }
                })
            };

            let resize_tick = {
                let (coordinator, refresh) = (Rc::clone(&coordinator), Rc::clone(&refresh));
                RateLimited::new(RatePolicy::Debounce { quiet_ms: config.resize_debounce_ms }, move || {
                    coordinator.borrow_mut().remeasure(measure(&section_els));
                    refresh();
                })
            };

            let parallax = Rc::new(Parallax::collect(document, config.parallax_default_speed));

            let scroll = {
                let win = window.clone();
                Listener::passive(&window, "scroll", move |_| {
                    nav_tick.trigger();
                    direction_tick.trigger();
                    parallax.schedule(&win);
                })
            };
            let resize = Listener::new(&window, "resize", move |_| resize_tick.trigger());
            Ok(Self { _listeners: vec![scroll, resize] })
        }
    }
}
