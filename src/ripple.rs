//! Click ripples on buttons.
//!
//! A ripple is a circle as wide as the button's larger side, centered on the
//! click, that removes itself after the animation ends. Each button holds at
//! most one live ripple: a new click replaces the previous one.

#[cfg(test)]
#[path = "ripple_test.rs"]
mod ripple_test;

/// Button bounding box in viewport coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Size and position of a ripple, relative to its button.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RippleGeometry {
    pub size: f64,
    pub left: f64,
    pub top: f64,
}

#[must_use]
pub fn geometry(rect: Rect, client_x: f64, client_y: f64) -> RippleGeometry {
    let size = rect.width.max(rect.height);
    RippleGeometry {
        size,
        left: client_x - rect.left - size / 2.0,
        top: client_y - rect.top - size / 2.0,
    }
}

/// Tracks the one live ripple of a button by id.
#[derive(Clone, Copy, Debug, Default)]
pub struct RippleSlot {
    live: Option<u64>,
    next_id: u64,
}

impl RippleSlot {
    /// Start a new ripple. Returns its id and the id it displaces, if any.
    pub fn spawn(&mut self) -> (u64, Option<u64>) {
        self.next_id += 1;
        let displaced = self.live.replace(self.next_id);
        (self.next_id, displaced)
    }

    /// The ripple `id` finished. Returns whether it was still the live one.
    pub fn expire(&mut self, id: u64) -> bool {
        if self.live == Some(id) {
            self.live = None;
            return true;
        }
        false
    }

    #[must_use]
    pub fn live(&self) -> Option<u64> {
        self.live
    }
}

#[cfg(feature = "hydrate")]
pub use browser::RippleBinding;

#[cfg(feature = "hydrate")]
mod browser {
    use std::cell::RefCell;
    use std::rc::Rc;

    use gloo_timers::callback::Timeout;
    use wasm_bindgen::JsCast;
    use web_sys::{Document, Element, HtmlElement, MouseEvent};

    use super::{Rect, RippleSlot, geometry};
    use crate::consts::{RIPPLE_CLASS, RIPPLE_TARGET_SELECTOR, RUNTIME_CSS};
    use crate::dom::{Listener, query_all, query_all_in, set_class, set_style, settle};
    use crate::error::FxError;

    /// Add the ripple/loading stylesheet to `<head>`.
    pub fn inject_styles(document: &Document) -> Result<(), FxError> {
        let head = document.head().ok_or(FxError::MissingElement("head"))?;
        let style = document.create_element("style")?;
        style.set_text_content(Some(RUNTIME_CSS));
        head.append_child(&style)?;
        Ok(())
    }

    #[derive(Default)]
    struct ButtonRipples {
        slot: RippleSlot,
        node: Option<Element>,
        /// Expiry of the live ripple; replacing it cancels the old one.
        expiry: Option<Timeout>,
    }

    fn spawn(
        document: &Document,
        button: &HtmlElement,
        mouse: &MouseEvent,
        state: &Rc<RefCell<ButtonRipples>>,
        duration_ms: u32,
    ) {
        let bounds = button.get_bounding_client_rect();
        let g = geometry(
            Rect { left: bounds.left(), top: bounds.top(), width: bounds.width(), height: bounds.height() },
            f64::from(mouse.client_x()),
            f64::from(mouse.client_y()),
        );
        let Some(ripple) = settle(document.create_element("span"), "create span") else {
            return;
        };
        set_style(&ripple, "width", &format!("{}px", g.size));
        set_style(&ripple, "height", &format!("{}px", g.size));
        set_style(&ripple, "left", &format!("{}px", g.left));
        set_style(&ripple, "top", &format!("{}px", g.top));
        set_class(&ripple, RIPPLE_CLASS, true);
        set_style(button, "position", "relative");
        set_style(button, "overflow", "hidden");

        let id = {
            let mut ripples = state.borrow_mut();
            let (id, displaced) = ripples.slot.spawn();
            if displaced.is_some() {
                if let Some(old) = ripples.node.take() {
                    old.remove();
                }
            }
            // Ripple markup left over from other scripts goes too.
            for stale in query_all_in(button, &format!(".{RIPPLE_CLASS}")) {
                stale.remove();
            }
            settle(button.append_child(&ripple), "append ripple");
            ripples.node = Some(ripple);
            id
        };

        let expiry = {
            let state = Rc::downgrade(state);
            Timeout::new(duration_ms, move || {
                // `expiry` still holds this timer; it is released on the next spawn.
                let Some(state) = state.upgrade() else {
                    return;
                };
                let mut ripples = state.borrow_mut();
                if ripples.slot.expire(id) {
                    if let Some(node) = ripples.node.take() {
                        node.remove();
                    }
                }
            })
        };
        state.borrow_mut().expiry = Some(expiry);
    }

    pub struct RippleBinding {
        _listeners: Vec<Listener>,
    }

    impl RippleBinding {
        pub fn attach(document: &Document, duration_ms: u32) -> Result<Self, FxError> {
            inject_styles(document)?;
            let buttons: Vec<HtmlElement> = query_all(document, RIPPLE_TARGET_SELECTOR)
                .into_iter()
                .filter_map(|el| el.dyn_ref::<HtmlElement>().cloned())
                .collect();
            log::debug!("ripple effect on {} button(s)", buttons.len());
            let listeners = buttons
                .into_iter()
                .map(|button| {
                    let state = Rc::new(RefCell::new(ButtonRipples::default()));
                    let (document, target) = (document.clone(), button.clone());
                    Listener::new(&button, "click", move |event| {
                        if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
                            spawn(&document, &target, mouse, &state, duration_ms);
                        }
                    })
                })
                .collect();
            Ok(Self { _listeners: listeners })
        }
    }
}
