//! Custom cursor proxies that trail the real pointer.
//!
//! Each animation frame moves every proxy a fixed fraction of the way to the
//! pointer (`pos += (pointer - pos) * k`). The primary proxy uses a smaller
//! `k` than the secondary, so it lags further behind.

#[cfg(test)]
#[path = "cursor_test.rs"]
mod cursor_test;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One exponentially smoothed proxy.
#[derive(Clone, Copy, Debug)]
pub struct Follower {
    pub pos: Point,
    smoothing: f64,
}

impl Follower {
    #[must_use]
    pub fn new(smoothing: f64) -> Self {
        Self { pos: Point::default(), smoothing }
    }

    /// Advance one frame toward `target`.
    pub fn step(&mut self, target: Point) -> Point {
        self.pos.x += (target.x - self.pos.x) * self.smoothing;
        self.pos.y += (target.y - self.pos.y) * self.smoothing;
        self.pos
    }
}

/// The primary (slow) and secondary (fast) proxies plus the last pointer.
#[derive(Clone, Copy, Debug)]
pub struct CursorPair {
    pub pointer: Point,
    pub primary: Follower,
    pub secondary: Follower,
}

impl CursorPair {
    #[must_use]
    pub fn new(primary_smoothing: f64, secondary_smoothing: f64) -> Self {
        Self {
            pointer: Point::default(),
            primary: Follower::new(primary_smoothing),
            secondary: Follower::new(secondary_smoothing),
        }
    }

    pub fn point_at(&mut self, x: f64, y: f64) {
        self.pointer = Point::new(x, y);
    }

    /// Advance both proxies one frame. Returns `(primary, secondary)`.
    pub fn frame(&mut self) -> (Point, Point) {
        (self.primary.step(self.pointer), self.secondary.step(self.pointer))
    }
}

/// Inline styles for the primary proxy.
#[derive(Clone, Debug, PartialEq)]
pub struct ProxyStyle {
    pub size_px: f64,
    pub border_color: &'static str,
}

#[must_use]
pub fn proxy_style(hovering: bool, hover_px: f64, rest_px: f64) -> ProxyStyle {
    if hovering {
        ProxyStyle { size_px: hover_px, border_color: crate::consts::CURSOR_HOVER_BORDER }
    } else {
        ProxyStyle { size_px: rest_px, border_color: "" }
    }
}

#[cfg(feature = "hydrate")]
pub use browser::CursorBinding;

#[cfg(feature = "hydrate")]
mod browser {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;
    use web_sys::{Document, Element, MouseEvent, Window};

    use super::{CursorPair, Point, proxy_style};
    use crate::config::FxConfig;
    use crate::consts::{CURSOR_PRIMARY_SELECTOR, CURSOR_SECONDARY_SELECTOR, INTERACTIVE_SELECTOR};
    use crate::dom::{Listener, query_all, set_style, settle};
    use crate::error::FxError;

    fn place(el: &Element, at: Point) {
        set_style(el, "left", &format!("{}px", at.x));
        set_style(el, "top", &format!("{}px", at.y));
    }

    type FrameSlot = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

    /// Self-rescheduling animation-frame loop; stops when `running` clears.
    fn start_loop(window: Window, running: Rc<Cell<bool>>, mut on_frame: impl FnMut() + 'static) {
        let slot: FrameSlot = Rc::new(RefCell::new(None));
        let slot_for_cb = Rc::clone(&slot);
        let win = window.clone();
        *slot.borrow_mut() = Some(Closure::wrap(Box::new(move |_ts: f64| {
            if !running.get() {
                // Breaks the slot <-> closure cycle.
                slot_for_cb.borrow_mut().take();
                return;
            }
            on_frame();
            if let Some(cb) = slot_for_cb.borrow().as_ref() {
                settle(win.request_animation_frame(cb.as_ref().unchecked_ref()), "requestAnimationFrame");
            }
        }) as Box<dyn FnMut(f64)>));
        if let Some(cb) = slot.borrow().as_ref() {
            settle(window.request_animation_frame(cb.as_ref().unchecked_ref()), "requestAnimationFrame");
        }
    }

    pub struct CursorBinding {
        running: Rc<Cell<bool>>,
        _listeners: Vec<Listener>,
    }

    impl CursorBinding {
        pub fn attach(document: &Document, config: &FxConfig) -> Result<Self, FxError> {
            let window = crate::dom::window()?;
            let primary = settle(document.query_selector(CURSOR_PRIMARY_SELECTOR), CURSOR_PRIMARY_SELECTOR)
                .flatten()
                .ok_or(FxError::MissingElement(CURSOR_PRIMARY_SELECTOR))?;
            let secondary = settle(document.query_selector(CURSOR_SECONDARY_SELECTOR), CURSOR_SECONDARY_SELECTOR)
                .flatten()
                .ok_or(FxError::MissingElement(CURSOR_SECONDARY_SELECTOR))?;

            let pair = Rc::new(Cell::new(CursorPair::new(
                config.cursor_primary_smoothing,
                config.cursor_secondary_smoothing,
            )));
            let mut listeners = Vec::new();
            {
                let pair = Rc::clone(&pair);
                listeners.push(Listener::new(document, "mousemove", move |event| {
                    if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
                        let mut p = pair.get();
                        p.point_at(f64::from(mouse.client_x()), f64::from(mouse.client_y()));
                        pair.set(p);
                    }
                }));
            }

            let running = Rc::new(Cell::new(true));
            {
                let (pair, primary, secondary) = (Rc::clone(&pair), primary.clone(), secondary.clone());
                start_loop(window, Rc::clone(&running), move || {
                    let mut p = pair.get();
                    let (one, two) = p.frame();
                    pair.set(p);
                    place(&primary, one);
                    place(&secondary, two);
                });
            }

            let (hover_px, rest_px) = (config.cursor_hover_px, config.cursor_rest_px);
            for el in query_all(document, INTERACTIVE_SELECTOR) {
                for (event, hovering) in [("mouseenter", true), ("mouseleave", false)] {
                    let primary = primary.clone();
                    listeners.push(Listener::new(&el, event, move |_| {
                        let style = proxy_style(hovering, hover_px, rest_px);
                        set_style(&primary, "width", &format!("{}px", style.size_px));
                        set_style(&primary, "height", &format!("{}px", style.size_px));
                        set_style(&primary, "border-color", style.border_color);
                    }));
                }
            }
            Ok(Self { running, _listeners: listeners })
        }
    }

    impl Drop for CursorBinding {
        fn drop(&mut self) {
            self.running.set(false);
        }
    }
}
