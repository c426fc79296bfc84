//! Mobile navigation menu.
//!
//! The toggle button and the menu carry the `active` class in lockstep; both
//! render from one `open` flag so they can never disagree.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Where a document click landed relative to the menu chrome.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickSite {
    Toggle,
    NavLink,
    InsideMenu,
    Outside,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    pub open: bool,
}

impl NavState {
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Apply one click. Returns whether the rendered state changed.
    pub fn on_click(&mut self, site: ClickSite) -> bool {
        let before = self.open;
        match site {
            ClickSite::Toggle => self.toggle(),
            ClickSite::NavLink | ClickSite::Outside => self.close(),
            ClickSite::InsideMenu => {}
        }
        before != self.open
    }
}

#[cfg(feature = "hydrate")]
pub use browser::NavBinding;

#[cfg(feature = "hydrate")]
mod browser {
    use std::cell::Cell;
    use std::rc::Rc;

    use web_sys::{Document, Element};

    use super::{ClickSite, NavState};
    use crate::consts::{ACTIVE_CLASS, MENU_TOGGLE_ID, NAV_LINK_SELECTOR, NAV_MENU_ID};
    use crate::dom::{Listener, contains, query_all_in, set_class};
    use crate::error::FxError;

    fn render(toggle: &Element, menu: &Element, state: NavState) {
        set_class(toggle, ACTIVE_CLASS, state.open);
        set_class(menu, ACTIVE_CLASS, state.open);
    }

    pub struct NavBinding {
        _listeners: Vec<Listener>,
    }

    impl NavBinding {
        pub fn attach(document: &Document) -> Result<Self, FxError> {
            let toggle = document
                .get_element_by_id(MENU_TOGGLE_ID)
                .ok_or(FxError::MissingElement("#menuToggle"))?;
            let menu = document
                .get_element_by_id(NAV_MENU_ID)
                .ok_or(FxError::MissingElement("#navMenu"))?;
            let state = Rc::new(Cell::new(NavState::default()));

            let click = {
                let state = Rc::clone(&state);
                move |site: ClickSite, toggle: &Element, menu: &Element| {
                    let mut next = state.get();
                    if next.on_click(site) {
                        state.set(next);
                        render(toggle, menu, next);
                    }
                }
            };
            let click = Rc::new(click);

            let mut listeners = Vec::new();
            {
                let (click, t, m) = (Rc::clone(&click), toggle.clone(), menu.clone());
                listeners.push(Listener::new(&toggle, "click", move |_| click(ClickSite::Toggle, &t, &m)));
            }
            for link in query_all_in(&menu, NAV_LINK_SELECTOR) {
                let (click, t, m) = (Rc::clone(&click), toggle.clone(), menu.clone());
                listeners.push(Listener::new(&link, "click", move |_| click(ClickSite::NavLink, &t, &m)));
            }
            {
                let (click, t, m) = (Rc::clone(&click), toggle.clone(), menu.clone());
                listeners.push(Listener::new(document, "click", move |event| {
                    let target = event.target();
                    if !contains(&m, target.as_ref()) && !contains(&t, target.as_ref()) {
                        click(ClickSite::Outside, &t, &m);
                    }
                }));
            }
            Ok(Self { _listeners: listeners })
        }
    }
}
