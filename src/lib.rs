//! # portfolio-fx
//!
//! Client-side behaviors for a static portfolio site, compiled to
//! WebAssembly: theme toggle, mobile navigation, scroll-driven chrome,
//! smooth anchors, reveal animations, a trailing custom cursor, button
//! ripples and the contact form.
//!
//! Every module keeps its decisions in plain types that build and test
//! natively. The browser wiring lives in each module's `browser` submodule
//! and is compiled only with the `hydrate` feature.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`theme`] | Persisted light/dark preference |
//! | [`nav`] | Mobile menu open/closed state |
//! | [`scroll`] | Active link, header shadow, parallax, scroll direction |
//! | [`anchor`] | Smooth scrolling for `#` links |
//! | [`reveal`] | One-shot intersection reveals, progress bars, lazy images, stagger |
//! | [`cursor`] | Smoothed cursor proxies |
//! | [`ripple`] | Click ripples |
//! | [`contact`] | Contact form submission |
//! | [`enhance`] | Preloader, card hover, image fade, preload hints |
//! | [`page`] | Page session, config overlay, `pagehide` policy |
//! | [`timing`] | Debounce / throttle primitive |
//! | [`config`] | Tunables and the `#fx-config` override block |
//! | [`consts`] | DOM ids, selectors and class names |

pub mod anchor;
pub mod config;
pub mod consts;
pub mod contact;
pub mod cursor;
#[cfg(feature = "hydrate")]
pub mod dom;
pub mod enhance;
pub mod error;
pub mod nav;
pub mod page;
pub mod reveal;
pub mod ripple;
pub mod scroll;
pub mod theme;
pub mod timing;

#[cfg(feature = "hydrate")]
mod entry {
    use std::cell::RefCell;

    use wasm_bindgen::prelude::*;
    use web_sys::{Event, PageTransitionEvent};

    use crate::dom::Listener;
    use crate::page::{HideAction, Page, config_block, on_pagehide, resolve_config};

    thread_local! {
        static SESSION: RefCell<Option<Page>> = const { RefCell::new(None) };
        // Outlives the session: its own callback tears the session down.
        static PAGEHIDE: RefCell<Option<Listener>> = const { RefCell::new(None) };
    }

    /// Attach every page behavior. Runs when the module is instantiated.
    #[wasm_bindgen(start)]
    pub fn start() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        let document = crate::dom::document()?;
        let (config, config_err) = resolve_config(config_block(&document).as_deref());
        if let Err(err) = console_log::init_with_level(config.log_level()) {
            web_sys::console::warn_1(&JsValue::from_str(&err.to_string()));
        }
        if let Some(err) = config_err {
            log::warn!("ignoring #{}: {err}", crate::consts::CONFIG_BLOCK_ID);
        }

        log::info!("👋 Hello Developer!");
        log::info!("Interested in the code? Check it out on GitHub: https://github.com/chiran-official");

        let window = crate::dom::window()?;
        let page = Page::attach(&document, &config);
        if let Some(previous) = SESSION.with(|session| session.borrow_mut().replace(page)) {
            drop(previous);
        }
        PAGEHIDE.with(|slot| {
            if slot.borrow().is_none() {
                *slot.borrow_mut() = Some(Listener::new(&window, "pagehide", pagehide));
            }
        });
        Ok(())
    }

    fn pagehide(event: Event) {
        let persisted = event.dyn_ref::<PageTransitionEvent>().is_some_and(PageTransitionEvent::persisted);
        match on_pagehide(persisted) {
            HideAction::Keep => log::debug!("page entering back/forward cache; session kept"),
            HideAction::Teardown => teardown(),
        }
    }

    /// Detach every page behavior. Calling it again is a no-op.
    #[wasm_bindgen]
    pub fn teardown() {
        let session = SESSION.with(|session| session.borrow_mut().take());
        drop(session);
    }
}
