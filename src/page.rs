//! Page session: owns every controller for the lifetime of one page view.
//!
//! Each controller attaches independently; one that cannot find its
//! elements logs why and stays detached without affecting the others.
//! Dropping the session removes every listener, cancels pending timers and
//! stops the cursor frame loop.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

use crate::config::FxConfig;
use crate::error::FxError;

/// Resolve the optional `#fx-config` block. A malformed block yields the
/// defaults plus the error, left for the caller to report once logging is up.
#[must_use]
pub fn resolve_config(raw: Option<&str>) -> (FxConfig, Option<FxError>) {
    match raw.map(FxConfig::from_json) {
        None => (FxConfig::default(), None),
        Some(Ok(config)) => (config, None),
        Some(Err(err)) => (FxConfig::default(), Some(err)),
    }
}

/// What a `pagehide` does to the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HideAction {
    /// Entering the back/forward cache: the page comes back as-is, and the
    /// start hook does not run again.
    Keep,
    Teardown,
}

#[must_use]
pub fn on_pagehide(persisted: bool) -> HideAction {
    if persisted { HideAction::Keep } else { HideAction::Teardown }
}

#[cfg(feature = "hydrate")]
pub use browser::{Page, config_block};

#[cfg(feature = "hydrate")]
mod browser {
    use web_sys::Document;

    use crate::anchor::AnchorBinding;
    use crate::config::FxConfig;
    use crate::consts::CONFIG_BLOCK_ID;
    use crate::contact::ContactBinding;
    use crate::cursor::CursorBinding;
    use crate::enhance::EnhanceBinding;
    use crate::error::FxError;
    use crate::nav::NavBinding;
    use crate::reveal::RevealBinding;
    use crate::ripple::RippleBinding;
    use crate::scroll::ScrollBinding;
    use crate::theme::ThemeBinding;

    pub struct Page {
        theme: Option<ThemeBinding>,
        nav: Option<NavBinding>,
        scroll: Option<ScrollBinding>,
        anchors: Option<AnchorBinding>,
        reveal: Option<RevealBinding>,
        cursor: Option<CursorBinding>,
        ripple: Option<RippleBinding>,
        contact: Option<ContactBinding>,
        enhance: Option<EnhanceBinding>,
    }

    fn bind<T>(name: &str, result: Result<T, FxError>) -> Option<T> {
        match result {
            Ok(binding) => {
                log::debug!("{name} attached");
                Some(binding)
            }
            Err(FxError::MissingElement(what)) => {
                log::warn!("{name} skipped: no {what}");
                None
            }
            Err(err) => {
                log::warn!("{name} not attached: {err}");
                None
            }
        }
    }

    /// Raw text of the `#fx-config` block, if the page has one.
    pub fn config_block(document: &Document) -> Option<String> {
        document.get_element_by_id(CONFIG_BLOCK_ID).and_then(|el| el.text_content())
    }

    impl Page {
        pub fn attach(document: &Document, config: &FxConfig) -> Self {
            let page = Self {
                theme: bind("theme", ThemeBinding::attach(document, &config.storage_key)),
                nav: bind("nav", NavBinding::attach(document)),
                scroll: bind("scroll", ScrollBinding::attach(document, config)),
                anchors: bind("anchors", AnchorBinding::attach(document, config.anchor_offset_px)),
                reveal: bind("reveal", RevealBinding::attach(document, config)),
                cursor: bind("cursor", CursorBinding::attach(document, config)),
                ripple: bind("ripple", RippleBinding::attach(document, config.ripple_duration_ms)),
                contact: bind("contact", ContactBinding::attach(document, config)),
                enhance: bind("enhance", EnhanceBinding::attach(document, config)),
            };
            log::info!("page effects attached ({} of 9 active)", page.active());
            page
        }

        fn active(&self) -> usize {
            [
                self.theme.is_some(),
                self.nav.is_some(),
                self.scroll.is_some(),
                self.anchors.is_some(),
                self.reveal.is_some(),
                self.cursor.is_some(),
                self.ripple.is_some(),
                self.contact.is_some(),
                self.enhance.is_some(),
            ]
            .into_iter()
            .filter(|on| *on)
            .count()
        }
    }

    impl Drop for Page {
        fn drop(&mut self) {
            log::debug!("page effects detached");
        }
    }
}
