//! Smooth scrolling for in-page anchor links.

#[cfg(test)]
#[path = "anchor_test.rs"]
mod anchor_test;

/// What a click on an `a[href^="#"]` should do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AnchorAction {
    /// Bare `#`: swallow the click so the page does not jump to the top.
    Suppress,
    /// `#0` placeholder links: leave the click to the browser.
    PassThrough,
    /// Scroll to the element matching this selector, if it exists.
    ScrollTo(String),
}

#[must_use]
pub fn classify(href: &str) -> AnchorAction {
    match href {
        "#" => AnchorAction::Suppress,
        "#0" => AnchorAction::PassThrough,
        other => AnchorAction::ScrollTo(other.to_owned()),
    }
}

/// Scroll destination leaving room for the fixed header.
#[must_use]
pub fn scroll_top(target_offset_top: f64, header_offset: f64) -> f64 {
    target_offset_top - header_offset
}

#[cfg(feature = "hydrate")]
pub use browser::AnchorBinding;

#[cfg(feature = "hydrate")]
mod browser {
    use web_sys::{Document, ScrollBehavior, ScrollToOptions};

    use super::{AnchorAction, classify, scroll_top};
    use crate::consts::ANCHOR_SELECTOR;
    use crate::dom::{Listener, as_html, query_all, settle};
    use crate::error::FxError;

    pub struct AnchorBinding {
        _listeners: Vec<Listener>,
    }

    impl AnchorBinding {
        pub fn attach(document: &Document, header_offset: f64) -> Result<Self, FxError> {
            let window = crate::dom::window()?;
            let listeners = query_all(document, ANCHOR_SELECTOR)
                .into_iter()
                .map(|anchor| {
                    let (document, window, href_source) = (document.clone(), window.clone(), anchor.clone());
                    Listener::new(&anchor, "click", move |event| {
                        let href = href_source.get_attribute("href").unwrap_or_default();
                        let selector = match classify(&href) {
                            AnchorAction::Suppress => {
                                event.prevent_default();
                                return;
                            }
                            AnchorAction::PassThrough => return,
                            AnchorAction::ScrollTo(selector) => selector,
                        };
                        // An id that is not a valid selector falls through to the browser.
                        let Some(target) = settle(document.query_selector(&selector), "anchor target").flatten() else {
                            return;
                        };
                        let Some(html) = as_html(&target) else {
                            return;
                        };
                        event.prevent_default();
                        let options = ScrollToOptions::new();
                        options.set_top(scroll_top(f64::from(html.offset_top()), header_offset));
                        options.set_behavior(ScrollBehavior::Smooth);
                        window.scroll_to_with_scroll_to_options(&options);
                    })
                })
                .collect();
            Ok(Self { _listeners: listeners })
        }
    }
}
