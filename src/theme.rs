//! Light/dark theme preference.
//!
//! The preference lives in `localStorage` under a single key and is applied
//! as the `dark` class plus a `data-theme` attribute on `<html>`. Reads that
//! fail, or return anything but `"dark"`, resolve to the light theme.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort: a blocked or full storage never surfaces to
//! the user, the in-memory theme still flips.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::FxError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Resolve a stored value; anything unrecognized is light.
    #[must_use]
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Self::Dark,
            _ => Self::Light,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

/// String key/value persistence.
pub trait KeyValueStore {
    /// # Errors
    ///
    /// Returns [`FxError::Storage`] when the backing store cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, FxError>;

    /// # Errors
    ///
    /// Returns [`FxError::Storage`] when the value cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), FxError>;
}

/// In-memory store used when `localStorage` is unavailable.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn with(key: &str, value: &str) -> Self {
        let store = Self::default();
        store.values.borrow_mut().insert(key.to_owned(), value.to_owned());
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, FxError> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), FxError> {
        self.values.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Holds the current theme and writes every change through to its store.
pub struct ThemeController<S> {
    store: S,
    key: String,
    current: Theme,
}

impl<S: KeyValueStore> ThemeController<S> {
    /// Resolve the persisted preference, defaulting to light on any failure.
    pub fn load(store: S, key: &str) -> Self {
        let current = match store.get(key) {
            Ok(value) => Theme::from_stored(value.as_deref()),
            Err(err) => {
                log::debug!("theme preference unreadable: {err}");
                Theme::Light
            }
        };
        Self { store, key: key.to_owned(), current }
    }

    #[must_use]
    pub fn current(&self) -> Theme {
        self.current
    }

    /// Flip the theme and persist it immediately. Returns the new theme.
    pub fn toggle(&mut self) -> Theme {
        self.current = self.current.toggled();
        if let Err(err) = self.store.set(&self.key, self.current.as_str()) {
            log::debug!("theme not persisted: {err}");
        }
        self.current
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(feature = "hydrate")]
pub use browser::{LocalStore, ThemeBinding};

#[cfg(feature = "hydrate")]
mod browser {
    use std::cell::RefCell;
    use std::rc::Rc;

    use web_sys::{Document, Element, Storage};

    use super::{KeyValueStore, Theme, ThemeController};
    use crate::consts::{DARK_CLASS, THEME_ATTR, THEME_TOGGLE_ID};
    use crate::dom::{Listener, set_class, settle};
    use crate::error::FxError;

    /// `window.localStorage`, or nothing when the browser denies access.
    pub struct LocalStore(Option<Storage>);

    impl LocalStore {
        pub fn open() -> Self {
            let storage = web_sys::window().and_then(|w| settle(w.local_storage(), "localStorage").flatten());
            Self(storage)
        }
    }

    impl KeyValueStore for LocalStore {
        fn get(&self, key: &str) -> Result<Option<String>, FxError> {
            let storage = self.0.as_ref().ok_or_else(|| FxError::Storage("localStorage".to_owned()))?;
            storage.get_item(key).map_err(|e| FxError::Storage(FxError::from(e).to_string()))
        }

        fn set(&self, key: &str, value: &str) -> Result<(), FxError> {
            let storage = self.0.as_ref().ok_or_else(|| FxError::Storage("localStorage".to_owned()))?;
            storage.set_item(key, value).map_err(|e| FxError::Storage(FxError::from(e).to_string()))
        }
    }

    /// Apply `theme` to the root element.
    pub fn apply(root: &Element, theme: Theme) {
        set_class(root, DARK_CLASS, theme.is_dark());
        settle(root.set_attribute(THEME_ATTR, theme.as_str()), THEME_ATTR);
    }

    /// The theme controller bound to the page.
    pub struct ThemeBinding {
        _click: Option<Listener>,
    }

    impl ThemeBinding {
        pub fn attach(document: &Document, storage_key: &str) -> Result<Self, FxError> {
            let root = document.document_element().ok_or(FxError::MissingElement("html"))?;
            let controller = ThemeController::load(LocalStore::open(), storage_key);
            apply(&root, controller.current());
            log::debug!("theme resolved to {}", controller.current().as_str());

            let Some(toggle) = document.get_element_by_id(THEME_TOGGLE_ID) else {
                return Ok(Self { _click: None });
            };
            let controller = Rc::new(RefCell::new(controller));
            let click = Listener::new(&toggle, "click", move |_| {
                let theme = controller.borrow_mut().toggle();
                apply(&root, theme);
            });
            Ok(Self { _click: Some(click) })
        }
    }
}
