use super::*;

struct BrokenStore;

impl KeyValueStore for BrokenStore {
    fn get(&self, _key: &str) -> Result<Option<String>, FxError> {
        Err(FxError::Storage("denied".to_owned()))
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), FxError> {
        Err(FxError::Storage("quota".to_owned()))
    }
}

#[test]
fn from_stored_only_recognizes_dark() {
    assert_eq!(Theme::from_stored(Some("dark")), Theme::Dark);
    assert_eq!(Theme::from_stored(Some("light")), Theme::Light);
    assert_eq!(Theme::from_stored(Some("DARK")), Theme::Light);
    assert_eq!(Theme::from_stored(None), Theme::Light);
}

#[test]
fn missing_preference_defaults_to_light() {
    let controller = ThemeController::load(MemoryStore::default(), "theme");
    assert_eq!(controller.current(), Theme::Light);
}

#[test]
fn stored_dark_preference_is_applied_on_load() {
    let controller = ThemeController::load(MemoryStore::with("theme", "dark"), "theme");
    assert!(controller.current().is_dark());
}

#[test]
fn toggle_persists_immediately() {
    let mut controller = ThemeController::load(MemoryStore::default(), "theme");
    assert_eq!(controller.toggle(), Theme::Dark);
    assert_eq!(controller.store().get("theme").expect("memory store"), Some("dark".to_owned()));
}

#[test]
fn toggling_twice_restores_flag_and_persisted_value() {
    let mut controller = ThemeController::load(MemoryStore::with("theme", "dark"), "theme");
    controller.toggle();
    assert_eq!(controller.store().get("theme").expect("memory store"), Some("light".to_owned()));
    controller.toggle();
    assert_eq!(controller.current(), Theme::Dark);
    assert_eq!(controller.store().get("theme").expect("memory store"), Some("dark".to_owned()));
}

#[test]
fn storage_failures_fall_back_silently() {
    let mut controller = ThemeController::load(BrokenStore, "theme");
    assert_eq!(controller.current(), Theme::Light);
    assert_eq!(controller.toggle(), Theme::Dark);
    assert_eq!(controller.toggle(), Theme::Light);
}

#[test]
fn custom_key_is_respected() {
    let mut controller = ThemeController::load(MemoryStore::with("site_theme", "dark"), "site_theme");
    assert!(controller.current().is_dark());
    controller.toggle();
    assert_eq!(controller.store().get("theme").expect("memory store"), None);
    assert_eq!(controller.store().get("site_theme").expect("memory store"), Some("light".to_owned()));
}
