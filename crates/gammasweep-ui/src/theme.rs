//! Light/dark theme for the landing page.
//!
//! The preference is read once at startup, flipped by the navbar toggle and
//! written back on every flip. Storage failures degrade to memory only.

use std::fmt;

use dioxus::prelude::*;

use crate::icons::IconSvg;
use crate::presentation;
use crate::store::PreferenceStore;
use crate::webview::DocumentRoot;

/// Display mode of the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    /// Value written to storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
        }
    }

    /// Parse a stored value. Anything other than `"dark"` is light.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => ThemePreference::Dark,
            _ => ThemePreference::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, ThemePreference::Dark)
    }

    /// The other mode.
    pub fn flipped(&self) -> Self {
        match self {
            ThemePreference::Light => ThemePreference::Dark,
            ThemePreference::Dark => ThemePreference::Light,
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The presentation node carrying the dark marker.
pub trait VisualRoot {
    fn apply_theme(&mut self, preference: ThemePreference);
}

/// Visual root that only remembers the last applied mode.
///
/// Used before the webview exists, to decide what the first paint looks like.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RootMarker {
    applied: Option<ThemePreference>,
}

impl RootMarker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last applied mode, `None` if nothing was applied yet.
    pub fn applied(&self) -> Option<ThemePreference> {
        self.applied
    }

    pub fn is_dark(&self) -> bool {
        self.applied.is_some_and(|p| p.is_dark())
    }
}

impl VisualRoot for RootMarker {
    fn apply_theme(&mut self, preference: ThemePreference) {
        self.applied = Some(preference);
    }
}

/// Owns the theme preference and keeps storage and the visual root in step.
pub struct ThemeController {
    store: Box<dyn PreferenceStore>,
    key: String,
    preference: ThemePreference,
}

impl ThemeController {
    /// Read the stored preference and apply it to `root`. Never writes.
    pub fn initialize(
        store: Box<dyn PreferenceStore>,
        key: impl Into<String>,
        root: &mut dyn VisualRoot,
    ) -> Self {
        let key = key.into();
        let stored = match store.load(&key) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(error = %e, "Theme preference unreadable, using light mode");
                None
            }
        };
        let preference = ThemePreference::from_stored(stored.as_deref());
        root.apply_theme(preference);
        tracing::debug!(%preference, "Theme initialized");

        Self {
            store,
            key,
            preference,
        }
    }

    pub fn preference(&self) -> ThemePreference {
        self.preference
    }

    pub fn is_dark(&self) -> bool {
        self.preference.is_dark()
    }

    /// Flip the preference, apply it, and persist it.
    pub fn toggle(&mut self, root: &mut dyn VisualRoot) -> ThemePreference {
        self.preference = self.preference.flipped();
        root.apply_theme(self.preference);
        if let Err(e) = self.store.save(&self.key, self.preference.as_str()) {
            tracing::warn!(error = %e, "Theme preference not persisted");
        }
        tracing::info!(theme = %self.preference, "Theme toggled");
        self.preference
    }
}

impl fmt::Debug for ThemeController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeController")
            .field("key", &self.key)
            .field("preference", &self.preference)
            .finish_non_exhaustive()
    }
}

/// Themed root wrapper component.
#[component]
pub fn ThemedRoot(children: Element) -> Element {
    let theme = use_context::<Signal<ThemeController>>();
    let preference = theme.read().preference();
    let root_class = presentation::root_class(preference);

    rsx! {
        div {
            class: "themed-root {root_class}",
            "data-theme": "{preference}",
            {children}
        }
    }
}

/// Sun/moon button flipping the theme.
#[component]
pub fn ThemeToggle() -> Element {
    let mut theme = use_context::<Signal<ThemeController>>();
    let preference = theme.read().preference();
    let (icon, label) = presentation::toggle_affordance(preference);

    rsx! {
        button {
            class: "theme-toggle",
            r#type: "button",
            aria_label: "{label}",
            title: "{label}",
            onclick: move |_| {
                theme.write().toggle(&mut DocumentRoot);
            },
            IconSvg { icon, class: "icon-sm" }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::error::{StoreError, StoreResult};
    use crate::store::MemoryStore;

    /// Store wrapper that shares its map and counts writes.
    #[derive(Clone, Default)]
    struct SharedStore {
        inner: Arc<Mutex<(MemoryStore, usize)>>,
    }

    impl SharedStore {
        fn seeded(value: &str) -> Self {
            let store = Self::default();
            store.inner.lock().unwrap().0 = MemoryStore::new().with_value("theme", value);
            store
        }

        fn writes(&self) -> usize {
            self.inner.lock().unwrap().1
        }

        fn stored(&self) -> Option<String> {
            self.inner.lock().unwrap().0.load("theme").unwrap()
        }
    }

    impl PreferenceStore for SharedStore {
        fn load(&self, key: &str) -> StoreResult<Option<String>> {
            self.inner.lock().unwrap().0.load(key)
        }

        fn save(&mut self, key: &str, value: &str) -> StoreResult<()> {
            let mut guard = self.inner.lock().unwrap();
            guard.1 += 1;
            guard.0.save(key, value)
        }
    }

    struct BrokenStore;

    impl BrokenStore {
        fn denied() -> StoreError {
            StoreError::Io {
                path: "preferences.json".into(),
                source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
            }
        }
    }

    impl PreferenceStore for BrokenStore {
        fn load(&self, _key: &str) -> StoreResult<Option<String>> {
            Err(Self::denied())
        }

        fn save(&mut self, _key: &str, _value: &str) -> StoreResult<()> {
            Err(Self::denied())
        }
    }

    #[test]
    fn test_from_stored() {
        assert_eq!(ThemePreference::from_stored(Some("dark")), ThemePreference::Dark);
        assert_eq!(ThemePreference::from_stored(Some("light")), ThemePreference::Light);
        assert_eq!(ThemePreference::from_stored(Some("DARK")), ThemePreference::Light);
        assert_eq!(ThemePreference::from_stored(Some("")), ThemePreference::Light);
        assert_eq!(ThemePreference::from_stored(None), ThemePreference::Light);
    }

    #[test]
    fn test_initialize_without_preference_is_light_and_does_not_write() {
        let store = SharedStore::default();
        let mut root = RootMarker::new();

        let controller = ThemeController::initialize(Box::new(store.clone()), "theme", &mut root);

        assert_eq!(controller.preference(), ThemePreference::Light);
        assert_eq!(root.applied(), Some(ThemePreference::Light));
        assert_eq!(store.writes(), 0);
        assert_eq!(store.stored(), None);
    }

    #[test]
    fn test_initialize_dark_applies_marker() {
        let store = SharedStore::seeded("dark");
        let mut root = RootMarker::new();

        let controller = ThemeController::initialize(Box::new(store.clone()), "theme", &mut root);

        assert!(controller.is_dark());
        assert!(root.is_dark());
        assert_eq!(store.writes(), 0);
    }

    #[test]
    fn test_initialize_unrecognized_value_is_light() {
        let store = SharedStore::seeded("sepia");
        let mut root = RootMarker::new();
        let controller = ThemeController::initialize(Box::new(store), "theme", &mut root);
        assert_eq!(controller.preference(), ThemePreference::Light);
    }

    #[test]
    fn test_toggle_parity() {
        let mut root = RootMarker::new();
        let mut controller =
            ThemeController::initialize(Box::new(MemoryStore::new()), "theme", &mut root);

        for n in 1..=6 {
            controller.toggle(&mut root);
            let expected = if n % 2 == 1 {
                ThemePreference::Dark
            } else {
                ThemePreference::Light
            };
            assert_eq!(controller.preference(), expected, "after {n} toggles");
            assert_eq!(root.applied(), Some(expected));
        }
    }

    #[test]
    fn test_toggle_persists_every_flip() {
        let store = SharedStore::default();
        let mut root = RootMarker::new();
        let mut controller =
            ThemeController::initialize(Box::new(store.clone()), "theme", &mut root);

        for n in 1..=4 {
            let now = controller.toggle(&mut root);
            assert_eq!(store.writes(), n);
            assert_eq!(store.stored().as_deref(), Some(now.as_str()));

            // A fresh session reads back the same mode
            let mut fresh_root = RootMarker::new();
            let fresh =
                ThemeController::initialize(Box::new(store.clone()), "theme", &mut fresh_root);
            assert_eq!(fresh.preference(), now);
        }
    }

    #[test]
    fn test_unavailable_storage_degrades_silently() {
        let mut root = RootMarker::new();
        let mut controller = ThemeController::initialize(Box::new(BrokenStore), "theme", &mut root);
        assert_eq!(controller.preference(), ThemePreference::Light);

        assert_eq!(controller.toggle(&mut root), ThemePreference::Dark);
        assert!(root.is_dark());
        assert_eq!(controller.toggle(&mut root), ThemePreference::Light);
    }
}
