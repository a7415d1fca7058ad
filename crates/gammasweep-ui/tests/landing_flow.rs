//! End-to-end behavior of the landing page state without a window:
//! theme persistence across sessions, navbar styling driven by scroll
//! samples, and in-page navigation from the mobile menu.

use std::cell::RefCell;
use std::rc::Rc;

use gammasweep_ui::config::LandingConfig;
use gammasweep_ui::presentation::{self, DARK_CLASS};
use gammasweep_ui::{
    FileStore, MenuState, NavOutcome, PreferenceStore, RootMarker, ScrollObserver, ScrollSignal,
    SectionDocument, SectionId, ThemeController, ThemePreference, launch,
};
use tempfile::TempDir;

/// Document with every landing section rendered, recording scroll requests.
#[derive(Default)]
struct RecordingDocument {
    missing: Vec<&'static str>,
    scrolls: Vec<String>,
}

impl SectionDocument for RecordingDocument {
    fn has_anchor(&self, id: &str) -> bool {
        SectionId::all().iter().any(|s| s.anchor() == id) && !self.missing.contains(&id)
    }

    fn scroll_into_view(&mut self, id: &str) {
        self.scrolls.push(id.to_string());
    }

    fn scroll_to_origin(&mut self) {
        self.scrolls.push("<origin>".to_string());
    }
}

#[test]
fn test_theme_survives_restart() {
    let dir = TempDir::new().unwrap();
    let config = LandingConfig::new(dir.path());

    // First session: nothing stored, so light; toggle once.
    let mut root = RootMarker::new();
    let mut theme = launch::initialize_theme(&config, &mut root);
    assert_eq!(theme.preference(), ThemePreference::Light);
    assert!(!root.is_dark());
    assert_eq!(theme.toggle(&mut root), ThemePreference::Dark);

    // Second session reads it back before any render.
    let mut root = RootMarker::new();
    let mut theme = launch::initialize_theme(&config, &mut root);
    assert!(theme.is_dark());
    assert!(root.is_dark());

    // Toggling twice lands back on the starting theme, and storage agrees.
    theme.toggle(&mut root);
    theme.toggle(&mut root);
    assert!(root.is_dark());

    let store = FileStore::new(config.preferences_path());
    assert_eq!(store.load("theme").unwrap().as_deref(), Some("dark"));
}

#[test]
fn test_unexpected_stored_value_means_light() {
    let dir = TempDir::new().unwrap();
    let config = LandingConfig::new(dir.path());
    std::fs::write(config.preferences_path(), r#"{"theme":"midnight"}"#).unwrap();

    let mut root = RootMarker::new();
    let theme = ThemeController::initialize(
        Box::new(FileStore::new(config.preferences_path())),
        "theme",
        &mut root,
    );
    assert_eq!(theme.preference(), ThemePreference::Light);

    // Initialization never rewrites what it found.
    let raw = std::fs::read_to_string(config.preferences_path()).unwrap();
    assert!(raw.contains("midnight"));
}

#[test]
fn test_scroll_samples_drive_navbar_style() {
    let signal = ScrollSignal::new();
    let observer = Rc::new(RefCell::new(ScrollObserver::default()));
    let classes = Rc::new(RefCell::new(Vec::new()));

    let subscription = {
        let observer = Rc::clone(&observer);
        let classes = Rc::clone(&classes);
        signal.subscribe(move |offset| {
            let mut observer = observer.borrow_mut();
            if observer.observe(offset) {
                let view = presentation::describe(
                    ThemePreference::Light,
                    observer.is_scrolled(),
                    MenuState::Closed,
                );
                classes.borrow_mut().push(view.navbar_class);
            }
        })
    };

    for offset in [0.0, 19.0, 20.0, 21.0, 400.0, 20.0, 0.0] {
        signal.emit(offset);
    }

    assert_eq!(
        *classes.borrow(),
        vec!["navbar navbar-solid", "navbar navbar-transparent"]
    );

    drop(subscription);
    assert_eq!(signal.listener_count(), 0);
    signal.emit(500.0);
    assert!(!observer.borrow().is_scrolled());
}

#[test]
fn test_mobile_menu_navigation() {
    let mut document = RecordingDocument::default();
    let mut menu = MenuState::Closed;

    menu.toggle();
    let view = presentation::describe(ThemePreference::Dark, false, menu);
    assert_eq!(view.root_class, DARK_CLASS);
    assert_eq!(view.navbar_class, "navbar navbar-solid");
    assert_eq!(view.menu_expanded, "true");

    let outcome = gammasweep_ui::navigation::dispatch("#services", &mut document, &mut menu);
    assert_eq!(outcome, NavOutcome::ScrolledToAnchor);
    assert_eq!(menu, MenuState::Closed);
    assert_eq!(document.scrolls, vec!["services"]);

    // Logo click with no hero section rendered falls back to the origin.
    document.missing.push("hero");
    let outcome = gammasweep_ui::navigation::dispatch("hero", &mut document, &mut menu);
    assert_eq!(outcome, NavOutcome::ScrolledToOrigin);

    // Unknown targets close the menu and do nothing else.
    menu.toggle();
    let outcome = gammasweep_ui::navigation::dispatch("pricing", &mut document, &mut menu);
    assert_eq!(outcome, NavOutcome::NoOp);
    assert!(!menu.is_open());
    assert_eq!(document.scrolls, vec!["services", "<origin>"]);
}
