//! GammaSweep landing page.
//!
//! The page itself is static content. The behavior lives in three small
//! pieces of state, each testable without a live document:
//!
//! - [`ThemeController`]: light/dark preference, read at startup from a
//!   [`PreferenceStore`], flipped by the navbar toggle, written on every flip.
//! - [`ScrollObserver`] and [`ScrollSignal`]: whether the viewport has scrolled
//!   past the navbar threshold, with subscriptions released on drop.
//! - [`navigation::dispatch`]: smooth-scrolls to a section anchor and closes the
//!   mobile menu.
//!
//! [`presentation::describe`] turns that state into CSS classes; the
//! [`components`] render it, and [`webview`] connects it to the document.

pub mod components;
pub mod config;
pub mod content;
pub mod error;
pub mod icons;
pub mod launch;
pub mod navigation;
pub mod presentation;
pub mod scroll;
pub mod store;
pub mod theme;
pub mod webview;

pub use components::LandingApp;
pub use config::LandingConfig;
pub use error::{ConfigError, StoreError};
pub use navigation::{MenuState, NavOutcome, SectionDocument, SectionId};
pub use presentation::Presentation;
pub use scroll::{ScrollObserver, ScrollSignal, ScrollSubscription};
pub use store::{FileStore, MemoryStore, PreferenceStore};
pub use theme::{RootMarker, ThemeController, ThemePreference, ThemeToggle, ThemedRoot, VisualRoot};

/// Page stylesheet: design tokens, light/dark rules, layout and animation.
pub const LANDING_CSS: &str = include_str!("../assets/landing.css");
