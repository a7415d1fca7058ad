//! Hand-off from the launcher to the root component.
//!
//! The launcher resolves configuration and reads the theme before the window
//! exists; the root component picks both up on first render.

use std::sync::{Mutex, OnceLock};

use crate::config::LandingConfig;
use crate::store::{FileStore, MemoryStore, PreferenceStore};
use crate::theme::{ThemeController, VisualRoot};

static CONFIG: OnceLock<LandingConfig> = OnceLock::new();

static PENDING_THEME: Mutex<Option<ThemeController>> = Mutex::new(None);

/// Open the preference store selected by `config`.
pub fn open_store(config: &LandingConfig) -> Box<dyn PreferenceStore> {
    if config.ephemeral {
        tracing::info!("Ephemeral session, theme preference kept in memory");
        Box::new(MemoryStore::new())
    } else {
        let path = config.preferences_path();
        tracing::debug!(path = %path.display(), "Using preference file");
        Box::new(FileStore::new(path))
    }
}

/// Open the configured store and initialize the theme from it.
pub fn initialize_theme(config: &LandingConfig, root: &mut dyn VisualRoot) -> ThemeController {
    ThemeController::initialize(open_store(config), config.storage_key.clone(), root)
}

/// Stage configuration and the initialized theme for the root component.
pub fn stage(config: LandingConfig, theme: ThemeController) {
    if CONFIG.set(config).is_err() {
        tracing::warn!("Landing configuration already staged, keeping the first one");
    }
    if let Ok(mut pending) = PENDING_THEME.lock() {
        *pending = Some(theme);
    }
}

/// Staged configuration, or defaults when nothing was staged.
pub fn config() -> LandingConfig {
    CONFIG.get().cloned().unwrap_or_default()
}

/// Take the staged theme controller. Falls back to initializing one from
/// the staged configuration.
pub fn take_theme(root: &mut dyn VisualRoot) -> ThemeController {
    let staged = PENDING_THEME.lock().ok().and_then(|mut pending| pending.take());
    match staged {
        Some(theme) => {
            root.apply_theme(theme.preference());
            theme
        }
        None => initialize_theme(&config(), root),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{RootMarker, ThemePreference};
    use tempfile::TempDir;

    #[test]
    fn test_initialize_theme_from_file() {
        let dir = TempDir::new().unwrap();
        let config = LandingConfig::new(dir.path());
        std::fs::write(config.preferences_path(), r#"{"theme":"dark"}"#).unwrap();

        let mut root = RootMarker::new();
        let theme = initialize_theme(&config, &mut root);
        assert_eq!(theme.preference(), ThemePreference::Dark);
        assert!(root.is_dark());
    }

    #[test]
    fn test_ephemeral_store_does_not_touch_disk() {
        let dir = TempDir::new().unwrap();
        let config = LandingConfig::new(dir.path()).ephemeral();

        let mut root = RootMarker::new();
        let mut theme = initialize_theme(&config, &mut root);
        theme.toggle(&mut root);

        assert!(!config.preferences_path().exists());
    }

    #[test]
    fn test_stage_then_take() {
        let dir = TempDir::new().unwrap();
        let config = LandingConfig::new(dir.path()).ephemeral();
        let mut marker = RootMarker::new();
        let mut theme = initialize_theme(&config, &mut marker);
        theme.toggle(&mut marker);

        stage(config, theme);

        let mut root = RootMarker::new();
        let taken = take_theme(&mut root);
        assert_eq!(taken.preference(), ThemePreference::Dark);
        assert!(root.is_dark());
    }
}
