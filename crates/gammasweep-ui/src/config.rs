//! Configuration for the landing page.
//!
//! Provides defaults matching the shipped page with builder-style setters
//! for the launcher to override from the command line.

use std::path::PathBuf;

use crate::error::ConfigError;

/// Offset in pixels past which the navigation bar switches to its solid style.
pub const DEFAULT_SCROLL_THRESHOLD: f64 = 20.0;

/// Key under which the theme preference is stored.
pub const DEFAULT_STORAGE_KEY: &str = "theme";

/// Initial window size in logical pixels.
pub const DEFAULT_WINDOW_WIDTH: f64 = 1440.0;
pub const DEFAULT_WINDOW_HEIGHT: f64 = 900.0;

/// File name of the preference store inside the data directory.
pub const PREFERENCES_FILE: &str = "preferences.json";

/// Configuration for the landing page.
#[derive(Debug, Clone, PartialEq)]
pub struct LandingConfig {
    /// Directory holding the preference file.
    pub data_dir: PathBuf,
    /// Key the theme preference is stored under.
    pub storage_key: String,
    /// Navigation bar threshold, exclusive.
    pub scroll_threshold: f64,
    /// Keep preferences in memory only.
    pub ephemeral: bool,
    /// Initial window width in logical pixels.
    pub window_width: f64,
    /// Initial window height in logical pixels.
    pub window_height: f64,
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self {
            data_dir: dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("gammasweep"),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            scroll_threshold: DEFAULT_SCROLL_THRESHOLD,
            ephemeral: false,
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
        }
    }
}

impl LandingConfig {
    /// Create a configuration rooted at a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            ..Default::default()
        }
    }

    /// Set the navigation bar scroll threshold.
    pub fn with_scroll_threshold(mut self, px: f64) -> Self {
        self.scroll_threshold = px;
        self
    }

    /// Set the storage key for the theme preference.
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Keep preferences in memory only.
    pub fn ephemeral(mut self) -> Self {
        self.ephemeral = true;
        self
    }

    /// Set the initial window size.
    pub fn with_window_size(mut self, width: f64, height: f64) -> Self {
        self.window_width = width;
        self.window_height = height;
        self
    }

    /// Path of the preference file.
    pub fn preferences_path(&self) -> PathBuf {
        self.data_dir.join(PREFERENCES_FILE)
    }

    /// Check that every value is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.scroll_threshold.is_finite() || self.scroll_threshold < 0.0 {
            return Err(ConfigError::InvalidScrollThreshold(self.scroll_threshold));
        }
        if self.storage_key.trim().is_empty() {
            return Err(ConfigError::EmptyStorageKey);
        }
        if !(self.window_width > 0.0 && self.window_height > 0.0) {
            return Err(ConfigError::InvalidWindowSize {
                width: self.window_width,
                height: self.window_height,
            });
        }
        Ok(())
    }

    /// Reset each invalid value to its default, keeping everything else.
    ///
    /// Returns the problems found, in the order [`validate`](Self::validate)
    /// checks them.
    pub fn sanitize(mut self) -> (Self, Vec<ConfigError>) {
        let mut problems = Vec::new();
        if !self.scroll_threshold.is_finite() || self.scroll_threshold < 0.0 {
            problems.push(ConfigError::InvalidScrollThreshold(self.scroll_threshold));
            self.scroll_threshold = DEFAULT_SCROLL_THRESHOLD;
        }
        if self.storage_key.trim().is_empty() {
            problems.push(ConfigError::EmptyStorageKey);
            self.storage_key = DEFAULT_STORAGE_KEY.to_string();
        }
        if !(self.window_width > 0.0 && self.window_height > 0.0) {
            problems.push(ConfigError::InvalidWindowSize {
                width: self.window_width,
                height: self.window_height,
            });
            self.window_width = DEFAULT_WINDOW_WIDTH;
            self.window_height = DEFAULT_WINDOW_HEIGHT;
        }
        (self, problems)
    }
}
