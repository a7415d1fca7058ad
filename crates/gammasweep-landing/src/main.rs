//! Entry point for the GammaSweep landing page.
//!
//! Reads the stored theme before the window opens so the first paint already
//! uses it, then launches the Dioxus desktop app.

use std::path::PathBuf;

use clap::Parser;
use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use tracing_subscriber::EnvFilter;

use gammasweep_ui::config::DEFAULT_SCROLL_THRESHOLD;
use gammasweep_ui::webview::initial_root_script;
use gammasweep_ui::{LANDING_CSS, LandingApp, LandingConfig, RootMarker, launch};

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "gammasweep-landing")]
#[command(about = "GammaSweep B2B social gaming landing page")]
struct Args {
    /// Directory holding the stored theme preference
    #[arg(long, env = "GAMMASWEEP_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Scroll offset in pixels past which the navbar turns solid
    #[arg(long, default_value_t = DEFAULT_SCROLL_THRESHOLD)]
    scroll_threshold: f64,

    /// Keep the theme preference in memory only
    #[arg(long)]
    ephemeral: bool,

    /// Initial window width
    #[arg(long, default_value = "1440")]
    width: f64,

    /// Initial window height
    #[arg(long, default_value = "900")]
    height: f64,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,
}

impl Args {
    fn to_config(&self) -> LandingConfig {
        let mut config = match &self.data_dir {
            Some(dir) => LandingConfig::new(dir),
            None => LandingConfig::default(),
        }
        .with_scroll_threshold(self.scroll_threshold)
        .with_window_size(self.width, self.height);
        if self.ephemeral {
            config = config.ephemeral();
        }
        config
    }

    /// Configuration from the arguments, with invalid values reset to their
    /// defaults. Data directory and ephemeral mode are always kept.
    fn resolve_config(&self) -> LandingConfig {
        let (config, problems) = self.to_config().sanitize();
        for problem in &problems {
            tracing::error!("Invalid configuration ({}), using the default value", problem);
        }
        config
    }
}

fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level)),
        )
        .with_target(false)
        .init();

    tracing::info!("Starting GammaSweep landing page");

    let config = args.resolve_config();

    let mut root = RootMarker::new();
    let theme = launch::initialize_theme(&config, &mut root);
    tracing::info!(theme = %theme.preference(), "Theme preference loaded");

    let width = config.window_width;
    let height = config.window_height;
    let head = format!(
        r#"
        <link rel="preconnect" href="https://fonts.googleapis.com">
        <link rel="preconnect" href="https://fonts.gstatic.com" crossorigin>
        <link href="https://fonts.googleapis.com/css2?family=Inter:wght@300;400;500;600;700;800;900&family=Roboto:ital,wght@0,400;0,700;0,900;1,900&display=swap" rel="stylesheet">
        {}
        <style>{}</style>
        "#,
        initial_root_script(theme.preference()),
        LANDING_CSS
    );

    launch::stage(config, theme);

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title("GammaSweep | Enterprise B2B Social Gaming Solutions")
                        .with_inner_size(LogicalSize::new(width, height)),
                )
                .with_custom_head(head),
        )
        .launch(LandingApp);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["gammasweep-landing"]);
        let config = args.to_config();
        assert_eq!(config.scroll_threshold, 20.0);
        assert!(!config.ephemeral);
        assert_eq!(config.window_width, 1440.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_overrides() {
        let args = Args::parse_from([
            "gammasweep-landing",
            "--data-dir",
            "/tmp/gammasweep-test",
            "--scroll-threshold",
            "64",
            "--ephemeral",
        ]);
        let config = args.to_config();
        assert_eq!(config.data_dir, PathBuf::from("/tmp/gammasweep-test"));
        assert_eq!(config.scroll_threshold, 64.0);
        assert!(config.ephemeral);
    }

    #[test]
    fn test_invalid_window_keeps_ephemeral_and_data_dir() {
        let args = Args::parse_from([
            "gammasweep-landing",
            "--data-dir",
            "/tmp/gammasweep-test",
            "--ephemeral",
            "--width",
            "0",
        ]);
        let config = args.resolve_config();
        assert!(config.ephemeral);
        assert_eq!(config.data_dir, PathBuf::from("/tmp/gammasweep-test"));
        assert_eq!(config.window_width, 1440.0);
        assert_eq!(config.window_height, 900.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_threshold_falls_back_alone() {
        let args = Args::parse_from([
            "gammasweep-landing",
            "--scroll-threshold=-5",
            "--width",
            "800",
        ]);
        let config = args.resolve_config();
        assert_eq!(config.scroll_threshold, 20.0);
        assert_eq!(config.window_width, 800.0);
    }

    #[test]
    fn test_negative_threshold_fails_validation() {
        let args = Args::parse_from(["gammasweep-landing", "--scroll-threshold=-5"]);
        assert!(args.to_config().validate().is_err());
    }
}
