mod loader;
pub mod template;

use serde::{Deserialize, Serialize};

use crate::log::LogConfig;
use crate::platform::ShowCommand;
use crate::session::OverlayOptions;

pub use loader::{LoadError, config_dir, config_path, load, try_load};

/// Top-level configuration for Glasspane.
///
/// Loaded from `~/.config/glasspane/config.toml`. Missing sections
/// fall back to defaults thanks to `#[serde(default)]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Overlay window and swapchain settings.
    pub overlay: OverlayConfig,
    /// File logging settings.
    pub logging: LogConfig,
}

/// Overlay window and presentation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    /// Window title; also the window class name unless `class_name` is set.
    pub title: String,
    /// Explicit window class name. Empty means "use the title".
    pub class_name: String,
    /// Swapchain refresh rate in Hz.
    pub refresh_rate: u32,
    /// Present sync interval (0 = no vsync, 1 = every refresh).
    pub sync_interval: u32,
    /// Show a modal dialog when initialization or presentation fails.
    pub error_dialogs: bool,
    /// Show the overlay without activating it.
    pub no_activate: bool,
    /// Opt into per-monitor DPI awareness before creating the window.
    pub dpi_aware: bool,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            title: "Glasspane".into(),
            class_name: String::new(),
            refresh_rate: 60,
            sync_interval: 1,
            error_dialogs: true,
            no_activate: false,
            dpi_aware: true,
        }
    }
}

impl Config {
    /// Clamps values to ranges the swapchain accepts.
    pub fn validate(&mut self) {
        self.overlay.refresh_rate = self.overlay.refresh_rate.clamp(1, 1000);
        self.overlay.sync_interval = self.overlay.sync_interval.min(4);
        if self.overlay.title.trim().is_empty() {
            self.overlay.title = OverlayConfig::default().title;
        }
    }
}

impl OverlayConfig {
    /// Builds session options from this configuration.
    pub fn to_options(&self) -> OverlayOptions {
        let class_name = self.class_name.trim();
        OverlayOptions {
            title: self.title.clone(),
            class_name: (!class_name.is_empty()).then(|| class_name.to_string()),
            show: if self.no_activate {
                ShowCommand::ShowNoActivate
            } else {
                ShowCommand::Show
            },
            refresh_rate: self.refresh_rate,
            sync_interval: self.sync_interval,
            error_dialogs: self.error_dialogs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_fixed_overlay_setup() {
        // Arrange / Act
        let config = Config::default();

        // Assert
        assert_eq!(config.overlay.refresh_rate, 60);
        assert_eq!(config.overlay.sync_interval, 1);
        assert!(config.overlay.error_dialogs);
        assert!(!config.logging.enabled);
    }

    #[test]
    fn partial_toml_uses_defaults_for_missing_sections() {
        // Arrange
        let toml_str = "[overlay]\ntitle = \"HUD\"\n";

        // Act
        let config: Config = toml::from_str(toml_str).unwrap();

        // Assert
        assert_eq!(config.overlay.title, "HUD");
        assert_eq!(config.overlay.refresh_rate, 60);
        assert_eq!(config.logging, LogConfig::default());
    }

    #[test]
    fn validate_clamps_out_of_range_values() {
        // Arrange
        let mut config = Config {
            overlay: OverlayConfig {
                title: "   ".into(),
                refresh_rate: 0,
                sync_interval: 9,
                ..Default::default()
            },
            ..Default::default()
        };

        // Act
        config.validate();

        // Assert
        assert_eq!(config.overlay.refresh_rate, 1);
        assert_eq!(config.overlay.sync_interval, 4);
        assert_eq!(config.overlay.title, "Glasspane");
    }

    #[test]
    fn options_use_title_as_class_name_when_unset() {
        // Arrange
        let overlay = OverlayConfig {
            title: "HUD".into(),
            ..Default::default()
        };

        // Act
        let options = overlay.to_options();

        // Assert
        assert_eq!(options.class_name, None);
        assert_eq!(options.class_name(), "HUD");
        assert_eq!(options.show, ShowCommand::Show);
    }

    #[test]
    fn options_carry_explicit_class_name_and_no_activate() {
        // Arrange
        let overlay = OverlayConfig {
            class_name: " HudClass ".into(),
            no_activate: true,
            ..Default::default()
        };

        // Act
        let options = overlay.to_options();

        // Assert
        assert_eq!(options.class_name(), "HudClass");
        assert_eq!(options.show, ShowCommand::ShowNoActivate);
    }

    #[test]
    fn config_roundtrips_through_toml() {
        // Arrange
        let config = Config::default();

        // Act
        let serialized = toml::to_string(&config).unwrap();
        let deserialized: Config = toml::from_str(&serialized).unwrap();

        // Assert
        assert_eq!(deserialized, config);
    }
}
