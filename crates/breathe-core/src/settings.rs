//! Personalization state and startup configuration.
//!
//! Two layers, on purpose: [`AppConfig`] is immutable, assembled once at
//! startup from built-in defaults, an optional `breathe.toml` and `BREATHE_*`
//! environment overrides. [`Settings`] is the live record the user edits
//! from the settings view; it starts as a copy of the config and lives only
//! as long as the process -- runtime edits are never written back to disk.

use crate::theme::ThemeVariant;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Artwork shown behind the home screen when nothing has been picked.
pub const DEFAULT_BACKGROUND: &str =
    "https://images.unsplash.com/photo-1518156677180-95a2893f3e9f?q=80&w=2787&auto=format&fit=crop";

const DEFAULT_USER_NAME: &str = "friend";
const DEFAULT_COMPANION_NAME: &str = "Aria";

/// Immutable startup configuration, injected into the app at launch.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    pub user_name: String,
    pub companion_name: String,
    pub background: String,
    pub theme: ThemeVariant,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            user_name: DEFAULT_USER_NAME.to_string(),
            companion_name: DEFAULT_COMPANION_NAME.to_string(),
            background: DEFAULT_BACKGROUND.to_string(),
            theme: ThemeVariant::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration: defaults, then `breathe.toml`, then environment.
    ///
    /// A missing file is fine; a malformed one falls back to defaults with
    /// a warning rather than refusing to start.
    pub fn load() -> Self {
        Self::from_figment(Self::figment(Self::config_file()))
    }

    fn figment(config_file: Option<PathBuf>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(AppConfig::default()));
        if let Some(path) = config_file {
            figment = figment.merge(Toml::file(path));
        }
        figment.merge(Env::prefixed("BREATHE_"))
    }

    fn from_figment(figment: Figment) -> Self {
        match figment.extract() {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("failed to read configuration, using defaults: {e}");
                AppConfig::default()
            }
        }
    }

    fn config_file() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "breathe")
            .map(|dirs| dirs.config_dir().join("breathe.toml"))
    }
}

/// The live personalization record.
///
/// Replaced wholesale when the settings view confirms an edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub user_name: String,
    pub companion_name: String,
    /// URI or `data:` URI of the background artwork.
    pub background: String,
}

impl Settings {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            user_name: config.user_name.clone(),
            companion_name: config.companion_name.clone(),
            background: config.background.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_complete() {
        let config = AppConfig::default();
        assert_eq!(config.user_name, "friend");
        assert_eq!(config.companion_name, "Aria");
        assert_eq!(config.background, DEFAULT_BACKGROUND);
    }

    #[test]
    fn settings_start_as_a_copy_of_the_config() {
        let config = AppConfig::default();
        let settings = Settings::from_config(&config);
        assert_eq!(settings.user_name, config.user_name);
        assert_eq!(settings.companion_name, config.companion_name);
        assert_eq!(settings.background, config.background);
    }

    #[test]
    fn file_and_env_layers_override_defaults() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "breathe.toml",
                r#"
                    user_name = "Momo"
                    companion_name = "Juniper"
                "#,
            )?;
            jail.set_env("BREATHE_COMPANION_NAME", "Willow");

            let config = AppConfig::from_figment(AppConfig::figment(Some(PathBuf::from(
                "breathe.toml",
            ))));
            assert_eq!(config.user_name, "Momo");
            assert_eq!(config.companion_name, "Willow");
            // Untouched fields keep their defaults.
            assert_eq!(config.background, DEFAULT_BACKGROUND);
            Ok(())
        });
    }

    #[test]
    fn malformed_file_falls_back_to_defaults() {
        figment::Jail::expect_with(|jail| {
            jail.create_file("breathe.toml", "user_name = [not toml")?;
            let config = AppConfig::from_figment(AppConfig::figment(Some(PathBuf::from(
                "breathe.toml",
            ))));
            assert_eq!(config.user_name, "friend");
            Ok(())
        });
    }
}
