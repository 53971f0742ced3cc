use serde::Deserialize;
use std::{
    env,
    path::{Path, PathBuf},
    time::Duration,
};

use braille_types::ui::UiOptions;

// Default value functions for serde (bool::default() is false, so only true needs a fn)
pub(crate) const fn default_true() -> bool {
    true
}

const DEFAULT_PULSE_MS: u64 = 250;

/// Longest pulse accepted from config; anything above is clamped.
const MAX_PULSE_MS: u64 = 2_000;

#[derive(Debug, Default, Deserialize)]
pub struct BrailleConfig {
    pub app: Option<AppConfig>,
    /// Stand-ins for haptic actuation.
    pub haptics: Option<HapticsConfig>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl ConfigError {
    pub fn path(&self) -> &PathBuf {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

/// ```toml
/// [app]
/// ascii_only = false
/// high_contrast = true
/// reduced_motion = false
/// show_unicode = true
/// ```
#[derive(Debug, Deserialize)]
pub struct AppConfig {
    /// Use ASCII-only glyphs for dots and hints.
    #[serde(default)]
    pub ascii_only: bool,
    /// Enable a high-contrast color palette.
    #[serde(default)]
    pub high_contrast: bool,
    /// Disable the confirmation pulse animation.
    #[serde(default)]
    pub reduced_motion: bool,
    /// Show the Unicode Braille glyph of the active cell.
    #[serde(default = "default_true")]
    pub show_unicode: bool,
}

/// ```toml
/// [haptics]
/// bell = true
/// pulse_ms = 250
/// ```
#[derive(Debug, Deserialize)]
pub struct HapticsConfig {
    /// Ring the terminal bell on each confirmed dot.
    #[serde(default = "default_true")]
    pub bell: bool,
    pub pulse_ms: Option<u64>,
}

/// Resolved feedback settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HapticSettings {
    pub bell: bool,
    pub pulse: Duration,
}

impl Default for HapticSettings {
    fn default() -> Self {
        Self {
            bell: true,
            pulse: Duration::from_millis(DEFAULT_PULSE_MS),
        }
    }
}

impl BrailleConfig {
    pub fn load() -> Result<Option<Self>, ConfigError> {
        let path = match config_path() {
            Some(path) => path,
            None => return Ok(None),
        };
        Self::load_from(&path)
    }

    /// Load from an explicit path. A missing file is not an error.
    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match toml::from_str(&content) {
            Ok(config) => Ok(Some(config)),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        let mut options = UiOptions::default();
        if let Some(app) = &self.app {
            options.ascii_only = app.ascii_only;
            options.high_contrast = app.high_contrast;
            options.reduced_motion = app.reduced_motion;
            options.show_unicode = app.show_unicode;
        }
        options
    }

    #[must_use]
    pub fn haptic_settings(&self) -> HapticSettings {
        let mut settings = HapticSettings::default();
        if let Some(haptics) = &self.haptics {
            settings.bell = haptics.bell;
            if let Some(ms) = haptics.pulse_ms {
                settings.pulse = Duration::from_millis(ms.min(MAX_PULSE_MS));
            }
        }
        settings
    }
}

/// UI options from an optional config, with environment overrides applied.
#[must_use]
pub fn ui_options(config: Option<&BrailleConfig>) -> UiOptions {
    ui_options_with(config, |name| env::var(name).ok())
}

fn ui_options_with<F>(config: Option<&BrailleConfig>, lookup: F) -> UiOptions
where
    F: Fn(&str) -> Option<String>,
{
    let mut options = config.map(BrailleConfig::ui_options).unwrap_or_default();
    if flag_set(lookup("BRAILLE_ASCII")) {
        options.ascii_only = true;
    }
    options
}

fn flag_set(value: Option<String>) -> bool {
    value.is_some_and(|value| {
        let value = value.trim();
        value == "1" || value.eq_ignore_ascii_case("true")
    })
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".braille").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_empty_config() {
        let config: BrailleConfig = toml::from_str("").unwrap();
        assert!(config.app.is_none());
        assert!(config.haptics.is_none());
        assert_eq!(config.ui_options(), UiOptions::default());
        assert_eq!(config.haptic_settings(), HapticSettings::default());
    }

    #[test]
    fn parse_app_config() {
        let toml_str = r"
[app]
ascii_only = true
high_contrast = true
";
        let config: BrailleConfig = toml::from_str(toml_str).unwrap();
        let options = config.ui_options();
        assert!(options.ascii_only);
        assert!(options.high_contrast);
        assert!(!options.reduced_motion);
        assert!(options.show_unicode, "show_unicode defaults to true");
    }

    #[test]
    fn parse_haptics_config() {
        let toml_str = r"
[haptics]
bell = false
pulse_ms = 120
";
        let config: BrailleConfig = toml::from_str(toml_str).unwrap();
        let settings = config.haptic_settings();
        assert!(!settings.bell);
        assert_eq!(settings.pulse, Duration::from_millis(120));
    }

    #[test]
    fn pulse_is_clamped() {
        let config: BrailleConfig = toml::from_str("[haptics]\npulse_ms = 999999\n").unwrap();
        assert_eq!(
            config.haptic_settings().pulse,
            Duration::from_millis(MAX_PULSE_MS)
        );
    }

    #[test]
    fn unknown_geometry_keys_are_ignored() {
        // geometry is fixed; stray keys must not break loading
        let config: BrailleConfig = toml::from_str("[grid]\ncell_size = 5\n").unwrap();
        assert!(config.app.is_none());
    }

    #[test]
    fn load_from_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = BrailleConfig::load_from(&dir.path().join("config.toml")).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn load_from_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[app]\nreduced_motion = true\n").unwrap();
        let config = BrailleConfig::load_from(&path).unwrap().unwrap();
        assert!(config.ui_options().reduced_motion);
    }

    #[test]
    fn load_from_reports_parse_error_with_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[app\nbroken").unwrap();
        let err = BrailleConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert_eq!(err.path(), &path);
        assert!(err.to_string().contains("failed to parse config"));
    }

    fn ascii_env(value: &'static str) -> impl Fn(&str) -> Option<String> {
        move |name| (name == "BRAILLE_ASCII").then(|| value.to_string())
    }

    #[test]
    fn ascii_env_flag_forces_ascii() {
        assert!(ui_options_with(None, ascii_env("1")).ascii_only);
        assert!(ui_options_with(None, ascii_env(" TRUE ")).ascii_only);
        assert!(!ui_options_with(None, ascii_env("0")).ascii_only);
        assert!(!ui_options_with(None, |_| None).ascii_only);
    }

    #[test]
    fn ascii_env_flag_overrides_config() {
        let config: BrailleConfig = toml::from_str("[app]\nhigh_contrast = true\n").unwrap();
        let options = ui_options_with(Some(&config), ascii_env("1"));
        assert!(options.ascii_only);
        assert!(options.high_contrast);
    }
}
