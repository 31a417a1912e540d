//! Settings loaded from `config/lingo.toml`.
//!
//! Every section has defaults, so a missing file (or a file that only sets a
//! few keys) still yields a complete `Settings`.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::fonts::FontChoice;

/// Location of the settings file relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "config/lingo.toml";
/// Environment variable read for the API key when `api_key_env` is unset.
pub const DEFAULT_API_KEY_ENV: &str = "LINGO_API_KEY";

/// Top-level settings structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub backend: BackendSettings,
    #[serde(default)]
    pub fonts: FontSettings,
    #[serde(default)]
    pub ui: UiSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

impl Settings {
    /// Reads settings from `path`, falling back to defaults when the file does
    /// not exist. Relative paths inside the file are resolved against `root`.
    pub fn load(path: &Path, root: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default().normalize(root));
        }
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read settings: {}", path.display()))?;
        let parsed: Settings = toml::from_str(&raw)
            .with_context(|| format!("failed to parse settings: {}", path.display()))?;
        Ok(parsed.normalize(root))
    }

    /// Writes the settings as pretty TOML, creating parent directories.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
            && !dir.exists()
        {
            fs::create_dir_all(dir)
                .with_context(|| format!("failed to create config directory: {}", dir.display()))?;
        }
        let serialized = toml::to_string_pretty(self).context("failed to serialize settings")?;
        fs::write(path, serialized)
            .with_context(|| format!("failed to write settings: {}", path.display()))?;
        Ok(())
    }

    fn normalize(mut self, root: &Path) -> Self {
        if self.fonts.dir.is_relative() {
            self.fonts.dir = root.join(&self.fonts.dir);
        }
        if self.logging.file.is_relative() {
            self.logging.file = root.join(&self.logging.file);
        }
        self
    }
}

/// Which remote service performs translations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Provider {
    /// The public Google Translate web endpoint.
    #[default]
    Google,
    /// A LibreTranslate instance.
    Libre,
    /// Any endpoint accepting `{text, target}` and answering `{text}`.
    Custom,
}

impl Provider {
    pub fn display_name(&self) -> &'static str {
        match self {
            Provider::Google => "Google Translate",
            Provider::Libre => "LibreTranslate",
            Provider::Custom => "Custom HTTP",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendSettings {
    #[serde(default)]
    pub provider: Provider,
    /// Overrides the provider's default endpoint. Required for `custom`.
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub api_key_env: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            provider: Provider::default(),
            base_url: None,
            api_key: None,
            api_key_env: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl BackendSettings {
    /// `api_key` wins over the environment; the variable named by
    /// `api_key_env` (or `LINGO_API_KEY`) is read otherwise.
    pub fn resolved_api_key(&self) -> Option<String> {
        if let Some(key) = &self.api_key {
            return Some(key.clone());
        }
        let var = self.api_key_env.as_deref().unwrap_or(DEFAULT_API_KEY_ENV);
        std::env::var(var).ok().filter(|value| !value.trim().is_empty())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }
}

fn default_timeout_secs() -> u64 {
    15
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FontSettings {
    #[serde(default = "default_font_dir")]
    pub dir: PathBuf,
    #[serde(default = "default_font_regular")]
    pub default: String,
    #[serde(default = "default_font_arabic")]
    pub arabic: String,
    #[serde(default = "default_font_tc")]
    pub traditional_chinese: String,
    #[serde(default = "default_font_kr")]
    pub korean: String,
}

impl Default for FontSettings {
    fn default() -> Self {
        Self {
            dir: default_font_dir(),
            default: default_font_regular(),
            arabic: default_font_arabic(),
            traditional_chinese: default_font_tc(),
            korean: default_font_kr(),
        }
    }
}

impl FontSettings {
    pub fn path_for(&self, choice: FontChoice) -> PathBuf {
        let file = match choice {
            FontChoice::Default => &self.default,
            FontChoice::Arabic => &self.arabic,
            FontChoice::TraditionalChinese => &self.traditional_chinese,
            FontChoice::Korean => &self.korean,
        };
        self.dir.join(file)
    }
}

fn default_font_dir() -> PathBuf {
    PathBuf::from("fonts")
}

fn default_font_regular() -> String {
    "NotoSans-Regular.ttf".into()
}

fn default_font_arabic() -> String {
    "NotoSansArabic-Regular.ttf".into()
}

fn default_font_tc() -> String {
    "NotoSansTC-VariableFont_wght.ttf".into()
}

fn default_font_kr() -> String {
    "NotoSansKR-VariableFont_wght.ttf".into()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiSettings {
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl UiSettings {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(16))
    }
}

fn default_tick_rate_ms() -> u64 {
    250
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_file")]
    pub file: PathBuf,
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            file: default_log_file(),
            level: default_log_level(),
        }
    }
}

fn default_log_file() -> PathBuf {
    PathBuf::from("logs/lingo.log")
}

fn default_log_level() -> String {
    "info".into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load(&dir.path().join("absent.toml"), dir.path()).unwrap();
        assert_eq!(settings.backend.provider, Provider::Google);
        assert_eq!(settings.backend.timeout_secs, 15);
        assert_eq!(settings.fonts.dir, dir.path().join("fonts"));
        assert_eq!(settings.logging.file, dir.path().join("logs/lingo.log"));
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lingo.toml");
        fs::write(
            &path,
            "[backend]\nprovider = \"libre\"\nbase_url = \"http://localhost:5000\"\n",
        )
        .unwrap();
        let settings = Settings::load(&path, dir.path()).unwrap();
        assert_eq!(settings.backend.provider, Provider::Libre);
        assert_eq!(settings.backend.base_url.as_deref(), Some("http://localhost:5000"));
        assert_eq!(settings.ui.tick_rate_ms, 250);
        assert_eq!(settings.fonts.korean, "NotoSansKR-VariableFont_wght.ttf");
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lingo.toml");
        fs::write(&path, "[backend\nprovider = ").unwrap();
        let err = Settings::load(&path, dir.path()).unwrap_err();
        assert!(err.to_string().contains("failed to parse settings"));
    }

    #[test]
    fn save_then_load_preserves_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config/lingo.toml");
        let mut settings = Settings::default();
        settings.backend.provider = Provider::Custom;
        settings.backend.base_url = Some("http://127.0.0.1:9000/translate".into());
        settings.fonts.dir = PathBuf::from("/usr/share/fonts/noto");
        settings.save_to_file(&path).unwrap();

        let loaded = Settings::load(&path, dir.path()).unwrap();
        assert_eq!(loaded.backend.provider, Provider::Custom);
        assert_eq!(loaded.fonts.dir, PathBuf::from("/usr/share/fonts/noto"));
    }

    #[test]
    fn explicit_api_key_beats_environment() {
        let settings = BackendSettings {
            api_key: Some("inline".into()),
            api_key_env: Some("LINGO_TEST_KEY_UNUSED".into()),
            ..BackendSettings::default()
        };
        assert_eq!(settings.resolved_api_key().as_deref(), Some("inline"));
    }

    #[test]
    fn api_key_read_from_named_variable() {
        // SAFETY: the variable name is unique to this test.
        unsafe { std::env::set_var("LINGO_TEST_KEY_FROM_ENV", "from-env") };
        let settings = BackendSettings {
            api_key_env: Some("LINGO_TEST_KEY_FROM_ENV".into()),
            ..BackendSettings::default()
        };
        assert_eq!(settings.resolved_api_key().as_deref(), Some("from-env"));
    }

    #[test]
    fn font_paths_join_directory() {
        let fonts = FontSettings::default();
        assert_eq!(
            fonts.path_for(FontChoice::Arabic),
            PathBuf::from("fonts/NotoSansArabic-Regular.ttf")
        );
    }
}
