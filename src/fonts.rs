//! Script-aware font selection.
//!
//! `select_font` decides which of the four bundled font resources should
//! render a translation. `FontRegistry` resolves those resources on disk once
//! at startup so the UI can show where each face comes from.

use std::fmt;
use std::path::PathBuf;

use log::{debug, warn};

use crate::config::FontSettings;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontChoice {
    #[default]
    Default,
    Arabic,
    TraditionalChinese,
    Korean,
}

impl FontChoice {
    pub const ALL: [FontChoice; 4] = [
        FontChoice::Default,
        FontChoice::Arabic,
        FontChoice::TraditionalChinese,
        FontChoice::Korean,
    ];

    /// The family name registered for this face.
    pub fn family(&self) -> &'static str {
        match self {
            FontChoice::Default => "Noto Sans",
            FontChoice::Arabic => "Noto Sans Arabic",
            FontChoice::TraditionalChinese => "Noto Sans TC",
            FontChoice::Korean => "Noto Sans KR",
        }
    }
}

impl fmt::Display for FontChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.family())
    }
}

/// Picks the font for a target language code.
///
/// Total over all inputs: anything that is not Arabic, Traditional Chinese or
/// Korean renders with the default face.
pub fn select_font(target_code: &str) -> FontChoice {
    match target_code {
        "ar" => FontChoice::Arabic,
        "zh-tw" => FontChoice::TraditionalChinese,
        "ko" => FontChoice::Korean,
        _ => FontChoice::Default,
    }
}

/// A font resource as resolved at startup.
#[derive(Debug, Clone)]
pub struct FontFace {
    pub choice: FontChoice,
    pub path: PathBuf,
    pub available: bool,
}

#[derive(Debug, Clone)]
pub struct FontRegistry {
    faces: Vec<FontFace>,
}

impl FontRegistry {
    /// Resolves every font file named in the settings.
    ///
    /// Missing files are not an error; they are logged and `face` falls back
    /// to the default face for them.
    pub fn load(settings: &FontSettings) -> Self {
        let faces = FontChoice::ALL
            .iter()
            .map(|choice| {
                let path = settings.path_for(*choice);
                let available = path.is_file();
                if available {
                    debug!("Registered font {} from {}", choice, path.display());
                } else {
                    warn!("Font resource for {} not found at {}", choice, path.display());
                }
                FontFace {
                    choice: *choice,
                    path,
                    available,
                }
            })
            .collect();
        Self { faces }
    }

    /// Returns the face that will actually render `choice`.
    pub fn face(&self, choice: FontChoice) -> &FontFace {
        let requested = self.entry(choice);
        if requested.available || choice == FontChoice::Default {
            requested
        } else {
            self.entry(FontChoice::Default)
        }
    }

    pub fn faces(&self) -> &[FontFace] {
        &self.faces
    }

    fn entry(&self, choice: FontChoice) -> &FontFace {
        // `load` registers every variant of `FontChoice::ALL` in order.
        let idx = FontChoice::ALL
            .iter()
            .position(|candidate| *candidate == choice)
            .unwrap_or(0);
        &self.faces[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn selects_script_fonts() {
        assert_eq!(select_font("ar"), FontChoice::Arabic);
        assert_eq!(select_font("zh-tw"), FontChoice::TraditionalChinese);
        assert_eq!(select_font("ko"), FontChoice::Korean);
    }

    #[test]
    fn everything_else_uses_default() {
        for code in ["en", "fr", "zh-cn", "ja", "iw", "", "arabic", "ZH-TW", "AR", "Ko"] {
            assert_eq!(select_font(code), FontChoice::Default, "code {code:?}");
        }
    }

    #[test]
    fn selection_is_total_over_builtin_catalog() {
        let catalog = crate::catalog::LanguageCatalog::builtin();
        let scripted: Vec<_> = catalog
            .iter()
            .filter(|(code, _)| select_font(code) != FontChoice::Default)
            .map(|(code, _)| code)
            .collect();
        assert_eq!(scripted, vec!["ar", "zh-tw", "ko"]);
    }

    #[test]
    fn registry_falls_back_when_script_font_missing() {
        let dir = tempfile::tempdir().unwrap();
        let settings = FontSettings {
            dir: dir.path().to_path_buf(),
            ..FontSettings::default()
        };
        fs::write(dir.path().join(&settings.default), b"font").unwrap();
        fs::write(dir.path().join(&settings.arabic), b"font").unwrap();

        let registry = FontRegistry::load(&settings);
        assert!(registry.face(FontChoice::Arabic).available);
        assert_eq!(registry.face(FontChoice::Arabic).choice, FontChoice::Arabic);
        assert_eq!(registry.face(FontChoice::Korean).choice, FontChoice::Default);
        assert_eq!(registry.faces().len(), 4);
    }
}
