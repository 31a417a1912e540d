//! The language catalog and the display-name resolver.
//!
//! The catalog is an ordered list of `code → display name` pairs. Order
//! matters: display names are not guaranteed to be unique once case is
//! folded (the built-in table lists Hebrew under both `iw` and `he`), and
//! `resolve` always returns the first matching code.

use std::collections::HashSet;

/// The text shown by the language selector before the user picks anything.
pub const PLACEHOLDER: &str = "Choose the Language";

/// Errors produced by catalog construction and lookups.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("no language named '{0}' in the catalog")]
    NotFound(String),
    #[error("language code '{0}' appears more than once")]
    DuplicateCode(String),
}

/// A display name that resolves to an earlier code, leaving `shadowed`
/// unreachable through `resolve`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameCollision {
    pub name: String,
    pub winner: String,
    pub shadowed: String,
}

#[derive(Debug, Clone)]
pub struct LanguageCatalog {
    entries: Vec<(String, String)>,
}

impl LanguageCatalog {
    /// Builds a catalog from `(code, display name)` pairs, keeping their order.
    ///
    /// Codes must be unique; display names may repeat.
    pub fn from_pairs<I, C, N>(pairs: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = (C, N)>,
        C: Into<String>,
        N: Into<String>,
    {
        let mut seen = HashSet::new();
        let mut entries = Vec::new();
        for (code, name) in pairs {
            let code = code.into();
            if !seen.insert(code.clone()) {
                return Err(CatalogError::DuplicateCode(code));
            }
            entries.push((code, name.into()));
        }
        Ok(Self { entries })
    }

    /// The language table served by the Google translation endpoint.
    pub fn builtin() -> Self {
        Self {
            entries: BUILTIN_LANGUAGES
                .iter()
                .map(|(code, name)| (code.to_string(), name.to_string()))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(code, display name)` in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(code, name)| (code.as_str(), name.as_str()))
    }

    /// Maps a display name back to its code.
    ///
    /// The comparison is case-insensitive and scans the catalog in order, so
    /// when two codes share a name only the first one is ever returned.
    pub fn resolve(&self, display_name: &str) -> Result<&str, CatalogError> {
        let wanted = display_name.to_lowercase();
        self.entries
            .iter()
            .find(|(_, name)| name.to_lowercase() == wanted)
            .map(|(code, _)| code.as_str())
            .ok_or_else(|| CatalogError::NotFound(display_name.to_string()))
    }

    /// Returns the raw display name registered for `code`.
    pub fn name_of(&self, code: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(entry_code, _)| entry_code == code)
            .map(|(_, name)| name.as_str())
    }

    /// Display names as the language selector shows them, in catalog order.
    pub fn display_names(&self) -> Vec<String> {
        self.entries.iter().map(|(_, name)| capitalize(name)).collect()
    }

    /// Lists every code that `resolve` can never return because an earlier
    /// entry has the same name after case folding.
    pub fn collisions(&self) -> Vec<NameCollision> {
        let mut collisions = Vec::new();
        for (idx, (code, name)) in self.entries.iter().enumerate() {
            let folded = name.to_lowercase();
            if let Some((winner, _)) = self.entries[..idx]
                .iter()
                .find(|(_, earlier)| earlier.to_lowercase() == folded)
            {
                collisions.push(NameCollision {
                    name: folded,
                    winner: winner.clone(),
                    shadowed: code.clone(),
                });
            }
        }
        collisions
    }
}

impl Default for LanguageCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Upper-cases the first character and lower-cases the rest.
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

const BUILTIN_LANGUAGES: &[(&str, &str)] = &[
    ("af", "afrikaans"),
    ("sq", "albanian"),
    ("am", "amharic"),
    ("ar", "arabic"),
    ("hy", "armenian"),
    ("az", "azerbaijani"),
    ("eu", "basque"),
    ("be", "belarusian"),
    ("bn", "bengali"),
    ("bs", "bosnian"),
    ("bg", "bulgarian"),
    ("ca", "catalan"),
    ("ceb", "cebuano"),
    ("ny", "chichewa"),
    ("zh-cn", "chinese (simplified)"),
    ("zh-tw", "chinese (traditional)"),
    ("co", "corsican"),
    ("hr", "croatian"),
    ("cs", "czech"),
    ("da", "danish"),
    ("nl", "dutch"),
    ("en", "english"),
    ("eo", "esperanto"),
    ("et", "estonian"),
    ("tl", "filipino"),
    ("fi", "finnish"),
    ("fr", "french"),
    ("fy", "frisian"),
    ("gl", "galician"),
    ("ka", "georgian"),
    ("de", "german"),
    ("el", "greek"),
    ("gu", "gujarati"),
    ("ht", "haitian creole"),
    ("ha", "hausa"),
    ("haw", "hawaiian"),
    ("iw", "hebrew"),
    ("he", "hebrew"),
    ("hi", "hindi"),
    ("hmn", "hmong"),
    ("hu", "hungarian"),
    ("is", "icelandic"),
    ("ig", "igbo"),
    ("id", "indonesian"),
    ("ga", "irish"),
    ("it", "italian"),
    ("ja", "japanese"),
    ("jw", "javanese"),
    ("kn", "kannada"),
    ("kk", "kazakh"),
    ("km", "khmer"),
    ("ko", "korean"),
    ("ku", "kurdish (kurmanji)"),
    ("ky", "kyrgyz"),
    ("lo", "lao"),
    ("la", "latin"),
    ("lv", "latvian"),
    ("lt", "lithuanian"),
    ("lb", "luxembourgish"),
    ("mk", "macedonian"),
    ("mg", "malagasy"),
    ("ms", "malay"),
    ("ml", "malayalam"),
    ("mt", "maltese"),
    ("mi", "maori"),
    ("mr", "marathi"),
    ("mn", "mongolian"),
    ("my", "myanmar (burmese)"),
    ("ne", "nepali"),
    ("no", "norwegian"),
    ("or", "odia"),
    ("ps", "pashto"),
    ("fa", "persian"),
    ("pl", "polish"),
    ("pt", "portuguese"),
    ("pa", "punjabi"),
    ("ro", "romanian"),
    ("ru", "russian"),
    ("sm", "samoan"),
    ("gd", "scots gaelic"),
    ("sr", "serbian"),
    ("st", "sesotho"),
    ("sn", "shona"),
    ("sd", "sindhi"),
    ("si", "sinhala"),
    ("sk", "slovak"),
    ("sl", "slovenian"),
    ("so", "somali"),
    ("es", "spanish"),
    ("su", "sundanese"),
    ("sw", "swahili"),
    ("sv", "swedish"),
    ("tg", "tajik"),
    ("ta", "tamil"),
    ("te", "telugu"),
    ("th", "thai"),
    ("tr", "turkish"),
    ("uk", "ukrainian"),
    ("ur", "urdu"),
    ("ug", "uyghur"),
    ("uz", "uzbek"),
    ("vi", "vietnamese"),
    ("cy", "welsh"),
    ("xh", "xhosa"),
    ("yi", "yiddish"),
    ("yo", "yoruba"),
    ("zu", "zulu"),
];

#[cfg(test)]
mod tests {
    use super::*;

    fn small() -> LanguageCatalog {
        LanguageCatalog::from_pairs([("en", "english"), ("fr", "french")]).unwrap()
    }

    #[test]
    fn resolves_case_insensitively() {
        let catalog = small();
        assert_eq!(catalog.resolve("French"), Ok("fr"));
        assert_eq!(catalog.resolve("ENGLISH"), Ok("en"));
    }

    #[test]
    fn placeholder_and_unknown_names_are_not_found() {
        let catalog = small();
        assert_eq!(
            catalog.resolve(PLACEHOLDER),
            Err(CatalogError::NotFound(PLACEHOLDER.to_string()))
        );
        assert!(catalog.resolve("Klingon").is_err());
        assert!(catalog.resolve("").is_err());
    }

    #[test]
    fn first_code_wins_on_name_collision() {
        let catalog = LanguageCatalog::builtin();
        assert_eq!(catalog.resolve("Hebrew"), Ok("iw"));
        let collisions = catalog.collisions();
        assert_eq!(collisions.len(), 1);
        assert_eq!(collisions[0].winner, "iw");
        assert_eq!(collisions[0].shadowed, "he");
    }

    #[test]
    fn rejects_duplicate_codes() {
        let err = LanguageCatalog::from_pairs([("en", "english"), ("en", "anglais")]).unwrap_err();
        assert_eq!(err, CatalogError::DuplicateCode("en".into()));
    }

    #[test]
    fn display_names_are_capitalized() {
        let names = LanguageCatalog::builtin().display_names();
        assert!(names.contains(&"Chinese (traditional)".to_string()));
        assert!(names.contains(&"Haitian creole".to_string()));
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("éCOLE"), "École");
    }

    #[test]
    fn every_capitalized_name_resolves() {
        let catalog = LanguageCatalog::builtin();
        for name in catalog.display_names() {
            assert!(catalog.resolve(&name).is_ok(), "{name} should resolve");
        }
    }
}
