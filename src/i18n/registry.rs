//! Language registry: single source of truth for the site's languages.
//!
//! The registry lists every language the site offers in its switcher. It is
//! initialized once behind a `OnceLock` and immutable thereafter; the
//! `Language` type validates codes against it.

use std::sync::OnceLock;

/// Metadata for one supported language.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// ISO 639-1 language code (e.g., "en", "it")
    pub code: &'static str,

    /// Display name in the language itself, as shown in the switcher
    pub name: &'static str,
}

/// Global language registry.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: site_languages(),
        })
    }

    /// Look up a language configuration by its code.
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// All languages offered by the site, in switcher order.
    pub fn list(&self) -> &[LanguageConfig] {
        &self.languages
    }

    /// Check whether a code belongs to a supported language.
    pub fn is_supported(&self, code: &str) -> bool {
        self.get_by_code(code).is_some()
    }
}

/// The languages the site is prepared to serve. English is the canonical
/// language; the others resolve to English dictionaries until translated.
fn site_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            code: "en",
            name: "English",
        },
        LanguageConfig {
            code: "it",
            name: "Italiano",
        },
        LanguageConfig {
            code: "fr",
            name: "Français",
        },
        LanguageConfig {
            code: "es",
            name: "Español",
        },
        LanguageConfig {
            code: "pt",
            name: "Português",
        },
    ]
}
