//! Language type: a language code validated against the registry.

use crate::i18n::LanguageRegistry;
use anyhow::{bail, Result};

/// A validated site language.
///
/// Only codes listed in [`LanguageRegistry`] can be constructed, so a
/// `Language` held anywhere in the application is always a supported code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    code: &'static str,
}

impl Language {
    /// English, the canonical language every dictionary must provide.
    pub const ENGLISH: Language = Language { code: "en" };

    /// Create a Language from a code string.
    ///
    /// # Returns
    /// * `Ok(Language)` if the code is listed in the registry
    /// * `Err` otherwise
    pub fn from_code(code: &str) -> Result<Language> {
        match LanguageRegistry::get().get_by_code(code) {
            // Use the static str from the registry
            Some(config) => Ok(Language { code: config.code }),
            None => bail!("Unsupported language code: '{}'", code),
        }
    }

    /// The ISO 639-1 code (e.g., "en", "it").
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// The display name shown in the language switcher.
    ///
    /// # Panics
    /// Panics if the code is missing from the registry, which cannot happen
    /// for a properly constructed Language.
    pub fn name(&self) -> &'static str {
        LanguageRegistry::get()
            .get_by_code(self.code)
            .expect("Language code should always be valid")
            .name
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::ENGLISH
    }
}
