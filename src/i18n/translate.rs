//! Per-page dictionary resolution with English fallback.

use crate::i18n::Language;

/// A page-scoped set of translation dictionaries, one per language.
///
/// Each page declares its own dictionary struct with a closed key set and
/// registers the languages it has text for. Resolution never fails: any
/// code without a dictionary resolves to the page's English one. Every set
/// must therefore contain an `"en"` entry; omitting it is a configuration
/// error in the page, not a runtime condition.
pub struct TranslationSet<T: 'static> {
    entries: &'static [(&'static str, &'static T)],
}

impl<T> TranslationSet<T> {
    pub const fn new(entries: &'static [(&'static str, &'static T)]) -> Self {
        Self { entries }
    }

    /// Dictionary for the given language, or the English dictionary when the
    /// page has no translation for it.
    pub fn resolve(&self, language: Language) -> &'static T {
        self.resolve_code(language.code())
    }

    /// Same as [`resolve`](Self::resolve) but over a raw code, which may be
    /// anything. Unrecognized codes fall back to English.
    pub fn resolve_code(&self, code: &str) -> &'static T {
        self.lookup(code)
            .or_else(|| self.lookup(Language::ENGLISH.code()))
            .expect("Translation set must define an English dictionary")
    }

    fn lookup(&self, code: &str) -> Option<&'static T> {
        self.entries
            .iter()
            .find(|(entry_code, _)| *entry_code == code)
            .map(|(_, dictionary)| *dictionary)
    }
}
