//! Visitor preference providers: UI language and cookie consent.
//!
//! Both providers are constructed once at startup from the preference store
//! and are the only writers of their storage keys. Pages read state through
//! them and mutate it through the small operation set they expose; nothing
//! else touches the store.

use crate::analytics::Analytics;
use crate::i18n::{Language, LanguageConfig, LanguageRegistry};
use crate::storage::PreferenceStore;
use std::sync::{Arc, Mutex};
use tracing::{debug, warn};

/// Storage key for the selected UI language.
pub const LANGUAGE_KEY: &str = "preferredLanguage";

/// Storage key for the cookie-consent decision. Absent means undecided.
pub const CONSENT_KEY: &str = "cookieConsent";

/// Process-wide holder of the selected UI language.
pub struct LanguagePrefs {
    store: PreferenceStore,
    current: Mutex<Language>,
}

impl LanguagePrefs {
    /// Initialize from the store: a stored, supported code is adopted,
    /// anything else means English.
    pub fn load(store: PreferenceStore) -> Self {
        let current = store
            .get(LANGUAGE_KEY)
            .and_then(|code| Language::from_code(&code).ok())
            .unwrap_or_default();

        Self {
            store,
            current: Mutex::new(current),
        }
    }

    pub fn current(&self) -> Language {
        *self.current.lock().unwrap()
    }

    /// Switch the site language. Codes outside the registry are silently
    /// ignored and leave both the state and the stored value unchanged.
    pub fn change(&self, code: &str) {
        let Ok(language) = Language::from_code(code) else {
            debug!("Ignoring unsupported language code {:?}", code);
            return;
        };

        *self.current.lock().unwrap() = language;
        self.store.set(LANGUAGE_KEY, language.code());
    }

    /// The languages offered in the switcher, in display order.
    pub fn available(&self) -> &'static [LanguageConfig] {
        LanguageRegistry::get().list()
    }
}

/// The visitor's cookie-consent decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsentState {
    /// No decision yet; the banner is shown.
    Unset,
    Accepted,
    Declined,
}

impl ConsentState {
    fn from_stored(value: Option<String>) -> Self {
        match value.as_deref() {
            Some("true") => ConsentState::Accepted,
            Some("false") => ConsentState::Declined,
            Some(other) => {
                warn!("Ignoring unrecognized stored consent value {:?}", other);
                ConsentState::Unset
            }
            None => ConsentState::Unset,
        }
    }

    pub fn is_decided(self) -> bool {
        self != ConsentState::Unset
    }
}

/// Process-wide holder of the cookie-consent decision.
///
/// Transitions are Unset → Accepted and Unset → Declined only; once decided,
/// `accept` and `decline` are no-ops until [`reset`](ConsentPrefs::reset)
/// restores Unset. That state machine is what bounds the analytics hook to
/// one invocation per acceptance.
pub struct ConsentPrefs {
    store: PreferenceStore,
    state: Mutex<ConsentState>,
    analytics: Arc<Analytics>,
}

impl ConsentPrefs {
    /// Initialize from the store. A previously accepted visitor gets
    /// tracking enabled right away, same as on the visit where they
    /// accepted.
    pub fn load(store: PreferenceStore, analytics: Arc<Analytics>) -> Self {
        let state = ConsentState::from_stored(store.get(CONSENT_KEY));
        if state == ConsentState::Accepted {
            analytics.initialize();
        }

        Self {
            store,
            state: Mutex::new(state),
            analytics,
        }
    }

    pub fn state(&self) -> ConsentState {
        *self.state.lock().unwrap()
    }

    /// Accept non-essential cookies. Persists the decision, then enables
    /// tracking. No-op unless the decision is still open.
    pub fn accept(&self) {
        let mut state = self.state.lock().unwrap();
        if state.is_decided() {
            return;
        }

        *state = ConsentState::Accepted;
        self.store.set(CONSENT_KEY, "true");
        self.analytics.initialize();
    }

    /// Decline non-essential cookies. No-op unless the decision is still
    /// open.
    pub fn decline(&self) {
        let mut state = self.state.lock().unwrap();
        if state.is_decided() {
            return;
        }

        *state = ConsentState::Declined;
        self.store.set(CONSENT_KEY, "false");
    }

    /// Forget the decision, e.g. when the cookie policy changes. The banner
    /// shows again on the next rendered page.
    pub fn reset(&self) {
        let mut state = self.state.lock().unwrap();
        *state = ConsentState::Unset;
        self.store.remove(CONSENT_KEY);
    }
}
