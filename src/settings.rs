/// Theme and language preferences: loading, resolving and persisting.
use crate::db::PreferenceStore;
use crate::error::PreferenceError;
use crate::i18n::{DEFAULT_LANGUAGE, Translator};
use crate::palette::{Palette, get_palette, resolve_actual_theme};
use crate::types::{ColorScheme, ThemePreference};

pub const THEME_KEY: &str = "theme";
pub const LANGUAGE_KEY: &str = "language";

/// Attempts per preference write before giving up.
const WRITE_ATTEMPTS: usize = 2;

/// Application-wide appearance state. Built once at start-up and handed to
/// whatever needs the palette or the translator.
#[derive(Clone, Debug)]
pub struct Settings {
    theme: ThemePreference,
    system_scheme: Option<ColorScheme>,
    translator: Translator,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: ThemePreference::System,
            system_scheme: None,
            translator: Translator::new(DEFAULT_LANGUAGE),
        }
    }
}

impl Settings {
    /// Reads persisted preferences. Anything missing, malformed or
    /// unreadable falls back to the defaults.
    pub fn load(store: &impl PreferenceStore, system_scheme: Option<ColorScheme>) -> Self {
        let mut settings = Self {
            system_scheme,
            ..Self::default()
        };

        match read_theme(store) {
            Ok(Some(theme)) => settings.theme = theme,
            Ok(None) => {}
            Err(err) => tracing::warn!(%err, "failed to read theme preference; using default"),
        }

        match store.read(LANGUAGE_KEY) {
            Ok(Some(code)) if !code.trim().is_empty() => {
                settings.translator.change_language(code.trim())
            }
            Ok(Some(_)) => tracing::warn!("empty language preference; using default"),
            Ok(None) => {}
            Err(err) => tracing::warn!(%err, "failed to read language preference; using default"),
        }

        tracing::info!(
            theme = %settings.theme,
            language = settings.translator.active_language(),
            "loaded preferences"
        );
        settings
    }

    pub fn theme_preference(&self) -> ThemePreference {
        self.theme
    }

    pub fn language(&self) -> &str {
        self.translator.active_language()
    }

    pub fn translator(&self) -> &Translator {
        &self.translator
    }

    pub fn system_scheme(&self) -> Option<ColorScheme> {
        self.system_scheme
    }

    /// Called whenever the terminal reports a (possibly unchanged) scheme.
    pub fn set_system_scheme(&mut self, scheme: Option<ColorScheme>) {
        if self.system_scheme != scheme {
            tracing::debug!(?scheme, "terminal color scheme changed");
            self.system_scheme = scheme;
        }
    }

    pub fn actual_theme(&self) -> ColorScheme {
        resolve_actual_theme(self.theme, self.system_scheme)
    }

    pub fn palette(&self) -> &'static Palette {
        get_palette(self.actual_theme())
    }

    /// Updates the theme and persists it. The in-memory value changes even
    /// when persisting fails; returns whether the write landed.
    pub fn set_theme_preference(
        &mut self,
        store: &impl PreferenceStore,
        theme: ThemePreference,
    ) -> bool {
        self.theme = theme;
        persist(store, THEME_KEY, theme.as_str())
    }

    /// Updates the language, switches the translator, and persists it.
    /// Same failure policy as [`Settings::set_theme_preference`].
    /// Surrounding whitespace is dropped; an empty code changes nothing.
    pub fn set_language_preference(&mut self, store: &impl PreferenceStore, code: &str) -> bool {
        let code = code.trim();
        if code.is_empty() {
            tracing::warn!("ignoring empty language code");
            return false;
        }
        self.translator.change_language(code);
        persist(store, LANGUAGE_KEY, code)
    }
}

fn read_theme(store: &impl PreferenceStore) -> Result<Option<ThemePreference>, PreferenceError> {
    match store.read(THEME_KEY)? {
        Some(raw) => match raw.parse() {
            Ok(theme) => Ok(Some(theme)),
            Err(err) => {
                tracing::warn!(%err, "ignoring stored theme");
                Ok(None)
            }
        },
        None => Ok(None),
    }
}

// One retry, then log and move on.
fn persist(store: &impl PreferenceStore, key: &str, value: &str) -> bool {
    for attempt in 1..=WRITE_ATTEMPTS {
        match store.write(key, value) {
            Ok(()) => return true,
            Err(err) if attempt < WRITE_ATTEMPTS => {
                tracing::debug!(key, attempt, %err, "preference write failed; retrying");
            }
            Err(err) => {
                tracing::warn!(key, value, %err, "failed to persist preference");
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;

    use rusqlite::Connection;

    use super::*;
    use crate::db::SqliteStore;

    /// In-memory store that records writes and can be told to fail.
    #[derive(Default)]
    struct RecordingStore {
        values: RefCell<HashMap<String, String>>,
        writes: RefCell<Vec<(String, String)>>,
        failures_left: Cell<usize>,
        fail_reads: bool,
    }

    impl RecordingStore {
        fn failing_writes(count: usize) -> Self {
            let store = Self::default();
            store.failures_left.set(count);
            store
        }

        fn with(key: &str, value: &str) -> Self {
            let store = Self::default();
            store.values.borrow_mut().insert(key.to_string(), value.to_string());
            store
        }
    }

    fn storage_error() -> PreferenceError {
        PreferenceError::Storage {
            source: rusqlite::Error::InvalidQuery,
        }
    }

    impl PreferenceStore for RecordingStore {
        fn read(&self, key: &str) -> Result<Option<String>, PreferenceError> {
            if self.fail_reads {
                return Err(storage_error());
            }
            Ok(self.values.borrow().get(key).cloned())
        }

        fn write(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
            self.writes.borrow_mut().push((key.to_string(), value.to_string()));
            if self.failures_left.get() > 0 {
                self.failures_left.set(self.failures_left.get() - 1);
                return Err(storage_error());
            }
            self.values.borrow_mut().insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    #[test]
    fn defaults_before_anything_is_read() {
        let settings = Settings::default();
        assert_eq!(settings.theme_preference(), ThemePreference::System);
        assert_eq!(settings.language(), "en");
        assert_eq!(settings.actual_theme(), ColorScheme::Light);
    }

    #[test]
    fn loads_persisted_values() {
        let store = RecordingStore::with(THEME_KEY, "dark");
        store.values.borrow_mut().insert(LANGUAGE_KEY.into(), "es".into());
        let settings = Settings::load(&store, Some(ColorScheme::Light));
        assert_eq!(settings.theme_preference(), ThemePreference::Dark);
        assert_eq!(settings.actual_theme(), ColorScheme::Dark);
        assert_eq!(settings.language(), "es");
    }

    #[test]
    fn malformed_theme_falls_back_to_system() {
        let store = RecordingStore::with(THEME_KEY, "purple");
        let settings = Settings::load(&store, Some(ColorScheme::Dark));
        assert_eq!(settings.theme_preference(), ThemePreference::System);
        assert_eq!(settings.actual_theme(), ColorScheme::Dark);
    }

    #[test]
    fn unreadable_store_falls_back_to_defaults() {
        let store = RecordingStore {
            fail_reads: true,
            ..RecordingStore::default()
        };
        let settings = Settings::load(&store, None);
        assert_eq!(settings.theme_preference(), ThemePreference::System);
        assert_eq!(settings.language(), "en");
    }

    #[test]
    fn repeated_theme_writes_are_not_deduplicated() {
        let store = RecordingStore::default();
        let mut settings = Settings::default();
        assert!(settings.set_theme_preference(&store, ThemePreference::Dark));
        let palette = settings.palette();
        assert!(settings.set_theme_preference(&store, ThemePreference::Dark));
        assert_eq!(settings.palette(), palette);
        assert_eq!(store.writes.borrow().len(), 2);
    }

    #[test]
    fn write_is_retried_once() {
        let store = RecordingStore::failing_writes(1);
        let mut settings = Settings::default();
        assert!(settings.set_theme_preference(&store, ThemePreference::Light));
        assert_eq!(store.writes.borrow().len(), 2);
        assert_eq!(store.values.borrow().get(THEME_KEY).map(String::as_str), Some("light"));
    }

    #[test]
    fn failed_write_keeps_in_memory_value() {
        let store = RecordingStore::failing_writes(5);
        let mut settings = Settings::default();
        assert!(!settings.set_theme_preference(&store, ThemePreference::Dark));
        assert_eq!(settings.theme_preference(), ThemePreference::Dark);
        assert_eq!(settings.actual_theme(), ColorScheme::Dark);
        assert_eq!(store.writes.borrow().len(), WRITE_ATTEMPTS);

        assert!(!settings.set_language_preference(&store, "de"));
        assert_eq!(settings.language(), "de");
    }

    #[test]
    fn system_scheme_updates_follow_through() {
        let mut settings = Settings::default();
        settings.set_system_scheme(Some(ColorScheme::Dark));
        assert_eq!(settings.system_scheme(), Some(ColorScheme::Dark));
        assert_eq!(settings.palette().scheme(), ColorScheme::Dark);
    }

    #[test]
    fn language_survives_a_fresh_instance() {
        let dir = tempfile::tempdir().unwrap();
        let store = SqliteStore::new(dir.path().join("revio.db"));

        let mut settings = Settings::load(&store, None);
        assert!(settings.set_language_preference(&store, "fr"));
        assert_eq!(settings.translator().active_language(), "fr");

        let fresh = Settings::load(&store, None);
        assert_eq!(store.read(LANGUAGE_KEY).unwrap().as_deref(), Some("fr"));
        assert_eq!(fresh.language(), "fr");
        assert_eq!(fresh.translator().active_language(), "fr");
        assert_eq!(fresh.translator().t("settings.language"), "Langue");
    }

    #[test]
    fn language_code_is_trimmed_before_storing() {
        let dir = tempfile::tempdir().unwrap();
        let store = SqliteStore::new(dir.path().join("revio.db"));

        let mut settings = Settings::load(&store, None);
        assert!(settings.set_language_preference(&store, " fr "));
        assert_eq!(settings.language(), "fr");
        assert_eq!(store.read(LANGUAGE_KEY).unwrap().as_deref(), Some("fr"));
        assert_eq!(Settings::load(&store, None).language(), settings.language());
    }

    #[test]
    fn empty_language_code_is_ignored() {
        let store = RecordingStore::default();
        let mut settings = Settings::default();
        assert!(!settings.set_language_preference(&store, "   "));
        assert_eq!(settings.language(), "en");
        assert!(store.writes.borrow().is_empty());
    }

    #[test]
    fn works_against_a_plain_connection() {
        let conn = Connection::open_in_memory().unwrap();
        crate::db::init_schema(&conn).unwrap();
        let mut settings = Settings::load(&conn, None);
        settings.set_theme_preference(&conn, ThemePreference::Light);
        assert_eq!(Settings::load(&conn, None).theme_preference(), ThemePreference::Light);
    }
}
