use thiserror::Error;

/// Failures around the persisted theme/language preferences.
#[derive(Error, Debug)]
pub enum PreferenceError {
    #[error("preference storage error: {source}")]
    Storage {
        #[from]
        source: rusqlite::Error,
    },

    #[error("malformed value {value:?} for preference '{key}'")]
    Malformed { key: &'static str, value: String },
}
