// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Locale(LocaleError),
}

/// Structural defects in locale data.
/// Used both at load time (embedded assets) and by the validation tooling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocaleError {
    /// A key from the closed key set has no entry in a locale table.
    /// Should be caught before deployment; a runtime hit means the table
    /// skipped validation.
    MissingKey { locale: String, key: &'static str },

    /// A locale table's key set diverges from the reference set.
    /// `missing` lists the canonical names of the absent keys.
    KeySetMismatch {
        locale: String,
        missing: Vec<&'static str>,
    },

    /// A locale file contains a key that is not in the closed key set.
    UnknownKey { locale: String, key: String },

    /// A locale tag was requested that no table provides.
    UnknownLocale(String),

    /// A locale file could not be parsed.
    Parse { locale: String, message: String },
}

impl fmt::Display for LocaleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocaleError::MissingKey { locale, key } => {
                write!(f, "locale '{}' has no entry for key '{}'", locale, key)
            }
            LocaleError::KeySetMismatch { locale, missing } => {
                write!(
                    f,
                    "locale '{}' key set mismatch, missing: {}",
                    locale,
                    missing.join(", ")
                )
            }
            LocaleError::UnknownKey { locale, key } => {
                write!(f, "locale '{}' defines unknown key '{}'", locale, key)
            }
            LocaleError::UnknownLocale(tag) => write!(f, "no locale table for '{}'", tag),
            LocaleError::Parse { locale, message } => {
                write!(f, "failed to parse locale '{}': {}", locale, message)
            }
        }
    }
}

impl std::error::Error for LocaleError {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Locale(e) => write!(f, "Locale Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<LocaleError> for Error {
    fn from(err: LocaleError) -> Self {
        Error::Locale(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
