// SPDX-License-Identifier: MPL-2.0
//! One immutable locale table: the flat key → display-string mapping for a
//! single language tag.
//!
//! Tables are parsed once from the embedded TOML assets and never mutated
//! afterwards, so any number of threads may read them without coordination.

use std::collections::BTreeMap;
use std::str::FromStr;

use unic_langid::LanguageIdentifier;

use crate::error::{LocaleError, Result};
use crate::key::LocaleKey;

#[derive(Debug, Clone)]
pub struct LocaleTable {
    tag: LanguageIdentifier,
    entries: BTreeMap<LocaleKey, String>,
}

impl LocaleTable {
    /// Build a table from already-typed entries. Used by tests and by
    /// callers that assemble tables programmatically.
    pub fn from_entries(tag: LanguageIdentifier, entries: BTreeMap<LocaleKey, String>) -> Self {
        Self { tag, entries }
    }

    /// Parse one locale file.
    ///
    /// The file is a flat TOML document of `KEY = "text"` pairs. A key that
    /// is not in the closed [`LocaleKey`] set is an orphan-key defect and is
    /// rejected here, at the boundary, rather than surfacing later as a
    /// lookup miss.
    pub fn from_toml_str(tag: LanguageIdentifier, text: &str) -> Result<Self> {
        let raw: BTreeMap<String, String> =
            toml::from_str(text).map_err(|e| LocaleError::Parse {
                locale: tag.to_string(),
                message: e.to_string(),
            })?;

        let mut entries = BTreeMap::new();
        for (name, value) in raw {
            let key = LocaleKey::from_str(&name).map_err(|_| LocaleError::UnknownKey {
                locale: tag.to_string(),
                key: name.clone(),
            })?;
            entries.insert(key, value);
        }

        Ok(Self { tag, entries })
    }

    /// Serialize back to the flat TOML transport format.
    ///
    /// Parsing the output with [`LocaleTable::from_toml_str`] reproduces an
    /// identical mapping.
    pub fn to_toml_string(&self) -> Result<String> {
        let raw: BTreeMap<&'static str, &str> = self
            .entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
            .collect();
        Ok(toml::to_string_pretty(&raw)?)
    }

    /// Strict lookup: total over the key set when the table is complete,
    /// loud [`LocaleError::MissingKey`] otherwise. Never substitutes empty
    /// text for a missing entry.
    pub fn lookup(&self, key: LocaleKey) -> Result<&str> {
        self.get(key).ok_or_else(|| {
            LocaleError::MissingKey {
                locale: self.tag.to_string(),
                key: key.as_str(),
            }
            .into()
        })
    }

    /// Non-failing probe, used by the registry's fallback path.
    pub fn get(&self, key: LocaleKey) -> Option<&str> {
        self.entries.get(&key).map(String::as_str)
    }

    pub fn tag(&self) -> &LanguageIdentifier {
        &self.tag
    }

    pub fn keys(&self) -> impl Iterator<Item = LocaleKey> + '_ {
        self.entries.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
