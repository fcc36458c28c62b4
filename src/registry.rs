// SPDX-License-Identifier: MPL-2.0
//! The process-wide locale registry.
//!
//! Owns every locale table, selects the active locale at startup, and serves
//! all lookups. Constructed once and injected where localized strings are
//! needed; nothing here is globally mutable.
//!
//! Two lookup surfaces:
//! - [`LocaleRegistry::lookup`] is strict and surfaces `MissingKey`.
//! - [`LocaleRegistry::tr`] is what UI code calls; it falls back to the
//!   reference locale and never shows the user a raw error.

use std::collections::HashMap;

use unic_langid::LanguageIdentifier;

use crate::assets;
use crate::config::Config;
use crate::error::{LocaleError, Result};
use crate::key::LocaleKey;
use crate::table::LocaleTable;
use crate::validate;

/// Tag of the reference locale defining the authoritative key set.
pub const REFERENCE_LOCALE: &str = "en-US";

#[derive(Debug)]
pub struct LocaleRegistry {
    tables: HashMap<LanguageIdentifier, LocaleTable>,
    available_locales: Vec<LanguageIdentifier>,
    reference_locale: LanguageIdentifier,
    current_locale: LanguageIdentifier,
}

impl LocaleRegistry {
    /// Build the registry from the embedded locale assets.
    ///
    /// Locale selection order: `cli_lang` > config `language` > OS locale >
    /// reference locale.
    pub fn new(cli_lang: Option<String>, config: &Config) -> Result<Self> {
        Self::from_tables(assets::load_embedded()?, cli_lang, config)
    }

    /// Build the registry from explicit tables.
    ///
    /// Every table is checked for key-set completeness; the reference locale
    /// must be among them.
    pub fn from_tables(
        tables: Vec<LocaleTable>,
        cli_lang: Option<String>,
        config: &Config,
    ) -> Result<Self> {
        let reference_locale: LanguageIdentifier = REFERENCE_LOCALE
            .parse()
            .map_err(|_| LocaleError::UnknownLocale(REFERENCE_LOCALE.to_string()))?;

        let mut map = HashMap::new();
        let mut available_locales = Vec::new();
        for table in tables {
            validate::verify_complete(&table)?;
            let tag = table.tag().clone();
            available_locales.push(tag.clone());
            map.insert(tag, table);
        }

        if !map.contains_key(&reference_locale) {
            return Err(LocaleError::UnknownLocale(REFERENCE_LOCALE.to_string()).into());
        }

        let current_locale = resolve_locale(cli_lang, config, &available_locales)
            .unwrap_or_else(|| reference_locale.clone());

        Ok(Self {
            tables: map,
            available_locales,
            reference_locale,
            current_locale,
        })
    }

    /// Switch the active locale. Unknown tags are ignored.
    pub fn set_locale(&mut self, locale: LanguageIdentifier) {
        if self.tables.contains_key(&locale) {
            self.current_locale = locale;
        }
    }

    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    pub fn available_locales(&self) -> &[LanguageIdentifier] {
        &self.available_locales
    }

    /// The table for one registered locale.
    pub fn table(&self, locale: &LanguageIdentifier) -> Result<&LocaleTable> {
        self.tables
            .get(locale)
            .ok_or_else(|| LocaleError::UnknownLocale(locale.to_string()).into())
    }

    /// Strict lookup in the active locale.
    pub fn lookup(&self, key: LocaleKey) -> Result<&str> {
        self.table(&self.current_locale)?.lookup(key)
    }

    /// UI-facing lookup: active locale, then the reference locale, then the
    /// canonical key name. Never empty, never an error.
    pub fn tr(&self, key: LocaleKey) -> &str {
        if let Some(text) = self
            .tables
            .get(&self.current_locale)
            .and_then(|table| table.get(key))
        {
            return text;
        }
        if let Some(text) = self
            .tables
            .get(&self.reference_locale)
            .and_then(|table| table.get(key))
        {
            return text;
        }
        key.as_str()
    }
}

/// Resolve the startup locale against the available tables.
fn resolve_locale(
    cli_lang: Option<String>,
    config: &Config,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    // 1. Check CLI args
    if let Some(lang_str) = cli_lang {
        if let Ok(lang) = lang_str.parse::<LanguageIdentifier>() {
            if available.contains(&lang) {
                return Some(lang);
            }
        }
    }

    // 2. Check config file
    if let Some(lang_str) = &config.language {
        if let Ok(lang) = lang_str.parse::<LanguageIdentifier>() {
            if available.contains(&lang) {
                return Some(lang);
            }
        }
    }

    // 3. Check OS locale
    if let Some(os_locale_str) = sys_locale::get_locale() {
        if let Ok(os_lang) = os_locale_str.parse::<LanguageIdentifier>() {
            if available.contains(&os_lang) {
                return Some(os_lang);
            }
        }
    }

    None
}
