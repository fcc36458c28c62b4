// SPDX-License-Identifier: MPL-2.0
//! `niva_l10n` is the localization layer of the Niva developer tools.
//!
//! It ships one immutable table of UI label strings per supported language,
//! embedded in the binary, and a locale registry that picks the active
//! language at startup (CLI flag, config file, then OS locale) and resolves
//! every label key to display text. Table key sets are validated against the
//! closed key set at load time.

pub mod assets;
pub mod config;
pub mod error;
pub mod key;
pub mod registry;
pub mod table;
pub mod validate;

pub use error::{Error, LocaleError, Result};
pub use key::LocaleKey;
pub use registry::{LocaleRegistry, REFERENCE_LOCALE};
pub use table::LocaleTable;
