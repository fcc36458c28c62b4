// SPDX-License-Identifier: MPL-2.0
//! Structural validation of locale tables against the closed key set.
//!
//! Every locale must carry exactly the keys of [`LocaleKey::ALL`]. Extra
//! keys cannot exist past parsing (the key type is a closed enum), so the
//! check here only has to find absences. It runs at registry construction
//! and again in the test suite; a mismatch is a build/test-time defect,
//! never something end users should reach.

use crate::error::{LocaleError, Result};
use crate::key::LocaleKey;
use crate::table::LocaleTable;

/// Keys of the closed set that `table` has no entry for, in canonical order.
pub fn missing_keys(table: &LocaleTable) -> Vec<LocaleKey> {
    LocaleKey::ALL
        .iter()
        .copied()
        .filter(|key| table.get(*key).is_none())
        .collect()
}

/// The load-time completeness check: error if any key of the closed set is
/// absent from `table`.
pub fn verify_complete(table: &LocaleTable) -> Result<()> {
    let missing = missing_keys(table);
    if missing.is_empty() {
        return Ok(());
    }
    Err(LocaleError::KeySetMismatch {
        locale: table.tag().to_string(),
        missing: missing.iter().map(LocaleKey::as_str).collect(),
    }
    .into())
}

/// Per-locale coverage relative to the closed key set.
#[derive(Debug, Clone)]
pub struct LocaleCoverage {
    pub locale: String,
    pub present: usize,
    pub missing: Vec<LocaleKey>,
    pub coverage_percent: f32,
}

/// Coverage across a set of locale tables, for the `--check` tool and tests.
#[derive(Debug, Clone)]
pub struct CoverageReport {
    pub total_keys: usize,
    pub locales: Vec<LocaleCoverage>,
}

impl CoverageReport {
    pub fn is_complete(&self) -> bool {
        self.locales.iter().all(|lc| lc.missing.is_empty())
    }
}

/// Check every table against the closed key set.
///
/// Locales are reported sorted by tag for deterministic output.
pub fn coverage_report(tables: &[LocaleTable]) -> CoverageReport {
    let total = LocaleKey::ALL.len();

    let mut locales: Vec<LocaleCoverage> = tables
        .iter()
        .map(|table| {
            let missing = missing_keys(table);
            let present = total - missing.len();
            LocaleCoverage {
                locale: table.tag().to_string(),
                present,
                missing,
                coverage_percent: (present as f32 / total as f32) * 100.0,
            }
        })
        .collect();
    locales.sort_by(|a, b| a.locale.cmp(&b.locale));

    CoverageReport {
        total_keys: total,
        locales,
    }
}
