// SPDX-License-Identifier: MPL-2.0
use rust_embed::RustEmbed;
use unic_langid::LanguageIdentifier;

use crate::error::Result;
use crate::table::LocaleTable;
use crate::validate;

#[derive(RustEmbed)]
#[folder = "locales/"]
struct Asset;

/// Load every embedded locale file.
///
/// Each `locales/<tag>.toml` asset becomes one [`LocaleTable`]; the filename
/// stem must parse as a language identifier. Parse failures and incomplete
/// key sets are startup errors, not runtime ones.
pub fn load_embedded() -> Result<Vec<LocaleTable>> {
    let mut tables = Vec::new();

    for file in Asset::iter() {
        let filename = file.as_ref();
        let Some(stem) = filename.strip_suffix(".toml") else {
            continue;
        };
        let Ok(tag) = stem.parse::<LanguageIdentifier>() else {
            continue;
        };
        if let Some(content) = Asset::get(filename) {
            let text = String::from_utf8_lossy(content.data.as_ref());
            let table = LocaleTable::from_toml_str(tag, &text)?;
            validate::verify_complete(&table)?;
            tables.push(table);
        }
    }

    Ok(tables)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::LocaleKey;

    #[test]
    fn embedded_locales_load_and_validate() {
        let tables = load_embedded().expect("embedded locales are well-formed");
        assert!(tables.len() >= 2, "expected at least en-US and zh-CN");
        for table in &tables {
            assert_eq!(table.len(), LocaleKey::ALL.len());
        }
    }

    #[test]
    fn embedded_locales_include_reference_and_chinese() {
        let tables = load_embedded().expect("embedded locales are well-formed");
        let tags: Vec<String> = tables.iter().map(|t| t.tag().to_string()).collect();
        assert!(tags.contains(&"en-US".to_string()));
        assert!(tags.contains(&"zh-CN".to_string()));
    }
}
