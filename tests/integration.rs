// SPDX-License-Identifier: MPL-2.0
use niva_l10n::registry::LocaleRegistry;
use niva_l10n::{assets, config, validate, LocaleKey, LocaleTable};
use tempfile::tempdir;
use unic_langid::LanguageIdentifier;

fn embedded_tables() -> Vec<LocaleTable> {
    assets::load_embedded().expect("embedded locales load")
}

fn table_for(tables: &[LocaleTable], tag: &str) -> LocaleTable {
    tables
        .iter()
        .find(|t| t.tag().to_string() == tag)
        .unwrap_or_else(|| panic!("locale {} not embedded", tag))
        .clone()
}

#[test]
fn every_embedded_locale_matches_the_key_set() {
    let tables = embedded_tables();
    assert!(tables.len() >= 2);

    for table in &tables {
        validate::verify_complete(table)
            .unwrap_or_else(|e| panic!("{}: {}", table.tag(), e));
        // No orphan keys either: the parse boundary already rejects them,
        // so the key count must match exactly.
        assert_eq!(table.len(), LocaleKey::ALL.len());
    }
}

#[test]
fn every_key_resolves_to_non_empty_text() {
    for table in embedded_tables() {
        for key in LocaleKey::ALL {
            let text = table
                .lookup(key)
                .unwrap_or_else(|e| panic!("lookup failed: {}", e));
            assert!(!text.is_empty(), "{}: empty text for {}", table.tag(), key);
        }
    }
}

#[test]
fn config_filename_token_is_never_translated() {
    for table in embedded_tables() {
        let prompt = table
            .lookup(LocaleKey::ProjectCreateConfigWhereNotFound)
            .expect("prompt exists");
        assert!(
            prompt.contains("`niva.json`"),
            "{}: prompt lost the literal filename token: {}",
            table.tag(),
            prompt
        );
    }
}

#[test]
fn cancel_and_confirm_are_distinct_in_every_locale() {
    for table in embedded_tables() {
        let cancel = table.lookup(LocaleKey::Cancel).expect("CANCEL exists");
        let confirm = table.lookup(LocaleKey::Confirm).expect("CONFIRM exists");
        assert_ne!(cancel, confirm, "{}: CANCEL collides with CONFIRM", table.tag());
    }
}

#[test]
fn zh_cn_keeps_the_original_strings() {
    let tables = embedded_tables();
    let zh = table_for(&tables, "zh-CN");

    assert_eq!(zh.lookup(LocaleKey::Setting).unwrap(), "设置");
    assert_eq!(zh.lookup(LocaleKey::Cancel).unwrap(), "取消");
    assert_eq!(zh.lookup(LocaleKey::ProjectPath).unwrap(), "项目目录");
    assert_eq!(
        zh.lookup(LocaleKey::ProjectCreateConfigWhereNotFound).unwrap(),
        "未找到 `niva.json` 配置文件，是否创建？"
    );
}

#[test]
fn toml_round_trip_is_lossless_for_embedded_locales() {
    for table in embedded_tables() {
        let serialized = table.to_toml_string().expect("serializes");
        let reparsed = LocaleTable::from_toml_str(table.tag().clone(), &serialized)
            .expect("round-trips");

        assert_eq!(table.len(), reparsed.len());
        for key in LocaleKey::ALL {
            assert_eq!(table.get(key), reparsed.get(key), "mismatch for {}", key);
        }
    }
}

#[test]
fn language_change_via_config() {
    let dir = tempdir().expect("failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    let initial = config::Config {
        language: Some("en-US".to_string()),
    };
    config::save_to_path(&initial, &config_path).expect("failed to write config");

    let loaded = config::load_from_path(&config_path).expect("failed to load config");
    let registry = LocaleRegistry::new(None, &loaded).expect("registry builds");
    assert_eq!(registry.current_locale().to_string(), "en-US");
    assert_eq!(registry.tr(LocaleKey::Cancel), "Cancel");

    let chinese = config::Config {
        language: Some("zh-CN".to_string()),
    };
    config::save_to_path(&chinese, &config_path).expect("failed to write config");

    let loaded = config::load_from_path(&config_path).expect("failed to load config");
    let registry = LocaleRegistry::new(None, &loaded).expect("registry builds");
    assert_eq!(registry.current_locale().to_string(), "zh-CN");
    assert_eq!(registry.tr(LocaleKey::Cancel), "取消");
}

#[test]
fn cli_language_overrides_config() {
    let config = config::Config {
        language: Some("en-US".to_string()),
    };
    let registry =
        LocaleRegistry::new(Some("zh-CN".to_string()), &config).expect("registry builds");
    assert_eq!(registry.current_locale().to_string(), "zh-CN");
}

#[test]
fn runtime_locale_switch_changes_lookups() {
    let config = config::Config {
        language: Some("en-US".to_string()),
    };
    let mut registry = LocaleRegistry::new(None, &config).expect("registry builds");
    assert_eq!(registry.tr(LocaleKey::Save), "Save");

    let zh: LanguageIdentifier = "zh-CN".parse().expect("valid tag");
    registry.set_locale(zh);
    assert_eq!(registry.tr(LocaleKey::Save), "保存");
}
