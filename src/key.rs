// SPDX-License-Identifier: MPL-2.0
//! The closed set of UI label identifiers.
//!
//! Every locale table maps each of these keys to a display string. The set is
//! shared across all locales; adding a variant here requires adding the
//! matching entry to every file under `locales/`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::LocaleError;

/// Identifier naming one translatable UI string.
///
/// The canonical wire name is the SCREAMING_SNAKE_CASE form used in the
/// locale files (e.g. [`LocaleKey::ProjectPath`] is `PROJECT_PATH`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LocaleKey {
    Locale,
    Setting,
    BugCoffee,
    Confirm,
    Cancel,
    OpenProject,
    NewProject,
    UploadTips,
    ClearHistory,
    Tips,
    DeleteConfirm,
    IconFail,
    IconLoading,
    ProjectPath,
    LastModified,
    Debug,
    Build,
    Refresh,
    BasicInfo,
    ProjectName,
    DebugInfo,
    ProjectInfo,
    BuildInfo,
    ProjectConfig,
    ReadConfigFailed,
    ConfigFormatError,
    ConfigSaveFailed,
    Save,
    Reset,
    SearchPlaceholder,
    Unsaved,
    Documents,
    Error,
    Warning,
    Open,
    ProjectCreateConfigWhereNotFound,
    ResourcePath,
    Entry,
    Default,
    Icon,
    ConfigFilePath,
}

impl LocaleKey {
    /// Every key, in the order the reference locale lists them.
    pub const ALL: [LocaleKey; 41] = [
        LocaleKey::Locale,
        LocaleKey::Setting,
        LocaleKey::BugCoffee,
        LocaleKey::Confirm,
        LocaleKey::Cancel,
        LocaleKey::OpenProject,
        LocaleKey::NewProject,
        LocaleKey::UploadTips,
        LocaleKey::ClearHistory,
        LocaleKey::Tips,
        LocaleKey::DeleteConfirm,
        LocaleKey::IconFail,
        LocaleKey::IconLoading,
        LocaleKey::ProjectPath,
        LocaleKey::LastModified,
        LocaleKey::Debug,
        LocaleKey::Build,
        LocaleKey::Refresh,
        LocaleKey::BasicInfo,
        LocaleKey::ProjectName,
        LocaleKey::DebugInfo,
        LocaleKey::ProjectInfo,
        LocaleKey::BuildInfo,
        LocaleKey::ProjectConfig,
        LocaleKey::ReadConfigFailed,
        LocaleKey::ConfigFormatError,
        LocaleKey::ConfigSaveFailed,
        LocaleKey::Save,
        LocaleKey::Reset,
        LocaleKey::SearchPlaceholder,
        LocaleKey::Unsaved,
        LocaleKey::Documents,
        LocaleKey::Error,
        LocaleKey::Warning,
        LocaleKey::Open,
        LocaleKey::ProjectCreateConfigWhereNotFound,
        LocaleKey::ResourcePath,
        LocaleKey::Entry,
        LocaleKey::Default,
        LocaleKey::Icon,
        LocaleKey::ConfigFilePath,
    ];

    /// Canonical name as it appears in the locale files.
    pub fn as_str(&self) -> &'static str {
        match self {
            LocaleKey::Locale => "LOCALE",
            LocaleKey::Setting => "SETTING",
            LocaleKey::BugCoffee => "BUG_COFFEE",
            LocaleKey::Confirm => "CONFIRM",
            LocaleKey::Cancel => "CANCEL",
            LocaleKey::OpenProject => "OPEN_PROJECT",
            LocaleKey::NewProject => "NEW_PROJECT",
            LocaleKey::UploadTips => "UPLOAD_TIPS",
            LocaleKey::ClearHistory => "CLEAR_HISTORY",
            LocaleKey::Tips => "TIPS",
            LocaleKey::DeleteConfirm => "DELETE_CONFIRM",
            LocaleKey::IconFail => "ICON_FAIL",
            LocaleKey::IconLoading => "ICON_LOADING",
            LocaleKey::ProjectPath => "PROJECT_PATH",
            LocaleKey::LastModified => "LAST_MODIFIED",
            LocaleKey::Debug => "DEBUG",
            LocaleKey::Build => "BUILD",
            LocaleKey::Refresh => "REFRESH",
            LocaleKey::BasicInfo => "BASIC_INFO",
            LocaleKey::ProjectName => "PROJECT_NAME",
            LocaleKey::DebugInfo => "DEBUG_INFO",
            LocaleKey::ProjectInfo => "PROJECT_INFO",
            LocaleKey::BuildInfo => "BUILD_INFO",
            LocaleKey::ProjectConfig => "PROJECT_CONFIG",
            LocaleKey::ReadConfigFailed => "READ_CONFIG_FAILED",
            LocaleKey::ConfigFormatError => "CONFIG_FORMAT_ERROR",
            LocaleKey::ConfigSaveFailed => "CONFIG_SAVE_FAILED",
            LocaleKey::Save => "SAVE",
            LocaleKey::Reset => "RESET",
            LocaleKey::SearchPlaceholder => "SEARCH_PLACEHOLDER",
            LocaleKey::Unsaved => "UNSAVED",
            LocaleKey::Documents => "DOCUMENTS",
            LocaleKey::Error => "ERROR",
            LocaleKey::Warning => "WARNING",
            LocaleKey::Open => "OPEN",
            LocaleKey::ProjectCreateConfigWhereNotFound => "PROJECT_CREATE_CONFIG_WHERE_NOT_FOUND",
            LocaleKey::ResourcePath => "RESOURCE_PATH",
            LocaleKey::Entry => "ENTRY",
            LocaleKey::Default => "DEFAULT",
            LocaleKey::Icon => "ICON",
            LocaleKey::ConfigFilePath => "CONFIG_FILE_PATH",
        }
    }
}

impl fmt::Display for LocaleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LocaleKey {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LocaleKey::ALL
            .iter()
            .find(|key| key.as_str() == s)
            .copied()
            .ok_or_else(|| LocaleError::UnknownKey {
                locale: String::new(),
                key: s.to_string(),
            })
    }
}
