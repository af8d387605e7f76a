//! Upload page string table.
//!
//! This module separates data from lookup:
//! - `string_data` - The static (name, text) array
//! - [`StringKey`] - Closed set of key names, one variant per entry
//! - [`StringTable`] - Read-only accessor shared by the whole process

pub mod string_data;

use std::fmt;
use std::str::FromStr;

use phf::phf_map;
use string_data::{StringDef, UPLOAD_STRINGS};

use crate::error::{Error, Result};

/// Key of an upload page string.
///
/// Discriminants follow the order of [`UPLOAD_STRINGS`], so every variant
/// has exactly one entry and `text()` cannot fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StringKey {
    WifiTransTitle,
    FilesOnDevice,
    Filename,
    FileSize,
    FileOper,
    ConfirmDeleteBook,
    DownloadFile,
    DeleteFile,
    UseOneBrowser,
    UploadFailed,
    UnsupportedFileType,
    FileInQueue,
    FileExists,
    YouChoose,
    ChosenFileCount,
    ValidChosenFileCount,
    Cancel,
    SelectYourFiles,
    SupportedFileTypes,
    CannotConnectServer,
    DragToHere,
    SelectButtonLable1,
    SelectButtonLable2,
    SelectButtonLable,
    WifiAvailable,
    ExceedsFileSize,
    UnsupportedBrowserType,
}

const _: () = assert!(UPLOAD_STRINGS.len() == StringKey::ALL.len());

/// Key name -> key (compile-time perfect hash map).
static KEYS_BY_NAME: phf::Map<&'static str, StringKey> = phf_map! {
    "WIFI_TRANS_TITLE" => StringKey::WifiTransTitle,
    "FILES_ON_DEVICE" => StringKey::FilesOnDevice,
    "FILENAME" => StringKey::Filename,
    "FILE_SIZE" => StringKey::FileSize,
    "FILE_OPER" => StringKey::FileOper,
    "CONFIRM_DELETE_BOOK" => StringKey::ConfirmDeleteBook,
    "DOWNLOAD_FILE" => StringKey::DownloadFile,
    "DELETE_FILE" => StringKey::DeleteFile,
    "USE_ONE_BROWSER" => StringKey::UseOneBrowser,
    "UPLOAD_FAILED" => StringKey::UploadFailed,
    "UNSUPPORTED_FILE_TYPE" => StringKey::UnsupportedFileType,
    "FILE_IN_QUEUE" => StringKey::FileInQueue,
    "FILE_EXISTS" => StringKey::FileExists,
    "YOU_CHOOSE" => StringKey::YouChoose,
    "CHOSEN_FILE_COUNT" => StringKey::ChosenFileCount,
    "VALID_CHOSEN_FILE_COUNT" => StringKey::ValidChosenFileCount,
    "CANCEL" => StringKey::Cancel,
    "SELECT_YOUR_FILES" => StringKey::SelectYourFiles,
    "SUPPORTED_FILE_TYPES" => StringKey::SupportedFileTypes,
    "CANNOT_CONNECT_SERVER" => StringKey::CannotConnectServer,
    "DRAG_TO_HERE" => StringKey::DragToHere,
    "SELECT_BUTTON_LABLE1" => StringKey::SelectButtonLable1,
    "SELECT_BUTTON_LABLE2" => StringKey::SelectButtonLable2,
    "SELECT_BUTTON_LABLE" => StringKey::SelectButtonLable,
    "WIFI_AVAILABLE" => StringKey::WifiAvailable,
    "EXCEEDS_FILE_SIZE" => StringKey::ExceedsFileSize,
    "UNSUPPORTED_BROWSER_TYPE" => StringKey::UnsupportedBrowserType,
};

impl StringKey {
    /// All keys in declaration order.
    pub const ALL: [StringKey; 27] = [
        StringKey::WifiTransTitle,
        StringKey::FilesOnDevice,
        StringKey::Filename,
        StringKey::FileSize,
        StringKey::FileOper,
        StringKey::ConfirmDeleteBook,
        StringKey::DownloadFile,
        StringKey::DeleteFile,
        StringKey::UseOneBrowser,
        StringKey::UploadFailed,
        StringKey::UnsupportedFileType,
        StringKey::FileInQueue,
        StringKey::FileExists,
        StringKey::YouChoose,
        StringKey::ChosenFileCount,
        StringKey::ValidChosenFileCount,
        StringKey::Cancel,
        StringKey::SelectYourFiles,
        StringKey::SupportedFileTypes,
        StringKey::CannotConnectServer,
        StringKey::DragToHere,
        StringKey::SelectButtonLable1,
        StringKey::SelectButtonLable2,
        StringKey::SelectButtonLable,
        StringKey::WifiAvailable,
        StringKey::ExceedsFileSize,
        StringKey::UnsupportedBrowserType,
    ];

    fn def(self) -> StringDef {
        UPLOAD_STRINGS[self as usize]
    }

    /// Key name as the page script spells it (e.g. `SELECT_BUTTON_LABLE1`).
    pub fn name(self) -> &'static str {
        self.def().0
    }

    /// Display text for this key.
    pub fn text(self) -> &'static str {
        self.def().1
    }

    /// Resolve a key name. Names are case-sensitive.
    pub fn lookup(name: &str) -> Option<StringKey> {
        KEYS_BY_NAME.get(name).copied()
    }
}

impl fmt::Display for StringKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StringKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        StringKey::lookup(s).ok_or_else(|| Error::MissingKey(s.to_string()))
    }
}

/// Read-only string table for the upload page.
///
/// There is a single instance for the process, see [`StringTable::global`].
/// All data is `'static`, so the table is shared across threads without
/// locking.
#[derive(Debug)]
pub struct StringTable {
    entries: &'static [StringDef],
}

static TABLE: StringTable = StringTable {
    entries: UPLOAD_STRINGS,
};

impl StringTable {
    /// The process-wide table.
    pub fn global() -> &'static StringTable {
        &TABLE
    }

    /// Get the display text for a key name.
    ///
    /// Unknown names are reported as [`Error::MissingKey`] rather than an
    /// empty string.
    pub fn get(&self, name: &str) -> Result<&'static str> {
        match StringKey::lookup(name) {
            Some(key) => Ok(self.text(key)),
            None => {
                tracing::debug!("Missing string key: {}", name);
                Err(Error::MissingKey(name.to_string()))
            }
        }
    }

    /// Get the display text for a typed key.
    pub fn text(&self, key: StringKey) -> &'static str {
        self.entries[key as usize].1
    }

    pub fn contains(&self, name: &str) -> bool {
        KEYS_BY_NAME.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(key, text)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (StringKey, &'static str)> + '_ {
        StringKey::ALL.into_iter().map(move |key| (key, self.text(key)))
    }
}

/// Get an upload page string by key name.
pub fn get_string(name: &str) -> Result<&'static str> {
    StringTable::global().get(name)
}
