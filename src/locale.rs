//! Coverage check of external locale files against the built-in table.
//!
//! A locale file is a flat JSON object mapping key names to display text,
//! the same shape [`crate::export`] writes for `ExportFormat::Json`.
//! Checking one reports keys it lacks, keys the table does not know about
//! (stale references left behind by a rename), keys listed more than once,
//! and keys with empty text.

use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use serde_json::error::Category;

use crate::error::{Error, Result};
use crate::strings::{StringKey, StringTable};

/// Object members in document order, duplicates kept.
struct RawEntries(Vec<(String, serde_json::Value)>);

impl<'de> Deserialize<'de> for RawEntries {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = RawEntries;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object of key names to text")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> std::result::Result<RawEntries, A::Error> {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry::<String, serde_json::Value>()? {
                    entries.push(entry);
                }
                Ok(RawEntries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}

/// A parsed locale file. Entry order follows the file and repeated keys are
/// kept; [`LocaleFile::get`] returns the first occurrence.
#[derive(Debug, Clone)]
pub struct LocaleFile {
    pub path: PathBuf,
    pub entries: Vec<(String, String)>,
}

impl LocaleFile {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        // Strip UTF-8 BOM if present
        let contents = contents.strip_prefix('\u{feff}').unwrap_or(&contents);
        Self::parse(path.to_path_buf(), contents)
    }

    /// Parse from an in-memory JSON document.
    pub fn from_json(json: &str) -> Result<Self> {
        Self::parse(PathBuf::from("<memory>"), json)
    }

    fn parse(path: PathBuf, json: &str) -> Result<Self> {
        let raw: RawEntries = match serde_json::from_str(json) {
            Ok(raw) => raw,
            Err(e) if e.classify() == Category::Data => {
                return Err(Error::InvalidLocale {
                    path,
                    reason: e.to_string(),
                });
            }
            Err(e) => return Err(e.into()),
        };

        let mut entries = Vec::with_capacity(raw.0.len());
        for (key, value) in raw.0 {
            match value {
                serde_json::Value::String(text) => entries.push((key, text)),
                other => {
                    return Err(Error::InvalidLocale {
                        path,
                        reason: format!("value for {} is not a string: {}", key, other),
                    });
                }
            }
        }
        Ok(Self { path, entries })
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Result of [`check`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoverageReport {
    /// Table keys absent from the file.
    pub missing: Vec<StringKey>,
    /// File keys the table does not define.
    pub unknown: Vec<String>,
    /// Keys that appear more than once in the file.
    pub duplicate: Vec<String>,
    /// Keys present in the file with empty text.
    pub empty: Vec<StringKey>,
}

impl CoverageReport {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
            && self.unknown.is_empty()
            && self.duplicate.is_empty()
            && self.empty.is_empty()
    }
}

impl fmt::Display for CoverageReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_complete() {
            return writeln!(f, "OK: all keys present");
        }
        for key in &self.missing {
            writeln!(f, "missing: {}", key)?;
        }
        for name in &self.unknown {
            writeln!(f, "unknown: {}", name)?;
        }
        for name in &self.duplicate {
            writeln!(f, "duplicate: {}", name)?;
        }
        for key in &self.empty {
            writeln!(f, "empty:   {}", key)?;
        }
        Ok(())
    }
}

/// Compare a locale file with the table.
///
/// `missing` and `empty` follow table order; `unknown` and `duplicate`
/// follow file order and list each name once.
pub fn check(table: &StringTable, file: &LocaleFile) -> CoverageReport {
    let mut report = CoverageReport::default();

    for (key, _) in table.iter() {
        match file.get(key.name()) {
            None => report.missing.push(key),
            Some(text) if text.is_empty() => report.empty.push(key),
            Some(_) => {}
        }
    }

    let mut seen = HashSet::new();
    let mut repeated = HashSet::new();
    for (name, _) in &file.entries {
        if !seen.insert(name.as_str()) {
            if repeated.insert(name.as_str()) {
                report.duplicate.push(name.clone());
            }
            continue;
        }
        if !table.contains(name) {
            report.unknown.push(name.clone());
        }
    }

    if !report.is_complete() {
        tracing::warn!(
            "Locale {} incomplete: {} missing, {} unknown, {} duplicate, {} empty",
            file.path.display(),
            report.missing.len(),
            report.unknown.len(),
            report.duplicate.len(),
            report.empty.len()
        );
    }
    report
}
