//! Render the string table for the upload page.
//!
//! Two formats are produced:
//! - `Js` - the browser script the page loads (`var STRINGS = {}; STRINGS.KEY = '...';`)
//! - `Json` - a flat locale object, keys in declaration order

use std::fmt::Write;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::strings::{StringKey, StringTable};

/// Output format for [`render`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Js,
    Json,
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Js => f.write_str("js"),
            ExportFormat::Json => f.write_str("json"),
        }
    }
}

/// Global object name the page script expects.
pub const DEFAULT_GLOBAL_NAME: &str = "STRINGS";

/// Options shared by all formats.
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Name of the global object in the JS script.
    pub global_name: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            global_name: DEFAULT_GLOBAL_NAME.to_string(),
        }
    }
}

/// Render the whole table.
pub fn render(format: ExportFormat, table: &StringTable, options: &ExportOptions) -> Result<String> {
    render_entries(format, table.iter(), options)
}

/// Render a sequence of entries. Order is preserved.
pub fn render_entries(
    format: ExportFormat,
    entries: impl IntoIterator<Item = (StringKey, &'static str)>,
    options: &ExportOptions,
) -> Result<String> {
    match format {
        ExportFormat::Js => {
            validate_global_name(&options.global_name)?;
            Ok(render_js(entries, &options.global_name))
        }
        ExportFormat::Json => render_json(entries),
    }
}

/// Check that `name` is a plain JS identifier: `[A-Za-z_$][A-Za-z0-9_$]*`.
pub fn validate_global_name(name: &str) -> Result<()> {
    let mut chars = name.chars();
    let valid = match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
        }
        _ => false,
    };
    if valid {
        Ok(())
    } else {
        Err(Error::InvalidGlobalName(name.to_string()))
    }
}

fn render_js(entries: impl IntoIterator<Item = (StringKey, &'static str)>, global: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "var {} = {{}};", global);
    out.push('\n');
    for (key, text) in entries {
        let _ = writeln!(out, "{}.{} = '{}';", global, key.name(), escape_js(text));
    }
    out
}

fn render_json(entries: impl IntoIterator<Item = (StringKey, &'static str)>) -> Result<String> {
    let map: serde_json::Map<String, serde_json::Value> = entries
        .into_iter()
        .map(|(key, text)| (key.name().to_string(), serde_json::Value::from(text)))
        .collect();
    let mut out = serde_json::to_string_pretty(&map)?;
    out.push('\n');
    Ok(out)
}

/// Escape text for a single-quoted JS string literal.
fn escape_js(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('\'', "\\'")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}

/// Render the table and write it to `path`, creating parent directories.
pub fn write_to(
    path: &Path,
    format: ExportFormat,
    table: &StringTable,
    options: &ExportOptions,
) -> Result<()> {
    let rendered = render(format, table, options)?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, rendered)?;
    tracing::info!("Exported {} strings to {}", table.len(), path.display());
    Ok(())
}
