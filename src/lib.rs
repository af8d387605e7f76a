//! Map Manager Strings
//!
//! Display text for the map manager Wi-Fi upload page, with typed lookup,
//! export to the page's script and JSON formats, and locale coverage checks.

pub mod config;
pub mod error;
pub mod export;
pub mod locale;
pub mod strings;

pub use error::{Error, Result};
pub use strings::{StringKey, StringTable, get_string};
