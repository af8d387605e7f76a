//! Map Manager Strings CLI.
//!
//! Usage:
//!   mmap-strings get FILENAME              # Print one string
//!   mmap-strings list                      # Print every key and its text
//!   mmap-strings export -o scripts/lang.js # Regenerate the page script
//!   mmap-strings export --format json      # Print the table as a JSON locale
//!   mmap-strings check locale/zh_CN.json   # Report missing or stale keys
//!   mmap-strings config set --format json  # Change the export defaults

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use map_manager_strings::config::StringsConfig;
use map_manager_strings::export::{self, ExportFormat};
use map_manager_strings::locale::{self, LocaleFile};
use map_manager_strings::{Result, StringTable};

#[derive(Parser)]
#[command(name = "mmap-strings")]
#[command(about = "Display strings for the map manager upload page")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the text for a key
    Get {
        /// Key name (case-sensitive, e.g. FILENAME)
        key: String,
    },

    /// List all keys with their text
    List {
        /// Print key names only
        #[arg(long)]
        names_only: bool,
    },

    /// Render the table as the page script or a JSON locale
    Export {
        /// Output format (defaults to the configured format)
        #[arg(short, long, value_enum)]
        format: Option<ExportFormat>,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Name of the global object in the script
        #[arg(long)]
        global: Option<String>,
    },

    /// Check a JSON locale file for missing, unknown, duplicate, or empty keys
    Check {
        /// Locale file path
        file: PathBuf,
    },

    /// Show or change the saved export defaults
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the config file path and current settings
    Show,
    /// Update settings and save them
    Set {
        /// Default export format
        #[arg(short, long, value_enum)]
        format: Option<ExportFormat>,

        /// Default global object name for the script
        #[arg(long)]
        global: Option<String>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let table = StringTable::global();

    let result = match cli.command {
        Commands::Get { key } => print_string(table, &key),
        Commands::List { names_only } => {
            list_strings(table, names_only);
            Ok(true)
        }
        Commands::Export { format, output, global } => run_export(table, format, output, global),
        Commands::Check { file } => check_locale(table, &file),
        Commands::Config { action } => run_config(action),
    };

    match result {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

// ── Subcommand handlers ─────────────────────────────────────────────

fn print_string(table: &StringTable, key: &str) -> Result<bool> {
    println!("{}", table.get(key)?);
    Ok(true)
}

fn list_strings(table: &StringTable, names_only: bool) {
    for (key, text) in table.iter() {
        if names_only {
            println!("{}", key);
        } else {
            println!("{}\t{}", key, text.replace('\n', "\\n"));
        }
    }
}

fn run_export(
    table: &StringTable,
    format: Option<ExportFormat>,
    output: Option<PathBuf>,
    global: Option<String>,
) -> Result<bool> {
    let config = StringsConfig::load();
    let format = format.unwrap_or(config.export_format);
    let mut options = config.export_options();
    if let Some(name) = global {
        options.global_name = name;
    }

    match output {
        Some(path) => export::write_to(&path, format, table, &options)?,
        None => print!("{}", export::render(format, table, &options)?),
    }
    Ok(true)
}

fn check_locale(table: &StringTable, path: &Path) -> Result<bool> {
    let file = LocaleFile::load(path)?;
    let report = locale::check(table, &file);
    print!("{}", report);
    Ok(report.is_complete())
}

fn run_config(action: ConfigAction) -> Result<bool> {
    let mut config = StringsConfig::load();
    if let ConfigAction::Set { format, global } = action {
        config.apply(format, global)?;
        config.save()?;
    }
    println!("path: {}", config.path().display());
    println!("format: {}", config.export_format);
    println!("global: {}", config.global_name);
    Ok(true)
}
