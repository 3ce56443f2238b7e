//! Command-line configuration.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::app::AppOptions;
use crate::prefs::{JsonFileStore, MemoryStore, PreferenceStore, DEFAULT_TERM};
use crate::query::DEFAULT_ENDPOINT;
use crate::stories::FencePolicy;

/// Search Hacker News from the terminal.
#[derive(Parser, Debug)]
#[command(name = "hn-search", version, about)]
pub struct Cli {
    /// Search term for this run; replaces the remembered one.
    pub term: Option<String>,

    /// Search endpoint; the encoded term is appended to it.
    #[arg(long, value_name = "URL", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Term used when none has been remembered yet.
    #[arg(long, value_name = "TERM", default_value = DEFAULT_TERM)]
    pub default_term: String,

    /// Where the last search term is remembered.
    #[arg(long, value_name = "PATH")]
    pub prefs_file: Option<PathBuf>,

    /// Do not read or write the preference file.
    #[arg(long)]
    pub no_persist: bool,

    /// Accept results from superseded searches (the last response to arrive wins).
    #[arg(long)]
    pub legacy_race: bool,

    /// Show every result instead of filtering titles by the current term.
    #[arg(long)]
    pub no_local_filter: bool,

    /// HTTP request timeout.
    #[arg(long, value_name = "SECS", default_value_t = 30)]
    pub timeout_secs: u64,

    /// Log file location.
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

/// Resolved settings for one run.
#[derive(Debug, Clone)]
pub struct Config {
    pub term_override: Option<String>,
    pub app: AppOptions,
    /// `None` keeps preferences in memory.
    pub prefs_file: Option<PathBuf>,
    pub timeout: Duration,
    pub log_file: PathBuf,
}

impl Config {
    /// The preference store this run should use.
    pub fn prefs_store(&self) -> Box<dyn PreferenceStore> {
        match &self.prefs_file {
            Some(path) => Box::new(JsonFileStore::new(path)),
            None => Box::new(MemoryStore::new()),
        }
    }
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        let dir = config_dir();
        let prefs_file = if cli.no_persist {
            None
        } else {
            Some(cli.prefs_file.unwrap_or_else(|| dir.join("preferences.json")))
        };
        let fence = if cli.legacy_race {
            FencePolicy::LastResolvedWins
        } else {
            FencePolicy::Latest
        };

        Config {
            term_override: cli.term,
            app: AppOptions {
                endpoint: cli.endpoint,
                default_term: cli.default_term,
                fence,
                local_filter: !cli.no_local_filter,
            },
            prefs_file,
            timeout: Duration::from_secs(cli.timeout_secs),
            log_file: cli.log_file.unwrap_or_else(|| dir.join("hn-search.log")),
        }
    }
}

/// `<config dir>/hn-search`, or `./hn-search` when the platform has none.
pub fn config_dir() -> PathBuf {
    dirs_next::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("hn-search")
}
