//! Persisted preferences.
//!
//! The only preference is the last search term, stored under
//! [`SEARCH_KEY`]. Losing it is not a correctness problem for the running
//! session, so [`SearchPreference`] logs store failures and carries on.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::PathBuf;

use thiserror::Error;

/// Key the current search term is stored under.
pub const SEARCH_KEY: &str = "search";

/// Term used when nothing has been stored yet.
pub const DEFAULT_TERM: &str = "React";

#[derive(Error, Debug)]
pub enum PrefsError {
    #[error("preference file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("preference file {path} is not a JSON object of strings: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// A synchronous string key-value store.
pub trait PreferenceStore: Send {
    fn get(&self, key: &str) -> Result<Option<String>, PrefsError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), PrefsError>;
}

/// Keeps values for the life of the process only.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, PrefsError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PrefsError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// A flat JSON object on disk, e.g. `{"search":"React"}`.
///
/// The file is read on every `get` and rewritten on every `set`, so several
/// processes sharing it see each other's last write.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, PrefsError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(source) => {
                return Err(PrefsError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };
        serde_json::from_str(&text).map_err(|source| PrefsError::Json {
            path: self.path.clone(),
            source,
        })
    }
}

impl PreferenceStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, PrefsError> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PrefsError> {
        // A corrupt file is replaced rather than blocking every later write.
        let mut values = self.read_all().unwrap_or_default();
        values.insert(key.to_string(), value.to_string());

        let io_err = |source: std::io::Error| PrefsError::Io {
            path: self.path.clone(),
            source,
        };
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).map_err(&io_err)?;
        }
        let text = serde_json::to_string_pretty(&values).map_err(|source| PrefsError::Json {
            path: self.path.clone(),
            source,
        })?;
        fs::write(&self.path, text).map_err(io_err)
    }
}

/// The search-term view of a [`PreferenceStore`].
pub struct SearchPreference {
    store: Box<dyn PreferenceStore>,
}

impl SearchPreference {
    pub fn new(store: Box<dyn PreferenceStore>) -> Self {
        Self { store }
    }

    /// The stored term, or `default` when none is stored or the store fails.
    pub fn load(&self, default: &str) -> String {
        match self.store.get(SEARCH_KEY) {
            Ok(Some(term)) => {
                tracing::debug!(term = %term, "loaded persisted search term");
                term
            }
            Ok(None) => default.to_string(),
            Err(e) => {
                tracing::warn!(error = %e, "failed to read search term; using default");
                default.to_string()
            }
        }
    }

    /// Persist `term`. Failures are logged, never returned.
    pub fn save(&mut self, term: &str) {
        if let Err(e) = self.store.set(SEARCH_KEY, term) {
            tracing::warn!(error = %e, "failed to persist search term");
        }
    }
}
