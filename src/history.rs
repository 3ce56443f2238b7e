//! Recent-search tracking.
//!
//! Every submitted term is appended to a raw log. The history buttons are
//! derived from that log on demand: adjacent repeats collapse into one entry,
//! and the newest entry is left out because it is already the active term.

/// How many history entries the UI offers for quick re-search.
pub const RECENT_LIMIT: usize = 5;

/// Ordered log of submitted search terms for the current session.
#[derive(Debug, Default, Clone)]
pub struct SearchHistory {
    raw: Vec<String>,
}

impl SearchHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a submitted term. The log never shrinks.
    pub fn record(&mut self, term: impl Into<String>) {
        self.raw.push(term.into());
    }

    /// The log with adjacent duplicates collapsed.
    ///
    /// Only neighbours are compared, so `React, Redux, React` keeps all
    /// three entries.
    pub fn collapsed(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::with_capacity(self.raw.len());
        for term in &self.raw {
            if out.last() != Some(&term.as_str()) {
                out.push(term);
            }
        }
        out
    }

    /// Up to `k` collapsed entries preceding the most recent one, oldest
    /// first.
    pub fn recent(&self, k: usize) -> Vec<&str> {
        let mut collapsed = self.collapsed();
        collapsed.pop();
        let skip = collapsed.len().saturating_sub(k);
        collapsed.split_off(skip)
    }

    /// The most recently recorded term.
    pub fn last(&self) -> Option<&str> {
        self.raw.last().map(String::as_str)
    }

    /// Number of submissions recorded, repeats included.
    pub fn len_raw(&self) -> usize {
        self.raw.len()
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }
}
