//! Background fetching.
//!
//! Each submitted query gets its own worker thread, which calls the
//! configured [`StoryFetcher`] once and sends exactly one [`FetchMsg`] back to
//! the UI thread over an [`mpsc`] channel.
//!
//! There is no cancellation: a superseded request keeps running and still
//! reports. Reconciling overlapping completions is the state machine's job
//! (see [`crate::stories::FencePolicy`]).

use std::sync::mpsc;
use std::sync::Arc;
use std::thread;

use crate::query::QueryTarget;
use crate::source::{Story, StoryFetcher};

/// A query the orchestrator wants run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub generation: u64,
    pub target: QueryTarget,
}

/// How a request ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    Stories(Vec<Story>),
    /// The fetch failed; carries the error description.
    Failed(String),
}

/// Messages sent from a fetch worker to the UI thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchMsg {
    pub generation: u64,
    pub outcome: FetchOutcome,
}

/// Starts fetches on behalf of the orchestrator.
pub trait Dispatch {
    fn dispatch(&self, request: FetchRequest);
}

/// Runs every request on a fresh thread.
pub struct FetchWorker {
    fetcher: Arc<dyn StoryFetcher>,
    tx: mpsc::Sender<FetchMsg>,
}

impl FetchWorker {
    /// Create a worker and the receiver the main loop should drain on every
    /// tick.
    pub fn new(fetcher: Arc<dyn StoryFetcher>) -> (Self, mpsc::Receiver<FetchMsg>) {
        let (tx, rx) = mpsc::channel();
        (Self { fetcher, tx }, rx)
    }
}

impl Dispatch for FetchWorker {
    fn dispatch(&self, request: FetchRequest) {
        let fetcher = Arc::clone(&self.fetcher);
        let tx = self.tx.clone();

        thread::spawn(move || {
            let FetchRequest { generation, target } = request;
            tracing::debug!(generation, url = %target, source = fetcher.name(), "fetch started");

            let outcome = match fetcher.fetch(&target) {
                Ok(stories) => {
                    tracing::debug!(generation, count = stories.len(), "fetch succeeded");
                    FetchOutcome::Stories(stories)
                }
                Err(e) => FetchOutcome::Failed(format!("{}: {e}", fetcher.name())),
            };

            // If the receiver is gone the UI has exited; nothing to report to.
            let _ = tx.send(FetchMsg { generation, outcome });
        });
    }
}
