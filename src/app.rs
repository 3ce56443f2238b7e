use ratatui::widgets::ListState;

use crate::fetch::{Dispatch, FetchMsg, FetchOutcome, FetchRequest};
use crate::history::{SearchHistory, RECENT_LIMIT};
use crate::prefs::SearchPreference;
use crate::query::QueryTarget;
use crate::source::Story;
use crate::stories::{Applied, FencePolicy, FetchState, Phase, StoriesAction};
use crate::view::{self, SortKey};

/// Whether keystrokes edit the search term or drive the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Editing,
}

/// Settings the orchestrator needs from the configuration.
#[derive(Debug, Clone)]
pub struct AppOptions {
    pub endpoint: String,
    pub default_term: String,
    pub fence: FencePolicy,
    pub local_filter: bool,
}

/// Owns the search term, the history and the fetch state, and turns user
/// intent into state-machine transitions and fetch requests.
pub struct App {
    search_term: String,
    endpoint: String,
    history: SearchHistory,
    stories: FetchState,
    prefs: SearchPreference,
    dispatcher: Box<dyn Dispatch>,
    /// Last submitted target.
    active: Option<QueryTarget>,
    next_generation: u64,
    pub sort: SortKey,
    pub reverse: bool,
    local_filter: bool,
    /// List selection state for scrolling, indexes into [`App::visible_stories`].
    pub list_state: ListState,
    pub input_mode: InputMode,
    /// Whether the user has requested to quit.
    pub quit: bool,
    /// Last fetch status message.
    pub status: String,
}

impl App {
    /// Seed the search term from the preference store.
    pub fn new(options: AppOptions, prefs: SearchPreference, dispatcher: Box<dyn Dispatch>) -> Self {
        let search_term = prefs.load(&options.default_term);
        tracing::info!(term = %search_term, "initial search term");
        Self {
            search_term,
            endpoint: options.endpoint,
            history: SearchHistory::new(),
            stories: FetchState::new(options.fence),
            prefs,
            dispatcher,
            active: None,
            next_generation: 1,
            sort: SortKey::default(),
            reverse: false,
            local_filter: options.local_filter,
            list_state: ListState::default(),
            input_mode: InputMode::default(),
            quit: false,
            status: String::new(),
        }
    }

    // -- read side -----------------------------------------------------------

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn phase(&self) -> Phase {
        self.stories.phase()
    }

    pub fn stories(&self) -> &FetchState {
        &self.stories
    }

    pub fn active_target(&self) -> Option<&QueryTarget> {
        self.active.as_ref()
    }

    /// Previous searches offered for one-key re-search, oldest first.
    pub fn recent_searches(&self) -> Vec<&str> {
        self.history.recent(RECENT_LIMIT)
    }

    /// Whether a submit would be accepted right now.
    pub fn can_submit(&self) -> bool {
        !self.search_term.trim().is_empty()
    }

    /// Results as displayed: title-filtered by the current term, then sorted.
    pub fn visible_stories(&self) -> Vec<&Story> {
        let data = self.stories.data();
        let mut visible = if self.local_filter {
            view::filter_by_title(data, &self.search_term)
        } else {
            data.iter().collect()
        };
        view::sort_stories(&mut visible, self.sort, self.reverse);
        visible
    }

    pub fn sum_comments(&self) -> u64 {
        view::sum_comments(self.visible_stories())
    }

    pub fn selected_story(&self) -> Option<&Story> {
        let idx = self.list_state.selected()?;
        self.visible_stories().get(idx).copied()
    }

    // -- user intent ---------------------------------------------------------

    /// Replace the current term and persist it.
    pub fn on_input_change(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.prefs.save(&self.search_term);
        self.clamp_selection();
    }

    /// Submit the current term.
    ///
    /// Returns `false`, without touching the state machine, when the term is
    /// blank.
    pub fn on_submit(&mut self) -> bool {
        let Some(target) = QueryTarget::new(&self.endpoint, &self.search_term) else {
            tracing::debug!("ignoring submit with empty search term");
            return false;
        };

        let generation = self.next_generation;
        self.next_generation += 1;

        self.history.record(target.term());
        self.stories.apply(StoriesAction::Start { generation });
        self.status = format!("Searching for \"{}\"", target.term());
        tracing::info!(generation, url = %target, "search submitted");

        self.active = Some(target.clone());
        self.dispatcher.dispatch(FetchRequest { generation, target });
        true
    }

    /// Re-run a search from the history list.
    pub fn on_history_select(&mut self, term: &str) -> bool {
        self.on_input_change(term);
        self.on_submit()
    }

    /// Re-run the `index`-th entry of [`App::recent_searches`].
    pub fn select_recent(&mut self, index: usize) -> bool {
        let Some(term) = self.recent_searches().get(index).map(|t| t.to_string()) else {
            return false;
        };
        self.on_history_select(&term)
    }

    /// Dismiss a story from the current results.
    pub fn on_remove(&mut self, object_id: &str) {
        self.stories.apply(StoriesAction::Remove {
            object_id: object_id.to_string(),
        });
        self.clamp_selection();
    }

    /// Dismiss the highlighted story.
    pub fn remove_selected(&mut self) {
        if let Some(id) = self.selected_story().map(|s| s.object_id.clone()) {
            self.on_remove(&id);
        }
    }

    /// Feed a worker's completion into the state machine.
    pub fn on_fetch_complete(&mut self, msg: FetchMsg) {
        let FetchMsg { generation, outcome } = msg;
        let succeeded = matches!(outcome, FetchOutcome::Stories(_));
        let (action, status) = match outcome {
            FetchOutcome::Stories(stories) => {
                let status = format!("Fetched {} stories", stories.len());
                (StoriesAction::Success { generation, stories }, status)
            }
            FetchOutcome::Failed(reason) => {
                tracing::warn!(generation, error = %reason, "search failed");
                (StoriesAction::Failure { generation }, format!("Error: {reason}"))
            }
        };

        match self.stories.apply(action) {
            Applied::Accepted => {
                self.status = status;
                if succeeded {
                    self.select_first();
                }
                self.clamp_selection();
            }
            Applied::Stale => {
                tracing::debug!(
                    generation,
                    latest = self.stories.latest_generation(),
                    "dropping completion from superseded search"
                );
            }
        }
    }

    // -- sorting -------------------------------------------------------------

    pub fn cycle_sort(&mut self) {
        self.sort = self.sort.next();
    }

    pub fn toggle_reverse(&mut self) {
        self.reverse = !self.reverse;
    }

    // -- navigation ----------------------------------------------------------

    fn visible_len(&self) -> usize {
        self.visible_stories().len()
    }

    fn clamp_selection(&mut self) {
        let len = self.visible_len();
        match self.list_state.selected() {
            _ if len == 0 => self.list_state.select(None),
            Some(i) if i >= len => self.list_state.select(Some(len - 1)),
            _ => {}
        }
    }

    pub fn select_next(&mut self) {
        let len = self.visible_len();
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => (i + 1).min(len - 1),
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    pub fn select_previous(&mut self) {
        if self.visible_len() == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => i.saturating_sub(1),
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    pub fn select_first(&mut self) {
        if self.visible_len() > 0 {
            self.list_state.select(Some(0));
        }
    }

    pub fn select_last(&mut self) {
        let len = self.visible_len();
        if len > 0 {
            self.list_state.select(Some(len - 1));
        }
    }
}
