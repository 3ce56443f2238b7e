//! The fetch state machine.
//!
//! [`FetchState`] owns the result list and the lifecycle of the query that
//! produced it. It only changes through [`FetchState::apply`], which takes a
//! [`StoriesAction`]:
//!
//! ```text
//!             Start               Success
//!   Idle ─────────────► Loading ───────────► Success
//!   Success ──────────►    │
//!   Failure ──────────►    └───────────────► Failure
//!                              Failure
//! ```
//!
//! `Remove` filters the list in every phase and never changes the phase.
//!
//! Each `Start` carries a generation number. With [`FencePolicy::Latest`]
//! a completion whose generation is not the newest started one is dropped,
//! so a slow superseded request cannot overwrite a newer result.
//! [`FencePolicy::LastResolvedWins`] accepts every completion: whichever
//! request resolves last decides `data`.

use crate::source::Story;

/// Discrete state of the current query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Success,
    Failure,
}

/// How completions from overlapping requests are reconciled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FencePolicy {
    /// Ignore completions from any request but the latest started one.
    #[default]
    Latest,
    /// Accept every completion; the last one to arrive wins.
    LastResolvedWins,
}

/// Transitions accepted by [`FetchState::apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoriesAction {
    Start { generation: u64 },
    Success { generation: u64, stories: Vec<Story> },
    Failure { generation: u64 },
    Remove { object_id: String },
}

/// What [`FetchState::apply`] did with an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    Accepted,
    /// A completion from a superseded request, dropped by the fence.
    Stale,
}

/// Result list plus the phase of the query that produced it.
#[derive(Debug, Clone, Default)]
pub struct FetchState {
    phase: Phase,
    data: Vec<Story>,
    policy: FencePolicy,
    /// Generation of the most recent `Start`; 0 before any.
    latest: u64,
}

impl FetchState {
    pub fn new(policy: FencePolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn data(&self) -> &[Story] {
        &self.data
    }

    pub fn latest_generation(&self) -> u64 {
        self.latest
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    pub fn is_error(&self) -> bool {
        self.phase == Phase::Failure
    }

    /// Apply one transition.
    pub fn apply(&mut self, action: StoriesAction) -> Applied {
        match action {
            StoriesAction::Start { generation } => {
                self.latest = self.latest.max(generation);
                self.phase = Phase::Loading;
                Applied::Accepted
            }
            StoriesAction::Success { generation, stories } => {
                if self.is_stale(generation) {
                    return Applied::Stale;
                }
                self.data = stories;
                self.phase = Phase::Success;
                Applied::Accepted
            }
            StoriesAction::Failure { generation } => {
                if self.is_stale(generation) {
                    return Applied::Stale;
                }
                self.phase = Phase::Failure;
                Applied::Accepted
            }
            StoriesAction::Remove { object_id } => {
                self.data.retain(|story| story.object_id != object_id);
                Applied::Accepted
            }
        }
    }

    fn is_stale(&self, generation: u64) -> bool {
        match self.policy {
            FencePolicy::Latest => generation != self.latest,
            FencePolicy::LastResolvedWins => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::fixtures::{make_story, story_one, story_two};

    fn stories() -> Vec<Story> {
        vec![story_one(), story_two()]
    }

    fn loaded(policy: FencePolicy) -> FetchState {
        let mut state = FetchState::new(policy);
        state.apply(StoriesAction::Start { generation: 1 });
        state.apply(StoriesAction::Success {
            generation: 1,
            stories: stories(),
        });
        state
    }

    #[test]
    fn new_state_is_idle_and_empty() {
        let state = FetchState::new(FencePolicy::Latest);
        assert_eq!(state.phase(), Phase::Idle);
        assert!(state.data().is_empty());
        assert!(!state.is_loading());
        assert!(!state.is_error());
    }

    #[test]
    fn start_marks_loading_without_touching_data() {
        let mut state = loaded(FencePolicy::Latest);
        state.apply(StoriesAction::Start { generation: 2 });

        assert!(state.is_loading());
        assert!(!state.is_error());
        assert_eq!(state.data(), stories().as_slice());
    }

    #[test]
    fn start_clears_error_flag() {
        let mut state = FetchState::new(FencePolicy::Latest);
        state.apply(StoriesAction::Start { generation: 1 });
        state.apply(StoriesAction::Failure { generation: 1 });
        assert!(state.is_error());

        state.apply(StoriesAction::Start { generation: 2 });
        assert!(!state.is_error());
        assert!(state.is_loading());
    }

    #[test]
    fn success_replaces_data_exactly() {
        let mut state = loaded(FencePolicy::Latest);
        let replacement = vec![make_story("3", "JavaScript", "Brendan Eich", 15, 10)];

        state.apply(StoriesAction::Start { generation: 2 });
        state.apply(StoriesAction::Success {
            generation: 2,
            stories: replacement.clone(),
        });

        assert_eq!(state.phase(), Phase::Success);
        assert_eq!(state.data(), replacement.as_slice());
    }

    #[test]
    fn failure_keeps_previous_data() {
        let mut state = loaded(FencePolicy::Latest);
        state.apply(StoriesAction::Start { generation: 2 });
        state.apply(StoriesAction::Failure { generation: 2 });

        assert_eq!(state.phase(), Phase::Failure);
        assert!(state.is_error());
        assert!(!state.is_loading());
        assert_eq!(state.data(), stories().as_slice());
    }

    #[test]
    fn remove_filters_matching_story() {
        let mut state = loaded(FencePolicy::Latest);
        state.apply(StoriesAction::Remove {
            object_id: "0".into(),
        });

        assert_eq!(state.data(), &[story_two()]);
        assert_eq!(state.phase(), Phase::Success);
    }

    #[test]
    fn remove_unknown_id_is_noop() {
        let mut state = loaded(FencePolicy::Latest);
        state.apply(StoriesAction::Remove {
            object_id: "404".into(),
        });
        assert_eq!(state.data(), stories().as_slice());
    }

    #[test]
    fn remove_is_idempotent_and_keeps_phase() {
        let mut state = loaded(FencePolicy::Latest);
        state.apply(StoriesAction::Start { generation: 2 });
        for _ in 0..3 {
            state.apply(StoriesAction::Remove {
                object_id: "1".into(),
            });
            assert!(state.data().iter().all(|s| s.object_id != "1"));
        }
        assert_eq!(state.data(), &[story_one()]);
        assert_eq!(state.phase(), Phase::Loading);
    }

    #[test]
    fn remove_on_idle_state_stays_idle() {
        let mut state = FetchState::new(FencePolicy::Latest);
        state.apply(StoriesAction::Remove {
            object_id: "0".into(),
        });
        assert_eq!(state.phase(), Phase::Idle);
    }

    #[test]
    fn latest_fence_drops_superseded_completion() {
        let mut state = FetchState::new(FencePolicy::Latest);
        let payload_a = vec![make_story("a", "A", "x", 0, 0)];
        let payload_b = vec![make_story("b", "B", "y", 0, 0)];

        state.apply(StoriesAction::Start { generation: 1 });
        state.apply(StoriesAction::Start { generation: 2 });
        let b = state.apply(StoriesAction::Success {
            generation: 2,
            stories: payload_b.clone(),
        });
        let a = state.apply(StoriesAction::Success {
            generation: 1,
            stories: payload_a,
        });

        assert_eq!(b, Applied::Accepted);
        assert_eq!(a, Applied::Stale);
        assert_eq!(state.data(), payload_b.as_slice());
        assert_eq!(state.phase(), Phase::Success);
    }

    #[test]
    fn latest_fence_drops_superseded_failure() {
        let mut state = FetchState::new(FencePolicy::Latest);
        state.apply(StoriesAction::Start { generation: 1 });
        state.apply(StoriesAction::Start { generation: 2 });

        let outcome = state.apply(StoriesAction::Failure { generation: 1 });

        assert_eq!(outcome, Applied::Stale);
        assert!(state.is_loading());
    }

    #[test]
    fn legacy_policy_lets_last_resolved_win() {
        let mut state = FetchState::new(FencePolicy::LastResolvedWins);
        let payload_a = vec![make_story("a", "A", "x", 0, 0)];
        let payload_b = vec![make_story("b", "B", "y", 0, 0)];

        state.apply(StoriesAction::Start { generation: 1 });
        state.apply(StoriesAction::Start { generation: 2 });
        state.apply(StoriesAction::Success {
            generation: 2,
            stories: payload_b,
        });
        let a = state.apply(StoriesAction::Success {
            generation: 1,
            stories: payload_a.clone(),
        });

        assert_eq!(a, Applied::Accepted);
        assert_eq!(state.data(), payload_a.as_slice());
    }
}
