//! Derived views over the result list.
//!
//! Nothing here is stored: the UI recomputes these from the current term,
//! the current `data` and the sort state on every frame.

use std::cmp::Ordering;

use crate::source::Story;

/// Column the result list is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// API order.
    #[default]
    None,
    Title,
    Author,
    /// Most comments first.
    Comments,
    /// Highest score first.
    Points,
}

impl SortKey {
    pub const ALL: [SortKey; 5] = [
        SortKey::None,
        SortKey::Title,
        SortKey::Author,
        SortKey::Comments,
        SortKey::Points,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SortKey::None => "none",
            SortKey::Title => "title",
            SortKey::Author => "author",
            SortKey::Comments => "comments",
            SortKey::Points => "points",
        }
    }

    /// The next key in [`SortKey::ALL`], wrapping around.
    pub fn next(self) -> SortKey {
        let idx = Self::ALL.iter().position(|k| *k == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    fn compare(self, a: &Story, b: &Story) -> Ordering {
        match self {
            SortKey::None => Ordering::Equal,
            SortKey::Title => a.title.cmp(&b.title),
            SortKey::Author => a.author.cmp(&b.author),
            SortKey::Comments => b.num_comments.cmp(&a.num_comments),
            SortKey::Points => b.points.cmp(&a.points),
        }
    }
}

/// Stories whose title contains `term`, ignoring case. A blank term keeps
/// everything.
pub fn filter_by_title<'a>(stories: &'a [Story], term: &str) -> Vec<&'a Story> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return stories.iter().collect();
    }
    stories
        .iter()
        .filter(|story| story.title.to_lowercase().contains(&needle))
        .collect()
}

/// Stable sort by `key`, then reversed when `reverse` is set.
pub fn sort_stories(stories: &mut [&Story], key: SortKey, reverse: bool) {
    stories.sort_by(|a, b| key.compare(a, b));
    if reverse {
        stories.reverse();
    }
}

/// Total comment count across `stories`.
pub fn sum_comments<'a>(stories: impl IntoIterator<Item = &'a Story>) -> u64 {
    stories.into_iter().map(|story| story.num_comments).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::fixtures::{make_story, story_one, story_two};

    fn sample() -> Vec<Story> {
        vec![
            make_story("1", "Rust 2024 edition", "carol", 12, 300),
            make_story("2", "Why I left React", "alice", 40, 120),
            make_story("3", "Rusty tools", "bob", 3, 900),
        ]
    }

    fn ids(stories: &[&Story]) -> Vec<String> {
        stories.iter().map(|s| s.object_id.clone()).collect()
    }

    #[test]
    fn filter_is_case_insensitive_substring() {
        let stories = sample();
        let hits = filter_by_title(&stories, "RUST");
        assert_eq!(ids(&hits), vec!["1", "3"]);
    }

    #[test]
    fn blank_filter_keeps_everything() {
        let stories = sample();
        assert_eq!(filter_by_title(&stories, "").len(), 3);
        assert_eq!(filter_by_title(&stories, "  ").len(), 3);
    }

    #[test]
    fn filter_without_match_is_empty() {
        let stories = sample();
        assert!(filter_by_title(&stories, "haskell").is_empty());
    }

    #[test]
    fn none_keeps_api_order() {
        let stories = sample();
        let mut view: Vec<&Story> = stories.iter().collect();
        sort_stories(&mut view, SortKey::None, false);
        assert_eq!(ids(&view), vec!["1", "2", "3"]);
    }

    #[test]
    fn title_and_author_sort_ascending() {
        let stories = sample();
        let mut view: Vec<&Story> = stories.iter().collect();

        sort_stories(&mut view, SortKey::Title, false);
        assert_eq!(ids(&view), vec!["1", "3", "2"]);

        sort_stories(&mut view, SortKey::Author, false);
        assert_eq!(ids(&view), vec!["2", "3", "1"]);
    }

    #[test]
    fn numeric_sorts_put_largest_first() {
        let stories = sample();
        let mut view: Vec<&Story> = stories.iter().collect();

        sort_stories(&mut view, SortKey::Comments, false);
        assert_eq!(ids(&view), vec!["2", "1", "3"]);

        sort_stories(&mut view, SortKey::Points, false);
        assert_eq!(ids(&view), vec!["3", "1", "2"]);
    }

    #[test]
    fn reverse_flips_the_order() {
        let stories = sample();
        let mut view: Vec<&Story> = stories.iter().collect();
        sort_stories(&mut view, SortKey::Points, true);
        assert_eq!(ids(&view), vec!["2", "1", "3"]);
    }

    #[test]
    fn sum_comments_adds_all() {
        let stories = vec![story_one(), story_two()];
        assert_eq!(sum_comments(&stories), 5);
        assert_eq!(sum_comments(std::iter::empty()), 0);
    }

    #[test]
    fn next_cycles_through_every_key() {
        let mut key = SortKey::None;
        for _ in 0..SortKey::ALL.len() {
            key = key.next();
        }
        assert_eq!(key, SortKey::None);
        assert_eq!(SortKey::Comments.next(), SortKey::Points);
    }
}
