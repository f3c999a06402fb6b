//! Filter state and the events that change it
//!
//! A [`FilterState`] is a plain value: the selected tags plus the combinator
//! mode. User interaction is expressed as [`FilterEvent`]s, and applying an
//! event produces the next state without touching the previous one.
//!
//! ```
//! use tunetag::search::{FilterEvent, FilterState, TagMode};
//!
//! let state = FilterState::default()
//!     .apply(&FilterEvent::TagToggled("rock".into()))
//!     .apply(&FilterEvent::ModeToggled);
//!
//! assert!(state.is_selected("rock"));
//! assert_eq!(state.mode, TagMode::And);
//! ```

use super::filter::{TagMode, apply_filter};
use crate::catalog::Song;
use std::collections::BTreeSet;

/// Current tag selection and combinator mode
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub selected_tags: BTreeSet<String>,
    pub mode: TagMode,
}

/// A change notification from the tag or mode controls
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterEvent {
    /// A tag checkbox was checked or unchecked
    TagToggled(String),
    /// The AND/OR switch was flipped
    ModeToggled,
}

impl FilterState {
    pub fn new(tags: impl IntoIterator<Item = String>, mode: TagMode) -> Self {
        Self {
            selected_tags: tags.into_iter().collect(),
            mode,
        }
    }

    #[must_use]
    pub fn is_selected(&self, tag: &str) -> bool {
        self.selected_tags.contains(tag)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selected_tags.is_empty()
    }

    /// Produce the state that follows `event`
    #[must_use]
    pub fn apply(&self, event: &FilterEvent) -> Self {
        let mut next = self.clone();
        match event {
            FilterEvent::TagToggled(tag) => {
                if !next.selected_tags.remove(tag) {
                    next.selected_tags.insert(tag.clone());
                }
            }
            FilterEvent::ModeToggled => next.mode = next.mode.toggled(),
        }
        next
    }

    /// Drop selected tags that are not in `known`
    ///
    /// Used when restoring from a URL: a tag without a matching control cannot
    /// be checked, so it does not take part in filtering.
    #[must_use]
    pub fn retain_known(&self, known: &[String]) -> Self {
        Self {
            selected_tags: self
                .selected_tags
                .iter()
                .filter(|t| known.binary_search(t).is_ok())
                .cloned()
                .collect(),
            mode: self.mode,
        }
    }

    /// Events that turn `self` into `target`
    ///
    /// Tag toggles come first, in sorted order, followed by a mode toggle if
    /// the modes differ.
    #[must_use]
    pub fn events_to(&self, target: &Self) -> Vec<FilterEvent> {
        let mut events: Vec<FilterEvent> = self
            .selected_tags
            .symmetric_difference(&target.selected_tags)
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(FilterEvent::TagToggled)
            .collect();
        if self.mode != target.mode {
            events.push(FilterEvent::ModeToggled);
        }
        events
    }

    /// Songs visible under this state
    #[must_use]
    pub fn visible<'a>(&self, songs: &'a [Song]) -> Vec<&'a Song> {
        apply_filter(songs, &self.selected_tags, self.mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{song, tag_set};

    #[test]
    fn test_default_state_is_empty_or() {
        let state = FilterState::default();
        assert!(state.is_empty());
        assert_eq!(state.mode, TagMode::Or);
    }

    #[test]
    fn test_tag_toggle_adds_then_removes() {
        let event = FilterEvent::TagToggled("live".into());
        let once = FilterState::default().apply(&event);
        assert!(once.is_selected("live"));

        let twice = once.apply(&event);
        assert!(!twice.is_selected("live"));
        assert!(twice.is_empty());
    }

    #[test]
    fn test_apply_does_not_mutate_previous_state() {
        let state = FilterState::new(["a".to_string()], TagMode::Or);
        let next = state.apply(&FilterEvent::ModeToggled);
        assert_eq!(state.mode, TagMode::Or);
        assert_eq!(next.mode, TagMode::And);
        assert_eq!(next.selected_tags, state.selected_tags);
    }

    #[test]
    fn test_retain_known_drops_unknown_tags() {
        let state = FilterState::new(
            ["rock".to_string(), "nonexistent".to_string()],
            TagMode::And,
        );
        let known = vec!["jazz".to_string(), "rock".to_string()];

        let restored = state.retain_known(&known);
        assert_eq!(restored.selected_tags, tag_set(&["rock"]));
        assert_eq!(restored.mode, TagMode::And);
    }

    #[test]
    fn test_events_to_reaches_target() {
        let from = FilterState::new(["a".to_string(), "b".to_string()], TagMode::Or);
        let to = FilterState::new(["b".to_string(), "c".to_string()], TagMode::And);

        let events = from.events_to(&to);
        assert_eq!(
            events,
            vec![
                FilterEvent::TagToggled("a".into()),
                FilterEvent::TagToggled("c".into()),
                FilterEvent::ModeToggled,
            ]
        );

        let reached = events.iter().fold(from, |state, e| state.apply(e));
        assert_eq!(reached, to);
    }

    #[test]
    fn test_events_to_same_state_is_empty() {
        let state = FilterState::new(["a".to_string()], TagMode::And);
        assert!(state.events_to(&state.clone()).is_empty());
    }

    #[test]
    fn test_visible_uses_state() {
        let songs = vec![song("1", &["a"]), song("2", &["b"]), song("3", &["a", "b"])];
        let state = FilterState::new(["a".to_string(), "b".to_string()], TagMode::And);
        let visible = state.visible(&songs);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "3");
    }
}
