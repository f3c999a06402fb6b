//! Output formatting for CLI display
//!
//! This module provides utilities for formatting songs and tags in the
//! terminal, and a [`Renderer`] that prints the visible list.

use crate::catalog::Song;
use crate::render::Renderer;
use crate::search::FilterState;
use colored::Colorize;

/// Format a song with its tags for display
#[must_use]
pub fn song_with_tags(song: &Song, quiet: bool) -> String {
    if quiet {
        return song.id.clone();
    }

    let tags = if song.tags.is_empty() {
        "(no tags)".dimmed().to_string()
    } else {
        format!("[{}]", song.tags.join(", "))
    };
    let released = if song.has_release_date() {
        format!("({})", song.release_date)
    } else {
        "(undated)".dimmed().to_string()
    };
    format!("  {} {} {} {}", song.id.dimmed(), song.title.bold(), released, tags)
}

/// Format a tag with usage count
#[must_use]
pub fn tag_with_count(tag: &str, count: usize, quiet: bool) -> String {
    if quiet {
        tag.to_string()
    } else {
        format!("  {tag} (used by {count} song(s))")
    }
}

/// Format a tag as a checkbox line, highlighting selected tags
#[must_use]
pub fn tag_checkbox(tag: &str, selected: bool) -> String {
    if selected {
        format!("[x] {}", tag.green())
    } else {
        format!("[ ] {tag}")
    }
}

/// One-line summary of a filter state
#[must_use]
pub fn state_summary(state: &FilterState) -> String {
    if state.is_empty() {
        return format!("no tags selected ({})", state.mode.to_string().to_uppercase());
    }
    let joined = state
        .selected_tags
        .iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    format!("{} ({})", joined.cyan(), state.mode.to_string().to_uppercase())
}

/// Renderer that prints the visible songs to stdout
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalRenderer {
    pub quiet: bool,
}

impl TerminalRenderer {
    #[must_use]
    pub const fn new(quiet: bool) -> Self {
        Self { quiet }
    }
}

impl Renderer for TerminalRenderer {
    fn render(&mut self, songs: &[&Song]) {
        if songs.is_empty() {
            if !self.quiet {
                println!("No songs match the current filter.");
            }
            return;
        }
        if !self.quiet {
            println!("Showing {} song(s):", songs.len());
        }
        for song in songs {
            println!("{}", song_with_tags(song, self.quiet));
        }
    }
}
