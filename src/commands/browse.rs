//! Browse command - toggle tags and mode interactively
//!
//! Each menu action is turned into `FilterEvent`s and handed to the session,
//! which re-renders the list and rewrites the page address straight away. A
//! tag picker submission counts as one change, however many boxes it flipped.

use super::{SiteContext, filtered_session, render::page_for, warn_unknown_tags};
use crate::{
    TunetagError,
    cli::FilterArgs,
    output::{self, TerminalRenderer},
    render::Renderer,
    search::{FilterEvent, FilterState, Location, TagMode},
    session::Session,
};
use dialoguer::{MultiSelect, Select, theme::ColorfulTheme};
use std::fs;
use std::path::Path;
use url::Url;

type Result<T> = std::result::Result<T, TunetagError>;

/// Menu entries of the browse loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuAction {
    ToggleTags,
    ToggleMode,
    ShowTags,
    Done,
}

impl MenuAction {
    const ALL: [Self; 4] = [Self::ToggleTags, Self::ToggleMode, Self::ShowTags, Self::Done];

    fn label(self, mode: TagMode) -> String {
        match self {
            Self::ToggleTags => "Select tags".to_string(),
            Self::ToggleMode => match mode {
                TagMode::Or => "Switch to AND (match all tags)".to_string(),
                TagMode::And => "Switch to OR (match any tag)".to_string(),
            },
            Self::ShowTags => "Show tag checkboxes".to_string(),
            Self::Done => "Done".to_string(),
        }
    }
}

/// Execute the browse command
///
/// # Errors
/// Returns an error if the catalog cannot be loaded, a prompt fails, or the
/// output page cannot be written
pub fn execute(ctx: &SiteContext, args: &FilterArgs, output: Option<&Path>, quiet: bool) -> Result<()> {
    let (mut session, requested) = filtered_session(ctx, args, TerminalRenderer::new(quiet))?;
    warn_unknown_tags(&requested, session.tags(), quiet);

    let theme = ColorfulTheme::default();
    loop {
        let mode = session.state().mode;
        let labels: Vec<String> = MenuAction::ALL.iter().map(|a| a.label(mode)).collect();
        let choice = Select::with_theme(&theme)
            .with_prompt(output::state_summary(session.state()))
            .items(&labels)
            .default(0)
            .interact_opt()?;

        match choice.map(|i| MenuAction::ALL[i]) {
            Some(MenuAction::ToggleTags) => {
                let Some(target) = prompt_tags(&theme, session.tags(), session.state())? else {
                    continue;
                };
                let events = session.state().events_to(&target);
                session.handle_all(&events);
                print_location(&session, quiet);
            }
            Some(MenuAction::ToggleMode) => {
                session.handle(&FilterEvent::ModeToggled);
                print_location(&session, quiet);
            }
            Some(MenuAction::ShowTags) => {
                for tag in session.tags() {
                    println!("{}", output::tag_checkbox(tag, session.state().is_selected(tag)));
                }
            }
            Some(MenuAction::Done) | None => break,
        }
    }

    if let Some(path) = output {
        fs::write(path, page_for(ctx, &session))?;
        if !quiet {
            println!("Wrote {}", path.display());
        }
    }
    println!("{}", session.location());
    Ok(())
}

/// Ask for the full tag selection, pre-checking the current one
///
/// Returns `None` when the prompt is cancelled or there is nothing to pick.
fn prompt_tags(theme: &ColorfulTheme, tags: &[String], state: &FilterState) -> Result<Option<FilterState>> {
    if tags.is_empty() {
        println!("No tags found in catalog.");
        return Ok(None);
    }

    let checked: Vec<bool> = tags.iter().map(|t| state.is_selected(t)).collect();
    let picked = MultiSelect::with_theme(theme)
        .with_prompt("Tags (space to toggle, enter to apply)")
        .items(tags)
        .defaults(&checked)
        .interact_opt()?;

    Ok(picked.map(|indices| selection_state(tags, &indices, state.mode)))
}

fn selection_state(tags: &[String], indices: &[usize], mode: TagMode) -> FilterState {
    FilterState::new(indices.iter().filter_map(|&i| tags.get(i).cloned()), mode)
}

fn print_location<R: Renderer>(session: &Session<Url, R>, quiet: bool) {
    if !quiet {
        println!("URL: {}", session.location().url());
    }
}
