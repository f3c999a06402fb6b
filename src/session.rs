//! Catalog page session
//!
//! A [`Session`] is the single owner of the filter state for one page view.
//! It holds the loaded catalog, its tag index, a renderer and the page
//! location, and reacts to control changes.
//!
//! # Workflow
//!
//! ```text
//! Session::start
//!     ↓
//! load catalog (failure propagates, nothing rendered)
//!     ↓
//! build tag index
//!     ↓
//! decode location → drop tags with no control
//!     ↓
//! initial render
//!     ↓
//! ┌─→ handle(event)
//! │       ↓
//! │   next state → filter → render → replace query
//! └───────┘
//! ```
//!
//! The address is only written in response to events, never at startup.

use crate::catalog::{CatalogError, CatalogSource, Song, unique_tags};
use crate::render::Renderer;
use crate::search::{FilterEvent, FilterState, Location};
use tracing::debug;

/// One page view of a song catalog
pub struct Session<L, R> {
    songs: Vec<Song>,
    tags: Vec<String>,
    state: FilterState,
    location: L,
    renderer: R,
}

impl<L: Location, R: Renderer> Session<L, R> {
    /// Load the catalog and perform the initial render
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the catalog cannot be loaded. In that case
    /// the renderer is never called.
    pub fn start(source: &dyn CatalogSource, location: L, renderer: R) -> Result<Self, CatalogError> {
        let songs = source
            .load()
            .inspect_err(|err| debug!(path = ?err.path(), %err, "catalog load failed"))?;
        Ok(Self::with_songs(songs, location, renderer))
    }

    /// Build a session around an already-loaded catalog
    pub fn with_songs(songs: Vec<Song>, location: L, mut renderer: R) -> Self {
        let tags = unique_tags(&songs);
        let requested = location.current_state();
        let state = requested.retain_known(&tags);
        if state.selected_tags.len() != requested.selected_tags.len() {
            let ignored: Vec<&String> = requested.selected_tags.difference(&state.selected_tags).collect();
            debug!(?ignored, "ignoring tags with no matching control");
        }

        renderer.render(&state.visible(&songs));
        debug!(songs = songs.len(), tags = tags.len(), mode = %state.mode, "initial render");

        Self {
            songs,
            tags,
            state,
            location,
            renderer,
        }
    }

    /// React to a control change
    ///
    /// The next state is computed, the visible list re-rendered, and the
    /// location's query replaced, all before returning.
    pub fn handle(&mut self, event: &FilterEvent) {
        self.state = self.state.apply(event);
        debug!(?event, "filter changed");
        self.commit();
    }

    /// Apply several events as one change
    ///
    /// The events are applied in order, then the list is rendered and the
    /// query replaced once. An empty batch does nothing.
    pub fn handle_all<'e>(&mut self, events: impl IntoIterator<Item = &'e FilterEvent>) {
        let mut applied = 0_usize;
        for event in events {
            self.state = self.state.apply(event);
            applied += 1;
        }
        if applied > 0 {
            debug!(events = applied, "filter changed");
            self.commit();
        }
    }

    fn commit(&mut self) {
        let visible = self.state.visible(&self.songs);
        debug!(visible = visible.len(), "render");
        self.renderer.render(&visible);
        self.location.replace_state(&self.state);
    }

    #[must_use]
    pub fn state(&self) -> &FilterState {
        &self.state
    }

    /// Distinct tags in the catalog, sorted
    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    #[must_use]
    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    /// Songs visible under the current state
    #[must_use]
    pub fn visible(&self) -> Vec<&Song> {
        self.state.visible(&self.songs)
    }

    #[must_use]
    pub const fn location(&self) -> &L {
        &self.location
    }

    #[must_use]
    pub const fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Take back the location and renderer
    pub fn into_parts(self) -> (L, R) {
        (self.location, self.renderer)
    }
}
