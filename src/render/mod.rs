//! View rendering
//!
//! The session hands the full visible list to a [`Renderer`] after every
//! change. Renderers replace their previous output wholesale; there is no
//! incremental diffing.

pub mod html;

pub use html::{render_list, render_page, render_tag_filters, song_card};

use crate::catalog::Song;

/// Display target for the visible song list
pub trait Renderer {
    /// Replace the displayed list with `songs`
    fn render(&mut self, songs: &[&Song]);
}

/// Renderer that keeps the latest list markup in memory
#[derive(Debug, Default, Clone)]
pub struct HtmlRenderer {
    markup: String,
    renders: usize,
}

impl HtmlRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Markup from the most recent render
    #[must_use]
    pub fn markup(&self) -> &str {
        &self.markup
    }

    /// Number of times `render` has been called
    #[must_use]
    pub const fn renders(&self) -> usize {
        self.renders
    }
}

impl Renderer for HtmlRenderer {
    fn render(&mut self, songs: &[&Song]) {
        self.markup = render_list(songs);
        self.renders += 1;
    }
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn render(&mut self, songs: &[&Song]) {
        (**self).render(songs);
    }
}
