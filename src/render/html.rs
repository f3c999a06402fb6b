//! HTML markup for song cards, tag controls and the full page
//!
//! All text and attribute values are escaped. Missing release dates are
//! already normalized to the placeholder at load time; songs without tags
//! show the placeholder in place of chips.

use crate::catalog::{PLACEHOLDER, Song};
use crate::search::{FilterState, TagMode};
use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};

/// Element ids the page markup exposes
pub const LIST_ID: &str = "list";
pub const TAG_FILTERS_ID: &str = "tag-filters";
pub const AND_MODE_ID: &str = "and-mode";

/// Render one song card
#[must_use]
pub fn song_card(song: &Song) -> String {
    let tags = if song.tags.is_empty() {
        PLACEHOLDER.to_string()
    } else {
        song.tags
            .iter()
            .map(|t| format!(r#"<span class="tag">{}</span>"#, text(t)))
            .collect::<Vec<_>>()
            .join(" ")
    };

    format!(
        r#"
    <article class="song">
      <h3>{title}</h3>
      <audio controls src="{src}"></audio>
      <p>ID: {id}</p>
      <p>Composed: {date}</p>
      <p>Tags: {tags}</p>
    </article>
  "#,
        title = text(&song.title),
        src = attr(&song.audio_url),
        id = text(&song.id),
        date = text(&song.release_date),
    )
}

/// Render the song list contents
#[must_use]
pub fn render_list(songs: &[&Song]) -> String {
    songs.iter().map(|s| song_card(s)).collect()
}

/// Render one checkbox chip per tag, checking the selected ones
#[must_use]
pub fn render_tag_filters(tags: &[String], state: &FilterState) -> String {
    tags.iter()
        .map(|t| {
            let checked = if state.is_selected(t) { " checked" } else { "" };
            format!(
                r#"
    <label class="chip"><input type="checkbox" value="{value}"{checked}>{label}</label>
  "#,
                value = attr(t),
                label = text(t),
            )
        })
        .collect()
}

/// Render a standalone HTML document for the given view
///
/// `total` is the size of the whole catalog, shown next to the visible count.
#[must_use]
pub fn render_page(
    title: &str,
    tags: &[String],
    state: &FilterState,
    songs: &[&Song],
    total: usize,
) -> String {
    let and_checked = if state.mode == TagMode::And { " checked" } else { "" };
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <title>{title}</title>
</head>
<body>
  <h1>{title}</h1>
  <section id="{TAG_FILTERS_ID}">{filters}</section>
  <label><input type="checkbox" id="{AND_MODE_ID}"{and_checked}> AND</label>
  <p class="count">{shown} / {total}</p>
  <main id="{LIST_ID}">{list}</main>
</body>
</html>
"#,
        title = text(title),
        filters = render_tag_filters(tags, state),
        shown = songs.len(),
        list = render_list(songs),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::song;

    #[test]
    fn test_card_contains_fields() {
        let s = Song::new(
            "7",
            "Moonlight",
            "audio/moon.mp3",
            Some("1801".into()),
            vec!["piano".into(), "classical".into()],
        );
        let html = song_card(&s);

        assert!(html.contains(r#"<article class="song">"#));
        assert!(html.contains("<h3>Moonlight</h3>"));
        assert!(html.contains(r#"<audio controls src="audio/moon.mp3"></audio>"#));
        assert!(html.contains("<p>ID: 7</p>"));
        assert!(html.contains("<p>Composed: 1801</p>"));
        assert!(html.contains(
            r#"<p>Tags: <span class="tag">piano</span> <span class="tag">classical</span></p>"#
        ));
    }

    #[test]
    fn test_card_placeholders() {
        let html = song_card(&song("1", &[]));
        assert!(html.contains("<p>Composed: —</p>"));
        assert!(html.contains("<p>Tags: —</p>"));
    }

    #[test]
    fn test_card_escapes_markup() {
        let s = Song::new(
            "1",
            "<script>alert(1)</script>",
            r#"a.mp3" onerror="x"#,
            None,
            vec!["<b>".into()],
        );
        let html = song_card(&s);

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains(r#"onerror="x""#));
        assert!(html.contains("&lt;b&gt;"));
    }

    #[test]
    fn test_list_renders_in_order() {
        let a = song("a", &[]);
        let b = song("b", &[]);
        let html = render_list(&[&b, &a]);

        let pos_b = html.find("ID: b").unwrap();
        let pos_a = html.find("ID: a").unwrap();
        assert!(pos_b < pos_a);
    }

    #[test]
    fn test_empty_list_renders_nothing() {
        assert_eq!(render_list(&[]), "");
    }

    #[test]
    fn test_tag_filters_check_selected() {
        let tags = vec!["jazz".to_string(), "rock".to_string()];
        let state = FilterState::new(["rock".to_string()], TagMode::Or);
        let html = render_tag_filters(&tags, &state);

        assert!(html.contains(r#"<input type="checkbox" value="jazz">jazz</label>"#));
        assert!(html.contains(r#"<input type="checkbox" value="rock" checked>rock</label>"#));
    }

    #[test]
    fn test_page_reflects_mode() {
        let tags = vec!["x".to_string()];
        let and_state = FilterState::new(Vec::new(), TagMode::And);

        let page = render_page("Songs", &tags, &and_state, &[], 3);
        assert!(page.contains(r#"id="and-mode" checked"#));
        assert!(page.contains(r#"<section id="tag-filters">"#));
        assert!(page.contains(r#"<main id="list"></main>"#));
        assert!(page.contains("0 / 3"));

        let or_page = render_page("Songs", &tags, &FilterState::default(), &[], 3);
        assert!(!or_page.contains(r#"id="and-mode" checked"#));
    }
}
