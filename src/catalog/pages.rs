//! HTML page rendering
//!
//! Page shells are embedded at compile time; dynamic fragments are rendered
//! and escaped here, then spliced into the shell's `{{...}}` slots.

use super::movies::MovieListing;

const INDEX_SHELL: &str = include_str!("../../templates/index.html");
const GENRE_SHELL: &str = include_str!("../../templates/genre.html");

/// The front page: movie listing plus genre navigation.
///
/// `genres` may be empty (the filter result reuses this page without
/// recomputing the genre list), in which case the navigation renders empty.
pub fn index_page(movies: &[MovieListing], genres: &[String]) -> String {
    INDEX_SHELL
        .replace("{{genres}}", &genre_links(genres))
        .replace("{{movies}}", &movie_rows(movies))
}

/// A single-genre listing, echoing the requested genre back in the heading.
pub fn genre_page(genre: &str, movies: &[MovieListing]) -> String {
    GENRE_SHELL
        .replace("{{genre}}", &escape_html(genre))
        .replace("{{movies}}", &movie_rows(movies))
}

fn genre_links(genres: &[String]) -> String {
    genres
        .iter()
        .map(|genre| {
            let escaped = escape_html(genre);
            format!("      <li><a href=\"/genre/{escaped}\">{escaped}</a></li>\n")
        })
        .collect()
}

fn movie_rows(movies: &[MovieListing]) -> String {
    movies
        .iter()
        .map(|movie| {
            format!(
                "      <tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                escape_html(&movie.title),
                movie.release_year,
                escape_html(&movie.genre),
                movie.rating,
                movie
                    .director_name
                    .as_deref()
                    .map(escape_html)
                    .unwrap_or_default(),
            )
        })
        .collect()
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
