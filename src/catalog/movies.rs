//! Movie listing queries
//!
//! Typed projections over the `movies` and `directors` tables. The schema is
//! owned by the external database file; everything here is read-only.

use rusqlite::{params, Connection, Row};

/// One row of the movie listing join: a movie plus its director's name.
/// `director_name` is `None` for movies without a director on record
/// (left-join semantics).
#[derive(Debug, Clone, PartialEq)]
pub struct MovieListing {
    pub id: i64,
    pub title: String,
    pub release_year: i64,
    pub genre: String,
    pub rating: f64,
    pub director_name: Option<String>,
}

const LISTING_SELECT: &str = "SELECT movies.id, movies.title, movies.release_year, movies.genre, movies.rating, \
            directors.name AS director_name \
     FROM movies \
     LEFT JOIN directors ON movies.director_id = directors.id";

fn listing_from_row(row: &Row) -> rusqlite::Result<MovieListing> {
    Ok(MovieListing {
        id: row.get("id")?,
        title: row.get("title")?,
        release_year: row.get("release_year")?,
        genre: row.get("genre")?,
        rating: row.get("rating")?,
        director_name: row.get("director_name")?,
    })
}

/// Every movie, including those without a director.
pub fn list_all(conn: &Connection) -> rusqlite::Result<Vec<MovieListing>> {
    let mut stmt = conn.prepare(LISTING_SELECT)?;
    let rows = stmt.query_map([], listing_from_row)?;
    rows.collect()
}

/// Movies whose genre matches `genre` exactly (case-sensitive).
pub fn list_by_genre(conn: &Connection, genre: &str) -> rusqlite::Result<Vec<MovieListing>> {
    let query = format!("{LISTING_SELECT} WHERE movies.genre = ?1");
    let mut stmt = conn.prepare(&query)?;
    let rows = stmt.query_map(params![genre], listing_from_row)?;
    rows.collect()
}

/// Movies matching both filters as case-insensitive substrings.
///
/// Movies with no director never match: the `directors.name LIKE` predicate
/// cannot hold against NULL, even with an empty pattern.
pub fn search(
    conn: &Connection,
    genre: &str,
    director: &str,
) -> rusqlite::Result<Vec<MovieListing>> {
    let query = format!("{LISTING_SELECT} WHERE movies.genre LIKE ?1 AND directors.name LIKE ?2");
    let mut stmt = conn.prepare(&query)?;
    let rows = stmt.query_map(
        params![format!("%{genre}%"), format!("%{director}%")],
        listing_from_row,
    )?;
    rows.collect()
}

/// The distinct set of genres present, ascending.
pub fn distinct_genres(conn: &Connection) -> rusqlite::Result<Vec<String>> {
    let mut stmt = conn.prepare("SELECT DISTINCT genre FROM movies ORDER BY genre ASC")?;
    let rows = stmt.query_map([], |row| row.get(0))?;
    rows.collect()
}
