//! Reelhouse HTTP Routes
//! Router and handlers for the catalog pages

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, Json},
    routing::get,
    Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use super::database::{Database, DatabaseError};
use super::movies;
use super::pages;
use super::validate::has_control_char;

#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Database>,
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/genre/{genre}", get(genre_movies))
        .route("/filter", get(filter_movies).post(filter_movies))
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// `GET /` - every movie plus the distinct genre list.
async fn index(State(state): State<AppState>) -> Result<Html<String>, StatusCode> {
    let conn = state.db.get_connection().map_err(checkout_failed)?;
    let movies = movies::list_all(&conn).map_err(query_failed)?;
    let genres = movies::distinct_genres(&conn).map_err(query_failed)?;
    Ok(Html(pages::index_page(&movies, &genres)))
}

/// `GET /genre/{genre}` - exact, case-sensitive genre match.
async fn genre_movies(
    State(state): State<AppState>,
    Path(genre): Path<String>,
) -> Result<Html<String>, StatusCode> {
    if has_control_char(&genre) {
        return Err(StatusCode::BAD_REQUEST);
    }
    let conn = state.db.get_connection().map_err(checkout_failed)?;
    let movies = movies::list_by_genre(&conn, &genre).map_err(query_failed)?;
    Ok(Html(pages::genre_page(&genre, &movies)))
}

#[derive(Debug, Deserialize)]
pub struct FilterParams {
    #[serde(default)]
    genre: String,
    #[serde(default)]
    director: String,
}

/// `GET|POST /filter` - case-insensitive substring match on genre and
/// director name. Reuses the index page without a genre list.
async fn filter_movies(
    State(state): State<AppState>,
    Query(params): Query<FilterParams>,
) -> Result<Html<String>, StatusCode> {
    if has_control_char(&params.genre) || has_control_char(&params.director) {
        return Err(StatusCode::BAD_REQUEST);
    }
    let conn = state.db.get_connection().map_err(checkout_failed)?;
    let movies =
        movies::search(&conn, &params.genre, &params.director).map_err(query_failed)?;
    Ok(Html(pages::index_page(&movies, &[])))
}

fn checkout_failed(err: DatabaseError) -> StatusCode {
    tracing::error!("connection checkout failed: {err}");
    StatusCode::INTERNAL_SERVER_ERROR
}

fn query_failed(err: rusqlite::Error) -> StatusCode {
    tracing::error!("query failed: {err}");
    StatusCode::INTERNAL_SERVER_ERROR
}
