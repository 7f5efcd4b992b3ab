//! Reelhouse - SQLite-backed movie catalog web app
//! Application library

pub mod catalog;

pub use catalog::config::Config;
pub use catalog::database::Database;
pub use catalog::routes::{create_router, AppState};
