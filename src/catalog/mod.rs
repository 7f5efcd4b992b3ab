// Reelhouse catalog - core module structure
pub mod config;
pub mod database;
pub mod movies;
pub mod pages;
pub mod routes;
pub mod validate;

pub use config::Config;
pub use database::Database;
