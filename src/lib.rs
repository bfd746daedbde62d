/// DevConnect Service Library
///
/// Backend for the DevConnect developer network: authenticated users maintain
/// a profile (work history, education, social links) and publish posts that
/// others can like and comment on.
///
/// # Modules
///
/// - `handlers`: HTTP request handlers and request/response DTOs
/// - `models`: Profile and Post aggregates with their embedded sub-entries
/// - `services`: Business logic layer (aggregate managers, GitHub lookup)
/// - `db`: Document store traits and the in-memory engine
/// - `middleware`: JWT authentication and request logging
/// - `security`: Token mint/validate helpers
/// - `error`: Error types and HTTP mapping
/// - `config`: Configuration management
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod security;
pub mod services;

pub use config::Config;
pub use error::{AppError, Result};
