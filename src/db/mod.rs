/// File-database storage backend
///
/// Handles all database operations for the single-file SQLite store
/// using sqlx. Implements connection pooling for performance.

pub mod connection;
pub mod models;
pub mod queries;

pub use connection::Database;
pub use models::*;
