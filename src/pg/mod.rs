/// Client-server storage backend
///
/// PostgreSQL flavor of the flight store. The connection target is
/// injected through PgConfig, never compiled in.

pub mod connection;
pub mod queries;

pub use connection::Database;
