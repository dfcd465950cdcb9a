/// Connection configuration for the client-server variant
///
/// The PostgreSQL target is injected at startup rather than compiled in:
/// a --database-url flag wins, then FLIGHTS_DATABASE_URL, then DATABASE_URL.

use crate::error::{FlightsError, Result};
use std::env;

/// Environment variable consulted before the generic DATABASE_URL
pub const DATABASE_URL_VAR: &str = "FLIGHTS_DATABASE_URL";

/// Resolved connection settings for the PostgreSQL store
#[derive(Debug, Clone)]
pub struct PgConfig {
    pub database_url: String,
}

impl PgConfig {
    /// Resolve the connection URL from a flag value or the environment
    ///
    /// # Arguments
    /// * `flag` - Value of the --database-url flag, if given
    ///
    /// # Returns
    /// * `Ok(PgConfig)` - A usable connection target
    /// * `Err(FlightsError::Config)` - If no source provides a URL
    pub fn resolve(flag: Option<String>) -> Result<Self> {
        if let Some(database_url) = flag {
            return Ok(Self { database_url });
        }

        env::var(DATABASE_URL_VAR)
            .or_else(|_| env::var("DATABASE_URL"))
            .map(|database_url| Self { database_url })
            .map_err(|_| {
                FlightsError::Config(format!(
                    "no database URL: pass --database-url or set {} (or DATABASE_URL)",
                    DATABASE_URL_VAR
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // One test covers the whole precedence chain so the env mutations
    // don't race each other under the parallel test runner.
    #[test]
    fn test_resolve_precedence() {
        env::remove_var(DATABASE_URL_VAR);
        env::remove_var("DATABASE_URL");

        let result = PgConfig::resolve(None);
        assert!(matches!(result, Err(FlightsError::Config(_))));

        env::set_var("DATABASE_URL", "postgres://generic/flights");
        let config = PgConfig::resolve(None).unwrap();
        assert_eq!(config.database_url, "postgres://generic/flights");

        env::set_var(DATABASE_URL_VAR, "postgres://specific/flights");
        let config = PgConfig::resolve(None).unwrap();
        assert_eq!(config.database_url, "postgres://specific/flights");

        let config = PgConfig::resolve(Some("postgres://flag/flights".to_string())).unwrap();
        assert_eq!(config.database_url, "postgres://flag/flights");

        env::remove_var(DATABASE_URL_VAR);
        env::remove_var("DATABASE_URL");
    }
}
