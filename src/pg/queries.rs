/// SQL operations for the client-server variant
///
/// Unlike the file store, adds de-duplicate aircraft types: the writer
/// upserts against the UNIQUE type name and reuses the existing row's id.
/// Both statements run in a single transaction, so a failed flight insert
/// never leaves a freshly created type row behind.

use crate::db::models::{FlightRecord, NewFlight};
use crate::error::Result;
use crate::pg::Database;
use sqlx::Row;
use tracing::debug;

impl Database {
    /// Record a flight, reusing the aircraft type row when the name exists
    ///
    /// # Arguments
    /// * `input` - Flight input data
    ///
    /// # Returns
    /// * `Ok(i64)` - The new flight id
    /// * `Err(FlightsError)` - If the transaction fails
    pub async fn add_flight(&self, input: &NewFlight) -> Result<i64> {
        let mut tx = self.pool().begin().await?;

        // The upsert returns the id whether the row is new or already
        // there, and stays atomic under concurrent adds.
        let row = sqlx::query(
            r#"
            INSERT INTO aircraft_types (type) VALUES ($1)
            ON CONFLICT (type) DO UPDATE SET type = excluded.type
            RETURNING id
            "#,
        )
        .bind(&input.aircraft_type)
        .fetch_one(&mut *tx)
        .await?;
        let aircraft_type_id: i64 = row.get(0);
        debug!(aircraft_type_id, "resolved aircraft type");

        let row = sqlx::query(
            r#"
            INSERT INTO flights (destination, departure_date, aircraft_type_id)
            VALUES ($1, $2, $3)
            RETURNING flight_id
            "#,
        )
        .bind(&input.destination)
        .bind(&input.departure_date)
        .bind(aircraft_type_id)
        .fetch_one(&mut *tx)
        .await?;
        let flight_id: i64 = row.get(0);

        tx.commit().await?;

        Ok(flight_id)
    }

    /// Fetch flights joined with their aircraft type
    ///
    /// A present, non-empty date filters by exact equality; otherwise all
    /// flights are returned, in whatever order the engine yields them.
    pub async fn select_flights(&self, date: Option<&str>) -> Result<Vec<FlightRecord>> {
        let flights = if let Some(date) = date.filter(|d| !d.is_empty()) {
            sqlx::query_as::<_, FlightRecord>(
                r#"
                SELECT flights.departure_date, flights.destination,
                       aircraft_types.type AS aircraft_type
                FROM flights
                JOIN aircraft_types ON flights.aircraft_type_id = aircraft_types.id
                WHERE departure_date = $1
                "#,
            )
            .bind(date)
            .fetch_all(self.pool())
            .await?
        } else {
            sqlx::query_as::<_, FlightRecord>(
                r#"
                SELECT flights.departure_date, flights.destination,
                       aircraft_types.type AS aircraft_type
                FROM flights
                JOIN aircraft_types ON flights.aircraft_type_id = aircraft_types.id
                "#,
            )
            .fetch_all(self.pool())
            .await?
        };

        Ok(flights)
    }
}

// These tests need a reachable PostgreSQL server, so they only run when
// opted in: set FLIGHTS_TEST_DATABASE_URL and pass --ignored.
#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PgConfig;
    use crate::db::models::AircraftType;

    async fn connect_test() -> Database {
        let url = std::env::var("FLIGHTS_TEST_DATABASE_URL")
            .expect("FLIGHTS_TEST_DATABASE_URL must point at a scratch database");
        let db = Database::new(&PgConfig { database_url: url })
            .await
            .unwrap();

        // Start from a clean slate; these tables are scratch by contract
        sqlx::query("TRUNCATE flights, aircraft_types RESTART IDENTITY")
            .execute(db.pool())
            .await
            .unwrap();

        db
    }

    fn paris() -> NewFlight {
        NewFlight {
            destination: "Paris".to_string(),
            departure_date: "2024-01-01".to_string(),
            aircraft_type: "Boeing737".to_string(),
        }
    }

    #[tokio::test]
    #[ignore = "needs a PostgreSQL server; set FLIGHTS_TEST_DATABASE_URL"]
    async fn test_add_then_select_same_date() {
        let db = connect_test().await;

        db.add_flight(&paris()).await.unwrap();

        let flights = db.select_flights(Some("2024-01-01")).await.unwrap();
        assert_eq!(flights.len(), 1);
        assert_eq!(flights[0].departure_date, "2024-01-01");
        assert_eq!(flights[0].destination, "Paris");
        assert_eq!(flights[0].aircraft_type.as_deref(), Some("Boeing737"));

        db.close().await;
    }

    #[tokio::test]
    #[ignore = "needs a PostgreSQL server; set FLIGHTS_TEST_DATABASE_URL"]
    async fn test_repeated_type_names_share_one_row() {
        let db = connect_test().await;

        // Two adds with the same type name must resolve to a single
        // aircraft_types row; this is where the two variants diverge.
        db.add_flight(&paris()).await.unwrap();
        db.add_flight(&NewFlight {
            destination: "Oslo".to_string(),
            departure_date: "2024-01-02".to_string(),
            aircraft_type: "Boeing737".to_string(),
        })
        .await
        .unwrap();

        let types = sqlx::query_as::<_, AircraftType>("SELECT * FROM aircraft_types")
            .fetch_all(db.pool())
            .await
            .unwrap();
        assert_eq!(types.len(), 1);
        assert_eq!(types[0].type_name, "Boeing737");

        db.close().await;
    }

    #[tokio::test]
    #[ignore = "needs a PostgreSQL server; set FLIGHTS_TEST_DATABASE_URL"]
    async fn test_select_without_date_returns_all() {
        let db = connect_test().await;

        db.add_flight(&paris()).await.unwrap();
        db.add_flight(&NewFlight {
            destination: "Rome".to_string(),
            departure_date: "2024-02-02".to_string(),
            aircraft_type: "A320".to_string(),
        })
        .await
        .unwrap();

        let all = db.select_flights(None).await.unwrap();
        assert_eq!(all.len(), 2);

        let none = db.select_flights(Some("1999-12-31")).await.unwrap();
        assert!(none.is_empty());

        db.close().await;
    }
}
