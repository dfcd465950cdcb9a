/// Data models shared by both storage backends
///
/// All models map to database tables and use sqlx for type-safe queries.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A stored flight row
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Flight {
    pub flight_id: i64,
    pub destination: String,
    pub departure_date: String,
    pub aircraft_type_id: Option<i64>,
}

/// A named aircraft category referenced by flights
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AircraftType {
    pub id: i64,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub type_name: String,
}

/// Input for recording a new flight
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewFlight {
    pub destination: String,
    pub departure_date: String,
    pub aircraft_type: String,
}

/// Joined row returned by the reader and consumed by the presenter
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct FlightRecord {
    pub departure_date: String,
    pub destination: String,
    pub aircraft_type: Option<String>,
}
