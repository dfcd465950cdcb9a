/// ASCII table rendering for flight listings
///
/// Renders to a string; callers print it. Column widths are fixed, and the
/// format directives pad but never truncate, so over-long content widens
/// its own row instead of losing characters.

use crate::db::models::FlightRecord;

/// Printed when a listing has no rows
pub const EMPTY_MESSAGE: &str = "List of flights is empty.";

/// Two-column listing used by the file-database tool
///
/// Shows departure date and destination only, with the destination column
/// 8 wide and right-aligned.
pub fn render_departures(flights: &[FlightRecord]) -> String {
    if flights.is_empty() {
        return EMPTY_MESSAGE.to_string();
    }

    let line = format!("+-{}-+-{}-+", "-".repeat(30), "-".repeat(8));

    let mut out = Vec::with_capacity(flights.len() + 4);
    out.push(line.clone());
    out.push(format!("| {:^30} | {:^8} |", "Departure Date", "Destination"));
    out.push(line.clone());
    for flight in flights {
        out.push(format!(
            "| {:<30} | {:>8} |",
            flight.departure_date, flight.destination
        ));
    }
    out.push(line);

    out.join("\n")
}

/// Three-column listing used by the client-server tool
pub fn render_flights(flights: &[FlightRecord]) -> String {
    if flights.is_empty() {
        return EMPTY_MESSAGE.to_string();
    }

    let line = format!(
        "+-{}-+-{}-+-{}-+",
        "-".repeat(30),
        "-".repeat(30),
        "-".repeat(12)
    );

    let mut out = Vec::with_capacity(flights.len() + 4);
    out.push(line.clone());
    out.push(format!(
        "| {:^30} | {:^30} | {:^12} |",
        "Departure Date", "Destination", "Aircraft Type"
    ));
    out.push(line.clone());
    for flight in flights {
        out.push(format!(
            "| {:<30} | {:<30} | {:<12} |",
            flight.departure_date,
            flight.destination,
            flight.aircraft_type.as_deref().unwrap_or("")
        ));
    }
    out.push(line);

    out.join("\n")
}
