// flights - records and lists airline flights in a single-file database
//
// Parses CLI args and dispatches to the SQLite-backed store.

use clap::{Parser, Subcommand};
use flights_lib::db::{Database, NewFlight};
use flights_lib::table;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "flights",
    version,
    about = "Record and list airline flights in a database file",
    arg_required_else_help = true
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Add a new flight
    Add {
        /// Destination of the flight
        #[arg(short = 'd', long)]
        destination: String,

        /// Departure date of the flight
        #[arg(long, visible_alias = "dd")]
        departure_date: String,

        /// Aircraft type of the flight
        #[arg(long, visible_alias = "at")]
        aircraft_type: String,

        /// The database file name
        filename: PathBuf,
    },
    /// Display all flights
    Display {
        /// The database file name
        filename: PathBuf,
    },
    /// Select flights by departure date
    Select {
        /// Departure date to select flights
        #[arg(short = 'D', long)]
        date: String,

        /// The database file name
        filename: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Add {
            destination,
            departure_date,
            aircraft_type,
            filename,
        } => {
            let db = Database::new(&filename).await?;
            db.add_flight(&NewFlight {
                destination,
                departure_date,
                aircraft_type,
            })
            .await?;
            db.close().await;
        }
        Command::Display { filename } => {
            let db = Database::new(&filename).await?;
            let flights = db.select_flights(None).await?;
            println!("{}", table::render_departures(&flights));
            db.close().await;
        }
        Command::Select { date, filename } => {
            let db = Database::new(&filename).await?;
            let flights = db.select_flights(Some(&date)).await?;
            println!("{}", table::render_departures(&flights));
            db.close().await;
        }
    }

    Ok(())
}
