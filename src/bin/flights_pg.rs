// flights-pg - records and lists airline flights in a PostgreSQL database
//
// Same surface as the file-database tool, minus the filename: the
// connection target is resolved from the --database-url flag or the
// environment at startup.

use clap::{Parser, Subcommand};
use flights_lib::config::PgConfig;
use flights_lib::db::NewFlight;
use flights_lib::{pg, table};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "flights-pg",
    version,
    about = "Record and list airline flights in a PostgreSQL database",
    arg_required_else_help = true
)]
struct Cli {
    /// PostgreSQL connection URL (overrides FLIGHTS_DATABASE_URL / DATABASE_URL)
    #[arg(long, global = true)]
    database_url: Option<String>,

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
    },
    /// Display all flights
    Display,
    /// Select flights by departure date
    Select {
        /// Departure date to select flights
        #[arg(short = 'D', long)]
        date: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = PgConfig::resolve(cli.database_url.clone())?;
    let db = pg::Database::new(&config).await?;

    match cli.command {
        Command::Add {
            destination,
            departure_date,
            aircraft_type,
        } => {
            db.add_flight(&NewFlight {
                destination,
                departure_date,
                aircraft_type,
            })
            .await?;
        }
        Command::Display => {
            let flights = db.select_flights(None).await?;
            println!("{}", table::render_flights(&flights));
        }
        Command::Select { date } => {
            let flights = db.select_flights(Some(&date)).await?;
            println!("{}", table::render_flights(&flights));
        }
    }

    db.close().await;

    Ok(())
}
