//! Command-line front end for the parcel tracker.
//!
//! # Responsibility
//! - Open the tracker database and drive `ParcelService` use cases.
//! - Print human-readable lines on stdout, errors on stderr.

use clap::{Parser, Subcommand};
use log::error;
use parcel_core::db::open_db;
use parcel_core::{
    default_log_level, init_logging, ClientId, Parcel, ParcelNumber, ParcelService, ParcelStore,
    RepoError, SqliteParcelStore,
};
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "parcel_cli", version, about = "Track parcels in a SQLite database")]
struct Cli {
    /// SQLite database file; created on first use.
    #[arg(long, env = "PARCEL_DB", default_value = "tracker.db")]
    db: PathBuf,

    /// trace|debug|info|warn|error
    #[arg(long, env = "PARCEL_LOG_LEVEL")]
    log_level: Option<String>,

    /// Absolute directory for rolling log files. Logging is off when unset.
    #[arg(long, env = "PARCEL_LOG_DIR")]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Register a new parcel for a client.
    Register {
        #[arg(long)]
        client: ClientId,
        #[arg(long)]
        address: String,
    },
    /// Show one parcel.
    Show { number: ParcelNumber },
    /// List a client's parcels.
    List {
        #[arg(long)]
        client: ClientId,
        /// Print a JSON array instead of text lines.
        #[arg(long)]
        json: bool,
    },
    /// Move a parcel to its next status.
    NextStatus { number: ParcelNumber },
    /// Change the address of a registered parcel.
    SetAddress { number: ParcelNumber, address: String },
    /// Delete a registered parcel.
    Delete { number: ParcelNumber },
    /// Run a register/update/delete walkthrough for one client.
    Demo {
        #[arg(long, default_value_t = 1)]
        client: ClientId,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("event=cli_command module=cli status=error error={err}");
            match err.downcast_ref::<RepoError>() {
                Some(RepoError::NotFound(number)) => eprintln!("no parcel with number {number}"),
                _ => eprintln!("error: {err}"),
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    if let Some(log_dir) = &cli.log_dir {
        let level = cli
            .log_level
            .clone()
            .unwrap_or_else(|| default_log_level().to_string());
        init_logging(&level, log_dir)?;
    }

    let conn = open_db(&cli.db)?;
    let service = ParcelService::new(SqliteParcelStore::try_new(&conn)?);

    match cli.command {
        Command::Register { client, address } => {
            let parcel = service.register(client, address)?;
            println!(
                "registered parcel #{} for client {} to \"{}\" at {}",
                parcel.number, parcel.client, parcel.address, parcel.created_at
            );
        }
        Command::Show { number } => println!("{}", service.store().get(number)?),
        Command::List { client, json } => {
            let parcels = service.client_parcels(client)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&parcels)?);
            } else {
                print_parcels(client, &parcels);
            }
        }
        Command::NextStatus { number } => match service.next_status(number)? {
            Some(status) => println!("parcel #{number} is now {status}"),
            None => println!("parcel #{number} is already delivered"),
        },
        Command::SetAddress { number, address } => {
            service.change_address(number, &address)?;
            println!("{}", service.store().get(number)?);
        }
        Command::Delete { number } => {
            service.delete(number)?;
            match service.store().get(number) {
                Ok(parcel) => println!("kept (not registered): {parcel}"),
                Err(err) if err.is_not_found() => println!("parcel #{number} deleted"),
                Err(err) => return Err(err.into()),
            }
        }
        Command::Demo { client } => run_demo(&service, client)?,
    }

    Ok(())
}

fn run_demo<S: ParcelStore>(service: &ParcelService<S>, client: ClientId) -> Result<(), RepoError> {
    let parcel = service.register(client, "Pskov, Voennaya st. 15-3")?;
    println!("registered {parcel}");

    service.change_address(parcel.number, "Saratov, Verkhnyaya st. 3-4")?;
    service.next_status(parcel.number)?;
    print_parcels(client, &service.client_parcels(client)?);

    // sent by now, so this must leave the parcel in place
    service.delete(parcel.number)?;
    print_parcels(client, &service.client_parcels(client)?);

    let second = service.register(client, "Pskov, Voennaya st. 15-3")?;
    println!("registered {second}");
    service.delete(second.number)?;
    print_parcels(client, &service.client_parcels(client)?);

    Ok(())
}

fn print_parcels(client: ClientId, parcels: &[Parcel]) {
    println!("client {client} parcels ({}):", parcels.len());
    for parcel in parcels {
        println!("  {parcel}");
    }
}
