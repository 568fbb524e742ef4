//! `scheduling` CLI — availability lookups against a JSON user database.
//!
//! ## Usage
//!
//! ```sh
//! # Common availability of users 1 and 2, within their working hours
//! scheduling --db data/db.json availability \
//!     --user-id 1 --user-id 2 \
//!     --start-date 2019-01-01T00:00:00Z --end-date 2019-01-03T00:00:00Z
//!
//! # Ignore working hours
//! scheduling availability --user-id 1 --start-date 2019-01-01 --end-date 2019-01-02 \
//!     --include-non-working-hours
//!
//! # The database path can also come from the environment
//! SCHEDULING_DB=data/db.json scheduling users
//! ```
//!
//! `availability` prints `{"data": [...]}` on success. Request errors print
//! `{"message": "..."}` and exit with code 2 (bad request) or 4 (unknown user).

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use scheduling_core::query::{respond, ErrorResponse};
use scheduling_core::Database;
use std::process;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(
    name = "scheduling",
    version,
    about = "Find when users are free, alone or together"
)]
struct Cli {
    /// JSON user database
    #[arg(long, global = true, env = "SCHEDULING_DB", default_value = "data/db.json")]
    db: String,

    /// Emit logs as JSON (filter with RUST_LOG, default "warn")
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the availability common to the given users
    Availability {
        /// User id to include (repeatable)
        #[arg(long = "user-id")]
        user_ids: Vec<String>,
        /// Start of the range (ISO 8601)
        #[arg(long)]
        start_date: Option<String>,
        /// End of the range (ISO 8601)
        #[arg(long)]
        end_date: Option<String>,
        /// Count time outside each user's working hours as available
        #[arg(long)]
        include_non_working_hours: bool,
    },
    /// List the users in the database
    Users,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_json);

    let db = Database::from_file(&cli.db)
        .with_context(|| format!("Failed to load user database: {}", cli.db))?;

    match cli.command {
        Commands::Availability {
            user_ids,
            start_date,
            end_date,
            include_non_working_hours,
        } => {
            let flag = include_non_working_hours.then_some("true");
            match respond(&db, &user_ids, start_date.as_deref(), end_date.as_deref(), flag) {
                Ok(response) => {
                    println!("{}", serde_json::to_string_pretty(&response)?);
                }
                Err(error) => {
                    tracing::debug!(status = error.status, message = %error.message, "request rejected");
                    println!("{}", serde_json::to_string_pretty(&error)?);
                    process::exit(exit_code(&error));
                }
            }
        }
        Commands::Users => {
            for user in db.users() {
                println!(
                    "{}\t{}\t{}\t{} events",
                    user.id,
                    user.time_zone,
                    user.working_hours,
                    user.events.len()
                );
            }
        }
    }

    Ok(())
}

fn init_logging(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn exit_code(error: &ErrorResponse) -> i32 {
    match error.status {
        400 => 2,
        404 => 4,
        _ => 1,
    }
}
