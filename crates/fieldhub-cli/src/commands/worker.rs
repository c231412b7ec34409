//! Worker availability queries against the live database.

use chrono::{DateTime, Utc};
use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use fieldhub_api::dto::response::AvailabilityResponse;
use fieldhub_core::error::AppError;
use fieldhub_core::types::UserId;
use fieldhub_entity::user::User;
use fieldhub_service::AvailabilityChecker;

use super::Cli;
use crate::output;

/// Arguments for worker commands
#[derive(Debug, Args)]
pub struct WorkerArgs {
    /// Worker subcommand
    #[command(subcommand)]
    pub command: WorkerCommand,
}

/// Worker subcommands
#[derive(Debug, Subcommand)]
pub enum WorkerCommand {
    /// List workers free during a window
    Available {
        /// Window start (RFC 3339)
        #[arg(long)]
        start: DateTime<Utc>,
        /// Window end (RFC 3339)
        #[arg(long)]
        end: DateTime<Utc>,
    },
    /// Check one worker for a window
    Check {
        /// Worker ID
        id: UserId,
        /// Window start (RFC 3339)
        #[arg(long)]
        start: DateTime<Utc>,
        /// Window end (RFC 3339)
        #[arg(long)]
        end: DateTime<Utc>,
    },
}

/// One row of `worker available`.
#[derive(Debug, Serialize, Tabled)]
struct WorkerRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Email")]
    email: String,
    #[tabled(rename = "Hours")]
    hours: String,
}

impl From<User> for WorkerRow {
    fn from(user: User) -> Self {
        let hours = user
            .default_hours()
            .map(|(start, end)| format!("{}-{}", start.format("%H:%M"), end.format("%H:%M")))
            .unwrap_or_else(|| "any".to_string());
        Self {
            id: user.id.to_string(),
            name: user.full_name.unwrap_or_default(),
            email: user.email,
            hours,
        }
    }
}

/// Execute worker commands
pub async fn execute(args: &WorkerArgs, cli: &Cli) -> Result<(), AppError> {
    super::init_quiet_logging();
    let config = cli.load_config()?;
    let db = super::connect(&config).await?;
    let checker = AvailabilityChecker::new();

    match &args.command {
        WorkerCommand::Available { start, end } => {
            check_window(*start, *end)?;
            let uow = db.begin().await?;
            let workers = checker.find_available_workers(&uow, *start, *end).await?;
            uow.commit().await?;

            let rows: Vec<WorkerRow> = workers.into_iter().map(WorkerRow::from).collect();
            output::print_list(&rows, cli.format);
        }
        WorkerCommand::Check { id, start, end } => {
            check_window(*start, *end)?;
            let uow = db.begin().await?;
            let verdict = checker.check_worker(&uow, *id, *start, *end).await?;
            uow.commit().await?;

            output::print_item(
                &AvailabilityResponse {
                    worker_id: *id,
                    start: *start,
                    end: *end,
                    available: verdict.is_available(),
                    verdict,
                },
                cli.format,
            );
        }
    }

    db.close().await;
    Ok(())
}

fn check_window(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<(), AppError> {
    if start < end {
        Ok(())
    } else {
        Err(AppError::validation("--start must be before --end"))
    }
}
