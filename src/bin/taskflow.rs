//! Command-line reporting for synced task documents.
//!
//! Usage:
//!
//! ```text
//! taskflow flow [--since <day-or-instant>] [--format summary|json|csv]
//! taskflow window [--start <day-or-instant>] [--end <day-or-instant>]
//! taskflow info
//! taskflow ping
//! ```
//!
//! Document store settings come from `CLOUDANT_URL`, `CLOUDANT_SYNC_DB`, and
//! optionally `CLOUDANT_USERNAME`/`CLOUDANT_PASSWORD`; `ping` needs only
//! `FULL_ACCESS_TOKEN`. Logs go to stderr and honour `RUST_LOG`.

use std::io::{self, Write};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand, ValueEnum};
use eyre::WrapErr;
use mockable::DefaultClock;
use taskflow::config::{AppConfig, DEFAULT_TIMEOUT, MarvinSettings};
use taskflow::task::{
    adapters::{
        cloudant::CloudantTaskRepository,
        marvin::MarvinApiClient,
        presentation::{FlowSummary, write_csv},
    },
    domain::{FlowReport, WindowSelection, day},
    services::TaskStatsService,
};
use taskflow::telemetry;
use tracing::info;

type StatsService = TaskStatsService<CloudantTaskRepository, DefaultClock>;

#[derive(Parser)]
#[command(name = "taskflow", version, about = "Cumulative flow statistics for synced tasks")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the cumulative flow from the first task day to today
    Flow {
        /// Ignore tasks created before this day or instant
        #[arg(long, value_parser = day::parse_instant)]
        since: Option<DateTime<Utc>>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Summary)]
        format: OutputFormat,
    },
    /// Compare tasks created and completed inside an interval (default: today)
    Window {
        #[arg(long, value_parser = day::parse_instant)]
        start: Option<DateTime<Utc>>,
        #[arg(long, value_parser = day::parse_instant)]
        end: Option<DateTime<Utc>>,
    },
    /// Show document store server and database information
    Info,
    /// Check the task API access token
    Ping,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Summary,
    Json,
    Csv,
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let cli = Cli::parse();
    telemetry::init_tracing("info")?;

    match cli.command {
        Commands::Ping => ping().await,
        Commands::Flow { since, format } => {
            let report = stats_service()?
                .flow_report(since)
                .await
                .wrap_err("compute cumulative flow")?;
            print_flow(&report, format)
        }
        Commands::Window { start, end } => {
            let selection = stats_service()?
                .tasks_between(start, end)
                .await
                .wrap_err("select tasks in window")?;
            print_window(&selection)
        }
        Commands::Info => info_command().await,
    }
}

fn repository() -> eyre::Result<CloudantTaskRepository> {
    let config = AppConfig::from_env().wrap_err("load configuration")?;
    Ok(CloudantTaskRepository::new(config.cloudant)?)
}

fn stats_service() -> eyre::Result<StatsService> {
    Ok(TaskStatsService::new(
        Arc::new(repository()?),
        Arc::new(DefaultClock),
    ))
}

async fn ping() -> eyre::Result<()> {
    let settings = MarvinSettings::from_env();
    let client = MarvinApiClient::new(settings.api_base(), settings.token(), DEFAULT_TIMEOUT)?;
    client
        .test_credentials()
        .await
        .wrap_err("check task API credentials")?;
    info!("task API accepted the access token");
    Ok(())
}

async fn info_command() -> eyre::Result<()> {
    let store = repository()?;
    let server = store
        .server_information()
        .await
        .wrap_err("fetch server information")?;
    let database = store
        .database_information()
        .await
        .wrap_err("fetch database information")?;

    let mut out = io::stdout().lock();
    writeln!(
        out,
        "server: {} {}",
        server.couchdb,
        server.version.as_deref().unwrap_or("(unknown version)")
    )?;
    writeln!(
        out,
        "database: {} ({} documents, {} deleted)",
        database.db_name, database.doc_count, database.doc_del_count
    )?;
    Ok(())
}

fn print_flow(report: &FlowReport, format: OutputFormat) -> eyre::Result<()> {
    let mut out = io::stdout().lock();
    match format {
        OutputFormat::Csv => write_csv(report, &mut out)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &FlowSummary::from_report(report))?;
            writeln!(out)?;
        }
        OutputFormat::Summary => {
            let summary = FlowSummary::from_report(report);
            writeln!(
                out,
                "window: {} .. {} ({} days)",
                summary.first_day.as_deref().unwrap_or("-"),
                summary.last_day.as_deref().unwrap_or("-"),
                summary.window_days
            )?;
            writeln!(
                out,
                "average daily throughput: {:.2}",
                summary.avg_daily_throughput
            )?;
            writeln!(out, "average daily backlog: {:.2}", summary.avg_daily_backlog)?;
        }
    }
    Ok(())
}

fn print_window(selection: &WindowSelection) -> eyre::Result<()> {
    let mut out = io::stdout().lock();
    writeln!(out, "created: {}", selection.created_count())?;
    for task in &selection.created_in_window {
        writeln!(out, "  + {}", task.title())?;
    }
    writeln!(out, "completed: {}", selection.completed_count())?;
    for task in &selection.completed_in_window {
        writeln!(out, "  - {}", task.title())?;
    }
    writeln!(out, "net change: {:+}", selection.net_change())?;
    Ok(())
}
