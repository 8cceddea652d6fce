//! # vacunas CLI entry point
//!
//! Parses command-line arguments, builds the backend client and dispatches to
//! subcommand handlers on a single-threaded runtime.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use vacunas_cli::alerts::{run_alerts, AlertArgs};
use vacunas_cli::applications::{run_applications, ApplicationArgs};
use vacunas_cli::patients::{run_patients, PatientArgs};
use vacunas_cli::vaccines::{run_vaccines, VaccineArgs};
use vacunas_cli::{resolve_config, ConnectionArgs};
use vacunas_client::VacunasClient;

/// Vaccination tracker — patients, vaccines, dose applications and alerts.
#[derive(Parser, Debug)]
#[command(name = "vacunas", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(flatten)]
    connection: ConnectionArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List and register patients.
    #[command(name = "pacientes")]
    Patients(PatientArgs),

    /// List and register catalog vaccines.
    #[command(name = "vacunas")]
    Vaccines(VaccineArgs),

    /// Record vaccine dose applications.
    #[command(name = "aplicaciones")]
    Applications(ApplicationArgs),

    /// Show overdue and due-today doses.
    #[command(name = "alertas")]
    Alerts(AlertArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("vacunas CLI v{} starting", env!("CARGO_PKG_VERSION"));

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            tracing::error!("failed to start async runtime: {e}");
            return ExitCode::from(1);
        }
    };

    match runtime.block_on(run(cli)) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<u8> {
    let config = resolve_config(&cli.connection)?;
    let client = VacunasClient::new(config)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Patients(args) => run_patients(&args, &client, &mut out).await,
        Commands::Vaccines(args) => run_vaccines(&args, &client, &mut out).await,
        Commands::Applications(args) => run_applications(&args, &client, &mut out).await,
        Commands::Alerts(args) => run_alerts(&args, &client, &mut out).await,
    }
}
