//! PlaReady CLI - racquet stringing from the terminal
//!
//! Customers book and track stringing orders, partners work their queue and
//! admins manage partners, all against the PlaReady web API.

use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use plaready_api_client::ApiError;
use plaready_cli::OutputFormat;
use plaready_core::config::Config;
use plaready_core::error::exit_codes;
use plaready_telemetry::{TelemetryConfig, Timer};
use std::process::ExitCode;

mod commands;
mod session;

use commands::{admin, auth, coupons, orders, partner, services, Context};
use session::Session;

/// Command-line client for the PlaReady marketplace
#[derive(Parser)]
#[command(name = "plaready")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Configuration file (defaults to ./plaready.toml when present)
    #[arg(short, long, global = true, env = "PLAREADY_CONFIG")]
    config: Option<String>,

    /// Site origin, e.g. https://plaready.in (overrides PLAREADY_ORIGIN)
    #[arg(long, global = true)]
    origin: Option<String>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Register, log in and inspect the current session
    Auth {
        #[command(subcommand)]
        command: auth::AuthCommand,
    },

    /// Browse the service catalog
    Services {
        #[command(subcommand)]
        command: services::ServicesCommand,
    },

    /// Book and track your orders
    Orders {
        #[command(subcommand)]
        command: orders::OrdersCommand,
    },

    /// Check coupon codes
    Coupons {
        #[command(subcommand)]
        command: coupons::CouponsCommand,
    },

    /// Partner workshop operations
    Partner {
        #[command(subcommand)]
        command: partner::PartnerCommand,
    },

    /// Marketplace administration
    Admin {
        #[command(subcommand)]
        command: admin::AdminCommand,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red().bold(), e);
            ExitCode::from(exit_code_for(&e))
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = Config::load(cli.config.as_deref())?;

    plaready_telemetry::init_with_config(
        TelemetryConfig::from_section(&config.schema.telemetry).with_verbosity(cli.verbose),
    )?;
    tracing::debug!(config = ?config.path, "Configuration loaded");

    let ctx = Context::new(Session::open(&config, cli.origin.as_deref())?, cli.format);

    let timer = Timer::start("command");
    let result = match cli.command {
        Commands::Auth { command } => auth::run(&ctx, command).await,
        Commands::Services { command } => services::run(&ctx, command).await,
        Commands::Orders { command } => orders::run(&ctx, command).await,
        Commands::Coupons { command } => coupons::run(&ctx, command).await,
        Commands::Partner { command } => partner::run(&ctx, command).await,
        Commands::Admin { command } => admin::run(&ctx, command).await,
    };
    timer.stop();
    result
}

/// Map a failure to the process exit status
fn exit_code_for(err: &anyhow::Error) -> u8 {
    let code = if err
        .downcast_ref::<ApiError>()
        .is_some_and(ApiError::is_unauthorized)
    {
        exit_codes::NOT_AUTHENTICATED
    } else if err
        .downcast_ref::<plaready_core::Error>()
        .is_some_and(|e| e.code.category() == "Configuration")
    {
        exit_codes::CONFIG_ERROR
    } else {
        exit_codes::FAILURE
    };
    u8::try_from(code).unwrap_or(1)
}
