//! Electric Bill: interactive calculator
//!
//! ```sh
//! # Interactive session with default config (~/.config/electric-bill/config.toml)
//! electric-bill
//!
//! # One-shot quote, nothing recorded
//! electric-bill quote --units 120 --class residential --senior
//!
//! # Validate config without starting
//! electric-bill --check
//! ```

mod shell;

use std::io;
use std::path::PathBuf;

use chrono::Local;
use clap::{Parser, Subcommand};
use tracing::{error, info};

use electric_bill::application::services::render_statement;
use electric_bill::application::BillDocument;
use electric_bill::config::CONFIG_ENV_VAR;
use electric_bill::{init_tracing, AppConfig, BillForm, BillingSession, CustomerClass, DiscountType};

use crate::shell::{Console, Shell};

/// Tiered electricity bill calculator with session history and export.
#[derive(Parser, Debug)]
#[command(name = "electric-bill", version, about)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = CONFIG_ENV_VAR)]
    config: Option<PathBuf>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    /// Override the currency symbol printed before amounts.
    #[arg(long)]
    currency: Option<String>,

    /// Validate the configuration file and exit.
    #[arg(long)]
    check: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Interactive billing session (default).
    Shell,
    /// Print a bill statement for the given usage without recording it.
    Quote {
        /// Usage in kWh.
        #[arg(short, long)]
        units: String,

        /// Customer type: residential or commercial.
        #[arg(short, long, default_value = "residential")]
        class: CustomerClass,

        /// Apply the 5% senior citizen discount.
        #[arg(long)]
        senior: bool,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // ── Load configuration ─────────────────────────────────────
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(electric_bill::default_config_path);

    let mut config = match AppConfig::load(&config_path) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load config from {}: {}", config_path.display(), e);
            eprintln!("Using default configuration.");
            AppConfig::default()
        }
    };

    // ── Apply CLI overrides ────────────────────────────────────
    if let Some(ref level) = cli.log_level {
        config.logging.level = level.clone();
    }
    if let Some(ref currency) = cli.currency {
        config.billing.currency_symbol = currency.clone();
    }

    init_tracing(&config);
    info!("Configuration: {}", config_path.display());

    // ── Config validation mode ─────────────────────────────────
    if cli.check {
        println!("✅ Configuration is valid");
        println!("   Config file : {}", config_path.display());
        println!("   Log level   : {}", config.logging.level);
        println!("   Log format  : {}", config.logging.format);
        println!("   Currency    : {}", config.billing.currency_symbol);
        println!("   Statements  : {:?}", config.billing.statement_format);
        println!(
            "   Export dir  : {}",
            config
                .export
                .directory
                .as_ref()
                .map(|d| d.display().to_string())
                .unwrap_or_else(|| ".".to_string())
        );
        return Ok(());
    }

    let session = BillingSession::from_config(&config);

    match cli.command.unwrap_or(Command::Shell) {
        Command::Shell => {
            let stdin = io::stdin();
            let console = Console::new(stdin.lock(), io::stdout());
            let month = Local::now().format("%B %Y").to_string();
            let mut shell = Shell::new(console, session, month);
            shell.run()?;
            info!(
                records = shell.session().ledger().len(),
                "Session ended; history discarded"
            );
        }
        Command::Quote {
            units,
            class,
            senior,
        } => {
            let form = BillForm {
                customer_class: class,
                discount: if senior {
                    DiscountType::SeniorCitizen
                } else {
                    DiscountType::None
                },
                billing_month: Local::now().format("%B %Y").to_string(),
                usage: units,
                ..BillForm::default()
            };
            let (kwh, bill) = session.quote(&form).inspect_err(|e| error!("{e}"))?;
            print!(
                "{}",
                render_statement(&BillDocument::new(&form, kwh, &bill), session.currency())
            );
        }
    }

    Ok(())
}
