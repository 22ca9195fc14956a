//! currency-check
//!
//! Reports whether the selected currency differs from the current one.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin currency-check -- --current CHF --selected USD
//! RUST_LOG=currency_check=debug cargo run --bin currency-check -- --selected EUR
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use currency_check::{CurrencyCode, change_message, currency_changed};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "currency-check")]
#[command(about = "Detects whether a currency selection changed")]
struct Cli {
    /// Currency currently stored (omit if none)
    #[arg(long)]
    current: Option<String>,

    /// Currency newly selected (omit to clear)
    #[arg(long)]
    selected: Option<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "currency_check=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let current = CurrencyCode::parse_optional(cli.current.as_deref())
        .context("invalid --current currency")?;
    let selected = CurrencyCode::parse_optional(cli.selected.as_deref())
        .context("invalid --selected currency")?;

    let changed = currency_changed(current, selected.clone());
    tracing::info!(changed, "currency selection checked");

    let report =
        change_message(changed, &selected).get_or_else_value("currency unchanged".to_string());
    println!("{report}");

    Ok(())
}
