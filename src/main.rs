use anyhow::Context;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use ratesheet::cli;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ratesheet")]
#[command(about = "Record today's exchange rates and recalculate prices in an .xlsx price list")]
#[command(long_about = "Ratesheet - daily exchange rates into an .xlsx price list

Looks up the day's rates on the 'Kurs' sheet (dates in column B, rates in
C..F), writes them to the header of the 'Price2' sheet (B2, D3:E4) and
recalculates every price row from row 7: column J times the EVRO or DOLLAR
rate pair selected by column K, results in L and M.

Running without a command is the same as 'ratesheet run' with defaults.

COMMANDS:
  run      - Record rates, recalculate prices, save the workbook
  lookup   - Show the rates for a date without writing anything

EXAMPLES:
  ratesheet                                  # Pricess2.xlsx, today
  ratesheet run --date 2024-01-15 --dry-run
  ratesheet lookup -f prices.xlsx

Set RUST_LOG=ratesheet=debug to see every cell write.")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Show debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Record the day's rates and recalculate prices
    Run {
        /// Workbook path (default: Pricess2.xlsx)
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Date to look up as YYYY-MM-DD (default: today)
        #[arg(short, long)]
        date: Option<NaiveDate>,

        /// YAML file overriding sheet names and cell coordinates
        #[arg(short, long)]
        layout: Option<PathBuf>,

        /// Calculate without writing the workbook
        #[arg(short = 'n', long)]
        dry_run: bool,
    },

    /// Show the rates for a date without writing anything
    Lookup {
        /// Workbook path (default: Pricess2.xlsx)
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Date to look up as YYYY-MM-DD (default: today)
        #[arg(short, long)]
        date: Option<NaiveDate>,

        /// YAML file overriding sheet names and cell coordinates
        #[arg(short, long)]
        layout: Option<PathBuf>,
    },
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "ratesheet=debug"
    } else {
        "ratesheet=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let command = cli.command.unwrap_or(Commands::Run {
        file: None,
        date: None,
        layout: None,
        dry_run: false,
    });

    match command {
        Commands::Run {
            file,
            date,
            layout,
            dry_run,
        } => {
            let layout = cli::resolve_layout(layout.as_deref(), file)
                .context("Failed to load layout")?;
            cli::run(&layout, date, dry_run)
                .with_context(|| format!("Failed to update {}", layout.file.display()))?;
        }

        Commands::Lookup { file, date, layout } => {
            let layout = cli::resolve_layout(layout.as_deref(), file)
                .context("Failed to load layout")?;
            cli::lookup(&layout, date)
                .with_context(|| format!("Failed to read {}", layout.file.display()))?;
        }
    }

    Ok(())
}
