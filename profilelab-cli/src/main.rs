//! ProfileLab CLI: run studies over candle files.
//!
//! Commands:
//! - `study`: run the studies listed in a TOML file and print JSON results
//! - `risk`: size a position and print the risk report as JSON
//! - `sessions`: summarize the calendar-day groups of a candle file

mod input;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use profilelab_core::risk::{RiskParams, RiskReport, Side};
use profilelab_core::session::{group_by_calendar_day, to_calendar_components};
use profilelab_core::study::StudyFile;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "profilelab",
    about = "ProfileLab CLI: market profile and indicator studies over OHLC candles"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the studies in a TOML file over a candle file.
    Study {
        /// Candle file (.csv or .json), times in exchange-local epoch seconds.
        #[arg(long)]
        candles: PathBuf,

        /// TOML file with one `[[studies]]` table per study.
        #[arg(long)]
        config: PathBuf,

        /// Pretty-print the JSON output.
        #[arg(long, default_value_t = false)]
        pretty: bool,
    },
    /// Position size, target and reward for one trade.
    Risk {
        #[arg(long)]
        capital: f64,

        /// Percent of capital to risk (1 = 1%).
        #[arg(long)]
        risk_percent: f64,

        #[arg(long)]
        entry: f64,

        #[arg(long)]
        stop_loss: f64,

        #[arg(long, value_enum, default_value_t = SideArg::Buy)]
        side: SideArg,

        /// Explicit target price. Overrides --rr.
        #[arg(long)]
        target: Option<f64>,

        /// Reward multiple of the risk when no target is given.
        #[arg(long, default_value_t = 2.0)]
        rr: f64,
    },
    /// Per-day candle counts and OHLC of a candle file.
    Sessions {
        #[arg(long)]
        candles: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum SideArg {
    Buy,
    Sell,
}

impl From<SideArg> for Side {
    fn from(side: SideArg) -> Self {
        match side {
            SideArg::Buy => Side::Buy,
            SideArg::Sell => Side::Sell,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Study {
            candles,
            config,
            pretty,
        } => run_study_cmd(&candles, &config, pretty),
        Commands::Risk {
            capital,
            risk_percent,
            entry,
            stop_loss,
            side,
            target,
            rr,
        } => {
            let mut params = RiskParams::new(capital, risk_percent, entry, stop_loss, side.into())
                .with_risk_reward(rr);
            params.target = target;
            run_risk_cmd(&params)
        }
        Commands::Sessions { candles } => run_sessions_cmd(&candles),
    }
}

fn run_study_cmd(candles_path: &Path, config_path: &Path, pretty: bool) -> Result<()> {
    let candles = input::load_candles(candles_path)?;
    let text = std::fs::read_to_string(config_path)
        .with_context(|| format!("reading {}", config_path.display()))?;
    let file = StudyFile::from_toml_str(&text)?;
    info!(studies = file.studies.len(), candles = candles.len(), "running studies");

    let results = file.run(&candles)?;
    let json = if pretty {
        serde_json::to_string_pretty(&results)?
    } else {
        serde_json::to_string(&results)?
    };
    println!("{json}");
    Ok(())
}

fn run_risk_cmd(params: &RiskParams) -> Result<()> {
    let report = RiskReport::calculate(params);
    println!("{}", serde_json::to_string_pretty(&report)?);
    if let RiskReport::Failure { .. } = report {
        std::process::exit(1);
    }
    Ok(())
}

fn run_sessions_cmd(candles_path: &Path) -> Result<()> {
    let candles = input::load_candles(candles_path)?;
    let groups = group_by_calendar_day(&candles);

    if groups.is_empty() {
        println!("No candles in {}", candles_path.display());
        return Ok(());
    }

    println!("Sessions: {}", groups.len());
    println!();
    println!(
        "{:<12} {:>7} {:>7} {:>6} {:>6} {:>10} {:>10} {:>10} {:>10}",
        "Date", "Candles", "Market", "First", "Last", "Open", "High", "Low", "Close"
    );
    println!("{}", "-".repeat(86));
    for group in groups.iter() {
        let (Some(first), Some(last)) = (group.candles.first(), group.candles.last()) else {
            continue;
        };
        let high = group.candles.iter().map(|c| c.high).fold(f64::NEG_INFINITY, f64::max);
        let low = group.candles.iter().map(|c| c.low).fold(f64::INFINITY, f64::min);
        println!(
            "{:<12} {:>7} {:>7} {:>6} {:>6} {:>10.2} {:>10.2} {:>10.2} {:>10.2}",
            group.date_str,
            group.candles.len(),
            group.market_hours().len(),
            clock(first.time),
            clock(last.time),
            first.open,
            high,
            low,
            last.close,
        );
    }
    Ok(())
}

fn clock(time: i64) -> String {
    let c = to_calendar_components(time);
    format!("{:02}:{:02}", c.hours, c.minutes)
}
