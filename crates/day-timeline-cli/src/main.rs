//! `daytl` CLI — lay out calendar days from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Lay out a snapshot (stdin → stdout)
//! cat day.json | daytl layout
//!
//! # From file to file, with a custom scale
//! daytl layout -i day.json -o layout.json --hour-height 60
//!
//! # Use a TOML config file
//! daytl --config timeline.toml layout -i day.json
//!
//! # Show the CSS classes for a 25-minute entry
//! daytl classify 25
//!
//! # Print the effective configuration as TOML
//! daytl config
//! ```

use std::io::{self, IsTerminal, Read};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use day_timeline::{DaySnapshot, LayoutConfig, LayoutEngine};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "daytl", version, about = "Single-day calendar layout CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// TOML configuration file (hour_height, gap_px, [thresholds])
    #[arg(long, global = true)]
    config: Option<String>,

    /// Pixels per hour (overrides the config file)
    #[arg(long, global = true)]
    hour_height: Option<f64>,

    /// Visual gap subtracted from entry heights, in pixels
    #[arg(long, global = true)]
    gap_px: Option<f64>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Lay out a day snapshot (JSON) into render descriptors (JSON)
    Layout {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Exit with an error if any entry was rejected
        #[arg(long)]
        strict: bool,
    },
    /// Print the duration classes for a length in minutes
    Classify {
        minutes: i64,
    },
    /// Print the effective configuration as TOML
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = load_config(cli.config.as_deref(), cli.hour_height, cli.gap_px)?;
    let engine = LayoutEngine::new(config).context("Invalid layout configuration")?;

    match cli.command {
        Commands::Layout {
            input,
            output,
            strict,
        } => {
            let json = read_input(input.as_deref())?;
            let snapshot: DaySnapshot =
                serde_json::from_str(&json).context("Failed to parse day snapshot JSON")?;

            // Rejected entries are logged by the engine and listed in the output.
            let layout = engine.layout(&snapshot);
            if strict && !layout.rejected.is_empty() {
                anyhow::bail!("{} entries could not be laid out", layout.rejected.len());
            }

            let pretty = serde_json::to_string_pretty(&layout)?;
            write_output(output.as_deref(), &pretty)?;
        }
        Commands::Classify { minutes } => {
            let class = day_timeline::classify_duration(minutes, &engine.config().thresholds);
            println!("{}", class.class_names().join(" "));
        }
        Commands::Config => {
            let toml = toml::to_string_pretty(engine.config())
                .context("Failed to serialize configuration")?;
            print!("{}", toml);
        }
    }

    Ok(())
}

/// Log to stderr. `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .init();
}

/// Build the configuration: defaults, then the TOML file, then CLI flags.
fn load_config(
    path: Option<&str>,
    hour_height: Option<f64>,
    gap_px: Option<f64>,
) -> Result<LayoutConfig> {
    let mut config = match path {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {}", path))?;
            info!("Loading config from: {}", path);
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {}", path))?
        }
        None => LayoutConfig::default(),
    };

    if let Some(hour_height) = hour_height {
        config.hour_height = hour_height;
    }
    if let Some(gap_px) = gap_px {
        config.gap_px = gap_px;
    }
    debug!(?config, "Effective layout config");
    Ok(config)
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
