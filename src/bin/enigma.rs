//! Command line front end for the Enigma engine.
//!
//! Settings come from a TOML key sheet (`--config`), individual flags, or
//! both (flags win). The message is taken from the positional arguments; if
//! there are none, stdin is read line by line through a single machine, the
//! way an operator keeps typing into the same machine.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use enigma::config::{parse_rotors, parse_settings};
use enigma::{MachineConfig, Plugboard};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "enigma", version, about = "Three-rotor Enigma (M3) cipher machine")]
struct Cli {
    /// TOML key sheet with rotors, positions, ring_settings and plugboard.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Wheel order left to right, e.g. "I II III" or "0 1 2".
    #[arg(long)]
    rotors: Option<String>,
    /// Start positions, e.g. "0 0 0" or "AAA".
    #[arg(long)]
    positions: Option<String>,
    /// Ring settings, e.g. "1 4 5" or "BEF".
    #[arg(long)]
    rings: Option<String>,
    /// Plugboard pairs, e.g. "AB CD EF".
    #[arg(long)]
    plugboard: Option<String>,
    /// Message to process. Reads stdin when omitted.
    message: Vec<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = resolve_config(&cli)?;
    let mut machine = config.build().context("invalid machine settings")?;
    info!(positions = %machine.position_letters(), "machine ready");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if !cli.message.is_empty() {
        writeln!(out, "{}", machine.process(&cli.message.join(" ")))?;
        return Ok(());
    }

    for line in io::stdin().lock().lines() {
        let line = line.context("failed to read stdin")?;
        writeln!(out, "{}", machine.process(&line))?;
    }
    info!(positions = %machine.position_letters(), "end of input");
    Ok(())
}

fn resolve_config(cli: &Cli) -> Result<MachineConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("failed to read key sheet '{}'", path.display()))?;
            MachineConfig::from_toml_str(&raw)
                .with_context(|| format!("failed to parse key sheet '{}'", path.display()))?
        }
        None => MachineConfig::default(),
    };

    if let Some(raw) = &cli.rotors {
        config.rotors = parse_rotors(raw).context("invalid --rotors")?;
    }
    if let Some(raw) = &cli.positions {
        config.positions = parse_settings(raw).context("invalid --positions")?;
    }
    if let Some(raw) = &cli.rings {
        config.ring_settings = parse_settings(raw).context("invalid --rings")?;
    }
    if let Some(raw) = &cli.plugboard {
        raw.parse::<Plugboard>().context("invalid --plugboard")?;
        config.plugboard = raw.clone();
    }
    Ok(config)
}
