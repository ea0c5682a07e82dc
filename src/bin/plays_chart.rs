use anyhow::{Context, Result};
use clap::Parser;
use plays_chart::{chart_facts, ChartInput};
use std::fs;
use std::io::Read;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "plays-chart",
    version,
    about = "Prepare per-day play-count data for chart rendering"
)]
struct Cli {
    /// Input JSON file with { "config": ..., "dataSets": [...] }.
    /// Reads stdin when omitted.
    #[arg(short, long)]
    input: Option<PathBuf>,
    /// Pretty-print the JSON output.
    #[arg(long, default_value_t = false)]
    pretty: bool,
}

fn read_input(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
        }
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading stdin")?;
            Ok(buf)
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let raw = read_input(cli.input.as_ref())?;
    let input: ChartInput = serde_json::from_str(&raw).context("parsing chart input")?;
    let (config, data_sets) = input.unpack();

    // `None` serializes as `null`: a valid "nothing to render" result.
    let facts = chart_facts(data_sets, &config)?;
    let out = if cli.pretty {
        serde_json::to_string_pretty(&facts)?
    } else {
        serde_json::to_string(&facts)?
    };
    println!("{out}");
    Ok(())
}
