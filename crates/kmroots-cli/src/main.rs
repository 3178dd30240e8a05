//! CLI binary: construct the root system of the Feingold-Frenkel algebra
//! up to a given height and write it to disk.

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use kmroots_engine::config::KmrootsConfig;
use kmroots_engine::export::{self, ExportFormat};
use kmroots_engine::feingold_frenkel::FeingoldFrenkel;
use kmroots_engine::system::RootSystem;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(
    name = "kmroots",
    about = "Construct the positive root system of the Feingold-Frenkel algebra"
)]
struct Cli {
    /// Height up to which the root system will be constructed
    #[arg(value_parser = clap::value_parser!(u32).range(1..), default_value_t = 76)]
    height: u32,

    /// Output file (defaults to the configured [output].file, or roots.txt)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format: txt or json
    #[arg(short, long)]
    format: Option<String>,

    /// Resolve each height on a single thread
    #[arg(long)]
    sequential: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let cwd = std::env::current_dir().context("failed to get current directory")?;
    let config = KmrootsConfig::load(&cwd)?;

    let format: ExportFormat = cli
        .format
        .as_deref()
        .unwrap_or(&config.output.format)
        .parse()
        .map_err(anyhow::Error::msg)?;
    let output = cli
        .output
        .unwrap_or_else(|| PathBuf::from(&config.output.file));
    let parallel = !cli.sequential && config.construction.parallel;
    tracing::debug!(?output, ?format, parallel, "resolved configuration");

    println!("Constructing the root system up to height {}", cli.height);
    let start = Instant::now();

    let mut system = RootSystem::with_parallelism(FeingoldFrenkel::new(), parallel);
    let bar = ProgressBar::new(u64::from(cli.height));
    bar.set_style(
        ProgressStyle::default_bar()
            .template("{bar:40.green} {pos}/{len} heights")
            .expect("valid template"),
    );
    while system.frontier() < i64::from(cli.height) {
        system.advance()?;
        bar.inc(1);
    }
    bar.finish_and_clear();

    let roots = system.roots();
    export::write(&output, &roots, format)?;

    let elapsed = start.elapsed().as_secs();
    println!("Construction completed in {elapsed} seconds");
    println!("{} roots written to {}", roots.len(), output.display());

    Ok(())
}
