use anyhow::Result;
use clap::Parser;
use generator::{write_dataset, Mix};
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "generator")]
#[command(about = "Generate a synthetic movie catalog as CSV")]
struct Cli {
    /// Output CSV file path
    #[arg(long, default_value = "./dataset/movies.csv")]
    output: PathBuf,
    /// Number of movies to generate
    #[arg(long, default_value_t = 15_000)]
    count: usize,
    /// Random seed; identical seeds produce identical catalogs
    #[arg(long, default_value_t = 42)]
    seed: u64,
    /// Industry shares, e.g. Hollywood=0.6,Bollywood=0.3,Lollywood=0.1
    #[arg(long, default_value = "Hollywood=0.6,Bollywood=0.3,Lollywood=0.1")]
    mix: Mix,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let args = Cli::parse();
    let manifest = write_dataset(&args.output, args.count, &args.mix, args.seed)?;
    tracing::info!(output = %args.output.display(), count = manifest.count, seed = manifest.seed, "dataset generated");
    Ok(())
}
