use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use engine::loader::load_catalog;
use engine::{EngineConfig, RecommendationIndex, TfWeighting};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

mod repl;

#[derive(Parser)]
#[command(name = "recommender")]
#[command(about = "Content-based movie recommendations from a CSV catalog", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct CatalogArgs {
    /// Catalog CSV file, or a directory of CSV files
    #[arg(long, default_value = "./dataset/movies.csv")]
    catalog: PathBuf,
    /// Use sublinear term frequency 1 + ln(tf) instead of raw counts
    #[arg(long, default_value_t = false)]
    sublinear_tf: bool,
    /// Compute similarity rows on demand for catalogs larger than this
    #[arg(long)]
    max_materialized: Option<usize>,
}

#[derive(Subcommand)]
enum Commands {
    /// Recommend movies similar to one title
    Query {
        #[command(flatten)]
        source: CatalogArgs,
        /// Title of a movie you like
        #[arg(long)]
        title: String,
        /// Number of recommendations
        #[arg(short, long, default_value_t = 5, allow_negative_numbers = true)]
        k: i64,
        /// Print results as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Interactive prompt; type 'exit' to quit
    Repl {
        #[command(flatten)]
        source: CatalogArgs,
        /// Count used when the prompt is left blank
        #[arg(long, default_value_t = 5)]
        default_k: i64,
    },
    /// Print fitting statistics for a catalog
    Stats {
        #[command(flatten)]
        source: CatalogArgs,
    },
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Query { source, title, k, json } => {
            let index = build_index(&source)?;
            print!("{}", render_query(&index, &title, k, json)?);
            Ok(())
        }
        Commands::Repl { source, default_k } => {
            let index = build_index(&source)?;
            let stdin = io::stdin();
            repl::run(&index, default_k, stdin.lock(), io::stdout())
        }
        Commands::Stats { source } => {
            let index = build_index(&source)?;
            println!("{}", render_stats(&index)?);
            Ok(())
        }
    }
}

fn build_index(source: &CatalogArgs) -> Result<RecommendationIndex> {
    let mut config = EngineConfig::from_env()?;
    if source.sublinear_tf {
        config.tf_weighting = TfWeighting::Sublinear;
    }
    if let Some(max) = source.max_materialized {
        config.max_materialized = max;
    }
    let catalog = load_catalog(&source.catalog)?;
    tracing::info!(catalog = %source.catalog.display(), entries = catalog.len(), "catalog loaded");
    Ok(RecommendationIndex::load(catalog, &config)?)
}

fn render_query(index: &RecommendationIndex, title: &str, k: i64, json: bool) -> Result<String> {
    let recs = index.recommend(title, k)?;
    if json {
        return Ok(format!("{}\n", serde_json::to_string_pretty(&recs)?));
    }
    let mut out = Vec::new();
    repl::print_recommendations(&mut out, title, &recs)?;
    Ok(String::from_utf8(out)?)
}

fn render_stats(index: &RecommendationIndex) -> Result<String> {
    Ok(serde_json::to_string_pretty(index.stats())?)
}
