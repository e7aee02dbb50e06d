use anyhow::Result;
use axum::Router;
use clap::Parser;
use engine::EngineConfig;
use std::net::SocketAddr;
use tracing_subscriber::{fmt, EnvFilter};
use server::build_app;
use tokio::net::TcpListener;

#[derive(Parser)]
struct Args {
    /// Catalog CSV file or directory
    #[arg(long, default_value = "./dataset/movies.csv")]
    catalog: String,
    /// Host to bind
    #[arg(long, default_value = "0.0.0.0")]
    host: String,
    /// Port to bind
    #[arg(long, default_value_t = 8080)]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let args = Args::parse();
    let config = EngineConfig::from_env()?;
    let app: Router = build_app(args.catalog.clone(), config)?;

    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, catalog = %args.catalog, "server listening");
    axum::serve(listener, app).await?;
    Ok(())
}
