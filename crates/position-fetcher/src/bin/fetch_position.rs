//! Position fetcher CLI binary
//!
//! Run with:
//! ```bash
//! cargo run -p position-fetcher --bin fetch-position
//! ```

use alloy_primitives::B256;
use clap::Parser;
use position_core::Position;
use position_fetcher::{EthRpcClient, FetcherConfig, PositionFetcher};
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "fetch-position")]
#[command(about = "Derive a Uniswap V3 position key and read the position from its pool")]
struct Args {
    /// JSON config file (defaults to the built-in Arbitrum position)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the JSON-RPC URL
    #[arg(long)]
    rpc_url: Option<String>,

    /// Just check connection and exit
    #[arg(long)]
    check: bool,

    /// Print the record as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct Output<'a> {
    key: B256,
    position: &'a Position,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("position_fetcher=info".parse()?),
        )
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => FetcherConfig::load(path)?,
        None => FetcherConfig::default(),
    };
    if let Some(url) = args.rpc_url {
        config = config.with_rpc_url(url);
    }

    let rpc = EthRpcClient::new(&config.rpc_url).await?;

    if args.check {
        let block = rpc.block_number().await?;
        println!("[OK] Connected to {} at block {}", config.rpc_url, block);
        return Ok(());
    }

    let fetcher = PositionFetcher::new(config, rpc)?;
    let (key, position) = fetcher.fetch_position().await?;

    if args.json {
        let out = Output {
            key,
            position: &position,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("position key: {key}");
        println!("{position:#?}");
    }
    Ok(())
}
