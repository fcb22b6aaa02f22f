//! crypto-news - console and web front end for the aggregation client.
//!
//! Exit codes:
//!   0 - Success
//!   1 - Configuration or upstream error

mod cli;
mod console;
mod web;

use anyhow::{Context, Result};
use cli::{Args, Command};
use crypto_news::{Tracker, TrackerClient, TrackerConfig};
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // A missing .env is normal; real env vars still apply.
    let _ = dotenvy::dotenv();

    let args = Args::parse_args();
    init_logging(&args);
    debug!("Arguments: {:?}", args.command);

    if let Err(e) = run(args).await {
        error!("{e:#}");
        eprintln!("❌ Error: {e:#}");
        std::process::exit(1);
    }
}

fn init_logging(args: &Args) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(args.log_level().as_str().to_ascii_lowercase()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

async fn run(args: Args) -> Result<()> {
    // Keyword lookup is the one path that needs a real key up front.
    let config = match args.command {
        Command::Search { .. } => args.search_config()?,
        _ => args.tracker_config(),
    };
    info!(mode = %config.mode(), "crypto-news v{}", env!("CARGO_PKG_VERSION"));

    let tracker = build_tracker(config)?;

    match args.command {
        Command::Search { keyword } => {
            let keyword = keyword.join(" ");
            println!("🔍 Searching news for \"{keyword}\"...");
            let articles = tracker
                .news(&keyword, crypto_news::news::MAX_LIMIT)
                .await
                .context("Error fetching news")?;
            console::print_search(&keyword, &articles);
        }
        Command::Headlines { country } => {
            let articles = tracker
                .headlines(&country, crypto_news::news::DEFAULT_LIMIT)
                .await
                .context("Error fetching headlines")?;
            println!("--- Top headlines ({}) ---", country.to_uppercase());
            for line in console::article_lines(&articles, console::LOOKUP_SHOWN) {
                println!("{line}");
            }
        }
        Command::Coins { limit } => {
            let coins = tracker
                .top_coins(limit)
                .await
                .context("Error fetching coins")?;
            console::print_coins(&coins);
        }
        Command::Coin { id } => {
            let detail = tracker
                .coin_details(&id)
                .await
                .with_context(|| format!("Error fetching coin details for `{id}`"))?;
            for line in console::detail_lines(&detail) {
                println!("{line}");
            }
        }
        Command::Dashboard => {
            let board = tracker.dashboard().await;
            console::print_dashboard(&board);
        }
        Command::Serve { port, host } => {
            web::serve(tracker, &host, port).await?;
        }
    }
    Ok(())
}

fn build_tracker(config: TrackerConfig) -> Result<Tracker> {
    let client = TrackerClient::new(config).context("failed to build HTTP client")?;
    Ok(Tracker::new(&client))
}
