use anyhow::Context;
use clap::Parser;
use dealiq_client::config::{BASE_URL_ENV, DEFAULT_BASE_URL, TIMEOUT_ENV};
use dealiq_client::render::render_memo;
use dealiq_client::{ClientConfig, HttpMemoSource, MemoSession, Ticker};
use tracing_subscriber::EnvFilter;

/// Generate an investment memo for a ticker and print it
#[derive(Debug, Parser)]
#[command(name = "dealiq", version, about)]
struct Cli {
    /// Stock ticker, e.g. AAPL
    ticker: String,

    /// Memo generator base URL
    #[arg(long, env = BASE_URL_ENV, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Request timeout in seconds
    #[arg(long, env = TIMEOUT_ENV, default_value_t = 120)]
    timeout_secs: u64,

    /// Print the normalized memo as JSON
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let ticker = Ticker::parse(&cli.ticker)?;

    let config = ClientConfig::new()
        .with_base_url(cli.base_url)
        .with_timeout_secs(cli.timeout_secs);
    let session = MemoSession::new(HttpMemoSource::new(config)?);

    let memo = session
        .request(ticker.clone())
        .await
        .with_context(|| format!("failed to generate memo for {ticker}"))?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&*memo)?);
    } else {
        print!("{}", render_memo(&memo, Some(&ticker)));
    }

    if !memo.issues.is_empty() {
        tracing::debug!(issues = ?memo.issues, "sections recovered from malformed input");
    }
    Ok(())
}
