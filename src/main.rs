mod config;
mod report;

use anyhow::{Context, Result};
use chrono::{Duration, Utc};
use dotenv::dotenv;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use questrade_rs::auth::auth_loader::load_auth_from_env;
use questrade_rs::markets::models::CandleInterval;
use questrade_rs::QuestradeClient;

use config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // Basic logging: set RUST_LOG=info (or debug) to see output.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    dotenv().ok();

    let cfg = Config::from_env()?;
    let auth = load_auth_from_env().context("loading Questrade credentials")?;
    let client = QuestradeClient::connect(auth.refresh_token, auth.environment)
        .await
        .context("logging in to Questrade")?;

    // The refresh token we started with is spent now
    println!(
        "export QUESTRADE_REFRESH_TOKEN={}\n",
        client.credentials().refresh_token
    );

    let time = client.get_server_time().await.context("reading server time")?;
    info!(%time, "server time");

    let (user_id, accounts) = client.get_accounts().await.context("listing accounts")?;
    println!("User {user_id} has {} accounts:", accounts.len());
    for account in &accounts {
        let balances = client
            .get_balances(&account.number)
            .await
            .with_context(|| format!("balances for account {}", account.number))?;
        report::print_account(account, &balances);
    }

    if cfg.symbol_ids.is_empty() {
        warn!("no symbol ids configured, skipping market data");
        report::log_rate_limit(client.rate_limit());
        return Ok(());
    }

    let end = Utc::now();
    let start = end - Duration::days(cfg.candle_days);
    for &id in &cfg.symbol_ids {
        let candles = client
            .get_candles(id, start, end, CandleInterval::OneDay)
            .await
            .with_context(|| format!("candles for symbol {id}"))?;
        report::print_candles(id, &candles);
    }

    println!("\nQuotes:");
    let quotes = client
        .get_quotes(&cfg.symbol_ids)
        .await
        .context("fetching quotes")?;
    report::print_quotes(&quotes);

    if cfg.stream_messages > 0 {
        let mut stream = client
            .stream_quotes(&cfg.symbol_ids)
            .await
            .context("opening quote stream")?;
        println!("\nStreaming {} batches:", cfg.stream_messages);
        for _ in 0..cfg.stream_messages {
            let quotes = stream.read_next().await.context("reading quote stream")?;
            report::print_quotes(&quotes);
        }
        stream.close().await.context("closing quote stream")?;
    }

    report::log_rate_limit(client.rate_limit());
    Ok(())
}
