// src/report.rs
use tracing::info;

use questrade_rs::accounts::models::{Account, AccountBalances};
use questrade_rs::markets::models::{Candlestick, Quote};
use questrade_rs::RateLimit;

pub fn print_account(account: &Account, balances: &AccountBalances) {
    println!("{account}");
    for balance in &balances.combined_balances {
        println!("    {balance}");
    }
    if balances.combined_balances.is_empty() {
        println!("    (no balances)");
    }
}

pub fn print_candles(symbol_id: u64, candles: &[Candlestick]) {
    println!("\nDaily candles for {symbol_id}:");
    for candle in candles {
        println!("    {candle}");
    }
}

pub fn print_quotes(quotes: &[Quote]) {
    for quote in quotes {
        println!("{quote}");
    }
}

pub fn log_rate_limit(rate_limit: RateLimit) {
    info!(
        remaining = rate_limit.remaining,
        reset_at = %rate_limit.reset_at,
        "rate limit snapshot"
    );
}
