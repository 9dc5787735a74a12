use anyhow::{Context, Result};
use std::env;

const SYMBOL_IDS: &str = "QUESTRADE_SYMBOL_IDS";
const CANDLE_DAYS: &str = "QUESTRADE_CANDLE_DAYS";
const STREAM_MESSAGES: &str = "QUESTRADE_STREAM_MESSAGES";

/// What the scraper pulls on each run.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    // Symbol ids to fetch candles and quotes for (8049 = AAPL, 9291 = BMO).
    pub symbol_ids: Vec<u64>,

    // How many days of daily candles to print per symbol.
    pub candle_days: i64,

    // Quote stream batches to print before exiting. 0 skips streaming.
    pub stream_messages: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            symbol_ids: vec![8049, 9291],
            candle_days: 5,
            stream_messages: 0,
        }
    }
}

impl Config {
    /// Defaults overlaid with whatever is set in the process environment.
    pub fn from_env() -> Result<Self> {
        Self::default().overlay(|key| env::var(key).ok())
    }

    fn overlay<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(SYMBOL_IDS) {
            self.symbol_ids = raw
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(|s| s.parse::<u64>().with_context(|| format!("bad symbol id {s:?} in {SYMBOL_IDS}")))
                .collect::<Result<Vec<u64>>>()?;
        }
        if let Some(raw) = lookup(CANDLE_DAYS) {
            self.candle_days = raw
                .trim()
                .parse()
                .with_context(|| format!("{CANDLE_DAYS} must be a whole number of days"))?;
        }
        if let Some(raw) = lookup(STREAM_MESSAGES) {
            self.stream_messages = raw
                .trim()
                .parse()
                .with_context(|| format!("{STREAM_MESSAGES} must be a count"))?;
        }
        Ok(self)
    }
}
