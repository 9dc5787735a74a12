//! Markets module models.
//!
//! This module contains data structures for Questrade market data, including
//! market information, Level 1 quotes and historical candlesticks.

use chrono::{DateTime, Utc};
use derive_more::Display;
use serde::{Deserialize, Serialize};


/// A market supported by Questrade (e.g. TSX, NYSE).
///
/// Session times refer to the current trading date.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]


pub struct Market {
    pub name: String,
    pub trading_venues: Vec<String>,
    pub default_trading_venue: String,
    pub primary_order_routes: Vec<String>,
    pub secondary_order_routes: Vec<String>,
    pub level1_feeds: Vec<String>,
    pub level2_feeds: Vec<String>,
    pub extended_start_time: Option<DateTime<Utc>>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub extended_end_time: Option<DateTime<Utc>>,
    pub currency: String,
    pub snap_quotes_limit: u64,
}


#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub(crate) struct GetMarketsResponse {
    pub markets: Vec<Market>,
}


/// Level 1 quote for a symbol.
///
/// Price fields are `None` when the server has no value (e.g. no bid).
#[derive(Debug, Clone, Serialize, Deserialize, Display, Default, PartialEq)]
#[display("{} bid {:?} x {} / ask {:?} x {}", symbol, bid_price, bid_size, ask_price, ask_size)]
#[serde(rename_all = "camelCase", default)]


pub struct Quote {
    #[serde(deserialize_with = "crate::helpers::null_as_default")]
    pub symbol: String,
    #[serde(deserialize_with = "crate::helpers::null_as_default")]
    pub symbol_id: u64,
    #[serde(deserialize_with = "crate::helpers::null_as_default")]
    pub tier: String,
    pub bid_price: Option<f64>,
    #[serde(deserialize_with = "crate::helpers::null_as_default")]
    pub bid_size: u64,
    pub ask_price: Option<f64>,
    #[serde(deserialize_with = "crate::helpers::null_as_default")]
    pub ask_size: u64,
    #[serde(alias = "lastTradeTrHrs")]
    pub last_trade_price_tr_hrs: Option<f64>,
    pub last_trade_price: Option<f64>,
    #[serde(deserialize_with = "crate::helpers::null_as_default")]
    pub last_trade_size: u64,
    pub last_trade_tick: Option<String>,
    pub last_trade_time: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "crate::helpers::null_as_default")]
    pub volume: u64,
    pub open_price: Option<f64>,
    pub high_price: Option<f64>,
    pub low_price: Option<f64>,
    #[serde(deserialize_with = "crate::helpers::null_as_default")]
    pub delay: u64,
    #[serde(deserialize_with = "crate::helpers::null_as_default")]
    pub is_halted: bool,
}


/// Response envelope for quote calls. This is also the shape of each
/// streaming quote frame; any other keys are ignored.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct QuoteBatch {
    #[serde(deserialize_with = "crate::helpers::null_as_default")]
    pub quotes: Vec<Quote>,
}


/// OHLC candlestick.
#[derive(Debug, Clone, Serialize, Deserialize, Display, Default, PartialEq)]
#[display("{:?}: o {} h {} l {} c {} v {}", start, open, high, low, close, volume)]
#[serde(rename_all = "camelCase", default)]


pub struct Candlestick {
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
}


#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub(crate) struct GetCandlesResponse {
    pub candles: Vec<Candlestick>,
}


/// Candle granularity accepted by `get_candles`.
#[derive(Serialize, Display, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandleInterval {
    OneMinute,
    TwoMinutes,
    ThreeMinutes,
    FourMinutes,
    FiveMinutes,
    TenMinutes,
    FifteenMinutes,
    TwentyMinutes,
    HalfHour,
    OneHour,
    TwoHours,
    FourHours,
    OneDay,
    OneWeek,
    OneMonth,
    OneYear,
}


#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CandlesQuery {
    pub start_time: String,
    pub end_time: String,
    pub interval: CandleInterval,
}
