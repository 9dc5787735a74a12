//! Symbols module models.

use chrono::{DateTime, Utc};
use derive_more::Display;
use serde::{Deserialize, Serialize};


/// Detailed information about a symbol.
#[derive(Deserialize, Serialize, Display, Debug, Clone, Default, PartialEq)]
#[display("{} ({}): {}", symbol, symbol_id, description)]
#[serde(rename_all = "camelCase", default)]


pub struct Symbol {
    pub symbol: String,
    pub symbol_id: u64,
    pub prev_day_close_price: Option<f64>,
    pub high_price52: Option<f64>,
    pub low_price52: Option<f64>,
    pub average_vol3_months: Option<u64>,
    pub average_vol20_days: Option<u64>,
    pub outstanding_shares: Option<u64>,
    pub eps: Option<f64>,
    pub pe: Option<f64>,
    pub dividend: Option<f64>,
    #[serde(rename = "yield")]
    pub yield_: Option<f64>,
    pub ex_date: Option<DateTime<Utc>>,
    pub market_cap: Option<f64>,
    pub option_type: Option<String>,
    pub option_duration_type: Option<String>,
    pub option_root: String,
    pub option_contract_deliverables: OptionContractDeliverables,
    pub option_exercise_type: Option<String>,
    pub listing_exchange: String,
    pub description: String,
    pub security_type: String,
    pub option_expiry_date: Option<DateTime<Utc>>,
    pub dividend_date: Option<DateTime<Utc>>,
    pub option_strike_price: Option<f64>,
    pub is_quotable: bool,
    pub has_options: bool,
    pub currency: String,
    pub min_ticks: Vec<MinTickData>,
}


#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct UnderlyingMultiplierPair {
    pub multiplier: u64,
    pub underlying_symbol: String,
    pub underlying_symbol_id: u64,
}


#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct OptionContractDeliverables {
    pub underlyings: Vec<UnderlyingMultiplierPair>,
    pub cash_in_lieu: f64,
}


#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct MinTickData {
    pub pivot: f64,
    pub min_tick: f64,
}


#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub(crate) struct GetSymbolsResponse {
    pub symbols: Vec<Symbol>,
}


/// Symbol returned by a prefix search.
#[derive(Deserialize, Serialize, Display, Debug, Clone, Default, PartialEq)]
#[display("{} ({}) on {}", symbol, symbol_id, listing_exchange)]
#[serde(rename_all = "camelCase", default)]


pub struct SymbolSearchResult {
    pub symbol: String,
    pub symbol_id: u64,
    pub description: String,
    pub security_type: String,
    pub listing_exchange: String,
    pub is_quotable: bool,
    pub is_tradable: bool,
    pub currency: String,
}


#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub(crate) struct SearchSymbolsResponse {
    pub symbols: Vec<SymbolSearchResult>,
}


#[derive(Serialize, Debug, Clone)]
pub(crate) struct SearchSymbolsQuery<'a> {
    pub prefix: &'a str,
    pub offset: u32,
}


#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ChainPerStrikePrice {
    pub strike_price: f64,
    pub call_symbol_id: u64,
    pub put_symbol_id: u64,
}


#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ChainPerRoot {
    #[serde(alias = "root")]
    pub option_root: String,
    pub chain_per_strike_price: Vec<ChainPerStrikePrice>,
    pub multiplier: u64,
}


/// Option chain for one expiry date of an underlying.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct OptionChain {
    pub expiry_date: Option<DateTime<Utc>>,
    pub description: String,
    pub listing_exchange: String,
    pub option_exercise_type: String,
    pub chain_per_root: Vec<ChainPerRoot>,
}


#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct GetOptionChainResponse {
    #[serde(alias = "options")]
    pub option_chain: Vec<OptionChain>,
}
