//! Accounts module models.
//!
//! This module contains data structures for account calls: accounts,
//! balances, positions and executions.

use chrono::{DateTime, Utc};
use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::helpers::format_time;
use crate::orders::models::Order;


/// An account the authorized user can act on.
#[derive(Deserialize, Serialize, Display, Debug, Clone, Default, PartialEq)]
#[display("{} account {} ({})", type_, number, status)]
#[serde(rename_all = "camelCase", default)]


pub struct Account {
    #[serde(rename = "type")]
    pub type_: String,
    /// Eight-digit account number, used in every account call
    pub number: String,
    pub status: String,
    pub is_primary: bool,
    pub is_billing: bool,
    pub client_account_type: String,
}


/// Response model for `GET v1/accounts`.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct GetAccountsResponse {
    pub user_id: u64,
    pub accounts: Vec<Account>,
}


#[derive(Deserialize, Debug, Clone)]
pub(crate) struct ServerTimeResponse {
    pub time: DateTime<Utc>,
}


/// An open or partially closed position.
#[derive(Deserialize, Serialize, Display, Debug, Clone, Default, PartialEq)]
#[display("{} x {}", symbol, open_quantity)]
#[serde(rename_all = "camelCase", default)]


pub struct Position {
    pub symbol: String,
    pub symbol_id: u64,
    pub open_quantity: f64,
    pub closed_quantity: f64,
    pub current_market_value: Option<f64>,
    pub current_price: Option<f64>,
    pub average_entry_price: f64,
    #[serde(rename = "closedPnL")]
    pub closed_pnl: Option<f64>,
    #[serde(rename = "openPnL")]
    pub open_pnl: Option<f64>,
    pub total_cost: f64,
    pub is_real_time: bool,
    pub is_under_reorg: bool,
}


#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub(crate) struct GetPositionsResponse {
    pub positions: Vec<Position>,
}


/// Balance figures for one currency (or combined).
#[derive(Deserialize, Serialize, Display, Debug, Clone, Default, PartialEq)]
#[display("{}: cash {}, equity {}", currency, cash, total_equity)]
#[serde(rename_all = "camelCase", default)]


pub struct Balance {
    pub currency: String,
    pub cash: f64,
    pub market_value: f64,
    pub total_equity: f64,
    pub buying_power: f64,
    pub maintenance_excess: f64,
    pub is_real_time: bool,
}


/// Per-currency and combined balances, current and start-of-day.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct AccountBalances {
    pub per_currency_balances: Vec<Balance>,
    pub combined_balances: Vec<Balance>,
    pub sod_per_currency_balances: Vec<Balance>,
    pub sod_combined_balances: Vec<Balance>,
}


/// A fill belonging to an account.
#[derive(Deserialize, Serialize, Display, Debug, Clone, Default, PartialEq)]
#[display("execution {}: {} {} {} @ {}", id, side, quantity, symbol, price)]
#[serde(rename_all = "camelCase", default)]


pub struct Execution {
    pub symbol: String,
    pub symbol_id: u64,
    pub quantity: f64,
    pub side: String,
    pub price: f64,
    pub id: u64,
    pub order_id: u64,
    pub order_chain_id: u64,
    pub exchange_exec_id: String,
    pub timestamp: Option<DateTime<Utc>>,
    pub notes: String,
    pub venue: String,
    pub total_cost: f64,
    pub order_placement_commission: f64,
    pub commission: f64,
    pub execution_fee: f64,
    pub sec_fee: f64,
    pub canadian_execution_fee: f64,
    pub parent_id: u64,
}


#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub(crate) struct GetExecutionsResponse {
    pub executions: Vec<Execution>,
}


#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub(crate) struct GetOrdersResponse {
    pub orders: Vec<Order>,
}


/// Which orders `get_orders` returns.
#[derive(Serialize, Display, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OrderStateFilter {
    #[default]
    All,
    Open,
    Closed,
}


/// Query parameters for time-windowed account calls. Unset bounds let the
/// server default to the current day.
#[derive(Serialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TimeWindowQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_filter: Option<OrderStateFilter>,
}


impl TimeWindowQuery {
    pub(crate) fn new(start: Option<DateTime<Utc>>, end: Option<DateTime<Utc>>) -> Self {
        TimeWindowQuery {
            start_time: start.as_ref().map(format_time),
            end_time: end.as_ref().map(format_time),
            state_filter: None,
        }
    }
}
