//! Orders module models.
//!
//! This module contains data structures for order placement and order history.

use chrono::{DateTime, Utc};
use derive_more::Display;
use serde::{Deserialize, Serialize};


/// One leg of a multi-leg order.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderLeg {
    #[serde(deserialize_with = "crate::helpers::null_as_default")]
    pub symbol: String,
    #[serde(deserialize_with = "crate::helpers::null_as_default")]
    pub symbol_id: u64,
    pub leg_id: Option<u64>,
    #[serde(deserialize_with = "crate::helpers::null_as_default")]
    pub action: String,
    pub ratio_quantity: Option<f64>,
}


#[derive(Deserialize, Serialize, Display, Debug, Clone, Default, PartialEq)]
#[display("order {} {} {} {} ({})", id, side, total_quantity, symbol, state)]
#[serde(rename_all = "camelCase", default)]


/// Order data model.
///
pub struct Order {
    #[serde(deserialize_with = "crate::helpers::null_as_default")]
    pub id: u64,
    #[serde(deserialize_with = "crate::helpers::null_as_default")]
    pub symbol: String,
    #[serde(deserialize_with = "crate::helpers::null_as_default")]
    pub symbol_id: u64,
    #[serde(deserialize_with = "crate::helpers::null_as_default")]
    pub total_quantity: f64,
    pub open_quantity: Option<f64>,
    pub filled_quantity: Option<f64>,
    pub canceled_quantity: Option<f64>,
    #[serde(deserialize_with = "crate::helpers::null_as_default")]
    pub side: String,
    #[serde(deserialize_with = "crate::helpers::null_as_default")]
    pub order_type: String,
    pub limit_price: Option<f64>,
    pub stop_price: Option<f64>,
    #[serde(deserialize_with = "crate::helpers::null_as_default")]
    pub is_all_or_none: bool,
    #[serde(deserialize_with = "crate::helpers::null_as_default")]
    pub is_anonymous: bool,
    pub iceberg_quantity: Option<f64>,
    pub min_quantity: Option<f64>,
    pub avg_exec_price: Option<f64>,
    pub last_exec_price: Option<f64>,
    #[serde(deserialize_with = "crate::helpers::null_as_default")]
    pub source: String,
    #[serde(deserialize_with = "crate::helpers::null_as_default")]
    pub time_in_force: String,
    pub gtd_date: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "crate::helpers::null_as_default")]
    pub state: String,
    #[serde(deserialize_with = "crate::helpers::null_as_default")]
    pub client_reason_str: String,
    #[serde(deserialize_with = "crate::helpers::null_as_default")]
    pub chain_id: u64,
    pub creation_time: Option<DateTime<Utc>>,
    pub update_time: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "crate::helpers::null_as_default")]
    pub notes: String,
    #[serde(deserialize_with = "crate::helpers::null_as_default")]
    pub primary_route: String,
    #[serde(deserialize_with = "crate::helpers::null_as_default")]
    pub secondary_route: String,
    #[serde(deserialize_with = "crate::helpers::null_as_default")]
    pub order_route: String,
    #[serde(deserialize_with = "crate::helpers::null_as_default")]
    pub venue_holding_order: String,
    pub commission_charged: Option<f64>,
    #[serde(deserialize_with = "crate::helpers::null_as_default")]
    pub exchange_order_id: String,
    #[serde(deserialize_with = "crate::helpers::null_as_default")]
    pub is_significant_shareholder: bool,
    #[serde(deserialize_with = "crate::helpers::null_as_default")]
    pub is_insider: bool,
    #[serde(deserialize_with = "crate::helpers::null_as_default")]
    pub is_limit_offset_in_dollar: bool,
    #[serde(deserialize_with = "crate::helpers::null_as_default")]
    pub user_id: u64,
    pub placement_commission: Option<f64>,
    #[serde(deserialize_with = "crate::helpers::null_as_default")]
    pub legs: Vec<OrderLeg>,
    #[serde(deserialize_with = "crate::helpers::null_as_default")]
    pub strategy_type: String,
    pub trigger_stop_price: Option<f64>,
    #[serde(deserialize_with = "crate::helpers::null_as_default")]
    pub order_group_id: u64,
    pub order_class: Option<String>,
}


#[derive(Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]


/// Request model for placing, replacing or pricing an order.
///
/// Set `order_id` to replace an existing order instead of creating one.
pub struct OrderRequest {
    #[serde(rename = "accountNumber")]
    pub account_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<u64>,
    pub symbol_id: u64,
    pub quantity: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iceberg_quantity: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_price: Option<f64>,
    pub time_in_force: String,
    pub is_all_or_none: bool,
    pub is_anonymous: bool,
    pub is_limit_offset_in_dollar: bool,
    pub order_type: String,
    pub action: String,
    pub primary_route: String,
    pub secondary_route: String,
}


#[derive(Deserialize, Serialize, Display, Debug, Clone, Default, PartialEq)]
#[display("impact: commissions {}, buying power {} -> {}", estimated_commissions, buying_power_effect, buying_power_result)]
#[serde(rename_all = "camelCase", default)]


/// Estimated effect of an order on an account.
///
pub struct OrderImpact {
    pub estimated_commissions: f64,
    pub buying_power_effect: f64,
    pub buying_power_result: f64,
    pub maint_excess_effect: f64,
    pub maint_excess_result: f64,
    pub side: String,
    pub trade_value_calculation: String,
    pub price: f64,
}


/// Response model for order placement.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct PlaceOrderResponse {
    pub order_id: u64,
    pub orders: Vec<Order>,
}


/// Response model for order cancellation.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct DeleteOrderResponse {
    pub order_id: u64,
}
