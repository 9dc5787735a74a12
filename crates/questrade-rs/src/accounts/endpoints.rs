//! Accounts module endpoints.
//!
//! This module implements the account calls: server time, accounts,
//! balances, positions, executions and order history.

use chrono::{DateTime, Utc};

use crate::accounts::models::{
    Account, AccountBalances, Execution, GetAccountsResponse, GetExecutionsResponse,
    GetOrdersResponse, GetPositionsResponse, OrderStateFilter, Position, ServerTimeResponse,
    TimeWindowQuery,
};
use crate::client::QuestradeClient;
use crate::errors::QuestradeError;
use crate::helpers::{join_ids, path_segment};
use crate::orders::models::Order;


const GET_TIME: &str = "v1/time";
const GET_ACCOUNTS: &str = "v1/accounts";
const GET_BALANCES: &str = "v1/accounts/{}/balances";
const GET_POSITIONS: &str = "v1/accounts/{}/positions";
const GET_EXECUTIONS: &str = "v1/accounts/{}/executions";
const GET_ORDERS: &str = "v1/accounts/{}/orders";


impl QuestradeClient {

    /// Current time on the Questrade servers.
    ///
    /// **Endpoint:** `GET v1/time`
    pub async fn get_server_time(&self) -> Result<DateTime<Utc>, QuestradeError> {
        let data: ServerTimeResponse = self.authenticated_get::<_, ()>(GET_TIME, None).await?;
        Ok(data.time)
    }


    /// The logged-in user id and the accounts it can act on.
    ///
    /// **Endpoint:** `GET v1/accounts`
    pub async fn get_accounts(&self) -> Result<(u64, Vec<Account>), QuestradeError> {
        let data: GetAccountsResponse = self
            .authenticated_get::<_, ()>(GET_ACCOUNTS, None)
            .await?;
        Ok((data.user_id, data.accounts))
    }


    /// Balances for an account.
    ///
    /// **Endpoint:** `GET v1/accounts/{number}/balances`
    pub async fn get_balances(&self, number: &str) -> Result<AccountBalances, QuestradeError> {
        let url = GET_BALANCES.replace("{}", &path_segment(number));
        self.authenticated_get::<_, ()>(&url, None).await
    }


    /// Positions held in an account.
    ///
    /// **Endpoint:** `GET v1/accounts/{number}/positions`
    pub async fn get_positions(&self, number: &str) -> Result<Vec<Position>, QuestradeError> {
        let url = GET_POSITIONS.replace("{}", &path_segment(number));
        let data: GetPositionsResponse = self.authenticated_get::<_, ()>(&url, None).await?;
        Ok(data.positions)
    }


    /// Executions in an account between `start` and `end`.
    ///
    /// **Endpoint:** `GET v1/accounts/{number}/executions`
    ///
    /// Unset bounds default to the start/end of the current day.
    pub async fn get_executions(
        &self,
        number: &str,
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
    ) -> Result<Vec<Execution>, QuestradeError> {
        let url = GET_EXECUTIONS.replace("{}", &path_segment(number));
        let query = TimeWindowQuery::new(start, end);
        let data: GetExecutionsResponse = self.authenticated_get(&url, Some(&query)).await?;
        Ok(data.executions)
    }


    /// Orders in an account, filtered by time window and state.
    ///
    /// **Endpoint:** `GET v1/accounts/{number}/orders`
    ///
    /// Use [`get_orders_by_id`](QuestradeClient::get_orders_by_id) for
    /// individual orders.
    pub async fn get_orders(
        &self,
        number: &str,
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
        state: OrderStateFilter,
    ) -> Result<Vec<Order>, QuestradeError> {
        let url = GET_ORDERS.replace("{}", &path_segment(number));
        let query = TimeWindowQuery {
            state_filter: Some(state),
            ..TimeWindowQuery::new(start, end)
        };
        let data: GetOrdersResponse = self.authenticated_get(&url, Some(&query)).await?;
        Ok(data.orders)
    }


    /// Specific orders of an account.
    ///
    /// **Endpoint:** `GET v1/accounts/{number}/orders?ids=...`
    pub async fn get_orders_by_id(
        &self,
        number: &str,
        order_ids: &[u64],
    ) -> Result<Vec<Order>, QuestradeError> {
        let url = GET_ORDERS.replace("{}", &path_segment(number));
        let query = [("ids", join_ids(order_ids))];
        let data: GetOrdersResponse = self.authenticated_get(&url, Some(&query)).await?;
        Ok(data.orders)
    }
}
