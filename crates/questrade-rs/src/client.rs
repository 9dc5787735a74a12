use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::auth::models::{Credentials, Environment};
use crate::errors::{ApiError, QuestradeError};
use crate::helpers::{self, RawResponse};
use crate::session::{RateLimit, Session, SessionTimer};


/// Upper bound on every HTTP call made by the client.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);


/// Main client for interacting with the Questrade API.
///
/// A client starts out holding only a refresh token. [`login`](QuestradeClient::login)
/// exchanges it for an access token and the API server assigned to this
/// session; every resource method then goes to that server.
///
/// The client can be shared between tasks (`Arc<QuestradeClient>`): the
/// credentials are swapped atomically on login/revoke and the rate-limit
/// mirror is lock-guarded.
///
/// # Available Endpoint Categories
///
/// ## Accounts
/// - [`get_server_time`](QuestradeClient::get_server_time)
/// - [`get_accounts`](QuestradeClient::get_accounts)
/// - [`get_balances`](QuestradeClient::get_balances)
/// - [`get_positions`](QuestradeClient::get_positions)
/// - [`get_executions`](QuestradeClient::get_executions)
/// - [`get_orders`](QuestradeClient::get_orders) / [`get_orders_by_id`](QuestradeClient::get_orders_by_id)
///
/// ## Symbols
/// - [`get_symbols`](QuestradeClient::get_symbols)
/// - [`search_symbols`](QuestradeClient::search_symbols)
/// - [`get_option_chain`](QuestradeClient::get_option_chain)
///
/// ## Markets
/// - [`get_markets`](QuestradeClient::get_markets)
/// - [`get_quote`](QuestradeClient::get_quote) / [`get_quotes`](QuestradeClient::get_quotes)
/// - [`get_candles`](QuestradeClient::get_candles)
///
/// ## Orders
/// - [`get_order_impact`](QuestradeClient::get_order_impact)
/// - [`place_order`](QuestradeClient::place_order)
/// - [`delete_order`](QuestradeClient::delete_order)
///
/// ## Streaming
/// - [`get_quote_stream_port`](QuestradeClient::get_quote_stream_port)
/// - [`connect_quote_stream`](QuestradeClient::connect_quote_stream)
///
/// # Example
/// ```no_run
/// use questrade_rs::{Environment, QuestradeClient};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = QuestradeClient::connect("my-refresh-token", Environment::Practice).await?;
/// // Persist this, the old refresh token is now spent
/// println!("next refresh token: {}", client.credentials().refresh_token);
///
/// let (user_id, accounts) = client.get_accounts().await?;
/// println!("user {user_id} has {} accounts", accounts.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct QuestradeClient {
    pub(crate) http_client: Client,
    pub(crate) environment: Environment,
    pub(crate) session: Session,
}


impl QuestradeClient {
    /// Create a client for `environment`. Does not log in.
    pub fn new(
        refresh_token: impl Into<String>,
        environment: Environment,
    ) -> Result<QuestradeClient, QuestradeError> {
        Self::new_with_config(refresh_token, environment, None)
    }


    /// Create a client with a custom request timeout
    /// Useful for testing or slow links
    pub fn new_with_config(
        refresh_token: impl Into<String>,
        environment: Environment,
        timeout: Option<Duration>,
    ) -> Result<QuestradeClient, QuestradeError> {
        let http_client = Client::builder()
            .timeout(timeout.unwrap_or(REQUEST_TIMEOUT))
            .build()?;
        Ok(QuestradeClient {
            http_client,
            environment,
            session: Session::new(Credentials::with_refresh_token(refresh_token)),
        })
    }


    /// Create a client and log it in.
    pub async fn connect(
        refresh_token: impl Into<String>,
        environment: Environment,
    ) -> Result<QuestradeClient, QuestradeError> {
        let client = Self::new(refresh_token, environment)?;
        client.login().await?;
        Ok(client)
    }


    pub fn environment(&self) -> &Environment {
        &self.environment
    }


    /// Snapshot of the current credentials
    pub fn credentials(&self) -> Arc<Credentials> {
        self.session.credentials()
    }


    /// Rate-limit values from the most recent response
    pub fn rate_limit(&self) -> RateLimit {
        self.session.rate_limit()
    }


    /// Expiry of the current login session, `None` before the first login or
    /// after revocation
    pub fn session_timer(&self) -> Option<SessionTimer> {
        self.session.timer()
    }


    /// Authenticated GET decoded into `T`
    pub async fn authenticated_get<T, Q>(
        &self,
        path: &str,
        query: Option<&Q>,
    ) -> Result<T, QuestradeError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let credentials = self.session.credentials();
        let raw = helpers::authenticated_get(&self.http_client, &credentials, path, query).await?;
        self.process_response(raw)
    }


    /// Authenticated POST of a JSON body, decoded into `T`
    pub async fn authenticated_post<T, B>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, QuestradeError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let credentials = self.session.credentials();
        let raw = helpers::authenticated_post(&self.http_client, &credentials, path, body).await?;
        self.process_response(raw)
    }


    /// Authenticated DELETE decoded into `T`
    pub async fn authenticated_delete<T>(&self, path: &str) -> Result<T, QuestradeError>
    where
        T: DeserializeOwned,
    {
        let credentials = self.session.credentials();
        let raw = helpers::authenticated_delete(&self.http_client, &credentials, path).await?;
        self.process_response(raw)
    }


    /// Record the response's rate-limit headers, then classify a failure or
    /// decode the body. The rate-limit mirror is updated even when decoding
    /// fails.
    pub(crate) fn process_response<T>(&self, raw: RawResponse) -> Result<T, QuestradeError>
    where
        T: DeserializeOwned,
    {
        self.session.set_rate_limit(raw.rate_limit);
        debug!(
            remaining = raw.rate_limit.remaining,
            reset_at = %raw.rate_limit.reset_at,
            "rate limit updated"
        );
        if raw.status != StatusCode::OK {
            return Err(
                ApiError::from_response(raw.status, &raw.url, raw.rate_limit, &raw.body).into(),
            );
        }
        let data: T = serde_json::from_slice(&raw.body)?;
        Ok(data)
    }
}
