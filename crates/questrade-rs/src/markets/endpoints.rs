//! Markets module endpoints.
//!
//! This module implements API endpoints for retrieving market data from Questrade,
//! including supported markets, Level 1 quotes and historical candlesticks.
//!
//! # Usage
//!
//! All endpoint methods are available on [`QuestradeClient`](crate::client::QuestradeClient).
//! See the client documentation for a complete list of available methods.

use chrono::{DateTime, Utc};

use crate::client::QuestradeClient;
use crate::errors::QuestradeError;
use crate::helpers::{format_time, join_ids};
use crate::markets::models::{
    CandleInterval, Candlestick, CandlesQuery, GetCandlesResponse, GetMarketsResponse,
    Market, Quote, QuoteBatch,
};

const GET_MARKETS: &str = "v1/markets";
const GET_QUOTE: &str = "v1/markets/quotes/{}";
pub(crate) const GET_QUOTES: &str = "v1/markets/quotes";
const GET_CANDLES: &str = "v1/markets/candles/{}";

impl QuestradeClient {
    /// Retrieves information about the supported markets.
    ///
    /// **Endpoint:** `GET v1/markets`
    pub async fn get_markets(&self) -> Result<Vec<Market>, QuestradeError> {
        let data: GetMarketsResponse = self.authenticated_get::<_, ()>(GET_MARKETS, None).await?;
        Ok(data.markets)
    }


    /// Retrieves a single Level 1 quote.
    ///
    /// **Endpoint:** `GET v1/markets/quotes/{id}`
    ///
    /// # Returns
    /// The quote, or an error if the server did not return exactly one
    pub async fn get_quote(&self, id: u64) -> Result<Quote, QuestradeError> {
        let url = GET_QUOTE.replace("{}", &id.to_string());
        let data: QuoteBatch = self.authenticated_get::<_, ()>(&url, None).await?;
        let mut quotes = data.quotes;
        if quotes.len() != 1 {
            return Err(QuestradeError::Other(format!(
                "expected 1 quote for symbol {id}, got {}",
                quotes.len()
            )));
        }
        Ok(quotes.remove(0))
    }


    /// Retrieves Level 1 quotes for many symbols, in request order.
    ///
    /// **Endpoint:** `GET v1/markets/quotes?ids=...`
    pub async fn get_quotes(&self, ids: &[u64]) -> Result<Vec<Quote>, QuestradeError> {
        let query = [("ids", join_ids(ids))];
        let data: QuoteBatch = self.authenticated_get(GET_QUOTES, Some(&query)).await?;
        Ok(data.quotes)
    }


    /// Retrieves historical candlesticks between `start` and `end`.
    ///
    /// **Endpoint:** `GET v1/markets/candles/{id}`
    ///
    /// # Query Parameters
    /// - `startTime` / `endTime` - RFC 3339 bounds
    /// - `interval` - candle granularity
    pub async fn get_candles(
        &self,
        id: u64,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        interval: CandleInterval,
    ) -> Result<Vec<Candlestick>, QuestradeError> {
        let url = GET_CANDLES.replace("{}", &id.to_string());
        let query = CandlesQuery {
            start_time: format_time(&start),
            end_time: format_time(&end),
            interval,
        };
        let data: GetCandlesResponse = self.authenticated_get(&url, Some(&query)).await?;
        Ok(data.candles)
    }
}
