//! Questrade Rust SDK
//!
//! Unofficial Rust client for the Questrade REST and streaming API.
//! Handles the OAuth refresh-token login, per-session API server routing,
//! rate-limit tracking, structured error decoding and the quote stream.
//!
//! # Quick Start
//!
//! ```no_run
//! use questrade_rs::{Environment, QuestradeClient};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // 1. Create a client from a refresh token and log in
//! let client = QuestradeClient::connect("your-refresh-token", Environment::Production).await?;
//!
//! // 2. The refresh token rotates on every login: store the new one
//! let next_token = client.credentials().refresh_token.clone();
//!
//! // 3. Use the client to call API endpoints
//! let quotes = client.get_quotes(&[8049, 9291]).await?;
//! println!("{} quotes, {} requests left", quotes.len(), client.rate_limit().remaining);
//! # let _ = next_token;
//! # Ok(())
//! # }
//! ```
//!
//! # Main Components
//!
//! - [`QuestradeClient`] - Session handling and all REST endpoint methods
//! - [`Credentials`] / [`Environment`] - OAuth credentials and login server selection
//! - [`QuoteStream`] - Authenticated streaming quote reader
//! - [`QuestradeError`] / [`ApiError`] - Error types
//!
//! # API Endpoint Modules
//!
//! - [`accounts`] - Accounts, balances, positions, executions, order history
//! - [`orders`] - Order impact, placement and cancellation
//! - [`symbols`] - Symbol details, search, option chains
//! - [`markets`] - Markets, quotes, candles
//! - [`websocket`] - Streaming port lookup


// Core modules
pub mod auth;           // OAuth login, refresh and revocation
pub mod client;         // Main HTTP client
pub mod ws_client;      // Quote stream reader
pub mod errors;         // Error types
pub mod session;        // Credential store, rate limits, session timer
pub(crate) mod helpers; // Internal HTTP helpers


// API endpoint modules
pub mod accounts;       // Account calls
pub mod markets;        // Market data
pub mod orders;         // Order management
pub mod symbols;        // Symbol lookup
pub mod websocket;      // Streaming ports


// Re-exports for convenient access
pub use auth::{Credentials, Environment};
pub use client::QuestradeClient;
pub use errors::{ApiError, QuestradeError};
pub use session::{RateLimit, SessionTimer};
pub use ws_client::QuoteStream;
