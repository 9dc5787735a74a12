//! Streaming port lookups and quote-stream models.

pub mod endpoints;
pub mod models;
