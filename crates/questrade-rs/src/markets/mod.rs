//! Markets, quotes and historical candles.

pub mod endpoints;
pub mod models;
