//! Order pricing, placement and cancellation.

pub mod endpoints;
pub mod models;
