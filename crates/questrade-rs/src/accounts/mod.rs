//! Account calls: balances, positions, executions and order history.

pub mod endpoints;
pub mod models;
