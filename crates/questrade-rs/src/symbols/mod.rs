//! Symbol lookup, search and option chains.

pub mod endpoints;
pub mod models;
