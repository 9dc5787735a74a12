//! OAuth login, token refresh and revocation.

pub mod auth_loader;
pub mod endpoints;
pub mod models;

pub use models::{Credentials, Environment};
