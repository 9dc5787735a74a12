use crate::auth::models::Environment;
use crate::errors::QuestradeError;
use std::env;
use std::io;
use tracing::{error, info};


// Environment variable names for authentication
const QUESTRADE_REFRESH_TOKEN: &str = "QUESTRADE_REFRESH_TOKEN";
const QUESTRADE_PRACTICE: &str = "QUESTRADE_PRACTICE";


/// Everything needed to build a client from the environment.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub refresh_token: String,
    pub environment: Environment,
}


/// Load authentication settings from environment variables
///
/// Expects:
/// - QUESTRADE_REFRESH_TOKEN: a refresh token from the Questrade app hub (or the
///   rotated token printed after the last login)
/// - QUESTRADE_PRACTICE (optional): `1`/`true` to use the practice server
///
/// A missing token is a [`QuestradeError::IoError`] of kind `NotFound`.
pub fn load_auth_from_env() -> Result<AuthConfig, QuestradeError> {
    load_auth_with(|key| env::var(key).ok())
}


fn load_auth_with<F>(lookup: F) -> Result<AuthConfig, QuestradeError>
where
    F: Fn(&str) -> Option<String>,
{
    let refresh_token = lookup(QUESTRADE_REFRESH_TOKEN).ok_or_else(|| {
        error!("{} is not set", QUESTRADE_REFRESH_TOKEN);
        io::Error::new(
            io::ErrorKind::NotFound,
            "QUESTRADE_REFRESH_TOKEN environment variable not set",
        )
    })?;
    let refresh_token = refresh_token.trim().to_string();
    if refresh_token.is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "QUESTRADE_REFRESH_TOKEN is empty",
        )
        .into());
    }

    let environment = match lookup(QUESTRADE_PRACTICE) {
        Some(v) if is_truthy(&v) => Environment::Practice,
        _ => Environment::Production,
    };

    info!(?environment, "loaded questrade auth settings");
    Ok(AuthConfig { refresh_token, environment })
}


fn is_truthy(v: &str) -> bool {
    matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes")
}
