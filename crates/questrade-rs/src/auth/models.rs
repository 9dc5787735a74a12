//! Auth module models.
//!
//! This module contains the OAuth credential bundle and the login environment.

use serde::{Deserialize, Serialize};


const LOGIN_SERVER_URL: &str = "https://login.questrade.com/oauth2/";
const PRACTICE_LOGIN_SERVER_URL: &str = "https://practicelogin.questrade.com/oauth2/";


/// Credentials returned by the Questrade authorization server.
///
/// `access_token` and `api_server` are empty until a login succeeds. The
/// `refresh_token` rotates on every login and must be kept for the next one.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]


pub struct Credentials {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
    pub refresh_token: String,
    pub api_server: String,
}


impl Credentials {
    /// Credentials holding only a refresh token, as supplied by the user
    /// before the first login.
    pub fn with_refresh_token(refresh_token: impl Into<String>) -> Self {
        Self {
            refresh_token: refresh_token.into(),
            ..Default::default()
        }
    }


    /// Value for the `Authorization` header of resource calls.
    pub fn auth_header(&self) -> String {
        format!("{} {}", self.token_type, self.access_token)
    }


    pub fn is_logged_in(&self) -> bool {
        !self.access_token.is_empty() && !self.api_server.is_empty()
    }
}


/// Which authorization server a client logs into.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Production,
    Practice,
    /// Any other OAuth root, e.g. a proxy or a mock server. Must end with `/`.
    Custom(String),
}


impl Environment {
    pub fn login_url(&self) -> &str {
        match self {
            Environment::Production => LOGIN_SERVER_URL,
            Environment::Practice => PRACTICE_LOGIN_SERVER_URL,
            Environment::Custom(url) => url,
        }
    }
}
