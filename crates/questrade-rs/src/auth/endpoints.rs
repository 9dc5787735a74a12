//! Auth module endpoints.
//!
//! Login (refresh-token exchange) and token revocation against the
//! authorization server of the client's [`Environment`](crate::auth::Environment).

use std::time::Duration;

use reqwest::StatusCode;
use tracing::info;

use crate::auth::models::Credentials;
use crate::client::QuestradeClient;
use crate::errors::{ApiError, QuestradeError};
use crate::helpers;
use crate::session::SessionTimer;


const TOKEN: &str = "token";
const REVOKE: &str = "revoke";


impl QuestradeClient {

    /// Exchange the current refresh token for a new access token.
    ///
    /// **Endpoint:** `POST {auth server}/token`
    ///
    /// On success the credentials are replaced wholesale by the server's
    /// response, including the rotated refresh token, and a new session
    /// timer is started. On failure the previous credentials stay in place.
    ///
    /// Calling this again before the timer expires is how a session is
    /// refreshed.
    ///
    /// # Returns
    /// The [`SessionTimer`] for the new session
    pub async fn login(&self) -> Result<SessionTimer, QuestradeError> {
        let refresh_token = self.session.credentials().refresh_token.clone();
        let url = format!("{}{}", self.environment.login_url(), TOKEN);
        let form = [
            ("grant_type", "refresh_token"),
            ("refresh_token", refresh_token.as_str()),
        ];
        let raw = helpers::post_form(&self.http_client, &url, &form).await?;
        let credentials: Credentials = self.process_response(raw)?;

        let timer = SessionTimer::start(Duration::from_secs(credentials.expires_in));
        info!(
            api_server = %credentials.api_server,
            expires_in = credentials.expires_in,
            "questrade login succeeded"
        );
        self.session.replace_credentials(credentials);
        self.session.set_timer(Some(timer));
        Ok(timer)
    }


    /// Revoke the current access token.
    ///
    /// **Endpoint:** `POST {auth server}/revoke`
    ///
    /// The client forgets its credentials before looking at the outcome, so
    /// it is logged out even if the request fails. A new refresh token has
    /// to be generated on the Questrade website afterwards.
    pub async fn revoke_auth(&self) -> Result<(), QuestradeError> {
        let access_token = self.session.credentials().access_token.clone();
        let url = format!("{}{}", self.environment.login_url(), REVOKE);
        let result = helpers::post_form(
            &self.http_client,
            &url,
            &[("token", access_token.as_str())],
        )
        .await;

        self.session.replace_credentials(Credentials::default());
        self.session.set_timer(None);
        info!("questrade credentials cleared");

        let raw = result?;
        self.session.set_rate_limit(raw.rate_limit);
        if raw.status != StatusCode::OK {
            return Err(
                ApiError::from_response(raw.status, &raw.url, raw.rate_limit, &raw.body).into(),
            );
        }
        Ok(())
    }
}
