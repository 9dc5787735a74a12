use crate::auth::models::Credentials;
use crate::errors::QuestradeError;
use crate::session::RateLimit;
use chrono::{DateTime, SecondsFormat, Utc};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::{Deserialize, Deserializer, Serialize};
use std::borrow::Cow;
use std::fmt::Display;
use tracing::debug;
// Helper functions for building and sending requests against the Questrade servers
use url::Url;


/// A fully read response. The body is drained before anything is decoded, so
/// the connection goes back to the pool whatever happens afterwards.
#[derive(Debug)]
pub(crate) struct RawResponse {
    pub(crate) status: StatusCode,
    pub(crate) url: String,
    pub(crate) rate_limit: RateLimit,
    pub(crate) body: Vec<u8>,
}


/// Send a request and drain its response
pub(crate) async fn send(request: RequestBuilder) -> Result<RawResponse, QuestradeError> {
    let resp = request.send().await?;
    let status = resp.status();
    let url = resp.url().to_string();
    let rate_limit = RateLimit::from_headers(resp.headers());
    let body = resp.bytes().await?.to_vec();
    debug!(%status, %url, remaining = rate_limit.remaining, "questrade response");
    Ok(RawResponse { status, url, rate_limit, body })
}


/// Resolve a resource path (e.g. `v1/accounts`) against the session's API server
pub(crate) fn resource_url<Q>(
    credentials: &Credentials,
    path: &str,
    query: Option<&Q>,
) -> Result<Url, QuestradeError>
where
    Q: Serialize + ?Sized,
{
    if credentials.api_server.is_empty() {
        return Err(QuestradeError::Other(
            "no API server for this session, call login first".into(),
        ));
    }
    let mut url = Url::parse(&credentials.api_server)?.join(path.trim_start_matches('/'))?;
    if let Some(q) = query {
        let encoded = serde_urlencoded::to_string(q)
            .map_err(|e| QuestradeError::Other(format!("Failed to serialize params: {}", e)))?;
        // Only set the query if there is one, to avoid a dangling '?'
        if !encoded.is_empty() {
            url.set_query(Some(&encoded));
        }
    }
    Ok(url)
}


/// Make an authenticated GET request
pub(crate) async fn authenticated_get<Q>(
    http_client: &Client,
    credentials: &Credentials,
    path: &str,
    query: Option<&Q>,
) -> Result<RawResponse, QuestradeError>
where
    Q: Serialize + ?Sized,
{
    let url = resource_url(credentials, path, query)?;
    debug!(%url, "GET");
    let request = http_client
        .get(url)
        .header(AUTHORIZATION, credentials.auth_header());
    send(request).await
}


/// Make an authenticated POST request with a JSON body
pub(crate) async fn authenticated_post<B>(
    http_client: &Client,
    credentials: &Credentials,
    path: &str,
    body: &B,
) -> Result<RawResponse, QuestradeError>
where
    B: Serialize + ?Sized,
{
    // A body that can't be encoded never reaches the network
    let json = serde_json::to_vec(body).map_err(QuestradeError::SerializeError)?;
    let url = resource_url::<()>(credentials, path, None)?;
    debug!(%url, "POST");
    let request = http_client
        .post(url)
        .header(AUTHORIZATION, credentials.auth_header())
        .header(CONTENT_TYPE, "application/json")
        .body(json);
    send(request).await
}


/// Make an authenticated DELETE request
pub(crate) async fn authenticated_delete(
    http_client: &Client,
    credentials: &Credentials,
    path: &str,
) -> Result<RawResponse, QuestradeError> {
    let url = resource_url::<()>(credentials, path, None)?;
    debug!(%url, "DELETE");
    let request = http_client
        .delete(url)
        .header(AUTHORIZATION, credentials.auth_header());
    send(request).await
}


/// Make an unauthenticated form POST (authorization server calls)
pub(crate) async fn post_form<F>(
    http_client: &Client,
    url: &str,
    form: &F,
) -> Result<RawResponse, QuestradeError>
where
    F: Serialize + ?Sized,
{
    let url = Url::parse(url)?;
    debug!(%url, "POST form");
    send(http_client.post(url).form(form)).await
}


/// Comma-joined identifier list for batch endpoints (`ids=1,2,3`)
pub(crate) fn join_ids<I>(ids: I) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    ids.into_iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(",")
}


/// Percent-encoded path segment, so a caller-supplied value such as an
/// account number cannot add path components or a query
pub(crate) fn path_segment(raw: &str) -> Cow<'_, str> {
    urlencoding::encode(raw)
}


/// Reads JSON `null` as the type's default. `#[serde(default)]` only covers
/// missing keys, and Questrade sends `null` for empty fields.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}


/// Timestamps in query strings are RFC 3339, the format Questrade expects
pub(crate) fn format_time(t: &DateTime<Utc>) -> String {
    t.to_rfc3339_opts(SecondsFormat::Secs, true)
}


/// WebSocket address for a streaming port on the session's API host
pub(crate) fn stream_url(api_server: &str, port: u16) -> Result<Url, QuestradeError> {
    let mut url = Url::parse(api_server)?;
    let scheme = match url.scheme() {
        "https" => "wss",
        "http" => "ws",
        other => {
            return Err(QuestradeError::Other(format!(
                "unsupported API server scheme for streaming: {other}"
            )));
        }
    };
    url.set_scheme(scheme)
        .map_err(|_| QuestradeError::Other(format!("cannot switch {api_server} to {scheme}")))?;
    url.set_port(Some(port))
        .map_err(|_| QuestradeError::Other(format!("cannot set port on {api_server}")))?;
    url.set_path("");
    url.set_query(None);
    Ok(url)
}
