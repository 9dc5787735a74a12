use std::fmt;

use reqwest::StatusCode;
use serde::Deserialize;
use tokio_tungstenite::tungstenite;
use tracing::warn;

use crate::orders::models::Order;
use crate::session::RateLimit;


/// Error code used when a failed response body could not be decoded.
pub const UNPARSEABLE_ERROR_CODE: i64 = -999;


#[derive(Debug)]
pub enum QuestradeError {
    RequestError(reqwest::Error),
    SerializeError(serde_json::Error),
    ParseError(serde_json::Error),
    Api(ApiError),
    WebSocketError(tungstenite::Error),
    StreamAuthRejected,
    StreamClosed,
    UrlError(url::ParseError),
    IoError(std::io::Error),
    Other(String),
}
impl fmt::Display for QuestradeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestradeError::RequestError(e) => write!(f, "Request error: {}", e),
            QuestradeError::SerializeError(e) => write!(f, "Serialize error: {}", e),
            QuestradeError::ParseError(e) => write!(f, "Parse error: {}", e),
            QuestradeError::Api(e) => write!(f, "{}", e),
            QuestradeError::WebSocketError(e) => write!(f, "WebSocket error: {}", e),
            QuestradeError::StreamAuthRejected => {
                write!(f, "Stream error: server rejected the access token")
            }
            QuestradeError::StreamClosed => write!(f, "Stream error: connection closed"),
            QuestradeError::UrlError(e) => write!(f, "URL error: {}", e),
            QuestradeError::IoError(e) => write!(f, "IO error: {}", e),
            QuestradeError::Other(msg) => write!(f, "Error: {}", msg),
        }
    }
}
impl std::error::Error for QuestradeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            QuestradeError::RequestError(e) => Some(e),
            QuestradeError::SerializeError(e) | QuestradeError::ParseError(e) => Some(e),
            QuestradeError::Api(e) => Some(e),
            QuestradeError::WebSocketError(e) => Some(e),
            QuestradeError::UrlError(e) => Some(e),
            QuestradeError::IoError(e) => Some(e),
            _ => None,
        }
    }
}
impl From<reqwest::Error> for QuestradeError {
    fn from(err: reqwest::Error) -> Self {
        QuestradeError::RequestError(err)
    }
}
impl From<serde_json::Error> for QuestradeError {
    fn from(err: serde_json::Error) -> Self {
        QuestradeError::ParseError(err)
    }
}
impl From<ApiError> for QuestradeError {
    fn from(err: ApiError) -> Self {
        QuestradeError::Api(err)
    }
}
impl From<tungstenite::Error> for QuestradeError {
    fn from(err: tungstenite::Error) -> Self {
        QuestradeError::WebSocketError(err)
    }
}
impl From<url::ParseError> for QuestradeError {
    fn from(err: url::ParseError) -> Self {
        QuestradeError::UrlError(err)
    }
}
impl From<std::io::Error> for QuestradeError {
    fn from(err: std::io::Error) -> Self {
        QuestradeError::IoError(err)
    }
}
impl From<String> for QuestradeError {
    fn from(s: String) -> QuestradeError {
        QuestradeError::Other(s)
    }
}


/// Error reported by the Questrade servers for a non-200 response.
///
/// `status_code`, `endpoint` and `rate_limit` always come from the live
/// response; only `code`, `message`, `order_id` and `orders` are read from
/// the body.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ApiError {
    #[serde(deserialize_with = "crate::helpers::null_as_default")]
    pub code: i64,
    #[serde(skip)]
    pub status_code: u16,
    #[serde(deserialize_with = "crate::helpers::null_as_default")]
    pub message: String,
    #[serde(skip)]
    pub endpoint: String,
    #[serde(rename = "orderId")]
    #[serde(deserialize_with = "crate::helpers::null_as_default")]
    pub order_id: i64,
    #[serde(deserialize_with = "crate::helpers::null_as_default")]
    pub orders: Vec<Order>,
    #[serde(skip)]
    pub rate_limit: RateLimit,
}

impl ApiError {
    /// Classify a failed response. Never fails: a body that is not a JSON
    /// error object becomes the message verbatim under [`UNPARSEABLE_ERROR_CODE`].
    pub(crate) fn from_response(
        status: StatusCode,
        endpoint: &str,
        rate_limit: RateLimit,
        body: &[u8],
    ) -> ApiError {
        let mut err = match serde_json::from_slice::<ApiError>(body) {
            Ok(e) => e,
            Err(_) => ApiError {
                code: UNPARSEABLE_ERROR_CODE,
                message: String::from_utf8_lossy(body).into_owned(),
                ..Default::default()
            },
        };
        err.status_code = status.as_u16();
        err.endpoint = endpoint.to_string();
        err.rate_limit = rate_limit;
        warn!(
            status = err.status_code,
            code = err.code,
            endpoint = %err.endpoint,
            "questrade request failed"
        );
        err
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Questrade error: HTTP {} at {} (code {}): {}",
            self.status_code, self.endpoint, self.code, self.message
        )
    }
}
impl std::error::Error for ApiError {}
