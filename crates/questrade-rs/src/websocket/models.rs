use derive_more::Display;
use serde::{Deserialize, Serialize};


/// Transport the server should stream over.
#[derive(Serialize, Display, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StreamMode {
    #[default]
    WebSocket,
    RawSocket,
}


/// Acknowledgement sent by the streaming server after it receives the
/// access token.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamAuthResponse {
    pub success: bool,
}


#[derive(Deserialize, Debug, Clone, Copy)]
#[serde(rename_all = "camelCase")]
pub(crate) struct StreamPortResponse {
    pub stream_port: u16,
}


#[derive(Serialize, Debug, Clone)]
pub(crate) struct QuoteStreamQuery {
    pub ids: String,
    pub stream: bool,
    pub mode: StreamMode,
}


#[derive(Serialize, Debug, Clone)]
pub(crate) struct NotificationStreamQuery {
    pub mode: StreamMode,
}
