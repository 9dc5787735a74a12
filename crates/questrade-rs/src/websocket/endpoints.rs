use tracing::info;

use crate::client::QuestradeClient;
use crate::errors::QuestradeError;
use crate::helpers::{join_ids, stream_url};
use crate::markets::endpoints::GET_QUOTES;
use crate::websocket::models::{
    NotificationStreamQuery, QuoteStreamQuery, StreamMode, StreamPortResponse,
};
use crate::QuoteStream;

const GET_NOTIFICATIONS: &str = "v1/notifications";

impl QuestradeClient {
    /// Ask the server to stream quotes for `ids` and return the port to connect to.
    ///
    /// **Endpoint:** `GET v1/markets/quotes?ids=...&stream=true&mode=...`
    pub async fn get_quote_stream_port(
        &self,
        mode: StreamMode,
        ids: &[u64],
    ) -> Result<u16, QuestradeError> {
        let query = QuoteStreamQuery {
            ids: join_ids(ids),
            stream: true,
            mode,
        };
        let data: StreamPortResponse = self.authenticated_get(GET_QUOTES, Some(&query)).await?;
        Ok(data.stream_port)
    }

    /// Port on which account notifications are streamed.
    ///
    /// **Endpoint:** `GET v1/notifications?mode=...`
    pub async fn get_notification_stream_port(
        &self,
        mode: StreamMode,
    ) -> Result<u16, QuestradeError> {
        let query = NotificationStreamQuery { mode };
        let data: StreamPortResponse = self
            .authenticated_get(GET_NOTIFICATIONS, Some(&query))
            .await?;
        Ok(data.stream_port)
    }

    /// Open and authenticate a quote stream on `port` of this session's API host.
    ///
    /// Uses the access token of the current credentials.
    pub async fn connect_quote_stream(&self, port: u16) -> Result<QuoteStream, QuestradeError> {
        let credentials = self.session.credentials();
        let url = stream_url(&credentials.api_server, port)?;
        info!(%url, "opening quote stream");
        QuoteStream::connect(url.as_str(), &credentials.access_token).await
    }

    /// Request a WebSocket quote stream for `ids` and connect to it.
    pub async fn stream_quotes(&self, ids: &[u64]) -> Result<QuoteStream, QuestradeError> {
        let port = self.get_quote_stream_port(StreamMode::WebSocket, ids).await?;
        self.connect_quote_stream(port).await
    }
}
