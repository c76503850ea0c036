//! WebSocket connection to the engine using `tokio-tungstenite`.

use futures_util::stream::{SplitSink, SplitStream};
use futures_util::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio::sync::Mutex;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream};

use crate::{Connection, ConnectionId, TransportError};

type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// A client WebSocket connection.
///
/// The socket is split into its sink and stream halves, each behind its
/// own lock, so a pending `recv` never blocks a `send`.
///
/// Frames go out as text: the engine speaks JSON.
pub struct WebSocketConnection {
    id: ConnectionId,
    sink: Mutex<SplitSink<WsStream, Message>>,
    stream: Mutex<SplitStream<WsStream>>,
}

impl WebSocketConnection {
    /// Dials `url` (`ws://` or `wss://`) and completes the upgrade.
    ///
    /// # Errors
    /// [`TransportError::ConnectFailed`] if the engine can't be reached or
    /// refuses the handshake.
    pub async fn connect(url: &str) -> Result<Self, TransportError> {
        let (ws, _response) = tokio_tungstenite::connect_async(url)
            .await
            .map_err(|e| TransportError::ConnectFailed {
                url: url.to_string(),
                reason: e.to_string(),
            })?;

        let id = ConnectionId::next();
        tracing::info!(%id, url, "connected to engine");

        let (sink, stream) = ws.split();
        Ok(Self {
            id,
            sink: Mutex::new(sink),
            stream: Mutex::new(stream),
        })
    }
}

fn io_error(kind: std::io::ErrorKind, e: impl ToString) -> std::io::Error {
    std::io::Error::new(kind, e.to_string())
}

impl Connection for WebSocketConnection {
    type Error = TransportError;

    async fn send(&self, data: &[u8]) -> Result<(), Self::Error> {
        let text = std::str::from_utf8(data).map_err(|e| {
            TransportError::SendFailed(io_error(
                std::io::ErrorKind::InvalidData,
                e,
            ))
        })?;
        self.sink
            .lock()
            .await
            .send(Message::text(text))
            .await
            .map_err(|e| {
                TransportError::SendFailed(io_error(
                    std::io::ErrorKind::BrokenPipe,
                    e,
                ))
            })
    }

    async fn recv(&self) -> Result<Option<Vec<u8>>, Self::Error> {
        let mut stream = self.stream.lock().await;
        loop {
            match stream.next().await {
                Some(Ok(Message::Text(text))) => {
                    return Ok(Some(text.as_bytes().to_vec()));
                }
                Some(Ok(Message::Binary(data))) => {
                    return Ok(Some(data.to_vec()));
                }
                Some(Ok(Message::Close(frame))) => {
                    tracing::debug!(id = %self.id, ?frame, "engine closed connection");
                    return Ok(None);
                }
                None => return Ok(None),
                Some(Ok(_)) => continue, // ping/pong/raw frame
                Some(Err(e)) => {
                    return Err(TransportError::ReceiveFailed(io_error(
                        std::io::ErrorKind::ConnectionReset,
                        e,
                    )));
                }
            }
        }
    }

    async fn close(&self) -> Result<(), Self::Error> {
        self.sink.lock().await.close().await.map_err(|e| {
            TransportError::SendFailed(io_error(
                std::io::ErrorKind::BrokenPipe,
                e,
            ))
        })
    }

    fn id(&self) -> ConnectionId {
        self.id
    }
}
