//! In-memory connections backed by tokio channels.

use tokio::sync::{Mutex, mpsc};

use crate::{Connection, ConnectionId, TransportError};

/// One end of an in-process connection.
///
/// Created in pairs by [`ChannelConnection::pair`]. Whatever one end
/// sends, the other receives, in order. Closing either end (or dropping
/// it) makes the other end's `recv` return `Ok(None)` once the frames
/// already in flight are drained.
pub struct ChannelConnection {
    id: ConnectionId,
    tx: Mutex<Option<mpsc::UnboundedSender<Vec<u8>>>>,
    rx: Mutex<mpsc::UnboundedReceiver<Vec<u8>>>,
}

impl ChannelConnection {
    /// Creates two connected ends.
    pub fn pair() -> (Self, Self) {
        let (a_tx, b_rx) = mpsc::unbounded_channel();
        let (b_tx, a_rx) = mpsc::unbounded_channel();
        let a = Self::new(a_tx, a_rx);
        let b = Self::new(b_tx, b_rx);
        tracing::trace!(a = %a.id, b = %b.id, "channel pair created");
        (a, b)
    }

    fn new(
        tx: mpsc::UnboundedSender<Vec<u8>>,
        rx: mpsc::UnboundedReceiver<Vec<u8>>,
    ) -> Self {
        Self {
            id: ConnectionId::next(),
            tx: Mutex::new(Some(tx)),
            rx: Mutex::new(rx),
        }
    }
}

impl Connection for ChannelConnection {
    type Error = TransportError;

    async fn send(&self, data: &[u8]) -> Result<(), Self::Error> {
        let tx = self.tx.lock().await;
        let Some(tx) = tx.as_ref() else {
            return Err(TransportError::ConnectionClosed(
                "closed locally".into(),
            ));
        };
        tx.send(data.to_vec()).map_err(|_| {
            TransportError::ConnectionClosed("peer dropped".into())
        })
    }

    async fn recv(&self) -> Result<Option<Vec<u8>>, Self::Error> {
        Ok(self.rx.lock().await.recv().await)
    }

    async fn close(&self) -> Result<(), Self::Error> {
        self.tx.lock().await.take();
        Ok(())
    }

    fn id(&self) -> ConnectionId {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_pair_delivers_in_order_both_ways() {
        let (client, engine) = ChannelConnection::pair();

        client.send(b"one").await.unwrap();
        client.send(b"two").await.unwrap();
        engine.send(b"back").await.unwrap();

        assert_eq!(engine.recv().await.unwrap(), Some(b"one".to_vec()));
        assert_eq!(engine.recv().await.unwrap(), Some(b"two".to_vec()));
        assert_eq!(client.recv().await.unwrap(), Some(b"back".to_vec()));
    }

    #[tokio::test]
    async fn test_close_ends_peer_stream_after_drain() {
        let (client, engine) = ChannelConnection::pair();

        engine.send(b"last").await.unwrap();
        engine.close().await.unwrap();

        assert_eq!(client.recv().await.unwrap(), Some(b"last".to_vec()));
        assert_eq!(client.recv().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_send_after_close_is_rejected() {
        let (client, _engine) = ChannelConnection::pair();
        client.close().await.unwrap();

        let result = client.send(b"late").await;
        assert!(matches!(result, Err(TransportError::ConnectionClosed(_))));
    }

    #[tokio::test]
    async fn test_send_to_dropped_peer_is_rejected() {
        let (client, engine) = ChannelConnection::pair();
        drop(engine);

        let result = client.send(b"anyone?").await;
        assert!(matches!(result, Err(TransportError::ConnectionClosed(_))));
        assert_eq!(client.recv().await.unwrap(), None);
    }

    #[test]
    fn test_pair_ends_have_distinct_ids() {
        let (a, b) = ChannelConnection::pair();
        assert_ne!(a.id(), b.id());
    }
}
