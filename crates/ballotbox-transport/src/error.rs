/// Errors that can occur on a connection to the engine.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The engine couldn't be reached, or refused the upgrade.
    #[error("could not connect to {url}: {reason}")]
    ConnectFailed { url: String, reason: String },

    /// The connection was closed, by either side.
    #[error("connection closed: {0}")]
    ConnectionClosed(String),

    /// Sending a frame failed.
    #[error("send failed: {0}")]
    SendFailed(#[source] std::io::Error),

    /// Receiving a frame failed.
    #[error("receive failed: {0}")]
    ReceiveFailed(#[source] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connect_failed_names_url() {
        let err = TransportError::ConnectFailed {
            url: "ws://engine:3000".into(),
            reason: "refused".into(),
        };
        assert_eq!(
            err.to_string(),
            "could not connect to ws://engine:3000: refused"
        );
    }

    #[test]
    fn test_send_failed_keeps_source() {
        use std::error::Error;

        let err = TransportError::SendFailed(std::io::Error::other("pipe"));
        assert!(err.source().is_some());
    }
}
