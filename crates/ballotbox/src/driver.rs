//! The async loop that connects a [`Client`] to the engine.
//!
//! ```text
//!   conn.recv() ──→ decode ──→ Client::apply ──→ send joins ──→ on_render
//!   intents     ──→ Client::emit ──→ send
//! ```
//!
//! One task, one `select!`, no shared state: the client is only touched
//! between awaits.

use ballotbox_protocol::{ClientFrame, ClientMessage, Codec, ServerFrame, ServerMessage};
use ballotbox_transport::{Connection, TransportError};
use ballotbox_view::Rendered;
use tokio::sync::mpsc;

use crate::{BallotError, Client, Intent};

/// Runs `client` over `conn` until something ends the session.
///
/// `on_render` is called once up front and then after every snapshot.
/// Frames that don't decode are logged and skipped.
///
/// Returns `Ok(())` when the intent channel closes (the user quit); the
/// connection is closed on the way out.
///
/// # Errors
/// - [`BallotError::Transport`]: the engine hung up or the socket failed
/// - [`BallotError::ServerFault`]: the engine sent a `fail` frame
/// - [`BallotError::View`]: a snapshot couldn't be rendered
/// - [`BallotError::Protocol`]: an outbound message didn't encode
pub async fn drive<C, K, F>(
    conn: &C,
    codec: &K,
    client: &mut Client,
    intents: &mut mpsc::Receiver<Intent>,
    mut on_render: F,
) -> Result<(), BallotError>
where
    C: Connection<Error = TransportError>,
    K: Codec,
    F: FnMut(&Rendered),
{
    let conn_id = conn.id();
    tracing::info!(%conn_id, role = %client.session().role(), "client loop started");

    on_render(&client.render()?);

    loop {
        tokio::select! {
            inbound = conn.recv() => {
                let Some(data) = inbound? else {
                    tracing::info!(%conn_id, "engine closed the connection");
                    return Err(TransportError::ConnectionClosed(
                        "engine hung up".into(),
                    )
                    .into());
                };

                let frame: ServerFrame = match codec.decode(&data) {
                    Ok(frame) => frame,
                    Err(e) => {
                        tracing::warn!(%conn_id, error = %e, "dropping undecodable frame");
                        continue;
                    }
                };

                let is_snapshot = matches!(
                    frame,
                    ServerFrame::Message(ServerMessage::UpdateGameState { .. })
                );
                for msg in client.apply(frame)? {
                    send(conn, codec, msg).await?;
                }
                if is_snapshot {
                    on_render(&client.render()?);
                }
            }

            intent = intents.recv() => {
                let Some(intent) = intent else {
                    tracing::info!(%conn_id, "intent channel closed, disconnecting");
                    conn.close().await?;
                    return Ok(());
                };
                if let Some(msg) = client.emit(intent) {
                    send(conn, codec, msg).await?;
                }
            }
        }
    }
}

async fn send<C, K>(
    conn: &C,
    codec: &K,
    msg: ClientMessage,
) -> Result<(), BallotError>
where
    C: Connection<Error = TransportError>,
    K: Codec,
{
    let kind = msg.kind();
    let bytes = codec.encode(&ClientFrame::Message(msg))?;
    conn.send(&bytes).await?;
    tracing::debug!(conn_id = %conn.id(), kind, "message sent");
    Ok(())
}
