use charla_core::{CodecError, SignalMessage, codec};
use futures::stream::{SplitSink, SplitStream};
use futures::{SinkExt, StreamExt};
use thiserror::Error;
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async};
use tracing::warn;

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("websocket transport error: {0}")]
    Ws(#[from] tokio_tungstenite::tungstenite::Error),

    #[error(transparent)]
    Codec(#[from] CodecError),
}

type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

pub struct SignalSender {
    sink: SplitSink<WsStream, Message>,
}

pub struct SignalReceiver {
    stream: SplitStream<WsStream>,
}

/// Open the persistent signaling connection to the hub. Split so the
/// negotiation machine and chat channel can pump both directions at once.
pub async fn connect(url: &str) -> Result<(SignalSender, SignalReceiver), TransportError> {
    let (ws, _) = connect_async(url).await?;
    let (sink, stream) = ws.split();

    Ok((SignalSender { sink }, SignalReceiver { stream }))
}

impl SignalSender {
    pub async fn send(&mut self, message: &SignalMessage) -> Result<(), TransportError> {
        let frame = codec::encode(message)?;
        self.sink.send(Message::Text(frame.into())).await?;
        Ok(())
    }

    pub async fn close(&mut self) -> Result<(), TransportError> {
        self.sink.close().await?;
        Ok(())
    }
}

impl SignalReceiver {
    /// Next decoded message; `None` once the hub closed the connection.
    /// Malformed inbound frames are logged and skipped, mirroring the
    /// hub's own drop policy.
    pub async fn recv(&mut self) -> Result<Option<SignalMessage>, TransportError> {
        while let Some(msg) = self.stream.next().await {
            match msg? {
                Message::Text(text) => match codec::decode(text.as_str()) {
                    Ok(message) => return Ok(Some(message)),
                    Err(e) => warn!("Skipping malformed frame from hub: {}", e),
                },
                Message::Close(_) => return Ok(None),
                _ => {}
            }
        }

        Ok(None)
    }
}
