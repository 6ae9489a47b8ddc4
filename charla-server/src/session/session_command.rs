use charla_core::{ConnId, SignalMessage};
use tokio::sync::mpsc;

/// Commands a session actor accepts from the WebSocket layer.
#[derive(Debug)]
pub enum SessionCommand {
    /// A connection becomes a member; `sender` is its outbound queue.
    Join {
        conn_id: ConnId,
        sender: mpsc::UnboundedSender<SignalMessage>,
    },

    /// Relay a decoded message to every member except the sender.
    Relay {
        from: ConnId,
        message: SignalMessage,
    },

    /// The connection left the session (explicit re-join or disconnect).
    Leave { conn_id: ConnId },
}
