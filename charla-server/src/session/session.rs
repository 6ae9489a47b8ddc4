use crate::session::SessionCommand;
use charla_core::{ConnId, SignalMessage};
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info};

/// One call session. The actor owns the member map, so joins, leaves and
/// broadcast iteration are processed strictly in order and can never
/// interleave.
pub struct Session {
    name: String,
    members: HashMap<ConnId, mpsc::UnboundedSender<SignalMessage>>,
    command_rx: mpsc::Receiver<SessionCommand>,
}

impl Session {
    pub fn new(name: String, command_rx: mpsc::Receiver<SessionCommand>) -> Self {
        Self {
            name,
            members: HashMap::new(),
            command_rx,
        }
    }

    pub async fn run(mut self) {
        info!("Session '{}' started", self.name);

        while let Some(cmd) = self.command_rx.recv().await {
            match cmd {
                SessionCommand::Join { conn_id, sender } => {
                    debug!("Connection {} joined session '{}'", conn_id, self.name);
                    self.members.insert(conn_id, sender);
                }

                SessionCommand::Relay { from, message } => {
                    self.relay(&from, message);
                }

                SessionCommand::Leave { conn_id } => {
                    debug!("Connection {} left session '{}'", conn_id, self.name);
                    self.members.remove(&conn_id);
                }
            }
        }

        info!("Session '{}' finished", self.name);
    }

    /// Broadcast-exclude-self. A send to a connection torn down mid-relay
    /// is not a protocol error; the member is dropped quietly.
    fn relay(&mut self, from: &ConnId, message: SignalMessage) {
        let mut stale = Vec::new();

        for (conn_id, sender) in &self.members {
            if conn_id == from {
                continue;
            }
            if sender.send(message.clone()).is_err() {
                stale.push(conn_id.clone());
            }
        }

        for conn_id in stale {
            self.members.remove(&conn_id);
        }
    }
}
