use crate::session::{Session, SessionCommand};
use dashmap::DashMap;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::info;

/// Session every connection lands in on accept. Clients that never send a
/// `join` frame all share it, which reproduces the historical
/// one-implicit-call behavior of the system.
pub const LOBBY: &str = "lobby";

#[derive(Clone)]
pub struct SessionManager {
    sessions: Arc<DashMap<String, mpsc::Sender<SessionCommand>>>,
}

impl SessionManager {
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(DashMap::new()),
        }
    }

    pub fn get_session_sender(&self, name: &str) -> mpsc::Sender<SessionCommand> {
        if let Some(sender) = self.sessions.get(name) {
            return sender.clone();
        }

        info!("Creating new session: {}", name);
        let (tx, rx) = mpsc::channel(100);

        let session = Session::new(name.to_string(), rx);
        tokio::spawn(session.run());

        self.sessions.insert(name.to_string(), tx.clone());
        tx
    }
}

impl Default for SessionManager {
    fn default() -> Self {
        Self::new()
    }
}
