use async_trait::async_trait;
use charla_client::{MediaChannel, MediaError};
use charla_core::{CandidateBlob, SessionDescription};
use serde_json::{Value, json};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Everything the negotiator asked the media channel to do, in call order.
#[derive(Debug, Clone, PartialEq)]
pub enum MediaOp {
    CreateOffer,
    CreateAnswer,
    SetLocal(Value),
    SetRemote(Value),
    AddCandidate(Value),
    Close,
}

/// Media capability mock that records the exact call sequence.
#[derive(Clone)]
pub struct MockMediaChannel {
    ops: Arc<Mutex<Vec<MediaOp>>>,
    fail_on_remote: bool,
}

impl MockMediaChannel {
    pub fn new() -> Self {
        Self {
            ops: Arc::new(Mutex::new(Vec::new())),
            fail_on_remote: false,
        }
    }

    /// Variant whose `set_remote_description` always rejects, emulating a
    /// malformed remote description.
    pub fn rejecting_remote() -> Self {
        Self {
            ops: Arc::new(Mutex::new(Vec::new())),
            fail_on_remote: true,
        }
    }

    pub async fn recorded(&self) -> Vec<MediaOp> {
        self.ops.lock().await.clone()
    }

    pub async fn remote_descriptions(&self) -> Vec<Value> {
        self.recorded()
            .await
            .into_iter()
            .filter_map(|op| match op {
                MediaOp::SetRemote(v) => Some(v),
                _ => None,
            })
            .collect()
    }

    pub async fn candidates_added(&self) -> Vec<Value> {
        self.recorded()
            .await
            .into_iter()
            .filter_map(|op| match op {
                MediaOp::AddCandidate(v) => Some(v),
                _ => None,
            })
            .collect()
    }

    async fn record(&self, op: MediaOp) {
        self.ops.lock().await.push(op);
    }
}

impl Default for MockMediaChannel {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MediaChannel for MockMediaChannel {
    async fn create_offer(&self) -> Result<SessionDescription, MediaError> {
        self.record(MediaOp::CreateOffer).await;
        Ok(SessionDescription(
            json!({"type": "offer", "sdp": "mock-offer"}),
        ))
    }

    async fn create_answer(&self) -> Result<SessionDescription, MediaError> {
        self.record(MediaOp::CreateAnswer).await;
        Ok(SessionDescription(
            json!({"type": "answer", "sdp": "mock-answer"}),
        ))
    }

    async fn set_local_description(
        &self,
        description: SessionDescription,
    ) -> Result<(), MediaError> {
        self.record(MediaOp::SetLocal(description.0)).await;
        Ok(())
    }

    async fn set_remote_description(
        &self,
        description: SessionDescription,
    ) -> Result<(), MediaError> {
        if self.fail_on_remote {
            return Err(MediaError("rejected remote description".into()));
        }
        self.record(MediaOp::SetRemote(description.0)).await;
        Ok(())
    }

    async fn add_ice_candidate(&self, candidate: CandidateBlob) -> Result<(), MediaError> {
        self.record(MediaOp::AddCandidate(candidate.0)).await;
        Ok(())
    }

    async fn close(&self) -> Result<(), MediaError> {
        self.record(MediaOp::Close).await;
        Ok(())
    }
}
