use async_trait::async_trait;
use charla_core::{CandidateBlob, SessionDescription};
use thiserror::Error;

/// Opaque failure reported by the media subsystem.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct MediaError(pub String);

/// Handle to the external real-time-media subsystem. It creates and applies
/// session descriptions, accepts candidates and carries the audio/video
/// once connected; the negotiation machine only sequences these calls and
/// never interprets the blobs it passes through.
#[async_trait]
pub trait MediaChannel: Send + Sync {
    async fn create_offer(&self) -> Result<SessionDescription, MediaError>;

    async fn create_answer(&self) -> Result<SessionDescription, MediaError>;

    async fn set_local_description(
        &self,
        description: SessionDescription,
    ) -> Result<(), MediaError>;

    async fn set_remote_description(
        &self,
        description: SessionDescription,
    ) -> Result<(), MediaError>;

    async fn add_ice_candidate(&self, candidate: CandidateBlob) -> Result<(), MediaError>;

    async fn close(&self) -> Result<(), MediaError>;
}
