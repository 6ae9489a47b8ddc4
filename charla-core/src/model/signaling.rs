use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Opaque session description blob. Produced and consumed by the media
/// channel capability; the relay never looks inside.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionDescription(pub Value);

/// Opaque ICE candidate blob, same opacity rules as [`SessionDescription`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CandidateBlob(pub Value);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IceServerConfig {
    pub urls: Vec<String>,
    pub username: Option<String>,
    pub credential: Option<String>,
}

/// Every message the hub relays. The wire tag is the event name the
/// transport uses (`offer`, `answer`, `ice-candidate`, `mensaje`, `join`);
/// exactly one tag per frame, payload shape fixed by the tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "kebab-case")]
pub enum SignalMessage {
    Offer(SessionDescription),
    Answer(SessionDescription),
    IceCandidate(CandidateBlob),
    #[serde(rename = "mensaje")]
    Chat(String),
    Join {
        room: String,
    },
}
