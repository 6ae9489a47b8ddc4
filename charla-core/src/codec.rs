use crate::model::SignalMessage;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodecError {
    /// Unknown tag, or a payload that does not match the tag's shape.
    #[error("malformed signaling frame: {0}")]
    MalformedMessage(#[from] serde_json::Error),
}

/// Serialize a message into a text frame for the transport.
pub fn encode(message: &SignalMessage) -> Result<String, CodecError> {
    Ok(serde_json::to_string(message)?)
}

/// Parse a text frame. Payload contents (SDP validity and the like) are
/// opaque here and left to the media channel capability.
pub fn decode(frame: &str) -> Result<SignalMessage, CodecError> {
    Ok(serde_json::from_str(frame)?)
}
